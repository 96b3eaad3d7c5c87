//! (De)serialization of [`Either`] without a tag.
//!
//! Use this with serde's `with` attribute:
//!
//! ```
//! use either::Either;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, PartialEq, Serialize, Deserialize)]
//! struct Reply
//! {
//!     #[serde(with = "either::untagged")]
//!     value: Either<String, u32>,
//! }
//!
//! let reply = serde_json::from_str::<Reply>(r#"{ "value": 42 }"#).unwrap();
//! assert_eq!(reply.value, Either::right(42));
//! ```
//!
//! The payload is written as-is. When reading, the [`Left`] type is tried first, so if a value
//! would be valid for both sides it becomes a [`Left`].
//!
//! [`Left`]: Either::Left

use {
	crate::Either,
	serde::{Deserialize, Deserializer, Serialize, Serializer},
};

#[derive(Deserialize)]
#[serde(untagged)]
enum Untagged<A, B>
{
	Left(A),
	Right(B),
}

/// Serializes the payload of `value`.
pub fn serialize<A, B, S>(value: &Either<A, B>, serializer: S) -> Result<S::Ok, S::Error>
where
	A: Serialize,
	B: Serialize,
	S: Serializer,
{
	match value {
		Either::Left(left) => left.serialize(serializer),
		Either::Right(right) => right.serialize(serializer),
	}
}

/// Deserializes a payload, trying `A` first and `B` second.
pub fn deserialize<'de, A, B, D>(deserializer: D) -> Result<Either<A, B>, D::Error>
where
	A: Deserialize<'de>,
	B: Deserialize<'de>,
	D: Deserializer<'de>,
{
	Untagged::deserialize(deserializer).map(|untagged| match untagged {
		Untagged::Left(left) => Either::Left(left),
		Untagged::Right(right) => Either::Right(right),
	})
}
