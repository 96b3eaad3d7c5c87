use {
	crate::Either,
	rand::{
		Rng,
		distr::{Distribution, StandardUniform},
	},
};

/// Picks a side with a fair coin flip, then samples the payload for that side.
impl<A, B> Distribution<Either<A, B>> for StandardUniform
where
	StandardUniform: Distribution<A> + Distribution<B>,
{
	fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Either<A, B>
	{
		if rng.random::<bool>() {
			Either::Left(<Self as Distribution<A>>::sample(self, rng))
		} else {
			Either::Right(<Self as Distribution<B>>::sample(self, rng))
		}
	}
}
