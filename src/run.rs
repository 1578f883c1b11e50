//! A single generator invocation. Everything that repeatedly calls a
//! generator with growing size (the streaming adapter) or walks the
//! resulting tree looking for a smaller failing value (the shrink driver)
//! is an external collaborator and lives outside this crate.

use crate::error::Result;
use crate::generator::Generator;
use crate::lazy_tree::LazyTree;
use crate::random::Seed;
use crate::state::State;

/// Runs `generator` once with the given `seed` and `size`.
///
/// The returned tree's root is "the generated value"; its children are the
/// entry point for a shrink search, should the caller need one.
pub fn run<A>(generator: &Generator<A>, seed: Seed, size: usize) -> Result<LazyTree<A>> {
    generator.generate(State::new(seed, size))
}

/// Convenience extension for one-shot sampling, discarding the shrink tree.
pub trait Sample {
    type Item;

    /// Generates a single value, throwing away its shrink tree.
    fn sample(&self, seed: Seed, size: usize) -> Result<Self::Item>;
}

impl<A> Sample for Generator<A> {
    type Item = A;

    fn sample(&self, seed: Seed, size: usize) -> Result<A> {
        Ok(run(self, seed, size)?.into_root())
    }
}
