//! Small shared helpers used only by this crate's own `#[cfg(test)]`
//! modules: generators and assertions exercised across primitives and
//! combinators alike.

#![cfg(test)]

use crate::generator::Generator;
use crate::lazy_tree::LazyTree;
use crate::random::Seed;
use crate::run::run;

/// Invariant 1: running the same generator with the same seed and size
/// twice must yield the same root, for every seed in `0..count`.
pub fn assert_deterministic<A>(generator: &Generator<A>, size: usize, count: u64)
where
    A: PartialEq + core::fmt::Debug + 'static,
{
    for seed in 0..count {
        let first = run(generator, Seed::new(seed), size).unwrap().into_root();
        let second = run(generator, Seed::new(seed), size).unwrap().into_root();
        assert_eq!(first, second, "seed {seed} was not deterministic");
    }
}

/// Invariant 3: every descendant root of `tree`, checked recursively, must
/// satisfy `valid`. Bounded to avoid walking a conceptually-infinite tree.
pub fn assert_all_descendants<A>(tree: LazyTree<A>, valid: impl Fn(&A) -> bool, budget: usize) {
    let mut stack = vec![tree];
    let mut visited = 0;
    while let Some(node) = stack.pop() {
        assert!(valid(node.root()), "an invalid descendant root was produced");
        visited += 1;
        if visited >= budget {
            break;
        }
        stack.extend(node.children());
    }
}
