//! The recursive `tree` combinator: builds values of self-similar shape
//! (lists of lists, trees of trees, nested JSON, …) while keeping expected
//! recursion depth logarithmic in `size`.

use crate::frequency::{frequency, Weighted};
use crate::generator::Generator;
use crate::random::Random;
use crate::size::resize;
use crate::state::State;

/// Builds a recursive generator from a `leaf_data` base case and a
/// `subtree_fun` that, given "the generator so far", builds one more level
/// of recursive structure around it (e.g. `list_of`, or a constructor
/// wrapping a `Vec` of sub-generators into a node type).
///
/// Computes `k = floor(size^1.1)`, a random pseudo-factorization of `k`
/// into levels `[n1, n2, …]`, then folds: starting from `leaf_data`, each
/// level replaces the current generator `g` with `frequency([(1, g), (2,
/// resize(subtree_fun(g), n))])`, always admitting the leaf case and biased
/// two-to-one toward recursing one level deeper. The final folded generator
/// is what actually runs; no generation happens during the fold itself.
pub fn tree<A, F>(subtree_fun: F, leaf_data: Generator<A>) -> Generator<A>
where
    A: Clone + Send + Sync + 'static,
    F: Fn(Generator<A>) -> Generator<A> + Clone + Send + Sync + 'static,
{
    Generator::new(move |state: State| {
        let (factor_state, value_state) = state.split();
        let mut random = factor_state.random();
        let k = pseudo_size(state.size);
        let levels = factorize(k, &mut random);
        let mut generator = leaf_data.clone();
        for n in levels {
            let leaf = generator.clone();
            let recurse = resize(subtree_fun(leaf.clone()), n as usize);
            generator = frequency(vec![Weighted::new(1, leaf), Weighted::new(2, recurse)]);
        }
        generator.generate(value_state)
    })
}

fn pseudo_size(size: usize) -> u64 {
    (size as f64).powf(1.1).floor().max(0.0) as u64
}

/// `⌊log2(k)⌋`, floored at `1` so `1..=log2_k` is never an empty range.
fn integer_log2_at_least_one(k: u64) -> u64 {
    if k < 2 {
        1
    } else {
        (63 - k.leading_zeros() as u64).max(1)
    }
}

/// Repeatedly divides `k` by a random factor in `1..=⌊log2 k⌋` until the
/// remainder is below `2`, recording each factor drawn. Bounded at 64
/// iterations regardless of what is drawn, so a long run of unlucky
/// `factor == 1` draws cannot unbound the recursion `tree` builds on top of
/// this.
fn factorize(mut k: u64, random: &mut Random) -> Vec<u64> {
    let mut levels = Vec::new();
    let mut guard = 0;
    while k >= 2 && guard < 64 {
        guard += 1;
        let max_factor = integer_log2_at_least_one(k);
        let factor = random.uniform_u64(1..=max_factor);
        levels.push(factor);
        k = if factor >= 2 { k / factor } else { k / 2 };
    }
    levels
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collect::list_of;
    use crate::primitive::integer;
    use crate::random::Seed;
    use crate::run::run;

    fn depth(value: &TestTree) -> usize {
        match value {
            TestTree::Leaf(_) => 0,
            TestTree::Node(children) => 1 + children.iter().map(depth).max().unwrap_or(0),
        }
    }

    #[derive(Clone, Debug)]
    enum TestTree {
        Leaf(i64),
        Node(Vec<TestTree>),
    }

    fn tree_generator() -> Generator<TestTree> {
        tree(
            |sub| crate::map::map(list_of(sub), TestTree::Node),
            crate::map::map(integer(), TestTree::Leaf),
        )
    }

    #[test]
    fn factorize_always_terminates() {
        let mut random = Random::new(Seed::new(1));
        for k in [0u64, 1, 2, 3, 7, 1000, 1_000_000] {
            let levels = factorize(k, &mut random);
            assert!(levels.len() < 64);
        }
    }

    #[test]
    fn s5_tree_has_finite_bounded_depth() {
        let generator = tree_generator();
        for seed in 0..32u64 {
            let tree_value = run(&generator, Seed::new(seed), 10).unwrap().into_root();
            // log2(floor(10^1.1)) bounds the number of fold levels; depth is
            // at most that many levels, generously padded here.
            assert!(depth(&tree_value) <= 20, "depth too large for size 10");
        }
    }

    #[test]
    fn tree_always_admits_the_leaf_case() {
        // At size 0, k = floor(0^1.1) = 0, so factorize never loops and the
        // leaf generator alone is what runs.
        let generator = tree_generator();
        let tree_value = run(&generator, Seed::new(1), 0).unwrap().into_root();
        assert_eq!(depth(&tree_value), 0);
    }
}
