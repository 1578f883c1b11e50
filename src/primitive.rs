use crate::error::Error;
use crate::generator::Generator;
use crate::lazy_tree::LazyTree;
use crate::state::State;
use core::ops::RangeInclusive;

pub fn constant<A>(value: A) -> Generator<A>
where
    A: Clone + Send + Sync + 'static,
{
    Generator::new(move |_state: State| Ok(LazyTree::constant(value.clone())))
}

/// Shrinks toward the value of smallest absolute magnitude still inside the
/// range: the children of a root `n` are `n - floor(n / 2^k)` for `k = 1, 2,
/// …` while that quotient is nonzero, each expanded by the same rule and
/// filtered back into `lo..=hi`. Ignores `size`.
///
/// # Panics
/// Panics if `lo > hi`.
pub fn integer_in_range(range: RangeInclusive<i64>) -> Generator<i64> {
    let lo = *range.start();
    let hi = *range.end();
    assert!(lo <= hi, "integer_in_range: empty range {lo}..={hi}");
    Generator::new(move |state: State| {
        let mut random = state.random();
        let n = random.uniform_i64(lo..=hi);
        Ok(integer_tree(n, lo, hi))
    })
}

fn integer_tree(n: i64, lo: i64, hi: i64) -> LazyTree<i64> {
    LazyTree::new(n, move || {
        let target = lo.max(0).min(hi);
        let mut candidates = Vec::new();
        if n != target {
            candidates.push(target);
        }
        let mut k: u32 = 1;
        // `1i128 << k` never overflows for k below 127; the loop always
        // exits long before that once the quotient reaches zero.
        loop {
            let shift = ((n as i128) / (1i128 << k)) as i64;
            if shift == 0 {
                break;
            }
            let candidate = n - shift;
            if candidate != target {
                candidates.push(candidate);
            }
            k += 1;
        }
        Box::new(
            candidates
                .into_iter()
                .filter(move |candidate| *candidate >= lo && *candidate <= hi)
                .map(move |candidate| integer_tree(candidate, lo, hi)),
        )
    })
}

pub fn integer() -> Generator<i64> {
    crate::size::sized(|size| integer_in_range(-(size as i64)..=(size as i64)))
}

pub fn uniform_float() -> Generator<f64> {
    Generator::new(|state: State| {
        let mut random = state.random();
        Ok(LazyTree::constant(random.uniform_float()))
    })
}

pub fn byte() -> Generator<u8> {
    crate::size::no_shrink(integer_in_range(0..=255).map(|n| n as u8))
}

pub fn boolean() -> Generator<bool> {
    member_of(&[false, true])
}

/// Shrinks toward `items[0]`: the index into `items` shrinks like
/// [`integer_in_range`] toward `0`.
///
/// # Panics
/// Panics if `items` is empty.
pub fn member_of<A>(items: &[A]) -> Generator<A>
where
    A: Clone + Send + Sync + 'static,
{
    assert!(!items.is_empty(), "{}", Error::EmptyEnumerable);
    let items = items.to_vec();
    let last = (items.len() - 1) as i64;
    crate::bind::bind(integer_in_range(0..=last), move |index| {
        crate::primitive::constant(items[index as usize].clone())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::Seed;
    use crate::run::run;

    #[test]
    fn integer_in_range_root_is_in_range() {
        let generator = integer_in_range(4..=8);
        for seed in 0..64u64 {
            let tree = run(&generator, Seed::new(seed), 0).unwrap();
            assert!((4..=8).contains(tree.root()));
        }
    }

    #[test]
    fn integer_in_range_shrinks_to_four() {
        // S1: a path from the root terminates at the smallest in-range value.
        let generator = integer_in_range(4..=8);
        let tree = run(&generator, Seed::new(1), 0).unwrap();
        let mut current = tree;
        let mut reached_four = *current.root() == 4;
        while !reached_four {
            match current.children().next() {
                Some(child) => {
                    current = child;
                    reached_four = *current.root() == 4;
                }
                None => break,
            }
        }
        assert!(reached_four, "no path reached 4");
    }

    #[test]
    fn integer_in_range_descendants_stay_in_range() {
        let generator = integer_in_range(-20..=30);
        let tree = run(&generator, Seed::new(5), 0).unwrap();
        let mut stack = vec![tree];
        let mut visited = 0;
        while let Some(node) = stack.pop() {
            assert!((-20..=30).contains(node.root()));
            visited += 1;
            if visited > 500 {
                break;
            }
            stack.extend(node.children());
        }
    }

    #[test]
    #[should_panic(expected = "empty range")]
    fn integer_in_range_rejects_empty_range() {
        integer_in_range(8..=4);
    }

    #[test]
    fn integer_shrinks_toward_zero() {
        let generator = integer();
        let tree = run(&generator, Seed::new(3), 50).unwrap();
        if *tree.root() != 0 {
            assert!(tree.children().count() > 0);
        }
    }

    #[test]
    fn uniform_float_is_unit_interval_and_unshrinkable() {
        let generator = uniform_float();
        let tree = run(&generator, Seed::new(2), 0).unwrap();
        assert!((0.0..1.0).contains(tree.root()));
        assert_eq!(tree.children().count(), 0);
    }

    #[test]
    fn byte_does_not_shrink() {
        let generator = byte();
        let tree = run(&generator, Seed::new(11), 0).unwrap();
        assert_eq!(tree.children().count(), 0);
    }

    #[test]
    fn boolean_shrinks_toward_false() {
        let generator = boolean();
        for seed in 0..32u64 {
            let tree = run(&generator, Seed::new(seed), 0).unwrap();
            if *tree.root() {
                let shrunk: Vec<bool> = tree.children().map(|t| *t.root()).collect();
                assert!(shrunk.contains(&false));
            }
        }
    }

    #[test]
    #[should_panic(expected = "empty enumerable")]
    fn member_of_rejects_empty_slice() {
        let empty: &[i32] = &[];
        member_of(empty);
    }
}
