//! `frequency` and `one_of`: weighted and uniform choice among generators
//! of the same type.

use crate::bind::bind;
use crate::generator::Generator;

/// A positive relative weight paired with a generator, as passed to
/// [`frequency`]. Validated eagerly at construction so a malformed weight is
/// a panic, not a runtime error.
#[derive(Clone)]
pub struct Weighted<A> {
    weight: u64,
    generator: Generator<A>,
}

impl<A> Weighted<A> {
    /// # Panics
    /// Panics if `weight` is `0`: a zero-weight branch can never be
    /// selected and is a programmer error, not something to silently drop.
    pub fn new(weight: u64, generator: Generator<A>) -> Self {
        assert!(weight > 0, "frequency: weight must be positive, got 0");
        Self { weight, generator }
    }
}

/// Picks one of `choices` with probability proportional to its weight.
///
/// Implemented as `bind(integer_in_range(0, total_weight - 1), pick)`.
/// Because [`bind`]'s own shrink order shrinks the inner value before the
/// outer choice, `frequency` shrinks the chosen generator's value first and
/// only then (via the index's own integer-shrink) walks the index toward
/// earlier, lower-weighted entries.
///
/// # Panics
/// Panics if `choices` is empty.
pub fn frequency<A>(choices: Vec<Weighted<A>>) -> Generator<A>
where
    A: Clone + Send + Sync + 'static,
{
    assert!(!choices.is_empty(), "frequency: choices must not be empty");
    let total: u64 = choices.iter().map(|w| w.weight).sum();
    assert!(total > 0, "frequency: total weight must be positive");
    let last = total - 1;
    bind(crate::primitive::integer_in_range(0..=last as i64), move |n| {
        let mut remaining = n as u64;
        for choice in &choices {
            if remaining < choice.weight {
                return choice.generator.clone();
            }
            remaining -= choice.weight;
        }
        unreachable!("n is drawn from 0..total_weight, so some choice always matches");
    })
}

/// Picks uniformly among `choices`: `frequency` with all weights equal.
///
/// # Panics
/// Panics if `choices` is empty.
pub fn one_of<A>(choices: Vec<Generator<A>>) -> Generator<A>
where
    A: Clone + Send + Sync + 'static,
{
    assert!(!choices.is_empty(), "one_of: choices must not be empty");
    let last = (choices.len() - 1) as i64;
    bind(crate::primitive::integer_in_range(0..=last), move |i| {
        choices[i as usize].clone()
    })
}
