use crate::error::{Error, Result};
use crate::generator::Generator;
use crate::state::State;

pub const DEFAULT_MAX_CONSECUTIVE_FAILURES: usize = 10;

/// Rejection-samples at the root: if `pred` fails on
/// `max_consecutive_failures` freshly generated roots in a row, raises
/// [`Error::FilterTooNarrow`]. Once a root passes, every descendant of the
/// returned tree is filtered too, so it also satisfies `pred`.
pub fn filter<A, P>(g: Generator<A>, pred: P) -> Generator<A>
where
    A: Clone + Send + Sync + 'static,
    P: Fn(&A) -> bool + Clone + Send + Sync + 'static,
{
    filter_with(g, pred, DEFAULT_MAX_CONSECUTIVE_FAILURES)
}

pub fn filter_with<A, P>(g: Generator<A>, pred: P, max_consecutive_failures: usize) -> Generator<A>
where
    A: Clone + Send + Sync + 'static,
    P: Fn(&A) -> bool + Clone + Send + Sync + 'static,
{
    Generator::new(move |state: State| {
        filter_once(&g, &pred, max_consecutive_failures, max_consecutive_failures, state)
    })
}

fn filter_once<A, P>(
    g: &Generator<A>,
    pred: &P,
    max_consecutive_failures: usize,
    tries_left: usize,
    state: State,
) -> Result<crate::lazy_tree::LazyTree<A>>
where
    A: Clone + Send + Sync + 'static,
    P: Fn(&A) -> bool + Clone + Send + Sync + 'static,
{
    let (this, next) = state.split();
    let tree = g.generate(this)?;
    if pred(tree.root()) {
        let pred = pred.clone();
        Ok(tree.filter(move |a| pred(a)))
    } else if tries_left == 0 {
        Err(Error::FilterTooNarrow {
            max_consecutive_failures,
        })
    } else {
        filter_once(g, pred, max_consecutive_failures, tries_left - 1, next)
    }
}
