//! [`Generator`], the top-level value type of the combinator algebra.

use crate::error::Result;
use crate::lazy_tree::LazyTree;
use crate::state::State;
use std::sync::Arc;

/// A pure function `(seed, size) -> LazyTree<A>`, wrapped so it can be
/// freely cloned and composed.
///
/// Two `Generator`s built from the same underlying function are
/// observationally identical; a `Generator` holds no state between calls and
/// may safely be invoked from multiple threads at once provided each call
/// uses its own [`State`].
///
/// `generate` returns a [`Result`] rather than a bare [`LazyTree`] because a
/// handful of combinators ([`crate::filter`], [`crate::bind_filter`],
/// [`crate::uniq_list_of`]) can only discover at generation time, after
/// drawing from the seed, that they cannot satisfy their contract.
/// Everything else always succeeds and validates its arguments eagerly at
/// construction time instead.
#[derive(Clone)]
pub struct Generator<A> {
    run: Arc<dyn Fn(State) -> Result<LazyTree<A>> + Send + Sync>,
}

impl<A> Generator<A> {
    /// Builds a generator from its underlying `(seed, size) -> LazyTree<A>`
    /// function.
    pub fn new<F>(run: F) -> Self
    where
        F: Fn(State) -> Result<LazyTree<A>> + Send + Sync + 'static,
    {
        Self { run: Arc::new(run) }
    }

    /// Invokes the generator, producing a shrink tree whose root is the
    /// generated value.
    pub fn generate(&self, state: State) -> Result<LazyTree<A>> {
        (self.run)(state)
    }
}

/// Fluent builder methods, one per combinator that takes a single generator
/// as its first argument. Each simply forwards to the free function of the
/// same name, kept as methods because that is how the combinator algebra
/// reads most naturally at a call site (`g.map(f).filter(p)` rather than
/// `filter(map(g, f), p)`).
impl<A: 'static> Generator<A> {
    pub fn map<B, F>(self, f: F) -> Generator<B>
    where
        B: Send + Sync + 'static,
        F: Fn(A) -> B + Clone + Send + Sync + 'static,
    {
        crate::map::map(self, f)
    }

    pub fn bind<B, K>(self, k: K) -> Generator<B>
    where
        A: Clone,
        B: Clone + Send + Sync + 'static,
        K: Fn(A) -> Generator<B> + Clone + Send + Sync + 'static,
    {
        crate::bind::bind(self, k)
    }

    pub fn filter<P>(self, pred: P) -> Generator<A>
    where
        A: Clone + Send + Sync,
        P: Fn(&A) -> bool + Clone + Send + Sync + 'static,
    {
        crate::filter::filter(self, pred)
    }

    pub fn resize(self, size: usize) -> Generator<A> {
        crate::size::resize(self, size)
    }

    pub fn scale<H>(self, h: H) -> Generator<A>
    where
        H: Fn(usize) -> i64 + Send + Sync + 'static,
    {
        crate::size::scale(self, h)
    }

    pub fn no_shrink(self) -> Generator<A>
    where
        A: Clone,
    {
        crate::size::no_shrink(self)
    }
}
