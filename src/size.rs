//! Size-mapping combinators: `resize`, `sized`, `scale`, `no_shrink`.

use crate::generator::Generator;
use crate::lazy_tree::LazyTree;
use crate::state::State;

/// Invokes `g` with `size` regardless of the outer size.
pub fn resize<A>(g: Generator<A>, size: usize) -> Generator<A>
where
    A: 'static,
{
    Generator::new(move |state: State| g.generate(state.with_size(size)))
}

/// Builds a generator whose behavior depends on the current size: `f(size)`
/// chooses the generator to run, which is then invoked at that same size.
pub fn sized<A, F>(f: F) -> Generator<A>
where
    A: 'static,
    F: Fn(usize) -> Generator<A> + Send + Sync + 'static,
{
    Generator::new(move |state: State| f(state.size).generate(state))
}

/// `sized(s -> resize(g, h(s)))`: reshapes the size passed to `g` through
/// `h`, rather than replacing it with a constant.
///
/// If `h` returns a negative number it is clamped to `0` rather than
/// propagated as an error.
pub fn scale<A, H>(g: Generator<A>, h: H) -> Generator<A>
where
    A: 'static,
    H: Fn(usize) -> i64 + Send + Sync + 'static,
{
    sized(move |size| {
        let scaled = h(size).max(0) as usize;
        resize(g.clone(), scaled)
    })
}

/// Retains only the root of `g`'s tree. The resulting generator never
/// shrinks.
pub fn no_shrink<A>(g: Generator<A>) -> Generator<A>
where
    A: Clone + 'static,
{
    Generator::new(move |state: State| {
        let root = g.generate(state)?.into_root();
        Ok(LazyTree::constant(root))
    })
}
