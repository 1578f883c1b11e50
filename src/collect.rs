use crate::error::{Error, Result};
use crate::generator::Generator;
use crate::lazy_tree::{zip, LazyTree};
use crate::state::State;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// Splits the seed once per element, then `zip`s the resulting trees. Never
/// loses an element while shrinking.
pub fn fixed_list<A>(generators: Vec<Generator<A>>) -> Generator<Vec<A>>
where
    A: Clone + Send + Sync + 'static,
{
    Generator::new(move |state: State| {
        let mut trees = Vec::with_capacity(generators.len());
        let mut current = state;
        for generator in &generators {
            let (this, next) = current.split();
            current = next;
            trees.push(generator.generate(this)?);
        }
        Ok(zip(trees))
    })
}

/// Same discipline as [`zip`], generalized to two possibly different types:
/// shrinks exactly one side at a time.
fn zip2<A, B>(ta: LazyTree<A>, tb: LazyTree<B>) -> LazyTree<(A, B)>
where
    A: Clone + 'static,
    B: Clone + 'static,
{
    let root = (ta.root().clone(), tb.root().clone());
    LazyTree::new(root, move || {
        let tb_for_left = tb.clone();
        let left = ta.children().map(move |ca| zip2(ca, tb_for_left.clone()));
        let ta_for_right = ta.clone();
        let right = tb.children().map(move |cb| zip2(ta_for_right.clone(), cb));
        Box::new(left.chain(right))
    })
}

/// Implemented for tuples of arity 2 through 5; add a wider arity here the
/// same way if a caller ever needs one.
pub trait TupleGenerators {
    type Output;
    fn into_tuple_generator(self) -> Generator<Self::Output>;
}

pub fn tuple<T: TupleGenerators>(generators: T) -> Generator<T::Output> {
    generators.into_tuple_generator()
}

impl<A, B> TupleGenerators for (Generator<A>, Generator<B>)
where
    A: Clone + Send + Sync + 'static,
    B: Clone + Send + Sync + 'static,
{
    type Output = (A, B);

    fn into_tuple_generator(self) -> Generator<Self::Output> {
        let (ga, gb) = self;
        Generator::new(move |state: State| {
            let (sa, sb) = state.split();
            let ta = ga.generate(sa)?;
            let tb = gb.generate(sb)?;
            Ok(zip2(ta, tb))
        })
    }
}

impl<A, B, C> TupleGenerators for (Generator<A>, Generator<B>, Generator<C>)
where
    A: Clone + Send + Sync + 'static,
    B: Clone + Send + Sync + 'static,
    C: Clone + Send + Sync + 'static,
{
    type Output = (A, B, C);

    fn into_tuple_generator(self) -> Generator<Self::Output> {
        let (ga, gb, gc) = self;
        Generator::new(move |state: State| {
            let (sa, rest) = state.split();
            let (sb, sc) = rest.split();
            let ta = ga.generate(sa)?;
            let tb = gb.generate(sb)?;
            let tc = gc.generate(sc)?;
            Ok(zip2(zip2(ta, tb), tc).map(|((a, b), c)| (a, b, c)))
        })
    }
}

impl<A, B, C, D> TupleGenerators for (Generator<A>, Generator<B>, Generator<C>, Generator<D>)
where
    A: Clone + Send + Sync + 'static,
    B: Clone + Send + Sync + 'static,
    C: Clone + Send + Sync + 'static,
    D: Clone + Send + Sync + 'static,
{
    type Output = (A, B, C, D);

    fn into_tuple_generator(self) -> Generator<Self::Output> {
        let (ga, gb, gc, gd) = self;
        Generator::new(move |state: State| {
            let (sa, rest) = state.split();
            let (sb, rest) = rest.split();
            let (sc, sd) = rest.split();
            let ta = ga.generate(sa)?;
            let tb = gb.generate(sb)?;
            let tc = gc.generate(sc)?;
            let td = gd.generate(sd)?;
            Ok(zip2(zip2(zip2(ta, tb), tc), td).map(|(((a, b), c), d)| (a, b, c, d)))
        })
    }
}

impl<A, B, C, D, E> TupleGenerators
    for (Generator<A>, Generator<B>, Generator<C>, Generator<D>, Generator<E>)
where
    A: Clone + Send + Sync + 'static,
    B: Clone + Send + Sync + 'static,
    C: Clone + Send + Sync + 'static,
    D: Clone + Send + Sync + 'static,
    E: Clone + Send + Sync + 'static,
{
    type Output = (A, B, C, D, E);

    fn into_tuple_generator(self) -> Generator<Self::Output> {
        let (ga, gb, gc, gd, ge) = self;
        Generator::new(move |state: State| {
            let (sa, rest) = state.split();
            let (sb, rest) = rest.split();
            let (sc, rest) = rest.split();
            let (sd, se) = rest.split();
            let ta = ga.generate(sa)?;
            let tb = gb.generate(sb)?;
            let tc = gc.generate(sc)?;
            let td = gd.generate(sd)?;
            let te = ge.generate(se)?;
            Ok(zip2(zip2(zip2(zip2(ta, tb), tc), td), te)
                .map(|((((a, b), c), d), e)| (a, b, c, d, e)))
        })
    }
}

/// Draws a length uniformly from `0..=size` (one split), generates that
/// many trees (one split per element), `zip`s them, then overlays
/// element-deletion shrinking on top of the per-element shrinking `zip`
/// already provides.
pub fn list_of<A>(g: Generator<A>) -> Generator<Vec<A>>
where
    A: Clone + Send + Sync + 'static,
{
    Generator::new(move |state: State| {
        let (len_state, mut current) = state.split();
        let len = len_state.random().uniform_usize(0..=state.size);
        let mut trees = Vec::with_capacity(len);
        for _ in 0..len {
            let (this, next) = current.split();
            current = next;
            trees.push(g.generate(this)?);
        }
        Ok(shrink_by_deletion_too(zip(trees)))
    })
}

/// Has root `items`; one child per deletion index, each child being the
/// same tree built from `items` with that index removed. Laziness is
/// essential: with a large list this is an enormous (but never fully
/// realized) tree.
fn list_shrink_tree<A>(items: Vec<A>) -> LazyTree<Vec<A>>
where
    A: Clone + 'static,
{
    LazyTree::new(items.clone(), move || {
        let items = items.clone();
        let len = items.len();
        Box::new((0..len).map(move |index| {
            let mut next = items.clone();
            next.remove(index);
            list_shrink_tree(next)
        }))
    })
}

/// Overlays [`list_shrink_tree`]'s element-deletion shrinks on top of an
/// existing per-element `zip` tree: deletions are tried before element-value
/// shrinks.
fn shrink_by_deletion_too<A>(elements: LazyTree<Vec<A>>) -> LazyTree<Vec<A>>
where
    A: Clone + 'static,
{
    LazyTree::flatten(elements.map(list_shrink_tree))
}

fn all_unique<A, K, F>(items: &[A], key: &F) -> bool
where
    K: Eq + Hash,
    F: Fn(&A) -> K,
{
    let mut seen = HashSet::new();
    items.iter().all(|item| seen.insert(key(item)))
}

/// Like [`list_of`], but every drawn element's `key` must be distinct from
/// every other element's. Re-draws on a duplicate key, up to `max_tries`
/// consecutive failures before raising [`Error::TooManyDuplicates`].
///
/// After `zip`, the tree is filtered so a value-shrink that would reintroduce
/// a duplicate key is dropped, and the element-deletion overlay (which can
/// never introduce a duplicate) is applied on top; both keep every
/// descendant list duplicate-free.
pub fn uniq_list_of<A, K, F>(g: Generator<A>, key: F, max_tries: usize) -> Generator<Vec<A>>
where
    A: Clone + Send + Sync + 'static,
    K: Eq + Hash + Send + Sync + 'static,
    F: Fn(&A) -> K + Clone + Send + Sync + 'static,
{
    Generator::new(move |state: State| {
        let (len_state, mut current) = state.split();
        let len = len_state.random().uniform_usize(0..=state.size);
        let mut trees: Vec<LazyTree<A>> = Vec::with_capacity(len);
        let mut seen: HashSet<K> = HashSet::new();
        let mut fails = 0usize;
        while trees.len() < len {
            let (this, next) = current.split();
            current = next;
            let tree = g.generate(this)?;
            if seen.insert(key(tree.root())) {
                trees.push(tree);
                fails = 0;
            } else {
                fails += 1;
                if fails >= max_tries {
                    return Err(Error::TooManyDuplicates {
                        max_tries,
                        remaining: len - trees.len(),
                        generated: trees.len(),
                    });
                }
            }
        }
        let key_for_filter = key.clone();
        let unique_only = zip(trees).filter(move |items| all_unique(items, &key_for_filter));
        Ok(shrink_by_deletion_too(unique_only))
    })
}

pub fn map_of<K, V>(
    kg: Generator<K>,
    vg: Generator<V>,
    max_tries: usize,
) -> Generator<HashMap<K, V>>
where
    K: Clone + Eq + Hash + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    let pairs = uniq_list_of(tuple((kg, vg)), |pair: &(K, V)| pair.0.clone(), max_tries);
    crate::map::map(pairs, |pairs| pairs.into_iter().collect())
}

pub fn fixed_map<K, V>(entries: Vec<(K, Generator<V>)>) -> Generator<HashMap<K, V>>
where
    K: Clone + Eq + Hash + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    let generators: Vec<Generator<(K, V)>> = entries
        .into_iter()
        .map(|(key, vg)| tuple((crate::primitive::constant(key), vg)))
        .collect();
    crate::map::map(fixed_list(generators), |pairs| pairs.into_iter().collect())
}

pub fn non_empty<A>(g: Generator<Vec<A>>) -> Generator<Vec<A>>
where
    A: Clone + Send + Sync + 'static,
{
    crate::filter::filter(g, |items: &Vec<A>| !items.is_empty())
}
