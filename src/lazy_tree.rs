//! The shrink-tree data structure: a rose tree with a root value and a
//! lazy, possibly infinite sequence of child trees.
//!
//! Every operation here is pure. `children` is realized on demand through a
//! thunk; nothing here ever materializes a full shrink tree eagerly, which
//! is what makes `tree`, `list_of`, and `integer_in_range` usable at large
//! sizes.

use std::rc::Rc;

type ChildIter<A> = Box<dyn Iterator<Item = LazyTree<A>>>;
type ChildThunk<A> = Rc<dyn Fn() -> ChildIter<A>>;

/// A lazy rose tree: a root value plus a lazily-realized sequence of child
/// trees, each of which is itself a smaller/simpler valid value.
pub struct LazyTree<A> {
    root: A,
    children: ChildThunk<A>,
}

impl<A> Clone for LazyTree<A>
where
    A: Clone,
{
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
            children: Rc::clone(&self.children),
        }
    }
}

impl<A: core::fmt::Debug> core::fmt::Debug for LazyTree<A> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LazyTree").field("root", &self.root).finish_non_exhaustive()
    }
}

impl<A> LazyTree<A> {
    /// A leaf tree: `root`, no children. Does not shrink.
    pub fn constant(root: A) -> Self
    where
        A: 'static,
    {
        Self::new(root, || Box::new(core::iter::empty()))
    }

    /// A tree with `root` and a lazily-produced child sequence.
    pub fn new<F>(root: A, children: F) -> Self
    where
        F: Fn() -> ChildIter<A> + 'static,
    {
        Self {
            root,
            children: Rc::new(children),
        }
    }

    pub fn root(&self) -> &A {
        &self.root
    }

    pub fn into_root(self) -> A {
        self.root
    }

    /// Realizes the (lazy) child sequence as a fresh iterator.
    pub fn children(&self) -> ChildIter<A> {
        (self.children)()
    }

    /// Applies `f` at the root and, lazily, to every descendant.
    pub fn map<B, F>(self, f: F) -> LazyTree<B>
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> B + Clone + 'static,
    {
        let root = f(self.root);
        let inner = Rc::clone(&self.children);
        LazyTree::new(root, move || {
            let f = f.clone();
            Box::new((inner)().map(move |child| child.map(f.clone())))
        })
    }

    /// Assumes `pred(&self.root)` holds. Drops any child (and its entire
    /// subtree) whose root does not satisfy `pred`; recurses into children
    /// that do.
    pub fn filter<P>(self, pred: P) -> LazyTree<A>
    where
        A: 'static,
        P: Fn(&A) -> bool + Clone + 'static,
    {
        let inner = Rc::clone(&self.children);
        LazyTree::new(self.root, move || {
            let pred_for_test = pred.clone();
            let pred_for_recurse = pred.clone();
            Box::new(
                (inner)()
                    .filter(move |child| pred_for_test(child.root()))
                    .map(move |child| child.filter(pred_for_recurse.clone())),
            )
        })
    }

    /// `f(root)`: `None` means the root itself is rejected, so the whole tree
    /// vanishes. `Some(b)` keeps `b` as the new root and keeps only the
    /// children whose own `map_filter` also succeeds (their rejected
    /// descendants are simply dropped, not recursed past).
    pub fn map_filter<B, F>(self, f: F) -> Option<LazyTree<B>>
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> Option<B> + Clone + 'static,
    {
        let root = f(self.root)?;
        let inner = Rc::clone(&self.children);
        Some(LazyTree::new(root, move || {
            let f = f.clone();
            Box::new((inner)().filter_map(move |child| child.map_filter(f.clone())))
        }))
    }
}

impl<A: Clone + 'static> LazyTree<A> {
    /// Flattens a tree-of-trees: the monadic join for rose trees.
    ///
    /// The result's root is the *inner* tree's root. Its children are, in
    /// order, (a) the inner tree's own children, followed by (b) the outer
    /// tree's children, each flattened in turn. This "inner-first" order is
    /// what [`crate::bind`] relies on to shrink the inner value before the
    /// outer one is ever touched.
    pub fn flatten(self) -> A::Flattened
    where
        A: Flattenable,
    {
        A::flatten_tree(self)
    }
}

/// Implemented for `LazyTree<LazyTree<A>>` so that [`LazyTree::flatten`] can
/// be written without naming the nested type twice at the call site.
pub trait Flattenable {
    type Flattened;
    fn flatten_tree(tree: LazyTree<Self>) -> Self::Flattened
    where
        Self: Sized;
}

impl<A: Clone + 'static> Flattenable for LazyTree<A> {
    type Flattened = LazyTree<A>;

    fn flatten_tree(outer: LazyTree<LazyTree<A>>) -> LazyTree<A> {
        let inner = outer.root().clone();
        let root = inner.root().clone();
        // Both child lists are forced one level deep so the thunk below can
        // be re-invoked; the elements themselves (each a `LazyTree`) stay
        // lazy in turn, so no recursive structure is forced.
        let outer_children: Vec<LazyTree<LazyTree<A>>> = outer.children().collect();
        let inner_children: Vec<LazyTree<A>> = inner.children().collect();
        LazyTree::new(root, move || {
            let flattened_outer = outer_children
                .clone()
                .into_iter()
                .map(|child| LazyTree::flatten(child));
            Box::new(inner_children.clone().into_iter().chain(flattened_outer))
        })
    }
}

/// Combines a list of trees into one tree of lists.
///
/// The root is the list of roots. Children shrink exactly one position at a
/// time: for each index `i` and each child `c` of `trees[i]`, a child
/// `zip(trees[:i] ++ [c] ++ trees[i+1:])` is yielded. The children sequence
/// stays lazy and flat.
pub fn zip<A: Clone + 'static>(trees: Vec<LazyTree<A>>) -> LazyTree<Vec<A>> {
    let root: Vec<A> = trees.iter().map(|tree| tree.root().clone()).collect();
    let len = trees.len();
    LazyTree::new(root, move || {
        let trees = trees.clone();
        let iter = (0..len).flat_map(move |index| {
            let base = trees.clone();
            let children: Vec<LazyTree<A>> = trees[index].children().collect();
            children.into_iter().map(move |child| {
                let mut next = base.clone();
                next[index] = child;
                zip(next)
            })
        });
        Box::new(iter)
    })
}
