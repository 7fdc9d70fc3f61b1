use std::marker::PhantomData;
use std::rc::Rc;

use log::trace;
use stdext::function_name;

use crate::diagnostics::{Tracing, TracingConfig};

use super::tree::{BranchNode, DualTree, LeafNode};

/**
Traverses a `DualTree` and transforms every *stored* upward annotation (the
value in each leaf and the raw cached value in each branch, where present)
by applying a function, `f`, to it.  The topology of the tree, the leaf
data, the branch data, and the downward annotations are all preserved; only
upward annotation data is transformed, and the result may be at a new type.

Correctness precondition (the caller's responsibility, unchecked): `f` must
be a monoid homomorphism on the upward type and must commute with every
reachable downward action, `f(d.act(&u)) == d.act(&f(&u))`.  A function
that violates this silently produces a tree whose caches are inconsistent
with its leaves.

Each instance of a construct is given a name so that diagnostic data
emitted while it runs can be attributed to the operation that produced it.
*/
pub struct MapUp<U, U2, F>
where
    F: FnMut(&U) -> U2,
{
    pub name: String,
    f: F,
    tracing: TracingConfig,
    ph: PhantomData<U>,
    ph2: PhantomData<U2>,
}

impl<U, U2, F> MapUp<U, U2, F>
where
    F: FnMut(&U) -> U2,
{
    pub fn new(name: &str, f: F) -> MapUp<U, U2, F> {
        MapUp {
            name: name.into(),
            f,
            tracing: TracingConfig::Off,
            ph: PhantomData,
            ph2: PhantomData,
        }
    }

    /**
    Applies the transformation function given to the constructor to every
    stored upward value in the given tree and returns a new tree of
    identical shape carrying the transformed values.
    */
    pub fn apply<D, B, L>(&mut self, tree: &DualTree<D, U, B, L>) -> DualTree<D, U2, B, L>
    where
        D: Clone,
        B: Clone,
        L: Clone,
    {
        self.for_tree(tree, 0)
    }

    fn for_tree<D, B, L>(
        &mut self,
        tree: &DualTree<D, U, B, L>,
        depth: usize,
    ) -> DualTree<D, U2, B, L>
    where
        D: Clone,
        B: Clone,
        L: Clone,
    {
        if self.tracing.trace(depth) {
            trace!("[{}] {}: depth {}", self.name, function_name!(), depth);
        }

        match tree {
            DualTree::Empty => DualTree::Empty,
            DualTree::Leaf(leaf) => DualTree::Leaf(Rc::new(LeafNode {
                up: (self.f)(&leaf.up),
                datum: leaf.datum.clone(),
            })),
            DualTree::Branch(branch) => {
                let up = branch.up.as_ref().map(|u| (self.f)(u));
                let mut children = Vec::with_capacity(branch.children.len());
                for c in branch.children.iter() {
                    children.push(self.for_tree(c, depth + 1));
                }
                DualTree::Branch(Rc::new(BranchNode {
                    down: branch.down.clone(),
                    up,
                    datum: branch.datum.clone(),
                    children,
                }))
            }
        }
    }
}

impl<U, U2, F> Tracing for MapUp<U, U2, F>
where
    F: FnMut(&U) -> U2,
{
    fn set_tracing(&mut self, config: TracingConfig) {
        self.tracing = config;
    }
}
