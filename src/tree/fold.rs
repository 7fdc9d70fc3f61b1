use log::trace;
use stdext::function_name;

use crate::diagnostics::{Tracing, TracingConfig};

use super::algebra::{act_option, combine_option, Action, Semigroup};
use super::tree::DualTree;

/**
The general elimination form for a `DualTree`, and the single place where
deferred downward annotations are finally realized against the cached
upward values.  Every node visited pays O(1) actions, no matter how many
`apply_down` calls accumulated above it.

The fold threads an accumulated downward value, `dacc`, from the root.  At
each branch carrying its own annotation `d`, the accumulator becomes
`dacc ∙ d` for that node's reported upward value and for the recursion into
its children.

- At a leaf, `leaf_fn` receives the total accumulated downward context and
  the leaf's upward value with that entire context's action applied.
- At a branch, `branch_fn` receives the branch's own *local* downward
  annotation (not combined with its ancestors'), its upward value acted on
  by the full accumulated context, its datum, and the ordered fold results
  of its children.  A `None` result marks a child that was `Empty`.

`apply` returns `None` exactly when the tree itself is `Empty`.

Each instance of a construct is given a name so that diagnostic data
emitted while it runs can be attributed to the operation that produced it.
*/
pub struct FoldDual<LF, BF> {
    pub name: String,
    leaf_fn: LF,
    branch_fn: BF,
    tracing: TracingConfig,
}

impl<LF, BF> FoldDual<LF, BF> {
    pub fn new(name: &str, leaf_fn: LF, branch_fn: BF) -> FoldDual<LF, BF> {
        FoldDual {
            name: name.into(),
            leaf_fn,
            branch_fn,
            tracing: TracingConfig::Off,
        }
    }

    /**
    Folds the given tree down to a single value, resolving every deferred
    downward annotation along the way.  Returns `None` only for `Empty`.
    */
    pub fn apply<D, U, B, L, R>(&mut self, tree: &DualTree<D, U, B, L>) -> Option<R>
    where
        D: Action<U> + Clone,
        U: Semigroup + Clone,
        LF: FnMut(Option<&D>, U, &L) -> R,
        BF: FnMut(Option<&D>, Option<U>, Option<&B>, Vec<Option<R>>) -> R,
    {
        self.for_tree(tree, None, 0)
    }

    fn for_tree<D, U, B, L, R>(
        &mut self,
        tree: &DualTree<D, U, B, L>,
        dacc: Option<&D>,
        depth: usize,
    ) -> Option<R>
    where
        D: Action<U> + Clone,
        U: Semigroup + Clone,
        LF: FnMut(Option<&D>, U, &L) -> R,
        BF: FnMut(Option<&D>, Option<U>, Option<&B>, Vec<Option<R>>) -> R,
    {
        match tree {
            DualTree::Empty => None,
            DualTree::Leaf(leaf) => {
                if self.tracing.trace(depth) {
                    trace!("[{}] {}: leaf at depth {}", self.name, function_name!(), depth);
                }
                let up = act_option(dacc, &leaf.up);
                Some((self.leaf_fn)(dacc, up, &leaf.datum))
            }
            DualTree::Branch(branch) => {
                if self.tracing.trace(depth) {
                    trace!(
                        "[{}] {}: branch at depth {} with {} children",
                        self.name,
                        function_name!(),
                        depth,
                        branch.children.len()
                    );
                }
                let dacc = combine_option(dacc, branch.down.as_ref());
                let up = branch.up.as_ref().map(|u| act_option(dacc.as_ref(), u));

                let mut results = Vec::with_capacity(branch.children.len());
                for c in branch.children.iter() {
                    results.push(self.for_tree(c, dacc.as_ref(), depth + 1));
                }

                Some((self.branch_fn)(
                    branch.down.as_ref(),
                    up,
                    branch.datum.as_ref(),
                    results,
                ))
            }
        }
    }
}

impl<LF, BF> Tracing for FoldDual<LF, BF> {
    fn set_tracing(&mut self, config: TracingConfig) {
        self.tracing = config;
    }
}
