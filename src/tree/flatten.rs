use super::algebra::{Action, Semigroup};
use super::fold::FoldDual;
use super::tree::DualTree;

impl<D, U, B, L> DualTree<D, U, B, L>
where
    D: Action<U> + Clone,
    U: Semigroup + Clone,
    L: Clone,
{
    /**
    Flattens the tree to its leaves, in left-to-right order, pairing each
    leaf datum with the total downward annotation accumulated from the root
    up to and including that leaf.  Branch data and upward values are
    discarded.  An `Empty` tree flattens to an empty sequence rather than
    an absent one.

    Because combination is associative up to exactly this flattening,
    regrouping a tree with `combine` never changes the result.
     */
    pub fn flatten(&self) -> Vec<(L, Option<D>)> {
        let mut fold = FoldDual::new(
            "flatten",
            |dacc: Option<&D>, _up: U, datum: &L| vec![(datum.clone(), dacc.cloned())],
            |_d: Option<&D>, _up: Option<U>, _b: Option<&B>, results| {
                let mut leaves = vec![];
                for r in results {
                    if let Some(mut more) = r {
                        leaves.append(&mut more);
                    }
                }
                leaves
            },
        );
        fold.apply(self).unwrap_or_default()
    }
}
