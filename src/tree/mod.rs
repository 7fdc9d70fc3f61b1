//! A generic, immutable n-ary tree which carries two independent classes of
//! monoidal annotation at once.
//!
//! The "downward" annotation (`D`) composes along the path from the root to
//! each leaf: the value which is effective at a leaf is the combination, in
//! root-to-leaf order, of every downward value on the path above it.  The
//! "upward" annotation (`U`) composes from the leaves toward the root and is
//! cached at each branch so that reading it is cheap.
//!
//! The two interact through a caller supplied action of `D` on `U`.  When a
//! downward value is attached to the root of a tree (`apply_down`) it is NOT
//! pushed into the cached upward values of the subtree; it is stored on the
//! root and deferred.  The action is realized lazily: `get_u` applies the
//! pending value exactly once at read time, and `FoldDual` threads the
//! accumulated downward context through the whole tree in a single traversal.
//! This turns O(depth) of deferred work per ancestor into O(1) actions per
//! node visited, instead of an eager push on every `apply_down`.
//!
//! Combination of trees (`combine`) forms a semigroup with `Empty` as a two
//! sided identity.  NOTE: combination is associative only up to the
//! leaf-flattening equivalence: regrouping changes the shape of the tree but
//! not the ordered sequence of leaves, their effective downward values, or
//! the upward value observed at the root.  Callers MUST NOT assume that
//! structural equality is preserved under regrouping.
//!
//! Correctness of every cached value rests on contracts the callers supply
//! and this module cannot check: `combine` must be associative for both
//! annotation types, and the action must be a monoid homomorphism (see the
//! `algebra` submodule).  Violating those contracts produces silently
//! incorrect cached values, never a fault.

mod algebra;
mod flatten;
mod fold;
mod map;
mod tree;

#[cfg(test)]
mod testutil;


pub use self::algebra::{act_option, combine_option, Action, Monoid, Project, Semigroup};
pub use self::fold::FoldDual;
pub use self::map::MapUp;
pub use self::tree::{BranchNode, DualTree, LeafNode};
