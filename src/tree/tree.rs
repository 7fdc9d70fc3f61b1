use std::rc::Rc;

use super::algebra::{combine_option, Action, Monoid, Project, Semigroup};

/**
A tree annotated with a downward accumulating value (`D`), a cached upward
value (`U`), an optional datum on every branch (`B`), and a datum on every
leaf (`L`).

Values of this type are persistent: no operation mutates an existing tree.
Every operator returns a new root which structurally shares the unchanged
sub-trees of its input, so the input remains valid and usable afterwards.
`Clone` is a reference count bump, not a deep copy.
 */
#[derive(Debug, PartialEq)]
pub enum DualTree<D, U, B, L> {
    /// The identity for tree combination.  Carries no data.
    Empty,
    Leaf(Rc<LeafNode<U, L>>),
    Branch(Rc<BranchNode<D, U, B, L>>),
}

#[derive(Debug, PartialEq)]
pub struct LeafNode<U, L> {
    pub(crate) up: U,
    pub(crate) datum: L,
}

/**
The interior node of a [`DualTree`].

Invariants:
1. `up` is consistent with the left-to-right combination of the children's
   upward values (a node may locally augment that combination on either
   side through `apply_up_pre`/`apply_up_post`).
2. If `down` is present it has NOT been pushed into `up`: the action is
   deferred, and is realized at read time by `get_u` or during a fold.
 */
#[derive(Debug, PartialEq)]
pub struct BranchNode<D, U, B, L> {
    pub(crate) down: Option<D>,
    pub(crate) up: Option<U>,
    pub(crate) datum: Option<B>,
    pub(crate) children: Vec<DualTree<D, U, B, L>>,
}

// A hand written impl so that cloning does not demand `Clone` from the
// annotation types: only the reference counts move.
impl<D, U, B, L> Clone for DualTree<D, U, B, L> {
    fn clone(&self) -> Self {
        match self {
            DualTree::Empty => DualTree::Empty,
            DualTree::Leaf(leaf) => DualTree::Leaf(Rc::clone(leaf)),
            DualTree::Branch(branch) => DualTree::Branch(Rc::clone(branch)),
        }
    }
}

impl<U, L> LeafNode<U, L> {
    pub fn get_up(&self) -> &U {
        &self.up
    }

    pub fn get_datum(&self) -> &L {
        &self.datum
    }
}

impl<D, U, B, L> BranchNode<D, U, B, L> {
    pub fn get_down(&self) -> Option<&D> {
        self.down.as_ref()
    }

    /// The raw cached upward value.  If this node also carries a downward
    /// annotation the externally observed value differs: use
    /// [`DualTree::get_u`] for that.
    pub fn get_cached_up(&self) -> Option<&U> {
        self.up.as_ref()
    }

    pub fn get_datum(&self) -> Option<&B> {
        self.datum.as_ref()
    }

    pub fn get_children(&self) -> &[DualTree<D, U, B, L>] {
        &self.children
    }
}

impl<D, U, B, L> DualTree<D, U, B, L> {
    pub fn empty() -> Self {
        DualTree::Empty
    }

    pub fn leaf(up: U, datum: L) -> Self {
        DualTree::Leaf(Rc::new(LeafNode { up, datum }))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, DualTree::Empty)
    }

    /// The downward annotation pending on the root, if the root is a
    /// branch which carries one.
    pub fn get_down(&self) -> Option<&D> {
        match self {
            DualTree::Branch(branch) => branch.down.as_ref(),
            _ => None,
        }
    }

    /// The direct children of the root.  Empty for `Empty` and `Leaf`.
    pub fn get_children(&self) -> &[Self] {
        match self {
            DualTree::Branch(branch) => &branch.children,
            _ => &[],
        }
    }
}

impl<D, U, B, L> DualTree<D, U, B, L>
where
    D: Action<U>,
    U: Semigroup + Clone,
    B: Clone,
    L: Clone,
{
    /**
    Builds a branch over the given children.  The cached upward value is
    computed eagerly as the left-to-right combination of each child's
    `get_u`; an empty child list caches the absent value.  The downward
    value, if given, is stored deferred and is NOT applied to the cache.
     */
    pub fn branch(down: Option<D>, datum: Option<B>, children: Vec<Self>) -> Self {
        let up = Self::combine_over(&children);
        DualTree::Branch(Rc::new(BranchNode {
            down,
            up,
            datum,
            children,
        }))
    }

    /// A branch with no annotations and no datum: `branch(None, None, c)`.
    pub fn branch_generic(children: Vec<Self>) -> Self {
        Self::branch(None, None, children)
    }

    /// A childless tree carrying only an upward annotation.
    pub fn leaf_up(up: U) -> Self {
        DualTree::Branch(Rc::new(BranchNode {
            down: None,
            up: Some(up),
            datum: None,
            children: vec![],
        }))
    }

    fn combine_over(children: &[Self]) -> Option<U> {
        let mut acc: Option<U> = None;
        for c in children {
            acc = combine_option(acc.as_ref(), c.get_u().as_ref());
        }
        acc
    }

    /**
    The upward annotation observed at the root of this tree.

    For a branch carrying a pending downward value `d`, the result is
    `d.act(cache)`: the deferred action is applied lazily, exactly once per
    read, and is never written back into the cached field.  This is a pure
    read; repeated calls recompute the action.
     */
    pub fn get_u(&self) -> Option<U> {
        match self {
            DualTree::Empty => None,
            DualTree::Leaf(leaf) => Some(leaf.up.clone()),
            DualTree::Branch(branch) => match (&branch.down, &branch.up) {
                (Some(d), Some(u)) => Some(d.act(u)),
                (Some(_), None) => None,
                (None, u) => u.clone(),
            },
        }
    }

    /**
    A narrowing variant of `get_u` which reads one projected component of a
    structured upward annotation.  Only an action of `D` on the component
    type is required, not on all of `U`.

    For a branch carrying a pending downward annotation over an absent
    cache the result is the absent value by definition, not by computation.
     */
    pub fn get_u_component<T>(&self) -> Option<T>
    where
        U: Project<T>,
        D: Action<T>,
        T: Semigroup + Clone,
    {
        match self {
            DualTree::Empty => None,
            DualTree::Leaf(leaf) => Some(leaf.up.project()),
            DualTree::Branch(branch) => match (&branch.down, &branch.up) {
                (Some(d), Some(u)) => Some(d.act(&u.project())),
                (None, Some(u)) => Some(u.project()),
                (_, None) => None,
            },
        }
    }

    /**
    Combines two trees into one.  `Empty` is a two sided identity: combining
    with it returns the other operand unchanged.  Otherwise the result is a
    new branch with both trees as children, no downward annotation, no
    datum, and a cache equal to the combination of the operands' upward
    values.

    Combination is associative only up to the leaf-flattening equivalence;
    regrouping changes the structure of the result (see the module docs).
     */
    pub fn combine(&self, other: &Self) -> Self {
        match (self, other) {
            (DualTree::Empty, t) => t.clone(),
            (t, DualTree::Empty) => t.clone(),
            _ => {
                let up = combine_option(self.get_u().as_ref(), other.get_u().as_ref());
                DualTree::Branch(Rc::new(BranchNode {
                    down: None,
                    up,
                    datum: None,
                    children: vec![self.clone(), other.clone()],
                }))
            }
        }
    }

    /**
    The n-ary form of `combine`: a single branch with every tree in `ts` as
    a direct child, in order, and a cache equal to the left-to-right
    combination of each child's upward value.  An empty slice yields
    `Empty`.
     */
    pub fn combine_all(ts: &[Self]) -> Self {
        if ts.is_empty() {
            return DualTree::Empty;
        }
        let up = Self::combine_over(ts);
        DualTree::Branch(Rc::new(BranchNode {
            down: None,
            up,
            datum: None,
            children: ts.to_vec(),
        }))
    }

    /**
    Attaches a downward annotation at the root.  The new value composes on
    the left of any value already present: it applies "outside" the
    existing one on the path from the root.

    The cached upward value of the tree is never touched; the action of `d`
    stays deferred until `get_u` or a fold realizes it.  A branch absorbs
    the annotation into its own node, so no extra level is added; `Empty`
    and `Leaf` roots are wrapped in a new single-child branch whose cache
    is the original tree's upward value.
     */
    pub fn apply_down(&self, d: D) -> Self {
        match self {
            DualTree::Branch(branch) => {
                let down = match &branch.down {
                    Some(prior) => d.combine(prior),
                    None => d,
                };
                DualTree::Branch(Rc::new(BranchNode {
                    down: Some(down),
                    up: branch.up.clone(),
                    datum: branch.datum.clone(),
                    children: branch.children.clone(),
                }))
            }
            _ => DualTree::Branch(Rc::new(BranchNode {
                down: Some(d),
                up: self.get_u(),
                datum: None,
                children: vec![self.clone()],
            })),
        }
    }

    /// Combines `u` on the left of the root's upward value.
    pub fn apply_up_pre(&self, u: U) -> Self {
        self.apply_up(u, true)
    }

    /// Combines `u` on the right of the root's upward value.
    pub fn apply_up_post(&self, u: U) -> Self {
        self.apply_up(u, false)
    }

    fn apply_up(&self, u: U, pre: bool) -> Self {
        match self {
            DualTree::Empty => DualTree::Branch(Rc::new(BranchNode {
                down: None,
                up: Some(u),
                datum: None,
                children: vec![],
            })),
            DualTree::Leaf(leaf) => {
                let up = if pre {
                    u.combine(&leaf.up)
                } else {
                    leaf.up.combine(&u)
                };
                DualTree::Leaf(Rc::new(LeafNode {
                    up,
                    datum: leaf.datum.clone(),
                }))
            }
            DualTree::Branch(branch) if branch.down.is_none() => {
                let up = match &branch.up {
                    Some(cached) => {
                        if pre {
                            u.combine(cached)
                        } else {
                            cached.combine(&u)
                        }
                    }
                    None => u,
                };
                DualTree::Branch(Rc::new(BranchNode {
                    down: None,
                    up: Some(up),
                    datum: branch.datum.clone(),
                    children: branch.children.clone(),
                }))
            }
            // A pending downward annotation must not be disturbed by a
            // field edit, so the new value lands on a fresh parent.
            DualTree::Branch(_) => {
                let observed = self.get_u();
                let up = if pre {
                    combine_option(Some(&u), observed.as_ref())
                } else {
                    combine_option(observed.as_ref(), Some(&u))
                };
                DualTree::Branch(Rc::new(BranchNode {
                    down: None,
                    up,
                    datum: None,
                    children: vec![self.clone()],
                }))
            }
        }
    }
}

impl<D, U, B, L> Semigroup for DualTree<D, U, B, L>
where
    D: Action<U>,
    U: Semigroup + Clone,
    B: Clone,
    L: Clone,
{
    fn combine(&self, other: &Self) -> Self {
        DualTree::combine(self, other)
    }
}

impl<D, U, B, L> Monoid for DualTree<D, U, B, L>
where
    D: Action<U>,
    U: Semigroup + Clone,
    B: Clone,
    L: Clone,
{
    fn empty() -> Self {
        DualTree::Empty
    }
}
