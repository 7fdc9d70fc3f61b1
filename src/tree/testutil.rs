//! Shared fixtures for the tree tests.
//!
//! The annotation types here are small stand-ins for what a host layout
//! system would supply: `Scale` plays the role of a spatial transform
//! acting distributively on additive extents, and `Extents` is a
//! structured upward annotation with a projectable component.

use std::sync::Once;

use rand::rngs::StdRng;
use rand::Rng;
use simplelog::{Config, LevelFilter, SimpleLogger};

use super::algebra::{Action, Monoid, Project, Semigroup};
use super::tree::DualTree;

static INIT: Once = Once::new();

/// Routes `log` events to stderr so traced traversals show up under
/// `cargo test -- --nocapture`.
pub fn init_logging() {
    INIT.call_once(|| {
        let _ = SimpleLogger::init(LevelFilter::Trace, Config::default());
    });
}

/// Integers under addition.
impl Semigroup for i64 {
    fn combine(&self, other: &Self) -> Self {
        self + other
    }
}

impl Monoid for i64 {
    fn empty() -> Self {
        0
    }
}

/// Integers under addition, with the action also given by addition.  This
/// matches the simplest host usage (accumulated offsets); note that the
/// additive action is only homomorphic in the composition law, so tests
/// that depend on distributing over `combine` use [`Scale`] instead.
impl Semigroup for i32 {
    fn combine(&self, other: &Self) -> Self {
        self + other
    }
}

impl Monoid for i32 {
    fn empty() -> Self {
        0
    }
}

impl Action<i32> for i32 {
    fn act(&self, u: &i32) -> i32 {
        self + u
    }
}

/// A multiplicative factor acting distributively on additive sums.  This
/// is a genuine monoid homomorphism on both laws:
/// `d * (u1 + u2) == d * u1 + d * u2` and `(d1 * d2) * u == d1 * (d2 * u)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scale(pub i64);

impl Semigroup for Scale {
    fn combine(&self, other: &Self) -> Self {
        Scale(self.0 * other.0)
    }
}

impl Monoid for Scale {
    fn empty() -> Self {
        Scale(1)
    }
}

impl Action<i64> for Scale {
    fn act(&self, u: &i64) -> i64 {
        self.0 * u
    }
}

/// A structured upward annotation: a leaf count that downward annotations
/// leave alone, and a sum that scales.  `sum` is the projectable component.
#[derive(Clone, Debug, PartialEq)]
pub struct Extents {
    pub count: i64,
    pub sum: i64,
}

impl Semigroup for Extents {
    fn combine(&self, other: &Self) -> Self {
        Extents {
            count: self.count + other.count,
            sum: self.sum + other.sum,
        }
    }
}

impl Action<Extents> for Scale {
    fn act(&self, u: &Extents) -> Extents {
        Extents {
            count: u.count,
            sum: self.0 * u.sum,
        }
    }
}

impl Project<i64> for Extents {
    fn project(&self) -> i64 {
        self.sum
    }
}

/// The workhorse tree for most tests: scaled additive sums over integer
/// leaf data.
pub type SumTree = DualTree<Scale, i64, (), i64>;

/**
Generates a random tree of bounded depth.  Leaf data are sequential ids
(left-to-right construction order), which lets order sensitive tests check
`flatten` against the generation sequence.
 */
pub fn random_tree(rng: &mut StdRng, depth: usize, next_id: &mut i64) -> SumTree {
    if depth == 0 {
        return random_terminal(rng, next_id);
    }
    match rng.gen_range(0..6) {
        0 => random_terminal(rng, next_id),
        1 => {
            let child = random_tree(rng, depth - 1, next_id);
            child.apply_down(Scale(rng.gen_range(1..4)))
        }
        2 => {
            let child = random_tree(rng, depth - 1, next_id);
            child.apply_up_pre(rng.gen_range(-3..4))
        }
        _ => {
            let n = rng.gen_range(0..4);
            let children = (0..n)
                .map(|_| random_tree(rng, depth - 1, next_id))
                .collect();
            let down = if rng.gen_bool(0.5) {
                Some(Scale(rng.gen_range(1..4)))
            } else {
                None
            };
            DualTree::branch(down, None, children)
        }
    }
}

/**
Like [`random_tree`] but restricted to `leaf` and `branch` construction:
no upward augmentation and no annotation-only nodes.  Trees built this way
keep their caches equal to the combination over their leaves, which the
cache consistency properties rely on.
 */
pub fn random_plain_tree(rng: &mut StdRng, depth: usize, next_id: &mut i64) -> SumTree {
    if depth == 0 || rng.gen_bool(0.3) {
        let id = *next_id;
        *next_id += 1;
        return DualTree::leaf(rng.gen_range(-5..6), id);
    }
    let n = rng.gen_range(0..4);
    let children = (0..n)
        .map(|_| random_plain_tree(rng, depth - 1, next_id))
        .collect();
    let down = if rng.gen_bool(0.5) {
        Some(Scale(rng.gen_range(1..4)))
    } else {
        None
    };
    DualTree::branch(down, None, children)
}

fn random_terminal(rng: &mut StdRng, next_id: &mut i64) -> SumTree {
    match rng.gen_range(0..4) {
        0 => DualTree::Empty,
        1 => DualTree::leaf_up(rng.gen_range(-3..4)),
        _ => {
            let id = *next_id;
            *next_id += 1;
            DualTree::leaf(rng.gen_range(-5..6), id)
        }
    }
}
