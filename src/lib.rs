pub mod diagnostics;
pub mod tree;

pub use diagnostics::{Tracing, TracingConfig};
pub use tree::{
    act_option, combine_option, Action, DualTree, FoldDual, MapUp, Monoid, Project, Semigroup,
};
