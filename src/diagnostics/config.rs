/**
Controls which depths of a tree will emit trace events when a traversal
operator (`FoldDual`, `MapUp`) walks over them.  Depth 0 is the root of the
tree that the operator was applied to.
 */
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TracingConfig {
    All,
    Between(usize, usize),
    Before(usize),
    After(usize),
    Only(usize),
    Off,
}

impl TracingConfig {
    /// Returns true if a node at the given depth falls within the window
    /// that this configuration traces.
    pub fn trace(&self, depth: usize) -> bool {
        match *self {
            TracingConfig::All => true,
            TracingConfig::Between(start, end) => start <= depth && depth <= end,
            TracingConfig::Before(end) => depth <= end,
            TracingConfig::After(start) => start <= depth,
            TracingConfig::Only(d) => depth == d,
            TracingConfig::Off => false,
        }
    }
}

pub trait Tracing {
    fn set_tracing(&mut self, config: TracingConfig);
}
