pub mod config;

pub use config::{Tracing, TracingConfig};
