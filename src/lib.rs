//! Gantry xDS synthesis
//!
//! Convert Gantry's abstract configuration graph into the exact wire-format
//! resources an Envoy-compatible proxy consumes over xDS. The graph arrives
//! already validated; synthesis is a pure, synchronous transformation that
//! performs no I/O and holds no state, so it can run concurrently for
//! independent listeners without coordination.

pub mod graph;
pub mod synth;
pub mod timeout;
pub mod xds;

pub use graph::{CustomTag, CustomTagKind, NamespacedName, TracingConfig};
pub use timeout::TimeoutPolicy;
