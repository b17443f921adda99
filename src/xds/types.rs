//! `envoy.type.v3` scalar wrappers

use prost::Message;

/// A percentage in the range [0, 100].
#[derive(Clone, PartialEq, Message)]
pub struct Percent {
    #[prost(double, tag = "1")]
    pub value: f64,
}
