//! Tracing feature model

use super::NamespacedName;
use crate::timeout::TimeoutPolicy;
use serde::{Deserialize, Serialize};

/// Distributed-tracing configuration attached to a listener's HTTP
/// connection manager.
///
/// Validation happens upstream: the extension service is known to exist and
/// `overall_sampling` is within [0, 100] by the time a value reaches
/// synthesis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TracingConfig {
    /// Extension service that collects the spans.
    pub extension_service: NamespacedName,

    /// Logical service name the proxy reports to the collector.
    pub service_name: String,

    /// TLS server name for the collector connection. Empty means derive an
    /// authority from the extension service reference instead.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub sni: String,

    /// Deadline for span export calls to the collector.
    #[serde(default)]
    pub timeout: TimeoutPolicy,

    /// Percentage of requests to trace, 0-100.
    pub overall_sampling: f64,

    /// Upper bound on the length of the request path tag value.
    pub max_path_tag_length: u32,

    /// Tags attached to every span, in emission order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub custom_tags: Vec<CustomTag>,
}

/// A single span tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomTag {
    /// Tag key applied to spans.
    pub tag_name: String,
    /// Where the tag value comes from.
    #[serde(flatten)]
    pub kind: CustomTagKind,
}

/// Value source for a span tag. Exactly one source per tag; the proxy reads
/// the value at the point the variant names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CustomTagKind {
    /// Fixed value.
    Literal { value: String },
    /// Read from a process environment variable at proxy startup.
    Environment { name: String },
    /// Read from an inbound request header at request time.
    RequestHeader {
        header_name: String,
        /// Value to use when the header is absent.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        default_value: Option<String>,
    },
}
