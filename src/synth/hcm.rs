//! HTTP connection manager composition

use crate::graph::TracingConfig;
use crate::synth::tracing::tracing_config;
use crate::xds::hcm::HttpConnectionManager;

/// Connection-manager filter configuration for one listener.
///
/// Cross-cutting features stay absent unless the graph configured them; an
/// unconfigured feature must not surface as a zero-valued field.
pub fn http_connection_manager(
    stat_prefix: &str,
    tracing: Option<&TracingConfig>,
) -> HttpConnectionManager {
    HttpConnectionManager {
        stat_prefix: stat_prefix.to_string(),
        tracing: tracing_config(tracing),
    }
}
