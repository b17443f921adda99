//! Tracing resource synthesis
//!
//! Maps the graph's tracing configuration onto the connection manager's
//! tracing wire resource, including the opaque tracer-provider payload.

use crate::graph::{CustomTag, CustomTagKind, TracingConfig};
use crate::synth::{extension_cluster_name, extension_default_authority, grpc_service};
use crate::xds;
use crate::xds::hcm::http_connection_manager;

/// Extension name of the OpenTelemetry tracer in the proxy. Version-pinned:
/// the proxy resolves the payload parser by this exact string.
const OPENTELEMETRY_TRACER_NAME: &str = "envoy.tracers.opentelemetry";

/// A pluggable tracer backend.
///
/// The wire resource carries a provider as an extension name plus an opaque
/// typed payload, so backends can be added without touching the
/// orchestration in [`tracing_config`].
pub trait TracingProvider {
    /// Extension name the proxy dispatches on.
    fn name(&self) -> &'static str;

    /// Build the provider's typed payload for `config`.
    fn typed_config(&self, config: &TracingConfig) -> prost_types::Any;
}

/// Tracer backend exporting spans to an OpenTelemetry collector over gRPC.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenTelemetryProvider;

impl TracingProvider for OpenTelemetryProvider {
    fn name(&self) -> &'static str {
        OPENTELEMETRY_TRACER_NAME
    }

    fn typed_config(&self, config: &TracingConfig) -> prost_types::Any {
        let authority = if config.sni.is_empty() {
            extension_default_authority(&config.extension_service)
        } else {
            config.sni.clone()
        };
        xds::pack(&xds::trace::OpenTelemetryConfig {
            grpc_service: Some(grpc_service(
                extension_cluster_name(&config.extension_service),
                authority,
                config.timeout,
            )),
            service_name: config.service_name.clone(),
        })
    }
}

/// Synthesize the connection-manager tracing resource.
///
/// `None` in means tracing is not configured and yields `None` out, never a
/// zero-valued resource: the proxy treats a present-but-empty tracing block
/// as configuration in its own right. A present input always yields a fully
/// populated resource.
pub fn tracing_config(config: Option<&TracingConfig>) -> Option<http_connection_manager::Tracing> {
    let config = config?;
    tracing::debug!(
        extension_service = %config.extension_service,
        custom_tags = config.custom_tags.len(),
        "synthesizing tracing configuration"
    );
    Some(http_connection_manager::Tracing {
        overall_sampling: Some(xds::types::Percent {
            value: config.overall_sampling,
        }),
        max_path_tag_length: Some(config.max_path_tag_length),
        custom_tags: config.custom_tags.iter().map(custom_tag).collect(),
        provider: Some(provider(&OpenTelemetryProvider, config)),
    })
}

/// Wire form of a tracer provider, built through the [`TracingProvider`]
/// seam.
fn provider(backend: &dyn TracingProvider, config: &TracingConfig) -> xds::trace::tracing::Http {
    xds::trace::tracing::Http {
        name: backend.name().to_string(),
        config_type: Some(xds::trace::tracing::http::ConfigType::TypedConfig(
            backend.typed_config(config),
        )),
    }
}

/// Wire form of one custom tag; the variants map one-to-one.
fn custom_tag(tag: &CustomTag) -> xds::tags::CustomTag {
    use xds::tags::custom_tag::{Environment, Header, Literal, Type};

    let value_source = match &tag.kind {
        CustomTagKind::Literal { value } => Type::Literal(Literal {
            value: value.clone(),
        }),
        CustomTagKind::Environment { name } => Type::Environment(Environment {
            name: name.clone(),
            default_value: String::new(),
        }),
        CustomTagKind::RequestHeader {
            header_name,
            default_value,
        } => Type::RequestHeader(Header {
            name: header_name.clone(),
            default_value: default_value.clone().unwrap_or_default(),
        }),
    };
    xds::tags::CustomTag {
        tag: tag.tag_name.clone(),
        r#type: Some(value_source),
    }
}
