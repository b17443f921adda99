//! `envoy.config.trace.v3` tracer provider messages

use prost::Message;

/// Tracer provider configuration.
#[derive(Clone, PartialEq, Message)]
pub struct Tracing {
    #[prost(message, optional, tag = "1")]
    pub http: ::core::option::Option<tracing::Http>,
}

/// Nested message and enum types in `Tracing`.
pub mod tracing {
    use prost::{Message, Oneof};

    /// A named tracer extension plus its opaque, separately-versioned
    /// payload. The proxy dispatches on `name` to the extension that parses
    /// the payload.
    #[derive(Clone, PartialEq, Message)]
    pub struct Http {
        /// Extension name, e.g. `envoy.tracers.opentelemetry`.
        #[prost(string, tag = "1")]
        pub name: String,

        #[prost(oneof = "http::ConfigType", tags = "3")]
        pub config_type: ::core::option::Option<http::ConfigType>,
    }

    /// Nested message and enum types in `Http`.
    pub mod http {
        use prost::Oneof;

        #[derive(Clone, PartialEq, Oneof)]
        pub enum ConfigType {
            #[prost(message, tag = "3")]
            TypedConfig(prost_types::Any),
        }
    }
}

/// Configuration for the OpenTelemetry tracer.
#[derive(Clone, PartialEq, Message)]
pub struct OpenTelemetryConfig {
    /// Upstream OpenTelemetry collector the proxy exports spans to over
    /// gRPC.
    #[prost(message, optional, tag = "1")]
    pub grpc_service: ::core::option::Option<super::core::GrpcService>,

    /// Service name resource attribute attached to exported spans.
    #[prost(string, tag = "2")]
    pub service_name: String,
}

impl prost::Name for OpenTelemetryConfig {
    const PACKAGE: &'static str = "envoy.config.trace.v3";
    const NAME: &'static str = "OpenTelemetryConfig";

    fn full_name() -> String {
        "envoy.config.trace.v3.OpenTelemetryConfig".to_string()
    }

    fn type_url() -> String {
        format!("type.googleapis.com/{}", Self::full_name())
    }
}
