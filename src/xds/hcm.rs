//! `envoy.extensions.filters.network.http_connection_manager.v3` subset

use prost::Message;

/// HTTP connection manager network filter configuration.
#[derive(Clone, PartialEq, Message)]
pub struct HttpConnectionManager {
    /// Prefix for connection-manager statistics.
    #[prost(string, tag = "2")]
    pub stat_prefix: String,

    /// Tracing configuration. Unset means tracing is not configured for this
    /// connection manager, which is distinct from a present-but-empty block.
    #[prost(message, optional, tag = "7")]
    pub tracing: ::core::option::Option<http_connection_manager::Tracing>,
}

impl prost::Name for HttpConnectionManager {
    const PACKAGE: &'static str = "envoy.extensions.filters.network.http_connection_manager.v3";
    const NAME: &'static str = "HttpConnectionManager";

    fn full_name() -> String {
        format!("{}.{}", Self::PACKAGE, Self::NAME)
    }

    fn type_url() -> String {
        format!("type.googleapis.com/{}", Self::full_name())
    }
}

/// Nested message and enum types in `HttpConnectionManager`.
pub mod http_connection_manager {
    use crate::xds::{tags, trace, types};
    use prost::Message;

    /// Tracing settings for requests handled by the connection manager.
    #[derive(Clone, PartialEq, Message)]
    pub struct Tracing {
        /// Percentage of requests traced overall.
        #[prost(message, optional, tag = "5")]
        pub overall_sampling: ::core::option::Option<types::Percent>,

        /// Length bound for the request path tag. Wrapped so an explicit
        /// zero stays distinguishable from unset.
        #[prost(message, optional, tag = "7")]
        pub max_path_tag_length: ::core::option::Option<u32>,

        /// Tags attached to every span, in order.
        #[prost(message, repeated, tag = "8")]
        pub custom_tags: Vec<tags::CustomTag>,

        /// Tracer provider that receives the spans.
        #[prost(message, optional, tag = "9")]
        pub provider: ::core::option::Option<trace::tracing::Http>,
    }
}
