//! `envoy.config.core.v3` service references

use prost::Message;

/// Configuration of a gRPC service the proxy calls out to.
#[derive(Clone, PartialEq, Message)]
pub struct GrpcService {
    #[prost(oneof = "grpc_service::TargetSpecifier", tags = "1")]
    pub target_specifier: ::core::option::Option<grpc_service::TargetSpecifier>,

    /// Per-call deadline. Unset defers to the proxy's default; zero disables
    /// the deadline.
    #[prost(message, optional, tag = "3")]
    pub timeout: ::core::option::Option<prost_types::Duration>,
}

/// Nested message and enum types in `GrpcService`.
pub mod grpc_service {
    use prost::{Message, Oneof};

    /// A service reached through an upstream cluster.
    #[derive(Clone, PartialEq, Message)]
    pub struct EnvoyGrpc {
        /// Name of the cluster that hosts the service. The cluster must be
        /// registered separately; the proxy rejects dangling references.
        #[prost(string, tag = "1")]
        pub cluster_name: String,

        /// `:authority` header value (and TLS server name) for calls to the
        /// service.
        #[prost(string, tag = "2")]
        pub authority: String,
    }

    #[derive(Clone, PartialEq, Oneof)]
    pub enum TargetSpecifier {
        #[prost(message, tag = "1")]
        EnvoyGrpc(EnvoyGrpc),
    }
}
