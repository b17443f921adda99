//! Feature synthesizers
//!
//! Each feature synthesizer maps one validated slice of the abstract graph
//! onto its wire resource. Synthesis is pure: the same graph snapshot always
//! yields the same resource, nothing is mutated, and there is no I/O, so
//! synthesizers are safe to call concurrently for independent inputs.
//!
//! The naming helpers here are a cross-component contract: the cluster
//! registrar derives the same names independently and the two are never
//! cross-checked at runtime. A mismatch is a dangling reference the proxy
//! rejects when it loads the snapshot.

pub mod hcm;
pub mod tracing;

use crate::graph::NamespacedName;
use crate::timeout::TimeoutPolicy;
use crate::xds;

/// Cluster name under which the registrar publishes an extension service.
///
/// Format: `extension/<namespace>/<name>`.
pub fn extension_cluster_name(service: &NamespacedName) -> String {
    format!("extension/{}/{}", service.namespace, service.name)
}

/// Fallback `:authority` for calls to an extension service when the operator
/// configured no explicit SNI.
///
/// Format: `extension.<namespace>.<name>`, mirroring in-cluster DNS names.
pub fn extension_default_authority(service: &NamespacedName) -> String {
    format!("extension.{}.{}", service.namespace, service.name)
}

/// Reference to a gRPC service hosted by `cluster_name`.
///
/// Shared by every feature synthesizer that points the proxy at an extension
/// service.
pub fn grpc_service(
    cluster_name: String,
    authority: String,
    timeout: TimeoutPolicy,
) -> xds::core::GrpcService {
    xds::core::GrpcService {
        target_specifier: Some(xds::core::grpc_service::TargetSpecifier::EnvoyGrpc(
            xds::core::grpc_service::EnvoyGrpc {
                cluster_name,
                authority,
            },
        )),
        timeout: wire_timeout(timeout),
    }
}

/// Re-express a timeout setting in the wire duration representation.
///
/// `UseDefault` leaves the field unset; `Disabled` becomes an explicit zero,
/// which the proxy interprets as "no timeout".
pub fn wire_timeout(timeout: TimeoutPolicy) -> Option<prost_types::Duration> {
    match timeout {
        TimeoutPolicy::UseDefault => None,
        TimeoutPolicy::Disabled => Some(prost_types::Duration::default()),
        TimeoutPolicy::Duration(d) => Some(wire_duration(d)),
    }
}

fn wire_duration(d: std::time::Duration) -> prost_types::Duration {
    prost_types::Duration {
        seconds: d.as_secs() as i64,
        nanos: d.subsec_nanos() as i32,
    }
}
