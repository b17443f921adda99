//! Wire-format messages for the resources this crate emits
//!
//! Hand-maintained prost mirror of the subset of the Envoy xDS protos that
//! synthesis produces. Field numbers and names must match `envoyproxy/envoy`
//! exactly: the proxy parses these resources against its own schema and
//! rejects a drifted configuration snapshot at load time, with no feedback to
//! synthesis.

pub mod core;
pub mod hcm;
pub mod tags;
pub mod trace;
pub mod types;

use prost::{Message, Name};

/// Serialize a typed message and wrap it with its type identifier.
///
/// The resulting envelope lets a generic extension-config field carry the
/// payload without the enclosing structure knowing its schema; the proxy
/// dispatches on the type URL to the matching extension parser. Type URLs use
/// the `type.googleapis.com` authority, the form the proxy expects.
pub fn pack<M: Message + Name>(msg: &M) -> prost_types::Any {
    prost_types::Any {
        type_url: M::type_url(),
        value: msg.encode_to_vec(),
    }
}
