//! Abstract configuration graph types
//!
//! The graph is built and validated by the control plane's reconciliation
//! layer before it reaches synthesis. Everything here is passive data:
//! synthesizers read one immutable snapshot per pass and never mutate it.

mod tracing;

pub use self::tracing::*;

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Namespace-qualified name of an object registered elsewhere in the control
/// plane. The sole key type used for indirect resource references.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NamespacedName {
    /// Namespace the object lives in.
    pub namespace: String,
    /// Object name within the namespace.
    pub name: String,
}

impl NamespacedName {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
        }
    }
}

impl std::fmt::Display for NamespacedName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.namespace, self.name)
    }
}

/// Error parsing the `<namespace>/<name>` string form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseNamespacedNameError {
    #[error("expected <namespace>/<name>, got {0:?}")]
    Malformed(String),

    #[error("empty component in {0:?}")]
    EmptyComponent(String),
}

impl FromStr for NamespacedName {
    type Err = ParseNamespacedNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((namespace, name)) = s.split_once('/') else {
            return Err(ParseNamespacedNameError::Malformed(s.to_string()));
        };
        if name.contains('/') {
            return Err(ParseNamespacedNameError::Malformed(s.to_string()));
        }
        if namespace.is_empty() || name.is_empty() {
            return Err(ParseNamespacedNameError::EmptyComponent(s.to_string()));
        }
        Ok(Self::new(namespace, name))
    }
}
