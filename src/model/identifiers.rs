//! Namespace-qualified identifiers for item types and categories.
//!
//! Both identifier kinds share the same textual form `namespace:path` and the
//! same ordering contract: lexicographic on the full qualified string. The
//! qualified form is stored precomputed so equality, hashing, and ordering are
//! a single string comparison on the hot path.

use crate::error::UnifyError;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};

/// The namespace separator in qualified identifiers.
pub const NAMESPACE_SEPARATOR: char = ':';

/// Validate and join a namespace and path into a qualified string.
///
/// Returns the qualified string and the separator byte offset.
fn join_qualified(namespace: &str, path: &str) -> Result<(String, usize), UnifyError> {
    if namespace.is_empty() {
        return Err(UnifyError::identifier(
            format!(":{path}"),
            "namespace must not be empty",
        ));
    }
    if path.is_empty() {
        return Err(UnifyError::identifier(
            format!("{namespace}:"),
            "path must not be empty",
        ));
    }
    if namespace.contains(NAMESPACE_SEPARATOR) || path.contains(NAMESPACE_SEPARATOR) {
        return Err(UnifyError::identifier(
            format!("{namespace}:{path}"),
            "':' may appear only as the namespace separator",
        ));
    }
    Ok((format!("{namespace}:{path}"), namespace.len()))
}

fn split_qualified(value: &str) -> Result<(String, usize), UnifyError> {
    let (namespace, path) = value.split_once(NAMESPACE_SEPARATOR).ok_or_else(|| {
        UnifyError::identifier(value, "expected 'namespace:path'")
    })?;
    join_qualified(namespace, path)
}

macro_rules! qualified_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Eq)]
        pub struct $name {
            qualified: String,
            sep: usize,
        }

        impl $name {
            /// Build an identifier from separate namespace and path parts.
            pub fn new(namespace: &str, path: &str) -> Result<Self, UnifyError> {
                let (qualified, sep) = join_qualified(namespace, path)?;
                Ok(Self { qualified, sep })
            }

            /// Parse an identifier from its `namespace:path` textual form.
            pub fn parse(value: &str) -> Result<Self, UnifyError> {
                let (qualified, sep) = split_qualified(value)?;
                Ok(Self { qualified, sep })
            }

            /// The source namespace (text before the separator).
            pub fn namespace(&self) -> &str {
                &self.qualified[..self.sep]
            }

            /// The unqualified path (text after the separator).
            pub fn path(&self) -> &str {
                &self.qualified[self.sep + 1..]
            }

            /// The full qualified `namespace:path` form.
            pub fn as_str(&self) -> &str {
                &self.qualified
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.qualified == other.qualified
            }
        }

        impl Hash for $name {
            fn hash<H: Hasher>(&self, state: &mut H) {
                self.qualified.hash(state);
            }
        }

        impl PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Ord for $name {
            fn cmp(&self, other: &Self) -> std::cmp::Ordering {
                self.qualified.cmp(&other.qualified)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.qualified)
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(&self.qualified)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let value = String::deserialize(deserializer)?;
                Self::parse(&value).map_err(D::Error::custom)
            }
        }
    };
}

qualified_id! {
    /// Immutable identity of a kind of item (identity, not instance).
    ///
    /// Many stack instances share one `ItemTypeId`; it is the unit of
    /// signature caching.
    ItemTypeId
}

qualified_id! {
    /// A named category tag an item type may belong to.
    ///
    /// Ordering is lexicographic on the qualified name, which is what makes
    /// signature comparison order-independent.
    CategoryId
}
