//! Cross-Domain RPC Value Type
//!
//! This module defines the decoded RPC envelope structure.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::error::Result;

/// A validated cross-domain RPC, decoded from a request body.
///
/// # Lifecycle
///
/// 1. The loader reads an inbound request body and validates the envelope
/// 2. A `CrossDomainRpc` is constructed with all three fields populated
/// 3. The record is handed to a dispatcher, consumed once, and discarded
///
/// The record is never mutated after construction and carries no identity
/// of its own.
///
/// # Fields
///
/// - `method`: the HTTP verb the RPC should be dispatched as
/// - `path`: the target resource path
/// - `data`: the payload, stored as the JSON text of the original value
///
/// `data` is always a valid JSON text fragment (an object payload stores as
/// `{...}`, a string payload as `"..."`), so a dispatcher can re-parse it
/// into whatever shape it needs via [`CrossDomainRpc::data_as`].
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
/// use xdrpc::CrossDomainRpc;
///
/// let rpc = CrossDomainRpc::new("GET", "/status", r#"{"foo":"bar"}"#);
/// let data: HashMap<String, String> = rpc.data_as().unwrap();
/// assert_eq!(data["foo"], "bar");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CrossDomainRpc {
    /// HTTP verb to dispatch the RPC as
    pub method: String,
    /// Target resource path
    pub path: String,
    /// Payload, as JSON text
    pub data: String,
}

impl CrossDomainRpc {
    /// Creates an RPC record from already-validated fields.
    ///
    /// # Arguments
    ///
    /// * `method` - The HTTP verb to dispatch as
    /// * `path` - The target resource path
    /// * `data` - The payload, as JSON text
    pub fn new(
        method: impl Into<String>,
        path: impl Into<String>,
        data: impl Into<String>,
    ) -> Self {
        CrossDomainRpc {
            method: method.into(),
            path: path.into(),
            data: data.into(),
        }
    }

    /// Re-parses the stored payload into a target shape.
    ///
    /// The loader stores `data` opaquely; this is the point where a
    /// consumer decides what the payload means.
    ///
    /// # Returns
    ///
    /// The deserialized payload, or [`XdrpcError::JsonSerialization`] if
    /// the stored text does not fit the target type.
    ///
    /// [`XdrpcError::JsonSerialization`]: super::error::XdrpcError::JsonSerialization
    ///
    /// # Example
    ///
    /// ```
    /// use serde_json::Value;
    /// use xdrpc::CrossDomainRpc;
    ///
    /// let rpc = CrossDomainRpc::new("POST", "/echo", "[1,2,3]");
    /// let data: Value = rpc.data_as().unwrap();
    /// assert_eq!(data, serde_json::json!([1, 2, 3]));
    /// ```
    pub fn data_as<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_str(&self.data)?)
    }
}
