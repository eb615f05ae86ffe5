//! Cross-Domain RPC Loading
//!
//! This module converts an inbound HTTP request into a validated
//! [`CrossDomainRpc`], or fails fast.
//!
//! # Architecture
//!
//! Decoding is a single pass with no retained state:
//! - Read the entire request body into memory
//! - Parse the bytes as a JSON object
//! - Validate the `method`, `path`, and `data` members
//! - Normalize the payload back to JSON text
//!
//! Each invocation is independent, so concurrent calls from different
//! tasks need no coordination.
//!
//! The declared `content-type` is never enforced. Callers are expected to
//! send `application/json`; a different declared type is noted at debug
//! level and decoding proceeds on the raw bytes regardless.
//!
//! # Example
//!
//! ```no_run
//! use http_body_util::Full;
//! use hyper::body::Bytes;
//! use hyper::Request;
//! use xdrpc::CrossDomainRpcLoader;
//!
//! #[tokio::main]
//! async fn main() {
//!     let request = Request::builder()
//!         .method("POST")
//!         .header("content-type", "application/json")
//!         .body(Full::new(Bytes::from(
//!             r#"{"method":"GET","path":"/status","data":null}"#,
//!         )))
//!         .unwrap();
//!
//!     let rpc = CrossDomainRpcLoader::load_rpc(request).await.unwrap();
//!     assert_eq!(rpc.method, "GET");
//! }
//! ```

use http_body_util::BodyExt;
use hyper::body::{Body, Bytes};
use hyper::header::CONTENT_TYPE;
use hyper::Request;
use serde_json::{Map, Value};

use crate::protocol::{CrossDomainRpc, Result, XdrpcError};

/// Decodes cross-domain RPC envelopes from HTTP requests.
///
/// The loader is a pure validation boundary: it produces a complete
/// [`CrossDomainRpc`] or an error, never a partial result. Errors are
/// raised to the caller synchronously and are not retried or recovered
/// internally; translating them into a client-facing response (e.g. an
/// HTTP 4xx) is the HTTP layer's job.
pub struct CrossDomainRpcLoader;

impl CrossDomainRpcLoader {
    /// Loads a cross-domain RPC from an HTTP request.
    ///
    /// Reads the request body to completion, consuming it exactly once,
    /// then decodes the bytes with [`parse_rpc`]. A failed body read
    /// surfaces as [`XdrpcError::Transport`].
    ///
    /// # Arguments
    ///
    /// * `request` - The inbound request carrying a JSON envelope body
    ///
    /// # Returns
    ///
    /// The validated `CrossDomainRpc`, or an error describing the first
    /// defect found
    ///
    /// [`parse_rpc`]: CrossDomainRpcLoader::parse_rpc
    pub async fn load_rpc<B>(request: Request<B>) -> Result<CrossDomainRpc>
    where
        B: Body,
        B::Error: std::fmt::Display,
    {
        if let Some(content_type) = request
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
        {
            if !content_type.starts_with("application/json") {
                tracing::debug!(content_type, "decoding cross-domain RPC from a non-JSON content type");
            }
        }

        let body = request
            .into_body()
            .collect()
            .await
            .map_err(|e| XdrpcError::Transport(format!("Failed to read request body: {}", e)))?
            .to_bytes();

        Self::parse_rpc(body)
    }

    /// Parses a cross-domain RPC envelope from raw body bytes.
    ///
    /// The body must be a single JSON object with `method`, `path`, and
    /// `data` members. `method` and `path` must be present and non-null;
    /// `data` must be present but may hold any JSON value, an explicit
    /// null included. The payload is stored back as compact JSON text, so
    /// a structured payload round-trips intact through
    /// [`CrossDomainRpc::data_as`].
    ///
    /// # Arguments
    ///
    /// * `body` - Raw request body bytes
    ///
    /// # Returns
    ///
    /// The validated `CrossDomainRpc`, or [`XdrpcError::Parse`] for a
    /// malformed body, or [`XdrpcError::InvalidArgument`] naming the
    /// first missing member
    ///
    /// # Example
    ///
    /// ```
    /// use hyper::body::Bytes;
    /// use xdrpc::CrossDomainRpcLoader;
    ///
    /// let body = Bytes::from(r#"{"method":"GET","path":"/","data":{"foo":"bar"}}"#);
    /// let rpc = CrossDomainRpcLoader::parse_rpc(body).unwrap();
    /// assert_eq!(rpc.data, r#"{"foo":"bar"}"#);
    /// ```
    pub fn parse_rpc(body: Bytes) -> Result<CrossDomainRpc> {
        let json: Value = serde_json::from_slice(&body)
            .map_err(|e| XdrpcError::Parse(format!("Failed to parse JSON request: {}", e)))?;
        let envelope = json.as_object().ok_or_else(|| {
            XdrpcError::Parse("Failed to parse JSON request: not a JSON object".to_string())
        })?;

        let method = required_field(envelope, "method")?;
        let path = required_field(envelope, "path")?;

        // `data` is checked for presence only; an explicit null is a payload.
        let data = envelope
            .get("data")
            .ok_or_else(|| XdrpcError::InvalidArgument("data".to_string()))?
            .to_string();

        Ok(CrossDomainRpc::new(method, path, data))
    }
}

/// Extracts a required envelope member, rejecting absent and null values.
///
/// String values are taken verbatim; any other non-null value is rendered
/// as its compact JSON text.
fn required_field(envelope: &Map<String, Value>, key: &str) -> Result<String> {
    let value = envelope
        .get(key)
        .filter(|value| !value.is_null())
        .ok_or_else(|| XdrpcError::InvalidArgument(key.to_string()))?;

    Ok(match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    })
}
