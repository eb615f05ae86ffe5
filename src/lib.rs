//! Cross-Domain RPC Envelope Decoding
//!
//! This crate decodes cross-domain RPC envelopes from the JSON bodies of
//! inbound HTTP requests.
//!
//! # Overview
//!
//! A cross-domain RPC is a JSON object describing an HTTP call to be
//! dispatched on the caller's behalf:
//!
//! ```text
//! {
//!   "method": "<http verb>",
//!   "path": "<resource path>",
//!   "data": <any JSON value>
//! }
//! ```
//!
//! The loader reads a request body, validates the envelope, and produces an
//! immutable [`CrossDomainRpc`] record for a downstream dispatcher. A
//! malformed or incomplete envelope is rejected outright; there is no
//! best-effort decoding and no partial result.
//!
//! Transport, authentication, and dispatch of the decoded RPC are the
//! caller's concerns: an HTTP server hands the loader a request, and
//! whatever consumes the result decides what the call means.
//!
//! # Components
//!
//! - [`protocol`] - The decoded value type and error taxonomy
//! - [`loader`] - Body decoding and envelope validation
//!
//! # Example
//!
//! ```
//! use hyper::body::Bytes;
//! use xdrpc::CrossDomainRpcLoader;
//!
//! let body = Bytes::from(r#"{"method":"POST","path":"/resource","data":{"foo":"bar"}}"#);
//! let rpc = CrossDomainRpcLoader::parse_rpc(body).unwrap();
//!
//! assert_eq!(rpc.method, "POST");
//! assert_eq!(rpc.path, "/resource");
//! assert_eq!(rpc.data, r#"{"foo":"bar"}"#);
//! ```

pub mod loader;
pub mod protocol;

pub use loader::CrossDomainRpcLoader;
pub use protocol::*;
