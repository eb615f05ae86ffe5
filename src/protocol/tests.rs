//! Integration tests for the protocol module
//!
//! These tests verify the correctness of the RPC value type, its
//! serialization, payload re-parsing, and error formatting.

#[cfg(test)]
mod tests {
    use super::super::*;
    use serde_json::json;
    use std::collections::HashMap;

    #[test]
    fn test_rpc_creation() {
        let rpc = CrossDomainRpc::new("POST", "/session", r#"{"foo":"bar"}"#);
        assert_eq!(rpc.method, "POST");
        assert_eq!(rpc.path, "/session");
        assert_eq!(rpc.data, r#"{"foo":"bar"}"#);
    }

    #[test]
    fn test_rpc_equality() {
        let a = CrossDomainRpc::new("GET", "/", "null");
        let b = CrossDomainRpc::new("GET", "/", "null");
        assert_eq!(a, b);

        let c = CrossDomainRpc::new("GET", "/other", "null");
        assert_ne!(a, c);
    }

    #[test]
    fn test_rpc_serialization_roundtrip() {
        let rpc = CrossDomainRpc::new("GET", "/status", "[1,2,3]");
        let serialized = serde_json::to_value(&rpc).unwrap();
        let deserialized: CrossDomainRpc = serde_json::from_value(serialized).unwrap();
        assert_eq!(rpc, deserialized);
    }

    #[test]
    fn test_rpc_data_as_mapping() {
        let rpc = CrossDomainRpc::new("GET", "/", r#"{"foo":"bar"}"#);
        let data: HashMap<String, String> = rpc.data_as().unwrap();
        assert_eq!(data, HashMap::from([("foo".to_string(), "bar".to_string())]));
    }

    #[test]
    fn test_rpc_data_as_value() {
        let rpc = CrossDomainRpc::new("GET", "/", r#"{"nested":{"n":1}}"#);
        let data: serde_json::Value = rpc.data_as().unwrap();
        assert_eq!(data, json!({"nested": {"n": 1}}));
    }

    #[test]
    fn test_rpc_data_as_rejects_mismatched_shape() {
        let rpc = CrossDomainRpc::new("GET", "/", r#""just a string""#);
        let result: Result<HashMap<String, String>> = rpc.data_as();
        assert!(matches!(result, Err(XdrpcError::JsonSerialization(_))));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            XdrpcError::InvalidArgument("method".to_string()).to_string(),
            "Missing required parameter: method"
        );
        assert_eq!(
            XdrpcError::Parse("unexpected end of input".to_string()).to_string(),
            "Failed to parse JSON request: unexpected end of input"
        );
        assert_eq!(
            XdrpcError::Transport("connection reset".to_string()).to_string(),
            "Transport error: connection reset"
        );
    }
}
