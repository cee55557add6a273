//! Verify request construction and response defaults against JSON vectors
//! stored in `test-vectors/`.
//!
//! Each vector file describes inputs and expectations; comparing against
//! named cases keeps failures attributable without a live server.

use std::str::FromStr;

use net_core::{Http, Method};

#[test]
fn request_vectors() {
    let raw = include_str!("../../test-vectors/requests.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let http = Http::default();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let method = Method::from_str(case["method"].as_str().unwrap()).unwrap();
        let uri = case["uri"].as_str().unwrap();

        let request = http.create_request(method, uri).unwrap();
        assert_eq!(request.method, method, "{name}: method");
        assert_eq!(request.uri.as_str(), uri, "{name}: uri kept verbatim");
        assert_eq!(
            request.method.is_mutation(),
            case["mutation"].as_bool().unwrap(),
            "{name}: mutation"
        );
        assert!(request.body.is_empty(), "{name}: body starts empty");
        assert!(request.headers.is_empty(), "{name}: headers start empty");
    }
}

#[test]
fn response_vectors() {
    let raw = include_str!("../../test-vectors/responses.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let http = Http::default();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let status = case["status"].as_u64().unwrap() as u16;
        let expected = case["phrase"].as_str().unwrap();

        let response = http.create_response(Vec::new(), status, "");
        assert_eq!(response.status, status, "{name}: status");
        assert_eq!(response.reason, expected, "{name}: default phrase");

        // Identical inputs give identical responses.
        let again = http.create_response(Vec::new(), status, "");
        assert_eq!(response, again, "{name}: idempotent");

        let explicit = http.create_response(Vec::new(), status, "Custom Phrase");
        assert_eq!(explicit.reason, "Custom Phrase", "{name}: explicit phrase wins");
    }
}
