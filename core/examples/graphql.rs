//! Query a public GraphQL API through the facade.
//!
//! The request factory injects the content-type every request needs, which
//! keeps the call site down to building the payload and posting it.

use net_core::{Http, Request, Response};

const ENDPOINT: &str = "https://countries.trevorblades.com/";

const CURRENCY_QUERY: &str = "\
query Currency($country: ID!) {
  country(code: $country) {
    name
    currency
  }
}";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let http = Http::new(
        Box::new(|method, uri| {
            let mut request = Request::new(method, uri);
            request.headers.set("content-type", "application/json");
            request
        }),
        Box::new(|body, status, reason| Response::new(body, status, reason)),
    );

    let payload = serde_json::json!({
        "query": CURRENCY_QUERY,
        "variables": { "country": "CA" },
        "operationName": "Currency",
    });

    let response = http.post(ENDPOINT, payload.to_string())?;
    let data: serde_json::Value = serde_json::from_slice(&response.body)?;
    println!("{data:#}");

    Ok(())
}
