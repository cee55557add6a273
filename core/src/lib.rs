//! Minimal HTTP client over the native curl transport.
//!
//! # Overview
//! One dispatch method per HTTP verb plus raw `create_request` /
//! `create_response` / `send_request` primitives. Request and response
//! construction is injected through two factory closures, so callers decide
//! what their values look like (default headers, decoded payloads) while the
//! facade owns dispatch and error translation.
//!
//! # Design
//! - `Http` is stateless; each call runs one synchronous transfer on its own
//!   transport handle and blocks until it completes.
//! - Wire-level behavior (redirects, header parsing, TLS) belongs to the
//!   native transport; the facade only selects options and translates
//!   outcomes into `Response` values or `HttpError` kinds.
//! - No retries, pooling, caching, or concurrency coordination; callers
//!   layer their own resilience on top.

pub mod client;
pub mod error;
pub mod http;
pub mod status;

mod transport;

pub use client::{Http, RequestFactory, ResponseFactory};
pub use error::HttpError;
pub use http::{Headers, IntoUri, InvalidMethod, Method, Request, Response};
