//! HTTP facade: one dispatch method per verb over the native transport.
//!
//! # Design
//! `Http` composes three collaborators: an injected request factory, the
//! transport executor, and an injected response factory. A verb method
//! builds the request via the factory, mutating verbs attach their body,
//! and everything funnels through `send_request`, which executes the
//! transfer and hands the raw result to the response factory. The facade
//! holds no per-call state, so one instance can be shared across threads;
//! resilience (retries, backoff) is the caller's concern.

use log::debug;
use url::Url;

use crate::error::HttpError;
use crate::http::{IntoUri, Method, Request, Response};
use crate::status;
use crate::transport::{self, TransportError};

/// Builds a request with the given method and target and an empty body.
pub type RequestFactory = Box<dyn Fn(Method, Url) -> Request + Send + Sync>;

/// Builds a response from a raw body, a status code, and a reason phrase.
pub type ResponseFactory = Box<dyn Fn(Vec<u8>, u16, &str) -> Response + Send + Sync>;

/// Make HTTP network requests.
pub struct Http {
    request: RequestFactory,
    response: ResponseFactory,
}

impl Http {
    /// Create a facade around the given request and response factories.
    pub fn new(request: RequestFactory, response: ResponseFactory) -> Self {
        Self { request, response }
    }

    /// Issue an HTTP `GET` request to the given URI.
    pub fn get(&self, uri: impl IntoUri) -> Result<Response, HttpError> {
        self.send_request(self.create_request(Method::Get, uri)?)
    }

    /// Issue an HTTP `HEAD` request to the given URI.
    pub fn head(&self, uri: impl IntoUri) -> Result<Response, HttpError> {
        self.send_request(self.create_request(Method::Head, uri)?)
    }

    /// Issue an HTTP `POST` request with the given body.
    pub fn post(&self, uri: impl IntoUri, body: impl Into<Vec<u8>>) -> Result<Response, HttpError> {
        self.mutation(self.create_request(Method::Post, uri)?, body)
    }

    /// Issue an HTTP `PUT` request with the given body.
    pub fn put(&self, uri: impl IntoUri, body: impl Into<Vec<u8>>) -> Result<Response, HttpError> {
        self.mutation(self.create_request(Method::Put, uri)?, body)
    }

    /// Issue an HTTP `PATCH` request with the given body.
    pub fn patch(&self, uri: impl IntoUri, body: impl Into<Vec<u8>>) -> Result<Response, HttpError> {
        self.mutation(self.create_request(Method::Patch, uri)?, body)
    }

    /// Issue an HTTP `DELETE` request to the given URI.
    pub fn delete(&self, uri: impl IntoUri) -> Result<Response, HttpError> {
        self.send_request(self.create_request(Method::Delete, uri)?)
    }

    /// Issue an HTTP `CONNECT` request to the given URI.
    pub fn connect(&self, uri: impl IntoUri) -> Result<Response, HttpError> {
        self.send_request(self.create_request(Method::Connect, uri)?)
    }

    /// Issue an HTTP `OPTIONS` request to the given URI.
    pub fn options(&self, uri: impl IntoUri) -> Result<Response, HttpError> {
        self.send_request(self.create_request(Method::Options, uri)?)
    }

    /// Issue an HTTP `TRACE` request to the given URI.
    pub fn trace(&self, uri: impl IntoUri) -> Result<Response, HttpError> {
        self.send_request(self.create_request(Method::Trace, uri)?)
    }

    /// Build a request via the injected factory. Performs no I/O; a URI of
    /// the wrong shape fails with [`HttpError::InvalidUri`].
    pub fn create_request(&self, method: Method, uri: impl IntoUri) -> Result<Request, HttpError> {
        Ok((self.request)(method, uri.into_uri()?))
    }

    /// Build a response via the injected factory.
    ///
    /// The body is threaded explicitly; the facade keeps no received-body
    /// state between calls. An empty `reason` defaults to the canonical
    /// phrase for `status`, or the empty string for unregistered codes.
    pub fn create_response(&self, body: Vec<u8>, status: u16, reason: &str) -> Response {
        let reason = if reason.is_empty() {
            status::reason_phrase(status)
        } else {
            reason
        };

        (self.response)(body, status, reason)
    }

    /// Execute a fully-formed request over the native transport.
    ///
    /// Failure to prepare the transport maps to
    /// [`HttpError::RequestFailure`]; a failed transfer maps to
    /// [`HttpError::NetworkError`] carrying the originating request and the
    /// native error code. On success the response factory receives the raw
    /// transfer body, the status code, and the canonical reason phrase.
    pub fn send_request(&self, request: Request) -> Result<Response, HttpError> {
        debug!("{} {}", request.method, request.uri);

        match transport::execute(&request) {
            Ok(transfer) => {
                debug!("{} {} -> {}", request.method, request.uri, transfer.status);

                Ok(self.create_response(transfer.body, transfer.status, ""))
            }
            Err(TransportError::Setup(cause)) => Err(HttpError::RequestFailure {
                message: cause.to_string(),
                request,
            }),
            Err(TransportError::Perform(cause)) => Err(HttpError::NetworkError {
                message: format!("({}) {}", cause.code(), cause.description()),
                code: cause.code() as u32,
                request,
            }),
        }
    }

    fn mutation(&self, mut request: Request, body: impl Into<Vec<u8>>) -> Result<Response, HttpError> {
        request.body = body.into();
        self.send_request(request)
    }
}

impl Default for Http {
    /// A facade over plain [`Request::new`] / [`Response::new`] construction.
    fn default() -> Self {
        Self::new(
            Box::new(|method, uri| Request::new(method, uri)),
            Box::new(|body, status, reason| Response::new(body, status, reason)),
        )
    }
}
