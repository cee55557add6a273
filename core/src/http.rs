//! HTTP request and response values as plain data.
//!
//! # Design
//! These types describe a single HTTP exchange without touching the network.
//! `Request` values are produced by the facade's injected request factory and
//! handed to the transport, which reads them but never retains them past the
//! call. `Response` values are produced by the injected response factory from
//! the raw transfer result. All fields are owned (`String`, `Vec`) so values
//! can move freely between the factories, the transport, and error values.

use std::fmt;
use std::str::FromStr;

use url::Url;

use crate::error::HttpError;

/// HTTP method for a request.
///
/// Parsing via [`FromStr`] trims surrounding whitespace and is
/// case-insensitive, so `" get "` parses as [`Method::Get`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Head,
    Post,
    Put,
    Patch,
    Delete,
    Connect,
    Options,
    Trace,
}

impl Method {
    /// Every supported method.
    pub const ALL: [Method; 9] = [
        Method::Get,
        Method::Head,
        Method::Post,
        Method::Put,
        Method::Patch,
        Method::Delete,
        Method::Connect,
        Method::Options,
        Method::Trace,
    ];

    /// The canonical uppercase token sent on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Head => "HEAD",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
            Method::Connect => "CONNECT",
            Method::Options => "OPTIONS",
            Method::Trace => "TRACE",
        }
    }

    /// Whether this method carries a request body to the server.
    pub fn is_mutation(self) -> bool {
        matches!(self, Method::Post | Method::Put | Method::Patch)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The method string did not name a supported HTTP method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidMethod {
    name: String,
}

impl fmt::Display for InvalidMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unsupported HTTP method {:?}", self.name)
    }
}

impl std::error::Error for InvalidMethod {}

impl FromStr for Method {
    type Err = InvalidMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        Method::ALL
            .into_iter()
            .find(|method| method.as_str().eq_ignore_ascii_case(token))
            .ok_or_else(|| InvalidMethod {
                name: token.to_string(),
            })
    }
}

/// Header multimap: case-insensitive names, ordered values.
///
/// Insertion order and the original spelling of names are preserved; lookups
/// ignore ASCII case. A name maps to an ordered list of values so repeated
/// headers survive intact.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers {
    entries: Vec<(String, Vec<String>)>,
}

impl Headers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a value to `name`, keeping any existing values.
    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entry_mut(&name) {
            Some(values) => values.push(value),
            None => self.entries.push((name, vec![value])),
        }
    }

    /// Replace all values of `name` with a single value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entry_mut(&name) {
            Some(values) => {
                values.clear();
                values.push(value);
            }
            None => self.entries.push((name, vec![value])),
        }
    }

    /// All values recorded for `name`, in insertion order.
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, values)| values.as_slice())
    }

    /// The first value recorded for `name`.
    pub fn first(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(|values| values.first()).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Number of distinct header names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }

    /// Flatten into wire form: one `"Name: value1,value2"` line per name.
    pub fn to_lines(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|(name, values)| format!("{}: {}", name, values.join(",")))
            .collect()
    }

    fn entry_mut(&mut self, name: &str) -> Option<&mut Vec<String>> {
        self.entries
            .iter_mut()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, values)| values)
    }
}

/// An outgoing HTTP request.
///
/// Owned by the caller until passed to the transport. The body starts empty;
/// mutating verbs fill it in before the request is sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub method: Method,
    pub uri: Url,
    pub headers: Headers,
    pub body: Vec<u8>,
}

impl Request {
    pub fn new(method: Method, uri: Url) -> Self {
        Self {
            method,
            uri,
            headers: Headers::new(),
            body: Vec::new(),
        }
    }
}

/// An HTTP response, constructed fresh per exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub reason: String,
    pub headers: Headers,
    pub body: Vec<u8>,
}

impl Response {
    pub fn new(body: Vec<u8>, status: u16, reason: impl Into<String>) -> Self {
        Self {
            status,
            reason: reason.into(),
            headers: Headers::new(),
            body,
        }
    }

    /// The body decoded as UTF-8, with invalid sequences replaced.
    pub fn body_text(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status)
    }

    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.status)
    }
}

/// Conversion into a request target URI.
///
/// Accepts an already-parsed [`Url`] verbatim, or a string which must parse
/// as an absolute URI. A string of the wrong shape is rejected with
/// [`HttpError::InvalidUri`] before any I/O happens.
pub trait IntoUri {
    fn into_uri(self) -> Result<Url, HttpError>;
}

impl IntoUri for Url {
    fn into_uri(self) -> Result<Url, HttpError> {
        Ok(self)
    }
}

impl IntoUri for &Url {
    fn into_uri(self) -> Result<Url, HttpError> {
        Ok(self.clone())
    }
}

impl IntoUri for &str {
    fn into_uri(self) -> Result<Url, HttpError> {
        Url::parse(self).map_err(|cause| HttpError::InvalidUri {
            uri: self.to_string(),
            message: cause.to_string(),
        })
    }
}

impl IntoUri for String {
    fn into_uri(self) -> Result<Url, HttpError> {
        self.as_str().into_uri()
    }
}

impl IntoUri for &String {
    fn into_uri(self) -> Result<Url, HttpError> {
        self.as_str().into_uri()
    }
}
