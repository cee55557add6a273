//! One-shot libcurl execution of a prepared request.
//!
//! Each call acquires its own `Easy` handle, configures it from the request,
//! performs the transfer into a buffer, and drops the handle before
//! returning on every path. Nothing is shared between calls.

use std::time::Duration;

use curl::easy::{Easy, HttpVersion, List};
use log::trace;

use crate::http::{Method, Request};

const MAX_REDIRECTS: u32 = 8;
const TIMEOUT: Duration = Duration::from_secs(30);

/// Raw result of a completed transfer.
pub(crate) struct Transfer {
    pub status: u16,
    pub body: Vec<u8>,
}

/// Where an execution attempt failed.
pub(crate) enum TransportError {
    /// The handle could not be configured; no bytes were sent.
    Setup(curl::Error),
    /// The transfer itself failed.
    Perform(curl::Error),
}

/// Execute `request` synchronously, buffering the response body.
pub(crate) fn execute(request: &Request) -> Result<Transfer, TransportError> {
    let mut handle = Easy::new();
    configure(&mut handle, request).map_err(TransportError::Setup)?;

    let mut body = Vec::new();
    {
        let mut transfer = handle.transfer();
        transfer
            .write_function(|chunk| {
                body.extend_from_slice(chunk);
                Ok(chunk.len())
            })
            .map_err(TransportError::Setup)?;
        transfer.perform().map_err(TransportError::Perform)?;
    }

    let status = handle.response_code().map_err(TransportError::Perform)? as u16;
    trace!("{} {} completed with status {status}", request.method, request.uri);

    Ok(Transfer { status, body })
}

fn configure(handle: &mut Easy, request: &Request) -> Result<(), curl::Error> {
    handle.url(request.uri.as_str())?;

    // GET and POST have dedicated shortcuts; everything else rides on the
    // custom-method option with the canonical verb token.
    match request.method {
        Method::Get => handle.get(true)?,
        Method::Post => handle.post(true)?,
        method => handle.custom_request(method.as_str())?,
    }

    if request.method.is_mutation() {
        handle.post_fields_copy(&request.body)?;
    }

    handle.accept_encoding("")?;
    handle.follow_location(true)?;
    handle.max_redirections(MAX_REDIRECTS)?;
    handle.timeout(TIMEOUT)?;
    handle.http_version(HttpVersion::V11)?;
    // HEAD responses have no body; surface the header block instead.
    handle.show_header(request.method == Method::Head)?;

    let mut headers = List::new();
    for line in request.headers.to_lines() {
        trace!("header {line}");
        headers.append(&line)?;
    }
    handle.http_headers(headers)?;

    Ok(())
}
