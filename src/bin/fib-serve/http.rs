//! Minimal HTTP/1.1 framing: read one request head, answer it, close.

use log::info;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use fibseq::{handle_query, Response, Status};

/// Upper bound on the request line plus headers.
pub const MAX_HEAD_BYTES: usize = 8 * 1024;

/// Connection errors
#[derive(Debug, thiserror::Error)]
pub enum ConnectionError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("request head larger than 8 KiB")]
    TooLarge,
    #[error("connection closed before the request head was complete")]
    Incomplete,
}

/// The parts of a request line the server routes on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestLine<'a> {
    pub method: &'a str,
    pub path: &'a str,
    pub query: &'a str,
}

/// Parses `METHOD /path?query HTTP/1.x` from the first line of `head`.
pub fn parse_request_line(head: &str) -> Option<RequestLine<'_>> {
    let line = head.lines().next()?;
    let mut parts = line.split(' ');
    let method = parts.next()?;
    let target = parts.next()?;
    let version = parts.next()?;
    if parts.next().is_some() || method.is_empty() || !version.starts_with("HTTP/1.") {
        return None;
    }

    let (path, query) = target.split_once('?').unwrap_or((target, ""));
    if !path.starts_with('/') {
        return None;
    }

    Some(RequestLine {
        method,
        path,
        query,
    })
}

/// Picks the response for a parsed request.
pub fn dispatch(request: &RequestLine<'_>, route: &str) -> Response {
    if request.path != route {
        return Response::not_found();
    }
    if request.method != "GET" {
        return Response::method_not_allowed();
    }
    handle_query(request.query)
}

/// Serializes a response with `Connection: close` framing.
pub fn encode_response(response: &Response) -> Vec<u8> {
    let head = format!(
        "HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        response.status,
        response.content_type,
        response.body.len()
    );
    let mut out = Vec::with_capacity(head.len() + response.body.len());
    out.extend_from_slice(head.as_bytes());
    out.extend_from_slice(response.body.as_bytes());
    out
}

/// Reads until the blank line that ends the request head.
pub async fn read_head<R: AsyncRead + Unpin>(reader: &mut R) -> Result<String, ConnectionError> {
    let mut buf = Vec::with_capacity(1024);
    let mut chunk = [0u8; 1024];
    loop {
        let n = reader.read(&mut chunk).await?;
        if n == 0 {
            return Err(ConnectionError::Incomplete);
        }
        buf.extend_from_slice(&chunk[..n]);

        if let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            buf.truncate(end);
            return Ok(String::from_utf8_lossy(&buf).into_owned());
        }
        if buf.len() > MAX_HEAD_BYTES {
            return Err(ConnectionError::TooLarge);
        }
    }
}

/// Answers a single request on `stream` and closes it.
pub async fn serve_connection<S>(mut stream: S, route: &str) -> Result<(), ConnectionError>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    let response = match read_head(&mut stream).await {
        Ok(head) => match parse_request_line(&head) {
            Some(request) => {
                let response = dispatch(&request, route);
                info!(
                    "{} {}?{} -> {}",
                    request.method,
                    request.path,
                    request.query,
                    response.status.code()
                );
                response
            }
            None => Response::error(Status::BadRequest, "Malformed request"),
        },
        Err(ConnectionError::TooLarge) => {
            Response::error(Status::BadRequest, "Request header too large")
        }
        Err(err) => return Err(err),
    };

    stream.write_all(&encode_response(&response)).await?;
    stream.shutdown().await?;
    Ok(())
}
