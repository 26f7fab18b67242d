use crate::http::request::{Method, Request};

#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    /// Nothing was read
    Empty,
    /// Start line or headers are not UTF-8
    InvalidEncoding,
    /// Start line lacks a method or a `/`-rooted path
    MalformedStartLine,
}

/// Decodes one request from the bytes of a single read.
///
/// The body is everything after the first `\r\n\r\n`, cut to
/// `Content-Length` when that header is present. Without a separator the
/// whole buffer is the head and the body is empty.
pub fn parse_http_request(buf: &[u8]) -> Result<Request, ParseError> {
    if buf.is_empty() {
        return Err(ParseError::Empty);
    }

    let (head_bytes, body_bytes) = match find_headers_end(buf) {
        Some(end) => (&buf[..end], &buf[end + 4..]),
        None => (buf, &buf[buf.len()..]),
    };

    let head = std::str::from_utf8(head_bytes).map_err(|_| ParseError::InvalidEncoding)?;
    let mut lines = head.split("\r\n");

    // Start line
    let start_line = lines.next().ok_or(ParseError::MalformedStartLine)?;
    let mut parts = start_line.split(' ');

    let method = parts
        .next()
        .filter(|m| !m.is_empty())
        .ok_or(ParseError::MalformedStartLine)?;
    let path = parts
        .next()
        .filter(|p| p.starts_with('/'))
        .ok_or(ParseError::MalformedStartLine)?;
    let version = parts.next().filter(|v| !v.is_empty()).unwrap_or("HTTP/1.1");

    // Headers stop at the first empty line
    let header_lines: Vec<String> = lines
        .take_while(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    let mut request = Request {
        method: Method::from_token(method),
        path: path.to_string(),
        version: version.to_string(),
        header_lines,
        body: Vec::new(),
    };

    let body_len = match request.content_length() {
        Some(declared) => declared.min(body_bytes.len()),
        None => body_bytes.len(),
    };
    request.body = body_bytes[..body_len].to_vec();

    Ok(request)
}

/// Number of body bytes announced by `Content-Length` but not yet received.
pub fn missing_body_bytes(request: &Request) -> usize {
    request
        .content_length()
        .map(|declared| declared.saturating_sub(request.body.len()))
        .unwrap_or(0)
}

fn find_headers_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_get() {
        let req = b"GET / HTTP/1.1\r\nHost: example.com\r\n\r\n";

        let parsed = parse_http_request(req).unwrap();

        assert_eq!(parsed.path, "/");
        assert_eq!(parsed.header("Host"), Some("example.com"));
        assert!(parsed.body.is_empty());
    }

    #[test]
    fn separator_position() {
        assert_eq!(find_headers_end(b"GET / HTTP/1.1\r\n\r\n"), Some(14));
        assert_eq!(find_headers_end(b"GET / HTTP/1.1\r\n"), None);
    }
}
