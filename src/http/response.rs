/// HTTP status codes the server emits.
///
/// - `Ok` (200): Request successful
/// - `Created` (201): Upload stored
/// - `BadRequest` (400): Malformed request
/// - `NotFound` (404): Unknown route or missing file
/// - `MethodNotAllowed` (405): Anything but GET or POST
/// - `InternalServerError` (500): Upload failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 201 Created
    Created,
    /// 400 Bad Request
    BadRequest,
    /// 404 Not Found
    NotFound,
    /// 405 Method Not Allowed
    MethodNotAllowed,
    /// 500 Internal Server Error
    InternalServerError,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use rivet::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotFound.as_u16(), 404);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::Created => 201,
            StatusCode::BadRequest => 400,
            StatusCode::NotFound => 404,
            StatusCode::MethodNotAllowed => 405,
            StatusCode::InternalServerError => 500,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::Created => "Created",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::NotFound => "Not Found",
            StatusCode::MethodNotAllowed => "Method Not Allowed",
            StatusCode::InternalServerError => "Internal Server Error",
        }
    }

    /// The full status line, without the trailing CRLF.
    pub fn status_line(&self) -> &'static str {
        match self {
            StatusCode::Ok => "HTTP/1.1 200 OK",
            StatusCode::Created => "HTTP/1.1 201 Created",
            StatusCode::BadRequest => "HTTP/1.1 400 Bad Request",
            StatusCode::NotFound => "HTTP/1.1 404 Not Found",
            StatusCode::MethodNotAllowed => "HTTP/1.1 405 Method Not Allowed",
            StatusCode::InternalServerError => "HTTP/1.1 500 Internal Server Error",
        }
    }

    /// Pre-rendered bytes of a response with no headers and no body.
    pub fn status_only_bytes(&self) -> &'static [u8] {
        match self {
            StatusCode::Ok => b"HTTP/1.1 200 OK\r\n\r\n",
            StatusCode::Created => b"HTTP/1.1 201 Created\r\n\r\n",
            StatusCode::BadRequest => b"HTTP/1.1 400 Bad Request\r\n\r\n",
            StatusCode::NotFound => b"HTTP/1.1 404 Not Found\r\n\r\n",
            StatusCode::MethodNotAllowed => b"HTTP/1.1 405 Method Not Allowed\r\n\r\n",
            StatusCode::InternalServerError => b"HTTP/1.1 500 Internal Server Error\r\n\r\n",
        }
    }
}

/// The two content types the server produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    TextPlain,
    OctetStream,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::TextPlain => "text/plain",
            ContentType::OctetStream => "application/octet-stream",
        }
    }
}

/// Represents a complete HTTP response ready to be sent to a client.
///
/// Headers keep insertion order so the serialized form is deterministic.
#[derive(Debug)]
pub struct Response {
    /// The HTTP status code
    pub status: StatusCode,
    /// Header name/value pairs in output order
    pub headers: Vec<(String, String)>,
    /// Response body as bytes
    pub body: Vec<u8>,
}

/// Builder for constructing HTTP responses in a fluent style.
///
/// # Example
///
/// ```
/// # use rivet::http::response::{ResponseBuilder, StatusCode};
/// let response = ResponseBuilder::new(StatusCode::Ok)
///     .header("Content-Type", "text/plain")
///     .body(b"hi".to_vec())
///     .build();
/// assert_eq!(response.header("Content-Length"), Some("2"));
/// ```
pub struct ResponseBuilder {
    status: StatusCode,
    headers: Vec<(String, String)>,
    body: Vec<u8>,
}

impl ResponseBuilder {
    /// Creates a new response builder with the specified status code.
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: Vec::new(),
        }
    }

    /// Adds or replaces a header, keeping its original position.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        let value = value.into();
        match self.headers.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.headers.push((key, value)),
        }
        self
    }

    /// Sets the response body.
    pub fn body(mut self, body: Vec<u8>) -> Self {
        self.body = body;
        self
    }

    /// Builds the final Response.
    ///
    /// Appends `Content-Length` from the body size unless already set.
    pub fn build(mut self) -> Response {
        if !self.headers.iter().any(|(k, _)| k == "Content-Length") {
            self.headers
                .push(("Content-Length".to_string(), self.body.len().to_string()));
        }

        Response {
            status: self.status,
            headers: self.headers,
            body: self.body,
        }
    }
}

impl Response {
    /// A response made of the status line alone.
    pub fn status_only(status: StatusCode) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: Vec::new(),
        }
    }

    /// A response carrying `Content-Type` and `Content-Length` headers.
    pub fn content(status: StatusCode, content_type: ContentType, body: impl Into<Vec<u8>>) -> Self {
        ResponseBuilder::new(status)
            .header("Content-Type", content_type.as_str())
            .body(body.into())
            .build()
    }

    /// 200 with a text/plain body.
    pub fn text(body: impl Into<Vec<u8>>) -> Self {
        Self::content(StatusCode::Ok, ContentType::TextPlain, body)
    }

    /// 200 with an application/octet-stream body.
    pub fn octet_stream(body: impl Into<Vec<u8>>) -> Self {
        Self::content(StatusCode::Ok, ContentType::OctetStream, body)
    }

    pub fn ok() -> Self {
        Self::status_only(StatusCode::Ok)
    }

    pub fn created() -> Self {
        Self::status_only(StatusCode::Created)
    }

    pub fn bad_request() -> Self {
        Self::status_only(StatusCode::BadRequest)
    }

    pub fn not_found() -> Self {
        Self::status_only(StatusCode::NotFound)
    }

    pub fn method_not_allowed() -> Self {
        Self::status_only(StatusCode::MethodNotAllowed)
    }

    pub fn internal_error() -> Self {
        Self::status_only(StatusCode::InternalServerError)
    }

    /// Looks up a header by exact name.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_status_only(&self) -> bool {
        self.headers.is_empty() && self.body.is_empty()
    }
}
