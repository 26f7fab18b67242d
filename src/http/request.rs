use std::fmt;

/// HTTP request methods.
///
/// Only GET and POST are served. Any other token is still accepted by the
/// parser and kept verbatim so the router can answer 405 Method Not Allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    /// GET - Retrieve a resource
    GET,
    /// POST - Create or submit data
    POST,
    /// Any other token from the start line
    Other(String),
}

impl Method {
    /// Maps a start-line token to a method.
    ///
    /// Matching is case-sensitive, as on the wire.
    ///
    /// # Example
    ///
    /// ```
    /// # use rivet::http::request::Method;
    /// assert_eq!(Method::from_token("GET"), Method::GET);
    /// assert_eq!(Method::from_token("get"), Method::Other("get".to_string()));
    /// ```
    pub fn from_token(s: &str) -> Self {
        match s {
            "GET" => Method::GET,
            "POST" => Method::POST,
            other => Method::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Method::GET => "GET",
            Method::POST => "POST",
            Method::Other(s) => s,
        }
    }

    /// Whether the server serves this method at all.
    pub fn is_supported(&self) -> bool {
        matches!(self, Method::GET | Method::POST)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A decoded HTTP request.
///
/// Header lines are kept raw and in arrival order. No case folding and no
/// deduplication is done; lookups scan the lines for a `Name:` prefix.
#[derive(Debug, Clone)]
pub struct Request {
    /// The HTTP method (GET, POST, etc.)
    pub method: Method,
    /// The request target exactly as sent, always starting with `/`
    pub path: String,
    /// HTTP version, "HTTP/1.1" when the start line omits it
    pub version: String,
    /// Raw `Name: value` header lines
    pub header_lines: Vec<String>,
    /// Bytes following the blank line that ends the headers
    pub body: Vec<u8>,
}

/// Builder for constructing Request objects.
pub struct RequestBuilder {
    method: Option<Method>,
    path: Option<String>,
    version: Option<String>,
    header_lines: Vec<String>,
    body: Vec<u8>,
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self {
            method: None,
            path: None,
            version: None,
            header_lines: Vec::new(),
            body: Vec::new(),
        }
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn header(mut self, key: &str, value: &str) -> Self {
        self.header_lines.push(format!("{}: {}", key, value));
        self
    }

    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    pub fn build(self) -> Result<Request, &'static str> {
        Ok(Request {
            method: self.method.ok_or("method missing")?,
            path: self.path.ok_or("path missing")?,
            version: self.version.unwrap_or_else(|| "HTTP/1.1".to_string()),
            header_lines: self.header_lines,
            body: self.body,
        })
    }
}

impl Default for RequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Request {
    /// Returns the value of the first header line starting with `name:`.
    ///
    /// The comparison is case-sensitive and the value is trimmed of
    /// surrounding whitespace.
    ///
    /// # Example
    ///
    /// ```
    /// # use rivet::http::request::{Method, RequestBuilder};
    /// let req = RequestBuilder::new()
    ///     .method(Method::GET)
    ///     .path("/")
    ///     .header("User-Agent", "curl/8.0")
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(req.header("User-Agent"), Some("curl/8.0"));
    /// assert_eq!(req.header("user-agent"), None);
    /// ```
    pub fn header(&self, name: &str) -> Option<&str> {
        self.header_lines.iter().find_map(|line| {
            line.strip_prefix(name)
                .and_then(|rest| rest.strip_prefix(':'))
                .map(str::trim)
        })
    }

    /// The declared `Content-Length`, if present and numeric.
    pub fn content_length(&self) -> Option<usize> {
        self.header("Content-Length").and_then(|v| v.parse().ok())
    }

    /// The `User-Agent` value, empty when the header is absent.
    pub fn user_agent(&self) -> &str {
        self.header("User-Agent").unwrap_or("")
    }
}
