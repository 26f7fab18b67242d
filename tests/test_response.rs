use rivet::http::response::{ContentType, Response, ResponseBuilder, StatusCode};
use rivet::http::writer::serialize_response;

#[test]
fn test_status_code_as_u16() {
    assert_eq!(StatusCode::Ok.as_u16(), 200);
    assert_eq!(StatusCode::Created.as_u16(), 201);
    assert_eq!(StatusCode::BadRequest.as_u16(), 400);
    assert_eq!(StatusCode::NotFound.as_u16(), 404);
    assert_eq!(StatusCode::MethodNotAllowed.as_u16(), 405);
    assert_eq!(StatusCode::InternalServerError.as_u16(), 500);
}

#[test]
fn test_status_line_matches_code_and_phrase() {
    let statuses = [
        StatusCode::Ok,
        StatusCode::Created,
        StatusCode::BadRequest,
        StatusCode::NotFound,
        StatusCode::MethodNotAllowed,
        StatusCode::InternalServerError,
    ];

    for status in statuses {
        let expected = format!("HTTP/1.1 {} {}", status.as_u16(), status.reason_phrase());
        assert_eq!(status.status_line(), expected);
        assert_eq!(status.status_only_bytes(), format!("{}\r\n\r\n", expected).as_bytes());
    }
}

#[test]
fn test_status_only_serialization() {
    assert_eq!(serialize_response(&Response::ok()), b"HTTP/1.1 200 OK\r\n\r\n".to_vec());
    assert_eq!(
        serialize_response(&Response::not_found()),
        b"HTTP/1.1 404 Not Found\r\n\r\n".to_vec()
    );
    assert_eq!(
        serialize_response(&Response::method_not_allowed()),
        b"HTTP/1.1 405 Method Not Allowed\r\n\r\n".to_vec()
    );
    assert_eq!(
        serialize_response(&Response::created()),
        b"HTTP/1.1 201 Created\r\n\r\n".to_vec()
    );
    assert_eq!(
        serialize_response(&Response::internal_error()),
        b"HTTP/1.1 500 Internal Server Error\r\n\r\n".to_vec()
    );
}

#[test]
fn test_text_response_serialization() {
    let bytes = serialize_response(&Response::text("abc"));

    assert_eq!(
        bytes,
        b"HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: 3\r\n\r\nabc".to_vec()
    );
}

#[test]
fn test_octet_stream_response_serialization() {
    let bytes = serialize_response(&Response::octet_stream(vec![0u8, 1, 2]));

    let mut expected =
        b"HTTP/1.1 200 OK\r\nContent-Type: application/octet-stream\r\nContent-Length: 3\r\n\r\n"
            .to_vec();
    expected.extend_from_slice(&[0, 1, 2]);
    assert_eq!(bytes, expected);
}

#[test]
fn test_content_length_counts_bytes_not_chars() {
    let response = Response::text("héllo");

    assert_eq!(response.header("Content-Length"), Some("6"));
}

#[test]
fn test_empty_content_response_keeps_headers() {
    let response = Response::content(StatusCode::Ok, ContentType::TextPlain, Vec::new());
    let bytes = serialize_response(&response);

    assert_eq!(
        bytes,
        b"HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: 0\r\n\r\n".to_vec()
    );
}

#[test]
fn test_response_builder_preserves_custom_content_length() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .header("Content-Length", "999")
        .body(b"test".to_vec())
        .build();

    assert_eq!(response.header("Content-Length"), Some("999"));
    assert_eq!(response.headers.len(), 1);
}

#[test]
fn test_response_builder_replaces_header_in_place() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .header("Content-Type", "text/plain")
        .header("X-Custom", "value")
        .header("Content-Type", "application/octet-stream")
        .build();

    assert_eq!(response.headers[0].0, "Content-Type");
    assert_eq!(response.headers[0].1, "application/octet-stream");
    assert_eq!(response.headers.len(), 3);
}
