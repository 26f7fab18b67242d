//! Rivet - HTTP/1.1 on raw sockets
//!
//! Request parsing, routing and response rendering written directly against
//! TCP streams, plus a small file store for upload and download.

pub mod config;
pub mod files;
pub mod http;
pub mod server;
