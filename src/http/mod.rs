//! HTTP protocol implementation.
//!
//! A deliberately small HTTP/1.1 subset: one request per connection, no
//! keep-alive, no chunked bodies. Everything is parsed and rendered by hand.
//!
//! # Architecture
//!
//! - **`connection`**: Owns one accepted stream from first read to close
//! - **`parser`**: Decodes the bytes of a read into a [`request::Request`]
//! - **`request`**: Request representation with raw, ordered header lines
//! - **`router`**: Ordered route table, first match wins
//! - **`response`**: Status codes, content types and response constructors
//! - **`writer`**: Serializes and writes responses to the client
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← One 16 KiB read, more only for a declared body
//!        └──────┬──────┘
//!               │ Request decoded (or 400 for a malformed one)
//!               ▼
//!        ┌──────────────────┐
//!        │   Processing     │ ← Route and build the response
//!        └──────┬───────────┘
//!               │ Response ready
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Send response, shut the stream down
//!        └──────┬───────────┘
//!               ▼
//!            Closed
//! ```
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use rivet::files::FileStore;
//! use rivet::http::connection::{Connection, ConnectionSettings};
//! use rivet::http::router::Router;
//! use tokio::net::TcpListener;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let listener = TcpListener::bind("127.0.0.1:4221").await?;
//!     let router = Arc::new(Router::new(FileStore::disabled()));
//!
//!     loop {
//!         let (socket, _addr) = listener.accept().await?;
//!         let router = router.clone();
//!         tokio::spawn(async move {
//!             let mut conn = Connection::new(socket, router, ConnectionSettings::default());
//!             if let Err(e) = conn.run().await {
//!                 eprintln!("Connection error: {}", e);
//!             }
//!         });
//!     }
//! }
//! ```

pub mod request;
pub mod response;
pub mod parser;
pub mod router;
pub mod connection;
pub mod writer;
