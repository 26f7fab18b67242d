use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use bytes::BytesMut;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::time::timeout;

use crate::http::parser::{ParseError, missing_body_bytes, parse_http_request};
use crate::http::request::Request;
use crate::http::response::Response;
use crate::http::router::Router;
use crate::http::writer::ResponseWriter;

/// Size of the single read that carries the request head.
pub const READ_BUFFER_SIZE: usize = 16 * 1024;

const DEFAULT_MAX_BODY_SIZE: usize = 8 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct ConnectionSettings {
    /// Deadline for each read; `None` waits forever
    pub read_timeout: Option<Duration>,
    /// Bodies announcing more than this are rejected with 400
    pub max_body_size: usize,
}

impl Default for ConnectionSettings {
    fn default() -> Self {
        Self {
            read_timeout: None,
            max_body_size: DEFAULT_MAX_BODY_SIZE,
        }
    }
}

pub enum ConnectionState {
    Reading,
    Processing(Request),
    Writing(ResponseWriter),
    Closed,
}

enum ReadOutcome {
    Request(Request),
    Malformed(ParseError),
    BodyTooLarge(usize),
    Closed,
}

/// Serves exactly one request on a stream, then closes it.
pub struct Connection<S> {
    stream: S,
    buffer: BytesMut,
    router: Arc<Router>,
    settings: ConnectionSettings,
    state: ConnectionState,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, router: Arc<Router>, settings: ConnectionSettings) -> Self {
        Self {
            stream,
            buffer: BytesMut::with_capacity(READ_BUFFER_SIZE),
            router,
            settings,
            state: ConnectionState::Reading,
        }
    }

    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match std::mem::replace(&mut self.state, ConnectionState::Closed) {
                ConnectionState::Reading => {
                    self.state = match self.read_request().await? {
                        ReadOutcome::Request(req) => ConnectionState::Processing(req),
                        ReadOutcome::Malformed(e) => {
                            tracing::warn!(error = ?e, "Malformed request");
                            ConnectionState::Writing(ResponseWriter::new(&Response::bad_request()))
                        }
                        ReadOutcome::BodyTooLarge(declared) => {
                            tracing::warn!(
                                declared,
                                limit = self.settings.max_body_size,
                                "Request body too large"
                            );
                            ConnectionState::Writing(ResponseWriter::new(&Response::bad_request()))
                        }
                        ReadOutcome::Closed => {
                            tracing::debug!("Client closed connection before sending a request");
                            ConnectionState::Closed
                        }
                    };
                }

                ConnectionState::Processing(req) => {
                    let response = self.router.handle(&req).await;

                    tracing::info!(
                        method = %req.method,
                        path = %req.path,
                        status = response.status.as_u16(),
                        "Request handled"
                    );

                    self.state = ConnectionState::Writing(ResponseWriter::new(&response));
                }

                ConnectionState::Writing(mut writer) => {
                    writer
                        .write_to_stream(&mut self.stream)
                        .await
                        .context("failed to write response")?;
                    tracing::debug!(bytes = writer.len(), "Response written");

                    if let Err(e) = self.stream.shutdown().await {
                        tracing::debug!(error = %e, "Shutdown after write failed");
                    }
                }

                ConnectionState::Closed => break,
            }
        }

        Ok(())
    }

    async fn read_request(&mut self) -> anyhow::Result<ReadOutcome> {
        let n = self.read_more().await.context("failed to read request")?;
        if n == 0 {
            return Ok(ReadOutcome::Closed);
        }

        let mut request = match parse_http_request(&self.buffer) {
            Ok(req) => req,
            Err(e) => return Ok(ReadOutcome::Malformed(e)),
        };

        let mut missing = missing_body_bytes(&request);
        if missing == 0 {
            return Ok(ReadOutcome::Request(request));
        }

        let declared = request.body.len() + missing;
        if declared > self.settings.max_body_size {
            return Ok(ReadOutcome::BodyTooLarge(declared));
        }

        // The body spilled past the first read
        self.buffer.reserve(missing);
        while missing > 0 {
            let n = self.read_more().await.context("failed to read request body")?;
            if n == 0 {
                tracing::debug!(missing, "Client closed connection mid-body");
                break;
            }
            missing = missing.saturating_sub(n);
        }

        request = match parse_http_request(&self.buffer) {
            Ok(req) => req,
            Err(e) => return Ok(ReadOutcome::Malformed(e)),
        };
        Ok(ReadOutcome::Request(request))
    }

    async fn read_more(&mut self) -> anyhow::Result<usize> {
        let n = match self.settings.read_timeout {
            Some(limit) => timeout(limit, self.stream.read_buf(&mut self.buffer))
                .await
                .context("read timed out")??,
            None => self.stream.read_buf(&mut self.buffer).await?,
        };
        Ok(n)
    }
}
