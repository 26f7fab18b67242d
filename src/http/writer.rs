use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::http::response::Response;

/// Renders a response to its wire form.
///
/// Status-only responses come from the pre-rendered constants.
pub fn serialize_response(resp: &Response) -> Vec<u8> {
    if resp.is_status_only() {
        return resp.status.status_only_bytes().to_vec();
    }

    let mut buf = Vec::with_capacity(64 + resp.body.len());

    buf.extend_from_slice(resp.status.status_line().as_bytes());
    buf.extend_from_slice(b"\r\n");

    for (k, v) in &resp.headers {
        buf.extend_from_slice(k.as_bytes());
        buf.extend_from_slice(b": ");
        buf.extend_from_slice(v.as_bytes());
        buf.extend_from_slice(b"\r\n");
    }

    // Header/body separator
    buf.extend_from_slice(b"\r\n");

    buf.extend_from_slice(&resp.body);

    buf
}

pub struct ResponseWriter {
    buffer: Vec<u8>,
    written: usize,
}

impl ResponseWriter {
    pub fn new(response: &Response) -> Self {
        Self {
            buffer: serialize_response(response),
            written: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub async fn write_to_stream<S>(&mut self, stream: &mut S) -> anyhow::Result<()>
    where
        S: AsyncWrite + Unpin,
    {
        while self.written < self.buffer.len() {
            let n = stream.write(&self.buffer[self.written..]).await?;

            if n == 0 {
                return Err(anyhow::anyhow!("connection closed while writing"));
            }

            self.written += n;
        }

        stream.flush().await?;
        Ok(())
    }
}
