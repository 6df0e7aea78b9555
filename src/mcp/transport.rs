//! Stdio transport for MCP protocol

use crate::mcp::error::McpError;
use crate::mcp::protocol::JsonRpcResponse;
use tokio::io::{AsyncWrite, AsyncWriteExt, BufWriter};
use tracing::debug;

/// Newline-delimited JSON-RPC writer, stdout by default
pub struct StdioTransport<W = tokio::io::Stdout> {
    writer: BufWriter<W>,
}

impl StdioTransport {
    pub fn new() -> Self {
        Self::with_writer(tokio::io::stdout())
    }
}

impl<W: AsyncWrite + Unpin> StdioTransport<W> {
    pub fn with_writer(writer: W) -> Self {
        Self {
            writer: BufWriter::new(writer),
        }
    }

    /// Send JSON-RPC response
    pub async fn send_response(&mut self, response: JsonRpcResponse) -> Result<(), McpError> {
        // Skip responses for notifications (no id)
        if response.id.is_none() && response.result.is_none() && response.error.is_none() {
            return Ok(());
        }

        let json = serde_json::to_string(&response)?;
        debug!("Sending: {}", json);

        self.writer.write_all(json.as_bytes()).await?;
        self.writer.write_all(b"\n").await?;
        self.writer.flush().await?;

        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

impl Default for StdioTransport {
    fn default() -> Self {
        Self::new()
    }
}
