//! IPC protocol for the privileged write helper
//!
//! Defines request/response types for CLI ↔ helper communication, plus the
//! length-prefixed msgpack framing both sides use over the Unix socket.

use serde::{Deserialize, Serialize};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::net::UnixStream;

pub const SOCKET_PATH: &str = "/run/sysdconf.sock";

/// Largest frame either side will accept (a config batch is a few KB)
const MAX_FRAME: u32 = 1024 * 1024;

/// Request from CLI to helper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Request {
    /// Write a batch of rendered config documents under `dir`
    WriteConfigFiles {
        dir: String,
        /// (file name, full document text) pairs
        files: Vec<(String, String)>,
    },
    /// Ping (health check)
    Ping,
}

/// Response from helper to CLI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Response {
    /// Whole batch written
    Ok,
    /// First file that failed, with the OS error. Files written before it
    /// are not rolled back.
    WriteFailed { file: String, error: String },
    /// Error with message
    Error(String),
    /// Pong (response to ping)
    Pong,
}

/// Write one length-prefixed msgpack frame
pub async fn write_frame<T, W>(stream: &mut W, msg: &T) -> std::io::Result<()>
where
    T: Serialize,
    W: AsyncWrite + Unpin,
{
    let payload = rmp_serde::to_vec(msg)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
    stream.write_all(&(payload.len() as u32).to_be_bytes()).await?;
    stream.write_all(&payload).await?;
    stream.flush().await
}

/// Read one length-prefixed msgpack frame
pub async fn read_frame<T, R>(stream: &mut R) -> std::io::Result<T>
where
    T: for<'de> Deserialize<'de>,
    R: AsyncRead + Unpin,
{
    let mut len_buf = [0u8; 4];
    stream.read_exact(&mut len_buf).await?;
    let len = u32::from_be_bytes(len_buf);
    if len > MAX_FRAME {
        return Err(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("frame of {} bytes exceeds limit", len),
        ));
    }

    let mut payload = vec![0u8; len as usize];
    stream.read_exact(&mut payload).await?;
    rmp_serde::from_slice(&payload)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
}

/// One request/response exchange with the helper
pub async fn call(socket: &str, request: &Request) -> std::io::Result<Response> {
    let mut stream = UnixStream::connect(socket).await?;
    write_frame(&mut stream, request).await?;
    read_frame(&mut stream).await
}
