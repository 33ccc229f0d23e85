//! Invocation protocol between a handler binary and its host.
//!
//! The host drives a handler over stdin/stdout with length-prefixed JSON
//! frames: a 4-byte big-endian length followed by the payload. Each inbound
//! frame is an [`Invocation`]; each outbound frame is a [`Response`].
//!
//! A typical handler main loop:
//!
//! ```ignore
//! fn main() {
//!     loop {
//!         match read_invocation() {
//!             Ok(inv) => {
//!                 let response = handle(inv.event, inv.context);
//!                 if let Err(e) = send_response(response) {
//!                     eprintln!("Failed to send response: {}", e);
//!                 }
//!             }
//!             Err(e) => {
//!                 eprintln!("Failed to read invocation: {}", e);
//!                 break;
//!             }
//!         }
//!     }
//! }
//! ```

use crate::{HandlerError, Invocation, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::{self, Read, Write};

/// Upper bound on a single frame's payload. The length prefix can claim up
/// to 4 GiB; anything past this limit is a corrupt stream, not a real frame.
const MAX_FRAME_LEN: usize = 16 * 1024 * 1024;

fn read_frame<R: Read, T: DeserializeOwned>(reader: &mut R) -> Result<T, HandlerError> {
    // Read length prefix (4 bytes, big-endian)
    let mut len_buf = [0u8; 4];
    reader
        .read_exact(&mut len_buf)
        .map_err(|e| HandlerError::Ipc(format!("Failed to read length prefix: {}", e)))?;

    let len = u32::from_be_bytes(len_buf) as usize;
    if len > MAX_FRAME_LEN {
        return Err(HandlerError::Ipc(format!(
            "Frame length {} exceeds limit of {} bytes",
            len, MAX_FRAME_LEN
        )));
    }

    // Read the JSON payload
    let mut payload = vec![0u8; len];
    reader
        .read_exact(&mut payload)
        .map_err(|e| HandlerError::Ipc(format!("Failed to read payload: {}", e)))?;

    serde_json::from_slice(&payload)
        .map_err(|e| HandlerError::Ipc(format!("Failed to parse frame: {}", e)))
}

fn write_frame<W: Write, T: Serialize>(writer: &mut W, frame: &T) -> Result<(), HandlerError> {
    let payload = serde_json::to_vec(frame)
        .map_err(|e| HandlerError::Ipc(format!("Failed to serialize frame: {}", e)))?;

    // Write length prefix, then payload
    let len = payload.len() as u32;
    writer
        .write_all(&len.to_be_bytes())
        .map_err(|e| HandlerError::Ipc(format!("Failed to write length: {}", e)))?;
    writer
        .write_all(&payload)
        .map_err(|e| HandlerError::Ipc(format!("Failed to write payload: {}", e)))?;
    writer
        .flush()
        .map_err(|e| HandlerError::Ipc(format!("Failed to flush: {}", e)))?;

    Ok(())
}

/// Read the next invocation from stdin (sent by the host)
pub fn read_invocation() -> Result<Invocation, HandlerError> {
    let stdin = io::stdin();
    let mut handle = stdin.lock();
    read_frame(&mut handle)
}

/// Send a response to stdout (read by the host)
pub fn send_response(response: Response) -> Result<(), HandlerError> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_frame(&mut handle, &response)
}
