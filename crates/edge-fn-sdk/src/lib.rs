//! Edge Function SDK - Types and utilities for writing edge function handlers
//!
//! A handler is a standalone binary that the hosting gateway drives over a
//! simple length-prefixed JSON protocol on stdin/stdout: one [`Invocation`]
//! in, one [`Response`] out. This crate provides the wire types, the handler
//! error type, and the IPC helpers a handler's main loop uses.

pub mod error;
pub mod event;
pub mod ipc;
pub mod response;

pub mod prelude {
    //! Common imports for edge function handlers
    pub use crate::error::HandlerError;
    pub use crate::event::{Context, Event, Invocation};
    pub use crate::ipc::{read_invocation, send_response};
    pub use crate::response::Response;
    pub use serde::{Deserialize, Serialize};
    pub use serde_json::{json, Value as JsonValue};
}

// Re-export key types at crate root
pub use error::HandlerError;
pub use event::{Context, Event, Invocation};
pub use response::Response;
