// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for collecting what happened during a session.
//!
//! Failures in the gallery are never surfaced as errors to the rendering
//! layer. They are printed to stderr where they are caught and also recorded
//! here, in a memory-bounded circular buffer, so the host can inspect them.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with configurable capacity
//! - [`DiagnosticEvent`]: A timestamped action, warning or error
//! - [`DiagnosticsCollector`]: Owns the buffer and drains the channel
//! - [`DiagnosticsHandle`]: Cheap, cloneable, non-blocking sender

mod buffer;
mod collector;
mod events;

pub use buffer::CircularBuffer;
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{
    DiagnosticEvent, DiagnosticEventKind, ErrorEvent, ErrorType, UserAction, WarningEvent,
    WarningType,
};
