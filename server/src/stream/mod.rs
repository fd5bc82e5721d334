//! Real-time catalog change streaming
//!
//! Bridges the mirror store to WebSocket clients: an initial snapshot of the
//! mirrored catalog followed by a live push of newly replicated records.

pub mod normalize;
pub mod protocol;
pub mod watcher;
pub mod websocket;

// vim: ts=4
