//! Librillo is a small, self-hosted book catalog service.
//!
//! # Features
//!
//! - REST CRUD API over a relational catalog store
//!	- Real-time change notifications over WebSocket
//!		- initial snapshot of the mirrored catalog
//!		- live push of newly replicated records
//!		- client-initiated refresh
//!	- Pluggable storage adapters

#![forbid(unsafe_code)]

pub mod book;
pub mod core;
pub mod prelude;
pub mod routes;
pub mod stream;

pub use librillo_types::{catalog_adapter, error, mirror_adapter, types};

pub use crate::core::app::{App, AppBuilder};

// vim: ts=4
