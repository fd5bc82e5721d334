//! Shared types, adapter traits, and core error type for Librillo.
//!
//! This crate contains the foundational types shared between the server
//! crate and all adapter implementations. Extracting these into a separate
//! crate allows adapter crates to compile in parallel with the server's
//! feature modules.

pub mod catalog_adapter;
pub mod error;
pub mod mirror_adapter;
pub mod prelude;
pub mod types;

// vim: ts=4
