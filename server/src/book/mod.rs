//! Book catalog CRUD API

pub mod handler;

// vim: ts=4
