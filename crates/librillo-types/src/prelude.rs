pub use crate::error::{Error, LbResult};
pub use crate::types::BookId;

pub use tracing::{debug, debug_span, error, error_span, info, info_span, warn, warn_span};

// vim: ts=4
