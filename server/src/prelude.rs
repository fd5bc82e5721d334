pub use crate::core::app::App;
pub use librillo_types::prelude::*;

// vim: ts=4
