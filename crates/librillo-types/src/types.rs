//! Common types used throughout Librillo.

use serde::{Deserialize, Serialize};

// BookId //
//********//
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BookId(pub i64);

impl std::fmt::Display for BookId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl Serialize for BookId {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		serializer.serialize_i64(self.0)
	}
}

impl<'de> Deserialize<'de> for BookId {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		Ok(BookId(i64::deserialize(deserializer)?))
	}
}

// vim: ts=4
