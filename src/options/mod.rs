//! Typed configuration-option model
//!
//! The core of sysdconf: a catalog of strongly-typed settings for the four
//! systemd configuration files, with parsing, validation, default tracking,
//! and round-trip serialization back to config-file lines.

pub mod catalog;
pub mod convert;
mod option;
pub mod reader;
mod store;
pub mod writer;

pub use catalog::{build_catalog, HostFacts};
pub use convert::{format_byte_size, format_duration, parse_byte_size, parse_duration, TimeUnit};
pub use option::{ConfFile, ConfOption, OptionKind, OptionValue, ResourceLimit, ValueError};
pub use reader::LoadWarning;
pub use store::ConfStore;
