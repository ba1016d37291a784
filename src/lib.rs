//! sysdconf - editor core for systemd configuration files
//!
//! A Rust implementation that:
//! - Models the settings of system.conf, journald.conf, logind.conf, and
//!   coredump.conf as a typed option catalog
//! - Reads and regenerates those files with default-diffing
//! - Hands file writes to a privileged helper over a Unix socket
//! - Browses units, sessions, and timers over D-Bus
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │                   sysdconf                       │
//! ├─────────────────────────────────────────────────┤
//! │ Option Catalog │ Reader/Writer │  D-Bus Browser  │
//! ├─────────────────────────────────────────────────┤
//! │         Privileged Write Helper (IPC)            │
//! └─────────────────────────────────────────────────┘
//! ```

pub mod dbus;
pub mod hostfacts;
pub mod options;
pub mod panel;
pub mod protocol;

// Re-exports for the common editing flow
pub use options::{ConfFile, ConfStore, HostFacts};
