//! D-Bus clients for systemd and logind
//!
//! Thin proxy wrappers used for browsing and controlling units, sessions,
//! and timers. Everything here is a direct call into the management
//! daemons; no state is kept on our side.

pub mod login1;
pub mod systemd1;

pub use login1::{list_sessions, SessionRow};
pub use systemd1::{list_timers, list_units, systemd_version, TimerRow, UnitRow};

use zbus::Connection;

/// Connect to the system bus
pub async fn system_bus() -> zbus::Result<Connection> {
    Connection::system().await
}

/// Render a microsecond count as a compact "1d 2h 3min 4s" string
pub fn format_usec(usec: u64) -> String {
    if usec == 0 {
        return "0".to_string();
    }

    let mut secs = usec / 1_000_000;
    let mut parts = Vec::new();
    for (unit, len) in [("d", 86400u64), ("h", 3600), ("min", 60), ("s", 1)] {
        let n = secs / len;
        if n > 0 {
            parts.push(format!("{}{}", n, unit));
            secs -= n * len;
        }
    }
    if parts.is_empty() {
        // Sub-second remainder only
        parts.push(format!("{}us", usec % 1_000_000));
    }
    parts.join(" ")
}
