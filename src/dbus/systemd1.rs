//! org.freedesktop.systemd1 client
//!
//! Proxy for the systemd manager: unit listing and lifecycle calls, plus
//! timer properties for the timer view.

use zbus::zvariant::OwnedObjectPath;
use zbus::{proxy, Connection};

/// Raw ListUnits entry: (name, description, load state, active state,
/// sub state, following, object path, job id, job type, job path)
pub type UnitListEntry = (
    String,
    String,
    String,
    String,
    String,
    String,
    OwnedObjectPath,
    u32,
    String,
    OwnedObjectPath,
);

#[proxy(
    interface = "org.freedesktop.systemd1.Manager",
    default_service = "org.freedesktop.systemd1",
    default_path = "/org/freedesktop/systemd1"
)]
pub trait Manager {
    fn list_units(&self) -> zbus::Result<Vec<UnitListEntry>>;

    fn start_unit(&self, name: &str, mode: &str) -> zbus::Result<OwnedObjectPath>;
    fn stop_unit(&self, name: &str, mode: &str) -> zbus::Result<OwnedObjectPath>;
    fn restart_unit(&self, name: &str, mode: &str) -> zbus::Result<OwnedObjectPath>;

    fn enable_unit_files(
        &self,
        files: &[&str],
        runtime: bool,
        force: bool,
    ) -> zbus::Result<(bool, Vec<(String, String, String)>)>;
    fn disable_unit_files(
        &self,
        files: &[&str],
        runtime: bool,
    ) -> zbus::Result<Vec<(String, String, String)>>;
    fn mask_unit_files(
        &self,
        files: &[&str],
        runtime: bool,
        force: bool,
    ) -> zbus::Result<Vec<(String, String, String)>>;
    fn unmask_unit_files(
        &self,
        files: &[&str],
        runtime: bool,
    ) -> zbus::Result<Vec<(String, String, String)>>;

    fn reload(&self) -> zbus::Result<()>;

    #[zbus(property)]
    fn version(&self) -> zbus::Result<String>;
}

#[proxy(
    interface = "org.freedesktop.systemd1.Timer",
    default_service = "org.freedesktop.systemd1"
)]
pub trait Timer {
    #[zbus(property, name = "NextElapseUSecRealtime")]
    fn next_elapse_usec_realtime(&self) -> zbus::Result<u64>;

    #[zbus(property, name = "NextElapseUSecMonotonic")]
    fn next_elapse_usec_monotonic(&self) -> zbus::Result<u64>;

    #[zbus(property, name = "LastTriggerUSec")]
    fn last_trigger_usec(&self) -> zbus::Result<u64>;

    #[zbus(property)]
    fn unit(&self) -> zbus::Result<String>;
}

/// One unit for the unit view
#[derive(Debug, Clone, PartialEq)]
pub struct UnitRow {
    pub name: String,
    pub description: String,
    pub load_state: String,
    pub active_state: String,
    pub sub_state: String,
}

impl From<UnitListEntry> for UnitRow {
    fn from(e: UnitListEntry) -> Self {
        Self {
            name: e.0,
            description: e.1,
            load_state: e.2,
            active_state: e.3,
            sub_state: e.4,
        }
    }
}

/// One timer for the timer view
#[derive(Debug, Clone)]
pub struct TimerRow {
    pub name: String,
    pub activates: String,
    pub next_elapse_realtime_usec: u64,
    pub next_elapse_monotonic_usec: u64,
    pub last_trigger_usec: u64,
}

/// All loaded units, sorted by name
pub async fn list_units(conn: &Connection) -> zbus::Result<Vec<UnitRow>> {
    let manager = ManagerProxy::new(conn).await?;
    let mut rows: Vec<UnitRow> = manager
        .list_units()
        .await?
        .into_iter()
        .map(UnitRow::from)
        .collect();
    rows.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(rows)
}

/// All loaded timer units with their elapse times
pub async fn list_timers(conn: &Connection) -> zbus::Result<Vec<TimerRow>> {
    let manager = ManagerProxy::new(conn).await?;
    let mut rows = Vec::new();

    for entry in manager.list_units().await? {
        if !entry.0.ends_with(".timer") {
            continue;
        }
        let timer = TimerProxy::builder(conn)
            .path(entry.6.clone())?
            .build()
            .await?;
        rows.push(TimerRow {
            name: entry.0,
            activates: timer.unit().await?,
            next_elapse_realtime_usec: timer.next_elapse_usec_realtime().await?,
            next_elapse_monotonic_usec: timer.next_elapse_usec_monotonic().await?,
            last_trigger_usec: timer.last_trigger_usec().await?,
        });
    }

    rows.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(rows)
}

/// Detected systemd version, from the leading digits of the Version
/// property ("219", "255.4-1ubuntu8", ...)
pub async fn systemd_version(conn: &Connection) -> zbus::Result<u32> {
    let manager = ManagerProxy::new(conn).await?;
    let raw = manager.version().await?;
    Ok(parse_version(&raw))
}

pub(crate) fn parse_version(raw: &str) -> u32 {
    let digits: String = raw
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_version() {
        assert_eq!(parse_version("219"), 219);
        assert_eq!(parse_version("255.4-1ubuntu8"), 255);
        assert_eq!(parse_version(" 247 "), 247);
        assert_eq!(parse_version("garbage"), 0);
    }
}
