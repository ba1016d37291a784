//! Host-fact probing
//!
//! Gathers the runtime facts the catalog needs: journal partition
//! capacities, CPU count, and the systemd version. The catalog itself never
//! touches the system; everything it depends on flows through `HostFacts`.

use std::path::Path;

use crate::options::HostFacts;

/// Where the edited configuration files live
pub const DEFAULT_CONF_DIR: &str = "/etc/systemd";

/// Capacity in megabytes of the filesystem holding `path`
fn partition_capacity_mb(path: &Path) -> Option<u64> {
    let stat = nix::sys::statvfs::statvfs(path).ok()?;
    Some(stat.blocks() as u64 * stat.fragment_size() as u64 / (1024 * 1024))
}

/// Capacities of the persistent and volatile journal partitions.
///
/// Falls back to the parent mount when the journal directory itself does
/// not exist (persistent journaling disabled).
pub fn probe_partitions() -> (u64, u64) {
    let persistent = ["/var/log/journal", "/var/log", "/var"]
        .iter()
        .find_map(|p| partition_capacity_mb(Path::new(p)))
        .unwrap_or(0);
    let volatile = ["/run/log/journal", "/run"]
        .iter()
        .find_map(|p| partition_capacity_mb(Path::new(p)))
        .unwrap_or(0);
    (persistent, volatile)
}

pub fn cpu_count() -> u32 {
    std::thread::available_parallelism()
        .map(|n| n.get() as u32)
        .unwrap_or(1)
}

/// Version assumed when systemd cannot be asked over the bus
pub const FALLBACK_SYSTEMD_VERSION: u32 = 219;

/// Probe host facts, degrading gracefully when the bus is unreachable.
pub async fn detect() -> HostFacts {
    match crate::dbus::system_bus().await {
        Ok(conn) => match probe(&conn).await {
            Ok(facts) => return facts,
            Err(e) => log::warn!("cannot query systemd version: {}", e),
        },
        Err(e) => log::warn!("cannot reach system bus: {}", e),
    }

    let (persistent_log_mb, volatile_log_mb) = probe_partitions();
    HostFacts {
        systemd_version: FALLBACK_SYSTEMD_VERSION,
        persistent_log_mb,
        volatile_log_mb,
        cpu_count: cpu_count(),
    }
}

/// Probe everything the catalog needs, asking systemd for its version
/// over the bus.
pub async fn probe(conn: &zbus::Connection) -> zbus::Result<HostFacts> {
    let systemd_version = crate::dbus::systemd_version(conn).await?;
    let (persistent_log_mb, volatile_log_mb) = probe_partitions();
    let facts = HostFacts {
        systemd_version,
        persistent_log_mb,
        volatile_log_mb,
        cpu_count: cpu_count(),
    };
    log::debug!("host facts: {:?}", facts);
    Ok(facts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_capacity_probes() {
        assert!(partition_capacity_mb(Path::new("/")).unwrap() > 0);
        assert!(partition_capacity_mb(Path::new("/no/such/dir")).is_none());
    }

    #[test]
    fn test_cpu_count_positive() {
        assert!(cpu_count() >= 1);
    }
}
