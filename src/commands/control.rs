//! Start, stop, and restart units

use sysdconf::dbus::{self, systemd1::ManagerProxy};

pub async fn start(name: &str) -> Result<(), Box<dyn std::error::Error>> {
    let conn = dbus::system_bus().await?;
    let manager = ManagerProxy::new(&conn).await?;
    manager.start_unit(name, "replace").await?;
    println!("started {}", name);
    Ok(())
}

pub async fn stop(name: &str) -> Result<(), Box<dyn std::error::Error>> {
    let conn = dbus::system_bus().await?;
    let manager = ManagerProxy::new(&conn).await?;
    manager.stop_unit(name, "replace").await?;
    println!("stopped {}", name);
    Ok(())
}

pub async fn restart(name: &str) -> Result<(), Box<dyn std::error::Error>> {
    let conn = dbus::system_bus().await?;
    let manager = ManagerProxy::new(&conn).await?;
    manager.restart_unit(name, "replace").await?;
    println!("restarted {}", name);
    Ok(())
}

pub async fn daemon_reload() -> Result<(), Box<dyn std::error::Error>> {
    let conn = dbus::system_bus().await?;
    let manager = ManagerProxy::new(&conn).await?;
    manager.reload().await?;
    println!("systemd manager configuration reloaded");
    Ok(())
}
