//! Enable, disable, mask, and unmask unit files

use sysdconf::dbus::{self, systemd1::ManagerProxy};

fn print_changes(changes: &[(String, String, String)]) {
    for (op, path, target) in changes {
        if target.is_empty() {
            println!("  {} {}", op, path);
        } else {
            println!("  {} {} -> {}", op, path, target);
        }
    }
}

pub async fn enable(name: &str) -> Result<(), Box<dyn std::error::Error>> {
    let conn = dbus::system_bus().await?;
    let manager = ManagerProxy::new(&conn).await?;
    let (_, changes) = manager.enable_unit_files(&[name], false, false).await?;
    print_changes(&changes);
    println!("enabled {}", name);
    Ok(())
}

pub async fn disable(name: &str) -> Result<(), Box<dyn std::error::Error>> {
    let conn = dbus::system_bus().await?;
    let manager = ManagerProxy::new(&conn).await?;
    let changes = manager.disable_unit_files(&[name], false).await?;
    print_changes(&changes);
    println!("disabled {}", name);
    Ok(())
}

pub async fn mask(name: &str) -> Result<(), Box<dyn std::error::Error>> {
    let conn = dbus::system_bus().await?;
    let manager = ManagerProxy::new(&conn).await?;
    let changes = manager.mask_unit_files(&[name], false, false).await?;
    print_changes(&changes);
    println!("masked {}", name);
    Ok(())
}

pub async fn unmask(name: &str) -> Result<(), Box<dyn std::error::Error>> {
    let conn = dbus::system_bus().await?;
    let manager = ManagerProxy::new(&conn).await?;
    let changes = manager.unmask_unit_files(&[name], false).await?;
    print_changes(&changes);
    println!("unmasked {}", name);
    Ok(())
}
