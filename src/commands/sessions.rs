//! List and control logind sessions

use sysdconf::dbus::{self, login1::ManagerProxy};

pub async fn sessions() -> Result<(), Box<dyn std::error::Error>> {
    let conn = dbus::system_bus().await?;
    let rows = dbus::list_sessions(&conn).await?;

    println!("{:<8} {:>6} {:<16} {:<8} STATE", "SESSION", "UID", "USER", "SEAT");
    for session in &rows {
        println!(
            "{:<8} {:>6} {:<16} {:<8} {}",
            session.id, session.uid, session.user, session.seat, session.state
        );
    }

    println!();
    println!("{} sessions listed", rows.len());
    Ok(())
}

pub async fn lock_session(id: &str) -> Result<(), Box<dyn std::error::Error>> {
    let conn = dbus::system_bus().await?;
    ManagerProxy::new(&conn).await?.lock_session(id).await?;
    println!("locked session {}", id);
    Ok(())
}

pub async fn unlock_session(id: &str) -> Result<(), Box<dyn std::error::Error>> {
    let conn = dbus::system_bus().await?;
    ManagerProxy::new(&conn).await?.unlock_session(id).await?;
    println!("unlocked session {}", id);
    Ok(())
}

pub async fn activate_session(id: &str) -> Result<(), Box<dyn std::error::Error>> {
    let conn = dbus::system_bus().await?;
    ManagerProxy::new(&conn).await?.activate_session(id).await?;
    println!("activated session {}", id);
    Ok(())
}

pub async fn terminate_session(id: &str) -> Result<(), Box<dyn std::error::Error>> {
    let conn = dbus::system_bus().await?;
    ManagerProxy::new(&conn).await?.terminate_session(id).await?;
    println!("terminated session {}", id);
    Ok(())
}
