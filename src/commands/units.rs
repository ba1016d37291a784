//! List loaded units

use sysdconf::dbus;

pub async fn units() -> Result<(), Box<dyn std::error::Error>> {
    let conn = dbus::system_bus().await?;
    let rows = dbus::list_units(&conn).await?;

    println!(
        "{:<44} {:<8} {:<8} {:<10} DESCRIPTION",
        "UNIT", "LOAD", "ACTIVE", "SUB"
    );
    for unit in &rows {
        println!(
            "{:<44} {:<8} {:<8} {:<10} {}",
            unit.name, unit.load_state, unit.active_state, unit.sub_state, unit.description
        );
    }

    println!();
    println!("{} units listed", rows.len());
    Ok(())
}
