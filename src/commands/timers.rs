//! List timers with their elapse times

use sysdconf::dbus::{self, format_usec};

pub async fn timers() -> Result<(), Box<dyn std::error::Error>> {
    let conn = dbus::system_bus().await?;
    let rows = dbus::list_timers(&conn).await?;

    println!(
        "{:<36} {:<28} {:<18} {:<16} LAST",
        "TIMER", "ACTIVATES", "NEXT (realtime)", "NEXT (mono)"
    );
    for timer in &rows {
        println!(
            "{:<36} {:<28} {:<18} {:<16} {}",
            timer.name,
            timer.activates,
            format_usec(timer.next_elapse_realtime_usec),
            format_usec(timer.next_elapse_monotonic_usec),
            format_usec(timer.last_trigger_usec)
        );
    }

    println!();
    println!("{} timers listed", rows.len());
    Ok(())
}
