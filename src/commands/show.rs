//! Show the settings table

use std::path::Path;

use sysdconf::options::ConfFile;
use sysdconf::panel;

use super::load_store;

pub async fn show(dir: &Path, file: Option<ConfFile>) -> Result<(), Box<dyn std::error::Error>> {
    let store = load_store(dir).await;

    let rows = match file {
        Some(f) => panel::rows_for_file(&store, f),
        None => panel::rows(&store),
    };

    println!("  {:<26} {:<32} FILE", "KEY", "VALUE");
    for row in &rows {
        // Customized settings are marked the way the table view bolds them
        let marker = if row.is_default { ' ' } else { '*' };
        println!(
            "{} {:<26} {:<32} {}",
            marker,
            row.name,
            row.value,
            row.file.file_name()
        );
    }

    println!();
    println!(
        "{} settings, {} customized (*)",
        rows.len(),
        store.modified_count()
    );
    Ok(())
}
