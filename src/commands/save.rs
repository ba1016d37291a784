//! Render and write the configuration files
//!
//! Rendering happens here; the actual disk writes happen in the privileged
//! helper, which receives the whole batch in one request.

use std::path::Path;

use sysdconf::options::{writer, ConfFile, ConfStore};
use sysdconf::protocol::{self, Request, Response, SOCKET_PATH};

use super::load_store;

/// Hand the rendered batch to the helper and report the outcome.
pub(crate) async fn save_store(
    store: &ConfStore,
    dir: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let files = writer::render_all(store, dir);
    let count = files.len();
    let request = Request::WriteConfigFiles {
        dir: dir.display().to_string(),
        files,
    };

    let response = protocol::call(SOCKET_PATH, &request).await.map_err(|e| {
        format!(
            "cannot reach sysdconf-helper: {} (start it with: sudo sysdconf-helper)",
            e
        )
    })?;

    match response {
        Response::Ok => {
            println!("wrote {} files under {}", count, dir.display());
            Ok(())
        }
        Response::WriteFailed { file, error } => {
            Err(format!("writing {} failed: {}", file, error).into())
        }
        Response::Error(msg) => Err(msg.into()),
        Response::Pong => Err("unexpected reply from helper".into()),
    }
}

/// Re-render the current on-disk state and write it back
pub async fn save(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let store = load_store(dir).await;
    save_store(&store, dir).await
}

/// Print the rendered documents without writing anything
pub async fn cat(dir: &Path, file: Option<ConfFile>) -> Result<(), Box<dyn std::error::Error>> {
    let store = load_store(dir).await;
    match file {
        Some(f) => print!("{}", writer::render_file(&store, f, dir)),
        None => {
            for (_, doc) in writer::render_all(&store, dir) {
                print!("{}", doc);
                println!();
            }
        }
    }
    Ok(())
}

/// Restore every setting to its default and write the files
pub async fn reset(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let facts = sysdconf::hostfacts::detect().await;
    let store = ConfStore::new(&facts);
    save_store(&store, dir).await?;
    println!("all settings restored to defaults");
    Ok(())
}
