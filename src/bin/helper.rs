//! sysdconf-helper - privileged write service
//!
//! Accepts rendered configuration documents over /run/sysdconf.sock and
//! writes them under the requested directory. Runs as root; the unprivileged
//! CLI and any graphical frontend talk to it through the protocol module.

use std::path::Path;

use tokio::net::{UnixListener, UnixStream};

use sysdconf::protocol::{read_frame, write_frame, Request, Response, SOCKET_PATH};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if !nix::unistd::Uid::effective().is_root() {
        eprintln!("sysdconf-helper: must run as root");
        std::process::exit(1);
    }

    // Stale socket from a previous run
    let _ = std::fs::remove_file(SOCKET_PATH);
    let listener = UnixListener::bind(SOCKET_PATH)?;
    log::info!("listening on {}", SOCKET_PATH);

    loop {
        let (stream, _) = listener.accept().await?;
        tokio::spawn(async move {
            if let Err(e) = handle(stream).await {
                log::warn!("request failed: {}", e);
            }
        });
    }
}

async fn handle(mut stream: UnixStream) -> std::io::Result<()> {
    let request: Request = read_frame(&mut stream).await?;
    let response = match request {
        Request::Ping => Response::Pong,
        Request::WriteConfigFiles { dir, files } => write_batch(&dir, &files).await,
    };
    write_frame(&mut stream, &response).await
}

/// Write the batch in order, stopping at the first failure.
///
/// Files written before a failure stay written; the caller gets the failing
/// file name and OS error and decides what to tell the user.
async fn write_batch(dir: &str, files: &[(String, String)]) -> Response {
    for (name, text) in files {
        if name.contains('/') || name.starts_with('.') {
            return Response::Error(format!("invalid file name '{}'", name));
        }
        let path = Path::new(dir).join(name);
        if let Err(e) = tokio::fs::write(&path, text).await {
            log::error!("writing {} failed: {}", path.display(), e);
            return Response::WriteFailed {
                file: name.clone(),
                error: e.to_string(),
            };
        }
        log::info!("wrote {} ({} bytes)", path.display(), text.len());
    }
    Response::Ok
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_write_batch() {
        let dir = tempfile::tempdir().unwrap();
        let files = vec![
            ("system.conf".to_string(), "[Manager]\n#LogLevel=\n".to_string()),
            ("logind.conf".to_string(), "[Login]\nNAutoVTs=8\n".to_string()),
        ];

        let response = write_batch(dir.path().to_str().unwrap(), &files).await;
        assert!(matches!(response, Response::Ok));

        let written = tokio::fs::read_to_string(dir.path().join("logind.conf"))
            .await
            .unwrap();
        assert_eq!(written, "[Login]\nNAutoVTs=8\n");
    }

    #[tokio::test]
    async fn test_write_batch_reports_failing_file() {
        let files = vec![("system.conf".to_string(), "x\n".to_string())];
        let response = write_batch("/no/such/dir", &files).await;
        match response {
            Response::WriteFailed { file, error } => {
                assert_eq!(file, "system.conf");
                assert!(!error.is_empty());
            }
            other => panic!("unexpected response {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_write_batch_rejects_traversal() {
        let dir = tempfile::tempdir().unwrap();
        let files = vec![("../evil.conf".to_string(), "x\n".to_string())];
        let response = write_batch(dir.path().to_str().unwrap(), &files).await;
        assert!(matches!(response, Response::Error(_)));
    }
}
