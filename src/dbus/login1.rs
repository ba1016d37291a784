//! org.freedesktop.login1 client
//!
//! Session listing and control through logind.

use zbus::zvariant::OwnedObjectPath;
use zbus::{proxy, Connection};

/// Raw ListSessions entry: (session id, uid, user name, seat id, object path)
pub type SessionListEntry = (String, u32, String, String, OwnedObjectPath);

#[proxy(
    interface = "org.freedesktop.login1.Manager",
    default_service = "org.freedesktop.login1",
    default_path = "/org/freedesktop/login1"
)]
pub trait Manager {
    fn list_sessions(&self) -> zbus::Result<Vec<SessionListEntry>>;

    fn lock_session(&self, session_id: &str) -> zbus::Result<()>;
    fn unlock_session(&self, session_id: &str) -> zbus::Result<()>;
    fn activate_session(&self, session_id: &str) -> zbus::Result<()>;
    fn terminate_session(&self, session_id: &str) -> zbus::Result<()>;
}

#[proxy(
    interface = "org.freedesktop.login1.Session",
    default_service = "org.freedesktop.login1"
)]
pub trait Session {
    #[zbus(property)]
    fn state(&self) -> zbus::Result<String>;
}

/// One session for the session view
#[derive(Debug, Clone)]
pub struct SessionRow {
    pub id: String,
    pub uid: u32,
    pub user: String,
    pub seat: String,
    pub state: String,
}

/// All current sessions with their state, sorted by id
pub async fn list_sessions(conn: &Connection) -> zbus::Result<Vec<SessionRow>> {
    let manager = ManagerProxy::new(conn).await?;
    let mut rows = Vec::new();

    for (id, uid, user, seat, path) in manager.list_sessions().await? {
        let session = SessionProxy::builder(conn).path(path)?.build().await?;
        rows.push(SessionRow {
            id,
            uid,
            user,
            seat,
            state: session.state().await?,
        });
    }

    rows.sort_by(|a, b| a.id.cmp(&b.id));
    Ok(rows)
}
