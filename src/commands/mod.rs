mod control;
mod enable;
mod ping;
mod save;
mod sessions;
mod set;
mod show;
mod timers;
mod units;

pub use control::{daemon_reload, restart, start, stop};
pub use enable::{disable, enable, mask, unmask};
pub use ping::ping;
pub use save::{cat, reset, save};
pub use sessions::{activate_session, lock_session, sessions, terminate_session, unlock_session};
pub use set::set;
pub use show::show;
pub use timers::timers;
pub use units::units;

use std::path::Path;

use sysdconf::ConfStore;

/// Build the store for this host and load the current on-disk state.
/// Warnings are surfaced to the user but never abort the load.
pub(crate) async fn load_store(dir: &Path) -> ConfStore {
    let facts = sysdconf::hostfacts::detect().await;
    let mut store = ConfStore::new(&facts);
    for warning in sysdconf::options::reader::load_all(&mut store, dir).await {
        eprintln!("warning: {}", warning);
    }
    store
}
