mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use sysdconf::options::ConfFile;

#[derive(Parser)]
#[command(name = "sysdconf")]
#[command(about = "Edit systemd configuration files and browse units")]
struct Args {
    /// Directory holding the configuration files
    #[arg(long, global = true, default_value = sysdconf::hostfacts::DEFAULT_CONF_DIR)]
    dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show all settings and their current values
    Show {
        /// Restrict to one file (manager, journal, login, coredump)
        #[arg(short, long)]
        file: Option<String>,
    },

    /// Change one setting and write the files
    Set {
        /// Setting name as written in the file (e.g. "Storage")
        key: String,
        /// New value, in the same syntax the file uses
        value: String,
        /// Disambiguate when the key exists in more than one file
        #[arg(short, long)]
        file: Option<String>,
    },

    /// Print the rendered configuration documents without writing
    Cat {
        /// Restrict to one file
        #[arg(short, long)]
        file: Option<String>,
    },

    /// Re-render the current state and write the files
    Save,

    /// Restore every setting to its default and write the files
    Reset,

    /// List loaded units
    Units,

    /// List login sessions
    Sessions,

    /// List timers with their elapse times
    Timers,

    /// Start a unit
    Start {
        /// Unit name (e.g. "docker.service")
        name: String,
    },

    /// Stop a unit
    Stop {
        /// Unit name
        name: String,
    },

    /// Restart a unit
    Restart {
        /// Unit name
        name: String,
    },

    /// Enable a unit to start at boot
    Enable {
        /// Unit name
        name: String,
    },

    /// Disable a unit from starting at boot
    Disable {
        /// Unit name
        name: String,
    },

    /// Mask a unit
    Mask {
        /// Unit name
        name: String,
    },

    /// Unmask a unit
    Unmask {
        /// Unit name
        name: String,
    },

    /// Reload the systemd manager configuration
    DaemonReload,

    /// Lock a login session
    LockSession {
        /// Session id (as shown by `sessions`)
        id: String,
    },

    /// Unlock a login session
    UnlockSession {
        /// Session id
        id: String,
    },

    /// Bring a login session to the foreground of its seat
    ActivateSession {
        /// Session id
        id: String,
    },

    /// Terminate a login session
    TerminateSession {
        /// Session id
        id: String,
    },

    /// Ping the privileged helper
    Ping,
}

/// Resolve an optional --file argument
fn conf_file(arg: Option<String>) -> Result<Option<ConfFile>, String> {
    match arg {
        None => Ok(None),
        Some(v) => ConfFile::parse(&v).map(Some).ok_or_else(|| {
            format!(
                "unknown file '{}' (expected manager, journal, login, or coredump)",
                v
            )
        }),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    match args.command {
        Command::Show { file } => {
            commands::show(&args.dir, conf_file(file)?).await?;
        }
        Command::Set { key, value, file } => {
            commands::set(&args.dir, &key, &value, conf_file(file)?).await?;
        }
        Command::Cat { file } => {
            commands::cat(&args.dir, conf_file(file)?).await?;
        }
        Command::Save => {
            commands::save(&args.dir).await?;
        }
        Command::Reset => {
            commands::reset(&args.dir).await?;
        }
        Command::Units => {
            commands::units().await?;
        }
        Command::Sessions => {
            commands::sessions().await?;
        }
        Command::Timers => {
            commands::timers().await?;
        }
        Command::Start { name } => {
            commands::start(&name).await?;
        }
        Command::Stop { name } => {
            commands::stop(&name).await?;
        }
        Command::Restart { name } => {
            commands::restart(&name).await?;
        }
        Command::Enable { name } => {
            commands::enable(&name).await?;
        }
        Command::Disable { name } => {
            commands::disable(&name).await?;
        }
        Command::Mask { name } => {
            commands::mask(&name).await?;
        }
        Command::Unmask { name } => {
            commands::unmask(&name).await?;
        }
        Command::DaemonReload => {
            commands::daemon_reload().await?;
        }
        Command::LockSession { id } => {
            commands::lock_session(&id).await?;
        }
        Command::UnlockSession { id } => {
            commands::unlock_session(&id).await?;
        }
        Command::ActivateSession { id } => {
            commands::activate_session(&id).await?;
        }
        Command::TerminateSession { id } => {
            commands::terminate_session(&id).await?;
        }
        Command::Ping => {
            commands::ping().await?;
        }
    }

    Ok(())
}
