//! Change one setting and write the files back

use std::path::Path;

use sysdconf::options::ConfFile;

use super::{load_store, save};

pub async fn set(
    dir: &Path,
    key: &str,
    value: &str,
    file: Option<ConfFile>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = load_store(dir).await;

    let idx = match file {
        Some(f) => store
            .find(key, f)
            .ok_or_else(|| format!("unknown setting {} in {}", key, f.file_name()))?,
        None => {
            let matches: Vec<usize> = ConfFile::ALL
                .iter()
                .filter_map(|f| store.find(key, *f))
                .collect();
            match matches.as_slice() {
                [] => return Err(format!("unknown setting {}", key).into()),
                [idx] => *idx,
                // e.g. Storage= exists in journald.conf and coredump.conf
                _ => {
                    return Err(
                        format!("'{}' exists in more than one file, pass --file", key).into(),
                    )
                }
            }
        }
    };

    if let Some(opt) = store.get_mut(idx) {
        opt.set_from_file(value)?;
        println!("{}: {}", opt.file.file_name(), opt.file_line().trim_end());
    }

    save::save_store(&store, dir).await
}
