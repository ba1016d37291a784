//! Config file reader
//!
//! Loads the on-disk state of a configuration file into the store. Reading
//! is fail-soft throughout: a malformed value produces one warning and
//! leaves that option at its previous value, an unreadable file produces one
//! warning and leaves the whole file at defaults, and unrecognized keys are
//! skipped silently so files written by newer systemd versions still load.

use std::path::Path;

use super::option::{ConfFile, ValueError};
use super::store::ConfStore;

/// A recoverable problem encountered while loading
#[derive(Debug, thiserror::Error)]
pub enum LoadWarning {
    #[error("{}: invalid value '{raw}' for {key}: {source}", .file.file_name())]
    InvalidValue {
        file: ConfFile,
        key: String,
        raw: String,
        source: ValueError,
    },

    #[error("{}: cannot read file: {source}", .file.file_name())]
    UnreadableFile {
        file: ConfFile,
        source: std::io::Error,
    },
}

/// Apply one file's text to the store, returning any warnings.
pub fn apply_file_text(store: &mut ConfStore, file: ConfFile, text: &str) -> Vec<LoadWarning> {
    let mut warnings = Vec::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('[') {
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim();
        let value = value.trim();

        // Keys we do not model are skipped without a warning
        let Some(opt) = store.find(key, file).and_then(|idx| store.get_mut(idx)) else {
            continue;
        };

        if let Err(e) = opt.set_from_file(value) {
            log::warn!("{}: invalid value '{}' for {}: {}", file.file_name(), value, key, e);
            warnings.push(LoadWarning::InvalidValue {
                file,
                key: key.to_string(),
                raw: value.to_string(),
                source: e,
            });
        }
    }

    warnings
}

/// Load one configuration file from `dir` into the store.
pub async fn load_file(store: &mut ConfStore, file: ConfFile, dir: &Path) -> Vec<LoadWarning> {
    let path = dir.join(file.file_name());
    match tokio::fs::read_to_string(&path).await {
        Ok(text) => apply_file_text(store, file, &text),
        Err(e) => {
            log::warn!("cannot read {}: {}", path.display(), e);
            vec![LoadWarning::UnreadableFile { file, source: e }]
        }
    }
}

/// Load all four configuration files, collecting warnings across them.
pub async fn load_all(store: &mut ConfStore, dir: &Path) -> Vec<LoadWarning> {
    let mut warnings = Vec::new();
    for file in ConfFile::ALL {
        warnings.extend(load_file(store, file, dir).await);
    }
    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::catalog::HostFacts;
    use crate::options::option::OptionValue;

    fn test_store() -> ConfStore {
        ConfStore::new(&HostFacts {
            systemd_version: 219,
            persistent_log_mb: 4000,
            volatile_log_mb: 1000,
            cpu_count: 2,
        })
    }

    #[test]
    fn test_apply_simple_file() {
        let mut store = test_store();
        let text = "\
# journald.conf
[Journal]
Storage=persistent
Compress=no
RateLimitBurst=500
";
        let warnings = apply_file_text(&mut store, ConfFile::Journal, text);
        assert!(warnings.is_empty());

        let idx = store.find("Storage", ConfFile::Journal).unwrap();
        assert_eq!(
            store.get(idx).unwrap().value,
            OptionValue::Enum("persistent".to_string())
        );
        let idx = store.find("Compress", ConfFile::Journal).unwrap();
        assert_eq!(store.get(idx).unwrap().value, OptionValue::Bool(false));
        let idx = store.find("RateLimitBurst", ConfFile::Journal).unwrap();
        assert_eq!(store.get(idx).unwrap().value, OptionValue::Int(500));
    }

    #[test]
    fn test_comments_sections_and_blanks_skipped() {
        let mut store = test_store();
        let text = "\n# comment\n[Journal]\n#Compress=no\n   \n";
        let warnings = apply_file_text(&mut store, ConfFile::Journal, text);
        assert!(warnings.is_empty());
        assert_eq!(store.modified_count(), 0);
    }

    #[test]
    fn test_unknown_key_silently_ignored_malformed_key_warns() {
        let mut store = test_store();
        let text = "\
[Journal]
SomeFutureSetting=whatever
Compress=maybe
Storage=persistent
";
        let warnings = apply_file_text(&mut store, ConfFile::Journal, text);

        // Exactly one warning: the malformed Compress=. The unknown key is
        // silent and the valid Storage= still loads.
        assert_eq!(warnings.len(), 1);
        match &warnings[0] {
            LoadWarning::InvalidValue { key, raw, .. } => {
                assert_eq!(key, "Compress");
                assert_eq!(raw, "maybe");
            }
            other => panic!("unexpected warning {:?}", other),
        }

        let idx = store.find("Compress", ConfFile::Journal).unwrap();
        assert!(store.get(idx).unwrap().is_default());
        let idx = store.find("Storage", ConfFile::Journal).unwrap();
        assert_eq!(
            store.get(idx).unwrap().value,
            OptionValue::Enum("persistent".to_string())
        );
    }

    #[test]
    fn test_key_lookup_is_scoped_to_file() {
        let mut store = test_store();
        // journald has no NAutoVTs; the line must not leak into logind state
        let warnings = apply_file_text(&mut store, ConfFile::Journal, "[Journal]\nNAutoVTs=3\n");
        assert!(warnings.is_empty());
        let idx = store.find("NAutoVTs", ConfFile::Login).unwrap();
        assert!(store.get(idx).unwrap().is_default());
    }

    #[test]
    fn test_value_may_contain_equals() {
        let mut store = test_store();
        // Only the first '=' separates key from value
        let text = "[Manager]\nJoinControllers==cpu,x=y\n";
        let warnings = apply_file_text(&mut store, ConfFile::Manager, text);
        assert!(warnings.is_empty());
        let idx = store.find("JoinControllers", ConfFile::Manager).unwrap();
        assert_eq!(
            store.get(idx).unwrap().value,
            OptionValue::Str("=cpu,x=y".to_string())
        );
    }

    #[test]
    fn test_whitespace_around_key_and_value() {
        let mut store = test_store();
        let text = "[Login]\n  NAutoVTs   =   8  \n";
        let warnings = apply_file_text(&mut store, ConfFile::Login, text);
        assert!(warnings.is_empty());
        let idx = store.find("NAutoVTs", ConfFile::Login).unwrap();
        assert_eq!(store.get(idx).unwrap().value, OptionValue::Int(8));
    }

    #[tokio::test]
    async fn test_load_missing_file_single_warning() {
        let mut store = test_store();
        let dir = tempfile::tempdir().unwrap();
        let warnings = load_file(&mut store, ConfFile::Manager, dir.path()).await;
        assert_eq!(warnings.len(), 1);
        assert!(matches!(warnings[0], LoadWarning::UnreadableFile { .. }));
        assert_eq!(store.modified_count(), 0);
    }

    #[tokio::test]
    async fn test_load_from_disk() {
        let mut store = test_store();
        let dir = tempfile::tempdir().unwrap();
        tokio::fs::write(
            dir.path().join("logind.conf"),
            "[Login]\nHandleLidSwitch=ignore\n",
        )
        .await
        .unwrap();

        let warnings = load_file(&mut store, ConfFile::Login, dir.path()).await;
        assert!(warnings.is_empty());
        let idx = store.find("HandleLidSwitch", ConfFile::Login).unwrap();
        assert_eq!(
            store.get(idx).unwrap().value,
            OptionValue::Enum("ignore".to_string())
        );
    }
}
