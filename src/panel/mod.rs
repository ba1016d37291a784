//! Presentation adapter over the option store
//!
//! Exposes the store as a flat grid of rows for a settings table and maps
//! each option to the editor widget a frontend should present. Interactive
//! edits go through the same per-type parsing as file input, so the table
//! can never hold a value the file serializer would reject.

use crate::options::{ConfFile, ConfOption, ConfStore, OptionKind, ValueError};

/// Which editor widget a frontend should present for an option
#[derive(Debug, Clone, PartialEq)]
pub enum EditorKind {
    Toggle,
    SpinBox { min: i64, max: i64 },
    Text,
    Combo { choices: Vec<String> },
    MultiCheck { choices: Vec<String> },
    DurationField,
    LimitField,
    SizeField,
}

pub fn editor_for(option: &ConfOption) -> EditorKind {
    match &option.kind {
        OptionKind::Bool => EditorKind::Toggle,
        OptionKind::Int { min, max } => EditorKind::SpinBox {
            min: *min,
            max: *max,
        },
        OptionKind::Str => EditorKind::Text,
        OptionKind::Enum { choices } => EditorKind::Combo {
            choices: choices.clone(),
        },
        OptionKind::MultiEnum { choices } => EditorKind::MultiCheck {
            choices: choices.clone(),
        },
        OptionKind::Limit { .. } => EditorKind::LimitField,
        OptionKind::Duration { .. } => EditorKind::DurationField,
        OptionKind::Size { .. } => EditorKind::SizeField,
    }
}

/// One grid row: display name, formatted value, owning file
#[derive(Debug, Clone)]
pub struct OptionRow {
    pub name: String,
    pub value: String,
    pub file: ConfFile,
    /// Frontends render non-default rows in bold
    pub is_default: bool,
}

impl OptionRow {
    fn from_option(opt: &ConfOption) -> Self {
        Self {
            name: opt.name.clone(),
            value: opt.format_value(),
            file: opt.file,
            is_default: opt.is_default(),
        }
    }
}

/// Every option as a grid row; row index equals store index
pub fn rows(store: &ConfStore) -> Vec<OptionRow> {
    store.iter().map(OptionRow::from_option).collect()
}

/// Rows restricted to one file, in display order
pub fn rows_for_file(store: &ConfStore, file: ConfFile) -> Vec<OptionRow> {
    store
        .iter_file(file)
        .map(OptionRow::from_option)
        .collect()
}

/// Apply an interactive edit to the row at `index`.
///
/// Input is parsed with the same rules as file input; a rejected edit
/// leaves the stored value unchanged so the grid stays consistent.
pub fn apply_edit(store: &mut ConfStore, index: usize, input: &str) -> Result<(), ValueError> {
    debug_assert!(index < store.len());
    match store.get_mut(index) {
        Some(opt) => opt.set_from_file(input),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::HostFacts;

    fn test_store() -> ConfStore {
        ConfStore::new(&HostFacts {
            systemd_version: 219,
            persistent_log_mb: 4000,
            volatile_log_mb: 1000,
            cpu_count: 2,
        })
    }

    #[test]
    fn test_editor_dispatch() {
        let store = test_store();

        let check = |name: &str, file: ConfFile, expected: fn(&EditorKind) -> bool| {
            let idx = store.find(name, file).unwrap();
            let kind = editor_for(store.get(idx).unwrap());
            assert!(expected(&kind), "{} got {:?}", name, kind);
        };

        check("LogColor", ConfFile::Manager, |k| *k == EditorKind::Toggle);
        check("CrashChVT", ConfFile::Manager, |k| {
            matches!(k, EditorKind::SpinBox { min: -1, max: 63 })
        });
        check("JoinControllers", ConfFile::Manager, |k| *k == EditorKind::Text);
        check("Storage", ConfFile::Journal, |k| {
            matches!(k, EditorKind::Combo { .. })
        });
        check("CPUAffinity", ConfFile::Manager, |k| {
            matches!(k, EditorKind::MultiCheck { .. })
        });
        check("DefaultLimitNOFILE", ConfFile::Manager, |k| {
            *k == EditorKind::LimitField
        });
        check("IdleActionSec", ConfFile::Login, |k| {
            *k == EditorKind::DurationField
        });
        check("SystemMaxUse", ConfFile::Journal, |k| *k == EditorKind::SizeField);
    }

    #[test]
    fn test_rows_match_store_order() {
        let store = test_store();
        let rows = rows(&store);
        assert_eq!(rows.len(), store.len());
        for (i, row) in rows.iter().enumerate() {
            let opt = store.get(i).unwrap();
            assert_eq!(row.name, opt.name);
            assert_eq!(row.file, opt.file);
            assert!(row.is_default);
        }
    }

    #[test]
    fn test_apply_edit_updates_row() {
        let mut store = test_store();
        let idx = store.find("KillUserProcesses", ConfFile::Login).unwrap();
        apply_edit(&mut store, idx, "yes").unwrap();

        let row = &rows(&store)[idx];
        assert_eq!(row.value, "yes");
        assert!(!row.is_default);
    }

    #[test]
    fn test_apply_edit_rejection_keeps_row() {
        let mut store = test_store();
        let idx = store.find("NAutoVTs", ConfFile::Login).unwrap();
        apply_edit(&mut store, idx, "12").unwrap();
        assert!(apply_edit(&mut store, idx, "ninety").is_err());
        assert_eq!(rows(&store)[idx].value, "12");
    }
}
