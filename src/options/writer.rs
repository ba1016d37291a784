//! Config file writer
//!
//! Produces the complete replacement text for each configuration file:
//! a two-line comment header, the section header, then one line per option
//! in catalog order. Options still at their default emit a commented
//! placeholder so the key stays discoverable without activating it.
//!
//! Nothing here touches the disk. The rendered batch goes to the privileged
//! helper, which performs the actual writes.

use std::path::Path;

use super::option::ConfFile;
use super::store::ConfStore;

/// Render the full document for one configuration file.
pub fn render_file(store: &ConfStore, file: ConfFile, dir: &Path) -> String {
    let mut doc = String::new();
    doc.push_str(&format!("# {}\n", dir.join(file.file_name()).display()));
    doc.push_str(&format!(
        "# Generated by sysdconf {}\n",
        env!("CARGO_PKG_VERSION")
    ));
    doc.push_str(file.section());
    doc.push('\n');

    for opt in store.iter_file(file) {
        doc.push_str(&opt.file_line());
    }

    doc
}

/// Render every file that has at least one option in the store.
///
/// Returns (file name, document text) pairs in `ConfFile::ALL` order, ready
/// to hand to the privileged write helper as one batch.
pub fn render_all(store: &ConfStore, dir: &Path) -> Vec<(String, String)> {
    ConfFile::ALL
        .iter()
        .filter(|file| store.iter_file(**file).next().is_some())
        .map(|file| {
            (
                file.file_name().to_string(),
                render_file(store, *file, dir),
            )
        })
        .collect()
}
