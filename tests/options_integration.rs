//! Integration tests for the option model: load, edit, render, reload

use std::path::Path;

use sysdconf::options::reader::{apply_file_text, load_all};
use sysdconf::options::writer::{render_all, render_file};
use sysdconf::options::{ConfFile, ConfStore, HostFacts, LoadWarning, OptionValue, ResourceLimit};
use sysdconf::panel;

fn facts() -> HostFacts {
    HostFacts {
        systemd_version: 219,
        persistent_log_mb: 8000,
        volatile_log_mb: 2000,
        cpu_count: 4,
    }
}

#[test]
fn load_edit_render_reload_cycle() {
    let mut store = ConfStore::new(&facts());

    let journald = "\
# journald.conf
[Journal]
Storage=persistent
SystemMaxUse=1G
ForwardToSyslog=no
RateLimitInterval=1min
";
    let warnings = apply_file_text(&mut store, ConfFile::Journal, journald);
    assert!(warnings.is_empty());

    // Interactive edit on top of the loaded state
    let idx = store.find("MaxLevelConsole", ConfFile::Journal).unwrap();
    panel::apply_edit(&mut store, idx, "warning").unwrap();

    let doc = render_file(&store, ConfFile::Journal, Path::new("/etc/systemd"));
    assert!(doc.contains("\nStorage=persistent\n"));
    assert!(doc.contains("\nSystemMaxUse=1024M\n"));
    assert!(doc.contains("\nForwardToSyslog=no\n"));
    assert!(doc.contains("\nRateLimitInterval=60s\n"));
    assert!(doc.contains("\nMaxLevelConsole=warning\n"));
    // Untouched settings stay commented out
    assert!(doc.contains("\n#Compress=\n"));

    // Reloading the rendered document reproduces the same values
    let mut reloaded = ConfStore::new(&facts());
    let warnings = apply_file_text(&mut reloaded, ConfFile::Journal, &doc);
    assert!(warnings.is_empty());
    for (a, b) in store.iter().zip(reloaded.iter()) {
        assert_eq!(a.value, b.value, "mismatch for {}", a.name);
    }
}

#[test]
fn mixed_unknown_and_malformed_lines() {
    let mut store = ConfStore::new(&facts());

    let text = "\
[Login]
FutureSetting=anything
NAutoVTs=banana
HandlePowerKey=suspend
";
    let warnings = apply_file_text(&mut store, ConfFile::Login, text);

    // Unknown key: silent. Malformed NAutoVTs: exactly one warning, value
    // stays at default. The valid line still applies.
    assert_eq!(warnings.len(), 1);
    assert!(matches!(
        &warnings[0],
        LoadWarning::InvalidValue { key, .. } if key == "NAutoVTs"
    ));

    let idx = store.find("NAutoVTs", ConfFile::Login).unwrap();
    assert_eq!(store.get(idx).unwrap().value, OptionValue::Int(6));
    let idx = store.find("HandlePowerKey", ConfFile::Login).unwrap();
    assert_eq!(
        store.get(idx).unwrap().value,
        OptionValue::Enum("suspend".to_string())
    );
}

#[test]
fn resource_limits_through_file_text() {
    let mut store = ConfStore::new(&facts());

    let text = "\
[Manager]
DefaultLimitNOFILE=4096
DefaultLimitCORE=infinity
DefaultLimitNPROC=-5
";
    let warnings = apply_file_text(&mut store, ConfFile::Manager, text);
    assert_eq!(warnings.len(), 1);

    let value = |name: &str| {
        let idx = store.find(name, ConfFile::Manager).unwrap();
        store.get(idx).unwrap().value.clone()
    };
    assert_eq!(
        value("DefaultLimitNOFILE"),
        OptionValue::Limit(ResourceLimit::Value(4096))
    );
    assert_eq!(
        value("DefaultLimitCORE"),
        OptionValue::Limit(ResourceLimit::Unlimited)
    );
    // Rejected negative stays at the default (unlimited)
    assert_eq!(
        value("DefaultLimitNPROC"),
        OptionValue::Limit(ResourceLimit::Unlimited)
    );

    // NOFILE is customized even though its value differs from default only
    // by leaving the sentinel
    let doc = render_file(&store, ConfFile::Manager, Path::new("/etc/systemd"));
    assert!(doc.contains("\nDefaultLimitNOFILE=4096\n"));
    assert!(doc.contains("\n#DefaultLimitCORE=\n"));
}

#[test]
fn duration_settings_respect_read_units() {
    let mut store = ConfStore::new(&facts());

    // TimerSlackNSec reads bare numbers as nanoseconds
    let text = "[Manager]\nTimerSlackNSec=30\nRuntimeWatchdogSec=2min\n";
    let warnings = apply_file_text(&mut store, ConfFile::Manager, text);
    assert!(warnings.is_empty());

    let idx = store.find("TimerSlackNSec", ConfFile::Manager).unwrap();
    assert_eq!(store.get(idx).unwrap().value, OptionValue::Duration(30));
    assert_eq!(store.get(idx).unwrap().file_line(), "TimerSlackNSec=30ns\n");

    let idx = store.find("RuntimeWatchdogSec", ConfFile::Manager).unwrap();
    assert_eq!(store.get(idx).unwrap().value, OptionValue::Duration(120));
}

#[test]
fn sub_second_rejected_for_ordinary_timeouts() {
    let mut store = ConfStore::new(&facts());

    // logind durations do not accept sub-second suffixes
    let text = "[Login]\nInhibitDelayMaxSec=500ms\n";
    let warnings = apply_file_text(&mut store, ConfFile::Login, text);
    assert_eq!(warnings.len(), 1);

    let idx = store.find("InhibitDelayMaxSec", ConfFile::Login).unwrap();
    assert!(store.get(idx).unwrap().is_default());

    // PID-1 durations do accept them
    let mut store = ConfStore::new(&facts());
    let text = "[Manager]\nDefaultRestartSec=500ms\n";
    let warnings = apply_file_text(&mut store, ConfFile::Manager, text);
    assert!(warnings.is_empty());
    let idx = store.find("DefaultRestartSec", ConfFile::Manager).unwrap();
    assert_eq!(store.get(idx).unwrap().value, OptionValue::Duration(500));
}

#[test]
fn cpu_affinity_multi_select() {
    let mut store = ConfStore::new(&facts());

    let text = "[Manager]\nCPUAffinity=1 3\n";
    let warnings = apply_file_text(&mut store, ConfFile::Manager, text);
    assert!(warnings.is_empty());

    let idx = store.find("CPUAffinity", ConfFile::Manager).unwrap();
    assert_eq!(
        store.get(idx).unwrap().value,
        OptionValue::MultiEnum(vec![
            ("1".to_string(), true),
            ("2".to_string(), false),
            ("3".to_string(), true),
            ("4".to_string(), false),
        ])
    );
    assert_eq!(store.get(idx).unwrap().file_line(), "CPUAffinity=1 3\n");
}

#[tokio::test]
async fn load_all_from_directory() {
    let dir = tempfile::tempdir().unwrap();
    tokio::fs::write(
        dir.path().join("system.conf"),
        "[Manager]\nLogLevel=debug\n",
    )
    .await
    .unwrap();
    tokio::fs::write(
        dir.path().join("journald.conf"),
        "[Journal]\nCompress=no\n",
    )
    .await
    .unwrap();

    let mut store = ConfStore::new(&facts());
    let warnings = load_all(&mut store, dir.path()).await;

    // logind.conf and coredump.conf are missing: one warning each
    assert_eq!(warnings.len(), 2);
    assert!(warnings
        .iter()
        .all(|w| matches!(w, LoadWarning::UnreadableFile { .. })));

    let idx = store.find("LogLevel", ConfFile::Manager).unwrap();
    assert_eq!(
        store.get(idx).unwrap().value,
        OptionValue::Enum("debug".to_string())
    );
    let idx = store.find("Compress", ConfFile::Journal).unwrap();
    assert_eq!(store.get(idx).unwrap().value, OptionValue::Bool(false));
    // Files that failed to load stay entirely at defaults
    assert!(store.iter_file(ConfFile::Login).all(|o| o.is_default()));
}

#[test]
fn render_all_batch_is_complete_and_ordered() {
    let store = ConfStore::new(&facts());
    let batch = render_all(&store, Path::new("/etc/systemd"));

    let names: Vec<&str> = batch.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(
        names,
        vec!["system.conf", "journald.conf", "logind.conf", "coredump.conf"]
    );
    for (name, doc) in &batch {
        assert!(doc.starts_with(&format!("# /etc/systemd/{}\n", name)));
        assert!(doc.ends_with('\n'));
    }
}
