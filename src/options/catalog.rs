//! The settings catalog
//!
//! One declarative table covering every setting this tool edits across
//! system.conf, journald.conf, logind.conf, and coredump.conf. Each row
//! carries the systemd version that introduced it; construction filters the
//! table once against the detected version instead of scattering version
//! checks through imperative appends.
//!
//! Several journal and coredump defaults are percentages of the journal
//! partitions, so the caller supplies the discovered host facts. Probing
//! lives in `crate::hostfacts`; building the catalog itself never touches
//! the system.

use super::convert::TimeUnit;
use super::option::{ConfFile, ConfOption, OptionKind, OptionValue, ResourceLimit};

/// Runtime-discovered facts the catalog defaults depend on
#[derive(Debug, Clone, Copy)]
pub struct HostFacts {
    /// Detected systemd version (e.g. 219)
    pub systemd_version: u32,
    /// Capacity of the persistent journal partition, in megabytes
    pub persistent_log_mb: u64,
    /// Capacity of the volatile journal partition, in megabytes
    pub volatile_log_mb: u64,
    /// Number of CPUs, for the CPUAffinity domain
    pub cpu_count: u32,
}

const LOG_LEVELS: &[&str] = &[
    "emerg", "alert", "crit", "err", "warning", "notice", "info", "debug",
];

const LOG_TARGETS: &[&str] = &[
    "console",
    "console-syslog",
    "kmsg",
    "journal",
    "journal-or-kmsg",
    "syslog",
    "syslog-or-kmsg",
    "null",
];

const STD_OUTPUTS: &[&str] = &[
    "inherit",
    "null",
    "tty",
    "journal",
    "journal+console",
    "syslog",
    "syslog+console",
    "kmsg",
    "kmsg+console",
];

const POWER_ACTIONS: &[&str] = &[
    "ignore",
    "poweroff",
    "reboot",
    "halt",
    "kexec",
    "suspend",
    "hibernate",
    "hybrid-sleep",
    "lock",
];

// Table-building helpers, one per kind

fn bool_opt(file: ConfFile, name: &str, default: bool) -> ConfOption {
    ConfOption::new(file, name, OptionKind::Bool, OptionValue::Bool(default))
}

fn int_opt(file: ConfFile, name: &str, min: i64, max: i64, default: i64) -> ConfOption {
    ConfOption::new(file, name, OptionKind::Int { min, max }, OptionValue::Int(default))
}

fn str_opt(file: ConfFile, name: &str, default: &str) -> ConfOption {
    ConfOption::new(file, name, OptionKind::Str, OptionValue::Str(default.to_string()))
}

fn enum_opt(file: ConfFile, name: &str, choices: &[&str], default: &str) -> ConfOption {
    ConfOption::new(
        file,
        name,
        OptionKind::Enum {
            choices: choices.iter().map(|s| s.to_string()).collect(),
        },
        OptionValue::Enum(default.to_string()),
    )
}

/// Multi-select option defaulting to no tokens selected
fn multi_opt(file: ConfFile, name: &str, choices: Vec<String>) -> ConfOption {
    let default = OptionValue::MultiEnum(choices.iter().map(|c| (c.clone(), false)).collect());
    ConfOption::new(file, name, OptionKind::MultiEnum { choices }, default)
}

fn limit_opt(file: ConfFile, name: &str) -> ConfOption {
    ConfOption::new(
        file,
        name,
        OptionKind::Limit { max: u64::MAX },
        OptionValue::Limit(ResourceLimit::Unlimited),
    )
}

fn duration_opt(
    file: ConfFile,
    name: &str,
    canonical: TimeUnit,
    read: TimeUnit,
    sub_second: bool,
    default: u64,
) -> ConfOption {
    ConfOption::new(
        file,
        name,
        OptionKind::Duration {
            canonical,
            read,
            sub_second,
        },
        OptionValue::Duration(default),
    )
}

fn size_opt(file: ConfFile, name: &str, default_mb: u64) -> ConfOption {
    ConfOption::new(
        file,
        name,
        OptionKind::Size { max: u64::MAX },
        OptionValue::Size(default_mb),
    )
}

/// Build the full option list for the detected systemd version.
///
/// Deterministic and side-effect free: the same facts always produce the
/// same options in the same order. Table order is the display order.
pub fn build_catalog(facts: &HostFacts) -> Vec<ConfOption> {
    use ConfFile::{Coredump, Journal, Login, Manager};
    use TimeUnit::{Milliseconds, Months, Nanoseconds, Seconds};

    let cpu_choices: Vec<String> = (1..=facts.cpu_count).map(|n| n.to_string()).collect();

    // Journal size defaults mirror journald's own policy: cap at 10% of the
    // backing partition, keep 15% free, single files at an eighth of the cap.
    let system_max_use = facts.persistent_log_mb / 10;
    let system_keep_free = facts.persistent_log_mb * 15 / 100;
    let runtime_max_use = facts.volatile_log_mb / 10;
    let runtime_keep_free = facts.volatile_log_mb * 15 / 100;

    let table: Vec<(u32, ConfOption)> = vec![
        // system.conf [Manager]
        (0, enum_opt(Manager, "LogLevel", LOG_LEVELS, "info")),
        (0, enum_opt(Manager, "LogTarget", LOG_TARGETS, "journal-or-kmsg")),
        (0, bool_opt(Manager, "LogColor", true)),
        (0, bool_opt(Manager, "LogLocation", false)),
        (0, bool_opt(Manager, "DumpCore", true)),
        (0, bool_opt(Manager, "CrashShell", false)),
        (0, enum_opt(Manager, "ShowStatus", &["yes", "no", "auto"], "yes")),
        (0, int_opt(Manager, "CrashChVT", -1, 63, -1)),
        (0, multi_opt(Manager, "CPUAffinity", cpu_choices)),
        (0, str_opt(Manager, "JoinControllers", "cpu,cpuacct net_cls,net_prio")),
        (0, duration_opt(Manager, "RuntimeWatchdogSec", Seconds, Seconds, true, 0)),
        (0, duration_opt(Manager, "ShutdownWatchdogSec", Seconds, Seconds, true, 600)),
        (0, str_opt(Manager, "CapabilityBoundingSet", "")),
        (
            209,
            multi_opt(
                Manager,
                "SystemCallArchitectures",
                ["native", "x86", "x86-64", "x32", "arm"]
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
            ),
        ),
        (0, duration_opt(Manager, "TimerSlackNSec", Nanoseconds, Nanoseconds, true, 0)),
        (209, duration_opt(Manager, "DefaultTimerAccuracySec", Seconds, Seconds, true, 60)),
        (209, enum_opt(Manager, "DefaultStandardOutput", STD_OUTPUTS, "journal")),
        (209, enum_opt(Manager, "DefaultStandardError", STD_OUTPUTS, "inherit")),
        (0, duration_opt(Manager, "DefaultTimeoutStartSec", Seconds, Seconds, true, 90)),
        (0, duration_opt(Manager, "DefaultTimeoutStopSec", Seconds, Seconds, true, 90)),
        (0, duration_opt(Manager, "DefaultRestartSec", Milliseconds, Milliseconds, true, 100)),
        (0, duration_opt(Manager, "DefaultStartLimitInterval", Seconds, Seconds, true, 10)),
        (0, int_opt(Manager, "DefaultStartLimitBurst", 0, i64::MAX, 5)),
        (205, str_opt(Manager, "DefaultEnvironment", "")),
        (208, bool_opt(Manager, "DefaultCPUAccounting", false)),
        (208, bool_opt(Manager, "DefaultBlockIOAccounting", false)),
        (208, bool_opt(Manager, "DefaultMemoryAccounting", false)),
        (0, limit_opt(Manager, "DefaultLimitCPU")),
        (0, limit_opt(Manager, "DefaultLimitFSIZE")),
        (0, limit_opt(Manager, "DefaultLimitDATA")),
        (0, limit_opt(Manager, "DefaultLimitSTACK")),
        (0, limit_opt(Manager, "DefaultLimitCORE")),
        (0, limit_opt(Manager, "DefaultLimitRSS")),
        (0, limit_opt(Manager, "DefaultLimitNOFILE")),
        (0, limit_opt(Manager, "DefaultLimitAS")),
        (0, limit_opt(Manager, "DefaultLimitNPROC")),
        (0, limit_opt(Manager, "DefaultLimitMEMLOCK")),
        (0, limit_opt(Manager, "DefaultLimitLOCKS")),
        (0, limit_opt(Manager, "DefaultLimitSIGPENDING")),
        (0, limit_opt(Manager, "DefaultLimitMSGQUEUE")),
        (0, limit_opt(Manager, "DefaultLimitNICE")),
        (0, limit_opt(Manager, "DefaultLimitRTPRIO")),
        (0, limit_opt(Manager, "DefaultLimitRTTIME")),
        // journald.conf [Journal]
        (
            0,
            enum_opt(Journal, "Storage", &["volatile", "persistent", "auto", "none"], "auto"),
        ),
        (0, bool_opt(Journal, "Compress", true)),
        (0, bool_opt(Journal, "Seal", true)),
        (0, enum_opt(Journal, "SplitMode", &["login", "uid", "none"], "uid")),
        (0, duration_opt(Journal, "SyncIntervalSec", Seconds, Seconds, false, 300)),
        (0, duration_opt(Journal, "RateLimitInterval", Seconds, Seconds, false, 30)),
        (0, int_opt(Journal, "RateLimitBurst", 0, i64::MAX, 1000)),
        (0, size_opt(Journal, "SystemMaxUse", system_max_use)),
        (0, size_opt(Journal, "SystemKeepFree", system_keep_free)),
        (0, size_opt(Journal, "SystemMaxFileSize", system_max_use / 8)),
        (0, size_opt(Journal, "RuntimeMaxUse", runtime_max_use)),
        (0, size_opt(Journal, "RuntimeKeepFree", runtime_keep_free)),
        (0, size_opt(Journal, "RuntimeMaxFileSize", runtime_max_use / 8)),
        (0, duration_opt(Journal, "MaxRetentionSec", Seconds, Seconds, false, 0)),
        (0, duration_opt(Journal, "MaxFileSec", Months, Seconds, false, 1)),
        (0, bool_opt(Journal, "ForwardToSyslog", true)),
        (0, bool_opt(Journal, "ForwardToKMsg", false)),
        (0, bool_opt(Journal, "ForwardToConsole", false)),
        (212, bool_opt(Journal, "ForwardToWall", true)),
        (0, str_opt(Journal, "TTYPath", "/dev/console")),
        (0, enum_opt(Journal, "MaxLevelStore", LOG_LEVELS, "debug")),
        (0, enum_opt(Journal, "MaxLevelSyslog", LOG_LEVELS, "debug")),
        (0, enum_opt(Journal, "MaxLevelKMsg", LOG_LEVELS, "notice")),
        (0, enum_opt(Journal, "MaxLevelConsole", LOG_LEVELS, "info")),
        (212, enum_opt(Journal, "MaxLevelWall", LOG_LEVELS, "emerg")),
        // logind.conf [Login]
        (0, int_opt(Login, "NAutoVTs", 0, 63, 6)),
        (0, int_opt(Login, "ReserveVT", 0, 63, 6)),
        (0, bool_opt(Login, "KillUserProcesses", false)),
        (0, str_opt(Login, "KillOnlyUsers", "")),
        (0, str_opt(Login, "KillExcludeUsers", "root")),
        (0, duration_opt(Login, "InhibitDelayMaxSec", Seconds, Seconds, false, 5)),
        (0, enum_opt(Login, "HandlePowerKey", POWER_ACTIONS, "poweroff")),
        (0, enum_opt(Login, "HandleSuspendKey", POWER_ACTIONS, "suspend")),
        (0, enum_opt(Login, "HandleHibernateKey", POWER_ACTIONS, "hibernate")),
        (0, enum_opt(Login, "HandleLidSwitch", POWER_ACTIONS, "suspend")),
        (217, enum_opt(Login, "HandleLidSwitchDocked", POWER_ACTIONS, "ignore")),
        (0, bool_opt(Login, "PowerKeyIgnoreInhibited", false)),
        (0, bool_opt(Login, "SuspendKeyIgnoreInhibited", false)),
        (0, bool_opt(Login, "HibernateKeyIgnoreInhibited", false)),
        (0, bool_opt(Login, "LidSwitchIgnoreInhibited", true)),
        (198, enum_opt(Login, "IdleAction", POWER_ACTIONS, "ignore")),
        (198, duration_opt(Login, "IdleActionSec", Seconds, Seconds, false, 1800)),
        (212, bool_opt(Login, "RemoveIPC", true)),
        // coredump.conf [Coredump] (the file appeared in v215)
        (
            215,
            enum_opt(Coredump, "Storage", &["none", "external", "journal", "both"], "external"),
        ),
        (215, bool_opt(Coredump, "Compress", true)),
        (215, size_opt(Coredump, "ProcessSizeMax", 2048)),
        (215, size_opt(Coredump, "ExternalSizeMax", 2048)),
        (215, size_opt(Coredump, "JournalSizeMax", 767)),
        (215, size_opt(Coredump, "MaxUse", facts.persistent_log_mb / 10)),
        (215, size_opt(Coredump, "KeepFree", facts.persistent_log_mb * 15 / 100)),
    ];

    table
        .into_iter()
        .filter(|(min_version, _)| facts.systemd_version >= *min_version)
        .map(|(_, option)| option)
        .collect()
}
