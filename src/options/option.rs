//! Typed configuration options
//!
//! Each option pairs immutable descriptor data (owning file, key name,
//! semantic kind, default) with its live value. Parsing from file text,
//! validation, and serialization back to a `Key=Value` line all dispatch on
//! the kind in one place.

use super::convert::{self, ConvertError, TimeUnit};

/// The four configuration files this tool edits, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ConfFile {
    Manager,
    Journal,
    Login,
    Coredump,
}

impl ConfFile {
    pub const ALL: [ConfFile; 4] = [
        ConfFile::Manager,
        ConfFile::Journal,
        ConfFile::Login,
        ConfFile::Coredump,
    ];

    /// On-disk file name
    pub fn file_name(self) -> &'static str {
        match self {
            ConfFile::Manager => "system.conf",
            ConfFile::Journal => "journald.conf",
            ConfFile::Login => "logind.conf",
            ConfFile::Coredump => "coredump.conf",
        }
    }

    /// Section header the file's settings live under
    pub fn section(self) -> &'static str {
        match self {
            ConfFile::Manager => "[Manager]",
            ConfFile::Journal => "[Journal]",
            ConfFile::Login => "[Login]",
            ConfFile::Coredump => "[Coredump]",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "manager" | "system" | "system.conf" => Some(Self::Manager),
            "journal" | "journald" | "journald.conf" => Some(Self::Journal),
            "login" | "logind" | "logind.conf" => Some(Self::Login),
            "coredump" | "coredump.conf" => Some(Self::Coredump),
            _ => None,
        }
    }
}

/// Semantic type of an option, with its legal value domain
#[derive(Debug, Clone, PartialEq)]
pub enum OptionKind {
    Bool,
    Int {
        min: i64,
        max: i64,
    },
    Str,
    Enum {
        choices: Vec<String>,
    },
    MultiEnum {
        choices: Vec<String>,
    },
    Limit {
        max: u64,
    },
    Duration {
        canonical: TimeUnit,
        read: TimeUnit,
        sub_second: bool,
    },
    Size {
        max: u64,
    },
}

/// A resource limit is either a count or unbounded ("infinity" on the wire)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceLimit {
    Unlimited,
    Value(u64),
}

/// Live value, shaped to match the kind
#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
    Bool(bool),
    Int(i64),
    Str(String),
    Enum(String),
    /// Every domain token is always present, never a sparse subset
    MultiEnum(Vec<(String, bool)>),
    Limit(ResourceLimit),
    /// Integer count in the descriptor's canonical unit
    Duration(u64),
    /// Whole megabytes
    Size(u64),
}

#[derive(Debug, thiserror::Error)]
pub enum ValueError {
    #[error(transparent)]
    Convert(#[from] ConvertError),

    #[error("'{0}' is not a boolean")]
    BadBoolean(String),

    #[error("invalid integer '{0}'")]
    BadInteger(String),

    #[error("{0} is outside the range [{1}, {2}]")]
    OutOfRange(i64, i64, i64),

    #[error("'{0}' is not an allowed value")]
    NotInDomain(String),

    #[error("'{0}' is not a non-negative limit or 'infinity'")]
    BadLimit(String),

    #[error("{0} exceeds the maximum of {1}")]
    TooLarge(u64, u64),
}

/// Parse the boolean token set shared by all systemd config files
fn parse_bool(s: &str) -> Option<bool> {
    match s.to_lowercase().as_str() {
        "true" | "on" | "yes" => Some(true),
        "false" | "off" | "no" => Some(false),
        _ => None,
    }
}

/// One configuration option: descriptor plus live value
#[derive(Debug, Clone, PartialEq)]
pub struct ConfOption {
    pub file: ConfFile,
    pub name: String,
    pub kind: OptionKind,
    pub default: OptionValue,
    pub value: OptionValue,
}

impl ConfOption {
    pub fn new(file: ConfFile, name: &str, kind: OptionKind, default: OptionValue) -> Self {
        Self {
            file,
            name: name.to_string(),
            kind,
            value: default.clone(),
            default,
        }
    }

    /// Identity within the registry: two files may share a key name
    /// (e.g. Storage= exists in both journald.conf and coredump.conf)
    pub fn unique_key(&self) -> (&str, ConfFile) {
        (&self.name, self.file)
    }

    pub fn is_default(&self) -> bool {
        self.value == self.default
    }

    pub fn reset_to_default(&mut self) {
        self.value = self.default.clone();
    }

    /// Set the value from the right-hand side of a config-file line.
    ///
    /// On any rejection the stored value is left untouched and the error
    /// describes why, so the caller can surface a warning and continue.
    pub fn set_from_file(&mut self, raw: &str) -> Result<(), ValueError> {
        let raw = raw.trim();

        let parsed = match &self.kind {
            OptionKind::Bool => {
                let b = parse_bool(raw).ok_or_else(|| ValueError::BadBoolean(raw.to_string()))?;
                OptionValue::Bool(b)
            }
            OptionKind::Int { min, max } => {
                let n: i64 = raw
                    .parse()
                    .map_err(|_| ValueError::BadInteger(raw.to_string()))?;
                if n < *min || n > *max {
                    return Err(ValueError::OutOfRange(n, *min, *max));
                }
                OptionValue::Int(n)
            }
            OptionKind::Str => OptionValue::Str(raw.to_string()),
            OptionKind::Enum { choices } => {
                // ShowStatus= historically accepted plain booleans; they are
                // normalized to yes/no before the membership check. This is a
                // documented special case of that one setting.
                let token = if self.name == "ShowStatus" {
                    match parse_bool(raw) {
                        Some(true) => "yes".to_string(),
                        Some(false) => "no".to_string(),
                        None => raw.to_string(),
                    }
                } else {
                    raw.to_string()
                };
                if !choices.iter().any(|c| *c == token) {
                    return Err(ValueError::NotInDomain(raw.to_string()));
                }
                OptionValue::Enum(token)
            }
            OptionKind::MultiEnum { choices } => {
                let tokens: Vec<&str> = raw.split_whitespace().collect();
                for t in &tokens {
                    if !choices.iter().any(|c| c == t) {
                        return Err(ValueError::NotInDomain((*t).to_string()));
                    }
                }
                let map = choices
                    .iter()
                    .map(|c| (c.clone(), tokens.contains(&c.as_str())))
                    .collect();
                OptionValue::MultiEnum(map)
            }
            OptionKind::Limit { max } => {
                if raw.is_empty() || raw.eq_ignore_ascii_case("infinity") {
                    OptionValue::Limit(ResourceLimit::Unlimited)
                } else {
                    // u64 keeps the full limit range; negatives fail the parse
                    let n: u64 = raw
                        .parse()
                        .map_err(|_| ValueError::BadLimit(raw.to_string()))?;
                    if n > *max {
                        return Err(ValueError::TooLarge(n, *max));
                    }
                    OptionValue::Limit(ResourceLimit::Value(n))
                }
            }
            OptionKind::Duration {
                canonical,
                read,
                sub_second,
            } => {
                let v = convert::parse_duration(raw, *sub_second, *read, *canonical)?;
                OptionValue::Duration(v)
            }
            OptionKind::Size { max } => {
                let mb = convert::parse_byte_size(raw)?;
                if mb > *max {
                    return Err(ValueError::TooLarge(mb, *max));
                }
                OptionValue::Size(mb)
            }
        };

        self.value = parsed;
        Ok(())
    }

    /// Format the current value as it appears on the right of `Key=`
    pub fn format_value(&self) -> String {
        match &self.value {
            OptionValue::Bool(true) => "yes".to_string(),
            OptionValue::Bool(false) => "no".to_string(),
            OptionValue::Int(n) => n.to_string(),
            OptionValue::Str(s) => s.clone(),
            OptionValue::Enum(s) => s.clone(),
            OptionValue::MultiEnum(map) => map
                .iter()
                .filter(|(_, on)| *on)
                .map(|(token, _)| token.as_str())
                .collect::<Vec<_>>()
                .join(" "),
            OptionValue::Limit(ResourceLimit::Unlimited) => "infinity".to_string(),
            OptionValue::Limit(ResourceLimit::Value(n)) => n.to_string(),
            OptionValue::Duration(v) => {
                let canonical = match &self.kind {
                    OptionKind::Duration { canonical, .. } => *canonical,
                    _ => TimeUnit::Seconds,
                };
                convert::format_duration(*v, canonical)
            }
            OptionValue::Size(mb) => convert::format_byte_size(*mb),
        }
    }

    /// The complete line this option contributes to its file.
    ///
    /// An option still at its default emits a commented placeholder, which
    /// keeps the key discoverable without activating it.
    pub fn file_line(&self) -> String {
        if self.is_default() {
            format!("#{}=\n", self.name)
        } else {
            format!("{}={}\n", self.name, self.format_value())
        }
    }
}
