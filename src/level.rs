use std::fmt;
use std::str::FromStr;

/// Severity of a log record.
///
/// The set is closed: the writer only ever deals in these five levels, so the
/// accepted-levels filter reduces to a set-membership check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AttoLevel {
    Verbose,
    Debug,
    Info,
    Warning,
    Error,
}

impl AttoLevel {
    /// All levels, in ascending severity order.
    pub const ALL: [AttoLevel; 5] = [
        AttoLevel::Verbose,
        AttoLevel::Debug,
        AttoLevel::Info,
        AttoLevel::Warning,
        AttoLevel::Error,
    ];
}

impl Default for AttoLevel {
    fn default() -> Self {
        Self::Info
    }
}

impl fmt::Display for AttoLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AttoLevel::Verbose => "VERBOSE",
            AttoLevel::Debug => "DEBUG",
            AttoLevel::Info => "INFO",
            AttoLevel::Warning => "WARNING",
            AttoLevel::Error => "ERROR",
        };
        f.write_str(s)
    }
}

impl FromStr for AttoLevel {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "VERBOSE" => Ok(Self::Verbose),
            "DEBUG" => Ok(Self::Debug),
            "INFO" => Ok(Self::Info),
            "WARN" | "WARNING" => Ok(Self::Warning),
            "ERROR" => Ok(Self::Error),
            _ => Err(()),
        }
    }
}
