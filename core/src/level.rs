//! # Level: the severity scale
//!
//! Levels are plain integers. Each band starts at a multiple of 100 and covers
//! `[band, band + 100)`, so a component may report an intermediate value such
//! as `210` (an OK state carrying an info hint) without leaving its band.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Includes 'loading' and 'not-applicable'.
pub const UNKNOWN: i64 = 0;
/// Manually disabled.
pub const DISABLED: i64 = 100;
/// May include an optimization hint or info message.
pub const OK: i64 = 200;
/// Something may go wrong in the future.
pub const ATTENTION: i64 = 300;
/// Something went wrong, with little effect on core functionality.
pub const WARNING: i64 = 400;
/// Core functionality is affected, but may recover automatically.
pub const ERROR: i64 = 500;
/// Cannot recover automatically; manual intervention required.
pub const FAULT: i64 = 600;
/// Consequences are uncertain, so the worst must be assumed.
pub const PANIC: i64 = 700;

/// Named severity band of a raw level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Band {
    Unknown,
    Disabled,
    #[serde(rename = "OK")]
    Ok,
    Attention,
    Warning,
    Error,
    Fault,
    Panic,
}

impl Band {
    /// Band containing `level`. Negative levels fall into `Unknown`,
    /// anything from 700 upward is `Panic`.
    pub fn of(level: i64) -> Self {
        if level < DISABLED {
            Band::Unknown
        } else if level < OK {
            Band::Disabled
        } else if level < ATTENTION {
            Band::Ok
        } else if level < WARNING {
            Band::Attention
        } else if level < ERROR {
            Band::Warning
        } else if level < FAULT {
            Band::Error
        } else if level < PANIC {
            Band::Fault
        } else {
            Band::Panic
        }
    }

    /// Lowest level inside this band.
    pub fn floor(&self) -> i64 {
        match self {
            Band::Unknown => UNKNOWN,
            Band::Disabled => DISABLED,
            Band::Ok => OK,
            Band::Attention => ATTENTION,
            Band::Warning => WARNING,
            Band::Error => ERROR,
            Band::Fault => FAULT,
            Band::Panic => PANIC,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Band::Unknown => "Unknown",
            Band::Disabled => "Disabled",
            Band::Ok => "OK",
            Band::Attention => "Attention",
            Band::Warning => "Warning",
            Band::Error => "Error",
            Band::Fault => "Fault",
            Band::Panic => "Panic",
        }
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Human-readable name of the band containing `level`.
pub fn band_name(level: i64) -> &'static str {
    Band::of(level).name()
}
