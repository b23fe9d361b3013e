use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use super::{MvcError, Result};

/// Pause after each console command, giving the model time to answer.
pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_millis(500);

/// How often the graphical front-end wakes up to drain results while idle.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Which front-end drives the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontEndKind {
    Cmd,
    Tk,
}

impl FrontEndKind {
    /// Whether this front-end was compiled into the binary.
    pub fn is_available(self) -> bool {
        match self {
            FrontEndKind::Cmd => true,
            FrontEndKind::Tk => cfg!(feature = "gui"),
        }
    }
}

impl FromStr for FrontEndKind {
    type Err = MvcError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "cmd" => Ok(FrontEndKind::Cmd),
            "tk" => Ok(FrontEndKind::Tk),
            other => Err(MvcError::UnknownFrontEnd(other.to_string())),
        }
    }
}

impl fmt::Display for FrontEndKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrontEndKind::Cmd => write!(f, "cmd"),
            FrontEndKind::Tk => write!(f, "tk"),
        }
    }
}

/// Launch configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub front_end: FrontEndKind,
    pub settle_delay: Duration,
    pub poll_interval: Duration,
}

impl Config {
    /// Default timings for the given front-end.
    pub fn new(front_end: FrontEndKind) -> Self {
        Self {
            front_end,
            settle_delay: DEFAULT_SETTLE_DELAY,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }

    /// Builds the configuration from the process arguments (program name first).
    ///
    /// # Errors
    /// `MissingFrontEnd` without a selector, `UnknownFrontEnd` for anything but
    /// `cmd` / `tk`, `FrontEndUnavailable` for a front-end not compiled in.
    pub fn from_args<I>(args: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let selector = args.into_iter().nth(1).ok_or(MvcError::MissingFrontEnd)?;
        let front_end = selector.as_ref().parse::<FrontEndKind>()?;

        if !front_end.is_available() {
            return Err(MvcError::FrontEndUnavailable(front_end.to_string()));
        }

        Ok(Self::new(front_end))
    }
}

/// Printed when the selector is missing or wrong.
pub fn usage(program: &str) -> String {
    format!(
        "Please call with a particular ViewController interface, i.e.\n\t> {program} X\nwhere X = 'cmd' or X = 'tk'"
    )
}
