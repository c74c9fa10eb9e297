// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

use crate::{ErrorKind, NetmanError};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Default,
    Deserialize,
    Serialize,
)]
#[serde(rename_all = "lowercase")]
pub enum NetmanLogLevel {
    Off,
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl NetmanLogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }

    /// Raise the level by `count` steps, saturating at `Trace`.
    pub fn increase(self, count: u8) -> Self {
        let mut ret = self;
        for _ in 0..count {
            ret = match ret {
                Self::Off => Self::Error,
                Self::Error => Self::Warn,
                Self::Warn => Self::Info,
                Self::Info => Self::Debug,
                Self::Debug | Self::Trace => Self::Trace,
            };
        }
        ret
    }
}

impl From<NetmanLogLevel> for log::LevelFilter {
    fn from(v: NetmanLogLevel) -> Self {
        match v {
            NetmanLogLevel::Off => Self::Off,
            NetmanLogLevel::Error => Self::Error,
            NetmanLogLevel::Warn => Self::Warn,
            NetmanLogLevel::Info => Self::Info,
            NetmanLogLevel::Debug => Self::Debug,
            NetmanLogLevel::Trace => Self::Trace,
        }
    }
}

impl From<log::Level> for NetmanLogLevel {
    fn from(v: log::Level) -> Self {
        match v {
            log::Level::Error => Self::Error,
            log::Level::Warn => Self::Warn,
            log::Level::Info => Self::Info,
            log::Level::Debug => Self::Debug,
            log::Level::Trace => Self::Trace,
        }
    }
}

impl std::fmt::Display for NetmanLogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for NetmanLogLevel {
    type Err = NetmanError;

    fn from_str(s: &str) -> Result<Self, NetmanError> {
        match s.to_lowercase().as_str() {
            "off" => Ok(Self::Off),
            "error" => Ok(Self::Error),
            "warn" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            "trace" => Ok(Self::Trace),
            _ => Err(NetmanError::new(
                ErrorKind::InvalidArgument,
                format!("Invalid logging level {s}"),
            )),
        }
    }
}
