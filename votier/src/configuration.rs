use crate::authorization::AdminPolicy;
use serde::{Deserialize, Serialize};
use std::fmt;
use votier_common::error::ElectionError;
use votier_common::types::Timestamp;

const ELECTION_MAX_CANDIDATES_COUNT: u32 = 10;
const MANAGER_COMMAND_BUFFER: usize = 100;
const MANAGER_EVENT_BUFFER: usize = 100;

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct Configuration {
    #[serde(default)]
    pub election: ElectionConfiguration,
    #[serde(default)]
    pub manager: ManagerConfiguration,
}

impl Configuration {
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.election.max_candidates_count == 0 {
            return Err(ConfigurationError::Election(ElectionError::InvalidConfig(
                "max_candidates_count must be positive",
            )));
        }
        if self.manager.command_buffer == 0 {
            return Err(ConfigurationError::ZeroBuffer("manager.command_buffer"));
        }
        if self.manager.event_buffer == 0 {
            return Err(ConfigurationError::ZeroBuffer("manager.event_buffer"));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ElectionConfiguration {
    #[serde(default)]
    pub max_candidates_count: u32,
    #[serde(default)]
    pub scheduled_end_timestamp: Option<Timestamp>,
    #[serde(default)]
    pub admin_policy: AdminPolicy,
}

impl Default for ElectionConfiguration {
    fn default() -> Self {
        Self {
            max_candidates_count: ELECTION_MAX_CANDIDATES_COUNT,
            scheduled_end_timestamp: None,
            admin_policy: AdminPolicy::default(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ManagerConfiguration {
    #[serde(default)]
    pub command_buffer: usize,
    #[serde(default)]
    pub event_buffer: usize,
}

impl Default for ManagerConfiguration {
    fn default() -> Self {
        Self {
            command_buffer: MANAGER_COMMAND_BUFFER,
            event_buffer: MANAGER_EVENT_BUFFER,
        }
    }
}

/// Settings fixed when an election is deployed.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ElectionConfig {
    pub max_candidates_count: u32,
    pub scheduled_end_timestamp: Option<Timestamp>,
    pub admin_policy: AdminPolicy,
    pub creation_time: Timestamp,
}

impl ElectionConfig {
    pub fn new(conf: &ElectionConfiguration, creation_time: Timestamp) -> Result<Self, ElectionError> {
        if conf.max_candidates_count == 0 {
            return Err(ElectionError::InvalidConfig(
                "max_candidates_count must be positive",
            ));
        }
        Ok(Self {
            max_candidates_count: conf.max_candidates_count,
            scheduled_end_timestamp: conf.scheduled_end_timestamp,
            admin_policy: conf.admin_policy,
            creation_time,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigurationError {
    Election(ElectionError),
    ZeroBuffer(&'static str),
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigurationError::Election(e) => e.fmt(f),
            ConfigurationError::ZeroBuffer(key) => {
                write!(f, "buffer size must be positive: key={}", key)
            }
        }
    }
}

impl std::error::Error for ConfigurationError {}

impl From<ElectionError> for ConfigurationError {
    fn from(e: ElectionError) -> Self {
        ConfigurationError::Election(e)
    }
}
