use crate::core::batch::DEFAULT_MEMBER_DELAY_MS;
use crate::core::extract::DEFAULT_ROW_CAP;
use crate::core::fetch::{DEFAULT_JUDGE_BASE_URL, DEFAULT_TIMEOUT_SECS};
use crate::domain::model::Member;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_range, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Batch-job configuration, loaded from a TOML file:
///
/// ```toml
/// [backend]
/// base_url = "https://xyzcompany.supabase.co"
/// service_key = "service-role-key"
///
/// [judge]
/// # base_url / timeout_seconds / utc_offset_hours / row_cap, all optional
///
/// [batch]
/// member_delay_ms = 1000
///
/// [[members]]
/// id = "profile-uuid"
/// handle = "boj-handle"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterConfig {
    pub backend: BackendConfig,
    #[serde(default)]
    pub judge: JudgeConfig,
    #[serde(default)]
    pub batch: BatchConfig,
    #[serde(default)]
    pub members: Vec<Member>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    pub base_url: String,
    pub service_key: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JudgeConfig {
    #[serde(default = "default_judge_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    #[serde(default = "default_utc_offset_hours")]
    pub utc_offset_hours: i32,
    #[serde(default = "default_row_cap")]
    pub row_cap: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchConfig {
    #[serde(default = "default_member_delay_ms")]
    pub member_delay_ms: u64,
}

fn default_judge_base_url() -> String {
    DEFAULT_JUDGE_BASE_URL.to_string()
}

fn default_timeout_seconds() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_utc_offset_hours() -> i32 {
    crate::core::window::DEFAULT_UTC_OFFSET_HOURS
}

fn default_row_cap() -> usize {
    DEFAULT_ROW_CAP
}

fn default_member_delay_ms() -> u64 {
    DEFAULT_MEMBER_DELAY_MS
}

impl Default for JudgeConfig {
    fn default() -> Self {
        Self {
            base_url: default_judge_base_url(),
            timeout_seconds: default_timeout_seconds(),
            utc_offset_hours: default_utc_offset_hours(),
            row_cap: default_row_cap(),
        }
    }
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            member_delay_ms: default_member_delay_ms(),
        }
    }
}

impl RosterConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: RosterConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }
}

impl Validate for RosterConfig {
    fn validate(&self) -> Result<()> {
        validate_url("backend.base_url", &self.backend.base_url)?;
        validate_non_empty_string("backend.service_key", &self.backend.service_key)?;
        validate_url("judge.base_url", &self.judge.base_url)?;
        validate_range("judge.utc_offset_hours", self.judge.utc_offset_hours, -12, 14)?;
        validate_range("judge.timeout_seconds", self.judge.timeout_seconds, 1, 60)?;
        for member in &self.members {
            validate_non_empty_string("members.id", &member.id)?;
            validate_non_empty_string("members.handle", &member.handle)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_roster_loads_with_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[backend]
base_url = "https://example.supabase.co"
service_key = "sk"

[[members]]
id = "p1"
handle = "alice"

[[members]]
id = "p2"
handle = "bob"
"#
        )
        .unwrap();

        let config = RosterConfig::from_file(file.path()).unwrap();
        assert_eq!(config.members.len(), 2);
        assert_eq!(config.judge.utc_offset_hours, 9);
        assert_eq!(config.batch.member_delay_ms, 1000);
        assert_eq!(config.judge.base_url, DEFAULT_JUDGE_BASE_URL);
    }

    #[test]
    fn test_blank_handle_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[backend]
base_url = "https://example.supabase.co"
service_key = "sk"

[[members]]
id = "p1"
handle = "  "
"#
        )
        .unwrap();

        assert!(RosterConfig::from_file(file.path()).is_err());
    }
}
