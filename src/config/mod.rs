use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::ir::ShareAuditRecord;
use crate::risk::{overall_risk, RiskLevel};

/// Top-level configuration from `.shareguard.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub policy: Policy,
}

/// Exit policy: the audit fails when the host's overall risk reaches the
/// threshold tier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Policy {
    #[serde(default = "default_fail_on", with = "risk_text")]
    pub fail_on: RiskLevel,
}

fn default_fail_on() -> RiskLevel {
    RiskLevel::High
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            fail_on: default_fail_on(),
        }
    }
}

/// The final pass/fail decision over a host's audit records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditVerdict {
    pub pass: bool,
    pub overall_risk: RiskLevel,
    pub record_count: usize,
    pub fail_threshold: RiskLevel,
}

impl Policy {
    pub fn evaluate(&self, records: &[ShareAuditRecord]) -> AuditVerdict {
        let overall = overall_risk(records);
        AuditVerdict {
            pass: overall < self.fail_on,
            overall_risk: overall,
            record_count: records.len(),
            fail_threshold: self.fail_on,
        }
    }
}

impl Config {
    /// Load config from a TOML file. Returns default if file doesn't exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Generate a starter config file.
    pub fn starter_toml() -> &'static str {
        r#"# Shareguard configuration

[policy]
# Overall risk tier at which the audit exits non-zero (low, mid, high, critical).
fail_on = "high"
"#
    }
}

/// Risk tiers are written with their legacy lowercase spellings in config
/// files; parsing is lenient (`medium` is accepted for `mid`).
mod risk_text {
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::risk::RiskLevel;

    pub fn serialize<S: Serializer>(level: &RiskLevel, ser: S) -> Result<S::Ok, S::Error> {
        ser.serialize_str(&level.to_string().to_lowercase())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<RiskLevel, D::Error> {
        let s = String::deserialize(de)?;
        Ok(RiskLevel::from_str_lenient(&s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_yields_default() {
        let config = Config::load(Path::new("/nonexistent/.shareguard.toml")).unwrap();
        assert_eq!(config.policy.fail_on, RiskLevel::High);
    }

    #[test]
    fn parses_fail_on_leniently() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[policy]\nfail_on = \"medium\"").unwrap();
        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.policy.fail_on, RiskLevel::Mid);
    }

    #[test]
    fn starter_toml_round_trips() {
        let config: Config = toml::from_str(Config::starter_toml()).unwrap();
        assert_eq!(config.policy.fail_on, RiskLevel::High);
    }

    #[test]
    fn empty_record_set_passes() {
        let policy = Policy {
            fail_on: RiskLevel::High,
        };
        let verdict = policy.evaluate(&[]);
        assert!(verdict.pass);
        assert_eq!(verdict.overall_risk, RiskLevel::Low);
        assert_eq!(verdict.record_count, 0);
    }
}
