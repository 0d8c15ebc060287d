//! Profile sequence
//!
//! The ordered list of steps a run cycles through. Either the built-in
//! day/night pair or a `[[step]]` list loaded from a TOML profile file.

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use super::step::{CctChannels, ProfileStep, UvaChannel, UvbChannel};

/// Ordered, immutable list of profile steps
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProfileSequence {
    #[serde(rename = "step")]
    steps: Vec<ProfileStep>,
}

impl ProfileSequence {
    /// The built-in burn-in sequence: full daylight with UV, then night.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            steps: vec![
                ProfileStep {
                    cct: CctChannels {
                        day: 9000,
                        warm: 2000,
                    },
                    uva: UvaChannel {
                        set: 5000,
                        clamp: 8000,
                    },
                    uvb: UvbChannel {
                        set: 4500,
                        clamp: 6000,
                        period_s: 60,
                        duty_pm: 4500,
                    },
                    sky: 1,
                },
                ProfileStep {
                    cct: CctChannels {
                        day: 3000,
                        warm: 1000,
                    },
                    uva: UvaChannel {
                        set: 0,
                        clamp: 8000,
                    },
                    uvb: UvbChannel {
                        set: 0,
                        clamp: 6000,
                        period_s: 90,
                        duty_pm: 0,
                    },
                    sky: 0,
                },
            ],
        }
    }

    /// Build a sequence from explicit steps. Fails on an empty list.
    pub fn new(steps: Vec<ProfileStep>) -> Result<Self> {
        let sequence = Self { steps };
        sequence.validate()?;
        Ok(sequence)
    }

    /// Load a profile file from a path
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read profile file: {}", path.display()))?;
        Self::parse(&content)
    }

    /// Parse profile TOML content from a string
    pub fn parse(content: &str) -> Result<Self> {
        let sequence: Self = toml::from_str(content).context("Failed to parse profile file")?;
        sequence.validate()?;
        Ok(sequence)
    }

    /// Steps in run order
    #[must_use]
    pub fn steps(&self) -> &[ProfileStep] {
        &self.steps
    }

    /// Number of steps in one cycle
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always false for a validated sequence
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    fn validate(&self) -> Result<()> {
        if self.steps.is_empty() {
            bail!("Profile sequence must contain at least one step");
        }
        Ok(())
    }
}

impl Default for ProfileSequence {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const TWO_STEP_PROFILE: &str = r"
[[step]]
sky = 2
cct = { day = 100, warm = 200 }
uva = { set = 10, clamp = 20 }
uvb = { set = 1, clamp = 2, period_s = 30, duty_pm = 500 }

[[step]]
sky = 0
cct = { day = 0, warm = 0 }
uva = { set = 0, clamp = 0 }
uvb = { set = 0, clamp = 0, period_s = 0, duty_pm = 0 }
";

    #[test]
    fn test_builtin_has_day_then_night() {
        let sequence = ProfileSequence::builtin();
        assert_eq!(sequence.len(), 2);
        assert_eq!(sequence.steps()[0].sky, 1);
        assert_eq!(sequence.steps()[0].cct.day, 9000);
        assert_eq!(sequence.steps()[0].uvb.period_s, 60);
        assert_eq!(sequence.steps()[1].sky, 0);
        assert_eq!(sequence.steps()[1].uva.set, 0);
        assert_eq!(sequence.steps()[1].uvb.period_s, 90);
    }

    #[test]
    fn test_default_is_builtin() {
        assert_eq!(ProfileSequence::default(), ProfileSequence::builtin());
    }

    #[test]
    fn test_parse_preserves_file_order() {
        let sequence = ProfileSequence::parse(TWO_STEP_PROFILE).unwrap();
        assert_eq!(sequence.len(), 2);
        assert_eq!(sequence.steps()[0].sky, 2);
        assert_eq!(sequence.steps()[0].uvb.duty_pm, 500);
        assert_eq!(sequence.steps()[1].cct.day, 0);
    }

    #[test]
    fn test_parse_rejects_empty_sequence() {
        let err = ProfileSequence::parse("step = []").unwrap_err();
        assert!(err.to_string().contains("at least one step"));
    }

    #[test]
    fn test_parse_rejects_missing_steps() {
        assert!(ProfileSequence::parse("").is_err());
    }

    #[test]
    fn test_parse_rejects_malformed_step() {
        let content = r"
[[step]]
sky = 1
cct = { day = 1, warm = 1 }
";
        assert!(ProfileSequence::parse(content).is_err());
    }

    #[test]
    fn test_new_rejects_empty() {
        assert!(ProfileSequence::new(vec![]).is_err());
    }

    #[test]
    fn test_from_path_reads_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("profile.toml");
        std::fs::write(&path, TWO_STEP_PROFILE).unwrap();

        let sequence = ProfileSequence::from_path(&path).unwrap();
        assert_eq!(sequence.len(), 2);
    }

    #[test]
    fn test_from_path_missing_file() {
        let err = ProfileSequence::from_path("/nonexistent/profile.toml").unwrap_err();
        assert!(err.to_string().contains("Failed to read profile file"));
    }
}
