use crate::alphabet;
use crate::error::{LzwError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Width of one code in the container file, in bytes.
pub const CODE_WIDTH: usize = 4;
pub const DEFAULT_CODE_BITS: u32 = 32;
pub const DEFAULT_EXTENSION: &str = ".lzw";

/// What the container reader does with a trailing chunk shorter than a code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrailingBytesPolicy {
    #[default]
    Discard,
    Reject,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LzwConfig {
    pub code_bits: u32,
    pub extension: String,
    pub trailing_bytes: TrailingBytesPolicy,
}

impl LzwConfig {
    pub fn with_code_bits(mut self, bits: u32) -> Self {
        self.code_bits = bits;
        self
    }

    pub fn with_trailing_bytes(mut self, policy: TrailingBytesPolicy) -> Self {
        self.trailing_bytes = policy;
        self
    }

    /// Number of entries the dictionary may hold, seeded alphabet included.
    /// Saturates for widths `validate` would reject.
    pub fn max_table_size(&self) -> u64 {
        1u64.checked_shl(self.code_bits).unwrap_or(u64::MAX)
    }

    pub fn validate(&self) -> Result<()> {
        let min_bits = u64::BITS - (alphabet::SIZE as u64 - 1).leading_zeros();
        if self.code_bits < min_bits || self.code_bits > (CODE_WIDTH * 8) as u32 {
            return Err(LzwError::InvalidConfig(format!(
                "code_bits must be within {min_bits}..={}, got {}",
                CODE_WIDTH * 8,
                self.code_bits
            )));
        }
        if self.extension.is_empty() {
            return Err(LzwError::InvalidConfig(
                "extension must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// Load and validate a JSON config file. Missing fields take their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read(path.as_ref())?;
        let config: Self = serde_json::from_slice(&raw)?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for LzwConfig {
    fn default() -> Self {
        Self {
            code_bits: DEFAULT_CODE_BITS,
            extension: DEFAULT_EXTENSION.into(),
            trailing_bytes: TrailingBytesPolicy::Discard,
        }
    }
}
