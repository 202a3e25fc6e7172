//! Build configuration
//!
//! Defaults: strict record handling, arrival-order sessions, comma
//! delimiter, a 10M record cap, sequential aggregation.

use serde::{Deserialize, Serialize};

use super::error::{ConfigError, ConfigResult};

/// Default cap on data records per build
/// Default field delimiter
pub const DEFAULT_DELIMITER: u8 = b',';

pub const DEFAULT_MAX_RECORDS: usize = 10_000_000;

/// Default number of sessions handed to one rayon task
pub const DEFAULT_PARALLEL_CHUNK_SIZE: usize = 4096;

const MAX_PARALLEL_CHUNK_SIZE: usize = 1_000_000;

/// What to do with a record that tokenizes but fails to parse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordPolicy {
    /// First invalid record aborts the build
    #[default]
    Strict,
    /// Invalid records are logged, counted and skipped
    Permissive,
}

impl RecordPolicy {
    /// Parse policy from string
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "permissive" => Ok(Self::Permissive),
            _ => Err(format!(
                "Unknown record policy '{}'. Valid policies: strict, permissive",
                s
            )),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Permissive => "permissive",
        }
    }
}

impl std::fmt::Display for RecordPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Order of events inside a session before transitions are computed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionOrdering {
    /// File order; out-of-order rows yield negative durations
    #[default]
    Arrival,
    /// Stable sort by timestamp (diverges from file-order output)
    Timestamp,
}

impl SessionOrdering {
    /// Parse ordering from string
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "arrival" => Ok(Self::Arrival),
            "timestamp" => Ok(Self::Timestamp),
            _ => Err(format!(
                "Unknown session ordering '{}'. Valid orderings: arrival, timestamp",
                s
            )),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Arrival => "arrival",
            Self::Timestamp => "timestamp",
        }
    }
}

impl std::fmt::Display for SessionOrdering {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Configuration for one log → graph build
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MiningConfig {
    pub record_policy: RecordPolicy,
    pub session_ordering: SessionOrdering,
    /// `None` = read everything
    pub max_records: Option<usize>,
    pub delimiter: char,
    /// Aggregate sessions on the rayon pool (needs the `parallel` feature)
    pub parallel: bool,
    pub parallel_chunk_size: usize,
}

impl Default for MiningConfig {
    fn default() -> Self {
        Self {
            record_policy: RecordPolicy::Strict,
            session_ordering: SessionOrdering::Arrival,
            max_records: Some(DEFAULT_MAX_RECORDS),
            delimiter: DEFAULT_DELIMITER as char,
            parallel: false,
            parallel_chunk_size: DEFAULT_PARALLEL_CHUNK_SIZE,
        }
    }
}

/// YAML Schema v1
///
/// Every field is optional; absent fields keep their defaults.
/// `max_records: null` lifts the cap.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFileV1 {
    version: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    record_policy: Option<RecordPolicy>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    session_ordering: Option<SessionOrdering>,

    #[serde(
        default,
        deserialize_with = "present_or_null",
        skip_serializing_if = "Option::is_none"
    )]
    max_records: Option<Option<usize>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    delimiter: Option<char>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    parallel: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    parallel_chunk_size: Option<usize>,
}

// Distinguishes an explicit `null` from an absent key
fn present_or_null<'de, D>(deserializer: D) -> Result<Option<Option<usize>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<usize>::deserialize(deserializer).map(Some)
}

impl ConfigFileV1 {
    fn apply(self, mut config: MiningConfig) -> MiningConfig {
        if let Some(policy) = self.record_policy {
            config.record_policy = policy;
        }
        if let Some(ordering) = self.session_ordering {
            config.session_ordering = ordering;
        }
        if let Some(max_records) = self.max_records {
            config.max_records = max_records;
        }
        if let Some(delimiter) = self.delimiter {
            config.delimiter = delimiter;
        }
        if let Some(parallel) = self.parallel {
            config.parallel = parallel;
        }
        if let Some(size) = self.parallel_chunk_size {
            config.parallel_chunk_size = size;
        }
        config
    }
}

impl MiningConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record_policy(mut self, policy: RecordPolicy) -> Self {
        self.record_policy = policy;
        self
    }

    pub fn with_session_ordering(mut self, ordering: SessionOrdering) -> Self {
        self.session_ordering = ordering;
        self
    }

    pub fn with_max_records(mut self, max_records: Option<usize>) -> Self {
        self.max_records = max_records;
        self
    }

    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_parallel_chunk_size(mut self, size: usize) -> Self {
        self.parallel_chunk_size = size;
        self
    }

    /// Delimiter as the byte the CSV reader expects
    ///
    /// Must be a single ASCII byte other than `"` or a line break.
    pub fn delimiter_byte(&self) -> ConfigResult<u8> {
        match u8::try_from(self.delimiter) {
            Ok(b) if b.is_ascii() && !matches!(b, b'"' | b'\n' | b'\r') => Ok(b),
            _ => Err(ConfigError::InvalidDelimiter(self.delimiter)),
        }
    }

    /// Range checks
    pub fn validate(&self) -> ConfigResult<()> {
        self.delimiter_byte()?;

        if let Some(0) = self.max_records {
            return Err(ConfigError::range_with_hint(
                "max_records",
                0,
                1,
                usize::MAX,
                "Use `max_records: null` to read the whole log.",
            ));
        }

        if !(1..=MAX_PARALLEL_CHUNK_SIZE).contains(&self.parallel_chunk_size) {
            return Err(ConfigError::range_with_hint(
                "parallel_chunk_size",
                self.parallel_chunk_size,
                1,
                MAX_PARALLEL_CHUNK_SIZE,
                "Larger chunks mean fewer merges; 4096 is a reasonable start.",
            ));
        }

        Ok(())
    }

    /// Load from YAML file (v1 schema)
    pub fn from_yaml(path: &str) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Parse YAML v1 content
    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        let file: ConfigFileV1 = serde_yaml::from_str(content)?;

        match file.version {
            None => return Err(ConfigError::MissingVersion),
            Some(1) => {}
            Some(found) => {
                return Err(ConfigError::UnsupportedVersion {
                    found,
                    supported: vec![1],
                })
            }
        }

        let config = file.apply(MiningConfig::default());
        config.validate()?;
        Ok(config)
    }

    /// Export as YAML v1
    pub fn to_yaml(&self) -> ConfigResult<String> {
        let file = ConfigFileV1 {
            version: Some(1),
            record_policy: Some(self.record_policy),
            session_ordering: Some(self.session_ordering),
            max_records: Some(self.max_records),
            delimiter: Some(self.delimiter),
            parallel: Some(self.parallel),
            parallel_chunk_size: Some(self.parallel_chunk_size),
        };
        Ok(serde_yaml::to_string(&file)?)
    }
}
