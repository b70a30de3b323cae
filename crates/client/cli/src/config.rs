//! CLI runtime configuration read from the environment.
use std::env;
use std::path::PathBuf;

use loadout_core::OptimizerConfig;

/// Environment overrides layered on top of `config.toml`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CliConfig {
    pub result_limit: Option<i64>,
    pub strict_coverage: Option<bool>,
    pub no_reduce: bool,
    pub log_dir: Option<PathBuf>,
    pub log_to_file: bool,
    /// `KEY=value` entries that were set but could not be parsed.
    pub ignored: Vec<String>,
}

impl CliConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `LOADOUT_RESULT_LIMIT` - Result count when `--limit` is not given
    /// - `LOADOUT_STRICT_COVERAGE` - Fail when a slot has no pieces (default: false)
    /// - `LOADOUT_NO_REDUCE` - Skip the per-slot dominance reducer (default: false)
    /// - `LOADOUT_LOG_DIR` - Write a log file into this directory
    /// - `LOADOUT_LOG_FILE` - Write a log file into the platform cache directory
    ///
    /// Flags accept `true`/`false`, `1`/`0`, `yes`/`no` and `on`/`off`;
    /// setting one without a value means `true`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| lookup(key).map(|value| value.trim().to_owned());
        let mut ignored = Vec::new();

        let limit = read("LOADOUT_RESULT_LIMIT");
        let result_limit: Option<i64> = limit.as_deref().and_then(|value| value.parse().ok());
        if let (Some(value), None) = (&limit, result_limit) {
            ignored.push(format!("LOADOUT_RESULT_LIMIT={}", value));
        }

        let mut flag = |key: &str| -> Option<bool> {
            let value = read(key)?;
            let parsed = parse_flag(&value);
            if parsed.is_none() {
                ignored.push(format!("{}={}", key, value));
            }
            parsed
        };
        let strict_coverage = flag("LOADOUT_STRICT_COVERAGE");
        let no_reduce = flag("LOADOUT_NO_REDUCE").unwrap_or(false);
        let log_to_file = flag("LOADOUT_LOG_FILE").unwrap_or(false);

        Self {
            result_limit,
            strict_coverage,
            no_reduce,
            log_dir: read("LOADOUT_LOG_DIR")
                .filter(|dir| !dir.is_empty())
                .map(PathBuf::from),
            log_to_file,
            ignored,
        }
    }

    /// Logs every variable that was set but could not be parsed.
    pub fn warn_ignored(&self) {
        for entry in &self.ignored {
            tracing::warn!("ignoring unparsable environment variable {}", entry);
        }
    }

    /// Applies the environment overrides to a loaded optimizer config.
    pub fn apply(&self, mut config: OptimizerConfig) -> OptimizerConfig {
        if let Some(strict) = self.strict_coverage {
            config.strict_coverage = strict;
        }
        if self.no_reduce {
            config.reduce_candidates = false;
        }
        config
    }

    /// Result limit by precedence: command line, environment, config file.
    pub fn result_limit(&self, arg: Option<i64>, config: &OptimizerConfig) -> i64 {
        arg.or(self.result_limit)
            .unwrap_or_else(|| i64::from(config.default_result_limit))
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "" | "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
