use std::env;
use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::warn;

// ── Environment keys ─────────────────────────────────────────────────────────

pub const ENV_AI_ENABLED: &str = "PALE_LUNA_AI_ENABLED";
pub const ENV_OLLAMA_URL: &str = "PALE_LUNA_OLLAMA_URL";
pub const ENV_AI_MODEL: &str = "PALE_LUNA_AI_MODEL";
pub const ENV_AI_TIMEOUT: &str = "PALE_LUNA_AI_TIMEOUT";
pub const ENV_AI_MAX_TOKENS: &str = "PALE_LUNA_AI_MAX_TOKENS";
pub const ENV_AI_TEMPERATURE: &str = "PALE_LUNA_AI_TEMPERATURE";
pub const ENV_AI_FALLBACK: &str = "PALE_LUNA_AI_FALLBACK";
pub const ENV_LOG: &str = "PALE_LUNA_LOG";

/// Default location of the optional TOML config file, relative to the
/// working directory.
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

// ── AI backend config ────────────────────────────────────────────────────────

/// Settings for the local Ollama inference backend.
///
/// Read-only once loaded; the inference client and agent manager share it
/// behind an `Arc`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    /// Gates whether inference is attempted at all.
    pub enabled: bool,
    /// Base URL for both `/api/version` and `/api/generate`.
    pub ollama_url: String,
    pub model: String,
    /// Bounds the completion request.  The liveness probe uses its own fixed
    /// timeout.
    #[serde(with = "duration_str")]
    pub timeout: Duration,
    /// Forwarded to Ollama as `num_predict`.
    pub max_tokens: u32,
    pub temperature: f32,
    /// When `false`, backend failures surface as errors instead of degrading
    /// to canned text.
    pub fallback_enabled: bool,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            ollama_url: "http://localhost:11434".to_string(),
            model: "llama3.2:3b".to_string(),
            timeout: Duration::from_secs(30),
            max_tokens: 150,
            temperature: 0.8,
            fallback_enabled: true,
        }
    }
}

impl AiConfig {
    /// Base URL with any trailing slashes removed, ready for endpoint joins.
    pub fn base_url(&self) -> &str {
        self.ollama_url.trim_end_matches('/')
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TelemetryConfig {
    pub log_level: String,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub ai: AiConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load the TOML file at `path` (defaults when missing), then apply
    /// `PALE_LUNA_*` environment overrides.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let mut config = Self::default();
        if let Ok(raw) = fs::read_to_string(path) {
            config = toml::from_str(&raw)?;
        }

        config.apply_overrides(|key| env::var(key).ok());
        Ok(config)
    }

    /// Apply overrides resolved through `lookup`.
    ///
    /// Empty values are ignored.  A value that fails to parse keeps whatever
    /// the field held before and is logged.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(raw) = value(ENV_AI_ENABLED) {
            override_with(&mut self.ai.enabled, ENV_AI_ENABLED, &raw, parse_bool);
        }
        if let Some(raw) = value(ENV_OLLAMA_URL) {
            self.ai.ollama_url = raw.trim().to_string();
        }
        if let Some(raw) = value(ENV_AI_MODEL) {
            self.ai.model = raw.trim().to_string();
        }
        if let Some(raw) = value(ENV_AI_TIMEOUT) {
            override_with(&mut self.ai.timeout, ENV_AI_TIMEOUT, &raw, parse_duration);
        }
        if let Some(raw) = value(ENV_AI_MAX_TOKENS) {
            override_with(&mut self.ai.max_tokens, ENV_AI_MAX_TOKENS, &raw, |v| {
                v.parse().ok()
            });
        }
        if let Some(raw) = value(ENV_AI_TEMPERATURE) {
            override_with(&mut self.ai.temperature, ENV_AI_TEMPERATURE, &raw, |v| {
                v.parse::<f32>().ok().filter(|t| t.is_finite())
            });
        }
        if let Some(raw) = value(ENV_AI_FALLBACK) {
            override_with(&mut self.ai.fallback_enabled, ENV_AI_FALLBACK, &raw, parse_bool);
        }
        if let Some(raw) = value(ENV_LOG) {
            self.telemetry.log_level = raw.trim().to_string();
        }
    }
}

fn override_with<T>(slot: &mut T, key: &str, raw: &str, parse: impl Fn(&str) -> Option<T>) {
    match parse(raw.trim()) {
        Some(parsed) => *slot = parsed,
        None => warn!(key, value = raw, "ignoring malformed config override"),
    }
}

// ── Value parsers ────────────────────────────────────────────────────────────

/// Accepts `1`, `t`, `true`, `0`, `f`, `false` in any case.
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "t" | "true" => Some(true),
        "0" | "f" | "false" => Some(false),
        _ => None,
    }
}

/// Parse a duration such as `30s`, `1m30s`, `500ms`, `1.5h`, or a bare number
/// of seconds.  Zero and negative durations are rejected.
pub fn parse_duration(raw: &str) -> Option<Duration> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(secs) = raw.parse::<f64>() {
        return positive_duration(secs);
    }

    let is_number = |c: char| c.is_ascii_digit() || c == '.';
    let mut total = 0.0_f64;
    let mut rest = raw;
    while !rest.is_empty() {
        let split = rest.find(|c: char| !is_number(c))?;
        if split == 0 {
            return None;
        }
        let value: f64 = rest[..split].parse().ok()?;
        let after = &rest[split..];
        let unit_len = after.find(is_number).unwrap_or(after.len());
        let scale = match &after[..unit_len] {
            "ms" => 0.001,
            "s" => 1.0,
            "m" => 60.0,
            "h" => 3600.0,
            _ => return None,
        };
        total += value * scale;
        rest = &after[unit_len..];
    }
    positive_duration(total)
}

fn positive_duration(secs: f64) -> Option<Duration> {
    if secs > 0.0 {
        Duration::try_from_secs_f64(secs).ok()
    } else {
        None
    }
}

fn format_duration(duration: &Duration) -> String {
    if duration.subsec_millis() == 0 {
        format!("{}s", duration.as_secs())
    } else {
        format!("{}ms", duration.as_millis())
    }
}

mod duration_str {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_duration(value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_duration(&raw)
            .ok_or_else(|| de::Error::custom(format!("invalid duration '{raw}'")))
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
