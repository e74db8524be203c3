#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use std::env;
use std::path;
use std::time::Duration;

use anyhow::bail;
use anyhow::Result;
use dashmap::DashMap;
use once_cell::sync::Lazy;
use strum::EnumIter;
use strum::IntoEnumIterator;
use tokio::fs;

use crate::domain::models::OpenerName;
use crate::domain::services::Animation;

static CONFIG: Lazy<DashMap<String, String>> = Lazy::new(DashMap::new);

const APP_NAME: &str = "infer-medset";
const ENV_PREFIX: &str = "INFER_MEDSET_";

#[derive(Clone, Copy, Debug, Eq, PartialEq, EnumIter, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum ConfigKey {
    ConfigFile,
    AnimateBanner,
    CharDelayMs,
    LineDelayMs,
    Opener,
    LogLevel,
    LogFile,
}

impl ConfigKey {
    /// Environment variable overriding this key, e.g. `INFER_MEDSET_ANIMATE_BANNER`.
    pub fn env_var(&self) -> String {
        return format!(
            "{ENV_PREFIX}{}",
            self.to_string().replace('-', "_").to_uppercase()
        );
    }

    fn possible_values(&self) -> Vec<String> {
        match self {
            ConfigKey::AnimateBanner => vec!["true".to_string(), "false".to_string()],
            ConfigKey::Opener => OpenerName::iter().map(|e| e.to_string()).collect(),
            ConfigKey::LogLevel => ["off", "error", "warn", "info", "debug", "trace"]
                .iter()
                .map(|e| e.to_string())
                .collect(),
            _ => vec![],
        }
    }

    fn is_integer(&self) -> bool {
        matches!(self, ConfigKey::CharDelayMs | ConfigKey::LineDelayMs)
    }

    fn validate(&self, value: &str) -> Result<()> {
        if self.is_integer() && value.parse::<u64>().is_err() {
            bail!(format!(
                "invalid value for '{self}': {value}\nExpected a non-negative integer"
            ));
        }

        let possible_values = self.possible_values();
        if !possible_values.is_empty() && !possible_values.contains(&value.to_string()) {
            bail!(format!(
                "invalid value for '{self}': {value}\nPossible values are: {}",
                possible_values.join(", ")
            ));
        }

        return Ok(());
    }
}

fn app_dir(base: Option<path::PathBuf>) -> path::PathBuf {
    return base
        .unwrap_or_else(|| path::PathBuf::from("."))
        .join(APP_NAME);
}

pub struct Config {}

impl Config {
    pub fn get(key: ConfigKey) -> String {
        if let Some(val) = CONFIG.get(&key.to_string()) {
            return val.to_string();
        }

        return "".to_string();
    }

    pub fn set(key: ConfigKey, value: &str) {
        CONFIG.insert(key.to_string(), value.to_string());
    }

    pub fn default(key: ConfigKey) -> String {
        let res = match key {
            ConfigKey::AnimateBanner => "true".to_string(),
            ConfigKey::CharDelayMs => "2".to_string(),
            ConfigKey::LineDelayMs => "10".to_string(),
            ConfigKey::Opener => OpenerName::default().to_string(),
            ConfigKey::LogLevel => "warn".to_string(),

            // Special
            ConfigKey::ConfigFile => app_dir(dirs::config_dir())
                .join("config.toml")
                .to_string_lossy()
                .to_string(),
            ConfigKey::LogFile => app_dir(dirs::cache_dir())
                .join(format!("{APP_NAME}.log"))
                .to_string_lossy()
                .to_string(),
        };

        return res;
    }

    /// Loads defaults, then the TOML config file, then `INFER_MEDSET_*` environment
    /// variables. A missing config file is not an error.
    pub async fn load() -> Result<()> {
        for key in ConfigKey::iter() {
            Config::set(key, &Config::default(key));
        }

        let config_file = env::var(ConfigKey::ConfigFile.env_var())
            .ok()
            .filter(|e| !e.is_empty())
            .unwrap_or_else(|| Config::default(ConfigKey::ConfigFile));
        Config::set(ConfigKey::ConfigFile, &config_file);

        let config_path = path::PathBuf::from(&config_file);
        if config_path.exists() {
            let toml_str = fs::read_to_string(&config_path).await?;
            let doc = toml_str.parse::<toml_edit::Document>()?;

            for key in ConfigKey::iter() {
                if key == ConfigKey::ConfigFile {
                    continue;
                }

                if let Some(val) = doc.get(&key.to_string()) {
                    let val_str = if let Some(val_bool) = val.as_bool() {
                        val_bool.to_string()
                    } else if let Some(val_int) = val.as_integer() {
                        val_int.to_string()
                    } else if let Some(val_str) = val.as_str() {
                        val_str.to_string()
                    } else {
                        bail!(format!("{config_file} has an unsupported value for key '{key}'"));
                    };

                    if val_str.is_empty() {
                        continue;
                    }
                    key.validate(&val_str)
                        .map_err(|err| anyhow::anyhow!("{config_file}: {err}"))?;
                    Config::set(key, &val_str);
                }
            }
        }

        for key in ConfigKey::iter() {
            if key == ConfigKey::ConfigFile {
                continue;
            }

            if let Ok(val) = env::var(key.env_var()) {
                if val.is_empty() {
                    continue;
                }
                key.validate(&val)
                    .map_err(|err| anyhow::anyhow!("{}: {err}", key.env_var()))?;
                Config::set(key, &val);
            }
        }

        tracing::debug!(
            config_file = Config::get(ConfigKey::ConfigFile),
            animate_banner = Config::get(ConfigKey::AnimateBanner),
            opener = Config::get(ConfigKey::Opener),
            log_level = Config::get(ConfigKey::LogLevel),
            "config"
        );

        return Ok(());
    }

    /// Banner pacing, or `None` when the animation is switched off.
    pub fn animation() -> Option<Animation> {
        if Config::get(ConfigKey::AnimateBanner) == "false" {
            return None;
        }

        let defaults = Animation::default();
        let millis = |key: ConfigKey, fallback: Duration| {
            Config::get(key)
                .parse::<u64>()
                .map(Duration::from_millis)
                .unwrap_or(fallback)
        };

        return Some(Animation {
            char_delay: millis(ConfigKey::CharDelayMs, defaults.char_delay),
            line_delay: millis(ConfigKey::LineDelayMs, defaults.line_delay),
        });
    }

    pub fn opener() -> OpenerName {
        return OpenerName::parse(Config::get(ConfigKey::Opener)).unwrap_or_default();
    }
}
