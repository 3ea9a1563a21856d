//! Configuration module for `AcadTrack`

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

/// Default CLI configuration loaded based on build profile.
/// Uses release defaults in release mode, debug defaults in debug mode.
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../../assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../../assets/DefaultCLIConfigDebug.toml");

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug)
    #[serde(default)]
    pub level: String,
    /// Log file path
    #[serde(default)]
    pub file: String,
    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,
}

/// Generative-text advisor configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdvisorConfig {
    /// API key for the text-generation provider
    #[serde(default)]
    pub api_key: String,
    /// Provider endpoint base URL
    #[serde(default)]
    pub endpoint: String,
    /// Ordered candidate model identifiers; tried first to last
    #[serde(default)]
    pub models: Vec<String>,
}

/// Paths configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory for persisted user/course data
    #[serde(default)]
    pub data_dir: String,
    /// Directory for generated transcript reports
    #[serde(default)]
    pub reports_dir: String,
}

/// Academic program configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AcademicConfig {
    /// Total credits required for degree completion
    #[serde(default)]
    pub required_credits: u32,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    pub logging: LoggingConfig,
    /// Advisor settings
    #[serde(default)]
    pub advisor: AdvisorConfig,
    /// Path settings
    #[serde(default)]
    pub paths: PathsConfig,
    /// Academic program settings
    #[serde(default)]
    pub academic: AcademicConfig,
}

/// Optional overrides collected from CLI flags
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Override for `logging.level`
    pub level: Option<String>,
    /// Override for `logging.file`
    pub file: Option<String>,
    /// Override for `logging.verbose`
    pub verbose: Option<bool>,
    /// Override for `advisor.api_key`
    pub api_key: Option<String>,
    /// Override for `advisor.endpoint`
    pub endpoint: Option<String>,
    /// Override for `paths.data_dir`
    pub data_dir: Option<String>,
    /// Override for `paths.reports_dir`
    pub reports_dir: Option<String>,
    /// Override for `academic.required_credits`
    pub required_credits: Option<u32>,
}

impl Config {
    /// Get the `$ACADTRACK` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/acadtrack`
    /// - macOS: `~/Library/Application Support/acadtrack`
    /// - Windows: `%APPDATA%\acadtrack`
    #[must_use]
    pub fn get_acadtrack_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("acadtrack")
    }

    /// Merge missing fields from defaults into this config
    /// Returns true if any fields were added
    fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let mut changed = false;

        if self.logging.level.is_empty() && !defaults.logging.level.is_empty() {
            self.logging.level.clone_from(&defaults.logging.level);
            changed = true;
        }
        if self.logging.file.is_empty() && !defaults.logging.file.is_empty() {
            self.logging.file.clone_from(&defaults.logging.file);
            changed = true;
        }

        if self.advisor.endpoint.is_empty() && !defaults.advisor.endpoint.is_empty() {
            self.advisor.endpoint.clone_from(&defaults.advisor.endpoint);
            changed = true;
        }
        if self.advisor.models.is_empty() && !defaults.advisor.models.is_empty() {
            self.advisor.models.clone_from(&defaults.advisor.models);
            changed = true;
        }

        if self.paths.data_dir.is_empty() && !defaults.paths.data_dir.is_empty() {
            self.paths.data_dir.clone_from(&defaults.paths.data_dir);
            changed = true;
        }
        if self.paths.reports_dir.is_empty() && !defaults.paths.reports_dir.is_empty() {
            self.paths.reports_dir.clone_from(&defaults.paths.reports_dir);
            changed = true;
        }

        if self.academic.required_credits == 0 && defaults.academic.required_credits != 0 {
            self.academic.required_credits = defaults.academic.required_credits;
            changed = true;
        }

        changed
    }

    /// Get the user config file path
    ///
    /// return config.toml for release
    ///        dconfig.toml for debug
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        #[cfg(debug_assertions)]
        {
            Self::get_acadtrack_dir().join("dconfig.toml")
        }
        #[cfg(not(debug_assertions))]
        {
            Self::get_acadtrack_dir().join("config.toml")
        }
    }

    /// Expand `$ACADTRACK` variable in a string
    #[must_use]
    fn expand_variables(value: &str) -> String {
        if value.contains("$ACADTRACK") {
            let acadtrack_dir = Self::get_acadtrack_dir();
            value.replace("$ACADTRACK", acadtrack_dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string
    ///
    /// # Errors
    /// Returns an error if the TOML cannot be parsed
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        // Expand variables in config values
        config.logging.file = Self::expand_variables(&config.logging.file);
        config.paths.data_dir = Self::expand_variables(&config.paths.data_dir);
        config.paths.reports_dir = Self::expand_variables(&config.paths.reports_dir);

        Ok(config)
    }

    /// Initialize config from defaults (TOML string)
    ///
    /// # Panics
    /// Panics if the compiled-in defaults TOML cannot be parsed
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load config from user config file, creating it from defaults on first run
    #[must_use]
    pub fn load() -> Self {
        let config_file = Self::get_config_file_path();
        let defaults = Self::from_defaults();

        if config_file.exists() {
            if let Ok(content) = fs::read_to_string(&config_file) {
                if let Ok(mut config) = Self::from_toml(&content) {
                    // Merge any missing fields from defaults
                    if config.merge_defaults(&defaults) {
                        // Save the updated config with new fields
                        let _ = config.save();
                    }
                    return config;
                }
            }
        } else {
            // First run: create directory and config file from defaults
            if let Some(parent) = config_file.parent() {
                let _ = fs::create_dir_all(parent);
            }

            let _ = defaults.save();

            return defaults;
        }

        defaults
    }

    /// Save config to user config file
    ///
    /// # Errors
    /// Returns an error if the config cannot be saved
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let config_file = Self::get_config_file_path();
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(&config_file, toml_str)?;
        Ok(())
    }

    /// Apply CLI overrides on top of the loaded configuration
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(level) = &overrides.level {
            self.logging.level.clone_from(level);
        }
        if let Some(file) = &overrides.file {
            self.logging.file.clone_from(file);
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }
        if let Some(api_key) = &overrides.api_key {
            self.advisor.api_key.clone_from(api_key);
        }
        if let Some(endpoint) = &overrides.endpoint {
            self.advisor.endpoint.clone_from(endpoint);
        }
        if let Some(data_dir) = &overrides.data_dir {
            self.paths.data_dir.clone_from(data_dir);
        }
        if let Some(reports_dir) = &overrides.reports_dir {
            self.paths.reports_dir.clone_from(reports_dir);
        }
        if let Some(required) = overrides.required_credits {
            self.academic.required_credits = required;
        }
    }

    /// Get a configuration value by key
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "level" => Some(self.logging.level.clone()),
            "file" => Some(self.logging.file.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            "api_key" => Some(self.advisor.api_key.clone()),
            "endpoint" => Some(self.advisor.endpoint.clone()),
            "models" => Some(self.advisor.models.join(",")),
            "data_dir" => Some(self.paths.data_dir.clone()),
            "reports_dir" => Some(self.paths.reports_dir.clone()),
            "required_credits" => Some(self.academic.required_credits.to_string()),
            _ => None,
        }
    }

    /// Set a configuration value by key
    ///
    /// # Errors
    /// Returns an error if the key is unknown or the value is invalid
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "level" => self.logging.level = value.to_string(),
            "file" => self.logging.file = value.to_string(),
            "verbose" => {
                self.logging.verbose = value
                    .parse::<bool>()
                    .map_err(|_| format!("Invalid boolean value for 'verbose': '{value}'"))?;
            }
            "api_key" => self.advisor.api_key = value.to_string(),
            "endpoint" => self.advisor.endpoint = value.to_string(),
            "models" => {
                self.advisor.models = value
                    .split(',')
                    .map(str::trim)
                    .filter(|m| !m.is_empty())
                    .map(ToString::to_string)
                    .collect();
            }
            "data_dir" => self.paths.data_dir = value.to_string(),
            "reports_dir" => self.paths.reports_dir = value.to_string(),
            "required_credits" => {
                self.academic.required_credits = value.parse::<u32>().map_err(|_| {
                    format!("Invalid numeric value for 'required_credits': '{value}'")
                })?;
            }
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Unset a configuration value by key (reset to default)
    ///
    /// # Errors
    /// Returns an error if the key is unknown
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        match key {
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "file" => self.logging.file.clone_from(&defaults.logging.file),
            "verbose" => self.logging.verbose = defaults.logging.verbose,
            "api_key" => self.advisor.api_key.clone_from(&defaults.advisor.api_key),
            "endpoint" => self.advisor.endpoint.clone_from(&defaults.advisor.endpoint),
            "models" => self.advisor.models.clone_from(&defaults.advisor.models),
            "data_dir" => self.paths.data_dir.clone_from(&defaults.paths.data_dir),
            "reports_dir" => self
                .paths
                .reports_dir
                .clone_from(&defaults.paths.reports_dir),
            "required_credits" => {
                self.academic.required_credits = defaults.academic.required_credits;
            }
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Reset all configuration to defaults
    ///
    /// # Errors
    /// Returns an error if the config file cannot be deleted
    pub fn reset() -> Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[advisor]")?;
        writeln!(f, "  api_key = \"{}\"", self.advisor.api_key)?;
        writeln!(f, "  endpoint = \"{}\"", self.advisor.endpoint)?;
        writeln!(f, "  models = \"{}\"", self.advisor.models.join(","))?;

        writeln!(f, "\n[paths]")?;
        writeln!(f, "  data_dir = \"{}\"", self.paths.data_dir)?;
        writeln!(f, "  reports_dir = \"{}\"", self.paths.reports_dir)?;

        writeln!(f, "\n[academic]")?;
        writeln!(f, "  required_credits = {}", self.academic.required_credits)?;

        Ok(())
    }
}
