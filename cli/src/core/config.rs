//! # SmartSDLC Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module loads, merges and validates SmartSDLC configuration. The rule
//! tables of the assistant are compiled in and are *not* configurable; the
//! configuration only covers presentation concerns such as the assistant's
//! display name, the cosmetic "thinking" delays and the default language for
//! code generation.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. An explicit file named by the `SMARTSDLC_CONFIG` environment variable
//!    (replaces discovery entirely)
//! 2. Project-specific `.smartsdlc.toml` in the current directory or ancestors
//!    (the search stops at the first directory containing `.git`)
//! 3. User-specific `config.toml` in the platform config directory
//! 4. Default values defined in the code
//!
//! ## Examples
//!
//! ```toml
//! [assistant]
//! name = "Sage"
//! thinking_delay_ms = 500
//!
//! [workbench]
//! default_language = "javascript"
//! bugs_delay_ms = 3000
//! ```
//!
//! The configuration is loaded once per command execution and passed
//! to the modules that need it.
//!
use crate::assistant::workbench::{Language, Tool};
use crate::core::error::{SmartSdlcError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};
use tracing::{debug, info, warn};

/// Environment variable naming an explicit configuration file.
pub const CONFIG_ENV_VAR: &str = "SMARTSDLC_CONFIG";
const PROJECT_CONFIG_FILENAME: &str = ".smartsdlc.toml";
/// Upper bound for any configured delay. Anything longer is a typo.
const MAX_DELAY_MS: u64 = 60_000;

/// The effective configuration: every source merged, defaults filled in.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Config {
    pub assistant: AssistantConfig,
    pub workbench: WorkbenchConfig,
}

/// Settings for the chat assistant (`smartsdlc chat`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistantConfig {
    /// Name shown in front of assistant turns.
    pub name: String,
    /// Pause between a user turn and the assistant's reply.
    pub thinking_delay_ms: u64,
}

/// Settings for the workbench tools (`requirements`, `code`, `test`, `bugs`, `docs`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkbenchConfig {
    /// Language used by `smartsdlc code` when `--lang` is not given.
    pub default_language: Language,
    pub requirements_delay_ms: u64,
    pub code_delay_ms: u64,
    pub tests_delay_ms: u64,
    pub bugs_delay_ms: u64,
    pub docs_delay_ms: u64,
}

/// # Configuration File (`ConfigFile`)
///
/// One TOML source as written on disk. A key that is absent stays `None`, so
/// merging can tell "not set" apart from "set to the default value".
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub assistant: AssistantSection,
    pub workbench: WorkbenchSection,
}

/// The `[assistant]` table of a configuration file.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct AssistantSection {
    pub name: Option<String>,
    pub thinking_delay_ms: Option<u64>,
}

/// The `[workbench]` table of a configuration file.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct WorkbenchSection {
    pub default_language: Option<Language>,
    pub requirements_delay_ms: Option<u64>,
    pub code_delay_ms: Option<u64>,
    pub tests_delay_ms: Option<u64>,
    pub bugs_delay_ms: Option<u64>,
    pub docs_delay_ms: Option<u64>,
}

impl ConfigFile {
    /// # Overlay (`overlay`)
    ///
    /// Layers `top` over `self`: every key set in `top` wins, every key it
    /// leaves out keeps the value from `self`.
    ///
    /// ## Arguments
    ///
    /// * `top`: The higher-precedence source (the project file over the user file).
    ///
    /// ## Returns
    ///
    /// * `ConfigFile`: The combined source, still without defaults filled in.
    pub fn overlay(self, top: ConfigFile) -> ConfigFile {
        ConfigFile {
            assistant: AssistantSection {
                name: top.assistant.name.or(self.assistant.name),
                thinking_delay_ms: top
                    .assistant
                    .thinking_delay_ms
                    .or(self.assistant.thinking_delay_ms),
            },
            workbench: WorkbenchSection {
                default_language: top
                    .workbench
                    .default_language
                    .or(self.workbench.default_language),
                requirements_delay_ms: top
                    .workbench
                    .requirements_delay_ms
                    .or(self.workbench.requirements_delay_ms),
                code_delay_ms: top.workbench.code_delay_ms.or(self.workbench.code_delay_ms),
                tests_delay_ms: top.workbench.tests_delay_ms.or(self.workbench.tests_delay_ms),
                bugs_delay_ms: top.workbench.bugs_delay_ms.or(self.workbench.bugs_delay_ms),
                docs_delay_ms: top.workbench.docs_delay_ms.or(self.workbench.docs_delay_ms),
            },
        }
    }

    /// Fills every key left unset with its built-in default.
    pub fn resolve(self) -> Config {
        let defaults = Config::default();
        Config {
            assistant: AssistantConfig {
                name: self.assistant.name.unwrap_or(defaults.assistant.name),
                thinking_delay_ms: self
                    .assistant
                    .thinking_delay_ms
                    .unwrap_or(defaults.assistant.thinking_delay_ms),
            },
            workbench: WorkbenchConfig {
                default_language: self
                    .workbench
                    .default_language
                    .unwrap_or(defaults.workbench.default_language),
                requirements_delay_ms: self
                    .workbench
                    .requirements_delay_ms
                    .unwrap_or(defaults.workbench.requirements_delay_ms),
                code_delay_ms: self
                    .workbench
                    .code_delay_ms
                    .unwrap_or(defaults.workbench.code_delay_ms),
                tests_delay_ms: self
                    .workbench
                    .tests_delay_ms
                    .unwrap_or(defaults.workbench.tests_delay_ms),
                bugs_delay_ms: self
                    .workbench
                    .bugs_delay_ms
                    .unwrap_or(defaults.workbench.bugs_delay_ms),
                docs_delay_ms: self
                    .workbench
                    .docs_delay_ms
                    .unwrap_or(defaults.workbench.docs_delay_ms),
            },
        }
    }
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            name: "SmartSDLC".to_string(),
            thinking_delay_ms: 1000,
        }
    }
}

impl Default for WorkbenchConfig {
    fn default() -> Self {
        Self {
            default_language: Language::default(),
            requirements_delay_ms: 2000,
            code_delay_ms: 1500,
            tests_delay_ms: 1500,
            bugs_delay_ms: 2000,
            docs_delay_ms: 1500,
        }
    }
}

impl AssistantConfig {
    pub fn thinking_delay(&self) -> Duration {
        Duration::from_millis(self.thinking_delay_ms)
    }
}

impl WorkbenchConfig {
    /// The simulated processing time for a workbench tool.
    pub fn delay_for(&self, tool: Tool) -> Duration {
        Duration::from_millis(self.delay_ms_for(tool))
    }

    fn delay_ms_for(&self, tool: Tool) -> u64 {
        match tool {
            Tool::Requirements => self.requirements_delay_ms,
            Tool::Code => self.code_delay_ms,
            Tool::Tests => self.tests_delay_ms,
            Tool::Bugs => self.bugs_delay_ms,
            Tool::Docs => self.docs_delay_ms,
        }
    }
}

/// # Load Configuration (`load_config`)
///
/// Loads the effective configuration for this process.
///
/// ## Returns
///
/// * `Result<Config>`: The merged, validated configuration.
/// * `Err`: A configuration file could not be read or parsed, or the merged
///   values failed validation.
pub fn load_config() -> Result<Config> {
    if let Ok(explicit) = std::env::var(CONFIG_ENV_VAR) {
        let path = PathBuf::from(explicit);
        info!(
            "Loading configuration from {}: {}",
            CONFIG_ENV_VAR,
            path.display()
        );
        let config = load_config_from_path(&path)?.resolve();
        validate_config(&config).context("Configuration validation failed")?;
        return Ok(config);
    }

    let user_config = load_user_config()?;
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    let project_config = load_project_config(&current_dir)?;
    let merged_config = merge_configs(user_config.unwrap_or_default(), project_config);
    validate_config(&merged_config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged_config);
    Ok(merged_config)
}

fn load_user_config() -> Result<Option<ConfigFile>> {
    if let Some(proj_dirs) = ProjectDirs::from("com", "SmartSDLC", "smartsdlc") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config(start: &Path) -> Result<Option<ConfigFile>> {
    if let Some(project_config_path) = find_project_config_path(start) {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!("No project configuration file (.smartsdlc.toml) found in current directory or ancestors.");
        Ok(None)
    }
}

fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

/// Any key the project file sets wins over the user file, even when it
/// equals the built-in default.
fn merge_configs(user: ConfigFile, project: Option<ConfigFile>) -> Config {
    match project {
        Some(project) => user.overlay(project).resolve(),
        None => user.resolve(),
    }
}

fn validate_config(config: &Config) -> Result<()> {
    info!("Validating final configuration...");
    if config.assistant.name.trim().is_empty() {
        return Err(anyhow!(SmartSdlcError::Config(
            "Assistant name cannot be empty.".to_string()
        )));
    }
    let delays = [
        ("assistant.thinking_delay_ms", config.assistant.thinking_delay_ms),
        ("workbench.requirements_delay_ms", config.workbench.requirements_delay_ms),
        ("workbench.code_delay_ms", config.workbench.code_delay_ms),
        ("workbench.tests_delay_ms", config.workbench.tests_delay_ms),
        ("workbench.bugs_delay_ms", config.workbench.bugs_delay_ms),
        ("workbench.docs_delay_ms", config.workbench.docs_delay_ms),
    ];
    for (key, value) in delays {
        if value > MAX_DELAY_MS {
            return Err(anyhow!(SmartSdlcError::Config(format!(
                "'{}' is {} ms; the maximum is {} ms.",
                key, value, MAX_DELAY_MS
            ))));
        }
    }
    info!("Configuration validation successful.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_deserialize_basic_toml() {
        let toml_content = r#"
            [assistant]
            name = "Sage"
            thinking_delay_ms = 250

            [workbench]
            default_language = "javascript"
            bugs_delay_ms = 3000
        "#;

        let file: ConfigFile = toml::from_str(toml_content).expect("Failed to parse TOML");
        assert_eq!(file.workbench.code_delay_ms, None);
        let config = file.resolve();

        assert_eq!(config.assistant.name, "Sage");
        assert_eq!(config.assistant.thinking_delay_ms, 250);
        assert_eq!(config.workbench.default_language, Language::Javascript);
        assert_eq!(config.workbench.bugs_delay_ms, 3000);
        assert_eq!(config.workbench.code_delay_ms, 1500); // Default
    }

    #[test]
    fn test_empty_toml_matches_defaults() {
        let file: ConfigFile = toml::from_str("").unwrap();
        assert_eq!(file, ConfigFile::default());
        let config = file.resolve();
        assert_eq!(config, Config::default());
        assert_eq!(config.assistant.thinking_delay(), Duration::from_millis(1000));
        assert_eq!(
            config.workbench.delay_for(Tool::Requirements),
            Duration::from_millis(2000)
        );
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result: std::result::Result<ConfigFile, _> = toml::from_str("[assistant]\nmood = \"sunny\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_merge_project_overrides_user() {
        let user: ConfigFile = toml::from_str(
            "[assistant]\nname = \"UserBot\"\n[workbench]\ndocs_delay_ms = 10\n",
        )
        .unwrap();
        let project: ConfigFile = toml::from_str(
            "[workbench]\ndefault_language = \"javascript\"\ndocs_delay_ms = 20\n",
        )
        .unwrap();

        let merged = merge_configs(user, Some(project));
        assert_eq!(merged.assistant.name, "UserBot"); // not set by the project
        assert_eq!(merged.workbench.default_language, Language::Javascript);
        assert_eq!(merged.workbench.docs_delay_ms, 20);
        assert_eq!(merged.workbench.bugs_delay_ms, 2000); // set by neither
    }

    #[test]
    fn test_merge_project_value_equal_to_default_still_wins() {
        let user: ConfigFile = toml::from_str(
            "[assistant]\nthinking_delay_ms = 0\n[workbench]\ndefault_language = \"javascript\"\n",
        )
        .unwrap();
        let project: ConfigFile = toml::from_str(
            "[assistant]\nthinking_delay_ms = 1000\n[workbench]\ndefault_language = \"python\"\n",
        )
        .unwrap();

        let merged = merge_configs(user, Some(project));
        assert_eq!(merged.assistant.thinking_delay_ms, 1000);
        assert_eq!(merged.workbench.default_language, Language::Python);
    }

    #[test]
    fn test_merge_without_project_keeps_user() {
        let user: ConfigFile = toml::from_str("[assistant]\nthinking_delay_ms = 0\n").unwrap();
        let merged = merge_configs(user, None);
        assert_eq!(merged.assistant.thinking_delay_ms, 0);
        assert_eq!(merged.assistant.name, "SmartSDLC");
    }

    #[test]
    fn test_find_project_config_stops_at_git() {
        let root = tempdir().unwrap();
        fs::write(root.path().join(PROJECT_CONFIG_FILENAME), "").unwrap();
        let repo = root.path().join("repo");
        fs::create_dir_all(repo.join(".git")).unwrap();
        let nested = repo.join("src/deep");
        fs::create_dir_all(&nested).unwrap();

        // The config above the repository root is never reached.
        assert_eq!(find_project_config_path(&nested), None);

        fs::write(repo.join(PROJECT_CONFIG_FILENAME), "").unwrap();
        assert_eq!(
            find_project_config_path(&nested),
            Some(repo.join(PROJECT_CONFIG_FILENAME))
        );
    }

    #[test]
    fn test_load_config_from_path_reports_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        fs::write(&path, "[assistant\nname = ").unwrap();
        let err = load_config_from_path(&path).unwrap_err();
        assert!(err.to_string().contains("broken.toml"));
    }

    #[test]
    fn test_validate_config_rejects_long_delay() {
        let mut config = Config::default();
        config.workbench.code_delay_ms = MAX_DELAY_MS + 1;
        let result = validate_config(&config);
        assert!(result.is_err());
        assert!(format!("{:#}", result.unwrap_err()).contains("workbench.code_delay_ms"));
    }

    #[test]
    fn test_validate_config_rejects_blank_name() {
        let mut config = Config::default();
        config.assistant.name = "   ".into();
        assert!(validate_config(&config).is_err());
        assert!(validate_config(&Config::default()).is_ok());
    }
}
