//! File filtering configuration.
//!
//! Filters decide which top-level files take part in a pass; they never change
//! how a file is categorized. Filtered files are left where they are.
//!
//! # Configuration File Format
//!
//! ```toml
//! [filters]
//! enable_hidden_files = true
//!
//! [filters.exclude]
//! filenames = [".DS_Store", "Thumbs.db"]
//! patterns = ["*.part"]
//! extensions = ["tmp"]
//! regex = []
//!
//! [filters.include]
//! patterns = []
//! ```
//!
//! With no configuration file every top-level file is organized.

use glob::Pattern;
use regex::Regex;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the per-directory configuration file looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = ".tidyextrc.toml";

/// Errors that can occur while loading or compiling the configuration.
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("configuration file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("invalid configuration in {}: {reason}", .path.display())]
    Invalid { path: PathBuf, reason: String },

    #[error("invalid glob pattern '{0}'")]
    InvalidGlobPattern(String),

    #[error("invalid regex pattern '{pattern}': {reason}")]
    InvalidRegexPattern { pattern: String, reason: String },

    #[error("cannot read configuration {}: {reason}", .path.display())]
    Io { path: PathBuf, reason: String },
}

/// Top-level configuration document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FilterConfig {
    #[serde(default)]
    pub filters: FilterRules,

    /// Canonical path of the file this configuration was read from.
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FilterRules {
    /// Whether names starting with "." are organized. Defaults to true.
    #[serde(default = "default_enable_hidden_files")]
    pub enable_hidden_files: bool,

    #[serde(default)]
    pub exclude: ExcludeRules,

    /// Include rules win over every exclude rule.
    #[serde(default)]
    pub include: IncludeRules,
}

fn default_enable_hidden_files() -> bool {
    true
}

impl Default for FilterRules {
    fn default() -> Self {
        Self {
            enable_hidden_files: default_enable_hidden_files(),
            exclude: ExcludeRules::default(),
            include: IncludeRules::default(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExcludeRules {
    /// Exact file names.
    #[serde(default)]
    pub filenames: Vec<String>,

    /// Glob patterns matched against the file name.
    #[serde(default)]
    pub patterns: Vec<String>,

    /// Extensions without the leading dot, compared case-insensitively.
    #[serde(default)]
    pub extensions: Vec<String>,

    #[serde(default)]
    pub regex: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct IncludeRules {
    #[serde(default)]
    pub patterns: Vec<String>,
}

impl FilterConfig {
    /// Loads configuration, trying in order:
    /// 1. `config_path`, if given (must exist)
    /// 2. `.tidyextrc.toml` in the current directory
    /// 3. `~/.config/tidyext/config.toml`
    /// 4. built-in defaults
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = config_path {
            return Self::load_from_file(path);
        }

        let local_config = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_config.is_file() {
            return Self::load_from_file(&local_config);
        }

        if let Ok(home) = std::env::var("HOME") {
            let home_config = PathBuf::from(home)
                .join(".config")
                .join("tidyext")
                .join("config.toml");
            if home_config.is_file() {
                return Self::load_from_file(&home_config);
            }
        }

        log::debug!("no configuration file found, using defaults");
        Ok(Self::default())
    }

    /// Loads configuration from a specific file.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let mut config: Self = toml::from_str(&content).map_err(|e| ConfigError::Invalid {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        config.source = path.canonicalize().ok();

        log::debug!("loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Validates and pre-compiles every pattern.
    pub fn compile(self) -> Result<CompiledFilters, ConfigError> {
        let mut compiled = CompiledFilters::new(self.filters)?;
        compiled.config_file = self.source;
        Ok(compiled)
    }
}

fn compile_globs(patterns: &[String]) -> Result<Vec<Pattern>, ConfigError> {
    patterns
        .iter()
        .map(|p| Pattern::new(p).map_err(|_| ConfigError::InvalidGlobPattern(p.clone())))
        .collect()
}

/// Filters with all patterns compiled, ready for matching.
#[derive(Debug)]
pub struct CompiledFilters {
    enable_hidden_files: bool,
    exclude_filenames: HashSet<String>,
    exclude_extensions: HashSet<String>,
    exclude_patterns: Vec<Pattern>,
    exclude_regexes: Vec<Regex>,
    include_patterns: Vec<Pattern>,
    config_file: Option<PathBuf>,
}

impl CompiledFilters {
    fn new(rules: FilterRules) -> Result<Self, ConfigError> {
        let exclude_patterns = compile_globs(&rules.exclude.patterns)?;
        let include_patterns = compile_globs(&rules.include.patterns)?;

        let exclude_regexes = rules
            .exclude
            .regex
            .iter()
            .map(|pattern| {
                Regex::new(pattern).map_err(|e| ConfigError::InvalidRegexPattern {
                    pattern: pattern.clone(),
                    reason: e.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            enable_hidden_files: rules.enable_hidden_files,
            exclude_filenames: rules.exclude.filenames.into_iter().collect(),
            exclude_extensions: rules
                .exclude
                .extensions
                .iter()
                .map(|ext| ext.trim_start_matches('.').to_lowercase())
                .collect(),
            exclude_patterns,
            exclude_regexes,
            include_patterns,
            config_file: None,
        })
    }

    /// Returns true if `path` is the configuration file these filters were
    /// loaded from. That file always stays where it is.
    pub fn is_config_file(&self, path: &Path) -> bool {
        self.config_file
            .as_ref()
            .is_some_and(|config_file| path.canonicalize().is_ok_and(|p| p == *config_file))
    }

    /// Returns true if the file called `file_name` should be organized.
    ///
    /// Include patterns are checked first and always win. After that the hidden
    /// file switch, exact names, extensions, globs and regexes each exclude.
    pub fn should_include(&self, file_name: &str) -> bool {
        if self.include_patterns.iter().any(|p| p.matches(file_name)) {
            return true;
        }

        if !self.enable_hidden_files && file_name.starts_with('.') {
            return false;
        }

        if self.exclude_filenames.contains(file_name) {
            return false;
        }

        if let Some(ext) = Path::new(file_name).extension()
            && self
                .exclude_extensions
                .contains(&ext.to_string_lossy().to_lowercase())
        {
            return false;
        }

        if self.exclude_patterns.iter().any(|p| p.matches(file_name)) {
            return false;
        }

        !self.exclude_regexes.iter().any(|r| r.is_match(file_name))
    }
}

impl Default for CompiledFilters {
    fn default() -> Self {
        Self {
            enable_hidden_files: true,
            exclude_filenames: HashSet::new(),
            exclude_extensions: HashSet::new(),
            exclude_patterns: Vec::new(),
            exclude_regexes: Vec::new(),
            include_patterns: Vec::new(),
            config_file: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn rules(exclude: ExcludeRules) -> FilterConfig {
        FilterConfig {
            filters: FilterRules {
                exclude,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_default_config_includes_everything() {
        let compiled = FilterConfig::default().compile().unwrap();

        assert!(compiled.should_include("photo.png"));
        assert!(compiled.should_include(".hidden"));
        assert!(compiled.should_include("noext"));
    }

    #[test]
    fn test_hidden_files_can_be_disabled() {
        let config = FilterConfig {
            filters: FilterRules {
                enable_hidden_files: false,
                ..Default::default()
            },
            ..Default::default()
        };
        let compiled = config.compile().unwrap();

        assert!(!compiled.should_include(".DS_Store"));
        assert!(compiled.should_include("visible.txt"));
    }

    #[test]
    fn test_exclude_exact_filename() {
        let compiled = rules(ExcludeRules {
            filenames: vec!["Thumbs.db".to_string()],
            ..Default::default()
        })
        .compile()
        .unwrap();

        assert!(!compiled.should_include("Thumbs.db"));
        assert!(compiled.should_include("image.jpg"));
    }

    #[test]
    fn test_exclude_extensions_ignores_case_and_dot() {
        let compiled = rules(ExcludeRules {
            extensions: vec!["tmp".to_string(), ".part".to_string()],
            ..Default::default()
        })
        .compile()
        .unwrap();

        assert!(!compiled.should_include("file.tmp"));
        assert!(!compiled.should_include("file.TMP"));
        assert!(!compiled.should_include("movie.mkv.part"));
        assert!(compiled.should_include("file.txt"));
    }

    #[test]
    fn test_exclude_glob_and_regex() {
        let compiled = rules(ExcludeRules {
            patterns: vec!["[0-9]*.log".to_string()],
            regex: vec![r"^draft_.*\.txt$".to_string()],
            ..Default::default()
        })
        .compile()
        .unwrap();

        assert!(!compiled.should_include("2024.log"));
        assert!(compiled.should_include("app.log"));
        assert!(!compiled.should_include("draft_notes.txt"));
        assert!(compiled.should_include("notes.txt"));
    }

    #[test]
    fn test_include_overrides_exclude() {
        let config = FilterConfig {
            filters: FilterRules {
                enable_hidden_files: false,
                exclude: ExcludeRules {
                    extensions: vec!["py".to_string()],
                    ..Default::default()
                },
                include: IncludeRules {
                    patterns: vec![".keep*".to_string(), "setup.py".to_string()],
                },
            },
            ..Default::default()
        };
        let compiled = config.compile().unwrap();

        assert!(compiled.should_include(".keepme"));
        assert!(compiled.should_include("setup.py"));
        assert!(!compiled.should_include("other.py"));
        assert!(!compiled.should_include(".other"));
    }

    #[test]
    fn test_invalid_patterns_return_error() {
        let bad_regex = rules(ExcludeRules {
            regex: vec!["[invalid(".to_string()],
            ..Default::default()
        });
        assert!(matches!(
            bad_regex.compile(),
            Err(ConfigError::InvalidRegexPattern { .. })
        ));

        let bad_glob = rules(ExcludeRules {
            patterns: vec!["[unclosed".to_string()],
            ..Default::default()
        });
        assert!(matches!(
            bad_glob.compile(),
            Err(ConfigError::InvalidGlobPattern(_))
        ));
    }

    #[test]
    fn test_load_from_toml_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let path = temp_dir.path().join("config.toml");
        fs::write(
            &path,
            "[filters]\nenable_hidden_files = false\n\n[filters.exclude]\nfilenames = [\"skip.me\"]\n",
        )
        .unwrap();

        let config = FilterConfig::load(Some(&path)).expect("config should parse");
        assert!(!config.filters.enable_hidden_files);
        assert_eq!(config.filters.exclude.filenames, vec!["skip.me"]);
    }

    #[test]
    fn test_loaded_config_remembers_its_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let path = temp_dir.path().join(LOCAL_CONFIG_FILE);
        fs::write(&path, "[filters]\n").unwrap();
        fs::write(temp_dir.path().join("other.txt"), "x").unwrap();

        let compiled = FilterConfig::load(Some(&path)).unwrap().compile().unwrap();

        assert!(compiled.is_config_file(&path));
        assert!(compiled.is_config_file(&temp_dir.path().join(".").join(LOCAL_CONFIG_FILE)));
        assert!(!compiled.is_config_file(&temp_dir.path().join("other.txt")));
        assert!(!CompiledFilters::default().is_config_file(&path));
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let path = temp_dir.path().join("empty.toml");
        fs::write(&path, "").unwrap();

        let config = FilterConfig::load(Some(&path)).expect("empty config should parse");
        assert!(config.filters.enable_hidden_files);
    }

    #[test]
    fn test_load_missing_explicit_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let result = FilterConfig::load(Some(&temp_dir.path().join("absent.toml")));
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_load_invalid_toml() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let path = temp_dir.path().join("broken.toml");
        fs::write(&path, "[filters\nenable_hidden_files = ").unwrap();

        let result = FilterConfig::load(Some(&path));
        assert!(matches!(result, Err(ConfigError::Invalid { .. })));
    }
}
