use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Project configuration file name, looked up in the project root.
pub const CONFIG_FILE: &str = "lexicover.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputConfig {
    #[serde(default = "default_input_dir")]
    pub dir: PathBuf,
    #[serde(default = "default_letter_files")]
    pub files: Vec<String>,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            dir: default_input_dir(),
            files: default_letter_files(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_free_words")]
    pub free_words: PathBuf,
    #[serde(default = "default_eliminated")]
    pub eliminated: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            free_words: default_free_words(),
            eliminated: default_eliminated(),
        }
    }
}

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub data_dir: Option<PathBuf>,
    pub files: Vec<String>,
    pub free_words: Option<PathBuf>,
    pub eliminated: Option<PathBuf>,
}

impl ProjectConfig {
    /// Replace file values with any override that is set.
    #[must_use]
    pub fn with_overrides(mut self, overrides: &ConfigOverrides) -> Self {
        if let Some(dir) = &overrides.data_dir {
            self.input.dir.clone_from(dir);
        }
        if !overrides.files.is_empty() {
            self.input.files.clone_from(&overrides.files);
        }
        if let Some(path) = &overrides.free_words {
            self.output.free_words.clone_from(path);
        }
        if let Some(path) = &overrides.eliminated {
            self.output.eliminated.clone_from(path);
        }
        self
    }

    /// Resolve relative paths against `root`.
    #[must_use]
    pub fn rooted_at(mut self, root: &Path) -> Self {
        self.input.dir = root.join(&self.input.dir);
        self.output.free_words = root.join(&self.output.free_words);
        self.output.eliminated = root.join(&self.output.eliminated);
        self
    }
}

pub fn load_project_config(project_root: &Path) -> Result<ProjectConfig> {
    let path = project_root.join(CONFIG_FILE);
    if !path.exists() {
        return Ok(ProjectConfig::default());
    }

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    toml::from_str::<ProjectConfig>(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))
}

/// Load the project config, apply overrides, and anchor paths at the root.
pub fn resolve_config(project_root: &Path, overrides: &ConfigOverrides) -> Result<ProjectConfig> {
    Ok(load_project_config(project_root)?
        .with_overrides(overrides)
        .rooted_at(project_root))
}

fn default_input_dir() -> PathBuf {
    PathBuf::from("wrangle/cleaned")
}

/// `A.json` through `Z.json`.
#[must_use]
pub fn default_letter_files() -> Vec<String> {
    ('A'..='Z').map(|letter| format!("{letter}.json")).collect()
}

fn default_free_words() -> PathBuf {
    PathBuf::from("freeWords.json")
}

fn default_eliminated() -> PathBuf {
    PathBuf::from("delNodes.json")
}
