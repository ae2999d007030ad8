//! Configuration management for the InfoHub assistant.
//!
//! Configuration is layered, later sources winning:
//! - Built-in defaults (InfoHub endpoints, Groq model, retrieval budgets)
//! - A YAML config file (`INFOHUB_CONFIG` or `./infohub.yaml`)
//! - Environment variables (a `.env` file is loaded first when present)
//! - Command-line flags

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};

/// Default config file looked up in the current directory.
pub const DEFAULT_CONFIG_FILE: &str = "infohub.yaml";

/// Main application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Config file that was merged, if any
    pub config_file: Option<PathBuf>,

    /// Log level override
    pub log_level: Option<String>,

    /// Verbose mode (enables debug logging)
    pub verbose: bool,

    /// Disable colored output
    pub no_color: bool,

    /// Remote document search settings
    pub search: SearchSettings,

    /// Context assembly budgets
    pub context: ContextSettings,

    /// LLM provider settings
    pub llm: LlmSettings,
}

/// InfoHub search API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchSettings {
    /// Base URL of the search API
    pub api_base: String,

    /// Base URL of the public web front-end, used to build document links
    pub web_base: String,

    /// Value of the `Referer` header sent with every search
    pub referer: String,

    /// Value of the `languagecode` header
    pub language_code: String,

    /// Number of results requested per search call
    pub top_k: usize,

    /// Number of documents kept after reranking
    pub rerank_k: usize,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            api_base: "https://infohubapi.rs.ge/api".to_string(),
            web_base: "https://infohub.rs.ge/ka".to_string(),
            referer: "https://infohub.rs.ge/".to_string(),
            language_code: "ka".to_string(),
            top_k: 10,
            rerank_k: 5,
            timeout_secs: 15,
        }
    }
}

impl SearchSettings {
    /// Full URL of the document search endpoint.
    pub fn search_url(&self) -> String {
        format!("{}/documents/search", self.api_base.trim_end_matches('/'))
    }

    /// Canonical public link for a document key.
    pub fn document_url(&self, unique_key: &str) -> String {
        format!(
            "{}/workspace/document/{}",
            self.web_base.trim_end_matches('/'),
            unique_key
        )
    }
}

/// Budgets for serializing documents into the LLM prompt.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContextSettings {
    /// Total character budget for the context block
    pub max_chars: usize,

    /// Per-document cap on description characters
    pub max_description_chars: usize,
}

impl Default for ContextSettings {
    fn default() -> Self {
        Self {
            max_chars: 3000,
            max_description_chars: 800,
        }
    }
}

/// LLM provider settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LlmSettings {
    /// Provider identifier ("groq" or "openai")
    pub provider: String,

    /// Model identifier
    pub model: String,

    /// Optional endpoint override (OpenAI-compatible base URL)
    pub endpoint: Option<String>,

    /// Name of the environment variable holding the API key
    pub api_key_env: String,

    /// Per-call timeout in seconds
    pub timeout_secs: u64,

    /// Maximum number of retries after the first attempt
    pub max_retries: u32,
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            provider: "groq".to_string(),
            model: "llama-3.3-70b-versatile".to_string(),
            endpoint: None,
            api_key_env: "GROQ_API_KEY".to_string(),
            timeout_secs: 60,
            max_retries: 2,
        }
    }
}

/// Full configuration file structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ConfigFile {
    search: Option<SearchSettings>,
    context: Option<ContextSettings>,
    llm: Option<LlmSettings>,
    logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct LoggingConfig {
    level: Option<String>,
    color: Option<bool>,
}

impl AppConfig {
    /// Load configuration from `.env`, the config file and the environment.
    ///
    /// Environment variables:
    /// - `INFOHUB_CONFIG`: Path to config file
    /// - `INFOHUB_API_BASE`: Override search API base URL
    /// - `INFOHUB_MODEL`: Model identifier
    /// - `RUST_LOG`: Log level
    /// - `NO_COLOR`: Disable colored output
    ///
    /// # Example
    /// ```no_run
    /// use infohub_core::config::AppConfig;
    ///
    /// let config = AppConfig::load(None).expect("Failed to load config");
    /// println!("Model: {}", config.llm.model);
    /// ```
    pub fn load(config_file: Option<&Path>) -> AppResult<Self> {
        // A missing .env file is the common case
        dotenvy::dotenv().ok();

        let explicit = config_file
            .map(Path::to_path_buf)
            .or_else(|| std::env::var("INFOHUB_CONFIG").ok().map(PathBuf::from));

        let mut config = match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(AppError::Config(format!(
                        "Config file does not exist: {:?}",
                        path
                    )));
                }
                Self::from_yaml_file(&path)?
            }
            None => {
                let path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    Self::from_yaml_file(&path)?
                } else {
                    Self::default()
                }
            }
        };

        // Environment variables override YAML config
        if let Ok(api_base) = std::env::var("INFOHUB_API_BASE") {
            config.search.api_base = api_base;
        }

        if let Ok(model) = std::env::var("INFOHUB_MODEL") {
            config.llm.model = model;
        }

        if let Ok(level) = std::env::var("RUST_LOG") {
            config.log_level = Some(level);
        }

        if std::env::var("NO_COLOR").is_ok() {
            config.no_color = true;
        }

        config.validate()?;
        Ok(config)
    }

    /// Build a configuration from defaults merged with a YAML file.
    pub fn from_yaml_file(path: &Path) -> AppResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("Failed to read config file {:?}: {}", path, e))
        })?;

        let mut config = Self::from_yaml_str(&contents).map_err(|e| {
            AppError::Config(format!("Failed to parse config file {:?}: {}", path, e))
        })?;
        config.config_file = Some(path.to_path_buf());

        tracing::debug!("Loaded config file {:?}", path);
        Ok(config)
    }

    /// Build a configuration from defaults merged with YAML text.
    pub fn from_yaml_str(contents: &str) -> AppResult<Self> {
        let file: ConfigFile = if contents.trim().is_empty() {
            ConfigFile::default()
        } else {
            serde_yaml::from_str(contents)?
        };

        let mut config = Self::default();

        if let Some(search) = file.search {
            config.search = search;
        }

        if let Some(context) = file.context {
            config.context = context;
        }

        if let Some(llm) = file.llm {
            config.llm = llm;
        }

        if let Some(logging) = file.logging {
            if let Some(level) = logging.level {
                config.log_level = Some(level);
            }
            if let Some(color) = logging.color {
                config.no_color = !color;
            }
        }

        Ok(config)
    }

    /// Apply CLI overrides to the configuration.
    ///
    /// CLI flags take precedence over environment variables and the file.
    pub fn with_overrides(
        mut self,
        model: Option<String>,
        log_level: Option<String>,
        verbose: bool,
        no_color: bool,
    ) -> Self {
        if let Some(model) = model {
            self.llm.model = model;
        }

        if let Some(log_level) = log_level {
            self.log_level = Some(log_level);
        }

        if verbose {
            self.verbose = true;
            // Verbose mode implies debug logging
            if self.log_level.is_none() {
                self.log_level = Some("debug".to_string());
            }
        }

        if no_color {
            self.no_color = true;
        }

        self
    }

    /// Resolve the LLM API key from the configured environment variable.
    ///
    /// Empty values count as missing.
    pub fn resolve_api_key(&self) -> Option<String> {
        std::env::var(&self.llm.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
    }

    /// Validate retrieval budgets and provider settings.
    pub fn validate(&self) -> AppResult<()> {
        if self.search.top_k == 0 {
            return Err(AppError::Config("search.topK must be positive".to_string()));
        }

        if self.search.rerank_k == 0 {
            return Err(AppError::Config(
                "search.rerankK must be positive".to_string(),
            ));
        }

        if self.context.max_chars == 0 {
            return Err(AppError::Config(
                "context.maxChars must be positive".to_string(),
            ));
        }

        let known_providers = ["groq", "openai"];
        if !known_providers.contains(&self.llm.provider.to_lowercase().as_str()) {
            return Err(AppError::Config(format!(
                "Unknown provider: {}. Supported: {}",
                self.llm.provider,
                known_providers.join(", ")
            )));
        }

        Ok(())
    }
}
