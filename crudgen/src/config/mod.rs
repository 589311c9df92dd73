//! Configuration for code generation
//!
//! Loaded from multiple sources with clear precedence:
//!
//! 1. Environment variables (highest priority, `CRUDGEN_` prefix, `__` for nesting)
//! 2. `./crud.toml`, or the file passed with `--config`
//! 3. Hardcoded defaults (fallback)
//!
//! Environment variable format: `CRUDGEN_SECTION__FIELD_NAME`
//! - Example: `CRUDGEN_MODEL__NAMESPACE='Domain\Models'`
//! - Example: `CRUDGEN_DATABASE_URL=postgres://localhost/shop`
//!
//! # Example Configuration
//!
//! ```toml
//! # crud.toml
//! stub_path = "default"
//! layout = "layouts.app"
//! app_path = "app"
//!
//! [model]
//! namespace = 'App\Models'
//! unwanted_columns = ["id", "password", "created_at", "updated_at", "deleted_at"]
//!
//! [controller]
//! namespace = 'App\Http\Controllers'
//! api_namespace = 'App\Http\Controllers\Api'
//! ```

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

/// Default config file name, looked up in the working directory
pub const CONFIG_FILE: &str = "crud.toml";

/// Stub path value meaning "use the built-in stubs"
pub const DEFAULT_STUBS: &str = "default";

/// Model generation settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelSettings {
    /// Namespace of generated models
    pub namespace: String,

    /// Columns never made fillable, validated or bound to forms
    pub unwanted_columns: Vec<String>,
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            namespace: r"App\Models".to_string(),
            unwanted_columns: [
                "id",
                "uuid",
                "ulid",
                "password",
                "email_verified_at",
                "remember_token",
                "created_at",
                "updated_at",
                "deleted_at",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        }
    }
}

/// Controller generation settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerSettings {
    /// Namespace of resource controllers
    pub namespace: String,

    /// Namespace of API controllers
    pub api_namespace: String,
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self {
            namespace: r"App\Http\Controllers".to_string(),
            api_namespace: r"App\Http\Controllers\Api".to_string(),
        }
    }
}

/// A section holding nothing but a namespace
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamespaceSettings {
    /// Namespace of the generated classes
    pub namespace: String,
}

impl NamespaceSettings {
    fn new(namespace: &str) -> Self {
        Self {
            namespace: namespace.to_string(),
        }
    }
}

/// Complete generator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrudConfig {
    /// Directory of custom stubs, or `"default"` for the built-in ones
    pub stub_path: String,

    /// Layout name handed to templates
    pub layout: String,

    /// Directory that the leading `App` namespace segment maps to
    pub app_path: PathBuf,

    /// Connection URL, when not given on the command line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_url: Option<String>,

    /// Model settings
    pub model: ModelSettings,

    /// Controller settings
    pub controller: ControllerSettings,

    /// API resource settings
    pub resources: NamespaceSettings,

    /// Livewire form settings
    pub livewire: NamespaceSettings,

    /// Form request settings
    pub request: NamespaceSettings,
}

impl Default for CrudConfig {
    fn default() -> Self {
        Self {
            stub_path: DEFAULT_STUBS.to_string(),
            layout: "layouts.app".to_string(),
            app_path: PathBuf::from("app"),
            database_url: None,
            model: ModelSettings::default(),
            controller: ControllerSettings::default(),
            resources: NamespaceSettings::new(r"App\Http\Resources"),
            livewire: NamespaceSettings::new(r"App\Livewire"),
            request: NamespaceSettings::new(r"App\Http\Requests"),
        }
    }
}

impl CrudConfig {
    /// Load configuration with standard precedence
    ///
    /// Reads `explicit` when given, otherwise `./crud.toml` if present.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - `explicit` names a file that does not exist
    /// - A config file is present but invalid
    /// - Environment variables cannot be parsed into the expected types
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        match explicit {
            Some(path) if !path.exists() => {
                anyhow::bail!("Config file not found: {}", path.display())
            }
            Some(path) => Self::load_from(path),
            None => Self::load_from(CONFIG_FILE),
        }
    }

    /// Load configuration from a specific file
    ///
    /// A missing file is not an error; defaults and environment variables
    /// still apply.
    ///
    /// # Errors
    ///
    /// Returns error if the file is invalid or the merged configuration
    /// cannot be extracted.
    pub fn load_from(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let config = Figment::new()
            // Start with defaults
            .merge(Toml::string(&toml::to_string(&Self::default())?))
            // Load from specified file (if it exists)
            .merge(Toml::file(path.as_ref()))
            // Environment variables override everything
            .merge(Env::prefixed("CRUDGEN_").split("__").lowercase(true))
            .extract()?;

        Ok(config)
    }

    /// Render this configuration as TOML, for `publish`
    ///
    /// # Errors
    ///
    /// Returns error if serialization fails
    pub fn to_toml(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Custom stub directory, if one is configured
    #[must_use]
    pub fn custom_stub_dir(&self) -> Option<&Path> {
        (self.stub_path != DEFAULT_STUBS).then(|| Path::new(&self.stub_path))
    }

    /// Returns `true` if `column` is excluded from fillable, rules and forms
    #[must_use]
    pub fn is_unwanted(&self, column: &str) -> bool {
        self.model.unwanted_columns.iter().any(|c| c == column)
    }
}
