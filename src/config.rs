use config::{Config, ConfigError, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fmt::Write;
use std::path::{Path, PathBuf};

const APP_NAME: &str = "uint160-printer";
const ENV_PREFIX: &str = "UINT160_PRINTER";

/// Configuration structure for uint160-printer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PrinterConfig {
    /// How identifiers are rendered
    #[serde(default)]
    pub display: DisplayConfig,
    /// Random identifier generation
    #[serde(default)]
    pub random: RandomConfig,
}

/// Display-specific configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Render hex digits in uppercase, as debuggers do (default: true)
    pub uppercase: bool,
    /// Print the per-limb breakdown under each value (default: true)
    pub show_limbs: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            uppercase: true,
            show_limbs: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RandomConfig {
    /// Fixed seed for reproducible identifiers (default: OS entropy)
    pub seed: Option<u64>,
}

impl PrinterConfig {
    /// Load configuration from various sources in order of priority:
    /// 1. Command line arguments (handled elsewhere)
    /// 2. Environment variables
    /// 3. User config file (~/.config/uint160-printer/config.toml)
    /// 4. System config file (/etc/uint160-printer/config.toml)
    /// 5. Default values
    pub fn load() -> Result<Self, ConfigError> {
        let files = [Self::get_system_config_path(), Self::get_user_config_path()];
        Self::load_layered(files.into_iter().flatten(), Self::environment())
    }

    /// Environment variables prefixed with `UINT160_PRINTER_`
    ///
    /// Keys contain underscores, so nesting uses a double one:
    /// `UINT160_PRINTER_DISPLAY__SHOW_LIMBS`
    fn environment() -> config::Environment {
        config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }

    /// Defaults, then each existing file in order, then the environment
    fn load_layered(
        files: impl IntoIterator<Item = PathBuf>,
        environment: config::Environment,
    ) -> Result<Self, ConfigError> {
        let mut config_builder =
            Config::builder().add_source(Config::try_from(&Self::default())?);

        for path in files {
            if path.exists() {
                log::debug!("Reading config {}", path.display());
                config_builder = config_builder.add_source(File::from(path).required(false));
            }
        }

        config_builder
            .add_source(environment)
            .build()?
            .try_deserialize()
    }

    /// Load a single config file over the default values
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        log::debug!("Reading config {}", path.display());

        Config::builder()
            .add_source(Config::try_from(&Self::default())?)
            .add_source(File::from(path.to_path_buf()).required(true))
            .build()?
            .try_deserialize()
    }

    /// Get the path to the user configuration file
    /// Returns: ~/.config/uint160-printer/config.toml (on Linux)
    ///          %APPDATA%/uint160-printer/config.toml (on Windows)
    #[must_use]
    pub fn get_user_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", APP_NAME)
            .map(|proj_dirs| proj_dirs.config_dir().join("config.toml"))
    }

    /// Get the path to the system configuration file
    #[must_use]
    pub fn get_system_config_path() -> Option<PathBuf> {
        #[cfg(unix)]
        {
            Some(PathBuf::from("/etc").join(APP_NAME).join("config.toml"))
        }

        #[cfg(windows)]
        {
            std::env::var("PROGRAMDATA").ok().map(|program_data| {
                PathBuf::from(program_data)
                    .join(APP_NAME)
                    .join("config.toml")
            })
        }

        #[cfg(not(any(unix, windows)))]
        {
            None
        }
    }

    /// Write the default configuration as TOML to `path`
    pub fn write_default_config(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml_content = toml::to_string_pretty(&Self::default())?;
        std::fs::write(path, toml_content)?;
        Ok(())
    }

    /// Create a default configuration file at the user config location
    pub fn create_default_config_file() -> Result<PathBuf, Box<dyn std::error::Error>> {
        let config_path =
            Self::get_user_config_path().ok_or("Could not determine user config directory")?;

        Self::write_default_config(&config_path)?;
        log::info!("Wrote default config to {}", config_path.display());
        Ok(config_path)
    }

    /// Describe where configuration is read from
    ///
    /// With an explicit file only that file is used, so only it is listed.
    #[must_use]
    pub fn config_info(explicit: Option<&Path>) -> String {
        let mut output = String::new();
        let _ = writeln!(output, "uint160-printer configuration");
        let _ = writeln!(output, "=============================");

        let files = match explicit {
            Some(path) => vec![("Config file (--config)", Some(path.to_path_buf()))],
            None => vec![
                ("User config file", Self::get_user_config_path()),
                ("System config file", Self::get_system_config_path()),
            ],
        };

        for (label, path) in files {
            if let Some(path) = path {
                let _ = writeln!(output, "{label}: {}", path.display());
                if path.exists() {
                    let _ = writeln!(output, "  Status: ✓ Found");
                } else if explicit.is_some() {
                    let _ = writeln!(output, "  Status: ✗ Not found");
                } else {
                    let _ = writeln!(output, "  Status: ✗ Not found (will use defaults)");
                }
            }
        }

        if explicit.is_none() {
            let _ = writeln!(output, "\nEnvironment variables:");
            let _ = writeln!(output, "  {ENV_PREFIX}_DISPLAY__UPPERCASE");
            let _ = writeln!(output, "  {ENV_PREFIX}_DISPLAY__SHOW_LIMBS");
            let _ = writeln!(output, "  {ENV_PREFIX}_RANDOM__SEED");
        }

        output
    }

    /// Print information about config file locations
    pub fn print_config_info(explicit: Option<&Path>) {
        print!("{}", Self::config_info(explicit));
    }
}
