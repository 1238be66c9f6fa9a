//! Configuration for the demo deck
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/demodeck/config.toml)
//! 3. Built-in defaults (lowest priority)

use serde::Deserialize;
use std::path::PathBuf;

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Launch address; carries the module index as a query parameter
    pub address: String,

    /// Where the module list resource lives (HTTP URL or local path)
    pub modules: String,

    /// Restart the session instead of re-activating an already-visited
    /// module in place (demos rarely release the canvas deterministically)
    pub reload_guard: bool,

    /// TUI redraw tick in milliseconds
    pub tick_ms: u64,

    /// Directory the download triggers write into
    pub download_dir: PathBuf,

    /// Logging configuration
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level filter: "error", "warn", "info", "debug", "trace"
    pub level: String,

    /// Also write JSON logs to rotating files
    pub file_enabled: bool,

    /// Directory for log files
    pub file_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            address: "http://localhost:8080/index.html".to_string(),
            modules: "./modules.txt".to_string(),
            reload_guard: true,
            tick_ms: 50,
            download_dir: dirs::download_dir().unwrap_or_else(|| PathBuf::from("./downloads")),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_enabled: false,
            file_dir: PathBuf::from("./logs"),
        }
    }
}

/// Config file structure (everything optional; absent keys keep defaults)
#[derive(Debug, Deserialize, Default)]
struct FileConfig {
    address: Option<String>,
    modules: Option<String>,
    reload_guard: Option<bool>,
    tick_ms: Option<u64>,
    download_dir: Option<String>,
    logging: Option<FileLogging>,
}

#[derive(Debug, Deserialize, Default)]
struct FileLogging {
    level: Option<String>,
    file_enabled: Option<bool>,
    file_dir: Option<String>,
}

impl Config {
    /// Load configuration from defaults, config file, then environment
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(file) = Self::load_file() {
            config.apply_file(file);
        }
        config.apply_env();
        config
    }

    /// Path to the config file, if a config directory can be determined
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("demodeck").join("config.toml"))
    }

    /// Write a commented template on first run so users can discover options
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };
        if path.exists() {
            return;
        }
        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return;
            }
        }
        let _ = std::fs::write(&path, Self::default().to_toml());
    }

    fn load_file() -> Option<FileConfig> {
        let path = Self::config_path()?;
        let text = std::fs::read_to_string(&path).ok()?;
        match toml::from_str(&text) {
            Ok(file) => Some(file),
            Err(e) => {
                eprintln!("Warning: ignoring invalid config {}: {}", path.display(), e);
                None
            }
        }
    }

    fn apply_file(&mut self, file: FileConfig) {
        if let Some(address) = file.address {
            self.address = address;
        }
        if let Some(modules) = file.modules {
            self.modules = modules;
        }
        if let Some(reload_guard) = file.reload_guard {
            self.reload_guard = reload_guard;
        }
        if let Some(tick_ms) = file.tick_ms {
            self.tick_ms = tick_ms;
        }
        if let Some(download_dir) = file.download_dir {
            self.download_dir = PathBuf::from(download_dir);
        }
        if let Some(logging) = file.logging {
            if let Some(level) = logging.level {
                self.logging.level = level;
            }
            if let Some(file_enabled) = logging.file_enabled {
                self.logging.file_enabled = file_enabled;
            }
            if let Some(file_dir) = logging.file_dir {
                self.logging.file_dir = PathBuf::from(file_dir);
            }
        }
    }

    fn apply_env(&mut self) {
        if let Ok(address) = std::env::var("DECK_ADDRESS") {
            self.address = address;
        }
        if let Ok(modules) = std::env::var("DECK_MODULES") {
            self.modules = modules;
        }
        if let Ok(guard) = std::env::var("DECK_RELOAD_GUARD") {
            self.reload_guard = parse_bool(&guard).unwrap_or(self.reload_guard);
        }
        if let Ok(tick) = std::env::var("DECK_TICK_MS") {
            if let Ok(tick) = tick.parse() {
                self.tick_ms = tick;
            }
        }
        if let Ok(dir) = std::env::var("DECK_DOWNLOAD_DIR") {
            self.download_dir = PathBuf::from(dir);
        }
        if let Ok(level) = std::env::var("DECK_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(enabled) = std::env::var("DECK_LOG_FILE") {
            self.logging.file_enabled = parse_bool(&enabled).unwrap_or(self.logging.file_enabled);
        }
        if let Ok(dir) = std::env::var("DECK_LOG_DIR") {
            self.logging.file_dir = PathBuf::from(dir);
        }
    }

    /// Render the effective configuration as TOML (config template and
    /// `config --show` output)
    pub fn to_toml(&self) -> String {
        format!(
            "# demodeck configuration\n\
             \n\
             # Launch address; the module index rides in its query string\n\
             address = {address:?}\n\
             \n\
             # Module list resource: HTTP URL or local path\n\
             modules = {modules:?}\n\
             \n\
             # Restart the session when revisiting a module (clean environment)\n\
             reload_guard = {reload_guard}\n\
             \n\
             # TUI redraw tick in milliseconds\n\
             tick_ms = {tick_ms}\n\
             \n\
             # Where the download keys write files\n\
             download_dir = {download_dir:?}\n\
             \n\
             [logging]\n\
             level = {level:?}\n\
             file_enabled = {file_enabled}\n\
             file_dir = {file_dir:?}\n",
            address = self.address,
            modules = self.modules,
            reload_guard = self.reload_guard,
            tick_ms = self.tick_ms,
            download_dir = self.download_dir.display().to_string(),
            level = self.logging.level,
            file_enabled = self.logging.file_enabled,
            file_dir = self.logging.file_dir.display().to_string(),
        )
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The rendered template must parse back; this catches TOML syntax
    /// mistakes in `to_toml` when fields are added.
    #[test]
    fn default_config_round_trips_through_toml() {
        let rendered = Config::default().to_toml();
        let parsed: Result<FileConfig, _> = toml::from_str(&rendered);
        assert!(
            parsed.is_ok(),
            "default config should round-trip.\nTOML:\n{}\nError: {:?}",
            rendered,
            parsed.err()
        );
        let file = parsed.unwrap();
        assert_eq!(file.address.as_deref(), Some("http://localhost:8080/index.html"));
        assert_eq!(file.reload_guard, Some(true));
        assert!(file.logging.is_some());
    }

    #[test]
    fn file_values_override_defaults() {
        let file: FileConfig = toml::from_str(
            "modules = \"http://example.test/modules.txt\"\n\
             reload_guard = false\n\
             [logging]\n\
             level = \"debug\"\n",
        )
        .unwrap();

        let mut config = Config::default();
        config.apply_file(file);

        assert_eq!(config.modules, "http://example.test/modules.txt");
        assert!(!config.reload_guard);
        assert_eq!(config.logging.level, "debug");
        // Untouched fields keep their defaults
        assert_eq!(config.tick_ms, 50);
    }

    #[test]
    fn bool_parsing_accepts_common_spellings() {
        assert_eq!(parse_bool("1"), Some(true));
        assert_eq!(parse_bool("true"), Some(true));
        assert_eq!(parse_bool("YES"), Some(true));
        assert_eq!(parse_bool("0"), Some(false));
        assert_eq!(parse_bool("off"), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }
}
