// Module registry - the ordered list of loadable demo modules
//
// The list lives in an external `modules.txt` resource: one module identifier
// per line, blank lines ignored, line order = navigation order. It is fetched
// exactly once per session and is immutable afterwards. There is no retry
// policy - if the resource is unreachable the session is over before it
// starts, and the failure is only logged.

use std::path::{Path, PathBuf};
use thiserror::Error;
use url::Url;

/// Where the module list resource lives.
#[derive(Debug, Clone)]
pub enum ModuleSource {
    Http(Url),
    File(PathBuf),
}

impl ModuleSource {
    /// Interpret a config string as either an HTTP URL or a local path.
    pub fn parse(raw: &str) -> Self {
        if raw.starts_with("http://") || raw.starts_with("https://") {
            match Url::parse(raw) {
                Ok(url) => return ModuleSource::Http(url),
                Err(e) => {
                    tracing::warn!("invalid module list URL {:?} ({}); treating as path", raw, e)
                }
            }
        }
        ModuleSource::File(PathBuf::from(raw))
    }
}

impl std::fmt::Display for ModuleSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModuleSource::Http(url) => write!(f, "{}", url),
            ModuleSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("module list request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("module list fetch returned HTTP {0}")]
    Status(u16),

    #[error("failed to read module list {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("module list contains no modules")]
    Empty,
}

/// Ordered, immutable list of module identifiers.
#[derive(Debug, Clone)]
pub struct ModuleRegistry {
    modules: Vec<String>,
}

impl ModuleRegistry {
    /// Fetch and parse the module list. Called once at session start.
    pub async fn load(source: &ModuleSource) -> Result<Self, RegistryError> {
        let body = match source {
            ModuleSource::Http(url) => {
                let response = reqwest::get(url.clone()).await?;
                let status = response.status();
                if !status.is_success() {
                    return Err(RegistryError::Status(status.as_u16()));
                }
                response.text().await?
            }
            ModuleSource::File(path) => read_file(path).await?,
        };

        let registry = Self::parse(&body)?;
        tracing::info!("loaded {} modules from {}", registry.len(), source);
        Ok(registry)
    }

    /// Split a module list body into identifiers, discarding blank lines.
    pub fn parse(body: &str) -> Result<Self, RegistryError> {
        let modules: Vec<String> = body
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();

        if modules.is_empty() {
            return Err(RegistryError::Empty);
        }
        Ok(Self { modules })
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.modules.get(index).map(String::as_str)
    }
}

async fn read_file(path: &Path) -> Result<String, RegistryError> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| RegistryError::Io {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_preserves_order_and_drops_blanks() {
        let body = "demos/starfield.js\n\n  \ndemos/bounce.js\ndemos/conway.js\n";
        let registry = ModuleRegistry::parse(body).unwrap();
        assert_eq!(registry.len(), 3);
        assert_eq!(registry.get(0), Some("demos/starfield.js"));
        assert_eq!(registry.get(1), Some("demos/bounce.js"));
        assert_eq!(registry.get(2), Some("demos/conway.js"));
        assert_eq!(registry.get(3), None);
    }

    #[test]
    fn parse_trims_surrounding_whitespace() {
        let registry = ModuleRegistry::parse("  demos/a.js  \r\n\tdemos/b.js\t\n").unwrap();
        assert_eq!(registry.get(0), Some("demos/a.js"));
        assert_eq!(registry.get(1), Some("demos/b.js"));
    }

    #[test]
    fn empty_body_is_an_error() {
        assert!(matches!(
            ModuleRegistry::parse("\n  \n"),
            Err(RegistryError::Empty)
        ));
    }

    #[test]
    fn source_string_dispatches_on_scheme() {
        assert!(matches!(
            ModuleSource::parse("http://localhost:8080/modules.txt"),
            ModuleSource::Http(_)
        ));
        assert!(matches!(
            ModuleSource::parse("./modules.txt"),
            ModuleSource::File(_)
        ));
    }
}
