// Demo loader - resolves registry identifiers to demo instances
//
// The registry lists module identifiers as relative paths (the shape the
// original deck used, e.g. "./demos/starfield.js"). The bundled loader maps
// the path stem onto the demos compiled into this binary and hands each new
// instance a handle to the shared canvas.

use super::bundled;
use super::{Canvas, Demo, DemoError};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("no module registered at index {0}")]
    IndexOutOfRange(usize),

    #[error("unknown module {0:?}")]
    UnknownModule(String),

    #[error("module {module} failed to initialize: {source}")]
    Init { module: String, source: DemoError },
}

/// Resolves a module identifier into a ready-to-initialize demo handle.
#[async_trait]
pub trait DemoLoader: Send + Sync {
    async fn load(&self, identifier: &str) -> Result<Box<dyn Demo>, LoadError>;
}

/// Loader backed by the demos compiled into this binary.
pub struct BundledLoader {
    canvas: Canvas,
}

impl BundledLoader {
    pub fn new(canvas: Canvas) -> Self {
        Self { canvas }
    }
}

#[async_trait]
impl DemoLoader for BundledLoader {
    async fn load(&self, identifier: &str) -> Result<Box<dyn Demo>, LoadError> {
        let name = module_stem(identifier);
        bundled::construct(name, self.canvas.clone())
            .ok_or_else(|| LoadError::UnknownModule(identifier.to_string()))
    }
}

/// Strip directories and extension from a module identifier:
/// "./demos/starfield.js" -> "starfield".
fn module_stem(identifier: &str) -> &str {
    let base = identifier
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(identifier);
    match base.split_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => base,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stem_strips_directories_and_extension() {
        assert_eq!(module_stem("./demos/starfield.js"), "starfield");
        assert_eq!(module_stem("demos/bounce.wasm.js"), "bounce");
        assert_eq!(module_stem("conway"), "conway");
        assert_eq!(module_stem(".hidden"), ".hidden");
    }

    #[tokio::test]
    async fn bundled_loader_resolves_known_modules() {
        let loader = BundledLoader::new(Canvas::new());
        for name in bundled::BUNDLED {
            let identifier = format!("./demos/{}.js", name);
            assert!(loader.load(&identifier).await.is_ok(), "{}", identifier);
        }
    }

    #[tokio::test]
    async fn bundled_loader_rejects_unknown_modules() {
        let loader = BundledLoader::new(Canvas::new());
        let err = match loader.load("./demos/nonexistent.js").await {
            Ok(_) => panic!("expected an error"),
            Err(e) => e,
        };
        assert!(matches!(err, LoadError::UnknownModule(_)));
    }
}
