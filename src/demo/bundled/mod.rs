// Bundled demos (compiled into the binary)
//
// Each demo lives in its own module file. The loader resolves a registry
// identifier's stem against `construct`; the deck's download bundle pulls
// from `sources`.

mod bounce;
mod conway;
mod plasma;
mod starfield;

use super::{Canvas, Demo};

/// Stems of every bundled demo, in no particular order.
pub const BUNDLED: &[&str] = &["bounce", "conway", "plasma", "starfield"];

/// Instantiate a bundled demo by stem. The instance is not yet initialized.
pub fn construct(name: &str, canvas: Canvas) -> Option<Box<dyn Demo>> {
    match name {
        "bounce" => Some(Box::new(bounce::Bounce::new(canvas))),
        "conway" => Some(Box::new(conway::Conway::new(canvas))),
        "plasma" => Some(Box::new(plasma::Plasma::new(canvas))),
        "starfield" => Some(Box::new(starfield::Starfield::new(canvas))),
        _ => None,
    }
}

/// (stem, source text) for every bundled demo that ships its source.
pub fn sources() -> Vec<(&'static str, &'static str)> {
    vec![
        ("bounce", bounce::SOURCE),
        ("conway", conway::SOURCE),
        ("starfield", starfield::SOURCE),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_bundled_stem_constructs() {
        for name in BUNDLED {
            assert!(construct(name, Canvas::new()).is_some(), "{}", name);
        }
        assert!(construct("missing", Canvas::new()).is_none());
    }

    #[test]
    fn shipped_sources_are_non_empty() {
        for (name, source) in sources() {
            assert!(!source.trim().is_empty(), "{}", name);
        }
    }
}
