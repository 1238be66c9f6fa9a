// Download triggers
//
// The deck exposes two fixed download actions: save the source of the demo
// currently on screen, and save a bundle of every source the deck ships.
// Both just write files into the configured download directory; the
// lifecycle coordinator is not involved.

use crate::demo::bundled;
use crate::util::slugify;
use anyhow::{Context, Result};
use chrono::Utc;
use std::path::PathBuf;

pub struct Downloads {
    dir: PathBuf,
}

impl Downloads {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Write the displayed demo's source as `<name>-<timestamp>.rs`.
    pub fn save_source(&self, demo_name: &str, source: &str) -> Result<PathBuf> {
        let file = format!("{}-{}.rs", slugify(demo_name), timestamp());
        self.write(&file, source)
    }

    /// Write every shipped demo source into one annotated bundle file.
    pub fn save_deck_bundle(&self) -> Result<PathBuf> {
        let mut bundle = String::new();
        for (name, source) in bundled::sources() {
            bundle.push_str(&format!("//// {}\n\n{}\n\n", name, source.trim_end()));
        }
        let file = format!("deck-sources-{}.txt", timestamp());
        self.write(&file, &bundle)
    }

    fn write(&self, file: &str, contents: &str) -> Result<PathBuf> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("creating download dir {}", self.dir.display()))?;
        let path = self.dir.join(file);
        std::fs::write(&path, contents)
            .with_context(|| format!("writing {}", path.display()))?;
        Ok(path)
    }
}

fn timestamp() -> String {
    Utc::now().format("%Y%m%d-%H%M%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_source_writes_a_slugged_file() {
        let dir = tempfile::tempdir().unwrap();
        let downloads = Downloads::new(dir.path().to_path_buf());

        let path = downloads.save_source("Game of Life", "fn main() {}").unwrap();
        assert!(path.exists());
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("game-of-life-"));
        assert!(name.ends_with(".rs"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "fn main() {}");
    }

    #[test]
    fn deck_bundle_contains_every_shipped_source() {
        let dir = tempfile::tempdir().unwrap();
        let downloads = Downloads::new(dir.path().to_path_buf());

        let path = downloads.save_deck_bundle().unwrap();
        let bundle = std::fs::read_to_string(&path).unwrap();
        for (name, _) in bundled::sources() {
            assert!(bundle.contains(&format!("//// {}", name)), "{}", name);
        }
    }

    #[test]
    fn missing_directories_are_created() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("deep").join("er");
        let downloads = Downloads::new(nested.clone());
        downloads.save_source("x", "y").unwrap();
        assert!(nested.exists());
    }
}
