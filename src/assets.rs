//! Text-art sprites loaded from the assets directory.
//!
//! A sprite that fails to load is logged and left out. The renderer skips
//! anything missing, so a broken asset costs a visual and nothing else.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

/// Wing frames in animation order.
pub const BIRD_FRAME_FILES: [&str; 3] = [
    "bird-upflap.txt",
    "bird-midflap.txt",
    "bird-downflap.txt",
];
pub const DIGITS_DIR: &str = "digits";
pub const GAME_OVER_FILE: &str = "game_over.txt";

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("could not read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("{path} has no visible content")]
    Empty { path: PathBuf },
}

/// Block of text art. Spaces are transparent when drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sprite {
    rows: Vec<String>,
}

impl Sprite {
    /// Build from text, dropping trailing blank lines.
    pub fn parse(text: &str) -> Option<Self> {
        let mut rows: Vec<String> = text
            .lines()
            .map(|line| line.trim_end().to_string())
            .collect();
        while rows.last().is_some_and(|row| row.is_empty()) {
            rows.pop();
        }
        if rows.iter().all(|row| row.trim().is_empty()) {
            return None;
        }
        Some(Self { rows })
    }

    pub fn load(path: &Path) -> Result<Self, AssetError> {
        let text = fs::read_to_string(path).map_err(|source| AssetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text).ok_or_else(|| AssetError::Empty {
            path: path.to_path_buf(),
        })
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// Width in cells of the widest row.
    pub fn width(&self) -> u16 {
        self.rows
            .iter()
            .map(|row| row.chars().count())
            .max()
            .unwrap_or(0) as u16
    }

    pub fn height(&self) -> u16 {
        self.rows.len() as u16
    }
}

/// Every sprite the renderer may draw.
#[derive(Debug, Clone, Default)]
pub struct Assets {
    bird_frames: Vec<Option<Sprite>>,
    digits: Vec<Option<Sprite>>,
    game_over: Option<Sprite>,
}

impl Assets {
    /// Load everything under `dir`. Never fails; see the module docs.
    pub fn load(dir: &Path) -> Self {
        let bird_frames: Vec<Option<Sprite>> = BIRD_FRAME_FILES
            .iter()
            .map(|name| load_or_warn(&dir.join(name)))
            .collect();
        let digits: Vec<Option<Sprite>> = (0..10)
            .map(|d| load_or_warn(&dir.join(DIGITS_DIR).join(format!("{}.txt", d))))
            .collect();
        let game_over = load_or_warn(&dir.join(GAME_OVER_FILE));

        let assets = Self {
            bird_frames,
            digits,
            game_over,
        };
        info!(
            dir = %dir.display(),
            missing = assets.missing_count(),
            "assets loaded"
        );
        assets
    }

    /// Wing frame `index`, if it loaded.
    pub fn bird_frame(&self, index: usize) -> Option<&Sprite> {
        self.bird_frames.get(index).and_then(Option::as_ref)
    }

    /// Glyph for a single decimal digit, if it loaded.
    pub fn digit(&self, digit: u32) -> Option<&Sprite> {
        self.digits.get(digit as usize).and_then(Option::as_ref)
    }

    pub fn game_over(&self) -> Option<&Sprite> {
        self.game_over.as_ref()
    }

    /// Number of sprites that failed to load.
    pub fn missing_count(&self) -> usize {
        let frames = self.bird_frames.iter().filter(|s| s.is_none()).count();
        let digits = self.digits.iter().filter(|s| s.is_none()).count();
        frames + digits + usize::from(self.game_over.is_none())
    }
}

fn load_or_warn(path: &Path) -> Option<Sprite> {
    match Sprite::load(path) {
        Ok(sprite) => Some(sprite),
        Err(e) => {
            warn!(error = %e, "sprite unavailable, it will not be drawn");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(dir: &Path, name: &str, text: &str) {
        let path = dir.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, text).unwrap();
    }

    #[test]
    fn test_parse_trims_trailing_blank_lines() {
        let sprite = Sprite::parse(" _\n(o>  \n\n\n").unwrap();
        assert_eq!(sprite.rows(), &[" _".to_string(), "(o>".to_string()]);
        assert_eq!(sprite.width(), 3);
        assert_eq!(sprite.height(), 2);
    }

    #[test]
    fn test_parse_blank_is_none() {
        assert!(Sprite::parse("   \n\n").is_none());
        assert!(Sprite::parse("").is_none());
    }

    #[test]
    fn test_missing_dir_degrades() {
        let dir = tempfile::tempdir().unwrap();
        let assets = Assets::load(&dir.path().join("absent"));
        assert!(assets.bird_frame(0).is_none());
        assert!(assets.digit(7).is_none());
        assert!(assets.game_over().is_none());
        assert_eq!(assets.missing_count(), 14);
    }

    #[test]
    fn test_partial_assets() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "bird-upflap.txt", "\\o>");
        write(dir.path(), "bird-downflap.txt", "/o>");
        write(dir.path(), "digits/3.txt", "33\n 3\n33");
        write(dir.path(), "game_over.txt", "   \n");

        let assets = Assets::load(dir.path());
        assert!(assets.bird_frame(0).is_some());
        assert!(assets.bird_frame(1).is_none());
        assert!(assets.bird_frame(2).is_some());
        assert!(assets.bird_frame(3).is_none());
        assert_eq!(assets.digit(3).unwrap().height(), 3);
        assert!(assets.digit(4).is_none());
        assert!(assets.game_over().is_none());
        assert_eq!(assets.missing_count(), 1 + 9 + 1);
    }

    #[test]
    fn test_load_empty_file_error() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "blank.txt", "\n");
        let err = Sprite::load(&dir.path().join("blank.txt")).unwrap_err();
        assert!(matches!(err, AssetError::Empty { .. }));
    }
}
