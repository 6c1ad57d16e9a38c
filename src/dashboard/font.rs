//! Font embedded into the rendered page

use std::path::{Path, PathBuf};

use base64::Engine;
use base64::prelude::BASE64_STANDARD;

use crate::error::util::safe_read_bytes;
use crate::error::{DashboardError, Result};

/// CSS family name the charts refer to
pub const FONT_FAMILY: &str = "DashboardFont";

/// sfnt version tags accepted as font files
const SFNT_TAGS: [[u8; 4]; 4] = [[0x00, 0x01, 0x00, 0x00], *b"true", *b"OTTO", *b"ttcf"];

/// A TrueType font loaded once and shared by every chart
#[derive(Debug, Clone)]
pub struct FontResource {
    path: PathBuf,
    bytes: Vec<u8>,
}

impl FontResource {
    /// Read and sanity-check a font file
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = safe_read_bytes(path, "embedding chart font")?;
        Self::from_bytes(path, bytes)
    }

    /// Wrap font bytes that were read elsewhere
    pub fn from_bytes(path: &Path, bytes: Vec<u8>) -> Result<Self> {
        let tag = bytes.get(..4).ok_or_else(|| DashboardError::Font {
            path: path.to_path_buf(),
            message: "file is too short".to_string(),
        })?;
        if !SFNT_TAGS.iter().any(|known| known.as_slice() == tag) {
            return Err(DashboardError::Font {
                path: path.to_path_buf(),
                message: "missing TrueType/OpenType header".to_string(),
            });
        }

        log::debug!("Loaded font {} ({} bytes)", path.display(), bytes.len());
        Ok(Self {
            path: path.to_path_buf(),
            bytes,
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `@font-face` rule carrying the font as a data URI
    #[must_use]
    pub fn css_face(&self) -> String {
        format!(
            "@font-face {{ font-family: '{FONT_FAMILY}'; src: url(data:font/ttf;base64,{}) format('truetype'); }}",
            BASE64_STANDARD.encode(&self.bytes)
        )
    }
}
