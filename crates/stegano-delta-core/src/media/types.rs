use std::fs::File;
use std::io::BufReader;
use std::path::Path;

pub use image::RgbaImage;
use image::ImageFormat;
use log::error;

use crate::error::SteganoError;
use crate::result::Result;

use super::Persist;

/// a media container for steganography, an RGBA pixel grid loaded from a lossless image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Media(RgbaImage);

impl Media {
    pub fn from_image(img: RgbaImage) -> Self {
        Self(img)
    }

    /// Loads a PNG image. Lossy formats would destroy the hidden deltas and are refused.
    pub fn from_file(f: &Path) -> Result<Self> {
        if !is_png(f) {
            return Err(SteganoError::UnsupportedMedia);
        }

        let file = File::open(f).map_err(|source| {
            error!("Error opening file {f:?}: {source}");
            SteganoError::ReadError { source }
        })?;
        let img = image::load(BufReader::new(file), ImageFormat::Png).map_err(|e| {
            error!("Error decoding image {f:?}: {e}");
            SteganoError::InvalidImageMedia
        })?;

        Ok(Self(img.to_rgba8()))
    }

    pub fn image(&self) -> &RgbaImage {
        &self.0
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.0.dimensions()
    }

    pub fn save_to_writer<W: std::io::Write + std::io::Seek>(&self, mut writer: W) -> Result<()> {
        self.0.write_to(&mut writer, ImageFormat::Png).map_err(|e| {
            error!("Error saving image: {e}");
            SteganoError::ImageEncodingError
        })
    }
}

impl From<RgbaImage> for Media {
    fn from(img: RgbaImage) -> Self {
        Self::from_image(img)
    }
}

fn is_png(f: &Path) -> bool {
    f.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("png"))
}

impl Persist for Media {
    fn save_as(&mut self, file: &Path) -> Result<()> {
        if !is_png(file) {
            error!("Refusing to write {file:?}, only PNG keeps the pixels intact");
            return Err(SteganoError::UnsupportedMedia);
        }
        let f = File::create(file).map_err(|e| {
            error!("Error creating file {file:?}: {e}");
            SteganoError::WriteError { source: e }
        })?;
        self.save_to_writer(f)
    }
}
