//! # Stegano Delta Core API
//!
//! Hides short text messages in PNG images by shifting the red channel of pixels
//! by a small per-character code. Unveiling needs the untouched master image,
//! the message is the difference between both images.
//!
//! The building blocks are
//! - [`CodeTable`][table] mapping the 35 supported characters to codes `1..=35`
//! - [`Embedder`][enc] for writing a message into an image
//! - [`Extractor`][dec] for reading a message by diffing against the master image
//!
//! # Usage Examples
//!
//! ## Hide a message inside an image
//!
//! ```rust
//! use image::{Rgba, RgbaImage};
//! use tempfile::tempdir;
//!
//! let temp_dir = tempdir().expect("Failed to create temporary directory");
//! let master = temp_dir.path().join("master.png");
//! RgbaImage::from_pixel(16, 16, Rgba([100, 50, 50, 255]))
//!     .save(&master)
//!     .expect("Failed to write master image");
//!
//! stegano_delta_core::api::hide::prepare()
//!     .with_message("Hello, World!")  // will hide this message inside the image
//!     .with_image(&master)
//!     .with_output(temp_dir.path().join("image-with-a-message.png"))
//!     .execute()
//!     .expect("Failed to hide message in image");
//!
//! let message = stegano_delta_core::api::unveil::prepare()
//!     .from_secret_file(temp_dir.path().join("image-with-a-message.png"))
//!     .with_master_image(&master)
//!     .limit_to(13)
//!     .execute()
//!     .expect("Failed to unveil message from image");
//!
//! assert_eq!(message, "hello, world!");
//! ```
//!
//! [table]: ./code_table/struct.CodeTable.html
//! [enc]: ./media/image/encoder/struct.Embedder.html
//! [dec]: ./media/image/decoder/struct.Extractor.html

#![warn(clippy::redundant_else)]

pub mod api;
pub mod code_table;
pub mod commands;
pub mod error;
pub mod media;
pub mod message;
pub mod result;

pub use crate::code_table::{Code, CodeTable};
pub use crate::error::SteganoError;
pub use crate::media::image::{DeltaSequence, EmbedReport, Embedder, Extractor, PixelDelta};
pub use crate::media::{CapacityPolicy, CodecOptions, LinearIndex, Media, Persist};
pub use crate::message::Message;
pub use crate::result::Result;

#[cfg(test)]
mod test_utils {
    use std::path::{Path, PathBuf};

    use image::{ImageBuffer, RgbaImage};

    /// This image has some traits:
    /// --------------y-------------
    /// | 0,0 -> (0, 1, 2, 3 ) | 0,1 -> (20,21,22,23) | ...
    /// | 1,0 -> (4, 5, 6, 7 ) | 1,1 -> (24,25,26,27) | ...
    /// | 2,0 -> (8, 9, 10,11) | 2,1 -> (28,29,30,31) | ...
    /// x ...
    pub fn prepare_5x5_image() -> RgbaImage {
        ImageBuffer::from_fn(5, 5, |x, y| {
            let i = (4 * x + 20 * y) as u8;
            image::Rgba([i, i + 1, i + 2, i + 3])
        })
    }

    /// every pixel is `(100, 50, 50, 255)`
    pub fn prepare_2x2_flat_image() -> RgbaImage {
        ImageBuffer::from_pixel(2, 2, image::Rgba([100, 50, 50, 255]))
    }

    /// colors grow column by column, so the column wise traversal sees `0, 3, 6, ...` in red
    pub fn prepare_4x6_linear_growing_colors() -> RgbaImage {
        let mut img = ImageBuffer::new(4, 6);
        let mut i = 0;
        for x in 0..img.width() {
            for y in 0..img.height() {
                let pi = img.get_pixel_mut(x, y);
                *pi = image::Rgba([i, i + 1, i + 2, 255]);
                i += 3;
            }
        }

        img
    }

    /// writes a master image with a gentle red gradient into `dir`
    pub fn write_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
        let target = dir.join(name);
        let img: RgbaImage = ImageBuffer::from_fn(width, height, |x, y| {
            image::Rgba([(x * 7 + y * 3) as u8, 120, 200, 255])
        });
        img.save(&target).unwrap();

        target
    }
}
