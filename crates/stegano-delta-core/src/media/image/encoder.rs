use image::{Rgba, RgbaImage};
use log::{debug, warn};

use crate::media::image::iterators::TransposeMut;
use crate::media::{CapacityPolicy, CodecOptions};
use crate::{Message, Result, SteganoError};

/// Summary of a finished embedding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmbedReport {
    /// message characters that made it into the image
    pub embedded: usize,
    /// message characters that did not fit and were dropped
    pub dropped: usize,
    /// number of characters the image can carry
    pub capacity: usize,
}

impl EmbedReport {
    pub fn is_truncated(&self) -> bool {
        self.dropped > 0
    }
}

/// Hides a message in the red channel of an image.
///
/// ## Example of usage
/// ```rust
/// use image::{Rgba, RgbaImage};
/// use stegano_delta_core::media::image::encoder::Embedder;
/// use stegano_delta_core::{CodecOptions, Message};
///
/// let source = RgbaImage::from_pixel(2, 2, Rgba([100, 50, 50, 255]));
/// let (encoded, report) = Embedder::new(&CodecOptions::default())
///     .embed(&Message::from_text("ab"), &source)
///     .expect("Cannot embed message");
///
/// assert_eq!(report.embedded, 2);
/// assert_eq!(encoded.get_pixel(0, 0), &Rgba([101, 50, 50, 255]));
/// assert_eq!(encoded.get_pixel(1, 1), &Rgba([100, 50, 50, 255]));
/// ```
pub struct Embedder<'o> {
    options: &'o CodecOptions,
}

impl<'o> Embedder<'o> {
    pub fn new(options: &'o CodecOptions) -> Self {
        Self { options }
    }

    /// Produces a new image, the source stays untouched.
    pub fn embed(&self, message: &Message, source: &RgbaImage) -> Result<(RgbaImage, EmbedReport)> {
        let (width, height) = source.dimensions();
        let capacity = self.options.linear_index.capacity(width, height);
        let embedded = message.len().min(capacity);
        let dropped = message.len() - embedded;

        if dropped > 0 {
            match self.options.capacity_policy {
                CapacityPolicy::Reject => {
                    return Err(SteganoError::ImageCapacityError(
                        width,
                        height,
                        capacity,
                        message.len(),
                    ))
                }
                CapacityPolicy::Truncate => {
                    warn!(
                        "Message has {} characters but the {width}x{height} image carries only {capacity}, dropping {dropped}",
                        message.len()
                    );
                }
            }
        }
        debug!(
            "embedding {embedded} characters into {width}x{height} pixels using {} index",
            self.options.linear_index
        );

        let mut encoded = source.clone();
        for (x, y, pixel) in TransposeMut::from_rows_mut(encoded.rows_mut(), width, height) {
            let k = self.options.linear_index.index_of(x, y, width);
            if k >= embedded {
                continue;
            }
            if let Some(code) = message.code_at(k) {
                *pixel = shift_red(*pixel, code.value());
            }
        }

        Ok((
            encoded,
            EmbedReport {
                embedded,
                dropped,
                capacity,
            },
        ))
    }
}

/// adds to the red channel, wrapping around at 256
fn shift_red(pixel: Rgba<u8>, by: u8) -> Rgba<u8> {
    let [r, g, b, a] = pixel.0;
    Rgba([r.wrapping_add(by), g, b, a])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::LinearIndex;
    use crate::test_utils::{prepare_2x2_flat_image, prepare_5x5_image};

    #[test]
    fn should_apply_codes_along_anti_diagonals() {
        let source = prepare_2x2_flat_image();
        let (encoded, report) = Embedder::new(&CodecOptions::default())
            .embed(&Message::from_text("ab"), &source)
            .unwrap();

        assert_eq!(encoded.get_pixel(0, 0), &Rgba([101, 50, 50, 255]));
        // both pixels share k = 1, each starts from the untouched source value
        assert_eq!(encoded.get_pixel(0, 1), &Rgba([102, 50, 50, 255]));
        assert_eq!(encoded.get_pixel(1, 0), &Rgba([102, 50, 50, 255]));
        assert_eq!(encoded.get_pixel(1, 1), &Rgba([100, 50, 50, 255]));
        assert_eq!(
            report,
            EmbedReport {
                embedded: 2,
                dropped: 0,
                capacity: 2
            }
        );
    }

    #[test]
    fn should_not_touch_the_source_image() {
        let source = prepare_5x5_image();
        let copy = source.clone();
        Embedder::new(&CodecOptions::default())
            .embed(&Message::from_text("hello"), &source)
            .unwrap();
        assert_eq!(source, copy);
    }

    #[test]
    fn should_wrap_red_channel_around() {
        let source = RgbaImage::from_pixel(1, 1, Rgba([250, 0, 0, 255]));
        // j has the code 10
        let (encoded, _) = Embedder::new(&CodecOptions::default())
            .embed(&Message::from_text("j"), &source)
            .unwrap();
        assert_eq!(encoded.get_pixel(0, 0).0[0], 4);
    }

    #[test]
    fn should_leave_pixels_of_unmapped_chars_untouched() {
        let source = prepare_2x2_flat_image();
        let (encoded, report) = Embedder::new(&CodecOptions::default())
            .embed(&Message::from_text("#"), &source)
            .unwrap();
        assert_eq!(encoded, source);
        assert_eq!(report.embedded, 1);
    }

    #[test]
    fn should_only_change_the_red_channel() {
        let source = prepare_5x5_image();
        let opts = CodecOptions::default().with_linear_index(LinearIndex::RowMajor);
        let (encoded, _) = Embedder::new(&opts)
            .embed(&Message::from_text("the quick brown fox"), &source)
            .unwrap();

        for (given, expected) in encoded.pixels().zip(source.pixels()) {
            assert_eq!(given.0[1..], expected.0[1..]);
        }
        assert_ne!(encoded, source);
    }

    #[test]
    fn should_truncate_and_report_by_default() {
        let source = prepare_2x2_flat_image();
        let (encoded, report) = Embedder::new(&CodecOptions::default())
            .embed(&Message::from_text("abcde"), &source)
            .unwrap();
        assert!(report.is_truncated());
        assert_eq!(report.embedded, 2);
        assert_eq!(report.dropped, 3);
        // k = 2 is beyond the first column, nothing is written there
        assert_eq!(encoded.get_pixel(1, 1).0[0], 100);
    }

    #[test]
    fn should_report_diagonal_messages_longer_than_the_height_as_truncated() {
        let source = prepare_2x2_flat_image();
        let (encoded, report) = Embedder::new(&CodecOptions::default())
            .embed(&Message::from_text("abc"), &source)
            .unwrap();
        assert_eq!(
            report,
            EmbedReport {
                embedded: 2,
                dropped: 1,
                capacity: 2
            }
        );
        assert_eq!(encoded.get_pixel(1, 1).0[0], 100);

        let opts = CodecOptions::default().with_capacity_policy(CapacityPolicy::Reject);
        match Embedder::new(&opts)
            .embed(&Message::from_text("abc"), &source)
            .err()
        {
            Some(SteganoError::ImageCapacityError(2, 2, 2, 3)) => (),
            e => panic!("unexpected result {e:?}"),
        }
    }

    #[test]
    fn should_reject_oversized_message_when_asked() {
        let source = prepare_2x2_flat_image();
        let opts = CodecOptions::default().with_capacity_policy(CapacityPolicy::Reject);
        let result = Embedder::new(&opts).embed(&Message::from_text("abcde"), &source);
        match result.err() {
            Some(SteganoError::ImageCapacityError(2, 2, 2, 5)) => (),
            e => panic!("unexpected result {e:?}"),
        }
    }

    #[test]
    fn should_use_one_pixel_per_char_with_row_major_index() {
        let source = prepare_2x2_flat_image();
        let opts = CodecOptions::default().with_linear_index(LinearIndex::RowMajor);
        let (encoded, report) = Embedder::new(&opts)
            .embed(&Message::from_text("abcd"), &source)
            .unwrap();
        assert_eq!(report.capacity, 4);
        assert_eq!(encoded.get_pixel(0, 0).0[0], 101);
        assert_eq!(encoded.get_pixel(1, 0).0[0], 102);
        assert_eq!(encoded.get_pixel(0, 1).0[0], 103);
        assert_eq!(encoded.get_pixel(1, 1).0[0], 104);
    }
}
