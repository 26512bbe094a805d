use image::{Rgba, RgbaImage};
use log::debug;

use crate::media::image::iterators::Transpose;
use crate::media::{CodecOptions, LinearIndex};
use crate::{CodeTable, Result, SteganoError};

/// Channel wise difference between an encoded and a master pixel, wrapping at 256.
///
/// Only `red` carries data, the other channels are kept for inspection.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PixelDelta {
    pub x: u32,
    pub y: u32,
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl PixelDelta {
    pub fn between(x: u32, y: u32, encoded: &Rgba<u8>, master: &Rgba<u8>) -> Self {
        let [er, eg, eb, ea] = encoded.0;
        let [mr, mg, mb, ma] = master.0;
        Self {
            x,
            y,
            red: er.wrapping_sub(mr),
            green: eg.wrapping_sub(mg),
            blue: eb.wrapping_sub(mb),
            alpha: ea.wrapping_sub(ma),
        }
    }
}

/// All pixel deltas of an image pair, in column wise traversal order
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DeltaSequence {
    width: u32,
    deltas: Vec<PixelDelta>,
}

impl DeltaSequence {
    pub fn len(&self) -> usize {
        self.deltas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deltas.is_empty()
    }

    pub fn red(&self) -> impl Iterator<Item = u8> + '_ {
        self.deltas.iter().map(|d| d.red)
    }

    /// the red deltas as plain bytes
    pub fn as_raw_bytes(&self) -> Vec<u8> {
        self.red().collect()
    }

    /// Turns the red deltas back into text.
    ///
    /// With a bijective index the characters are put in message order,
    /// otherwise they come in traversal order, one per pixel.
    pub fn decode(&self, linear_index: LinearIndex) -> String {
        if !linear_index.is_bijective() {
            return self.red().filter_map(CodeTable::char_of).collect();
        }

        let mut ordered = vec![0_u8; self.deltas.len()];
        for d in self.deltas.iter() {
            let k = linear_index.index_of(d.x, d.y, self.width);
            if let Some(slot) = ordered.get_mut(k) {
                *slot = d.red;
            }
        }

        ordered.into_iter().filter_map(CodeTable::char_of).collect()
    }
}

/// Recovers a message by diffing an encoded image against its master.
///
/// ## Example of usage
/// ```rust
/// use image::{Rgba, RgbaImage};
/// use stegano_delta_core::media::image::decoder::Extractor;
/// use stegano_delta_core::CodecOptions;
///
/// let master = RgbaImage::from_pixel(1, 2, Rgba([100, 50, 50, 255]));
/// let mut encoded = master.clone();
/// encoded.put_pixel(0, 0, Rgba([108, 50, 50, 255]));
/// encoded.put_pixel(0, 1, Rgba([109, 50, 50, 255]));
///
/// let msg = Extractor::new(&CodecOptions::default())
///     .extract(&encoded, &master)
///     .expect("Cannot extract message");
/// assert_eq!(msg, "hi");
/// ```
pub struct Extractor<'o> {
    options: &'o CodecOptions,
}

impl<'o> Extractor<'o> {
    pub fn new(options: &'o CodecOptions) -> Self {
        Self { options }
    }

    pub fn deltas(&self, encoded: &RgbaImage, master: &RgbaImage) -> Result<DeltaSequence> {
        let (width, height) = encoded.dimensions();
        let (master_width, master_height) = master.dimensions();
        if (width, height) != (master_width, master_height) {
            return Err(SteganoError::SizeMismatch(
                width,
                height,
                master_width,
                master_height,
            ));
        }

        let deltas: Vec<PixelDelta> = Transpose::from_rows(encoded.rows(), width, height)
            .zip(Transpose::from_rows(master.rows(), width, height))
            .map(|((x, y, e), (_, _, m))| PixelDelta::between(x, y, e, m))
            .collect();
        debug!("collected {} pixel deltas from {width}x{height} pixels", deltas.len());

        Ok(DeltaSequence { width, deltas })
    }

    pub fn extract(&self, encoded: &RgbaImage, master: &RgbaImage) -> Result<String> {
        Ok(self
            .deltas(encoded, master)?
            .decode(self.options.linear_index))
    }
}
