pub mod decoder;
pub mod encoder;
mod iterators;

pub use decoder::{DeltaSequence, Extractor, PixelDelta};
pub use encoder::{EmbedReport, Embedder};
