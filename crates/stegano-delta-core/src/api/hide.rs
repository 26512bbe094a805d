use std::path::{Path, PathBuf};

use log::info;

use crate::media::image::{EmbedReport, Embedder};
use crate::media::{Media, Persist};
use crate::{CodecOptions, Message, SteganoError};

pub fn prepare() -> HideApi {
    HideApi::default()
}

#[derive(Default, Debug)]
pub struct HideApi {
    message: Option<String>,
    image: Option<PathBuf>,
    output: Option<PathBuf>,
    options: CodecOptions,
}

impl HideApi {
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_message(mut self, message: &str) -> Self {
        self.message = Some(message.to_string());
        self
    }

    pub fn use_message<S: AsRef<str>>(mut self, message: Option<S>) -> Self {
        self.message = message.map(|s| s.as_ref().to_string());
        self
    }

    /// This is the master image, it is only read
    pub fn with_image<A: AsRef<Path>>(mut self, image: A) -> Self {
        self.image = Some(image.as_ref().to_path_buf());
        self
    }

    /// The encoded image will be written to this file
    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    pub fn execute(self) -> Result<EmbedReport, SteganoError> {
        let Some(message) = self.message else {
            return Err(SteganoError::MissingMessage);
        };
        let Some(image) = self.image else {
            return Err(SteganoError::CarrierNotSet);
        };
        let Some(output) = self.output else {
            return Err(SteganoError::TargetNotSet);
        };

        let master = Media::from_file(&image)?;
        let message = Message::from_text(&message);
        let (encoded, report) = Embedder::new(&self.options).embed(&message, master.image())?;

        Media::from_image(encoded).save_as(&output)?;
        let (width, height) = master.dimensions();
        info!(
            "Hid {} characters in {:?} ({width}x{height}), written to {:?}",
            report.embedded, image, output
        );

        Ok(report)
    }
}
