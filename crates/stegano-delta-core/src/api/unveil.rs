use std::{
    fs::File,
    io::Write,
    path::{Path, PathBuf},
};

use log::{error, info};

use crate::{
    media::{image::Extractor, Media},
    CodecOptions, SteganoError,
};

pub fn prepare() -> UnveilApi {
    UnveilApi::default()
}

#[derive(Default, Debug)]
pub struct UnveilApi {
    secret_media: Option<PathBuf>,
    master_media: Option<PathBuf>,
    output_file: Option<PathBuf>,
    limit: Option<usize>,
    options: CodecOptions,
}

impl UnveilApi {
    /// Use the given codec options
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    /// This is the secret image that contains the data to be unveiled
    pub fn from_secret_file(mut self, secret_image: impl AsRef<Path>) -> Self {
        self.secret_media = Some(secret_image.as_ref().to_path_buf());
        self
    }

    /// This is the untouched original of the secret image
    pub fn with_master_image(mut self, master_image: impl AsRef<Path>) -> Self {
        self.master_media = Some(master_image.as_ref().to_path_buf());
        self
    }

    /// Keep only the first `length` characters, the message length is not stored in the image
    pub fn limit_to(mut self, length: usize) -> Self {
        self.limit = Some(length);
        self
    }

    pub fn use_limit(mut self, length: Option<usize>) -> Self {
        self.limit = length;
        self
    }

    /// The unveiled text will also be written to this file
    pub fn into_output_file(mut self, output_file: impl AsRef<Path>) -> Self {
        self.output_file = Some(output_file.as_ref().to_path_buf());
        self
    }

    pub fn use_output_file(mut self, output_file: Option<PathBuf>) -> Self {
        self.output_file = output_file;
        self
    }

    /// Execute the unveil process and blocks until it is finished
    pub fn execute(self) -> Result<String, SteganoError> {
        let Some(secret_media) = self.secret_media else {
            return Err(SteganoError::CarrierNotSet);
        };
        let Some(master_media) = self.master_media else {
            return Err(SteganoError::MasterNotSet);
        };

        let encoded = Media::from_file(&secret_media)?;
        let master = Media::from_file(&master_media)?;
        let mut text = Extractor::new(&self.options).extract(encoded.image(), master.image())?;

        if let Some(limit) = self.limit {
            if let Some((idx, _)) = text.char_indices().nth(limit) {
                text.truncate(idx);
            }
        }
        info!("Unveiled {} characters from {:?}", text.chars().count(), secret_media);

        if let Some(output_file) = self.output_file {
            let mut target_file = File::create(&output_file).map_err(|source| {
                error!("Error creating file {output_file:?}: {source}");
                SteganoError::WriteError { source }
            })?;

            target_file.write_all(text.as_bytes()).map_err(|source| {
                error!("Error writing message to {output_file:?}: {source}");
                SteganoError::WriteError { source }
            })?;
        }

        Ok(text)
    }
}
