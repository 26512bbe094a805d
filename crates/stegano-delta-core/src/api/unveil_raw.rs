use std::{
    fs::File,
    io::Write,
    path::{Path, PathBuf},
};

use log::error;

use crate::{
    media::{image::Extractor, Media},
    CodecOptions, SteganoError,
};

pub fn prepare() -> UnveilRawApi {
    UnveilRawApi::default()
}

/// Dumps the red channel deltas as they are, one byte per pixel in traversal order.
/// No interpretation via the code table is happening.
#[derive(Default, Debug)]
pub struct UnveilRawApi {
    secret_media: Option<PathBuf>,
    master_media: Option<PathBuf>,
    destination_file: Option<PathBuf>,
}

impl UnveilRawApi {
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

    /// This is the raw file where all data will be saved to
    pub fn into_raw_file(mut self, destination_file: impl AsRef<Path>) -> Self {
        self.destination_file = Some(destination_file.as_ref().to_path_buf());
        self
    }

    pub fn execute(self) -> Result<(), SteganoError> {
        let Some(secret_media) = self.secret_media else {
            return Err(SteganoError::CarrierNotSet);
        };
        let Some(master_media) = self.master_media else {
            return Err(SteganoError::MasterNotSet);
        };
        let Some(destination_file) = self.destination_file else {
            return Err(SteganoError::TargetNotSet);
        };

        let encoded = Media::from_file(&secret_media)?;
        let master = Media::from_file(&master_media)?;
        let deltas = Extractor::new(&CodecOptions::default()).deltas(encoded.image(), master.image())?;

        let mut target_file = File::create(&destination_file).map_err(|source| {
            error!("Error creating file {destination_file:?}: {source}");
            SteganoError::WriteError { source }
        })?;

        target_file
            .write_all(deltas.as_raw_bytes().as_slice())
            .map_err(|source| {
                error!("Error writing raw data to {destination_file:?}: {source}");
                SteganoError::WriteError { source }
            })
    }
}
