use std::path::PathBuf;

use clap::Args;

/// Dumps the red channel deltas as raw bytes, one per pixel
#[derive(Args, Debug)]
pub struct DecodeRawArgs {
    /// Image that contains the secret message
    #[arg(
        short = 'i',
        long = "encoded-path",
        value_name = "encoded image file",
        required = true
    )]
    pub media: PathBuf,

    /// The original image the secret image was made from
    #[arg(
        short = 'M',
        long = "master-path",
        value_name = "master image file",
        required = true
    )]
    pub master: PathBuf,

    /// Raw data will be stored as binary file
    #[arg(short = 'o', long = "out", value_name = "output file", required = true)]
    pub output_file: PathBuf,
}

impl DecodeRawArgs {
    pub fn run(self) -> crate::CliResult<()> {
        stegano_delta_core::commands::unveil_raw(&self.media, &self.master, &self.output_file)
    }
}
