use std::path::PathBuf;

use clap::Args;
use stegano_delta_core::CodecOptions;

use crate::CliResult;

/// Unveils a text message by comparing an encoded image with its master
#[derive(Args, Debug)]
pub struct DecodeArgs {
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

    /// Number of characters to keep, the image does not know where the message ends
    #[arg(short = 'n', long = "length", value_name = "characters")]
    pub length: Option<usize>,

    /// The message will also be stored in this file
    #[arg(short = 'o', long = "out", value_name = "output file")]
    pub output_file: Option<PathBuf>,
}

impl DecodeArgs {
    pub fn run(self, options: CodecOptions) -> CliResult<()> {
        let message = stegano_delta_core::commands::unveil(
            &self.media,
            &self.master,
            self.length,
            self.output_file,
            options,
        )?;

        println!("received: {message}");

        Ok(())
    }
}
