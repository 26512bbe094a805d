use std::path::PathBuf;

use clap::Args;
use stegano_delta_core::CodecOptions;

use crate::CliResult;

/// Hides a text message in a PNG image
#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Master image, used readonly. Keep it, unveiling needs it.
    #[arg(
        short = 'M',
        long = "master-path",
        value_name = "master image file",
        required = true
    )]
    pub master: PathBuf,

    /// Final image will be stored as file
    #[arg(
        short = 'o',
        long = "encoded-path",
        value_name = "output image file",
        required = true
    )]
    pub write_to_file: PathBuf,

    /// A text message that will be hidden, letters, space and . , ! " ' ? newline tab
    #[arg(short, long, value_name = "text message", required = true)]
    pub message: String,
}

impl EncodeArgs {
    pub fn run(self, options: CodecOptions) -> CliResult<()> {
        let report = stegano_delta_core::commands::hide(
            &self.master,
            &self.write_to_file,
            Some(self.message),
            options,
        )?;

        if report.is_truncated() {
            eprintln!(
                "Message was truncated, {} of {} characters did not fit into the image",
                report.dropped,
                report.embedded + report.dropped
            );
        }

        Ok(())
    }
}
