use std::path::Path;

use crate::media::image::EmbedReport;
use crate::{CodecOptions, SteganoError};

pub fn hide(
    master: &Path,
    write_to_file: &Path,
    message: Option<String>,
    options: CodecOptions,
) -> Result<EmbedReport, SteganoError> {
    crate::api::hide::prepare()
        .with_options(options)
        .with_image(master)
        .with_output(write_to_file)
        .use_message(message)
        .execute()
}
