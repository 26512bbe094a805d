use std::path::{Path, PathBuf};

use crate::{CodecOptions, SteganoError};

pub fn unveil(
    secret_media: &Path,
    master: &Path,
    length: Option<usize>,
    output_file: Option<PathBuf>,
    options: CodecOptions,
) -> Result<String, SteganoError> {
    crate::api::unveil::prepare()
        .with_options(options)
        .from_secret_file(secret_media)
        .with_master_image(master)
        .use_limit(length)
        .use_output_file(output_file)
        .execute()
}
