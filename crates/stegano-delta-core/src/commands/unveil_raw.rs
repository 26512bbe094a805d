use std::path::Path;

use crate::SteganoError;

/// unveil all raw data, no code table interpretation is happening.
/// Just a raw binary dump of the red channel deltas, one byte per pixel.
pub fn unveil_raw(
    secret_media: &Path,
    master: &Path,
    destination_file: &Path,
) -> Result<(), SteganoError> {
    crate::api::unveil_raw::prepare()
        .from_secret_file(secret_media)
        .with_master_image(master)
        .into_raw_file(destination_file)
        .execute()
}
