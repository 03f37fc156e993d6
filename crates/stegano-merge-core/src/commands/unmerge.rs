use std::path::Path;

use crate::SteganoError;

pub fn unmerge(merged_image: &Path, output: &Path) -> Result<(), SteganoError> {
    crate::api::unmerge::prepare()
        .from_merged_image(merged_image)
        .with_output(output)
        .execute()
}
