use std::path::Path;

use crate::SteganoError;

/// hides the `secret` image inside of the `carrier` image and writes the result to `output`
pub fn merge(carrier: &Path, secret: &Path, output: &Path) -> Result<(), SteganoError> {
    crate::api::merge::prepare()
        .with_carrier(carrier)
        .with_secret(secret)
        .with_output(output)
        .execute()
}
