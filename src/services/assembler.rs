use crate::models::{DownloadError, StandardJsonInput};
use crate::utils::write_file;
use std::path::{Component, Path, PathBuf};
use tracing::warn;

pub const FLAT_FILE_NAME: &str = "contract.sol";
pub const REMAPPINGS_FILE_NAME: &str = "remappings";

/// Reconstructs a standard JSON bundle under `root/<address>`.
///
/// `code` is the raw `SourceCode` value. Etherscan wraps the compiler input in one
/// extra pair of braces, so exactly one character is dropped from each end before
/// parsing. Source keys are used as relative paths without sanitization.
pub fn write_standard_json(
    code: &str,
    address: &str,
    root: &Path,
) -> Result<Vec<PathBuf>, DownloadError> {
    let inner = strip_outer(code);
    let input: StandardJsonInput =
        serde_json::from_str(inner).map_err(DownloadError::MalformedPayload)?;

    let mut written = Vec::with_capacity(input.sources.len() + 1);
    for (filename, source) in &input.sources {
        let path = root.join(format!("{}/{}", address, filename));
        if Path::new(filename)
            .components()
            .any(|c| matches!(c, Component::ParentDir))
        {
            warn!("Source path {} escapes the contract directory", filename);
        }
        write_file(&path, &source.content)?;
        written.push(path);
    }

    let remappings = root.join(address).join(REMAPPINGS_FILE_NAME);
    write_file(&remappings, &input.settings.remappings.join("\n"))?;
    written.push(remappings);

    Ok(written)
}

/// Writes a flattened source verbatim to `root/<address>/contract.sol`.
pub fn write_flat(code: &str, address: &str, root: &Path) -> Result<PathBuf, DownloadError> {
    let path = root.join(address).join(FLAT_FILE_NAME);
    write_file(&path, code)?;
    Ok(path)
}

fn strip_outer(code: &str) -> &str {
    let mut chars = code.chars();
    chars.next();
    chars.next_back();
    chars.as_str()
}
