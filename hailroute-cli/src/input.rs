//! Capability-based reading of CLI input files.

use std::io::{ErrorKind, Read};

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8};

use crate::CliError;

/// Read `path` into a string, rejecting missing paths and directories.
///
/// `field` names the CLI option the path came from and is echoed in errors.
pub(crate) fn read_input(path: &Utf8Path, field: &'static str) -> Result<String, CliError> {
    let mut file = fs_utf8::File::open_ambient(path, ambient_authority()).map_err(|source| {
        if source.kind() == ErrorKind::NotFound {
            CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            }
        } else {
            CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }
        }
    })?;
    let metadata = file
        .metadata()
        .map_err(|source| CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        })?;
    if !metadata.is_file() {
        return Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        });
    }

    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .map_err(|source| CliError::ReadInput {
            field,
            path: path.to_path_buf(),
            source,
        })?;
    log::debug!("read {} bytes of {field} from {path}", contents.len());
    Ok(contents)
}
