// src/core/metadata.rs

//! Reads the marker lines of a script file.
//!
//! Nothing in here reports an error: a file that cannot be opened, cannot be read to
//! the end, or holds bytes that are not UTF-8 simply has less (or no) metadata.

use crate::{
    constants::METADATA_SCAN_LIMIT,
    core::markers,
    models::{ArgSpec, ScriptMetadata},
};
use log::debug;
use std::{
    fs::File,
    io::{BufRead, BufReader, Read},
    path::Path,
};

/// Decoded lines of the first [`METADATA_SCAN_LIMIT`] bytes of `path`, lazily.
///
/// The iterator ends at the first read error. Lines that are not valid UTF-8 are
/// skipped so one binary chunk cannot hide markers further down.
fn text_lines(path: &Path) -> impl Iterator<Item = String> {
    let reader = match File::open(path) {
        // The cap also bounds how much a newline-free run can buffer.
        Ok(file) => Some(BufReader::new(file.take(METADATA_SCAN_LIMIT))),
        Err(e) => {
            debug!("No metadata for '{}': {}", path.display(), e);
            None
        }
    };

    reader
        .into_iter()
        .flat_map(|reader| reader.split(b'\n'))
        .map_while(Result::ok)
        .filter_map(|bytes| String::from_utf8(bytes).ok())
}

/// The file name of `path`, used whenever a script has no label.
pub fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Value of the first `# LABEL:` line, or the file's base name when that value is
/// empty or there is no such line.
pub fn get_label(path: &Path) -> String {
    let first = text_lines(path).find_map(|line| markers::parse_label(&line).map(str::to_string));
    label_or_base_name(first, path)
}

fn label_or_base_name(label: Option<String>, path: &Path) -> String {
    label
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| base_name(path))
}

/// Every well-formed `# ARG:` line, in file order. Duplicates are kept.
pub fn get_arg_specs(path: &Path) -> Vec<ArgSpec> {
    text_lines(path)
        .filter_map(|line| markers::parse_arg_spec(&line))
        .collect()
}

/// True when some `# SUDO:` line carries exactly `true`.
pub fn needs_elevation(path: &Path) -> bool {
    text_lines(path).any(|line| markers::parse_elevation(&line) == Some(true))
}

/// All three lookups in a single pass over the file.
pub fn read_metadata(path: &Path) -> ScriptMetadata {
    let mut label: Option<String> = None;
    let mut requires_elevation = false;
    let mut argument_specs = Vec::new();

    for line in text_lines(path) {
        if label.is_none() {
            label = markers::parse_label(&line).map(str::to_string);
        }
        if markers::parse_elevation(&line) == Some(true) {
            requires_elevation = true;
        }
        if let Some(spec) = markers::parse_arg_spec(&line) {
            argument_specs.push(spec);
        }
    }

    ScriptMetadata {
        label: label_or_base_name(label, path),
        requires_elevation,
        argument_specs,
    }
}
