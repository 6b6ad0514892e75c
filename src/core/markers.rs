// src/core/markers.rs

//! Line-level parsers for the comment markers a script can carry.
//!
//! Each function looks at exactly one line and knows nothing about files, so the
//! micro-language can be tested without touching the filesystem.

use crate::{
    constants::{ARG_MARKER, LABEL_MARKER, SUDO_ENABLED_VALUE, SUDO_MARKER},
    models::ArgSpec,
};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref ARG_LINE_RE: Regex =
        Regex::new(r#"^# ARG:\s*(\S+)\s+"([^"]*)"\s+"([^"]*)""#).expect("valid ARG regex");
}

/// Returns the trimmed value after `marker` when the trimmed line starts with it.
fn marker_value<'a>(line: &'a str, marker: &str) -> Option<&'a str> {
    line.trim().strip_prefix(marker).map(str::trim)
}

/// `# LABEL:<text>` → `<text>`.
///
/// A marker with nothing after it yields `Some("")`: it is still the label line,
/// callers decide what an empty label means.
pub fn parse_label(line: &str) -> Option<&str> {
    marker_value(line, LABEL_MARKER)
}

/// `# SUDO:<value>` → whether `<value>` is exactly `true`.
///
/// Returns `None` for lines that are not `SUDO` markers at all.
pub fn parse_elevation(line: &str) -> Option<bool> {
    marker_value(line, SUDO_MARKER).map(|value| value == SUDO_ENABLED_VALUE)
}

/// `# ARG: <name> "<prompt>" "<default>"` → an `ArgSpec`.
///
/// Lines that start with the marker but do not follow the shape are ignored.
pub fn parse_arg_spec(line: &str) -> Option<ArgSpec> {
    let trimmed = line.trim();
    if !trimmed.starts_with(ARG_MARKER) {
        return None;
    }
    let caps = ARG_LINE_RE.captures(trimmed)?;
    Some(ArgSpec {
        name: caps.get(1)?.as_str().to_string(),
        prompt: caps.get(2)?.as_str().to_string(),
        default: caps.get(3)?.as_str().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_is_trimmed() {
        assert_eq!(parse_label("# LABEL:Run Backup"), Some("Run Backup"));
        assert_eq!(parse_label("   # LABEL:   Spaced out  \n"), Some("Spaced out"));
    }

    #[test]
    fn test_label_requires_exact_marker() {
        assert_eq!(parse_label("# label:lower"), None);
        assert_eq!(parse_label("#LABEL:no space"), None);
        assert_eq!(parse_label("echo '# LABEL:inline'"), None);
    }

    #[test]
    fn test_empty_label_is_still_a_label_line() {
        assert_eq!(parse_label("# LABEL:"), Some(""));
        assert_eq!(parse_label("# LABEL:   "), Some(""));
    }

    #[test]
    fn test_elevation_only_accepts_literal_true() {
        assert_eq!(parse_elevation("# SUDO:true"), Some(true));
        assert_eq!(parse_elevation("# SUDO: true "), Some(true));
        assert_eq!(parse_elevation("# SUDO:True"), Some(false));
        assert_eq!(parse_elevation("# SUDO:TRUE"), Some(false));
        assert_eq!(parse_elevation("# SUDO:yes"), Some(false));
        assert_eq!(parse_elevation("# SUDO:false"), Some(false));
        assert_eq!(parse_elevation("#!/bin/sh"), None);
    }

    #[test]
    fn test_arg_spec_full_shape() {
        let spec = parse_arg_spec(r#"# ARG: dest "Destination" "/tmp""#).unwrap();
        assert_eq!(spec.name, "dest");
        assert_eq!(spec.prompt, "Destination");
        assert_eq!(spec.default, "/tmp");
    }

    #[test]
    fn test_arg_spec_allows_empty_and_spaced_strings() {
        let spec = parse_arg_spec(r#"  # ARG:count   "How many, exactly?"  """#).unwrap();
        assert_eq!(spec.name, "count");
        assert_eq!(spec.prompt, "How many, exactly?");
        assert_eq!(spec.default, "");
    }

    #[test]
    fn test_malformed_arg_lines_are_skipped() {
        assert!(parse_arg_spec(r#"# ARG: dest "Destination""#).is_none());
        assert!(parse_arg_spec(r#"# ARG: "Destination" "/tmp""#).is_none());
        assert!(parse_arg_spec(r#"# ARG: dest Destination /tmp"#).is_none());
        assert!(parse_arg_spec(r#"# arg: dest "Destination" "/tmp""#).is_none());
    }
}
