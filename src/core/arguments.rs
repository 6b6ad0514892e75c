// src/core/arguments.rs

use crate::{
    cli::prompt::{PromptError, Prompter},
    core::metadata,
    models::{ArgSpec, CollectedArguments},
};
use std::path::Path;

/// Asks for every argument `path` declares and returns the values in declaration order.
pub fn collect<P: Prompter + ?Sized>(
    path: &Path,
    prompter: &mut P,
) -> Result<CollectedArguments, PromptError> {
    collect_for_specs(&metadata::get_arg_specs(path), prompter)
}

/// Same as [`collect`], for specs that were already read.
///
/// No prompt is shown when `specs` is empty.
pub fn collect_for_specs<P: Prompter + ?Sized>(
    specs: &[ArgSpec],
    prompter: &mut P,
) -> Result<CollectedArguments, PromptError> {
    let mut values = Vec::with_capacity(specs.len());
    for spec in specs {
        let input = prompter.read_argument(&spec.prompt, &spec.default)?;
        values.push(resolve_value(&input, &spec.default));
    }
    Ok(values)
}

/// Trimmed input, or the default verbatim when nothing was typed.
fn resolve_value(input: &str, default: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}
