// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Name derivation and shared emission helpers.
//!
//! All identifier spelling happens here so the five generators agree with
//! each other and with the hand-written runtime by construction.

use std::fmt::Write;

use crate::registry::HookSignature;

use super::Result;

/// Converts a PascalCase hook name to snake_case.
///
/// Acronym runs stay together: `GetESDTToken` becomes `get_esdt_token`,
/// `LastTimeStamp` becomes `last_time_stamp`.
#[must_use]
pub fn snake_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if c.is_ascii_uppercase() {
            let after_lower = i > 0 && chars[i - 1].is_ascii_lowercase();
            let ends_acronym = i > 0
                && chars[i - 1].is_ascii_uppercase()
                && chars.get(i + 1).is_some_and(char::is_ascii_lowercase);
            if after_lower || ends_acronym {
                out.push('_');
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Snake_case method/function stem for a hook, e.g. `get_storage_data`.
#[must_use]
pub fn method_name(signature: &HookSignature) -> String {
    snake_case(signature.name)
}

/// Request kind variant name, e.g. `GetStorageDataRequest`.
#[must_use]
pub fn request_kind(signature: &HookSignature) -> String {
    format!("{}Request", signature.name)
}

/// Response kind variant name, e.g. `GetStorageDataResponse`.
#[must_use]
pub fn response_kind(signature: &HookSignature) -> String {
    format!("{}Response", signature.name)
}

/// Request message type name, e.g. `MessageGetStorageDataRequest`.
#[must_use]
pub fn request_type(signature: &HookSignature) -> String {
    format!("Message{}Request", signature.name)
}

/// Response message type name, e.g. `MessageGetStorageDataResponse`.
#[must_use]
pub fn response_type(signature: &HookSignature) -> String {
    format!("Message{}Response", signature.name)
}

/// Writes the common artifact preamble: license lines, the `@generated`
/// marker, and the module doc line. Ends with a blank line.
pub fn write_header(out: &mut String, command: &str, summary: &str) -> Result<()> {
    writeln!(out, "// Copyright 2026 James Casey")?;
    writeln!(out, "// SPDX-License-Identifier: Apache-2.0")?;
    writeln!(out)?;
    writeln!(
        out,
        "// @generated by `hookwire {command}` from the hook signature registry."
    )?;
    writeln!(out, "// Do not edit by hand; regenerate instead.")?;
    writeln!(out)?;
    writeln!(out, "//! {summary}")?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snake_case_splits_word_boundaries() {
        assert_eq!(snake_case("NewAddress"), "new_address");
        assert_eq!(snake_case("LastTimeStamp"), "last_time_stamp");
        assert_eq!(snake_case("Stop"), "stop");
    }

    #[test]
    fn snake_case_keeps_acronym_runs_together() {
        assert_eq!(snake_case("GetESDTToken"), "get_esdt_token");
        assert_eq!(snake_case("ProcessBuiltInFunction"), "process_built_in_function");
    }
}
