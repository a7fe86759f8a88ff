// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Factory generation.
//!
//! A kind-indexed table of zero-argument creators, one per message kind.
//! The factory is how the receiving side turns a raw wire tag into an empty
//! instance of the right concrete type before decoding fields into it.

use std::fmt::Write;

use crate::registry::Registry;

use super::util::{request_kind, request_type, response_kind, response_type, snake_case, write_header};
use super::Result;

pub(crate) fn generate(registry: &Registry) -> Result<String> {
    let mut out = String::new();
    write_header(
        &mut out,
        "factory",
        "Kind-indexed factory reconstructing message instances from wire tags.",
    )?;
    writeln!(out, "use crate::common::message::{{")?;
    writeln!(
        out,
        "    MessageContractCallRequest, MessageContractDeployRequest, MessageContractResponse,"
    )?;
    writeln!(
        out,
        "    MessageDiagnoseWaitRequest, MessageDiagnoseWaitResponse, MessageHandler,"
    )?;
    writeln!(out, "    MessageInitialize, MessageStop, MessageUndefined,")?;
    writeln!(out, "}};")?;
    writeln!(out, "use crate::common::messages::*;")?;
    writeln!(out)?;
    writeln!(out, "/// A zero-argument constructor for one concrete message type.")?;
    writeln!(out, "type MessageCreator = fn() -> Box<dyn MessageHandler>;")?;
    writeln!(out)?;
    writeln!(out, "/// One creator per kind, indexed by the kind's wire value.")?;
    writeln!(
        out,
        "static MESSAGE_CREATORS: [MessageCreator; KIND_COUNT] = ["
    )?;
    for entry in creator_names(registry) {
        writeln!(out, "    {entry},")?;
    }
    writeln!(out, "];")?;
    writeln!(out)?;
    writeln!(out, "/// Materializes an empty message for a raw wire-level kind tag.")?;
    writeln!(out, "///")?;
    writeln!(
        out,
        "/// The returned instance has the kind stamped, so `message.kind()` is"
    )?;
    writeln!(
        out,
        "/// valid before any fields are decoded. Tags outside the enumeration"
    )?;
    writeln!(out, "/// yield an undefined message rather than failing.")?;
    writeln!(out, "#[must_use]")?;
    writeln!(out, "pub fn create_message(kind: u32) -> Box<dyn MessageHandler> {{")?;
    writeln!(out, "    let Some(kind) = MessageKind::from_u32(kind) else {{")?;
    writeln!(out, "        return create_undefined_message();")?;
    writeln!(out, "    }};")?;
    writeln!(out, "    let mut message = MESSAGE_CREATORS[kind as usize]();")?;
    writeln!(out, "    message.set_kind(kind);")?;
    writeln!(out, "    message")?;
    writeln!(out, "}}")?;
    for (creator, type_name) in creator_functions(registry) {
        writeln!(out)?;
        writeln!(out, "fn {creator}() -> Box<dyn MessageHandler> {{")?;
        writeln!(out, "    Box::new({type_name}::default())")?;
        writeln!(out, "}}")?;
    }
    Ok(out)
}

/// Creator table entries in wire-value order.
fn creator_names(registry: &Registry) -> Vec<String> {
    let mut names: Vec<String> = crate::registry::FIXED_KINDS
        .iter()
        .map(|kind| format!("create_message_{}", snake_case(kind)))
        .collect();
    for signature in registry.signatures() {
        names.push(format!("create_message_{}", snake_case(&request_kind(signature))));
        names.push(format!("create_message_{}", snake_case(&response_kind(signature))));
    }
    names.push("create_undefined_message".to_string());
    names
}

/// `(creator function, concrete message type)` pairs in wire-value order.
fn creator_functions(registry: &Registry) -> Vec<(String, String)> {
    let mut pairs: Vec<(String, String)> = crate::registry::FIXED_KINDS
        .iter()
        .map(|kind| {
            (
                format!("create_message_{}", snake_case(kind)),
                format!("Message{kind}"),
            )
        })
        .collect();
    for signature in registry.signatures() {
        pairs.push((
            format!("create_message_{}", snake_case(&request_kind(signature))),
            request_type(signature),
        ));
        pairs.push((
            format!("create_message_{}", snake_case(&response_kind(signature))),
            response_type(signature),
        ));
    }
    pairs.push(("create_undefined_message".to_string(), "MessageUndefined".to_string()));
    pairs
}
