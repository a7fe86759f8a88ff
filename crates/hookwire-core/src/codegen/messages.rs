// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Message type generation.
//!
//! Emits the `MessageKind` enumeration (dense, zero-based, with the `ALL`
//! table and `from_u32`) and one request/response struct pair per hook.
//! Every struct embeds the envelope and derives `Default`, which is what
//! lets the factory build empty instances without per-type knowledge.

use std::fmt::Write;

use crate::registry::{HookSignature, Registry};

use super::util::{request_kind, request_type, response_kind, response_type, write_header};
use super::Result;

pub(crate) fn generate(registry: &Registry) -> Result<String> {
    let mut out = String::new();
    write_header(
        &mut out,
        "messages",
        "Request/response message types for every blockchain hook.",
    )?;
    writeln!(out, "use std::any::Any;")?;
    writeln!(out, "use std::collections::BTreeMap;")?;
    writeln!(out)?;
    writeln!(out, "use serde::{{Deserialize, Serialize}};")?;
    writeln!(out)?;
    writeln!(out, "use crate::common::message::{{Envelope, MessageHandler}};")?;
    writeln!(
        out,
        "use crate::common::model::{{ContractCallInput, EsdtToken, UserAccount, VmOutput}};"
    )?;
    writeln!(out, "use crate::error::WireError;")?;
    write_kind_enum(&mut out, registry)?;
    for signature in registry.signatures() {
        write_message_pair(&mut out, signature)?;
    }
    Ok(out)
}

fn write_kind_enum(out: &mut String, registry: &Registry) -> Result<()> {
    let names = registry.kind_names();
    writeln!(out)?;
    writeln!(
        out,
        "/// Total number of message kinds; the reply-slot and factory tables both"
    )?;
    writeln!(out, "/// have exactly this many slots.")?;
    writeln!(out, "pub const KIND_COUNT: usize = {};", registry.kind_count())?;
    writeln!(out)?;
    writeln!(out, "/// Identifies a message's concrete shape on the wire.")?;
    writeln!(
        out,
        "#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]"
    )?;
    writeln!(out, "#[repr(u32)]")?;
    writeln!(out, "pub enum MessageKind {{")?;
    for (value, name) in names.iter().enumerate() {
        if value == names.len() - 1 {
            writeln!(out, "    #[default]")?;
        }
        writeln!(out, "    {name} = {value},")?;
    }
    writeln!(out, "}}")?;
    writeln!(out)?;
    writeln!(out, "impl MessageKind {{")?;
    writeln!(out, "    /// Every kind, in wire-value order.")?;
    writeln!(out, "    pub const ALL: [MessageKind; KIND_COUNT] = [")?;
    for name in &names {
        writeln!(out, "        MessageKind::{name},")?;
    }
    writeln!(out, "    ];")?;
    writeln!(out)?;
    writeln!(out, "    /// Maps a raw wire tag back into the enumeration.")?;
    writeln!(out, "    #[must_use]")?;
    writeln!(out, "    pub fn from_u32(raw: u32) -> Option<MessageKind> {{")?;
    writeln!(out, "        MessageKind::ALL.get(raw as usize).copied()")?;
    writeln!(out, "    }}")?;
    writeln!(out, "}}")?;
    Ok(())
}

fn write_message_pair(out: &mut String, signature: &HookSignature) -> Result<()> {
    let request_fields: Vec<(String, String)> = signature
        .inputs
        .iter()
        .map(|(name, ty)| ((*name).to_string(), ty.rust_type().to_string()))
        .collect();
    write_struct(
        out,
        &format!("Request message for the `{}` hook.", signature.name),
        &request_type(signature),
        &request_kind(signature),
        &request_fields,
        false,
    )?;

    let response_fields: Vec<(String, String)> = signature
        .outputs
        .iter()
        .map(|(name, ty)| ((*name).to_string(), ty.rust_type().to_string()))
        .collect();
    write_struct(
        out,
        &format!("Response message for the `{}` hook.", signature.name),
        &response_type(signature),
        &response_kind(signature),
        &response_fields,
        signature.has_error,
    )?;
    Ok(())
}

fn write_struct(
    out: &mut String,
    doc: &str,
    type_name: &str,
    kind_name: &str,
    fields: &[(String, String)],
    has_error: bool,
) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "/// {doc}")?;
    writeln!(out, "#[derive(Debug, Default, Clone, Serialize, Deserialize)]")?;
    writeln!(out, "pub struct {type_name} {{")?;
    writeln!(out, "    #[serde(flatten)]")?;
    writeln!(out, "    pub envelope: Envelope,")?;
    for (name, rust_type) in fields {
        writeln!(out, "    pub {name}: {rust_type},")?;
    }
    writeln!(out, "}}")?;
    writeln!(out)?;
    writeln!(out, "impl {type_name} {{")?;
    writeln!(out, "    /// Creates the message with its kind tag stamped.")?;
    writeln!(out, "    #[must_use]")?;

    let mut params: Vec<(String, String)> = fields.to_vec();
    if has_error {
        params.push(("error".to_string(), "Option<WireError>".to_string()));
    }
    match params.len() {
        0 => writeln!(out, "    pub fn new() -> Self {{")?,
        1 => writeln!(
            out,
            "    pub fn new({}: {}) -> Self {{",
            params[0].0, params[0].1
        )?,
        _ => {
            writeln!(out, "    pub fn new(")?;
            for (name, rust_type) in &params {
                writeln!(out, "        {name}: {rust_type},")?;
            }
            writeln!(out, "    ) -> Self {{")?;
        }
    }
    writeln!(out, "        Self {{")?;
    if has_error {
        writeln!(
            out,
            "            envelope: Envelope::with_error(MessageKind::{kind_name}, error),"
        )?;
    } else {
        writeln!(
            out,
            "            envelope: Envelope::for_kind(MessageKind::{kind_name}),"
        )?;
    }
    for (name, _) in fields {
        writeln!(out, "            {name},")?;
    }
    writeln!(out, "        }}")?;
    writeln!(out, "    }}")?;
    writeln!(out, "}}")?;
    writeln!(out)?;
    writeln!(out, "impl MessageHandler for {type_name} {{")?;
    writeln!(out, "    fn envelope(&self) -> &Envelope {{")?;
    writeln!(out, "        &self.envelope")?;
    writeln!(out, "    }}")?;
    writeln!(out)?;
    writeln!(out, "    fn envelope_mut(&mut self) -> &mut Envelope {{")?;
    writeln!(out, "        &mut self.envelope")?;
    writeln!(out, "    }}")?;
    writeln!(out)?;
    writeln!(out, "    fn as_any(&self) -> &dyn Any {{")?;
    writeln!(out, "        self")?;
    writeln!(out, "    }}")?;
    writeln!(out)?;
    writeln!(out, "    fn into_any(self: Box<Self>) -> Box<dyn Any> {{")?;
    writeln!(out, "        self")?;
    writeln!(out, "    }}")?;
    writeln!(out, "}}")?;
    Ok(())
}
