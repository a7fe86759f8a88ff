// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Reply-slot table generation.
//!
//! The table has one slot per message kind. Request kinds point at their
//! generated replier; every other slot keeps the no-op fallback, so an
//! unregistered kind is answered rather than crashing the node.

use std::fmt::Write;

use crate::registry::Registry;

use super::util::{method_name, request_kind, write_header};
use super::Result;

pub(crate) fn generate(registry: &Registry) -> Result<String> {
    let mut out = String::new();
    write_header(
        &mut out,
        "reply-slots",
        "Kind-indexed dispatch table wiring each request kind to its replier.",
    )?;
    writeln!(out, "use crate::common::messages::{{MessageKind, KIND_COUNT}};")?;
    writeln!(out, "use crate::node::repliers::*;")?;
    writeln!(out, "use crate::node::{{noop_replier, Replier}};")?;
    writeln!(out)?;
    writeln!(out, "/// Builds the reply-slot table for the node side.")?;
    writeln!(out, "///")?;
    writeln!(
        out,
        "/// Every slot starts as the no-op replier; each hook's request-kind slot"
    )?;
    writeln!(
        out,
        "/// is then overridden with its generated handler. Response kinds are never"
    )?;
    writeln!(out, "/// dispatched, so their slots keep the no-op replier.")?;
    writeln!(out, "#[must_use]")?;
    writeln!(out, "pub fn create_reply_slots() -> [Replier; KIND_COUNT] {{")?;
    writeln!(
        out,
        "    let mut slots: [Replier; KIND_COUNT] = [noop_replier; KIND_COUNT];"
    )?;
    for signature in registry.signatures() {
        writeln!(
            out,
            "    slots[MessageKind::{} as usize] = reply_to_{};",
            request_kind(signature),
            method_name(signature)
        )?;
    }
    writeln!(out, "    slots")?;
    writeln!(out, "}}")?;
    Ok(out)
}
