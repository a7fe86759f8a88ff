// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! The five protocol generators.
//!
//! Each generator is one deterministic pass over a [`Registry`] producing a
//! complete Rust source file as a `String`. The registry is the single
//! source of truth: nothing here invents protocol facts, it only spells out
//! what the signature table already implies.
//!
//! Generation is pure string building over [`std::fmt::Write`]; identical
//! registries always produce identical bytes.

pub mod factory;
pub mod gateway;
pub mod messages;
pub mod repliers;
pub mod reply_slots;
pub mod util;

#[cfg(test)]
mod tests;

use thiserror::Error;

use crate::registry::{Registry, RegistryError};

/// Errors that can occur during code generation.
#[derive(Debug, Error)]
pub enum CodeGenError {
    /// The signature table violates its own invariants.
    #[error(transparent)]
    Registry(#[from] RegistryError),
    /// String formatting failed while emitting source.
    #[error("formatting error: {0}")]
    Format(#[from] std::fmt::Error),
}

/// Result type for code generation operations.
pub type Result<T> = std::result::Result<T, CodeGenError>;

/// One generated artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// Request/response message types plus the kind enumeration.
    Messages,
    /// Server-side repliers, one per hook.
    Repliers,
    /// The kind-indexed reply-slot dispatch table.
    ReplySlots,
    /// The client-side gateway.
    Gateway,
    /// The kind-indexed message factory.
    Factory,
}

impl Target {
    /// Every target, in the order `all` emits them.
    pub const ALL: [Target; 5] = [
        Target::Messages,
        Target::Repliers,
        Target::ReplySlots,
        Target::Gateway,
        Target::Factory,
    ];

    /// File name of the artifact inside the runtime crate.
    #[must_use]
    pub fn file_name(self) -> &'static str {
        match self {
            Target::Messages => "messages.rs",
            Target::Repliers => "repliers.rs",
            Target::ReplySlots => "reply_slots.rs",
            Target::Gateway => "gateway.rs",
            Target::Factory => "factory.rs",
        }
    }

    /// The subcommand / `@generated` marker name for this target.
    #[must_use]
    pub fn command_name(self) -> &'static str {
        match self {
            Target::Messages => "messages",
            Target::Repliers => "repliers",
            Target::ReplySlots => "reply-slots",
            Target::Gateway => "gateway",
            Target::Factory => "factory",
        }
    }
}

/// Generates the source of one artifact from the given registry.
///
/// The registry is validated first; a schema defect fails the whole run
/// rather than producing a half-consistent protocol.
pub fn generate(registry: &Registry, target: Target) -> Result<String> {
    registry.validate()?;
    match target {
        Target::Messages => messages::generate(registry),
        Target::Repliers => repliers::generate(registry),
        Target::ReplySlots => reply_slots::generate(registry),
        Target::Gateway => gateway::generate(registry),
        Target::Factory => factory::generate(registry),
    }
}
