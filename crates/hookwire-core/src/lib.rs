// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Schema-driven derivation of the node/VM hook protocol.
//!
//! One declarative table of hook signatures ([`registry`]) drives five
//! generators ([`codegen`]) that together emit the complete typed
//! message-passing protocol between a blockchain node process and its
//! isolated WASM VM executor:
//!
//! - request/response message types plus the shared kind enumeration,
//! - server-side repliers that invoke the real hook implementation,
//! - the kind-indexed reply-slot dispatch table,
//! - the client-side gateway with bad-return fallback semantics,
//! - the kind-indexed message factory.
//!
//! The generated source compiles against the `hookwire-ipc` runtime crate;
//! the copies committed there are derived outputs kept in sync with the
//! generators by an up-to-date test.

pub mod codegen;
pub mod registry;

pub use codegen::{generate, CodeGenError, Target};
pub use registry::{HookSignature, ParamType, Registry, RegistryError};
