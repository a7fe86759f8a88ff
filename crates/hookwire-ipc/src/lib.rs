// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Typed message-passing protocol between a blockchain node process and its
//! isolated WASM VM executor.
//!
//! The node owns chain state and answers blockchain hooks; the VM asks. The
//! whole request/response surface is derived from the signature registry in
//! `hookwire-core`; the modules marked `@generated` here are committed
//! derived outputs, kept in sync with the generators by a test.
//!
//! Layout:
//!
//! - [`common`] — the message envelope, the fixed non-hook messages, the
//!   generated hook messages, the wire-facing domain types, and the factory.
//! - [`node`] — the serving side: repliers, the reply-slot dispatch table.
//! - [`vm`] — the calling side: the [`vm::Transport`] seam and the gateway.
//! - [`hooks`] — the [`hooks::BlockchainHooks`] trait the node implements.
//! - [`error`] — the protocol error taxonomy.
//!
//! Byte-level encoding is deliberately out of scope; a concrete transport
//! decides how messages cross the process boundary. Every message type is
//! `serde`-serializable so transports can stay generic.

pub mod common;
pub mod error;
pub mod hooks;
pub mod node;
pub mod test_support;
pub mod vm;
