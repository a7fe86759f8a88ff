// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! The protocol error taxonomy.
//!
//! Three families, never conflated: business errors a hook implementation
//! chose to return, transport failures where the exchange itself broke, and
//! protocol faults where both sides disagree about message shapes.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An error that travels inside a message envelope or terminates a gateway
/// call.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum WireError {
    /// Business error returned by the hook implementation itself.
    #[error("hook failed: {0}")]
    Hook(String),
    /// The transport could not complete the exchange.
    #[error("transport failure: {0}")]
    Transport(String),
    /// The reply does not have the expected response shape.
    #[error("bad hook response from node")]
    BadHookResponse,
    /// A request kind with no registered replier reached the dispatch table.
    #[error("unsupported request kind {0}")]
    UnsupportedRequestKind(u32),
    /// A replier received a request of a different kind than it serves.
    #[error("request does not match the replier's expected type")]
    MismatchedRequest,
}

/// A business error produced by a hook implementation.
///
/// Kept separate from [`WireError`] so hook implementors cannot fabricate
/// transport or protocol faults.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct HookError(pub String);

impl HookError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        HookError(message.into())
    }
}

impl From<HookError> for WireError {
    fn from(error: HookError) -> Self {
        WireError::Hook(error.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hook_errors_become_the_hook_wire_variant() {
        let wire: WireError = HookError::new("account missing").into();
        assert_eq!(wire, WireError::Hook("account missing".to_string()));
    }

    #[test]
    fn display_distinguishes_the_families() {
        assert_eq!(
            WireError::Hook("boom".to_string()).to_string(),
            "hook failed: boom"
        );
        assert_eq!(
            WireError::Transport("pipe closed".to_string()).to_string(),
            "transport failure: pipe closed"
        );
        assert_eq!(
            WireError::UnsupportedRequestKind(99).to_string(),
            "unsupported request kind 99"
        );
    }
}
