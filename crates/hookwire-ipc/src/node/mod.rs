// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! The serving side of the protocol.
//!
//! A [`Replier`] turns one request into one response by calling into the
//! node's [`BlockchainHooks`] implementation. [`NodeDispatcher`] owns the
//! kind-indexed reply-slot table; kinds nobody registered fall through to
//! [`noop_replier`], which answers instead of crashing the node.

pub mod repliers;
pub mod reply_slots;

use tracing::warn;

use crate::common::message::{MessageHandler, MessageUndefined};
use crate::common::messages::KIND_COUNT;
use crate::error::WireError;
use crate::hooks::BlockchainHooks;

/// One reply-slot: turns a request into a response via the hooks.
pub type Replier = fn(&mut dyn BlockchainHooks, &dyn MessageHandler) -> Box<dyn MessageHandler>;

/// Fallback replier for kinds without a registered handler.
///
/// Answers with an undefined message carrying the offending kind, so the
/// caller observes the fault and the exchange stays balanced.
pub fn noop_replier(
    _hooks: &mut dyn BlockchainHooks,
    request: &dyn MessageHandler,
) -> Box<dyn MessageHandler> {
    warn!(kind = ?request.kind(), "no replier registered for request kind");
    let mut reply = MessageUndefined::new();
    reply.set_error(WireError::UnsupportedRequestKind(request.kind() as u32));
    Box::new(reply)
}

/// Reply for a request that reached a replier of the wrong type.
///
/// Only happens when the dispatch table and the message types disagree,
/// which a correct generation run rules out; still answered observably
/// rather than panicking.
pub fn mismatched_request_reply(request: &dyn MessageHandler) -> Box<dyn MessageHandler> {
    warn!(kind = ?request.kind(), "request type does not match its replier");
    let mut reply = MessageUndefined::new();
    reply.set_error(WireError::MismatchedRequest);
    Box::new(reply)
}

/// Routes requests to repliers by kind.
pub struct NodeDispatcher {
    slots: [Replier; KIND_COUNT],
}

impl NodeDispatcher {
    /// A dispatcher over the generated reply-slot table.
    #[must_use]
    pub fn new() -> Self {
        NodeDispatcher {
            slots: reply_slots::create_reply_slots(),
        }
    }

    /// Produces the reply for one request.
    ///
    /// Every representable kind has a slot, so indexing cannot go out of
    /// bounds; unregistered kinds hit the no-op replier.
    pub fn dispatch(
        &self,
        hooks: &mut dyn BlockchainHooks,
        request: &dyn MessageHandler,
    ) -> Box<dyn MessageHandler> {
        self.slots[request.kind() as usize](hooks, request)
    }
}

impl Default for NodeDispatcher {
    fn default() -> Self {
        NodeDispatcher::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::message::MessageStop;
    use crate::common::messages::MessageKind;
    use crate::test_support::StubHooks;

    #[test]
    fn noop_replier_reports_the_unsupported_kind() {
        let mut hooks = StubHooks::default();
        let request = MessageStop::new();
        let reply = noop_replier(&mut hooks, &request);
        assert_eq!(reply.kind(), MessageKind::Undefined);
        assert_eq!(
            reply.error(),
            Some(&WireError::UnsupportedRequestKind(MessageKind::Stop as u32))
        );
    }

    #[test]
    fn mismatched_request_reply_is_observable() {
        let request = MessageStop::new();
        let reply = mismatched_request_reply(&request);
        assert_eq!(reply.kind(), MessageKind::Undefined);
        assert_eq!(reply.error(), Some(&WireError::MismatchedRequest));
    }

    #[test]
    fn dispatcher_answers_unregistered_kinds_with_the_noop_replier() {
        let dispatcher = NodeDispatcher::new();
        let mut hooks = StubHooks::default();
        let reply = dispatcher.dispatch(&mut hooks, &MessageStop::new());
        assert_eq!(
            reply.error(),
            Some(&WireError::UnsupportedRequestKind(MessageKind::Stop as u32))
        );
    }
}
