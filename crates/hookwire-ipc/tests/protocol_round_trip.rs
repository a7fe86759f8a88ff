// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! End-to-end protocol exchanges: gateway on one end, dispatcher and hooks
//! on the other, joined by an in-process loopback transport.

use hookwire_ipc::common::message::{MessageHandler, MessageStop};
use hookwire_ipc::error::WireError;
use hookwire_ipc::node::NodeDispatcher;
use hookwire_ipc::test_support::StubHooks;
use hookwire_ipc::vm::gateway::BlockchainGateway;
use hookwire_ipc::vm::Transport;

/// Routes every request straight through the dispatcher, as if both
/// processes shared one synchronous pipe.
struct LoopbackTransport {
    hooks: StubHooks,
    dispatcher: NodeDispatcher,
    pending: Option<Box<dyn MessageHandler>>,
}

impl LoopbackTransport {
    fn new(hooks: StubHooks) -> Self {
        LoopbackTransport {
            hooks,
            dispatcher: NodeDispatcher::new(),
            pending: None,
        }
    }
}

impl Transport for LoopbackTransport {
    fn send(&mut self, message: Box<dyn MessageHandler>) -> Result<(), WireError> {
        let reply = self.dispatcher.dispatch(&mut self.hooks, message.as_ref());
        self.pending = Some(reply);
        Ok(())
    }

    fn receive(&mut self) -> Result<Box<dyn MessageHandler>, WireError> {
        self.pending
            .take()
            .ok_or_else(|| WireError::Transport("nothing to receive".to_string()))
    }
}

/// Fails every exchange at the transport level.
struct BrokenTransport;

impl Transport for BrokenTransport {
    fn send(&mut self, _message: Box<dyn MessageHandler>) -> Result<(), WireError> {
        Err(WireError::Transport("pipe closed".to_string()))
    }

    fn receive(&mut self) -> Result<Box<dyn MessageHandler>, WireError> {
        Err(WireError::Transport("pipe closed".to_string()))
    }
}

/// Answers every request with a message of an unrelated kind.
struct WrongKindTransport;

impl Transport for WrongKindTransport {
    fn send(&mut self, _message: Box<dyn MessageHandler>) -> Result<(), WireError> {
        Ok(())
    }

    fn receive(&mut self) -> Result<Box<dyn MessageHandler>, WireError> {
        Ok(Box::new(MessageStop::new()))
    }
}

#[test]
fn last_nonce_round_trips_through_dispatcher_and_hooks() {
    let hooks = StubHooks {
        last_nonce: 42,
        ..StubHooks::default()
    };
    let mut gateway = BlockchainGateway::new(LoopbackTransport::new(hooks));
    assert_eq!(gateway.last_nonce(), 42);
}

#[test]
fn storage_reads_reach_the_node_state() {
    let mut hooks = StubHooks::default();
    hooks
        .storage
        .insert((b"alice".to_vec(), b"counter".to_vec()), b"7".to_vec());
    let mut gateway = BlockchainGateway::new(LoopbackTransport::new(hooks));
    assert_eq!(
        gateway.get_storage_data(b"alice".to_vec(), b"counter".to_vec()),
        Ok(b"7".to_vec())
    );
    assert_eq!(
        gateway.get_storage_data(b"alice".to_vec(), b"missing".to_vec()),
        Ok(Vec::new())
    );
}

#[test]
fn hook_errors_cross_the_wire_as_business_errors() {
    let hooks = StubHooks {
        storage_error: Some("state pruned".to_string()),
        ..StubHooks::default()
    };
    let mut gateway = BlockchainGateway::new(LoopbackTransport::new(hooks));
    assert_eq!(
        gateway.get_storage_data(b"alice".to_vec(), b"counter".to_vec()),
        Err(WireError::Hook("state pruned".to_string()))
    );
}

#[test]
fn revert_to_snapshot_succeeds_and_reaches_the_hooks() {
    let mut transport = LoopbackTransport::new(StubHooks::default());
    let mut gateway = BlockchainGateway::new(&mut transport);
    assert_eq!(gateway.revert_to_snapshot(3), Ok(()));
    assert_eq!(gateway.revert_to_snapshot(1), Ok(()));
    drop(gateway);
    assert_eq!(transport.hooks.reverted_to, vec![3, 1]);
}

#[test]
fn revert_to_snapshot_surfaces_the_hook_error() {
    let hooks = StubHooks {
        revert_error: Some("unknown snapshot".to_string()),
        ..StubHooks::default()
    };
    let mut gateway = BlockchainGateway::new(LoopbackTransport::new(hooks));
    assert_eq!(
        gateway.revert_to_snapshot(9),
        Err(WireError::Hook("unknown snapshot".to_string()))
    );
}

#[test]
fn compiled_code_cache_round_trips() {
    let mut gateway = BlockchainGateway::new(LoopbackTransport::new(StubHooks::default()));
    gateway.save_compiled_code(b"hash".to_vec(), b"wasm".to_vec());
    assert_eq!(
        gateway.get_compiled_code(b"hash".to_vec()),
        (true, b"wasm".to_vec())
    );
    assert_eq!(gateway.get_compiled_code(b"other".to_vec()), (false, Vec::new()));
    gateway.clear_compiled_codes();
    assert_eq!(gateway.get_compiled_code(b"hash".to_vec()), (false, Vec::new()));
}

#[test]
fn transport_failure_yields_bad_return_values_for_infallible_hooks() {
    let mut gateway = BlockchainGateway::new(BrokenTransport);
    assert_eq!(gateway.last_nonce(), 0);
    assert_eq!(gateway.get_compiled_code(b"hash".to_vec()), (false, Vec::new()));
    assert!(!gateway.is_smart_contract(b"alice".to_vec()));
}

#[test]
fn transport_failure_is_an_error_for_fallible_hooks() {
    let mut gateway = BlockchainGateway::new(BrokenTransport);
    assert_eq!(
        gateway.revert_to_snapshot(3),
        Err(WireError::Transport("pipe closed".to_string()))
    );
    assert_eq!(
        gateway.get_blockhash(7),
        Err(WireError::Transport("pipe closed".to_string()))
    );
}

#[test]
fn mismatched_reply_kind_yields_bad_return_values_for_infallible_hooks() {
    let mut gateway = BlockchainGateway::new(WrongKindTransport);
    assert_eq!(gateway.last_nonce(), 0);
    assert_eq!(gateway.get_snapshot(), 0);
}

#[test]
fn mismatched_reply_kind_is_a_protocol_error_for_fallible_hooks() {
    let mut gateway = BlockchainGateway::new(WrongKindTransport);
    assert_eq!(gateway.revert_to_snapshot(3), Err(WireError::BadHookResponse));
    assert_eq!(
        gateway.new_address(b"alice".to_vec(), 1, b"wasm".to_vec()),
        Err(WireError::BadHookResponse)
    );
}

#[test]
fn user_account_lookup_round_trips_structured_data() {
    let mut gateway = BlockchainGateway::new(LoopbackTransport::new(StubHooks::default()));
    let account = gateway.get_user_account(b"alice".to_vec()).unwrap();
    assert_eq!(account.address, b"alice".to_vec());
    assert_eq!(account.nonce, 0);
}
