// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Generator output tests.
//!
//! Small registries with known signatures, exact expected source for the
//! interesting shapes, and consistency checks across artifacts.

use crate::registry::{HookSignature, ParamType, Registry};

use super::{generate, CodeGenError, Target};

fn last_nonce() -> HookSignature {
    HookSignature {
        name: "LastNonce",
        inputs: &[],
        outputs: &[("result", ParamType::U64)],
        has_error: false,
        bad_return: &["0"],
    }
}

fn new_address() -> HookSignature {
    HookSignature {
        name: "NewAddress",
        inputs: &[
            ("creator_address", ParamType::Bytes),
            ("creator_nonce", ParamType::U64),
            ("vm_type", ParamType::Bytes),
        ],
        outputs: &[("result", ParamType::Bytes)],
        has_error: true,
        bad_return: &["Vec::new()"],
    }
}

fn revert_to_snapshot() -> HookSignature {
    HookSignature {
        name: "RevertToSnapshot",
        inputs: &[("snapshot", ParamType::I64)],
        outputs: &[],
        has_error: true,
        bad_return: &[],
    }
}

fn get_compiled_code() -> HookSignature {
    HookSignature {
        name: "GetCompiledCode",
        inputs: &[("code_hash", ParamType::Bytes)],
        outputs: &[("found", ParamType::Bool), ("code", ParamType::Bytes)],
        has_error: false,
        bad_return: &["false", "Vec::new()"],
    }
}

fn single(signature: HookSignature) -> Registry {
    Registry::new(vec![signature])
}

#[test]
fn messages_emit_dense_kind_enum() {
    let source = generate(&single(last_nonce()), Target::Messages).unwrap();
    let expected = "\
pub const KIND_COUNT: usize = 10;

/// Identifies a message's concrete shape on the wire.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u32)]
pub enum MessageKind {
    Initialize = 0,
    Stop = 1,
    ContractDeployRequest = 2,
    ContractCallRequest = 3,
    ContractResponse = 4,
    DiagnoseWaitRequest = 5,
    DiagnoseWaitResponse = 6,
    LastNonceRequest = 7,
    LastNonceResponse = 8,
    #[default]
    Undefined = 9,
}
";
    assert!(source.contains(expected), "missing kind enum in:\n{source}");
}

#[test]
fn messages_emit_envelope_only_request() {
    let source = generate(&single(last_nonce()), Target::Messages).unwrap();
    let expected = "\
/// Request message for the `LastNonce` hook.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct MessageLastNonceRequest {
    #[serde(flatten)]
    pub envelope: Envelope,
}

impl MessageLastNonceRequest {
    /// Creates the message with its kind tag stamped.
    #[must_use]
    pub fn new() -> Self {
        Self {
            envelope: Envelope::for_kind(MessageKind::LastNonceRequest),
        }
    }
}
";
    assert!(source.contains(expected), "missing request struct in:\n{source}");
}

#[test]
fn messages_append_error_parameter_for_fallible_hooks() {
    let source = generate(&single(new_address()), Target::Messages).unwrap();
    let expected = "\
impl MessageNewAddressResponse {
    /// Creates the message with its kind tag stamped.
    #[must_use]
    pub fn new(
        result: Vec<u8>,
        error: Option<WireError>,
    ) -> Self {
        Self {
            envelope: Envelope::with_error(MessageKind::NewAddressResponse, error),
            result,
        }
    }
}
";
    assert!(source.contains(expected), "missing response constructor in:\n{source}");
}

#[test]
fn repliers_split_fallible_results_into_outputs_and_error() {
    let source = generate(&single(new_address()), Target::Repliers).unwrap();
    let expected = "\
/// Replies to a `NewAddress` hook request.
pub fn reply_to_new_address(
    hooks: &mut dyn BlockchainHooks,
    request: &dyn MessageHandler,
) -> Box<dyn MessageHandler> {
    let Some(request) = request.as_any().downcast_ref::<MessageNewAddressRequest>() else {
        return mismatched_request_reply(request);
    };
    let (result, error) = match hooks.new_address(
        request.creator_address.clone(),
        request.creator_nonce,
        request.vm_type.clone(),
    ) {
        Ok(result) => (result, None),
        Err(error) => (Default::default(), Some(error.into())),
    };
    Box::new(MessageNewAddressResponse::new(result, error))
}
";
    assert!(source.contains(expected), "missing replier in:\n{source}");
}

#[test]
fn repliers_handle_output_free_fallible_hooks() {
    let source = generate(&single(revert_to_snapshot()), Target::Repliers).unwrap();
    let expected = "\
    let error = match hooks.revert_to_snapshot(request.snapshot) {
        Ok(()) => None,
        Err(error) => Some(error.into()),
    };
    Box::new(MessageRevertToSnapshotResponse::new(error))
";
    assert!(source.contains(expected), "missing replier body in:\n{source}");
}

#[test]
fn repliers_destructure_multiple_outputs() {
    let source = generate(&single(get_compiled_code()), Target::Repliers).unwrap();
    let expected = "\
    let (found, code) = hooks.get_compiled_code(request.code_hash.clone());
    Box::new(MessageGetCompiledCodeResponse::new(found, code))
";
    assert!(source.contains(expected), "missing replier body in:\n{source}");
}

#[test]
fn reply_slots_cover_exactly_the_request_kinds() {
    let source = generate(&single(last_nonce()), Target::ReplySlots).unwrap();
    let expected = "\
#[must_use]
pub fn create_reply_slots() -> [Replier; KIND_COUNT] {
    let mut slots: [Replier; KIND_COUNT] = [noop_replier; KIND_COUNT];
    slots[MessageKind::LastNonceRequest as usize] = reply_to_last_nonce;
    slots
}
";
    assert!(source.contains(expected), "missing slot table in:\n{source}");
    assert!(!source.contains("LastNonceResponse as usize"));
}

#[test]
fn gateway_falls_back_to_bad_return_values() {
    let source = generate(&single(last_nonce()), Target::Gateway).unwrap();
    let expected = "\
    /// Forwards a `LastNonce` hook call to the node.
    pub fn last_nonce(&mut self) -> u64 {
        let request = MessageLastNonceRequest::new();
        let reply = match self.transport.round_trip(Box::new(request)) {
            Ok(reply) => reply,
            Err(error) => {
                warn!(hook = \"LastNonce\", %error, \"transport failure\");
                return 0;
            }
        };
        if reply.kind() != MessageKind::LastNonceResponse {
            warn!(hook = \"LastNonce\", kind = ?reply.kind(), \"mismatched response kind\");
            return 0;
        }
        match reply.into_any().downcast::<MessageLastNonceResponse>() {
            Ok(response) => response.result,
            Err(_) => 0,
        }
    }
";
    assert!(source.contains(expected), "missing gateway method in:\n{source}");
}

#[test]
fn gateway_surfaces_errors_for_fallible_hooks() {
    let source = generate(&single(revert_to_snapshot()), Target::Gateway).unwrap();
    let expected = "\
    pub fn revert_to_snapshot(&mut self, snapshot: i64) -> Result<(), WireError> {
        let request = MessageRevertToSnapshotRequest::new(snapshot);
        let reply = self.transport.round_trip(Box::new(request))?;
        if reply.kind() != MessageKind::RevertToSnapshotResponse {
            return Err(WireError::BadHookResponse);
        }
        let response = reply
            .into_any()
            .downcast::<MessageRevertToSnapshotResponse>()
            .map_err(|_| WireError::BadHookResponse)?;
        match response.envelope.error {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
";
    assert!(source.contains(expected), "missing gateway method in:\n{source}");
}

#[test]
fn gateway_returns_tuples_for_multiple_outputs() {
    let source = generate(&single(get_compiled_code()), Target::Gateway).unwrap();
    assert!(source.contains("pub fn get_compiled_code(&mut self, code_hash: Vec<u8>) -> (bool, Vec<u8>) {"));
    assert!(source.contains("            Ok(response) => (response.found, response.code),"));
    assert!(source.contains("            Err(_) => (false, Vec::new()),"));
}

#[test]
fn factory_table_runs_from_fixed_kinds_to_undefined() {
    let source = generate(&single(last_nonce()), Target::Factory).unwrap();
    let expected = "\
static MESSAGE_CREATORS: [MessageCreator; KIND_COUNT] = [
    create_message_initialize,
    create_message_stop,
    create_message_contract_deploy_request,
    create_message_contract_call_request,
    create_message_contract_response,
    create_message_diagnose_wait_request,
    create_message_diagnose_wait_response,
    create_message_last_nonce_request,
    create_message_last_nonce_response,
    create_undefined_message,
];
";
    assert!(source.contains(expected), "missing creator table in:\n{source}");
    assert!(source.contains("fn create_message_last_nonce_request() -> Box<dyn MessageHandler> {\n    Box::new(MessageLastNonceRequest::default())\n}"));
}

#[test]
fn every_artifact_starts_with_the_generated_marker() {
    let registry = Registry::builtin();
    for target in Target::ALL {
        let source = generate(&registry, target).unwrap();
        assert!(
            source.contains(&format!(
                "// @generated by `hookwire {}` from the hook signature registry.",
                target.command_name()
            )),
            "missing marker in {target:?}"
        );
    }
}

#[test]
fn generation_is_deterministic() {
    let registry = Registry::builtin();
    for target in Target::ALL {
        let first = generate(&registry, target).unwrap();
        let second = generate(&registry, target).unwrap();
        assert_eq!(first, second, "{target:?} output is not stable");
    }
}

#[test]
fn artifacts_agree_on_identifiers() {
    let registry = Registry::builtin();
    let messages = generate(&registry, Target::Messages).unwrap();
    let repliers = generate(&registry, Target::Repliers).unwrap();
    let reply_slots = generate(&registry, Target::ReplySlots).unwrap();
    let gateway = generate(&registry, Target::Gateway).unwrap();
    let factory = generate(&registry, Target::Factory).unwrap();
    for signature in registry.signatures() {
        let request_type = format!("Message{}Request", signature.name);
        let response_type = format!("Message{}Response", signature.name);
        assert!(messages.contains(&format!("pub struct {request_type} {{")));
        assert!(messages.contains(&format!("pub struct {response_type} {{")));
        assert!(repliers.contains(&format!("::<{request_type}>()")) || signature.inputs.is_empty());
        assert!(repliers.contains(&format!("{response_type}::new(")));
        assert!(reply_slots.contains(&format!("MessageKind::{}Request as usize", signature.name)));
        assert!(gateway.contains(&format!("{request_type}::new(")));
        assert!(factory.contains(&format!("{request_type}::default()")));
        assert!(factory.contains(&format!("{response_type}::default()")));
    }
}

#[test]
fn invalid_registry_fails_generation_for_every_target() {
    let registry = Registry::new(vec![HookSignature {
        name: "Broken",
        inputs: &[],
        outputs: &[("result", ParamType::U64)],
        has_error: false,
        bad_return: &[],
    }]);
    for target in Target::ALL {
        let result = generate(&registry, target);
        assert!(matches!(result, Err(CodeGenError::Registry(_))), "{target:?}");
    }
}
