// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

// @generated by `hookwire factory` from the hook signature registry.
// Do not edit by hand; regenerate instead.

//! Kind-indexed factory reconstructing message instances from wire tags.

use crate::common::message::{
    MessageContractCallRequest, MessageContractDeployRequest, MessageContractResponse,
    MessageDiagnoseWaitRequest, MessageDiagnoseWaitResponse, MessageHandler,
    MessageInitialize, MessageStop, MessageUndefined,
};
use crate::common::messages::*;

/// A zero-argument constructor for one concrete message type.
type MessageCreator = fn() -> Box<dyn MessageHandler>;

/// One creator per kind, indexed by the kind's wire value.
static MESSAGE_CREATORS: [MessageCreator; KIND_COUNT] = [
    create_message_initialize,
    create_message_stop,
    create_message_contract_deploy_request,
    create_message_contract_call_request,
    create_message_contract_response,
    create_message_diagnose_wait_request,
    create_message_diagnose_wait_response,
    create_message_new_address_request,
    create_message_new_address_response,
    create_message_get_storage_data_request,
    create_message_get_storage_data_response,
    create_message_get_blockhash_request,
    create_message_get_blockhash_response,
    create_message_last_nonce_request,
    create_message_last_nonce_response,
    create_message_last_round_request,
    create_message_last_round_response,
    create_message_last_time_stamp_request,
    create_message_last_time_stamp_response,
    create_message_last_random_seed_request,
    create_message_last_random_seed_response,
    create_message_last_epoch_request,
    create_message_last_epoch_response,
    create_message_get_state_root_hash_request,
    create_message_get_state_root_hash_response,
    create_message_current_nonce_request,
    create_message_current_nonce_response,
    create_message_current_round_request,
    create_message_current_round_response,
    create_message_current_time_stamp_request,
    create_message_current_time_stamp_response,
    create_message_current_random_seed_request,
    create_message_current_random_seed_response,
    create_message_current_epoch_request,
    create_message_current_epoch_response,
    create_message_process_built_in_function_request,
    create_message_process_built_in_function_response,
    create_message_get_builtin_function_names_request,
    create_message_get_builtin_function_names_response,
    create_message_get_all_state_request,
    create_message_get_all_state_response,
    create_message_get_user_account_request,
    create_message_get_user_account_response,
    create_message_get_code_request,
    create_message_get_code_response,
    create_message_get_shard_of_address_request,
    create_message_get_shard_of_address_response,
    create_message_is_smart_contract_request,
    create_message_is_smart_contract_response,
    create_message_is_payable_request,
    create_message_is_payable_response,
    create_message_save_compiled_code_request,
    create_message_save_compiled_code_response,
    create_message_get_compiled_code_request,
    create_message_get_compiled_code_response,
    create_message_clear_compiled_codes_request,
    create_message_clear_compiled_codes_response,
    create_message_get_esdt_token_request,
    create_message_get_esdt_token_response,
    create_message_get_snapshot_request,
    create_message_get_snapshot_response,
    create_message_revert_to_snapshot_request,
    create_message_revert_to_snapshot_response,
    create_undefined_message,
];

/// Materializes an empty message for a raw wire-level kind tag.
///
/// The returned instance has the kind stamped, so `message.kind()` is
/// valid before any fields are decoded. Tags outside the enumeration
/// yield an undefined message rather than failing.
#[must_use]
pub fn create_message(kind: u32) -> Box<dyn MessageHandler> {
    let Some(kind) = MessageKind::from_u32(kind) else {
        return create_undefined_message();
    };
    let mut message = MESSAGE_CREATORS[kind as usize]();
    message.set_kind(kind);
    message
}

fn create_message_initialize() -> Box<dyn MessageHandler> {
    Box::new(MessageInitialize::default())
}

fn create_message_stop() -> Box<dyn MessageHandler> {
    Box::new(MessageStop::default())
}

fn create_message_contract_deploy_request() -> Box<dyn MessageHandler> {
    Box::new(MessageContractDeployRequest::default())
}

fn create_message_contract_call_request() -> Box<dyn MessageHandler> {
    Box::new(MessageContractCallRequest::default())
}

fn create_message_contract_response() -> Box<dyn MessageHandler> {
    Box::new(MessageContractResponse::default())
}

fn create_message_diagnose_wait_request() -> Box<dyn MessageHandler> {
    Box::new(MessageDiagnoseWaitRequest::default())
}

fn create_message_diagnose_wait_response() -> Box<dyn MessageHandler> {
    Box::new(MessageDiagnoseWaitResponse::default())
}

fn create_message_new_address_request() -> Box<dyn MessageHandler> {
    Box::new(MessageNewAddressRequest::default())
}

fn create_message_new_address_response() -> Box<dyn MessageHandler> {
    Box::new(MessageNewAddressResponse::default())
}

fn create_message_get_storage_data_request() -> Box<dyn MessageHandler> {
    Box::new(MessageGetStorageDataRequest::default())
}

fn create_message_get_storage_data_response() -> Box<dyn MessageHandler> {
    Box::new(MessageGetStorageDataResponse::default())
}

fn create_message_get_blockhash_request() -> Box<dyn MessageHandler> {
    Box::new(MessageGetBlockhashRequest::default())
}

fn create_message_get_blockhash_response() -> Box<dyn MessageHandler> {
    Box::new(MessageGetBlockhashResponse::default())
}

fn create_message_last_nonce_request() -> Box<dyn MessageHandler> {
    Box::new(MessageLastNonceRequest::default())
}

fn create_message_last_nonce_response() -> Box<dyn MessageHandler> {
    Box::new(MessageLastNonceResponse::default())
}

fn create_message_last_round_request() -> Box<dyn MessageHandler> {
    Box::new(MessageLastRoundRequest::default())
}

fn create_message_last_round_response() -> Box<dyn MessageHandler> {
    Box::new(MessageLastRoundResponse::default())
}

fn create_message_last_time_stamp_request() -> Box<dyn MessageHandler> {
    Box::new(MessageLastTimeStampRequest::default())
}

fn create_message_last_time_stamp_response() -> Box<dyn MessageHandler> {
    Box::new(MessageLastTimeStampResponse::default())
}

fn create_message_last_random_seed_request() -> Box<dyn MessageHandler> {
    Box::new(MessageLastRandomSeedRequest::default())
}

fn create_message_last_random_seed_response() -> Box<dyn MessageHandler> {
    Box::new(MessageLastRandomSeedResponse::default())
}

fn create_message_last_epoch_request() -> Box<dyn MessageHandler> {
    Box::new(MessageLastEpochRequest::default())
}

fn create_message_last_epoch_response() -> Box<dyn MessageHandler> {
    Box::new(MessageLastEpochResponse::default())
}

fn create_message_get_state_root_hash_request() -> Box<dyn MessageHandler> {
    Box::new(MessageGetStateRootHashRequest::default())
}

fn create_message_get_state_root_hash_response() -> Box<dyn MessageHandler> {
    Box::new(MessageGetStateRootHashResponse::default())
}

fn create_message_current_nonce_request() -> Box<dyn MessageHandler> {
    Box::new(MessageCurrentNonceRequest::default())
}

fn create_message_current_nonce_response() -> Box<dyn MessageHandler> {
    Box::new(MessageCurrentNonceResponse::default())
}

fn create_message_current_round_request() -> Box<dyn MessageHandler> {
    Box::new(MessageCurrentRoundRequest::default())
}

fn create_message_current_round_response() -> Box<dyn MessageHandler> {
    Box::new(MessageCurrentRoundResponse::default())
}

fn create_message_current_time_stamp_request() -> Box<dyn MessageHandler> {
    Box::new(MessageCurrentTimeStampRequest::default())
}

fn create_message_current_time_stamp_response() -> Box<dyn MessageHandler> {
    Box::new(MessageCurrentTimeStampResponse::default())
}

fn create_message_current_random_seed_request() -> Box<dyn MessageHandler> {
    Box::new(MessageCurrentRandomSeedRequest::default())
}

fn create_message_current_random_seed_response() -> Box<dyn MessageHandler> {
    Box::new(MessageCurrentRandomSeedResponse::default())
}

fn create_message_current_epoch_request() -> Box<dyn MessageHandler> {
    Box::new(MessageCurrentEpochRequest::default())
}

fn create_message_current_epoch_response() -> Box<dyn MessageHandler> {
    Box::new(MessageCurrentEpochResponse::default())
}

fn create_message_process_built_in_function_request() -> Box<dyn MessageHandler> {
    Box::new(MessageProcessBuiltInFunctionRequest::default())
}

fn create_message_process_built_in_function_response() -> Box<dyn MessageHandler> {
    Box::new(MessageProcessBuiltInFunctionResponse::default())
}

fn create_message_get_builtin_function_names_request() -> Box<dyn MessageHandler> {
    Box::new(MessageGetBuiltinFunctionNamesRequest::default())
}

fn create_message_get_builtin_function_names_response() -> Box<dyn MessageHandler> {
    Box::new(MessageGetBuiltinFunctionNamesResponse::default())
}

fn create_message_get_all_state_request() -> Box<dyn MessageHandler> {
    Box::new(MessageGetAllStateRequest::default())
}

fn create_message_get_all_state_response() -> Box<dyn MessageHandler> {
    Box::new(MessageGetAllStateResponse::default())
}

fn create_message_get_user_account_request() -> Box<dyn MessageHandler> {
    Box::new(MessageGetUserAccountRequest::default())
}

fn create_message_get_user_account_response() -> Box<dyn MessageHandler> {
    Box::new(MessageGetUserAccountResponse::default())
}

fn create_message_get_code_request() -> Box<dyn MessageHandler> {
    Box::new(MessageGetCodeRequest::default())
}

fn create_message_get_code_response() -> Box<dyn MessageHandler> {
    Box::new(MessageGetCodeResponse::default())
}

fn create_message_get_shard_of_address_request() -> Box<dyn MessageHandler> {
    Box::new(MessageGetShardOfAddressRequest::default())
}

fn create_message_get_shard_of_address_response() -> Box<dyn MessageHandler> {
    Box::new(MessageGetShardOfAddressResponse::default())
}

fn create_message_is_smart_contract_request() -> Box<dyn MessageHandler> {
    Box::new(MessageIsSmartContractRequest::default())
}

fn create_message_is_smart_contract_response() -> Box<dyn MessageHandler> {
    Box::new(MessageIsSmartContractResponse::default())
}

fn create_message_is_payable_request() -> Box<dyn MessageHandler> {
    Box::new(MessageIsPayableRequest::default())
}

fn create_message_is_payable_response() -> Box<dyn MessageHandler> {
    Box::new(MessageIsPayableResponse::default())
}

fn create_message_save_compiled_code_request() -> Box<dyn MessageHandler> {
    Box::new(MessageSaveCompiledCodeRequest::default())
}

fn create_message_save_compiled_code_response() -> Box<dyn MessageHandler> {
    Box::new(MessageSaveCompiledCodeResponse::default())
}

fn create_message_get_compiled_code_request() -> Box<dyn MessageHandler> {
    Box::new(MessageGetCompiledCodeRequest::default())
}

fn create_message_get_compiled_code_response() -> Box<dyn MessageHandler> {
    Box::new(MessageGetCompiledCodeResponse::default())
}

fn create_message_clear_compiled_codes_request() -> Box<dyn MessageHandler> {
    Box::new(MessageClearCompiledCodesRequest::default())
}

fn create_message_clear_compiled_codes_response() -> Box<dyn MessageHandler> {
    Box::new(MessageClearCompiledCodesResponse::default())
}

fn create_message_get_esdt_token_request() -> Box<dyn MessageHandler> {
    Box::new(MessageGetESDTTokenRequest::default())
}

fn create_message_get_esdt_token_response() -> Box<dyn MessageHandler> {
    Box::new(MessageGetESDTTokenResponse::default())
}

fn create_message_get_snapshot_request() -> Box<dyn MessageHandler> {
    Box::new(MessageGetSnapshotRequest::default())
}

fn create_message_get_snapshot_response() -> Box<dyn MessageHandler> {
    Box::new(MessageGetSnapshotResponse::default())
}

fn create_message_revert_to_snapshot_request() -> Box<dyn MessageHandler> {
    Box::new(MessageRevertToSnapshotRequest::default())
}

fn create_message_revert_to_snapshot_response() -> Box<dyn MessageHandler> {
    Box::new(MessageRevertToSnapshotResponse::default())
}

fn create_undefined_message() -> Box<dyn MessageHandler> {
    Box::new(MessageUndefined::default())
}
