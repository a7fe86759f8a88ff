// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

// @generated by `hookwire repliers` from the hook signature registry.
// Do not edit by hand; regenerate instead.

//! Server-side repliers: one marshaling shim per blockchain hook.

use crate::common::message::MessageHandler;
use crate::common::messages::*;
use crate::hooks::BlockchainHooks;
use crate::node::mismatched_request_reply;

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

/// Replies to a `GetStorageData` hook request.
pub fn reply_to_get_storage_data(
    hooks: &mut dyn BlockchainHooks,
    request: &dyn MessageHandler,
) -> Box<dyn MessageHandler> {
    let Some(request) = request.as_any().downcast_ref::<MessageGetStorageDataRequest>() else {
        return mismatched_request_reply(request);
    };
    let (data, error) = match hooks.get_storage_data(
        request.account_address.clone(),
        request.index.clone(),
    ) {
        Ok(data) => (data, None),
        Err(error) => (Default::default(), Some(error.into())),
    };
    Box::new(MessageGetStorageDataResponse::new(data, error))
}

/// Replies to a `GetBlockhash` hook request.
pub fn reply_to_get_blockhash(
    hooks: &mut dyn BlockchainHooks,
    request: &dyn MessageHandler,
) -> Box<dyn MessageHandler> {
    let Some(request) = request.as_any().downcast_ref::<MessageGetBlockhashRequest>() else {
        return mismatched_request_reply(request);
    };
    let (result, error) = match hooks.get_blockhash(request.nonce) {
        Ok(result) => (result, None),
        Err(error) => (Default::default(), Some(error.into())),
    };
    Box::new(MessageGetBlockhashResponse::new(result, error))
}

/// Replies to a `LastNonce` hook request.
pub fn reply_to_last_nonce(
    hooks: &mut dyn BlockchainHooks,
    _request: &dyn MessageHandler,
) -> Box<dyn MessageHandler> {
    let result = hooks.last_nonce();
    Box::new(MessageLastNonceResponse::new(result))
}

/// Replies to a `LastRound` hook request.
pub fn reply_to_last_round(
    hooks: &mut dyn BlockchainHooks,
    _request: &dyn MessageHandler,
) -> Box<dyn MessageHandler> {
    let result = hooks.last_round();
    Box::new(MessageLastRoundResponse::new(result))
}

/// Replies to a `LastTimeStamp` hook request.
pub fn reply_to_last_time_stamp(
    hooks: &mut dyn BlockchainHooks,
    _request: &dyn MessageHandler,
) -> Box<dyn MessageHandler> {
    let result = hooks.last_time_stamp();
    Box::new(MessageLastTimeStampResponse::new(result))
}

/// Replies to a `LastRandomSeed` hook request.
pub fn reply_to_last_random_seed(
    hooks: &mut dyn BlockchainHooks,
    _request: &dyn MessageHandler,
) -> Box<dyn MessageHandler> {
    let result = hooks.last_random_seed();
    Box::new(MessageLastRandomSeedResponse::new(result))
}

/// Replies to a `LastEpoch` hook request.
pub fn reply_to_last_epoch(
    hooks: &mut dyn BlockchainHooks,
    _request: &dyn MessageHandler,
) -> Box<dyn MessageHandler> {
    let result = hooks.last_epoch();
    Box::new(MessageLastEpochResponse::new(result))
}

/// Replies to a `GetStateRootHash` hook request.
pub fn reply_to_get_state_root_hash(
    hooks: &mut dyn BlockchainHooks,
    _request: &dyn MessageHandler,
) -> Box<dyn MessageHandler> {
    let result = hooks.get_state_root_hash();
    Box::new(MessageGetStateRootHashResponse::new(result))
}

/// Replies to a `CurrentNonce` hook request.
pub fn reply_to_current_nonce(
    hooks: &mut dyn BlockchainHooks,
    _request: &dyn MessageHandler,
) -> Box<dyn MessageHandler> {
    let result = hooks.current_nonce();
    Box::new(MessageCurrentNonceResponse::new(result))
}

/// Replies to a `CurrentRound` hook request.
pub fn reply_to_current_round(
    hooks: &mut dyn BlockchainHooks,
    _request: &dyn MessageHandler,
) -> Box<dyn MessageHandler> {
    let result = hooks.current_round();
    Box::new(MessageCurrentRoundResponse::new(result))
}

/// Replies to a `CurrentTimeStamp` hook request.
pub fn reply_to_current_time_stamp(
    hooks: &mut dyn BlockchainHooks,
    _request: &dyn MessageHandler,
) -> Box<dyn MessageHandler> {
    let result = hooks.current_time_stamp();
    Box::new(MessageCurrentTimeStampResponse::new(result))
}

/// Replies to a `CurrentRandomSeed` hook request.
pub fn reply_to_current_random_seed(
    hooks: &mut dyn BlockchainHooks,
    _request: &dyn MessageHandler,
) -> Box<dyn MessageHandler> {
    let result = hooks.current_random_seed();
    Box::new(MessageCurrentRandomSeedResponse::new(result))
}

/// Replies to a `CurrentEpoch` hook request.
pub fn reply_to_current_epoch(
    hooks: &mut dyn BlockchainHooks,
    _request: &dyn MessageHandler,
) -> Box<dyn MessageHandler> {
    let result = hooks.current_epoch();
    Box::new(MessageCurrentEpochResponse::new(result))
}

/// Replies to a `ProcessBuiltInFunction` hook request.
pub fn reply_to_process_built_in_function(
    hooks: &mut dyn BlockchainHooks,
    request: &dyn MessageHandler,
) -> Box<dyn MessageHandler> {
    let Some(request) = request.as_any().downcast_ref::<MessageProcessBuiltInFunctionRequest>() else {
        return mismatched_request_reply(request);
    };
    let (vm_output, error) = match hooks.process_built_in_function(request.input.clone()) {
        Ok(vm_output) => (vm_output, None),
        Err(error) => (Default::default(), Some(error.into())),
    };
    Box::new(MessageProcessBuiltInFunctionResponse::new(vm_output, error))
}

/// Replies to a `GetBuiltinFunctionNames` hook request.
pub fn reply_to_get_builtin_function_names(
    hooks: &mut dyn BlockchainHooks,
    _request: &dyn MessageHandler,
) -> Box<dyn MessageHandler> {
    let result = hooks.get_builtin_function_names();
    Box::new(MessageGetBuiltinFunctionNamesResponse::new(result))
}

/// Replies to a `GetAllState` hook request.
pub fn reply_to_get_all_state(
    hooks: &mut dyn BlockchainHooks,
    request: &dyn MessageHandler,
) -> Box<dyn MessageHandler> {
    let Some(request) = request.as_any().downcast_ref::<MessageGetAllStateRequest>() else {
        return mismatched_request_reply(request);
    };
    let (result, error) = match hooks.get_all_state(request.address.clone()) {
        Ok(result) => (result, None),
        Err(error) => (Default::default(), Some(error.into())),
    };
    Box::new(MessageGetAllStateResponse::new(result, error))
}

/// Replies to a `GetUserAccount` hook request.
pub fn reply_to_get_user_account(
    hooks: &mut dyn BlockchainHooks,
    request: &dyn MessageHandler,
) -> Box<dyn MessageHandler> {
    let Some(request) = request.as_any().downcast_ref::<MessageGetUserAccountRequest>() else {
        return mismatched_request_reply(request);
    };
    let (result, error) = match hooks.get_user_account(request.address.clone()) {
        Ok(result) => (result, None),
        Err(error) => (Default::default(), Some(error.into())),
    };
    Box::new(MessageGetUserAccountResponse::new(result, error))
}

/// Replies to a `GetCode` hook request.
pub fn reply_to_get_code(
    hooks: &mut dyn BlockchainHooks,
    request: &dyn MessageHandler,
) -> Box<dyn MessageHandler> {
    let Some(request) = request.as_any().downcast_ref::<MessageGetCodeRequest>() else {
        return mismatched_request_reply(request);
    };
    let code = hooks.get_code(request.account.clone());
    Box::new(MessageGetCodeResponse::new(code))
}

/// Replies to a `GetShardOfAddress` hook request.
pub fn reply_to_get_shard_of_address(
    hooks: &mut dyn BlockchainHooks,
    request: &dyn MessageHandler,
) -> Box<dyn MessageHandler> {
    let Some(request) = request.as_any().downcast_ref::<MessageGetShardOfAddressRequest>() else {
        return mismatched_request_reply(request);
    };
    let result = hooks.get_shard_of_address(request.address.clone());
    Box::new(MessageGetShardOfAddressResponse::new(result))
}

/// Replies to a `IsSmartContract` hook request.
pub fn reply_to_is_smart_contract(
    hooks: &mut dyn BlockchainHooks,
    request: &dyn MessageHandler,
) -> Box<dyn MessageHandler> {
    let Some(request) = request.as_any().downcast_ref::<MessageIsSmartContractRequest>() else {
        return mismatched_request_reply(request);
    };
    let result = hooks.is_smart_contract(request.address.clone());
    Box::new(MessageIsSmartContractResponse::new(result))
}

/// Replies to a `IsPayable` hook request.
pub fn reply_to_is_payable(
    hooks: &mut dyn BlockchainHooks,
    request: &dyn MessageHandler,
) -> Box<dyn MessageHandler> {
    let Some(request) = request.as_any().downcast_ref::<MessageIsPayableRequest>() else {
        return mismatched_request_reply(request);
    };
    let (result, error) = match hooks.is_payable(request.address.clone()) {
        Ok(result) => (result, None),
        Err(error) => (Default::default(), Some(error.into())),
    };
    Box::new(MessageIsPayableResponse::new(result, error))
}

/// Replies to a `SaveCompiledCode` hook request.
pub fn reply_to_save_compiled_code(
    hooks: &mut dyn BlockchainHooks,
    request: &dyn MessageHandler,
) -> Box<dyn MessageHandler> {
    let Some(request) = request.as_any().downcast_ref::<MessageSaveCompiledCodeRequest>() else {
        return mismatched_request_reply(request);
    };
    hooks.save_compiled_code(
        request.code_hash.clone(),
        request.code.clone(),
    );
    Box::new(MessageSaveCompiledCodeResponse::new())
}

/// Replies to a `GetCompiledCode` hook request.
pub fn reply_to_get_compiled_code(
    hooks: &mut dyn BlockchainHooks,
    request: &dyn MessageHandler,
) -> Box<dyn MessageHandler> {
    let Some(request) = request.as_any().downcast_ref::<MessageGetCompiledCodeRequest>() else {
        return mismatched_request_reply(request);
    };
    let (found, code) = hooks.get_compiled_code(request.code_hash.clone());
    Box::new(MessageGetCompiledCodeResponse::new(found, code))
}

/// Replies to a `ClearCompiledCodes` hook request.
pub fn reply_to_clear_compiled_codes(
    hooks: &mut dyn BlockchainHooks,
    _request: &dyn MessageHandler,
) -> Box<dyn MessageHandler> {
    hooks.clear_compiled_codes();
    Box::new(MessageClearCompiledCodesResponse::new())
}

/// Replies to a `GetESDTToken` hook request.
pub fn reply_to_get_esdt_token(
    hooks: &mut dyn BlockchainHooks,
    request: &dyn MessageHandler,
) -> Box<dyn MessageHandler> {
    let Some(request) = request.as_any().downcast_ref::<MessageGetESDTTokenRequest>() else {
        return mismatched_request_reply(request);
    };
    let (result, error) = match hooks.get_esdt_token(
        request.address.clone(),
        request.token_id.clone(),
        request.nonce,
    ) {
        Ok(result) => (result, None),
        Err(error) => (Default::default(), Some(error.into())),
    };
    Box::new(MessageGetESDTTokenResponse::new(result, error))
}

/// Replies to a `GetSnapshot` hook request.
pub fn reply_to_get_snapshot(
    hooks: &mut dyn BlockchainHooks,
    _request: &dyn MessageHandler,
) -> Box<dyn MessageHandler> {
    let result = hooks.get_snapshot();
    Box::new(MessageGetSnapshotResponse::new(result))
}

/// Replies to a `RevertToSnapshot` hook request.
pub fn reply_to_revert_to_snapshot(
    hooks: &mut dyn BlockchainHooks,
    request: &dyn MessageHandler,
) -> Box<dyn MessageHandler> {
    let Some(request) = request.as_any().downcast_ref::<MessageRevertToSnapshotRequest>() else {
        return mismatched_request_reply(request);
    };
    let error = match hooks.revert_to_snapshot(request.snapshot) {
        Ok(()) => None,
        Err(error) => Some(error.into()),
    };
    Box::new(MessageRevertToSnapshotResponse::new(error))
}
