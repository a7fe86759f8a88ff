// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

// @generated by `hookwire reply-slots` from the hook signature registry.
// Do not edit by hand; regenerate instead.

//! Kind-indexed dispatch table wiring each request kind to its replier.

use crate::common::messages::{MessageKind, KIND_COUNT};
use crate::node::repliers::*;
use crate::node::{noop_replier, Replier};

/// Builds the reply-slot table for the node side.
///
/// Every slot starts as the no-op replier; each hook's request-kind slot
/// is then overridden with its generated handler. Response kinds are never
/// dispatched, so their slots keep the no-op replier.
#[must_use]
pub fn create_reply_slots() -> [Replier; KIND_COUNT] {
    let mut slots: [Replier; KIND_COUNT] = [noop_replier; KIND_COUNT];
    slots[MessageKind::NewAddressRequest as usize] = reply_to_new_address;
    slots[MessageKind::GetStorageDataRequest as usize] = reply_to_get_storage_data;
    slots[MessageKind::GetBlockhashRequest as usize] = reply_to_get_blockhash;
    slots[MessageKind::LastNonceRequest as usize] = reply_to_last_nonce;
    slots[MessageKind::LastRoundRequest as usize] = reply_to_last_round;
    slots[MessageKind::LastTimeStampRequest as usize] = reply_to_last_time_stamp;
    slots[MessageKind::LastRandomSeedRequest as usize] = reply_to_last_random_seed;
    slots[MessageKind::LastEpochRequest as usize] = reply_to_last_epoch;
    slots[MessageKind::GetStateRootHashRequest as usize] = reply_to_get_state_root_hash;
    slots[MessageKind::CurrentNonceRequest as usize] = reply_to_current_nonce;
    slots[MessageKind::CurrentRoundRequest as usize] = reply_to_current_round;
    slots[MessageKind::CurrentTimeStampRequest as usize] = reply_to_current_time_stamp;
    slots[MessageKind::CurrentRandomSeedRequest as usize] = reply_to_current_random_seed;
    slots[MessageKind::CurrentEpochRequest as usize] = reply_to_current_epoch;
    slots[MessageKind::ProcessBuiltInFunctionRequest as usize] = reply_to_process_built_in_function;
    slots[MessageKind::GetBuiltinFunctionNamesRequest as usize] = reply_to_get_builtin_function_names;
    slots[MessageKind::GetAllStateRequest as usize] = reply_to_get_all_state;
    slots[MessageKind::GetUserAccountRequest as usize] = reply_to_get_user_account;
    slots[MessageKind::GetCodeRequest as usize] = reply_to_get_code;
    slots[MessageKind::GetShardOfAddressRequest as usize] = reply_to_get_shard_of_address;
    slots[MessageKind::IsSmartContractRequest as usize] = reply_to_is_smart_contract;
    slots[MessageKind::IsPayableRequest as usize] = reply_to_is_payable;
    slots[MessageKind::SaveCompiledCodeRequest as usize] = reply_to_save_compiled_code;
    slots[MessageKind::GetCompiledCodeRequest as usize] = reply_to_get_compiled_code;
    slots[MessageKind::ClearCompiledCodesRequest as usize] = reply_to_clear_compiled_codes;
    slots[MessageKind::GetESDTTokenRequest as usize] = reply_to_get_esdt_token;
    slots[MessageKind::GetSnapshotRequest as usize] = reply_to_get_snapshot;
    slots[MessageKind::RevertToSnapshotRequest as usize] = reply_to_revert_to_snapshot;
    slots
}
