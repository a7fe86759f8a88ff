// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! The blockchain hook surface the node implements.
//!
//! One method per registered hook signature, in registry order. The
//! generated repliers marshal requests into these calls; the generated
//! gateway presents the same surface on the VM side. Hooks that can fail
//! return `Result<_, HookError>`; the error crosses the wire in the
//! response envelope.

use std::collections::BTreeMap;

use crate::common::model::{ContractCallInput, EsdtToken, UserAccount, VmOutput};
use crate::error::HookError;

/// Chain-state queries and mutations the node answers for the VM.
pub trait BlockchainHooks {
    /// Computes the address of a contract about to be deployed.
    fn new_address(
        &mut self,
        creator_address: Vec<u8>,
        creator_nonce: u64,
        vm_type: Vec<u8>,
    ) -> Result<Vec<u8>, HookError>;

    /// Reads one storage entry of an account.
    fn get_storage_data(
        &mut self,
        account_address: Vec<u8>,
        index: Vec<u8>,
    ) -> Result<Vec<u8>, HookError>;

    /// The hash of the block at the given nonce.
    fn get_blockhash(&mut self, nonce: u64) -> Result<Vec<u8>, HookError>;

    fn last_nonce(&mut self) -> u64;

    fn last_round(&mut self) -> u64;

    fn last_time_stamp(&mut self) -> u64;

    fn last_random_seed(&mut self) -> Vec<u8>;

    fn last_epoch(&mut self) -> u32;

    fn get_state_root_hash(&mut self) -> Vec<u8>;

    fn current_nonce(&mut self) -> u64;

    fn current_round(&mut self) -> u64;

    fn current_time_stamp(&mut self) -> u64;

    fn current_random_seed(&mut self) -> Vec<u8>;

    fn current_epoch(&mut self) -> u32;

    /// Executes a protocol built-in function on the node side.
    fn process_built_in_function(
        &mut self,
        input: ContractCallInput,
    ) -> Result<VmOutput, HookError>;

    fn get_builtin_function_names(&mut self) -> Vec<String>;

    /// The full storage of an account.
    fn get_all_state(
        &mut self,
        address: Vec<u8>,
    ) -> Result<BTreeMap<String, Vec<u8>>, HookError>;

    fn get_user_account(&mut self, address: Vec<u8>) -> Result<UserAccount, HookError>;

    fn get_code(&mut self, account: UserAccount) -> Vec<u8>;

    fn get_shard_of_address(&mut self, address: Vec<u8>) -> u32;

    fn is_smart_contract(&mut self, address: Vec<u8>) -> bool;

    fn is_payable(&mut self, address: Vec<u8>) -> Result<bool, HookError>;

    /// Caches compiled contract code under its hash.
    fn save_compiled_code(&mut self, code_hash: Vec<u8>, code: Vec<u8>);

    /// Looks up cached compiled code; `found` is false on a miss.
    fn get_compiled_code(&mut self, code_hash: Vec<u8>) -> (bool, Vec<u8>);

    fn clear_compiled_codes(&mut self);

    fn get_esdt_token(
        &mut self,
        address: Vec<u8>,
        token_id: Vec<u8>,
        nonce: u64,
    ) -> Result<EsdtToken, HookError>;

    /// Takes a snapshot of chain state, returning its handle.
    fn get_snapshot(&mut self) -> i64;

    /// Rolls chain state back to a previously taken snapshot.
    fn revert_to_snapshot(&mut self, snapshot: i64) -> Result<(), HookError>;
}
