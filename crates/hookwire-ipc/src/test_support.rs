// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Canned hook implementation for protocol tests.
//!
//! [`StubHooks`] answers every hook with zero values unless one of its
//! public fields says otherwise, and records the calls tests care about.
//! Public (not `#[cfg(test)]`) so downstream crates can use it in their
//! own tests.

use std::collections::BTreeMap;

use crate::common::model::{ContractCallInput, EsdtToken, UserAccount, VmOutput};
use crate::error::HookError;
use crate::hooks::BlockchainHooks;

/// A scriptable [`BlockchainHooks`] stand-in.
#[derive(Debug, Default)]
pub struct StubHooks {
    pub last_nonce: u64,
    pub current_epoch: u32,
    /// Storage entries keyed by `(account_address, index)`.
    pub storage: BTreeMap<(Vec<u8>, Vec<u8>), Vec<u8>>,
    /// When set, `get_storage_data` fails with this message.
    pub storage_error: Option<String>,
    pub compiled_code: BTreeMap<Vec<u8>, Vec<u8>>,
    pub snapshot: i64,
    /// When set, `revert_to_snapshot` fails with this message.
    pub revert_error: Option<String>,
    /// Snapshot handles passed to `revert_to_snapshot`, in call order.
    pub reverted_to: Vec<i64>,
}

impl BlockchainHooks for StubHooks {
    fn new_address(
        &mut self,
        _creator_address: Vec<u8>,
        _creator_nonce: u64,
        _vm_type: Vec<u8>,
    ) -> Result<Vec<u8>, HookError> {
        Ok(Vec::new())
    }

    fn get_storage_data(
        &mut self,
        account_address: Vec<u8>,
        index: Vec<u8>,
    ) -> Result<Vec<u8>, HookError> {
        if let Some(message) = &self.storage_error {
            return Err(HookError::new(message.clone()));
        }
        Ok(self
            .storage
            .get(&(account_address, index))
            .cloned()
            .unwrap_or_default())
    }

    fn get_blockhash(&mut self, _nonce: u64) -> Result<Vec<u8>, HookError> {
        Ok(Vec::new())
    }

    fn last_nonce(&mut self) -> u64 {
        self.last_nonce
    }

    fn last_round(&mut self) -> u64 {
        0
    }

    fn last_time_stamp(&mut self) -> u64 {
        0
    }

    fn last_random_seed(&mut self) -> Vec<u8> {
        Vec::new()
    }

    fn last_epoch(&mut self) -> u32 {
        0
    }

    fn get_state_root_hash(&mut self) -> Vec<u8> {
        Vec::new()
    }

    fn current_nonce(&mut self) -> u64 {
        0
    }

    fn current_round(&mut self) -> u64 {
        0
    }

    fn current_time_stamp(&mut self) -> u64 {
        0
    }

    fn current_random_seed(&mut self) -> Vec<u8> {
        Vec::new()
    }

    fn current_epoch(&mut self) -> u32 {
        self.current_epoch
    }

    fn process_built_in_function(
        &mut self,
        _input: ContractCallInput,
    ) -> Result<VmOutput, HookError> {
        Ok(VmOutput::default())
    }

    fn get_builtin_function_names(&mut self) -> Vec<String> {
        Vec::new()
    }

    fn get_all_state(
        &mut self,
        _address: Vec<u8>,
    ) -> Result<BTreeMap<String, Vec<u8>>, HookError> {
        Ok(BTreeMap::new())
    }

    fn get_user_account(&mut self, address: Vec<u8>) -> Result<UserAccount, HookError> {
        Ok(UserAccount {
            address,
            ..UserAccount::default()
        })
    }

    fn get_code(&mut self, account: UserAccount) -> Vec<u8> {
        account.code
    }

    fn get_shard_of_address(&mut self, _address: Vec<u8>) -> u32 {
        0
    }

    fn is_smart_contract(&mut self, _address: Vec<u8>) -> bool {
        false
    }

    fn is_payable(&mut self, _address: Vec<u8>) -> Result<bool, HookError> {
        Ok(true)
    }

    fn save_compiled_code(&mut self, code_hash: Vec<u8>, code: Vec<u8>) {
        self.compiled_code.insert(code_hash, code);
    }

    fn get_compiled_code(&mut self, code_hash: Vec<u8>) -> (bool, Vec<u8>) {
        match self.compiled_code.get(&code_hash) {
            Some(code) => (true, code.clone()),
            None => (false, Vec::new()),
        }
    }

    fn clear_compiled_codes(&mut self) {
        self.compiled_code.clear();
    }

    fn get_esdt_token(
        &mut self,
        _address: Vec<u8>,
        _token_id: Vec<u8>,
        _nonce: u64,
    ) -> Result<EsdtToken, HookError> {
        Ok(EsdtToken::default())
    }

    fn get_snapshot(&mut self) -> i64 {
        self.snapshot
    }

    fn revert_to_snapshot(&mut self, snapshot: i64) -> Result<(), HookError> {
        if let Some(message) = &self.revert_error {
            return Err(HookError::new(message.clone()));
        }
        self.reverted_to.push(snapshot);
        Ok(())
    }
}
