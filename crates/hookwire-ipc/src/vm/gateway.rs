// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

// @generated by `hookwire gateway` from the hook signature registry.
// Do not edit by hand; regenerate instead.

//! Client-side gateway: forwards each hook call to the node process.

use std::collections::BTreeMap;

use tracing::warn;

use crate::common::message::MessageHandler;
use crate::common::messages::*;
use crate::common::model::{ContractCallInput, EsdtToken, UserAccount, VmOutput};
use crate::error::WireError;
use crate::vm::Transport;

/// Forwards blockchain hook calls from the VM process to the node.
///
/// Each call is one synchronous request/response exchange; at most one
/// request is in flight on the transport at a time.
pub struct BlockchainGateway<T: Transport> {
    transport: T,
}

impl<T: Transport> BlockchainGateway<T> {
    /// Creates a gateway over the given transport.
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Forwards a `NewAddress` hook call to the node.
    ///
    /// # Errors
    ///
    /// Returns the hook's own error, a transport failure, or
    /// [`WireError::BadHookResponse`] on a mismatched reply.
    pub fn new_address(
        &mut self,
        creator_address: Vec<u8>,
        creator_nonce: u64,
        vm_type: Vec<u8>,
    ) -> Result<Vec<u8>, WireError> {
        let request = MessageNewAddressRequest::new(creator_address, creator_nonce, vm_type);
        let reply = self.transport.round_trip(Box::new(request))?;
        if reply.kind() != MessageKind::NewAddressResponse {
            return Err(WireError::BadHookResponse);
        }
        let response = reply
            .into_any()
            .downcast::<MessageNewAddressResponse>()
            .map_err(|_| WireError::BadHookResponse)?;
        match response.envelope.error {
            Some(error) => Err(error),
            None => Ok(response.result),
        }
    }

    /// Forwards a `GetStorageData` hook call to the node.
    ///
    /// # Errors
    ///
    /// Returns the hook's own error, a transport failure, or
    /// [`WireError::BadHookResponse`] on a mismatched reply.
    pub fn get_storage_data(
        &mut self,
        account_address: Vec<u8>,
        index: Vec<u8>,
    ) -> Result<Vec<u8>, WireError> {
        let request = MessageGetStorageDataRequest::new(account_address, index);
        let reply = self.transport.round_trip(Box::new(request))?;
        if reply.kind() != MessageKind::GetStorageDataResponse {
            return Err(WireError::BadHookResponse);
        }
        let response = reply
            .into_any()
            .downcast::<MessageGetStorageDataResponse>()
            .map_err(|_| WireError::BadHookResponse)?;
        match response.envelope.error {
            Some(error) => Err(error),
            None => Ok(response.data),
        }
    }

    /// Forwards a `GetBlockhash` hook call to the node.
    ///
    /// # Errors
    ///
    /// Returns the hook's own error, a transport failure, or
    /// [`WireError::BadHookResponse`] on a mismatched reply.
    pub fn get_blockhash(&mut self, nonce: u64) -> Result<Vec<u8>, WireError> {
        let request = MessageGetBlockhashRequest::new(nonce);
        let reply = self.transport.round_trip(Box::new(request))?;
        if reply.kind() != MessageKind::GetBlockhashResponse {
            return Err(WireError::BadHookResponse);
        }
        let response = reply
            .into_any()
            .downcast::<MessageGetBlockhashResponse>()
            .map_err(|_| WireError::BadHookResponse)?;
        match response.envelope.error {
            Some(error) => Err(error),
            None => Ok(response.result),
        }
    }

    /// Forwards a `LastNonce` hook call to the node.
    pub fn last_nonce(&mut self) -> u64 {
        let request = MessageLastNonceRequest::new();
        let reply = match self.transport.round_trip(Box::new(request)) {
            Ok(reply) => reply,
            Err(error) => {
                warn!(hook = "LastNonce", %error, "transport failure");
                return 0;
            }
        };
        if reply.kind() != MessageKind::LastNonceResponse {
            warn!(hook = "LastNonce", kind = ?reply.kind(), "mismatched response kind");
            return 0;
        }
        match reply.into_any().downcast::<MessageLastNonceResponse>() {
            Ok(response) => response.result,
            Err(_) => 0,
        }
    }

    /// Forwards a `LastRound` hook call to the node.
    pub fn last_round(&mut self) -> u64 {
        let request = MessageLastRoundRequest::new();
        let reply = match self.transport.round_trip(Box::new(request)) {
            Ok(reply) => reply,
            Err(error) => {
                warn!(hook = "LastRound", %error, "transport failure");
                return 0;
            }
        };
        if reply.kind() != MessageKind::LastRoundResponse {
            warn!(hook = "LastRound", kind = ?reply.kind(), "mismatched response kind");
            return 0;
        }
        match reply.into_any().downcast::<MessageLastRoundResponse>() {
            Ok(response) => response.result,
            Err(_) => 0,
        }
    }

    /// Forwards a `LastTimeStamp` hook call to the node.
    pub fn last_time_stamp(&mut self) -> u64 {
        let request = MessageLastTimeStampRequest::new();
        let reply = match self.transport.round_trip(Box::new(request)) {
            Ok(reply) => reply,
            Err(error) => {
                warn!(hook = "LastTimeStamp", %error, "transport failure");
                return 0;
            }
        };
        if reply.kind() != MessageKind::LastTimeStampResponse {
            warn!(hook = "LastTimeStamp", kind = ?reply.kind(), "mismatched response kind");
            return 0;
        }
        match reply.into_any().downcast::<MessageLastTimeStampResponse>() {
            Ok(response) => response.result,
            Err(_) => 0,
        }
    }

    /// Forwards a `LastRandomSeed` hook call to the node.
    pub fn last_random_seed(&mut self) -> Vec<u8> {
        let request = MessageLastRandomSeedRequest::new();
        let reply = match self.transport.round_trip(Box::new(request)) {
            Ok(reply) => reply,
            Err(error) => {
                warn!(hook = "LastRandomSeed", %error, "transport failure");
                return Vec::new();
            }
        };
        if reply.kind() != MessageKind::LastRandomSeedResponse {
            warn!(hook = "LastRandomSeed", kind = ?reply.kind(), "mismatched response kind");
            return Vec::new();
        }
        match reply.into_any().downcast::<MessageLastRandomSeedResponse>() {
            Ok(response) => response.result,
            Err(_) => Vec::new(),
        }
    }

    /// Forwards a `LastEpoch` hook call to the node.
    pub fn last_epoch(&mut self) -> u32 {
        let request = MessageLastEpochRequest::new();
        let reply = match self.transport.round_trip(Box::new(request)) {
            Ok(reply) => reply,
            Err(error) => {
                warn!(hook = "LastEpoch", %error, "transport failure");
                return 0;
            }
        };
        if reply.kind() != MessageKind::LastEpochResponse {
            warn!(hook = "LastEpoch", kind = ?reply.kind(), "mismatched response kind");
            return 0;
        }
        match reply.into_any().downcast::<MessageLastEpochResponse>() {
            Ok(response) => response.result,
            Err(_) => 0,
        }
    }

    /// Forwards a `GetStateRootHash` hook call to the node.
    pub fn get_state_root_hash(&mut self) -> Vec<u8> {
        let request = MessageGetStateRootHashRequest::new();
        let reply = match self.transport.round_trip(Box::new(request)) {
            Ok(reply) => reply,
            Err(error) => {
                warn!(hook = "GetStateRootHash", %error, "transport failure");
                return Vec::new();
            }
        };
        if reply.kind() != MessageKind::GetStateRootHashResponse {
            warn!(hook = "GetStateRootHash", kind = ?reply.kind(), "mismatched response kind");
            return Vec::new();
        }
        match reply.into_any().downcast::<MessageGetStateRootHashResponse>() {
            Ok(response) => response.result,
            Err(_) => Vec::new(),
        }
    }

    /// Forwards a `CurrentNonce` hook call to the node.
    pub fn current_nonce(&mut self) -> u64 {
        let request = MessageCurrentNonceRequest::new();
        let reply = match self.transport.round_trip(Box::new(request)) {
            Ok(reply) => reply,
            Err(error) => {
                warn!(hook = "CurrentNonce", %error, "transport failure");
                return 0;
            }
        };
        if reply.kind() != MessageKind::CurrentNonceResponse {
            warn!(hook = "CurrentNonce", kind = ?reply.kind(), "mismatched response kind");
            return 0;
        }
        match reply.into_any().downcast::<MessageCurrentNonceResponse>() {
            Ok(response) => response.result,
            Err(_) => 0,
        }
    }

    /// Forwards a `CurrentRound` hook call to the node.
    pub fn current_round(&mut self) -> u64 {
        let request = MessageCurrentRoundRequest::new();
        let reply = match self.transport.round_trip(Box::new(request)) {
            Ok(reply) => reply,
            Err(error) => {
                warn!(hook = "CurrentRound", %error, "transport failure");
                return 0;
            }
        };
        if reply.kind() != MessageKind::CurrentRoundResponse {
            warn!(hook = "CurrentRound", kind = ?reply.kind(), "mismatched response kind");
            return 0;
        }
        match reply.into_any().downcast::<MessageCurrentRoundResponse>() {
            Ok(response) => response.result,
            Err(_) => 0,
        }
    }

    /// Forwards a `CurrentTimeStamp` hook call to the node.
    pub fn current_time_stamp(&mut self) -> u64 {
        let request = MessageCurrentTimeStampRequest::new();
        let reply = match self.transport.round_trip(Box::new(request)) {
            Ok(reply) => reply,
            Err(error) => {
                warn!(hook = "CurrentTimeStamp", %error, "transport failure");
                return 0;
            }
        };
        if reply.kind() != MessageKind::CurrentTimeStampResponse {
            warn!(hook = "CurrentTimeStamp", kind = ?reply.kind(), "mismatched response kind");
            return 0;
        }
        match reply.into_any().downcast::<MessageCurrentTimeStampResponse>() {
            Ok(response) => response.result,
            Err(_) => 0,
        }
    }

    /// Forwards a `CurrentRandomSeed` hook call to the node.
    pub fn current_random_seed(&mut self) -> Vec<u8> {
        let request = MessageCurrentRandomSeedRequest::new();
        let reply = match self.transport.round_trip(Box::new(request)) {
            Ok(reply) => reply,
            Err(error) => {
                warn!(hook = "CurrentRandomSeed", %error, "transport failure");
                return Vec::new();
            }
        };
        if reply.kind() != MessageKind::CurrentRandomSeedResponse {
            warn!(hook = "CurrentRandomSeed", kind = ?reply.kind(), "mismatched response kind");
            return Vec::new();
        }
        match reply.into_any().downcast::<MessageCurrentRandomSeedResponse>() {
            Ok(response) => response.result,
            Err(_) => Vec::new(),
        }
    }

    /// Forwards a `CurrentEpoch` hook call to the node.
    pub fn current_epoch(&mut self) -> u32 {
        let request = MessageCurrentEpochRequest::new();
        let reply = match self.transport.round_trip(Box::new(request)) {
            Ok(reply) => reply,
            Err(error) => {
                warn!(hook = "CurrentEpoch", %error, "transport failure");
                return 0;
            }
        };
        if reply.kind() != MessageKind::CurrentEpochResponse {
            warn!(hook = "CurrentEpoch", kind = ?reply.kind(), "mismatched response kind");
            return 0;
        }
        match reply.into_any().downcast::<MessageCurrentEpochResponse>() {
            Ok(response) => response.result,
            Err(_) => 0,
        }
    }

    /// Forwards a `ProcessBuiltInFunction` hook call to the node.
    ///
    /// # Errors
    ///
    /// Returns the hook's own error, a transport failure, or
    /// [`WireError::BadHookResponse`] on a mismatched reply.
    pub fn process_built_in_function(&mut self, input: ContractCallInput) -> Result<VmOutput, WireError> {
        let request = MessageProcessBuiltInFunctionRequest::new(input);
        let reply = self.transport.round_trip(Box::new(request))?;
        if reply.kind() != MessageKind::ProcessBuiltInFunctionResponse {
            return Err(WireError::BadHookResponse);
        }
        let response = reply
            .into_any()
            .downcast::<MessageProcessBuiltInFunctionResponse>()
            .map_err(|_| WireError::BadHookResponse)?;
        match response.envelope.error {
            Some(error) => Err(error),
            None => Ok(response.vm_output),
        }
    }

    /// Forwards a `GetBuiltinFunctionNames` hook call to the node.
    pub fn get_builtin_function_names(&mut self) -> Vec<String> {
        let request = MessageGetBuiltinFunctionNamesRequest::new();
        let reply = match self.transport.round_trip(Box::new(request)) {
            Ok(reply) => reply,
            Err(error) => {
                warn!(hook = "GetBuiltinFunctionNames", %error, "transport failure");
                return Vec::new();
            }
        };
        if reply.kind() != MessageKind::GetBuiltinFunctionNamesResponse {
            warn!(hook = "GetBuiltinFunctionNames", kind = ?reply.kind(), "mismatched response kind");
            return Vec::new();
        }
        match reply.into_any().downcast::<MessageGetBuiltinFunctionNamesResponse>() {
            Ok(response) => response.result,
            Err(_) => Vec::new(),
        }
    }

    /// Forwards a `GetAllState` hook call to the node.
    ///
    /// # Errors
    ///
    /// Returns the hook's own error, a transport failure, or
    /// [`WireError::BadHookResponse`] on a mismatched reply.
    pub fn get_all_state(&mut self, address: Vec<u8>) -> Result<BTreeMap<String, Vec<u8>>, WireError> {
        let request = MessageGetAllStateRequest::new(address);
        let reply = self.transport.round_trip(Box::new(request))?;
        if reply.kind() != MessageKind::GetAllStateResponse {
            return Err(WireError::BadHookResponse);
        }
        let response = reply
            .into_any()
            .downcast::<MessageGetAllStateResponse>()
            .map_err(|_| WireError::BadHookResponse)?;
        match response.envelope.error {
            Some(error) => Err(error),
            None => Ok(response.result),
        }
    }

    /// Forwards a `GetUserAccount` hook call to the node.
    ///
    /// # Errors
    ///
    /// Returns the hook's own error, a transport failure, or
    /// [`WireError::BadHookResponse`] on a mismatched reply.
    pub fn get_user_account(&mut self, address: Vec<u8>) -> Result<UserAccount, WireError> {
        let request = MessageGetUserAccountRequest::new(address);
        let reply = self.transport.round_trip(Box::new(request))?;
        if reply.kind() != MessageKind::GetUserAccountResponse {
            return Err(WireError::BadHookResponse);
        }
        let response = reply
            .into_any()
            .downcast::<MessageGetUserAccountResponse>()
            .map_err(|_| WireError::BadHookResponse)?;
        match response.envelope.error {
            Some(error) => Err(error),
            None => Ok(response.result),
        }
    }

    /// Forwards a `GetCode` hook call to the node.
    pub fn get_code(&mut self, account: UserAccount) -> Vec<u8> {
        let request = MessageGetCodeRequest::new(account);
        let reply = match self.transport.round_trip(Box::new(request)) {
            Ok(reply) => reply,
            Err(error) => {
                warn!(hook = "GetCode", %error, "transport failure");
                return Vec::new();
            }
        };
        if reply.kind() != MessageKind::GetCodeResponse {
            warn!(hook = "GetCode", kind = ?reply.kind(), "mismatched response kind");
            return Vec::new();
        }
        match reply.into_any().downcast::<MessageGetCodeResponse>() {
            Ok(response) => response.code,
            Err(_) => Vec::new(),
        }
    }

    /// Forwards a `GetShardOfAddress` hook call to the node.
    pub fn get_shard_of_address(&mut self, address: Vec<u8>) -> u32 {
        let request = MessageGetShardOfAddressRequest::new(address);
        let reply = match self.transport.round_trip(Box::new(request)) {
            Ok(reply) => reply,
            Err(error) => {
                warn!(hook = "GetShardOfAddress", %error, "transport failure");
                return 0;
            }
        };
        if reply.kind() != MessageKind::GetShardOfAddressResponse {
            warn!(hook = "GetShardOfAddress", kind = ?reply.kind(), "mismatched response kind");
            return 0;
        }
        match reply.into_any().downcast::<MessageGetShardOfAddressResponse>() {
            Ok(response) => response.result,
            Err(_) => 0,
        }
    }

    /// Forwards a `IsSmartContract` hook call to the node.
    pub fn is_smart_contract(&mut self, address: Vec<u8>) -> bool {
        let request = MessageIsSmartContractRequest::new(address);
        let reply = match self.transport.round_trip(Box::new(request)) {
            Ok(reply) => reply,
            Err(error) => {
                warn!(hook = "IsSmartContract", %error, "transport failure");
                return false;
            }
        };
        if reply.kind() != MessageKind::IsSmartContractResponse {
            warn!(hook = "IsSmartContract", kind = ?reply.kind(), "mismatched response kind");
            return false;
        }
        match reply.into_any().downcast::<MessageIsSmartContractResponse>() {
            Ok(response) => response.result,
            Err(_) => false,
        }
    }

    /// Forwards a `IsPayable` hook call to the node.
    ///
    /// # Errors
    ///
    /// Returns the hook's own error, a transport failure, or
    /// [`WireError::BadHookResponse`] on a mismatched reply.
    pub fn is_payable(&mut self, address: Vec<u8>) -> Result<bool, WireError> {
        let request = MessageIsPayableRequest::new(address);
        let reply = self.transport.round_trip(Box::new(request))?;
        if reply.kind() != MessageKind::IsPayableResponse {
            return Err(WireError::BadHookResponse);
        }
        let response = reply
            .into_any()
            .downcast::<MessageIsPayableResponse>()
            .map_err(|_| WireError::BadHookResponse)?;
        match response.envelope.error {
            Some(error) => Err(error),
            None => Ok(response.result),
        }
    }

    /// Forwards a `SaveCompiledCode` hook call to the node.
    pub fn save_compiled_code(
        &mut self,
        code_hash: Vec<u8>,
        code: Vec<u8>,
    ) {
        let request = MessageSaveCompiledCodeRequest::new(code_hash, code);
        let reply = match self.transport.round_trip(Box::new(request)) {
            Ok(reply) => reply,
            Err(error) => {
                warn!(hook = "SaveCompiledCode", %error, "transport failure");
                return;
            }
        };
        if reply.kind() != MessageKind::SaveCompiledCodeResponse {
            warn!(hook = "SaveCompiledCode", kind = ?reply.kind(), "mismatched response kind");
        }
    }

    /// Forwards a `GetCompiledCode` hook call to the node.
    pub fn get_compiled_code(&mut self, code_hash: Vec<u8>) -> (bool, Vec<u8>) {
        let request = MessageGetCompiledCodeRequest::new(code_hash);
        let reply = match self.transport.round_trip(Box::new(request)) {
            Ok(reply) => reply,
            Err(error) => {
                warn!(hook = "GetCompiledCode", %error, "transport failure");
                return (false, Vec::new());
            }
        };
        if reply.kind() != MessageKind::GetCompiledCodeResponse {
            warn!(hook = "GetCompiledCode", kind = ?reply.kind(), "mismatched response kind");
            return (false, Vec::new());
        }
        match reply.into_any().downcast::<MessageGetCompiledCodeResponse>() {
            Ok(response) => (response.found, response.code),
            Err(_) => (false, Vec::new()),
        }
    }

    /// Forwards a `ClearCompiledCodes` hook call to the node.
    pub fn clear_compiled_codes(&mut self) {
        let request = MessageClearCompiledCodesRequest::new();
        let reply = match self.transport.round_trip(Box::new(request)) {
            Ok(reply) => reply,
            Err(error) => {
                warn!(hook = "ClearCompiledCodes", %error, "transport failure");
                return;
            }
        };
        if reply.kind() != MessageKind::ClearCompiledCodesResponse {
            warn!(hook = "ClearCompiledCodes", kind = ?reply.kind(), "mismatched response kind");
        }
    }

    /// Forwards a `GetESDTToken` hook call to the node.
    ///
    /// # Errors
    ///
    /// Returns the hook's own error, a transport failure, or
    /// [`WireError::BadHookResponse`] on a mismatched reply.
    pub fn get_esdt_token(
        &mut self,
        address: Vec<u8>,
        token_id: Vec<u8>,
        nonce: u64,
    ) -> Result<EsdtToken, WireError> {
        let request = MessageGetESDTTokenRequest::new(address, token_id, nonce);
        let reply = self.transport.round_trip(Box::new(request))?;
        if reply.kind() != MessageKind::GetESDTTokenResponse {
            return Err(WireError::BadHookResponse);
        }
        let response = reply
            .into_any()
            .downcast::<MessageGetESDTTokenResponse>()
            .map_err(|_| WireError::BadHookResponse)?;
        match response.envelope.error {
            Some(error) => Err(error),
            None => Ok(response.result),
        }
    }

    /// Forwards a `GetSnapshot` hook call to the node.
    pub fn get_snapshot(&mut self) -> i64 {
        let request = MessageGetSnapshotRequest::new();
        let reply = match self.transport.round_trip(Box::new(request)) {
            Ok(reply) => reply,
            Err(error) => {
                warn!(hook = "GetSnapshot", %error, "transport failure");
                return 0;
            }
        };
        if reply.kind() != MessageKind::GetSnapshotResponse {
            warn!(hook = "GetSnapshot", kind = ?reply.kind(), "mismatched response kind");
            return 0;
        }
        match reply.into_any().downcast::<MessageGetSnapshotResponse>() {
            Ok(response) => response.result,
            Err(_) => 0,
        }
    }

    /// Forwards a `RevertToSnapshot` hook call to the node.
    ///
    /// # Errors
    ///
    /// Returns the hook's own error, a transport failure, or
    /// [`WireError::BadHookResponse`] on a mismatched reply.
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
}
