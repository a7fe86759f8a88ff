// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

// @generated by `hookwire messages` from the hook signature registry.
// Do not edit by hand; regenerate instead.

//! Request/response message types for every blockchain hook.

use std::any::Any;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::common::message::{Envelope, MessageHandler};
use crate::common::model::{ContractCallInput, EsdtToken, UserAccount, VmOutput};
use crate::error::WireError;

/// Total number of message kinds; the reply-slot and factory tables both
/// have exactly this many slots.
pub const KIND_COUNT: usize = 64;

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
    NewAddressRequest = 7,
    NewAddressResponse = 8,
    GetStorageDataRequest = 9,
    GetStorageDataResponse = 10,
    GetBlockhashRequest = 11,
    GetBlockhashResponse = 12,
    LastNonceRequest = 13,
    LastNonceResponse = 14,
    LastRoundRequest = 15,
    LastRoundResponse = 16,
    LastTimeStampRequest = 17,
    LastTimeStampResponse = 18,
    LastRandomSeedRequest = 19,
    LastRandomSeedResponse = 20,
    LastEpochRequest = 21,
    LastEpochResponse = 22,
    GetStateRootHashRequest = 23,
    GetStateRootHashResponse = 24,
    CurrentNonceRequest = 25,
    CurrentNonceResponse = 26,
    CurrentRoundRequest = 27,
    CurrentRoundResponse = 28,
    CurrentTimeStampRequest = 29,
    CurrentTimeStampResponse = 30,
    CurrentRandomSeedRequest = 31,
    CurrentRandomSeedResponse = 32,
    CurrentEpochRequest = 33,
    CurrentEpochResponse = 34,
    ProcessBuiltInFunctionRequest = 35,
    ProcessBuiltInFunctionResponse = 36,
    GetBuiltinFunctionNamesRequest = 37,
    GetBuiltinFunctionNamesResponse = 38,
    GetAllStateRequest = 39,
    GetAllStateResponse = 40,
    GetUserAccountRequest = 41,
    GetUserAccountResponse = 42,
    GetCodeRequest = 43,
    GetCodeResponse = 44,
    GetShardOfAddressRequest = 45,
    GetShardOfAddressResponse = 46,
    IsSmartContractRequest = 47,
    IsSmartContractResponse = 48,
    IsPayableRequest = 49,
    IsPayableResponse = 50,
    SaveCompiledCodeRequest = 51,
    SaveCompiledCodeResponse = 52,
    GetCompiledCodeRequest = 53,
    GetCompiledCodeResponse = 54,
    ClearCompiledCodesRequest = 55,
    ClearCompiledCodesResponse = 56,
    GetESDTTokenRequest = 57,
    GetESDTTokenResponse = 58,
    GetSnapshotRequest = 59,
    GetSnapshotResponse = 60,
    RevertToSnapshotRequest = 61,
    RevertToSnapshotResponse = 62,
    #[default]
    Undefined = 63,
}

impl MessageKind {
    /// Every kind, in wire-value order.
    pub const ALL: [MessageKind; KIND_COUNT] = [
        MessageKind::Initialize,
        MessageKind::Stop,
        MessageKind::ContractDeployRequest,
        MessageKind::ContractCallRequest,
        MessageKind::ContractResponse,
        MessageKind::DiagnoseWaitRequest,
        MessageKind::DiagnoseWaitResponse,
        MessageKind::NewAddressRequest,
        MessageKind::NewAddressResponse,
        MessageKind::GetStorageDataRequest,
        MessageKind::GetStorageDataResponse,
        MessageKind::GetBlockhashRequest,
        MessageKind::GetBlockhashResponse,
        MessageKind::LastNonceRequest,
        MessageKind::LastNonceResponse,
        MessageKind::LastRoundRequest,
        MessageKind::LastRoundResponse,
        MessageKind::LastTimeStampRequest,
        MessageKind::LastTimeStampResponse,
        MessageKind::LastRandomSeedRequest,
        MessageKind::LastRandomSeedResponse,
        MessageKind::LastEpochRequest,
        MessageKind::LastEpochResponse,
        MessageKind::GetStateRootHashRequest,
        MessageKind::GetStateRootHashResponse,
        MessageKind::CurrentNonceRequest,
        MessageKind::CurrentNonceResponse,
        MessageKind::CurrentRoundRequest,
        MessageKind::CurrentRoundResponse,
        MessageKind::CurrentTimeStampRequest,
        MessageKind::CurrentTimeStampResponse,
        MessageKind::CurrentRandomSeedRequest,
        MessageKind::CurrentRandomSeedResponse,
        MessageKind::CurrentEpochRequest,
        MessageKind::CurrentEpochResponse,
        MessageKind::ProcessBuiltInFunctionRequest,
        MessageKind::ProcessBuiltInFunctionResponse,
        MessageKind::GetBuiltinFunctionNamesRequest,
        MessageKind::GetBuiltinFunctionNamesResponse,
        MessageKind::GetAllStateRequest,
        MessageKind::GetAllStateResponse,
        MessageKind::GetUserAccountRequest,
        MessageKind::GetUserAccountResponse,
        MessageKind::GetCodeRequest,
        MessageKind::GetCodeResponse,
        MessageKind::GetShardOfAddressRequest,
        MessageKind::GetShardOfAddressResponse,
        MessageKind::IsSmartContractRequest,
        MessageKind::IsSmartContractResponse,
        MessageKind::IsPayableRequest,
        MessageKind::IsPayableResponse,
        MessageKind::SaveCompiledCodeRequest,
        MessageKind::SaveCompiledCodeResponse,
        MessageKind::GetCompiledCodeRequest,
        MessageKind::GetCompiledCodeResponse,
        MessageKind::ClearCompiledCodesRequest,
        MessageKind::ClearCompiledCodesResponse,
        MessageKind::GetESDTTokenRequest,
        MessageKind::GetESDTTokenResponse,
        MessageKind::GetSnapshotRequest,
        MessageKind::GetSnapshotResponse,
        MessageKind::RevertToSnapshotRequest,
        MessageKind::RevertToSnapshotResponse,
        MessageKind::Undefined,
    ];

    /// Maps a raw wire tag back into the enumeration.
    #[must_use]
    pub fn from_u32(raw: u32) -> Option<MessageKind> {
        MessageKind::ALL.get(raw as usize).copied()
    }
}

/// Request message for the `NewAddress` hook.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct MessageNewAddressRequest {
    #[serde(flatten)]
    pub envelope: Envelope,
    pub creator_address: Vec<u8>,
    pub creator_nonce: u64,
    pub vm_type: Vec<u8>,
}

impl MessageNewAddressRequest {
    /// Creates the message with its kind tag stamped.
    #[must_use]
    pub fn new(
        creator_address: Vec<u8>,
        creator_nonce: u64,
        vm_type: Vec<u8>,
    ) -> Self {
        Self {
            envelope: Envelope::for_kind(MessageKind::NewAddressRequest),
            creator_address,
            creator_nonce,
            vm_type,
        }
    }
}

impl MessageHandler for MessageNewAddressRequest {
    fn envelope(&self) -> &Envelope {
        &self.envelope
    }

    fn envelope_mut(&mut self) -> &mut Envelope {
        &mut self.envelope
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

/// Response message for the `NewAddress` hook.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct MessageNewAddressResponse {
    #[serde(flatten)]
    pub envelope: Envelope,
    pub result: Vec<u8>,
}

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

impl MessageHandler for MessageNewAddressResponse {
    fn envelope(&self) -> &Envelope {
        &self.envelope
    }

    fn envelope_mut(&mut self) -> &mut Envelope {
        &mut self.envelope
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

/// Request message for the `GetStorageData` hook.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct MessageGetStorageDataRequest {
    #[serde(flatten)]
    pub envelope: Envelope,
    pub account_address: Vec<u8>,
    pub index: Vec<u8>,
}

impl MessageGetStorageDataRequest {
    /// Creates the message with its kind tag stamped.
    #[must_use]
    pub fn new(
        account_address: Vec<u8>,
        index: Vec<u8>,
    ) -> Self {
        Self {
            envelope: Envelope::for_kind(MessageKind::GetStorageDataRequest),
            account_address,
            index,
        }
    }
}

impl MessageHandler for MessageGetStorageDataRequest {
    fn envelope(&self) -> &Envelope {
        &self.envelope
    }

    fn envelope_mut(&mut self) -> &mut Envelope {
        &mut self.envelope
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

/// Response message for the `GetStorageData` hook.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct MessageGetStorageDataResponse {
    #[serde(flatten)]
    pub envelope: Envelope,
    pub data: Vec<u8>,
}

impl MessageGetStorageDataResponse {
    /// Creates the message with its kind tag stamped.
    #[must_use]
    pub fn new(
        data: Vec<u8>,
        error: Option<WireError>,
    ) -> Self {
        Self {
            envelope: Envelope::with_error(MessageKind::GetStorageDataResponse, error),
            data,
        }
    }
}

impl MessageHandler for MessageGetStorageDataResponse {
    fn envelope(&self) -> &Envelope {
        &self.envelope
    }

    fn envelope_mut(&mut self) -> &mut Envelope {
        &mut self.envelope
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

/// Request message for the `GetBlockhash` hook.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct MessageGetBlockhashRequest {
    #[serde(flatten)]
    pub envelope: Envelope,
    pub nonce: u64,
}

impl MessageGetBlockhashRequest {
    /// Creates the message with its kind tag stamped.
    #[must_use]
    pub fn new(nonce: u64) -> Self {
        Self {
            envelope: Envelope::for_kind(MessageKind::GetBlockhashRequest),
            nonce,
        }
    }
}

impl MessageHandler for MessageGetBlockhashRequest {
    fn envelope(&self) -> &Envelope {
        &self.envelope
    }

    fn envelope_mut(&mut self) -> &mut Envelope {
        &mut self.envelope
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

/// Response message for the `GetBlockhash` hook.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct MessageGetBlockhashResponse {
    #[serde(flatten)]
    pub envelope: Envelope,
    pub result: Vec<u8>,
}

impl MessageGetBlockhashResponse {
    /// Creates the message with its kind tag stamped.
    #[must_use]
    pub fn new(
        result: Vec<u8>,
        error: Option<WireError>,
    ) -> Self {
        Self {
            envelope: Envelope::with_error(MessageKind::GetBlockhashResponse, error),
            result,
        }
    }
}

impl MessageHandler for MessageGetBlockhashResponse {
    fn envelope(&self) -> &Envelope {
        &self.envelope
    }

    fn envelope_mut(&mut self) -> &mut Envelope {
        &mut self.envelope
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

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

impl MessageHandler for MessageLastNonceRequest {
    fn envelope(&self) -> &Envelope {
        &self.envelope
    }

    fn envelope_mut(&mut self) -> &mut Envelope {
        &mut self.envelope
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

/// Response message for the `LastNonce` hook.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct MessageLastNonceResponse {
    #[serde(flatten)]
    pub envelope: Envelope,
    pub result: u64,
}

impl MessageLastNonceResponse {
    /// Creates the message with its kind tag stamped.
    #[must_use]
    pub fn new(result: u64) -> Self {
        Self {
            envelope: Envelope::for_kind(MessageKind::LastNonceResponse),
            result,
        }
    }
}

impl MessageHandler for MessageLastNonceResponse {
    fn envelope(&self) -> &Envelope {
        &self.envelope
    }

    fn envelope_mut(&mut self) -> &mut Envelope {
        &mut self.envelope
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

/// Request message for the `LastRound` hook.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct MessageLastRoundRequest {
    #[serde(flatten)]
    pub envelope: Envelope,
}

impl MessageLastRoundRequest {
    /// Creates the message with its kind tag stamped.
    #[must_use]
    pub fn new() -> Self {
        Self {
            envelope: Envelope::for_kind(MessageKind::LastRoundRequest),
        }
    }
}

impl MessageHandler for MessageLastRoundRequest {
    fn envelope(&self) -> &Envelope {
        &self.envelope
    }

    fn envelope_mut(&mut self) -> &mut Envelope {
        &mut self.envelope
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

/// Response message for the `LastRound` hook.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct MessageLastRoundResponse {
    #[serde(flatten)]
    pub envelope: Envelope,
    pub result: u64,
}

impl MessageLastRoundResponse {
    /// Creates the message with its kind tag stamped.
    #[must_use]
    pub fn new(result: u64) -> Self {
        Self {
            envelope: Envelope::for_kind(MessageKind::LastRoundResponse),
            result,
        }
    }
}

impl MessageHandler for MessageLastRoundResponse {
    fn envelope(&self) -> &Envelope {
        &self.envelope
    }

    fn envelope_mut(&mut self) -> &mut Envelope {
        &mut self.envelope
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

/// Request message for the `LastTimeStamp` hook.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct MessageLastTimeStampRequest {
    #[serde(flatten)]
    pub envelope: Envelope,
}

impl MessageLastTimeStampRequest {
    /// Creates the message with its kind tag stamped.
    #[must_use]
    pub fn new() -> Self {
        Self {
            envelope: Envelope::for_kind(MessageKind::LastTimeStampRequest),
        }
    }
}

impl MessageHandler for MessageLastTimeStampRequest {
    fn envelope(&self) -> &Envelope {
        &self.envelope
    }

    fn envelope_mut(&mut self) -> &mut Envelope {
        &mut self.envelope
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

/// Response message for the `LastTimeStamp` hook.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct MessageLastTimeStampResponse {
    #[serde(flatten)]
    pub envelope: Envelope,
    pub result: u64,
}

impl MessageLastTimeStampResponse {
    /// Creates the message with its kind tag stamped.
    #[must_use]
    pub fn new(result: u64) -> Self {
        Self {
            envelope: Envelope::for_kind(MessageKind::LastTimeStampResponse),
            result,
        }
    }
}

impl MessageHandler for MessageLastTimeStampResponse {
    fn envelope(&self) -> &Envelope {
        &self.envelope
    }

    fn envelope_mut(&mut self) -> &mut Envelope {
        &mut self.envelope
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

/// Request message for the `LastRandomSeed` hook.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct MessageLastRandomSeedRequest {
    #[serde(flatten)]
    pub envelope: Envelope,
}

impl MessageLastRandomSeedRequest {
    /// Creates the message with its kind tag stamped.
    #[must_use]
    pub fn new() -> Self {
        Self {
            envelope: Envelope::for_kind(MessageKind::LastRandomSeedRequest),
        }
    }
}

impl MessageHandler for MessageLastRandomSeedRequest {
    fn envelope(&self) -> &Envelope {
        &self.envelope
    }

    fn envelope_mut(&mut self) -> &mut Envelope {
        &mut self.envelope
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

/// Response message for the `LastRandomSeed` hook.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct MessageLastRandomSeedResponse {
    #[serde(flatten)]
    pub envelope: Envelope,
    pub result: Vec<u8>,
}

impl MessageLastRandomSeedResponse {
    /// Creates the message with its kind tag stamped.
    #[must_use]
    pub fn new(result: Vec<u8>) -> Self {
        Self {
            envelope: Envelope::for_kind(MessageKind::LastRandomSeedResponse),
            result,
        }
    }
}

impl MessageHandler for MessageLastRandomSeedResponse {
    fn envelope(&self) -> &Envelope {
        &self.envelope
    }

    fn envelope_mut(&mut self) -> &mut Envelope {
        &mut self.envelope
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

/// Request message for the `LastEpoch` hook.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct MessageLastEpochRequest {
    #[serde(flatten)]
    pub envelope: Envelope,
}

impl MessageLastEpochRequest {
    /// Creates the message with its kind tag stamped.
    #[must_use]
    pub fn new() -> Self {
        Self {
            envelope: Envelope::for_kind(MessageKind::LastEpochRequest),
        }
    }
}

impl MessageHandler for MessageLastEpochRequest {
    fn envelope(&self) -> &Envelope {
        &self.envelope
    }

    fn envelope_mut(&mut self) -> &mut Envelope {
        &mut self.envelope
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

/// Response message for the `LastEpoch` hook.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct MessageLastEpochResponse {
    #[serde(flatten)]
    pub envelope: Envelope,
    pub result: u32,
}

impl MessageLastEpochResponse {
    /// Creates the message with its kind tag stamped.
    #[must_use]
    pub fn new(result: u32) -> Self {
        Self {
            envelope: Envelope::for_kind(MessageKind::LastEpochResponse),
            result,
        }
    }
}

impl MessageHandler for MessageLastEpochResponse {
    fn envelope(&self) -> &Envelope {
        &self.envelope
    }

    fn envelope_mut(&mut self) -> &mut Envelope {
        &mut self.envelope
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

/// Request message for the `GetStateRootHash` hook.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct MessageGetStateRootHashRequest {
    #[serde(flatten)]
    pub envelope: Envelope,
}

impl MessageGetStateRootHashRequest {
    /// Creates the message with its kind tag stamped.
    #[must_use]
    pub fn new() -> Self {
        Self {
            envelope: Envelope::for_kind(MessageKind::GetStateRootHashRequest),
        }
    }
}

impl MessageHandler for MessageGetStateRootHashRequest {
    fn envelope(&self) -> &Envelope {
        &self.envelope
    }

    fn envelope_mut(&mut self) -> &mut Envelope {
        &mut self.envelope
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

/// Response message for the `GetStateRootHash` hook.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct MessageGetStateRootHashResponse {
    #[serde(flatten)]
    pub envelope: Envelope,
    pub result: Vec<u8>,
}

impl MessageGetStateRootHashResponse {
    /// Creates the message with its kind tag stamped.
    #[must_use]
    pub fn new(result: Vec<u8>) -> Self {
        Self {
            envelope: Envelope::for_kind(MessageKind::GetStateRootHashResponse),
            result,
        }
    }
}

impl MessageHandler for MessageGetStateRootHashResponse {
    fn envelope(&self) -> &Envelope {
        &self.envelope
    }

    fn envelope_mut(&mut self) -> &mut Envelope {
        &mut self.envelope
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

/// Request message for the `CurrentNonce` hook.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct MessageCurrentNonceRequest {
    #[serde(flatten)]
    pub envelope: Envelope,
}

impl MessageCurrentNonceRequest {
    /// Creates the message with its kind tag stamped.
    #[must_use]
    pub fn new() -> Self {
        Self {
            envelope: Envelope::for_kind(MessageKind::CurrentNonceRequest),
        }
    }
}

impl MessageHandler for MessageCurrentNonceRequest {
    fn envelope(&self) -> &Envelope {
        &self.envelope
    }

    fn envelope_mut(&mut self) -> &mut Envelope {
        &mut self.envelope
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

/// Response message for the `CurrentNonce` hook.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct MessageCurrentNonceResponse {
    #[serde(flatten)]
    pub envelope: Envelope,
    pub result: u64,
}

impl MessageCurrentNonceResponse {
    /// Creates the message with its kind tag stamped.
    #[must_use]
    pub fn new(result: u64) -> Self {
        Self {
            envelope: Envelope::for_kind(MessageKind::CurrentNonceResponse),
            result,
        }
    }
}

impl MessageHandler for MessageCurrentNonceResponse {
    fn envelope(&self) -> &Envelope {
        &self.envelope
    }

    fn envelope_mut(&mut self) -> &mut Envelope {
        &mut self.envelope
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

/// Request message for the `CurrentRound` hook.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct MessageCurrentRoundRequest {
    #[serde(flatten)]
    pub envelope: Envelope,
}

impl MessageCurrentRoundRequest {
    /// Creates the message with its kind tag stamped.
    #[must_use]
    pub fn new() -> Self {
        Self {
            envelope: Envelope::for_kind(MessageKind::CurrentRoundRequest),
        }
    }
}

impl MessageHandler for MessageCurrentRoundRequest {
    fn envelope(&self) -> &Envelope {
        &self.envelope
    }

    fn envelope_mut(&mut self) -> &mut Envelope {
        &mut self.envelope
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

/// Response message for the `CurrentRound` hook.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct MessageCurrentRoundResponse {
    #[serde(flatten)]
    pub envelope: Envelope,
    pub result: u64,
}

impl MessageCurrentRoundResponse {
    /// Creates the message with its kind tag stamped.
    #[must_use]
    pub fn new(result: u64) -> Self {
        Self {
            envelope: Envelope::for_kind(MessageKind::CurrentRoundResponse),
            result,
        }
    }
}

impl MessageHandler for MessageCurrentRoundResponse {
    fn envelope(&self) -> &Envelope {
        &self.envelope
    }

    fn envelope_mut(&mut self) -> &mut Envelope {
        &mut self.envelope
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

/// Request message for the `CurrentTimeStamp` hook.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct MessageCurrentTimeStampRequest {
    #[serde(flatten)]
    pub envelope: Envelope,
}

impl MessageCurrentTimeStampRequest {
    /// Creates the message with its kind tag stamped.
    #[must_use]
    pub fn new() -> Self {
        Self {
            envelope: Envelope::for_kind(MessageKind::CurrentTimeStampRequest),
        }
    }
}

impl MessageHandler for MessageCurrentTimeStampRequest {
    fn envelope(&self) -> &Envelope {
        &self.envelope
    }

    fn envelope_mut(&mut self) -> &mut Envelope {
        &mut self.envelope
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

/// Response message for the `CurrentTimeStamp` hook.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct MessageCurrentTimeStampResponse {
    #[serde(flatten)]
    pub envelope: Envelope,
    pub result: u64,
}

impl MessageCurrentTimeStampResponse {
    /// Creates the message with its kind tag stamped.
    #[must_use]
    pub fn new(result: u64) -> Self {
        Self {
            envelope: Envelope::for_kind(MessageKind::CurrentTimeStampResponse),
            result,
        }
    }
}

impl MessageHandler for MessageCurrentTimeStampResponse {
    fn envelope(&self) -> &Envelope {
        &self.envelope
    }

    fn envelope_mut(&mut self) -> &mut Envelope {
        &mut self.envelope
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

/// Request message for the `CurrentRandomSeed` hook.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct MessageCurrentRandomSeedRequest {
    #[serde(flatten)]
    pub envelope: Envelope,
}

impl MessageCurrentRandomSeedRequest {
    /// Creates the message with its kind tag stamped.
    #[must_use]
    pub fn new() -> Self {
        Self {
            envelope: Envelope::for_kind(MessageKind::CurrentRandomSeedRequest),
        }
    }
}

impl MessageHandler for MessageCurrentRandomSeedRequest {
    fn envelope(&self) -> &Envelope {
        &self.envelope
    }

    fn envelope_mut(&mut self) -> &mut Envelope {
        &mut self.envelope
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

/// Response message for the `CurrentRandomSeed` hook.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct MessageCurrentRandomSeedResponse {
    #[serde(flatten)]
    pub envelope: Envelope,
    pub result: Vec<u8>,
}

impl MessageCurrentRandomSeedResponse {
    /// Creates the message with its kind tag stamped.
    #[must_use]
    pub fn new(result: Vec<u8>) -> Self {
        Self {
            envelope: Envelope::for_kind(MessageKind::CurrentRandomSeedResponse),
            result,
        }
    }
}

impl MessageHandler for MessageCurrentRandomSeedResponse {
    fn envelope(&self) -> &Envelope {
        &self.envelope
    }

    fn envelope_mut(&mut self) -> &mut Envelope {
        &mut self.envelope
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

/// Request message for the `CurrentEpoch` hook.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct MessageCurrentEpochRequest {
    #[serde(flatten)]
    pub envelope: Envelope,
}

impl MessageCurrentEpochRequest {
    /// Creates the message with its kind tag stamped.
    #[must_use]
    pub fn new() -> Self {
        Self {
            envelope: Envelope::for_kind(MessageKind::CurrentEpochRequest),
        }
    }
}

impl MessageHandler for MessageCurrentEpochRequest {
    fn envelope(&self) -> &Envelope {
        &self.envelope
    }

    fn envelope_mut(&mut self) -> &mut Envelope {
        &mut self.envelope
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

/// Response message for the `CurrentEpoch` hook.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct MessageCurrentEpochResponse {
    #[serde(flatten)]
    pub envelope: Envelope,
    pub result: u32,
}

impl MessageCurrentEpochResponse {
    /// Creates the message with its kind tag stamped.
    #[must_use]
    pub fn new(result: u32) -> Self {
        Self {
            envelope: Envelope::for_kind(MessageKind::CurrentEpochResponse),
            result,
        }
    }
}

impl MessageHandler for MessageCurrentEpochResponse {
    fn envelope(&self) -> &Envelope {
        &self.envelope
    }

    fn envelope_mut(&mut self) -> &mut Envelope {
        &mut self.envelope
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

/// Request message for the `ProcessBuiltInFunction` hook.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct MessageProcessBuiltInFunctionRequest {
    #[serde(flatten)]
    pub envelope: Envelope,
    pub input: ContractCallInput,
}

impl MessageProcessBuiltInFunctionRequest {
    /// Creates the message with its kind tag stamped.
    #[must_use]
    pub fn new(input: ContractCallInput) -> Self {
        Self {
            envelope: Envelope::for_kind(MessageKind::ProcessBuiltInFunctionRequest),
            input,
        }
    }
}

impl MessageHandler for MessageProcessBuiltInFunctionRequest {
    fn envelope(&self) -> &Envelope {
        &self.envelope
    }

    fn envelope_mut(&mut self) -> &mut Envelope {
        &mut self.envelope
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

/// Response message for the `ProcessBuiltInFunction` hook.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct MessageProcessBuiltInFunctionResponse {
    #[serde(flatten)]
    pub envelope: Envelope,
    pub vm_output: VmOutput,
}

impl MessageProcessBuiltInFunctionResponse {
    /// Creates the message with its kind tag stamped.
    #[must_use]
    pub fn new(
        vm_output: VmOutput,
        error: Option<WireError>,
    ) -> Self {
        Self {
            envelope: Envelope::with_error(MessageKind::ProcessBuiltInFunctionResponse, error),
            vm_output,
        }
    }
}

impl MessageHandler for MessageProcessBuiltInFunctionResponse {
    fn envelope(&self) -> &Envelope {
        &self.envelope
    }

    fn envelope_mut(&mut self) -> &mut Envelope {
        &mut self.envelope
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

/// Request message for the `GetBuiltinFunctionNames` hook.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct MessageGetBuiltinFunctionNamesRequest {
    #[serde(flatten)]
    pub envelope: Envelope,
}

impl MessageGetBuiltinFunctionNamesRequest {
    /// Creates the message with its kind tag stamped.
    #[must_use]
    pub fn new() -> Self {
        Self {
            envelope: Envelope::for_kind(MessageKind::GetBuiltinFunctionNamesRequest),
        }
    }
}

impl MessageHandler for MessageGetBuiltinFunctionNamesRequest {
    fn envelope(&self) -> &Envelope {
        &self.envelope
    }

    fn envelope_mut(&mut self) -> &mut Envelope {
        &mut self.envelope
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

/// Response message for the `GetBuiltinFunctionNames` hook.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct MessageGetBuiltinFunctionNamesResponse {
    #[serde(flatten)]
    pub envelope: Envelope,
    pub result: Vec<String>,
}

impl MessageGetBuiltinFunctionNamesResponse {
    /// Creates the message with its kind tag stamped.
    #[must_use]
    pub fn new(result: Vec<String>) -> Self {
        Self {
            envelope: Envelope::for_kind(MessageKind::GetBuiltinFunctionNamesResponse),
            result,
        }
    }
}

impl MessageHandler for MessageGetBuiltinFunctionNamesResponse {
    fn envelope(&self) -> &Envelope {
        &self.envelope
    }

    fn envelope_mut(&mut self) -> &mut Envelope {
        &mut self.envelope
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

/// Request message for the `GetAllState` hook.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct MessageGetAllStateRequest {
    #[serde(flatten)]
    pub envelope: Envelope,
    pub address: Vec<u8>,
}

impl MessageGetAllStateRequest {
    /// Creates the message with its kind tag stamped.
    #[must_use]
    pub fn new(address: Vec<u8>) -> Self {
        Self {
            envelope: Envelope::for_kind(MessageKind::GetAllStateRequest),
            address,
        }
    }
}

impl MessageHandler for MessageGetAllStateRequest {
    fn envelope(&self) -> &Envelope {
        &self.envelope
    }

    fn envelope_mut(&mut self) -> &mut Envelope {
        &mut self.envelope
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

/// Response message for the `GetAllState` hook.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct MessageGetAllStateResponse {
    #[serde(flatten)]
    pub envelope: Envelope,
    pub result: BTreeMap<String, Vec<u8>>,
}

impl MessageGetAllStateResponse {
    /// Creates the message with its kind tag stamped.
    #[must_use]
    pub fn new(
        result: BTreeMap<String, Vec<u8>>,
        error: Option<WireError>,
    ) -> Self {
        Self {
            envelope: Envelope::with_error(MessageKind::GetAllStateResponse, error),
            result,
        }
    }
}

impl MessageHandler for MessageGetAllStateResponse {
    fn envelope(&self) -> &Envelope {
        &self.envelope
    }

    fn envelope_mut(&mut self) -> &mut Envelope {
        &mut self.envelope
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

/// Request message for the `GetUserAccount` hook.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct MessageGetUserAccountRequest {
    #[serde(flatten)]
    pub envelope: Envelope,
    pub address: Vec<u8>,
}

impl MessageGetUserAccountRequest {
    /// Creates the message with its kind tag stamped.
    #[must_use]
    pub fn new(address: Vec<u8>) -> Self {
        Self {
            envelope: Envelope::for_kind(MessageKind::GetUserAccountRequest),
            address,
        }
    }
}

impl MessageHandler for MessageGetUserAccountRequest {
    fn envelope(&self) -> &Envelope {
        &self.envelope
    }

    fn envelope_mut(&mut self) -> &mut Envelope {
        &mut self.envelope
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

/// Response message for the `GetUserAccount` hook.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct MessageGetUserAccountResponse {
    #[serde(flatten)]
    pub envelope: Envelope,
    pub result: UserAccount,
}

impl MessageGetUserAccountResponse {
    /// Creates the message with its kind tag stamped.
    #[must_use]
    pub fn new(
        result: UserAccount,
        error: Option<WireError>,
    ) -> Self {
        Self {
            envelope: Envelope::with_error(MessageKind::GetUserAccountResponse, error),
            result,
        }
    }
}

impl MessageHandler for MessageGetUserAccountResponse {
    fn envelope(&self) -> &Envelope {
        &self.envelope
    }

    fn envelope_mut(&mut self) -> &mut Envelope {
        &mut self.envelope
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

/// Request message for the `GetCode` hook.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct MessageGetCodeRequest {
    #[serde(flatten)]
    pub envelope: Envelope,
    pub account: UserAccount,
}

impl MessageGetCodeRequest {
    /// Creates the message with its kind tag stamped.
    #[must_use]
    pub fn new(account: UserAccount) -> Self {
        Self {
            envelope: Envelope::for_kind(MessageKind::GetCodeRequest),
            account,
        }
    }
}

impl MessageHandler for MessageGetCodeRequest {
    fn envelope(&self) -> &Envelope {
        &self.envelope
    }

    fn envelope_mut(&mut self) -> &mut Envelope {
        &mut self.envelope
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

/// Response message for the `GetCode` hook.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct MessageGetCodeResponse {
    #[serde(flatten)]
    pub envelope: Envelope,
    pub code: Vec<u8>,
}

impl MessageGetCodeResponse {
    /// Creates the message with its kind tag stamped.
    #[must_use]
    pub fn new(code: Vec<u8>) -> Self {
        Self {
            envelope: Envelope::for_kind(MessageKind::GetCodeResponse),
            code,
        }
    }
}

impl MessageHandler for MessageGetCodeResponse {
    fn envelope(&self) -> &Envelope {
        &self.envelope
    }

    fn envelope_mut(&mut self) -> &mut Envelope {
        &mut self.envelope
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

/// Request message for the `GetShardOfAddress` hook.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct MessageGetShardOfAddressRequest {
    #[serde(flatten)]
    pub envelope: Envelope,
    pub address: Vec<u8>,
}

impl MessageGetShardOfAddressRequest {
    /// Creates the message with its kind tag stamped.
    #[must_use]
    pub fn new(address: Vec<u8>) -> Self {
        Self {
            envelope: Envelope::for_kind(MessageKind::GetShardOfAddressRequest),
            address,
        }
    }
}

impl MessageHandler for MessageGetShardOfAddressRequest {
    fn envelope(&self) -> &Envelope {
        &self.envelope
    }

    fn envelope_mut(&mut self) -> &mut Envelope {
        &mut self.envelope
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

/// Response message for the `GetShardOfAddress` hook.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct MessageGetShardOfAddressResponse {
    #[serde(flatten)]
    pub envelope: Envelope,
    pub result: u32,
}

impl MessageGetShardOfAddressResponse {
    /// Creates the message with its kind tag stamped.
    #[must_use]
    pub fn new(result: u32) -> Self {
        Self {
            envelope: Envelope::for_kind(MessageKind::GetShardOfAddressResponse),
            result,
        }
    }
}

impl MessageHandler for MessageGetShardOfAddressResponse {
    fn envelope(&self) -> &Envelope {
        &self.envelope
    }

    fn envelope_mut(&mut self) -> &mut Envelope {
        &mut self.envelope
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

/// Request message for the `IsSmartContract` hook.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct MessageIsSmartContractRequest {
    #[serde(flatten)]
    pub envelope: Envelope,
    pub address: Vec<u8>,
}

impl MessageIsSmartContractRequest {
    /// Creates the message with its kind tag stamped.
    #[must_use]
    pub fn new(address: Vec<u8>) -> Self {
        Self {
            envelope: Envelope::for_kind(MessageKind::IsSmartContractRequest),
            address,
        }
    }
}

impl MessageHandler for MessageIsSmartContractRequest {
    fn envelope(&self) -> &Envelope {
        &self.envelope
    }

    fn envelope_mut(&mut self) -> &mut Envelope {
        &mut self.envelope
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

/// Response message for the `IsSmartContract` hook.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct MessageIsSmartContractResponse {
    #[serde(flatten)]
    pub envelope: Envelope,
    pub result: bool,
}

impl MessageIsSmartContractResponse {
    /// Creates the message with its kind tag stamped.
    #[must_use]
    pub fn new(result: bool) -> Self {
        Self {
            envelope: Envelope::for_kind(MessageKind::IsSmartContractResponse),
            result,
        }
    }
}

impl MessageHandler for MessageIsSmartContractResponse {
    fn envelope(&self) -> &Envelope {
        &self.envelope
    }

    fn envelope_mut(&mut self) -> &mut Envelope {
        &mut self.envelope
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

/// Request message for the `IsPayable` hook.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct MessageIsPayableRequest {
    #[serde(flatten)]
    pub envelope: Envelope,
    pub address: Vec<u8>,
}

impl MessageIsPayableRequest {
    /// Creates the message with its kind tag stamped.
    #[must_use]
    pub fn new(address: Vec<u8>) -> Self {
        Self {
            envelope: Envelope::for_kind(MessageKind::IsPayableRequest),
            address,
        }
    }
}

impl MessageHandler for MessageIsPayableRequest {
    fn envelope(&self) -> &Envelope {
        &self.envelope
    }

    fn envelope_mut(&mut self) -> &mut Envelope {
        &mut self.envelope
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

/// Response message for the `IsPayable` hook.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct MessageIsPayableResponse {
    #[serde(flatten)]
    pub envelope: Envelope,
    pub result: bool,
}

impl MessageIsPayableResponse {
    /// Creates the message with its kind tag stamped.
    #[must_use]
    pub fn new(
        result: bool,
        error: Option<WireError>,
    ) -> Self {
        Self {
            envelope: Envelope::with_error(MessageKind::IsPayableResponse, error),
            result,
        }
    }
}

impl MessageHandler for MessageIsPayableResponse {
    fn envelope(&self) -> &Envelope {
        &self.envelope
    }

    fn envelope_mut(&mut self) -> &mut Envelope {
        &mut self.envelope
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

/// Request message for the `SaveCompiledCode` hook.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct MessageSaveCompiledCodeRequest {
    #[serde(flatten)]
    pub envelope: Envelope,
    pub code_hash: Vec<u8>,
    pub code: Vec<u8>,
}

impl MessageSaveCompiledCodeRequest {
    /// Creates the message with its kind tag stamped.
    #[must_use]
    pub fn new(
        code_hash: Vec<u8>,
        code: Vec<u8>,
    ) -> Self {
        Self {
            envelope: Envelope::for_kind(MessageKind::SaveCompiledCodeRequest),
            code_hash,
            code,
        }
    }
}

impl MessageHandler for MessageSaveCompiledCodeRequest {
    fn envelope(&self) -> &Envelope {
        &self.envelope
    }

    fn envelope_mut(&mut self) -> &mut Envelope {
        &mut self.envelope
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

/// Response message for the `SaveCompiledCode` hook.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct MessageSaveCompiledCodeResponse {
    #[serde(flatten)]
    pub envelope: Envelope,
}

impl MessageSaveCompiledCodeResponse {
    /// Creates the message with its kind tag stamped.
    #[must_use]
    pub fn new() -> Self {
        Self {
            envelope: Envelope::for_kind(MessageKind::SaveCompiledCodeResponse),
        }
    }
}

impl MessageHandler for MessageSaveCompiledCodeResponse {
    fn envelope(&self) -> &Envelope {
        &self.envelope
    }

    fn envelope_mut(&mut self) -> &mut Envelope {
        &mut self.envelope
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

/// Request message for the `GetCompiledCode` hook.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct MessageGetCompiledCodeRequest {
    #[serde(flatten)]
    pub envelope: Envelope,
    pub code_hash: Vec<u8>,
}

impl MessageGetCompiledCodeRequest {
    /// Creates the message with its kind tag stamped.
    #[must_use]
    pub fn new(code_hash: Vec<u8>) -> Self {
        Self {
            envelope: Envelope::for_kind(MessageKind::GetCompiledCodeRequest),
            code_hash,
        }
    }
}

impl MessageHandler for MessageGetCompiledCodeRequest {
    fn envelope(&self) -> &Envelope {
        &self.envelope
    }

    fn envelope_mut(&mut self) -> &mut Envelope {
        &mut self.envelope
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

/// Response message for the `GetCompiledCode` hook.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct MessageGetCompiledCodeResponse {
    #[serde(flatten)]
    pub envelope: Envelope,
    pub found: bool,
    pub code: Vec<u8>,
}

impl MessageGetCompiledCodeResponse {
    /// Creates the message with its kind tag stamped.
    #[must_use]
    pub fn new(
        found: bool,
        code: Vec<u8>,
    ) -> Self {
        Self {
            envelope: Envelope::for_kind(MessageKind::GetCompiledCodeResponse),
            found,
            code,
        }
    }
}

impl MessageHandler for MessageGetCompiledCodeResponse {
    fn envelope(&self) -> &Envelope {
        &self.envelope
    }

    fn envelope_mut(&mut self) -> &mut Envelope {
        &mut self.envelope
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

/// Request message for the `ClearCompiledCodes` hook.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct MessageClearCompiledCodesRequest {
    #[serde(flatten)]
    pub envelope: Envelope,
}

impl MessageClearCompiledCodesRequest {
    /// Creates the message with its kind tag stamped.
    #[must_use]
    pub fn new() -> Self {
        Self {
            envelope: Envelope::for_kind(MessageKind::ClearCompiledCodesRequest),
        }
    }
}

impl MessageHandler for MessageClearCompiledCodesRequest {
    fn envelope(&self) -> &Envelope {
        &self.envelope
    }

    fn envelope_mut(&mut self) -> &mut Envelope {
        &mut self.envelope
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

/// Response message for the `ClearCompiledCodes` hook.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct MessageClearCompiledCodesResponse {
    #[serde(flatten)]
    pub envelope: Envelope,
}

impl MessageClearCompiledCodesResponse {
    /// Creates the message with its kind tag stamped.
    #[must_use]
    pub fn new() -> Self {
        Self {
            envelope: Envelope::for_kind(MessageKind::ClearCompiledCodesResponse),
        }
    }
}

impl MessageHandler for MessageClearCompiledCodesResponse {
    fn envelope(&self) -> &Envelope {
        &self.envelope
    }

    fn envelope_mut(&mut self) -> &mut Envelope {
        &mut self.envelope
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

/// Request message for the `GetESDTToken` hook.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct MessageGetESDTTokenRequest {
    #[serde(flatten)]
    pub envelope: Envelope,
    pub address: Vec<u8>,
    pub token_id: Vec<u8>,
    pub nonce: u64,
}

impl MessageGetESDTTokenRequest {
    /// Creates the message with its kind tag stamped.
    #[must_use]
    pub fn new(
        address: Vec<u8>,
        token_id: Vec<u8>,
        nonce: u64,
    ) -> Self {
        Self {
            envelope: Envelope::for_kind(MessageKind::GetESDTTokenRequest),
            address,
            token_id,
            nonce,
        }
    }
}

impl MessageHandler for MessageGetESDTTokenRequest {
    fn envelope(&self) -> &Envelope {
        &self.envelope
    }

    fn envelope_mut(&mut self) -> &mut Envelope {
        &mut self.envelope
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

/// Response message for the `GetESDTToken` hook.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct MessageGetESDTTokenResponse {
    #[serde(flatten)]
    pub envelope: Envelope,
    pub result: EsdtToken,
}

impl MessageGetESDTTokenResponse {
    /// Creates the message with its kind tag stamped.
    #[must_use]
    pub fn new(
        result: EsdtToken,
        error: Option<WireError>,
    ) -> Self {
        Self {
            envelope: Envelope::with_error(MessageKind::GetESDTTokenResponse, error),
            result,
        }
    }
}

impl MessageHandler for MessageGetESDTTokenResponse {
    fn envelope(&self) -> &Envelope {
        &self.envelope
    }

    fn envelope_mut(&mut self) -> &mut Envelope {
        &mut self.envelope
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

/// Request message for the `GetSnapshot` hook.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct MessageGetSnapshotRequest {
    #[serde(flatten)]
    pub envelope: Envelope,
}

impl MessageGetSnapshotRequest {
    /// Creates the message with its kind tag stamped.
    #[must_use]
    pub fn new() -> Self {
        Self {
            envelope: Envelope::for_kind(MessageKind::GetSnapshotRequest),
        }
    }
}

impl MessageHandler for MessageGetSnapshotRequest {
    fn envelope(&self) -> &Envelope {
        &self.envelope
    }

    fn envelope_mut(&mut self) -> &mut Envelope {
        &mut self.envelope
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

/// Response message for the `GetSnapshot` hook.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct MessageGetSnapshotResponse {
    #[serde(flatten)]
    pub envelope: Envelope,
    pub result: i64,
}

impl MessageGetSnapshotResponse {
    /// Creates the message with its kind tag stamped.
    #[must_use]
    pub fn new(result: i64) -> Self {
        Self {
            envelope: Envelope::for_kind(MessageKind::GetSnapshotResponse),
            result,
        }
    }
}

impl MessageHandler for MessageGetSnapshotResponse {
    fn envelope(&self) -> &Envelope {
        &self.envelope
    }

    fn envelope_mut(&mut self) -> &mut Envelope {
        &mut self.envelope
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

/// Request message for the `RevertToSnapshot` hook.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct MessageRevertToSnapshotRequest {
    #[serde(flatten)]
    pub envelope: Envelope,
    pub snapshot: i64,
}

impl MessageRevertToSnapshotRequest {
    /// Creates the message with its kind tag stamped.
    #[must_use]
    pub fn new(snapshot: i64) -> Self {
        Self {
            envelope: Envelope::for_kind(MessageKind::RevertToSnapshotRequest),
            snapshot,
        }
    }
}

impl MessageHandler for MessageRevertToSnapshotRequest {
    fn envelope(&self) -> &Envelope {
        &self.envelope
    }

    fn envelope_mut(&mut self) -> &mut Envelope {
        &mut self.envelope
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

/// Response message for the `RevertToSnapshot` hook.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct MessageRevertToSnapshotResponse {
    #[serde(flatten)]
    pub envelope: Envelope,
}

impl MessageRevertToSnapshotResponse {
    /// Creates the message with its kind tag stamped.
    #[must_use]
    pub fn new(error: Option<WireError>) -> Self {
        Self {
            envelope: Envelope::with_error(MessageKind::RevertToSnapshotResponse, error),
        }
    }
}

impl MessageHandler for MessageRevertToSnapshotResponse {
    fn envelope(&self) -> &Envelope {
        &self.envelope
    }

    fn envelope_mut(&mut self) -> &mut Envelope {
        &mut self.envelope
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}
