// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Wire-facing domain types referenced by hook signatures.
//!
//! Deliberately slim: these carry what crosses the process boundary, not
//! the node's full account or execution machinery.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Everything the VM needs to deploy a contract.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractCreateInput {
    pub caller_address: Vec<u8>,
    pub contract_code: Vec<u8>,
    pub arguments: Vec<Vec<u8>>,
    pub call_value: Vec<u8>,
    pub gas_provided: u64,
}

/// Everything the VM needs to run one contract call.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractCallInput {
    pub caller_address: Vec<u8>,
    pub recipient_address: Vec<u8>,
    pub function: String,
    pub arguments: Vec<Vec<u8>>,
    pub call_value: Vec<u8>,
    pub gas_provided: u64,
}

/// The outcome of executing a contract or built-in function.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VmOutput {
    pub return_code: u64,
    pub return_message: String,
    pub return_data: Vec<Vec<u8>>,
    pub gas_remaining: u64,
    pub storage_updates: BTreeMap<String, Vec<u8>>,
}

/// An account snapshot as the node sees it.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccount {
    pub address: Vec<u8>,
    pub nonce: u64,
    pub balance: Vec<u8>,
    pub code: Vec<u8>,
    pub code_hash: Vec<u8>,
    pub root_hash: Vec<u8>,
}

/// An ESDT token payload attached to an address.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EsdtToken {
    pub token_type: u32,
    pub value: Vec<u8>,
    pub properties: Vec<u8>,
}
