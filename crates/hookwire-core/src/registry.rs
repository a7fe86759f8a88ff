// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! The hook signature registry.
//!
//! Every fact the generators need lives in one declarative table:
//! [`BUILTIN_SIGNATURES`]. Each [`HookSignature`] names a blockchain hook,
//! its ordered inputs and outputs, whether the hook can fail, and the
//! bad-return expressions the gateway falls back to when the exchange
//! itself breaks down. Message kinds are never written down anywhere;
//! [`Registry`] derives them positionally, so the enumeration stays dense
//! by construction.

use thiserror::Error;

/// Semantic parameter types a hook signature may use.
///
/// The set is closed: adding a signature never requires touching the
/// generators, but adding a type does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamType {
    /// Raw bytes (`Vec<u8>`): addresses, hashes, codes, seeds.
    Bytes,
    /// `u64`: nonces, rounds, timestamps.
    U64,
    /// `u32`: epochs, shard identifiers.
    U32,
    /// `i64`: snapshot handles.
    I64,
    /// `bool` flags.
    Bool,
    /// Full key/value state (`BTreeMap<String, Vec<u8>>`).
    BytesMap,
    /// Built-in function name list (`Vec<String>`).
    FunctionNames,
    /// A contract call description (`ContractCallInput`).
    CallInput,
    /// A VM execution outcome (`VmOutput`).
    VmOutput,
    /// An account snapshot (`UserAccount`).
    Account,
    /// An ESDT token payload (`EsdtToken`).
    EsdtToken,
}

impl ParamType {
    /// The Rust type the generators emit for this parameter.
    #[must_use]
    pub fn rust_type(self) -> &'static str {
        match self {
            ParamType::Bytes => "Vec<u8>",
            ParamType::U64 => "u64",
            ParamType::U32 => "u32",
            ParamType::I64 => "i64",
            ParamType::Bool => "bool",
            ParamType::BytesMap => "BTreeMap<String, Vec<u8>>",
            ParamType::FunctionNames => "Vec<String>",
            ParamType::CallInput => "ContractCallInput",
            ParamType::VmOutput => "VmOutput",
            ParamType::Account => "UserAccount",
            ParamType::EsdtToken => "EsdtToken",
        }
    }

    /// Whether the Rust type is `Copy`; the replier generator only emits
    /// `.clone()` for types that are not.
    #[must_use]
    pub fn is_copy(self) -> bool {
        matches!(
            self,
            ParamType::U64 | ParamType::U32 | ParamType::I64 | ParamType::Bool
        )
    }
}

/// One hook's complete wire contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookSignature {
    /// PascalCase hook name; every derived identifier starts from it.
    pub name: &'static str,
    /// Ordered input parameters, snake_case names.
    pub inputs: &'static [(&'static str, ParamType)],
    /// Ordered output parameters, snake_case names.
    pub outputs: &'static [(&'static str, ParamType)],
    /// Whether the hook implementation itself can fail.
    pub has_error: bool,
    /// One fallback expression per output, used by the gateway when the
    /// exchange breaks down on a signature that cannot report errors.
    pub bad_return: &'static [&'static str],
}

/// The seven message kinds that exist independently of any hook.
pub const FIXED_KINDS: [&str; 7] = [
    "Initialize",
    "Stop",
    "ContractDeployRequest",
    "ContractCallRequest",
    "ContractResponse",
    "DiagnoseWaitRequest",
    "DiagnoseWaitResponse",
];

/// The built-in blockchain hook table.
///
/// Order matters: kind values are assigned positionally, so reordering or
/// inserting entries renumbers the wire protocol.
pub const BUILTIN_SIGNATURES: &[HookSignature] = &[
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
    },
    HookSignature {
        name: "GetStorageData",
        inputs: &[
            ("account_address", ParamType::Bytes),
            ("index", ParamType::Bytes),
        ],
        outputs: &[("data", ParamType::Bytes)],
        has_error: true,
        bad_return: &["Vec::new()"],
    },
    HookSignature {
        name: "GetBlockhash",
        inputs: &[("nonce", ParamType::U64)],
        outputs: &[("result", ParamType::Bytes)],
        has_error: true,
        bad_return: &["Vec::new()"],
    },
    HookSignature {
        name: "LastNonce",
        inputs: &[],
        outputs: &[("result", ParamType::U64)],
        has_error: false,
        bad_return: &["0"],
    },
    HookSignature {
        name: "LastRound",
        inputs: &[],
        outputs: &[("result", ParamType::U64)],
        has_error: false,
        bad_return: &["0"],
    },
    HookSignature {
        name: "LastTimeStamp",
        inputs: &[],
        outputs: &[("result", ParamType::U64)],
        has_error: false,
        bad_return: &["0"],
    },
    HookSignature {
        name: "LastRandomSeed",
        inputs: &[],
        outputs: &[("result", ParamType::Bytes)],
        has_error: false,
        bad_return: &["Vec::new()"],
    },
    HookSignature {
        name: "LastEpoch",
        inputs: &[],
        outputs: &[("result", ParamType::U32)],
        has_error: false,
        bad_return: &["0"],
    },
    HookSignature {
        name: "GetStateRootHash",
        inputs: &[],
        outputs: &[("result", ParamType::Bytes)],
        has_error: false,
        bad_return: &["Vec::new()"],
    },
    HookSignature {
        name: "CurrentNonce",
        inputs: &[],
        outputs: &[("result", ParamType::U64)],
        has_error: false,
        bad_return: &["0"],
    },
    HookSignature {
        name: "CurrentRound",
        inputs: &[],
        outputs: &[("result", ParamType::U64)],
        has_error: false,
        bad_return: &["0"],
    },
    HookSignature {
        name: "CurrentTimeStamp",
        inputs: &[],
        outputs: &[("result", ParamType::U64)],
        has_error: false,
        bad_return: &["0"],
    },
    HookSignature {
        name: "CurrentRandomSeed",
        inputs: &[],
        outputs: &[("result", ParamType::Bytes)],
        has_error: false,
        bad_return: &["Vec::new()"],
    },
    HookSignature {
        name: "CurrentEpoch",
        inputs: &[],
        outputs: &[("result", ParamType::U32)],
        has_error: false,
        bad_return: &["0"],
    },
    HookSignature {
        name: "ProcessBuiltInFunction",
        inputs: &[("input", ParamType::CallInput)],
        outputs: &[("vm_output", ParamType::VmOutput)],
        has_error: true,
        bad_return: &["VmOutput::default()"],
    },
    HookSignature {
        name: "GetBuiltinFunctionNames",
        inputs: &[],
        outputs: &[("result", ParamType::FunctionNames)],
        has_error: false,
        bad_return: &["Vec::new()"],
    },
    HookSignature {
        name: "GetAllState",
        inputs: &[("address", ParamType::Bytes)],
        outputs: &[("result", ParamType::BytesMap)],
        has_error: true,
        bad_return: &["BTreeMap::new()"],
    },
    HookSignature {
        name: "GetUserAccount",
        inputs: &[("address", ParamType::Bytes)],
        outputs: &[("result", ParamType::Account)],
        has_error: true,
        bad_return: &["UserAccount::default()"],
    },
    HookSignature {
        name: "GetCode",
        inputs: &[("account", ParamType::Account)],
        outputs: &[("code", ParamType::Bytes)],
        has_error: false,
        bad_return: &["Vec::new()"],
    },
    HookSignature {
        name: "GetShardOfAddress",
        inputs: &[("address", ParamType::Bytes)],
        outputs: &[("result", ParamType::U32)],
        has_error: false,
        bad_return: &["0"],
    },
    HookSignature {
        name: "IsSmartContract",
        inputs: &[("address", ParamType::Bytes)],
        outputs: &[("result", ParamType::Bool)],
        has_error: false,
        bad_return: &["false"],
    },
    HookSignature {
        name: "IsPayable",
        inputs: &[("address", ParamType::Bytes)],
        outputs: &[("result", ParamType::Bool)],
        has_error: true,
        bad_return: &["false"],
    },
    HookSignature {
        name: "SaveCompiledCode",
        inputs: &[
            ("code_hash", ParamType::Bytes),
            ("code", ParamType::Bytes),
        ],
        outputs: &[],
        has_error: false,
        bad_return: &[],
    },
    HookSignature {
        name: "GetCompiledCode",
        inputs: &[("code_hash", ParamType::Bytes)],
        outputs: &[("found", ParamType::Bool), ("code", ParamType::Bytes)],
        has_error: false,
        bad_return: &["false", "Vec::new()"],
    },
    HookSignature {
        name: "ClearCompiledCodes",
        inputs: &[],
        outputs: &[],
        has_error: false,
        bad_return: &[],
    },
    HookSignature {
        name: "GetESDTToken",
        inputs: &[
            ("address", ParamType::Bytes),
            ("token_id", ParamType::Bytes),
            ("nonce", ParamType::U64),
        ],
        outputs: &[("result", ParamType::EsdtToken)],
        has_error: true,
        bad_return: &["EsdtToken::default()"],
    },
    HookSignature {
        name: "GetSnapshot",
        inputs: &[],
        outputs: &[("result", ParamType::I64)],
        has_error: false,
        bad_return: &["0"],
    },
    HookSignature {
        name: "RevertToSnapshot",
        inputs: &[("snapshot", ParamType::I64)],
        outputs: &[],
        has_error: true,
        bad_return: &[],
    },
];

/// A defect in the signature table itself.
///
/// These are caught before any generation happens; they are never a runtime
/// condition of the generated protocol.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("hook `{name}`: {actual} bad-return expressions for {expected} outputs")]
    BadReturnArity {
        name: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("hook `{name}` is declared more than once")]
    DuplicateName { name: &'static str },
}

/// An ordered set of hook signatures plus the kind arithmetic derived from it.
#[derive(Debug, Clone)]
pub struct Registry {
    signatures: Vec<HookSignature>,
}

impl Registry {
    /// The registry of built-in blockchain hooks.
    #[must_use]
    pub fn builtin() -> Self {
        Registry {
            signatures: BUILTIN_SIGNATURES.to_vec(),
        }
    }

    /// A registry over an explicit signature list, in kind-assignment order.
    #[must_use]
    pub fn new(signatures: Vec<HookSignature>) -> Self {
        Registry { signatures }
    }

    #[must_use]
    pub fn signatures(&self) -> &[HookSignature] {
        &self.signatures
    }

    /// Checks the schema invariants: bad-return arity matches output arity,
    /// and hook names are unique.
    pub fn validate(&self) -> Result<(), RegistryError> {
        for signature in &self.signatures {
            if signature.bad_return.len() != signature.outputs.len() {
                return Err(RegistryError::BadReturnArity {
                    name: signature.name,
                    expected: signature.outputs.len(),
                    actual: signature.bad_return.len(),
                });
            }
        }
        for (index, signature) in self.signatures.iter().enumerate() {
            if self.signatures[..index]
                .iter()
                .any(|earlier| earlier.name == signature.name)
            {
                return Err(RegistryError::DuplicateName {
                    name: signature.name,
                });
            }
        }
        Ok(())
    }

    /// Total number of message kinds: the fixed kinds, one request/response
    /// pair per signature, and `Undefined`.
    #[must_use]
    pub fn kind_count(&self) -> usize {
        FIXED_KINDS.len() + 2 * self.signatures.len() + 1
    }

    /// Wire value of the request kind for the signature at `index`.
    #[must_use]
    pub fn request_kind_value(&self, index: usize) -> usize {
        FIXED_KINDS.len() + 2 * index
    }

    /// Wire value of the response kind for the signature at `index`.
    #[must_use]
    pub fn response_kind_value(&self, index: usize) -> usize {
        FIXED_KINDS.len() + 2 * index + 1
    }

    /// Every kind name in wire-value order: fixed kinds, then per signature
    /// `<Name>Request`/`<Name>Response`, then `Undefined` last.
    #[must_use]
    pub fn kind_names(&self) -> Vec<String> {
        let mut names: Vec<String> = FIXED_KINDS.iter().map(|name| (*name).to_string()).collect();
        for signature in &self.signatures {
            names.push(format!("{}Request", signature.name));
            names.push(format!("{}Response", signature.name));
        }
        names.push("Undefined".to_string());
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_registry_is_valid() {
        Registry::builtin().validate().unwrap();
    }

    #[test]
    fn builtin_kind_space_is_dense_and_sized() {
        let registry = Registry::builtin();
        assert_eq!(registry.signatures().len(), 28);
        assert_eq!(registry.kind_count(), 64);
        let names = registry.kind_names();
        assert_eq!(names.len(), registry.kind_count());
        assert_eq!(names[0], "Initialize");
        assert_eq!(names[7], "NewAddressRequest");
        assert_eq!(names[8], "NewAddressResponse");
        assert_eq!(names[names.len() - 1], "Undefined");
    }

    #[test]
    fn kind_values_interleave_requests_and_responses() {
        let registry = Registry::builtin();
        for index in 0..registry.signatures().len() {
            assert_eq!(
                registry.response_kind_value(index),
                registry.request_kind_value(index) + 1
            );
        }
        assert_eq!(registry.request_kind_value(0), FIXED_KINDS.len());
        assert_eq!(
            registry.response_kind_value(registry.signatures().len() - 1),
            registry.kind_count() - 2
        );
    }

    #[test]
    fn kind_names_never_collide() {
        let registry = Registry::builtin();
        let mut names = registry.kind_names();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), registry.kind_count());
    }

    #[test]
    fn bad_return_arity_mismatch_is_rejected() {
        let registry = Registry::new(vec![HookSignature {
            name: "Broken",
            inputs: &[],
            outputs: &[("result", ParamType::U64)],
            has_error: false,
            bad_return: &[],
        }]);
        assert_eq!(
            registry.validate(),
            Err(RegistryError::BadReturnArity {
                name: "Broken",
                expected: 1,
                actual: 0,
            })
        );
    }

    #[test]
    fn duplicate_hook_names_are_rejected() {
        let signature = HookSignature {
            name: "Twice",
            inputs: &[],
            outputs: &[],
            has_error: false,
            bad_return: &[],
        };
        let registry = Registry::new(vec![signature.clone(), signature]);
        assert_eq!(
            registry.validate(),
            Err(RegistryError::DuplicateName { name: "Twice" })
        );
    }

    #[test]
    fn every_builtin_output_has_a_fallback_expression() {
        for signature in Registry::builtin().signatures() {
            assert_eq!(
                signature.bad_return.len(),
                signature.outputs.len(),
                "hook {}",
                signature.name
            );
        }
    }
}
