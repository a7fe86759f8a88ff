// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! The message envelope, the [`MessageHandler`] trait, and the fixed
//! non-hook messages.
//!
//! Every message, fixed or generated, embeds an [`Envelope`]: the kind tag
//! that routes it and an error slot that any response may carry. The fixed
//! messages here drive the process lifecycle (initialize/stop), contract
//! execution, and diagnostics; they exist independently of the hook
//! signature registry.

use std::any::Any;

use serde::{Deserialize, Serialize};

use crate::common::messages::MessageKind;
use crate::common::model::{ContractCallInput, ContractCreateInput, VmOutput};
use crate::error::WireError;

/// The part of every message that crosses the wire regardless of shape.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    pub kind: MessageKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<WireError>,
}

impl Envelope {
    /// An envelope stamped with the given kind and no error.
    #[must_use]
    pub fn for_kind(kind: MessageKind) -> Self {
        Envelope { kind, error: None }
    }

    /// An envelope stamped with the given kind and an optional error.
    #[must_use]
    pub fn with_error(kind: MessageKind, error: Option<WireError>) -> Self {
        Envelope { kind, error }
    }
}

/// Behaviour shared by every protocol message.
///
/// `as_any`/`into_any` exist for the two downcast sites of the protocol:
/// repliers downcasting requests by reference, and the gateway downcasting
/// replies by value.
pub trait MessageHandler: std::fmt::Debug {
    fn envelope(&self) -> &Envelope;

    fn envelope_mut(&mut self) -> &mut Envelope;

    fn as_any(&self) -> &dyn Any;

    fn into_any(self: Box<Self>) -> Box<dyn Any>;

    /// The kind tag that routes this message.
    fn kind(&self) -> MessageKind {
        self.envelope().kind
    }

    fn set_kind(&mut self, kind: MessageKind) {
        self.envelope_mut().kind = kind;
    }

    fn error(&self) -> Option<&WireError> {
        self.envelope().error.as_ref()
    }

    fn set_error(&mut self, error: WireError) {
        self.envelope_mut().error = Some(error);
    }
}

macro_rules! impl_message_handler {
    ($($message:ty),+ $(,)?) => {
        $(
            impl MessageHandler for $message {
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
        )+
    };
}

/// First message of a session; carries the executor's startup arguments.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct MessageInitialize {
    #[serde(flatten)]
    pub envelope: Envelope,
    pub arguments: Vec<String>,
}

impl MessageInitialize {
    #[must_use]
    pub fn new(arguments: Vec<String>) -> Self {
        MessageInitialize {
            envelope: Envelope::for_kind(MessageKind::Initialize),
            arguments,
        }
    }
}

/// Orderly shutdown request for the executor process.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct MessageStop {
    #[serde(flatten)]
    pub envelope: Envelope,
}

impl MessageStop {
    #[must_use]
    pub fn new() -> Self {
        MessageStop {
            envelope: Envelope::for_kind(MessageKind::Stop),
        }
    }
}

/// Asks the executor to deploy a contract.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct MessageContractDeployRequest {
    #[serde(flatten)]
    pub envelope: Envelope,
    pub create_input: ContractCreateInput,
}

impl MessageContractDeployRequest {
    #[must_use]
    pub fn new(create_input: ContractCreateInput) -> Self {
        MessageContractDeployRequest {
            envelope: Envelope::for_kind(MessageKind::ContractDeployRequest),
            create_input,
        }
    }
}

/// Asks the executor to run one contract call.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct MessageContractCallRequest {
    #[serde(flatten)]
    pub envelope: Envelope,
    pub call_input: ContractCallInput,
}

impl MessageContractCallRequest {
    #[must_use]
    pub fn new(call_input: ContractCallInput) -> Self {
        MessageContractCallRequest {
            envelope: Envelope::for_kind(MessageKind::ContractCallRequest),
            call_input,
        }
    }
}

/// The executor's answer to a deploy or call request.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct MessageContractResponse {
    #[serde(flatten)]
    pub envelope: Envelope,
    pub vm_output: VmOutput,
}

impl MessageContractResponse {
    #[must_use]
    pub fn new(vm_output: VmOutput, error: Option<WireError>) -> Self {
        MessageContractResponse {
            envelope: Envelope::with_error(MessageKind::ContractResponse, error),
            vm_output,
        }
    }
}

/// Diagnostic request: asks the peer to sleep before answering.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct MessageDiagnoseWaitRequest {
    #[serde(flatten)]
    pub envelope: Envelope,
    pub milliseconds: u64,
}

impl MessageDiagnoseWaitRequest {
    #[must_use]
    pub fn new(milliseconds: u64) -> Self {
        MessageDiagnoseWaitRequest {
            envelope: Envelope::for_kind(MessageKind::DiagnoseWaitRequest),
            milliseconds,
        }
    }
}

/// Acknowledges a diagnostic wait.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct MessageDiagnoseWaitResponse {
    #[serde(flatten)]
    pub envelope: Envelope,
}

impl MessageDiagnoseWaitResponse {
    #[must_use]
    pub fn new() -> Self {
        MessageDiagnoseWaitResponse {
            envelope: Envelope::for_kind(MessageKind::DiagnoseWaitResponse),
        }
    }
}

/// Fallback message for kinds nobody claims; carries faults in its error
/// slot where a concrete shape is unavailable.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct MessageUndefined {
    #[serde(flatten)]
    pub envelope: Envelope,
}

impl MessageUndefined {
    #[must_use]
    pub fn new() -> Self {
        MessageUndefined {
            envelope: Envelope::for_kind(MessageKind::Undefined),
        }
    }
}

impl_message_handler!(
    MessageInitialize,
    MessageStop,
    MessageContractDeployRequest,
    MessageContractCallRequest,
    MessageContractResponse,
    MessageDiagnoseWaitRequest,
    MessageDiagnoseWaitResponse,
    MessageUndefined,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_envelope_is_undefined_and_error_free() {
        let envelope = Envelope::default();
        assert_eq!(envelope.kind, MessageKind::Undefined);
        assert_eq!(envelope.error, None);
    }

    #[test]
    fn constructors_stamp_the_kind_tag() {
        assert_eq!(MessageStop::new().kind(), MessageKind::Stop);
        assert_eq!(
            MessageDiagnoseWaitRequest::new(250).kind(),
            MessageKind::DiagnoseWaitRequest
        );
        assert_eq!(
            MessageInitialize::new(vec!["--trace".to_string()]).kind(),
            MessageKind::Initialize
        );
    }

    #[test]
    fn error_slot_is_settable_through_the_trait() {
        let mut message = MessageContractResponse::new(Default::default(), None);
        assert!(message.error().is_none());
        message.set_error(WireError::Transport("pipe closed".to_string()));
        assert_eq!(
            message.error(),
            Some(&WireError::Transport("pipe closed".to_string()))
        );
    }

    #[test]
    fn undefined_message_survives_a_serde_round_trip() {
        let mut message = MessageUndefined::new();
        message.set_error(WireError::UnsupportedRequestKind(40));
        let encoded = serde_json::to_string(&message).unwrap();
        let decoded: MessageUndefined = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded.envelope, message.envelope);
    }
}
