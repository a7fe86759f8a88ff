// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Serde behaviour of the message types. The byte-level encoding belongs to
//! the transport; JSON here only proves the derives compose correctly.

use hookwire_ipc::common::message::MessageHandler;
use hookwire_ipc::common::messages::{
    MessageKind, MessageNewAddressRequest, MessageRevertToSnapshotResponse,
};
use hookwire_ipc::error::WireError;

#[test]
fn request_fields_and_kind_survive_encoding() {
    let request = MessageNewAddressRequest::new(b"alice".to_vec(), 7, b"wasm".to_vec());
    let encoded = serde_json::to_string(&request).unwrap();
    let decoded: MessageNewAddressRequest = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded.kind(), MessageKind::NewAddressRequest);
    assert_eq!(decoded.creator_address, b"alice".to_vec());
    assert_eq!(decoded.creator_nonce, 7);
    assert_eq!(decoded.vm_type, b"wasm".to_vec());
}

#[test]
fn envelope_errors_survive_encoding() {
    let response =
        MessageRevertToSnapshotResponse::new(Some(WireError::Hook("unknown snapshot".into())));
    let encoded = serde_json::to_string(&response).unwrap();
    let decoded: MessageRevertToSnapshotResponse = serde_json::from_str(&encoded).unwrap();
    assert_eq!(
        decoded.envelope.error,
        Some(WireError::Hook("unknown snapshot".to_string()))
    );
}

#[test]
fn absent_errors_are_omitted_from_the_encoding() {
    let response = MessageRevertToSnapshotResponse::new(None);
    let encoded = serde_json::to_string(&response).unwrap();
    assert!(!encoded.contains("error"));
}
