// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Factory behaviour over the whole kind space.

use hookwire_ipc::common::factory::create_message;
use hookwire_ipc::common::message::{MessageStop, MessageUndefined};
use hookwire_ipc::common::messages::{
    MessageKind, MessageLastNonceRequest, MessageNewAddressResponse, KIND_COUNT,
};

#[test]
fn every_kind_materializes_with_its_own_tag() {
    for kind in MessageKind::ALL {
        let message = create_message(kind as u32);
        assert_eq!(message.kind(), kind, "factory mislabeled {kind:?}");
        assert!(message.error().is_none());
    }
}

#[test]
fn factory_output_has_the_concrete_type_of_the_kind() {
    let message = create_message(MessageKind::Stop as u32);
    assert!(message.as_any().downcast_ref::<MessageStop>().is_some());

    let message = create_message(MessageKind::LastNonceRequest as u32);
    assert!(message
        .as_any()
        .downcast_ref::<MessageLastNonceRequest>()
        .is_some());

    let message = create_message(MessageKind::NewAddressResponse as u32);
    assert!(message
        .as_any()
        .downcast_ref::<MessageNewAddressResponse>()
        .is_some());
}

#[test]
fn tags_outside_the_enumeration_yield_undefined_messages() {
    for raw in [KIND_COUNT as u32, 999, u32::MAX] {
        let message = create_message(raw);
        assert_eq!(message.kind(), MessageKind::Undefined);
        assert!(message.as_any().downcast_ref::<MessageUndefined>().is_some());
    }
}

#[test]
fn the_kind_table_is_dense_and_complete() {
    assert_eq!(MessageKind::ALL.len(), KIND_COUNT);
    for (value, kind) in MessageKind::ALL.iter().enumerate() {
        assert_eq!(*kind as usize, value);
        assert_eq!(MessageKind::from_u32(value as u32), Some(*kind));
    }
    assert_eq!(MessageKind::from_u32(KIND_COUNT as u32), None);
    assert_eq!(MessageKind::ALL[KIND_COUNT - 1], MessageKind::Undefined);
}
