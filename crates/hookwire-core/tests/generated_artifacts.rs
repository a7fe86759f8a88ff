// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Keeps the committed artifacts in `hookwire-ipc` byte-identical with
//! generator output. A failure here means someone edited a generated file
//! by hand or changed a generator without regenerating.

use hookwire_core::codegen::{generate, Target};
use hookwire_core::registry::Registry;

fn assert_up_to_date(target: Target, committed: &str) {
    let generated = generate(&Registry::builtin(), target)
        .unwrap_or_else(|error| panic!("generating {target:?} failed: {error}"));
    assert_eq!(
        generated, committed,
        "the committed {:?} artifact is stale; regenerate with `hookwire {}`",
        target,
        target.command_name()
    );
}

#[test]
fn messages_artifact_is_up_to_date() {
    assert_up_to_date(
        Target::Messages,
        include_str!("../../hookwire-ipc/src/common/messages.rs"),
    );
}

#[test]
fn repliers_artifact_is_up_to_date() {
    assert_up_to_date(
        Target::Repliers,
        include_str!("../../hookwire-ipc/src/node/repliers.rs"),
    );
}

#[test]
fn reply_slots_artifact_is_up_to_date() {
    assert_up_to_date(
        Target::ReplySlots,
        include_str!("../../hookwire-ipc/src/node/reply_slots.rs"),
    );
}

#[test]
fn gateway_artifact_is_up_to_date() {
    assert_up_to_date(
        Target::Gateway,
        include_str!("../../hookwire-ipc/src/vm/gateway.rs"),
    );
}

#[test]
fn factory_artifact_is_up_to_date() {
    assert_up_to_date(
        Target::Factory,
        include_str!("../../hookwire-ipc/src/common/factory.rs"),
    );
}
