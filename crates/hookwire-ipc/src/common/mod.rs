// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Message envelope, concrete message types, and the kind-indexed factory,
//! shared by both sides of the process boundary.

pub mod factory;
pub mod message;
pub mod messages;
pub mod model;
