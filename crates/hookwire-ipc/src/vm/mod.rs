// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! The calling side of the protocol.
//!
//! [`Transport`] is the seam a concrete process boundary plugs into; the
//! generated [`gateway::BlockchainGateway`] drives it one synchronous
//! exchange at a time. How messages are encoded into bytes is the
//! transport's business, not this crate's.

pub mod gateway;

use crate::common::message::MessageHandler;
use crate::error::WireError;

/// A synchronous, ordered message channel to the peer process.
pub trait Transport {
    /// Ships one message to the peer.
    fn send(&mut self, message: Box<dyn MessageHandler>) -> Result<(), WireError>;

    /// Blocks until the peer's next message arrives.
    fn receive(&mut self) -> Result<Box<dyn MessageHandler>, WireError>;

    /// One request/response exchange. The gateway keeps at most one request
    /// in flight, so the next received message is the reply.
    fn round_trip(
        &mut self,
        request: Box<dyn MessageHandler>,
    ) -> Result<Box<dyn MessageHandler>, WireError> {
        self.send(request)?;
        self.receive()
    }
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn send(&mut self, message: Box<dyn MessageHandler>) -> Result<(), WireError> {
        (**self).send(message)
    }

    fn receive(&mut self) -> Result<Box<dyn MessageHandler>, WireError> {
        (**self).receive()
    }
}
