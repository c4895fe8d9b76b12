// Copyright 2019-2022 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

mod message;
mod signed_message;
mod unsigned_message;

pub use self::message::Message;
pub use self::signed_message::SignedMessage;
pub use self::unsigned_message::{MessageBuilder, UnsignedMessage};
