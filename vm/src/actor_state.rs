// Copyright 2019-2022 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use crate::code::CodeID;
use crate::token::TokenAmount;
use serde::{Deserialize, Serialize};

/// State of all actor implementations.
#[derive(PartialEq, Eq, Clone, Debug, Serialize, Deserialize)]
pub struct ActorState {
    /// Reference to the code for the actor.
    pub code: CodeID,
    /// Sequence of the actor, the next expected nonce of messages it sends.
    pub sequence: u64,
    /// Tokens available to the actor.
    pub balance: TokenAmount,
}

impl ActorState {
    /// Constructor for actor state.
    pub fn new(code: CodeID, sequence: u64, balance: TokenAmount) -> Self {
        Self {
            code,
            sequence,
            balance,
        }
    }

    /// Returns true if the actor is owned by an external key, as opposed to
    /// a contract or miner actor.
    pub fn is_account_actor(&self) -> bool {
        self.code.is_account()
    }
}
