// Copyright 2019-2022 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use cid::Cid;
use serde::{Deserialize, Serialize};

/// CodeID is the reference to the code which is attached to the Actor state.
/// There are builtin IDs and the option for custom code with a Cid.
#[derive(PartialEq, Eq, Clone, Debug, Hash, Serialize, Deserialize)]
pub enum CodeID {
    Account,
    Miner,
    CustomCode(Cid),
}

impl CodeID {
    /// Returns true if cid is builtin Actor.
    pub fn is_builtin(&self) -> bool {
        !matches!(*self, CodeID::CustomCode(_))
    }

    /// Returns true if the code belongs to an account actor.
    pub fn is_account(&self) -> bool {
        matches!(*self, CodeID::Account)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cid::Cid;

    #[test]
    fn builtin_checks() {
        assert!(CodeID::Account.is_builtin());
        assert!(CodeID::Miner.is_builtin());
        assert!(!CodeID::CustomCode(Cid::default()).is_builtin());
    }

    #[test]
    fn account_checks() {
        assert!(CodeID::Account.is_account());
        assert!(!CodeID::Miner.is_account());
        assert!(!CodeID::CustomCode(Cid::default()).is_account());
    }
}
