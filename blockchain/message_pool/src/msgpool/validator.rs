// Copyright 2019-2022 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use crate::config::{BLOCK_GAS_LIMIT, MAX_NONCE_GAP};
use crate::errors::Error;
use message::{Message, SignedMessage};
use num_traits::Signed;
use vm::{ActorState, TokenAmount};

/// Stateless shape checks on a message: self-send, value sign and gas limit.
/// Presumes the signature has already been verified.
pub(crate) fn check_message(msg: &SignedMessage) -> Result<(), Error> {
    if msg.to() == msg.from() {
        return Err(Error::SelfSend);
    }
    if msg.value().is_negative() {
        return Err(Error::NegativeValue);
    }
    if msg.gas_limit() > BLOCK_GAS_LIMIT {
        return Err(Error::AboveBlockGasLimit);
    }
    Ok(())
}

/// Checks a message against the sender's state at the current head: actor
/// type, nonce window and balance coverage. `actor` is the sender's actor
/// state, or `None` when the sender is unknown on chain; `committed` is the
/// sum of funds required by the sender's messages already resident in the
/// pool. Presumes `check_message` has passed.
pub(crate) fn check_state(
    msg: &SignedMessage,
    actor: Option<&ActorState>,
    committed: &TokenAmount,
) -> Result<(), Error> {
    if let Some(actor) = actor {
        if !actor.is_account_actor() {
            return Err(Error::NonAccountActor);
        }
    }

    let base_nonce = actor.map(|a| a.sequence).unwrap_or(0);
    if msg.sequence() < base_nonce {
        return Err(Error::NonceTooLow);
    }
    if msg.sequence() > base_nonce + MAX_NONCE_GAP {
        return Err(Error::NonceGapExceeded);
    }

    let balance = actor.map(|a| a.balance.clone()).unwrap_or_default();
    if committed + msg.required_funds() > balance {
        return Err(Error::BalanceInsufficient);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use address::Address;
    use crypto::Signature;
    use message::UnsignedMessage;
    use num_bigint::BigInt;
    use vm::CodeID;

    fn smsg(from: u64, to: u64, sequence: u64) -> SignedMessage {
        let msg = UnsignedMessage::builder()
            .from(Address::new_id(from))
            .to(Address::new_id(to))
            .sequence(sequence)
            .build()
            .unwrap();
        SignedMessage::new_from_parts(msg, Signature::new(vec![0u8; 65]))
    }

    fn account_actor(sequence: u64, balance: u64) -> ActorState {
        ActorState::new(CodeID::Account, sequence, BigInt::from(balance))
    }

    #[test]
    fn self_send_rejected() {
        assert_eq!(check_message(&smsg(1, 1, 0)), Err(Error::SelfSend));
        assert_eq!(check_message(&smsg(1, 2, 0)), Ok(()));
    }

    #[test]
    fn negative_value_rejected() {
        let msg = UnsignedMessage::builder()
            .from(Address::new_id(1))
            .to(Address::new_id(2))
            .value(BigInt::from(-500_000_000i64))
            .build()
            .unwrap();
        let smsg = SignedMessage::new_from_parts(msg, Signature::new(vec![0u8; 65]));
        assert_eq!(check_message(&smsg), Err(Error::NegativeValue));
    }

    #[test]
    fn gas_limit_above_block_limit_rejected() {
        let msg = UnsignedMessage::builder()
            .from(Address::new_id(1))
            .to(Address::new_id(2))
            .gas_limit(BLOCK_GAS_LIMIT + 2000)
            .build()
            .unwrap();
        let smsg = SignedMessage::new_from_parts(msg, Signature::new(vec![0u8; 65]));
        assert_eq!(check_message(&smsg), Err(Error::AboveBlockGasLimit));
    }

    #[test]
    fn non_account_actor_rejected() {
        let actor = ActorState::new(CodeID::Miner, 0, BigInt::from(0));
        assert_eq!(
            check_state(&smsg(1, 2, 0), Some(&actor), &TokenAmount::default()),
            Err(Error::NonAccountActor)
        );
    }

    #[test]
    fn unknown_sender_has_zero_nonce_baseline() {
        assert_eq!(
            check_state(&smsg(1, 2, 0), None, &TokenAmount::default()),
            Ok(())
        );
        assert_eq!(
            check_state(&smsg(1, 2, MAX_NONCE_GAP + 1), None, &TokenAmount::default()),
            Err(Error::NonceGapExceeded)
        );
    }

    #[test]
    fn nonce_window() {
        let actor = account_actor(52, 0);
        assert_eq!(
            check_state(&smsg(1, 2, 51), Some(&actor), &TokenAmount::default()),
            Err(Error::NonceTooLow)
        );
        assert_eq!(
            check_state(&smsg(1, 2, 103), Some(&actor), &TokenAmount::default()),
            Ok(())
        );
        assert_eq!(
            check_state(
                &smsg(1, 2, 52 + MAX_NONCE_GAP + 1),
                Some(&actor),
                &TokenAmount::default()
            ),
            Err(Error::NonceGapExceeded)
        );
    }

    #[test]
    fn balance_covers_committed_funds() {
        let msg = UnsignedMessage::builder()
            .from(Address::new_id(1))
            .to(Address::new_id(2))
            .gas_price(BigInt::from(20))
            .gas_limit(1000)
            .build()
            .unwrap();
        let smsg = SignedMessage::new_from_parts(msg, Signature::new(vec![0u8; 65]));

        // message alone costs 20_000
        let actor = account_actor(0, 30_000);
        assert_eq!(check_state(&smsg, Some(&actor), &TokenAmount::default()), Ok(()));
        // a resident sibling has already committed most of the balance
        assert_eq!(
            check_state(&smsg, Some(&actor), &BigInt::from(20_000)),
            Err(Error::BalanceInsufficient)
        );
    }
}
