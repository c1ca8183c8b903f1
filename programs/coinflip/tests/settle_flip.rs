use anchor_lang::prelude::Pubkey;

mod common;
use common::utils::{
    player_with_pending_flip,
    COMMIT_SLOT,
    INITIAL_BALANCE,
    STAKE,
};

use coinflip::{CoinSide, FlipError, PlayerState, REVEAL_WINDOW_SLOTS};

#[test]
fn test_settle_pays_double_on_correct_guess() {
    let (_, mut player) = player_with_pending_flip(INITIAL_BALANCE, STAKE, CoinSide::Heads)
        .expect("Could not create player");

    let payout = player
        .settle_wager(CoinSide::Heads)
        .expect("Settle should succeed");

    assert_eq!(payout, 2 * STAKE);
    assert_eq!(player.wager_balance, INITIAL_BALANCE - STAKE + 2 * STAKE);
    assert_eq!(player.wagered_amount, 0);
    assert_eq!(player.current_guess, None);
    assert_eq!(player.randomness_account, Pubkey::default());
    assert_eq!(player.commit_slot, 0);
    assert_eq!(player.last_outcome, Some(CoinSide::Heads));
}

#[test]
fn test_settle_forfeits_stake_on_wrong_guess() {
    let (_, mut player) = player_with_pending_flip(INITIAL_BALANCE, STAKE, CoinSide::Heads)
        .expect("Could not create player");

    let payout = player
        .settle_wager(CoinSide::Tails)
        .expect("Settle should succeed");

    assert_eq!(payout, 0);
    assert_eq!(player.wager_balance, INITIAL_BALANCE - STAKE);
    assert_eq!(player.wagered_amount, 0);
    assert_eq!(player.current_guess, None);
    assert_eq!(player.randomness_account, Pubkey::default());
    assert_eq!(player.last_outcome, Some(CoinSide::Tails));
}

#[test]
fn test_reveal_rejects_mismatched_randomness_account() {
    let (randomness_account, player) =
        player_with_pending_flip(INITIAL_BALANCE, STAKE, CoinSide::Heads)
            .expect("Could not create player");

    let result = player.verify_reveal(&Pubkey::new_unique(), COMMIT_SLOT, COMMIT_SLOT + 1);

    assert_eq!(result, Err(FlipError::RandomnessAccountMismatch.into()));

    // The flip stays in flight, untouched.
    assert_eq!(player.randomness_account, randomness_account);
    assert_eq!(player.wagered_amount, STAKE);
    assert_eq!(player.wager_balance, INITIAL_BALANCE - STAKE);
}

#[test]
fn test_reveal_rejects_reseeded_commitment() {
    let (randomness_account, player) =
        player_with_pending_flip(INITIAL_BALANCE, STAKE, CoinSide::Heads)
            .expect("Could not create player");

    // The oracle account now carries a commitment from a later slot than
    // the one the flip was bound to.
    let result = player.verify_reveal(&randomness_account, COMMIT_SLOT + 5, COMMIT_SLOT + 6);

    assert_eq!(result, Err(FlipError::RandomnessAlreadyRevealed.into()));
}

#[test]
fn test_reveal_rejects_stale_reveal() {
    let (randomness_account, player) =
        player_with_pending_flip(INITIAL_BALANCE, STAKE, CoinSide::Heads)
            .expect("Could not create player");

    // At the edge of the window the reveal is still accepted.
    let at_deadline =
        player.verify_reveal(&randomness_account, COMMIT_SLOT, COMMIT_SLOT + REVEAL_WINDOW_SLOTS);

    assert_eq!(at_deadline, Ok(()));

    // One slot past it the flip has expired for good.
    let past_deadline = player.verify_reveal(
        &randomness_account,
        COMMIT_SLOT,
        COMMIT_SLOT + REVEAL_WINDOW_SLOTS + 1,
    );

    assert_eq!(past_deadline, Err(FlipError::RandomnessExpired.into()));
}

#[test]
fn test_reveal_rejects_when_no_flip_in_flight() {
    let player = PlayerState::new(Pubkey::new_unique(), INITIAL_BALANCE, 255);

    let result = player.verify_reveal(&Pubkey::new_unique(), COMMIT_SLOT, COMMIT_SLOT + 1);

    assert_eq!(result, Err(FlipError::NoFlipInFlight.into()));
}

#[test]
fn test_settle_rejects_when_no_flip_in_flight() {
    let mut player = PlayerState::new(Pubkey::new_unique(), INITIAL_BALANCE, 255);

    let result = player.settle_wager(CoinSide::Heads);

    assert_eq!(result, Err(FlipError::NoFlipInFlight.into()));
    assert_eq!(player.wager_balance, INITIAL_BALANCE);
    assert_eq!(player.last_outcome, None);
}

#[test]
fn test_settled_flip_cannot_be_settled_again() {
    let (_, mut player) = player_with_pending_flip(INITIAL_BALANCE, STAKE, CoinSide::Heads)
        .expect("Could not create player");

    player
        .settle_wager(CoinSide::Heads)
        .expect("First settle should succeed");

    let balance_after_first = player.wager_balance;

    let result = player.settle_wager(CoinSide::Heads);

    assert_eq!(result, Err(FlipError::NoFlipInFlight.into()));
    assert_eq!(player.wager_balance, balance_after_first);
}

#[test]
fn test_outcome_follows_low_bit_parity() {
    for _ in 0..64 {
        let byte = rand::random::<u8>();

        let expected = if byte % 2 == 0 {
            CoinSide::Heads
        } else {
            CoinSide::Tails
        };

        assert_eq!(CoinSide::from_revealed_byte(byte), expected);
    }
}
