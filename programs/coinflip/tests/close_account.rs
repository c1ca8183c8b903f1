mod common;
use common::utils::{
    funded_player,
    player_with_pending_flip,
    INITIAL_BALANCE,
    STAKE,
};

use coinflip::{CoinSide, FlipError};

#[test]
fn test_close_refused_while_flip_in_flight() {
    let (randomness_account, player) =
        player_with_pending_flip(INITIAL_BALANCE, STAKE, CoinSide::Heads)
            .expect("Could not create player");

    let result = player.verify_close();

    assert_eq!(result, Err(FlipError::FlipAlreadyInFlight.into()));

    // The in-flight flip is untouched.
    assert_eq!(player.randomness_account, randomness_account);
    assert_eq!(player.wagered_amount, STAKE);
}

#[test]
fn test_close_allowed_with_no_flip_in_flight() {
    let (_, player) = funded_player(INITIAL_BALANCE).expect("Could not create player");

    assert_eq!(player.verify_close(), Ok(()));
}

#[test]
fn test_close_allowed_after_settlement() {
    let (_, mut player) = player_with_pending_flip(INITIAL_BALANCE, STAKE, CoinSide::Heads)
        .expect("Could not create player");

    assert_eq!(player.verify_close(), Err(FlipError::FlipAlreadyInFlight.into()));

    player
        .settle_wager(CoinSide::Tails)
        .expect("Settle should succeed");

    assert_eq!(player.verify_close(), Ok(()));
}
