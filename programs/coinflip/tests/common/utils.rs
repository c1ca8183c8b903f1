use anchor_lang::prelude::Pubkey;
use anyhow::Result;
use coinflip::{CoinSide, EscrowVault, PlayerState};

pub const INITIAL_BALANCE: u64 = 1_000_000_000;

pub const STAKE: u64 = 100_000_000;

pub const COMMIT_SLOT: u64 = 1_000;

pub fn funded_player(deposit: u64) -> Result<(Pubkey, PlayerState)> {
    let owner = Pubkey::new_unique();

    Ok((owner, PlayerState::new(owner, deposit, 255)))
}

/// A player that has already committed a flip against a fresh randomness
/// account. Returns the randomness account key alongside the state.
pub fn player_with_pending_flip(
    deposit: u64,
    stake: u64,
    guess: CoinSide,
) -> Result<(Pubkey, PlayerState)> {
    let (_, mut player) = funded_player(deposit)?;

    let randomness_account = Pubkey::new_unique();

    player
        .commit_wager(randomness_account, COMMIT_SLOT, stake, guess)
        .expect("Could not commit wager");

    Ok((randomness_account, player))
}

pub fn funded_escrow() -> Result<EscrowVault> {
    Ok(EscrowVault::new(Pubkey::new_unique(), 254))
}
