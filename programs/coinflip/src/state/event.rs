use anchor_lang::prelude::*;

use crate::CoinSide;

#[event]
pub struct EscrowInitializedEvent {
    pub authority: Pubkey,
    pub amount: u64,
}

#[event]
pub struct EscrowWithdrawnEvent {
    pub authority: Pubkey,
    pub recipient: Pubkey,
    pub amount: u64,
}

#[event]
pub struct PlayerInitializedEvent {
    pub player: Pubkey,
    pub amount: u64,
}

#[event]
pub struct DepositEvent {
    pub player: Pubkey,
    pub amount: u64,
    pub wager_balance: u64,
}

#[event]
pub struct FlipCommittedEvent {
    pub player: Pubkey,
    pub randomness_account: Pubkey,
    pub amount: u64,
    pub guess: CoinSide,
    pub commit_slot: u64,
}

#[event]
pub struct FlipSettledEvent {
    pub player: Pubkey,
    pub guess: CoinSide,
    pub outcome: CoinSide,
    pub wagered_amount: u64,
    pub payout: u64,
}

#[event]
pub struct CloseAccountEvent {
    pub player: Pubkey,
    pub refunded: u64,
}
