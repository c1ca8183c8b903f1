use anchor_lang::prelude::*;

use crate::{
    state::error::FlipError, PAYOUT_MULTIPLIER, REVEAL_WINDOW_SLOTS,
};

#[derive(AnchorDeserialize, AnchorSerialize, InitSpace, Clone, Copy, PartialEq, Eq, Debug)]
pub enum CoinSide {
    Heads,
    Tails,
}

impl CoinSide {
    /// Maps a revealed random byte to a side by parity of its lowest bit.
    /// Deterministic and replayable, independent of any party's input
    /// after commit time.
    pub fn from_revealed_byte(byte: u8) -> Self {
        if byte % 2 == 0 {
            CoinSide::Heads
        } else {
            CoinSide::Tails
        }
    }
}

#[account]
#[derive(InitSpace)]
/// Per-player wager ledger. The account's own lamports back the tracked
/// balances, rent excluded.
pub struct PlayerState {
    pub owner: Pubkey,
    /// Lamports available to wager or withdraw.
    pub wager_balance: u64,
    /// Stake locked in the in-flight flip, zero when none.
    pub wagered_amount: u64,
    pub current_guess: Option<CoinSide>,
    /// The randomness commitment backing the in-flight flip,
    /// `Pubkey::default()` when none.
    pub randomness_account: Pubkey,
    /// Oracle seed slot captured at commit time, bounds reveal staleness.
    pub commit_slot: u64,
    /// Most recent resolved outcome, kept for display only.
    pub last_outcome: Option<CoinSide>,
    bump: u8,
}

impl PlayerState {
    pub fn new(owner: Pubkey, deposit: u64, bump: u8) -> Self {
        Self {
            owner,
            wager_balance: deposit,
            wagered_amount: 0,
            current_guess: None,
            randomness_account: Pubkey::default(),
            commit_slot: 0,
            last_outcome: None,
            bump,
        }
    }

    pub fn get_bump(&self) -> u8 {
        self.bump
    }

    pub fn is_owned_by(&self, owner: &Pubkey) -> bool {
        self.owner.eq(owner)
    }

    pub fn has_pending_flip(&self) -> bool {
        self.randomness_account.ne(&Pubkey::default())
    }

    pub fn credit(&mut self, amount: u64) -> Result<()> {
        self.wager_balance = self
            .wager_balance
            .checked_add(amount)
            .ok_or(ProgramError::ArithmeticOverflow)?;
        Ok(())
    }

    /// Binds a stake and a guess to a not-yet-revealed randomness
    /// commitment. All preconditions are verified before any field is
    /// touched, so a failure leaves the account unchanged.
    pub fn commit_wager(
        &mut self,
        randomness_account: Pubkey,
        seed_slot: u64,
        amount: u64,
        guess: CoinSide,
    ) -> Result<()> {
        require!(!self.has_pending_flip(), FlipError::FlipAlreadyInFlight);

        require_gt!(amount, 0, FlipError::InvalidAmount);

        require_gte!(
            self.wager_balance,
            amount,
            FlipError::InsufficientUserWagerBalance
        );

        self.wager_balance -= amount;
        self.wagered_amount = amount;
        self.current_guess = Some(guess);
        self.randomness_account = randomness_account;
        self.commit_slot = seed_slot;

        Ok(())
    }

    /// Verifies that a reveal observed at `current_slot` resolves the
    /// stored commitment and arrived inside the staleness window.
    pub fn verify_reveal(
        &self,
        randomness_account: &Pubkey,
        seed_slot: u64,
        current_slot: u64,
    ) -> Result<()> {
        require!(self.has_pending_flip(), FlipError::NoFlipInFlight);

        require_keys_eq!(
            *randomness_account,
            self.randomness_account,
            FlipError::RandomnessAccountMismatch
        );

        // A differing seed slot means the oracle account was re-seeded,
        // the commitment we bound to was resolved out of expected order.
        require_eq!(
            seed_slot,
            self.commit_slot,
            FlipError::RandomnessAlreadyRevealed
        );

        let deadline = self
            .commit_slot
            .checked_add(REVEAL_WINDOW_SLOTS)
            .ok_or(ProgramError::ArithmeticOverflow)?;

        require_gte!(deadline, current_slot, FlipError::RandomnessExpired);

        Ok(())
    }

    /// A record can only be retired while no stake is escrowed against it,
    /// otherwise the stake would be stranded in the vault.
    pub fn verify_close(&self) -> Result<()> {
        require!(!self.has_pending_flip(), FlipError::FlipAlreadyInFlight);

        Ok(())
    }

    /// Resolves the in-flight flip against the revealed outcome and clears
    /// all pending state. Returns the payout owed from the escrow, zero on
    /// a lost flip.
    pub fn settle_wager(&mut self, outcome: CoinSide) -> Result<u64> {
        require!(self.has_pending_flip(), FlipError::NoFlipInFlight);

        let payout = if self.current_guess == Some(outcome) {
            let winnings = self
                .wagered_amount
                .checked_mul(PAYOUT_MULTIPLIER)
                .ok_or(ProgramError::ArithmeticOverflow)?;

            self.wager_balance = self
                .wager_balance
                .checked_add(winnings)
                .ok_or(ProgramError::ArithmeticOverflow)?;

            winnings
        } else {
            // The stake stays forfeited in the escrow.
            0
        };

        self.wagered_amount = 0;
        self.current_guess = None;
        self.randomness_account = Pubkey::default();
        self.commit_slot = 0;
        self.last_outcome = Some(outcome);

        Ok(payout)
    }
}
