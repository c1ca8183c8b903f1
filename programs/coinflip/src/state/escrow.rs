use anchor_lang::prelude::*;

use crate::{state::error::FlipError, PAYOUT_MULTIPLIER};

#[account]
#[derive(InitSpace)]
/// Singleton pool holding every currently at-risk stake. The lamports the
/// account carries above its rent-exempt minimum are the pooled balance.
pub struct EscrowVault {
    /// The house key allowed to withdraw surplus.
    pub authority: Pubkey,
    /// Sum of all players' in-flight stakes.
    pub locked: u64,
    bump: u8,
}

impl EscrowVault {
    pub fn new(authority: Pubkey, bump: u8) -> Self {
        Self {
            authority,
            locked: 0,
            bump,
        }
    }

    pub fn get_bump(&self) -> u8 {
        self.bump
    }

    pub fn is_authority(&self, authority: &Pubkey) -> bool {
        self.authority.eq(authority)
    }

    fn worst_case_liability(&self, extra_stake: u64) -> Result<u64> {
        self.locked
            .checked_add(extra_stake)
            .and_then(|locked| locked.checked_mul(PAYOUT_MULTIPLIER))
            .ok_or_else(|| ProgramError::ArithmeticOverflow.into())
    }

    /// Admits a new stake only if the pool, once the stake has arrived,
    /// still covers the worst-case payout of every outstanding wager
    /// including this one.
    pub fn ensure_headroom(&self, pool: u64, stake: u64) -> Result<()> {
        let funded = pool
            .checked_add(stake)
            .ok_or(ProgramError::ArithmeticOverflow)?;

        require_gte!(
            funded,
            self.worst_case_liability(stake)?,
            FlipError::EscrowFundError
        );

        Ok(())
    }

    /// Refuses a house withdrawal that would leave outstanding wagers
    /// uncovered.
    pub fn ensure_withdrawable(&self, pool: u64, amount: u64) -> Result<()> {
        let remaining = pool
            .checked_sub(amount)
            .ok_or(error!(FlipError::EscrowFundError))?;

        require_gte!(
            remaining,
            self.worst_case_liability(0)?,
            FlipError::EscrowFundError
        );

        Ok(())
    }

    pub fn lock(&mut self, stake: u64) -> Result<()> {
        self.locked = self
            .locked
            .checked_add(stake)
            .ok_or(ProgramError::ArithmeticOverflow)?;
        Ok(())
    }

    pub fn release(&mut self, stake: u64) -> Result<()> {
        self.locked = self
            .locked
            .checked_sub(stake)
            .ok_or(ProgramError::ArithmeticOverflow)?;
        Ok(())
    }
}
