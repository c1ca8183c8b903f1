use anchor_lang::prelude::*;
use switchboard_on_demand::RandomnessAccountData;

use crate::{
    CoinSide, ESCROW_SEED, EscrowVault, FlipError, FlipSettledEvent, PLAYER_SEED, PlayerState,
};

#[derive(Accounts)]
pub struct SettleFlipAccounts<'info> {
    #[account(
        mut,
        seeds = [PLAYER_SEED, player.key().as_ref()],
        bump = player_state.get_bump()
    )]
    pub player_state: Account<'info, PlayerState>,

    #[account(
        mut,
        seeds = [ESCROW_SEED],
        bump = escrow.get_bump()
    )]
    pub escrow: Account<'info, EscrowVault>,

    /// CHECK: This account's data is parsed and validated in the handler
    pub randomness_account_data: UncheckedAccount<'info>,

    pub player: Signer<'info>,
}

#[inline(always)]
fn checks(
    ctx: &Context<SettleFlipAccounts>,
) -> Result<()> {

    require!(
        ctx.accounts.player_state.is_owned_by(ctx.accounts.player.key),
        FlipError::AccountNotFound
    );

    Ok(())
}

pub fn settle_flip_handler(
    ctx: Context<SettleFlipAccounts>,
) -> Result<()> {

    checks(&ctx)?;

    let clock = Clock::get()?;

    let revealed_value = {
        let randomness_data =
            RandomnessAccountData::parse(ctx.accounts.randomness_account_data.data.borrow())
                .map_err(|_| FlipError::RandomnessAccountMismatch)?;

        ctx.accounts.player_state.verify_reveal(
            ctx.accounts.randomness_account_data.key,
            randomness_data.seed_slot,
            clock.slot,
        )?;

        // Unresolved randomness is the one retryable condition, the caller
        // simply resubmits once the oracle has revealed.
        randomness_data
            .get_value(clock.slot)
            .map_err(|_| FlipError::RandomnessNotResolved)?
    };

    let outcome = CoinSide::from_revealed_byte(revealed_value[0]);

    let wagered_amount = ctx.accounts.player_state.wagered_amount;

    let guess = ctx
        .accounts
        .player_state
        .current_guess
        .ok_or(FlipError::NoFlipInFlight)?;

    let payout = ctx.accounts.player_state.settle_wager(outcome)?;

    ctx.accounts.escrow.release(wagered_amount)?;

    if payout > 0 {
        let escrow_info = ctx.accounts.escrow.to_account_info();

        let pool = escrow_info.lamports().saturating_sub(
            Rent::get()?.minimum_balance(escrow_info.data_len())
        );

        require_gte!(
            pool,
            payout,
            FlipError::InsufficientBalance
        );

        **ctx.accounts.escrow.to_account_info().try_borrow_mut_lamports()? -= payout;
        **ctx.accounts.player_state.to_account_info().try_borrow_mut_lamports()? += payout;
    }

    emit!(
        FlipSettledEvent{
            player: ctx.accounts.player.key(),
            guess,
            outcome,
            wagered_amount,
            payout
        }
    );

    Ok(())
}
