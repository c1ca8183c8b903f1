use anchor_lang::prelude::*;
use switchboard_on_demand::RandomnessAccountData;

use crate::{
    CoinSide, ESCROW_SEED, EscrowVault, FlipCommittedEvent, FlipError, PLAYER_SEED, PlayerState,
};

/// Arguments for committing a wager.
/// - randomness_account: The Switchboard randomness account the flip is
///   bound to, it must already hold a commitment.
/// - amount: The stake, taken from the player's wager balance.
/// - guess: The side the player predicts.
#[derive(AnchorDeserialize, AnchorSerialize, Clone)]
pub struct CoinFlipArgs {
    pub randomness_account: Pubkey,
    pub amount: u64,
    pub guess: CoinSide,
}

#[derive(Accounts)]
pub struct CoinFlipAccounts<'info> {
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
    ctx: &Context<CoinFlipAccounts>,
    args: &CoinFlipArgs,
) -> Result<()> {

    require!(
        ctx.accounts.player_state.is_owned_by(ctx.accounts.player.key),
        FlipError::AccountNotFound
    );

    require_keys_eq!(
        ctx.accounts.randomness_account_data.key(),
        args.randomness_account,
        FlipError::RandomnessAccountMismatch
    );

    Ok(())
}

pub fn coin_flip_handler(
    ctx: Context<CoinFlipAccounts>,
    args: CoinFlipArgs,
) -> Result<()> {

    checks(&ctx, &args)?;

    let clock = Clock::get()?;

    let seed_slot = {
        let randomness_data =
            RandomnessAccountData::parse(ctx.accounts.randomness_account_data.data.borrow())
                .map_err(|_| FlipError::RandomnessAccountMismatch)?;

        randomness_data.seed_slot
    };

    // A commitment seeded ahead of the current slot cannot be bound to.
    require_gte!(
        clock.slot,
        seed_slot,
        FlipError::RandomnessAlreadyRevealed
    );

    let escrow_info = ctx.accounts.escrow.to_account_info();

    let pool = escrow_info.lamports().saturating_sub(
        Rent::get()?.minimum_balance(escrow_info.data_len())
    );

    // Admission is gated on the pool covering the worst-case payout of
    // every outstanding wager plus this one.
    ctx.accounts.escrow.ensure_headroom(pool, args.amount)?;

    ctx.accounts.player_state.commit_wager(
        args.randomness_account,
        seed_slot,
        args.amount,
        args.guess,
    )?;

    ctx.accounts.escrow.lock(args.amount)?;

    // The collateral moves into escrow at commit time, revealing is the
    // caller's responsibility.
    **ctx.accounts.player_state.to_account_info().try_borrow_mut_lamports()? -= args.amount;
    **ctx.accounts.escrow.to_account_info().try_borrow_mut_lamports()? += args.amount;

    emit!(
        FlipCommittedEvent{
            player: ctx.accounts.player.key(),
            randomness_account: args.randomness_account,
            amount: args.amount,
            guess: args.guess,
            commit_slot: seed_slot
        }
    );

    Ok(())
}
