use anchor_lang::{
    prelude::*,
    system_program::{
        Transfer,
        transfer
    }
};

use crate::{DepositEvent, FlipError, PLAYER_SEED, PlayerState};

/// Arguments for topping up the player's wager balance.
/// Permitted while a flip is in flight, the stake for that flip is
/// already held in the escrow.
#[derive(AnchorDeserialize, AnchorSerialize, Clone)]
pub struct DepositArgs {
    pub amount: u64,
}

#[derive(Accounts)]
pub struct DepositAccounts<'info> {
    #[account(
        mut,
        seeds = [PLAYER_SEED, player.key().as_ref()],
        bump = player_state.get_bump()
    )]
    pub player_state: Account<'info, PlayerState>,

    #[account(
        mut
    )]
    pub player: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[inline(always)]
fn checks(
    ctx: &Context<DepositAccounts>,
    args: &DepositArgs,
) -> Result<()> {

    require!(
        ctx.accounts.player_state.is_owned_by(ctx.accounts.player.key),
        FlipError::AccountNotFound
    );

    require_gt!(
        args.amount,
        0,
        FlipError::InvalidAmount
    );

    require_gte!(
        ctx.accounts.player.lamports(),
        args.amount,
        FlipError::InsufficientBalance
    );

    Ok(())
}

pub fn deposit_handler(
    ctx: Context<DepositAccounts>,
    args: DepositArgs,
) -> Result<()> {

    checks(&ctx, &args)?;

    ctx.accounts.player_state.credit(args.amount)?;

    transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            Transfer{
                from: ctx.accounts.player.to_account_info(),
                to: ctx.accounts.player_state.to_account_info()
            }
        ),
        args.amount
    )?;

    emit!(
        DepositEvent{
            player: ctx.accounts.player.key(),
            amount: args.amount,
            wager_balance: ctx.accounts.player_state.wager_balance
        }
    );

    Ok(())
}
