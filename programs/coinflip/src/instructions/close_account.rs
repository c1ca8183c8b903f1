use anchor_lang::prelude::*;

use crate::{CloseAccountEvent, FlipError, PLAYER_SEED, PlayerState};

#[derive(Accounts)]
pub struct CloseAccountAccounts<'info> {
    // Closing returns the account's lamports, both the tracked balance
    // and the rent, to the player.
    #[account(
        mut,
        seeds = [PLAYER_SEED, player.key().as_ref()],
        bump = player_state.get_bump(),
        close = player
    )]
    pub player_state: Account<'info, PlayerState>,

    #[account(
        mut
    )]
    pub player: Signer<'info>,
}

#[inline(always)]
fn checks(
    ctx: &Context<CloseAccountAccounts>,
) -> Result<()> {

    require!(
        ctx.accounts.player_state.is_owned_by(ctx.accounts.player.key),
        FlipError::AccountNotFound
    );

    ctx.accounts.player_state.verify_close()
}

pub fn close_account_handler(
    ctx: Context<CloseAccountAccounts>,
) -> Result<()> {

    checks(&ctx)?;

    emit!(
        CloseAccountEvent{
            player: ctx.accounts.player.key(),
            refunded: ctx.accounts.player_state.wager_balance
        }
    );

    Ok(())
}
