use anchor_lang::{
    prelude::*,
    system_program::{
        Transfer,
        transfer
    }
};

use crate::{FlipError, PLAYER_SEED, PlayerInitializedEvent, PlayerState};

/// Arguments for creating a player's wager account.
/// - amount: Initial balance transferred in from the player's wallet.
#[derive(AnchorDeserialize, AnchorSerialize, Clone)]
pub struct InitializeArgs {
    pub amount: u64,
}

#[derive(Accounts)]
pub struct InitializeAccounts<'info> {
    // Re-invoking for an owner that already has an account fails here,
    // the address is fixed by the seeds.
    #[account(
        init,
        payer = player,
        space = 8 + PlayerState::INIT_SPACE,
        seeds = [PLAYER_SEED, player.key().as_ref()],
        bump
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
    ctx: &Context<InitializeAccounts>,
    args: &InitializeArgs,
) -> Result<()> {

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

pub fn initialize_handler(
    ctx: Context<InitializeAccounts>,
    args: InitializeArgs,
) -> Result<()> {

    checks(&ctx, &args)?;

    let player_state = &mut ctx.accounts.player_state;

    player_state.set_inner(PlayerState::new(
        ctx.accounts.player.key(),
        args.amount,
        ctx.bumps.player_state,
    ));

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
        PlayerInitializedEvent{
            player: ctx.accounts.player.key(),
            amount: args.amount
        }
    );

    Ok(())
}
