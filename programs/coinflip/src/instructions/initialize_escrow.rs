use anchor_lang::{
    prelude::*,
    system_program::{
        Transfer,
        transfer
    }
};

use crate::{ESCROW_SEED, EscrowInitializedEvent, EscrowVault, FlipError};

/// Arguments for creating the escrow vault.
/// - amount: Initial house liquidity transferred into the vault, it is
///   what funds payouts before any stake has been forfeited.
#[derive(AnchorDeserialize, AnchorSerialize, Clone)]
pub struct InitializeEscrowArgs {
    pub amount: u64,
}

#[derive(Accounts)]
pub struct InitializeEscrowAccounts<'info> {
    #[account(
        init,
        payer = authority,
        space = 8 + EscrowVault::INIT_SPACE,
        seeds = [ESCROW_SEED],
        bump
    )]
    pub escrow: Account<'info, EscrowVault>,

    #[account(
        mut
    )]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

#[inline(always)]
fn checks(
    ctx: &Context<InitializeEscrowAccounts>,
    args: &InitializeEscrowArgs,
) -> Result<()> {

    require_gt!(
        args.amount,
        0,
        FlipError::InvalidAmount
    );

    require_gte!(
        ctx.accounts.authority.lamports(),
        args.amount,
        FlipError::InsufficientBalance
    );

    Ok(())
}

pub fn initialize_escrow_handler(
    ctx: Context<InitializeEscrowAccounts>,
    args: InitializeEscrowArgs,
) -> Result<()> {

    checks(&ctx, &args)?;

    let escrow = &mut ctx.accounts.escrow;

    escrow.set_inner(EscrowVault::new(
        ctx.accounts.authority.key(),
        ctx.bumps.escrow,
    ));

    transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            Transfer{
                from: ctx.accounts.authority.to_account_info(),
                to: ctx.accounts.escrow.to_account_info()
            }
        ),
        args.amount
    )?;

    emit!(
        EscrowInitializedEvent{
            authority: ctx.accounts.authority.key(),
            amount: args.amount
        }
    );

    Ok(())
}
