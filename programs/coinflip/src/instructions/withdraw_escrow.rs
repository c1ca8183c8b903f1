use anchor_lang::prelude::*;

use crate::{ESCROW_SEED, EscrowVault, EscrowWithdrawnEvent, FlipError};

/// Arguments for withdrawing house surplus from the escrow vault.
/// - amount: Lamports to withdraw, bounded by the pool headroom above the
///   worst-case payout of all outstanding wagers.
#[derive(AnchorDeserialize, AnchorSerialize, Clone)]
pub struct WithdrawEscrowArgs {
    pub amount: u64,
}

#[derive(Accounts)]
pub struct WithdrawEscrowAccounts<'info> {
    #[account(
        mut,
        seeds = [ESCROW_SEED],
        bump = escrow.get_bump()
    )]
    pub escrow: Account<'info, EscrowVault>,

    /// CHECK: Recipient account for the withdrawn funds
    #[account(
        mut
    )]
    pub recipient: UncheckedAccount<'info>,

    /// The authority must sign to authorize the withdrawal.
    pub authority: Signer<'info>,
}

#[inline(always)]
fn checks(
    ctx: &Context<WithdrawEscrowAccounts>,
    args: &WithdrawEscrowArgs,
) -> Result<()> {

    require!(
        ctx.accounts.escrow.is_authority(ctx.accounts.authority.key),
        FlipError::InvalidAuthority
    );

    let escrow_info = ctx.accounts.escrow.to_account_info();

    // The rent-exempt minimum never counts towards the pool.
    let pool = escrow_info.lamports().saturating_sub(
        Rent::get()?.minimum_balance(escrow_info.data_len())
    );

    ctx.accounts.escrow.ensure_withdrawable(pool, args.amount)
}

pub fn withdraw_escrow_handler(
    ctx: Context<WithdrawEscrowAccounts>,
    args: WithdrawEscrowArgs,
) -> Result<()> {

    checks(&ctx, &args)?;

    **ctx.accounts.escrow.to_account_info().try_borrow_mut_lamports()? -= args.amount;
    **ctx.accounts.recipient.to_account_info().try_borrow_mut_lamports()? += args.amount;

    emit!(
        EscrowWithdrawnEvent{
            authority: ctx.accounts.authority.key(),
            recipient: ctx.accounts.recipient.key(),
            amount: args.amount
        }
    );

    Ok(())
}
