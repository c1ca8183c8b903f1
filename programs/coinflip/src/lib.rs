use anchor_lang::prelude::*;

declare_id!("9K9pR2GbQhvRMh9cMvDvLSEr7tr37wMa99u9tZfsAcS4");

pub mod instructions;
pub use instructions::*;

pub mod state;
pub use state::*;

#[program]
pub mod coinflip {
    use super::*;

    /// Creates the singleton escrow vault and funds it with initial
    /// house liquidity. The caller becomes the vault authority.
    pub fn initialize_escrow(
        ctx: Context<InitializeEscrowAccounts>,
        args: InitializeEscrowArgs,
    ) -> Result<()> {
        initialize_escrow_handler(ctx, args)
    }

    /// Withdraws house surplus from the escrow vault (authority only).
    /// Refused if the remaining pool could no longer cover every
    /// outstanding wager's worst-case payout.
    pub fn withdraw_escrow(
        ctx: Context<WithdrawEscrowAccounts>,
        args: WithdrawEscrowArgs,
    ) -> Result<()> {
        withdraw_escrow_handler(ctx, args)
    }

    /// Creates a player's wager account and funds it with an initial balance.
    pub fn initialize(
        ctx: Context<InitializeAccounts>,
        args: InitializeArgs,
    ) -> Result<()> {
        initialize_handler(ctx, args)
    }

    /// Tops up the player's wager balance.
    pub fn deposit(
        ctx: Context<DepositAccounts>,
        args: DepositArgs,
    ) -> Result<()> {
        deposit_handler(ctx, args)
    }

    /// Commits a wager and a Heads/Tails guess against a not-yet-revealed
    /// randomness commitment, moving the stake into the escrow vault.
    pub fn coin_flip(
        ctx: Context<CoinFlipAccounts>,
        args: CoinFlipArgs,
    ) -> Result<()> {
        coin_flip_handler(ctx, args)
    }

    /// Settles the in-flight flip once the committed randomness has been
    /// revealed. Safe to resubmit while the value is still unresolved.
    pub fn settle_flip(
        ctx: Context<SettleFlipAccounts>,
    ) -> Result<()> {
        settle_flip_handler(ctx)
    }

    /// Returns the remaining balance to the player and closes the account.
    /// Refused while a flip is in flight.
    pub fn close_account(
        ctx: Context<CloseAccountAccounts>,
    ) -> Result<()> {
        close_account_handler(ctx)
    }
}
