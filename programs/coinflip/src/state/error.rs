use anchor_lang::prelude::*;

#[error_code]
pub enum FlipError {
    #[msg("Transfer could not be funded from the signer's balance.")]
    InsufficientBalance,
    #[msg("The randomness commitment was resolved out of the expected order.")]
    RandomnessAlreadyRevealed,
    #[msg("The wager exceeds the available wager balance.")]
    InsufficientUserWagerBalance,
    #[msg("The provided randomness account does not match the stored one.")]
    RandomnessAccountMismatch,
    #[msg("The randomness reveal arrived outside the allowed window.")]
    RandomnessExpired,
    #[msg("The randomness value has not been revealed yet, retry settlement.")]
    RandomnessNotResolved,
    #[msg("The escrow vault cannot cover the worst-case payout.")]
    EscrowFundError,
    // Not raised by a handler: re-initialization is stopped by the `init`
    // constraint on the fixed-seed address before the handler runs. Kept
    // so the client-facing error table names the failure mode.
    #[msg("A player account already exists for this owner.")]
    AccountAlreadyExists,
    #[msg("No player account exists for this owner.")]
    AccountNotFound,
    #[msg("Amount must be greater than zero.")]
    InvalidAmount,
    #[msg("A flip is already in flight for this account.")]
    FlipAlreadyInFlight,
    #[msg("No flip is in flight for this account.")]
    NoFlipInFlight,
    #[msg("Invalid escrow authority.")]
    InvalidAuthority,
}
