pub const PLAYER_SEED: &[u8] = b"player";

pub const ESCROW_SEED: &[u8] = b"escrow";

/// How many slots past the commit a reveal is still accepted.
/// Roughly one minute of slots.
pub const REVEAL_WINDOW_SLOTS: u64 = 150;

/// A winning flip pays back the stake plus an equal amount of winnings.
pub const PAYOUT_MULTIPLIER: u64 = 2;
