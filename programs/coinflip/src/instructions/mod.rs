pub mod initialize_escrow;
pub use initialize_escrow::*;

pub mod withdraw_escrow;
pub use withdraw_escrow::*;

pub mod initialize;
pub use initialize::*;

pub mod deposit;
pub use deposit::*;

pub mod coin_flip;
pub use coin_flip::*;

pub mod settle_flip;
pub use settle_flip::*;

pub mod close_account;
pub use close_account::*;
