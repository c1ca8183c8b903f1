pub mod player;
pub use player::*;

pub mod escrow;
pub use escrow::*;

pub mod error;
pub use error::*;

pub mod event;
pub use event::*;

pub mod constants;
pub use constants::*;
