pub mod airdrop;
pub mod outcome;
pub mod state;

pub use airdrop::*;
pub use outcome::*;
pub use state::*;
