pub mod build;
pub mod card;
pub mod deck;

pub use build::*;
pub use card::*;
pub use deck::*;
