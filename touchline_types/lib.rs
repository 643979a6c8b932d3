pub mod errors;
pub mod player;
pub mod stats;

pub use errors::Result;
