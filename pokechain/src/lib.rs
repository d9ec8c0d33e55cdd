pub use pokechain_core as core;

pub mod chain;
pub mod criteria;
pub mod error;
pub mod generator;

pub use chain::Chain;
pub use crate::core::pokemon;
pub use crate::core::{Dex, Pokemon, Type, Typing};
pub use criteria::Criteria;
pub use error::Error;
pub use generator::Generator;

pub type Result<T, E = Error> = std::result::Result<T, E>;
