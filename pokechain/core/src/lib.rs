mod dex;
mod error;
mod map;
mod source;

pub mod pokemon;
pub mod typing;

pub use dex::Dex;
pub use error::Error;
pub use pokemon::Pokemon;
pub use typing::{Type, Typing};
