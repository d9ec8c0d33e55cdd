use crate::Error;

use serde::{Deserialize, Serialize};

/// The rules a generated chain must follow.
///
/// Limits of `0` disable the respective check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Criteria {
    /// The exact amount of Pokémon in a chain.
    pub length: usize,
    /// How many times the same exact typing may appear.
    pub typing_limit: u32,
    /// How many times a single type may appear, counting both types of
    /// dual-typed Pokémon.
    pub type_limit: u32,
    pub allow_monotype: bool,
    pub random_seed: Option<u64>,
}

impl Criteria {
    pub fn validate(&self) -> Result<(), Error> {
        if self.length == 0 {
            return Err(Error::InvalidLength(self.length));
        }

        Ok(())
    }

    pub fn seeded(self, seed: u64) -> Self {
        Self {
            random_seed: Some(seed),
            ..self
        }
    }
}

impl Default for Criteria {
    fn default() -> Self {
        Self {
            length: 5,
            typing_limit: 1,
            type_limit: 3,
            allow_monotype: true,
            random_seed: None,
        }
    }
}
