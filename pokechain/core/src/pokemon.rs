use crate::Typing;

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pokemon {
    name: String,
    typing: Typing,
    number: Number,
}

impl Pokemon {
    pub fn new(name: impl AsRef<str>, typing: Typing, number: Number) -> Self {
        Self {
            name: name.as_ref().to_uppercase(),
            typing,
            number,
        }
    }

    /// The upper-case name of the Pokémon.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn typing(&self) -> Typing {
        self.typing
    }

    pub fn number(&self) -> Number {
        self.number
    }
}

impl fmt::Display for Pokemon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A national dex number. Forms share the number of their base species.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Number(pub u32);

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:0>3}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Type;

    #[test]
    fn names_are_upper_case() {
        let pokemon = Pokemon::new("Mr. Mime", Typing::mono(Type::Psychic), Number(122));

        assert_eq!(pokemon.name(), "MR. MIME");
        assert_eq!(pokemon.to_string(), "MR. MIME");
        assert_eq!(pokemon.number().to_string(), "#122");
    }
}
