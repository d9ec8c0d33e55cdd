use crate::Pokemon;

use serde::{Serialize, Serializer};
use std::fmt;

/// An ordered sequence of Pokémon where each one shares a type with the
/// previous one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain<'a> {
    pokemon: Vec<&'a Pokemon>,
}

impl<'a> Chain<'a> {
    pub(crate) fn new(pokemon: Vec<&'a Pokemon>) -> Self {
        Self { pokemon }
    }

    pub fn pokemon(&self) -> &[&'a Pokemon] {
        &self.pokemon
    }

    pub fn names(&self) -> Vec<&'a str> {
        self.pokemon.iter().map(|&pokemon| pokemon.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.pokemon.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pokemon.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Pokemon> + '_ {
        self.pokemon.iter().copied()
    }
}

impl<'b, 'a> IntoIterator for &'b Chain<'a> {
    type Item = &'a Pokemon;
    type IntoIter = std::iter::Copied<std::slice::Iter<'b, &'a Pokemon>>;

    fn into_iter(self) -> Self::IntoIter {
        self.pokemon.iter().copied()
    }
}

impl fmt::Display for Chain<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, pokemon) in self.pokemon.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }

            f.write_str(pokemon.name())?;
        }

        Ok(())
    }
}

/// Chains serialize as the list of their names.
impl Serialize for Chain<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.pokemon.iter().map(|pokemon| pokemon.name()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pokemon::Number;
    use crate::{Criteria, Dex, Generator, Type, Typing};

    #[test]
    fn chains_display_as_linked_names() {
        let pikachu = Pokemon::new("Pikachu", Typing::mono(Type::Electric), Number(25));
        let magnemite = Pokemon::new(
            "Magnemite",
            Typing::dual(Type::Electric, Type::Steel).unwrap(),
            Number(81),
        );

        let chain = Chain::new(vec![&pikachu, &magnemite]);

        assert_eq!(chain.to_string(), "PIKACHU -> MAGNEMITE");
        assert_eq!(chain.names(), ["PIKACHU", "MAGNEMITE"]);
        assert_eq!(Chain::new(Vec::new()).to_string(), "");
    }

    #[test]
    fn chains_serialize_as_upper_case_names() {
        let dex = Dex::from_iter([Pokemon::new("a", Typing::mono(Type::Fire), Number(1))]);

        let chain = Generator::new(
            &dex,
            Criteria {
                length: 2,
                typing_limit: 0,
                type_limit: 0,
                ..Criteria::default()
            }
            .seeded(0),
        )
        .unwrap()
        .generate()
        .unwrap();

        assert_eq!(
            serde_json::to_value(&chain).unwrap(),
            serde_json::json!(["A", "A"])
        );
    }
}
