use crate::map::Index;
use crate::pokemon;
use crate::{Pokemon, Type, Typing};

use std::collections::HashMap;
use std::fmt;

/// An indexed collection of Pokémon.
///
/// A [`Dex`] only ever grows. Adding a Pokémon whose name is already
/// present replaces it in the name index, but the typing, type and number
/// indexes keep referencing the replaced entry too.
#[derive(Clone, Default)]
pub struct Dex {
    entries: Vec<Pokemon>,
    names: HashMap<String, usize>,
    order: Vec<usize>,
    typings: Index<Typing>,
    types: Index<Type>,
    numbers: Index<pokemon::Number>,
}

impl Dex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, pokemon: impl IntoIterator<Item = Pokemon>) {
        for pokemon in pokemon {
            self.insert(pokemon);
        }
    }

    pub fn insert(&mut self, pokemon: Pokemon) {
        let position = self.entries.len();

        match self.names.get(pokemon.name()) {
            Some(&slot) => {
                log::debug!("Replacing {} in name index", pokemon.name());

                self.order[slot] = position;
            }
            None => {
                let _ = self.names.insert(pokemon.name().to_owned(), self.order.len());
                self.order.push(position);
            }
        }

        self.typings.insert(pokemon.typing(), position);

        for type_ in pokemon.typing() {
            self.types.insert(type_, position);
        }

        self.numbers.insert(pokemon.number(), position);
        self.entries.push(pokemon);
    }

    /// Finds a Pokémon by name, ignoring case.
    pub fn name(&self, name: &str) -> Option<&Pokemon> {
        let slot = self.names.get(&name.trim().to_uppercase())?;

        Some(&self.entries[self.order[*slot]])
    }

    /// All Pokémon with exactly one of the given typings, bucket by bucket.
    pub fn typing(&self, typings: impl IntoIterator<Item = Typing>) -> Vec<&Pokemon> {
        typings
            .into_iter()
            .flat_map(|typing| self.resolve(self.typings.get(&typing)))
            .collect()
    }

    /// All Pokémon having any of the given types, bucket by bucket.
    ///
    /// A dual-typed Pokémon shows up once per requested type it has.
    pub fn types(&self, types: impl IntoIterator<Item = Type>) -> Vec<&Pokemon> {
        types
            .into_iter()
            .flat_map(|type_| self.resolve(self.types.get(&type_)))
            .collect()
    }

    pub fn number(&self, numbers: impl IntoIterator<Item = pokemon::Number>) -> Vec<&Pokemon> {
        numbers
            .into_iter()
            .flat_map(|number| self.resolve(self.numbers.get(&number)))
            .collect()
    }

    /// Iterates over the current Pokémon of every name, in the order names
    /// were first added.
    pub fn iter(&self) -> impl Iterator<Item = &Pokemon> {
        self.order.iter().map(|&position| &self.entries[position])
    }

    /// The amount of distinct names.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    fn resolve<'a>(&'a self, positions: &'a [usize]) -> impl Iterator<Item = &'a Pokemon> + 'a {
        positions.iter().map(|&position| &self.entries[position])
    }
}

impl Extend<Pokemon> for Dex {
    fn extend<I: IntoIterator<Item = Pokemon>>(&mut self, pokemon: I) {
        self.add(pokemon);
    }
}

impl FromIterator<Pokemon> for Dex {
    fn from_iter<I: IntoIterator<Item = Pokemon>>(pokemon: I) -> Self {
        let mut dex = Self::new();
        dex.add(pokemon);
        dex
    }
}

impl<'a> IntoIterator for &'a Dex {
    type Item = &'a Pokemon;
    type IntoIter = Box<dyn Iterator<Item = &'a Pokemon> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

impl fmt::Debug for Dex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dex")
            .field("pokemon", &self.len())
            .field("entries", &self.entries.len())
            .field("typings", &self.typings.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pokemon::Number;

    fn pokemon(name: &str, types: &[Type], number: u32) -> Pokemon {
        Pokemon::new(name, Typing::new(types.iter().copied()).unwrap(), Number(number))
    }

    fn sample() -> Dex {
        Dex::from_iter([
            pokemon("Charmander", &[Type::Fire], 4),
            pokemon("Squirtle", &[Type::Water], 7),
            pokemon("Volcanion", &[Type::Fire, Type::Water], 721),
            pokemon("Charizard", &[Type::Fire, Type::Flying], 6),
            pokemon("Mega Charizard X", &[Type::Fire, Type::Dragon], 6),
        ])
    }

    fn names<'a>(pokemon: impl IntoIterator<Item = &'a Pokemon>) -> Vec<&'a str> {
        pokemon.into_iter().map(Pokemon::name).collect()
    }

    #[test]
    fn every_pokemon_is_reachable_from_every_index() {
        let dex = sample();

        for pokemon in &dex {
            assert_eq!(dex.name(pokemon.name()), Some(pokemon));
            assert!(dex.typing([pokemon.typing()]).contains(&pokemon));
            assert!(dex.number([pokemon.number()]).contains(&pokemon));

            for type_ in pokemon.typing() {
                assert!(dex.types([type_]).contains(&pokemon));
            }
        }

        assert_eq!(dex.len(), 5);
    }

    #[test]
    fn name_lookup_ignores_case() {
        let dex = sample();

        assert_eq!(dex.name("squirtle").map(Pokemon::name), Some("SQUIRTLE"));
        assert_eq!(dex.name("Bulbasaur"), None);
    }

    #[test]
    fn lookups_concatenate_buckets_in_argument_order() {
        let dex = sample();

        assert_eq!(
            names(dex.types([Type::Water, Type::Fire])),
            [
                "SQUIRTLE",
                "VOLCANION",
                "CHARMANDER",
                "VOLCANION",
                "CHARIZARD",
                "MEGA CHARIZARD X"
            ]
        );
        assert_eq!(
            names(dex.typing([
                Typing::mono(Type::Water),
                Typing::mono(Type::Grass),
                Typing::mono(Type::Fire),
            ])),
            ["SQUIRTLE", "CHARMANDER"]
        );
        assert_eq!(
            names(dex.number([Number(6), Number(1), Number(4)])),
            ["CHARIZARD", "MEGA CHARIZARD X", "CHARMANDER"]
        );
        assert!(dex.types([Type::Ghost]).is_empty());
    }

    #[test]
    fn iteration_follows_first_insertion_order() {
        let dex = sample();

        assert_eq!(
            names(dex.iter()),
            [
                "CHARMANDER",
                "SQUIRTLE",
                "VOLCANION",
                "CHARIZARD",
                "MEGA CHARIZARD X"
            ]
        );
    }

    // Replacing a name only updates the name index. The other indexes keep
    // the stale entry alongside the new one.
    #[test]
    fn duplicate_names_only_replace_the_name_index() {
        let mut dex = sample();

        dex.insert(pokemon("Squirtle", &[Type::Grass], 7));

        assert_eq!(dex.len(), 5);
        assert_eq!(
            dex.name("SQUIRTLE").map(Pokemon::typing),
            Some(Typing::mono(Type::Grass))
        );
        assert_eq!(names(dex.iter())[1], "SQUIRTLE");
        assert_eq!(
            dex.iter().nth(1).map(Pokemon::typing),
            Some(Typing::mono(Type::Grass))
        );

        assert_eq!(names(dex.types([Type::Water])), ["SQUIRTLE", "VOLCANION"]);
        assert_eq!(names(dex.types([Type::Grass])), ["SQUIRTLE"]);
        assert_eq!(names(dex.number([Number(7)])), ["SQUIRTLE", "SQUIRTLE"]);
    }
}
