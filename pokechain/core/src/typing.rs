use crate::Error;

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// An elemental type.
///
/// Variants are declared alphabetically, so the derived order is the
/// canonical order of a [`Typing`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Type {
    Bug,
    Dark,
    Dragon,
    Electric,
    Fairy,
    Fighting,
    Fire,
    Flying,
    Ghost,
    Grass,
    Ground,
    Ice,
    Normal,
    Poison,
    Psychic,
    Rock,
    Steel,
    Water,
}

impl Type {
    pub const ALL: [Self; 18] = [
        Self::Bug,
        Self::Dark,
        Self::Dragon,
        Self::Electric,
        Self::Fairy,
        Self::Fighting,
        Self::Fire,
        Self::Flying,
        Self::Ghost,
        Self::Grass,
        Self::Ground,
        Self::Ice,
        Self::Normal,
        Self::Poison,
        Self::Psychic,
        Self::Rock,
        Self::Steel,
        Self::Water,
    ];

    /// The upper-case tag used by dex files, e.g. `FIRE`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Bug => "BUG",
            Self::Dark => "DARK",
            Self::Dragon => "DRAGON",
            Self::Electric => "ELECTRIC",
            Self::Fairy => "FAIRY",
            Self::Fighting => "FIGHTING",
            Self::Fire => "FIRE",
            Self::Flying => "FLYING",
            Self::Ghost => "GHOST",
            Self::Grass => "GRASS",
            Self::Ground => "GROUND",
            Self::Ice => "ICE",
            Self::Normal => "NORMAL",
            Self::Poison => "POISON",
            Self::Psychic => "PSYCHIC",
            Self::Rock => "ROCK",
            Self::Steel => "STEEL",
            Self::Water => "WATER",
        }
    }
}

impl FromStr for Type {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();

        Self::ALL
            .into_iter()
            .find(|type_| type_.name().eq_ignore_ascii_case(tag))
            .ok_or_else(|| Error::UnknownType(tag.to_owned()))
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The one or two distinct types of a Pokémon, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Typing {
    primary: Type,
    secondary: Option<Type>,
}

impl Typing {
    /// Builds a typing out of any amount of types.
    ///
    /// Duplicates collapse, so `[Fire, Fire]` is a monotype. Fails unless
    /// one or two distinct types remain.
    pub fn new(types: impl IntoIterator<Item = Type>) -> Result<Self, Error> {
        let types: BTreeSet<Type> = types.into_iter().collect();
        let mut distinct = types.iter().copied();

        match (distinct.next(), distinct.next(), distinct.next()) {
            (Some(primary), secondary, None) => Ok(Self { primary, secondary }),
            _ => Err(Error::InvalidTyping(types.len())),
        }
    }

    pub fn mono(type_: Type) -> Self {
        Self {
            primary: type_,
            secondary: None,
        }
    }

    pub fn dual(a: Type, b: Type) -> Result<Self, Error> {
        if a == b {
            return Err(Error::InvalidTyping(1));
        }

        Ok(Self {
            primary: a.min(b),
            secondary: Some(a.max(b)),
        })
    }

    pub fn len(&self) -> usize {
        if self.secondary.is_some() { 2 } else { 1 }
    }

    pub fn is_mono(&self) -> bool {
        self.secondary.is_none()
    }

    pub fn contains(&self, type_: Type) -> bool {
        self.primary == type_ || self.secondary == Some(type_)
    }

    pub fn iter(&self) -> impl Iterator<Item = Type> + use<> {
        std::iter::once(self.primary).chain(self.secondary)
    }

    /// Whether both typings have at least one type in common.
    pub fn shares(&self, other: &Typing) -> bool {
        self.iter().any(|type_| other.contains(type_))
    }
}

impl IntoIterator for Typing {
    type Item = Type;
    type IntoIter = std::iter::Chain<std::iter::Once<Type>, std::option::IntoIter<Type>>;

    fn into_iter(self) -> Self::IntoIter {
        std::iter::once(self.primary).chain(self.secondary)
    }
}

impl fmt::Display for Typing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.secondary {
            Some(secondary) => write!(f, "{},{secondary}", self.primary),
            None => write!(f, "{}", self.primary),
        }
    }
}
