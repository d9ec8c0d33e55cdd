use crate::{Chain, Criteria, Dex, Error, Pokemon, Type, Typing};

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use std::collections::BTreeMap;
use std::vec;

/// Builds random chains out of a [`Dex`] by backtracking search.
///
/// A generator borrows its dex and owns its random source. Seeded
/// generators reseed on every [`Generator::generate`] call, so they always
/// produce the same chain.
#[derive(Debug)]
pub struct Generator<'a> {
    dex: &'a Dex,
    criteria: Criteria,
    rng: StdRng,
}

impl<'a> Generator<'a> {
    pub fn new(dex: &'a Dex, criteria: Criteria) -> Result<Self, Error> {
        criteria.validate()?;

        let rng = match criteria.random_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(Self {
            dex,
            criteria,
            rng,
        })
    }

    pub fn criteria(&self) -> &Criteria {
        &self.criteria
    }

    /// Finds a chain satisfying the criteria of the generator.
    ///
    /// Candidates for each link are shuffled and tried in order, backtracking
    /// whenever a partial chain cannot be completed. The first complete chain
    /// is returned. If every candidate is exhausted, the search fails with
    /// [`Error::NoChainFound`].
    ///
    /// The search is exhaustive and thus exponential in the worst case.
    /// Nothing is memoized beyond the recurrence limits.
    pub fn generate(&mut self) -> Result<Chain<'a>, Error> {
        if let Some(seed) = self.criteria.random_seed {
            self.rng = StdRng::seed_from_u64(seed);
        }

        let length = self.criteria.length;

        log::debug!("Generating chain: {:?}", self.criteria);

        let mut chain: Vec<&'a Pokemon> = Vec::with_capacity(length);
        let mut tally = Tally::default();
        let mut frames = vec![self.frame(&chain, &tally)];
        let mut backtracks = 0_usize;

        while let Some(frame) = frames.last_mut() {
            let Some(pokemon) = frame.next() else {
                let _ = frames.pop();

                if let Some(pokemon) = chain.pop() {
                    tally.remove(pokemon);
                    backtracks += 1;
                }

                continue;
            };

            chain.push(pokemon);
            tally.add(pokemon);

            if chain.len() == length {
                log::info!("Found chain after {backtracks} backtracks");

                return Ok(Chain::new(chain));
            }

            let frame = self.frame(&chain, &tally);
            frames.push(frame);
        }

        log::info!("No chain found after {backtracks} backtracks");

        Err(Error::NoChainFound)
    }

    /// Computes the shuffled candidates that may follow the given chain.
    fn frame(&mut self, chain: &[&'a Pokemon], tally: &Tally) -> Frame<'a> {
        let dex: &'a Dex = self.dex;

        let pool = match chain.last() {
            Some(last) => dex.types(last.typing()),
            None => dex.iter().collect(),
        };

        let mut candidates: Vec<_> = pool
            .into_iter()
            .filter(|pokemon| tally.admits(pokemon, &self.criteria))
            .collect();

        candidates.shuffle(&mut self.rng);

        Frame {
            candidates: candidates.into_iter(),
        }
    }
}

/// A choice point of the search.
struct Frame<'a> {
    candidates: vec::IntoIter<&'a Pokemon>,
}

impl<'a> Iterator for Frame<'a> {
    type Item = &'a Pokemon;

    fn next(&mut self) -> Option<Self::Item> {
        self.candidates.next()
    }
}

/// Occurrences of typings and types in a partial chain.
#[derive(Debug, Default)]
struct Tally {
    typings: BTreeMap<Typing, u32>,
    types: BTreeMap<Type, u32>,
}

impl Tally {
    fn add(&mut self, pokemon: &Pokemon) {
        *self.typings.entry(pokemon.typing()).or_default() += 1;

        for type_ in pokemon.typing() {
            *self.types.entry(type_).or_default() += 1;
        }
    }

    fn remove(&mut self, pokemon: &Pokemon) {
        decrement(&mut self.typings, pokemon.typing());

        for type_ in pokemon.typing() {
            decrement(&mut self.types, type_);
        }
    }

    fn admits(&self, pokemon: &Pokemon, criteria: &Criteria) -> bool {
        let typing = pokemon.typing();

        if !criteria.allow_monotype && typing.is_mono() {
            return false;
        }

        if criteria.typing_limit > 0 && count(&self.typings, typing) >= criteria.typing_limit {
            return false;
        }

        criteria.type_limit == 0
            || typing
                .iter()
                .all(|type_| count(&self.types, type_) < criteria.type_limit)
    }
}

fn count<K: Ord>(counts: &BTreeMap<K, u32>, key: K) -> u32 {
    counts.get(&key).copied().unwrap_or_default()
}

fn decrement<K: Ord>(counts: &mut BTreeMap<K, u32>, key: K) {
    if let Some(count) = counts.get_mut(&key) {
        *count -= 1;

        if *count == 0 {
            let _ = counts.remove(&key);
        }
    }
}
