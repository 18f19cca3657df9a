//! Caught creature registry and catch arithmetic.

use std::collections::HashMap;

use crate::models::Pokemon;

/// Catch chance, in percent, for a creature with no base experience
pub const MAX_CATCH_CHANCE: u32 = 50;
/// Floor on the catch chance, in percent
pub const MIN_CATCH_CHANCE: u32 = 5;

/// Returns the percent chance of catching a creature.
///
/// Each 10 points of base experience cost one percent, down to
/// [`MIN_CATCH_CHANCE`]. Non-positive experience gives [`MAX_CATCH_CHANCE`].
pub fn catch_chance(base_experience: i32) -> u32 {
    if base_experience <= 0 {
        return MAX_CATCH_CHANCE;
    }
    let penalty = (base_experience / 10) as u32;
    MAX_CATCH_CHANCE
        .saturating_sub(penalty)
        .max(MIN_CATCH_CHANCE)
}

/// A roll in `1..=100` catches when it is at most the chance.
pub fn roll_catches(roll: u32, chance: u32) -> bool {
    roll <= chance
}

/// Creatures caught during this session, by name.
#[derive(Debug, Default)]
pub struct Pokedex {
    caught: HashMap<String, Pokemon>,
}

impl Pokedex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a catch, replacing an earlier record of the same name.
    pub fn insert(&mut self, pokemon: Pokemon) {
        self.caught.insert(pokemon.name.clone(), pokemon);
    }

    pub fn get(&self, name: &str) -> Option<&Pokemon> {
        self.caught.get(name)
    }

    pub fn len(&self) -> usize {
        self.caught.len()
    }

    pub fn is_empty(&self) -> bool {
        self.caught.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pokemon(name: &str) -> Pokemon {
        serde_json::from_value(serde_json::json!({
            "id": 1, "name": name, "base_experience": 64, "height": 7, "weight": 69
        }))
        .unwrap()
    }

    #[test]
    fn test_catch_chance_zero_experience() {
        assert_eq!(catch_chance(0), 50);
        assert_eq!(catch_chance(-3), 50);
    }

    #[test]
    fn test_catch_chance_scales_with_experience() {
        assert_eq!(catch_chance(64), 44);
        assert_eq!(catch_chance(112), 39);
        assert_eq!(catch_chance(9), 50);
    }

    #[test]
    fn test_catch_chance_floor() {
        assert_eq!(catch_chance(450), 5);
        assert_eq!(catch_chance(608), 5);
        assert_eq!(catch_chance(i32::MAX), 5);
    }

    #[test]
    fn test_roll_catches_boundary() {
        assert!(roll_catches(1, 5));
        assert!(roll_catches(5, 5));
        assert!(!roll_catches(6, 5));
    }

    #[test]
    fn test_pokedex_insert_and_get() {
        let mut pokedex = Pokedex::new();
        assert!(pokedex.is_empty());

        pokedex.insert(pokemon("bulbasaur"));

        assert_eq!(pokedex.len(), 1);
        assert_eq!(pokedex.get("bulbasaur").unwrap().height, 7);
        assert!(pokedex.get("ivysaur").is_none());
    }
}
