//! The dice set: five dice with per-die hold flags.
//!
//! Rolling is unconditional at this level; roll-count gating belongs to the
//! engine. Hold flags are advisory state consumed by future rolls.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Number of dice in a set.
pub const NUM_DICE: usize = 5;

/// A single die: face value 1..=6 plus a hold flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Die {
    pub value: u8,
    pub held: bool,
}

/// Exactly five dice. Values stay in 1..=6 across all operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceSet {
    dice: [Die; NUM_DICE],
}

impl DiceSet {
    /// Fresh tray showing 1..=5, nothing held.
    pub fn new() -> Self {
        let mut dice = [Die {
            value: 1,
            held: false,
        }; NUM_DICE];
        for (i, die) in dice.iter_mut().enumerate() {
            die.value = i as u8 + 1;
        }
        DiceSet { dice }
    }

    /// Build a set with the given face values, nothing held.
    ///
    /// # Panics
    /// Panics if any value is outside 1..=6.
    pub fn from_values(values: [u8; NUM_DICE]) -> Self {
        let mut set = DiceSet::new();
        for (die, &v) in set.dice.iter_mut().zip(values.iter()) {
            assert!((1..=6).contains(&v), "die value out of range: {}", v);
            die.value = v;
        }
        set
    }

    pub fn values(&self) -> [u8; NUM_DICE] {
        let mut out = [0u8; NUM_DICE];
        for (o, die) in out.iter_mut().zip(self.dice.iter()) {
            *o = die.value;
        }
        out
    }

    pub fn holds(&self) -> [bool; NUM_DICE] {
        let mut out = [false; NUM_DICE];
        for (o, die) in out.iter_mut().zip(self.dice.iter()) {
            *o = die.held;
        }
        out
    }

    pub fn is_held(&self, index: usize) -> bool {
        self.dice[index].held
    }

    /// Reroll every non-held die uniformly in 1..=6. Held dice are untouched.
    pub fn roll<R: Rng>(&mut self, rng: &mut R) {
        for die in &mut self.dice {
            if !die.held {
                die.value = rng.gen_range(1..=6);
            }
        }
    }

    /// Flip the hold flag for a die. Purely advisory; no numeric effect.
    ///
    /// # Panics
    /// Panics if `index >= 5`. The engine validates indices before calling.
    pub fn toggle_hold(&mut self, index: usize) {
        self.dice[index].held = !self.dice[index].held;
    }

    /// Overwrite all hold flags at once.
    pub fn set_holds(&mut self, holds: [bool; NUM_DICE]) {
        for (die, &h) in self.dice.iter_mut().zip(holds.iter()) {
            die.held = h;
        }
    }

    pub fn clear_holds(&mut self) {
        for die in &mut self.dice {
            die.held = false;
        }
    }

    /// True when all five dice show the same face.
    pub fn is_five_of_a_kind(&self) -> bool {
        let first = self.dice[0].value;
        self.dice.iter().all(|d| d.value == first)
    }
}

impl Default for DiceSet {
    fn default() -> Self {
        DiceSet::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_chacha::ChaCha8Rng;
    use rand_core::SeedableRng;

    #[test]
    fn roll_respects_holds_and_value_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut set = DiceSet::from_values([6, 6, 1, 1, 1]);
        set.set_holds([true, true, false, false, false]);

        for _ in 0..100 {
            set.roll(&mut rng);
            let v = set.values();
            assert_eq!(v[0], 6);
            assert_eq!(v[1], 6);
            assert!(v.iter().all(|&d| (1..=6).contains(&d)));
        }
    }

    #[test]
    fn toggle_hold_flips_only_the_target() {
        let mut set = DiceSet::new();
        set.toggle_hold(2);
        assert_eq!(set.holds(), [false, false, true, false, false]);
        set.toggle_hold(2);
        assert_eq!(set.holds(), [false; NUM_DICE]);
    }

    #[test]
    fn five_of_a_kind_detection() {
        assert!(DiceSet::from_values([4, 4, 4, 4, 4]).is_five_of_a_kind());
        assert!(!DiceSet::from_values([4, 4, 4, 4, 5]).is_five_of_a_kind());
    }
}
