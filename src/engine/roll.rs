use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Smallest damage a player attack can deal.
pub const ATTACK_MIN: u32 = 10;
/// Largest damage a player attack can deal.
pub const ATTACK_MAX: u32 = 25;

/// Source of damage amounts for player attacks.
pub trait DamageRoll {
    /// Draw an amount in the inclusive range `min..=max`.
    fn roll(&mut self, min: u32, max: u32) -> u32;
}

/// Uniform rolls backed by a standard RNG.
pub struct RandomRoll {
    rng: StdRng,
}

impl RandomRoll {
    pub fn from_os_rng() -> Self {
        RandomRoll {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible sequence of rolls.
    pub fn seeded(seed: u64) -> Self {
        RandomRoll {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl DamageRoll for RandomRoll {
    fn roll(&mut self, min: u32, max: u32) -> u32 {
        self.rng.random_range(min..=max)
    }
}

/// Always rolls the same value, clamped into the requested range.
#[derive(Debug, Clone, Copy)]
pub struct FixedRoll(pub u32);

impl DamageRoll for FixedRoll {
    fn roll(&mut self, min: u32, max: u32) -> u32 {
        self.0.clamp(min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_rolls_stay_in_range() {
        let mut roll = RandomRoll::seeded(7);
        for _ in 0..500 {
            let value = roll.roll(ATTACK_MIN, ATTACK_MAX);
            assert!((ATTACK_MIN..=ATTACK_MAX).contains(&value));
        }
    }

    #[test]
    fn seeded_rolls_repeat() {
        let mut a = RandomRoll::seeded(42);
        let mut b = RandomRoll::seeded(42);
        let first: Vec<u32> = (0..10).map(|_| a.roll(1, 100)).collect();
        let second: Vec<u32> = (0..10).map(|_| b.roll(1, 100)).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn fixed_roll_is_clamped() {
        assert_eq!(FixedRoll(25).roll(ATTACK_MIN, ATTACK_MAX), 25);
        assert_eq!(FixedRoll(3).roll(ATTACK_MIN, ATTACK_MAX), 10);
        assert_eq!(FixedRoll(99).roll(ATTACK_MIN, ATTACK_MAX), 25);
    }
}
