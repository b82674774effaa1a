use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Random source owned by one game. Seeding it makes food placement reproducible.
pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn random_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distr::uniform::SampleUniform,
        R: rand::distr::uniform::SampleRange<T>,
    {
        self.rng.random_range(range)
    }

    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let idx = self.random_range(0..items.len());
        items.get(idx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_gives_same_sequence() {
        let mut a = SessionRng::new(7);
        let mut b = SessionRng::new(7);

        let from_a: Vec<u32> = (0..16).map(|_| a.random_range(0..1000)).collect();
        let from_b: Vec<u32> = (0..16).map(|_| b.random_range(0..1000)).collect();

        assert_eq!(from_a, from_b);
        assert_eq!(a.seed(), 7);
    }

    #[test]
    fn test_choose_on_empty_slice() {
        let mut rng = SessionRng::new(1);
        let empty: [u8; 0] = [];

        assert_eq!(rng.choose(&empty), None);
        assert_eq!(rng.choose(&[9]), Some(&9));
    }
}
