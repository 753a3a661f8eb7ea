use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::engine::RandomSource;

/// Системный RNG (thread-local генератор `rand`).
#[derive(Clone, Debug, Default)]
pub struct SystemRng;

impl RandomSource for SystemRng {
    fn gen_index(&mut self, upper: usize) -> usize {
        rand::thread_rng().gen_range(0..upper)
    }
}

/// Детерминированный RNG для тестов и реплея.
/// Позволяет воспроизводить одни и те же раздачи при одинаковом seed.
#[derive(Clone, Debug)]
pub struct DeterministicRng {
    inner: StdRng,
}

impl DeterministicRng {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for DeterministicRng {
    fn gen_index(&mut self, upper: usize) -> usize {
        self.inner.gen_range(0..upper)
    }
}

/// RNG партии, выбранный по конфигу: с seed — детерминированный, без — системный.
#[derive(Clone, Debug)]
pub enum GameRng {
    System(SystemRng),
    Seeded(DeterministicRng),
}

impl GameRng {
    pub fn from_config_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => GameRng::Seeded(DeterministicRng::from_seed(seed)),
            None => GameRng::System(SystemRng),
        }
    }
}

impl RandomSource for GameRng {
    fn gen_index(&mut self, upper: usize) -> usize {
        match self {
            GameRng::System(rng) => rng.gen_index(upper),
            GameRng::Seeded(rng) => rng.gen_index(upper),
        }
    }
}
