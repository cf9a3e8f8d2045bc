use crate::ITERATIONS;

/// Run parameters shared by every variant's simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    iterations: usize,
    seed: Option<u64>,
    workers: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            iterations: ITERATIONS,
            seed: None,
            workers: num_cpus::get(),
        }
    }
}

impl Settings {
    /// Default settings with a fixed master seed.
    pub fn seeded(seed: u64) -> Self {
        Self::default().with_seed(seed)
    }
    /// Iterations per variant. Must be positive.
    pub fn with_iterations(self, iterations: usize) -> Self {
        assert!(iterations > 0, "iterations must be positive");
        Self { iterations, ..self }
    }
    pub fn with_seed(self, seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..self
        }
    }
    /// Number of shards to split each variant's iterations across.
    pub fn with_workers(self, workers: usize) -> Self {
        Self {
            workers: workers.max(1),
            ..self
        }
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// (index, iterations) per shard. The remainder goes one apiece to the
    /// lowest indices, and empty shards are skipped.
    pub fn shards(&self) -> Vec<(usize, usize)> {
        let base = self.iterations / self.workers;
        let rest = self.iterations % self.workers;
        (0..self.workers)
            .map(|i| (i, base + usize::from(i < rest)))
            .filter(|&(_, n)| n > 0)
            .collect()
    }
}
