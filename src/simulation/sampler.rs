use rand::RngCore;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::hash::DefaultHasher;
use std::hash::Hash;
use std::hash::Hasher;

/// Deterministic random source for one simulation shard.
///
/// Every shard gets its own stream, derived by hashing the run's master seed
/// together with the variant and shard index, so a seeded run repeats no
/// matter how rayon schedules the shards. `DefaultHasher` is only stable
/// within one toolchain, so seeded streams may differ across Rust releases.
#[derive(Debug, Clone)]
pub struct Sampler(SmallRng);

impl Sampler {
    pub fn seeded(seed: u64) -> Self {
        Self(SmallRng::seed_from_u64(seed))
    }
    /// Independent stream for shard `index` of whatever `salt` identifies.
    pub fn shard<H: Hash>(master: u64, salt: H, index: usize) -> Self {
        let ref mut hasher = DefaultHasher::default();
        master.hash(hasher);
        salt.hash(hasher);
        index.hash(hasher);
        Self::seeded(hasher.finish())
    }
}

impl RngCore for Sampler {
    fn next_u32(&mut self) -> u32 {
        self.0.next_u32()
    }
    fn next_u64(&mut self) -> u64 {
        self.0.next_u64()
    }
    fn fill_bytes(&mut self, dst: &mut [u8]) {
        self.0.fill_bytes(dst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn same_shard_same_stream() {
        let mut a = Sampler::shard(42, "Badugi", 3);
        let mut b = Sampler::shard(42, "Badugi", 3);
        let xs = (0..16).map(|_| a.random::<u64>()).collect::<Vec<_>>();
        let ys = (0..16).map(|_| b.random::<u64>()).collect::<Vec<_>>();
        assert_eq!(xs, ys);
    }

    #[test]
    fn shards_diverge() {
        let mut a = Sampler::shard(42, "Badugi", 0);
        let mut b = Sampler::shard(42, "Badugi", 1);
        let mut c = Sampler::shard(42, "HiDuGi", 0);
        let x = a.random::<u64>();
        assert_ne!(x, b.random::<u64>());
        assert_ne!(x, c.random::<u64>());
    }
}
