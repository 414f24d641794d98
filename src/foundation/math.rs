/// Seeded FNV-1a 64-bit hasher, used to derive stable seeds from strings.
#[derive(Clone, Copy, Debug)]
pub struct Fnv1a64(u64);

impl Fnv1a64 {
    /// Standard FNV-1a offset basis.
    pub const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01B3;

    /// Start from an explicit state.
    pub fn new(seed: u64) -> Self {
        Self(seed)
    }

    /// Start from [`Self::OFFSET_BASIS`].
    pub fn new_default() -> Self {
        Self(Self::OFFSET_BASIS)
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) {
        let mut h = self.0;
        for &b in bytes {
            h ^= u64::from(b);
            h = h.wrapping_mul(Self::PRIME);
        }
        self.0 = h;
    }

    pub fn finish(self) -> u64 {
        self.0
    }
}

/// Source of uniform samples in `[0, 1)`.
///
/// The scene composer draws window lit state and star placement from this, so a caller can
/// pin the output by injecting a seeded generator.
pub trait RandomSource {
    /// Next sample in `[0, 1)`.
    fn next_f64_01(&mut self) -> f64;

    /// Bernoulli draw that is `true` with probability `p`.
    fn chance(&mut self, p: f64) -> bool {
        self.next_f64_01() < p
    }

    /// Uniform sample in `[lo, hi)`.
    fn range_f64(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64_01()
    }
}

/// SplitMix64 generator.
#[derive(Clone, Copy, Debug)]
pub struct Rng64 {
    state: u64,
}

impl Rng64 {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }
}

impl RandomSource for Rng64 {
    fn next_f64_01(&mut self) -> f64 {
        // 53 bits of precision.
        let v = self.next_u64() >> 11;
        (v as f64) * (1.0 / ((1u64 << 53) as f64))
    }
}

/// Seed derived from a day's date string, so output is stable within a day.
pub fn seed_from_date(date: &str) -> u64 {
    let mut h = Fnv1a64::new_default();
    h.write_bytes(date.as_bytes());
    h.finish()
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
