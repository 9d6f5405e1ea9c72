//! String-seeded mulberry32 generator.

use rand::RngCore;

/// Fixed per-draw state increment. Part of the compatibility contract:
/// changing it produces different (self-consistent) sequences and breaks
/// every stored seed.
const INCREMENT: u32 = 0x6D2B_79F5;

/// Deterministic random source keyed by a seed string.
///
/// The seed string is folded into a 32-bit state; every draw advances the
/// state by a fixed odd increment and applies two multiply/XOR mixing steps
/// (a mulberry32 step) before normalising to the requested range.
///
/// The same seed always produces the same sequence:
///
/// ```rust
/// use puzzle_engine::rng::SeededRng;
///
/// let mut a = SeededRng::new("alice");
/// let mut b = SeededRng::new("alice");
/// for _ in 0..100 {
///     assert_eq!(a.next_f64(), b.next_f64());
/// }
/// ```
///
/// A `SeededRng` is stateful and must be owned by exactly one generation
/// sequence at a time; it is deliberately not `Clone`.
///
/// It also implements [`rand::RngCore`], so the deterministic stream can
/// drive `rand` ecosystem adapters where bit-exact draw order does not
/// matter:
///
/// ```rust
/// use puzzle_engine::rng::SeededRng;
/// use rand::Rng;
///
/// let mut rng = SeededRng::new("alice");
/// let roll: u8 = rng.gen_range(1..=6);
/// assert!((1..=6).contains(&roll));
/// ```
#[derive(Debug)]
pub struct SeededRng {
    /// 32-bit accumulator; never zero after construction.
    state: u32,
}

impl SeededRng {
    /// Creates a generator from a seed string.
    ///
    /// The string is folded left-to-right over its UTF-16 code units with
    /// `hash = (hash << 5) - hash + c`, wrapping at 32 bits (UTF-16 so that
    /// seeds captured from web clients hash identically). The state is the
    /// absolute value of the hash, substituting 1 when the hash is zero.
    pub fn new(seed: &str) -> Self {
        let mut hash: i32 = 0;
        for unit in seed.encode_utf16() {
            hash = hash
                .wrapping_shl(5)
                .wrapping_sub(hash)
                .wrapping_add(i32::from(unit));
        }
        Self::from_state(hash.unsigned_abs())
    }

    /// Creates a generator from a raw 32-bit state.
    ///
    /// A zero state is substituted with 1; the accumulator must never be
    /// zero.
    #[inline]
    pub fn from_state(state: u32) -> Self {
        Self {
            state: if state == 0 { 1 } else { state },
        }
    }

    /// Returns the current accumulator state.
    ///
    /// Useful for logging and for debugging reproducibility issues.
    #[inline]
    pub fn state(&self) -> u32 {
        self.state
    }

    /// Advances the state and returns the next mixed 32-bit value.
    #[inline]
    fn step(&mut self) -> u32 {
        self.state = self.state.wrapping_add(INCREMENT);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }

    /// Returns the next uniform value in [0, 1).
    ///
    /// The 32-bit mixed result is normalised by division by 2^32, so every
    /// value is an exact multiple of 2^-32.
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.step()) / 4_294_967_296.0
    }

    /// Returns the next integer in `[min, max]`, both ends inclusive.
    ///
    /// Computed as `floor(next_f64() * (max - min + 1)) + min`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use puzzle_engine::rng::SeededRng;
    ///
    /// let mut rng = SeededRng::new("alice");
    /// let cents = rng.next_int(0, 99);
    /// assert!((0..=99).contains(&cents));
    /// ```
    #[inline]
    pub fn next_int(&mut self, min: i64, max: i64) -> i64 {
        debug_assert!(min <= max);
        let span = (max - min + 1) as f64;
        (self.next_f64() * span).floor() as i64 + min
    }

    /// Returns the elements in a seeded uniformly-random permutation.
    ///
    /// Fisher-Yates, iterating from the last index down to 1 with swap index
    /// `floor(next_f64() * (i + 1))`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use puzzle_engine::rng::SeededRng;
    ///
    /// let mut rng = SeededRng::new("alice");
    /// let shuffled = rng.shuffled(vec![1, 2, 3, 4, 5]);
    /// let mut sorted = shuffled.clone();
    /// sorted.sort();
    /// assert_eq!(sorted, vec![1, 2, 3, 4, 5]);
    /// ```
    pub fn shuffled<T>(&mut self, mut items: Vec<T>) -> Vec<T> {
        for i in (1..items.len()).rev() {
            let j = (self.next_f64() * (i + 1) as f64).floor() as usize;
            items.swap(i, j);
        }
        items
    }
}

impl RngCore for SeededRng {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.step()
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        let lo = u64::from(self.step());
        let hi = u64::from(self.step());
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.step().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
