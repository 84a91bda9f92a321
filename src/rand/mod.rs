pub mod xorshift32;
pub use xorshift32::XorShift32;

const LETTERS: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Source of randomness for the padder, injectable so tests can script it
pub trait Rng32 {
    /// Generate a 32 bit random value
    fn gen(&mut self) -> u32;

    /// Generate a uniform value in `0..n`, rejecting the biased top of the range
    fn gen_below(&mut self, n: u32) -> u32 {
        assert!(n != 0, "Cannot generate a value below zero.");
        let limit = u32::MAX - u32::MAX % n;
        loop {
            let x = self.gen();
            if x < limit {
                break x % n;
            }
        }
    }

    /// Generate an uppercase ASCII letter
    fn gen_letter(&mut self) -> u8 {
        LETTERS[self.gen_below(LETTERS.len() as u32) as usize]
    }
}

impl<T: Rng32 + ?Sized> Rng32 for &mut T {
    fn gen(&mut self) -> u32 {
        (**self).gen()
    }
}
