//! common routines to be included by benches

use bignum::BigNum;


/// Generate vector of random numbers with digit counts in the given range
pub fn random_bignums(count: usize, digits: std::ops::Range<u32>, seed: u64) -> Vec<BigNum> {
    let mut rng = oorandom::Rand32::new(seed);
    (0..count)
        .map(|_| {
            let digit_count = rng.rand_range(digits.clone());
            random_bignum(&mut rng, digit_count)
        })
        .collect()
}

/// Random number with exactly `digit_count` digits
pub fn random_bignum(rng: &mut oorandom::Rand32, digit_count: u32) -> BigNum {
    let mut digits = Vec::with_capacity(digit_count as usize);
    digits.push(1 + rng.rand_range(0..9) as u8);
    for _ in 1..digit_count {
        digits.push(rng.rand_range(0..10) as u8);
    }
    BigNum::from_digits(digits).unwrap()
}


/// Randomly iterates through items in vector
pub struct RandomIterator<'a, T> {
    v: &'a Vec<T>,
    rng: oorandom::Rand32,
}

impl<'a, T> RandomIterator<'a, T> {
    pub fn new(v: &'a Vec<T>) -> Self {
        let seed = v.as_ptr() as u64;
        Self::new_with_seed(v, seed)
    }

    pub fn new_with_seed(v: &'a Vec<T>, seed: u64) -> Self {
        Self {
            v: v,
            rng: oorandom::Rand32::new(seed),
        }
    }

    pub fn next(&mut self) -> &'a T {
        let idx = self.rng.rand_u32() as usize % self.v.len();
        &self.v[idx]
    }
}
