//! Implementation of comparison operations
//!
//! Equality is derived; canonical form guarantees equal values have
//! identical digits.
//!

use crate::*;


impl PartialOrd for BigNum {
    #[inline]
    fn partial_cmp(&self, other: &BigNum) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigNum {
    #[inline]
    fn cmp(&self, other: &BigNum) -> Ordering {
        arithmetic::compare(self, other)
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use stdlib::hash::{Hash, Hasher};
    use stdlib::DefaultHasher;

    include!("test_macros.rs");

    fn hash<T: Hash>(obj: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        obj.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn sort_by_value() {
        let mut values = vec![
            bignum!("1000"), bignum!("99"), bignum!("0"), bignum!("123"), bignum!("998"),
        ];
        values.sort();

        let sorted: Vec<_> = values.iter().map(|n| n.to_string()).collect();
        assert_eq!(sorted, ["0", "99", "123", "998", "1000"]);
    }

    #[test]
    fn min_max() {
        let a = bignum!("45");
        let b = bignum!("450");
        assert_eq!(a.clone().max(b.clone()), b);
        assert_eq!(a.clone().min(b), a);
    }

    #[test]
    fn equal_values_hash_equal() {
        let a = bignum!("00123");
        let b = digits!(1, 2, 3);
        assert_eq!(a, b);
        assert_eq!(hash(&a), hash(&b));
        assert_ne!(hash(&a), hash(&bignum!("124")));
    }
}
