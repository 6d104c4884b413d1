//! Closed form `337 * n * (n + 1) * (4n - 1)` reduced modulo `10^9 + 7`.

pub const MODULUS: u64 = 1_000_000_007;
pub const COEFF: u64 = 337;

// Euclidean residue, so negative inputs land in [0, MODULUS).
#[inline]
fn reduce(x: i64) -> u64 {
    x.rem_euclid(MODULUS as i64) as u64
}

/// Every factor is reduced before multiplying; two residues multiply to
/// less than 2^60, so no intermediate product overflows `u64` for any `n`.
pub fn eval(n: i64) -> u64 {
    let a = reduce(n);
    let b = (a + 1) % MODULUS;
    let c = (4 * a + MODULUS - 1) % MODULUS;
    [a, b, c].iter().fold(COEFF, |acc, &x| acc * x % MODULUS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn naive(n: i64) -> u64 {
        let n = n as i128;
        let m = MODULUS as i128;
        (337 * n * (n + 1) * (4 * n - 1)).rem_euclid(m) as u64
    }

    #[test]
    fn small_values() {
        assert_eq!(eval(0), 0);
        assert_eq!(eval(1), 2022);
        assert_eq!(eval(2), 14154);
        assert_eq!(eval(3), 337 * 3 * 4 * 11);
    }

    #[test]
    fn matches_wide_evaluation() {
        let samples = (-1000..1000)
            .chain([
                100_000,
                1_000_000,
                1_000_000_000,
                1_000_000_006,
                1_000_000_007,
                i32::MAX as i64,
                i32::MIN as i64,
                -1_000_000_007,
                123_456_789_012,
            ]);
        for n in samples {
            assert_eq!(eval(n), naive(n), "n = {}", n);
        }
    }

    #[test]
    fn extreme_inputs_stay_in_range() {
        for n in [i64::MAX, i64::MIN, i64::MAX - 1, i64::MIN + 1] {
            assert!(eval(n) < MODULUS, "n = {}", n);
        }
    }

    #[test]
    fn negative_roots() {
        // n = -1 zeroes the (n + 1) factor
        assert_eq!(eval(-1), 0);
        assert_eq!(eval(-2), naive(-2));
        assert_eq!(naive(-2), 337 * 2 * 9 % MODULUS * (MODULUS - 1) % MODULUS);
    }

    #[test]
    fn pure() {
        let first: Vec<u64> = (0..50).map(eval).collect();
        let reversed: Vec<u64> = (0..50).rev().map(eval).collect();
        assert_eq!(first, reversed.into_iter().rev().collect::<Vec<_>>());
    }
}
