//! Standalone arithmetic demos behind menu options 12-14

/// Swap via add/subtract, no third variable.  Wrapping arithmetic keeps the
/// intermediate sum from panicking in debug builds.
pub fn swap_without_temp(a: i32, b: i32) -> (i32, i32) {
    let a = a.wrapping_add(b);
    let b = a.wrapping_sub(b);
    let a = a.wrapping_sub(b);
    (a, b)
}

/// AND/OR/XOR of one pair of integers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitwiseOps {
    pub and: i32,
    pub or: i32,
    pub xor: i32,
}

impl BitwiseOps {
    pub fn smallest(&self) -> i32 {
        self.and.min(self.or).min(self.xor)
    }
}

pub fn bitwise_ops(x: i32, y: i32) -> BitwiseOps {
    BitwiseOps {
        and: x & y,
        or: x | y,
        xor: x ^ y,
    }
}

/// `n` equals the sum of its digits, each raised to the digit-count power
pub fn is_armstrong(n: u32) -> bool {
    if n == 0 {
        return false;
    }
    let digits = n.ilog10() + 1;
    let mut sum = 0u64;
    let mut rest = n;
    while rest > 0 {
        sum += u64::from(rest % 10).pow(digits);
        rest /= 10;
    }
    sum == u64::from(n)
}

/// All Armstrong numbers in `1..=limit`, ascending
pub fn armstrong_numbers(limit: u32) -> Vec<u32> {
    (1..=limit).filter(|&n| is_armstrong(n)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swap_without_temp() {
        assert_eq!(swap_without_temp(3, 9), (9, 3));
        assert_eq!(swap_without_temp(-4, 7), (7, -4));
        assert_eq!(swap_without_temp(0, 0), (0, 0));
        // intermediate overflow must not panic
        assert_eq!(swap_without_temp(i32::MAX, 1), (1, i32::MAX));
    }

    #[test]
    fn test_bitwise_ops() {
        let ops = bitwise_ops(12, 10);
        assert_eq!(ops.and, 8);
        assert_eq!(ops.or, 14);
        assert_eq!(ops.xor, 6);
        assert_eq!(ops.smallest(), 6);
    }

    #[test]
    fn test_armstrong_numbers_to_ten_thousand() {
        assert_eq!(
            armstrong_numbers(10_000),
            vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 153, 370, 371, 407, 1634, 8208, 9474]
        );
    }

    #[test]
    fn test_is_armstrong_edges() {
        assert!(is_armstrong(153));
        assert!(!is_armstrong(154));
        assert!(!is_armstrong(10));
        assert!(is_armstrong(9));
    }
}
