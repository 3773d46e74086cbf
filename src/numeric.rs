/// Bias-correction constant for `m` registers.
///
/// This is the large-`m` closed form; it is used for every register count.
pub(crate) fn alpha(m: usize) -> f64 {
    0.7213 / (1. + 1.079 / m as f64)
}

/// Position of the first set bit in the low `width` bits of `remainder`,
/// counted from the most significant of those bits and starting at 1.
///
/// An all-zero remainder saturates at `width + 1`.
pub(crate) fn rank(remainder: u64, width: u32) -> u8 {
    debug_assert!(0 < width && width <= u64::BITS, "width out of range");
    debug_assert!(
        width == u64::BITS || remainder >> width == 0,
        "remainder wider than width"
    );
    let zeros = remainder.leading_zeros() - (u64::BITS - width);
    (zeros + 1) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alpha() {
        assert!((alpha(16) - 0.673).abs() < 0.01);
        assert!((alpha(1024) - 0.7213 / (1. + 1.079 / 1024.)).abs() < f64::EPSILON);
        assert!(alpha(1 << 18) < 0.7213);
    }

    #[test]
    fn test_rank_u64() {
        // 54-bit remainder, as left by precision 10.
        assert_eq!(rank(1 << 53, 54), 1);
        assert_eq!(rank(1 << 52, 54), 2);
        assert_eq!(rank(1, 54), 54);
        assert_eq!(rank(0, 54), 55);
    }

    #[test]
    fn test_rank_full_width() {
        assert_eq!(rank(u64::MAX, 64), 1);
        assert_eq!(rank(0, 64), 65);
    }

    #[test]
    fn test_rank_single_bit_width() {
        // Precision 63 leaves one bit.
        assert_eq!(rank(1, 1), 1);
        assert_eq!(rank(0, 1), 2);
    }

    #[test]
    fn test_rank_ignores_word_padding() {
        // Same remainder, different nominal widths.
        assert_eq!(rank(1, 4), 4);
        assert_eq!(rank(1, 60), 60);
    }
}
