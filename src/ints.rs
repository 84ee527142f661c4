// 32-bit signed squares for the overflow demonstrations.
// Past i32::MAX there is no exact 32-bit answer; wrapping_mul keeps the
// low 32 bits of the product, which is the value the demonstrations print.

/// Largest magnitude whose square still fits in an i32 (46340^2 < 2^31).
pub const MAX_EXACT_SQUARE: i32 = 46340;

/// Two's-complement square: the low 32 bits of the exact product.
pub fn wrapping_square(n: i32) -> i32 {
    n.wrapping_mul(n)
}

/// The square of `n`, or `None` when the exact value does not fit.
pub fn checked_square(n: i32) -> Option<i32> {
    n.checked_mul(n)
}
