//! Length-constant-time comparison

/// Outcome of a comparison, including the work it took
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Comparison {
    /// Zero iff the inputs were equal
    pub diff: usize,
    /// Number of byte pairs compared
    pub steps: usize,
}

impl Comparison {
    pub fn is_equal(&self) -> bool {
        self.diff == 0
    }
}

/// Compare `a` and `b` in time that depends only on `min(a.len(), b.len())`
///
/// A length mismatch is folded into the difference up front; the byte loop
/// then always runs over the full common prefix with no early exit.
pub fn compare(a: &[u8], b: &[u8]) -> Comparison {
    let mut diff = a.len() ^ b.len();
    let mut steps = 0;

    for (x, y) in a.iter().zip(b.iter()) {
        diff |= usize::from(x ^ y);
        steps += 1;
    }

    Comparison {
        diff: std::hint::black_box(diff),
        steps,
    }
}

/// Compare two byte strings without revealing where they first differ
#[inline]
pub fn slow_equals(a: &[u8], b: &[u8]) -> bool {
    compare(a, b).is_equal()
}
