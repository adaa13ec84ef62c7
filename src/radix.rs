//! Mixed-radix arithmetic over a list of axis lengths.
//!
//! Throughout, the first digit varies fastest: the digits `[d0, d1, d2]` with
//! radices `[r0, r1, r2]` denote `d0 + r0 * (d1 + r1 * d2)`.

/// Returns `(index / divisor, index % divisor)`.
#[inline(always)]
pub(crate) fn div_mod(index: usize, divisor: usize) -> (usize, usize) {
    (index / divisor, index % divisor)
}

/// Folds `(digit, radix)` pairs, fastest first, into a single index.
///
/// Each digit must be less than its radix.
pub(crate) fn to_usize<I>(digits: I) -> usize where
    I: IntoIterator<Item=(usize, usize)>,
    I::IntoIter: DoubleEndedIterator,
{
    digits.into_iter().rev().fold(0, |index, (digit, radix)| {
        debug_assert!(digit < radix, "Digit {:?} is out of bounds for radix {:?}", digit, radix);
        index * radix + digit
    })
}

/// Returns `index / n` and the digits of `index % n`, fastest first, where
/// `n` is the product of `radices`.
///
/// Every radix must be non-zero.
pub(crate) fn from_usize(
    radices: impl IntoIterator<Item=usize>,
    index: usize,
) -> (usize, Vec<usize>) {
    let mut digits = Vec::new();
    let index = radices.into_iter().fold(index, |index, radix| {
        let (q, r) = div_mod(index, radix);
        digits.push(r);
        q
    });
    (index, digits)
}

/// Equivalent to, but more efficient than,
/// ```text
/// for i in 0..radices.iter().product() { f(&from_usize(radices, i).1); }
/// ```
pub(crate) fn each(radices: &[usize], mut f: impl FnMut(&[usize])) {
    if radices.iter().any(|&r| r == 0) { return; }
    let mut digits = vec![0; radices.len()];
    loop {
        f(&digits);
        // Increment, carrying into slower digits.
        let mut axis = 0;
        loop {
            if axis == radices.len() { return; }
            digits[axis] += 1;
            if digits[axis] < radices[axis] { break; }
            digits[axis] = 0;
            axis += 1;
        }
    }
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fold_unfold() {
        let radices = [3, 4, 2];
        for i in 0..24 {
            let (q, digits) = from_usize(radices, i);
            assert_eq!(q, 0);
            assert_eq!(to_usize(digits.iter().copied().zip(radices)), i);
        }
        assert_eq!(from_usize(radices, 5), (0, vec![2, 1, 0]));
        assert_eq!(from_usize(radices, 24 + 7), (1, vec![1, 2, 0]));
    }

    #[test]
    fn each_matches_from_usize() {
        let radices = [2, 3, 1, 2];
        let mut seen = Vec::new();
        each(&radices, |digits| seen.push(digits.to_vec()));
        assert_eq!(seen.len(), 12);
        for (i, digits) in seen.iter().enumerate() {
            assert_eq!(*digits, from_usize(radices, i).1);
        }
    }

    #[test]
    fn degenerate() {
        let mut count = 0;
        each(&[3, 0, 2], |_| count += 1);
        assert_eq!(count, 0);
        each(&[], |digits| { assert!(digits.is_empty()); count += 1; });
        assert_eq!(count, 1);
        assert_eq!(to_usize(Vec::<(usize, usize)>::new()), 0);
    }
}
