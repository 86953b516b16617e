//! The sequence generator.
//!
//! Canonical seeds are answered from the pregenerated table. Any other pair
//! is extended on demand, bounded by both the caller's limit and
//! [`MAX_PREGENERATED`].

use crate::error::{FibError, FibResult};

use super::model::{Sequence, Strategy};
use super::table::{pregenerated, MAX_PREGENERATED};

const INVALID_INPUT: &str = "invalid input, n, startx, and starty must be non-negative integers";

/// Generates a Fibonacci-style sequence.
///
/// `limit` is the inclusive value ceiling; `start_a` and `start_b` are the
/// seeds in the order the caller supplied them. Any negative argument fails
/// with [`FibError::InvalidInput`] before any work is done.
///
/// Two behaviours are kept deliberately even though they do not filter by
/// `limit`:
///
/// - canonical seeds with `limit >= MAX_PREGENERATED` return the whole
///   table, including values above `limit`;
/// - custom seeds are always returned (smaller first), even when they exceed
///   `limit`. The limit only bounds growth past the seeds.
///
/// # Example
///
/// ```rust
/// use fibseq::generate;
///
/// let seq = generate(10, 0, 1).unwrap();
/// assert_eq!(seq.as_slice(), &[0, 1, 1, 2, 3, 5, 8]);
///
/// let seq = generate(5, 3, 2).unwrap();
/// assert_eq!(seq.as_slice(), &[2, 3, 5]);
/// ```
pub fn generate(limit: i64, start_a: i64, start_b: i64) -> FibResult<Sequence> {
    if limit < 0 || start_a < 0 || start_b < 0 {
        return Err(FibError::invalid_input(INVALID_INPUT));
    }

    let limit = limit as u64;
    let (start_a, start_b) = (start_a as u64, start_b as u64);

    if start_a == 0 && start_b == 1 {
        return Ok(cached(limit));
    }

    Ok(computed(limit, start_a, start_b))
}

fn cached(limit: u64) -> Sequence {
    let table = pregenerated();
    if limit >= MAX_PREGENERATED {
        return Sequence::new(table.to_vec(), Strategy::Cached);
    }

    // the table is ascending, so this is the longest prefix <= limit
    let end = table.partition_point(|&value| value <= limit);
    Sequence::new(table[..end].to_vec(), Strategy::Cached)
}

fn computed(limit: u64, start_a: u64, start_b: u64) -> Sequence {
    let mut values = if start_a < start_b {
        vec![start_a, start_b]
    } else {
        vec![start_b, start_a]
    };

    // Seeds fit in i64, so the first sum cannot overflow u64; every later
    // term is at most MAX_PREGENERATED.
    //
    // The index cap (`len <= limit`) is a safety bound on iterations. The
    // value check normally ends the loop much earlier.
    while values.len() as u64 <= limit {
        let len = values.len();
        let next = values[len - 1] + values[len - 2];
        if next > limit || next > MAX_PREGENERATED {
            break;
        }
        values.push(next);
    }

    Sequence::new(values, Strategy::Computed)
}
