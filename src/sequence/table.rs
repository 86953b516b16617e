//! Pregenerated table for the canonical seeds `(0, 1)`.
//!
//! The table is evaluated at compile time and lives in read-only memory, so
//! every caller shares the same slice without synchronization.

/// Ceiling on values held by the table and on growth of computed sequences.
pub const MAX_PREGENERATED: u64 = 1_000_000;

/// Number of Fibonacci values, starting at 0, that do not exceed
/// [`MAX_PREGENERATED`].
pub const PREGENERATED_LEN: usize = table_len();

static PREGENERATED: [u64; PREGENERATED_LEN] = build_table();

const fn table_len() -> usize {
    let mut prev = 0u64;
    let mut cur = 1u64;
    // counts the leading 0
    let mut len = 1;
    while cur <= MAX_PREGENERATED {
        let next = prev + cur;
        prev = cur;
        cur = next;
        len += 1;
    }
    len
}

const fn build_table() -> [u64; PREGENERATED_LEN] {
    let mut table = [0u64; PREGENERATED_LEN];
    table[1] = 1;
    let mut i = 2;
    while i < PREGENERATED_LEN {
        table[i] = table[i - 1] + table[i - 2];
        i += 1;
    }
    table
}

/// Returns the full pregenerated table.
pub fn pregenerated() -> &'static [u64] {
    &PREGENERATED
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_head() {
        assert_eq!(&pregenerated()[..10], &[0, 1, 1, 2, 3, 5, 8, 13, 21, 34]);
    }

    #[test]
    fn test_table_covers_ceiling_exactly() {
        let table = pregenerated();
        assert_eq!(table.len(), 31);
        assert_eq!(table.last().copied(), Some(832_040));
        let next = table[table.len() - 1] + table[table.len() - 2];
        assert!(next > MAX_PREGENERATED);
    }

    #[test]
    fn test_table_obeys_recurrence() {
        let table = pregenerated();
        for w in table.windows(3) {
            assert_eq!(w[2], w[0] + w[1]);
        }
    }
}
