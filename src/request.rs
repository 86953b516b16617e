//! Query string adapter.
//!
//! Turns the query of an inbound request into [`Bounds`]. Parameters are
//! `n` (required limit), `startx` (default 0) and `starty` (default 1).

use std::str::FromStr;

use crate::error::{FibError, FibResult};
use crate::sequence::{Bounds, DEFAULT_START_A, DEFAULT_START_B};

/// Query parameter carrying the limit.
pub const PARAM_LIMIT: &str = "n";
/// Query parameter carrying the first seed.
pub const PARAM_START_A: &str = "startx";
/// Query parameter carrying the second seed.
pub const PARAM_START_B: &str = "starty";

const MISSING_LIMIT: &str = "Please provide a number in the query parameter 'n'";
const INVALID_START_A: &str = "Invalid startx provided";
const INVALID_START_B: &str = "Invalid starty provided";
const INVALID_LIMIT: &str = "Invalid number provided";

/// Parses a query string into generator bounds.
///
/// A leading `?` is ignored. Checks run in a fixed order and the first
/// failure is returned: missing `n`, bad `startx`, bad `starty`, bad `n`.
/// Negative integers parse fine here; the generator rejects them.
///
/// # Example
///
/// ```rust
/// use fibseq::request::parse_query;
///
/// let bounds = parse_query("?n=10&startx=3&starty=2").unwrap();
/// assert_eq!((bounds.limit, bounds.start_a, bounds.start_b), (10, 3, 2));
/// ```
pub fn parse_query(query: &str) -> FibResult<Bounds> {
    let query = query.strip_prefix('?').unwrap_or(query);

    let limit =
        query_param(query, PARAM_LIMIT).ok_or_else(|| FibError::missing_parameter(MISSING_LIMIT))?;

    let start_a = match query_param(query, PARAM_START_A) {
        Some(raw) => parse_int(&raw).ok_or_else(|| FibError::invalid_parameter(INVALID_START_A))?,
        None => DEFAULT_START_A,
    };
    let start_b = match query_param(query, PARAM_START_B) {
        Some(raw) => parse_int(&raw).ok_or_else(|| FibError::invalid_parameter(INVALID_START_B))?,
        None => DEFAULT_START_B,
    };

    let limit = parse_int(&limit).ok_or_else(|| FibError::invalid_parameter(INVALID_LIMIT))?;

    Ok(Bounds::new(limit).with_seeds(start_a, start_b))
}

/// Returns the decoded value of the first `key` pair in `query`.
///
/// An empty value counts as absent. Pairs with malformed percent escapes
/// are skipped.
pub fn query_param(query: &str, key: &str) -> Option<String> {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .find_map(|pair| {
            let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
            let k = decode_component(k)?;
            if k != key {
                return None;
            }
            decode_component(v)
        })
        .filter(|value| !value.is_empty())
}

/// Signed base-10 integer with an optional leading sign. No whitespace.
fn parse_int(raw: &str) -> Option<i64> {
    raw.parse().ok()
}

/// Form-url decoding: `+` is a space and `%XX` is a byte.
fn decode_component(raw: &str) -> Option<String> {
    let bytes = raw.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => out.push(b' '),
            b'%' => {
                let hi = hex_value(*bytes.get(i + 1)?)?;
                let lo = hex_value(*bytes.get(i + 2)?)?;
                out.push(hi << 4 | lo);
                i += 2;
            }
            b => out.push(b),
        }
        i += 1;
    }
    Some(String::from_utf8_lossy(&out).into_owned())
}

fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

impl Bounds {
    /// Encodes these bounds as a query string understood by [`parse_query`].
    pub fn to_query(&self) -> String {
        format!(
            "{}={}&{}={}&{}={}",
            PARAM_LIMIT, self.limit, PARAM_START_A, self.start_a, PARAM_START_B, self.start_b
        )
    }
}

impl FromStr for Bounds {
    type Err = FibError;

    fn from_str(query: &str) -> FibResult<Self> {
        parse_query(query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_applied() {
        let bounds = parse_query("n=10").unwrap();
        assert_eq!(bounds, Bounds::new(10));
    }

    #[test]
    fn test_all_params() {
        let bounds = parse_query("n=5&startx=3&starty=2").unwrap();
        assert_eq!(bounds, Bounds::new(5).with_seeds(3, 2));
    }

    #[test]
    fn test_leading_question_mark_and_order() {
        let bounds = parse_query("?starty=8&n=100&startx=5").unwrap();
        assert_eq!(bounds, Bounds::new(100).with_seeds(5, 8));
    }

    #[test]
    fn test_missing_limit() {
        for query in ["", "startx=1", "n=", "n"] {
            let err = parse_query(query).unwrap_err();
            assert_eq!(err, FibError::missing_parameter(MISSING_LIMIT), "query {query:?}");
        }
    }

    #[test]
    fn test_invalid_params() {
        assert_eq!(
            parse_query("n=10&startx=abc").unwrap_err(),
            FibError::invalid_parameter(INVALID_START_A)
        );
        assert_eq!(
            parse_query("n=10&starty=1.5").unwrap_err(),
            FibError::invalid_parameter(INVALID_START_B)
        );
        assert_eq!(
            parse_query("n=ten").unwrap_err(),
            FibError::invalid_parameter(INVALID_LIMIT)
        );
    }

    #[test]
    fn test_check_order() {
        // seeds are checked before the limit is parsed
        assert_eq!(
            parse_query("n=ten&startx=x&starty=y").unwrap_err().to_string(),
            INVALID_START_A
        );
        assert_eq!(
            parse_query("n=ten&starty=y").unwrap_err().to_string(),
            INVALID_START_B
        );
        // a missing limit wins over everything
        assert_eq!(
            parse_query("startx=x").unwrap_err().to_string(),
            MISSING_LIMIT
        );
    }

    #[test]
    fn test_empty_seed_uses_default() {
        let bounds = parse_query("n=10&startx=&starty=").unwrap();
        assert!(bounds.is_canonical());
    }

    #[test]
    fn test_signs_and_negatives() {
        let bounds = parse_query("n=%2B7&startx=-2").unwrap();
        assert_eq!(bounds, Bounds::new(7).with_seeds(-2, 1));
        // a bare plus decodes to a space and fails to parse
        assert_eq!(
            parse_query("n=+7").unwrap_err(),
            FibError::invalid_parameter(INVALID_LIMIT)
        );
    }

    #[test]
    fn test_first_value_wins() {
        assert_eq!(parse_query("n=3&n=9").unwrap().limit, 3);
    }

    #[test]
    fn test_bad_escape_skips_pair() {
        assert_eq!(parse_query("n=%zz&n=4").unwrap().limit, 4);
        assert_eq!(query_param("n=%4", "n"), None);
    }

    #[test]
    fn test_percent_encoded_key() {
        assert_eq!(query_param("%6E=12", "n").as_deref(), Some("12"));
    }

    #[test]
    fn test_out_of_range_limit() {
        assert_eq!(
            parse_query("n=99999999999999999999").unwrap_err(),
            FibError::invalid_parameter(INVALID_LIMIT)
        );
    }

    #[test]
    fn test_to_query_round_trip() {
        let bounds = Bounds::new(42).with_seeds(7, 3);
        assert_eq!(bounds.to_query(), "n=42&startx=7&starty=3");
        assert_eq!(bounds.to_query().parse::<Bounds>().unwrap(), bounds);
    }
}
