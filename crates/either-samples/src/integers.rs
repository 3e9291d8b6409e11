//! Positive integer parsing with string errors on the left.

use either_core::algebra::{lift_a2, map};
use either_core::{left, right, Either};

/// `i32::MAX` has ten digits, so no valid input is longer than this.
const MAX_INT_STR_LEN: usize = 10;

/// Parses positive integers that fit into `i32::MAX`.
///
/// Returns either an error message or the parsed number.
pub fn parse_positive_integer(s: &str) -> Either<String, u32> {
    if s.is_empty() {
        return left("Cannot parse an empty string".to_string());
    }
    if s.chars().count() > MAX_INT_STR_LEN {
        return left(format!("The string is too long: '{}'", s));
    }
    if !is_positive_integer_literal(s) {
        return left(format!(
            "Only positive integers less than {} are allowed: '{}'",
            i32::MAX,
            s
        ));
    }
    let n: u64 = match s.parse() {
        Ok(n) => n,
        Err(err) => unreachable!("validated literal '{}' failed to parse: {}", s, err),
    };
    if n > i32::MAX as u64 {
        return left(format!("The number is too big: {}", s));
    }
    right(n as u32)
}

// [1-9][0-9]*
fn is_positive_integer_literal(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some('1'..='9') => chars.all(|c| c.is_ascii_digit()),
        _ => false,
    }
}

/// Renders `n * n = <square>`.
pub fn square_line(n: u32) -> String {
    let wide = n as u64;
    format!("{} * {} = {}", n, n, wide * wide)
}

/// Parses the input and formats its square. Errors pass through unchanged.
pub fn format_square(s: &str) -> Either<String, String> {
    map(square_line, parse_positive_integer(s))
}

/// Sums two parsed inputs. The first failing input is reported.
pub fn applicative_sum(a: &str, b: &str) -> Either<String, u64> {
    lift_a2(
        |x: u32, y: u32| x as u64 + y as u64,
        parse_positive_integer(a),
        parse_positive_integer(b),
    )
}
