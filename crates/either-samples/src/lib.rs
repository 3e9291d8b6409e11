//! Sample programs for `either-core`
//!
//! Each module is a small, self-contained use of the public API: functor
//! mapping over parsed input, monadic chaining of file checks, applicative
//! combination of two results, decoding of tagged records.

pub mod files;
pub mod integers;
pub mod logging;
pub mod records;
pub mod urls;

pub use files::{check_path, first_line, read_first_line};
pub use integers::{applicative_sum, format_square, parse_positive_integer, square_line};
pub use logging::init_tracing;
pub use records::decode_result_record;
pub use urls::parse_url;
