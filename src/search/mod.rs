//! Exact occurrence search engines and the batch driver.
//!
//! Two engines answer the same question, at which reference offsets a
//! read occurs verbatim, with different trade-offs:
//!
//! - [`naive`]: scan-and-mask baseline, O(k·n) per read, no preprocessing.
//!   Reports non-overlapping occurrences (an overlapping-aware variant is
//!   provided as the testing oracle).
//! - [`indexed`]: suffix-array binary search, O(log n · m) per read after
//!   a one-time index build. Reports every occurrence.
//!
//! The [`driver`] runs either engine over an ordered [`ReadSet`]
//! (optionally truncated to the first N reads) and returns per-read
//! position lists in input order.
//!
//! [`ReadSet`]: crate::core::ReadSet

pub mod driver;
pub mod indexed;
pub mod naive;

pub use driver::{
    naive_search, naive_search_with_mode, suffix_search, suffix_search_with_index, NaiveMode,
    SearchError,
};
pub use indexed::search_indexed;
pub use naive::{search_naive, search_naive_overlapping};
