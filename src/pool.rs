use std::collections::BTreeSet;
use std::ops::RangeInclusive;

use lazy_static::lazy_static;
use log::debug;

/// Increasing runs of the digits 1..6.
pub(crate) const SEQUENCE_RUNS: &[&str] = &["1", "12", "123", "1234", "12345", "123456"];

/// Well-known PIN-like numbers people reach for.
pub(crate) const PIN_NUMBERS: &[&str] = &[
    "007", "21", "69", "111", "143", "321", "420", "555", "786", "0000", "1111", "2580", "4321",
    "6969",
];

lazy_static! {
    /// The static half of the token pool: sequence runs plus PIN-like numbers.
    pub(crate) static ref NUMERIC_CATALOG: Vec<&'static str> = SEQUENCE_RUNS
        .iter()
        .chain(PIN_NUMBERS.iter())
        .copied()
        .collect();
}

/// Years rendered as 4-digit strings.
pub(crate) fn year_tokens(range: &RangeInclusive<u16>) -> Vec<String> {
    range.clone().map(|year| year.to_string()).collect()
}

/// Union of the static numeric catalog, the configured year range and the
/// phone-derived tokens. Pure function of its inputs; identical calls yield
/// identical pools.
pub(crate) fn build_pool(
    phone_tokens: &BTreeSet<String>,
    year_range: &RangeInclusive<u16>,
) -> BTreeSet<String> {
    let mut pool: BTreeSet<String> = NUMERIC_CATALOG.iter().map(|t| t.to_string()).collect();
    pool.extend(year_tokens(year_range));
    pool.extend(phone_tokens.iter().cloned());

    debug!("Assembled token pool of {} entries", pool.len());
    pool
}
