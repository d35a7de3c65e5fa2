use log::{debug, info};

use crate::config::Settings;
use crate::filter;
use crate::phone;
use crate::pool;
use crate::variants;

/// Digits attached directly to a base variant in the sequential-suffix
/// arrangement: "1", "12", ..., "12345".
const SEQUENTIAL_DIGITS: &str = "12345";
const MAX_SUFFIX_RUN: usize = 5;

/// Run the full pipeline: normalize the base text, extract phone tokens,
/// assemble the pool, cross-multiply the arrangements, then filter and
/// deduplicate. Returns the final candidate list in the configured order.
///
/// An empty base text yields an empty list; an empty or non-numeric phone
/// skips every phone-dependent arrangement.
pub(crate) fn generate(base: &str, phone_input: Option<&str>, settings: &Settings) -> Vec<String> {
    let base_variants = variants::case_variants(base, settings.include_prefixes);
    if base_variants.is_empty() {
        info!("Empty base text, nothing to generate");
        return Vec::new();
    }

    let digits = phone_input.map(phone::digits_only).unwrap_or_default();
    let phone_tokens = phone::phone_tokens(&digits);
    let token_pool = pool::build_pool(&phone_tokens, &settings.year_range);

    let mut candidates: Vec<String> = Vec::new();

    // a) base variant + full phone digits, and the digits alone
    if !digits.is_empty() {
        for variant in &base_variants {
            candidates.push(format!("{variant}{digits}"));
            candidates.push(format!("{variant}@{digits}"));
            candidates.push(format!("{variant}.{digits}"));
        }
        candidates.push(digits.clone());
    }

    for variant in &base_variants {
        for separator in &settings.separators {
            // b) base variant + separator + pool token
            for token in &token_pool {
                candidates.push(format!("{variant}{separator}{token}"));
            }
            // c) reverse order, phone-derived tokens only
            for token in &phone_tokens {
                candidates.push(format!("{token}{separator}{variant}"));
            }
        }

        // d) base variant + phone token, no separator, variant-preserving
        //    and lowercase-forced
        for token in &phone_tokens {
            candidates.push(format!("{variant}{token}"));
            candidates.push(format!("{}{token}", variant.to_lowercase()));
        }

        // e) sequential runs and repeated single digits
        for length in 1..=MAX_SUFFIX_RUN {
            candidates.push(format!("{variant}{}", &SEQUENTIAL_DIGITS[..length]));
            for digit in '0'..='9' {
                candidates.push(format!("{variant}{}", digit.to_string().repeat(length)));
            }
        }
    }

    debug!("Generated {} raw candidates", candidates.len());
    filter::finalize(candidates, settings)
}
