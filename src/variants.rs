use log::trace;

/// First character uppercased, every following character forced lowercase,
/// regardless of the original casing.
pub(crate) fn title_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Ordered case variants of the base text: lowercase, titlecase, uppercase,
/// first-seen duplicates collapsed (a one-character base yields two variants,
/// not three). With `include_prefixes`, the same three variants are emitted
/// for every non-empty character prefix of the base, shortest first.
///
/// A base that is empty after trimming yields no variants at all.
pub(crate) fn case_variants(base: &str, include_prefixes: bool) -> Vec<String> {
    let base = base.trim();
    if base.is_empty() {
        return Vec::new();
    }

    let chars: Vec<char> = base.chars().collect();
    let prefix_lengths: Vec<usize> = if include_prefixes {
        (1..=chars.len()).collect()
    } else {
        vec![chars.len()]
    };

    let mut variants: Vec<String> = Vec::new();
    for len in prefix_lengths {
        let prefix: String = chars[..len].iter().collect();
        for variant in [
            prefix.to_lowercase(),
            title_case(&prefix),
            prefix.to_uppercase(),
        ] {
            if !variants.contains(&variant) {
                variants.push(variant);
            }
        }
    }

    trace!("Derived {} case variants from base text", variants.len());
    variants
}
