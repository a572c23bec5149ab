// Price-ceiling heuristics: free-text query → optional maximum price.

use regex::Regex;

/// Qualitative budget words, each with its own fixed ceiling. The values are
/// deliberately distinct; "murah" and "cheap" are not interchangeable.
const BUDGET_WORDS: [(&str, u64); 6] = [
    ("murah", 5_000_000),
    ("hemat", 3_000_000),
    ("ekonomis", 4_000_000),
    ("budget", 6_000_000),
    ("cheap", 2_000_000),
    ("affordable", 8_000_000),
];

/// Magnitude patterns in fixed priority order: millions, thousands, then a
/// bare number adjacent to the currency marker (either side, optional space).
const MAGNITUDE_PATTERNS: [(&str, u64); 3] = [
    (r"(\d+)\s*juta", 1_000_000),
    (r"(\d+)\s*ribu", 1_000),
    (r"rp\.?\s*(\d+)|(\d+)\s*rp", 1),
];

/// Infer a price ceiling from a free-text query.
///
/// Magnitude expressions are tried first; the first pattern that matches
/// wins and no further patterns are consulted. Only when no magnitude
/// expression matches do the qualitative budget words apply. Returns `None`
/// when nothing matches; any internal pattern failure also degrades to
/// `None` rather than propagating.
///
/// Known quirk, kept on purpose: a decimal magnitude like "10.5 juta"
/// resolves to the digits adjacent to the unit ("5 juta" → 5 000 000).
pub fn extract_price_ceiling(keyword: &str) -> Option<u64> {
    let lowered = keyword.to_lowercase();

    for (pattern, scale) in MAGNITUDE_PATTERNS {
        let Ok(re) = Regex::new(pattern) else {
            continue;
        };
        let Some(caps) = re.captures(&lowered) else {
            continue;
        };
        let digits = caps.get(1).or_else(|| caps.get(2)).map(|m| m.as_str());
        if let Some(value) = digits.and_then(|d| d.parse::<u64>().ok()) {
            return value.checked_mul(scale);
        }
    }

    BUDGET_WORDS
        .iter()
        .find(|(word, _)| lowered.contains(word))
        .map(|(_, ceiling)| *ceiling)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn juta_scales_to_millions() {
        assert_eq!(extract_price_ceiling("barang 10 juta"), Some(10_000_000));
    }

    #[test]
    fn ribu_scales_to_thousands() {
        assert_eq!(extract_price_ceiling("headset 500 ribu"), Some(500_000));
    }

    #[test]
    fn currency_marker_takes_bare_number_either_side() {
        assert_eq!(extract_price_ceiling("laptop rp 7500000"), Some(7_500_000));
        assert_eq!(extract_price_ceiling("laptop rp7500000"), Some(7_500_000));
        assert_eq!(extract_price_ceiling("7500000 rp"), Some(7_500_000));
    }

    #[test]
    fn magnitude_beats_budget_word() {
        assert_eq!(extract_price_ceiling("murah 2 juta"), Some(2_000_000));
    }

    #[test]
    fn budget_words_map_to_their_own_ceilings() {
        assert_eq!(extract_price_ceiling("hp murah"), Some(5_000_000));
        assert_eq!(extract_price_ceiling("laptop hemat"), Some(3_000_000));
        assert_eq!(extract_price_ceiling("mesin cuci ekonomis"), Some(4_000_000));
        assert_eq!(extract_price_ceiling("budget gaming"), Some(6_000_000));
        assert_eq!(extract_price_ceiling("cheap earbuds"), Some(2_000_000));
        assert_eq!(extract_price_ceiling("affordable tv"), Some(8_000_000));
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(extract_price_ceiling("HP MURAH"), Some(5_000_000));
        assert_eq!(extract_price_ceiling("Barang 3 JUTA"), Some(3_000_000));
    }

    #[test]
    fn no_match_yields_none() {
        assert_eq!(extract_price_ceiling("no price here"), None);
        assert_eq!(extract_price_ceiling(""), None);
    }

    #[test]
    fn decimal_magnitude_truncates_to_digits_adjacent_to_unit() {
        assert_eq!(extract_price_ceiling("hp 10.5 juta"), Some(5_000_000));
    }
}
