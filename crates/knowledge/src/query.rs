//! Query normalization and abbreviation expansion.
//!
//! Questions arrive as natural Georgian sentences ("რა არის დღგ?"). The search
//! API matches keywords, so filler words are removed first, and domain
//! abbreviations are expanded to their full phrases when the literal query
//! finds nothing.

/// Georgian tax/customs abbreviations and their canonical phrases.
pub const ABBREVIATIONS: &[(&str, &str)] = &[
    ("დღგ", "დამატებული ღირებულების გადასახადი"),
    ("სსკ", "საგადასახადო კოდექსი"),
    ("სშკ", "საბაჟო კოდექსი"),
    ("მოგ", "მოგების გადასახადი"),
    ("საშ", "საშემოსავლო გადასახადი"),
    ("ექსპ", "ექსპორტი"),
    ("იმპ", "იმპორტი"),
    ("დეკლ", "დეკლარაცია"),
    ("ეკ", "ეკონომიკური კოდექსი"),
    ("ფიზპ", "ფიზიკური პირი"),
    ("იურპ", "იურიდიული პირი"),
    ("ქონ", "ქონების გადასახადი"),
    ("აქც", "აქციზი"),
];

/// Filler words dropped from questions before searching.
pub const STOP_WORDS: &[&str] = &[
    "რა",
    "არის",
    "როგორ",
    "რატომ",
    "რას",
    "გულისხმობს",
    "ვის",
    "სად",
    "რომელი",
    "რამდენი",
    "როდის",
    "the",
    "is",
    "what",
    "how",
    "why",
    "მინდა",
    "ვიცოდე",
    "მითხარი",
    "ახსენი",
    "განმარტე",
];

/// Look up the canonical phrase for an abbreviation (case-insensitive).
pub fn expand_abbreviation(word: &str) -> Option<&'static str> {
    let lower = word.to_lowercase();
    ABBREVIATIONS
        .iter()
        .find(|(abbr, _)| *abbr == lower)
        .map(|(_, full)| *full)
}

/// Whether `word` is a stop word (case-insensitive).
pub fn is_stop_word(word: &str) -> bool {
    let lower = word.to_lowercase();
    STOP_WORDS.contains(&lower.as_str())
}

/// Strip filler words and one trailing `?`, `!` or `.` from a question.
///
/// Never returns an empty string for non-blank input: when every token is a
/// stop word the trimmed question is returned unchanged.
pub fn normalize_query(question: &str) -> String {
    let trimmed = question.trim();
    let stripped = trimmed
        .strip_suffix(|c: char| matches!(c, '?' | '!' | '.'))
        .unwrap_or(trimmed);

    let keywords: Vec<&str> = stripped
        .split_whitespace()
        .filter(|word| !is_stop_word(word))
        .collect();

    if keywords.is_empty() {
        trimmed.to_string()
    } else {
        keywords.join(" ")
    }
}

/// Generate query variants by expanding abbreviations.
///
/// The first variant is always `query` itself. For each abbreviation token
/// two variants are produced: the query with that token replaced by its full
/// phrase, and (unless the phrase already occurs in the query) the query with
/// the phrase appended. Duplicates are removed, first occurrence wins.
pub fn expand_query(query: &str) -> Vec<String> {
    let words: Vec<&str> = query.split_whitespace().collect();
    let mut variants = vec![query.to_string()];

    for (i, word) in words.iter().enumerate() {
        let Some(full) = expand_abbreviation(word) else {
            continue;
        };

        let mut replaced = words.clone();
        replaced[i] = full;
        variants.push(replaced.join(" "));

        if !query.contains(full) {
            variants.push(format!("{} {}", query, full));
        }
    }

    let mut seen = std::collections::HashSet::new();
    variants.retain(|variant| seen.insert(variant.clone()));
    variants
}
