//! English noun pluralization
//!
//! Studly-cased class names are pluralized on their last word, so
//! `TestModel` becomes `TestModels` and `BlogCategory` becomes
//! `BlogCategories`. The casing of the original word is kept.

/// Turns a singular noun into its plural form
pub trait Pluralizer {
    fn pluralize(&self, word: &str) -> String;
}

/// Rule-based English pluralizer
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishPluralizer;

/// Words with the same singular and plural form
const UNCOUNTABLE: &[&str] = &[
    "audio",
    "data",
    "deer",
    "equipment",
    "feedback",
    "fish",
    "information",
    "knowledge",
    "metadata",
    "money",
    "news",
    "police",
    "rice",
    "series",
    "sheep",
    "species",
    "staff",
    "traffic",
];

/// Irregular singular/plural pairs, lowercase, matched as whole words
const IRREGULAR: &[(&str, &str)] = &[
    ("ox", "oxen"),
    ("potato", "potatoes"),
    ("hero", "heroes"),
    ("tomato", "tomatoes"),
    ("echo", "echoes"),
    ("leaf", "leaves"),
    ("life", "lives"),
    ("knife", "knives"),
    ("wife", "wives"),
    ("half", "halves"),
    ("wolf", "wolves"),
    ("shelf", "shelves"),
    ("thief", "thieves"),
    ("quiz", "quizzes"),
];

/// Irregular endings, lowercase, matched as word suffixes (`Chairman`, `Grandchild`)
const IRREGULAR_SUFFIX: &[(&str, &str)] = &[
    ("person", "people"),
    ("child", "children"),
    ("criterion", "criteria"),
    ("foot", "feet"),
    ("goose", "geese"),
    ("tooth", "teeth"),
    ("mouse", "mice"),
    ("man", "men"),
];

/// Words an irregular suffix would otherwise catch
const REGULAR_EXCEPTIONS: &[&str] = &[
    "caiman", "german", "human", "mongoose", "roman", "shaman", "talisman",
];

/// Singular words ending in a vowel and `s` that still take `es`
const SINGULAR_ENDING_IN_S: &[&str] = &["alias", "bias", "iris"];

impl Pluralizer for EnglishPluralizer {
    fn pluralize(&self, word: &str) -> String {
        let split = last_word_start(word);
        let (head, last) = word.split_at(split);
        format!("{head}{}", pluralize_word(last))
    }
}

/// Byte index where the last studly-cased word starts
///
/// A run of capitals counts as part of the word that follows it, so the
/// last word of `APIKey` is `Key` and of `OrderAPI` is `API`.
fn last_word_start(word: &str) -> usize {
    let chars: Vec<(usize, char)> = word.char_indices().collect();
    let mut start = 0;
    for i in 1..chars.len() {
        let (index, c) = chars[i];
        if !c.is_uppercase() {
            continue;
        }
        let prev_upper = chars[i - 1].1.is_uppercase();
        let next_lower = chars.get(i + 1).is_some_and(|(_, n)| n.is_lowercase());
        if !prev_upper || next_lower {
            start = index;
        }
    }
    start
}

fn pluralize_word(word: &str) -> String {
    if word.is_empty() {
        return String::new();
    }

    let lower = word.to_lowercase();

    if UNCOUNTABLE.contains(&lower.as_str()) {
        return word.to_string();
    }

    if let Some((_, plural)) = IRREGULAR.iter().find(|(singular, _)| *singular == lower) {
        return match_case(word, plural);
    }

    if !REGULAR_EXCEPTIONS.contains(&lower.as_str()) {
        if let Some((stem, ending, plural)) =
            IRREGULAR_SUFFIX.iter().find_map(|(singular, plural)| {
                let at = word.len().checked_sub(singular.len())?;
                let ending = word.get(at..)?;
                ending
                    .eq_ignore_ascii_case(singular)
                    .then(|| (&word[..at], ending, *plural))
            })
        {
            return format!("{stem}{}", match_case(ending, plural));
        }
    }

    if SINGULAR_ENDING_IN_S.contains(&lower.as_str()) || lower.ends_with("us") {
        return format!("{word}es");
    }

    if lower.ends_with("sis") {
        return format!("{}es", &word[..word.len() - 2]);
    }

    if lower.ends_with("ss")
        || lower.ends_with('x')
        || lower.ends_with('z')
        || lower.ends_with("ch")
        || lower.ends_with("sh")
        || ends_with_consonant_as(&lower)
    {
        return format!("{word}es");
    }

    // Already plural
    if lower.ends_with('s') {
        return word.to_string();
    }

    if lower.ends_with('y') && !ends_with_vowel_y(&lower) {
        return format!("{}ies", &word[..word.len() - 1]);
    }

    format!("{word}s")
}

/// `gas`, `canvas`, `atlas`; `ideas` and `areas` are plurals
fn ends_with_consonant_as(lower: &str) -> bool {
    lower
        .strip_suffix("as")
        .and_then(|stem| stem.chars().last())
        .is_some_and(|c| !matches!(c, 'a' | 'e' | 'i' | 'o' | 'u'))
}

fn ends_with_vowel_y(lower: &str) -> bool {
    let mut chars = lower.chars().rev();
    chars.next();
    matches!(chars.next(), Some('a' | 'e' | 'i' | 'o' | 'u'))
}

/// Apply the casing of `original` to `plural`
fn match_case(original: &str, plural: &str) -> String {
    if original.len() > 1 && original.chars().all(|c| !c.is_lowercase()) {
        return plural.to_uppercase();
    }

    let mut chars = plural.chars();
    match (original.chars().next(), chars.next()) {
        (Some(first), Some(p)) if first.is_uppercase() => {
            p.to_uppercase().chain(chars).collect()
        }
        _ => plural.to_string(),
    }
}
