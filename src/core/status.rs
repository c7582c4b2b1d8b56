use crate::domain::model::StatusCategory;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Match {
    Exact,
    Contains,
}

struct Phrase {
    source: &'static str,
    english: &'static str,
    kind: Match,
}

const fn contains(source: &'static str, english: &'static str) -> Phrase {
    Phrase {
        source,
        english,
        kind: Match::Contains,
    }
}

const fn exact(source: &'static str, english: &'static str) -> Phrase {
    Phrase {
        source,
        english,
        kind: Match::Exact,
    }
}

// Longer phrases must precede their prefixes: the first matching entry wins.
static PHRASES: &[Phrase] = &[
    contains("Αποστολή παραδόθηκε σε", "Delivered to"),
    contains("Αποστολή παραδόθηκε", "Delivered"),
    contains("Αποστολή βρίσκεται σε στάδιο μεταφοράς", "In Transit"),
    contains("Αποστολή προς παράδοση", "Out for Delivery"),
    contains("Παραλαβή από αποστολέα", "Picked Up"),
    contains("Δημιουργία ΣΥ.ΔΕ.ΤΑ.", "Shipment Created"),
    exact("new", "Shipment Created"),
    exact("in-depot", "In Transit"),
    exact("final-destination", "Ready for Pickup"),
    exact("delivered", "Delivered"),
];

static CATEGORY_KEYWORDS: &[(&str, StatusCategory)] = &[
    ("delivered", StatusCategory::Delivered),
    ("παραδόθηκε", StatusCategory::Delivered),
    ("transit", StatusCategory::InTransit),
    ("μεταφοράς", StatusCategory::InTransit),
    ("out for delivery", StatusCategory::InTransit),
    ("picked up", StatusCategory::InTransit),
    ("created", StatusCategory::Created),
    ("δημιουργία", StatusCategory::Created),
];

/// English rendering of a carrier status, or the input unchanged when no
/// phrase matches.
pub fn translate_status(raw: &str) -> String {
    let needle = raw.trim().to_lowercase();

    PHRASES
        .iter()
        .find(|phrase| {
            let source = phrase.source.to_lowercase();
            match phrase.kind {
                Match::Exact => needle == source,
                Match::Contains => needle == source || needle.contains(&source),
            }
        })
        .map(|phrase| phrase.english.to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// Coarse category of a status (English or raw carrier text).
///
/// Matching is by substring, so a status that merely mentions a keyword (for
/// example a place name) is classified by it. Never returns `Error`.
pub fn classify(status: &str) -> StatusCategory {
    let haystack = status.to_lowercase();

    CATEGORY_KEYWORDS
        .iter()
        .find(|(keyword, _)| haystack.contains(*keyword))
        .map(|(_, category)| *category)
        .unwrap_or(StatusCategory::Unknown)
}

/// `in-depot` -> `In Depot`
pub fn humanize(state: &str) -> String {
    state
        .split(['-', '_', ' '])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(|c| c.to_lowercase()))
                    .collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
