use crate::core::registry::CARRIERS;
use crate::domain::model::CarrierId;
use once_cell::sync::Lazy;
use regex::Regex;

// 依註冊順序展開成扁平清單，第一個命中的規則勝出
static RULES: Lazy<Vec<(CarrierId, Regex)>> = Lazy::new(|| {
    CARRIERS
        .iter()
        .flat_map(|carrier| {
            carrier.patterns.iter().map(move |pattern| {
                let regex = Regex::new(pattern).expect("registry patterns are valid regexes");
                (carrier.id, regex)
            })
        })
        .collect()
});

/// Trim and upper-case a user supplied tracking number.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// Carrier owning `tracking_number`, which must already be normalized.
///
/// Carriers are tried in registry order and rules within a carrier in
/// declaration order; the first full-string match wins.
pub fn detect(tracking_number: &str) -> Option<CarrierId> {
    RULES
        .iter()
        .find(|(_, rule)| rule.is_match(tracking_number))
        .map(|(id, _)| *id)
}

pub fn detect_raw(raw: &str) -> Option<CarrierId> {
    detect(&normalize(raw))
}
