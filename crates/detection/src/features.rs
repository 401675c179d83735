use aho_corasick::AhoCorasick;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::{
    DNS_RECORD_PLACEHOLDER, DOMAIN_AGE_PLACEHOLDER, DOMAIN_END_PLACEHOLDER, FEATURE_COUNT,
    FEATURE_NAMES, MOUSE_OVER_PLACEHOLDER, RIGHT_CLICK_PLACEHOLDER, WEB_TRAFFIC_PLACEHOLDER,
};

/// Dotted-quad IPv4-shaped substring. Shape only — octet ranges are not
/// checked, matching how the training data was labelled.
static IPV4_LITERAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\d{1,3}(?:\.\d{1,3}){3}\b").expect("static pattern"));

/// Known URL-shortening service domains, matched as plain substrings.
const SHORTENER_DOMAINS: [&str; 10] = [
    "bit.ly", "goo.gl", "shorte.st", "go2l.ink", "x.co", "ow.ly", "tinyurl", "tr.im", "is.gd",
    "cli.gs",
];

static SHORTENER_SCANNER: Lazy<AhoCorasick> =
    Lazy::new(|| AhoCorasick::new(SHORTENER_DOMAINS).expect("static patterns"));

/// Lexical features extracted from a single URL string.
///
/// The input is raw and unvalidated — empty strings, malformed URLs and
/// arbitrary text all produce a vector; extraction never fails.
#[derive(Debug, Clone)]
pub struct UrlFeatures {
    pub values: [f64; FEATURE_COUNT],
}

impl UrlFeatures {
    /// Extract the feature vector. Pure string/regex evaluation, no I/O.
    ///
    /// Positions and lengths are counted in characters, not bytes, so
    /// multibyte input is handled exactly.
    pub fn extract(url: &str) -> Self {
        let mut values = [0.0f64; FEATURE_COUNT];

        // Non-overlapping count, shared by the redirection and forwarding
        // flags. A single scheme separator contributes one occurrence.
        let double_slash = url.matches("//").count();

        values[0] = flag(IPV4_LITERAL.is_match(url));
        values[1] = flag(url.contains('@'));
        values[2] = url.chars().count() as f64;
        values[3] = url.matches('/').count() as f64;
        values[4] = flag(double_slash > 1);
        values[5] = flag(chars_from(url, 8).contains("https"));
        values[6] = flag(SHORTENER_SCANNER.is_match(url));
        values[7] = flag(url.contains('-'));

        // Live DNS / traffic / WHOIS lookups are out of scope; these carry
        // the constants the model was trained with.
        values[8] = DNS_RECORD_PLACEHOLDER;
        values[9] = WEB_TRAFFIC_PLACEHOLDER;
        values[10] = DOMAIN_AGE_PLACEHOLDER;
        values[11] = DOMAIN_END_PLACEHOLDER;

        values[12] = flag(url.to_lowercase().contains("iframe"));
        values[13] = MOUSE_OVER_PLACEHOLDER;
        values[14] = RIGHT_CLICK_PLACEHOLDER;
        values[15] = flag(double_slash > 2);

        Self { values }
    }

    /// Iterate `(name, value)` pairs in model order.
    pub fn named(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        FEATURE_NAMES.iter().zip(self.values).map(|(n, v)| (*n, v))
    }
}

fn flag(condition: bool) -> f64 {
    if condition {
        1.0
    } else {
        0.0
    }
}

/// Tail of `s` starting at character index `n` (empty when `s` is shorter).
fn chars_from(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((idx, _)) => &s[idx..],
        None => "",
    }
}
