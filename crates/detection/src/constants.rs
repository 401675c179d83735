/// Number of features in the model's input vector.
pub const FEATURE_COUNT: usize = 16;

/// Feature names for interpretability / logging. Order is the contract with
/// the model artifact: weight `i` applies to feature `i`.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "have_ip",         // dotted-quad IPv4-shaped substring present
    "have_at",         // literal '@' present
    "url_length",      // exact character count
    "url_depth",       // count of '/' characters
    "redirection",     // '//' occurs more than once
    "https_in_domain", // "https" occurs after the 8th character
    "shortener",       // known URL-shortener domain substring
    "prefix_suffix",   // '-' present
    "dns_record",      // placeholder — live lookups out of scope
    "web_traffic",     // placeholder
    "domain_age",      // placeholder
    "domain_end",      // placeholder
    "iframe",          // "iframe" substring, case-insensitive
    "mouse_over",      // placeholder
    "right_click",     // placeholder
    "web_forwards",    // '//' occurs more than twice
];

// Values the placeholder features always carry. The model was trained with
// these constants in place of live DNS / traffic / WHOIS signals, so the
// runtime vector must carry them too.
pub(crate) const DNS_RECORD_PLACEHOLDER: f64 = 1.0;
pub(crate) const WEB_TRAFFIC_PLACEHOLDER: f64 = 1.0;
pub(crate) const DOMAIN_AGE_PLACEHOLDER: f64 = 12.0;
pub(crate) const DOMAIN_END_PLACEHOLDER: f64 = 6.0;
pub(crate) const MOUSE_OVER_PLACEHOLDER: f64 = 0.0;
pub(crate) const RIGHT_CLICK_PLACEHOLDER: f64 = 0.0;
