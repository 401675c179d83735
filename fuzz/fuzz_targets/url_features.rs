#![no_main]

use detection::{ScanEngine, UrlFeatures};
use libfuzzer_sys::fuzz_target;
use once_cell::sync::Lazy;

static ENGINE: Lazy<ScanEngine> = Lazy::new(ScanEngine::new);

fuzz_target!(|data: &[u8]| {
    let url = String::from_utf8_lossy(data);
    let features = UrlFeatures::extract(&url);
    let prediction = ENGINE.classify(&features);
    assert!(prediction.score.is_finite());
    assert!((0.0..=1.0).contains(&prediction.score));
});
