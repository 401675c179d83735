use std::io::{self, BufRead, Write};

use anyhow::{bail, Context, Result};
use detection::{Prediction, ScanEngine, UrlFeatures, UrlModel, Verdict};
use tracing::warn;

use crate::config::{ScanConfig, MODEL_PATH_ENV};

/// Outcome of submitting one line of input.
#[derive(Debug)]
pub enum Submission {
    /// Empty input — the model is never called.
    Rejected,
    Classified(Prediction),
}

/// Load the pretrained artifact. A missing or malformed artifact is fatal:
/// the caller reports the error and nothing else runs.
pub fn load_engine(config: &ScanConfig) -> Result<ScanEngine> {
    if !config.model_path.exists() {
        bail!(
            "model artifact not found at {} — place the pretrained model there, \
             set {MODEL_PATH_ENV}, or pass --model",
            config.model_path.display()
        );
    }
    let model = UrlModel::from_file(&config.model_path)
        .with_context(|| format!("loading model from {}", config.model_path.display()))?;
    Ok(ScanEngine::with_model(model))
}

/// Classify one input line. Empty or whitespace-only input is rejected
/// before any feature extraction or model call.
pub fn submit(engine: &ScanEngine, input: &str) -> Submission {
    let url = input.trim();
    if url.is_empty() {
        return Submission::Rejected;
    }
    let features = UrlFeatures::extract(url);
    Submission::Classified(engine.classify(&features))
}

/// Render a verdict line echoing the URL, with score and top contributing
/// features when verbose.
pub fn format_verdict(url: &str, prediction: &Prediction, verbose: bool) -> String {
    let banner = match prediction.verdict {
        Verdict::Phishing => "PHISHING",
        Verdict::Safe => "SAFE",
    };
    let mut out = format!("{banner}  {url}\n");
    if verbose {
        out.push_str(&format!("  score {:.3}\n", prediction.score));
        for (name, contribution) in &prediction.top_features {
            out.push_str(&format!("  {name:<16} {contribution:+.3}\n"));
        }
    }
    out
}

/// Render the extracted feature vector as a name/value table.
pub fn format_features(url: &str) -> String {
    let features = UrlFeatures::extract(url);
    let mut out = String::new();
    for (name, value) in features.named() {
        out.push_str(&format!("{name:<16} {value}\n"));
    }
    out
}

pub fn run_scan(engine: &ScanEngine, url: &str, verbose: bool) {
    match submit(engine, url) {
        Submission::Rejected => warn!("empty input, nothing to scan"),
        Submission::Classified(prediction) => {
            print!("{}", format_verdict(url.trim(), &prediction, verbose));
        }
    }
}

pub fn print_model_info(engine: &ScanEngine) {
    println!("model id        {}", engine.model_id());
    println!("model version   {}", engine.model_version());
    println!("threshold       {}", engine.threshold());
    println!("weights         {}", engine.weight_count());
}

/// One synchronous request/response cycle per line until EOF or `quit`.
pub fn run_interactive(engine: &ScanEngine, verbose: bool) -> Result<()> {
    println!("urlguard — enter a URL per line ('quit' to exit)");
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("url> ");
        stdout.flush().context("flushing prompt")?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).context("reading input")? == 0 {
            break; // EOF
        }
        let input = line.trim();
        if input == "quit" || input == "exit" {
            break;
        }
        match submit(engine, input) {
            Submission::Rejected => warn!("empty input — enter a URL to check"),
            Submission::Classified(prediction) => {
                print!("{}", format_verdict(input, &prediction, verbose));
            }
        }
    }
    Ok(())
}
