//! Progress reporting for the matching pass
//!
//! One standardized indicatif bar sized to the treated group, so long runs
//! stay observable without the engine touching terminal state itself.

use indicatif::{ProgressBar, ProgressStyle};

/// Bar template for the matching pass: position counts treated units
/// processed, the trailing message carries the running match count
pub const MATCHING_BAR_TEMPLATE: &str =
    "{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} treated ({per_sec}) {msg}";

/// Create the progress bar for a matching pass over `treated` units
///
/// `description` seeds the message slot until the pass starts reporting
/// match counts.
#[must_use]
pub fn create_matching_progress_bar(treated: u64, description: Option<&str>) -> ProgressBar {
    let pb = ProgressBar::new(treated);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(MATCHING_BAR_TEMPLATE)
            .unwrap()
            .progress_chars("#>-"),
    );

    if let Some(desc) = description {
        pb.set_message(desc.to_string());
    }

    pb
}

/// Finish the bar, leaving `message` as its final line when given
pub fn finish_progress_bar(pb: &ProgressBar, message: Option<&str>) {
    if let Some(msg) = message {
        pb.finish_with_message(msg.to_string());
    } else {
        pb.finish();
    }
}
