//! Statistics rendering
//!
//! Turns a [`TransferStats`] record into the human-readable run summary.
//! Purely presentational; never touches the stats.

use std::fmt::Write as _;

use crate::mirror::{TransferFailure, TransferStats};

const HEADER: &str = "### Statistics ###";

fn mebibytes(bytes: u64) -> f64 {
    bytes as f64 / (1024.0 * 1024.0)
}

/// Render the run summary
///
/// Scalar counters are right-justified; byte counters are shown in
/// mebibytes with two decimals. Non-empty failure lists get a `=>` marker
/// followed by one indented `[reason] locator` line per entry.
pub fn render(stats: &TransferStats) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{HEADER}");
    let _ = writeln!(
        out,
        "{:>10}: {:>12}",
        "read",
        format!("{:.2}MB", mebibytes(stats.read))
    );
    let _ = writeln!(
        out,
        "{:>10}: {:>12}",
        "written",
        format!("{:.2}MB", mebibytes(stats.written))
    );
    let _ = writeln!(out, "{:>10}: {:>12}", "success", stats.success);
    let _ = writeln!(out, "{:>10}: {:>12}", "skipped", stats.skipped);
    render_failures(&mut out, "fatal", &stats.fatal);
    render_failures(&mut out, "fail", &stats.fail);

    out
}

fn render_failures(out: &mut String, name: &str, failures: &[TransferFailure]) {
    let _ = write!(out, "{:>10}: {:>12}", name, failures.len());
    if !failures.is_empty() {
        out.push_str("\n=>");
    }
    out.push('\n');
    for failure in failures {
        let _ = writeln!(out, "  [{}] {}", failure.reason, failure.locator);
    }
}
