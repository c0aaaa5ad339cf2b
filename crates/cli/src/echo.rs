use std::path::Path;

use owo_colors::OwoColorize;
use paperchase_core::RunSummary;

use crate::VERSION;

/// Print a styled banner for verbose mode
pub fn print_banner() {
    eprintln!(
        "\n{} {} {}",
        "Paperchase".bold().bright_blue(),
        "v".dimmed(),
        VERSION.dimmed()
    );
    eprintln!("{}", "Download conference papers from proceedings listings\n".dimmed());
}

/// Print a success message
pub fn print_success(message: &str) {
    eprintln!("{} {}", "✓".green(), message.bright_green());
}

/// Print an info message
pub fn print_info(message: &str) {
    eprintln!("{} {}", "ℹ".blue(), message.bright_blue());
}

/// Print a warning message
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow(), message.bright_yellow());
}

/// Print the end-of-run counters
pub fn print_summary(summary: &RunSummary, output_dir: &Path) {
    eprintln!("\n{}", "═".repeat(60).dimmed());
    eprintln!("{}", "Run Summary".bold().cyan());
    eprintln!("{}", "═".repeat(60).dimmed());

    let rows = [
        ("Downloaded:", summary.downloaded.to_string()),
        ("Written:", format_size(summary.bytes)),
        ("Already present:", summary.already_present.to_string()),
        ("Missing links:", summary.missing_links.to_string()),
        ("Gated:", summary.gated.to_string()),
        ("Failed:", summary.failed.to_string()),
        ("No parser:", summary.unmatched.to_string()),
    ];
    for (label, value) in rows {
        eprintln!("  {:<18} {}", label.dimmed(), value.bright_white());
    }
    eprintln!();

    if summary.failed > 0 {
        print_warning(&format!("{} downloads failed, rerun to retry them", summary.failed));
    }
    print_success(&format!("Papers stored under {}", output_dir.display().bright_white()));
}

/// Format file size for display
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = 1024 * KB;

    if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}
