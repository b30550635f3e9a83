//! Statistics reporting.

use console::style;

use crate::scan::ScanStats;

/// Print the summary for a finished scan.
pub fn print_scan_stats(stats: &ScanStats) {
    println!();
    println!("{}", style("═".repeat(50)).dim());
    println!("{}", style("Import summary:").bold());
    println!("  Creators:    {}", stats.creators_resolved());
    println!("  Collections: {}", stats.collections_resolved());
    println!("  Models:      {}", stats.models_imported);
    println!("  Files:       {}", stats.files_imported);
    println!("  Digested:    {} bytes", stats.bytes_digested);
    if stats.entries_skipped > 0 {
        println!(
            "  Skipped:     {} non-directory entries",
            style(stats.entries_skipped).yellow()
        );
    }
    println!("{}", style("═".repeat(50)).dim());
}
