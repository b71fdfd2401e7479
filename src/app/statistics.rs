//! Statistics printing.

use log::info;
use strum::IntoEnumIterator;

use crate::error_handling::{ProcessingStats, SkipKind};
use crate::run::ScanReport;

/// Formats the skip counters as log lines, one header plus one line per
/// non-zero category. Empty when no file was skipped.
pub fn skip_statistics_lines(stats: &ProcessingStats) -> Vec<String> {
    let total = stats.total_skips();
    if total == 0 {
        return Vec::new();
    }

    let mut lines = vec![format!("Skipped mail files ({} total):", total)];
    for kind in SkipKind::iter() {
        let count = stats.get_skip_count(kind);
        if count > 0 {
            lines.push(format!("   {}: {}", kind.as_str(), count));
        }
    }
    lines
}

/// Logs how many mail files were skipped, per category.
pub fn print_skip_statistics(stats: &ProcessingStats) {
    for line in skip_statistics_lines(stats) {
        info!("{line}");
    }
}

/// Logs the per-stage counts of a finished run.
pub fn print_stage_statistics(report: &ScanReport) {
    info!(
        "Pipeline: {} mail(s) -> {} URL(s) -> {} valid domain(s) -> {} after whitelist",
        report.mails_read, report.urls_found, report.valid_domains, report.candidates
    );
    if report.resolvable + report.unresolvable > 0 {
        info!(
            "DNS probe: {} resolvable, {} not resolvable (all blocked)",
            report.resolvable, report.unresolvable
        );
    }
    if report.unchecked > 0 {
        info!("DNS probe skipped for {} domain(s)", report.unchecked);
    }
    info!(
        "Blocklist: {} previously, {} added, {} total",
        report.previously_blocked,
        report.added(),
        report.total_blocked
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skip_statistics_lines_empty_without_skips() {
        let stats = ProcessingStats::new();
        assert!(skip_statistics_lines(&stats).is_empty());
    }

    #[test]
    fn test_skip_statistics_lines_lists_non_zero_kinds() {
        let mut stats = ProcessingStats::new();
        stats.increment_skip(SkipKind::ReadError);
        stats.increment_skip(SkipKind::ReadError);

        assert_eq!(
            skip_statistics_lines(&stats),
            vec![
                "Skipped mail files (2 total):".to_string(),
                "   read error: 2".to_string(),
            ]
        );
    }

    #[test]
    fn test_skip_statistics_lines_follow_kind_order() {
        let mut stats = ProcessingStats::new();
        stats.increment_skip(SkipKind::ReadError);
        stats.increment_skip(SkipKind::NotAFile);

        let lines = skip_statistics_lines(&stats);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "   not a regular file: 1");
        assert_eq!(lines[2], "   read error: 1");
    }
}
