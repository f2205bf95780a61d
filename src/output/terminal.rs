// Colored terminal output for risk reports and timelines.
//
// All terminal-specific formatting lives here; main.rs delegates.

use colored::Colorize;

use crate::output::truncate_chars;
use crate::report::{Finding, FindingCategory, MessageRiskLevel, RiskLevel, RiskReport};
use crate::timeline::TimelineEvent;
use crate::triage::MessageTriage;

/// Display a full risk report.
pub fn display_report(report: &RiskReport) {
    println!("\n{}", "=== Forensic Risk Report ===".bold());
    println!(
        "  Risk score: {}/100   Risk level: {}",
        report.score(),
        colorize_level(report.level())
    );

    display_findings(
        "Integrity anomalies",
        report.findings_for(FindingCategory::Integrity),
    );
    display_findings(
        "Malware indicators",
        report.findings_for(FindingCategory::MalwareIndicator),
    );
    display_findings(
        "Suspicious behavior",
        report.findings_for(FindingCategory::SuspiciousBehavior),
    );

    if report.finding_count() == 0 {
        println!("\n  {}", "No findings. Records look clean.".green());
    }
    println!();
}

fn display_findings(heading: &str, findings: &[Finding]) {
    if findings.is_empty() {
        return;
    }
    println!("\n  {} ({})", heading.bold(), findings.len());
    for finding in findings {
        println!(
            "    [{:>3}] {}",
            format!("+{}", finding.weight).yellow(),
            truncate_chars(&finding.message, 100)
        );
    }
}

/// Display a single-message triage verdict.
pub fn display_triage(text: &str, triage: &MessageTriage) {
    println!("\n  \"{}\"", truncate_chars(text, 80).dimmed());
    println!(
        "  Score: {}/100   Level: {}",
        triage.risk_score,
        colorize_message_level(triage.risk_level)
    );
}

/// Display a chronological timeline.
pub fn display_timeline(events: &[TimelineEvent]) {
    if events.is_empty() {
        println!("No events in this case file.");
        return;
    }
    println!(
        "\n{}",
        format!("=== Timeline ({} events) ===", events.len()).bold()
    );
    for event in events {
        println!(
            "  {}  {:<8}  {:<14} {}",
            event.timestamp.to_string().dimmed(),
            colorize_message_level(event.risk),
            event.title,
            truncate_chars(&event.description, 60)
        );
    }
    println!();
}

fn colorize_level(level: RiskLevel) -> colored::ColoredString {
    match level {
        RiskLevel::High => level.as_str().red().bold(),
        RiskLevel::Medium => level.as_str().yellow(),
        RiskLevel::Low => level.as_str().green(),
    }
}

fn colorize_message_level(level: MessageRiskLevel) -> colored::ColoredString {
    match level {
        MessageRiskLevel::Critical => level.as_str().red().bold(),
        MessageRiskLevel::High => level.as_str().bright_red(),
        MessageRiskLevel::Medium => level.as_str().yellow(),
        MessageRiskLevel::Low => level.as_str().green(),
    }
}
