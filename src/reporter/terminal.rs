use crate::classifier::RiskStatus;
use crate::config::UiPreset;
use crate::reporter::Reporter;
use crate::verdict::{CheckItem, CheckSeverity, TypoAssessment, TypoSeverity, Verdict};
use colored::Colorize;

const METER_WIDTH: usize = 10;

pub struct TerminalReporter {
    preset: UiPreset,
    verbose: bool,
}

/// Human label for a status.
pub fn status_label(status: RiskStatus) -> &'static str {
    match status {
        RiskStatus::Safe => "Safe",
        RiskStatus::Warning => "Warning",
        RiskStatus::Danger => "Danger",
        RiskStatus::Unknown => "Unknown",
    }
}

/// One-line description of the typosquatting assessment.
pub fn typo_caption(typo: &TypoAssessment) -> String {
    match typo.severity {
        TypoSeverity::Danger if typo.matched.is_empty() => "High typosquatting risk".to_string(),
        TypoSeverity::Danger => format!("High risk: looks like {}", typo.matched),
        TypoSeverity::Warning if typo.matched.is_empty() => {
            "Similarity with trusted domains detected".to_string()
        }
        TypoSeverity::Warning => format!("Possible spoof: {}", typo.matched),
        TypoSeverity::Safe => "No risk detected".to_string(),
    }
}

/// Visual bar for a 0-100 score.
pub fn score_bar(score: u32) -> String {
    let filled = ((score.min(100) as f32 / 100.0) * METER_WIDTH as f32).round() as usize;
    let filled = filled.min(METER_WIDTH);
    format!("{}{}", "█".repeat(filled), "░".repeat(METER_WIDTH - filled))
}

impl TerminalReporter {
    pub fn new(preset: UiPreset) -> Self {
        Self {
            preset,
            verbose: false,
        }
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    fn status_color(&self, status: RiskStatus) -> colored::ColoredString {
        let label = format!("[{}]", status_label(status).to_uppercase());
        match status {
            RiskStatus::Safe => label.green().bold(),
            RiskStatus::Warning => label.yellow().bold(),
            RiskStatus::Danger => label.red().bold(),
            RiskStatus::Unknown => label.white().dimmed(),
        }
    }

    fn check_color(&self, check: &CheckItem) -> colored::ColoredString {
        let value = check.value.as_str();
        match check.severity {
            CheckSeverity::Success => value.green(),
            CheckSeverity::Warning => value.yellow(),
            CheckSeverity::Danger => value.red().bold(),
            CheckSeverity::Muted => value.dimmed(),
        }
    }

    fn typo_color(&self, typo: &TypoAssessment, text: String) -> colored::ColoredString {
        match typo.severity {
            TypoSeverity::Safe => text.green(),
            TypoSeverity::Warning => text.yellow(),
            TypoSeverity::Danger => text.red(),
        }
    }

    fn format_verdict(&self, verdict: &Verdict) -> String {
        let mut output = String::new();
        let domain = if verdict.domain.is_empty() {
            "—"
        } else {
            verdict.domain.as_str()
        };

        output.push_str(&format!(
            "{} {}\n",
            self.status_color(verdict.status),
            domain.bold()
        ));
        output.push_str(&format!("  {}\n", verdict.reason));

        if self.preset != UiPreset::Minimal && !verdict.checks.is_empty() {
            output.push_str(&format!("  {}\n", "Analysis details:".dimmed()));
            for check in &verdict.checks {
                output.push_str(&format!(
                    "    {:<20} {}\n",
                    check.label,
                    self.check_color(check)
                ));
            }
        }

        let caption = typo_caption(&verdict.typo);
        match self.preset {
            UiPreset::Full => {
                output.push_str(&format!(
                    "  Typosquatting risk: {} {:>3}\n",
                    self.typo_color(&verdict.typo, score_bar(verdict.typo.score)),
                    verdict.typo.score
                ));
                output.push_str(&format!("  {}\n", self.typo_color(&verdict.typo, caption)));
            }
            UiPreset::Balanced => {
                output.push_str(&format!("  {}\n", self.typo_color(&verdict.typo, caption)));
            }
            UiPreset::Minimal => {}
        }

        if self.verbose && !verdict.typo.matched.is_empty() {
            output.push_str(&format!(
                "  {}\n",
                format!("closest trusted domain: {}", verdict.typo.matched).dimmed()
            ));
        }

        output
    }
}

impl Reporter for TerminalReporter {
    fn report(&self, verdicts: &[Verdict]) -> String {
        let mut output = String::new();

        for verdict in verdicts {
            output.push_str(&self.format_verdict(verdict));
            output.push('\n');
        }

        let count = |status: RiskStatus| verdicts.iter().filter(|v| v.status == status).count();
        output.push_str(&format!("{}\n", "━".repeat(50)));
        output.push_str(&format!(
            "Summary: {} danger, {} warning, {} safe, {} unknown\n",
            count(RiskStatus::Danger).to_string().red().bold(),
            count(RiskStatus::Warning).to_string().yellow(),
            count(RiskStatus::Safe).to_string().green(),
            count(RiskStatus::Unknown)
        ));

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures::{analyze, github_analyzer, mixed_verdicts};

    #[test]
    fn test_status_labels() {
        assert_eq!(status_label(RiskStatus::Safe), "Safe");
        assert_eq!(status_label(RiskStatus::Danger), "Danger");
        assert_eq!(status_label(RiskStatus::Unknown), "Unknown");
    }

    #[test]
    fn test_typo_captions() {
        let danger = TypoAssessment {
            score: 100,
            severity: TypoSeverity::Danger,
            matched: "github.com".to_string(),
        };
        assert_eq!(typo_caption(&danger), "High risk: looks like github.com");

        let warning = TypoAssessment {
            score: 50,
            severity: TypoSeverity::Warning,
            matched: String::new(),
        };
        assert_eq!(typo_caption(&warning), "Similarity with trusted domains detected");

        let safe = TypoAssessment {
            score: 0,
            severity: TypoSeverity::Safe,
            matched: "github.com".to_string(),
        };
        assert_eq!(typo_caption(&safe), "No risk detected");
    }

    #[test]
    fn test_score_bar() {
        assert_eq!(score_bar(0), "░░░░░░░░░░");
        assert_eq!(score_bar(50), "█████░░░░░");
        assert_eq!(score_bar(100), "██████████");
        assert_eq!(score_bar(83), "████████░░");
        assert_eq!(score_bar(250), "██████████");
    }

    #[test]
    fn test_report_full_preset() {
        let reporter = TerminalReporter::new(UiPreset::Full);
        let output = reporter.report(&[github_analyzer().analyze("githib.com")]);

        assert!(output.contains("DANGER"));
        assert!(output.contains("githib.com"));
        assert!(output.contains("Suspiciously similar to github.com (distance 1)."));
        assert!(output.contains("Analysis details:"));
        assert!(output.contains("Whitelist check"));
        assert!(output.contains("Risk detected"));
        assert!(output.contains("Typosquatting risk:"));
        assert!(output.contains("High risk: looks like github.com"));
    }

    #[test]
    fn test_report_balanced_preset() {
        let reporter = TerminalReporter::new(UiPreset::Balanced);
        let output = reporter.report(&[github_analyzer().analyze("githab.io")]);

        assert!(output.contains("WARNING"));
        assert!(output.contains("Analysis details:"));
        assert!(output.contains("Possible spoof: github.com"));
        assert!(!output.contains("Typosquatting risk:"));
    }

    #[test]
    fn test_report_minimal_preset() {
        let reporter = TerminalReporter::new(UiPreset::Minimal);
        let output = reporter.report(&[analyze("github.com")]);

        assert!(output.contains("SAFE"));
        assert!(output.contains("Domain is on the trusted list."));
        assert!(!output.contains("Analysis details:"));
        assert!(!output.contains("No risk detected"));
    }

    #[test]
    fn test_report_unknown_shows_placeholder() {
        let output = TerminalReporter::new(UiPreset::Full).report(&[analyze("")]);
        assert!(output.contains("UNKNOWN"));
        assert!(output.contains("—"));
    }

    #[test]
    fn test_report_summary_counts() {
        let output = TerminalReporter::new(UiPreset::Minimal).report(&mixed_verdicts());
        assert!(output.contains("Summary:"));
        assert!(output.contains(" danger, "));
        assert!(output.contains(" unknown"));
    }

    #[test]
    fn test_report_verbose_shows_closest_domain() {
        let reporter = TerminalReporter::new(UiPreset::Minimal).with_verbose(true);
        let output = reporter.report(&[github_analyzer().analyze("githab.io")]);
        assert!(output.contains("closest trusted domain: github.com"));

        let quiet = TerminalReporter::new(UiPreset::Minimal).report(&[github_analyzer().analyze("githab.io")]);
        assert!(!quiet.contains("closest trusted domain"));
    }
}
