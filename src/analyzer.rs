//! Analysis entry point: hostname in, verdict out.

use crate::classifier::classify;
use crate::distance::{DistanceMatcher, SimilarityResult, Thresholds};
use crate::normalize::normalize_hostname;
use crate::trusted_domains::TrustedDomainSet;
use crate::verdict::{Verdict, VerdictInput, build_verdict};
use tracing::debug;

/// Stateless hostname classifier.
///
/// Holds only the caller-supplied trusted set and thresholds; every call to
/// [`DomainAnalyzer::analyze`] is independent, so one analyzer can be shared
/// freely between threads.
#[derive(Debug, Clone)]
pub struct DomainAnalyzer {
    trusted: TrustedDomainSet,
    thresholds: Thresholds,
}

impl DomainAnalyzer {
    pub fn new(trusted: TrustedDomainSet, thresholds: Thresholds) -> Self {
        Self {
            trusted,
            thresholds,
        }
    }

    /// Analyzer over the default trusted set and thresholds.
    pub fn with_defaults() -> Self {
        Self::new(TrustedDomainSet::with_defaults(), Thresholds::default())
    }

    pub fn trusted(&self) -> &TrustedDomainSet {
        &self.trusted
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    /// Classify one hostname. Never fails; an empty hostname yields an
    /// `unknown` verdict.
    pub fn analyze(&self, hostname: &str) -> Verdict {
        let domain = normalize_hostname(hostname);
        let is_empty = domain.is_empty();

        let (in_whitelist, similarity) = if is_empty {
            (false, SimilarityResult::default())
        } else {
            let matcher = DistanceMatcher::new(&self.trusted, self.thresholds);
            (self.trusted.contains(&domain), matcher.find_similarity(&domain))
        };

        let classification = classify(is_empty, in_whitelist, &similarity);
        debug!(
            domain = %domain,
            status = %classification.status,
            distance = ?similarity.distance,
            matched = ?similarity.matched_domain,
            "Analyzed hostname"
        );

        build_verdict(
            VerdictInput {
                status: classification.status,
                reason: &classification.reason,
                domain: &domain,
                in_whitelist,
                similarity: &similarity,
            },
            &self.thresholds,
        )
    }
}

impl Default for DomainAnalyzer {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::{REASON_UNKNOWN, RiskStatus};
    use crate::trusted_domains::DEFAULT_TRUSTED_DOMAINS;
    use crate::verdict::{CheckSeverity, TypoSeverity};

    fn github_analyzer() -> DomainAnalyzer {
        DomainAnalyzer::new(TrustedDomainSet::new(["github.com"]), Thresholds::default())
    }

    /// Single-character substitutions, insertions and deletions of `domain`.
    fn one_edit_variants(domain: &str) -> Vec<String> {
        let chars: Vec<char> = domain.chars().collect();
        let mut out = Vec::new();
        for i in 0..chars.len() {
            let mut sub = chars.clone();
            sub[i] = if chars[i] == 'x' { 'y' } else { 'x' };
            out.push(sub.iter().collect());

            let mut del = chars.clone();
            del.remove(i);
            out.push(del.iter().collect());

            let mut ins = chars.clone();
            ins.insert(i, 'q');
            out.push(ins.iter().collect());
        }
        out
    }

    #[test]
    fn test_trusted_domains_are_safe() {
        let analyzer = DomainAnalyzer::with_defaults();
        for domain in DEFAULT_TRUSTED_DOMAINS {
            let v = analyzer.analyze(domain);
            assert_eq!(v.status, RiskStatus::Safe, "{domain}");
            assert_eq!(v.typo.score, 0, "{domain}");
            assert_eq!(v.typo.matched, "");
        }
    }

    #[test]
    fn test_one_edit_variants_are_danger() {
        for domain in DEFAULT_TRUSTED_DOMAINS {
            let analyzer =
                DomainAnalyzer::new(TrustedDomainSet::new([*domain]), Thresholds::default());
            for variant in one_edit_variants(domain) {
                let v = analyzer.analyze(&variant);
                assert_eq!(v.status, RiskStatus::Danger, "{variant}");
                assert_eq!(v.typo.matched, *domain, "{variant}");
                assert_eq!(v.typo.score, 100, "{variant}");
            }
        }
    }

    #[test]
    fn test_empty_is_unknown() {
        let v = DomainAnalyzer::with_defaults().analyze("");
        assert_eq!(v.status, RiskStatus::Unknown);
        assert_eq!(v.reason, REASON_UNKNOWN);
        assert_eq!(v.domain, "");
        assert_eq!(v.typo.score, 0);
        assert_eq!(v.typo.matched, "");
        assert_eq!(v.checks.len(), 3);
        assert_eq!(v.checks[2].value, "No matches");
    }

    #[test]
    fn test_unrelated_hostname_is_warning() {
        let v = DomainAnalyzer::with_defaults().analyze("qzvxkwpjrmbtlhdfygsn");
        assert_eq!(v.status, RiskStatus::Warning);
        assert_eq!(v.typo.score, 0);
        assert_eq!(v.typo.severity, TypoSeverity::Safe);
        assert_eq!(v.checks[2].value, "No matches");
    }

    #[test]
    fn test_case_and_www_do_not_matter() {
        let analyzer = DomainAnalyzer::with_defaults();
        let a = analyzer.analyze("GitHub.com");
        let b = analyzer.analyze("www.github.com");
        let c = analyzer.analyze("github.com");
        assert_eq!(a, b);
        assert_eq!(b, c);
        assert_eq!(c.domain, "github.com");
    }

    #[test]
    fn test_githib_scenario() {
        let v = github_analyzer().analyze("githib.com");
        assert_eq!(v.status, RiskStatus::Danger);
        assert_eq!(v.typo.score, 100);
        assert_eq!(v.typo.matched, "github.com");
        assert_eq!(v.reason, "Suspiciously similar to github.com (distance 1).");
    }

    #[test]
    fn test_fallback_best_match_scenario() {
        let v = github_analyzer().analyze("githab.io");
        assert_eq!(v.status, RiskStatus::Warning);
        assert_eq!(v.typo.score, 50);
        assert_eq!(v.typo.severity, TypoSeverity::Warning);
        assert_eq!(v.typo.matched, "github.com");
        assert_eq!(v.checks[2].value, "Distance 3");

        let v = github_analyzer().analyze("gitlub.org");
        assert_eq!(v.status, RiskStatus::Warning);
        assert_eq!(v.typo.score, 33);
        assert_eq!(v.typo.severity, TypoSeverity::Safe);

        let v = github_analyzer().analyze("bitbucket.org");
        assert_eq!(v.status, RiskStatus::Warning);
        assert_eq!(v.typo.score, 0);
        assert_eq!(v.typo.matched, "github.com");
        assert_eq!(v.checks[2].value, "No matches");
    }

    #[test]
    fn test_gitlab_is_flagged() {
        // Two substitutions away from github.com.
        let v = github_analyzer().analyze("gitlab.com");
        assert_eq!(v.status, RiskStatus::Danger);
        assert_eq!(v.typo.score, 100);
    }

    #[test]
    fn test_empty_trusted_set() {
        let analyzer = DomainAnalyzer::new(TrustedDomainSet::empty(), Thresholds::default());
        for host in ["github.com", "githib.com", "anything.example"] {
            let v = analyzer.analyze(host);
            assert_eq!(v.status, RiskStatus::Warning);
            assert_eq!(v.typo.matched, "");
            assert_eq!(v.typo.score, 0);
        }
    }

    #[test]
    fn test_accented_vowels_hit_homoglyph_path() {
        let analyzer = DomainAnalyzer::with_defaults();
        for (spoof, target) in [
            ("g\u{ed}th\u{fa}b.c\u{f3}m", "github.com"),
            ("\u{e1}ppl\u{e9}.c\u{f3}m", "apple.com"),
            ("n\u{e9}tfl\u{ed}x.c\u{f3}m", "netflix.com"),
        ] {
            let v = analyzer.analyze(spoof);
            assert_eq!(v.status, RiskStatus::Danger, "{spoof}");
            assert_eq!(v.typo.matched, target);
            assert!(v.reason.starts_with("Possible homoglyph"), "{}", v.reason);
            assert_eq!(v.checks[2].severity, CheckSeverity::Danger);
        }
    }

    #[test]
    fn test_uppercase_accented_spoof() {
        let v = DomainAnalyzer::with_defaults().analyze("G\u{cd}TH\u{da}B.COM");
        assert_eq!(v.status, RiskStatus::Danger);
        assert_eq!(v.domain, "g\u{ed}th\u{fa}b.com");
    }

    #[test]
    fn test_very_long_input_is_total() {
        let host = format!("{}.com", "a".repeat(50_000));
        let v = DomainAnalyzer::with_defaults().analyze(&host);
        assert_eq!(v.status, RiskStatus::Warning);
    }

    #[test]
    fn test_analyzer_is_shareable_across_threads() {
        let analyzer = std::sync::Arc::new(DomainAnalyzer::with_defaults());
        let handles: Vec<_> = ["githib.com", "github.com", ""]
            .into_iter()
            .map(|host| {
                let analyzer = analyzer.clone();
                std::thread::spawn(move || analyzer.analyze(host).status)
            })
            .collect();
        let statuses: Vec<RiskStatus> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(
            statuses,
            vec![RiskStatus::Danger, RiskStatus::Safe, RiskStatus::Unknown]
        );
    }
}
