#[cfg(test)]
pub mod fixtures {
    use crate::analyzer::DomainAnalyzer;
    use crate::distance::Thresholds;
    use crate::trusted_domains::TrustedDomainSet;
    use crate::verdict::Verdict;

    /// Analyze against the default trusted set.
    pub fn analyze(hostname: &str) -> Verdict {
        DomainAnalyzer::with_defaults().analyze(hostname)
    }

    /// Analyzer trusting only github.com.
    pub fn github_analyzer() -> DomainAnalyzer {
        DomainAnalyzer::new(TrustedDomainSet::new(["github.com"]), Thresholds::default())
    }

    /// One verdict of each status.
    pub fn mixed_verdicts() -> Vec<Verdict> {
        let analyzer = github_analyzer();
        vec![
            analyzer.analyze("github.com"),
            analyzer.analyze("githib.com"),
            analyzer.analyze("githab.io"),
            analyzer.analyze(""),
        ]
    }
}
