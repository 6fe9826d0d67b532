use crate::reporter::Reporter;
use crate::verdict::Verdict;

pub struct JsonReporter;

impl JsonReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for JsonReporter {
    fn report(&self, verdicts: &[Verdict]) -> String {
        serde_json::to_string_pretty(verdicts)
            .unwrap_or_else(|e| format!(r#"{{"error": "Failed to serialize result: {}"}}"#, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures::{analyze, github_analyzer};

    #[test]
    fn test_json_output_structure() {
        let reporter = JsonReporter::new();
        let output = reporter.report(&[analyze("github.com")]);

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed[0]["status"], "safe");
        assert_eq!(parsed[0]["domain"], "github.com");
        assert_eq!(parsed[0]["typo"]["score"], 0);
        assert_eq!(parsed[0]["checks"][0]["value"], "Trusted");
    }

    #[test]
    fn test_json_output_with_danger() {
        let reporter = JsonReporter::new();
        let verdict = github_analyzer().analyze("githib.com");
        let output = reporter.report(&[verdict]);

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed[0]["status"], "danger");
        assert_eq!(parsed[0]["typo"]["score"], 100);
        assert_eq!(parsed[0]["typo"]["severity"], "danger");
        assert_eq!(parsed[0]["typo"]["matched"], "github.com");
        assert_eq!(parsed[0]["checks"][1]["severity"], "danger");
    }

    #[test]
    fn test_json_empty_list() {
        let output = JsonReporter::new().report(&[]);
        assert_eq!(output, "[]");
    }

    #[test]
    #[allow(clippy::default_constructed_unit_structs)]
    fn test_json_default_trait() {
        let reporter = JsonReporter::default();
        let output = reporter.report(&[analyze("")]);
        assert!(output.contains("\"status\": \"unknown\""));
    }
}
