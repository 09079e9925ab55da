use crate::decode::DecodeError;
use crate::fixture::Fixture;
use compact_str::CompactString;
use std::collections::BTreeMap;
use std::fmt;
use std::process::ExitCode;
use thiserror::Error;

/// Anything that makes a run fail.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Defect {
    #[error("{fixture}: expected {type_name} to decode, got {error}")]
    UnexpectedFailure {
        type_name: CompactString,
        fixture: String,
        error: DecodeError,
    },

    #[error("{fixture}: expected {type_name} to be rejected, but it decoded")]
    UnexpectedSuccess {
        type_name: CompactString,
        fixture: String,
    },

    #[error("no binding registered for type {type_name} (used by {})", fixtures.join(", "))]
    UnknownType {
        type_name: CompactString,
        fixtures: Vec<String>,
    },

    #[error("{fixture}: unreadable: {error}")]
    Unreadable { fixture: String, error: String },

    #[error("{fixture}: {type_name} does not survive re-encoding: {detail}")]
    RoundTripMismatch {
        type_name: CompactString,
        fixture: String,
        detail: String,
    },

    #[error("{fixture}: evaluation task failed: {error}")]
    Panicked { fixture: String, error: String },
}

impl Defect {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UnexpectedFailure { .. } => "UnexpectedFailure",
            Self::UnexpectedSuccess { .. } => "UnexpectedSuccess",
            Self::UnknownType { .. } => "UnknownType",
            Self::Unreadable { .. } => "Unreadable",
            Self::RoundTripMismatch { .. } => "RoundTripMismatch",
            Self::Panicked { .. } => "Panicked",
        }
    }

    /// Defects of the harness setup rather than of a fixture verdict.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::UnknownType { .. })
    }
}

/// Result of evaluating a single fixture.
#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    Pass,
    Fail(Defect),
    /// No decoder is registered for the fixture's type name.
    UnknownType,
}

/// Aggregated outcome of a run. Built once from the collected verdicts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Report {
    pub source: String,
    pub discovered: usize,
    pub skipped: usize,
    pub passed: usize,
    pub defects: Vec<Defect>,
}

impl Report {
    /// Merges per-fixture verdicts. Unknown types are folded into one
    /// defect per type name, listed after the fixture defects.
    pub fn from_verdicts(
        source: String,
        skipped: usize,
        mut verdicts: Vec<(Fixture, Verdict)>,
    ) -> Self {
        verdicts.sort_by(|(a, _), (b, _)| a.id.cmp(&b.id));

        let mut report = Report {
            source,
            discovered: verdicts.len(),
            skipped,
            ..Default::default()
        };
        let mut unknown: BTreeMap<CompactString, Vec<String>> = BTreeMap::new();

        for (fixture, verdict) in verdicts {
            match verdict {
                Verdict::Pass => report.passed += 1,
                Verdict::Fail(defect) => report.defects.push(defect),
                Verdict::UnknownType => unknown
                    .entry(fixture.name.type_name.clone())
                    .or_default()
                    .push(fixture.id),
            }
        }

        report
            .defects
            .extend(unknown.into_iter().map(|(type_name, fixtures)| Defect::UnknownType {
                type_name,
                fixtures,
            }));
        report
    }

    pub fn is_success(&self) -> bool {
        self.defects.is_empty()
    }

    pub fn exit_code(&self) -> ExitCode {
        if self.is_success() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }

    pub fn count(&self, kind: &str) -> usize {
        self.defects.iter().filter(|d| d.kind() == kind).count()
    }

    pub fn unknown_types(&self) -> Vec<&str> {
        self.defects
            .iter()
            .filter_map(|d| match d {
                Defect::UnknownType { type_name, .. } => Some(type_name.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Conformance run over {}", self.source)?;
        writeln!(
            f,
            "  {} fixtures, {} passed, {} failed, {} skipped",
            self.discovered,
            self.passed,
            self.discovered - self.passed,
            self.skipped
        )?;

        let (configuration, fixtures): (Vec<&Defect>, Vec<&Defect>) =
            self.defects.iter().partition(|d| d.is_configuration());
        if !fixtures.is_empty() {
            writeln!(f, "Fixture defects:")?;
            for defect in fixtures {
                writeln!(f, "  [{}] {}", defect.kind(), defect)?;
            }
        }
        if !configuration.is_empty() {
            writeln!(f, "Configuration defects:")?;
            for defect in configuration {
                writeln!(f, "  [{}] {}", defect.kind(), defect)?;
            }
        }

        write!(f, "{}", if self.is_success() { "PASS" } else { "FAIL" })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::FixtureName;

    fn fixture(id: &str) -> Fixture {
        Fixture {
            id: id.to_string(),
            name: FixtureName::parse(id).unwrap(),
        }
    }

    #[test]
    fn test_empty_report_is_success() {
        let report = Report::from_verdicts("mem".into(), 0, vec![]);
        assert!(report.is_success());
        assert_eq!(report.exit_code(), ExitCode::SUCCESS);
        assert!(report.to_string().ends_with("PASS"));
    }

    #[test]
    fn test_unknown_types_grouped_per_type() {
        let report = Report::from_verdicts(
            "mem".into(),
            1,
            vec![
                (fixture("Nope-True-2.json"), Verdict::UnknownType),
                (fixture("Position-True-1.json"), Verdict::Pass),
                (fixture("Nope-False-1.json"), Verdict::UnknownType),
            ],
        );
        assert_eq!(report.discovered, 3);
        assert_eq!(report.passed, 1);
        assert_eq!(report.skipped, 1);
        assert_eq!(
            report.defects,
            vec![Defect::UnknownType {
                type_name: "Nope".into(),
                fixtures: vec!["Nope-False-1.json".into(), "Nope-True-2.json".into()],
            }]
        );
        assert_eq!(report.unknown_types(), vec!["Nope"]);
        assert!(!report.is_success());
    }

    #[test]
    fn test_display_lists_defects_by_section() {
        let report = Report::from_verdicts(
            "mem".into(),
            0,
            vec![
                (
                    fixture("Range-False-1.json"),
                    Verdict::Fail(Defect::UnexpectedSuccess {
                        type_name: "Range".into(),
                        fixture: "Range-False-1.json".into(),
                    }),
                ),
                (fixture("Ghost-True-1.json"), Verdict::UnknownType),
            ],
        );
        let text = report.to_string();
        assert!(text.contains("Fixture defects:"));
        assert!(text.contains("[UnexpectedSuccess] Range-False-1.json"));
        assert!(text.contains("Configuration defects:"));
        assert!(text.contains("[UnknownType] no binding registered for type Ghost"));
        assert!(text.ends_with("FAIL"));
        assert_eq!(report.count("UnexpectedSuccess"), 1);
    }
}
