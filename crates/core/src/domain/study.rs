use serde::{Deserialize, Serialize};

use crate::scalar::NamedEnum;

/// Lifecycle phase of a study.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StudyPhase {
    Legacy,
    Design,
    Recruitment,
    InFlight,
    Analysis,
    Completed,
    Withdrawn,
}

impl NamedEnum for StudyPhase {
    const TYPE_NAME: &'static str = "StudyPhase";
    const VARIANTS: &'static [Self] = &[
        StudyPhase::Legacy,
        StudyPhase::Design,
        StudyPhase::Recruitment,
        StudyPhase::InFlight,
        StudyPhase::Analysis,
        StudyPhase::Completed,
        StudyPhase::Withdrawn,
    ];

    fn name(&self) -> &'static str {
        match self {
            StudyPhase::Legacy => "LEGACY",
            StudyPhase::Design => "DESIGN",
            StudyPhase::Recruitment => "RECRUITMENT",
            StudyPhase::InFlight => "IN_FLIGHT",
            StudyPhase::Analysis => "ANALYSIS",
            StudyPhase::Completed => "COMPLETED",
            StudyPhase::Withdrawn => "WITHDRAWN",
        }
    }
}
