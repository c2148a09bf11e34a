mod checks;
mod config;
mod tier;

pub use config::ScoringConfig;
pub use tier::ReviewTier;

use serde::Serialize;

use super::domain::OnboardingSnapshot;
use checks::CHECKS;

/// Stateless scorer applying the named completeness checks to a snapshot.
pub struct ScoringEngine {
    config: ScoringConfig,
}

impl ScoringEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Recompute the full breakdown from scratch. The result depends only on
    /// the snapshot and the configured thresholds, so scoring twice on the
    /// same snapshot always agrees.
    pub fn score(&self, snapshot: &OnboardingSnapshot) -> ScoreBreakdown {
        let components: Vec<ScoreComponent> = CHECKS
            .iter()
            .map(|check| ScoreComponent {
                key: check.key,
                weight: check.weight,
                satisfied: (check.satisfied)(snapshot),
            })
            .collect();

        let total = components
            .iter()
            .filter(|component| component.satisfied)
            .map(|component| component.weight)
            .sum();

        ScoreBreakdown {
            total,
            max: checks::max_score(),
            tier: ReviewTier::for_score(total, &self.config),
            components,
        }
    }
}

/// Single named contribution in a score breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreComponent {
    pub key: &'static str,
    pub weight: u8,
    pub satisfied: bool,
}

/// Seriousness score with its per-check audit trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    pub total: u8,
    pub max: u8,
    pub tier: ReviewTier,
    pub components: Vec<ScoreComponent>,
}
