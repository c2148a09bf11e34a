use serde::{Deserialize, Serialize};

use super::config::ScoringConfig;

/// Review lane assigned from the seriousness score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewTier {
    FastTrack,
    StandardReview,
    NeedsImprovement,
}

impl ReviewTier {
    pub const fn ordered() -> [Self; 3] {
        [Self::FastTrack, Self::StandardReview, Self::NeedsImprovement]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::FastTrack => "Fast Track",
            Self::StandardReview => "Standard Review",
            Self::NeedsImprovement => "Needs Improvement",
        }
    }

    pub fn for_score(score: u8, config: &ScoringConfig) -> Self {
        if score >= config.fast_track_threshold {
            Self::FastTrack
        } else if score >= config.standard_review_threshold {
            Self::StandardReview
        } else {
            Self::NeedsImprovement
        }
    }
}
