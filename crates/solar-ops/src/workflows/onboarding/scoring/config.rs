use serde::{Deserialize, Serialize};

/// Review thresholds applied to the seriousness score. The tier boundaries
/// live here and nowhere else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub fast_track_threshold: u8,
    pub standard_review_threshold: u8,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            fast_track_threshold: 14,
            standard_review_threshold: 8,
        }
    }
}
