//! Business recommendation policy.

use crate::models::{ConfirmationMethod, ProductionSpeed, Scenario};

/// The business-designated recommended scenario, as a named policy value.
///
/// The recommendation is injected into enumeration and auto-selection
/// instead of living as an inline id string, so the business rule can
/// change without touching enumeration code. The default is the standing
/// rule: photo-confirm the initial sample, one revision round with a
/// physical sample, normal production (id `photo-1-physical-normal`,
/// 9 weeks).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendationPolicy {
    /// Recommended initial sample confirmation method
    pub initial_sample_method: ConfirmationMethod,

    /// Recommended revision rounds, in execution order
    pub revision_methods: Vec<ConfirmationMethod>,

    /// Recommended production speed
    pub production_speed: ProductionSpeed,
}

impl RecommendationPolicy {
    /// Scenario id this policy recommends.
    pub fn recommended_id(&self) -> String {
        Scenario::identity(
            self.initial_sample_method,
            &self.revision_methods,
            self.production_speed,
        )
    }
}

impl Default for RecommendationPolicy {
    fn default() -> Self {
        Self {
            initial_sample_method: ConfirmationMethod::Photo,
            revision_methods: vec![ConfirmationMethod::Physical],
            production_speed: ProductionSpeed::Normal,
        }
    }
}
