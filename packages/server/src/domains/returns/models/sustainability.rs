use serde::{Deserialize, Serialize};

const WASTE_KG_PER_RETURN: i64 = 3;
const CARBON_KG_PER_RETURN: i64 = 5;
const SHIPMENTS_PER_RETURN: i64 = 2;

/// Environmental impact projected from a number of avoided returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SustainabilityMetrics {
    pub returns_avoided: i64,
    pub waste_reduced_kg: i64,
    pub carbon_saved_kg: i64,
    pub shipments_avoided: i64,
}

impl SustainabilityMetrics {
    pub fn project(returns_avoided: i64) -> Self {
        Self {
            returns_avoided,
            waste_reduced_kg: returns_avoided.saturating_mul(WASTE_KG_PER_RETURN),
            carbon_saved_kg: returns_avoided.saturating_mul(CARBON_KG_PER_RETURN),
            shipments_avoided: returns_avoided.saturating_mul(SHIPMENTS_PER_RETURN),
        }
    }
}
