use serde::{Deserialize, Serialize};
use validator::Validate;

/// Per-order fee component of a [`FeeConfig`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct PerOrderConfig {
    /// Fee charged per order, in cents
    #[validate(range(min = 0))]
    pub fee_cents: i64,

    /// Order quantity from which the per-order fee applies
    #[validate(range(min = 0))]
    pub quantity_threshold: i64,
}

/// # Documentation
/// Fee and commission payload shared by preset and custom configurations.
///
/// Every field is optional on input and falls back to zero, so a body such as
/// `{"commission_percentage": 0.1}` is a complete configuration.
/// Percentages are fractions in `[0, 1]`; cent amounts are non-negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct FeeConfig {
    #[validate(range(min = 0.0, max = 1.0))]
    pub commission_percentage: f64,

    #[validate(range(min = 0.0, max = 1.0))]
    pub affiliate_percentage: f64,

    #[validate(range(min = 0.0, max = 1.0))]
    pub gmv_percentage: f64,

    #[validate(nested)]
    pub per_order: PerOrderConfig,

    #[validate(range(min = 0))]
    pub flat_fee_cents: i64,
}
