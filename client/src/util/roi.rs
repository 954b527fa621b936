//! ROI calculator projection.
//!
//! The projection assumes the engagement cuts acquisition cost by 20% and
//! lifts lifetime value by 15%, with lead volume unchanged:
//!
//! ```text
//! current   = (ltv - cac) * leads
//! projected = (ltv * 1.15 - cac * 0.8) * leads
//! potential = projected - current
//! growth    = potential / current * 100
//! ```

#[cfg(test)]
#[path = "roi_test.rs"]
mod roi_test;

pub const CAC_FACTOR: f64 = 0.8;
pub const LTV_FACTOR: f64 = 1.15;

/// Raw calculator inputs. Zero means "not entered".
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RoiInputs {
    pub cac: f64,
    pub ltv: f64,
    pub leads: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoiProjection {
    pub current_profit: f64,
    pub projected_profit: f64,
    /// `None` when the current profit is zero.
    pub growth_percentage: Option<f64>,
    pub potential_revenue: f64,
}

impl RoiInputs {
    /// All three fields entered (non-zero and finite).
    #[must_use]
    pub fn is_complete(&self) -> bool {
        [self.cac, self.ltv, self.leads].iter().all(|v| v.is_finite() && *v != 0.0)
    }
}

/// Run the projection, or `None` while any input is missing.
#[must_use]
pub fn project(inputs: RoiInputs) -> Option<RoiProjection> {
    if !inputs.is_complete() {
        return None;
    }
    let RoiInputs { cac, ltv, leads } = inputs;

    let current_profit = (ltv - cac) * leads;
    let projected_profit = (ltv * LTV_FACTOR - cac * CAC_FACTOR) * leads;
    let potential_revenue = projected_profit - current_profit;
    let growth_percentage = (current_profit != 0.0).then(|| potential_revenue / current_profit * 100.0);

    Some(RoiProjection { current_profit, projected_profit, growth_percentage, potential_revenue })
}

/// Parse a number input's text. Blank or unparseable text counts as zero.
#[must_use]
pub fn parse_input(raw: &str) -> f64 {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite()).unwrap_or(0.0)
}
