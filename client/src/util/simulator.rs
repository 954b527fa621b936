//! Growth simulator projection math.
//!
//! Each protocol maps monthly revenue and ad spend to a projected monthly
//! revenue; the annual figures and growth are derived from that.

#[cfg(test)]
#[path = "simulator_test.rs"]
mod simulator_test;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderRange {
    pub min: f64,
    pub max: f64,
    pub default: f64,
}

impl SliderRange {
    #[must_use]
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() { self.default } else { value.clamp(self.min, self.max) }
    }

    /// Fill percentage of the slider track, `(v - min) / (max - min) * 100`.
    #[must_use]
    pub fn percent(&self, value: f64) -> f64 {
        slider_percent(value, self.min, self.max)
    }
}

pub const REVENUE_RANGE: SliderRange = SliderRange { min: 1_000.0, max: 100_000.0, default: 25_000.0 };
pub const AD_SPEND_RANGE: SliderRange = SliderRange { min: 500.0, max: 50_000.0, default: 5_000.0 };

/// Processing state duration after the CTA is pressed.
pub const CTA_PROCESSING_MS: u32 = 2_000;

/// Simulator protocol. Unknown ids fall back to [`ProtocolId::B`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ProtocolId {
    A,
    #[default]
    B,
    C,
}

impl ProtocolId {
    pub const ALL: [Self; 3] = [Self::A, Self::B, Self::C];

    #[must_use]
    pub fn parse(id: &str) -> Self {
        match id.trim() {
            "A" | "a" => Self::A,
            "C" | "c" => Self::C,
            _ => Self::B,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
        }
    }

    /// Projected monthly revenue.
    #[must_use]
    pub fn monthly(self, revenue: f64, ad_spend: f64) -> f64 {
        match self {
            Self::A => revenue + ad_spend * 3.8,
            Self::B => revenue + ad_spend * 7.5 + revenue * 0.2,
            Self::C => revenue * 1.5 + ad_spend * 12.0 + revenue * 0.5,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulatorProjection {
    pub monthly: f64,
    pub annual: f64,
    pub current_annual: f64,
    /// `None` when current revenue is zero.
    pub growth_percentage: Option<f64>,
}

#[must_use]
pub fn project(protocol: ProtocolId, revenue: f64, ad_spend: f64) -> SimulatorProjection {
    let monthly = protocol.monthly(revenue, ad_spend);
    let annual = monthly * 12.0;
    let current_annual = revenue * 12.0;
    let growth_percentage = (current_annual != 0.0).then(|| (annual - current_annual) / current_annual * 100.0);
    SimulatorProjection { monthly, annual, current_annual, growth_percentage }
}

/// Fill percentage for a range slider. A degenerate range reads as empty.
#[must_use]
pub fn slider_percent(value: f64, min: f64, max: f64) -> f64 {
    if max <= min {
        return 0.0;
    }
    ((value - min) / (max - min) * 100.0).clamp(0.0, 100.0)
}

/// One frame of the jackpot counter: close 20% of the gap, snapping when
/// within one unit.
#[must_use]
pub fn jackpot_step(displayed: f64, target: f64) -> f64 {
    let gap = target - displayed;
    if gap.abs() <= 1.0 || !gap.is_finite() {
        return target;
    }
    displayed + gap * 0.2
}
