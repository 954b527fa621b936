//! Growth simulator page state.

#[cfg(test)]
#[path = "simulator_test.rs"]
mod simulator_test;

use crate::util::simulator::{AD_SPEND_RANGE, ProtocolId, REVENUE_RANGE, SimulatorProjection, project};

#[derive(Clone, Debug, PartialEq)]
pub struct SimulatorState {
    pub revenue: f64,
    pub ad_spend: f64,
    pub protocol: ProtocolId,
    /// CTA pressed and the processing beat has not elapsed yet.
    pub processing: bool,
    /// CTA completed at least once; shows the confirmation banner.
    pub deployed: bool,
}

impl Default for SimulatorState {
    fn default() -> Self {
        Self {
            revenue: REVENUE_RANGE.default,
            ad_spend: AD_SPEND_RANGE.default,
            protocol: ProtocolId::default(),
            processing: false,
            deployed: false,
        }
    }
}

impl SimulatorState {
    pub fn set_revenue(&mut self, value: f64) {
        self.revenue = REVENUE_RANGE.clamp(value);
    }

    pub fn set_ad_spend(&mut self, value: f64) {
        self.ad_spend = AD_SPEND_RANGE.clamp(value);
    }

    pub fn select(&mut self, protocol: ProtocolId) {
        self.protocol = protocol;
        self.deployed = false;
    }

    #[must_use]
    pub fn projection(&self) -> SimulatorProjection {
        project(self.protocol, self.revenue, self.ad_spend)
    }

    /// Press the CTA. Returns `false` if a run is already processing.
    pub fn begin_deploy(&mut self) -> bool {
        if self.processing {
            return false;
        }
        self.processing = true;
        self.deployed = false;
        true
    }

    pub fn finish_deploy(&mut self) {
        if self.processing {
            self.processing = false;
            self.deployed = true;
        }
    }
}
