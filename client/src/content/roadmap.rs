//! Quarterly roadmap per industry, shown by the roadmap generator.

#[cfg(test)]
#[path = "roadmap_test.rs"]
mod roadmap_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Phase {
    pub title: &'static str,
    pub focus: &'static str,
    pub tech: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IndustryRoadmap {
    pub industry: &'static str,
    pub q1: Phase,
    pub q2: Phase,
    pub q3: Phase,
}

impl IndustryRoadmap {
    /// Quarters in display order, labelled.
    #[must_use]
    pub fn quarters(&self) -> [(&'static str, Phase); 3] {
        [("Q1", self.q1), ("Q2", self.q2), ("Q3", self.q3)]
    }
}

const fn phase(title: &'static str, focus: &'static str, tech: &'static str) -> Phase {
    Phase { title, focus, tech }
}

pub static ROADMAPS: [IndustryRoadmap; 9] = [
    IndustryRoadmap {
        industry: "HealthTech",
        q1: phase("Penetración (Neuromarketing)", "Doctor Authority & Trust", "Meta Ads + VSL"),
        q2: phase("Conversión (Funnels)", "Automated Booking Engine", "HubSpot + Calendly"),
        q3: phase("Escalamiento (AI Layer)", "Predictive Patient LTV", "Python (MMM)"),
    },
    IndustryRoadmap {
        industry: "FinTech",
        q1: phase("Captación High-Intent", "Lead Scoring & KYC", "Google Search + Plaid"),
        q2: phase("Nurturing Financiero", "Educational Drip", "n8n + OpenAI"),
        q3: phase("Cierre High-Ticket", "AI Sales Assistants", "LangChain Agents"),
    },
    IndustryRoadmap {
        industry: "Real Estate",
        q1: phase("Visualización Inmersiva", "Virtual Tours 360", "Matterport + Meta Ads"),
        q2: phase("Filtrado Automático", "WhatsApp Pre-qual", "ManyChat + ChatGPT"),
        q3: phase("Optimización Citas", "Show-up Rate Max", "Zapier + SMS"),
    },
    IndustryRoadmap {
        industry: "EduTech AI",
        q1: phase("Diagnóstico Cognitivo", "Skill-Gap AI Audit", "Typeform Logic + GPT-4"),
        q2: phase("Retención Adaptativa", "Personalized Micro-Learning", "Vector DB + WhatsApp"),
        q3: phase("Comunidad Monetizada", "Peer-to-Peer Flywheel", "Circle + Stripe Connect"),
    },
    IndustryRoadmap {
        industry: "AI SaaS",
        q1: phase("PLG Aggressive", "Token Consumption Hook", "Next.js + Segment"),
        q2: phase("Enterprise Trust", "SOC2 & Security Marketing", "LinkedIn ABM + Vanta"),
        q3: phase("Ecosystem Lock-in", "Agent Marketplace Launch", "LangChain Hub"),
    },
    IndustryRoadmap {
        industry: "AgroTech",
        q1: phase("Prospección Satelital", "Crop Yield Gap Detection", "Google Earth Engine + Python"),
        q2: phase("Demo IoT In-Situ", "Hardware Integration Proof", "Tablets + LoraWAN"),
        q3: phase("Revenue Recurrente", "Predictive Pest Control", "Computer Vision Drone"),
    },
    IndustryRoadmap {
        industry: "Robot Tech",
        q1: phase("Digital Twin Audit", "Factory Inefficiency Scan", "Nvidia Omniverse"),
        q2: phase("Cobot Simulation", "Labor ROI Calculator", "Unity WebGL + React"),
        q3: phase("Fleet Orchestration", "Zero-Downtime SLA", "Predictive Maint. AI"),
    },
    IndustryRoadmap {
        industry: "Humanoid",
        q1: phase("Viral Uncanny", "Shock & Awe PR Stunts", "Unreal Engine 5 + TikTok"),
        q2: phase("B2B Pilot Program", "Receptionist Replacement", "OpenAI Realtime API"),
        q3: phase("Mass Deployment", "Global Logistics Chain", "ERP + IoT Tracking"),
    },
    IndustryRoadmap {
        industry: "Crypto Tech",
        q1: phase("Liquidity Vampire", "TVL Migration Campaigns", "On-Chain Analytics Bot"),
        q2: phase("Governance Utility", "DAO Participation", "Snapshot + Discord Roles"),
        q3: phase("Institutional Rails", "Compliance & OTC Desk", "Fireblocks + Chainalysis"),
    },
];

/// Shown while no industry is selected.
pub const ROADMAP_PLACEHOLDER: &str = "Esperando Input del Usuario...";

/// Exact-name lookup. `None` keeps the placeholder on screen.
#[must_use]
pub fn roadmap_for(industry: &str) -> Option<&'static IndustryRoadmap> {
    ROADMAPS.iter().find(|r| r.industry == industry)
}
