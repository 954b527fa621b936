//! Strategy showcase profiles (the "case studies" section).

#[cfg(test)]
#[path = "strategies_test.rs"]
mod strategies_test;

/// Shape of the bar visual under a profile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visual {
    ChartLine,
    BarInverted,
    ChartCurve,
    Exponential,
    BarVertical,
}

impl Visual {
    /// Final heights (percent) of the five bars.
    #[must_use]
    pub fn bar_heights(self) -> [u8; 5] {
        match self {
            Self::BarInverted => [40; 5],
            _ => [15, 30, 45, 60, 90],
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StrategyProfile {
    pub id: &'static str,
    pub label: &'static str,
    pub sub: &'static str,
    /// Accent name; the stylesheet defines `accent-<name>` classes.
    pub accent: &'static str,
    pub strategy: &'static str,
    pub mechanic: &'static str,
    pub stat: &'static str,
    pub stat_label: &'static str,
    pub stack: &'static [&'static str],
    pub visual: Visual,
}

pub const DEFAULT_STRATEGY_ID: &str = "health";

pub static STRATEGIES: [StrategyProfile; 5] = [
    StrategyProfile {
        id: "health",
        label: "Health Tech",
        sub: "Bio-Data Growth",
        accent: "emerald",
        strategy: "Predictive Patient Acquisition",
        mechanic: "Uso de IA para predecir LTV de pacientes antes de la primera consulta.",
        stat: "+400%",
        stat_label: "ROI (Retorno de Inversión)",
        stack: &["Python", "HIPAA Compliant CRM"],
        visual: Visual::ChartLine,
    },
    StrategyProfile {
        id: "fintech",
        label: "Fin Tech",
        sub: "Algorithmic Trust",
        accent: "blue",
        strategy: "Zero-Friction Onboarding",
        mechanic: "Automatización de KYC y nurturing basado en comportamiento financiero.",
        stat: "-60%",
        stat_label: "CAC (Costo Adquisición)",
        stack: &["Plaid API", "HubSpot"],
        visual: Visual::BarInverted,
    },
    StrategyProfile {
        id: "edutech",
        label: "Edu Tech",
        sub: "Retention Loops",
        accent: "amber",
        strategy: "AI-Driven Learning Paths",
        mechanic: "Agentes que reactivan estudiantes dormidos con contenido personalizado.",
        stat: "85%",
        stat_label: "Tasa de Retención (vs 15%)",
        stack: &["OpenAI", "LMS Custom"],
        visual: Visual::ChartCurve,
    },
    StrategyProfile {
        id: "aitech",
        label: "AI Tech",
        sub: "SaaS Velocity",
        accent: "purple",
        strategy: "Product-Led Growth (PLG) Turbo",
        mechanic: "Conversión de usuarios Freemium a Paid mediante análisis de tokens.",
        stat: "EXP",
        stat_label: "Crecimiento MRR",
        stack: &["Mixpanel", "Stripe Webhooks"],
        visual: Visual::Exponential,
    },
    StrategyProfile {
        id: "robot",
        label: "Robot Tech",
        sub: "B2B Engineering",
        accent: "cyan",
        strategy: "Digital Twin ABM",
        mechanic: "Identificación de compradores corporativos y demos técnicas automatizadas.",
        stat: "$5M+",
        stat_label: "Pipeline Generado",
        stack: &["LinkedIn SN", "Apollo.io", "Bots"],
        visual: Visual::BarVertical,
    },
];

/// Lookup by id; unknown ids fall back to the first profile.
#[must_use]
pub fn strategy_by_id(id: &str) -> &'static StrategyProfile {
    STRATEGIES.iter().find(|s| s.id == id).unwrap_or(&STRATEGIES[0])
}
