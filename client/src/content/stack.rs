//! Tech stack grid under "The Machine".

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StackCategory {
    PaidMedia,
    AutomationAi,
    Data,
    LowCode,
}

impl StackCategory {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::PaidMedia => "Paid Media",
            Self::AutomationAi => "Automation & IA",
            Self::Data => "Data",
            Self::LowCode => "Low-Code",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TechItem {
    pub name: &'static str,
    pub category: StackCategory,
    /// Glyph shown in the icon bubble.
    pub glyph: &'static str,
    pub description: &'static str,
}

pub static TECH_STACK: [TechItem; 6] = [
    TechItem {
        name: "Meta Business Suite",
        category: StackCategory::PaidMedia,
        glyph: "📣",
        description: "Arquitectura de campañas de nivel experto.",
    },
    TechItem {
        name: "Google Cloud AI",
        category: StackCategory::AutomationAi,
        glyph: "🧠",
        description: "Infraestructura para modelos predictivos.",
    },
    TechItem {
        name: "n8n / Make",
        category: StackCategory::AutomationAi,
        glyph: "⚙",
        description: "Orquestación de flujos de trabajo autónomos.",
    },
    TechItem {
        name: "Python / Pandas",
        category: StackCategory::Data,
        glyph: "</>",
        description: "Ciencia de datos aplicada a marketing (MMM).",
    },
    TechItem {
        name: "LangChain",
        category: StackCategory::AutomationAi,
        glyph: "🧠",
        description: "Desarrollo de agentes conversacionales complejos.",
    },
    TechItem {
        name: "Looker Studio",
        category: StackCategory::Data,
        glyph: "📊",
        description: "Visualización de datos en tiempo real.",
    },
];
