//! Track record cards.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CaseStudy {
    pub id: &'static str,
    pub client_type: &'static str,
    pub industry: &'static str,
    pub metric: &'static str,
    pub value: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
}

pub static CASE_STUDIES: [CaseStudy; 3] = [
    CaseStudy {
        id: "1",
        client_type: "HealthTech",
        industry: "Seguros Médicos",
        metric: "ROI",
        value: "+720%",
        description: "Escalamiento de pauta de alta intención para SaludS.A.",
        tags: &["Google Ads", "Data Studio", "Python"],
    },
    CaseStudy {
        id: "2",
        client_type: "FinTech",
        industry: "Servicios Financieros",
        metric: "CAC Reduction",
        value: "-45%",
        description: "Optimización de embudo para Sodig (Firmas Electrónicas).",
        tags: &["Conversion API", "HubSpot", "n8n"],
    },
    CaseStudy {
        id: "3",
        client_type: "Real Estate",
        industry: "Desarrollo Inmobiliario",
        metric: "Sales Pipeline",
        value: "$2.4M",
        description: "Estrategia Drive-to-Store para Villa Cumbayá.",
        tags: &["Meta Ads", "WhatsApp API", "CRM"],
    },
];
