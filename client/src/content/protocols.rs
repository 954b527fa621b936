//! Simulator protocol copy. The math lives in `util::simulator`.

use crate::util::simulator::ProtocolId;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProtocolInfo {
    pub id: ProtocolId,
    pub name: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    /// Accent name; the stylesheet defines `accent-<name>` classes.
    pub accent: &'static str,
    /// Hex base colour, used for inline glows.
    pub base_color: &'static str,
    pub cta: &'static str,
}

pub static PROTOCOLS: [ProtocolInfo; 3] = [
    ProtocolInfo {
        id: ProtocolId::A,
        name: "NEURAL ACQUISITION",
        tagline: "ROI FOCUS",
        description: "Optimización algorítmica de pauta. Reducción de CAC y escalado de tráfico cualificado.",
        accent: "blue",
        base_color: "#3b82f6",
        cta: "ACTIVAR MOTOR",
    },
    ProtocolInfo {
        id: ProtocolId::B,
        name: "AUTONOMOUS AGENTS",
        tagline: "ZERO FRICTION",
        description: "Fuerza de ventas IA 24/7. Nutre, califica y cierra prospectos sin intervención humana.",
        accent: "teal",
        base_color: "#14b8a6",
        cta: "DESPLEGAR AGENTES",
    },
    ProtocolInfo {
        id: ProtocolId::C,
        name: "PREDICTIVE VISIONARY",
        tagline: "GOD MODE",
        description: "Arquitectura de Ecosistema Completo. Predicción de LTV y dominio total de mercado.",
        accent: "fuchsia",
        base_color: "#d946ef",
        cta: "INICIAR ARQUITECTURA",
    },
];

#[must_use]
pub fn protocol_info(id: ProtocolId) -> &'static ProtocolInfo {
    match id {
        ProtocolId::A => &PROTOCOLS[0],
        ProtocolId::B => &PROTOCOLS[1],
        ProtocolId::C => &PROTOCOLS[2],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_order_matches_ids() {
        for id in ProtocolId::ALL {
            assert_eq!(protocol_info(id).id, id);
        }
    }

    #[test]
    fn unknown_id_string_shows_protocol_b() {
        assert_eq!(protocol_info(ProtocolId::parse("Z")).cta, "DESPLEGAR AGENTES");
    }
}
