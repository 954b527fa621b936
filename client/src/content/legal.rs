//! Legal hub sections, authored as Markdown.

#[cfg(test)]
#[path = "legal_test.rs"]
mod legal_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LegalSection {
    /// Anchor id on the legal page.
    pub id: &'static str,
    /// Sidebar label.
    pub label: &'static str,
    pub body_markdown: &'static str,
}

pub const DEFAULT_LEGAL_SECTION: &str = "manifesto";

pub static LEGAL_SECTIONS: [LegalSection; 3] = [
    LegalSection {
        id: "manifesto",
        label: "Ethos & Manifesto",
        body_markdown: r#"# Ethos & Manifesto

En ApoloordonezLP, no creemos en la "letra chica" diseñada para confundir.
Nuestra arquitectura legal es tan transparente como nuestro código.

### 01. Nuestra Promesa

Nos comprometemos a utilizar la Inteligencia Artificial y la Ciencia de Datos de manera ética,
priorizando siempre la privacidad del usuario final y la integridad de los datos de nuestros clientes.
No vendemos humo; vendemos sistemas auditables.

> **Income Disclaimer**
>
> Los resultados mostrados en este sitio web (ROI, Revenue, Growth) son de casos de estudio reales,
> pero no garantizan resultados futuros. Cada negocio es una arquitectura única con variables distintas.
> Tu éxito depende de tu ejecución, condiciones de mercado y adaptación al sistema.
"#,
    },
    LegalSection {
        id: "terms",
        label: "Terms of Service",
        body_markdown: r#"## Términos de Servicio

Al contratar nuestros servicios de arquitectura de crecimiento, aceptas que la implementación
de sistemas de IA requiere colaboración activa. La propiedad intelectual de los "Agentes" y "Algoritmos"
personalizados pertenece al cliente tras el pago final, mientras que la tecnología base (Framework Apolo)
permanece bajo nuestra licencia.

#### Cláusula de Confidencialidad

Todos los datos procesados por nuestros sistemas (Leads, Métricas Financieras, Secretos Comerciales)
están protegidos bajo estrictos acuerdos de NDA (Non-Disclosure Agreements).
"#,
    },
    LegalSection {
        id: "privacy",
        label: "Data & Privacy",
        body_markdown: r"## Privacidad y Datos

Cumplimos con los estándares internacionales de protección de datos (GDPR / CCPA donde aplique).
No comercializamos tus datos con terceros.

> **Uso de Cookies & Tracking**
>
> Utilizamos tecnologías de seguimiento avanzadas (Pixel de Meta, Google Analytics 4, Hotjar)
> únicamente para optimizar la experiencia de usuario y re-targetizar contenido relevante.
> Puedes optar por no participar en cualquier momento.

- Recolección de datos: Limitada a lo estrictamente necesario.
- Almacenamiento: En servidores encriptados (AES-256).
- Derechos ARCO: Tienes derecho total sobre tu información.
",
    },
];

/// Lookup by id; unknown ids fall back to the manifesto.
#[must_use]
pub fn legal_section(id: &str) -> &'static LegalSection {
    LEGAL_SECTIONS.iter().find(|s| s.id == id).unwrap_or(&LEGAL_SECTIONS[0])
}
