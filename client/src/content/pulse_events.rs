//! Live activity ticker events.

#[cfg(test)]
#[path = "pulse_events_test.rs"]
mod pulse_events_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PulseEvent {
    pub industry: &'static str,
    pub location: &'static str,
    pub action: &'static str,
    pub metric: &'static str,
    pub accent: &'static str,
}

const fn event(
    industry: &'static str,
    location: &'static str,
    action: &'static str,
    metric: &'static str,
    accent: &'static str,
) -> PulseEvent {
    PulseEvent { industry, location, action, metric, accent }
}

pub static PULSE_EVENTS: [PulseEvent; 30] = [
    event("Real Estate", "CDMX", "activó Neural Acquisition", "+$120k/mo Projected", "amber"),
    event("SaaS B2B", "Miami", "desplegó Agentes Autónomos", "Ahorro: 40h/semana", "blue"),
    event("Clínica Estética", "Madrid", "escaló Presupuesto Ads", "ROAS 8.5x", "pink"),
    event("E-commerce", "Bogotá", "instaló Predictive Data", "LTV +45%", "purple"),
    event("Fintech", "Lima", "contrató Growth Fraccional", "Validación Completa", "cyan"),
    event("Energía Solar", "Texas", "automatizó Calif. Leads", "CPA -60%", "yellow"),
    event("Firma Legal", "Londres", "inició Auditoría IA", "Velocidad +300%", "slate"),
    event("Automotriz", "Dubai", "predijo Inventario", "Rotación 2x", "red"),
    event("Info-Producto", "Sao Paulo", "optimizó Funnel Webinar", "Tasa Conv. 12%", "orange"),
    event("High-Ticket Coach", "New York", "activó Setter IA", "15 Citas/Día", "yellow"),
    event("Seguros", "Toronto", "integró Algoritmo Riesgo", "Pólizas +20%", "blue"),
    event("Logística", "Panamá", "optimizó Rutas", "Costos -15%", "slate"),
    event("Crypto Exchange", "Singapur", "automatizó Onboarding", "KYC Time -90%", "amber"),
    event("Constructora", "Sydney", "digitalizó Licitaciones", "Win Rate +35%", "orange"),
    event("Cadena Dental", "CDMX", "reactivó Pacientes", "Citas +50%", "teal"),
    event("Agencia Mkt", "Los Angeles", "lanzó IA White-Label", "$50k MRR Agregado", "purple"),
    event("Luxury Travel", "París", "activó Concierge Bot", "Upsell +25%", "sky"),
    event("Ciberseguridad", "Tel Aviv", "detectó Amenazas", "0 Brechas", "green"),
    event("Recruiting", "Berlín", "filtró CVs con IA", "Time-to-Hire -40%", "indigo"),
    event("Grupo Restaurantero", "Chicago", "predijo Demanda", "Mermas -20%", "orange"),
    event("Marca Moda", "Milán", "pronosticó Tendencias", "Sell-through 95%", "pink"),
    event("Biotech", "Boston", "aceleró Trials", "Inscripciones 3x", "teal"),
    event("Contabilidad", "Buenos Aires", "automatizó Impuestos", "Capacidad +80%", "slate"),
    event("App Fitness", "Seúl", "redujo Churn", "Retención +15%", "emerald"),
    event("Eventos", "Barcelona", "gestionó Proveedores", "Costos -10%", "rose"),
    event("Arquitectura", "Tokio", "generó Renders IA", "Aprobación 2x", "violet"),
    event("Minería", "Santiago", "monitoreó Seguridad", "Incidentes -70%", "yellow"),
    event("Non-Profit", "Ginebra", "perfiló Donantes", "Donaciones +40%", "red"),
    event("Gaming Studio", "Montreal", "analizó Jugadores", "Sesión +20%", "indigo"),
    event("Agrotech", "Córdoba", "predijo Cosecha", "Output +15%", "green"),
];

/// Event at `index`, wrapping.
#[must_use]
pub fn pulse_event(index: usize) -> &'static PulseEvent {
    &PULSE_EVENTS[index % PULSE_EVENTS.len()]
}
