//! "The Machine": growth architecture code panel and tech stack grid.

use leptos::prelude::*;

use crate::content::stack::TECH_STACK;

#[component]
pub fn TheMachine() -> impl IntoView {
    view! {
        <section class="machine">
            <div class="container">
                <div class="machine__intro">
                    <div class="machine__copy">
                        <h2>"The Machine: " <span class="accent-teal">"Arquitectura de Crecimiento"</span></h2>
                        <p class="muted">
                            "No dependemos de la suerte. Integramos Paid Media de nivel experto con "
                            "automatizaciones Low-Code y Ciencia de Datos para construir un ecosistema "
                            "que aprende y mejora solo."
                        </p>
                    </div>
                    <pre class="code-panel">
                        <code>
                            <span class="code-kw">"const"</span> " " <span class="code-id">"growthSystem"</span> " = {\n"
                            "  " <span class="code-key">"acquisition"</span> ": " <span class="code-str">"\"Meta + Google Ads (Broad Match Modifier)\""</span> ",\n"
                            "  " <span class="code-key">"retention"</span> ": " <span class="code-str">"\"HubSpot CDP + ActiveCampaign\""</span> ",\n"
                            "  " <span class="code-key">"automation"</span> ": [" <span class="code-str">"\"n8n\""</span> ", " <span class="code-str">"\"LangChain Agents\""</span> "],\n"
                            "  " <span class="code-key">"analytics"</span> ": " <span class="code-str">"\"Python MMM (Marketing Mix Modeling)\""</span> "\n"
                            "};\n"
                            <span class="code-comment">"// Executing optimization protocol..."</span>
                        </code>
                    </pre>
                </div>
                <div class="stack-grid">
                    {TECH_STACK
                        .iter()
                        .map(|tech| {
                            view! {
                                <div class="stack-card" title=tech.description>
                                    <div class="stack-card__icon">{tech.glyph}</div>
                                    <h4>{tech.name}</h4>
                                    <p class="eyebrow">{tech.category.label()}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
