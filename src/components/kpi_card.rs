//! KPI Tile Component

use leptos::prelude::*;

/// Single headline figure
#[component]
pub fn KpiCard(
    #[prop(into)] title: String,
    value: Signal<String>,
    #[prop(into)] icon: String,
    #[prop(optional)] accent: Option<&'static str>,
) -> impl IntoView {
    let color = accent.unwrap_or("var(--navy)");

    view! {
        <div class="card kpi-card">
            <div class="card-header kpi-header">
                <h3 class="card-title kpi-title">{title}</h3>
                <span class="kpi-icon">{icon}</span>
            </div>
            <div class="card-content">
                <div class="kpi-value" style=format!("color: {};", color)>
                    {move || value.get()}
                </div>
            </div>
        </div>
    }
}
