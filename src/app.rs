//! Ocean CRM App
//!
//! Dashboard layout: header, KPI tiles with the recorder and map on the
//! left, assistant, board and saved collections on the right.

use leptos::prelude::*;

use crm_core::repository::CrmRepository;
use crm_core::CrmConfig;

use crate::browser::BrowserStorage;
use crate::components::{
    AssistantPanel, CopyLogsButton, HeaderBar, KanbanBoard, KpiCard, LeadList, PropertyMap, VoiceList, VoiceRecorder,
};
use crate::context::AppContext;

#[component]
pub fn App() -> impl IntoView {
    let config = CrmConfig::default();
    let repo = CrmRepository::new(BrowserStorage, config.keys.clone());
    let ctx = AppContext::new(repo, config);

    // Provide context to all children
    provide_context(ctx);

    // Storage is read once, at mount
    Effect::new(move |_| ctx.load());

    let lead_count = Signal::derive(move || ctx.lead_count().to_string());

    view! {
        <div class="app-layout">
            <HeaderBar />

            <div class="dashboard-grid">
                <div class="dashboard-main">
                    <div class="kpi-grid">
                        <KpiCard title="Properties" value=Signal::stored("125".to_string()) icon="🏢" />
                        <KpiCard title="New Leads" value=lead_count icon="👥" accent="var(--teal-dark)" />
                        <KpiCard title="Deals" value=Signal::stored("8".to_string()) icon="📞" />
                        <KpiCard title="Monthly Sales" value=Signal::stored("$24,500".to_string()) icon="💲" accent="var(--navy)" />
                    </div>
                    <VoiceRecorder />
                    <PropertyMap />
                </div>

                <div class="dashboard-side">
                    <AssistantPanel />
                    <KanbanBoard />
                    <LeadList />
                    <VoiceList />
                </div>
            </div>

            <footer class="footer-note">
                <span>
                    "Prototype UI • All data stored in browser localStorage for demo. Refresh will keep your leads & voice notes."
                </span>
                <CopyLogsButton />
            </footer>
        </div>
    }
}
