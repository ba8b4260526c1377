//! Property Map Stub
//!
//! Static map tile with a few pins; no geodata behind it.

use leptos::prelude::*;

const PINS: &[(&str, &str)] = &[("20%", "55%"), ("45%", "35%"), ("68%", "62%"), ("35%", "75%")];

#[component]
pub fn PropertyMap() -> impl IntoView {
    view! {
        <div class="card property-map">
            <div class="card-header">
                <h3 class="card-title">"Property Map"</h3>
            </div>
            <div class="card-content">
                <div class="map-canvas">
                    {PINS.iter().enumerate().map(|(i, (x, y))| view! {
                        <div
                            class="map-pin"
                            style=format!("left: {}; top: {}; animation-delay: {}ms;", x, y, i * 80)
                        >
                            "📍"
                        </div>
                    }).collect_view()}
                </div>
            </div>
        </div>
    }
}
