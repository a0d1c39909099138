use leptos::prelude::*;

mod api;
mod collaborator;
mod components;
mod types;

use components::schema_form::SurveyPage;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-100 flex items-center justify-center">
            <SurveyPage />
        </div>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("Console logger already installed: {}", e);
    }
    leptos::mount::mount_to_body(App);
}
