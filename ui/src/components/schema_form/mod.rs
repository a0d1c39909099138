//! Schema-Driven Survey Form
//!
//! Renders a `FormDefinition`: title, description, one control per field in
//! schema order, a submit button and the post-submit message region. The
//! record is a single `RwSignal<FormData>` owned by the mounted form.

pub mod fields;

use leptos::prelude::*;
use survey_form::{submit, CompiledSchema, FormData, FormDefinition, SubmitOutcome};

use crate::api;
use crate::collaborator::BrowserCollaborator;
use fields::FieldControl;

/// Loads the definition from the backend, then renders it. A banner marks
/// the built-in survey shown when the backend is unreachable.
#[component]
pub fn SurveyPage() -> impl IntoView {
    let definition = LocalResource::new(|| async move { api::load_form_definition().await });

    view! {
        <Suspense fallback=move || view! { <div class="text-gray-500">"Loading form..."</div> }>
            {move || {
                definition.get().map(|loaded| {
                    let notice = loaded.fallback_reason.map(|reason| {
                        view! {
                            <div class="bg-yellow-100 text-yellow-800 p-2 rounded mb-4">
                                "Could not load the form from the server (" {reason}
                                "). Showing the built-in survey."
                            </div>
                        }
                    });
                    view! {
                        <div class="max-w-lg w-full">
                            {notice}
                            <SurveyForm definition=loaded.definition />
                        </div>
                    }
                })
            }}
        </Suspense>
    }
}

#[component]
pub fn SurveyForm(definition: FormDefinition) -> impl IntoView {
    let FormDefinition {
        schema,
        validation_display,
        confirmation_message,
    } = definition;
    let schema = CompiledSchema::compile(schema);

    let record = RwSignal::new(FormData::new());
    let (outcome, set_outcome) = signal(None::<SubmitOutcome>);
    let collaborator = BrowserCollaborator::new(confirmation_message.clone());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let result = record.with_untracked(|current| submit(&collaborator, current, &confirmation_message));
        set_outcome.set(Some(result));
    };

    let title = schema.title().to_string();
    let description = schema.description().to_string();
    let controls = schema
        .fields()
        .iter()
        .map(|field| {
            view! { <FieldControl field=field.clone() record=record display=validation_display /> }
        })
        .collect_view();

    view! {
        <div class="bg-white p-8 rounded-lg shadow-lg max-w-lg w-full">
            <h1 class="text-3xl font-bold text-blue-600 mb-4">{title}</h1>
            <p class="text-gray-700 mb-6">{description}</p>
            <form on:submit=on_submit>
                {controls}
                <button
                    type="submit"
                    class="bg-blue-500 text-white p-2 rounded w-full hover:bg-blue-700 transition duration-200"
                >
                    "Submit"
                </button>
            </form>
            {move || {
                outcome.get().map(|outcome| {
                    let class = if outcome.is_success() {
                        "mt-4 text-green-500 font-bold"
                    } else {
                        "mt-4 text-red-500 font-bold"
                    };
                    view! { <p class=class>{outcome.message().to_string()}</p> }
                })
            }}
        </div>
    }
}
