//! Field Renderers
//!
//! One component per control kind. Every control writes through the same
//! change handler, which derives the next record from the latest one.

use leptos::prelude::*;
use leptos::web_sys;
use survey_form::{
    apply_change, CompiledField, Control, FormData, RenderedOption, TextKind, ValidationDisplay,
};

const INPUT_CLASS: &str = "mt-1 p-2 border rounded w-full";

/// Input handler that sets field `id` to the event target's value
fn change_handler(record: RwSignal<FormData>, id: String) -> impl Fn(web_sys::Event) + Clone + 'static {
    move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        record.update(|current| *current = apply_change(current, &id, value));
    }
}

// ============================================================================
// Dispatch
// ============================================================================

/// Renders the control matching the field's type, or nothing for unsupported types
#[component]
pub fn FieldControl(
    field: CompiledField,
    record: RwSignal<FormData>,
    display: ValidationDisplay,
) -> impl IntoView {
    match field.control() {
        Control::TextEntry { kind, .. } => view! {
            <TextEntry field=field.clone() kind=kind record=record display=display />
        }
        .into_any(),
        Control::Dropdown { .. } => view! {
            <Dropdown field=field.clone() record=record />
        }
        .into_any(),
        Control::RadioGroup { .. } => view! {
            <RadioGroup field=field.clone() record=record />
        }
        .into_any(),
        Control::Nothing => {
            log::debug!(
                "Skipping field '{}' of unsupported type '{}'",
                field.id(),
                field.field().field_type
            );
            ().into_any()
        }
    }
}

// ============================================================================
// Text Entry
// ============================================================================

#[component]
fn TextEntry(
    field: CompiledField,
    kind: TextKind,
    record: RwSignal<FormData>,
    display: ValidationDisplay,
) -> impl IntoView {
    let id = field.id().to_string();
    let label = field.label().to_string();
    let required = field.required();
    let placeholder = field.field().placeholder.clone().unwrap_or_default();
    let on_input = change_handler(record, id.clone());

    let id_for_value = id.clone();
    let value = move || record.with(|r| r.value(&id_for_value).to_string());

    let message = move || {
        record.with(|r| {
            field
                .validation_message(r, display)
                .map(|m| view! { <p class="text-red-500 text-xs">{m.to_string()}</p> })
        })
    };

    let control = if kind.is_multiline() {
        view! {
            <textarea
                id=id.clone()
                name=id.clone()
                placeholder=placeholder
                required=required
                class=INPUT_CLASS
                prop:value=value
                on:input=on_input
            />
        }
        .into_any()
    } else {
        view! {
            <input
                type=kind.input_type()
                id=id.clone()
                name=id.clone()
                placeholder=placeholder
                required=required
                class=INPUT_CLASS
                prop:value=value
                on:input=on_input
            />
        }
        .into_any()
    };

    view! {
        <div class="mb-4">
            <label for=id class="block text-gray-700">{label}</label>
            {control}
            {message}
        </div>
    }
}

// ============================================================================
// Dropdown
// ============================================================================

#[component]
fn Dropdown(field: CompiledField, record: RwSignal<FormData>) -> impl IntoView {
    let id = field.id().to_string();
    let label = field.label().to_string();
    let required = field.required();
    let on_change = change_handler(record, id.clone());

    // Selection is driven per option: the select's own value prop is applied
    // before its options exist.
    let options = field
        .options()
        .iter()
        .map(|opt| {
            let id = id.clone();
            let value = opt.value.clone();
            let selected = move || record.with(|r| r.get(&id) == Some(value.as_str()));
            view! {
                <option value=opt.value.clone() prop:selected=selected>{opt.label.clone()}</option>
            }
        })
        .collect_view();

    view! {
        <div class="mb-4">
            <label for=id.clone() class="block text-gray-700">{label}</label>
            <select
                id=id.clone()
                name=id.clone()
                required=required
                class=INPUT_CLASS
                on:change=on_change
            >
                {options}
            </select>
        </div>
    }
}

// ============================================================================
// Radio Group
// ============================================================================

#[component]
fn RadioGroup(field: CompiledField, record: RwSignal<FormData>) -> impl IntoView {
    let group = field.id().to_string();
    let label = field.label().to_string();
    let required = field.required();

    let choices = field
        .rendered_options(&FormData::new())
        .into_iter()
        .map(|opt| {
            let RenderedOption { key, value, label, .. } = opt;
            let on_change = change_handler(record, group.clone());
            let group_for_checked = group.clone();
            let value_for_checked = value.clone();
            let checked = move || {
                record.with(|r| r.get(&group_for_checked) == Some(value_for_checked.as_str()))
            };
            view! {
                <div class="flex items-center mb-2">
                    <input
                        type="radio"
                        id=key.clone()
                        name=group.clone()
                        value=value
                        required=required
                        class="mr-2"
                        prop:checked=checked
                        on:change=on_change
                    />
                    <label for=key.clone() class="text-gray-700">{label}</label>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="mb-4">
            <label class="block text-gray-700">{label}</label>
            {choices}
        </div>
    }
}
