//! Labeled input bound to a string signal, showing its validation message.

use leptos::prelude::*;

use crate::util::form_errors::FormErrors;

#[component]
pub fn FormField(
    /// Field key, shared with `FormErrors` and server error bodies.
    name: &'static str,
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(default = "")] placeholder: &'static str,
    value: RwSignal<String>,
    errors: RwSignal<FormErrors>,
) -> impl IntoView {
    let message = Memo::new(move |_| errors.with(|e| e.field(name).map(str::to_owned)));

    view! {
        <label class="form-field">
            <span class="form-field__label">{label}</span>
            <input
                class=move || {
                    if message.get().is_some() { "form-field__input form-field__input--invalid" } else { "form-field__input" }
                }
                name=name
                type=input_type
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            <Show when=move || message.get().is_some()>
                <p class="form-field__error">{move || message.get().unwrap_or_default()}</p>
            </Show>
        </label>
    }
}

/// Form-level error banner.
#[component]
pub fn FormRootError(errors: RwSignal<FormErrors>) -> impl IntoView {
    let message = Memo::new(move |_| errors.with(|e| e.root.clone()));

    view! {
        <Show when=move || message.get().is_some()>
            <p class="form-root-error">{move || message.get().unwrap_or_default()}</p>
        </Show>
    }
}
