//! Form Field Components
//!
//! Text inputs, textareas, and selects for the inquiry form.
//! Labels are wired via explicit ids; an optional inline hint carries
//! field-level validation feedback as the visitor types.

use dioxus::prelude::*;

/// Properties for the TextField component
#[derive(Clone, PartialEq, Props)]
pub struct TextFieldProps {
    /// Id for label association
    pub id: String,
    /// Field label text
    pub label: String,
    /// Current value
    pub value: String,
    /// Handler called when the value changes
    pub oninput: EventHandler<String>,
    /// Input type (text, email, tel, ...)
    #[props(default = "text".to_string())]
    pub input_type: String,
    #[props(default)]
    pub placeholder: Option<String>,
    /// Whether the field is required for submission
    #[props(default = false)]
    pub required: bool,
    /// Inline validation hint, shown below the field when present
    #[props(default)]
    pub hint: Option<String>,
    #[props(default = false)]
    pub disabled: bool,
}

/// Single-line text input with label and inline validation hint
#[component]
pub fn TextField(props: TextFieldProps) -> Element {
    rsx! {
        div { class: "form-field",
            label { class: "field-label", r#for: "{props.id}",
                "{props.label}"
                if props.required {
                    span { class: "field-required", " *" }
                }
            }
            input {
                id: "{props.id}",
                class: if props.hint.is_some() { "field-input field-input--invalid" } else { "field-input" },
                r#type: "{props.input_type}",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                required: props.required,
                disabled: props.disabled,
                oninput: move |e| props.oninput.call(e.value()),
            }
            if let Some(hint) = &props.hint {
                p { class: "field-hint", "{hint}" }
            }
        }
    }
}

/// Properties for the TextAreaField component
#[derive(Clone, PartialEq, Props)]
pub struct TextAreaFieldProps {
    pub id: String,
    pub label: String,
    pub value: String,
    pub oninput: EventHandler<String>,
    #[props(default)]
    pub placeholder: Option<String>,
    #[props(default = 4)]
    pub rows: u32,
    #[props(default = false)]
    pub required: bool,
    #[props(default = false)]
    pub disabled: bool,
}

/// Multi-line text input with label
#[component]
pub fn TextAreaField(props: TextAreaFieldProps) -> Element {
    rsx! {
        div { class: "form-field",
            label { class: "field-label", r#for: "{props.id}",
                "{props.label}"
                if props.required {
                    span { class: "field-required", " *" }
                }
            }
            textarea {
                id: "{props.id}",
                class: "field-input field-textarea",
                rows: "{props.rows}",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                required: props.required,
                disabled: props.disabled,
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}

/// Properties for the SelectField component
#[derive(Clone, PartialEq, Props)]
pub struct SelectFieldProps {
    pub id: String,
    pub label: String,
    /// Currently selected option (empty string = nothing chosen)
    pub value: String,
    /// Selectable options, in display order
    pub options: Vec<&'static str>,
    pub onchange: EventHandler<String>,
    #[props(default = false)]
    pub required: bool,
    #[props(default = false)]
    pub disabled: bool,
}

/// Dropdown select with a muted "choose one" default entry
#[component]
pub fn SelectField(props: SelectFieldProps) -> Element {
    rsx! {
        div { class: "form-field",
            label { class: "field-label", r#for: "{props.id}",
                "{props.label}"
                if props.required {
                    span { class: "field-required", " *" }
                }
            }
            select {
                id: "{props.id}",
                class: "field-input field-select",
                value: "{props.value}",
                disabled: props.disabled,
                onchange: move |e| props.onchange.call(e.value()),

                option { value: "", disabled: true, selected: props.value.is_empty(), "choose one..." }
                for option in props.options.iter() {
                    option {
                        value: "{option}",
                        selected: props.value == *option,
                        "{option}"
                    }
                }
            }
        }
    }
}
