//! Contact / Inquiry Form
//!
//! The eleven-field inquiry form. Field values live in the shared
//! session state; submission runs through the core state machine, so
//! the page stays responsive while the request is in flight. When no
//! valid form endpoint was configured at startup the form degrades to a
//! static email notice.

use dioxus::prelude::*;
use tinycabin_core::{
    email_is_valid, expire_submitted_notice, phone_is_valid, submit_form, ProjectType,
    SubmitOutcome,
};

use crate::components::form_fields::{SelectField, TextAreaField, TextField};
use crate::context::{use_form_delivery, use_session, UiSession};

const BUDGET_OPTIONS: &[&str] = &[
    "Under $5k",
    "$5k - $10k",
    "$10k - $25k",
    "$25k - $50k",
    "Over $50k",
];

const TIMELINE_OPTIONS: &[&str] = &[
    "As soon as possible",
    "Within 1-2 months",
    "Within 3-6 months",
    "Flexible",
];

#[component]
pub fn ContactForm() -> Element {
    let mut session = use_session();
    let delivery = use_form_delivery();

    // Local notice for validation and delivery problems
    let mut notice: Signal<Option<String>> = use_signal(|| None);

    // No endpoint: render a static fallback instead of a form that
    // cannot submit.
    if delivery().is_none() {
        return rsx! {
            div { class: "form-fallback",
                p {
                    "Our inquiry form is offline right now. Email "
                    a { href: "mailto:hello@tinycabin.studio", "hello@tinycabin.studio" }
                    " and we'll get back to you within two working days."
                }
            }
        };
    }

    let form = session().form;
    let submitting = session().is_submitting();
    let submitted = session().is_submitted();

    // Field-level hints, evaluated as the visitor types
    let email_hint = (!form.email.is_empty() && !email_is_valid(&form.email))
        .then(|| "that doesn't look like an email address".to_string());
    let phone_hint = (!phone_is_valid(&form.phone))
        .then(|| "digits, spaces, and + - ( ) only".to_string());

    // One submission path: the submit button and Enter in any field
    // both arrive here through the form's submit event.
    let submit_inquiry = move || {
        let Some(endpoint) = delivery() else {
            return;
        };
        spawn(async move {
            match submit_form(&UiSession(session), &endpoint).await {
                SubmitOutcome::Rejected(missing) => {
                    let fields = missing
                        .iter()
                        .map(|f| f.label())
                        .collect::<Vec<_>>()
                        .join(", ");
                    notice.set(Some(format!("Please fill in the required fields: {fields}.")));
                }
                SubmitOutcome::InFlight => {}
                SubmitOutcome::Delivered(ticket) => {
                    notice.set(None);
                    // Success notice comes down on its own; the clear is
                    // ticket-gated so it cannot touch a newer attempt.
                    spawn(async move {
                        expire_submitted_notice(&UiSession(session), ticket).await;
                    });
                }
                SubmitOutcome::Failed => {
                    notice.set(Some(
                        "There was an error sending your inquiry. Please try again, or email \
                         hello@tinycabin.studio directly."
                            .to_string(),
                    ));
                }
            }
        });
    };

    rsx! {
        form {
            class: "inquiry-form",
            onsubmit: move |e| {
                e.prevent_default();
                submit_inquiry();
            },

            if submitted {
                div { class: "form-success",
                    "Thank you! Your inquiry is on its way - we'll be in touch soon."
                }
            }

            if let Some(message) = notice() {
                div { class: "form-notice",
                    span { "{message}" }
                    button {
                        r#type: "button",
                        class: "form-notice-dismiss",
                        onclick: move |_| notice.set(None),
                        "dismiss"
                    }
                }
            }

            div { class: "form-row",
                TextField {
                    id: "inquiry-name".to_string(),
                    label: "Name".to_string(),
                    value: form.name.clone(),
                    required: true,
                    oninput: move |v| session.write().form.name = v,
                }
                TextField {
                    id: "inquiry-email".to_string(),
                    label: "Email".to_string(),
                    input_type: "email".to_string(),
                    value: form.email.clone(),
                    required: true,
                    hint: email_hint,
                    oninput: move |v| session.write().form.email = v,
                }
            }

            div { class: "form-row",
                TextField {
                    id: "inquiry-company".to_string(),
                    label: "Company".to_string(),
                    value: form.company.clone(),
                    oninput: move |v| session.write().form.company = v,
                }
                TextField {
                    id: "inquiry-phone".to_string(),
                    label: "Phone".to_string(),
                    input_type: "tel".to_string(),
                    value: form.phone.clone(),
                    hint: phone_hint,
                    oninput: move |v| session.write().form.phone = v,
                }
            }

            div { class: "form-row",
                SelectField {
                    id: "inquiry-budget".to_string(),
                    label: "Budget".to_string(),
                    value: form.budget.clone(),
                    options: BUDGET_OPTIONS.to_vec(),
                    required: true,
                    onchange: move |v| session.write().form.budget = v,
                }
                SelectField {
                    id: "inquiry-timeline".to_string(),
                    label: "Timeline".to_string(),
                    value: form.timeline.clone(),
                    options: TIMELINE_OPTIONS.to_vec(),
                    onchange: move |v| session.write().form.timeline = v,
                }
            }

            fieldset { class: "form-field",
                legend { class: "field-label", "What kind of project?" }
                div { class: "type-pills",
                    for kind in ProjectType::all() {
                        {
                            let kind = *kind;
                            let checked = form.project_types.contains(&kind);
                            rsx! {
                                label {
                                    key: "{kind.label()}",
                                    class: if checked { "type-pill type-pill--active" } else { "type-pill" },
                                    input {
                                        r#type: "checkbox",
                                        checked,
                                        onchange: move |_| session.write().form.toggle_project_type(kind),
                                    }
                                    "{kind.label()}"
                                }
                            }
                        }
                    }
                }
            }

            TextAreaField {
                id: "inquiry-outline".to_string(),
                label: "Tell us about the project".to_string(),
                value: form.project_outline.clone(),
                rows: 6,
                required: true,
                placeholder: "What are you making, who is it for, what should it feel like?"
                    .to_string(),
                oninput: move |v| session.write().form.project_outline = v,
            }

            TextAreaField {
                id: "inquiry-inspiration".to_string(),
                label: "Anything inspiring us should see?".to_string(),
                value: form.inspiration.clone(),
                rows: 3,
                placeholder: "Links, references, moodboards...".to_string(),
                oninput: move |v| session.write().form.inspiration = v,
            }

            TextField {
                id: "inquiry-hear-about".to_string(),
                label: "How did you hear about us?".to_string(),
                value: form.hear_about.clone(),
                oninput: move |v| session.write().form.hear_about = v,
            }

            button {
                r#type: "submit",
                class: "submit-btn",
                disabled: submitting,
                if submitting {
                    "Sending..."
                } else {
                    "Send inquiry"
                }
            }
        }
    }
}
