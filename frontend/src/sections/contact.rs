use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use wasm_bindgen_futures::spawn_local;
use web_sys::{Event, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, InputEvent, SubmitEvent};
use yew::prelude::*;

use crate::config;
use crate::hooks::use_visible;

const ROLES: [(&str, &str); 6] = [
    ("director", "Director"),
    ("producer", "Producer"),
    ("cinematographer", "Cinematographer"),
    ("editor", "Editor"),
    ("vfx", "VFX Artist"),
    ("other", "Other"),
];

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ContactPayload {
    first_name: String,
    last_name: String,
    email: String,
    role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

#[derive(Deserialize, Clone, PartialEq)]
struct FieldError {
    path: String,
    message: String,
}

#[derive(Deserialize)]
struct ErrorResponse {
    errors: Vec<FieldError>,
}

#[derive(Deserialize)]
struct AckResponse {
    message: String,
}

/// Pre-flight copy of the server's schema so obvious mistakes are caught
/// before the request leaves the page. The server remains authoritative.
fn validate_client(first: &str, last: &str, email: &str, role: &str) -> Vec<FieldError> {
    let mut errors = Vec::new();
    let field = |path: &str, message: &str| FieldError {
        path: path.to_string(),
        message: message.to_string(),
    };

    if first.trim().chars().count() < 2 {
        errors.push(field("firstName", "First name is required"));
    }
    if last.trim().chars().count() < 2 {
        errors.push(field("lastName", "Last name is required"));
    }
    if !looks_like_email(email.trim()) {
        errors.push(field("email", "Invalid email address"));
    }
    if !ROLES.iter().any(|(value, _)| *value == role) {
        errors.push(field("role", "Please select your role"));
    }

    errors
}

fn looks_like_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

fn error_for(errors: &[FieldError], path: &str) -> Option<String> {
    errors
        .iter()
        .find(|e| e.path == path)
        .map(|e| e.message.clone())
}

#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    let section = use_node_ref();
    let visible = use_visible(section.clone(), 0.1, 0);

    let first_name = use_state(String::new);
    let last_name = use_state(String::new);
    let email = use_state(String::new);
    let role = use_state(String::new);
    let message = use_state(String::new);

    let field_errors = use_state(Vec::<FieldError>::new);
    let success = use_state(|| None::<String>);
    let error = use_state(|| None::<String>);
    let is_submitting = use_state(|| false);

    let on_first_name = {
        let first_name = first_name.clone();
        Callback::from(move |e: InputEvent| {
            first_name.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };
    let on_last_name = {
        let last_name = last_name.clone();
        Callback::from(move |e: InputEvent| {
            last_name.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };
    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            email.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };
    let on_role = {
        let role = role.clone();
        Callback::from(move |e: Event| {
            role.set(e.target_unchecked_into::<HtmlSelectElement>().value());
        })
    };
    let on_message = {
        let message = message.clone();
        Callback::from(move |e: InputEvent| {
            message.set(e.target_unchecked_into::<HtmlTextAreaElement>().value());
        })
    };

    let on_submit = {
        let first_name = first_name.clone();
        let last_name = last_name.clone();
        let email = email.clone();
        let role = role.clone();
        let message = message.clone();
        let field_errors = field_errors.clone();
        let success = success.clone();
        let error = error.clone();
        let is_submitting = is_submitting.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *is_submitting {
                return;
            }

            let local_errors =
                validate_client(&first_name, &last_name, &email, &role);
            if !local_errors.is_empty() {
                field_errors.set(local_errors);
                success.set(None);
                return;
            }
            field_errors.set(Vec::new());

            let payload = ContactPayload {
                first_name: (*first_name).clone(),
                last_name: (*last_name).clone(),
                email: (*email).clone(),
                role: (*role).clone(),
                message: (!message.is_empty()).then(|| (*message).clone()),
            };

            let first_name = first_name.clone();
            let last_name = last_name.clone();
            let email = email.clone();
            let role = role.clone();
            let message = message.clone();
            let field_errors = field_errors.clone();
            let success = success.clone();
            let error = error.clone();
            let is_submitting = is_submitting.clone();
            is_submitting.set(true);

            spawn_local(async move {
                let request = Request::post(&format!(
                    "{}/api/contact",
                    config::get_backend_url()
                ))
                .json(&payload)
                .expect("payload must serialize");

                match request.send().await {
                    Ok(response) if response.ok() => {
                        let ack = response
                            .json::<AckResponse>()
                            .await
                            .map(|ack| ack.message)
                            .unwrap_or_else(|_| {
                                "Thanks for joining the waitlist. We'll be in touch soon."
                                    .to_string()
                            });
                        success.set(Some(ack));
                        error.set(None);
                        first_name.set(String::new());
                        last_name.set(String::new());
                        email.set(String::new());
                        role.set(String::new());
                        message.set(String::new());
                    }
                    Ok(response) if response.status() == 400 => {
                        match response.json::<ErrorResponse>().await {
                            Ok(body) => field_errors.set(body.errors),
                            Err(_) => error.set(Some(
                                "Something went wrong. Please try again later.".to_string(),
                            )),
                        }
                        success.set(None);
                    }
                    Ok(_) => {
                        error.set(Some(
                            "Something went wrong. Please try again later.".to_string(),
                        ));
                        success.set(None);
                    }
                    Err(e) => {
                        gloo_console::error!(format!("contact submission failed: {e}"));
                        error.set(Some(
                            "Could not reach the server. Please try again later.".to_string(),
                        ));
                        success.set(None);
                    }
                }
                is_submitting.set(false);
            });
        })
    };

    let field_error_html = |path: &str| {
        error_for(&field_errors, path)
            .map(|message| html! { <p class="field-error">{ message }</p> })
            .unwrap_or_default()
    };

    html! {
        <section
            id="contact"
            ref={section}
            class={classes!("contact", visible.then_some("entered"))}
        >
            <div class="contact-panel fade-up">
                <div class="section-heading">
                    <h2>{"Ready to Transform Your Filmmaking?"}</h2>
                    <p>{"Join the waitlist for early access to CineForge."}</p>
                </div>

                if let Some(message) = (*success).clone() {
                    <p class="form-success">{ message }</p>
                }
                if let Some(message) = (*error).clone() {
                    <p class="form-error">{ message }</p>
                }

                <form class="contact-form" onsubmit={on_submit}>
                    <div class="form-row">
                        <label class="form-field">
                            {"First Name"}
                            <input
                                type="text"
                                placeholder="Enter your first name"
                                value={(*first_name).clone()}
                                oninput={on_first_name}
                            />
                            { field_error_html("firstName") }
                        </label>
                        <label class="form-field">
                            {"Last Name"}
                            <input
                                type="text"
                                placeholder="Enter your last name"
                                value={(*last_name).clone()}
                                oninput={on_last_name}
                            />
                            { field_error_html("lastName") }
                        </label>
                    </div>
                    <label class="form-field">
                        {"Email Address"}
                        <input
                            type="email"
                            placeholder="Enter your email address"
                            value={(*email).clone()}
                            oninput={on_email}
                        />
                        { field_error_html("email") }
                    </label>
                    <label class="form-field">
                        {"Your Role"}
                        <select onchange={on_role} value={(*role).clone()}>
                            <option value="" selected={role.is_empty()}>
                                {"Select your role"}
                            </option>
                            { for ROLES.iter().map(|(value, label)| html! {
                                <option value={*value} selected={*role == *value}>
                                    { label }
                                </option>
                            })}
                        </select>
                        { field_error_html("role") }
                    </label>
                    <label class="form-field">
                        {"How would you use CineForge?"}
                        <textarea
                            rows="4"
                            placeholder="Tell us about your project..."
                            value={(*message).clone()}
                            oninput={on_message}
                        />
                    </label>
                    <div class="form-actions">
                        <button type="submit" class="button primary" disabled={*is_submitting}>
                            { if *is_submitting { "Sending..." } else { "Join Waitlist" } }
                        </button>
                    </div>
                </form>
            </div>

            <div class="contact-channels fade-up delayed">
                <div class="contact-channel">
                    <h3>{"Email Us"}</h3>
                    <p>{"hello@cineforge.example"}</p>
                </div>
                <div class="contact-channel">
                    <h3>{"Support"}</h3>
                    <p>{"support@cineforge.example"}</p>
                </div>
                <div class="contact-channel">
                    <h3>{"Location"}</h3>
                    <p>{"Los Angeles, CA"}</p>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_a_complete_submission() {
        assert!(validate_client("Al", "Lee", "a@b.com", "director").is_empty());
    }

    #[test]
    fn reports_every_invalid_field() {
        let errors = validate_client("A", "Lee", "bad", "");
        let paths: Vec<&str> = errors.iter().map(|e| e.path.as_str()).collect();
        assert_eq!(paths, vec!["firstName", "email", "role"]);
    }

    #[test]
    fn email_shape_check_wants_local_part_and_dotted_domain() {
        assert!(looks_like_email("a@b.com"));
        assert!(!looks_like_email("a@b"));
        assert!(!looks_like_email("@b.com"));
        assert!(!looks_like_email("a@.com"));
        assert!(!looks_like_email("plainaddress"));
    }
}
