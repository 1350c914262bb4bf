use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    Json,
};
use bytes::Bytes;
use http_body_util::Full;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::json;

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("invalid email regex"));

/// Roles offered by the contact form's select control.
const ROLES: &[&str] = &[
    "director",
    "producer",
    "cinematographer",
    "editor",
    "vfx",
    "other",
];

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    first_name: String,
    last_name: String,
    email: String,
    role: String,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Serialize, Debug, PartialEq)]
pub struct FieldError {
    path: &'static str,
    message: &'static str,
}

impl FieldError {
    fn new(path: &'static str, message: &'static str) -> Self {
        Self { path, message }
    }

    #[cfg(test)]
    pub fn path(&self) -> &str {
        self.path
    }
}

/// Checks the submission against the fixed form schema, collecting one entry
/// per violated constraint. The message field is free text and never rejected.
pub fn validate(request: &ContactRequest) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if request.first_name.trim().chars().count() < 2 {
        errors.push(FieldError::new("firstName", "First name is required"));
    }
    if request.last_name.trim().chars().count() < 2 {
        errors.push(FieldError::new("lastName", "Last name is required"));
    }
    if !EMAIL_REGEX.is_match(request.email.trim()) {
        errors.push(FieldError::new("email", "Invalid email address"));
    }
    let role = request.role.trim();
    if role.is_empty() {
        errors.push(FieldError::new("role", "Please select your role"));
    } else if !ROLES.contains(&role) {
        errors.push(FieldError::new("role", "Unknown role"));
    }

    errors
}

/// POST /api/contact
///
/// Validates the payload and acknowledges it. Submissions are not persisted;
/// forwarding to a mailbox or CRM is a separate collaborator.
pub async fn submit_contact(
    payload: Result<Json<ContactRequest>, JsonRejection>,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<serde_json::Value>)> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::warn!(%rejection, "rejected malformed contact payload");
        (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "success": false,
                "errors": [{"path": "body", "message": "Invalid JSON payload"}],
            })),
        )
    })?;

    let errors = validate(&request);
    if !errors.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(json!({"success": false, "errors": errors})),
        ));
    }

    tracing::info!(
        email = %request.email,
        role = %request.role,
        has_message = request.message.as_deref().is_some_and(|m| !m.is_empty()),
        "contact form submission received"
    );

    Ok(Json(json!({
        "success": true,
        "message": "Contact form submitted successfully",
    })))
}

/// Converts a handler panic into the generic 500 envelope. Nothing about the
/// fault is leaked to the caller; the panic itself is logged server-side.
pub fn handle_panic(err: Box<dyn std::any::Any + Send + 'static>) -> axum::http::Response<Full<Bytes>> {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic"
    };
    tracing::error!(%detail, "request handler panicked");

    let body = json!({
        "success": false,
        "message": "Internal server error",
    });

    axum::http::Response::builder()
        .status(StatusCode::INTERNAL_SERVER_ERROR)
        .header(axum::http::header::CONTENT_TYPE, "application/json")
        .body(Full::from(body.to_string()))
        .expect("static response must build")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use axum::routing::post;
    use axum::Router;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn contact_request(first: &str, last: &str, email: &str, role: &str) -> ContactRequest {
        ContactRequest {
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: email.to_string(),
            role: role.to_string(),
            message: None,
        }
    }

    #[test]
    fn accepts_well_formed_submission() {
        let request = contact_request("Al", "Lee", "a@b.com", "director");
        assert!(validate(&request).is_empty());
    }

    #[test]
    fn collects_one_error_per_violated_field() {
        let request = contact_request("A", "Lee", "bad", "");
        let errors = validate(&request);
        let paths: Vec<&str> = errors.iter().map(|e| e.path()).collect();
        assert_eq!(paths, vec!["firstName", "email", "role"]);
    }

    #[test]
    fn rejects_role_outside_the_enumerated_set() {
        let request = contact_request("Al", "Lee", "a@b.com", "astronaut");
        let errors = validate(&request);
        assert_eq!(errors, vec![FieldError::new("role", "Unknown role")]);
    }

    #[test]
    fn trims_whitespace_before_checking_lengths() {
        let request = contact_request("  A  ", "Lee", "a@b.com", "editor");
        let errors = validate(&request);
        assert_eq!(
            errors,
            vec![FieldError::new("firstName", "First name is required")]
        );
    }

    fn app() -> Router {
        Router::new().route("/api/contact", post(submit_contact))
    }

    async fn post_contact(body: serde_json::Value) -> (StatusCode, serde_json::Value) {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/contact")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value = serde_json::from_slice(&bytes).unwrap();
        (status, value)
    }

    #[tokio::test]
    async fn returns_success_envelope_for_valid_payload() {
        let (status, body) = post_contact(json!({
            "firstName": "Al",
            "lastName": "Lee",
            "email": "a@b.com",
            "role": "director",
        }))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], json!(true));
        assert!(body["message"].is_string());
    }

    #[tokio::test]
    async fn returns_field_errors_for_invalid_payload() {
        let (status, body) = post_contact(json!({
            "firstName": "A",
            "lastName": "Lee",
            "email": "bad",
            "role": "",
        }))
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], json!(false));
        let paths: Vec<&str> = body["errors"]
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["path"].as_str().unwrap())
            .collect();
        assert_eq!(paths, vec!["firstName", "email", "role"]);
    }

    #[tokio::test]
    async fn optional_message_is_accepted() {
        let (status, body) = post_contact(json!({
            "firstName": "Al",
            "lastName": "Lee",
            "email": "a@b.com",
            "role": "producer",
            "message": "We shoot in March.",
        }))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], json!(true));
    }

    #[tokio::test]
    async fn panics_map_to_the_generic_error_envelope() {
        use tower_http::catch_panic::CatchPanicLayer;

        async fn exploding_handler() -> Json<serde_json::Value> {
            panic!("submission pipeline fault");
        }

        let app = Router::new()
            .route("/api/contact", post(exploding_handler))
            .layer(CatchPanicLayer::custom(handle_panic));

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/contact")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from("{}"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["success"], json!(false));
        assert_eq!(body["message"], json!("Internal server error"));
    }

    #[tokio::test]
    async fn malformed_json_maps_to_the_error_envelope() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/contact")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from("{not json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["success"], json!(false));
    }
}
