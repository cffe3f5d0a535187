//! The one real backend call: the support email form.

use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use web_sys::{FormData, HtmlFormElement};

use crate::dom;
use crate::error::{DashboardError, Result};

pub const GENERIC_EMAIL_ERROR: &str = "An error occurred while sending your email. Please try again.";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SupportResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub ticket_id: Option<String>,
}

impl SupportResponse {
    pub fn into_result(self) -> Result<SupportResponse> {
        if self.success {
            Ok(self)
        } else {
            Err(DashboardError::Rejected(self.message))
        }
    }

    pub fn followup_message(&self) -> Option<String> {
        self.ticket_id.as_ref().map(|id| {
            format!(
                "Support ticket #{} has been created. You can track it in your tickets.",
                id
            )
        })
    }
}

pub fn parse_support_response(raw: &str) -> Result<SupportResponse> {
    serde_json::from_str::<SupportResponse>(raw)?.into_result()
}

/// Text for the error toast: the server's own message when it refused the
/// request, a generic line for everything else.
pub fn failure_message(err: &DashboardError) -> String {
    match err {
        DashboardError::Rejected(message) if !message.is_empty() => message.clone(),
        _ => GENERIC_EMAIL_ERROR.to_string(),
    }
}

/// Posts the form as multipart data to its own `action`.
pub async fn send_support_email(form: &HtmlFormElement) -> Result<SupportResponse> {
    let token = dom::csrf_token()?;
    let body = FormData::new_with_form(form)
        .map_err(|_| DashboardError::MissingElement("support form data"))?;
    let action = form.action();
    log::debug!("posting support email to {}", action);

    let response = Request::post(&action)
        .header("X-CSRFToken", &token)
        .body(body)?
        .send()
        .await?;
    let text = response.text().await?;
    parse_support_response(&text)
}

const REFERENCE_ALPHABET: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// `#SP-` followed by six upper-case alphanumerics.
pub fn ticket_reference() -> String {
    reference_from_bytes(Uuid::new_v4().as_bytes())
}

fn reference_from_bytes(bytes: &[u8]) -> String {
    let suffix: String = bytes
        .iter()
        .take(6)
        .map(|b| REFERENCE_ALPHABET[*b as usize % REFERENCE_ALPHABET.len()] as char)
        .collect();
    format!("#SP-{}", suffix)
}

pub fn ticket_created_message(reference: &str) -> String {
    format!(
        "Support ticket {} created successfully! You'll receive updates via email.",
        reference
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepted_response_carries_ticket_followup() {
        let resp = parse_support_response(
            r#"{"success":true,"message":"Your email has been sent.","ticket_id":"4821"}"#,
        )
        .unwrap();
        assert_eq!(resp.message, "Your email has been sent.");
        assert_eq!(
            resp.followup_message().as_deref(),
            Some("Support ticket #4821 has been created. You can track it in your tickets.")
        );
    }

    #[test]
    fn rejected_response_surfaces_server_message() {
        let err = parse_support_response(r#"{"success":false,"message":"Subject is required."}"#)
            .unwrap_err();
        assert_eq!(failure_message(&err), "Subject is required.");
    }

    #[test]
    fn transport_and_parse_failures_use_generic_text() {
        let err = parse_support_response("<html>502</html>").unwrap_err();
        assert!(matches!(err, DashboardError::Json(_)));
        assert_eq!(failure_message(&err), GENERIC_EMAIL_ERROR);
        assert_eq!(failure_message(&DashboardError::MissingCsrfToken), GENERIC_EMAIL_ERROR);
        assert_eq!(failure_message(&DashboardError::Rejected(String::new())), GENERIC_EMAIL_ERROR);
    }

    #[test]
    fn missing_ticket_id_skips_followup() {
        let resp = parse_support_response(r#"{"success":true,"message":"ok"}"#).unwrap();
        assert!(resp.followup_message().is_none());
    }

    #[test]
    fn ticket_reference_shape() {
        let reference = ticket_reference();
        assert!(reference.starts_with("#SP-"));
        let suffix = &reference[4..];
        assert_eq!(suffix.len(), 6);
        assert!(suffix.chars().all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
        assert!(ticket_created_message(&reference).starts_with("Support ticket #SP-"));
    }

    #[test]
    fn reference_suffix_spans_full_alphabet() {
        assert_eq!(reference_from_bytes(&[0, 9, 10, 35, 36, 71]), "#SP-09AZ0Z");
        assert_eq!(reference_from_bytes(&[16, 17, 34, 255, 200, 100]), "#SP-GHY3KS");
    }
}
