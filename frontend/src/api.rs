use gloo_net::http::Request;
use log::{info, warn};
use thiserror::Error;

use crate::components::quote_form::QuoteFields;
use crate::config;

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("Please fill in your {0}.")]
    MissingField(&'static str),
    #[error("Could not encode the request: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("Request failed: {0}")]
    Request(#[from] gloo_net::Error),
    #[error("The server rejected the request (status {status}).")]
    Rejected { status: u16 },
}

/// Fields the sales team cannot follow up without, with the wording used in
/// the error message.
const REQUIRED: [(&str, &str); 1] = [("email", "work email")];

pub fn validate(fields: &QuoteFields) -> Result<(), SubmitError> {
    for (name, label) in REQUIRED {
        let present = fields.get(name).map_or(false, |v| !v.trim().is_empty());
        if !present {
            return Err(SubmitError::MissingField(label));
        }
    }
    Ok(())
}

pub fn encode(fields: &QuoteFields) -> Result<String, SubmitError> {
    Ok(serde_json::to_string(fields)?)
}

pub async fn submit_quote(fields: QuoteFields) -> Result<(), SubmitError> {
    validate(&fields)?;
    let body = encode(&fields)?;

    info!("Submitting quote request for {}", fields.get("company").map(String::as_str).unwrap_or(""));
    let response = Request::post(&config::quote_endpoint())
        .header("Content-Type", "application/json")
        .body(body)
        .send()
        .await?;

    if response.ok() {
        Ok(())
    } else {
        warn!("Quote request rejected with status {}", response.status());
        Err(SubmitError::Rejected { status: response.status() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::quote_form::{QuoteDraft, QuoteField};
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_email_is_rejected() {
        let fields = QuoteDraft::default().to_fields();
        let err = validate(&fields).unwrap_err();
        assert!(matches!(err, SubmitError::MissingField("work email")));
        assert_eq!(err.to_string(), "Please fill in your work email.");
    }

    #[test]
    fn whitespace_email_counts_as_missing() {
        let mut draft = QuoteDraft::default();
        draft.set(QuoteField::Email, "   ".to_string());
        assert!(validate(&draft.to_fields()).is_err());
    }

    #[test]
    fn encoded_body_carries_fields_unchanged() {
        let mut draft = QuoteDraft::default();
        draft.set(QuoteField::Email, "noc@example.com".to_string());
        draft.set(QuoteField::EstimatedKw, " 12 kW ".to_string());
        let fields = draft.to_fields();
        assert!(validate(&fields).is_ok());

        let body = encode(&fields).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(parsed["email"], "noc@example.com");
        assert_eq!(parsed["estimated_kw"], " 12 kW ");
        assert_eq!(parsed["nda"], "false");
    }
}
