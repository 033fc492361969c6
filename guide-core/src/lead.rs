//! CRM form payload built from a submitted session.

use serde::Serialize;

use crate::models::Selection;
use crate::store::SubmissionEnvelope;

/// CRM field carrying the email address.
pub const EMAIL_FIELD: &str = "email";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeadField {
    pub name: String,
    pub value: String,
}

/// The page the lead was captured on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadContext {
    pub page_uri: String,
    pub page_name: String,
}

/// Payload for the CRM form service:
/// `{"fields": [{"name", "value"}], "context": {"pageUri", "pageName"}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeadSubmission {
    pub fields: Vec<LeadField>,
    pub context: LeadContext,
}

impl LeadSubmission {
    /// Builds the payload. The email comes first, followed by every question
    /// of the guide in order; unanswered questions are sent as empty strings.
    pub fn from_selection(
        selection: &Selection,
        email: &str,
        context: LeadContext,
    ) -> Self {
        let mut fields = vec![LeadField {
            name: EMAIL_FIELD.to_string(),
            value: email.to_string(),
        }];
        fields.extend(selection.kind().fields().iter().map(|field| LeadField {
            name: field.crm_field_name().to_string(),
            value: selection.answer(*field).joined().unwrap_or_default(),
        }));

        Self { fields, context }
    }

    pub fn from_envelope(
        envelope: &SubmissionEnvelope,
        context: LeadContext,
    ) -> Self {
        Self::from_selection(&envelope.selection, &envelope.email, context)
    }

    pub fn field(
        &self,
        name: &str,
    ) -> Option<&str> {
        self.fields
            .iter()
            .find(|field| field.name == name)
            .map(|field| field.value.as_str())
    }

    pub fn email(&self) -> &str {
        self.field(EMAIL_FIELD).unwrap_or_default()
    }
}
