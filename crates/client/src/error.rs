use std::collections::BTreeMap;

use portal_core::validation::{field_messages, summarize};

/// Errors from the portal client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP request itself failed (network, DNS, TLS) or the response
    /// body could not be decoded.
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a non-2xx status.
    #[error("API error ({status} {code}): {message}")]
    Api {
        status: u16,
        code: String,
        message: String,
        fields: BTreeMap<String, Vec<String>>,
    },

    /// Input failed local validation; no request was sent.
    #[error("Invalid input: {message}")]
    Invalid {
        message: String,
        fields: BTreeMap<String, Vec<String>>,
    },
}

impl ClientError {
    /// Whether the API reported that the addressed row does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::Api { status: 404, .. })
    }

    /// Whether the input was rejected, locally or by the API.
    pub fn is_validation(&self) -> bool {
        match self {
            ClientError::Invalid { .. } => true,
            ClientError::Api { status, code, .. } => *status == 400 && code == "VALIDATION_ERROR",
            ClientError::Transport(_) => false,
        }
    }

    /// Whether the API refused the write because of referencing rows.
    pub fn is_conflict(&self) -> bool {
        matches!(self, ClientError::Api { status: 409, .. })
    }

    /// Per-field messages, if the error carries any.
    pub fn fields(&self) -> Option<&BTreeMap<String, Vec<String>>> {
        match self {
            ClientError::Api { fields, .. } | ClientError::Invalid { fields, .. } => Some(fields),
            ClientError::Transport(_) => None,
        }
    }
}

impl From<validator::ValidationErrors> for ClientError {
    fn from(errors: validator::ValidationErrors) -> Self {
        ClientError::Invalid {
            message: summarize(&errors),
            fields: field_messages(&errors),
        }
    }
}
