//! Parser for the gateway's line-oriented `KEY: VALUE` response body.

use crate::types::{ThreeDSecureStatus, TransactionResult};

/// Response field names the gateway is known to emit. The set is open-ended;
/// anything else stays reachable through [`EcommResponse::get`].
pub mod fields {
    pub const RESULT: &str = "RESULT";
    pub const RESULT_CODE: &str = "RESULT_CODE";
    pub const TRANS_ID: &str = "TRANS_ID";
    pub const RRN: &str = "RRN";
    pub const APPROVAL_CODE: &str = "APPROVAL_CODE";
    pub const CARD_NUMBER: &str = "CARD_NUMBER";
    pub const THREE_D_SECURE: &str = "3DSECURE";
    pub const ERROR: &str = "error";
}

/// Parsed gateway response: an insertion-ordered field mapping.
///
/// Each line is split at the first colon, both halves trimmed. Lines without
/// a colon are skipped individually; one malformed line never discards the
/// pairs parsed before or after it. A repeated key keeps its first position
/// but takes the last value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EcommResponse {
    fields: Vec<(String, String)>,
}

impl EcommResponse {
    pub fn parse(body: &str) -> Self {
        let mut fields: Vec<(String, String)> = Vec::new();
        for line in body.lines() {
            let Some((key, value)) = line.split_once(':') else {
                continue;
            };
            let key = key.trim();
            let value = value.trim();
            match fields.iter_mut().find(|(existing, _)| existing == key) {
                Some(entry) => entry.1 = value.to_string(),
                None => fields.push((key.to_string(), value.to_string())),
            }
        }
        Self { fields }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Iterates fields in line order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Typed view of `RESULT`. `None` when the field is absent or carries a
    /// spelling outside the documented vocabulary; the raw string stays
    /// available via [`Self::get`].
    pub fn result(&self) -> Option<TransactionResult> {
        self.get(fields::RESULT)?.parse().ok()
    }

    pub fn result_code(&self) -> Option<&str> {
        self.get(fields::RESULT_CODE)
    }

    pub fn trans_id(&self) -> Option<&str> {
        self.get(fields::TRANS_ID)
    }

    pub fn rrn(&self) -> Option<&str> {
        self.get(fields::RRN)
    }

    pub fn approval_code(&self) -> Option<&str> {
        self.get(fields::APPROVAL_CODE)
    }

    pub fn card_number(&self) -> Option<&str> {
        self.get(fields::CARD_NUMBER)
    }

    pub fn three_d_secure(&self) -> Option<ThreeDSecureStatus> {
        self.get(fields::THREE_D_SECURE)?.parse().ok()
    }

    /// The gateway reports request-level failures in-body under an `error`
    /// key rather than through HTTP status codes.
    pub fn error_message(&self) -> Option<&str> {
        self.get(fields::ERROR)
    }
}
