//! Wire-level vocabulary of the ECOMM gateway.

use std::fmt;

use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// Default cap on an accumulated response body, in bytes.
pub const MAX_RESPONSE_BODY_SIZE: usize = 2_000_000;

pub const BASE64_ENGINE: base64::engine::GeneralPurpose = base64::engine::general_purpose::STANDARD;

/// Amount in the minor currency unit (tetri for GEL).
#[derive(
    Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd, Deserialize, Serialize,
)]
pub struct MinorUnit(i64);

impl MinorUnit {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Converts a major-unit amount to minor units (x100). The product is
    /// rounded so that binary-float artifacts (0.29 * 100 != 29.0) cannot
    /// shift the amount by one tetri.
    pub fn from_major(amount: f64) -> Self {
        Self((amount * 100.0).round() as i64)
    }

    pub fn get_amount_as_i64(self) -> i64 {
        self.0
    }
}

impl fmt::Display for MinorUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Currencies the gateway settles in, serialized as ISO 4217 numeric codes.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum Currency {
    #[serde(rename = "981")]
    Gel,
}

impl Currency {
    pub fn iso4217_numeric(self) -> &'static str {
        match self {
            Self::Gel => "981",
        }
    }
}

/// Single-letter command codes understood by the MerchantHandler endpoint.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, strum::Display)]
pub enum EcommCommand {
    /// Register a DMS authorization.
    #[serde(rename = "a")]
    #[strum(serialize = "a")]
    RegisterDms,
    /// Fetch the result of a previously registered transaction.
    #[serde(rename = "c")]
    #[strum(serialize = "c")]
    CheckResult,
    /// Execute (capture) a registered DMS authorization.
    #[serde(rename = "t")]
    #[strum(serialize = "t")]
    MakeDms,
    /// Refund a settled transaction. Reserved: the gateway side of this
    /// command is not available yet.
    #[serde(rename = "k")]
    #[strum(serialize = "k")]
    RefundDms,
    /// Reverse (release) a registered authorization.
    #[serde(rename = "r")]
    #[strum(serialize = "r")]
    ReverseDms,
    /// Close the current payment day.
    #[serde(rename = "b")]
    #[strum(serialize = "b")]
    CloseDay,
}

/// Values of the authoritative `RESULT` response field. The decision whether
/// a transaction succeeded must be based on this field alone; everything else
/// in the response is informational.
#[derive(
    Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize, strum::Display, strum::EnumString,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum TransactionResult {
    /// Successfully completed transaction.
    Ok,
    /// Transaction has failed.
    Failed,
    /// Transaction just registered in the system.
    Created,
    /// Transaction is not accomplished yet.
    Pending,
    /// Declined by the gateway (blocked ECI list).
    Declined,
    /// Transaction is reversed.
    Reversed,
    /// Transaction is reversed by autoreversal.
    AutoReversed,
    /// Transaction was timed out.
    Timeout,
}

impl TransactionResult {
    pub fn is_success(self) -> bool {
        matches!(self, Self::Ok)
    }
}

/// Values of the informational `3DSECURE` response field.
#[derive(
    Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize, strum::Display, strum::EnumString,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum ThreeDSecureStatus {
    Authenticated,
    Declined,
    NotParticipated,
    #[serde(rename = "NO_RANGE")]
    #[strum(serialize = "NO_RANGE")]
    NoRange,
    Attempted,
    Unavailable,
    Error,
    SysError,
    UnknownScheme,
}

/// One HTTP exchange's response as seen by the operation layer.
#[derive(Clone, Debug)]
pub struct Response {
    pub status_code: u16,
    pub headers: Option<http::HeaderMap>,
    pub response: Bytes,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn minor_unit_from_major_multiplies_by_hundred() {
        assert_eq!(MinorUnit::from_major(12.50).get_amount_as_i64(), 1250);
        assert_eq!(MinorUnit::from_major(10.0).get_amount_as_i64(), 1000);
    }

    #[test]
    fn minor_unit_from_major_is_stable_for_inexact_floats() {
        // 0.29 * 100.0 == 28.999999999999996 in f64
        assert_eq!(MinorUnit::from_major(0.29).get_amount_as_i64(), 29);
    }

    #[test]
    fn transaction_result_parses_documented_spellings() {
        for (raw, expected) in [
            ("OK", TransactionResult::Ok),
            ("FAILED", TransactionResult::Failed),
            ("CREATED", TransactionResult::Created),
            ("PENDING", TransactionResult::Pending),
            ("DECLINED", TransactionResult::Declined),
            ("REVERSED", TransactionResult::Reversed),
            ("AUTOREVERSED", TransactionResult::AutoReversed),
            ("TIMEOUT", TransactionResult::Timeout),
        ] {
            assert_eq!(raw.parse::<TransactionResult>().unwrap(), expected);
            assert_eq!(expected.to_string(), raw);
        }
        assert!("APPROVED".parse::<TransactionResult>().is_err());
    }

    #[test]
    fn three_d_secure_status_keeps_gateway_spellings() {
        assert_eq!(
            "NOTPARTICIPATED".parse::<ThreeDSecureStatus>().unwrap(),
            ThreeDSecureStatus::NotParticipated
        );
        assert_eq!(
            "NO_RANGE".parse::<ThreeDSecureStatus>().unwrap(),
            ThreeDSecureStatus::NoRange
        );
        assert_eq!(ThreeDSecureStatus::SysError.to_string(), "SYSERROR");
    }

    #[test]
    fn commands_serialize_to_single_letters() {
        for (command, letter) in [
            (EcommCommand::RegisterDms, "a"),
            (EcommCommand::CheckResult, "c"),
            (EcommCommand::MakeDms, "t"),
            (EcommCommand::RefundDms, "k"),
            (EcommCommand::ReverseDms, "r"),
            (EcommCommand::CloseDay, "b"),
        ] {
            assert_eq!(command.to_string(), letter);
        }
    }
}
