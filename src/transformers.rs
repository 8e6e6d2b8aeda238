//! Parameter validation and gateway field construction for the DMS flows.
//!
//! Every check here runs before any network traffic: a conversion failure
//! short-circuits the operation with an error naming the offending field.

use std::sync::LazyLock;

use error_stack::report;
use regex::Regex;
use serde::Serialize;

use crate::{
    errors::{ConnectorError, CustomResult},
    types::{Currency, EcommCommand, MinorUnit},
};

/// Four dot-separated groups of 1-3 digits. Deliberately does not check
/// octet ranges ("999.999.999.999" passes); the gateway's real requirement
/// is unconfirmed, so the historical behavior is kept.
static SIMPLE_IPV4_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[0-9]{1,3}\.){3}[0-9]{1,3}$").expect("hardcoded IPv4 pattern is valid")
});

const LANGUAGE_CODE: &str = "GE";
const MESSAGE_TYPE_DMS: &str = "DMS";
const REGISTER_DESCRIPTION: &str = "Registering DMS transaction";
const MAKE_DESCRIPTION: &str = "Executing DMS transaction";

/// Parameters for registering a DMS authorization.
#[derive(Clone, Debug, Default)]
pub struct RegisterTransaction {
    /// Amount in major units (lari), e.g. `"12.50"`.
    pub amount: Option<String>,
    pub client_ip_address: Option<String>,
    pub description: Option<String>,
}

/// Parameters for fetching a transaction result.
#[derive(Clone, Debug, Default)]
pub struct CheckTransaction {
    pub transaction_id: Option<String>,
    pub client_ip_address: Option<String>,
}

/// Parameters for executing (capturing) a registered authorization.
#[derive(Clone, Debug, Default)]
pub struct MakeTransaction {
    pub transaction_id: Option<String>,
    pub amount: Option<String>,
    pub client_ip_address: Option<String>,
    pub description: Option<String>,
}

/// Parameters for reversing a registered authorization.
#[derive(Clone, Debug, Default)]
pub struct CancelTransaction {
    pub transaction_id: Option<String>,
}

/// Parameters for the (not yet available) refund flow.
#[derive(Clone, Debug, Default)]
pub struct RefundTransaction {
    pub transaction_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RegisterDmsRequest {
    command: EcommCommand,
    amount: MinorUnit,
    currency: Currency,
    client_ip_addr: String,
    description: String,
    language: &'static str,
    msg_type: &'static str,
}

impl TryFrom<&RegisterTransaction> for RegisterDmsRequest {
    type Error = error_stack::Report<ConnectorError>;

    fn try_from(params: &RegisterTransaction) -> Result<Self, Self::Error> {
        let amount = parse_amount(params.amount.as_deref(), "amount")?;
        let client_ip_addr =
            validate_client_ip(params.client_ip_address.as_deref(), "client_ip_address")?;
        Ok(Self {
            command: EcommCommand::RegisterDms,
            amount: MinorUnit::from_major(amount),
            currency: Currency::Gel,
            client_ip_addr,
            description: params
                .description
                .clone()
                .unwrap_or_else(|| REGISTER_DESCRIPTION.to_string()),
            language: LANGUAGE_CODE,
            msg_type: MESSAGE_TYPE_DMS,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct CheckStatusRequest {
    command: EcommCommand,
    trans_id: String,
    client_ip_addr: String,
}

impl TryFrom<&CheckTransaction> for CheckStatusRequest {
    type Error = error_stack::Report<ConnectorError>;

    fn try_from(params: &CheckTransaction) -> Result<Self, Self::Error> {
        let trans_id = require_field(params.transaction_id.as_deref(), "transaction_id")?;
        let client_ip_addr =
            validate_client_ip(params.client_ip_address.as_deref(), "client_ip_address")?;
        Ok(Self {
            command: EcommCommand::CheckResult,
            trans_id,
            client_ip_addr,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct MakeDmsRequest {
    command: EcommCommand,
    trans_id: String,
    amount: MinorUnit,
    currency: Currency,
    client_ip_addr: String,
    description: String,
    language: &'static str,
    msg_type: &'static str,
}

impl TryFrom<&MakeTransaction> for MakeDmsRequest {
    type Error = error_stack::Report<ConnectorError>;

    fn try_from(params: &MakeTransaction) -> Result<Self, Self::Error> {
        let amount = parse_amount(params.amount.as_deref(), "amount")?;
        let trans_id = require_field(params.transaction_id.as_deref(), "transaction_id")?;
        let client_ip_addr =
            validate_client_ip(params.client_ip_address.as_deref(), "client_ip_address")?;
        Ok(Self {
            command: EcommCommand::MakeDms,
            trans_id,
            amount: MinorUnit::from_major(amount),
            currency: Currency::Gel,
            client_ip_addr,
            description: params
                .description
                .clone()
                .unwrap_or_else(|| MAKE_DESCRIPTION.to_string()),
            language: LANGUAGE_CODE,
            msg_type: MESSAGE_TYPE_DMS,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct ReverseDmsRequest {
    command: EcommCommand,
    trans_id: String,
}

impl TryFrom<&CancelTransaction> for ReverseDmsRequest {
    type Error = error_stack::Report<ConnectorError>;

    fn try_from(params: &CancelTransaction) -> Result<Self, Self::Error> {
        let trans_id = require_field(params.transaction_id.as_deref(), "transaction_id")?;
        Ok(Self {
            command: EcommCommand::ReverseDms,
            trans_id,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct CloseDayRequest {
    command: EcommCommand,
}

impl CloseDayRequest {
    pub fn new() -> Self {
        Self {
            command: EcommCommand::CloseDay,
        }
    }
}

impl Default for CloseDayRequest {
    fn default() -> Self {
        Self::new()
    }
}

/// The amount must parse as a float and be strictly greater than zero; zero,
/// negative and non-numeric values are all rejected before any network call.
fn parse_amount(value: Option<&str>, field_name: &'static str) -> CustomResult<f64, ConnectorError> {
    let raw = value
        .filter(|raw| !raw.trim().is_empty())
        .ok_or(report!(ConnectorError::MissingRequiredField { field_name }))?;
    let amount: f64 = raw
        .trim()
        .parse()
        .map_err(|_| report!(ConnectorError::InvalidDataFormat { field_name }))?;
    if !(amount > 0.0) {
        // also rejects NaN
        return Err(report!(ConnectorError::InvalidDataFormat { field_name }));
    }
    Ok(amount)
}

fn require_field(
    value: Option<&str>,
    field_name: &'static str,
) -> CustomResult<String, ConnectorError> {
    value
        .filter(|raw| !raw.is_empty())
        .map(str::to_string)
        .ok_or(report!(ConnectorError::MissingRequiredField { field_name }))
}

fn validate_client_ip(
    value: Option<&str>,
    field_name: &'static str,
) -> CustomResult<String, ConnectorError> {
    let raw = require_field(value, field_name)?;
    if !SIMPLE_IPV4_REGEX.is_match(&raw) {
        return Err(report!(ConnectorError::InvalidDataFormat { field_name }));
    }
    Ok(raw)
}
