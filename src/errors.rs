//! Error taxonomy for the gateway client.
//!
//! [`ConnectorError`] is what operations surface to callers; [`ApiClientError`]
//! covers the transport layer and is carried inside the report chain when a
//! network call fails.

/// Type alias for `Result` with an `error_stack::Report` error variant.
pub type CustomResult<T, E> = error_stack::Result<T, E>;

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ConnectorError {
    #[error("Missing required field: {field_name}")]
    MissingRequiredField { field_name: &'static str },
    #[error("Invalid data format for field: {field_name}")]
    InvalidDataFormat { field_name: &'static str },
    #[error("Missing gateway API credentials")]
    MissingApiCredentials,
    #[error("Failed to encode gateway request")]
    RequestEncodingFailed,
    #[error("Failed to execute a processing step")]
    ProcessingStepFailed,
    #[error("Invalid response received from the gateway")]
    InvalidResponse,
    #[error("Gateway returned an error: {message}")]
    GatewayError { message: String },
    #[error("{0} is not implemented")]
    NotImplemented(&'static str),
}

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ApiClientError {
    #[error("Failed to construct the HTTP client")]
    ClientConstructionFailed,
    #[error("Failed to decode the client certificate")]
    CertificateDecodeFailed,
    #[error("Failed to parse the request URL")]
    UrlParsingFailed,
    #[error("URL encoding of the request payload failed")]
    UrlEncodingFailed,
    #[error("Failed to construct the header map")]
    HeaderMapConstructionFailed,
    #[error("Request timed out")]
    RequestTimeoutReceived,
    #[error("Failed to send the request: {0}")]
    RequestNotSent(String),
    #[error("Response body exceeded the size limit of {limit} bytes")]
    BodySizeLimitExceeded { limit: usize },
    #[error("Failed to read the response body")]
    ResponseDecodingFailed,
}
