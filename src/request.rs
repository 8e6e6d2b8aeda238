//! Generic HTTP request model handed to the transport wrapper.

use std::collections::HashSet;

use hyperswitch_masking::{Maskable, Secret};
use serde::{Deserialize, Serialize};

pub type Headers = HashSet<(String, Maskable<String>)>;

#[derive(
    Clone, Copy, Debug, Default, Eq, PartialEq, Deserialize, Serialize, strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum Method {
    #[default]
    Get,
    Head,
    Post,
    Put,
    Delete,
}

impl Method {
    /// Methods that carry the payload in the request body rather than the
    /// query string.
    pub fn sends_body(self) -> bool {
        matches!(self, Self::Post | Self::Put | Self::Delete)
    }
}

pub enum RequestContent {
    FormUrlEncoded(Box<dyn hyperswitch_masking::ErasedMaskSerialize + Send>),
    Json(Box<dyn hyperswitch_masking::ErasedMaskSerialize + Send>),
    RawBytes(Vec<u8>),
}

impl std::fmt::Debug for RequestContent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::FormUrlEncoded(_) => "FormUrlEncodedRequestBody",
            Self::Json(_) => "JsonRequestBody",
            Self::RawBytes(_) => "RawBytesRequestBody",
        })
    }
}

#[derive(Clone, Debug)]
pub struct BasicAuth {
    pub username: String,
    pub password: Secret<String>,
}

/// One outgoing request. The certificate is a base64-encoded PKCS#12 blob;
/// when present together with a passphrase on an HTTPS target, the transport
/// builds a dedicated TLS client around it.
#[derive(Debug)]
pub struct Request {
    pub url: String,
    pub method: Method,
    pub headers: Headers,
    pub basic_auth: Option<BasicAuth>,
    pub body: Option<RequestContent>,
    pub certificate: Option<Secret<String>>,
    pub certificate_passphrase: Option<Secret<String>>,
}

impl Request {
    /// Starts a request with the default method (GET) and no headers.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method: Method::default(),
            headers: Headers::new(),
            basic_auth: None,
            body: None,
            certificate: None,
            certificate_passphrase: None,
        }
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: Maskable<String>) -> Self {
        self.headers.insert((name.into(), value));
        self
    }

    pub fn basic_auth(mut self, username: impl Into<String>, password: Secret<String>) -> Self {
        self.basic_auth = Some(BasicAuth {
            username: username.into(),
            password,
        });
        self
    }

    pub fn identity(mut self, certificate: Secret<String>, passphrase: Secret<String>) -> Self {
        self.certificate = Some(certificate);
        self.certificate_passphrase = Some(passphrase);
        self
    }

    pub fn body(mut self, content: RequestContent) -> Self {
        self.body = Some(content);
        self
    }
}
