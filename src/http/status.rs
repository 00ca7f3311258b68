//! HTTP status codes with reason phrases and descriptions

use crate::error::ArgumentError;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusCategory {
    Informational,
    Success,
    Redirection,
    ClientError,
    ServerError,
}

impl StatusCategory {
    pub fn from_code(code: u16) -> Option<Self> {
        match code {
            100..=199 => Some(StatusCategory::Informational),
            200..=299 => Some(StatusCategory::Success),
            300..=399 => Some(StatusCategory::Redirection),
            400..=499 => Some(StatusCategory::ClientError),
            500..=599 => Some(StatusCategory::ServerError),
            _ => None,
        }
    }
}

macro_rules! status_codes {
    ($( $variant:ident = $code:literal, $message:literal, $description:literal; )+) => {
        /// Registered HTTP status codes
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum StatusCode {
            $( $variant, )+
        }

        impl StatusCode {
            pub const ALL: &'static [StatusCode] = &[ $( StatusCode::$variant, )+ ];

            pub fn code(self) -> u16 {
                match self {
                    $( StatusCode::$variant => $code, )+
                }
            }

            /// Standard reason phrase
            pub fn message(self) -> &'static str {
                match self {
                    $( StatusCode::$variant => $message, )+
                }
            }

            pub fn description(self) -> &'static str {
                match self {
                    $( StatusCode::$variant => $description, )+
                }
            }

            pub fn from_code(code: u16) -> Option<Self> {
                match code {
                    $( $code => Some(StatusCode::$variant), )+
                    _ => None,
                }
            }
        }
    };
}

status_codes! {
    Continue = 100, "Continue", "The client should continue with its request.";
    SwitchingProtocols = 101, "Switching Protocols", "The server is switching to the protocol requested in the Upgrade header.";
    Processing = 102, "Processing", "The server has accepted the request but has not completed it yet.";
    EarlyHints = 103, "Early Hints", "Preliminary headers sent before the final response.";
    Ok = 200, "OK", "The request succeeded.";
    Created = 201, "Created", "The request succeeded and a new resource was created.";
    Accepted = 202, "Accepted", "The request was accepted for processing, which has not completed.";
    NonAuthoritativeInformation = 203, "Non-Authoritative Information", "The returned metadata comes from a copy rather than the origin server.";
    NoContent = 204, "No Content", "The request succeeded and there is no content to send.";
    ResetContent = 205, "Reset Content", "The client should reset the document that sent the request.";
    PartialContent = 206, "Partial Content", "Only the requested range of the resource is returned.";
    MultiStatus = 207, "Multi-Status", "The body carries status information for multiple resources.";
    AlreadyReported = 208, "Already Reported", "The members of a binding were already enumerated.";
    ImUsed = 226, "IM Used", "The response is the result of instance manipulations applied to the resource.";
    MultipleChoices = 300, "Multiple Choices", "The request has more than one possible response.";
    MovedPermanently = 301, "Moved Permanently", "The resource has a new permanent URL.";
    Found = 302, "Found", "The resource temporarily lives at a different URL.";
    SeeOther = 303, "See Other", "The response can be found at another URL using GET.";
    NotModified = 304, "Not Modified", "The cached version of the resource is still valid.";
    UseProxy = 305, "Use Proxy", "The resource must be accessed through a proxy.";
    TemporaryRedirect = 307, "Temporary Redirect", "Repeat the request at another URL with the same method.";
    PermanentRedirect = 308, "Permanent Redirect", "The resource permanently moved; repeat with the same method.";
    BadRequest = 400, "Bad Request", "The server cannot process the request because of a client error.";
    Unauthorized = 401, "Unauthorized", "Authentication is required to access the resource.";
    PaymentRequired = 402, "Payment Required", "Reserved for future use by payment systems.";
    Forbidden = 403, "Forbidden", "The client is not allowed to access the resource.";
    NotFound = 404, "Not Found", "The server cannot find the requested resource.";
    MethodNotAllowed = 405, "Method Not Allowed", "The method is not supported by the target resource.";
    NotAcceptable = 406, "Not Acceptable", "No content matches the criteria given by the client.";
    ProxyAuthenticationRequired = 407, "Proxy Authentication Required", "Authentication with the proxy is required.";
    RequestTimeout = 408, "Request Timeout", "The server timed out waiting for the request.";
    Conflict = 409, "Conflict", "The request conflicts with the current state of the resource.";
    Gone = 410, "Gone", "The resource is no longer available and will not return.";
    LengthRequired = 411, "Length Required", "The request must carry a Content-Length header.";
    PreconditionFailed = 412, "Precondition Failed", "A precondition in the request headers was not met.";
    ContentTooLarge = 413, "Content Too Large", "The request body is larger than the server allows.";
    UriTooLong = 414, "URI Too Long", "The request URI is longer than the server will interpret.";
    UnsupportedMediaType = 415, "Unsupported Media Type", "The media format of the request is not supported.";
    RangeNotSatisfiable = 416, "Range Not Satisfiable", "The requested range cannot be served.";
    ExpectationFailed = 417, "Expectation Failed", "The Expect request header cannot be met.";
    ImATeapot = 418, "I'm a teapot", "The server refuses to brew coffee with a teapot.";
    MisdirectedRequest = 421, "Misdirected Request", "The request reached a server unable to produce a response.";
    UnprocessableContent = 422, "Unprocessable Content", "The request is well-formed but semantically invalid.";
    Locked = 423, "Locked", "The resource is locked.";
    FailedDependency = 424, "Failed Dependency", "The request failed because a previous request failed.";
    TooEarly = 425, "Too Early", "The server will not process a request that might be replayed.";
    UpgradeRequired = 426, "Upgrade Required", "The client must switch to a different protocol.";
    PreconditionRequired = 428, "Precondition Required", "The request must be conditional.";
    TooManyRequests = 429, "Too Many Requests", "The client sent too many requests in a given time.";
    RequestHeaderFieldsTooLarge = 431, "Request Header Fields Too Large", "The request headers are too large.";
    UnavailableForLegalReasons = 451, "Unavailable For Legal Reasons", "The resource cannot be provided for legal reasons.";
    InternalServerError = 500, "Internal Server Error", "The server encountered an unexpected condition.";
    NotImplemented = 501, "Not Implemented", "The server does not support the request method.";
    BadGateway = 502, "Bad Gateway", "The upstream server returned an invalid response.";
    ServiceUnavailable = 503, "Service Unavailable", "The server is not ready to handle the request.";
    GatewayTimeout = 504, "Gateway Timeout", "The upstream server did not respond in time.";
    HttpVersionNotSupported = 505, "HTTP Version Not Supported", "The HTTP version of the request is not supported.";
    VariantAlsoNegotiates = 506, "Variant Also Negotiates", "The server has an internal content negotiation error.";
    InsufficientStorage = 507, "Insufficient Storage", "The server cannot store the representation needed.";
    LoopDetected = 508, "Loop Detected", "The server detected an infinite loop while processing.";
    NotExtended = 510, "Not Extended", "Further extensions to the request are required.";
    NetworkAuthenticationRequired = 511, "Network Authentication Required", "The client must authenticate to gain network access.";
}

impl StatusCode {
    pub fn category(self) -> StatusCategory {
        match self.code() {
            100..=199 => StatusCategory::Informational,
            200..=299 => StatusCategory::Success,
            300..=399 => StatusCategory::Redirection,
            400..=499 => StatusCategory::ClientError,
            _ => StatusCategory::ServerError,
        }
    }

    pub fn is_error(self) -> bool {
        matches!(
            self.category(),
            StatusCategory::ClientError | StatusCategory::ServerError
        )
    }
}

impl TryFrom<u16> for StatusCode {
    type Error = crate::AppError;

    fn try_from(code: u16) -> Result<Self, Self::Error> {
        StatusCode::from_code(code).ok_or_else(|| {
            ArgumentError::InvalidValue {
                field: "status code".to_string(),
                value: code.to_string(),
                reason: "not a registered HTTP status code".to_string(),
            }
            .into()
        })
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.code(), self.message())
    }
}
