use std::error::Error;
use std::fmt::{Display, Formatter, Result as FormatResult};

const ERROR_DOCS_URL: &str = "https://developers.deezer.com/api/errors";

/// A failure reported by the Deezer API itself, through its error envelope.
///
/// Construction from a numeric code resolves the static [`ErrorCode`]
/// catalog; codes the catalog does not know keep the raw number.
#[derive(Debug)]
pub struct DeezerApiError {
    pub code: Option<u32>,
    pub message: Option<String>,
    source: Option<Box<dyn Error + Send + Sync>>,
}

impl DeezerApiError {
    pub fn new(code: Option<u32>, message: Option<String>) -> Self {
        Self {
            code,
            message,
            source: None,
        }
    }

    pub fn with_source(mut self, source: impl Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// The catalog entry for this error's code, when the code resolves.
    pub fn error_code(&self) -> Option<ErrorCode> {
        self.code.and_then(ErrorCode::from_code)
    }
}

impl Display for DeezerApiError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FormatResult {
        write!(formatter, "[Deezer API Error]")?;
        if let Some(code) = self.code {
            match ErrorCode::from_code(code) {
                Some(known) => write!(
                    formatter,
                    " {} (code {}, type {})",
                    known.description(),
                    known.code(),
                    known.kind()
                )?,
                None => write!(formatter, " Unknown (code {code})")?,
            }
        }
        if let Some(message) = self.message.as_deref().filter(|m| !m.trim().is_empty()) {
            write!(formatter, ": {message}")?;
        }
        write!(formatter, " - for more detail, see {ERROR_DOCS_URL}")
    }
}

impl Error for DeezerApiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.source {
            Some(source) => Some(source.as_ref()),
            None => None,
        }
    }
}

/// The documented error codes of the [Deezer API](https://developers.deezer.com/api/errors).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Quota exceeded
    Quota,
    /// Items limit exceeded
    ItemsLimitExceeded,
    /// Permission denied
    Permission,
    /// Invalid token
    TokenInvalid,
    /// Invalid parameter
    Parameter,
    /// Missing parameter
    ParameterMissing,
    /// Invalid query
    QueryInvalid,
    /// Service busy
    ServiceBusy,
    /// Data not found
    DataNotFound,
    /// Individual account not allowed
    IndividualAccountNotAllowed,
}

impl ErrorCode {
    pub const fn code(&self) -> u32 {
        match self {
            ErrorCode::Quota => 4,
            ErrorCode::ItemsLimitExceeded => 100,
            ErrorCode::Permission => 200,
            ErrorCode::TokenInvalid => 300,
            ErrorCode::Parameter => 500,
            ErrorCode::ParameterMissing => 501,
            ErrorCode::QueryInvalid => 600,
            ErrorCode::ServiceBusy => 700,
            ErrorCode::DataNotFound => 800,
            ErrorCode::IndividualAccountNotAllowed => 901,
        }
    }

    pub const fn description(&self) -> &'static str {
        match self {
            ErrorCode::Quota => "Quota exceeded",
            ErrorCode::ItemsLimitExceeded => "Items limit exceeded",
            ErrorCode::Permission => "Permission denied",
            ErrorCode::TokenInvalid => "Invalid token",
            ErrorCode::Parameter => "Invalid parameter",
            ErrorCode::ParameterMissing => "Missing parameter",
            ErrorCode::QueryInvalid => "Invalid query",
            ErrorCode::ServiceBusy => "Service busy",
            ErrorCode::DataNotFound => "Data not found",
            ErrorCode::IndividualAccountNotAllowed => "Individual account not allowed",
        }
    }

    /// The exception-type tag Deezer documents next to the code.
    pub const fn kind(&self) -> &'static str {
        match self {
            ErrorCode::Quota | ErrorCode::ItemsLimitExceeded | ErrorCode::ServiceBusy => {
                "Exception"
            }
            ErrorCode::Permission | ErrorCode::TokenInvalid => "OAuthException",
            ErrorCode::Parameter => "ParameterException",
            ErrorCode::ParameterMissing => "MissingParameterException",
            ErrorCode::QueryInvalid => "InvalidQueryException",
            ErrorCode::DataNotFound => "DataException",
            ErrorCode::IndividualAccountNotAllowed => "InvalidAccountChangedNotAllowedException",
        }
    }

    /// Looks a raw code up in the catalog.
    pub fn from_code(code: u32) -> Option<Self> {
        const ALL: [ErrorCode; 10] = [
            ErrorCode::Quota,
            ErrorCode::ItemsLimitExceeded,
            ErrorCode::Permission,
            ErrorCode::TokenInvalid,
            ErrorCode::Parameter,
            ErrorCode::ParameterMissing,
            ErrorCode::QueryInvalid,
            ErrorCode::ServiceBusy,
            ErrorCode::DataNotFound,
            ErrorCode::IndividualAccountNotAllowed,
        ];
        ALL.into_iter().find(|entry| entry.code() == code)
    }
}
