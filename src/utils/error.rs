use thiserror::Error;

#[derive(Error, Debug)]
pub enum TicketError {
    #[error("Account ID is invalid: {account_id}")]
    InvalidAccount { account_id: String },

    #[error("No tickets have been found to purchase")]
    NoTickets,

    #[error("Invalid ticket request: {reason}")]
    InvalidTicketRequest { reason: String },

    #[error("Cannot purchase child/infant tickets without at least 1 adult ticket")]
    AdultRequired,

    #[error("Only {limit} tickets can be purchased at one time, {requested} requested")]
    TicketLimitExceeded { requested: u64, limit: u64 },

    #[error("Type mismatch for {field}: {value} is not a valid {expected}")]
    TypeMismatch {
        field: String,
        value: String,
        expected: String,
    },

    #[error("Configuration error for {field}: {message}")]
    ConfigError { field: String, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    BusinessRule,
    Collaborator,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl TicketError {
    pub fn invalid_request(reason: impl Into<String>) -> Self {
        Self::InvalidTicketRequest {
            reason: reason.into(),
        }
    }

    pub fn invalid_account(account_id: impl ToString) -> Self {
        Self::InvalidAccount {
            account_id: account_id.to_string(),
        }
    }

    pub fn config(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ConfigError {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidAccount { .. } | Self::NoTickets | Self::InvalidTicketRequest { .. } => {
                ErrorCategory::Validation
            }
            Self::AdultRequired | Self::TicketLimitExceeded { .. } => ErrorCategory::BusinessRule,
            Self::TypeMismatch { .. } => ErrorCategory::Collaborator,
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::IoError(_) | Self::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Validation | ErrorCategory::BusinessRule => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Collaborator | ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Process exit code for the CLI.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    /// Whether the caller can fix the problem by changing the request.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self.category(),
            ErrorCategory::Validation | ErrorCategory::BusinessRule
        )
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::InvalidAccount { account_id } => {
                format!("Account {} cannot purchase tickets", account_id)
            }
            Self::NoTickets => "Please choose at least one ticket".to_string(),
            Self::InvalidTicketRequest { reason } => format!("Ticket request rejected: {}", reason),
            Self::AdultRequired => {
                "Child and infant tickets must be bought together with an adult ticket".to_string()
            }
            Self::TicketLimitExceeded { requested, limit } => format!(
                "You asked for {} tickets but at most {} can be bought at once",
                requested, limit
            ),
            Self::TypeMismatch { field, .. } => {
                format!("The booking system could not accept the {}", field)
            }
            Self::ConfigError { field, message } => {
                format!("Configuration problem in {}: {}", field, message)
            }
            Self::IoError(e) => format!("File access failed: {}", e),
            Self::SerializationError(e) => format!("Could not format the result: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::InvalidAccount { .. } => "Use a positive account ID",
            Self::NoTickets => "Add at least one ticket, e.g. --ticket ADULT=1",
            Self::InvalidTicketRequest { .. } => {
                "Use ADULT, CHILD or INFANT with a positive count, e.g. CHILD=2"
            }
            Self::AdultRequired => "Add at least one ADULT ticket to the purchase",
            Self::TicketLimitExceeded { .. } => "Split the purchase into orders of 20 tickets or fewer",
            Self::TypeMismatch { .. } => "Check the totals sent to the payment and booking systems",
            Self::ConfigError { .. } => "Check the order file against the documented format",
            Self::IoError(_) => "Make sure the file exists and is readable",
            Self::SerializationError(_) => "Retry with --verbose for more detail",
        }
    }
}

pub type Result<T> = std::result::Result<T, TicketError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejections_are_medium_severity() {
        let errors = [
            TicketError::invalid_account(0),
            TicketError::NoTickets,
            TicketError::invalid_request("count must be positive"),
            TicketError::AdultRequired,
            TicketError::TicketLimitExceeded {
                requested: 21,
                limit: 20,
            },
        ];

        for error in &errors {
            assert!(error.is_rejection(), "{:?}", error);
            assert_eq!(error.severity(), ErrorSeverity::Medium);
            assert_eq!(error.exit_code(), 2);
        }
    }

    #[test]
    fn test_exit_codes_by_severity() {
        assert_eq!(TicketError::config("account_id", "value is required").exit_code(), 1);

        let io = TicketError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "order.toml"));
        assert_eq!(io.category(), ErrorCategory::System);
        assert_eq!(io.exit_code(), 3);

        let json = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let serialization = TicketError::from(json);
        assert_eq!(serialization.category(), ErrorCategory::System);
        assert!(!serialization.is_rejection());
        assert_eq!(serialization.exit_code(), 3);
    }

    #[test]
    fn test_collaborator_errors_are_not_rejections() {
        let error = TicketError::TypeMismatch {
            field: "total_amount".to_string(),
            value: "5000000000".to_string(),
            expected: "u32".to_string(),
        };

        assert_eq!(error.category(), ErrorCategory::Collaborator);
        assert_eq!(error.severity(), ErrorSeverity::Critical);
        assert_eq!(error.exit_code(), 3);
        assert!(!error.is_rejection());
    }

    #[test]
    fn test_limit_message_mentions_counts() {
        let error = TicketError::TicketLimitExceeded {
            requested: 21,
            limit: 20,
        };
        assert_eq!(
            error.to_string(),
            "Only 20 tickets can be purchased at one time, 21 requested"
        );
        assert!(error.user_friendly_message().contains("21"));
    }
}
