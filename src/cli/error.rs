//! CLI-level errors (wraps application errors)

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Application(#[from] ApplicationError),

    #[error("{0}")]
    Usage(String),
}

impl From<DomainError> for CliError {
    fn from(e: DomainError) -> Self {
        CliError::Application(e.into())
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => crate::exitcode::USAGE,
            CliError::Application(e) => match e {
                ApplicationError::Domain(_) | ApplicationError::InvalidStep { .. } => {
                    crate::exitcode::DATAERR
                }
                ApplicationError::UnsupportedFormat(_) | ApplicationError::ChartParse { .. } => {
                    crate::exitcode::DATAERR
                }
                ApplicationError::OperationFailed { .. } => crate::exitcode::NOINPUT,
                ApplicationError::Config { .. } => crate::exitcode::CONFIG,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::EmployeeId;

    #[test]
    fn given_domain_error_when_mapping_exit_code_then_reports_data_error() {
        let err: CliError = DomainError::EmployeeNotFound(EmployeeId(3)).into();
        assert_eq!(err.exit_code(), crate::exitcode::DATAERR);
        assert_eq!(err.to_string(), "employee not found: 3");
    }

    #[test]
    fn given_usage_error_when_mapping_exit_code_then_reports_usage() {
        let err = CliError::Usage("no chart given".into());
        assert_eq!(err.exit_code(), crate::exitcode::USAGE);
    }

    #[test]
    fn given_each_application_error_when_mapping_exit_code_then_uses_sysexits() {
        let config: CliError = ApplicationError::Config {
            message: "bad".into(),
        }
        .into();
        let format: CliError = ApplicationError::UnsupportedFormat("yaml".into()).into();

        assert_eq!(config.exit_code(), crate::exitcode::CONFIG);
        assert_eq!(format.exit_code(), crate::exitcode::DATAERR);
    }
}
