mod driver_operation_failed;
mod invalid_schema;
mod unknown_model;

use driver_operation_failed::DriverOperationFailed;
use invalid_schema::InvalidSchema;
use unknown_model::UnknownModel;

/// An error that can occur in Crouton.
///
/// Errors are created through the constructor functions on this type
/// (`Error::invalid_schema`, ...) and inspected through the matching `is_*`
/// predicates.
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
}

#[derive(Debug)]
enum ErrorKind {
    DriverOperationFailed(DriverOperationFailed),
    InvalidSchema(InvalidSchema),
    UnknownModel(UnknownModel),
}

impl Error {
    fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error { kind }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            ErrorKind::DriverOperationFailed(err) => Some(err),
            _ => None,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self.kind() {
            ErrorKind::DriverOperationFailed(err) => err.fmt(f),
            ErrorKind::InvalidSchema(err) => err.fmt(f),
            ErrorKind::UnknownModel(err) => err.fmt(f),
        }
    }
}
