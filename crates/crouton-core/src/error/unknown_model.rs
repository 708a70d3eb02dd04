use super::Error;

/// Error when a table lifecycle operation names a model that was never
/// registered with the database handle it runs against.
#[derive(Debug)]
pub(super) struct UnknownModel {
    name: Box<str>,
}

impl std::error::Error for UnknownModel {}

impl core::fmt::Display for UnknownModel {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "unknown model: `{}` is not registered", self.name)
    }
}

impl Error {
    /// Creates an unknown model error.
    pub fn unknown_model(name: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnknownModel(UnknownModel {
            name: name.into().into(),
        }))
    }

    /// Returns `true` if this error is an unknown model error.
    pub fn is_unknown_model(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnknownModel(_))
    }
}
