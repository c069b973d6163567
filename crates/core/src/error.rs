use thiserror::Error;

use crate::model::{PreferenceParseError, ProjectError};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Project(#[from] ProjectError),
    #[error(transparent)]
    Preference(#[from] PreferenceParseError),
}
