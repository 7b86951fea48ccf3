/// Request model errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    #[error("Unknown request operation '{0}'")]
    UnknownOperation(String),
}
