use thiserror::Error;

#[derive(Debug, Error)]
pub enum SdkError {
    #[error("registry error: {0}")]
    Registry(#[from] tessera_registry::RegistryError),

    #[error("gate error: {0}")]
    Gate(#[from] tessera_gate::GateError),
}

pub type SdkResult<T> = Result<T, SdkError>;
