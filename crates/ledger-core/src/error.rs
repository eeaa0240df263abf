use ledger_types::BodyError;

#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] BodyError),
}

pub type LedgerResult<T> = std::result::Result<T, LedgerError>;
