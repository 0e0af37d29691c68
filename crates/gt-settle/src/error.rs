use gt_core::ExpenseId;
use thiserror::Error;

/// Errors from expense bookkeeping and loading.
#[derive(Debug, Error)]
pub enum ExpenseError {
    #[error("invalid expense: {0}")]
    Validation(String),

    #[error("expense {0} not found")]
    NotFound(ExpenseId),

    #[error("only the payer may modify an expense")]
    NotAuthorized,

    #[error("expense parse error: {0}")]
    Parse(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for expense operations.
pub type ExpenseResult<T> = Result<T, ExpenseError>;
