use std::fmt;

use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The service operation an error was raised from.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Operation {
    GetNames,
    GetUniqueNames,
    GetInterfaceNames,
    GetHardwareAddresses,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::GetNames => "get names",
            Operation::GetUniqueNames => "get unique names",
            Operation::GetInterfaceNames => "get interface names",
            Operation::GetHardwareAddresses => "get hardware addresses",
        };
        f.write_str(name)
    }
}

/// Stage at which an operation gave up.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ErrorKind {
    /// The executor could not start the query.
    Query,
    /// A single row could not be decoded.
    Scan,
    /// The cursor reported a fault after the last row.
    Cursor,
    /// The interface lister failed.
    List,
}

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{operation}: query could not be issued")]
    Query {
        operation: Operation,
        #[source]
        source: BoxError,
    },

    #[error("{operation}: failed to scan row {row}")]
    Scan {
        operation: Operation,
        row: usize,
        #[source]
        source: BoxError,
    },

    #[error("{operation}: cursor reported a fault")]
    Cursor {
        operation: Operation,
        #[source]
        source: BoxError,
    },

    #[error("{operation}: failed to list interfaces")]
    List {
        operation: Operation,
        #[source]
        source: BoxError,
    },
}

impl ServiceError {
    pub fn query(operation: Operation, source: impl Into<BoxError>) -> Self {
        ServiceError::Query { operation, source: source.into() }
    }

    pub fn scan(operation: Operation, row: usize, source: impl Into<BoxError>) -> Self {
        ServiceError::Scan { operation, row, source: source.into() }
    }

    pub fn cursor(operation: Operation, source: impl Into<BoxError>) -> Self {
        ServiceError::Cursor { operation, source: source.into() }
    }

    pub fn list(operation: Operation, source: impl Into<BoxError>) -> Self {
        ServiceError::List { operation, source: source.into() }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ServiceError::Query { .. } => ErrorKind::Query,
            ServiceError::Scan { .. } => ErrorKind::Scan,
            ServiceError::Cursor { .. } => ErrorKind::Cursor,
            ServiceError::List { .. } => ErrorKind::List,
        }
    }

    pub fn operation(&self) -> Operation {
        match self {
            ServiceError::Query { operation, .. }
            | ServiceError::Scan { operation, .. }
            | ServiceError::Cursor { operation, .. }
            | ServiceError::List { operation, .. } => *operation,
        }
    }
}
