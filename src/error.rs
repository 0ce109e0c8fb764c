//! Error types for symbol table construction, insertion and lookup

use thiserror::Error;

/// Errors reported by [`SymbolTable`](crate::SymbolTable) operations
///
/// A lookup miss is not an error; it is reported as `None`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SymbolError {
    /// The bucket count must be at least one.
    #[error("symbol table capacity must be positive")]
    InvalidCapacity,

    /// The addressable range is larger than a 16-bit address space.
    #[error("memory size {size} exceeds the 16-bit address space")]
    InvalidMemorySize { size: usize },

    /// An address outside `[0, limit)` was passed to insert or lookup.
    #[error("address x{addr:04X} is outside the addressable range [0, {limit})")]
    AddressOutOfRange { addr: u16, limit: usize },

    /// The name is already bound (names compare case-insensitively).
    #[error("symbol `{0}` is already defined")]
    DuplicateName(String),

    /// Unrecognised ordering criterion.
    #[error("unknown symbol order `{0}` (expected bucket, address or name)")]
    UnknownOrder(String),
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, SymbolError>;
