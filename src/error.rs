use thiserror::Error;

/// Error types for `U8Vec` operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum U8VecError {
    /// Operation cannot proceed with the given argument (for example, a zero element width)
    #[error("Invalid argument: {reason}")]
    InvalidArgument {
        /// Description of the rejected argument
        reason: &'static str,
    },
    /// Index is beyond the current vector length
    #[error("Index out of range: index {index} is beyond vector length {length}")]
    OutOfRange {
        /// Index that was accessed
        index: usize,
        /// Current length of the vector
        length: usize,
    },
    /// The allocator could not provide the requested buffer
    #[error("Allocation failed: could not allocate {bytes} bytes")]
    AllocationError {
        /// Number of bytes requested
        bytes: usize,
    },
    /// The requested capacity does not fit in the address space
    #[error("Capacity overflow: {slots} slots of {element_size} bytes exceed usize")]
    CapacityOverflow {
        /// Number of slots requested
        slots: usize,
        /// Width of one slot in bytes
        element_size: usize,
    },
    /// Operation requires a buffer, but `setup` has not been called
    #[error("Vector is not initialized")]
    NotInitialized,
    /// `setup` called on a vector that already owns a buffer
    #[error("Vector is already initialized")]
    AlreadyInitialized,
    /// Element slice length does not match the configured width
    #[error("Element size mismatch: expected {expected} bytes, got {actual}")]
    ElementSizeMismatch {
        /// Configured element width
        expected: usize,
        /// Length of the provided slice
        actual: usize,
    },
    /// Invalid `VecConfig` parameter
    #[error("Invalid configuration: {parameter} = {value}")]
    InvalidConfiguration {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value
        value: usize,
    },
}
