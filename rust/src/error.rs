//! Error handling and result types for RBTree operations.
//!
//! The tree engine itself is infallible: duplicate keys and erasing the end
//! position are reported through return values. Errors appear at the facade
//! (`at`) and on the checked operations that validate the tree.

/// Error type for red-black tree operations.
#[derive(Debug, Clone, PartialEq)]
pub enum RBTreeError {
    /// Key not found in the tree.
    KeyNotFound,
    /// Checked element access outside the container's contents.
    OutOfRange(String),
    /// Internal data structure integrity violation.
    DataIntegrityError(String),
    /// Tree corruption detected.
    CorruptedTree(String),
    /// A node handle that does not refer to a live node.
    InvalidHandle(String),
}

impl RBTreeError {
    /// Create an OutOfRange error with context
    pub fn out_of_range(operation: &str, details: &str) -> Self {
        Self::OutOfRange(format!("{}: {}", operation, details))
    }

    /// Create a DataIntegrityError with context
    pub fn data_integrity(context: &str, details: &str) -> Self {
        Self::DataIntegrityError(format!("{}: {}", context, details))
    }

    /// Create a CorruptedTree error with context
    pub fn corrupted_tree(component: &str, details: &str) -> Self {
        Self::CorruptedTree(format!("{} corruption: {}", component, details))
    }

    /// Create an InvalidHandle error with context
    pub fn invalid_handle(operation: &str, node_id: u32) -> Self {
        Self::InvalidHandle(format!("{}: node {} is not live", operation, node_id))
    }

    /// Check if this error is an out-of-range error
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange(_))
    }

    /// Check if this error reports a broken tree
    pub fn is_corruption(&self) -> bool {
        matches!(self, Self::CorruptedTree(_) | Self::DataIntegrityError(_))
    }
}

impl std::fmt::Display for RBTreeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RBTreeError::KeyNotFound => write!(f, "Key not found in tree"),
            RBTreeError::OutOfRange(msg) => write!(f, "Out of range: {}", msg),
            RBTreeError::DataIntegrityError(msg) => write!(f, "Data integrity error: {}", msg),
            RBTreeError::CorruptedTree(msg) => write!(f, "Corrupted tree: {}", msg),
            RBTreeError::InvalidHandle(msg) => write!(f, "Invalid handle: {}", msg),
        }
    }
}

impl std::error::Error for RBTreeError {}

/// Internal result type for tree operations
pub(crate) type TreeResult<T> = Result<T, RBTreeError>;

/// Public result type for tree operations that may fail
pub type RBResult<T> = Result<T, RBTreeError>;

/// Result type for key lookup operations
pub type KeyResult<T> = Result<T, RBTreeError>;

/// Result type for tree modification operations
pub type ModifyResult<T> = Result<T, RBTreeError>;

/// Result extension trait for improved error handling
pub trait RBResultExt<T> {
    /// Convert to an RBResult with additional context
    fn with_context(self, context: &str) -> RBResult<T>;

    /// Convert to an RBResult with operation context
    fn with_operation(self, operation: &str) -> RBResult<T>;

    /// Log error and continue with default value
    fn or_default_with_log(self) -> T
    where
        T: Default;
}

impl<T> RBResultExt<T> for Result<T, RBTreeError> {
    fn with_context(self, context: &str) -> RBResult<T> {
        self.map_err(|e| match e {
            RBTreeError::KeyNotFound => RBTreeError::KeyNotFound,
            RBTreeError::OutOfRange(msg) => RBTreeError::out_of_range(context, &msg),
            RBTreeError::DataIntegrityError(msg) => RBTreeError::data_integrity(context, &msg),
            RBTreeError::CorruptedTree(msg) => RBTreeError::corrupted_tree(context, &msg),
            RBTreeError::InvalidHandle(msg) => {
                RBTreeError::InvalidHandle(format!("{}: {}", context, msg))
            }
        })
    }

    fn with_operation(self, operation: &str) -> RBResult<T> {
        self.with_context(&format!("Operation '{}'", operation))
    }

    fn or_default_with_log(self) -> T
    where
        T: Default,
    {
        match self {
            Ok(value) => value,
            Err(e) => {
                log::warn!("RB tree operation failed, using default: {}", e);
                T::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(RBTreeError::KeyNotFound.to_string(), "Key not found in tree");
        assert_eq!(
            RBTreeError::out_of_range("RBMap::at", "key not present").to_string(),
            "Out of range: RBMap::at: key not present"
        );
        assert_eq!(
            RBTreeError::invalid_handle("erase", 7).to_string(),
            "Invalid handle: erase: node 7 is not live"
        );
    }

    #[test]
    fn test_with_context_preserves_kind() {
        let err: RBResult<()> = Err(RBTreeError::corrupted_tree("Red rule", "node 3"));
        let err = err.with_operation("insert").unwrap_err();
        assert!(err.is_corruption());
        assert!(err.to_string().contains("Operation 'insert'"));

        let missing: RBResult<()> = Err(RBTreeError::KeyNotFound);
        assert_eq!(missing.with_context("lookup"), Err(RBTreeError::KeyNotFound));
    }

    #[test]
    fn test_or_default_with_log() {
        let ok: RBResult<i32> = Ok(5);
        assert_eq!(ok.or_default_with_log(), 5);
        let failed: RBResult<i32> = Err(RBTreeError::out_of_range("at", "empty"));
        assert_eq!(failed.or_default_with_log(), 0);
    }
}
