/// Errors from kernel operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum KernelError {
    #[error("dimension mismatch: cannot multiply {lhs_rows}x{lhs_cols} by {rhs_rows}x{rhs_cols}")]
    DimensionMismatch {
        lhs_rows: usize,
        lhs_cols: usize,
        rhs_rows: usize,
        rhs_cols: usize,
    },
    #[error("matrix data has {len} entries, expected {rows}x{cols}")]
    ShapeMismatch { rows: usize, cols: usize, len: usize },
    #[error("invalid axis '{0}': expected 'x', 'y', or 'z'")]
    InvalidAxis(char),
    #[error("invalid rotation order {0:?}: expected three axis labels")]
    InvalidOrder(String),
}
