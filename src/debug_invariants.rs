use crate::simplex_error::SimplexTreeError;

/// Trait for validating data structure invariants.
pub trait DebugInvariants {
    /// Validate invariants and return the first error encountered.
    fn validate_invariants(&self) -> Result<(), SimplexTreeError>;

    /// Assert invariants in debug builds or when invariant checking is enabled.
    fn debug_assert_invariants(&self) {
        #[cfg(any(debug_assertions, feature = "strict-invariants", feature = "check-invariants"))]
        if let Err(e) = self.validate_invariants() {
            panic!("[invariants] {e}");
        }
    }
}

/// Run [`DebugInvariants::validate_invariants`] on `$tree` after a structural
/// edit named `$op`, panicking with context when invariant checking is enabled.
#[macro_export]
macro_rules! debug_invariants {
    ($tree:expr, $op:literal) => {
        #[cfg(any(debug_assertions, feature = "strict-invariants", feature = "check-invariants"))]
        if let Err(e) = $crate::debug_invariants::DebugInvariants::validate_invariants($tree) {
            panic!(concat!("[invariants] after ", $op, ": {}"), e);
        }
    };
}
