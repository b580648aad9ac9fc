//! Internal helper macros.

/// Returns early with `Err($error)` when `$predicate` does not hold.
///
/// Works like `assert!`, but for the validation paths where a broken rule is
/// an ordinary error instead of a bug.
macro_rules! ensure {
    ($predicate:expr, $error:expr) => {
        if !$predicate {
            return Err($error);
        }
    };
}

pub(crate) use ensure;
