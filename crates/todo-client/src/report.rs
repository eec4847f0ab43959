//! Error Reporting
//!
//! The single channel through which data access failures reach the user.

use crate::error::ApiError;

/// Receives failures caught by the gateway. Must not block.
pub trait ErrorReporter {
    fn report(&self, error: &ApiError);
}

impl<F> ErrorReporter for F
where
    F: Fn(&ApiError),
{
    fn report(&self, error: &ApiError) {
        self(error)
    }
}
