// Copyright 2024 the Vello Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Errors raised while building curve coefficients.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The control point slice is shorter than the curve degree requires.
    #[error("expected at least {required} control points, got {actual}")]
    TooFewPoints { required: usize, actual: usize },
}

pub type Result<T> = core::result::Result<T, Error>;

/// Checks that `points` holds at least `required` entries before any are read.
pub(crate) fn require_points<T>(points: &[T], required: usize) -> Result<()> {
    if points.len() < required {
        log::debug!(
            "rejecting curve with {} control points, {} required",
            points.len(),
            required
        );
        return Err(Error::TooFewPoints {
            required,
            actual: points.len(),
        });
    }
    Ok(())
}
