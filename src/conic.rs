// Copyright 2024 the Vello Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use bytemuck::{Pod, Zeroable};

use crate::coeff::{ConicCoeff, QuadCoeff};
use crate::error::{Result, require_points};
use crate::math::{F32x2, times_2};

/// Upper bound on the power-of-two count of quads used to approximate a conic.
pub const MAX_CONIC_TO_QUAD_POW2: u32 = 5;

/// Rational quadratic Bézier: three control points and the weight of the
/// middle one.
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct Conic {
    pub pts: [F32x2; 3],
    pub w: f32,
}

impl Conic {
    pub fn new(p0: F32x2, p1: F32x2, p2: F32x2, w: f32) -> Self {
        Self {
            pts: [p0, p1, p2],
            w,
        }
    }

    /// Takes the first three points of `src`.
    pub fn from_points<P: Copy + Into<F32x2>>(src: &[P], w: f32) -> Result<Self> {
        require_points(src, 3)?;
        Ok(Self::new(src[0].into(), src[1].into(), src[2].into(), w))
    }

    pub fn coeff(&self) -> ConicCoeff {
        let [p0, p1, p2] = self.pts;
        ConicCoeff::new(p0, p1, p2, self.w)
    }

    /// Position at `t`. Values outside `[0, 1]` are not rejected.
    pub fn eval_at(&self, t: f32) -> F32x2 {
        self.coeff().eval(t)
    }

    /// Tangent direction at `t`.
    ///
    /// Only the direction is meaningful; the length is arbitrary.
    pub fn eval_tangent_at(&self, t: f32) -> F32x2 {
        let [p0, p1, p2] = self.pts;
        // The derivative vanishes at an end point whose control point
        // coincides with it; fall back to the chord.
        if (t == 0.0 && p0 == p1) || (t == 1.0 && p1 == p2) {
            return p2 - p0;
        }
        let ww = F32x2::splat(self.w);
        let p20 = p2 - p0;
        let p10 = p1 - p0;

        let c = ww * p10;
        let a = ww * p20 - p20;
        let b = p20 - times_2(c);
        QuadCoeff::new(a, b, c).eval(t)
    }

    /// Offset between the conic and the quadratic with the same control
    /// points, measured at the midpoint.
    pub fn as_quad_error(&self) -> F32x2 {
        let [p0, p1, p2] = self.pts;
        let a = self.w - 1.0;
        let k = a / (4.0 * (2.0 + a));
        (p0 - times_2(p1) + p2) * k
    }

    /// Returns true if replacing the conic by a single quad stays within `tol`.
    pub fn as_quad_tol(&self, tol: f32) -> bool {
        let err = self.as_quad_error();
        err.x() * err.x() + err.y() * err.y() <= tol * tol
    }

    /// Returns the power of two of the number of quads needed to approximate
    /// the conic within `tol`, in `0..=MAX_CONIC_TO_QUAD_POW2`.
    ///
    /// Each halving of the conic divides the error by four.
    pub fn compute_quad_pow2(&self, tol: f32) -> u32 {
        if tol < 0.0 || !tol.is_finite() || !self.is_finite() {
            return 0;
        }
        let err = self.as_quad_error();
        let mut error = err.x().hypot(err.y());
        let mut pow2 = 0;
        while pow2 < MAX_CONIC_TO_QUAD_POW2 {
            if error <= tol {
                break;
            }
            error *= 0.25;
            pow2 += 1;
        }
        log::trace!("conic w={} needs 2^{} quads at tol {}", self.w, pow2, tol);
        pow2
    }

    /// Returns true if every control point is finite. The weight is not checked.
    pub fn is_finite(&self) -> bool {
        self.pts.iter().all(|p| p.is_finite())
    }
}
