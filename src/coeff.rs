// Copyright 2024 the Vello Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Power-basis coefficients for Bézier curves.
//!
//! Each type converts control points once and then evaluates with Horner's
//! rule, so sampling a curve many times costs a few multiply-adds per sample.
//! The parameter is never clamped; values outside `[0, 1]` extrapolate.

use bytemuck::{Pod, Zeroable};
use peniko::kurbo;

use crate::error::{Result, require_points};
use crate::math::{F32x2, times_2};

/// Quadratic polynomial `A·t² + B·t + C` evaluated on both axes at once.
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct QuadCoeff {
    pub a: F32x2,
    pub b: F32x2,
    pub c: F32x2,
}

impl QuadCoeff {
    pub const fn new(a: F32x2, b: F32x2, c: F32x2) -> Self {
        Self { a, b, c }
    }

    /// Converts the control points of a quadratic Bézier.
    pub fn from_bezier(p0: F32x2, p1: F32x2, p2: F32x2) -> Self {
        Self {
            a: p2 - times_2(p1) + p0,
            b: times_2(p1 - p0),
            c: p0,
        }
    }

    /// Converts the first three points of `src`.
    ///
    /// Fails without reading `src` if it holds fewer than three points.
    pub fn from_points<P: Copy + Into<F32x2>>(src: &[P]) -> Result<Self> {
        require_points(src, 3)?;
        Ok(Self::from_bezier(
            src[0].into(),
            src[1].into(),
            src[2].into(),
        ))
    }

    #[inline]
    pub fn eval(&self, t: f32) -> F32x2 {
        self.eval_splat(F32x2::splat(t))
    }

    /// Evaluates at a parameter that is already broadcast to both lanes.
    #[inline]
    pub fn eval_splat(&self, tt: F32x2) -> F32x2 {
        (self.a * tt + self.b) * tt + self.c
    }
}

impl From<kurbo::QuadBez> for QuadCoeff {
    fn from(quad: kurbo::QuadBez) -> Self {
        Self::from_bezier(quad.p0.into(), quad.p1.into(), quad.p2.into())
    }
}

/// Rational quadratic (conic) curve as a ratio of two quadratics.
///
/// Both lanes of the denominator always hold the same value, since the weight
/// has no per-axis component.
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct ConicCoeff {
    pub numer: QuadCoeff,
    pub denom: QuadCoeff,
}

impl ConicCoeff {
    /// Builds the projective form of the conic `p0, p1, p2` with weight `w`.
    ///
    /// The weight is not validated. A zero or negative weight produces a
    /// denominator that can vanish inside `[0, 1]`, and evaluation then yields
    /// infinities or NaNs.
    pub fn new(p0: F32x2, p1: F32x2, p2: F32x2, w: f32) -> Self {
        let ww = F32x2::splat(w);
        let p1w = p1 * ww;

        let numer = QuadCoeff {
            a: p2 - times_2(p1w) + p0,
            b: times_2(p1w - p0),
            c: p0,
        };

        let denom_c = F32x2::ONE;
        let denom_b = times_2(ww - denom_c);
        let denom = QuadCoeff {
            a: F32x2::ZERO - denom_b,
            b: denom_b,
            c: denom_c,
        };

        Self { numer, denom }
    }

    #[inline]
    pub fn eval(&self, t: f32) -> F32x2 {
        self.eval_splat(F32x2::splat(t))
    }

    #[inline]
    pub fn eval_splat(&self, tt: F32x2) -> F32x2 {
        self.numer.eval_splat(tt) / self.denom.eval_splat(tt)
    }
}

/// Cubic polynomial `A·t³ + B·t² + C·t + D` evaluated on both axes at once.
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct CubicCoeff {
    pub a: F32x2,
    pub b: F32x2,
    pub c: F32x2,
    pub d: F32x2,
}

impl CubicCoeff {
    /// Converts the control points of a cubic Bézier.
    pub fn new(p0: F32x2, p1: F32x2, p2: F32x2, p3: F32x2) -> Self {
        let three = F32x2::splat(3.0);
        Self {
            a: p3 + three * (p1 - p2) - p0,
            b: three * (p2 - times_2(p1) + p0),
            c: three * (p1 - p0),
            d: p0,
        }
    }

    /// Converts the first four points of `src`.
    ///
    /// Fails without reading `src` if it holds fewer than four points.
    pub fn from_points<P: Copy + Into<F32x2>>(src: &[P]) -> Result<Self> {
        require_points(src, 4)?;
        Ok(Self::new(
            src[0].into(),
            src[1].into(),
            src[2].into(),
            src[3].into(),
        ))
    }

    #[inline]
    pub fn eval(&self, t: f32) -> F32x2 {
        self.eval_splat(F32x2::splat(t))
    }

    #[inline]
    pub fn eval_splat(&self, tt: F32x2) -> F32x2 {
        ((self.a * tt + self.b) * tt + self.c) * tt + self.d
    }
}

impl From<kurbo::CubicBez> for CubicCoeff {
    fn from(cubic: kurbo::CubicBez) -> Self {
        Self::new(
            cubic.p0.into(),
            cubic.p1.into(),
            cubic.p2.into(),
            cubic.p3.into(),
        )
    }
}
