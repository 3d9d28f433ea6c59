// Copyright 2022 the Vello Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::ops::{Add, Div, Index, Mul, Neg, Sub};

use bytemuck::{Pod, Zeroable};
use peniko::kurbo;

/// Two `f32` lanes processed as one value.
///
/// The lanes carry the x and y axes of a point, so a single chain of
/// elementwise operations evaluates both axis polynomials in lockstep.
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct F32x2 {
    lanes: [f32; 2],
}

impl F32x2 {
    /// All lanes zero.
    pub const ZERO: Self = Self::splat(0.0);
    /// All lanes one.
    pub const ONE: Self = Self::splat(1.0);

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { lanes: [x, y] }
    }

    /// Broadcasts `v` into both lanes.
    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self { lanes: [v, v] }
    }

    #[inline]
    pub const fn x(self) -> f32 {
        self.lanes[0]
    }

    #[inline]
    pub const fn y(self) -> f32 {
        self.lanes[1]
    }

    #[inline]
    pub const fn to_array(self) -> [f32; 2] {
        self.lanes
    }

    /// Creates a vector from a kurbo point, narrowing each coordinate to `f32`.
    pub fn from_kurbo(point: kurbo::Point) -> Self {
        let [x, y] = point_to_f32(point);
        Self::new(x, y)
    }

    /// Converts the vector to a kurbo point.
    pub fn to_kurbo(self) -> kurbo::Point {
        kurbo::Point::new(self.x() as f64, self.y() as f64)
    }

    /// Returns true if neither lane is infinite or NaN.
    pub fn is_finite(self) -> bool {
        self.x().is_finite() && self.y().is_finite()
    }

    #[inline]
    fn zip(self, other: Self, f: impl Fn(f32, f32) -> f32) -> Self {
        Self::new(f(self.x(), other.x()), f(self.y(), other.y()))
    }
}

/// Doubles each lane as `value + value`.
#[inline]
pub fn times_2(value: F32x2) -> F32x2 {
    value + value
}

impl From<[f32; 2]> for F32x2 {
    #[inline]
    fn from(lanes: [f32; 2]) -> Self {
        Self { lanes }
    }
}

impl From<F32x2> for [f32; 2] {
    #[inline]
    fn from(v: F32x2) -> Self {
        v.lanes
    }
}

impl From<kurbo::Point> for F32x2 {
    #[inline]
    fn from(point: kurbo::Point) -> Self {
        Self::from_kurbo(point)
    }
}

impl Index<usize> for F32x2 {
    type Output = f32;

    #[inline]
    fn index(&self, lane: usize) -> &f32 {
        &self.lanes[lane]
    }
}

impl Add for F32x2 {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        self.zip(other, |a, b| a + b)
    }
}

impl Sub for F32x2 {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        self.zip(other, |a, b| a - b)
    }
}

impl Mul for F32x2 {
    type Output = Self;

    #[inline]
    fn mul(self, other: Self) -> Self {
        self.zip(other, |a, b| a * b)
    }
}

impl Mul<f32> for F32x2 {
    type Output = Self;

    #[inline]
    fn mul(self, scale: f32) -> Self {
        self * Self::splat(scale)
    }
}

// Zero lanes in the divisor yield inf/NaN; callers rely on that.
impl Div for F32x2 {
    type Output = Self;

    #[inline]
    fn div(self, other: Self) -> Self {
        self.zip(other, |a, b| a / b)
    }
}

impl Neg for F32x2 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x(), -self.y())
    }
}

pub fn point_to_f32(point: kurbo::Point) -> [f32; 2] {
    [point.x as f32, point.y as f32]
}

#[cfg(test)]
impl approx::AbsDiffEq for F32x2 {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        approx::AbsDiffEq::abs_diff_eq(&self.x(), &other.x(), epsilon)
            && approx::AbsDiffEq::abs_diff_eq(&self.y(), &other.y(), epsilon)
    }
}

#[cfg(test)]
impl approx::RelativeEq for F32x2 {
    fn default_max_relative() -> f32 {
        f32::EPSILON
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        approx::RelativeEq::relative_eq(&self.x(), &other.x(), epsilon, max_relative)
            && approx::RelativeEq::relative_eq(&self.y(), &other.y(), epsilon, max_relative)
    }
}
