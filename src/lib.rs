// Copyright 2023 the Vello Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Power-basis coefficients for Bézier and conic curves.
//!
//! Converting a curve's control points into polynomial coefficients once lets
//! a flattening or stroking stage sample it many times with a few
//! multiply-adds per point:
//!
//! ```
//! use curve_coeff::CubicCoeff;
//!
//! let pts = [[0.0f32, 0.0], [0.0, 1.0], [1.0, 1.0], [1.0, 0.0]];
//! let cubic = CubicCoeff::from_points(&pts)?;
//! let mid = cubic.eval(0.5);
//! assert!((mid.x() - 0.5).abs() < 1e-6 && (mid.y() - 0.75).abs() < 1e-6);
//! # Ok::<(), curve_coeff::Error>(())
//! ```
//!
//! All types are plain `Copy` values and may be shared freely across threads.

// LINEBENDER LINT SET - lib.rs - v2
// See https://linebender.org/wiki/canonical-lints/
// These lints aren't included in Cargo.toml because they
// shouldn't apply to examples and tests
#![warn(unused_crate_dependencies)]
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![forbid(unsafe_code)]
#![allow(missing_docs, reason = "Accessors and operators are self-describing.")]
#![expect(
    clippy::cast_possible_truncation,
    reason = "kurbo points are narrowed to f32 on purpose"
)]

mod coeff;
mod conic;
mod error;
pub mod math;

pub use coeff::{ConicCoeff, CubicCoeff, QuadCoeff};
pub use conic::{Conic, MAX_CONIC_TO_QUAD_POW2};
pub use error::{Error, Result};
pub use math::F32x2;
