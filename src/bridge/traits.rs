// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::bridge::marshal::SamplePair;

pub trait GlobalValue {
    /// Compute and return the global value of the measure.
    fn global_value(&self) -> f64;
}

/// The routine a bridge delegates the estimate to.
///
/// [`NativeRoutine`](crate::NativeRoutine) is the production implementation.
/// Test doubles implement this directly, or as a closure over
/// `(x_array, y_array, n)`.
pub trait MutualInformationRoutine {
    /// Run the routine once on already-validated samples and return its raw result.
    fn invoke(&self, samples: &mut SamplePair) -> f32;
}

impl<F> MutualInformationRoutine for F
where
    F: Fn(&[i32], &[i32], i32) -> f32,
{
    fn invoke(&self, samples: &mut SamplePair) -> f32 {
        self(samples.x(), samples.y(), samples.n())
    }
}
