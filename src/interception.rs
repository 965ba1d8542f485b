// Copyright (c) 2025-2026 Ken Barker

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"),
// to deal in the Software without restriction, including without limitation the
// rights to use, copy, modify, merge, publish, distribute, sublicense, and/or
// sell copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN
// THE SOFTWARE.

//! The `interception` module contains functions for calculating the
//! interception point of a geodesic and a position: the point on the geodesic
//! through a pair of reference positions that is closest to the position,
//! also known as the point-to-line problem or the foot of the perpendicular.
//!
//! [Baselga and Martinez-Llario(2017)](https://www.researchgate.net/publication/321358300_Intersection_and_point-to-line_solutions_for_geodesics_on_the_ellipsoid)
//! solve the point-to-line problem by iteratively moving a candidate position
//! along the geodesic by the along track distance of a spherical triangle
//! solution, solved with Napier's analogies on the auxiliary sphere.
//!
//! [Karney(2023)](https://arxiv.org/abs/2308.00495) solves the same problem
//! with a correction derived from the reduced length and geodesic scale of
//! the geodesic between the candidate and the position, which converges in
//! fewer iterations and remains accurate far from the geodesic.
//!
//! This `interception` module iterates from the first reference position,
//! refining a candidate position with the correction distance of the chosen
//! `CorrectionMode` until the correction falls below `CONVERGENCE_DISTANCE`.

#![allow(clippy::suboptimal_flops)]

use crate::solver::GeodesicSolver;
use angle_sc::{Angle, Degrees};
use icao_units::si::Metres;
use thiserror::Error;
use tracing::trace;
use unit_sphere::{great_circle, LatLong};

/// The maximum number of refinement iterations.
pub const MAX_ITERATIONS: u32 = 20;

/// The convergence threshold for the correction distance: 1 centimetre.
pub const CONVERGENCE_DISTANCE: Metres = Metres(1e-2);

/// The formula used to calculate the along track correction distance at
/// each iteration.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CorrectionMode {
    /// The closed form spherical triangle solution from
    /// Baselga and Martinez-Llario(2017).
    Classical,
    /// The curvature correction from Karney(2023), using the reduced length
    /// and geodesic scale of the geodesic to the position.
    Karney2023,
}

/// The errors that can occur when calculating an interception point.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum InterceptionError {
    /// The reference positions coincide, so they do not define a geodesic.
    #[error("the reference positions of the geodesic coincide")]
    DegenerateSegment,
    /// The correction distance did not fall below `CONVERGENCE_DISTANCE`
    /// within `MAX_ITERATIONS`.
    #[error("no convergence after {iterations} iterations, correction: {correction} metres")]
    NonConvergence {
        /// The number of iterations performed.
        iterations: u32,
        /// The last correction distance in metres.
        correction: f64,
    },
    /// The correction distance is not a finite number.
    #[error("the correction distance is not finite at iteration {0}")]
    NumericalDomain(u32),
}

/// Calculate the along track correction distance using the closed form
/// solution from Baselga and Martinez-Llario(2017).
///
/// It calculates the across track arc distance of the position and then
/// solves the right spherical triangle for the along track distance with
/// Napier's analogies, in the half angle sine ratio form of the paper.
/// * `s_ap` - the distance from the candidate to the position.
/// * `azimuth_diff` - the difference between the azimuths to the position
///   and along the geodesic at the candidate.
/// * `r` - the radius of the auxiliary sphere.
///
/// returns the along track correction distance in `Metres`.
#[allow(clippy::similar_names)]
#[must_use]
fn calculate_classical_correction(s_ap: Metres, azimuth_diff: Degrees, r: Metres) -> Metres {
    let angle = Angle::from(azimuth_diff);
    let s_px = r.0 * libm::asin(libm::sin(s_ap.0 / r.0) * angle.sin().0);

    let half_sum = Angle::from(Degrees((90.0 + azimuth_diff.0) / 2.0));
    let half_diff = Angle::from(Degrees((90.0 - azimuth_diff.0) / 2.0));
    Metres(
        2.0 * r.0
            * libm::atan(
                half_sum.sin().0 / half_diff.sin().0
                    * libm::tan((s_ap.0 - s_px) / (2.0 * r.0)),
            ),
    )
}

/// Calculate the along track correction distance by solving the right
/// spherical triangle on the auxiliary sphere, see Karney(2023) equation 12.
///
/// It is used to seed the first iteration in `Karney2023` mode, before a
/// reduced length and geodesic scale are available.
/// * `s_ap` - the distance from the candidate to the position.
/// * `azimuth_diff` - the difference between the azimuths to the position
///   and along the geodesic at the candidate.
/// * `r` - the radius of the auxiliary sphere.
///
/// returns the along track correction distance in `Metres`.
#[must_use]
fn calculate_spherical_correction(s_ap: Metres, azimuth_diff: Degrees, r: Metres) -> Metres {
    let angle = Angle::from(azimuth_diff);
    let arc = s_ap.0 / r.0;
    Metres(r.0 * libm::atan2(libm::sin(arc) * angle.cos().0, libm::cos(arc)))
}

/// Calculate the along track correction distance from the reduced length
/// and geodesic scale of the geodesic to the position, see Karney(2023)
/// equation 13.
/// * `s_ap` - the distance from the candidate to the position.
/// * `reduced_length` - the reduced length of the geodesic to the position.
/// * `geodesic_scale` - the geodesic scale at the position.
/// * `azimuth_diff` - the difference between the azimuths to the position
///   and along the geodesic at the candidate.
///
/// returns the along track correction distance in `Metres`.
#[must_use]
fn calculate_ellipsoidal_correction(
    s_ap: Metres,
    reduced_length: Metres,
    geodesic_scale: f64,
    azimuth_diff: Degrees,
) -> Metres {
    let angle = Angle::from(azimuth_diff);
    let sin_a = angle.sin().0;
    let cos_a = angle.cos().0;
    Metres(
        reduced_length.0 * cos_a
            / ((reduced_length.0 / s_ap.0) * cos_a * cos_a + geodesic_scale * sin_a * sin_a),
    )
}

/// Calculate the interception point of the geodesic through positions `a`
/// and `b` and the position `p`, calling `observer` with the refined
/// candidate position and the correction distance at each iteration.
///
/// See `calculate_interception_point`.
/// * `a`, `b` - the reference positions of the geodesic in geodetic coordinates.
/// * `p` - the position to project onto the geodesic.
/// * `mode` - the `CorrectionMode` to refine the candidate position with.
/// * `solver` - the `GeodesicSolver` of the reference ellipsoid.
/// * `observer` - called at each refinement with the position calculated by
///   the direct solution and the correction distance.
///
/// returns the interception point in geodetic coordinates and the number of
/// iterations performed, or an `InterceptionError`.
///
/// # Errors
///
/// Returns `InterceptionError::DegenerateSegment` if `a` and `b` coincide,
/// `InterceptionError::NonConvergence` if the correction distance does not
/// fall below `CONVERGENCE_DISTANCE` within `MAX_ITERATIONS` or
/// `InterceptionError::NumericalDomain` if a correction distance is not a
/// finite number.
#[allow(clippy::similar_names)]
pub fn calculate_interception_point_with_observer<S, F>(
    a: &LatLong,
    b: &LatLong,
    p: &LatLong,
    mode: CorrectionMode,
    solver: &S,
    mut observer: F,
) -> Result<(LatLong, u32), InterceptionError>
where
    S: GeodesicSolver,
    F: FnMut(&LatLong, Metres),
{
    let radius = solver.equatorial_radius();
    let min_length = great_circle::MIN_VALUE * radius.0;

    // the azimuth of a degenerate geodesic is undefined
    let mut ab = solver.inverse(a, b, false);
    if ab.distance.0 < min_length {
        return Err(InterceptionError::DegenerateSegment);
    }

    let mut position = LatLong::new(a.lat(), a.lon());
    let mut iterations = 1;
    loop {
        let want_extras = CorrectionMode::Karney2023 == mode && 1 < iterations;
        let ap = solver.inverse(&position, p, want_extras);

        // the candidate has reached p, so p is on the geodesic
        if ap.distance.0 < min_length {
            return Ok((position, iterations));
        }

        let azimuth_diff = Degrees(ap.azimuth.0 - ab.azimuth.0);
        let correction = match mode {
            CorrectionMode::Classical => {
                calculate_classical_correction(ap.distance, azimuth_diff, radius)
            }
            CorrectionMode::Karney2023 => match (ap.reduced_length, ap.geodesic_scale) {
                (Some(reduced_length), Some(geodesic_scale)) => calculate_ellipsoidal_correction(
                    ap.distance,
                    reduced_length,
                    geodesic_scale,
                    azimuth_diff,
                ),
                _ => calculate_spherical_correction(ap.distance, azimuth_diff, radius),
            },
        };
        if !correction.0.is_finite() {
            return Err(InterceptionError::NumericalDomain(iterations));
        }

        let next = solver.direct(&position, ab.azimuth, correction);
        trace!(
            iterations,
            lat = next.lat().0,
            lon = next.lon().0,
            correction = correction.0,
            "refined candidate position"
        );
        observer(&next, correction);

        if libm::fabs(correction.0) < CONVERGENCE_DISTANCE.0 {
            return Ok((position, iterations));
        }

        if MAX_ITERATIONS <= iterations {
            return Err(InterceptionError::NonConvergence {
                iterations,
                correction: correction.0,
            });
        }

        position = next;
        ab = solver.inverse(&position, b, false);
        iterations += 1;
    }
}

/// Calculate the interception point of the geodesic through positions `a`
/// and `b` and the position `p`: the point on the geodesic (or its
/// extension) that is closest to `p`.
/// * `a`, `b` - the reference positions of the geodesic in geodetic coordinates.
/// * `p` - the position to project onto the geodesic.
/// * `mode` - the `CorrectionMode` to refine the candidate position with.
/// * `solver` - the `GeodesicSolver` of the reference ellipsoid.
///
/// returns the interception point in geodetic coordinates and the number of
/// iterations performed, or an `InterceptionError`.
///
/// # Errors
///
/// Returns `InterceptionError::DegenerateSegment` if `a` and `b` coincide,
/// `InterceptionError::NonConvergence` if the correction distance does not
/// fall below `CONVERGENCE_DISTANCE` within `MAX_ITERATIONS` or
/// `InterceptionError::NumericalDomain` if a correction distance is not a
/// finite number.
///
/// # Examples
/// ```
/// use geodesic_interception::*;
/// use angle_sc::is_within_tolerance;
///
/// let solver = GeographicLibSolver::wgs84();
///
/// let istanbul = LatLong::new(Degrees(42.0), Degrees(29.0));
/// let washington = LatLong::new(Degrees(39.0), Degrees(-77.0));
/// let reykjavik = LatLong::new(Degrees(64.0), Degrees(-22.0));
///
/// let (position, iterations) = calculate_interception_point(
///     &istanbul,
///     &washington,
///     &reykjavik,
///     CorrectionMode::Classical,
///     &solver,
/// )
/// .unwrap();
///
/// // The expected latitude and longitude are from:
/// // <https://sourceforge.net/p/geographiclib/discussion/1026621/thread/21aaff9f/#8a93>
/// assert!(is_within_tolerance(54.92853149711691, position.lat().0, 1e-6));
/// assert!(is_within_tolerance(-21.93729106604878, position.lon().0, 1e-6));
/// println!("iterations: {:?}", iterations);
/// ```
pub fn calculate_interception_point<S: GeodesicSolver>(
    a: &LatLong,
    b: &LatLong,
    p: &LatLong,
    mode: CorrectionMode,
    solver: &S,
) -> Result<(LatLong, u32), InterceptionError> {
    calculate_interception_point_with_observer(a, b, p, mode, solver, |_, _| {})
}
