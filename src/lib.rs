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

//! geodesic-interception
//!
//! [![crates.io](https://img.shields.io/crates/v/geodesic-interception.svg)](https://crates.io/crates/geodesic-interception)
//! [![docs.io](https://docs.rs/geodesic-interception/badge.svg)](https://docs.rs/geodesic-interception/)
//! [![License](https://img.shields.io/badge/License-MIT-blue)](https://opensource.org/license/mit/)
//! [![Rust](https://github.com/kenba/geodesic-interception-rs/actions/workflows/rust.yml/badge.svg)](https://github.com/kenba/geodesic-interception-rs/actions)
//! [![codecov](https://codecov.io/gh/kenba/geodesic-interception-rs/graph/badge.svg)](https://codecov.io/gh/kenba/geodesic-interception-rs)
//!
//! A library for calculating the interception point of a geodesic and a
//! position on the
//! [WGS-84](https://www.icao.int/NACC/Documents/Meetings/2014/ECARAIM/REF08-Doc9674.pdf)
//! ellipsoid (or any other ellipsoid of revolution): the point on the
//! [geodesic segment](https://en.wikipedia.org/wiki/Geodesics_on_an_ellipsoid)
//! through a pair of positions that is closest to the given position.
//!
//! The interception point is also known as the point-to-line solution, the
//! foot of the perpendicular or, in navigation, the abeam position: the
//! position on a track where a point lies exactly port or starboard of it.
//!
//! ## Geodesic interception
//!
//! [Baselga and Martinez-Llario(2017)](https://www.researchgate.net/publication/321358300_Intersection_and_point-to-line_solutions_for_geodesics_on_the_ellipsoid)
//! solve the point-to-line problem by iteratively advancing a candidate
//! position along the geodesic by the along track distance of a spherical
//! triangle solution on the auxiliary sphere.
//!
//! [Karney(2023)](https://arxiv.org/abs/2308.00495) refines the iteration
//! with a correction derived from the reduced length and geodesic scale of
//! the geodesic between the candidate and the position, making it reliable
//! far from the geodesic.
//!
//! This library implements both iterations, selected by a `CorrectionMode`,
//! converging when the correction falls below a centimetre.
//!
//! ## Design
//!
//! The direct and inverse geodesic problems are solved by an implementation
//! of the `GeodesicSolver` trait, so the iteration is independent of the
//! geodesic solver. The `GeographicLibSolver` implements the trait with the
//! [geographiclib-rs](https://crates.io/crates/geographiclib-rs) port of
//! Charles Karney's [GeographicLib](https://geographiclib.sourceforge.io/).
//!
//! The static `WGS84_SOLVER` is a `GeographicLibSolver` for the WGS-84
//! ellipsoid, used by the `calculate_wgs84_*` functions.
//!
//! The library depends upon the following crates:
//!
//! - [angle-sc](https://crates.io/crates/angle-sc) - to define `Angle`,
//!   `Degrees` and `Radians` and perform trigonometric calculations;
//! - [unit-sphere](https://crates.io/crates/unit-sphere) - to define `LatLong`
//!   and the minimum significant great circle distance;
//! - [icao_units](https://crates.io/crates/icao-units) - to define `Metres`;
//! - [geographiclib-rs](https://crates.io/crates/geographiclib-rs) - to solve
//!   the direct and inverse geodesic problems.

pub mod interception;
pub mod solver;
pub mod waypoint;

pub use angle_sc::{Angle, Degrees, Radians};
pub use icao_units::si::Metres;
pub use unit_sphere::LatLong;

pub use interception::{
    calculate_interception_point, calculate_interception_point_with_observer, CorrectionMode,
    InterceptionError,
};
pub use solver::{GeodesicSolver, GeographicLibSolver, InverseSolution};
pub use waypoint::{calculate_fraction_position, calculate_route_fraction_position};

use once_cell::sync::Lazy;

/// A static instance of the `GeographicLibSolver` for the WGS-84 ellipsoid.
pub static WGS84_SOLVER: Lazy<GeographicLibSolver> = Lazy::new(GeographicLibSolver::wgs84);

/// Calculate the interception point of the geodesic through positions `a`
/// and `b` and the position `p` on the WGS-84 ellipsoid: the point on the
/// geodesic (or its extension) that is closest to `p`.
/// * `a`, `b` - the reference positions of the geodesic in geodetic coordinates.
/// * `p` - the position to project onto the geodesic.
/// * `mode` - the `CorrectionMode` to refine the candidate position with.
///
/// returns the interception point in geodetic coordinates and the number of
/// iterations performed, or an `InterceptionError`.
///
/// # Errors
///
/// Returns `InterceptionError::DegenerateSegment` if `a` and `b` coincide,
/// `InterceptionError::NonConvergence` if the correction distance does not
/// fall below `interception::CONVERGENCE_DISTANCE` within
/// `interception::MAX_ITERATIONS` or `InterceptionError::NumericalDomain` if
/// a correction distance is not a finite number.
///
/// # Examples
/// ```
/// use geodesic_interception::*;
/// use angle_sc::is_within_tolerance;
///
/// let istanbul = LatLong::new(Degrees(42.0), Degrees(29.0));
/// let washington = LatLong::new(Degrees(39.0), Degrees(-77.0));
/// let reykjavik = LatLong::new(Degrees(64.0), Degrees(-22.0));
///
/// let (position, iterations) = calculate_wgs84_interception_point(
///     &istanbul,
///     &washington,
///     &reykjavik,
///     CorrectionMode::Karney2023,
/// )
/// .unwrap();
///
/// // The expected latitude and longitude are from:
/// // <https://sourceforge.net/p/geographiclib/discussion/1026621/thread/21aaff9f/#8a93>
/// assert!(is_within_tolerance(54.92853149711691, position.lat().0, 1e-9));
/// assert!(is_within_tolerance(-21.93729106604878, position.lon().0, 1e-9));
/// println!("calculate_wgs84_interception_point iterations: {:?}", iterations);
/// ```
pub fn calculate_wgs84_interception_point(
    a: &LatLong,
    b: &LatLong,
    p: &LatLong,
    mode: CorrectionMode,
) -> Result<(LatLong, u32), InterceptionError> {
    interception::calculate_interception_point(a, b, p, mode, &*WGS84_SOLVER)
}

/// Calculate the position at `fraction` of the geodesic distance from
/// position `a` to position `b` on the WGS-84 ellipsoid.
///
/// Fractions outside of 0..=1 lie on the geodesic extended beyond the
/// positions.
/// * `a`, `b` - the positions in geodetic coordinates.
/// * `fraction` - the fraction of the distance from `a` to `b`.
///
/// returns the position at `fraction` along the geodesic in geodetic
/// coordinates.
///
/// # Examples
/// ```
/// use geodesic_interception::*;
/// use angle_sc::is_within_tolerance;
///
/// let a = LatLong::new(Degrees(52.0), Degrees(5.0));
/// let b = LatLong::new(Degrees(51.4), Degrees(6.0));
///
/// let position = calculate_wgs84_fraction_position(&a, &b, 0.25);
///
/// let total = WGS84_SOLVER.inverse(&a, &b, false).distance;
/// let s_ap = WGS84_SOLVER.inverse(&a, &position, false).distance;
/// assert!(is_within_tolerance(0.25 * total.0, s_ap.0, 1e-6));
/// ```
#[must_use]
pub fn calculate_wgs84_fraction_position(a: &LatLong, b: &LatLong, fraction: f64) -> LatLong {
    waypoint::calculate_fraction_position(a, b, fraction, &*WGS84_SOLVER)
}

/// Calculate the position at `fraction` of the sum of the geodesic segment
/// distances along a route of positions on the WGS-84 ellipsoid.
/// * `route` - the route positions in geodetic coordinates.
/// * `fraction` - the fraction of the sum of the segment distances.
///
/// returns the position at `fraction` along the route in geodetic
/// coordinates, or `None` if the route has fewer than two positions.
#[must_use]
pub fn calculate_wgs84_route_fraction_position(
    route: &[LatLong],
    fraction: f64,
) -> Option<LatLong> {
    waypoint::calculate_route_fraction_position(route, fraction, &*WGS84_SOLVER)
}
