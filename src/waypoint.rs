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

//! The `waypoint` module contains functions for calculating positions at a
//! fraction of the distance along a geodesic segment or a route of geodesic
//! segments.

use crate::solver::GeodesicSolver;
use icao_units::si::Metres;
use unit_sphere::LatLong;

/// Calculate the position at `fraction` of the geodesic distance from
/// position `a` to position `b`.
///
/// Fractions outside of 0..=1 lie on the geodesic extended beyond the
/// positions.
/// * `a`, `b` - the positions in geodetic coordinates.
/// * `fraction` - the fraction of the distance from `a` to `b`.
/// * `solver` - the `GeodesicSolver` of the reference ellipsoid.
///
/// returns the position at `fraction` along the geodesic in geodetic
/// coordinates.
#[must_use]
pub fn calculate_fraction_position<S: GeodesicSolver>(
    a: &LatLong,
    b: &LatLong,
    fraction: f64,
    solver: &S,
) -> LatLong {
    let ab = solver.inverse(a, b, false);
    solver.direct(a, ab.azimuth, Metres(fraction * ab.distance.0))
}

/// Calculate the position at `fraction` of the sum of the geodesic segment
/// distances along a route of positions.
///
/// Fractions outside of 0..=1 lie on the first or last geodesic segment
/// extended beyond the route.
/// * `route` - the route positions in geodetic coordinates.
/// * `fraction` - the fraction of the sum of the segment distances.
/// * `solver` - the `GeodesicSolver` of the reference ellipsoid.
///
/// returns the position at `fraction` along the route in geodetic
/// coordinates, or `None` if the route has fewer than two positions.
#[must_use]
pub fn calculate_route_fraction_position<S: GeodesicSolver>(
    route: &[LatLong],
    fraction: f64,
    solver: &S,
) -> Option<LatLong> {
    if route.len() < 2 {
        return None;
    }

    let mut distances = Vec::with_capacity(route.len() - 1);
    for pair in route.windows(2) {
        distances.push(solver.inverse(&pair[0], &pair[1], false).distance.0);
    }
    let target = fraction * distances.iter().sum::<f64>();

    // find the segment containing the target distance, clamped to the
    // last segment so fractions of one and above extend along it
    let mut index = 0;
    let mut sum = 0.0;
    for (i, distance) in distances.iter().enumerate() {
        sum += distance;
        index = i;
        if target < sum {
            break;
        }
    }

    let segment_start = sum - distances[index];
    let ab = solver.inverse(&route[index], &route[index + 1], false);
    Some(solver.direct(&route[index], ab.azimuth, Metres(target - segment_start)))
}
