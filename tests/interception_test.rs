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

// extern crate we're testing, same as any other code would do.
extern crate geodesic_interception;

use angle_sc::{is_within_tolerance, Angle, Degrees};
use geodesic_interception::{
    calculate_interception_point_with_observer, calculate_wgs84_interception_point, interception,
    CorrectionMode, GeodesicSolver, LatLong, Metres, WGS84_SOLVER,
};

const MODES: [CorrectionMode; 2] = [CorrectionMode::Classical, CorrectionMode::Karney2023];

/// The geodesics to the position and to `b` are at right angles at the
/// interception point, whichever side of the geodesic `p` lies on and
/// whether or not the interception point lies beyond `b`.
fn assert_perpendicular(position: &LatLong, b: &LatLong, p: &LatLong) {
    let azimuth_b = WGS84_SOLVER.inverse(position, b, false).azimuth;
    let azimuth_p = WGS84_SOLVER.inverse(position, p, false).azimuth;
    let delta = Angle::from(Degrees(azimuth_p.0 - azimuth_b.0));
    assert!(libm::fabs(delta.cos().0) < 1e-5);
}

#[test]
fn test_interception_point_netherlands() {
    // The point-to-line example from Baselga and Martinez-Llario(2017)
    let a = LatLong::new(Degrees(52.0), Degrees(5.0));
    let b = LatLong::new(Degrees(51.4), Degrees(6.0));
    let p = LatLong::new(Degrees(52.0), Degrees(5.5));

    let mut positions = Vec::new();
    for mode in MODES {
        let (position, iterations) = calculate_wgs84_interception_point(&a, &b, &p, mode).unwrap();
        assert!(51.8 < position.lat().0 && position.lat().0 < 51.9);
        assert!(5.2 < position.lon().0 && position.lon().0 < 5.3);
        assert!(iterations <= interception::MAX_ITERATIONS);
        assert_perpendicular(&position, &b, &p);
        positions.push(position);
    }

    // both modes stop within a centimetre of the interception point
    let difference = WGS84_SOLVER
        .inverse(&positions[0], &positions[1], false)
        .distance;
    assert!(difference.0 < 0.05);
}

#[test]
fn test_interception_point_reykjavik() {
    let istanbul = LatLong::new(Degrees(42.0), Degrees(29.0));
    let washington = LatLong::new(Degrees(39.0), Degrees(-77.0));
    let reykjavik = LatLong::new(Degrees(64.0), Degrees(-22.0));

    for mode in MODES {
        let (position, iterations) =
            calculate_wgs84_interception_point(&istanbul, &washington, &reykjavik, mode).unwrap();

        // Karney's latitude and longitude from Final result at:
        // https://sourceforge.net/p/geographiclib/discussion/1026621/thread/21aaff9f/#8a93
        // Karney2023 recovers the position to full precision, Classical to
        // its centimetre convergence threshold
        let tolerance = match mode {
            CorrectionMode::Karney2023 => 1e-9,
            CorrectionMode::Classical => 1e-6,
        };
        assert!(is_within_tolerance(54.92853149711691, position.lat().0, tolerance));
        assert!(is_within_tolerance(-21.93729106604878, position.lon().0, tolerance));
        assert!(iterations <= interception::MAX_ITERATIONS);
        assert_perpendicular(&position, &washington, &reykjavik);
    }
}

#[test]
fn test_interception_point_long_geodesic() {
    let istanbul = LatLong::new(Degrees(42.0), Degrees(29.0));
    let andes = LatLong::new(Degrees(-35.0), Degrees(-70.0));
    let reykjavik = LatLong::new(Degrees(64.0), Degrees(-22.0));

    let mut positions = Vec::new();
    for mode in MODES {
        let (position, iterations) =
            calculate_wgs84_interception_point(&istanbul, &andes, &reykjavik, mode).unwrap();
        assert!(iterations <= interception::MAX_ITERATIONS);
        assert_perpendicular(&position, &andes, &reykjavik);
        positions.push(position);
    }

    let difference = WGS84_SOLVER
        .inverse(&positions[0], &positions[1], false)
        .distance;
    assert!(difference.0 < 0.05);
}

#[test]
fn test_interception_point_beyond_segment() {
    let a = LatLong::new(Degrees(52.0), Degrees(5.0));
    let b = LatLong::new(Degrees(51.4), Degrees(6.0));
    let p = LatLong::new(Degrees(51.0), Degrees(7.0));

    let s_ab = WGS84_SOLVER.inverse(&a, &b, false).distance;
    for mode in MODES {
        let (position, _iterations) = calculate_wgs84_interception_point(&a, &b, &p, mode).unwrap();

        // the interception point lies on the geodesic extended beyond b
        let s_ax = WGS84_SOLVER.inverse(&a, &position, false).distance;
        assert!(s_ab.0 < s_ax.0);
        assert_perpendicular(&position, &b, &p);
    }
}

#[test]
fn test_interception_point_idempotent() {
    let istanbul = LatLong::new(Degrees(42.0), Degrees(29.0));
    let washington = LatLong::new(Degrees(39.0), Degrees(-77.0));
    let reykjavik = LatLong::new(Degrees(64.0), Degrees(-22.0));

    let (first, _) = calculate_wgs84_interception_point(
        &istanbul,
        &washington,
        &reykjavik,
        CorrectionMode::Karney2023,
    )
    .unwrap();

    // projecting the interception point finds the same position again
    let (second, iterations) = calculate_wgs84_interception_point(
        &istanbul,
        &washington,
        &first,
        CorrectionMode::Karney2023,
    )
    .unwrap();
    let difference = WGS84_SOLVER.inverse(&first, &second, false).distance;
    assert!(difference.0 < 0.05);
    assert!(iterations <= 3);
}

#[test]
fn test_interception_point_near_antipodal() {
    let istanbul = LatLong::new(Degrees(42.0), Degrees(29.0));
    let washington = LatLong::new(Degrees(39.0), Degrees(-77.0));
    // close to the antipode of istanbul, so close to the geodesic
    let p = LatLong::new(Degrees(-42.0), Degrees(-151.0));

    for mode in MODES {
        match calculate_wgs84_interception_point(&istanbul, &washington, &p, mode) {
            Ok((position, iterations)) => {
                assert!(position.lat().0.is_finite());
                assert!(position.lon().0.is_finite());
                assert!(iterations <= interception::MAX_ITERATIONS);
            }
            Err(error) => println!("near antipodal {:?}: {:?}", mode, error),
        }
    }
}

#[test]
fn test_interception_observer_corrections() {
    let a = LatLong::new(Degrees(52.0), Degrees(5.0));
    let b = LatLong::new(Degrees(51.4), Degrees(6.0));
    let p = LatLong::new(Degrees(52.0), Degrees(5.5));

    let mut corrections = Vec::new();
    let (_, iterations) = calculate_interception_point_with_observer(
        &a,
        &b,
        &p,
        CorrectionMode::Classical,
        &*WGS84_SOLVER,
        |position: &LatLong, correction: Metres| {
            corrections.push((position.lat().0, position.lon().0, correction.0));
        },
    )
    .unwrap();

    assert_eq!(iterations as usize, corrections.len());

    // the first correction does most of the work and the final correction is
    // below the convergence threshold
    let first = corrections.first().unwrap();
    let last = corrections.last().unwrap();
    assert!(libm::fabs(last.2) < interception::CONVERGENCE_DISTANCE.0);
    assert!(libm::fabs(last.2) < libm::fabs(first.2));
}
