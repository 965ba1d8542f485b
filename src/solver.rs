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

//! The `solver` module contains the `GeodesicSolver` trait: the contract for
//! solving the [direct and inverse problems](https://en.wikipedia.org/wiki/Geodesics_on_an_ellipsoid#Solution_of_the_direct_and_inverse_problems)
//! of geodesy on an ellipsoid of revolution.
//!
//! The trait is implemented by `GeographicLibSolver`, a wrapper around the
//! [geographiclib-rs](https://crates.io/crates/geographiclib-rs) port of
//! Charles Karney's [GeographicLib](https://geographiclib.sourceforge.io/),
//! which solves both problems with the algorithms from
//! [Karney(2013)](https://link.springer.com/article/10.1007/s00190-012-0578-z).

use angle_sc::Degrees;
use geographiclib_rs::{DirectGeodesic, Geodesic, InverseGeodesic};
use icao_units::si::Metres;
use unit_sphere::LatLong;

pub mod wgs84 {
    //! The wgs84 module contains the WGS 84 geoid primary parameters from the ICAO
    //! [WGS 84 Implementation Manual Version 2.4](https://www.icao.int/safety/pbn/Documentation/EUROCONTROL/Eurocontrol%20WGS%2084%20Implementation%20Manual.pdf)
    //! Chapter 3, page 14.

    use icao_units::si::Metres;

    /// The WGS 84 Semimajor axis measured in metres.
    /// This is the radius at the equator.
    pub const A: Metres = Metres(6_378_137.0);

    /// The WGS 84 flattening, a ratio.
    /// This is the flattening of the ellipsoid at the poles.
    pub const F: f64 = 1.0 / 298.257_223_563;
}

/// The solution of the inverse problem between a pair of positions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InverseSolution {
    /// The length of the geodesic segment between the positions, in metres.
    pub distance: Metres,
    /// The azimuth of the geodesic segment at the first position.
    pub azimuth: Degrees,
    /// The reduced length of the geodesic segment, if requested.
    pub reduced_length: Option<Metres>,
    /// The geodesic scale at the second position relative to the first,
    /// if requested.
    pub geodesic_scale: Option<f64>,
}

/// The contract for solving the direct and inverse geodesic problems on a
/// fixed ellipsoid of revolution.
///
/// Both operations are pure functions of their arguments and the ellipsoid
/// parameters, so implementations may be called from multiple threads.
pub trait GeodesicSolver {
    /// Solve the inverse problem: calculate the geodesic distance and azimuth
    /// between a pair of positions.
    ///
    /// Note: the solution shall be defined for antipodal and nearly antipodal
    /// positions, although it may have reduced precision there.
    /// * `a`, `b` - the positions in geodetic coordinates.
    /// * `want_extras` - whether to also calculate the reduced length and
    ///   geodesic scale of the geodesic segment.
    ///
    /// returns the `InverseSolution` of the geodesic segment from `a` to `b`.
    fn inverse(&self, a: &LatLong, b: &LatLong, want_extras: bool) -> InverseSolution;

    /// Solve the direct problem: calculate the position at `distance` along
    /// the geodesic from position `a` at `azimuth`.
    /// * `a` - the start position in geodetic coordinates.
    /// * `azimuth` - the azimuth of the geodesic at `a`.
    /// * `distance` - the distance along the geodesic in metres, negative
    ///   to travel in the reverse direction.
    ///
    /// returns the position in geodetic coordinates.
    fn direct(&self, a: &LatLong, azimuth: Degrees, distance: Metres) -> LatLong;

    /// The equatorial radius (Semimajor axis) of the ellipsoid, used as the
    /// radius of the auxiliary sphere.
    fn equatorial_radius(&self) -> Metres;
}

/// A `GeodesicSolver` implemented by the `geographiclib-rs` `Geodesic`.
#[derive(Clone, Debug, PartialEq)]
pub struct GeographicLibSolver {
    /// The underlying `geographiclib-rs` solver.
    geod: Geodesic,
    /// The Semimajor axis of the ellipsoid.
    a: Metres,
    /// The flattening of the ellipsoid, a ratio.
    f: f64,
}

impl GeographicLibSolver {
    /// Constructor.
    /// * `a` - the Semimajor axis of the ellipsoid.
    /// * `f` - the flattening of the ellipsoid, a ratio.
    #[must_use]
    pub fn new(a: Metres, f: f64) -> Self {
        Self {
            geod: Geodesic::new(a.0, f),
            a,
            f,
        }
    }

    /// Construct a `GeographicLibSolver` with the WGS 84 parameters.
    #[must_use]
    pub fn wgs84() -> Self {
        Self::new(wgs84::A, wgs84::F)
    }

    /// The Semimajor axis of the ellipsoid.
    #[must_use]
    pub const fn a(&self) -> Metres {
        self.a
    }

    /// The flattening of the ellipsoid, a ratio.
    #[must_use]
    pub const fn f(&self) -> f64 {
        self.f
    }
}

impl GeodesicSolver for GeographicLibSolver {
    fn inverse(&self, a: &LatLong, b: &LatLong, want_extras: bool) -> InverseSolution {
        if want_extras {
            let (s12, azi1, _, m12, big_m12, _, _) =
                self.geod
                    .inverse(a.lat().0, a.lon().0, b.lat().0, b.lon().0);
            InverseSolution {
                distance: Metres(s12),
                azimuth: Degrees(azi1),
                reduced_length: Some(Metres(m12)),
                geodesic_scale: Some(big_m12),
            }
        } else {
            let (s12, azi1, _, _) = self.geod.inverse(a.lat().0, a.lon().0, b.lat().0, b.lon().0);
            InverseSolution {
                distance: Metres(s12),
                azimuth: Degrees(azi1),
                reduced_length: None,
                geodesic_scale: None,
            }
        }
    }

    fn direct(&self, a: &LatLong, azimuth: Degrees, distance: Metres) -> LatLong {
        let (lat2, lon2) = self.geod.direct(a.lat().0, a.lon().0, azimuth.0, distance.0);
        LatLong::new(Degrees(lat2), Degrees(lon2))
    }

    fn equatorial_radius(&self) -> Metres {
        self.a
    }
}
