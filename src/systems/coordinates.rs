use std::f32::consts::{FRAC_PI_2, PI};

use tracing::trace;

use crate::{
    components::point::{wrap_tau, CartesianPoint, PolarPoint},
    config::ConverterConfig,
};

pub struct CoordinatesSystem {}

impl CoordinatesSystem {
    pub fn cartesian_to_polar(cartesian: CartesianPoint) -> PolarPoint {
        CoordinatesSystem::cartesian_to_polar_with(&ConverterConfig::default(), cartesian)
    }

    /// Converts `(x, y, z)` into `(r, theta, phi)`.
    ///
    /// Total over finite inputs. Points within `clamp_to_zero` of the xy plane
    /// resolve to `theta = π/2`, and points within it of the z axis snap to a
    /// pole, so angular precision drops very close to the axis and the origin.
    pub fn cartesian_to_polar_with(
        config: &ConverterConfig,
        cartesian: CartesianPoint,
    ) -> PolarPoint {
        let CartesianPoint { x, y, z } = cartesian;

        // hypot keeps large finite inputs from overflowing to inf
        let rho = x.hypot(y);
        let r = rho.hypot(z);
        let theta = CoordinatesSystem::polar_angle(config.clamp_to_zero, x, y, z, rho);
        let phi = CoordinatesSystem::azimuth(x, y);

        PolarPoint { r, theta, phi }
    }

    pub fn polar_to_cartesian(polar: PolarPoint) -> CartesianPoint {
        let PolarPoint { r, theta, phi } = polar;
        let (sin_theta, cos_theta) = theta.sin_cos();
        let (sin_phi, cos_phi) = phi.sin_cos();

        CartesianPoint {
            x: r * sin_theta * cos_phi,
            y: r * sin_theta * sin_phi,
            z: r * cos_theta,
        }
    }

    fn polar_angle(clamp_to_zero: f32, x: f32, y: f32, z: f32, rho: f32) -> f32 {
        if z.abs() <= clamp_to_zero {
            trace!(x, y, z, "z clamped to zero, theta = pi/2");
            FRAC_PI_2
        } else if x.abs() <= clamp_to_zero && y.abs() <= clamp_to_zero {
            trace!(x, y, z, "point on the z axis, snapping theta to a pole");
            if z > 0.0 {
                0.0
            } else {
                PI
            }
        } else {
            rho.atan2(z)
        }
    }

    fn azimuth(x: f32, y: f32) -> f32 {
        // atan2 gives pi for (-0.0, 0.0), the z axis has no azimuth
        if x == 0.0 && y == 0.0 {
            return 0.0;
        }
        wrap_tau(y.atan2(x))
    }

    /// Geographic latitude/longitude in degrees onto the sphere of `radius`.
    pub fn polar_from_lat_lon(lat: f32, lon: f32, radius: f32) -> PolarPoint {
        PolarPoint {
            r: radius,
            theta: (90.0 - lat).to_radians(),
            phi: wrap_tau(lon.to_radians()),
        }
    }

    /// Returns `(lat, lon)` in degrees, longitude in `(-180, 180]`.
    pub fn lat_lon_from_polar(polar: PolarPoint) -> (f32, f32) {
        let lat = 90.0 - polar.theta_deg();
        let mut lon = polar.phi_deg();
        if lon > 180.0 {
            lon -= 360.0;
        }
        (lat, lon)
    }
}

pub fn cartesian_to_polar(cartesian: CartesianPoint) -> PolarPoint {
    CoordinatesSystem::cartesian_to_polar(cartesian)
}

pub fn polar_to_cartesian(polar: PolarPoint) -> CartesianPoint {
    CoordinatesSystem::polar_to_cartesian(polar)
}
