use cgmath::{InnerSpace, Matrix, Matrix3, Vector3};

use crate::components::point::PolarPoint;

/// Orthonormal unit vectors (r̂, θ̂, φ̂) at a direction on the sphere.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PolarBasis {
    pub r_hat: Vector3<f32>,
    pub theta_hat: Vector3<f32>,
    pub phi_hat: Vector3<f32>,
}

impl PolarBasis {
    pub fn at(theta: f32, phi: f32) -> Self {
        let (sin_theta, cos_theta) = theta.sin_cos();
        let (sin_phi, cos_phi) = phi.sin_cos();

        Self {
            r_hat: Vector3::new(sin_theta * cos_phi, sin_theta * sin_phi, cos_theta),
            theta_hat: Vector3::new(cos_theta * cos_phi, cos_theta * sin_phi, -sin_theta),
            phi_hat: Vector3::new(-sin_phi, cos_phi, 0.0),
        }
    }

    pub fn from_point(polar: &PolarPoint) -> Self {
        PolarBasis::at(polar.theta, polar.phi)
    }

    /// Columns are r̂, θ̂, φ̂: maps (v_r, v_θ, v_φ) onto (v_x, v_y, v_z).
    pub fn to_cartesian_matrix(&self) -> Matrix3<f32> {
        Matrix3::from_cols(self.r_hat, self.theta_hat, self.phi_hat)
    }

    // orthonormal, so the inverse is the transpose
    pub fn to_polar_matrix(&self) -> Matrix3<f32> {
        self.to_cartesian_matrix().transpose()
    }

    pub fn vector_to_polar(&self, v: Vector3<f32>) -> Vector3<f32> {
        Vector3::new(v.dot(self.r_hat), v.dot(self.theta_hat), v.dot(self.phi_hat))
    }

    pub fn vector_to_cartesian(&self, v: Vector3<f32>) -> Vector3<f32> {
        self.to_cartesian_matrix() * v
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::systems::coordinates::CoordinatesSystem;
    use std::f32::consts::{FRAC_PI_2, PI};

    fn assert_vec_close(a: Vector3<f32>, b: Vector3<f32>) {
        assert!((a - b).magnitude() < 1e-5, "{a:?} != {b:?}");
    }

    #[test]
    fn equator_on_x_axis() {
        let basis = PolarBasis::at(FRAC_PI_2, 0.0);
        assert_vec_close(basis.r_hat, Vector3::unit_x());
        assert_vec_close(basis.theta_hat, -Vector3::unit_z());
        assert_vec_close(basis.phi_hat, Vector3::unit_y());
    }

    #[test]
    fn orthonormal_and_right_handed() {
        for &(theta, phi) in &[(0.3, 0.1), (1.2, 2.5), (2.9, 4.0), (FRAC_PI_2, PI)] {
            let basis = PolarBasis::at(theta, phi);
            assert!((basis.r_hat.magnitude() - 1.0).abs() < 1e-5);
            assert!((basis.theta_hat.magnitude() - 1.0).abs() < 1e-5);
            assert!((basis.phi_hat.magnitude() - 1.0).abs() < 1e-5);
            assert!(basis.r_hat.dot(basis.theta_hat).abs() < 1e-5);
            assert!(basis.r_hat.dot(basis.phi_hat).abs() < 1e-5);
            assert!(basis.theta_hat.dot(basis.phi_hat).abs() < 1e-5);
            assert_vec_close(basis.r_hat.cross(basis.theta_hat), basis.phi_hat);
        }
    }

    #[test]
    fn r_hat_points_at_the_position() {
        let p = PolarPoint::new(3.0, 0.7, 5.1);
        let position: Vector3<f32> = CoordinatesSystem::polar_to_cartesian(p).into();
        assert_vec_close(PolarBasis::from_point(&p).r_hat * p.r, position);
    }

    #[test]
    fn vector_components_round_trip() {
        let basis = PolarBasis::at(1.1, 3.3);
        let v = Vector3::new(0.5, -2.0, 1.25);

        let polar = basis.vector_to_polar(v);
        assert_vec_close(polar, basis.to_polar_matrix() * v);
        assert_vec_close(basis.vector_to_cartesian(polar), v);

        // a purely radial vector has no angular components
        let radial = basis.vector_to_polar(basis.r_hat * 4.0);
        assert_vec_close(radial, Vector3::new(4.0, 0.0, 0.0));
    }
}
