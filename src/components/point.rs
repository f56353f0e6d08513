use std::f32::consts::{PI, TAU};

use anyhow::bail;

use crate::systems::coordinates::CoordinatesSystem;

/// Wraps an angle in radians into `[0, 2π)`.
pub(crate) fn wrap_tau(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to TAU for tiny negative inputs, and keeps -0.0
    if wrapped >= TAU || wrapped == 0.0 {
        0.0
    } else {
        wrapped
    }
}

// Both points go straight into vertex/uniform buffers, so keep them Pod.
#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CartesianPoint {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// Spherical coordinates.
///
/// Convention:
/// r (0 to inf) = radius
/// theta (0 to pi) = (+z to -z)
/// phi (0 to 2pi) = (+x through +y back to +x)
#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PolarPoint {
    pub r: f32,
    pub theta: f32,
    pub phi: f32,
}

impl CartesianPoint {
    pub const ORIGIN: CartesianPoint = CartesianPoint {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn to_polar(self) -> PolarPoint {
        CoordinatesSystem::cartesian_to_polar(self)
    }
}

impl PolarPoint {
    pub const ORIGIN: PolarPoint = PolarPoint {
        r: 0.0,
        theta: 0.0,
        phi: 0.0,
    };

    pub fn new(r: f32, theta: f32, phi: f32) -> Self {
        Self { r, theta, phi }
    }

    pub fn to_cartesian(self) -> CartesianPoint {
        CoordinatesSystem::polar_to_cartesian(self)
    }

    pub fn theta_deg(&self) -> f32 {
        cgmath::Deg::from(cgmath::Rad(self.theta)).0
    }

    pub fn phi_deg(&self) -> f32 {
        cgmath::Deg::from(cgmath::Rad(self.phi)).0
    }

    /// Brings any triple into the canonical ranges while describing the same
    /// Cartesian position: `r >= 0`, `theta` in `[0, π]`, `phi` in `[0, 2π)`.
    pub fn normalized(self) -> Self {
        let PolarPoint {
            mut r,
            mut theta,
            mut phi,
        } = self;

        // negative radius points through the antipode
        if r < 0.0 {
            r = -r;
            theta = PI - theta;
            phi += PI;
        }

        theta = theta.rem_euclid(TAU);
        if theta > PI {
            theta = TAU - theta;
            phi += PI;
        }

        Self {
            r,
            theta,
            phi: wrap_tau(phi),
        }
    }
}

impl From<[f32; 3]> for CartesianPoint {
    fn from(value: [f32; 3]) -> Self {
        Self::new(value[0], value[1], value[2])
    }
}

impl From<CartesianPoint> for [f32; 3] {
    fn from(value: CartesianPoint) -> Self {
        [value.x, value.y, value.z]
    }
}

impl From<[f32; 3]> for PolarPoint {
    fn from(value: [f32; 3]) -> Self {
        Self::new(value[0], value[1], value[2])
    }
}

impl From<PolarPoint> for [f32; 3] {
    fn from(value: PolarPoint) -> Self {
        [value.r, value.theta, value.phi]
    }
}

impl From<cgmath::Vector3<f32>> for CartesianPoint {
    fn from(value: cgmath::Vector3<f32>) -> Self {
        Self::new(value.x, value.y, value.z)
    }
}

impl From<CartesianPoint> for cgmath::Vector3<f32> {
    fn from(value: CartesianPoint) -> Self {
        cgmath::Vector3::new(value.x, value.y, value.z)
    }
}

impl From<cgmath::Point3<f32>> for CartesianPoint {
    fn from(value: cgmath::Point3<f32>) -> Self {
        Self::new(value.x, value.y, value.z)
    }
}

impl From<CartesianPoint> for cgmath::Point3<f32> {
    fn from(value: CartesianPoint) -> Self {
        cgmath::Point3::new(value.x, value.y, value.z)
    }
}

impl From<cgmath::Vector3<f32>> for PolarPoint {
    fn from(value: cgmath::Vector3<f32>) -> Self {
        Self::new(value.x, value.y, value.z)
    }
}

impl From<PolarPoint> for cgmath::Vector3<f32> {
    fn from(value: PolarPoint) -> Self {
        cgmath::Vector3::new(value.r, value.theta, value.phi)
    }
}

impl TryFrom<&[f32]> for CartesianPoint {
    type Error = anyhow::Error;

    fn try_from(value: &[f32]) -> Result<Self, Self::Error> {
        match value {
            [x, y, z] => Ok(Self::new(*x, *y, *z)),
            _ => bail!(
                "expected 3 cartesian components (x, y, z), got {}",
                value.len()
            ),
        }
    }
}

impl TryFrom<&[f32]> for PolarPoint {
    type Error = anyhow::Error;

    fn try_from(value: &[f32]) -> Result<Self, Self::Error> {
        match value {
            [r, theta, phi] => Ok(Self::new(*r, *theta, *phi)),
            _ => bail!(
                "expected 3 polar components (r, theta, phi), got {}",
                value.len()
            ),
        }
    }
}
