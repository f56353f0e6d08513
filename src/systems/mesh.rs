use std::f32::consts::PI;

use anyhow::{anyhow, ensure};
use tracing::debug;

use crate::components::{mesh::Vertex, point::PolarPoint};

use super::coordinates::CoordinatesSystem;

pub struct MeshSystem {}

impl MeshSystem {
    fn map(value: u32, start1: u32, stop1: u32, start2: f32, stop2: f32) -> f32 {
        start2
            + (stop2 - start2) * ((value as f32 - start1 as f32) / (stop1 as f32 - start1 as f32))
    }

    fn create_vertex(radius: f32, theta: f32, phi: f32) -> Vertex {
        let position = CoordinatesSystem::polar_to_cartesian(PolarPoint::new(radius, theta, phi));
        Vertex {
            position: position.into(),
        }
    }

    /// Latitude/longitude sphere with `total` bands in each direction, indexed
    /// as one triangle strip.
    pub fn generate_sphere_mesh(radius: f32, total: u32) -> anyhow::Result<(Vec<Vertex>, Vec<u32>)> {
        ensure!(total > 0, "sphere mesh needs at least one band");
        ensure!(
            radius.is_finite() && radius >= 0.0,
            "sphere radius must be finite and non-negative, got {radius}"
        );

        // every index must fit in u32, the largest is row * row - 1
        let row = total
            .checked_add(1)
            .filter(|row| row.checked_mul(*row).is_some())
            .ok_or_else(|| anyhow!("sphere mesh with {total} bands overflows u32 indices"))?;

        let mut vertices = Vec::with_capacity((row as usize) * (row as usize));
        for i in 0..=total {
            let theta = MeshSystem::map(i, 0, total, 0.0, PI);
            for j in 0..=total {
                let phi = MeshSystem::map(j, 0, total, 0.0, 2.0 * PI);
                vertices.push(MeshSystem::create_vertex(radius, theta, phi));
            }
        }

        let mut indices = Vec::new();
        for band in 0..total {
            let upper = band * row;
            let lower = upper + row;
            for j in 0..row {
                indices.extend([upper + j, lower + j]);
            }

            // zero-area pair joining this band's strip to the next one
            if band + 1 < total {
                indices.extend([lower + total, lower]);
            }
        }

        debug!(
            radius,
            total,
            vertices = vertices.len(),
            indices = indices.len(),
            "generated sphere mesh"
        );
        Ok((vertices, indices))
    }
}
