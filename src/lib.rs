pub mod components;
pub mod config;
pub mod systems;

pub use components::point::{CartesianPoint, PolarPoint};
pub use config::{ConverterConfig, CLAMP_TO_ZERO};
pub use systems::{
    basis::PolarBasis,
    coordinates::{cartesian_to_polar, polar_to_cartesian, CoordinatesSystem},
    mesh::MeshSystem,
};

/// Installs the global fmt subscriber with UTC timestamps.
///
/// Errors if a global subscriber is already set.
pub fn init_tracing() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to install tracing subscriber: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_reports_an_error() {
        // another test in this binary may have installed the subscriber already
        init_tracing().ok();
        assert!(init_tracing().is_err());
        // conversions still work with the subscriber installed
        assert_eq!(cartesian_to_polar(CartesianPoint::ORIGIN).r, 0.0);
    }
}
