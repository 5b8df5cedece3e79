//! Typed value records for one analysis call.
//!
//! Immutable inputs carrying uom quantities; derived quantities delegate to
//! the raw-scalar formulas in [`crate::geometry`]. Nothing here has identity
//! or lifecycle beyond a single computation.

use crate::error::PhysicsResult;
use crate::geometry;
use ts_core::units::{m2, Area, Conductivity, KinViscosity, Length, Ratio, Velocity};

/// Processor die footprint.
#[derive(Debug, Clone, Copy)]
pub struct Die {
    pub length: Length,
    pub width: Length,
}

impl Die {
    pub fn area(&self) -> PhysicsResult<Area> {
        geometry::die_area(self.length.value, self.width.value).map(m2)
    }
}

/// Finned heat-sink geometry.
#[derive(Debug, Clone, Copy)]
pub struct HeatSinkGeometry {
    pub length: Length,
    pub width: Length,
    pub base_thickness: Length,
    pub fin_thickness: Length,
    pub fin_height: Length,
    pub fin_count: u32,
}

impl HeatSinkGeometry {
    /// Fin-to-fin gap, the channel characteristic length.
    pub fn fin_spacing(&self) -> PhysicsResult<Length> {
        geometry::fin_spacing(self.width.value, self.fin_count, self.fin_thickness.value)
            .map(ts_core::units::m)
    }

    /// Total wetted fin area (both faces of every fin).
    pub fn convection_area(&self) -> PhysicsResult<Area> {
        geometry::total_convection_area(self.fin_height.value, self.length.value, self.fin_count)
            .map(m2)
    }
}

/// Thermal-interface-material layer between die and sink base.
#[derive(Debug, Clone, Copy)]
pub struct TimLayer {
    pub thickness: Length,
    pub conductivity: Conductivity,
}

/// Forced-air stream properties.
#[derive(Debug, Clone, Copy)]
pub struct AirProperties {
    pub velocity: Velocity,
    pub conductivity: Conductivity,
    pub kinematic_viscosity: KinViscosity,
    pub prandtl: Ratio,
}
