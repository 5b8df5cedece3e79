//! Full analysis pipeline: geometry -> resistances -> junction temperature.

use crate::convection::{self, ChannelFlow};
use crate::error::PhysicsResult;
use crate::model::{AirProperties, Die, HeatSinkGeometry, TimLayer};
use crate::{conduction, network, solver, tim};
use ts_core::units::{as_celsius, Conductivity, Power, Temperature};

/// One complete analysis request, fully typed.
///
/// Constructed fresh per call, consumed by [`ThermalAnalysis::solve`], and
/// discarded; there is no cross-call state anywhere in the pipeline.
#[derive(Debug, Clone, Copy)]
pub struct ThermalAnalysis {
    pub die: Die,
    pub heat_sink: HeatSinkGeometry,
    /// Heat-sink material conductivity (base plate and fins).
    pub sink_conductivity: Conductivity,
    pub tim: TimLayer,
    pub air: AirProperties,
    /// Power dissipated by the processor.
    pub power: Power,
    /// Ambient air temperature (sign unconstrained).
    pub ambient: Temperature,
    /// Datasheet junction-to-case resistance (°C/W, may be zero).
    pub junction_to_case_c_per_w: f64,
}

/// The five resistances of the network (°C/W each).
///
/// Additive by construction: `heat_sink = conduction + convection` and
/// `total = junction_to_case + tim + heat_sink`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResistanceBreakdown {
    pub tim_c_per_w: f64,
    pub conduction_c_per_w: f64,
    pub convection_c_per_w: f64,
    pub heat_sink_c_per_w: f64,
    pub total_c_per_w: f64,
}

/// Output of one analysis call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalysisResult {
    pub resistances: ResistanceBreakdown,
    pub junction_temperature_c: f64,
}

impl ThermalAnalysis {
    /// Run the resistance chain and the final temperature calculation.
    pub fn solve(&self) -> PhysicsResult<AnalysisResult> {
        let die_area = self.die.area()?.value;
        let fin_spacing = self.heat_sink.fin_spacing()?.value;
        let convection_area = self.heat_sink.convection_area()?.value;

        let r_tim = tim::tim_resistance(
            self.tim.thickness.value,
            self.tim.conductivity.value,
            die_area,
        )?;

        let r_conduction = conduction::conduction_resistance(
            self.heat_sink.base_thickness.value,
            self.sink_conductivity.value,
            die_area,
        )?;

        let r_convection = convection::convection_resistance(&ChannelFlow {
            air_velocity: self.air.velocity.value,
            fin_spacing,
            fin_height: self.heat_sink.fin_height.value,
            total_convection_area: convection_area,
            air_conductivity: self.air.conductivity.value,
            kinematic_viscosity: self.air.kinematic_viscosity.value,
            prandtl: self.air.prandtl.value,
            fin_thickness: self.heat_sink.fin_thickness.value,
            fin_conductivity: self.sink_conductivity.value,
        })?;

        let r_heat_sink = network::heat_sink_resistance(r_conduction, r_convection)?;
        let r_total =
            network::total_resistance(self.junction_to_case_c_per_w, r_tim, r_heat_sink)?;

        let junction_temperature_c = solver::junction_temperature(
            as_celsius(self.ambient),
            self.power.value,
            r_total,
        )?;

        Ok(AnalysisResult {
            resistances: ResistanceBreakdown {
                tim_c_per_w: r_tim,
                conduction_c_per_w: r_conduction,
                convection_c_per_w: r_convection,
                heat_sink_c_per_w: r_heat_sink,
                total_c_per_w: r_total,
            },
            junction_temperature_c,
        })
    }
}
