// ts-core/src/units.rs

use uom::si::f64::{
    Area as UomArea, DiffusionCoefficient as UomDiffusionCoefficient, Length as UomLength,
    Power as UomPower, Ratio as UomRatio, ThermalConductivity as UomThermalConductivity,
    ThermodynamicTemperature as UomThermodynamicTemperature, Velocity as UomVelocity,
};

// Public canonical unit types (SI, f64)
pub type Area = UomArea;
pub type Conductivity = UomThermalConductivity;
pub type KinViscosity = UomDiffusionCoefficient;
pub type Length = UomLength;
pub type Power = UomPower;
pub type Ratio = UomRatio;
pub type Temperature = UomThermodynamicTemperature;
pub type Velocity = UomVelocity;

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[inline]
pub fn m2(v: f64) -> Area {
    use uom::si::area::square_meter;
    Area::new::<square_meter>(v)
}

#[inline]
pub fn mps(v: f64) -> Velocity {
    use uom::si::velocity::meter_per_second;
    Velocity::new::<meter_per_second>(v)
}

#[inline]
pub fn m2ps(v: f64) -> KinViscosity {
    use uom::si::diffusion_coefficient::square_meter_per_second;
    KinViscosity::new::<square_meter_per_second>(v)
}

#[inline]
pub fn wpmk(v: f64) -> Conductivity {
    use uom::si::thermal_conductivity::watt_per_meter_kelvin;
    Conductivity::new::<watt_per_meter_kelvin>(v)
}

#[inline]
pub fn w(v: f64) -> Power {
    use uom::si::power::watt;
    Power::new::<watt>(v)
}

#[inline]
pub fn celsius(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::degree_celsius;
    Temperature::new::<degree_celsius>(v)
}

#[inline]
pub fn unitless(v: f64) -> Ratio {
    use uom::si::ratio::ratio;
    Ratio::new::<ratio>(v)
}

/// Temperature back out in degrees Celsius (the model's reporting unit).
#[inline]
pub fn as_celsius(t: Temperature) -> f64 {
    use uom::si::thermodynamic_temperature::degree_celsius;
    t.get::<degree_celsius>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_smoke() {
        let _l = m(0.09);
        let _a = m2(0.002);
        let _v = mps(1.0);
        let _nu = m2ps(1.57e-5);
        let _k = wpmk(167.0);
        let _q = w(150.0);
        let _r = unitless(0.71);
    }

    #[test]
    fn celsius_round_trip() {
        let t = celsius(25.0);
        assert!((as_celsius(t) - 25.0).abs() < 1e-9);
        // Sub-zero ambients are legitimate inputs
        let t = celsius(-10.0);
        assert!((as_celsius(t) + 10.0).abs() < 1e-9);
    }

    #[test]
    fn si_base_values() {
        // Raw `.value` accessors are SI base units; the formula layer relies on this.
        assert!((m(2.0).value - 2.0).abs() < 1e-15);
        assert!((mps(1.5).value - 1.5).abs() < 1e-15);
        assert!((m2ps(1.57e-5).value - 1.57e-5).abs() < 1e-18);
    }
}
