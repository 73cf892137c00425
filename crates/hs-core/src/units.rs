// hs-core/src/units.rs

use uom::si::f64::{
    Angle as UomAngle, Area as UomArea, DynamicViscosity as UomDynamicViscosity,
    Length as UomLength, Mass as UomMass, MassDensity as UomMassDensity, Pressure as UomPressure,
    SpecificHeatCapacity as UomSpecificHeatCapacity, ThermalConductivity as UomThermalConductivity,
    ThermodynamicTemperature as UomThermodynamicTemperature, Volume as UomVolume,
    VolumeRate as UomVolumeRate,
};

// Public canonical unit types (SI, f64)
pub type Angle = UomAngle;
pub type Area = UomArea;
pub type DynVisc = UomDynamicViscosity;
pub type Length = UomLength;
pub type Mass = UomMass;
pub type Density = UomMassDensity;
pub type Pressure = UomPressure;
pub type SpecHeat = UomSpecificHeatCapacity;
pub type Temperature = UomThermodynamicTemperature;
pub type Conductivity = UomThermalConductivity;
pub type Volume = UomVolume;
pub type VolumeRate = UomVolumeRate;

/// Thermal resistance in K/W. uom has no dedicated quantity for it.
pub type KelvinPerWatt = f64;

#[inline]
pub fn pa(v: f64) -> Pressure {
    use uom::si::pressure::pascal;
    Pressure::new::<pascal>(v)
}

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[inline]
pub fn mm(v: f64) -> Length {
    use uom::si::length::millimeter;
    Length::new::<millimeter>(v)
}

#[inline]
pub fn m2(v: f64) -> Area {
    use uom::si::area::square_meter;
    Area::new::<square_meter>(v)
}

#[inline]
pub fn m3(v: f64) -> Volume {
    use uom::si::volume::cubic_meter;
    Volume::new::<cubic_meter>(v)
}

#[inline]
pub fn m3ps(v: f64) -> VolumeRate {
    use uom::si::volume_rate::cubic_meter_per_second;
    VolumeRate::new::<cubic_meter_per_second>(v)
}

/// Volume flow given in m³/h.
#[inline]
pub fn m3ph(v: f64) -> VolumeRate {
    m3ps(v / constants::SECONDS_PER_HOUR)
}

#[inline]
pub fn deg_c(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::degree_celsius;
    Temperature::new::<degree_celsius>(v)
}

#[inline]
pub fn deg(v: f64) -> Angle {
    use uom::si::angle::degree;
    Angle::new::<degree>(v)
}

#[inline]
pub fn w_per_mk(v: f64) -> Conductivity {
    use uom::si::thermal_conductivity::watt_per_meter_kelvin;
    Conductivity::new::<watt_per_meter_kelvin>(v)
}

#[inline]
pub fn kg_per_m3(v: f64) -> Density {
    use uom::si::mass_density::kilogram_per_cubic_meter;
    Density::new::<kilogram_per_cubic_meter>(v)
}

#[inline]
pub fn pa_s(v: f64) -> DynVisc {
    use uom::si::dynamic_viscosity::pascal_second;
    DynVisc::new::<pascal_second>(v)
}

#[inline]
pub fn j_per_kgk(v: f64) -> SpecHeat {
    use uom::si::specific_heat_capacity::joule_per_kilogram_kelvin;
    SpecHeat::new::<joule_per_kilogram_kelvin>(v)
}

/// Celsius reading of a temperature.
#[inline]
pub fn to_deg_c(t: Temperature) -> f64 {
    use uom::si::thermodynamic_temperature::degree_celsius;
    t.get::<degree_celsius>()
}

/// m³/h reading of a volume flow.
#[inline]
pub fn to_m3ph(q: VolumeRate) -> f64 {
    q.value * constants::SECONDS_PER_HOUR
}

pub mod constants {
    pub const SECONDS_PER_HOUR: f64 = 3600.0;

    /// Cubic feet per minute in one m³/s.
    pub const CFM_PER_M3PS: f64 = 2118.8799;

    /// Pascal per inch of water column as used by fan datasheet digitizations.
    pub const PA_PER_INCH_H2O: f64 = 250.0;
}
