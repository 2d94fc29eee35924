use std::{f32::consts::TAU, ops::RangeInclusive};

use crate::wave::WaveModel;

/// Maps an integer slider position onto radians: `value / 100 * 2PI`.
pub fn slider_to_radians(value: i32) -> f32 {
    value as f32 / 100.0 * TAU
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parameter {
    Phase,
    Amplitude,
    Period,
}

impl std::fmt::Display for Parameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", match self {
            Self::Phase => "Phase",
            Self::Amplitude => "Amplitude",
            Self::Period => "Period",
        })
    }
}

impl Parameter {
    pub const ALL: [Parameter; 3] = [Self::Phase, Self::Amplitude, Self::Period];

    /// Slider positions the host exposes for this parameter
    pub fn slider_range(&self) -> RangeInclusive<i32> {
        match self {
            Self::Phase => -50..=50,
            Self::Amplitude | Self::Period => 0..=100,
        }
    }

    pub fn initial_slider_value(&self) -> i32 {
        match self {
            Self::Phase => 0,
            Self::Amplitude | Self::Period => 50,
        }
    }

    pub fn set(&self, wave: &mut WaveModel, radians: f32) {
        match self {
            Self::Phase => wave.phase = radians,
            Self::Amplitude => wave.amplitude = radians,
            Self::Period => wave.period = radians,
        }
    }

    pub fn label(&self, radians: f32) -> String {
        format!("{self}: {radians:.2}")
    }
}

/// A slider position bound to one wave parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParameterControl {
    parameter: Parameter,
    value: i32,
}

impl ParameterControl {
    pub fn new(parameter: Parameter) -> Self {
        Self { parameter, value: parameter.initial_slider_value() }
    }

    pub fn parameter(&self) -> Parameter {
        self.parameter
    }

    pub fn value_mut(&mut self) -> &mut i32 {
        &mut self.value
    }

    pub fn radians(&self) -> f32 {
        slider_to_radians(self.value)
    }

    pub fn label(&self) -> String {
        self.parameter.label(self.radians())
    }

    /// Writes the scaled slider value into the matching model field.
    pub fn apply(&self, wave: &mut WaveModel) {
        self.parameter.set(wave, self.radians());
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::PI;

    use super::*;

    #[test]
    fn slider_extremes_map_to_radians() {
        assert_eq!(slider_to_radians(0), 0.0);
        assert!((slider_to_radians(-50) + PI).abs() < 1e-6);
        assert!((slider_to_radians(50) - PI).abs() < 1e-6);
        assert!((slider_to_radians(100) - TAU).abs() < 1e-6);
    }

    #[test]
    fn initial_controls_reproduce_default_wave() {
        let mut wave = WaveModel::new(9.0, 9.0, 9.0);
        for parameter in Parameter::ALL {
            ParameterControl::new(parameter).apply(&mut wave);
        }
        assert_eq!(wave, WaveModel::default());
    }

    #[test]
    fn apply_only_touches_its_own_field() {
        let mut wave = WaveModel::new(1.0, 2.0, 3.0);
        let mut control = ParameterControl::new(Parameter::Amplitude);
        *control.value_mut() = 25;
        control.apply(&mut wave);

        assert_eq!(wave.phase, 1.0);
        assert!((wave.amplitude - PI / 2.0).abs() < 1e-6);
        assert_eq!(wave.period, 3.0);
    }

    #[test]
    fn labels_use_two_decimals() {
        assert_eq!(ParameterControl::new(Parameter::Period).label(), "Period: 3.14");
        assert_eq!(ParameterControl::new(Parameter::Phase).label(), "Phase: 0.00");
    }

    #[test]
    fn phase_slider_is_symmetric() {
        assert_eq!(Parameter::Phase.slider_range(), -50..=50);
        assert_eq!(Parameter::Period.slider_range(), 0..=100);
    }
}
