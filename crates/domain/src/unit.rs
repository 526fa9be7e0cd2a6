use std::fmt;

use crate::Settings;

const KG_PER_LB: f64 = 0.453_592;
const CM_PER_IN: f64 = 2.54;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum WeightUnit {
    #[default]
    Lbs,
    Kg,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum MeasurementUnit {
    #[default]
    Imperial,
    Metric,
}

/// Unit shown next to a converted value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Lbs,
    Kg,
    In,
    Cm,
    Percent,
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Unit::Lbs => "lbs",
                Unit::Kg => "kg",
                Unit::In => "in",
                Unit::Cm => "cm",
                Unit::Percent => "%",
            }
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quantity {
    pub value: f64,
    pub unit: Unit,
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.unit == Unit::Percent {
            write!(f, "{}%", self.value)
        } else {
            write!(f, "{} {}", self.value, self.unit)
        }
    }
}

#[must_use]
pub fn convert_weight(pounds: f64, unit: WeightUnit) -> Quantity {
    match unit {
        WeightUnit::Kg => Quantity {
            value: round_to_tenth(pounds * KG_PER_LB),
            unit: Unit::Kg,
        },
        WeightUnit::Lbs => Quantity {
            value: pounds,
            unit: Unit::Lbs,
        },
    }
}

#[must_use]
pub fn convert_weight_to_storage(value: f64, unit: WeightUnit) -> f64 {
    match unit {
        WeightUnit::Kg => round_to_tenth(value / KG_PER_LB),
        WeightUnit::Lbs => value,
    }
}

#[must_use]
pub fn convert_length(inches: f64, unit: MeasurementUnit) -> Quantity {
    match unit {
        MeasurementUnit::Metric => Quantity {
            value: round_to_tenth(inches * CM_PER_IN),
            unit: Unit::Cm,
        },
        MeasurementUnit::Imperial => Quantity {
            value: inches,
            unit: Unit::In,
        },
    }
}

#[must_use]
pub fn convert_length_to_storage(value: f64, unit: MeasurementUnit) -> f64 {
    match unit {
        MeasurementUnit::Metric => round_to_tenth(value / CM_PER_IN),
        MeasurementUnit::Imperial => value,
    }
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Conversions bound to the unit preferences of one profile.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct UnitConverter {
    pub weight_unit: WeightUnit,
    pub measurement_unit: MeasurementUnit,
}

impl UnitConverter {
    #[must_use]
    pub fn new(settings: &Settings) -> Self {
        Self {
            weight_unit: settings.weight_unit,
            measurement_unit: settings.measurement_unit,
        }
    }

    #[must_use]
    pub fn weight(&self, pounds: f64) -> Quantity {
        convert_weight(pounds, self.weight_unit)
    }

    #[must_use]
    pub fn weight_to_storage(&self, value: f64) -> f64 {
        convert_weight_to_storage(value, self.weight_unit)
    }

    #[must_use]
    pub fn length(&self, inches: f64) -> Quantity {
        convert_length(inches, self.measurement_unit)
    }

    #[must_use]
    pub fn length_to_storage(&self, value: f64) -> f64 {
        convert_length_to_storage(value, self.measurement_unit)
    }

    #[must_use]
    pub fn weight_unit_label(&self) -> Unit {
        match self.weight_unit {
            WeightUnit::Lbs => Unit::Lbs,
            WeightUnit::Kg => Unit::Kg,
        }
    }

    #[must_use]
    pub fn length_unit_label(&self) -> Unit {
        match self.measurement_unit {
            MeasurementUnit::Imperial => Unit::In,
            MeasurementUnit::Metric => Unit::Cm,
        }
    }
}
