use std::slice::Iter;

use chrono::{DateTime, Utc};
use log::{debug, error};

use crate::{
    ProfileID, Property, Quantity, ReadError, Unit, UnitConverter, ValidationError, WriteError,
    id::uuid_id,
};

uuid_id!(MeasurementID);

pub trait MeasurementRepository {
    fn read_measurements(&self, profile_id: ProfileID) -> Result<Vec<MeasurementEntry>, ReadError>;
    fn write_measurements(
        &self,
        profile_id: ProfileID,
        measurements: &[MeasurementEntry],
    ) -> Result<(), WriteError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementEntry {
    pub id: MeasurementID,
    pub kind: MeasurementKind,
    /// Pounds, inches or percent depending on the kind
    pub value: f64,
    pub date: DateTime<Utc>,
    pub notes: Option<String>,
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum MeasurementKind {
    Weight,
    BodyFat,
    MuscleMass,
    Chest,
    Bicep,
    Waist,
    Thigh,
    Neck,
    Forearm,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum QuantityKind {
    Mass,
    Length,
    Percentage,
}

impl MeasurementKind {
    #[must_use]
    pub fn quantity(self) -> QuantityKind {
        match self {
            MeasurementKind::Weight | MeasurementKind::MuscleMass => QuantityKind::Mass,
            MeasurementKind::BodyFat => QuantityKind::Percentage,
            MeasurementKind::Chest
            | MeasurementKind::Bicep
            | MeasurementKind::Waist
            | MeasurementKind::Thigh
            | MeasurementKind::Neck
            | MeasurementKind::Forearm => QuantityKind::Length,
        }
    }

    /// Convert a stored value into the display units of the user.
    #[must_use]
    pub fn display(self, value: f64, converter: &UnitConverter) -> Quantity {
        match self.quantity() {
            QuantityKind::Mass => converter.weight(value),
            QuantityKind::Length => converter.length(value),
            QuantityKind::Percentage => Quantity {
                value,
                unit: Unit::Percent,
            },
        }
    }

    #[must_use]
    pub fn unit(self, converter: &UnitConverter) -> Unit {
        match self.quantity() {
            QuantityKind::Mass => converter.weight_unit_label(),
            QuantityKind::Length => converter.length_unit_label(),
            QuantityKind::Percentage => Unit::Percent,
        }
    }

    fn to_storage(self, value: f64, converter: &UnitConverter) -> f64 {
        match self.quantity() {
            QuantityKind::Mass => converter.weight_to_storage(value),
            QuantityKind::Length => converter.length_to_storage(value),
            QuantityKind::Percentage => value,
        }
    }
}

impl Property for MeasurementKind {
    fn iter() -> Iter<'static, MeasurementKind> {
        static MEASUREMENT_KIND: [MeasurementKind; 9] = [
            MeasurementKind::Weight,
            MeasurementKind::BodyFat,
            MeasurementKind::MuscleMass,
            MeasurementKind::Chest,
            MeasurementKind::Bicep,
            MeasurementKind::Waist,
            MeasurementKind::Thigh,
            MeasurementKind::Neck,
            MeasurementKind::Forearm,
        ];
        MEASUREMENT_KIND.iter()
    }

    fn name(self) -> &'static str {
        match self {
            MeasurementKind::Weight => "Weight",
            MeasurementKind::BodyFat => "Body Fat %",
            MeasurementKind::MuscleMass => "Muscle Mass",
            MeasurementKind::Chest => "Chest",
            MeasurementKind::Bicep => "Bicep",
            MeasurementKind::Waist => "Waist",
            MeasurementKind::Thigh => "Thigh",
            MeasurementKind::Neck => "Neck",
            MeasurementKind::Forearm => "Forearm",
        }
    }
}

/// Parse a value entered in display units and convert it into the stored unit.
pub fn validate_measurement_value(
    input: &str,
    kind: MeasurementKind,
    converter: &UnitConverter,
) -> Result<f64, ValidationError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ValidationError::Empty(kind.name().to_string()));
    }
    let value = input
        .replace(',', ".")
        .parse::<f64>()
        .map_err(|_| ValidationError::Parse(kind.name().to_string()))?;
    if !value.is_finite() || value <= 0.0 {
        return Err(ValidationError::NotPositive(kind.name().to_string()));
    }
    Ok(kind.to_storage(value, converter))
}

/// Change between the two most recent entries of a kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    pub diff: f64,
    pub percentage: f64,
}

impl Progress {
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.diff > 0.0
    }

    /// Signed difference in display units, e.g. "+1.2 kg".
    #[must_use]
    pub fn format(&self, kind: MeasurementKind, converter: &UnitConverter) -> String {
        let value = kind.display(self.diff.abs(), converter).value;
        format!(
            "{}{:.1} {}",
            if self.is_positive() { "+" } else { "-" },
            value,
            kind.unit(converter)
        )
    }
}

/// Body measurements of one profile.
pub struct MeasurementLog<R> {
    repository: R,
    profile_id: ProfileID,
    entries: Vec<MeasurementEntry>,
}

impl<R: MeasurementRepository> MeasurementLog<R> {
    pub fn new(repository: R, profile_id: ProfileID) -> Result<Self, ReadError> {
        let mut measurements = Self {
            repository,
            profile_id,
            entries: Vec::new(),
        };
        measurements.switch_profile(profile_id)?;
        Ok(measurements)
    }

    #[must_use]
    pub fn entries(&self) -> &[MeasurementEntry] {
        &self.entries
    }

    pub fn switch_profile(&mut self, profile_id: ProfileID) -> Result<(), ReadError> {
        self.profile_id = profile_id;
        self.entries.clear();
        self.entries = self
            .repository
            .read_measurements(profile_id)
            .inspect_err(|err| error!("failed to read measurements: {err}"))?;
        Ok(())
    }

    /// Add an entry. The value is expected in the stored unit of the kind.
    pub fn add(
        &mut self,
        kind: MeasurementKind,
        value: f64,
        date: DateTime<Utc>,
        notes: Option<String>,
    ) -> Result<MeasurementEntry, WriteError> {
        let entry = MeasurementEntry {
            id: MeasurementID::new(),
            kind,
            value,
            date,
            notes: notes.filter(|n| !n.trim().is_empty()),
        };
        let mut entries = self.entries.clone();
        entries.insert(0, entry.clone());
        self.write(entries)?;
        debug!("added {} measurement {}", kind.name(), entry.id);
        Ok(entry)
    }

    /// Delete an entry. Unknown ids are ignored.
    pub fn delete(&mut self, id: MeasurementID) -> Result<bool, WriteError> {
        if !self.entries.iter().any(|e| e.id == id) {
            return Ok(false);
        }
        let entries = self
            .entries
            .iter()
            .filter(|e| e.id != id)
            .cloned()
            .collect();
        self.write(entries)?;
        Ok(true)
    }

    #[must_use]
    pub fn latest(&self, kind: MeasurementKind) -> Option<&MeasurementEntry> {
        self.history(kind).into_iter().next()
    }

    /// Entries of a kind, newest first.
    #[must_use]
    pub fn history(&self, kind: MeasurementKind) -> Vec<&MeasurementEntry> {
        let mut entries = self
            .entries
            .iter()
            .filter(|e| e.kind == kind)
            .collect::<Vec<_>>();
        entries.sort_by(|a, b| b.date.cmp(&a.date));
        entries
    }

    #[must_use]
    pub fn progress(&self, kind: MeasurementKind) -> Option<Progress> {
        let history = self.history(kind);
        let [latest, previous, ..] = history.as_slice() else {
            return None;
        };
        let diff = latest.value - previous.value;
        Some(Progress {
            diff,
            percentage: diff / previous.value * 100.0,
        })
    }

    fn write(&mut self, entries: Vec<MeasurementEntry>) -> Result<(), WriteError> {
        self.repository
            .write_measurements(self.profile_id, &entries)
            .inspect_err(|err| error!("failed to write measurements: {err}"))?;
        self.entries = entries;
        Ok(())
    }
}
