use crate::types::*;
use serde::{Deserialize, Serialize};

/// Kinds of lifting equipment the engine knows how to rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquipmentKind {
    /// Synthetic sling belt, rated by nominal width
    SlingBelt,

    /// Wire rope, rated by nominal diameter
    WireRope,

    /// Shackle, rated by nominal pin size
    Shackle,

    /// Crane - rated from its load chart, no catalog table
    Crane,
}

impl EquipmentKind {
    /// Safety factor applied to the catalog rating for this kind.
    ///
    /// Slings and wire rope carry a 5:1 factor against cut load,
    /// shackles 3:1 against WLL. Crane capacity comes straight from
    /// the load chart and is derated separately, so its factor is 1.
    pub fn safety_factor(&self) -> f64 {
        match self {
            EquipmentKind::SlingBelt => 5.0,
            EquipmentKind::WireRope => 5.0,
            EquipmentKind::Shackle => 3.0,
            EquipmentKind::Crane => 1.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EquipmentKind::SlingBelt => "Sling Belt",
            EquipmentKind::WireRope => "Wire Rope",
            EquipmentKind::Shackle => "Shackle",
            EquipmentKind::Crane => "Crane",
        }
    }
}

/// One tabulated rating point: nominal size (in the table's size unit)
/// against rated capacity in metric tons.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatingEntry {
    pub size: f64,
    pub capacity: f64,
}

/// Catalog rating table for one equipment kind
///
/// Maps discrete nominal sizes to the manufacturer's rated capacity
/// (cut load for slings and wire rope, WLL for shackles). Tables are
/// loaded once and never mutated; different deployments may swap in a
/// different catalog revision without touching the calculation code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatingTable {
    /// Equipment kind this table rates
    pub kind: EquipmentKind,

    /// Human-readable description of the catalog source
    pub description: String,

    /// Catalog revision, if known
    pub revision: Option<String>,

    /// Unit the `size` column is expressed in ("mm" or "in")
    pub size_unit: String,

    /// Rating points, ascending by size
    pub entries: Vec<RatingEntry>,
}

/// Tolerance used when matching a requested size against tabulated sizes,
/// in the table's own size unit.
const SIZE_MATCH_EPSILON: f64 = 1e-6;

impl RatingTable {
    pub fn new(
        kind: EquipmentKind,
        description: impl Into<String>,
        size_unit: impl Into<String>,
        entries: Vec<RatingEntry>,
    ) -> Self {
        Self {
            kind,
            description: description.into(),
            revision: None,
            size_unit: size_unit.into(),
            entries,
        }
    }

    /// Default sling belt table: nominal width (mm) -> cut load (ton)
    pub fn sling_belt_default() -> Self {
        Self::from_pairs(
            EquipmentKind::SlingBelt,
            "Sling belt cut load by nominal width",
            "mm",
            &[
                (25.0, 0.8),
                (50.0, 1.6),
                (75.0, 2.4),
                (100.0, 3.2),
                (150.0, 4.8),
                (200.0, 6.4),
                (250.0, 8.0),
                (300.0, 9.6),
            ],
        )
    }

    /// Default wire rope table: nominal diameter (mm) -> cut load (ton)
    pub fn wire_rope_default() -> Self {
        Self::from_pairs(
            EquipmentKind::WireRope,
            "Wire rope cut load by nominal diameter",
            "mm",
            &[(28.0, 51.7), (32.0, 67.7), (38.0, 97.3), (44.0, 131.5)],
        )
    }

    /// Default shackle table: nominal pin size (inch) -> WLL (ton)
    pub fn shackle_default() -> Self {
        Self::from_pairs(
            EquipmentKind::Shackle,
            "Shackle working load limit by pin size",
            "in",
            &[
                (0.5, 2.0),
                (0.625, 3.25),
                (0.75, 4.75),
                (0.875, 6.5),
                (1.0, 8.5),
            ],
        )
    }

    fn from_pairs(
        kind: EquipmentKind,
        description: &str,
        size_unit: &str,
        pairs: &[(f64, f64)],
    ) -> Self {
        let entries = pairs
            .iter()
            .map(|&(size, capacity)| RatingEntry { size, capacity })
            .collect();
        Self::new(kind, description, size_unit, entries)
    }

    /// Look up the rated capacity for one unit at the given nominal size.
    ///
    /// A size with no tabulated rating returns exactly zero tons. That is
    /// the lenient-degrade contract: downstream the zero divides through
    /// to a 0.00 safe load, which can never pass a verdict check.
    pub fn rated_capacity(&self, size: NominalSize) -> Result<Load, UnitError> {
        let wanted = size_in_unit(size, &self.size_unit)?;

        for entry in &self.entries {
            if (entry.size - wanted).abs() < SIZE_MATCH_EPSILON {
                return Ok(Load::new::<ton>(entry.capacity));
            }
        }

        Ok(Load::new::<ton>(0.0))
    }

    /// All tabulated sizes as typed quantities
    pub fn sizes(&self) -> Result<Vec<NominalSize>, UnitError> {
        self.entries
            .iter()
            .map(|e| size_from_raw(e.size, &self.size_unit))
            .collect()
    }

    /// Structural validation of a loaded table
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if let Err(e) = size_from_raw(1.0, &self.size_unit) {
            errors.push(format!("size unit: {}", e));
        }

        if self.entries.is_empty() {
            errors.push("table has no entries".into());
        }

        for (i, entry) in self.entries.iter().enumerate() {
            if entry.size <= 0.0 {
                errors.push(format!("entry {}: non-positive size {}", i, entry.size));
            }
            if entry.capacity <= 0.0 {
                errors.push(format!(
                    "entry {}: non-positive capacity {}",
                    i, entry.capacity
                ));
            }
        }

        for pair in self.entries.windows(2) {
            if (pair[0].size - pair[1].size).abs() < SIZE_MATCH_EPSILON {
                errors.push(format!("duplicate size {}", pair[0].size));
            }
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}
