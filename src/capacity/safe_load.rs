//! Safe working load computation
//!
//! Every equipment kind shares one arithmetic shape:
//!
//!   safe = (rated_capacity × count × multiplier) / (safety_factor × divisor)
//!
//! and differs only in which correction feeds the multiplier/divisor and
//! in the kind-specific safety factor. Rounding happens exactly once, at
//! the end, to 2 decimal places.

use crate::catalog::{CatalogLibrary, EquipmentKind};
use crate::rigging::{AnglePolicy, RiggingError, RiggingGeometry, discrete_angle_factor, trig_coefficient};
use crate::types::*;

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("Equipment count {0} must be at least 1")]
    InvalidCount(u32),

    #[error("Load {0} ton must be strictly positive")]
    NonPositiveLoad(f64),

    #[error("Wire rope requires an end-termination efficiency")]
    MissingEfficiency,

    #[error("Crane derating rate {0} must be in (0, 1]")]
    InvalidDeratingRate(f64),

    #[error(transparent)]
    Unit(#[from] UnitError),

    #[error(transparent)]
    Rigging(#[from] RiggingError),
}

/// Crane safe load defaults to 90% of the load chart figure
pub const DEFAULT_CRANE_DERATING: f64 = 0.9;

/// Round to 2 decimal places, half away from zero.
///
/// Engineering convention for published safe loads; f64::round already
/// rounds halves away from zero.
pub fn round_to_hundredth(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn validate_count(count: u32) -> Result<(), InputError> {
    if count < 1 {
        return Err(InputError::InvalidCount(count));
    }
    Ok(())
}

/// Safe working load calculator for all equipment kinds
///
/// Holds the catalog library plus the configured angle-correction policy
/// and crane derating rate. Pure with respect to its inputs: identical
/// calls always produce identical results.
#[derive(Debug)]
pub struct SafeLoadCalculator {
    catalog: CatalogLibrary,
    angle_policy: AnglePolicy,
    crane_derating: f64,
}

impl SafeLoadCalculator {
    pub fn new(catalog: CatalogLibrary, angle_policy: AnglePolicy) -> Self {
        Self {
            catalog,
            angle_policy,
            crane_derating: DEFAULT_CRANE_DERATING,
        }
    }

    /// Calculator with the built-in reference catalogs and default policy
    pub fn with_defaults() -> Self {
        Self::new(CatalogLibrary::with_defaults(), AnglePolicy::default())
    }

    pub fn with_crane_derating(mut self, rate: f64) -> Result<Self, InputError> {
        if !(rate > 0.0 && rate <= 1.0) {
            return Err(InputError::InvalidDeratingRate(rate));
        }
        self.crane_derating = rate;
        Ok(self)
    }

    pub fn catalog(&self) -> &CatalogLibrary {
        &self.catalog
    }

    pub fn angle_policy(&self) -> AnglePolicy {
        self.angle_policy
    }

    pub fn crane_derating(&self) -> f64 {
        self.crane_derating
    }

    /// Sling belt: (cut load × count × angle correction) / 5
    ///
    /// Which angle correction applies is the configured policy. An
    /// unrecognized width degrades to a 0.00 safe load.
    pub fn sling_belt_safe_load(
        &self,
        width: NominalSize,
        count: u32,
        geometry: &RiggingGeometry,
    ) -> Result<Load, InputError> {
        validate_count(count)?;

        let cut_load = self
            .catalog
            .rated_capacity(EquipmentKind::SlingBelt, width)?;
        let base = cut_load.get::<ton>() * count as f64;
        let sf = EquipmentKind::SlingBelt.safety_factor();

        let tons = match self.angle_policy {
            AnglePolicy::DiscreteTable => {
                base * discrete_angle_factor(geometry.included_angle()) / sf
            }
            AnglePolicy::Trigonometric => {
                base / (sf * trig_coefficient(geometry.leg_angle())?)
            }
            AnglePolicy::BasketMinimum => {
                // Basket-type catalogs already assume a rigging
                // configuration; the correction must never uprate them.
                let uncorrected = base / sf;
                let corrected = base * discrete_angle_factor(geometry.included_angle()) / sf;
                uncorrected.min(corrected)
            }
        };

        Ok(Load::new::<ton>(round_to_hundredth(tons)))
    }

    /// Wire rope: (cut load × count × efficiency) / (5 × 1/cos(leg angle))
    ///
    /// Requires a leg angle below 90° and an explicit efficiency fraction.
    pub fn wire_rope_safe_load(
        &self,
        diameter: NominalSize,
        count: u32,
        geometry: &RiggingGeometry,
    ) -> Result<Load, InputError> {
        validate_count(count)?;
        let efficiency = geometry.efficiency().ok_or(InputError::MissingEfficiency)?;

        let cut_load = self
            .catalog
            .rated_capacity(EquipmentKind::WireRope, diameter)?;
        let coefficient = trig_coefficient(geometry.leg_angle())?;
        let sf = EquipmentKind::WireRope.safety_factor();

        let tons = (cut_load.get::<ton>() * count as f64 * efficiency) / (sf * coefficient);
        Ok(Load::new::<ton>(round_to_hundredth(tons)))
    }

    /// Shackle: (WLL × count) / 3
    ///
    /// No angle correction - the WLL already assumes an in-line vertical pull.
    pub fn shackle_safe_load(
        &self,
        pin_size: NominalSize,
        count: u32,
    ) -> Result<Load, InputError> {
        validate_count(count)?;

        let wll = self.catalog.rated_capacity(EquipmentKind::Shackle, pin_size)?;
        let sf = EquipmentKind::Shackle.safety_factor();

        let tons = wll.get::<ton>() * count as f64 / sf;
        Ok(Load::new::<ton>(round_to_hundredth(tons)))
    }

    /// Crane: load chart figure × derating rate (default 0.9)
    ///
    /// The rated load is taken as given from the crane's load chart for
    /// its current boom configuration; no count or angle applies.
    pub fn crane_safe_load(&self, rated_load: Load) -> Result<Load, InputError> {
        let rated_tons = rated_load.get::<ton>();
        if rated_tons <= 0.0 {
            return Err(InputError::NonPositiveLoad(rated_tons));
        }

        Ok(Load::new::<ton>(round_to_hundredth(
            rated_tons * self.crane_derating,
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn calculator() -> SafeLoadCalculator {
        SafeLoadCalculator::with_defaults()
    }

    fn calculator_with(policy: AnglePolicy) -> SafeLoadCalculator {
        SafeLoadCalculator::new(CatalogLibrary::with_defaults(), policy)
    }

    #[test]
    fn test_sling_belt_reference_case() {
        // 50mm belt (1.6t cut load), 2 belts, 0° -> (1.6 × 2 × 1.00) / 5
        let geometry =
            RiggingGeometry::from_included_angle(Angle::new::<degree>(0.0)).unwrap();
        let safe = calculator()
            .sling_belt_safe_load(NominalSize::new::<millimeter>(50.0), 2, &geometry)
            .unwrap();
        assert_relative_eq!(safe.get::<ton>(), 0.64);
    }

    #[test]
    fn test_sling_belt_wide_included_angle() {
        // 120° between legs -> table factor 0.50
        let geometry =
            RiggingGeometry::from_included_angle(Angle::new::<degree>(120.0)).unwrap();
        let safe = calculator()
            .sling_belt_safe_load(NominalSize::new::<millimeter>(100.0), 2, &geometry)
            .unwrap();
        // (3.2 × 2 × 0.50) / 5
        assert_relative_eq!(safe.get::<ton>(), 0.64);
    }

    #[test]
    fn test_sling_belt_trigonometric_policy() {
        // 120° included -> 60° leg -> coefficient 2.0
        let geometry =
            RiggingGeometry::from_included_angle(Angle::new::<degree>(120.0)).unwrap();
        let safe = calculator_with(AnglePolicy::Trigonometric)
            .sling_belt_safe_load(NominalSize::new::<millimeter>(100.0), 2, &geometry)
            .unwrap();
        // (3.2 × 2) / (5 × 2.0)
        assert_relative_eq!(safe.get::<ton>(), 0.64);
    }

    #[test]
    fn test_sling_belt_basket_minimum_never_uprates() {
        let vertical =
            RiggingGeometry::from_included_angle(Angle::new::<degree>(0.0)).unwrap();
        let angled =
            RiggingGeometry::from_included_angle(Angle::new::<degree>(90.0)).unwrap();
        let calc = calculator_with(AnglePolicy::BasketMinimum);
        let width = NominalSize::new::<millimeter>(150.0);

        let at_vertical = calc.sling_belt_safe_load(width, 1, &vertical).unwrap();
        let at_angle = calc.sling_belt_safe_load(width, 1, &angled).unwrap();

        // Uncorrected figure: 4.8 / 5 = 0.96; corrected at 90°: 0.96 × 0.70
        assert_relative_eq!(at_vertical.get::<ton>(), 0.96);
        assert_relative_eq!(at_angle.get::<ton>(), 0.67);
    }

    #[test]
    fn test_unrecognized_width_gives_zero() {
        let geometry =
            RiggingGeometry::from_included_angle(Angle::new::<degree>(0.0)).unwrap();
        let safe = calculator()
            .sling_belt_safe_load(NominalSize::new::<millimeter>(40.0), 2, &geometry)
            .unwrap();
        assert_relative_eq!(safe.get::<ton>(), 0.0);
    }

    #[test]
    fn test_wire_rope_reference_case() {
        // 28mm rope (51.7t), 2 legs, 0.85 efficiency, 60° leg angle
        // (51.7 × 2 × 0.85) / (5 × 2.0) = 8.789 -> 8.79
        let geometry = RiggingGeometry::from_leg_angle(Angle::new::<degree>(60.0))
            .unwrap()
            .with_efficiency(0.85)
            .unwrap();
        let safe = calculator()
            .wire_rope_safe_load(NominalSize::new::<millimeter>(28.0), 2, &geometry)
            .unwrap();
        assert_relative_eq!(safe.get::<ton>(), 8.79);
    }

    #[test]
    fn test_wire_rope_requires_efficiency() {
        let geometry = RiggingGeometry::from_leg_angle(Angle::new::<degree>(60.0)).unwrap();
        let result = calculator().wire_rope_safe_load(
            NominalSize::new::<millimeter>(28.0),
            2,
            &geometry,
        );
        assert!(matches!(result, Err(InputError::MissingEfficiency)));
    }

    #[test]
    fn test_wire_rope_rejects_steep_angle() {
        let geometry = RiggingGeometry::from_leg_angle(Angle::new::<degree>(90.0))
            .unwrap()
            .with_efficiency(0.85)
            .unwrap();
        let result = calculator().wire_rope_safe_load(
            NominalSize::new::<millimeter>(28.0),
            2,
            &geometry,
        );
        assert!(matches!(result, Err(InputError::Rigging(_))));
    }

    #[test]
    fn test_shackle_reference_case() {
        // 3/4" shackle (4.75t WLL), 2 shackles -> (4.75 × 2) / 3 = 3.1667 -> 3.17
        let safe = calculator()
            .shackle_safe_load(NominalSize::new::<inch>(0.75), 2)
            .unwrap();
        assert_relative_eq!(safe.get::<ton>(), 3.17);
    }

    #[test]
    fn test_crane_reference_case() {
        let safe = calculator()
            .crane_safe_load(Load::new::<ton>(7.9))
            .unwrap();
        assert_relative_eq!(safe.get::<ton>(), 7.11);
    }

    #[test]
    fn test_crane_custom_derating() {
        let calc = calculator().with_crane_derating(0.8).unwrap();
        let safe = calc.crane_safe_load(Load::new::<ton>(10.0)).unwrap();
        assert_relative_eq!(safe.get::<ton>(), 8.0);
    }

    #[test]
    fn test_crane_rejects_non_positive_rated_load() {
        let result = calculator().crane_safe_load(Load::new::<ton>(0.0));
        assert!(matches!(result, Err(InputError::NonPositiveLoad(_))));
    }

    #[test]
    fn test_invalid_derating_rejected() {
        assert!(calculator().with_crane_derating(0.0).is_err());
        assert!(calculator().with_crane_derating(1.5).is_err());
    }

    #[test]
    fn test_zero_count_rejected() {
        let geometry =
            RiggingGeometry::from_included_angle(Angle::new::<degree>(0.0)).unwrap();
        let result = calculator().sling_belt_safe_load(
            NominalSize::new::<millimeter>(50.0),
            0,
            &geometry,
        );
        assert!(matches!(result, Err(InputError::InvalidCount(0))));
    }

    #[test]
    fn test_count_scaling_is_monotonic() {
        let calc = calculator();
        let geometry =
            RiggingGeometry::from_included_angle(Angle::new::<degree>(60.0)).unwrap();
        let width = NominalSize::new::<millimeter>(75.0);

        let mut previous = 0.0;
        for count in 1..=6 {
            let safe = calc
                .sling_belt_safe_load(width, count, &geometry)
                .unwrap()
                .get::<ton>();
            assert!(safe >= previous);
            previous = safe;
        }
    }

    #[test]
    fn test_trig_angle_is_monotonic() {
        let calc = calculator();
        let diameter = NominalSize::new::<millimeter>(32.0);

        let mut previous = f64::MAX;
        for degrees in [0.0, 15.0, 30.0, 45.0, 60.0, 75.0, 89.0] {
            let geometry = RiggingGeometry::from_leg_angle(Angle::new::<degree>(degrees))
                .unwrap()
                .with_efficiency(0.85)
                .unwrap();
            let safe = calc
                .wire_rope_safe_load(diameter, 2, &geometry)
                .unwrap()
                .get::<ton>();
            assert!(safe <= previous);
            previous = safe;
        }
    }

    #[test]
    fn test_idempotence() {
        let calc = calculator();
        let geometry = RiggingGeometry::from_leg_angle(Angle::new::<degree>(45.0))
            .unwrap()
            .with_efficiency(0.9)
            .unwrap();
        let diameter = NominalSize::new::<millimeter>(38.0);

        let first = calc.wire_rope_safe_load(diameter, 3, &geometry).unwrap();
        let second = calc.wire_rope_safe_load(diameter, 3, &geometry).unwrap();
        assert_relative_eq!(first.get::<ton>(), second.get::<ton>());
    }

    #[test]
    fn test_rounding_convention() {
        // Half away from zero at the second decimal
        assert_relative_eq!(round_to_hundredth(3.1667), 3.17);
        assert_relative_eq!(round_to_hundredth(8.789), 8.79);
        assert_relative_eq!(round_to_hundredth(0.125), 0.13);
        assert_relative_eq!(round_to_hundredth(-0.125), -0.13);
    }
}
