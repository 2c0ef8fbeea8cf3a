use crate::types::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum RiggingError {
    #[error("Rigging angle {0} outside 0°-180°")]
    AngleOutOfRange(DisplayAngle),

    #[error("Leg angle {0} at or beyond 90° from vertical - cos() correction undefined")]
    AngleTooSteep(DisplayAngle),

    #[error("End-termination efficiency {0} outside 0.5-1.0")]
    EfficiencyOutOfRange(f64),
}

/// What the stored angle measures
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum AngleReference {
    /// Angle of a single leg measured from vertical
    LegFromVertical,

    /// Full included angle between two rigging legs
    IncludedBetweenLegs,
}

/// Rigging geometry for one equipment hookup
///
/// Carries the angle in whichever reference the caller measured it;
/// the halving step between the included angle and the per-leg angle
/// is part of the contract here, not in the calculator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiggingGeometry {
    angle: Angle,
    reference: AngleReference,

    /// Wire rope end-termination efficiency, when applicable
    efficiency: Option<f64>,
}

impl RiggingGeometry {
    /// Geometry from a single leg angle measured off vertical
    pub fn from_leg_angle(angle: Angle) -> Result<Self, RiggingError> {
        Self::validated(angle, AngleReference::LegFromVertical)
    }

    /// Geometry from the full included angle between two legs
    pub fn from_included_angle(angle: Angle) -> Result<Self, RiggingError> {
        Self::validated(angle, AngleReference::IncludedBetweenLegs)
    }

    fn validated(angle: Angle, reference: AngleReference) -> Result<Self, RiggingError> {
        let degrees = angle.get::<degree>();
        if !(0.0..=180.0).contains(&degrees) {
            return Err(RiggingError::AngleOutOfRange(DisplayAngle(angle)));
        }
        Ok(Self {
            angle,
            reference,
            efficiency: None,
        })
    }

    /// Attach an end-termination efficiency fraction (wire rope)
    pub fn with_efficiency(mut self, efficiency: f64) -> Result<Self, RiggingError> {
        if !(0.5..=1.0).contains(&efficiency) {
            return Err(RiggingError::EfficiencyOutOfRange(efficiency));
        }
        self.efficiency = Some(efficiency);
        Ok(self)
    }

    /// Per-leg angle from vertical (halves an included angle)
    pub fn leg_angle(&self) -> Angle {
        match self.reference {
            AngleReference::LegFromVertical => self.angle,
            AngleReference::IncludedBetweenLegs => self.angle / 2.0,
        }
    }

    /// Full included angle between legs (doubles a leg angle)
    pub fn included_angle(&self) -> Angle {
        match self.reference {
            AngleReference::LegFromVertical => self.angle * 2.0,
            AngleReference::IncludedBetweenLegs => self.angle,
        }
    }

    pub fn efficiency(&self) -> Option<f64> {
        self.efficiency
    }
}

/// Angle-correction policy for sling belt capacity
///
/// Observed deployments disagree on which correction is authoritative,
/// so the choice is explicit configuration rather than a hardcoded rule.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnglePolicy {
    /// Empirical factor table keyed by included angle
    #[default]
    DiscreteTable,

    /// 1/cos(leg angle) divisor, same as wire rope
    Trigonometric,

    /// Basket-type catalogs: min of uncorrected and table-corrected figures
    BasketMinimum,
}

/// Tolerance for matching an angle against the tabulated rigging angles
const ANGLE_MATCH_EPSILON: f64 = 1e-6;

/// Empirical derating factor by included angle between legs
///
/// Tabulated at 0/30/45/60/90/120 degrees; any other angle falls back
/// to the most conservative factor, 0.50.
pub fn discrete_angle_factor(included_angle: Angle) -> f64 {
    let degrees = included_angle.get::<degree>();

    const TABLE: [(f64, f64); 6] = [
        (0.0, 1.00),
        (30.0, 0.95),
        (45.0, 0.90),
        (60.0, 0.85),
        (90.0, 0.70),
        (120.0, 0.50),
    ];

    for (tabulated, factor) in TABLE {
        if (degrees - tabulated).abs() < ANGLE_MATCH_EPSILON {
            return factor;
        }
    }

    0.50
}

/// Trigonometric correction coefficient, applied as a divisor: 1/cos(leg angle)
///
/// Rejects leg angles at or beyond 90° from vertical - cos() reaches zero
/// there and the coefficient diverges, so it is an input error, never a
/// silent division.
pub fn trig_coefficient(leg_angle: Angle) -> Result<f64, RiggingError> {
    let degrees = leg_angle.get::<degree>();
    if degrees >= 90.0 {
        return Err(RiggingError::AngleTooSteep(DisplayAngle(leg_angle)));
    }

    Ok(1.0 / leg_angle.get::<radian>().cos())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_discrete_factors() {
        assert_relative_eq!(discrete_angle_factor(Angle::new::<degree>(0.0)), 1.00);
        assert_relative_eq!(discrete_angle_factor(Angle::new::<degree>(30.0)), 0.95);
        assert_relative_eq!(discrete_angle_factor(Angle::new::<degree>(45.0)), 0.90);
        assert_relative_eq!(discrete_angle_factor(Angle::new::<degree>(60.0)), 0.85);
        assert_relative_eq!(discrete_angle_factor(Angle::new::<degree>(90.0)), 0.70);
        assert_relative_eq!(discrete_angle_factor(Angle::new::<degree>(120.0)), 0.50);
    }

    #[test]
    fn test_discrete_fallback_is_conservative() {
        // Off-table angles get the worst factor
        assert_relative_eq!(discrete_angle_factor(Angle::new::<degree>(37.0)), 0.50);
        assert_relative_eq!(discrete_angle_factor(Angle::new::<degree>(15.0)), 0.50);
    }

    #[test]
    fn test_trig_coefficient() {
        assert_relative_eq!(
            trig_coefficient(Angle::new::<degree>(0.0)).unwrap(),
            1.0
        );
        assert_relative_eq!(
            trig_coefficient(Angle::new::<degree>(60.0)).unwrap(),
            2.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_trig_rejects_steep_angles() {
        assert!(matches!(
            trig_coefficient(Angle::new::<degree>(90.0)),
            Err(RiggingError::AngleTooSteep(_))
        ));
        assert!(matches!(
            trig_coefficient(Angle::new::<degree>(120.0)),
            Err(RiggingError::AngleTooSteep(_))
        ));
    }

    #[test]
    fn test_included_angle_halves_to_leg_angle() {
        let geometry =
            RiggingGeometry::from_included_angle(Angle::new::<degree>(120.0)).unwrap();
        assert_relative_eq!(geometry.leg_angle().get::<degree>(), 60.0);
        assert_relative_eq!(geometry.included_angle().get::<degree>(), 120.0);
    }

    #[test]
    fn test_leg_angle_doubles_to_included() {
        let geometry = RiggingGeometry::from_leg_angle(Angle::new::<degree>(45.0)).unwrap();
        assert_relative_eq!(geometry.included_angle().get::<degree>(), 90.0);
    }

    #[test]
    fn test_angle_range_validation() {
        assert!(RiggingGeometry::from_leg_angle(Angle::new::<degree>(-1.0)).is_err());
        assert!(RiggingGeometry::from_included_angle(Angle::new::<degree>(181.0)).is_err());
    }

    #[test]
    fn test_efficiency_validation() {
        let geometry = RiggingGeometry::from_leg_angle(Angle::new::<degree>(60.0)).unwrap();
        assert!(geometry.with_efficiency(0.85).is_ok());
        assert!(geometry.with_efficiency(0.49).is_err());
        assert!(geometry.with_efficiency(1.01).is_err());
    }
}
