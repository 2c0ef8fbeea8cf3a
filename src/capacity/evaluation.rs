//! Whole-lift evaluation
//!
//! A lift review covers any subset of the equipment kinds against one
//! actual load. Each kind is checked independently - there is no ordering
//! dependency between them - and the per-kind verdicts are only aggregated
//! for display.

use crate::capacity::safe_load::{InputError, SafeLoadCalculator};
use crate::capacity::verdict::{Verdict, check_safety};
use crate::catalog::EquipmentKind;
use crate::rigging::RiggingGeometry;
use crate::types::*;

/// Sling belt leg of a lift request
#[derive(Debug, Clone)]
pub struct SlingBeltSpec {
    pub width: NominalSize,
    pub count: u32,
    pub geometry: RiggingGeometry,
}

/// Wire rope leg of a lift request; geometry must carry an efficiency
#[derive(Debug, Clone)]
pub struct WireRopeSpec {
    pub diameter: NominalSize,
    pub count: u32,
    pub geometry: RiggingGeometry,
}

#[derive(Debug, Clone)]
pub struct ShackleSpec {
    pub pin_size: NominalSize,
    pub count: u32,
}

#[derive(Debug, Clone)]
pub struct CraneSpec {
    /// Rated load from the crane's load chart for its boom configuration
    pub rated_load: Load,
}

/// One lift to review: the actual load plus whichever equipment applies
#[derive(Debug, Clone, Default)]
pub struct LiftRequest {
    pub actual_load: Option<Load>,
    pub sling_belt: Option<SlingBeltSpec>,
    pub wire_rope: Option<WireRopeSpec>,
    pub shackle: Option<ShackleSpec>,
    pub crane: Option<CraneSpec>,
}

impl LiftRequest {
    pub fn new(actual_load: Load) -> Self {
        Self {
            actual_load: Some(actual_load),
            ..Default::default()
        }
    }
}

/// Result of one equipment check within a lift review
#[derive(Debug, Clone)]
pub struct EquipmentCheck {
    pub kind: EquipmentKind,
    pub safe_load: Load,
    pub verdict: Verdict,
    pub details: String,
}

/// Aggregated review of a lift request
#[derive(Debug, Clone)]
pub struct EvaluationReport {
    pub actual_load: Load,
    pub checks: Vec<EquipmentCheck>,
    pub overall: Verdict,
}

impl EvaluationReport {
    fn new(actual_load: Load) -> Self {
        Self {
            actual_load,
            checks: Vec::new(),
            overall: Verdict::Acceptable,
        }
    }

    fn add_check(&mut self, kind: EquipmentKind, rigged_as: String, safe_load: Load) {
        let verdict = check_safety(safe_load, self.actual_load);
        if verdict == Verdict::NotAcceptable {
            self.overall = Verdict::NotAcceptable;
        }
        self.checks.push(EquipmentCheck {
            kind,
            safe_load,
            verdict,
            details: format!(
                "{}: safe load {} vs actual {}",
                rigged_as,
                DisplayLoad(safe_load),
                DisplayLoad(self.actual_load)
            ),
        });
    }

    /// Print a formatted review
    pub fn print(&self) {
        println!("\n╔════════════════════════════════════════════╗");
        println!("║         LIFT SAFETY REVIEW                 ║");
        println!("╚════════════════════════════════════════════╝\n");

        println!("Actual load: {}\n", DisplayLoad(self.actual_load));

        for check in &self.checks {
            let symbol = match check.verdict {
                Verdict::Acceptable => "✅",
                Verdict::NotAcceptable => "❌",
            };
            println!("{} {:<10} {}", symbol, check.kind.label(), check.details);
        }

        let overall_symbol = match self.overall {
            Verdict::Acceptable => "✅",
            Verdict::NotAcceptable => "❌",
        };
        println!("\n{} Overall: {}", overall_symbol, self.overall);
        println!("{}", "═".repeat(46));
    }
}

/// Evaluate every equipment kind present in the request.
///
/// The actual load must be supplied and strictly positive; everything
/// else is optional and checked independently.
pub fn evaluate_lift(
    calculator: &SafeLoadCalculator,
    request: &LiftRequest,
) -> Result<EvaluationReport, InputError> {
    let actual_load = request
        .actual_load
        .ok_or(InputError::NonPositiveLoad(0.0))?;
    if actual_load.get::<ton>() <= 0.0 {
        return Err(InputError::NonPositiveLoad(actual_load.get::<ton>()));
    }

    let mut report = EvaluationReport::new(actual_load);

    if let Some(spec) = &request.sling_belt {
        let safe = calculator.sling_belt_safe_load(spec.width, spec.count, &spec.geometry)?;
        report.add_check(
            EquipmentKind::SlingBelt,
            format!(
                "{}× {} at {} included",
                spec.count,
                DisplaySize(spec.width),
                DisplayAngle(spec.geometry.included_angle())
            ),
            safe,
        );
    }

    if let Some(spec) = &request.wire_rope {
        let safe = calculator.wire_rope_safe_load(spec.diameter, spec.count, &spec.geometry)?;
        report.add_check(
            EquipmentKind::WireRope,
            format!(
                "{}× {} at {} leg angle",
                spec.count,
                DisplaySize(spec.diameter),
                DisplayAngle(spec.geometry.leg_angle())
            ),
            safe,
        );
    }

    if let Some(spec) = &request.shackle {
        let safe = calculator.shackle_safe_load(spec.pin_size, spec.count)?;
        report.add_check(
            EquipmentKind::Shackle,
            format!("{}× {}", spec.count, DisplaySize(spec.pin_size)),
            safe,
        );
    }

    if let Some(spec) = &request.crane {
        let safe = calculator.crane_safe_load(spec.rated_load)?;
        report.add_check(
            EquipmentKind::Crane,
            format!("chart rated {}", DisplayLoad(spec.rated_load)),
            safe,
        );
    }

    Ok(report)
}
