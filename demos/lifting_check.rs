use lifting_core::capacity::{CraneSpec, LiftRequest, ShackleSpec, SlingBeltSpec, WireRopeSpec, evaluate_lift};
use lifting_core::capacity::SafeLoadCalculator;
use lifting_core::rigging::RiggingGeometry;
use lifting_core::types::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let calculator = SafeLoadCalculator::with_defaults();

    // Review a 2 ton lift rigged with two of everything
    let mut request = LiftRequest::new(Load::new::<ton>(2.0));

    request.sling_belt = Some(SlingBeltSpec {
        width: NominalSize::new::<millimeter>(50.0),
        count: 2,
        geometry: RiggingGeometry::from_included_angle(Angle::new::<degree>(120.0))?,
    });

    request.wire_rope = Some(WireRopeSpec {
        diameter: NominalSize::new::<millimeter>(28.0),
        count: 2,
        geometry: RiggingGeometry::from_leg_angle(Angle::new::<degree>(60.0))?
            .with_efficiency(0.85)?,
    });

    request.shackle = Some(ShackleSpec {
        pin_size: NominalSize::new::<inch>(0.75),
        count: 2,
    });

    request.crane = Some(CraneSpec {
        rated_load: Load::new::<ton>(7.9),
    });

    let report = evaluate_lift(&calculator, &request)?;
    report.print();

    Ok(())
}
