use svgplot_rs::api::FrameSpec;
use svgplot_rs::core::{Bound, Placement, RangeSpec};
use svgplot_rs::error::PlotError;

#[test]
fn frame_spec_json_roundtrip() {
    let spec = FrameSpec::new(Placement::new(10.0, 20.0, 50.0, 40.0))
        .with_range(RangeSpec::auto().with_x(0.0, 100.0));

    let json = spec.to_json_pretty().expect("spec should serialize");
    let restored = FrameSpec::from_json_str(&json).expect("spec should deserialize");

    assert_eq!(restored, spec);
    assert_eq!(restored.range.x_min, Bound::Fixed(0.0));
    assert_eq!(restored.range.y_min, Bound::Auto);
}

#[test]
fn range_defaults_to_auto_when_absent() {
    let json = r#"{ "placement": { "left": 5.0, "bottom": 5.0, "width": 90.0, "height": 90.0 } }"#;
    let spec = FrameSpec::from_json_str(json).expect("spec should deserialize");
    assert_eq!(spec.range, RangeSpec::auto());
}

#[test]
fn non_positive_placement_is_rejected() {
    let spec = FrameSpec::new(Placement::new(0.0, 0.0, 0.0, 50.0));
    let err = spec.validate().expect_err("zero width");
    assert!(matches!(err, PlotError::InvalidData(_)));
}

#[test]
fn malformed_json_is_reported_as_invalid_data() {
    let err = FrameSpec::from_json_str("{ not json }").expect_err("malformed input");
    assert!(matches!(err, PlotError::InvalidData(_)));
}

#[test]
fn non_finite_fixed_bound_is_rejected() {
    let spec = FrameSpec::new(Placement::new(0.0, 0.0, 100.0, 100.0))
        .with_range(RangeSpec::auto().with_y(0.0, f64::INFINITY));
    let err = spec.validate().expect_err("infinite bound");
    assert!(matches!(err, PlotError::InvalidData(_)));
}
