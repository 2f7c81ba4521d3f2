use super::*;

#[test]
fn defaults_match_pipeline_constants() {
    let opts = ComposeOpts::default();
    assert_eq!(opts.reference, Canvas::new(800, 600));
    assert_eq!(opts.canvas_padding, 20.0);
    assert_eq!(opts.corner_radius, 8.0);
    assert!(opts.parallel_decode);
}

#[test]
fn builders_override_fields() {
    let opts = ComposeOpts::default()
        .with_reference(Canvas::new(400, 300))
        .with_canvas_padding(5.0)
        .with_corner_radius(0.0)
        .with_parallel_decode(false);
    assert_eq!(opts.reference, Canvas::new(400, 300));
    assert_eq!(opts.canvas_padding, 5.0);
    assert_eq!(opts.corner_radius, 0.0);
    assert!(!opts.parallel_decode);
}

#[test]
fn parse_flag_accepts_common_spellings() {
    assert_eq!(parse_flag("0"), Some(false));
    assert_eq!(parse_flag(" TRUE "), Some(true));
    assert_eq!(parse_flag("off"), Some(false));
    assert_eq!(parse_flag("maybe"), None);
}
