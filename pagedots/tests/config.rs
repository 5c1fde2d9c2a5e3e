use pagedots::color::dot_color;
use pagedots::{
    Attributes, BehaviorFlags, Color, ConfigError, IndicatorOptions, IndicatorStyle, Interpolator,
    PositionState, PreviewMode,
};

// =============================================================================
// Options Tests
// =============================================================================

#[test]
fn test_default_options() {
    let options = IndicatorOptions::default();

    assert_eq!(options.min_dot_size, 4.0);
    assert_eq!(options.max_dot_size, 12.0);
    assert_eq!(options.dot_spacing, 4.0);
    assert_eq!(options.resizing_span, 3);
    assert_eq!(options.interpolator, Interpolator::Linear);
    assert_eq!(options.size_scale, 1.0);
    assert_eq!((options.ignore_first, options.ignore_last), (0, 0));
    assert!(!options.ignore_hides);
    assert_eq!(options.flags, BehaviorFlags::default());
    assert!(options.flags.swipe_enabled && options.flags.click_enabled);
    assert_eq!(options.preview, PreviewMode::Off);
    assert_eq!(options.initial_position, PositionState::PREVIEW);
}

#[test]
fn test_scaled_options() {
    let options = IndicatorOptions::scaled(2.5);

    assert_eq!(options.min_dot_size, 10.0);
    assert_eq!(options.max_dot_size, 30.0);
    assert_eq!(options.dot_spacing, 10.0);
    assert_eq!(options.pie_size, 40.0);
    // Counts and factors are not dimensions
    assert_eq!(options.resizing_span, 3);
    assert_eq!(options.size_scale, 1.0);
}

#[test]
fn test_builder_setters() {
    let options = IndicatorOptions::new()
        .dot_sizes(2.0, 8.0)
        .resizing_span(2)
        .ignore(1, 2, true)
        .swipe_enabled(false)
        .preview(PreviewMode::On);

    assert_eq!((options.min_dot_size, options.max_dot_size), (2.0, 8.0));
    assert_eq!(options.resizing_span, 2);
    assert_eq!((options.ignore_first, options.ignore_last), (1, 2));
    assert!(options.ignore_hides);
    assert!(!options.flags.swipe_enabled);
    assert!(options.flags.click_enabled);
    assert_eq!(options.preview, PreviewMode::On);
}

// =============================================================================
// Attribute Resolution Tests
// =============================================================================

#[test]
fn test_empty_attributes_give_defaults() {
    let options = IndicatorOptions::from_attributes(&Attributes::new()).unwrap();
    assert_eq!(options, IndicatorOptions::default());
}

#[test]
fn test_attributes_override_defaults() {
    let attrs = Attributes::new()
        .set("dot_min_size", "3")
        .set("dot_max_size", "9.5")
        .set("resizing_span", "4")
        .set("dot_active_color", "#FF0000")
        .set("dot_inactive_color", "#800000FF")
        .set("interpolator", "overshoot")
        .set("swipe_enabled", "false")
        .set("ignore_first", "2")
        .set("ignore_hides", "true")
        .set("preview", "true");

    let options = IndicatorOptions::from_attributes(&attrs).unwrap();

    assert_eq!(options.min_dot_size, 3.0);
    assert_eq!(options.max_dot_size, 9.5);
    assert_eq!(options.resizing_span, 4);
    assert_eq!(options.active_color, Color::rgb(255, 0, 0));
    assert_eq!(options.inactive_color, Color::rgba(0, 0, 255, 0x80));
    assert_eq!(options.interpolator, Interpolator::Overshoot);
    assert!(!options.flags.swipe_enabled);
    assert_eq!(options.ignore_first, 2);
    assert!(options.ignore_hides);
    assert_eq!(options.preview, PreviewMode::On);
}

#[test]
fn test_interpolator_by_index() {
    let attrs = Attributes::new().set("interpolator", "3");
    let options = IndicatorOptions::from_attributes(&attrs).unwrap();
    assert_eq!(options.interpolator, Interpolator::Bounce);
}

#[test]
fn test_unknown_interpolator_index_is_error() {
    let attrs = Attributes::new().set("interpolator", "7");
    assert_eq!(
        IndicatorOptions::from_attributes(&attrs),
        Err(ConfigError::UnknownInterpolator(7))
    );
}

#[test]
fn test_unknown_interpolator_name_is_error() {
    let attrs = Attributes::new().set("interpolator", "springy");
    assert_eq!(
        IndicatorOptions::from_attributes(&attrs),
        Err(ConfigError::UnknownInterpolatorName("springy".to_string()))
    );
}

#[test]
fn test_invalid_number_is_error() {
    let attrs = Attributes::new().set("resizing_span", "-1");
    let err = IndicatorOptions::from_attributes(&attrs).unwrap_err();

    assert_eq!(
        err,
        ConfigError::InvalidValue {
            key: "resizing_span".to_string(),
            value: "-1".to_string(),
        }
    );
    assert_eq!(
        err.to_string(),
        "Invalid value '-1' for attribute 'resizing_span'"
    );
}

#[test]
fn test_invalid_color_is_error() {
    let attrs = Attributes::new().set("pie_color", "red");
    assert_eq!(
        IndicatorOptions::from_attributes(&attrs),
        Err(ConfigError::InvalidColor("red".to_string()))
    );
}

// =============================================================================
// Style Tests
// =============================================================================

#[test]
fn test_style_parse() {
    for style in IndicatorStyle::ALL {
        assert_eq!(style.to_string().parse::<IndicatorStyle>(), Ok(style));
    }
    assert_eq!("Color-Only".parse::<IndicatorStyle>(), Ok(IndicatorStyle::ColorOnly));
    assert_eq!(
        "wave".parse::<IndicatorStyle>(),
        Err(ConfigError::UnknownStyle("wave".to_string()))
    );
}

// =============================================================================
// Interpolator Tests
// =============================================================================

#[test]
fn test_interpolator_endpoints() {
    for interpolator in Interpolator::ALL {
        assert!(interpolator.apply(0.0).abs() < 0.01, "{interpolator} at 0");
        assert!((interpolator.apply(1.0) - 1.0).abs() < 0.01, "{interpolator} at 1");
    }
}

#[test]
fn test_interpolator_curves() {
    assert_eq!(Interpolator::Linear.apply(0.3), 0.3);
    assert_eq!(Interpolator::Accelerate.apply(0.5), 0.25);
    assert_eq!(Interpolator::Decelerate.apply(0.5), 0.75);
    // Overshoot passes 1 before settling
    assert!(Interpolator::Overshoot.apply(0.8) > 1.0);
    // Bounce comes back down after its first peak
    assert!(Interpolator::Bounce.apply(0.35) > Interpolator::Bounce.apply(0.45));
}

#[test]
fn test_interpolator_index_round_trip() {
    for interpolator in Interpolator::ALL {
        assert_eq!(Interpolator::from_index(interpolator.index()), Ok(interpolator));
    }
    assert_eq!(
        Interpolator::from_index(-1),
        Err(ConfigError::UnknownInterpolator(-1))
    );
}

// =============================================================================
// Color Tests
// =============================================================================

#[test]
fn test_color_parse() {
    assert_eq!(Color::parse("#3F51B5"), Ok(Color::rgb(0x3F, 0x51, 0xB5)));
    assert_eq!(Color::parse("#803F51B5"), Ok(Color::rgba(0x3F, 0x51, 0xB5, 0x80)));
    assert!(Color::parse("3F51B5").is_err());
    assert!(Color::parse("#3F51").is_err());
    assert!(Color::parse("#GG51B5").is_err());
}

#[test]
fn test_argb_packing() {
    let color = Color::from_argb(0xFF3F_51B5);
    assert_eq!(color, Color::rgb(0x3F, 0x51, 0xB5));
    assert_eq!(color.to_argb(), 0xFF3F_51B5);
}

#[test]
fn test_blend_endpoints() {
    let red = Color::rgb(255, 0, 0);
    let blue = Color::rgb(0, 0, 255);

    assert_eq!(red.blend(blue, 0.0), red);
    assert_eq!(red.blend(blue, 1.0), blue);
    assert_eq!(red.blend(blue, f32::NAN), red);
    assert_eq!(red.blend(blue, 7.0), blue);
}

#[test]
fn test_blend_is_linear_light() {
    let mid = Color::BLACK.blend(Color::WHITE, 0.5);
    // Linear-light midpoint of black and white is brighter than 128 in sRGB
    assert!(mid.r > 180 && mid.r < 195, "got {}", mid.r);
    assert_eq!(mid.r, mid.g);
}

#[test]
fn test_dot_color_by_distance() {
    let active = Color::rgb(255, 64, 129);
    let inactive = Color::rgb(63, 81, 181);

    assert_eq!(dot_color(0.0, active, inactive), active);
    assert_eq!(dot_color(1.0, active, inactive), inactive);
    assert_eq!(dot_color(3.5, active, inactive), inactive);
    assert_ne!(dot_color(0.5, active, inactive), active);
    assert_ne!(dot_color(0.5, active, inactive), inactive);
}
