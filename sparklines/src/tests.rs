// Tests for sparklines
//
// Renderer behavior through the public API: options, validation,
// determinism and the encoded output.

use crate::error::SparklineError;
use crate::options::{BasePlotOptions, Highlights, SparklineKind, SparklineOptions};
use crate::plots::{Plot, Sparkline, render_sparkline};
use crate::render::ImageFormat;
use plotters::style::WHITE;

fn decode_rgb(bytes: &[u8]) -> image::RgbImage {
    image::load_from_memory(bytes)
        .expect("rendered bytes should decode")
        .to_rgb8()
}

// ============================================================================
// Options Tests
// ============================================================================

#[test]
fn test_base_plot_options_default() {
    let options = BasePlotOptions::default();
    assert_eq!(options.width, 400);
    assert_eq!(options.height, 25);
    assert_eq!(options.background, WHITE);
    assert_eq!(options.format, ImageFormat::Png);
    assert_eq!(options.jpeg_quality, 85);
}

#[test]
fn test_builder_defaults_match_default_impl() {
    let built = SparklineOptions::new().build().unwrap();
    assert_eq!(built, SparklineOptions::default());

    let base = BasePlotOptions::new().build().unwrap();
    assert_eq!(base, BasePlotOptions::default());
}

#[test]
fn test_sparkline_options_builder() {
    let options = SparklineOptions::new()
        .size(120, 16)
        .format(ImageFormat::Jpeg)
        .kind(SparklineKind::Bar)
        .line_width(2u32)
        .highlights(Highlights::all())
        .y_range(0.0..=10.0)
        .baseline(2.0)
        .build()
        .unwrap();

    assert_eq!(options.base.width, 120);
    assert_eq!(options.base.height, 16);
    assert_eq!(options.base.format, ImageFormat::Jpeg);
    assert_eq!(options.kind, SparklineKind::Bar);
    assert_eq!(options.line_width, 2);
    assert_eq!(options.highlights, Highlights::all());
    assert_eq!(options.y_range, Some(0.0..=10.0));
    assert_eq!(options.baseline, Some(2.0));
    // untouched fields keep their defaults
    assert!(options.fill);
    assert_eq!(options.marker_size, 3);
}

#[test]
fn test_highlight_presets() {
    assert!(Highlights::default().last);
    assert!(!Highlights::default().first);
    assert!(!Highlights::none().any());
    let min_max = Highlights::min_max();
    assert!(min_max.min && min_max.max && !min_max.first && !min_max.last);
}

// ============================================================================
// Rendering Tests
// ============================================================================

#[test]
fn test_default_render_is_png() {
    let rendered = render_sparkline([1, 3, 2, 5, 4], &SparklineOptions::default()).unwrap();
    assert_eq!(rendered.format(), ImageFormat::Png);
    assert_eq!(rendered.format().tag(), "png");
    assert!(!rendered.is_empty());

    let img = decode_rgb(rendered.bytes());
    assert_eq!(img.dimensions(), (400, 25));
}

#[test]
fn test_render_respects_size() {
    let options = SparklineOptions::new().size(64, 12).build().unwrap();
    let rendered = render_sparkline(vec![0.5, 0.25, 1.0], &options).unwrap();
    assert_eq!(decode_rgb(rendered.bytes()).dimensions(), (64, 12));
}

#[test]
fn test_empty_series_is_invalid() {
    let err = render_sparkline(Vec::<f64>::new(), &SparklineOptions::default()).unwrap_err();
    assert!(matches!(err, SparklineError::InvalidInput { .. }));
}

#[test]
fn test_non_finite_samples_are_invalid() {
    for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let err = render_sparkline(vec![1.0, 2.0, bad], &SparklineOptions::default()).unwrap_err();
        assert!(err.is_invalid_input());
    }
}

#[test]
fn test_zero_dimensions_are_invalid() {
    let zero_width = SparklineOptions::new().size(0, 20).build().unwrap();
    let err = render_sparkline([1, 2, 3], &zero_width).unwrap_err();
    assert!(err.is_invalid_input());

    let zero_height = SparklineOptions::new().size(20, 0).build().unwrap();
    let err = render_sparkline([1, 2, 3], &zero_height).unwrap_err();
    assert!(err.is_invalid_input());
}

#[test]
fn test_dimensions_checked_before_samples() {
    let zero_width = SparklineOptions::new().size(0, 20).build().unwrap();
    let err = render_sparkline(Vec::<f64>::new(), &zero_width).unwrap_err();
    assert!(err.to_string().contains("dimensions"));
}

#[test]
fn test_oversized_canvas_is_invalid() {
    // 65536 * 21846 * 3 wraps past u32::MAX
    let wrapping = SparklineOptions::new().size(65536, 21846).build().unwrap();
    let err = render_sparkline([1, 2, 3], &wrapping).unwrap_err();
    assert!(err.is_invalid_input());
    assert!(err.to_string().contains("exceeds"));

    let huge = SparklineOptions::new().size(u32::MAX, u32::MAX).build().unwrap();
    assert!(render_sparkline([1, 2, 3], &huge).unwrap_err().is_invalid_input());

    let svg = SparklineOptions::new()
        .size(100_000, 1_000)
        .format(ImageFormat::Svg)
        .build()
        .unwrap();
    assert!(render_sparkline([1, 2, 3], &svg).unwrap_err().is_invalid_input());
}

#[test]
fn test_jpeg_dimension_limit_is_invalid() {
    let wide = SparklineOptions::new()
        .size(70_000, 1)
        .format(ImageFormat::Jpeg)
        .build()
        .unwrap();
    let err = render_sparkline([1, 2, 3], &wide).unwrap_err();
    assert!(err.is_invalid_input());
    assert!(err.to_string().contains("jpeg"));

    // PNG has no such limit
    let wide_png = SparklineOptions::new().size(70_000, 20).build().unwrap();
    let rendered = render_sparkline([1, 2, 3], &wide_png).unwrap();
    assert_eq!(rendered.format(), ImageFormat::Png);
}

#[test]
fn test_malformed_fixed_range_is_invalid() {
    for range in [5.0..=1.0, 2.0..=2.0, f64::NEG_INFINITY..=1.0] {
        let options = SparklineOptions::new().y_range(range).build().unwrap();
        let err = render_sparkline([1, 2, 3], &options).unwrap_err();
        assert!(err.is_invalid_input());
    }
}

#[test]
fn test_out_of_bounds_alpha_and_quality_are_invalid() {
    let options = SparklineOptions::new().fill_alpha(1.5).build().unwrap();
    assert!(render_sparkline([1, 2], &options).unwrap_err().is_invalid_input());

    let options = SparklineOptions::new().marker_alpha(-0.1).build().unwrap();
    assert!(render_sparkline([1, 2], &options).unwrap_err().is_invalid_input());

    let mut options = SparklineOptions::default();
    options.base.jpeg_quality = 0;
    assert!(render_sparkline([1, 2], &options).unwrap_err().is_invalid_input());

    let options = SparklineOptions::new().line_width(0u32).build().unwrap();
    assert!(render_sparkline([1, 2], &options).unwrap_err().is_invalid_input());
}

#[test]
fn test_fixed_range_excluding_all_samples_renders() {
    let options = SparklineOptions::new().y_range(100.0..=200.0).build().unwrap();
    let rendered = render_sparkline([1, 2, 3], &options).unwrap();
    assert!(!rendered.is_empty());
}

#[test]
fn test_render_is_deterministic() {
    let options = SparklineOptions::new()
        .highlights(Highlights::all())
        .build()
        .unwrap();
    let samples = vec![3.0, -1.0, 4.0, 1.0, 5.0, -9.0, 2.0, 6.0];

    let first = render_sparkline(samples.clone(), &options).unwrap();
    let second = render_sparkline(samples.clone(), &options).unwrap();
    assert_eq!(first.bytes(), second.bytes());
}

#[test]
fn test_render_is_deterministic_across_threads() {
    let options = SparklineOptions::default();
    let expected = render_sparkline([2, 4, 3, 8], &options).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let options = options.clone();
            std::thread::spawn(move || render_sparkline([2, 4, 3, 8], &options).unwrap())
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn test_integer_and_float_samples_match() {
    let options = SparklineOptions::default();
    let ints = render_sparkline([1u8, 3, 2], &options).unwrap();
    let floats = render_sparkline([1.0f32, 3.0, 2.0], &options).unwrap();
    assert_eq!(ints, floats);
}

#[test]
fn test_min_max_highlight_changes_raster() {
    let plain = SparklineOptions::new()
        .highlights(Highlights::none())
        .build()
        .unwrap();
    let highlighted = SparklineOptions::new()
        .highlights(Highlights::min_max())
        .build()
        .unwrap();

    let without = render_sparkline([5, 1, 3], &plain).unwrap();
    let with = render_sparkline([5, 1, 3], &highlighted).unwrap();
    assert_ne!(without.bytes(), with.bytes());
}

#[test]
fn test_marker_color_appears_only_when_highlighted() {
    let is_red = |p: &image::Rgb<u8>| p.0 == [255, 0, 0];

    let marked = render_sparkline([1, 2, 3], &SparklineOptions::default()).unwrap();
    assert!(decode_rgb(marked.bytes()).pixels().any(is_red));

    let plain = SparklineOptions::new()
        .highlights(Highlights::none())
        .build()
        .unwrap();
    let unmarked = render_sparkline([1, 2, 3], &plain).unwrap();
    assert!(!decode_rgb(unmarked.bytes()).pixels().any(is_red));
}

#[test]
fn test_background_fills_corners() {
    let plain = SparklineOptions::new()
        .highlights(Highlights::none())
        .fill(false)
        .build()
        .unwrap();
    let rendered = render_sparkline([1, 2, 3], &plain).unwrap();
    let img = decode_rgb(rendered.bytes());
    assert_eq!(img.get_pixel(0, 0).0, [255, 255, 255]);
}

#[test]
fn test_bar_kind_differs_from_line() {
    let line = render_sparkline([2, 5, 3], &SparklineOptions::default()).unwrap();
    let bars = SparklineOptions::new()
        .kind(SparklineKind::Bar)
        .build()
        .unwrap();
    let bar = render_sparkline([2, 5, 3], &bars).unwrap();
    assert_ne!(line.bytes(), bar.bytes());
}

#[test]
fn test_single_sample_renders() {
    let rendered = render_sparkline([42], &SparklineOptions::default()).unwrap();
    assert!(!rendered.is_empty());
}

#[test]
fn test_jpeg_output() {
    let options = SparklineOptions::new()
        .format(ImageFormat::Jpeg)
        .build()
        .unwrap();
    let rendered = render_sparkline([1, 3, 2], &options).unwrap();
    assert_eq!(rendered.format(), ImageFormat::Jpeg);
    assert_eq!(&rendered.bytes()[..2], &[0xFF, 0xD8]);
    assert!(rendered.to_html().starts_with("<img src=\"data:image/jpeg;base64,"));
}

#[test]
fn test_svg_output() {
    let options = SparklineOptions::new()
        .format(ImageFormat::Svg)
        .build()
        .unwrap();
    let rendered = render_sparkline([1, 3, 2], &options).unwrap();
    let svg = String::from_utf8(rendered.bytes().to_vec()).unwrap();
    assert!(svg.contains("<svg"));
    assert!(svg.contains("<circle"));

    let plain = SparklineOptions::new()
        .format(ImageFormat::Svg)
        .highlights(Highlights::none())
        .build()
        .unwrap();
    let rendered = render_sparkline([1, 3, 2], &plain).unwrap();
    let svg = String::from_utf8(rendered.into_bytes()).unwrap();
    assert!(!svg.contains("<circle"));
}

#[test]
fn test_plot_trait_matches_free_function() {
    let options = SparklineOptions::default();
    let via_trait = Sparkline::new().render(vec![1.0, 2.0, 0.5], &options).unwrap();
    let direct = render_sparkline(vec![1.0, 2.0, 0.5], &options).unwrap();
    assert_eq!(via_trait, direct);
}
