use crate::PlotBytes;
use crate::error::{Result, SparklineError};
use crate::options::{PlotOptions, SparklineKind, SparklineOptions};
use crate::plots::layout::SparklineLayout;
use crate::render::ImageFormat;
use image::ImageEncoder;
use plotters::coord::Shift;
use plotters::prelude::*;

/// Draw a layout onto a drawing area
///
/// The area is owned by the caller's scope; nothing here outlives the call.
/// Draw order is background, fill or bars, line, markers.
fn draw_layout<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    layout: &SparklineLayout,
    options: &SparklineOptions,
) -> Result<()> {
    root.fill(&options.base().background)
        .map_err(|e| SparklineError::render(format!("failed to fill background: {e:?}")))?;

    // Leave room for markers so they are not cut at the edges
    let marker_room = if layout.markers.is_empty() {
        0
    } else {
        options.marker_size
    };
    let margin = marker_room + options.line_width;

    let mut chart = ChartBuilder::on(root)
        .margin(margin)
        .build_cartesian_2d(layout.x_range.clone(), layout.y_range.clone())
        .map_err(|e| SparklineError::render(format!("failed to build chart: {e:?}")))?;

    match layout.kind {
        SparklineKind::Line => {
            if options.fill && options.fill_alpha > 0.0 {
                chart
                    .draw_series(AreaSeries::new(
                        layout.points.iter().copied(),
                        layout.baseline,
                        options.fill_color.mix(options.fill_alpha).filled(),
                    ))
                    .map_err(|e| SparklineError::render(format!("failed to draw fill: {e:?}")))?;
            }

            chart
                .draw_series(LineSeries::new(
                    layout.points.iter().copied(),
                    options.line_color.stroke_width(options.line_width),
                ))
                .map_err(|e| SparklineError::render(format!("failed to draw line: {e:?}")))?;
        }
        SparklineKind::Bar => {
            chart
                .draw_series(
                    layout
                        .bars()
                        .map(|corners| Rectangle::new(corners, options.line_color.filled())),
                )
                .map_err(|e| SparklineError::render(format!("failed to draw bars: {e:?}")))?;
        }
    }

    let radius = options.marker_size as i32;
    chart
        .draw_series(layout.markers.iter().map(|marker| {
            Circle::new(
                marker.point,
                radius,
                marker.color.mix(options.marker_alpha).filled(),
            )
        }))
        .map_err(|e| SparklineError::render(format!("failed to draw markers: {e:?}")))?;

    root.present()
        .map_err(|e| SparklineError::render(format!("failed to present drawing area: {e:?}")))?;

    Ok(())
}

/// Rasterize a layout and encode it in the configured format
///
/// Each call allocates its own pixel buffer (or SVG string) and drawing area
/// inside a scope, so repeated or concurrent calls share nothing.
pub fn render_layout(layout: &SparklineLayout, options: &SparklineOptions) -> Result<PlotBytes> {
    let base = options.base();
    let width = base.width;
    let height = base.height;

    if base.format == ImageFormat::Svg {
        let draw_start = std::time::Instant::now();
        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, (width, height)).into_drawing_area();
            draw_layout(&root, layout, options)?;
        } // End Plotters scope - svg is now released
        tracing::debug!("sparkline svg drawn in {:?}", draw_start.elapsed());
        return Ok(svg.into_bytes());
    }

    let draw_start = std::time::Instant::now();
    // RGB buffer (3 bytes per pixel); neither output format needs alpha
    let buffer_len = (width as usize)
        .checked_mul(height as usize)
        .and_then(|pixels| pixels.checked_mul(3))
        .ok_or_else(|| {
            SparklineError::invalid_input(format!("canvas {width}x{height} is too large"))
        })?;
    let mut pixel_buffer = vec![255u8; buffer_len];
    {
        let root = BitMapBackend::with_buffer(&mut pixel_buffer, (width, height))
            .into_drawing_area();
        draw_layout(&root, layout, options)?;
    } // End Plotters scope - pixel_buffer is now released
    tracing::debug!(
        "sparkline rasterized in {:?} ({}x{})",
        draw_start.elapsed(),
        width,
        height
    );

    let encode_start = std::time::Instant::now();
    let encoded = encode_rgb(&pixel_buffer, width, height, base.format, base.jpeg_quality)?;
    tracing::debug!(
        "sparkline {} encoding: {:?} ({} bytes)",
        base.format,
        encode_start.elapsed(),
        encoded.len()
    );

    Ok(encoded)
}

fn encode_rgb(
    pixels: &[u8],
    width: u32,
    height: u32,
    format: ImageFormat,
    jpeg_quality: u8,
) -> Result<PlotBytes> {
    let mut encoded_data = Vec::with_capacity(pixels.len() / 8);

    match format {
        ImageFormat::Png => {
            image::codecs::png::PngEncoder::new(&mut encoded_data)
                .write_image(pixels, width, height, image::ExtendedColorType::Rgb8)
                .map_err(|e| SparklineError::render(format!("failed to PNG encode: {e}")))?;
        }
        ImageFormat::Jpeg => {
            let mut encoder =
                image::codecs::jpeg::JpegEncoder::new_with_quality(&mut encoded_data, jpeg_quality);
            encoder
                .encode(pixels, width, height, image::ExtendedColorType::Rgb8)
                .map_err(|e| SparklineError::render(format!("failed to JPEG encode: {e}")))?;
        }
        ImageFormat::Svg => {
            return Err(SparklineError::render("svg output is not a raster format"));
        }
    }

    Ok(encoded_data)
}
