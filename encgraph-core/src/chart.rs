//! Three-panel comparison chart.
//!
//! One PNG with a title and three stacked scatter panels: VMAF, encoding time
//! and file size. Each encoder group is one series whose x values are the
//! positions within the group; its legend label carries the group mean.

use std::error::Error;
use std::ops::Range;
use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::encoder::EncoderType;
use crate::error::{CoreError, CoreResult};
use crate::reporting::{EncoderGroup, mean_label, mean_label_kb};

/// Output size in pixels.
pub const CHART_SIZE: (u32, u32) = (1000, 1200);

const FONT: &str = "sans-serif";
const POINT_RADIUS: i32 = 4;

/// Series colour per encoder.
#[must_use]
pub fn encoder_color(encoder: EncoderType) -> RGBColor {
    match encoder {
        EncoderType::ImageMagick => RGBColor(31, 119, 180),
        EncoderType::SvtAv1 => RGBColor(255, 127, 14),
        EncoderType::Libaom => RGBColor(214, 39, 40),
        EncoderType::Rav1e => RGBColor(44, 160, 44),
        EncoderType::Libjpeg => RGBColor(148, 103, 189),
    }
}

/// One series of a panel.
struct Series {
    encoder: EncoderType,
    values: Vec<f64>,
    label: String,
}

/// Writes the comparison chart for `groups` to `path` as PNG.
pub fn render_chart(title: &str, groups: &[EncoderGroup], path: &Path) -> CoreResult<()> {
    log::debug!("Rendering chart with {} group(s) to {}", groups.len(), path.display());

    let scores: Vec<Series> = groups
        .iter()
        .map(|g| Series {
            encoder: g.encoder,
            values: g.scores.clone(),
            label: mean_label(g.encoder, &g.scores),
        })
        .collect();
    let times: Vec<Series> = groups
        .iter()
        .map(|g| Series {
            encoder: g.encoder,
            values: g.times.clone(),
            label: mean_label(g.encoder, &g.times),
        })
        .collect();
    let sizes: Vec<Series> = groups
        .iter()
        .map(|g| Series {
            encoder: g.encoder,
            values: g.sizes.iter().map(|&s| s as f64).collect(),
            label: mean_label_kb(g.encoder, &g.sizes),
        })
        .collect();

    draw(title, path, &scores, &times, &sizes)
        .map_err(|e| CoreError::Chart(format!("{}: {}", path.display(), e)))
}

fn draw(
    title: &str,
    path: &Path,
    scores: &[Series],
    times: &[Series],
    sizes: &[Series],
) -> Result<(), Box<dyn Error>> {
    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;
    let root = root.titled(title, (FONT, 36))?;

    let panels = root.split_evenly((3, 1));
    draw_panel(&panels[0], "VMAF", scores, &|v: &f64| format!("{v:.0}"))?;
    draw_panel(&panels[1], "Encoding time", times, &|v: &f64| format!("{v:.1}"))?;
    draw_panel(&panels[2], "File size", sizes, &kb_label)?;

    root.present()?;
    Ok(())
}

fn draw_panel(
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
    caption: &str,
    series: &[Series],
    y_formatter: &dyn Fn(&f64) -> String,
) -> Result<(), Box<dyn Error>> {
    let x_range = x_range(series);
    let y_range = y_range(series);

    let mut chart = ChartBuilder::on(area)
        .caption(caption, (FONT, 22))
        .margin(12)
        .x_label_area_size(0)
        .y_label_area_size(70)
        .build_cartesian_2d(x_range, y_range)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_x_axis()
        .y_label_formatter(y_formatter)
        .draw()?;

    for s in series {
        let color = encoder_color(s.encoder);
        chart
            .draw_series(
                s.values
                    .iter()
                    .enumerate()
                    .map(|(i, &v)| Circle::new((i as f64, v), POINT_RADIUS, color.filled())),
            )?
            .label(s.label.as_str())
            .legend(move |(x, y)| Circle::new((x + 8, y), POINT_RADIUS, color.filled()));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::LowerRight)
        .background_style(&WHITE.mix(0.85))
        .border_style(&BLACK)
        .draw()?;
    Ok(())
}

/// `10240.0` -> `"10kb"`.
fn kb_label(bytes: &f64) -> String {
    format!("{}kb", (*bytes / 1024.0) as i64)
}

fn x_range(series: &[Series]) -> Range<f64> {
    let longest = series.iter().map(|s| s.values.len()).max().unwrap_or(0);
    -0.5..(longest.max(1) as f64 - 0.5)
}

fn y_range(series: &[Series]) -> Range<f64> {
    let (min, max) = series
        .iter()
        .flat_map(|s| s.values.iter().copied())
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));
    if !min.is_finite() || !max.is_finite() {
        return 0.0..1.0;
    }
    let pad = if max > min { (max - min) * 0.05 } else { max.abs().max(1.0) * 0.05 };
    (min - pad)..(max + pad)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(values: Vec<f64>) -> Series {
        Series {
            encoder: EncoderType::SvtAv1,
            values,
            label: String::new(),
        }
    }

    #[test]
    fn test_kb_label() {
        assert_eq!(kb_label(&10_240.0), "10kb");
        assert_eq!(kb_label(&1_500.0), "1kb");
        assert_eq!(kb_label(&0.0), "0kb");
    }

    #[test]
    fn test_ranges_cover_all_points() {
        let s = vec![series(vec![80.0, 90.0, 100.0]), series(vec![85.0])];
        assert_eq!(x_range(&s), -0.5..2.5);
        let y = y_range(&s);
        assert!(y.start < 80.0 && y.end > 100.0);
    }

    #[test]
    fn test_ranges_for_degenerate_input() {
        assert_eq!(x_range(&[]), -0.5..0.5);
        assert_eq!(y_range(&[]), 0.0..1.0);
        let flat = y_range(&[series(vec![5.0, 5.0])]);
        assert!(flat.start < 5.0 && flat.end > 5.0);
    }

    #[test]
    fn test_each_encoder_has_distinct_color() {
        let colors: Vec<RGBColor> = EncoderType::ALL.iter().map(|&e| encoder_color(e)).collect();
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
