//! Vector bar chart for the group comparison, drawn on the plotters SVG backend.

use crate::domain::model::BarrierResult;
use crate::utils::error::{ReportError, Result};
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

const WIDTH: u32 = 640;
const HEIGHT: u32 = 360;
const MARGIN_TOP: i32 = 50;
const MARGIN_RIGHT: i32 = 40;
const MARGIN_BOTTOM: i32 = 60;
const MARGIN_LEFT: i32 = 60;

pub const PALETTE: [RGBColor; 4] = [
    RGBColor(0x4c, 0x78, 0xa8),
    RGBColor(0xf5, 0x85, 0x18),
    RGBColor(0x54, 0xa2, 0x4b),
    RGBColor(0xe4, 0x57, 0x56),
];
const TEXT_COLOR: RGBColor = RGBColor(0x1f, 0x2d, 0x3d);
const AXIS_COLOR: RGBColor = RGBColor(0x9a, 0xa5, 0xb1);
const FONT: &str = "sans-serif";

/// Bar color for the bar at `index`; cycles through [`PALETTE`].
pub fn bar_color(index: usize) -> RGBColor {
    PALETTE[index % PALETTE.len()]
}

/// Top of the vertical scale: 100%, or 1.2x the tallest bar if that is larger.
pub fn scale_max(percentages: &[f64]) -> f64 {
    let tallest = percentages.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if tallest.is_finite() {
        (tallest * 1.2).max(100.0)
    } else {
        100.0
    }
}

/// Render one bar per group result, labeled `pct% (count/total)` above the
/// bar and with the group name below the axis.
pub fn render_group_chart(title: &str, results: &[BarrierResult]) -> Result<String> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (WIDTH, HEIGHT)).into_drawing_area();
        draw_group_chart(&root, title, results).map_err(ReportError::chart)?;
        root.present().map_err(ReportError::chart)?;
    }
    Ok(svg)
}

fn draw_group_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    title: &str,
    results: &[BarrierResult],
) -> std::result::Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    root.fill(&WHITE)?;

    let width = WIDTH as i32;
    let height = HEIGHT as i32;
    let chart_width = (width - MARGIN_LEFT - MARGIN_RIGHT) as f64;
    let chart_height = (height - MARGIN_TOP - MARGIN_BOTTOM) as f64;
    let baseline = height - MARGIN_BOTTOM;

    let percentages: Vec<f64> = results.iter().map(BarrierResult::percentage).collect();
    let max_value = scale_max(&percentages);
    let slots = results.len().max(1) as f64;
    let bar_spacing = chart_width / slots;
    let bar_width = bar_spacing * 0.6;

    let centered = Pos::new(HPos::Center, VPos::Bottom);
    let label = (FONT, 12).into_font().color(&TEXT_COLOR);

    root.draw(&Text::new(
        title.to_string(),
        (width / 2, 24),
        (FONT, 16).into_font().color(&TEXT_COLOR).pos(centered),
    ))?;

    let axis = AXIS_COLOR.stroke_width(1);
    root.draw(&PathElement::new(
        vec![(MARGIN_LEFT, MARGIN_TOP), (MARGIN_LEFT, baseline)],
        axis,
    ))?;
    root.draw(&PathElement::new(
        vec![(MARGIN_LEFT, baseline), (width - MARGIN_RIGHT, baseline)],
        axis,
    ))?;

    root.draw(&Text::new(
        "100%",
        (MARGIN_LEFT, MARGIN_TOP - 10),
        label.clone().pos(Pos::new(HPos::Left, VPos::Bottom)),
    ))?;
    root.draw(&Text::new(
        "0%",
        (MARGIN_LEFT, baseline + 30),
        label.clone().pos(Pos::new(HPos::Left, VPos::Bottom)),
    ))?;
    root.draw(&Text::new(
        "Percentage indicating barrier",
        (MARGIN_LEFT - 45, MARGIN_TOP + chart_height as i32 / 2),
        (FONT, 12)
            .into_font()
            .transform(FontTransform::Rotate270)
            .color(&TEXT_COLOR)
            .pos(Pos::new(HPos::Center, VPos::Center)),
    ))?;

    for (idx, (result, value)) in results.iter().zip(&percentages).enumerate() {
        let x = MARGIN_LEFT as f64 + idx as f64 * bar_spacing + (bar_spacing - bar_width) / 2.0;
        let y = MARGIN_TOP as f64 + chart_height * (1.0 - value / max_value);
        let center = (x + bar_width / 2.0).round() as i32;

        root.draw(&Rectangle::new(
            [
                (x.round() as i32, y.round() as i32),
                ((x + bar_width).round() as i32, baseline),
            ],
            bar_color(idx).filled(),
        ))?;
        root.draw(&Text::new(
            format!("{:.1}% ({}/{})", value, result.count, result.total),
            (center, y.round() as i32 - 6),
            label.clone().pos(centered),
        ))?;
        root.draw(&Text::new(
            result.group.clone().unwrap_or_default(),
            (center, baseline + 20),
            label.clone().pos(centered),
        ))?;
    }

    Ok(())
}
