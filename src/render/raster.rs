//! PNG horizontal bar chart of the top-ranked barriers.

use crate::domain::model::BarrierResult;
use crate::utils::error::{ReportError, Result};
use image::{ImageFormat, RgbImage};
use plotters::prelude::*;
use std::io::Cursor;

const WIDTH: u32 = 1600;
const HEIGHT: u32 = 800;
const BAR_COLOR: RGBColor = RGBColor(0x3b, 0x82, 0xf6);
const MAX_LABEL_CHARS: usize = 80;

/// Draw `results` (already ranked and truncated) as horizontal bars, the
/// first result on top, and encode the image as PNG.
pub fn render_ranked_chart(results: &[BarrierResult]) -> Result<Vec<u8>> {
    let mut pixels = vec![0u8; (WIDTH * HEIGHT * 3) as usize];
    {
        let root = BitMapBackend::with_buffer(&mut pixels, (WIDTH, HEIGHT)).into_drawing_area();
        draw_ranked_chart(&root, results).map_err(ReportError::chart)?;
        root.present().map_err(ReportError::chart)?;
    }

    let image = RgbImage::from_raw(WIDTH, HEIGHT, pixels).ok_or_else(|| ReportError::ChartError {
        message: "pixel buffer does not match chart dimensions".to_string(),
    })?;

    let mut png = Cursor::new(Vec::new());
    image
        .write_to(&mut png, ImageFormat::Png)
        .map_err(ReportError::chart)?;
    Ok(png.into_inner())
}

fn draw_ranked_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    results: &[BarrierResult],
) -> std::result::Result<(), Box<dyn std::error::Error + 'static>>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)?;

    let rows = results.len();
    let max_count = results.iter().map(|r| r.count).max().unwrap_or(0).max(1) as u32;
    let labels: Vec<String> = results.iter().map(|r| shorten(&r.label)).collect();

    let mut chart = ChartBuilder::on(root)
        .caption(
            format!("Top {} Perceived CPA Licensure Barriers", rows),
            ("sans-serif", 28),
        )
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(560)
        .build_cartesian_2d(0u32..max_count + max_count / 10 + 1, (0..rows).into_segmented())?;

    chart
        .configure_mesh()
        .disable_y_mesh()
        .y_labels(rows.max(1))
        .y_label_formatter(&|value: &SegmentValue<usize>| match value {
            SegmentValue::CenterOf(row) if *row < rows => labels[rows - 1 - *row].clone(),
            _ => String::new(),
        })
        .x_desc("Respondents")
        .label_style(("sans-serif", 14))
        .draw()?;

    chart.draw_series(
        Histogram::horizontal(&chart)
            .style(BAR_COLOR.filled())
            .margin(6)
            .data(
                results
                    .iter()
                    .enumerate()
                    .map(|(rank, r)| (rows - 1 - rank, r.count as u32)),
            ),
    )?;

    Ok(())
}

fn shorten(label: &str) -> String {
    let flat = label.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= MAX_LABEL_CHARS {
        flat
    } else {
        let cut: String = flat.chars().take(MAX_LABEL_CHARS - 3).collect();
        format!("{}...", cut.trim_end())
    }
}
