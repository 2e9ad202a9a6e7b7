pub mod markdown;
#[cfg(feature = "raster-chart")]
pub mod raster;
pub mod svg;

use crate::domain::model::BarrierResult;
use crate::utils::error::Result;

/// Shown in the summary report when the crate is built without `raster-chart`.
pub const RASTER_DISABLED_REASON: &str = "the raster chart backend is not enabled in this build";

/// PNG bytes of the ranked bar chart, or `None` when the raster backend is
/// compiled out.
#[cfg(feature = "raster-chart")]
pub fn ranked_chart_png(results: &[BarrierResult]) -> Result<Option<Vec<u8>>> {
    raster::render_ranked_chart(results).map(Some)
}

#[cfg(not(feature = "raster-chart"))]
pub fn ranked_chart_png(_results: &[BarrierResult]) -> Result<Option<Vec<u8>>> {
    Ok(None)
}
