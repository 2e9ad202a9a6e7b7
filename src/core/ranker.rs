use crate::domain::model::{BarrierResult, GroupComparison};

/// Sort by count, highest first. Equal counts keep their column order.
pub fn rank_by_count(results: &mut [BarrierResult]) {
    results.sort_by(|a, b| b.count.cmp(&a.count));
}

/// Compare the lowest- and highest-percentage groups reporting `label`.
///
/// Results are stable-sorted by percentage; the first is the lowest and the
/// last the highest. Returns `None` when both are the same group.
pub fn compare_groups(results: &[BarrierResult], label: &str) -> Option<GroupComparison> {
    let mut matching: Vec<&BarrierResult> = results.iter().filter(|r| r.label == label).collect();
    matching.sort_by(|a, b| a.percentage().total_cmp(&b.percentage()));

    let lowest = *matching.first()?;
    let highest = *matching.last()?;
    if highest.group == lowest.group {
        return None;
    }

    Some(GroupComparison {
        label: label.to_string(),
        highest: highest.clone(),
        lowest: lowest.clone(),
    })
}
