//! Outward search pattern for alternative-date candidates

/// Signed day offsets walking away from a candidate start date.
///
/// Yields `-step, +step, -2*step, +2*step, ...` so the nearest
/// candidates come first, backward before forward at equal distance.
/// Offset zero (the candidate itself) is never yielded. The walk stops
/// once the distance would exceed `horizon_days`, which bounds every
/// search that consumes it.
pub(crate) fn outward_offsets(horizon_days: u32, step_days: u32) -> impl Iterator<Item = i64> {
    let step = i64::from(step_days.max(1));
    let max_steps = i64::from(horizon_days) / step;
    (1..=max_steps).flat_map(move |k| [-k * step, k * step])
}
