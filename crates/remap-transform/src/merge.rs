//! First-non-null column merging.

use remap_model::CellValue;

/// Fills the accumulator's missing cells from `next`.
///
/// For each row, the accumulator's value wins whenever it is non-missing,
/// regardless of what `next` holds. Folding a merge group in table-column
/// order therefore gives earlier columns precedence and lets later ones
/// fill the gaps.
///
/// Both sequences must have the same length.
pub fn merge_into(accumulator: Vec<CellValue>, next: Vec<CellValue>) -> Vec<CellValue> {
    debug_assert_eq!(accumulator.len(), next.len());
    accumulator
        .into_iter()
        .zip(next)
        .map(|(current, fallback)| {
            if current.is_missing() {
                fallback
            } else {
                current
            }
        })
        .collect()
}
