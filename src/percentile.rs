//! Splitting ranked gene lists into a top percentile and the remainder
use std::cmp::Ordering;

use crate::genes::GeneId;
use crate::{f64_from_usize, GbaError, GbaResult};

/// Splits `sequence` into the leading `x` percent and the rest
///
/// The sequence must already be sorted, this is a purely positional split.
/// The size of `top` is `len * x / 100`, rounded half to even.
///
/// # Errors
///
/// [`GbaError::InvalidPercentage`] if `x` is not within `[0, 100]`
///
/// # Examples
///
/// ```
/// use gba_validation::percentile::take_top_percent;
///
/// let genes = ["A", "B", "C", "D", "E", "F", "G", "H", "I", "J"];
/// let (top, rest) = take_top_percent(&genes, 20.0).unwrap();
/// assert_eq!(top, ["A", "B"]);
/// assert_eq!(rest.len(), 8);
///
/// // 2.5 elements are rounded to 2
/// let (top, _) = take_top_percent(&genes[..5], 50.0).unwrap();
/// assert_eq!(top.len(), 2);
/// ```
pub fn take_top_percent<T>(sequence: &[T], x: f64) -> GbaResult<(&[T], &[T])> {
    if !(0.0..=100.0).contains(&x) {
        return Err(GbaError::InvalidPercentage(x));
    }
    let count = (f64_from_usize(sequence.len()) * x / 100.0).round_ties_even();
    // count is within [0, len] and integral
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let count = (count as usize).min(sequence.len());
    Ok(sequence.split_at(count))
}

/// Returns the genes ordered by descending value
///
/// Ties are ordered by ascending [`GeneId`]. `NaN` values are ranked last.
pub fn rank_descending<'a, I>(values: I) -> Vec<GeneId>
where
    I: IntoIterator<Item = (&'a GeneId, f64)>,
{
    let mut values: Vec<(&GeneId, f64)> = values.into_iter().collect();
    values.sort_by(|a, b| match (a.1.is_nan(), b.1.is_nan()) {
        (false, false) => b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)),
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (true, true) => a.0.cmp(b.0),
    });
    values.into_iter().map(|(id, _)| id.clone()).collect()
}
