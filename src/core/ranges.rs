//! Integer range compression
//!
//! Formats an ascending list of integers as a comma-separated list in which
//! every run of more than two consecutive values is written `start-end`:
//! `[0, 1, 2, 5, 7, 8, 9]` becomes `0-2,5,7-9`. Runs of exactly two values
//! stay as two separate numbers.

use crate::config::defaults::MAX_RANGE_VALUES;
use crate::error::RangeError;

/// Compress an ascending list of integers into range notation
///
/// # Errors
///
/// Returns [`RangeError::NotAscending`] if any element is not strictly
/// greater than the one before it.
///
/// # Examples
///
/// ```
/// use katas::core::ranges::extract_ranges;
///
/// assert_eq!(extract_ranges(&[0, 1, 2, 5, 7, 8, 9]).unwrap(), "0-2,5,7-9");
/// assert_eq!(extract_ranges(&[1, 2, 4, 5]).unwrap(), "1,2,4,5");
/// ```
pub fn extract_ranges(nums: &[i64]) -> Result<String, RangeError> {
    if let Some(index) = nums.windows(2).position(|w| w[1] <= w[0]) {
        return Err(RangeError::NotAscending {
            index: index + 1,
            value: nums[index + 1],
        });
    }

    let runs = split_runs(nums);
    tracing::debug!("{} numbers form {} runs", nums.len(), runs.len());

    Ok(runs
        .into_iter()
        .map(format_run)
        .collect::<Vec<_>>()
        .join(","))
}

/// Expand range notation back into the list of integers
///
/// Accepts negative bounds, so `-3--1,2` yields `[-3, -2, -1, 2]`.
/// Whitespace around tokens is ignored and an empty string yields an empty
/// list. Order is preserved as written; no sorting is applied.
///
/// At most [`MAX_RANGE_VALUES`] numbers are produced; see
/// [`expand_ranges_with_limit`].
pub fn expand_ranges(expr: &str) -> Result<Vec<i64>, RangeError> {
    expand_ranges_with_limit(expr, MAX_RANGE_VALUES)
}

/// Expand range notation, producing at most `max_values` numbers
///
/// # Errors
///
/// Returns [`RangeError::TooLarge`] naming the first token that pushes the
/// total past `max_values`. Nothing is allocated for that token.
pub fn expand_ranges_with_limit(expr: &str, max_values: usize) -> Result<Vec<i64>, RangeError> {
    if expr.trim().is_empty() {
        return Ok(Vec::new());
    }

    let mut nums = Vec::new();
    let mut total: usize = 0;
    for token in expr.split(',').map(str::trim) {
        let invalid = || RangeError::InvalidToken {
            token: token.to_string(),
        };
        // Skip a leading sign when searching for the separator
        let separator = token
            .char_indices()
            .skip(1)
            .find(|&(_, c)| c == '-')
            .map(|(i, _)| i);

        let (start, end): (i64, i64) = match separator {
            Some(i) => {
                let start = token[..i].trim().parse().map_err(|_| invalid())?;
                let end = token[i + 1..].trim().parse().map_err(|_| invalid())?;
                if start > end {
                    return Err(RangeError::ReversedRange {
                        token: token.to_string(),
                    });
                }
                (start, end)
            }
            None => {
                let value = token.parse().map_err(|_| invalid())?;
                (value, value)
            }
        };

        let too_large = || RangeError::TooLarge {
            token: token.to_string(),
            max: max_values,
        };
        let count = end
            .abs_diff(start)
            .checked_add(1)
            .and_then(|c| usize::try_from(c).ok())
            .ok_or_else(too_large)?;
        total = total
            .checked_add(count)
            .filter(|&t| t <= max_values)
            .ok_or_else(too_large)?;

        nums.extend(start..=end);
    }

    tracing::debug!("Expanded '{expr}' into {total} numbers");

    Ok(nums)
}

/// Split into maximal runs of consecutive values
fn split_runs(nums: &[i64]) -> Vec<&[i64]> {
    let mut runs = Vec::new();
    let mut start = 0;
    for i in 1..=nums.len() {
        let continues = i < nums.len() && nums[i - 1].checked_add(1) == Some(nums[i]);
        if !continues {
            runs.push(&nums[start..i]);
            start = i;
        }
    }
    runs
}

fn format_run(run: &[i64]) -> String {
    match run {
        [first, .., last] if run.len() > 2 => format!("{first}-{last}"),
        _ => run
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(","),
    }
}
