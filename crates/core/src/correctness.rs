// -------------------------------------------------------------------------------------------------
//  Copyright (C) 2015-2025 Nautech Systems Pty Ltd. All rights reserved.
//  https://nautechsystems.io
//
//  Licensed under the GNU Lesser General Public License Version 3.0 (the "License");
//  You may not use this file except in compliance with the License.
//  You may obtain a copy of the License at https://www.gnu.org/licenses/lgpl-3.0.en.html
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
// -------------------------------------------------------------------------------------------------

//! Functions for validating inputs at construction boundaries.
//!
//! These checks return an [`anyhow::Result`] so that fallible `new_checked`
//! constructors can propagate a descriptive message, while the panicking `new`
//! variants expect with [`FAILED`].

/// Common message prefix for condition check failures.
pub const FAILED: &str = "Condition failed:";

/// Checks the `predicate` is true.
///
/// # Errors
///
/// Returns an error with `fail_msg` if the predicate is false.
pub fn check_predicate_true(predicate: bool, fail_msg: &str) -> anyhow::Result<()> {
    if !predicate {
        anyhow::bail!("{fail_msg}")
    }
    Ok(())
}

/// Checks the `value` is a finite, positive (> 0) float.
///
/// # Errors
///
/// Returns an error if `value` is NaN, infinite, zero, or negative.
pub fn check_positive_f64(value: f64, param: &str) -> anyhow::Result<()> {
    if value.is_nan() || value.is_infinite() {
        anyhow::bail!("invalid f64 for '{param}', was {value}")
    }
    if value <= 0.0 {
        anyhow::bail!("invalid f64 for '{param}' not positive, was {value}")
    }
    Ok(())
}

/// Checks the `value` is a finite, non-negative (>= 0) float.
///
/// # Errors
///
/// Returns an error if `value` is NaN, infinite, or negative.
pub fn check_non_negative_f64(value: f64, param: &str) -> anyhow::Result<()> {
    if value.is_nan() || value.is_infinite() {
        anyhow::bail!("invalid f64 for '{param}', was {value}")
    }
    if value < 0.0 {
        anyhow::bail!("invalid f64 for '{param}' negative, was {value}")
    }
    Ok(())
}

/// Checks the `value` is within the inclusive range [`l`, `r`].
///
/// # Errors
///
/// Returns an error if `value` is NaN, infinite, or out of range.
pub fn check_in_range_inclusive_f64(value: f64, l: f64, r: f64, param: &str) -> anyhow::Result<()> {
    if value.is_nan() || value.is_infinite() {
        anyhow::bail!("invalid f64 for '{param}', was {value}")
    }
    if value < l || value > r {
        anyhow::bail!("invalid f64 for '{param}' not in range [{l}, {r}], was {value}")
    }
    Ok(())
}

/// Checks the `slice` is not empty.
///
/// # Errors
///
/// Returns an error if the slice is empty.
pub fn check_slice_not_empty<T>(slice: &[T], param: &str) -> anyhow::Result<()> {
    if slice.is_empty() {
        anyhow::bail!("the '{param}' slice was empty")
    }
    Ok(())
}

/// Checks the string `s` is not empty or whitespace-only.
///
/// # Errors
///
/// Returns an error if the string contains no non-whitespace characters.
pub fn check_valid_string(s: &str, param: &str) -> anyhow::Result<()> {
    if s.trim().is_empty() {
        anyhow::bail!("invalid string for '{param}', was empty")
    }
    Ok(())
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(true)]
    fn test_check_predicate_true_ok(#[case] predicate: bool) {
        assert!(check_predicate_true(predicate, "failed").is_ok());
    }

    #[rstest]
    fn test_check_predicate_true_err() {
        let result = check_predicate_true(false, "the weights must sum to one");
        assert_eq!(
            result.unwrap_err().to_string(),
            "the weights must sum to one"
        );
    }

    #[rstest]
    #[case(0.1)]
    #[case(1.0)]
    #[case(1e12)]
    fn test_check_positive_f64_ok(#[case] value: f64) {
        assert!(check_positive_f64(value, "value").is_ok());
    }

    #[rstest]
    #[case(0.0)]
    #[case(-1.0)]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    fn test_check_positive_f64_err(#[case] value: f64) {
        assert!(check_positive_f64(value, "value").is_err());
    }

    #[rstest]
    #[case(0.0)]
    #[case(0.25)]
    fn test_check_non_negative_f64_ok(#[case] value: f64) {
        assert!(check_non_negative_f64(value, "value").is_ok());
    }

    #[rstest]
    #[case(-0.25)]
    #[case(f64::NAN)]
    fn test_check_non_negative_f64_err(#[case] value: f64) {
        assert!(check_non_negative_f64(value, "value").is_err());
    }

    #[rstest]
    #[case(0.0, 0.0, 1.0)]
    #[case(0.95, 0.0, 1.0)]
    #[case(1.0, 0.0, 1.0)]
    fn test_check_in_range_inclusive_f64_ok(#[case] value: f64, #[case] l: f64, #[case] r: f64) {
        assert!(check_in_range_inclusive_f64(value, l, r, "value").is_ok());
    }

    #[rstest]
    #[case(1.01, 0.0, 1.0)]
    #[case(-0.01, 0.0, 1.0)]
    #[case(f64::NAN, 0.0, 1.0)]
    fn test_check_in_range_inclusive_f64_err(#[case] value: f64, #[case] l: f64, #[case] r: f64) {
        assert!(check_in_range_inclusive_f64(value, l, r, "value").is_err());
    }

    #[rstest]
    fn test_check_slice_not_empty() {
        assert!(check_slice_not_empty(&[1.0], "prices").is_ok());
        assert!(check_slice_not_empty::<f64>(&[], "prices").is_err());
    }

    #[rstest]
    fn test_check_valid_string() {
        assert!(check_valid_string("AAPL", "ticker").is_ok());
        assert!(check_valid_string("  ", "ticker").is_err());
        assert!(check_valid_string("", "ticker").is_err());
    }
}
