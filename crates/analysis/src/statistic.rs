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

//! A common `PortfolioStatistic` trait.

use std::fmt::Debug;

use folio_core::math::sample_std;

use crate::Returns;

/// A statistic calculated from a time-indexed return series.
///
/// Implementations are pure: the same input always produces the same output,
/// and a statistic that is undefined for the given returns yields `None`.
pub trait PortfolioStatistic: Debug {
    type Item;

    /// Returns the name of this statistic for registry and display purposes.
    fn name(&self) -> String;

    /// Calculates the statistic from `returns`, or `None` when undefined.
    fn calculate_from_returns(&self, returns: &Returns) -> Option<Self::Item>;

    /// Returns whether `returns` holds enough data to calculate anything.
    fn check_valid_returns(&self, returns: &Returns) -> bool {
        !returns.is_empty()
    }

    /// Returns the sample mean of the return values, or `None` when empty.
    fn calculate_mean(&self, returns: &Returns) -> Option<f64> {
        if returns.is_empty() {
            return None;
        }
        Some(returns.values().sum::<f64>() / returns.len() as f64)
    }

    /// Returns the sample standard deviation (n - 1 denominator) of the
    /// return values, or `None` when fewer than two are present.
    fn calculate_std(&self, returns: &Returns) -> Option<f64> {
        let values: Vec<f64> = returns.values().copied().collect();
        sample_std(&values)
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeZone, Utc};
    use folio_core::approx_eq;
    use rstest::rstest;

    use super::*;

    #[derive(Debug)]
    struct MeanStatistic {}

    impl PortfolioStatistic for MeanStatistic {
        type Item = f64;

        fn name(&self) -> String {
            stringify!(MeanStatistic).to_string()
        }

        fn calculate_from_returns(&self, returns: &Returns) -> Option<Self::Item> {
            self.calculate_mean(returns)
        }
    }

    fn ts(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, day, 0, 0, 0).unwrap()
    }

    fn create_returns(values: &[f64]) -> Returns {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| (ts(i as u32 + 1), *v))
            .collect()
    }

    #[rstest]
    fn test_check_valid_returns() {
        let stat = MeanStatistic {};
        assert!(!stat.check_valid_returns(&Returns::new()));
        assert!(stat.check_valid_returns(&create_returns(&[0.01])));
    }

    #[rstest]
    fn test_calculate_mean() {
        let stat = MeanStatistic {};
        let returns = create_returns(&[0.01, 0.03]);
        assert!(approx_eq!(
            f64,
            stat.calculate_mean(&returns).unwrap(),
            0.02,
            epsilon = 1e-12
        ));
    }

    #[rstest]
    fn test_calculate_std_requires_two_values() {
        let stat = MeanStatistic {};
        assert_eq!(stat.calculate_std(&create_returns(&[0.01])), None);

        let std = stat.calculate_std(&create_returns(&[0.01, 0.03])).unwrap();
        assert!(approx_eq!(f64, std, 0.014_142_135_623_7, epsilon = 1e-10));
    }
}
