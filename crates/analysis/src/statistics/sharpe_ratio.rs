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

use crate::{Returns, config::DEFAULT_PERIODS_PER_YEAR, statistic::PortfolioStatistic};

/// Annualized Sharpe ratio: mean periodic return in excess of the per-period
/// risk-free rate, per unit of return standard deviation.
///
/// `(mean - rf / period) / std * sqrt(period)`
///
/// Undefined (`None`) when fewer than two returns exist or when the standard
/// deviation is zero.
#[repr(C)]
#[derive(Debug)]
pub struct SharpeRatio {
    period: usize,
    risk_free_rate: f64,
}

impl SharpeRatio {
    /// Creates a new [`SharpeRatio`] instance.
    ///
    /// `risk_free_rate` is the *annual* rate; it is de-annualized internally.
    #[must_use]
    pub fn new(period: Option<usize>, risk_free_rate: Option<f64>) -> Self {
        Self {
            period: period.unwrap_or(DEFAULT_PERIODS_PER_YEAR),
            risk_free_rate: risk_free_rate.unwrap_or(0.0),
        }
    }
}

impl PortfolioStatistic for SharpeRatio {
    type Item = f64;

    fn name(&self) -> String {
        stringify!(SharpeRatio).to_string()
    }

    fn calculate_from_returns(&self, returns: &Returns) -> Option<Self::Item> {
        if !self.check_valid_returns(returns) {
            return None;
        }

        let mean = self.calculate_mean(returns)?;
        let std = self.calculate_std(returns)?;

        if std < f64::EPSILON {
            return None;
        }

        let periodic_rf = self.risk_free_rate / self.period as f64;
        let annualized_ratio = ((mean - periodic_rf) / std) * (self.period as f64).sqrt();

        Some(annualized_ratio)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeZone, Utc};
    use folio_core::approx_eq;
    use rstest::rstest;

    use super::*;

    fn create_returns(values: &[f64]) -> Returns {
        let start: DateTime<Utc> = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        values
            .iter()
            .enumerate()
            .map(|(i, v)| (start + chrono::Duration::days(i as i64), *v))
            .collect()
    }

    #[rstest]
    fn test_empty_returns() {
        let ratio = SharpeRatio::new(None, None);
        assert_eq!(ratio.calculate_from_returns(&Returns::new()), None);
    }

    #[rstest]
    fn test_zero_std_dev_is_undefined() {
        let ratio = SharpeRatio::new(None, None);
        let returns = create_returns(&[0.01; 10]);
        assert_eq!(ratio.calculate_from_returns(&returns), None);
    }

    #[rstest]
    fn test_valid_sharpe_ratio() {
        let ratio = SharpeRatio::new(Some(252), None);
        let returns = create_returns(&[0.01, -0.02, 0.015, -0.005, 0.025]);
        let result = ratio.calculate_from_returns(&returns).unwrap();

        // mean = 0.005, sample std = 0.018371..., sharpe = mean / std * sqrt(252)
        let mean = 0.005;
        let std = ratio.calculate_std(&returns).unwrap();
        let expected = mean / std * 252.0_f64.sqrt();
        assert!(approx_eq!(f64, result, expected, epsilon = 1e-12));
        assert!(result > 0.0);
    }

    #[rstest]
    fn test_risk_free_rate_reduces_ratio() {
        let returns = create_returns(&[0.01, -0.02, 0.015, -0.005, 0.025]);

        let without_rf = SharpeRatio::new(Some(252), None)
            .calculate_from_returns(&returns)
            .unwrap();
        let with_rf = SharpeRatio::new(Some(252), Some(0.05))
            .calculate_from_returns(&returns)
            .unwrap();

        assert!(with_rf < without_rf);
    }

    #[rstest]
    fn test_name() {
        let ratio = SharpeRatio::new(None, None);
        assert_eq!(ratio.name(), "SharpeRatio");
    }
}
