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

/// Annualized Sortino ratio: mean periodic return in excess of the per-period
/// risk-free rate, per unit of *downside* deviation.
///
/// Downside deviation is the root mean square of the negative returns only,
/// so profitable volatility is not penalized. Undefined (`None`) when the
/// series holds no losing periods.
#[repr(C)]
#[derive(Debug)]
pub struct SortinoRatio {
    period: usize,
    risk_free_rate: f64,
}

impl SortinoRatio {
    /// Creates a new [`SortinoRatio`] instance.
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

impl PortfolioStatistic for SortinoRatio {
    type Item = f64;

    fn name(&self) -> String {
        stringify!(SortinoRatio).to_string()
    }

    fn calculate_from_returns(&self, returns: &Returns) -> Option<Self::Item> {
        if returns.len() < 2 {
            return None;
        }

        let mean = self.calculate_mean(returns)?;

        let downside: Vec<f64> = returns.values().copied().filter(|r| *r < 0.0).collect();
        if downside.is_empty() {
            return None;
        }

        let downside_variance =
            downside.iter().map(|r| r.powi(2)).sum::<f64>() / downside.len() as f64;
        let downside_dev = downside_variance.sqrt();

        if downside_dev < f64::EPSILON {
            return None;
        }

        let periodic_rf = self.risk_free_rate / self.period as f64;
        let annualized_ratio = ((mean - periodic_rf) / downside_dev) * (self.period as f64).sqrt();

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
        let ratio = SortinoRatio::new(None, None);
        assert_eq!(ratio.calculate_from_returns(&Returns::new()), None);
    }

    #[rstest]
    fn test_no_downside_is_undefined() {
        let ratio = SortinoRatio::new(None, None);
        let returns = create_returns(&[0.01, 0.02, 0.005]);
        assert_eq!(ratio.calculate_from_returns(&returns), None);
    }

    #[rstest]
    fn test_valid_sortino_ratio() {
        let ratio = SortinoRatio::new(Some(252), None);
        let returns = create_returns(&[0.02, -0.01, 0.015, -0.005, 0.025]);
        let result = ratio.calculate_from_returns(&returns).unwrap();

        // mean = 0.011, downside dev = sqrt((0.01^2 + 0.005^2) / 2)
        let mean = 0.011;
        let downside_dev = ((0.01_f64.powi(2) + 0.005_f64.powi(2)) / 2.0).sqrt();
        let expected = mean / downside_dev * 252.0_f64.sqrt();
        assert!(approx_eq!(f64, result, expected, epsilon = 1e-12));
    }

    #[rstest]
    fn test_exceeds_sharpe_for_mixed_returns() {
        // Downside deviation ignores profitable volatility, so for a mixed
        // series the Sortino ratio typically exceeds the Sharpe ratio.
        let returns = create_returns(&[0.03, -0.005, 0.02, -0.004, 0.025]);

        let sortino = SortinoRatio::new(Some(252), None)
            .calculate_from_returns(&returns)
            .unwrap();
        let sharpe = crate::statistics::sharpe_ratio::SharpeRatio::new(Some(252), None)
            .calculate_from_returns(&returns)
            .unwrap();

        assert!(sortino > sharpe);
    }

    #[rstest]
    fn test_name() {
        let ratio = SortinoRatio::new(None, None);
        assert_eq!(ratio.name(), "SortinoRatio");
    }
}
