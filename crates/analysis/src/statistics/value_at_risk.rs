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

use folio_core::math::linear_quantile;

use crate::{Returns, config::DEFAULT_VAR_CONFIDENCE, statistic::PortfolioStatistic};

/// Historical value at risk: the empirical return quantile at one minus the
/// confidence level.
///
/// At 95% confidence this is the 5th percentile of the observed returns, a
/// (typically negative) periodic return that was underperformed in only 5%
/// of periods. No distribution is assumed.
#[repr(C)]
#[derive(Debug)]
pub struct ValueAtRisk {
    confidence: f64,
}

impl ValueAtRisk {
    /// Creates a new [`ValueAtRisk`] instance.
    ///
    /// # Panics
    ///
    /// Panics if `confidence` is not strictly between 0 and 1.
    #[must_use]
    pub fn new(confidence: Option<f64>) -> Self {
        let confidence = confidence.unwrap_or(DEFAULT_VAR_CONFIDENCE);
        assert!(
            confidence > 0.0 && confidence < 1.0,
            "ValueAtRisk: confidence must be strictly between 0 and 1 (received {confidence})"
        );

        Self { confidence }
    }
}

impl PortfolioStatistic for ValueAtRisk {
    type Item = f64;

    fn name(&self) -> String {
        stringify!(ValueAtRisk).to_string()
    }

    fn calculate_from_returns(&self, returns: &Returns) -> Option<Self::Item> {
        if returns.len() < 2 {
            return None;
        }

        let mut sorted: Vec<f64> = returns.values().copied().collect();
        sorted.sort_by(|a, b| a.partial_cmp(b).expect("return values are never NaN"));

        linear_quantile(&sorted, 1.0 - self.confidence)
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
    fn test_too_few_returns() {
        let stat = ValueAtRisk::new(None);
        assert_eq!(stat.calculate_from_returns(&Returns::new()), None);
        assert_eq!(stat.calculate_from_returns(&create_returns(&[0.01])), None);
    }

    #[rstest]
    fn test_median_var() {
        // Confidence 0.5 selects the median return.
        let stat = ValueAtRisk::new(Some(0.5));
        let returns = create_returns(&[-0.03, -0.01, 0.0, 0.01, 0.03]);
        let result = stat.calculate_from_returns(&returns).unwrap();
        assert!(approx_eq!(f64, result, 0.0, epsilon = 1e-12));
    }

    #[rstest]
    fn test_var_is_low_quantile() {
        let stat = ValueAtRisk::new(Some(0.95));
        let returns = create_returns(&[-0.05, -0.02, -0.01, 0.0, 0.01, 0.02, 0.03, 0.04]);
        let result = stat.calculate_from_returns(&returns).unwrap();

        // 5th percentile sits between the two worst observations.
        assert!(result > -0.05 && result < -0.02);
    }

    #[rstest]
    #[should_panic(expected = "confidence must be strictly between 0 and 1")]
    fn test_new_panics_on_invalid_confidence() {
        let _ = ValueAtRisk::new(Some(1.0));
    }

    #[rstest]
    fn test_name() {
        let stat = ValueAtRisk::new(None);
        assert_eq!(stat.name(), "ValueAtRisk");
    }
}
