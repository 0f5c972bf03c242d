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

//! Configuration for the portfolio analyzer.

use folio_core::correctness::{
    FAILED, check_in_range_inclusive_f64, check_non_negative_f64, check_predicate_true,
};
use serde::{Deserialize, Serialize};

/// Annualization periods for daily data (trading days per year).
pub const DEFAULT_PERIODS_PER_YEAR: usize = 252;

/// Default confidence level for historical value at risk.
pub const DEFAULT_VAR_CONFIDENCE: f64 = 0.95;

/// Configuration for a [`PortfolioAnalyzer`](crate::analyzer::PortfolioAnalyzer).
///
/// Passed explicitly at construction; there is no process-wide state.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// The number of return periods per year used for annualization
    /// (252 for daily equity data).
    pub periods_per_year: usize,

    /// The annual risk-free rate used for excess return calculations.
    pub risk_free_rate: f64,

    /// The confidence level for historical value at risk, in (0, 1).
    pub var_confidence: f64,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            periods_per_year: DEFAULT_PERIODS_PER_YEAR,
            risk_free_rate: 0.0,
            var_confidence: DEFAULT_VAR_CONFIDENCE,
        }
    }
}

impl AnalyzerConfig {
    /// Creates a new [`AnalyzerConfig`] instance with correctness checking.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `periods_per_year` is zero.
    /// - `risk_free_rate` is negative or non-finite.
    /// - `var_confidence` is outside (0, 1).
    pub fn new_checked(
        periods_per_year: usize,
        risk_free_rate: f64,
        var_confidence: f64,
    ) -> anyhow::Result<Self> {
        check_predicate_true(periods_per_year > 0, "periods_per_year must be positive")?;
        check_non_negative_f64(risk_free_rate, stringify!(risk_free_rate))?;
        check_in_range_inclusive_f64(var_confidence, 0.0, 1.0, stringify!(var_confidence))?;
        check_predicate_true(
            var_confidence > 0.0 && var_confidence < 1.0,
            "var_confidence must be strictly between 0 and 1",
        )?;

        Ok(Self {
            periods_per_year,
            risk_free_rate,
            var_confidence,
        })
    }

    /// Creates a new [`AnalyzerConfig`] instance.
    ///
    /// # Panics
    ///
    /// Panics under the same conditions [`Self::new_checked`] errors.
    #[must_use]
    pub fn new(periods_per_year: usize, risk_free_rate: f64, var_confidence: f64) -> Self {
        Self::new_checked(periods_per_year, risk_free_rate, var_confidence).expect(FAILED)
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn test_default_config() {
        let config = AnalyzerConfig::default();
        assert_eq!(config.periods_per_year, 252);
        assert_eq!(config.risk_free_rate, 0.0);
        assert_eq!(config.var_confidence, 0.95);
    }

    #[rstest]
    fn test_new_checked_valid() {
        let config = AnalyzerConfig::new_checked(365, 0.05, 0.99).unwrap();
        assert_eq!(config.periods_per_year, 365);
        assert_eq!(config.risk_free_rate, 0.05);
    }

    #[rstest]
    #[case(0, 0.0, 0.95)]
    #[case(252, -0.05, 0.95)]
    #[case(252, 0.0, 0.0)]
    #[case(252, 0.0, 1.0)]
    #[case(252, f64::NAN, 0.95)]
    fn test_new_checked_invalid(
        #[case] periods_per_year: usize,
        #[case] risk_free_rate: f64,
        #[case] var_confidence: f64,
    ) {
        let result = AnalyzerConfig::new_checked(periods_per_year, risk_free_rate, var_confidence);
        assert!(result.is_err());
    }
}
