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

/// Annualized return: the mean periodic return scaled linearly to one year.
///
/// Linear scaling (`mean * period`) matches the convention used by the
/// dashboards this crate feeds; it is accurate for small periodic returns.
#[repr(C)]
#[derive(Debug)]
pub struct AnnualizedReturn {
    period: usize,
}

impl AnnualizedReturn {
    /// Creates a new [`AnnualizedReturn`] instance.
    #[must_use]
    pub fn new(period: Option<usize>) -> Self {
        Self {
            period: period.unwrap_or(DEFAULT_PERIODS_PER_YEAR),
        }
    }
}

impl PortfolioStatistic for AnnualizedReturn {
    type Item = f64;

    fn name(&self) -> String {
        stringify!(AnnualizedReturn).to_string()
    }

    fn calculate_from_returns(&self, returns: &Returns) -> Option<Self::Item> {
        if !self.check_valid_returns(returns) {
            return None;
        }

        let mean = self.calculate_mean(returns)?;
        Some(mean * self.period as f64)
    }
}
