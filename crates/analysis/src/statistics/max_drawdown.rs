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

use crate::{Returns, statistic::PortfolioStatistic};

/// Maximum drawdown: the largest peak-to-trough decline of the compounded
/// return series, as a non-positive fraction.
///
/// The returns are compounded into a wealth curve from a base of 1.0, and
/// the minimum of `wealth / running_peak - 1` is taken over the curve. The
/// result is 0.0 for a non-decreasing curve and negative otherwise.
#[repr(C)]
#[derive(Debug)]
pub struct MaxDrawdown {}

impl PortfolioStatistic for MaxDrawdown {
    type Item = f64;

    fn name(&self) -> String {
        stringify!(MaxDrawdown).to_string()
    }

    fn calculate_from_returns(&self, returns: &Returns) -> Option<Self::Item> {
        if !self.check_valid_returns(returns) {
            return None;
        }

        let mut wealth = 1.0;
        let mut peak = 1.0;
        let mut max_drawdown = 0.0_f64;

        for r in returns.values() {
            wealth *= 1.0 + r;
            if wealth > peak {
                peak = wealth;
            }
            let drawdown = wealth / peak - 1.0;
            if drawdown < max_drawdown {
                max_drawdown = drawdown;
            }
        }

        Some(max_drawdown)
    }
}
