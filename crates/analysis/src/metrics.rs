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

//! The risk metric snapshot returned per analysis request.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// An immutable snapshot of portfolio risk metrics, computed once per
/// analysis request.
///
/// A metric that is undefined for the given return series (for example a
/// Sharpe ratio over zero-volatility returns, or any annualized figure over
/// an empty series) is `None` rather than an error or a NaN sentinel: the
/// presentation layer decides how to display the absence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RiskMetrics {
    /// Mean periodic return scaled to one year.
    pub annualized_return: Option<f64>,

    /// Sample standard deviation of returns scaled by the square root of the
    /// periods per year.
    pub annualized_volatility: Option<f64>,

    /// Annualized excess return per unit of volatility; `None` when the
    /// return standard deviation is zero.
    pub sharpe_ratio: Option<f64>,

    /// Annualized excess return per unit of downside deviation; `None` when
    /// no losing periods exist.
    pub sortino_ratio: Option<f64>,

    /// Largest peak-to-trough decline of the compounded return series,
    /// expressed as a non-positive fraction.
    pub max_drawdown: Option<f64>,

    /// Historical value at risk: the return quantile at one minus the
    /// configured confidence level.
    pub value_at_risk: Option<f64>,
}

impl Display for RiskMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn fmt_opt(value: Option<f64>) -> String {
            value.map_or_else(|| "None".to_string(), |v| format!("{v:.4}"))
        }

        write!(
            f,
            "RiskMetrics(ret={}, vol={}, sharpe={}, sortino={}, mdd={}, var={})",
            fmt_opt(self.annualized_return),
            fmt_opt(self.annualized_volatility),
            fmt_opt(self.sharpe_ratio),
            fmt_opt(self.sortino_ratio),
            fmt_opt(self.max_drawdown),
            fmt_opt(self.value_at_risk),
        )
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
