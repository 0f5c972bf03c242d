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

//! Errors associated with portfolio analysis operations.
//!
//! Every failure indicates invalid input rather than transient system state:
//! computations are pure and deterministic, so errors surface directly to the
//! caller with no retries or silent recovery. An undefined metric (e.g. a
//! Sharpe ratio over zero-volatility returns) is *not* an error; it is
//! reported as `None` in the metric snapshot.

use crate::identifiers::Ticker;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// The price series is too short to derive periodic returns.
    #[error("Insufficient data for {ticker}: {len} price points, at least {min} required")]
    InsufficientData {
        ticker: Ticker,
        len: usize,
        min: usize,
    },

    /// The ticker sets of the return series and the weight mapping differ.
    #[error(
        "Ticker sets differ: {missing_from_series:?} weighted but without return series, \
         {missing_from_weights:?} with return series but unweighted"
    )]
    MismatchedTickers {
        missing_from_series: Vec<Ticker>,
        missing_from_weights: Vec<Ticker>,
    },

    /// More than one return series was supplied for the same ticker.
    #[error("Duplicate return series for {0}")]
    DuplicateTicker(Ticker),

    /// The weight mapping violates the portfolio weight invariant.
    #[error("Invalid portfolio weights: {0}")]
    InvalidWeights(String),

    /// A return series does not share the common timestamp set.
    #[error("Return series for {ticker} is not aligned to the common timestamp set")]
    MisalignedSeries { ticker: Ticker },
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn test_insufficient_data_display() {
        let error = AnalysisError::InsufficientData {
            ticker: Ticker::new("AAPL"),
            len: 1,
            min: 2,
        };
        assert_eq!(
            error.to_string(),
            "Insufficient data for AAPL: 1 price points, at least 2 required"
        );
    }

    #[rstest]
    fn test_invalid_weights_display() {
        let error = AnalysisError::InvalidWeights("weights must sum to 1.0, was 0.5".to_string());
        assert_eq!(
            error.to_string(),
            "Invalid portfolio weights: weights must sum to 1.0, was 0.5"
        );
    }

    #[rstest]
    fn test_misaligned_series_display() {
        let error = AnalysisError::MisalignedSeries {
            ticker: Ticker::new("GOOGL"),
        };
        assert_eq!(
            error.to_string(),
            "Return series for GOOGL is not aligned to the common timestamp set"
        );
    }
}
