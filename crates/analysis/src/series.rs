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

//! Time series types for the analysis domain.
//!
//! All series are request-scoped value types: created fresh per analysis
//! call, read-only once constructed, and discarded with the result.

use chrono::{DateTime, Utc};
use folio_core::correctness::{FAILED, check_positive_f64, check_predicate_true};
use serde::{Deserialize, Serialize};

use crate::{Returns, identifiers::Ticker};

/// An ordered sequence of (timestamp, closing price) pairs for one ticker.
///
/// Timestamps are strictly increasing with no duplicates, and every price is
/// a finite positive number; both invariants are enforced at construction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    ticker: Ticker,
    points: Vec<(DateTime<Utc>, f64)>,
}

impl PriceSeries {
    /// Creates a new [`PriceSeries`] instance with correctness checking.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Any price is NaN, infinite, zero, or negative.
    /// - Timestamps are not strictly increasing.
    pub fn new_checked(
        ticker: Ticker,
        points: Vec<(DateTime<Utc>, f64)>,
    ) -> anyhow::Result<Self> {
        for (_, price) in &points {
            check_positive_f64(*price, "price")?;
        }
        for window in points.windows(2) {
            check_predicate_true(
                window[0].0 < window[1].0,
                &format!(
                    "timestamps must be strictly increasing for '{ticker}': {} >= {}",
                    window[0].0, window[1].0
                ),
            )?;
        }

        Ok(Self { ticker, points })
    }

    /// Creates a new [`PriceSeries`] instance.
    ///
    /// # Panics
    ///
    /// Panics if any price is non-positive or non-finite, or if timestamps
    /// are not strictly increasing.
    #[must_use]
    pub fn new(ticker: Ticker, points: Vec<(DateTime<Utc>, f64)>) -> Self {
        Self::new_checked(ticker, points).expect(FAILED)
    }

    /// Returns the ticker this series belongs to.
    #[must_use]
    pub const fn ticker(&self) -> Ticker {
        self.ticker
    }

    /// Returns the (timestamp, close) pairs in chronological order.
    #[must_use]
    pub fn points(&self) -> &[(DateTime<Utc>, f64)] {
        &self.points
    }

    /// Returns the number of price points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns whether the series contains no price points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// An ordered sequence of (timestamp, periodic return) pairs for one ticker,
/// derived from a [`PriceSeries`] via percentage change between consecutive
/// closes.
///
/// Each return is indexed by the timestamp of the *later* of the two closes
/// it was derived from, so the series is one element shorter than its source.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReturnSeries {
    ticker: Ticker,
    values: Returns,
}

impl ReturnSeries {
    /// Creates a new [`ReturnSeries`] instance.
    #[must_use]
    pub const fn new(ticker: Ticker, values: Returns) -> Self {
        Self { ticker, values }
    }

    /// Returns the ticker this series belongs to.
    #[must_use]
    pub const fn ticker(&self) -> Ticker {
        self.ticker
    }

    /// Returns the time-indexed return values.
    #[must_use]
    pub const fn values(&self) -> &Returns {
        &self.values
    }

    /// Returns the number of periodic returns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns whether the series contains no returns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// The weighted return series of a whole portfolio, one entry per common
/// timestamp across the combined per-ticker series.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioReturns {
    values: Returns,
}

impl PortfolioReturns {
    /// Creates a new [`PortfolioReturns`] instance.
    #[must_use]
    pub const fn new(values: Returns) -> Self {
        Self { values }
    }

    /// Returns the time-indexed weighted return values.
    #[must_use]
    pub const fn values(&self) -> &Returns {
        &self.values
    }

    /// Returns the number of portfolio returns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns whether the portfolio series is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
