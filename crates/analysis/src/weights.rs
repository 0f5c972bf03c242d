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

//! Portfolio weight mapping and its validation.

use folio_core::correctness::FAILED;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{error::AnalysisError, identifiers::Ticker};

/// Tolerance applied when checking that weights sum to 1.0.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// A fractional allocation per ticker across a portfolio.
///
/// Weights are non-negative and sum to 1.0 within [`WEIGHT_SUM_TOLERANCE`];
/// both invariants are enforced at construction. Iteration order follows
/// insertion order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PortfolioWeights {
    weights: IndexMap<Ticker, f64>,
}

impl PortfolioWeights {
    /// Creates a new [`PortfolioWeights`] instance with correctness checking.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InvalidWeights`] if:
    /// - The mapping is empty.
    /// - Any weight is negative or non-finite.
    /// - The weights do not sum to 1.0 within [`WEIGHT_SUM_TOLERANCE`].
    pub fn new_checked(weights: IndexMap<Ticker, f64>) -> Result<Self, AnalysisError> {
        if weights.is_empty() {
            return Err(AnalysisError::InvalidWeights(
                "weight mapping was empty".to_string(),
            ));
        }

        for (ticker, weight) in &weights {
            if !weight.is_finite() || *weight < 0.0 {
                return Err(AnalysisError::InvalidWeights(format!(
                    "weight for {ticker} must be non-negative and finite, was {weight}"
                )));
            }
        }

        let sum: f64 = weights.values().sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(AnalysisError::InvalidWeights(format!(
                "weights must sum to 1.0 (tolerance {WEIGHT_SUM_TOLERANCE}), was {sum}"
            )));
        }

        Ok(Self { weights })
    }

    /// Creates a new [`PortfolioWeights`] instance.
    ///
    /// # Panics
    ///
    /// Panics if the mapping violates the weight invariant (see
    /// [`Self::new_checked`]).
    #[must_use]
    pub fn new(weights: IndexMap<Ticker, f64>) -> Self {
        Self::new_checked(weights).expect(FAILED)
    }

    /// Creates a new [`PortfolioWeights`] instance from (symbol, weight)
    /// pairs with correctness checking.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InvalidWeights`] under the same conditions as
    /// [`Self::new_checked`], or if a symbol appears more than once.
    pub fn from_pairs<'a, I>(pairs: I) -> Result<Self, AnalysisError>
    where
        I: IntoIterator<Item = (&'a str, f64)>,
    {
        let mut weights = IndexMap::new();
        for (symbol, weight) in pairs {
            let ticker = Ticker::new_checked(symbol)
                .map_err(|e| AnalysisError::InvalidWeights(e.to_string()))?;
            if weights.insert(ticker, weight).is_some() {
                return Err(AnalysisError::InvalidWeights(format!(
                    "duplicate weight for {ticker}"
                )));
            }
        }
        Self::new_checked(weights)
    }

    /// Returns the weight assigned to `ticker`, if present.
    #[must_use]
    pub fn get(&self, ticker: &Ticker) -> Option<f64> {
        self.weights.get(ticker).copied()
    }

    /// Returns an iterator over the tickers in insertion order.
    pub fn tickers(&self) -> impl Iterator<Item = &Ticker> {
        self.weights.keys()
    }

    /// Returns an iterator over (ticker, weight) pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Ticker, &f64)> {
        self.weights.iter()
    }

    /// Returns the number of weighted tickers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Returns whether the mapping is empty (never true for a validated
    /// instance).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
