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

use std::{
    collections::{BTreeSet, HashMap},
    sync::Arc,
};

use chrono::{DateTime, Utc};

use crate::{
    Returns,
    config::AnalyzerConfig,
    error::AnalysisError,
    metrics::RiskMetrics,
    series::{PortfolioReturns, PriceSeries, ReturnSeries},
    statistic::PortfolioStatistic,
    statistics::{
        annualized_return::AnnualizedReturn, max_drawdown::MaxDrawdown,
        returns_volatility::ReturnsVolatility, sharpe_ratio::SharpeRatio,
        sortino_ratio::SortinoRatio, value_at_risk::ValueAtRisk,
    },
    weights::PortfolioWeights,
};

pub type Statistic = Arc<dyn PortfolioStatistic<Item = f64> + Send + Sync>;

/// Minimum number of price points required to derive periodic returns.
pub const MIN_PRICE_POINTS: usize = 2;

/// Analyzes portfolio performance and calculates risk statistics.
///
/// The `PortfolioAnalyzer` transforms per-ticker price histories into return
/// series, combines them under a weight mapping, and evaluates registered
/// statistics over the result. Every method is a pure transformation of its
/// arguments; the analyzer itself holds only configuration and the statistic
/// registry, so one instance can serve any number of requests.
#[derive(Debug)]
pub struct PortfolioAnalyzer {
    config: AnalyzerConfig,
    statistics: HashMap<String, Statistic>,
}

impl Default for PortfolioAnalyzer {
    /// Creates a new default [`PortfolioAnalyzer`] instance.
    fn default() -> Self {
        Self::new(AnalyzerConfig::default())
    }
}

impl PortfolioAnalyzer {
    /// Creates a new [`PortfolioAnalyzer`] instance with the standard
    /// statistics registered under `config`.
    #[must_use]
    pub fn new(config: AnalyzerConfig) -> Self {
        let mut analyzer = Self {
            config,
            statistics: HashMap::new(),
        };

        let period = Some(config.periods_per_year);
        let rf = Some(config.risk_free_rate);
        analyzer.register_statistic(Arc::new(AnnualizedReturn::new(period)));
        analyzer.register_statistic(Arc::new(ReturnsVolatility::new(period)));
        analyzer.register_statistic(Arc::new(SharpeRatio::new(period, rf)));
        analyzer.register_statistic(Arc::new(SortinoRatio::new(period, rf)));
        analyzer.register_statistic(Arc::new(MaxDrawdown {}));
        analyzer.register_statistic(Arc::new(ValueAtRisk::new(Some(config.var_confidence))));
        analyzer
    }

    /// Returns the configuration this analyzer was created with.
    #[must_use]
    pub const fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Registers a new portfolio statistic for calculation.
    pub fn register_statistic(&mut self, statistic: Statistic) {
        self.statistics.insert(statistic.name(), statistic);
    }

    /// Removes a specific statistic from calculation.
    pub fn deregister_statistic(&mut self, statistic: Statistic) {
        self.statistics.remove(&statistic.name());
    }

    /// Removes all registered statistics.
    pub fn deregister_statistics(&mut self) {
        self.statistics.clear();
    }

    /// Retrieves a specific statistic by name.
    #[must_use]
    pub fn statistic(&self, name: &str) -> Option<&Statistic> {
        self.statistics.get(name)
    }

    /// Derives the periodic return series from a price series.
    ///
    /// Each return is the percentage change between consecutive closes,
    /// `(current - previous) / previous`, keyed by the timestamp of the later
    /// close. The result holds one fewer entry than the input.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InsufficientData`] if the series holds fewer
    /// than two price points.
    pub fn compute_returns(&self, series: &PriceSeries) -> Result<ReturnSeries, AnalysisError> {
        if series.len() < MIN_PRICE_POINTS {
            return Err(AnalysisError::InsufficientData {
                ticker: series.ticker(),
                len: series.len(),
                min: MIN_PRICE_POINTS,
            });
        }

        let mut values = Returns::new();
        for window in series.points().windows(2) {
            let (_, previous) = window[0];
            let (ts, current) = window[1];
            values.insert(ts, (current - previous) / previous);
        }

        log::debug!(
            "Computed {} returns for {} from {} prices",
            values.len(),
            series.ticker(),
            series.len()
        );

        Ok(ReturnSeries::new(series.ticker(), values))
    }

    /// Combines per-ticker return series into a single weighted portfolio
    /// series.
    ///
    /// The ticker sets of `series` and `weights` must match exactly, and
    /// every series must share the timestamp set of the first. The portfolio
    /// return at each timestamp is the weight-weighted sum of the per-ticker
    /// returns at that timestamp.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - [`AnalysisError::DuplicateTicker`] more than one series shares a ticker.
    /// - [`AnalysisError::MismatchedTickers`] the ticker sets differ in either direction.
    /// - [`AnalysisError::MisalignedSeries`] a series does not share the common timestamp set.
    pub fn combine_portfolio(
        &self,
        series: &[ReturnSeries],
        weights: &PortfolioWeights,
    ) -> Result<PortfolioReturns, AnalysisError> {
        let mut by_ticker = HashMap::with_capacity(series.len());
        for s in series {
            if by_ticker.insert(s.ticker(), s).is_some() {
                return Err(AnalysisError::DuplicateTicker(s.ticker()));
            }
        }

        let mut missing_from_series: Vec<_> = weights
            .tickers()
            .filter(|t| !by_ticker.contains_key(*t))
            .copied()
            .collect();
        let mut missing_from_weights: Vec<_> = by_ticker
            .keys()
            .filter(|t| weights.get(t).is_none())
            .copied()
            .collect();
        if !missing_from_series.is_empty() || !missing_from_weights.is_empty() {
            missing_from_series.sort();
            missing_from_weights.sort();
            return Err(AnalysisError::MismatchedTickers {
                missing_from_series,
                missing_from_weights,
            });
        }

        // First series (in weight order) defines the common timestamp set.
        let Some(first_ticker) = weights.tickers().next() else {
            return Ok(PortfolioReturns::default());
        };
        let first = by_ticker[first_ticker];
        let timestamps: BTreeSet<DateTime<Utc>> = first.values().keys().copied().collect();
        for s in series {
            let matches = s.len() == timestamps.len()
                && s.values().keys().all(|ts| timestamps.contains(ts));
            if !matches {
                return Err(AnalysisError::MisalignedSeries { ticker: s.ticker() });
            }
        }

        let mut values = Returns::new();
        for ts in &timestamps {
            let mut combined = 0.0;
            for (ticker, weight) in weights.iter() {
                combined += weight * by_ticker[ticker].values()[ts];
            }
            values.insert(*ts, combined);
        }

        log::debug!(
            "Combined {} series over {} common timestamps",
            series.len(),
            values.len()
        );

        Ok(PortfolioReturns::new(values))
    }

    /// Compounds periodic returns into a cumulative return series.
    ///
    /// Each output value is the total compounded return from the start of the
    /// series through that timestamp: the running product of `1 + r` minus 1.
    #[must_use]
    pub fn cumulative_returns(&self, returns: &Returns) -> Returns {
        let mut wealth = 1.0;
        returns
            .iter()
            .map(|(ts, r)| {
                wealth *= 1.0 + r;
                (*ts, wealth - 1.0)
            })
            .collect()
    }

    /// Computes the full risk metric snapshot for a return series.
    ///
    /// Metrics that are undefined for the given returns are `None` in the
    /// snapshot; see [`RiskMetrics`].
    #[must_use]
    pub fn risk_metrics(&self, returns: &Returns) -> RiskMetrics {
        let period = Some(self.config.periods_per_year);
        let rf = Some(self.config.risk_free_rate);

        RiskMetrics {
            annualized_return: AnnualizedReturn::new(period).calculate_from_returns(returns),
            annualized_volatility: ReturnsVolatility::new(period).calculate_from_returns(returns),
            sharpe_ratio: SharpeRatio::new(period, rf).calculate_from_returns(returns),
            sortino_ratio: SortinoRatio::new(period, rf).calculate_from_returns(returns),
            max_drawdown: MaxDrawdown {}.calculate_from_returns(returns),
            value_at_risk: ValueAtRisk::new(Some(self.config.var_confidence))
                .calculate_from_returns(returns),
        }
    }

    /// Gets all return-based performance statistics from the registry.
    ///
    /// Statistics that are undefined for the given returns are omitted.
    #[must_use]
    pub fn get_performance_stats_returns(&self, returns: &Returns) -> HashMap<String, f64> {
        let mut output = HashMap::new();

        for (name, stat) in &self.statistics {
            if let Some(value) = stat.calculate_from_returns(returns) {
                output.insert(name.clone(), value);
            }
        }

        output
    }

    /// Gets formatted return statistics as display strings, sorted by name.
    #[must_use]
    pub fn get_stats_returns_formatted(&self, returns: &Returns) -> Vec<String> {
        let max_length = self.get_max_length_name();
        let stats = self.get_performance_stats_returns(returns);

        let mut output = Vec::new();
        for (k, v) in stats {
            let padding = if max_length > k.len() {
                max_length - k.len() + 1
            } else {
                1
            };
            output.push(format!("{}: {}{:.2}", k, " ".repeat(padding), v));
        }
        output.sort();

        output
    }

    fn get_max_length_name(&self) -> usize {
        self.statistics.keys().map(String::len).max().unwrap_or(0)
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
