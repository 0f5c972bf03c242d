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

//! End-to-end flow from raw prices to portfolio risk metrics.

use chrono::{DateTime, TimeZone, Utc};
use folio_analysis::{
    analyzer::PortfolioAnalyzer,
    config::AnalyzerConfig,
    error::AnalysisError,
    identifiers::Ticker,
    series::PriceSeries,
    weights::PortfolioWeights,
};
use folio_core::approx_eq;
use rstest::rstest;

fn ts(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, day, 0, 0, 0).unwrap()
}

fn price_series(symbol: &str, closes: &[f64]) -> PriceSeries {
    let points = closes
        .iter()
        .enumerate()
        .map(|(i, close)| (ts(i as u32 + 1), *close))
        .collect();
    PriceSeries::new(Ticker::new(symbol), points)
}

#[rstest]
fn test_prices_to_weighted_portfolio() {
    let analyzer = PortfolioAnalyzer::default();

    // Closes chosen so the per-ticker returns are exactly
    // A: [0.01, -0.02] and B: [0.02, 0.01].
    let a = price_series("A", &[100.0, 101.0, 101.0 * 0.98]);
    let b = price_series("B", &[200.0, 204.0, 204.0 * 1.01]);

    let returns_a = analyzer.compute_returns(&a).unwrap();
    let returns_b = analyzer.compute_returns(&b).unwrap();
    let weights = PortfolioWeights::from_pairs([("A", 0.6), ("B", 0.4)]).unwrap();

    let portfolio = analyzer
        .combine_portfolio(&[returns_a, returns_b], &weights)
        .unwrap();

    assert_eq!(portfolio.len(), 2);
    assert!(approx_eq!(
        f64,
        portfolio.values()[&ts(2)],
        0.6 * 0.01 + 0.4 * 0.02,
        epsilon = 1e-12
    ));
    assert!(approx_eq!(
        f64,
        portfolio.values()[&ts(3)],
        0.6 * -0.02 + 0.4 * 0.01,
        epsilon = 1e-12
    ));
}

#[rstest]
fn test_full_flow_to_risk_metrics() {
    let config = AnalyzerConfig::new(252, 0.02, 0.95);
    let analyzer = PortfolioAnalyzer::new(config);

    let a = price_series("AAPL", &[100.0, 102.0, 99.0, 103.0, 101.0, 104.0]);
    let b = price_series("MSFT", &[300.0, 297.0, 305.0, 301.0, 308.0, 306.0]);

    let returns = vec![
        analyzer.compute_returns(&a).unwrap(),
        analyzer.compute_returns(&b).unwrap(),
    ];
    let weights = PortfolioWeights::from_pairs([("AAPL", 0.5), ("MSFT", 0.5)]).unwrap();

    let portfolio = analyzer.combine_portfolio(&returns, &weights).unwrap();
    assert_eq!(portfolio.len(), 5);

    let cumulative = analyzer.cumulative_returns(portfolio.values());
    assert_eq!(cumulative.len(), 5);

    // The final cumulative return equals the compounded product of the
    // portfolio returns.
    let expected_total: f64 = portfolio.values().values().map(|r| 1.0 + r).product::<f64>() - 1.0;
    let last = cumulative.values().next_back().unwrap();
    assert!(approx_eq!(f64, *last, expected_total, epsilon = 1e-12));

    let metrics = analyzer.risk_metrics(portfolio.values());
    assert!(metrics.annualized_return.is_some());
    assert!(metrics.annualized_volatility.unwrap() > 0.0);
    assert!(metrics.sharpe_ratio.is_some());
    assert!(metrics.max_drawdown.unwrap() <= 0.0);
    assert!(metrics.value_at_risk.is_some());
}

#[rstest]
fn test_risk_metrics_idempotent() {
    let analyzer = PortfolioAnalyzer::default();
    let series = price_series("AAPL", &[100.0, 102.0, 99.0, 103.0]);
    let returns = analyzer.compute_returns(&series).unwrap();

    let first = analyzer.risk_metrics(returns.values());
    let second = analyzer.risk_metrics(returns.values());

    assert_eq!(first, second);
}

#[rstest]
fn test_mismatched_tickers_rejected() {
    let analyzer = PortfolioAnalyzer::default();
    let returns = analyzer
        .compute_returns(&price_series("AAPL", &[100.0, 101.0]))
        .unwrap();
    let weights = PortfolioWeights::from_pairs([("MSFT", 1.0)]).unwrap();

    let result = analyzer.combine_portfolio(&[returns], &weights);
    assert_eq!(
        result,
        Err(AnalysisError::MismatchedTickers {
            missing_from_series: vec![Ticker::new("MSFT")],
            missing_from_weights: vec![Ticker::new("AAPL")],
        })
    );
}

#[rstest]
fn test_insufficient_data_surfaces_ticker() {
    let analyzer = PortfolioAnalyzer::default();
    let series = price_series("TSLA", &[420.0]);

    let error = analyzer.compute_returns(&series).unwrap_err();
    assert!(error.to_string().contains("TSLA"));
}
