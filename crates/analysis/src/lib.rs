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

//! Portfolio return aggregation and risk metrics.
//!
//! The `folio-analysis` crate transforms per-ticker price histories and a
//! weight mapping into portfolio-level return series and risk figures:
//!
//! - Periodic returns from raw close prices.
//! - Weighted portfolio combination over a common timestamp set.
//! - Compounded cumulative return series.
//! - Risk metric snapshots (volatility, Sharpe, Sortino, max drawdown,
//!   annualized return, historical value at risk).
//! - An extensible statistic registration framework for custom metrics.
//!
//! Every operation is a pure, synchronous transformation over request-scoped
//! data: the caller (typically a dashboard or reporting layer) fetches and
//! aligns the raw series, invokes the analyzer, and renders the results. No
//! state is shared between analysis requests.

#![warn(rustc::all)]
#![deny(unsafe_code)]
#![deny(nonstandard_style)]
#![deny(missing_debug_implementations)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod analyzer;
pub mod config;
pub mod error;
pub mod identifiers;
pub mod metrics;
pub mod series;
pub mod statistic;
pub mod statistics;
pub mod weights;

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

/// Type alias for time-indexed returns data used in portfolio analysis.
///
/// Maps timestamps to periodic return values for time-series analysis of
/// portfolio performance.
pub type Returns = BTreeMap<DateTime<Utc>, f64>;
