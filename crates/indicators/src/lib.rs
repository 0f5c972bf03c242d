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

//! Technical analysis indicators over closing prices.
//!
//! The *indicators* crate provides the streaming indicators used for price
//! chart overlays, organized by category with a unified trait-based
//! architecture:
//!
//! - **Moving averages**: SMA, EMA, and Wilder smoothing.
//! - **Momentum indicators**: RSI.
//! - **Volatility indicators**: Bollinger Bands.
//!
//! Every indicator consumes one closing price per update, maintains bounded
//! state, and exposes an `initialized` flag that turns true once enough
//! inputs have arrived for the output to be meaningful.

#![warn(rustc::all)]
#![deny(unsafe_code)]
#![deny(nonstandard_style)]
#![deny(missing_debug_implementations)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod average;
pub mod indicator;
pub mod momentum;
pub mod volatility;
