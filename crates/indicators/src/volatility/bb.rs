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

use std::fmt::{Debug, Display};

use arraydeque::{ArrayDeque, Wrapping};

use crate::{
    average::{MovingAverageFactory, MovingAverageType},
    indicator::{Indicator, MovingAverage},
};

pub const MAX_PERIOD: usize = 1_024;

/// The standard deviation multiplier for the classic 20-period bands.
pub const DEFAULT_K: f64 = 2.0;

/// Bollinger Bands over closing prices: a moving average middle band with
/// upper and lower bands `k` standard deviations away.
#[repr(C)]
#[derive(Debug)]
pub struct BollingerBands {
    pub period: usize,
    pub k: f64,
    pub ma_type: MovingAverageType,
    pub upper: f64,
    pub middle: f64,
    pub lower: f64,
    pub initialized: bool,
    ma: Box<dyn MovingAverage + Send + Sync>,
    prices: ArrayDeque<f64, MAX_PERIOD, Wrapping>,
    has_inputs: bool,
}

impl Display for BollingerBands {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}({},{},{})",
            self.name(),
            self.period,
            self.k,
            self.ma_type,
        )
    }
}

impl BollingerBands {
    /// Creates a new [`BollingerBands`] instance.
    ///
    /// # Panics
    ///
    /// - If `period` is `0` or greater than `MAX_PERIOD`.
    /// - If `k` is *not finite* or *≤ 0*.
    #[must_use]
    pub fn new(period: usize, k: Option<f64>, ma_type: Option<MovingAverageType>) -> Self {
        let k = k.unwrap_or(DEFAULT_K);
        assert!(
            (1..=MAX_PERIOD).contains(&period),
            "BollingerBands: period {period} out of range (1..={MAX_PERIOD})"
        );
        assert!(
            k.is_finite() && k > 0.0,
            "BollingerBands: k must be positive and finite (received {k})"
        );

        let ma_type = ma_type.unwrap_or(MovingAverageType::Simple);
        Self {
            period,
            k,
            ma_type,
            ma: MovingAverageFactory::create(ma_type, period),
            prices: ArrayDeque::new(),
            has_inputs: false,
            initialized: false,
            upper: 0.0,
            middle: 0.0,
            lower: 0.0,
        }
    }
}

impl Indicator for BollingerBands {
    fn name(&self) -> String {
        stringify!(BollingerBands).to_string()
    }

    fn has_inputs(&self) -> bool {
        self.has_inputs
    }

    fn initialized(&self) -> bool {
        self.initialized
    }

    fn update_raw(&mut self, close: f64) {
        if self.prices.len() == self.period {
            let _ = self.prices.pop_front();
        }
        let _ = self.prices.push_back(close);
        self.ma.update_raw(close);

        if !self.initialized {
            self.has_inputs = true;
            if self.prices.len() >= self.period {
                self.initialized = true;
            }
        }

        let std = fast_std_with_mean(self.prices.iter().copied(), self.ma.value());

        self.upper = self.k.mul_add(std, self.ma.value());
        self.middle = self.ma.value();
        self.lower = self.k.mul_add(-std, self.ma.value());
    }

    fn reset(&mut self) {
        self.ma.reset();
        self.prices.clear();
        self.upper = 0.0;
        self.middle = 0.0;
        self.lower = 0.0;
        self.has_inputs = false;
        self.initialized = false;
    }
}

/// Population standard deviation around a precomputed mean.
#[must_use]
pub fn fast_std_with_mean<I>(values: I, mean: f64) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let mut var_acc = 0.0_f64;
    let mut count = 0_usize;

    for v in values {
        let diff = v - mean;
        var_acc += diff * diff;
        count += 1;
    }

    if count == 0 {
        return 0.0;
    }

    let variance = var_acc / count as f64;
    variance.sqrt()
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
