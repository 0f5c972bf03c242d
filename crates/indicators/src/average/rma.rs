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

use std::fmt::Display;

use crate::indicator::{Indicator, MovingAverage};

/// Wilder's moving average: an exponential moving average with
/// `alpha = 1 / period`, the smoothing used inside RSI.
#[repr(C)]
#[derive(Debug)]
pub struct WilderMovingAverage {
    pub period: usize,
    pub alpha: f64,
    pub value: f64,
    pub count: usize,
    pub initialized: bool,
    has_inputs: bool,
}

impl Display for WilderMovingAverage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.name(), self.period)
    }
}

impl WilderMovingAverage {
    /// Creates a new [`WilderMovingAverage`] instance.
    ///
    /// # Panics
    ///
    /// Panics if `period` is not positive (> 0).
    #[must_use]
    pub fn new(period: usize) -> Self {
        assert!(
            period > 0,
            "WilderMovingAverage: period must be > 0 (received {period})"
        );
        Self {
            period,
            alpha: 1.0 / period as f64,
            value: 0.0,
            count: 0,
            initialized: false,
            has_inputs: false,
        }
    }
}

impl Indicator for WilderMovingAverage {
    fn name(&self) -> String {
        stringify!(WilderMovingAverage).to_string()
    }

    fn has_inputs(&self) -> bool {
        self.has_inputs
    }

    fn initialized(&self) -> bool {
        self.initialized
    }

    fn update_raw(&mut self, close: f64) {
        if !self.has_inputs {
            self.has_inputs = true;
            self.value = close;
            self.count = 1;
            self.initialized = self.count >= self.period;
            return;
        }

        self.value = self.alpha.mul_add(close, (1.0 - self.alpha) * self.value);
        self.count += 1;
        if !self.initialized && self.count >= self.period {
            self.initialized = true;
        }
    }

    fn reset(&mut self) {
        self.value = 0.0;
        self.count = 0;
        self.has_inputs = false;
        self.initialized = false;
    }
}

impl MovingAverage for WilderMovingAverage {
    fn value(&self) -> f64 {
        self.value
    }

    fn count(&self) -> usize {
        self.count
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn test_alpha() {
        let rma = WilderMovingAverage::new(10);
        assert_eq!(rma.alpha, 0.1);
    }

    #[rstest]
    #[should_panic(expected = "period must be > 0")]
    fn test_new_with_zero_period_panics() {
        let _ = WilderMovingAverage::new(0);
    }

    #[rstest]
    fn test_first_input_seeds_value() {
        let mut rma = WilderMovingAverage::new(10);
        rma.update_raw(1.0);

        assert_eq!(rma.count(), 1);
        assert_eq!(rma.value(), 1.0);
        assert!(!rma.initialized());
    }

    #[rstest]
    fn test_known_sequence() {
        let mut rma = WilderMovingAverage::new(10);
        for price in 1..=10 {
            rma.update_raw(f64::from(price));
        }

        assert!(rma.initialized());
        assert_eq!(rma.count(), 10);
        assert!((rma.value() - 4.486_784_401).abs() < 1e-12);
    }

    #[rstest]
    fn test_period_one_tracks_input() {
        let mut rma = WilderMovingAverage::new(1);
        rma.update_raw(42.0);
        assert!(rma.initialized());

        rma.update_raw(100.0);
        assert!((rma.value() - 100.0).abs() < 1e-12);
    }

    #[rstest]
    fn test_reset() {
        let mut rma = WilderMovingAverage::new(10);
        rma.update_raw(10.0);
        rma.reset();

        assert_eq!(rma.count(), 0);
        assert_eq!(rma.value(), 0.0);
        assert!(!rma.has_inputs());
        assert!(!rma.initialized());
    }
}
