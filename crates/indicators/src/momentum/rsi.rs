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

use crate::{
    average::rma::WilderMovingAverage,
    indicator::{Indicator, MovingAverage},
};

/// Relative strength index on the 0..100 scale.
///
/// Gains and losses between consecutive closes are smoothed with Wilder
/// averages (`alpha = 1 / period`) and combined as
/// `100 - 100 / (1 + avg_gain / avg_loss)`. A series with no smoothed losses
/// reads 100; a flat series reads the neutral 50.
#[repr(C)]
#[derive(Debug)]
pub struct RelativeStrengthIndex {
    pub period: usize,
    pub value: f64,
    pub count: usize,
    pub initialized: bool,
    last_close: f64,
    average_gain: WilderMovingAverage,
    average_loss: WilderMovingAverage,
    has_inputs: bool,
}

impl Display for RelativeStrengthIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.name(), self.period)
    }
}

impl RelativeStrengthIndex {
    /// Creates a new [`RelativeStrengthIndex`] instance.
    ///
    /// # Panics
    ///
    /// Panics if `period` is not positive (> 0).
    #[must_use]
    pub fn new(period: usize) -> Self {
        assert!(
            period > 0,
            "RelativeStrengthIndex: period must be > 0 (received {period})"
        );
        Self {
            period,
            value: 0.0,
            count: 0,
            initialized: false,
            last_close: 0.0,
            average_gain: WilderMovingAverage::new(period),
            average_loss: WilderMovingAverage::new(period),
            has_inputs: false,
        }
    }
}

impl Indicator for RelativeStrengthIndex {
    fn name(&self) -> String {
        stringify!(RelativeStrengthIndex).to_string()
    }

    fn has_inputs(&self) -> bool {
        self.has_inputs
    }

    fn initialized(&self) -> bool {
        self.initialized
    }

    fn update_raw(&mut self, close: f64) {
        self.count += 1;

        if !self.has_inputs {
            self.has_inputs = true;
            self.last_close = close;
            return;
        }

        let diff = close - self.last_close;
        self.last_close = close;
        self.average_gain.update_raw(diff.max(0.0));
        self.average_loss.update_raw((-diff).max(0.0));

        let avg_gain = self.average_gain.value();
        let avg_loss = self.average_loss.value();
        self.value = if avg_loss == 0.0 {
            if avg_gain == 0.0 { 50.0 } else { 100.0 }
        } else {
            let rs = avg_gain / avg_loss;
            100.0 - 100.0 / (1.0 + rs)
        };

        if !self.initialized && self.average_gain.initialized() && self.average_loss.initialized()
        {
            self.initialized = true;
        }
    }

    fn reset(&mut self) {
        self.value = 0.0;
        self.count = 0;
        self.last_close = 0.0;
        self.average_gain.reset();
        self.average_loss.reset();
        self.has_inputs = false;
        self.initialized = false;
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
    fn test_display() {
        let rsi = RelativeStrengthIndex::new(14);
        assert_eq!(format!("{rsi}"), "RelativeStrengthIndex(14)");
    }

    #[rstest]
    #[should_panic(expected = "period must be > 0")]
    fn test_new_with_zero_period_panics() {
        let _ = RelativeStrengthIndex::new(0);
    }

    #[rstest]
    fn test_first_input_only_seeds() {
        let mut rsi = RelativeStrengthIndex::new(14);
        rsi.update_raw(100.0);

        assert!(rsi.has_inputs());
        assert!(!rsi.initialized());
        assert_eq!(rsi.value, 0.0);
        assert_eq!(rsi.count, 1);
    }

    #[rstest]
    fn test_all_gains_reads_100() {
        let mut rsi = RelativeStrengthIndex::new(3);
        for close in [100.0, 101.0, 102.0, 103.0, 104.0] {
            rsi.update_raw(close);
        }

        assert!(rsi.initialized());
        assert_eq!(rsi.value, 100.0);
    }

    #[rstest]
    fn test_all_losses_reads_0() {
        let mut rsi = RelativeStrengthIndex::new(3);
        for close in [104.0, 103.0, 102.0, 101.0, 100.0] {
            rsi.update_raw(close);
        }

        assert_eq!(rsi.value, 0.0);
    }

    #[rstest]
    fn test_flat_series_reads_neutral() {
        let mut rsi = RelativeStrengthIndex::new(3);
        for _ in 0..5 {
            rsi.update_raw(100.0);
        }

        assert_eq!(rsi.value, 50.0);
    }

    #[rstest]
    fn test_mixed_series_is_bounded() {
        let mut rsi = RelativeStrengthIndex::new(3);
        for close in [100.0, 102.0, 101.0, 103.0, 102.5, 104.0] {
            rsi.update_raw(close);
        }

        assert!(rsi.value > 50.0 && rsi.value < 100.0);
    }

    #[rstest]
    fn test_reset() {
        let mut rsi = RelativeStrengthIndex::new(3);
        rsi.update_raw(100.0);
        rsi.update_raw(101.0);
        rsi.reset();

        assert!(!rsi.has_inputs());
        assert!(!rsi.initialized());
        assert_eq!(rsi.count, 0);
        assert_eq!(rsi.value, 0.0);
    }
}
