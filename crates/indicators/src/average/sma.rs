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

use arraydeque::{ArrayDeque, Wrapping};

use crate::indicator::{Indicator, MovingAverage};

pub const MAX_PERIOD: usize = 1_024;

/// Simple moving average: the arithmetic mean of the last `period` closes.
#[repr(C)]
#[derive(Debug)]
pub struct SimpleMovingAverage {
    pub period: usize,
    pub value: f64,
    pub count: usize,
    pub initialized: bool,
    inputs: ArrayDeque<f64, MAX_PERIOD, Wrapping>,
    has_inputs: bool,
}

impl Display for SimpleMovingAverage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.name(), self.period)
    }
}

impl SimpleMovingAverage {
    /// Creates a new [`SimpleMovingAverage`] instance.
    ///
    /// # Panics
    ///
    /// Panics if `period` is `0` or greater than `MAX_PERIOD`.
    #[must_use]
    pub fn new(period: usize) -> Self {
        assert!(
            (1..=MAX_PERIOD).contains(&period),
            "SimpleMovingAverage: period {period} out of range (1..={MAX_PERIOD})"
        );
        Self {
            period,
            value: 0.0,
            count: 0,
            initialized: false,
            inputs: ArrayDeque::new(),
            has_inputs: false,
        }
    }
}

impl Indicator for SimpleMovingAverage {
    fn name(&self) -> String {
        stringify!(SimpleMovingAverage).to_string()
    }

    fn has_inputs(&self) -> bool {
        self.has_inputs
    }

    fn initialized(&self) -> bool {
        self.initialized
    }

    fn update_raw(&mut self, close: f64) {
        if self.inputs.len() == self.period {
            let _ = self.inputs.pop_front();
        }
        let _ = self.inputs.push_back(close);

        self.has_inputs = true;
        self.count += 1;
        self.value = self.inputs.iter().sum::<f64>() / self.inputs.len() as f64;
        if !self.initialized && self.inputs.len() >= self.period {
            self.initialized = true;
        }
    }

    fn reset(&mut self) {
        self.inputs.clear();
        self.value = 0.0;
        self.count = 0;
        self.has_inputs = false;
        self.initialized = false;
    }
}

impl MovingAverage for SimpleMovingAverage {
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
