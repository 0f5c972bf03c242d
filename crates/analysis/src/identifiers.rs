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

//! Identifier types for the analysis domain.

use std::fmt::{self, Display};

use folio_core::correctness::{FAILED, check_valid_string};
use serde::{Deserialize, Serialize};
use ustr::Ustr;

/// A unique symbol identifying a tradable asset, e.g. `"AAPL"`.
///
/// Backed by an interned string, so instances are `Copy` and cheap to compare.
#[repr(C)]
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Ticker(Ustr);

impl Ticker {
    /// Creates a new [`Ticker`] instance with correctness checking.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` is empty or whitespace-only.
    pub fn new_checked<T: AsRef<str>>(value: T) -> anyhow::Result<Self> {
        let value = value.as_ref();
        check_valid_string(value, stringify!(value))?;
        Ok(Self(Ustr::from(value)))
    }

    /// Creates a new [`Ticker`] instance.
    ///
    /// # Panics
    ///
    /// Panics if `value` is empty or whitespace-only.
    #[must_use]
    pub fn new<T: AsRef<str>>(value: T) -> Self {
        Self::new_checked(value).expect(FAILED)
    }

    /// Returns the inner identifier value as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the inner identifier value.
    #[must_use]
    pub const fn inner(&self) -> Ustr {
        self.0
    }
}

impl Display for Ticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Ticker {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl AsRef<str> for Ticker {
    fn as_ref(&self) -> &str {
        self.as_str()
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
    fn test_ticker_new() {
        let ticker = Ticker::new("MSFT");
        assert_eq!(ticker.as_str(), "MSFT");
        assert_eq!(format!("{ticker}"), "MSFT");
    }

    #[rstest]
    fn test_ticker_equality_and_ordering() {
        assert_eq!(Ticker::new("AAPL"), Ticker::from("AAPL"));
        assert!(Ticker::new("AAPL") < Ticker::new("MSFT"));
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn test_ticker_new_checked_invalid(#[case] value: &str) {
        assert!(Ticker::new_checked(value).is_err());
    }

    #[rstest]
    #[should_panic(expected = "Condition failed")]
    fn test_ticker_new_panics_on_empty() {
        let _ = Ticker::new("");
    }
}
