//! ARIMA model order as reported to callers.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sirocco_arima::ArimaSpec;

/// The `(p, d, q)` triple of a candidate or selected model.
///
/// Serialises as a JSON array `[p, d, q]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModelOrder {
    /// Autoregressive order.
    pub p: usize,
    /// Differencing order.
    pub d: usize,
    /// Moving-average order.
    pub q: usize,
}

impl ModelOrder {
    /// Creates an order.
    pub fn new(p: usize, d: usize, q: usize) -> Self {
        Self { p, d, q }
    }

    /// Unfitted ARIMA specification with this order.
    pub fn spec(self) -> ArimaSpec {
        ArimaSpec::new(self.p, self.d, self.q)
    }
}

impl From<ArimaSpec> for ModelOrder {
    fn from(spec: ArimaSpec) -> Self {
        let (p, d, q) = spec.order();
        Self { p, d, q }
    }
}

impl fmt::Display for ModelOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{},{})", self.p, self.d, self.q)
    }
}

impl Serialize for ModelOrder {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        [self.p, self.d, self.q].serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ModelOrder {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let [p, d, q] = <[usize; 3]>::deserialize(deserializer)?;
        Ok(Self { p, d, q })
    }
}
