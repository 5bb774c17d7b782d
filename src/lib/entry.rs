use std::fmt;

/// A sum of money in PLN
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Amount(pub f64);

impl Amount {
    /// Nearest multiple of 0.01, ties to even
    ///
    /// Decided on the exact binary value: float formatting does not
    /// go through an intermediate `* 100.0` that could create false ties.
    pub fn round_cents(self) -> Self {
        Self(format!("{:.2}", self.0).parse().unwrap_or(self.0))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// Lowest and highest unit price of a commodity at one date
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} - {:.2}", self.min, self.max)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn rounding() {
        assert_eq!(Amount(79.90902106877209).round_cents(), Amount(79.91));
        assert_eq!(Amount(1.2293695549041854).round_cents(), Amount(1.23));
        assert_eq!(Amount(0.125).round_cents(), Amount(0.12));
        assert_eq!(Amount(0.375).round_cents(), Amount(0.38));
        assert_eq!(Amount(0.0).round_cents(), Amount(0.0));
    }

    #[test]
    fn rounding_just_below_half_cent() {
        // these literals are stored slightly below the half cent
        assert_eq!(Amount(2.675).round_cents(), Amount(2.67));
        assert_eq!(Amount(1.115).round_cents(), Amount(1.11));
        assert_eq!(Amount(10.075).round_cents(), Amount(10.07));
        assert_eq!(Amount(2.67).round_cents(), Amount(2.67));
    }

    #[test]
    fn display() {
        assert_eq!(Amount(65.0).to_string(), "65.00");
        assert_eq!(Amount(79.91).to_string(), "79.91");
        assert_eq!(PriceRange { min: 3.68, max: 10.11 }.to_string(), "3.68 - 10.11");
    }
}
