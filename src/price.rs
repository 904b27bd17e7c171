use std::fmt;
use std::iter::Sum;

/// Price in whole currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Price(i64);

impl Price {
    pub const ZERO: Price = Price(0);

    pub fn new(value: i64) -> Self {
        Price(value)
    }

    pub fn value(self) -> i64 {
        self.0
    }

    /// Read a price the way the menu sheet is read: the leading integer of
    /// the cell wins (`"1500.50"` is 1500), anything unparsable is zero.
    pub fn parse_lenient(raw: &str) -> Self {
        let raw = raw.trim();
        let (sign, digits) = match raw.strip_prefix('-') {
            Some(rest) => (-1, rest),
            None => (1, raw.strip_prefix('+').unwrap_or(raw)),
        };
        let end = digits
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(digits.len());
        digits
            .get(..end)
            .and_then(|d| d.parse::<i64>().ok())
            .map(|v| Price(sign * v))
            .unwrap_or_default()
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::ops::Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Price(self.0.saturating_add(rhs.0))
    }
}

impl std::ops::AddAssign for Price {
    fn add_assign(&mut self, rhs: Self) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

impl std::ops::Mul<u32> for Price {
    type Output = Self;

    fn mul(self, quantity: u32) -> Self::Output {
        Price(self.0.saturating_mul(i64::from(quantity)))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Price::ZERO, |acc, p| acc + p)
    }
}

impl<'a> Sum<&'a Price> for Price {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic_saturates() {
        let max = Price::new(i64::MAX);
        assert_eq!(max + Price::new(1), max);
        assert_eq!(max * 2, max);
        assert_eq!(Price::new(i64::MIN) * 2, Price::new(i64::MIN));
        assert_eq!([max, max, Price::new(-5)].iter().sum::<Price>(), Price::new(i64::MAX - 5));

        let mut total = max;
        total += Price::new(10);
        assert_eq!(total, max);
    }

    #[test]
    fn default_is_zero() {
        assert_eq!(Price::default(), Price::ZERO);
    }

    #[test]
    fn display_is_plain_integer() {
        assert_eq!(Price::new(1500).to_string(), "1500");
        assert_eq!(Price::new(0).to_string(), "0");
        assert_eq!(Price::new(-20).to_string(), "-20");
    }

    #[test]
    fn parse_lenient_reads_integer_prefix() {
        assert_eq!(Price::parse_lenient("1500"), Price::new(1500));
        assert_eq!(Price::parse_lenient(" 1500 "), Price::new(1500));
        assert_eq!(Price::parse_lenient("1500.50"), Price::new(1500));
        assert_eq!(Price::parse_lenient("250abc"), Price::new(250));
        assert_eq!(Price::parse_lenient("-30"), Price::new(-30));
    }

    #[test]
    fn parse_lenient_falls_back_to_zero() {
        assert_eq!(Price::parse_lenient(""), Price::ZERO);
        assert_eq!(Price::parse_lenient("abc"), Price::ZERO);
        assert_eq!(Price::parse_lenient("$100"), Price::ZERO);
        assert_eq!(Price::parse_lenient("-"), Price::ZERO);
    }

    #[test]
    fn add() {
        assert_eq!(Price::new(100) + Price::new(50), Price::new(150));
    }

    #[test]
    fn add_assign() {
        let mut p = Price::new(100);
        p += Price::new(50);
        assert_eq!(p, Price::new(150));
    }

    #[test]
    fn mul_by_quantity() {
        assert_eq!(Price::new(130) * 2, Price::new(260));
        assert_eq!(Price::new(130) * 0, Price::ZERO);
    }

    #[test]
    fn sum() {
        let prices = [Price::new(10), Price::new(20), Price::new(30)];
        assert_eq!(prices.iter().sum::<Price>(), Price::new(60));
        assert_eq!(Vec::<Price>::new().into_iter().sum::<Price>(), Price::ZERO);
    }
}
