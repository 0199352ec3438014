use crate::models::ImageQuality;
use serde::{Serialize, Serializer};
use std::fmt;
use std::ops::Add;

/// A dollar amount held as whole cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Money {
    cents: u64,
}

impl Money {
    pub const ZERO: Money = Money { cents: 0 };

    pub const fn from_cents(cents: u64) -> Self {
        Self { cents }
    }

    pub fn cents(&self) -> u64 {
        self.cents
    }

    pub fn as_dollars(&self) -> f64 {
        self.cents as f64 / 100.0
    }

    pub fn times(&self, count: u32) -> Money {
        Money::from_cents(self.cents.saturating_mul(u64::from(count)))
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money::from_cents(self.cents.saturating_add(rhs.cents))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.cents / 100, self.cents % 100)
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_dollars())
    }
}

/// Price of one 1024x1024 image at the given tier.
pub fn unit_price(quality: ImageQuality) -> Money {
    match quality {
        ImageQuality::Standard => Money::from_cents(4),
        ImageQuality::Hd => Money::from_cents(8),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CostQuote {
    pub image_count: u32,
    /// `None` once tiers are mixed within one quote.
    pub unit_price: Option<Money>,
    pub total_cost: Money,
}

impl CostQuote {
    pub fn empty() -> Self {
        Self {
            image_count: 0,
            unit_price: None,
            total_cost: Money::ZERO,
        }
    }

    pub fn combine(self, other: CostQuote) -> CostQuote {
        let unit_price = if self.image_count == 0 {
            other.unit_price
        } else if other.image_count == 0 || self.unit_price == other.unit_price {
            self.unit_price
        } else {
            None
        };

        CostQuote {
            image_count: self.image_count.saturating_add(other.image_count),
            unit_price,
            total_cost: self.total_cost + other.total_cost,
        }
    }
}

pub fn quote(image_count: u32, quality: ImageQuality) -> CostQuote {
    let price = unit_price(quality);
    CostQuote {
        image_count,
        unit_price: Some(price),
        total_cost: price.times(image_count),
    }
}

/// Sum of per-category quotes, e.g. headshots + logos + service icons.
pub fn quote_batch<I>(items: I) -> CostQuote
where
    I: IntoIterator<Item = (u32, ImageQuality)>,
{
    items
        .into_iter()
        .map(|(count, quality)| quote(count, quality))
        .fold(CostQuote::empty(), CostQuote::combine)
}
