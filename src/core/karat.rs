//! Per-karat price derivation
//!
//! Bullion is quoted per troy ounce; jewellery trades per gram at a given
//! purity. This module turns one spot price into the per-gram buy/sell
//! table for the three commonly traded karat ratings.

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Grams in one troy ounce.
pub const GRAMS_PER_TROY_OUNCE: f64 = 31.103_476_8;

/// Gap between the buy and the sell price, as a fraction of the buy price.
pub const BUY_SELL_SPREAD: f64 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Karat {
    #[serde(rename = "18K")]
    K18,
    #[serde(rename = "21K")]
    K21,
    #[serde(rename = "24K")]
    K24,
}

impl Karat {
    pub const ALL: [Karat; 3] = [Karat::K18, Karat::K21, Karat::K24];

    /// Fraction of pure gold at this rating. 24K is quoted at 99.99% fine.
    pub fn purity(&self) -> f64 {
        match self {
            Karat::K18 => 0.75,
            Karat::K21 => 0.875,
            Karat::K24 => 0.9999,
        }
    }
}

impl Display for Karat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Karat::K18 => "18K",
                Karat::K21 => "21K",
                Karat::K24 => "24K",
            }
        )
    }
}

impl FromStr for Karat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "18K" => Ok(Karat::K18),
            "21K" => Ok(Karat::K21),
            "24K" => Ok(Karat::K24),
            _ => Err(anyhow::anyhow!("Invalid karat rating: {}", s)),
        }
    }
}

/// Buy/sell pair for one karat rating, per gram.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KaratPrice {
    pub buy_price: f64,
    pub sell_price: f64,
}

/// Derived per-gram prices for the three traded karat ratings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KaratPriceSet {
    #[serde(rename = "18K")]
    pub k18: KaratPrice,
    #[serde(rename = "21K")]
    pub k21: KaratPrice,
    #[serde(rename = "24K")]
    pub k24: KaratPrice,
}

impl KaratPriceSet {
    pub fn get(&self, karat: Karat) -> KaratPrice {
        match karat {
            Karat::K18 => self.k18,
            Karat::K21 => self.k21,
            Karat::K24 => self.k24,
        }
    }
}

/// Derives per-gram buy and sell prices for each karat rating from a spot
/// price quoted per troy ounce.
///
/// The sell price is computed from the unrounded fine-gold price, not from
/// the rounded buy price. Pure and total: non-finite or negative input
/// flows through the arithmetic unchecked.
pub fn convert_to_karat_prices(price_per_troy_ounce: f64) -> KaratPriceSet {
    let price_per_gram = price_per_troy_ounce / GRAMS_PER_TROY_OUNCE;

    let price_at = |karat: Karat| {
        let fine = price_per_gram * karat.purity();
        KaratPrice {
            buy_price: round2(fine),
            sell_price: round2(fine * (1.0 - BUY_SELL_SPREAD)),
        }
    };

    KaratPriceSet {
        k18: price_at(Karat::K18),
        k21: price_at(Karat::K21),
        k24: price_at(Karat::K24),
    }
}

/// Round to two decimals, half away from zero.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_two_decimals(value: f64) {
        let scaled = value * 100.0;
        assert!(
            (scaled - scaled.round()).abs() < 1e-9,
            "{value} has more than two decimals"
        );
    }

    #[test]
    fn test_exact_values_at_round_gram_price() {
        // 3110.34768 per ounce is exactly 100.00 per gram.
        let prices = convert_to_karat_prices(3110.34768);

        assert_eq!(prices.k24.buy_price, 99.99);
        assert_eq!(prices.k24.sell_price, 94.99); // 99.99 * 0.95 = 94.9905
        assert_eq!(prices.k18.buy_price, 75.00);
        assert_eq!(prices.k18.sell_price, 71.25);
        assert_eq!(prices.k21.buy_price, 87.50);
        assert_eq!(prices.k21.sell_price, 83.13); // 87.5 * 0.95 = 83.125
    }

    #[test]
    fn test_sell_below_buy_for_positive_input() {
        for spot in [1.0, 42.5, 1999.99, 3110.34768, 250_000.0] {
            let prices = convert_to_karat_prices(spot);
            for karat in Karat::ALL {
                let price = prices.get(karat);
                assert!(
                    price.sell_price < price.buy_price,
                    "{karat} sell {} not below buy {} at spot {spot}",
                    price.sell_price,
                    price.buy_price
                );
            }
        }
    }

    #[test]
    fn test_monotonic_in_spot_price() {
        let lower = convert_to_karat_prices(1800.0);
        let higher = convert_to_karat_prices(2600.0);

        for karat in Karat::ALL {
            assert!(lower.get(karat).buy_price < higher.get(karat).buy_price);
            assert!(lower.get(karat).sell_price < higher.get(karat).sell_price);
        }
    }

    #[test]
    fn test_outputs_rounded_to_two_decimals() {
        for spot in [1234.5678, 2043.17, 3.14159, 99999.99] {
            let prices = convert_to_karat_prices(spot);
            for karat in Karat::ALL {
                assert_two_decimals(prices.get(karat).buy_price);
                assert_two_decimals(prices.get(karat).sell_price);
            }
        }
    }

    #[test]
    fn test_zero_input_yields_zero_prices() {
        let prices = convert_to_karat_prices(0.0);
        for karat in Karat::ALL {
            assert_eq!(prices.get(karat).buy_price, 0.0);
            assert_eq!(prices.get(karat).sell_price, 0.0);
        }
    }

    #[test]
    fn test_deterministic() {
        let spot = 2317.42;
        assert_eq!(
            convert_to_karat_prices(spot),
            convert_to_karat_prices(spot)
        );
    }

    #[test]
    fn test_non_finite_input_passes_through() {
        let prices = convert_to_karat_prices(f64::NAN);
        assert!(prices.k24.buy_price.is_nan());

        let prices = convert_to_karat_prices(f64::INFINITY);
        assert!(prices.k24.buy_price.is_infinite());
    }

    #[test]
    fn test_karat_display_round_trip() {
        for karat in Karat::ALL {
            assert_eq!(karat.to_string().parse::<Karat>().unwrap(), karat);
        }
        assert!("14K".parse::<Karat>().is_err());
    }

    #[test]
    fn test_price_set_serializes_with_karat_keys() {
        let prices = convert_to_karat_prices(3110.34768);
        let json = serde_json::to_value(&prices).unwrap();

        assert_eq!(json["18K"]["buy_price"], 75.00);
        assert_eq!(json["21K"]["buy_price"], 87.50);
        assert_eq!(json["24K"]["buy_price"], 99.99);
        assert_eq!(json.as_object().unwrap().len(), 3);
    }
}
