use serde::{Deserialize, Serialize};

/// Discrete observation derived from indicator comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Signal {
    RsiOversold,
    RsiOverbought,
    BullishEmaCross,
    BearishEmaCross,
    MacdBullish,
    MacdBearish,
    PriceAboveUpperBb,
    PriceBelowLowerBb,
}

/// Which way a signal leans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Bullish,
    Bearish,
}

impl Signal {
    pub fn polarity(self) -> Polarity {
        match self {
            Signal::RsiOversold
            | Signal::BullishEmaCross
            | Signal::MacdBullish
            | Signal::PriceBelowLowerBb => Polarity::Bullish,
            Signal::RsiOverbought
            | Signal::BearishEmaCross
            | Signal::MacdBearish
            | Signal::PriceAboveUpperBb => Polarity::Bearish,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Signal::RsiOversold => "RSI_OVERSOLD",
            Signal::RsiOverbought => "RSI_OVERBOUGHT",
            Signal::BullishEmaCross => "BULLISH_EMA_CROSS",
            Signal::BearishEmaCross => "BEARISH_EMA_CROSS",
            Signal::MacdBullish => "MACD_BULLISH",
            Signal::MacdBearish => "MACD_BEARISH",
            Signal::PriceAboveUpperBb => "PRICE_ABOVE_UPPER_BB",
            Signal::PriceBelowLowerBb => "PRICE_BELOW_LOWER_BB",
        }
    }
}

impl std::fmt::Display for Signal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Recommendation {
    Buy,
    Sell,
    Hold,
}

impl Recommendation {
    pub fn as_str(self) -> &'static str {
        match self {
            Recommendation::Buy => "BUY",
            Recommendation::Sell => "SELL",
            Recommendation::Hold => "HOLD",
        }
    }
}

impl std::fmt::Display for Recommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
