use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacdIndicator {
    pub line: f64,
    pub signal: f64,
    pub histogram: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BollingerBandsIndicator {
    pub upper: f64,
    pub middle: f64,
    pub lower: f64,
}

/// Indicator readings for one analysis.
///
/// `None` means the history was too short to compute the reading. It is
/// serialized as `null`, never as zero. The MACD and band groups always
/// serialize as objects; a missing group has every member `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSet {
    pub rsi: Option<f64>,
    pub ema_20: Option<f64>,
    pub ema_50: Option<f64>,
    #[serde(with = "macd_fields", default)]
    pub macd: Option<MacdIndicator>,
    #[serde(with = "bollinger_fields", default)]
    pub bollinger_bands: Option<BollingerBandsIndicator>,
}

impl IndicatorSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rsi(mut self, rsi: f64) -> Self {
        self.rsi = Some(rsi);
        self
    }

    pub fn with_emas(mut self, ema_20: f64, ema_50: f64) -> Self {
        self.ema_20 = Some(ema_20);
        self.ema_50 = Some(ema_50);
        self
    }

    pub fn with_macd(mut self, macd: MacdIndicator) -> Self {
        self.macd = Some(macd);
        self
    }

    pub fn with_bollinger_bands(mut self, bands: BollingerBandsIndicator) -> Self {
        self.bollinger_bands = Some(bands);
        self
    }

    /// Names of readings that could not be computed.
    pub fn missing(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.rsi.is_none() {
            missing.push("rsi");
        }
        if self.ema_20.is_none() {
            missing.push("ema_20");
        }
        if self.ema_50.is_none() {
            missing.push("ema_50");
        }
        if self.macd.is_none() {
            missing.push("macd");
        }
        if self.bollinger_bands.is_none() {
            missing.push("bollinger_bands");
        }
        missing
    }
}

mod macd_fields {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::MacdIndicator;

    #[derive(Serialize, Deserialize)]
    struct Fields {
        line: Option<f64>,
        signal: Option<f64>,
        histogram: Option<f64>,
    }

    pub fn serialize<S: Serializer>(
        macd: &Option<MacdIndicator>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        Fields {
            line: macd.map(|m| m.line),
            signal: macd.map(|m| m.signal),
            histogram: macd.map(|m| m.histogram),
        }
        .serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<MacdIndicator>, D::Error> {
        let fields = Option::<Fields>::deserialize(deserializer)?;
        Ok(fields.and_then(|f| {
            Some(MacdIndicator {
                line: f.line?,
                signal: f.signal?,
                histogram: f.histogram?,
            })
        }))
    }
}

mod bollinger_fields {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::BollingerBandsIndicator;

    #[derive(Serialize, Deserialize)]
    struct Fields {
        upper: Option<f64>,
        middle: Option<f64>,
        lower: Option<f64>,
    }

    pub fn serialize<S: Serializer>(
        bands: &Option<BollingerBandsIndicator>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        Fields {
            upper: bands.map(|b| b.upper),
            middle: bands.map(|b| b.middle),
            lower: bands.map(|b| b.lower),
        }
        .serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<BollingerBandsIndicator>, D::Error> {
        let fields = Option::<Fields>::deserialize(deserializer)?;
        Ok(fields.and_then(|f| {
            Some(BollingerBandsIndicator {
                upper: f.upper?,
                middle: f.middle?,
                lower: f.lower?,
            })
        }))
    }
}
