use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FundType {
    #[default]
    Stocks,
    Etf,
    Mutual,
}

impl FundType {
    pub const ALL: [FundType; 3] = [FundType::Stocks, FundType::Etf, FundType::Mutual];

    pub fn as_str(&self) -> &'static str {
        match self {
            FundType::Stocks => "stocks",
            FundType::Etf => "etf",
            FundType::Mutual => "mutual",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FundType::Stocks => "Stocks",
            FundType::Etf => "ETF",
            FundType::Mutual => "Mutual funds",
        }
    }
}

impl fmt::Display for FundType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FundType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stocks" => Ok(FundType::Stocks),
            "etf" => Ok(FundType::Etf),
            "mutual" => Ok(FundType::Mutual),
            other => Err(format!("unknown fund type: {}", other)),
        }
    }
}

/// Body of `POST /recommend`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationRequest {
    pub budget: f64,
    pub horizon: u32,
    pub risk: u8,
    pub fund_type: FundType,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub preferences: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub broker: Option<String>,
}

/// One recommended holding. The backend has used both `ticker/allocation`
/// and `symbol/percent` spellings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawAllocation")]
pub struct Allocation {
    pub ticker: String,
    pub allocation: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

/// Wire shape of a holding; either spelling may be present, or both.
#[derive(Deserialize)]
struct RawAllocation {
    ticker: Option<String>,
    symbol: Option<String>,
    allocation: Option<f64>,
    percent: Option<f64>,
    #[serde(default)]
    price: Option<f64>,
}

impl TryFrom<RawAllocation> for Allocation {
    type Error = String;

    fn try_from(raw: RawAllocation) -> Result<Self, Self::Error> {
        let ticker = raw
            .ticker
            .or(raw.symbol)
            .ok_or_else(|| "holding without ticker or symbol".to_string())?;
        let allocation = raw
            .allocation
            .or(raw.percent)
            .ok_or_else(|| format!("holding {} without allocation or percent", ticker))?;
        Ok(Self {
            ticker,
            allocation,
            price: raw.price,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryPoint {
    pub date: String,
    pub value: f64,
}

/// Raw `POST /recommend` response. Every field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResponse {
    #[serde(default)]
    pub holdings: Option<Vec<Allocation>>,
    #[serde(default)]
    pub allocations: Option<Vec<Allocation>>,
    #[serde(default)]
    pub history: Option<Vec<HistoryPoint>>,
    #[serde(default)]
    pub generated_at: Option<String>,
}

/// Normalised recommendation as the dashboard consumes it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Recommendation {
    pub allocations: Vec<Allocation>,
    pub history: Vec<HistoryPoint>,
    pub generated_at: Option<String>,
}

impl RecommendationResponse {
    pub fn into_recommendation(self) -> Recommendation {
        Recommendation {
            allocations: self.holdings.or(self.allocations).unwrap_or_default(),
            history: self.history.unwrap_or_default(),
            generated_at: self.generated_at,
        }
    }
}

impl From<RecommendationResponse> for Recommendation {
    fn from(response: RecommendationResponse) -> Self {
        response.into_recommendation()
    }
}

/// Entry of `GET /recommend`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedPortfolio {
    #[serde(default)]
    pub holdings: Vec<Allocation>,
    #[serde(default)]
    pub generated_at: String,
}

impl SavedPortfolio {
    /// Human readable generation time; falls back to the raw value.
    pub fn generated_label(&self) -> String {
        format_timestamp(&self.generated_at)
    }
}

pub fn format_timestamp(raw: &str) -> String {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return parsed.format("%Y-%m-%d %H:%M").to_string();
    }
    // Naive ISO timestamps without offset
    if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return parsed.format("%Y-%m-%d %H:%M").to_string();
    }
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn holdings_are_preferred_over_allocations() {
        let json = r#"{
            "holdings": [{"ticker": "VTI", "allocation": 70.0, "price": 231.5}],
            "allocations": [{"symbol": "BND", "percent": 30.0}],
            "history": [{"date": "2024-01-01", "value": 10000.0}]
        }"#;
        let rec = serde_json::from_str::<RecommendationResponse>(json)
            .unwrap()
            .into_recommendation();
        assert_eq!(rec.allocations.len(), 1);
        assert_eq!(rec.allocations[0].ticker, "VTI");
        assert_eq!(rec.allocations[0].price, Some(231.5));
        assert_eq!(rec.history.len(), 1);
    }

    #[test]
    fn legacy_symbol_percent_spelling_is_accepted() {
        let json = r#"{"allocations": [{"symbol": "AAA", "percent": 60}, {"symbol": "BBB", "percent": 40}]}"#;
        let rec: Recommendation = serde_json::from_str::<RecommendationResponse>(json)
            .unwrap()
            .into();
        let tickers: Vec<_> = rec.allocations.iter().map(|a| a.ticker.as_str()).collect();
        assert_eq!(tickers, ["AAA", "BBB"]);
        assert_eq!(rec.allocations[1].allocation, 40.0);
        assert!(rec.history.is_empty());
    }

    #[test]
    fn both_spellings_on_one_holding_are_accepted() {
        let json = r#"{"holdings": [{"ticker": "AAA", "symbol": "AAA", "allocation": 60, "percent": 60}]}"#;
        let rec = serde_json::from_str::<RecommendationResponse>(json)
            .unwrap()
            .into_recommendation();
        assert_eq!(rec.allocations.len(), 1);
        assert_eq!(rec.allocations[0].ticker, "AAA");
        assert_eq!(rec.allocations[0].allocation, 60.0);
    }

    #[test]
    fn holding_without_ticker_is_rejected() {
        let json = r#"{"holdings": [{"allocation": 60}]}"#;
        assert!(serde_json::from_str::<RecommendationResponse>(json).is_err());
    }

    #[test]
    fn missing_fields_become_empty_collections() {
        let rec = serde_json::from_str::<RecommendationResponse>("{}")
            .unwrap()
            .into_recommendation();
        assert_eq!(rec, Recommendation::default());
    }

    #[test]
    fn request_serializes_with_wire_names() {
        let request = RecommendationRequest {
            budget: 10000.0,
            horizon: 5,
            risk: 7,
            fund_type: FundType::Etf,
            preferences: Vec::new(),
            broker: None,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"budget": 10000.0, "horizon": 5, "risk": 7, "fund_type": "etf"})
        );
    }

    #[test]
    fn fund_type_parses_case_insensitively() {
        assert_eq!("Mutual".parse::<FundType>(), Ok(FundType::Mutual));
        assert_eq!(" etf ".parse::<FundType>(), Ok(FundType::Etf));
        assert!("bonds".parse::<FundType>().is_err());
        assert_eq!(FundType::default(), FundType::Stocks);
    }

    #[test]
    fn timestamps_are_formatted_for_display() {
        assert_eq!(format_timestamp("2024-05-01T12:30:00Z"), "2024-05-01 12:30");
        assert_eq!(format_timestamp("2024-05-01T08:15:42.123456"), "2024-05-01 08:15");
        assert_eq!(format_timestamp("yesterday"), "yesterday");
    }
}
