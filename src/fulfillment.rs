use crate::error::BreakdownError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Party that ships an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Fulfillment {
    Amazon,
    Dreamship,
    Manual,
}

impl Fulfillment {
    pub const ALL: [Fulfillment; 3] = [Self::Amazon, Self::Dreamship, Self::Manual];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Amazon => "amazon",
            Self::Dreamship => "dreamship",
            Self::Manual => "manual",
        }
    }

    /// Whether shipping is only known after delivery (international rates vary)
    pub fn has_variable_shipping(&self) -> bool {
        match self {
            Self::Dreamship => true,
            Self::Amazon | Self::Manual => false,
        }
    }
}

impl fmt::Display for Fulfillment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Fulfillment {
    type Err = BreakdownError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "amazon" => Ok(Self::Amazon),
            "dreamship" => Ok(Self::Dreamship),
            "manual" => Ok(Self::Manual),
            _ => Err(BreakdownError::InvalidFulfillment(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fulfillment() {
        assert_eq!("amazon".parse::<Fulfillment>().unwrap(), Fulfillment::Amazon);
        assert_eq!("Dreamship".parse::<Fulfillment>().unwrap(), Fulfillment::Dreamship);
        assert_eq!(" manual ".parse::<Fulfillment>().unwrap(), Fulfillment::Manual);
    }

    #[test]
    fn test_parse_unknown_fulfillment() {
        let err = "ebay".parse::<Fulfillment>().unwrap_err();
        assert_eq!(err, BreakdownError::InvalidFulfillment("ebay".to_string()));
    }

    #[test]
    fn test_display_matches_parse() {
        for f in Fulfillment::ALL {
            assert_eq!(f.to_string().parse::<Fulfillment>().unwrap(), f);
        }
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Fulfillment::Dreamship).unwrap();
        assert_eq!(json, "\"dreamship\"");

        let parsed: Fulfillment = serde_json::from_str("\"amazon\"").unwrap();
        assert_eq!(parsed, Fulfillment::Amazon);

        assert!(serde_json::from_str::<Fulfillment>("\"ebay\"").is_err());
    }

    #[test]
    fn test_variable_shipping_only_dreamship() {
        assert!(Fulfillment::Dreamship.has_variable_shipping());
        assert!(!Fulfillment::Amazon.has_variable_shipping());
        assert!(!Fulfillment::Manual.has_variable_shipping());
    }
}
