//! Sales, marketing and fulfilment channels.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ParseError;
use super::status::wire_enum;

/// Third-party marketplace a brand sells through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarketplacePlatform {
    Amazon,
    Ebay,
    Etsy,
    Walmart,
    Shopify,
}

wire_enum!(MarketplacePlatform {
    Amazon => "amazon",
    Ebay => "ebay",
    Etsy => "etsy",
    Walmart => "walmart",
    Shopify => "shopify",
});

impl MarketplacePlatform {
    /// Human-readable platform name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Amazon => "Amazon",
            Self::Ebay => "eBay",
            Self::Etsy => "Etsy",
            Self::Walmart => "Walmart",
            Self::Shopify => "Shopify",
        }
    }
}

/// Where an order was placed.
///
/// Serialized as a single string: `storefront`, `pos`, or the marketplace
/// name (`amazon`, `etsy`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(into = "String", try_from = "String")]
pub enum SalesChannel {
    /// The brand's own web store.
    #[default]
    Storefront,
    /// In-person point of sale.
    Pos,
    /// A third-party marketplace integration.
    Marketplace(MarketplacePlatform),
}

impl SalesChannel {
    /// The marketplace behind this channel, if any.
    #[must_use]
    pub const fn marketplace(&self) -> Option<MarketplacePlatform> {
        match self {
            Self::Marketplace(platform) => Some(*platform),
            Self::Storefront | Self::Pos => None,
        }
    }
}

impl fmt::Display for SalesChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Storefront => f.write_str("storefront"),
            Self::Pos => f.write_str("pos"),
            Self::Marketplace(platform) => f.write_str(platform.as_str()),
        }
    }
}

impl FromStr for SalesChannel {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "storefront" => Ok(Self::Storefront),
            "pos" => Ok(Self::Pos),
            other => other
                .parse::<MarketplacePlatform>()
                .map(Self::Marketplace)
                .map_err(|_| ParseError::new("SalesChannel", s)),
        }
    }
}

impl From<SalesChannel> for String {
    fn from(channel: SalesChannel) -> Self {
        channel.to_string()
    }
}

impl TryFrom<String> for SalesChannel {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Carrier handling a shipment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogisticsProvider {
    Dhl,
    Fedex,
    Ups,
    Usps,
}

wire_enum!(LogisticsProvider {
    Dhl => "dhl",
    Fedex => "fedex",
    Ups => "ups",
    Usps => "usps",
});

impl LogisticsProvider {
    /// Carrier name as printed on labels.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Dhl => "DHL",
            Self::Fedex => "FedEx",
            Self::Ups => "UPS",
            Self::Usps => "USPS",
        }
    }
}

/// Acquisition source of a traffic sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrafficSource {
    Direct,
    Organic,
    Paid,
    Social,
    Email,
    Referral,
}

wire_enum!(TrafficSource {
    Direct => "direct",
    Organic => "organic",
    Paid => "paid",
    Social => "social",
    Email => "email",
    Referral => "referral",
});

/// Channel a marketing campaign runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CampaignChannel {
    Email,
    Social,
    Search,
    Display,
    Affiliate,
}

wire_enum!(CampaignChannel {
    Email => "email",
    Social => "social",
    Search => "search",
    Display => "display",
    Affiliate => "affiliate",
});
