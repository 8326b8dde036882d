//! Ratio Registry
//!
//! The fixed set of ratios the deriver produces, in output column order, with
//! their display names and categories.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Ratio categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RatioCategory {
    /// Margins and returns on capital
    Profitability,
    /// Capital structure
    Leverage,
    /// Short-term solvency
    Liquidity,
    /// Cash generation
    CashFlow,
    /// Year-over-year change
    Growth,
    /// Market multiples from the snapshot
    Valuation,
}

impl RatioCategory {
    /// Human readable name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Profitability => "Profitability",
            Self::Leverage => "Leverage",
            Self::Liquidity => "Liquidity",
            Self::CashFlow => "Cash Flow",
            Self::Growth => "Growth",
            Self::Valuation => "Valuation",
        }
    }
}

/// One output column of the ratio table.
///
/// Serialized by display name, so exported JSON reads like the tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Ratio {
    /// EBIT over revenue
    #[serde(rename = "Operating Margin (%)")]
    OperatingMargin,
    /// Net income over revenue
    #[serde(rename = "Net Margin (%)")]
    NetMargin,
    /// Net income over equity
    #[serde(rename = "ROE (%)")]
    ReturnOnEquity,
    /// Net income over total assets
    #[serde(rename = "ROA (%)")]
    ReturnOnAssets,
    /// Total liabilities over equity
    #[serde(rename = "Debt-to-Equity")]
    DebtToEquity,
    /// Current assets over current liabilities
    #[serde(rename = "Current Ratio")]
    CurrentRatio,
    /// Reported or derived free cash flow
    #[serde(rename = "Free Cash Flow")]
    FreeCashFlow,
    /// Revenue change against the prior period
    #[serde(rename = "Revenue Growth (%)")]
    RevenueGrowth,
    /// Net income change against the prior period
    #[serde(rename = "Net Income Growth (%)")]
    NetIncomeGrowth,
    /// Free cash flow change against the prior period
    #[serde(rename = "FCF Growth (%)")]
    FcfGrowth,
    /// Trailing price to earnings
    #[serde(rename = "P/E Ratio")]
    PriceToEarnings,
    /// Enterprise value to EBITDA
    #[serde(rename = "EV/EBITDA")]
    EvToEbitda,
    /// Price to trailing sales
    #[serde(rename = "Price/Sales")]
    PriceToSales,
    /// Price to book value
    #[serde(rename = "Price/Book")]
    PriceToBook,
}

impl Ratio {
    /// Every ratio, in output column order.
    pub const ALL: [Self; 14] = [
        Self::OperatingMargin,
        Self::NetMargin,
        Self::ReturnOnEquity,
        Self::ReturnOnAssets,
        Self::DebtToEquity,
        Self::CurrentRatio,
        Self::FreeCashFlow,
        Self::RevenueGrowth,
        Self::NetIncomeGrowth,
        Self::FcfGrowth,
        Self::PriceToEarnings,
        Self::EvToEbitda,
        Self::PriceToSales,
        Self::PriceToBook,
    ];

    /// Column name as displayed and exported.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::OperatingMargin => "Operating Margin (%)",
            Self::NetMargin => "Net Margin (%)",
            Self::ReturnOnEquity => "ROE (%)",
            Self::ReturnOnAssets => "ROA (%)",
            Self::DebtToEquity => "Debt-to-Equity",
            Self::CurrentRatio => "Current Ratio",
            Self::FreeCashFlow => "Free Cash Flow",
            Self::RevenueGrowth => "Revenue Growth (%)",
            Self::NetIncomeGrowth => "Net Income Growth (%)",
            Self::FcfGrowth => "FCF Growth (%)",
            Self::PriceToEarnings => "P/E Ratio",
            Self::EvToEbitda => "EV/EBITDA",
            Self::PriceToSales => "Price/Sales",
            Self::PriceToBook => "Price/Book",
        }
    }

    /// Ratio category.
    pub const fn category(&self) -> RatioCategory {
        match self {
            Self::OperatingMargin | Self::NetMargin | Self::ReturnOnEquity | Self::ReturnOnAssets => {
                RatioCategory::Profitability
            }
            Self::DebtToEquity => RatioCategory::Leverage,
            Self::CurrentRatio => RatioCategory::Liquidity,
            Self::FreeCashFlow => RatioCategory::CashFlow,
            Self::RevenueGrowth | Self::NetIncomeGrowth | Self::FcfGrowth => RatioCategory::Growth,
            Self::PriceToEarnings | Self::EvToEbitda | Self::PriceToSales | Self::PriceToBook => {
                RatioCategory::Valuation
            }
        }
    }

    /// Brief description of what the ratio measures.
    pub const fn description(&self) -> &'static str {
        match self {
            Self::OperatingMargin => "EBIT as a percentage of revenue",
            Self::NetMargin => "Net income as a percentage of revenue",
            Self::ReturnOnEquity => "Net income relative to shareholders' equity",
            Self::ReturnOnAssets => "Net income relative to total assets",
            Self::DebtToEquity => "Total liabilities per unit of equity",
            Self::CurrentRatio => "Current assets per unit of current liabilities",
            Self::FreeCashFlow => "Operating cash flow left after capital expenditure",
            Self::RevenueGrowth => "Year-over-year revenue growth",
            Self::NetIncomeGrowth => "Year-over-year net income growth",
            Self::FcfGrowth => "Year-over-year free cash flow growth",
            Self::PriceToEarnings => "Share price over trailing earnings per share",
            Self::EvToEbitda => "Enterprise value over EBITDA",
            Self::PriceToSales => "Market capitalisation over trailing sales",
            Self::PriceToBook => "Share price over book value per share",
        }
    }

    /// True for ratios expressed in percent.
    pub const fn is_percentage(&self) -> bool {
        matches!(
            self,
            Self::OperatingMargin
                | Self::NetMargin
                | Self::ReturnOnEquity
                | Self::ReturnOnAssets
                | Self::RevenueGrowth
                | Self::NetIncomeGrowth
                | Self::FcfGrowth
        )
    }

    /// True for snapshot multiples, which only exist for the most recent period.
    pub const fn is_market_multiple(&self) -> bool {
        matches!(self.category(), RatioCategory::Valuation)
    }

    /// Look a ratio up by its display name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.name() == name)
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Get ratios by category, in column order
pub fn ratios_by_category(category: RatioCategory) -> Vec<Ratio> {
    Ratio::ALL
        .into_iter()
        .filter(|r| r.category() == category)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_column_order() {
        assert_eq!(Ratio::ALL.len(), 14);
        assert_eq!(Ratio::ALL[0], Ratio::OperatingMargin);
        assert_eq!(Ratio::ALL[6], Ratio::FreeCashFlow);
        assert_eq!(Ratio::ALL[13], Ratio::PriceToBook);
    }

    #[rstest]
    #[case(RatioCategory::Profitability, 4)]
    #[case(RatioCategory::Leverage, 1)]
    #[case(RatioCategory::Liquidity, 1)]
    #[case(RatioCategory::CashFlow, 1)]
    #[case(RatioCategory::Growth, 3)]
    #[case(RatioCategory::Valuation, 4)]
    fn test_ratios_by_category(#[case] category: RatioCategory, #[case] count: usize) {
        assert_eq!(ratios_by_category(category).len(), count);
    }

    #[test]
    fn test_from_name() {
        for ratio in Ratio::ALL {
            assert_eq!(Ratio::from_name(ratio.name()), Some(ratio));
        }
        assert_eq!(Ratio::from_name("Gross Margin (%)"), None);
    }

    #[test]
    fn test_serde_uses_display_name() {
        let json = serde_json::to_string(&Ratio::ReturnOnEquity).unwrap();
        assert_eq!(json, "\"ROE (%)\"");
        let back: Ratio = serde_json::from_str("\"EV/EBITDA\"").unwrap();
        assert_eq!(back, Ratio::EvToEbitda);
    }

    #[test]
    fn test_market_multiples() {
        let multiples: Vec<_> = Ratio::ALL.into_iter().filter(Ratio::is_market_multiple).collect();
        assert_eq!(
            multiples,
            vec![
                Ratio::PriceToEarnings,
                Ratio::EvToEbitda,
                Ratio::PriceToSales,
                Ratio::PriceToBook
            ]
        );
        assert!(!Ratio::FreeCashFlow.is_percentage());
        assert!(Ratio::FcfGrowth.is_percentage());
    }
}
