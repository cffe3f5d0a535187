//! Fee, return and projection arithmetic behind every summary panel.
//!
//! All functions are pure: the pages keep raw field text in their state and
//! call in here on every edit.

use std::fmt;
use std::str::FromStr;

use crate::error::{DashboardError, Result};

/// Blank, unparsable, non-finite and negative input all read as zero.
pub fn parse_amount(raw: &str) -> f64 {
    match raw.trim().replace(',', "").parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => v,
        _ => 0.0,
    }
}

pub fn parse_days(raw: &str) -> u32 {
    raw.trim().parse::<u32>().unwrap_or(0)
}

/// An empty select value means nothing is chosen yet.
pub fn parse_selection<T>(raw: &str) -> Result<Option<T>>
where
    T: FromStr<Err = DashboardError>,
{
    let raw = raw.trim();
    if raw.is_empty() {
        Ok(None)
    } else {
        raw.parse::<T>().map(Some)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FeeRule {
    Percent(f64),
    Flat(f64),
}

impl FeeRule {
    pub fn fee_for(self, amount: f64) -> f64 {
        match self {
            FeeRule::Percent(rate) => amount * rate,
            FeeRule::Flat(fee) => fee,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FeeSummary {
    pub amount: f64,
    pub fee: f64,
    pub net: f64,
    pub processing_time: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DepositMethod {
    Bank,
    Card,
    Crypto,
}

impl DepositMethod {
    pub const ALL: [DepositMethod; 3] = [DepositMethod::Bank, DepositMethod::Card, DepositMethod::Crypto];

    pub fn as_str(self) -> &'static str {
        match self {
            DepositMethod::Bank => "bank",
            DepositMethod::Card => "card",
            DepositMethod::Crypto => "crypto",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DepositMethod::Bank => "Bank Transfer",
            DepositMethod::Card => "Credit/Debit Card",
            DepositMethod::Crypto => "Cryptocurrency",
        }
    }

    pub fn fee_rule(self) -> FeeRule {
        match self {
            DepositMethod::Bank => FeeRule::Percent(0.0),
            DepositMethod::Card => FeeRule::Percent(0.029),
            DepositMethod::Crypto => FeeRule::Percent(0.0),
        }
    }

    pub fn processing_time(self) -> &'static str {
        match self {
            DepositMethod::Bank | DepositMethod::Card => "Instant",
            DepositMethod::Crypto => "10-30 minutes",
        }
    }
}

impl FromStr for DepositMethod {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "bank" => Ok(DepositMethod::Bank),
            "card" => Ok(DepositMethod::Card),
            "crypto" => Ok(DepositMethod::Crypto),
            other => Err(DashboardError::unsupported("deposit method", other)),
        }
    }
}

impl fmt::Display for DepositMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn deposit_summary(amount: f64, method: Option<DepositMethod>) -> FeeSummary {
    let fee = method.map(|m| m.fee_rule().fee_for(amount)).unwrap_or(0.0);
    FeeSummary {
        amount,
        fee,
        net: amount - fee,
        processing_time: method.map(DepositMethod::processing_time).unwrap_or("-"),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WithdrawMethod {
    Bank,
    Crypto,
    Paypal,
}

impl WithdrawMethod {
    pub const ALL: [WithdrawMethod; 3] = [WithdrawMethod::Bank, WithdrawMethod::Crypto, WithdrawMethod::Paypal];

    pub fn as_str(self) -> &'static str {
        match self {
            WithdrawMethod::Bank => "bank",
            WithdrawMethod::Crypto => "crypto",
            WithdrawMethod::Paypal => "paypal",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            WithdrawMethod::Bank => "Bank Transfer",
            WithdrawMethod::Crypto => "Cryptocurrency",
            WithdrawMethod::Paypal => "PayPal",
        }
    }

    pub fn fee_rule(self) -> FeeRule {
        match self {
            WithdrawMethod::Bank => FeeRule::Flat(5.0),
            WithdrawMethod::Crypto => FeeRule::Flat(0.0),
            WithdrawMethod::Paypal => FeeRule::Percent(0.025),
        }
    }

    pub fn processing_time(self) -> &'static str {
        match self {
            WithdrawMethod::Bank => "1-3 business days",
            WithdrawMethod::Crypto => "10-60 minutes",
            WithdrawMethod::Paypal => "1-2 business days",
        }
    }
}

impl FromStr for WithdrawMethod {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "bank" => Ok(WithdrawMethod::Bank),
            "crypto" => Ok(WithdrawMethod::Crypto),
            "paypal" => Ok(WithdrawMethod::Paypal),
            other => Err(DashboardError::unsupported("withdraw method", other)),
        }
    }
}

impl fmt::Display for WithdrawMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn withdraw_summary(amount: f64, method: Option<WithdrawMethod>) -> FeeSummary {
    let fee = method.map(|m| m.fee_rule().fee_for(amount)).unwrap_or(0.0);
    FeeSummary {
        amount,
        fee,
        net: (amount - fee).max(0.0),
        processing_time: method.map(WithdrawMethod::processing_time).unwrap_or("-"),
    }
}

/// Platform fee charged on crypto withdrawals, per asset.
pub fn crypto_fee_rate(asset: &str) -> f64 {
    match asset {
        "ETH" => 0.025,
        "USDT" => 0.015,
        _ => 0.02,
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CryptoFeeBreakdown {
    pub asset: String,
    pub amount: f64,
    pub platform_fee: f64,
    pub net: f64,
}

impl CryptoFeeBreakdown {
    pub fn amount_label(&self) -> String {
        format!("{} {}", self.amount, self.asset)
    }

    pub fn fee_label(&self) -> String {
        format!("{:.8} {}", self.platform_fee, self.asset)
    }

    pub fn net_label(&self) -> String {
        format!("{:.8} {}", self.net, self.asset)
    }
}

/// `None` until both an asset and a positive amount are present.
pub fn crypto_withdraw_fee(asset: &str, amount: f64) -> Option<CryptoFeeBreakdown> {
    if amount <= 0.0 || asset.is_empty() {
        return None;
    }
    let platform_fee = amount * crypto_fee_rate(asset);
    Some(CryptoFeeBreakdown {
        asset: asset.to_string(),
        amount,
        platform_fee,
        net: amount - platform_fee,
    })
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InvestmentPlan {
    Crypto,
    Stocks,
    Forex,
    Bonds,
}

impl InvestmentPlan {
    pub const ALL: [InvestmentPlan; 4] = [
        InvestmentPlan::Crypto,
        InvestmentPlan::Stocks,
        InvestmentPlan::Forex,
        InvestmentPlan::Bonds,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            InvestmentPlan::Crypto => "crypto",
            InvestmentPlan::Stocks => "stocks",
            InvestmentPlan::Forex => "forex",
            InvestmentPlan::Bonds => "bonds",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            InvestmentPlan::Crypto => "Crypto Portfolio",
            InvestmentPlan::Stocks => "Stock Market",
            InvestmentPlan::Forex => "Forex Trading",
            InvestmentPlan::Bonds => "Bond Investment",
        }
    }

    /// Annual ROI range in percent.
    pub fn roi_range(self) -> (f64, f64) {
        match self {
            InvestmentPlan::Crypto => (15.0, 25.0),
            InvestmentPlan::Stocks => (8.0, 15.0),
            InvestmentPlan::Forex => (10.0, 18.0),
            InvestmentPlan::Bonds => (5.0, 8.0),
        }
    }

    pub fn average_roi(self) -> f64 {
        let (min, max) = self.roi_range();
        (min + max) / 2.0
    }
}

impl FromStr for InvestmentPlan {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "crypto" => Ok(InvestmentPlan::Crypto),
            "stocks" => Ok(InvestmentPlan::Stocks),
            "forex" => Ok(InvestmentPlan::Forex),
            "bonds" => Ok(InvestmentPlan::Bonds),
            other => Err(DashboardError::unsupported("investment plan", other)),
        }
    }
}

impl fmt::Display for InvestmentPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub const INVESTMENT_DURATIONS: [(u32, &str); 4] = [
    (30, "30 Days"),
    (90, "90 Days"),
    (180, "180 Days"),
    (365, "1 Year"),
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InvestmentProjection {
    pub average_roi: f64,
    pub amount: f64,
    pub expected_return: f64,
    pub total: f64,
}

impl InvestmentProjection {
    pub fn roi_label(&self) -> String {
        format!("{}% annually", self.average_roi)
    }
}

pub fn investment_projection(amount: f64, plan: InvestmentPlan, days: u32) -> InvestmentProjection {
    let average_roi = plan.average_roi();
    let prorated = average_roi * (days as f64 / 365.0);
    let expected_return = amount * (prorated / 100.0);
    InvestmentProjection {
        average_roi,
        amount,
        expected_return,
        total: amount + expected_return,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }

    pub fn annual_return(self) -> f64 {
        let (min, max) = match self {
            RiskLevel::Low => (5.0, 8.0),
            RiskLevel::Medium => (8.0, 12.0),
            RiskLevel::High => (12.0, 18.0),
        };
        (min + max) / 2.0
    }
}

impl FromStr for RiskLevel {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "low" => Ok(RiskLevel::Low),
            "medium" => Ok(RiskLevel::Medium),
            "high" => Ok(RiskLevel::High),
            other => Err(DashboardError::unsupported("risk level", other)),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Compounding {
    Monthly,
    Quarterly,
    Annually,
}

impl Compounding {
    pub fn as_str(self) -> &'static str {
        match self {
            Compounding::Monthly => "monthly",
            Compounding::Quarterly => "quarterly",
            Compounding::Annually => "annually",
        }
    }

    pub fn periods_per_year(self) -> u32 {
        match self {
            Compounding::Monthly => 12,
            Compounding::Quarterly => 4,
            Compounding::Annually => 1,
        }
    }
}

impl FromStr for Compounding {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "monthly" => Ok(Compounding::Monthly),
            "quarterly" => Ok(Compounding::Quarterly),
            "annually" => Ok(Compounding::Annually),
            other => Err(DashboardError::unsupported("compounding", other)),
        }
    }
}

pub const DEFAULT_CALCULATOR_AMOUNT: f64 = 5000.0;
pub const DEFAULT_CALCULATOR_MONTHS: u32 = 12;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CompoundProjection {
    pub total: f64,
    pub profit: f64,
    pub roi_percent: f64,
}

/// A = P(1 + r/n)^(n·t) with t in years.
pub fn compound_returns(
    principal: f64,
    months: u32,
    risk: RiskLevel,
    compounding: Compounding,
) -> CompoundProjection {
    let n = compounding.periods_per_year() as f64;
    let r = risk.annual_return() / 100.0;
    let t = months as f64 / 12.0;
    let total = principal * (1.0 + r / n).powf(n * t);
    let profit = total - principal;
    let roi_percent = if principal > 0.0 { profit / principal * 100.0 } else { 0.0 };
    CompoundProjection {
        total,
        profit,
        roi_percent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn card_deposit_of_1000() {
        let s = deposit_summary(1000.0, Some(DepositMethod::Card));
        assert!(close(s.fee, 29.0));
        assert!(close(s.net, 971.0));
        assert_eq!(s.processing_time, "Instant");
    }

    #[test]
    fn deposit_fee_follows_published_rate() {
        for method in DepositMethod::ALL {
            for amount in [0.0, 1.0, 250.5, 10_000.0] {
                let s = deposit_summary(amount, Some(method));
                let rate = match method.fee_rule() {
                    FeeRule::Percent(r) => r,
                    FeeRule::Flat(_) => unreachable!(),
                };
                assert!(close(s.fee, amount * rate));
                assert!(close(s.net, amount - s.fee));
                assert!(s.net >= 0.0);
            }
        }
    }

    #[test]
    fn paypal_withdraw_of_500() {
        let s = withdraw_summary(500.0, Some(WithdrawMethod::Paypal));
        assert!(close(s.fee, 12.5));
        assert!(close(s.net, 487.5));
    }

    #[test]
    fn withdraw_net_never_negative() {
        for method in WithdrawMethod::ALL {
            for amount in [0.0, 2.0, 5.0, 40.0, 12_450.0] {
                let s = withdraw_summary(amount, Some(method));
                assert!(s.net >= 0.0);
                assert!(close(s.net, (amount - s.fee).max(0.0)));
            }
        }
        let bank = withdraw_summary(3.0, Some(WithdrawMethod::Bank));
        assert!(close(bank.fee, 5.0));
        assert_eq!(bank.net, 0.0);
    }

    #[test]
    fn no_method_means_no_fee() {
        let s = withdraw_summary(100.0, None);
        assert_eq!(s.fee, 0.0);
        assert_eq!(s.net, 100.0);
        assert_eq!(s.processing_time, "-");
    }

    #[test]
    fn stocks_for_a_year() {
        let p = investment_projection(2000.0, InvestmentPlan::Stocks, 365);
        assert!(close(p.average_roi, 11.5));
        assert!(close(p.expected_return, 230.0));
        assert!(close(p.total, 2230.0));
        assert_eq!(p.roi_label(), "11.5% annually");
    }

    #[test]
    fn investment_total_never_below_amount() {
        for plan in InvestmentPlan::ALL {
            for (days, _) in INVESTMENT_DURATIONS {
                let p = investment_projection(750.0, plan, days);
                let expected = 750.0 * (plan.average_roi() * days as f64 / 365.0) / 100.0;
                assert!(close(p.expected_return, expected));
                assert!(p.total >= p.amount);
            }
        }
        assert_eq!(InvestmentPlan::Crypto.average_roi(), 20.0);
        assert_eq!(investment_projection(1.0, InvestmentPlan::Crypto, 30).roi_label(), "20% annually");
    }

    #[test]
    fn unknown_keys_are_explicit_errors() {
        let err = "wire".parse::<DepositMethod>().unwrap_err();
        assert!(matches!(
            err,
            DashboardError::UnsupportedOption { field: "deposit method", ref value } if value == "wire"
        ));
        assert!("venmo".parse::<WithdrawMethod>().is_err());
        assert!("gold".parse::<InvestmentPlan>().is_err());
        assert!("extreme".parse::<RiskLevel>().is_err());
        assert!("daily".parse::<Compounding>().is_err());
    }

    #[test]
    fn empty_selection_is_not_an_error() {
        assert_eq!(parse_selection::<DepositMethod>("").unwrap(), None);
        assert_eq!(parse_selection::<DepositMethod>("card").unwrap(), Some(DepositMethod::Card));
        assert!(parse_selection::<DepositMethod>("cash").is_err());
    }

    #[test]
    fn invalid_amounts_coerce_to_zero() {
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("abc"), 0.0);
        assert_eq!(parse_amount("-20"), 0.0);
        assert_eq!(parse_amount("NaN"), 0.0);
        assert_eq!(parse_amount(" 1,250.75 "), 1250.75);
        assert_eq!(parse_days("365"), 365);
        assert_eq!(parse_days("x"), 0);
    }

    #[test]
    fn crypto_fee_panel_rates() {
        let eth = crypto_withdraw_fee("ETH", 2.0).unwrap();
        assert!(close(eth.platform_fee, 0.05));
        assert_eq!(eth.fee_label(), "0.05000000 ETH");
        assert_eq!(eth.net_label(), "1.95000000 ETH");
        assert_eq!(eth.amount_label(), "2 ETH");
        let doge = crypto_withdraw_fee("DOGE", 100.0).unwrap();
        assert!(close(doge.platform_fee, 2.0));
        assert!(crypto_withdraw_fee("BTC", 0.0).is_none());
        assert!(crypto_withdraw_fee("", 1.0).is_none());
    }

    #[test]
    fn compound_calculator_defaults() {
        let p = compound_returns(
            DEFAULT_CALCULATOR_AMOUNT,
            DEFAULT_CALCULATOR_MONTHS,
            RiskLevel::Medium,
            Compounding::Monthly,
        );
        let expected = 5000.0 * (1.0 + 0.10 / 12.0f64).powf(12.0);
        assert!(close(p.total, expected));
        assert!(close(p.profit, expected - 5000.0));
        assert!((p.roi_percent - 10.47).abs() < 0.01);
    }

    #[test]
    fn annual_compounding_for_one_year_is_simple_interest() {
        let p = compound_returns(1000.0, 12, RiskLevel::High, Compounding::Annually);
        assert!(close(p.total, 1150.0));
        let zero = compound_returns(0.0, 12, RiskLevel::Low, Compounding::Quarterly);
        assert_eq!(zero.roi_percent, 0.0);
    }
}
