//! Wallet cards, network choices and the withdraw form state they drive.

use crate::calc::{self, CryptoFeeBreakdown, FeeSummary, WithdrawMethod};
use crate::data::WalletCard;
use crate::format::format_currency;

const FALLBACK_NETWORKS: [&str; 3] = ["ERC-20", "BEP-20", "TRC-20"];

pub fn networks_for(asset: &str) -> &'static [&'static str] {
    match asset {
        "BTC" => &["BTC"],
        "ETH" => &["ETH", "ERC-20"],
        "USDT" => &FALLBACK_NETWORKS,
        "LTC" => &["LTC"],
        "BCH" => &["BCH"],
        "XRP" => &["XRP"],
        "ADA" => &["ADA"],
        "DOT" => &["DOT"],
        "LINK" | "UNI" => &["ERC-20"],
        "BNB" => &["BEP-20"],
        "SOL" => &["SOL"],
        "MATIC" => &["MATIC"],
        "AVAX" => &["AVAX"],
        "ATOM" => &["ATOM"],
        _ => &FALLBACK_NETWORKS,
    }
}

pub fn network_display_name(network: &str) -> &str {
    match network {
        "BTC" => "Bitcoin Network (BTC)",
        "ETH" => "Ethereum Network (ETH)",
        "ERC-20" => "Ethereum ERC-20 (Tokens)",
        "BEP-20" => "Binance Smart Chain (BEP-20)",
        "TRC-20" => "Tron Network (TRC-20)",
        "LTC" => "Litecoin Network (LTC)",
        "BCH" => "Bitcoin Cash Network (BCH)",
        "XRP" => "Ripple Network (XRP)",
        "ADA" => "Cardano Network (ADA)",
        "DOT" => "Polkadot Network (DOT)",
        "SOL" => "Solana Network (SOL)",
        "MATIC" => "Polygon Network (MATIC)",
        "AVAX" => "Avalanche Network (AVAX)",
        "ATOM" => "Cosmos Network (ATOM)",
        other => other,
    }
}

/// Which of the two withdraw page layouts is rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WithdrawVariant {
    /// Method select (bank/crypto/paypal) with a flat available balance.
    Basic,
    /// Wallet cards, per-asset networks and the crypto fee panel.
    Wallets,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct WithdrawForm {
    pub method: String,
    pub amount: String,
    pub crypto: String,
    pub networks: Vec<&'static str>,
    pub network: String,
    pub address: String,
    pub account_details: String,
    pub confirmed: bool,
    pub selected_wallet: Option<String>,
    pub available_text: Option<String>,
    pub amount_placeholder: Option<String>,
}

impl WithdrawForm {
    pub fn for_variant(variant: WithdrawVariant) -> Self {
        match variant {
            WithdrawVariant::Basic => WithdrawForm::default(),
            WithdrawVariant::Wallets => WithdrawForm {
                method: WithdrawMethod::Crypto.as_str().to_string(),
                ..WithdrawForm::default()
            },
        }
    }

    /// Returns the toast text announcing the selection.
    pub fn select_wallet(&mut self, asset: &str, balance: &str) -> String {
        self.method = WithdrawMethod::Crypto.as_str().to_string();
        self.set_crypto(asset);
        self.available_text = Some(format!("Available: {} {}", balance, asset));
        self.amount = String::new();
        self.amount_placeholder = Some(format!("Enter amount (Max: {})", balance));
        self.selected_wallet = Some(asset.to_string());
        format!("Selected {} wallet with {} available", asset, balance)
    }

    pub fn set_crypto(&mut self, asset: &str) {
        self.crypto = asset.to_string();
        self.networks = if asset.is_empty() {
            Vec::new()
        } else {
            networks_for(asset).to_vec()
        };
        self.network = self.networks.first().map(|n| n.to_string()).unwrap_or_default();
    }

    pub fn is_selected(&self, asset: &str) -> bool {
        self.selected_wallet.as_deref() == Some(asset)
    }

    /// Fills the amount with the selected wallet's balance, or with
    /// `fallback` when no wallet applies. Without either the amount is left alone.
    pub fn fill_max(&mut self, wallets: &[WalletCard], fallback: Option<f64>) {
        let balance = wallets
            .iter()
            .find(|w| !self.crypto.is_empty() && w.asset == self.crypto)
            .map(|w| w.balance.to_string());
        if let Some(amount) = balance.or_else(|| fallback.map(|f| f.to_string())) {
            self.amount = amount;
        }
    }

    pub fn summary(&self) -> FeeSummary {
        let method = calc::parse_selection::<WithdrawMethod>(&self.method).unwrap_or_else(|err| {
            log::warn!("{}", err);
            None
        });
        calc::withdraw_summary(calc::parse_amount(&self.amount), method)
    }

    pub fn crypto_fee(&self) -> Option<CryptoFeeBreakdown> {
        calc::crypto_withdraw_fee(&self.crypto, calc::parse_amount(&self.amount))
    }

    /// `None` while the form does not name a usable method or asset.
    pub fn success_message(&self, variant: WithdrawVariant, symbol: &str) -> Option<String> {
        let amount = calc::parse_amount(&self.amount);
        let (amount_text, method) = match variant {
            WithdrawVariant::Basic => {
                let method = calc::parse_selection::<WithdrawMethod>(&self.method).ok()??;
                (format_currency(amount, symbol), method.to_string())
            }
            WithdrawVariant::Wallets => {
                if self.crypto.is_empty() {
                    return None;
                }
                (format!("{} {}", amount, self.crypto), self.network.clone())
            }
        };
        Some(format!(
            "Withdrawal request of {} via {} submitted successfully!",
            amount_text, method
        ))
    }

    pub fn can_submit(&self, variant: WithdrawVariant) -> bool {
        match variant {
            WithdrawVariant::Basic => true,
            WithdrawVariant::Wallets => self.confirmed,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BalanceVisibility {
    pub hidden: bool,
}

impl BalanceVisibility {
    pub fn toggled(self) -> Self {
        BalanceVisibility { hidden: !self.hidden }
    }

    pub fn button_label(self) -> &'static str {
        if self.hidden {
            "Show Balances"
        } else {
            "Hide Balances"
        }
    }

    /// Hiding classes for the `******` placeholder and the live value.
    /// The live value stays mounted so running counters keep their place.
    pub fn display_classes(self) -> (Option<&'static str>, Option<&'static str>) {
        if self.hidden {
            (None, Some("d-none"))
        } else {
            (Some("d-none"), None)
        }
    }

    pub fn render(self, value: &str) -> String {
        if self.hidden {
            "******".to_string()
        } else {
            value.to_string()
        }
    }
}

pub const COUNTER_DURATION_MS: f64 = 2000.0;
pub const COUNTER_FRAME_MS: f64 = 16.0;

/// Values shown by a counter animating from zero to `target`; the last
/// frame is always the exact target.
pub fn counter_frames(target: f64) -> Vec<String> {
    let increment = target / (COUNTER_DURATION_MS / COUNTER_FRAME_MS);
    let mut frames = Vec::new();
    if increment > 0.0 {
        let mut current = increment;
        while current < target {
            frames.push(format!("{:.2}", current));
            current += increment;
        }
    }
    frames.push(format!("{:.2}", target));
    frames
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::sample_wallets;

    #[test]
    fn selecting_eth_offers_two_networks() {
        let mut form = WithdrawForm::for_variant(WithdrawVariant::Wallets);
        let toast = form.select_wallet("ETH", "1.25000000");
        assert_eq!(form.networks, vec!["ETH", "ERC-20"]);
        assert_eq!(form.network, "ETH");
        assert_eq!(form.crypto, "ETH");
        assert_eq!(form.available_text.as_deref(), Some("Available: 1.25000000 ETH"));
        assert_eq!(form.amount_placeholder.as_deref(), Some("Enter amount (Max: 1.25000000)"));
        assert_eq!(toast, "Selected ETH wallet with 1.25000000 available");
    }

    #[test]
    fn unmapped_asset_gets_default_networks() {
        assert_eq!(networks_for("DOGE"), &["ERC-20", "BEP-20", "TRC-20"]);
        assert_eq!(networks_for("UNI"), &["ERC-20"]);
        assert_eq!(network_display_name("TRC-20"), "Tron Network (TRC-20)");
        assert_eq!(network_display_name("DOGE"), "DOGE");
    }

    #[test]
    fn only_one_wallet_is_selected() {
        let mut form = WithdrawForm::for_variant(WithdrawVariant::Wallets);
        form.amount = "0.5".into();
        form.select_wallet("BTC", "0.08450000");
        assert!(form.amount.is_empty());
        form.select_wallet("USDT", "2150.00000000");
        let selected: Vec<_> = sample_wallets()
            .into_iter()
            .filter(|w| form.is_selected(w.asset))
            .map(|w| w.asset)
            .collect();
        assert_eq!(selected, vec!["USDT"]);
    }

    #[test]
    fn max_uses_wallet_balance_or_fallback() {
        let wallets = sample_wallets();
        let mut basic = WithdrawForm::for_variant(WithdrawVariant::Basic);
        basic.fill_max(&wallets, Some(12450.0));
        assert_eq!(basic.amount, "12450");

        let mut wallet = WithdrawForm::for_variant(WithdrawVariant::Wallets);
        wallet.select_wallet("BNB", "3.40000000");
        wallet.fill_max(&wallets, None);
        assert_eq!(wallet.amount, "3.40000000");
        assert_eq!(wallet.crypto_fee().unwrap().fee_label(), "0.06800000 BNB");
    }

    #[test]
    fn max_without_selected_wallet_leaves_amount_alone() {
        let wallets = sample_wallets();
        let mut wallet = WithdrawForm::for_variant(WithdrawVariant::Wallets);
        wallet.fill_max(&wallets, None);
        assert!(wallet.amount.is_empty());

        wallet.amount = "0.25".into();
        wallet.fill_max(&wallets, None);
        assert_eq!(wallet.amount, "0.25");
    }

    #[test]
    fn summary_tolerates_unknown_method() {
        let form = WithdrawForm {
            method: "cheque".into(),
            amount: "100".into(),
            ..Default::default()
        };
        let s = form.summary();
        assert_eq!(s.fee, 0.0);
        assert_eq!(s.net, 100.0);
    }

    #[test]
    fn confirmation_gates_wallet_submission() {
        let mut form = WithdrawForm::for_variant(WithdrawVariant::Wallets);
        assert!(!form.can_submit(WithdrawVariant::Wallets));
        form.confirmed = true;
        assert!(form.can_submit(WithdrawVariant::Wallets));
        assert!(WithdrawForm::default().can_submit(WithdrawVariant::Basic));
    }

    #[test]
    fn success_messages_per_variant() {
        let basic = WithdrawForm {
            method: "paypal".into(),
            amount: "500".into(),
            ..Default::default()
        };
        assert_eq!(
            basic.success_message(WithdrawVariant::Basic, "$").as_deref(),
            Some("Withdrawal request of $500.00 via paypal submitted successfully!")
        );
        assert!(WithdrawForm::default()
            .success_message(WithdrawVariant::Basic, "$")
            .is_none());

        let mut wallet = WithdrawForm::for_variant(WithdrawVariant::Wallets);
        assert!(wallet.success_message(WithdrawVariant::Wallets, "$").is_none());
        wallet.select_wallet("ETH", "1.25000000");
        wallet.amount = "0.5".into();
        assert_eq!(
            wallet.success_message(WithdrawVariant::Wallets, "$").as_deref(),
            Some("Withdrawal request of 0.5 ETH via ETH submitted successfully!")
        );
    }

    #[test]
    fn balance_toggle_twice_restores_state() {
        let start = BalanceVisibility::default();
        assert_eq!(start.render("0.5"), "0.5");
        let once = start.toggled();
        assert_eq!(once.render("0.5"), "******");
        assert_eq!(once.button_label(), "Show Balances");
        assert_eq!(once.toggled(), start);
    }

    #[test]
    fn hiding_masks_value_without_removing_it() {
        let shown = BalanceVisibility::default();
        assert_eq!(shown.display_classes(), (Some("d-none"), None));
        assert_eq!(shown.toggled().display_classes(), (None, Some("d-none")));
        assert_eq!(shown.toggled().toggled().display_classes(), shown.display_classes());
    }

    #[test]
    fn counter_ends_on_target() {
        let frames = counter_frames(125.0);
        assert_eq!(frames.last().map(String::as_str), Some("125.00"));
        assert!(frames.len() > 100);
        assert_eq!(counter_frames(0.0), vec!["0.00".to_string()]);
    }
}
