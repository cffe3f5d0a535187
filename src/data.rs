//! Static sample data the dashboard renders until the backend templates
//! provide real rows.

#[derive(Clone, Debug, PartialEq)]
pub struct TransactionRow {
    pub id: &'static str,
    pub date: &'static str,
    pub time: &'static str,
    pub kind: &'static str,
    pub description: &'static str,
    pub method: &'static str,
    pub amount: f64,
    pub status: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct HoldingRow {
    pub name: &'static str,
    pub detail: &'static str,
    pub quantity: &'static str,
    pub value: f64,
    pub change_percent: f64,
    pub allocation_percent: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct InvestmentRow {
    pub name: &'static str,
    pub started: &'static str,
    pub amount: f64,
    pub current_value: f64,
    pub roi_percent: f64,
    pub status: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct WalletCard {
    pub asset: &'static str,
    pub name: &'static str,
    pub balance: &'static str,
    pub usd_value: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DepositAddress {
    pub asset: &'static str,
    pub network: &'static str,
    pub address: &'static str,
}

pub fn sample_transactions() -> Vec<TransactionRow> {
    vec![
        TransactionRow {
            id: "TX-1042",
            date: "Jun 14, 2025",
            time: "10:24 AM",
            kind: "Deposit",
            description: "Bank transfer from Chase ****4521",
            method: "Bank Transfer",
            amount: 2500.0,
            status: "Completed",
        },
        TransactionRow {
            id: "TX-1041",
            date: "Jun 12, 2025",
            time: "03:11 PM",
            kind: "Investment",
            description: "Crypto Portfolio plan",
            method: "Wallet",
            amount: -1500.0,
            status: "Active",
        },
        TransactionRow {
            id: "TX-1040",
            date: "Jun 10, 2025",
            time: "09:02 AM",
            kind: "Withdrawal",
            description: "PayPal payout to j.doe@example.com",
            method: "PayPal",
            amount: -400.0,
            status: "Pending",
        },
        TransactionRow {
            id: "TX-1039",
            date: "Jun 08, 2025",
            time: "11:47 AM",
            kind: "Profit",
            description: "Stock Market plan monthly return",
            method: "Wallet",
            amount: 186.25,
            status: "Completed",
        },
        TransactionRow {
            id: "TX-1038",
            date: "Jun 03, 2025",
            time: "06:30 PM",
            kind: "Deposit",
            description: "USDT deposit via ERC-20",
            method: "Cryptocurrency",
            amount: 1000.0,
            status: "Completed",
        },
        TransactionRow {
            id: "TX-1037",
            date: "May 29, 2025",
            time: "08:15 AM",
            kind: "Withdrawal",
            description: "BTC withdrawal to external wallet",
            method: "Cryptocurrency",
            amount: -750.0,
            status: "Failed",
        },
        TransactionRow {
            id: "TX-1036",
            date: "May 21, 2025",
            time: "02:05 PM",
            kind: "Investment",
            description: "Bond Investment plan",
            method: "Wallet",
            amount: -2000.0,
            status: "Completed",
        },
    ]
}

pub fn sample_holdings() -> Vec<HoldingRow> {
    vec![
        HoldingRow {
            name: "Bitcoin",
            detail: "BTC",
            quantity: "0.0845",
            value: 4980.0,
            change_percent: 2.4,
            allocation_percent: 40.0,
        },
        HoldingRow {
            name: "Apple Inc.",
            detail: "AAPL",
            quantity: "16",
            value: 3735.0,
            change_percent: -0.8,
            allocation_percent: 30.0,
        },
        HoldingRow {
            name: "EUR/USD",
            detail: "Forex Pair",
            quantity: "2,000",
            value: 2490.0,
            change_percent: 0.3,
            allocation_percent: 20.0,
        },
        HoldingRow {
            name: "US Treasury 10Y",
            detail: "Government Bond",
            quantity: "12",
            value: 1245.0,
            change_percent: 0.1,
            allocation_percent: 10.0,
        },
    ]
}

pub fn sample_investments() -> Vec<InvestmentRow> {
    vec![
        InvestmentRow {
            name: "Crypto Portfolio",
            started: "Mar 02, 2025",
            amount: 1500.0,
            current_value: 1742.5,
            roi_percent: 16.2,
            status: "Active",
        },
        InvestmentRow {
            name: "Stock Market",
            started: "Jan 15, 2025",
            amount: 3000.0,
            current_value: 3186.0,
            roi_percent: 6.2,
            status: "Active",
        },
        InvestmentRow {
            name: "Forex Trading",
            started: "Nov 20, 2024",
            amount: 1200.0,
            current_value: 1341.6,
            roi_percent: 11.8,
            status: "Completed",
        },
        InvestmentRow {
            name: "Bond Investment",
            started: "Oct 01, 2024",
            amount: 2000.0,
            current_value: 2078.0,
            roi_percent: 3.9,
            status: "Active",
        },
    ]
}

pub fn sample_faqs() -> Vec<FaqEntry> {
    vec![
        FaqEntry {
            question: "How secure are my investments?",
            answer: "Your investments are protected by bank-level security measures, including SSL encryption, two-factor authentication, and segregated client accounts.",
        },
        FaqEntry {
            question: "What is the minimum investment amount?",
            answer: "Our minimum investment starts at $500 for the Starter plan.",
        },
        FaqEntry {
            question: "How often can I withdraw my funds?",
            answer: "You can request withdrawals at any time. Processing typically takes 1-3 business days for bank transfers and 24 hours for cryptocurrency withdrawals.",
        },
        FaqEntry {
            question: "What markets do you trade in?",
            answer: "We trade cryptocurrencies (Bitcoin, Ethereum), stocks (S&P 500, NASDAQ), bonds and forex pairs (EUR/USD, GBP/USD).",
        },
        FaqEntry {
            question: "Are the returns guaranteed?",
            answer: "Investment returns are not guaranteed and past performance doesn't predict future results.",
        },
        FaqEntry {
            question: "How quickly will I receive a response?",
            answer: "We typically respond to all inquiries within 2-4 hours during business hours. For urgent matters, please use live chat.",
        },
    ]
}

pub fn sample_wallets() -> Vec<WalletCard> {
    vec![
        WalletCard {
            asset: "BTC",
            name: "Bitcoin",
            balance: "0.08450000",
            usd_value: 4980.0,
        },
        WalletCard {
            asset: "ETH",
            name: "Ethereum",
            balance: "1.25000000",
            usd_value: 3112.5,
        },
        WalletCard {
            asset: "USDT",
            name: "Tether",
            balance: "2150.00000000",
            usd_value: 2150.0,
        },
        WalletCard {
            asset: "BNB",
            name: "BNB",
            balance: "3.40000000",
            usd_value: 2207.5,
        },
    ]
}

pub fn deposit_addresses() -> Vec<DepositAddress> {
    vec![
        DepositAddress {
            asset: "BTC",
            network: "Bitcoin Network",
            address: "1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa",
        },
        DepositAddress {
            asset: "ETH",
            network: "ERC-20",
            address: "0x742d35Cc6634C0532925a3b8D4C9db96590c6C87",
        },
        DepositAddress {
            asset: "USDT",
            network: "ERC-20",
            address: "0x742d35Cc6634C0532925a3b8D4C9db96590c6C87",
        },
        DepositAddress {
            asset: "BNB",
            network: "BEP-20",
            address: "0x742d35Cc6634C0532925a3b8D4C9db96590c6C87",
        },
    ]
}
