//! Row filters for the transactions, holdings, investments and FAQ lists.
//!
//! Every filter is a single pass over the rows: a row is visible when all
//! active criteria match its text, case-insensitively.

use crate::data::{FaqEntry, HoldingRow, InvestmentRow, TransactionRow};

pub trait RowPredicate<R> {
    fn matches(&self, row: &R) -> bool;
}

pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Empty and "all" select values do not restrict anything.
fn is_wildcard(criterion: &str) -> bool {
    criterion.is_empty() || criterion.eq_ignore_ascii_case("all")
}

pub fn visibility<R, P: RowPredicate<R>>(rows: &[R], predicate: &P) -> Vec<bool> {
    rows.iter().map(|row| predicate.matches(row)).collect()
}

pub fn visible_rows<'a, R, P: RowPredicate<R>>(rows: &'a [R], predicate: &P) -> Vec<&'a R> {
    rows.iter().filter(|row| predicate.matches(row)).collect()
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TransactionFilter {
    pub kind: String,
    pub status: String,
    /// Accepted for the date select; rows are not restricted by it.
    pub date: String,
    pub search: String,
}

impl RowPredicate<TransactionRow> for TransactionFilter {
    fn matches(&self, row: &TransactionRow) -> bool {
        if !is_wildcard(&self.kind) && !contains_ci(row.kind, &self.kind) {
            return false;
        }
        if !is_wildcard(&self.status) && !contains_ci(row.status, &self.status) {
            return false;
        }
        let search = self.search.as_str();
        if !search.is_empty()
            && !contains_ci(row.description, search)
            && !contains_ci(row.kind, search)
        {
            return false;
        }
        true
    }
}

pub const HOLDING_FILTERS: [&str; 5] = ["All Assets", "Crypto", "Stocks", "Forex", "Bonds"];

#[derive(Clone, Debug, PartialEq)]
pub struct HoldingFilter(pub String);

impl RowPredicate<HoldingRow> for HoldingFilter {
    fn matches(&self, row: &HoldingRow) -> bool {
        let filter = self.0.trim();
        if filter.is_empty() || filter == "All Assets" {
            return true;
        }
        if contains_ci(row.name, filter) || contains_ci(row.detail, filter) {
            return true;
        }
        match filter {
            "Crypto" => contains_ci(row.name, "bitcoin") || contains_ci(row.detail, "btc"),
            "Stocks" => contains_ci(row.detail, "aapl"),
            "Forex" => contains_ci(row.detail, "forex"),
            "Bonds" => contains_ci(row.detail, "bond"),
            _ => false,
        }
    }
}

pub const INVESTMENT_FILTERS: [&str; 5] = ["All", "Crypto", "Stock", "Forex", "Bond"];

#[derive(Clone, Debug, PartialEq)]
pub struct InvestmentFilter(pub String);

impl RowPredicate<InvestmentRow> for InvestmentFilter {
    fn matches(&self, row: &InvestmentRow) -> bool {
        let filter = self.0.trim();
        filter.is_empty() || filter == "All" || contains_ci(row.name, filter)
    }
}

/// Matches the question and the collapsed answer text.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FaqSearch(pub String);

impl RowPredicate<FaqEntry> for FaqSearch {
    fn matches(&self, row: &FaqEntry) -> bool {
        let term = self.0.as_str();
        term.is_empty() || contains_ci(row.question, term) || contains_ci(row.answer, term)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{sample_faqs, sample_holdings, sample_investments, sample_transactions};

    fn visible_ids(filter: &TransactionFilter) -> Vec<&'static str> {
        let rows = sample_transactions();
        visible_rows(&rows, filter).iter().map(|r| r.id).collect()
    }

    #[test]
    fn empty_transaction_filter_shows_everything() {
        let rows = sample_transactions();
        let mask = visibility(&rows, &TransactionFilter::default());
        assert!(mask.iter().all(|v| *v));

        let all = TransactionFilter {
            kind: "all".into(),
            status: "All".into(),
            date: "all".into(),
            search: String::new(),
        };
        assert!(visibility(&rows, &all).iter().all(|v| *v));
    }

    #[test]
    fn criteria_are_combined_with_and() {
        let filter = TransactionFilter {
            kind: "deposit".into(),
            status: "completed".into(),
            ..Default::default()
        };
        assert_eq!(visible_ids(&filter), vec!["TX-1042", "TX-1038"]);

        let narrower = TransactionFilter {
            search: "usdt".into(),
            ..filter
        };
        assert_eq!(visible_ids(&narrower), vec!["TX-1038"]);
    }

    #[test]
    fn search_matches_description_or_type() {
        let by_type = TransactionFilter {
            search: "WITHDRAW".into(),
            ..Default::default()
        };
        assert_eq!(visible_ids(&by_type), vec!["TX-1040", "TX-1037"]);

        let by_description = TransactionFilter {
            search: "paypal".into(),
            ..Default::default()
        };
        assert_eq!(visible_ids(&by_description), vec!["TX-1040"]);
    }

    #[test]
    fn whitespace_search_is_matched_literally() {
        let filter = TransactionFilter {
            search: "   ".into(),
            ..Default::default()
        };
        assert!(visible_ids(&filter).is_empty());

        let faqs = sample_faqs();
        assert!(visible_rows(&faqs, &FaqSearch("   ".into())).is_empty());
    }

    #[test]
    fn date_criterion_does_not_hide_rows() {
        let filter = TransactionFilter {
            date: "7days".into(),
            ..Default::default()
        };
        assert_eq!(visible_ids(&filter).len(), sample_transactions().len());
    }

    #[test]
    fn filtering_is_idempotent() {
        let rows = sample_transactions();
        let filter = TransactionFilter {
            status: "pending".into(),
            ..Default::default()
        };
        let once: Vec<TransactionRow> = visible_rows(&rows, &filter).into_iter().cloned().collect();
        let twice: Vec<TransactionRow> = visible_rows(&once, &filter).into_iter().cloned().collect();
        assert_eq!(once, twice);
    }

    #[test]
    fn holding_aliases() {
        let rows = sample_holdings();
        let names = |f: &str| -> Vec<&'static str> {
            visible_rows(&rows, &HoldingFilter(f.to_string()))
                .iter()
                .map(|r| r.name)
                .collect()
        };
        assert_eq!(names("All Assets").len(), rows.len());
        assert_eq!(names("Crypto"), vec!["Bitcoin"]);
        assert_eq!(names("Stocks"), vec!["Apple Inc."]);
        assert_eq!(names("Forex"), vec!["EUR/USD"]);
        assert_eq!(names("Bonds"), vec!["US Treasury 10Y"]);
    }

    #[test]
    fn investment_list_filter() {
        let rows = sample_investments();
        assert_eq!(visible_rows(&rows, &InvestmentFilter("All".into())).len(), 4);
        let stock = visible_rows(&rows, &InvestmentFilter("Stock".into()));
        assert_eq!(stock.len(), 1);
        assert_eq!(stock[0].name, "Stock Market");
    }

    #[test]
    fn faq_search_reads_hidden_answers() {
        let faqs = sample_faqs();
        let hits = visible_rows(&faqs, &FaqSearch("two-factor".into()));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].question, "How secure are my investments?");
        assert_eq!(visible_rows(&faqs, &FaqSearch(String::new())).len(), faqs.len());
        assert!(visible_rows(&faqs, &FaqSearch("zzz-no-match".into())).is_empty());
    }
}
