//! Plain-text rendering of the three dashboard views.

use std::fmt::Write;

use fintech_dashboard_core::models::loan::Loan;
use fintech_dashboard_core::models::overview::AccountOverview;
use fintech_dashboard_core::models::selection::{Selection, SortKey, SortOrder};
use fintech_dashboard_core::models::store::StoreState;
use fintech_dashboard_core::models::transaction::format_amount;
use fintech_dashboard_core::services::transaction_service::DisplaySequence;

const COLUMNS: [(SortKey, &str); 3] = [
    (SortKey::Date, "Date"),
    (SortKey::Amount, "Amount"),
    (SortKey::Type, "Type"),
];

/// Column header, marked with the sort direction when it is the active key.
fn header_label(key: SortKey, label: &str, selection: &Selection) -> String {
    if key != selection.sort_key {
        return label.to_string();
    }
    match selection.sort_order {
        SortOrder::Ascending => format!("{label} ^"),
        SortOrder::Descending => format!("{label} v"),
    }
}

pub fn render_transactions(
    display: &DisplaySequence<'_>,
    selection: &Selection,
    currency: &str,
) -> String {
    let mut out = String::from("Transaction History\n");
    let _ = writeln!(out, "Filter by type: {}", selection.type_filter);
    if let Some((start, end)) = selection.date_range.bounds() {
        let _ = writeln!(out, "Date range: {start} .. {end}");
    }
    out.push('\n');

    match display {
        DisplaySequence::Loading => out.push_str("Loading transactions...\n"),
        DisplaySequence::Failed(message) => {
            let _ = writeln!(out, "Could not load transactions: {message}");
        }
        DisplaySequence::Rows(rows) if rows.is_empty() => {
            out.push_str("No transactions found.\n");
        }
        DisplaySequence::Rows(rows) => {
            let headers: Vec<String> = COLUMNS
                .iter()
                .map(|(key, label)| header_label(*key, label, selection))
                .collect();
            let _ = writeln!(out, "{:<12} {:>12} {:<8}", headers[0], headers[1], headers[2]);
            for t in rows {
                let _ = writeln!(
                    out,
                    "{:<12} {:>12} {:<8}",
                    t.date.to_string(),
                    format_amount(t.amount, currency),
                    t.transaction_type.label()
                );
            }
        }
    }
    out
}

pub fn render_loans(state: &StoreState<Vec<Loan>>, currency: &str) -> String {
    let mut out = String::from("Loan Management\n\n");
    match state {
        StoreState::Loading => out.push_str("Loading loans...\n"),
        StoreState::Failed(message) => {
            let _ = writeln!(out, "Could not load loans: {message}");
        }
        StoreState::Ready(loans) if loans.is_empty() => out.push_str("No loans found.\n"),
        StoreState::Ready(loans) => {
            let _ = writeln!(
                out,
                "{:<5} {:>12} {:>8} {:<20} {:<8} {}",
                "ID", "Amount", "Tenure", "Purpose", "Status", "Requested"
            );
            for loan in loans {
                let requested = loan
                    .date_requested
                    .map(|d| d.format("%Y-%m-%d").to_string())
                    .unwrap_or_else(|| "-".to_string());
                let _ = writeln!(
                    out,
                    "{:<5} {:>12} {:>8} {:<20} {:<8} {}",
                    loan.id,
                    format_amount(loan.amount, currency),
                    format!("{} mo", loan.tenure_months),
                    loan.purpose,
                    loan.status.to_string(),
                    requested
                );
            }
        }
    }
    out
}

pub fn render_overview(state: &StoreState<AccountOverview>, currency: &str) -> String {
    let mut out = String::from("Account Overview\n\n");
    match state {
        StoreState::Loading => out.push_str("Loading user data...\n"),
        StoreState::Failed(message) => {
            let _ = writeln!(out, "Could not load user data: {message}");
        }
        StoreState::Ready(overview) => {
            let _ = writeln!(out, "Welcome, {}", overview.name);
            let _ = writeln!(
                out,
                "Account balance: {}",
                format_amount(overview.account_balance, currency)
            );
            out.push_str("\nRecent transactions:\n");
            if overview.recent_activity.is_empty() {
                out.push_str("  none\n");
            }
            for activity in &overview.recent_activity {
                let _ = writeln!(
                    out,
                    "  #{:<3} {:<12} {:>12}",
                    activity.id,
                    activity.label,
                    format_amount(activity.amount, currency)
                );
            }
        }
    }
    out
}
