use chrono::NaiveDate;
use rust_decimal_macros::dec;

use fintech_dashboard_core::errors::CoreError;
use fintech_dashboard_core::models::loan::{Loan, LoanStatus};
use fintech_dashboard_core::models::raw::{RawPost, RawUser};
use fintech_dashboard_core::models::selection::{DateRange, Selection, SortKey, SortOrder, TypeFilter};
use fintech_dashboard_core::models::settings::Settings;
use fintech_dashboard_core::models::store::StoreState;
use fintech_dashboard_core::models::transaction::{format_amount, Transaction, TransactionType};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

// ═══════════════════════════════════════════════════════════════════
//  TransactionType & Transaction
// ═══════════════════════════════════════════════════════════════════

mod transaction {
    use super::*;

    #[test]
    fn labels() {
        assert_eq!(TransactionType::Credit.to_string(), "credit");
        assert_eq!(TransactionType::Debit.to_string(), "debit");
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("Credit".parse::<TransactionType>(), Ok(TransactionType::Credit));
        assert_eq!(" DEBIT ".parse::<TransactionType>(), Ok(TransactionType::Debit));
        assert!("refund".parse::<TransactionType>().is_err());
    }

    #[test]
    fn json_uses_type_field() {
        let t = Transaction::new(1, d(2022, 1, 1), dec!(100.5), TransactionType::Credit);
        let json = serde_json::to_value(&t).unwrap();
        assert_eq!(json["type"], "credit");
        assert_eq!(json["date"], "2022-01-01");
    }

    #[test]
    fn amount_formats_with_two_decimals() {
        assert_eq!(format_amount(dec!(100), "$"), "$100.00");
        assert_eq!(format_amount(dec!(19.9), "$"), "$19.90");
        assert_eq!(format_amount(dec!(0.005), "$"), "$0.00");
        assert_eq!(format_amount(dec!(12345.67), "€"), "€12345.67");
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Selection
// ═══════════════════════════════════════════════════════════════════

mod selection {
    use super::*;

    #[test]
    fn defaults() {
        let s = Selection::default();
        assert_eq!(s.type_filter, TypeFilter::All);
        assert_eq!(s.date_range, DateRange::default());
        assert_eq!(s.sort_key, SortKey::Date);
        assert_eq!(s.sort_order, SortOrder::Ascending);
    }

    #[test]
    fn toggle_law_on_repeated_key() {
        let s = Selection::default().select_sort(SortKey::Amount);
        assert_eq!((s.sort_key, s.sort_order), (SortKey::Amount, SortOrder::Ascending));

        let s = s.select_sort(SortKey::Amount);
        assert_eq!((s.sort_key, s.sort_order), (SortKey::Amount, SortOrder::Descending));

        let s = s.select_sort(SortKey::Amount);
        assert_eq!((s.sort_key, s.sort_order), (SortKey::Amount, SortOrder::Ascending));
    }

    #[test]
    fn selecting_active_default_key_toggles() {
        let s = Selection::default().select_sort(SortKey::Date);
        assert_eq!(s.sort_order, SortOrder::Descending);
    }

    #[test]
    fn new_key_resets_to_ascending() {
        let s = Selection::default()
            .with_sort(SortKey::Amount, SortOrder::Descending)
            .select_sort(SortKey::Type);
        assert_eq!((s.sort_key, s.sort_order), (SortKey::Type, SortOrder::Ascending));
    }

    #[test]
    fn sort_changes_keep_filters() {
        let range = DateRange::between(d(2024, 1, 1), d(2024, 1, 31));
        let s = Selection::default()
            .with_type_filter(TypeFilter::Debit)
            .with_date_range(range)
            .select_sort(SortKey::Amount);
        assert_eq!(s.type_filter, TypeFilter::Debit);
        assert_eq!(s.date_range, range);
    }

    #[test]
    fn date_range_needs_both_bounds() {
        assert!(!DateRange::default().is_active());
        assert!(!DateRange::new(Some(d(2024, 1, 1)), None).is_active());
        assert!(!DateRange::new(None, Some(d(2024, 1, 1))).is_active());
        assert_eq!(
            DateRange::between(d(2024, 1, 1), d(2024, 2, 1)).bounds(),
            Some((d(2024, 1, 1), d(2024, 2, 1)))
        );
    }

    #[test]
    fn type_filter_matching() {
        assert!(TypeFilter::All.matches(TransactionType::Credit));
        assert!(TypeFilter::All.matches(TransactionType::Debit));
        assert!(TypeFilter::Credit.matches(TransactionType::Credit));
        assert!(!TypeFilter::Credit.matches(TransactionType::Debit));
        assert!(!TypeFilter::Debit.matches(TransactionType::Credit));
    }

    #[test]
    fn parse_filter_and_key() {
        assert_eq!("credit".parse::<TypeFilter>(), Ok(TypeFilter::Credit));
        assert_eq!("ALL".parse::<TypeFilter>(), Ok(TypeFilter::All));
        assert!("pending".parse::<TypeFilter>().is_err());
        assert_eq!("amount".parse::<SortKey>(), Ok(SortKey::Amount));
        assert!("payee".parse::<SortKey>().is_err());
    }
}

// ═══════════════════════════════════════════════════════════════════
//  StoreState
// ═══════════════════════════════════════════════════════════════════

mod store_state {
    use super::*;

    #[test]
    fn starts_loading() {
        let state: StoreState<Vec<Transaction>> = StoreState::default();
        assert!(state.is_loading());
        assert!(state.records().is_empty());
        assert_eq!(state.error(), None);
    }

    #[test]
    fn failed_has_message_and_no_records() {
        let result: Result<Vec<Transaction>, CoreError> =
            Err(CoreError::Network("connection refused".into()));
        let state = StoreState::from(result);
        assert_eq!(state.error(), Some("Network error: connection refused"));
        assert!(state.records().is_empty());
        assert!(!state.is_ready());
    }

    #[test]
    fn ready_from_ok() {
        let t = Transaction::new(1, d(2022, 1, 1), dec!(1), TransactionType::Debit);
        let result: Result<Vec<Transaction>, CoreError> = Ok(vec![t.clone()]);
        let state = StoreState::from(result);
        assert!(state.is_ready());
        assert_eq!(state.records(), &[t]);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Loan & raw records
// ═══════════════════════════════════════════════════════════════════

mod wire_shapes {
    use super::*;

    #[test]
    fn loan_uses_camel_case_and_tenure() {
        let loan = Loan {
            id: 6,
            amount: dec!(5000),
            tenure_months: 12,
            purpose: "Car".into(),
            status: LoanStatus::Active,
            date_requested: None,
        };
        let json = serde_json::to_value(&loan).unwrap();
        assert_eq!(json["tenure"], 12);
        assert_eq!(json["status"], "active");
        assert!(json.get("dateRequested").is_none());
    }

    #[test]
    fn loan_echo_parses() {
        let json = r#"{
            "id": 101,
            "amount": "5000",
            "tenure": 12,
            "purpose": "Car",
            "status": "active",
            "dateRequested": "2025-06-01T12:00:00Z"
        }"#;
        let loan: Loan = serde_json::from_str(json).unwrap();
        assert_eq!(loan.id, 101);
        assert_eq!(loan.amount, dec!(5000));
        assert!(loan.date_requested.is_some());
    }

    #[test]
    fn placeholder_post_has_only_id() {
        let json = r#"{"userId": 1, "id": 3, "title": "ea molestias", "body": "et iusto"}"#;
        let post: RawPost = serde_json::from_str(json).unwrap();
        assert_eq!(post, RawPost::with_id(3));
    }

    #[test]
    fn post_with_transaction_fields() {
        let json = r#"{"id": 1, "date": "2022-01-01", "amount": 100, "type": "credit"}"#;
        let post: RawPost = serde_json::from_str(json).unwrap();
        assert_eq!(post.date, Some(d(2022, 1, 1)));
        assert_eq!(post.amount, Some(dec!(100)));
        assert_eq!(post.kind.as_deref(), Some("credit"));
    }

    #[test]
    fn user_ignores_extra_fields() {
        let json = r#"{"id": 1, "name": "Leanne Graham", "username": "Bret", "address": {"city": "Gwenborough"}}"#;
        let user: RawUser = serde_json::from_str(json).unwrap();
        assert_eq!(user.name, "Leanne Graham");
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Settings
// ═══════════════════════════════════════════════════════════════════

mod settings {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults() {
        let s = Settings::default();
        assert_eq!(s.api_base_url, "https://jsonplaceholder.typicode.com");
        assert_eq!(s.user_id, 1);
        assert_eq!(s.transaction_limit, 10);
        assert_eq!(s.loan_limit, 5);
        assert_eq!(s.currency_symbol, "$");
        assert!(s.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let s = Settings::from_json(r#"{"transaction_limit": 25, "api_base_url": "http://localhost:3000/"}"#)
            .unwrap();
        assert_eq!(s.transaction_limit, 25);
        assert_eq!(s.api_base_url, "http://localhost:3000");
        assert_eq!(s.loan_limit, 5);
    }

    #[test]
    fn zero_limit_is_rejected() {
        let err = Settings::from_json(r#"{"loan_limit": 0}"#).unwrap_err();
        assert!(matches!(err, CoreError::Config(_)));
    }

    #[test]
    fn malformed_json_is_deserialization_error() {
        let err = Settings::from_json("{ not json").unwrap_err();
        assert!(matches!(err, CoreError::Deserialization(_)));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"user_id": 4, "currency_symbol": "€"}}"#).unwrap();

        let s = Settings::load_from_file(file.path()).unwrap();
        assert_eq!(s.user_id, 4);
        assert_eq!(s.currency_symbol, "€");
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Settings::load_from_file("/nonexistent/dashboard.json").unwrap_err();
        assert!(matches!(err, CoreError::FileIO(_)));
    }
}
