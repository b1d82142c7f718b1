// ═══════════════════════════════════════════════════════════════════
// Provider Tests — synthetic fallback generators, fundamentals markup
// extraction
// ═══════════════════════════════════════════════════════════════════

use equity_tracker_core::providers::google::parse_fundamentals;
use equity_tracker_core::providers::synthetic;
use equity_tracker_core::providers::traits::FundamentalsFields;

// ═══════════════════════════════════════════════════════════════════
// Synthetic generators
// ═══════════════════════════════════════════════════════════════════

mod synthetic_data {
    use super::*;

    const SYMBOLS: &[&str] = &[
        "RELIANCE", "TCS", "HDFCBANK", "INFY", "ICICIBANK", "HINDUNILVR", "BHARTIARTL", "ITC",
        "A", "Z", "LONGSYMBOLNAME",
    ];

    #[test]
    fn base_price_is_bounded_to_100_up_to_5000() {
        for symbol in SYMBOLS {
            let price = synthetic::base_price(symbol);
            assert!((100.0..5000.0).contains(&price), "{symbol} → {price}");
        }
    }

    #[test]
    fn base_price_is_deterministic_per_symbol() {
        for symbol in SYMBOLS {
            assert_eq!(synthetic::base_price(symbol), synthetic::base_price(symbol));
        }
    }

    #[test]
    fn base_price_differs_across_symbols() {
        assert_ne!(synthetic::base_price("RELIANCE"), synthetic::base_price("TCS"));
    }

    #[test]
    fn price_at_perturbs_within_ten_percent_of_base() {
        for symbol in SYMBOLS {
            let base = synthetic::base_price(symbol);
            for t in [0u64, 1_000, 15_708, 31_416, 1_700_000_000_000] {
                let price = synthetic::price_at(symbol, t);
                assert!(price >= base * 0.9 - 0.01, "{symbol}@{t} → {price}");
                assert!(price <= base * 1.1 + 0.01, "{symbol}@{t} → {price}");
            }
        }
    }

    #[test]
    fn price_at_is_deterministic_for_a_fixed_instant() {
        assert_eq!(
            synthetic::price_at("RELIANCE", 42_000),
            synthetic::price_at("RELIANCE", 42_000)
        );
    }

    #[test]
    fn price_is_rounded_to_two_decimals() {
        let price = synthetic::price_at("TCS", 12_345);
        assert!(((price * 100.0).round() - price * 100.0).abs() < 1e-9);
    }

    #[test]
    fn pe_ratio_is_bounded_to_10_up_to_40() {
        for symbol in SYMBOLS {
            let pe = synthetic::pe_ratio(symbol);
            assert!((10.0..40.0).contains(&pe), "{symbol} → {pe}");
            assert_eq!(pe, synthetic::pe_ratio(symbol));
        }
    }

    #[test]
    fn earnings_date_is_a_recent_display_label() {
        for _ in 0..20 {
            let label = synthetic::earnings_date();
            // "Jun 14, 2026" style: month word, day, comma, 4-digit year.
            let date = chrono::NaiveDate::parse_from_str(&label, "%b %d, %Y")
                .unwrap_or_else(|e| panic!("unparseable earnings label {label:?}: {e}"));
            let age = chrono::Utc::now().date_naive() - date;
            assert!(age.num_days() >= 0 && age.num_days() < 91, "label {label} too old");
        }
    }
}

// ═══════════════════════════════════════════════════════════════════
// Fundamentals markup extraction
// ═══════════════════════════════════════════════════════════════════

mod markup {
    use super::*;

    #[test]
    fn extracts_both_fields_when_present() {
        let html = r#"
            <html><body>
              <div data-field="trailingPE">27.45</div>
              <div data-field="earningsDate">Jul 10, 2026</div>
            </body></html>
        "#;
        let fields = parse_fundamentals(html);
        assert_eq!(fields.pe_ratio, Some(27.45));
        assert_eq!(fields.earnings_date.as_deref(), Some("Jul 10, 2026"));
        assert!(!fields.is_empty());
    }

    #[test]
    fn missing_pe_is_a_normal_miss_not_an_error() {
        let html = r#"<div data-field="earningsDate">Jul 10, 2026</div>"#;
        let fields = parse_fundamentals(html);
        assert_eq!(fields.pe_ratio, None);
        assert_eq!(fields.earnings_date.as_deref(), Some("Jul 10, 2026"));
    }

    #[test]
    fn unparseable_pe_text_is_ignored() {
        let html = r#"<div data-field="trailingPE">—</div>"#;
        let fields = parse_fundamentals(html);
        assert_eq!(fields.pe_ratio, None);
    }

    #[test]
    fn whitespace_around_values_is_trimmed() {
        let html = r#"
            <span data-field="trailingPE">  31.2  </span>
            <span data-field="earningsDate">
                Aug 2, 2026
            </span>
        "#;
        let fields = parse_fundamentals(html);
        assert_eq!(fields.pe_ratio, Some(31.2));
        assert_eq!(fields.earnings_date.as_deref(), Some("Aug 2, 2026"));
    }

    #[test]
    fn page_without_either_field_yields_empty_fields() {
        let fields = parse_fundamentals("<html><body><p>nothing here</p></body></html>");
        assert_eq!(fields, FundamentalsFields::default());
        assert!(fields.is_empty());
    }
}
