//! Integration tests for bondlab-analytics.
//!
//! End-to-end analyses of realistic bonds through the calculator.

use approx::assert_relative_eq;
use bondlab_analytics::cashflows::discounted_table;
use bondlab_analytics::prelude::*;
use bondlab_core::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// =============================================================================
// TEST FIXTURES
// =============================================================================

fn date(y: i32, m: u32, d: u32) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

/// 10-year 10% semi-annual bullet on 30/360.
fn ten_year_par_bond() -> BondDefinition {
    BondDefinition::bullet(
        "PAR-10Y",
        date(2025, 9, 10),
        date(2035, 9, 10),
        dec!(0.10),
        Frequency::SemiAnnual,
        DayCountConvention::Thirty360,
    )
    .unwrap()
}

/// Zero-coupon note repaying half its face after one year and half after two.
fn amortizing_zero() -> BondDefinition {
    let schedule = vec![
        ScheduledPayment::new(date(2025, 1, 1), dec!(0), dec!(0), dec!(0)).unwrap(),
        ScheduledPayment::new(date(2026, 1, 1), dec!(0), dec!(0), dec!(50)).unwrap(),
        ScheduledPayment::new(date(2027, 1, 1), dec!(0), dec!(0), dec!(50)).unwrap(),
    ];
    BondDefinition::new(
        "AMORT-ZERO",
        DayCountConvention::Thirty360,
        Frequency::Annual,
        "amortizing",
        schedule,
    )
    .unwrap()
}

const REPOSITORY_JSON: &str = r#"[
    {
        "name": "STEP-UP",
        "day_count": "ACT/365",
        "periodicity": 2,
        "classification": "step-up",
        "schedule": [
            {"date": "2025-03-01", "coupon_rate": 0.04},
            {"date": "2025-09-01", "coupon_rate": 0.04, "coupon": 2},
            {"date": "2026-03-01", "coupon_rate": 0.06, "coupon": 2},
            {"date": "2026-09-01", "coupon_rate": 0.06, "coupon": 3},
            {"date": "2027-03-01", "coupon_rate": 0.06, "coupon": 3, "principal": 100}
        ]
    },
    {
        "name": "ZERO-2Y",
        "day_count": "30/360",
        "periodicity": 1,
        "schedule": [
            {"date": "2025-01-01", "coupon_rate": 0},
            {"date": "2027-01-01", "coupon_rate": 0, "principal": 100}
        ]
    }
]"#;

// =============================================================================
// SCENARIOS
// =============================================================================

#[test]
fn par_bond_at_issue() {
    let bond = ten_year_par_bond();
    let issue = date(2025, 9, 10);

    let analysis = BondCalculator::new()
        .analyze(&SettlementContext::dirty(&bond, issue, dec!(100)))
        .unwrap();
    let result = &analysis.result;

    assert_relative_eq!(result.periodic_yield, 0.05, epsilon = 1e-6);
    assert_relative_eq!(result.annualized_yield, 0.1025, epsilon = 1e-6);
    assert_relative_eq!(result.nominal_yield, 0.10, epsilon = 1e-6);
    assert_eq!(result.solve_status, SolveStatus::Converged);

    assert_eq!(result.accrued_interest, Decimal::ZERO);
    assert_eq!(result.clean_price, dec!(100));
    assert_eq!(result.residual_principal, dec!(100));
    assert_eq!(result.parity, dec!(1));

    // Time on a 365-day year, discounting on the bond's 360-day year
    assert!(result.macaulay_duration > 6.3 && result.macaulay_duration < 6.6);
    assert!(result.modified_duration < result.macaulay_duration);
    assert_relative_eq!(
        result.macaulay_periods,
        result.macaulay_duration * 2.0,
        epsilon = 1e-12
    );
    assert_relative_eq!(result.average_life, 10.0, epsilon = 1e-12);

    assert_eq!(result.next_coupon_date, Some(date(2026, 3, 10)));
    assert_eq!(result.current_coupon_rate, dec!(0.10));
    assert_eq!(analysis.cash_flows.len(), 21);
}

#[test]
fn accrued_ninety_days_after_coupon() {
    let bond = ten_year_par_bond();
    let settlement = date(2025, 12, 10);

    let result = BondCalculator::new()
        .analyze(&SettlementContext::clean(&bond, settlement, dec!(100)))
        .unwrap()
        .result;

    // 0.10 × 100 × 90 / 360
    assert_eq!(result.accrued_interest, dec!(2.5));
    assert_eq!(result.dirty_price, dec!(102.5));
    assert_eq!(result.technical_value, dec!(102.5));
    assert_eq!(result.last_coupon_date, Some(date(2025, 9, 10)));
    assert_eq!(result.next_coupon_date, Some(date(2026, 3, 10)));
}

#[test]
fn amortizing_average_life() {
    let bond = amortizing_zero();

    let analysis = BondCalculator::new()
        .analyze(&SettlementContext::dirty(&bond, date(2025, 1, 1), dec!(90)))
        .unwrap();

    assert_relative_eq!(analysis.result.average_life, 1.5, epsilon = 1e-12);

    // After the first repayment only half the face remains
    let later = BondCalculator::new()
        .analyze(&SettlementContext::dirty(&bond, date(2026, 7, 1), dec!(48)))
        .unwrap()
        .result;
    assert_eq!(later.residual_principal, dec!(50));
    assert_relative_eq!(later.average_life, 0.5, epsilon = 1e-12);
}

#[test]
fn settlement_on_amortization_date() {
    let bond = amortizing_zero();

    let result = BondCalculator::new()
        .analyze(&SettlementContext::dirty(&bond, date(2026, 1, 1), dec!(95)))
        .unwrap()
        .result;

    // The repayment due today still counts, at day 0
    assert_eq!(result.residual_principal, dec!(100));
    assert_eq!(result.technical_value, dec!(100));
    assert_relative_eq!(result.average_life, 0.5, epsilon = 1e-12);
}

#[test]
fn settlement_outside_schedule() {
    let bond = ten_year_par_bond();
    let err = BondCalculator::new()
        .analyze(&SettlementContext::dirty(&bond, date(2036, 1, 1), dec!(100)))
        .unwrap_err();

    assert!(matches!(err, AnalyticsError::OutOfRange { .. }));
}

#[test]
fn settlement_on_maturity_has_nothing_to_receive() {
    let bond = ten_year_par_bond();
    let err = BondCalculator::new()
        .analyze(&SettlementContext::dirty(&bond, date(2035, 9, 10), dec!(100)))
        .unwrap_err();

    assert!(matches!(err, AnalyticsError::InsufficientCashFlows { .. }));
}

#[test]
fn discount_and_premium_prices() {
    let bond = ten_year_par_bond();
    let issue = date(2025, 9, 10);
    let calculator = BondCalculator::new();

    let discount = calculator
        .analyze(&SettlementContext::dirty(&bond, issue, dec!(90)))
        .unwrap()
        .result;
    let premium = calculator
        .analyze(&SettlementContext::dirty(&bond, issue, dec!(110)))
        .unwrap()
        .result;

    assert!(discount.annualized_yield > 0.1025);
    assert!(premium.annualized_yield < 0.1025);
    assert!(discount.parity < dec!(1));
    assert!(premium.parity > dec!(1));
}

#[test]
fn price_from_yield_round_trip() {
    let bond = ten_year_par_bond();
    let settlement = date(2027, 1, 20);
    let calculator = BondCalculator::new();

    let price = calculator.price_from_yield(&bond, settlement, 0.08).unwrap();
    assert_eq!(price.clean_price, price.dirty_price - price.accrued_interest);

    let result = calculator
        .analyze(&SettlementContext::dirty(&bond, settlement, price.dirty_price))
        .unwrap()
        .result;
    assert_relative_eq!(result.annualized_yield, 0.08, epsilon = 1e-6);
}

#[test]
fn discounted_table_sums_to_dirty_price() {
    let bond = ten_year_par_bond();
    let settlement = date(2026, 5, 1);

    let analysis = BondCalculator::new()
        .analyze(&SettlementContext::dirty(&bond, settlement, dec!(101)))
        .unwrap();
    let table = discounted_table(
        &analysis.cash_flows,
        analysis.result.annualized_yield,
        bond.day_count(),
        bond.periodicity(),
    );

    let total: f64 = table.iter().map(|row| row.present_value).sum();
    assert_eq!(table.len(), analysis.cash_flows.len() - 1);
    assert_relative_eq!(total, 101.0, epsilon = 1e-6);
}

#[test]
fn repository_bonds_analyze() {
    let repo = BondRepository::from_json(REPOSITORY_JSON).unwrap();
    assert_eq!(repo.names(), vec!["STEP-UP", "ZERO-2Y"]);

    let calculator = BondCalculator::new();

    // Step-up coupon: the rate in effect changes at the 2026 reset
    let step_up = repo.require("STEP-UP").unwrap();
    let before = calculator
        .analyze(&SettlementContext::dirty(step_up, date(2025, 6, 1), dec!(101)))
        .unwrap()
        .result;
    let after = calculator
        .analyze(&SettlementContext::dirty(step_up, date(2026, 6, 1), dec!(101)))
        .unwrap()
        .result;
    assert_eq!(before.current_coupon_rate, dec!(0.04));
    assert_eq!(after.current_coupon_rate, dec!(0.06));

    // Zero coupon: Macaulay is time to maturity on a 365-day year
    let zero = repo.require("ZERO-2Y").unwrap();
    let result = calculator
        .analyze(&SettlementContext::dirty(zero, date(2025, 1, 1), dec!(85)))
        .unwrap()
        .result;
    assert_relative_eq!(result.macaulay_duration, 720.0 / 365.0, epsilon = 1e-12);
    assert_eq!(result.accrued_interest, Decimal::ZERO);
    assert_eq!(result.next_coupon_date, None);
    assert_relative_eq!(result.annualized_yield, (100.0f64 / 85.0).sqrt() - 1.0, epsilon = 1e-8);
}

#[test]
fn configured_calculator_uses_duration_basis() {
    let config = AnalyticsConfig {
        duration_basis_days: 360,
        ..AnalyticsConfig::default()
    };
    let calculator = BondCalculator::with_config(config).unwrap();
    let bond = amortizing_zero();

    let result = calculator
        .analyze(&SettlementContext::dirty(&bond, date(2025, 1, 1), dec!(90)))
        .unwrap()
        .result;

    assert!(result.macaulay_duration > 1.0 && result.macaulay_duration < 2.0);
    assert_eq!(calculator.config().duration_basis_days, 360);
    assert_eq!(result.solve_status, SolveStatus::Converged);
}
