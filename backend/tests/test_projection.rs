//! Integration tests for multi-month projections
//!
//! Tests cover:
//! - Horizon length and contiguous 1-indexed months
//! - Growth compounding and seasonal adjustment of volumes
//! - Cumulative cost accumulation of rounded monthly totals
//! - Derived volumes exceeding the validated input range
//! - Consistency between projection months and single-month costing

use cost_projection_core_rs::{
    round_to_cents, BusinessAssumptions, CallVolume, CostEngine, EngineConfig, Seasonality,
    DEFAULT_HORIZON_MONTHS, MAX_CALL_VOLUME,
};

fn volume(calls: u32) -> CallVolume {
    CallVolume::new(calls).unwrap()
}

/// Engine with growth and seasonality switched off
fn flat_engine() -> CostEngine {
    let config = EngineConfig {
        assumptions: BusinessAssumptions {
            monthly_growth_rate: 0.0,
            seasonality: Seasonality::new([1.0; 12]),
            ..Default::default()
        },
        ..Default::default()
    };
    CostEngine::new(config).unwrap()
}

#[test]
fn test_default_horizon_is_five_years() {
    assert_eq!(DEFAULT_HORIZON_MONTHS, 60);
    let projection = CostEngine::with_defaults().project(volume(1000), DEFAULT_HORIZON_MONTHS);
    assert_eq!(projection.horizon_months(), 60);
    assert_eq!(projection.months().len(), 60);
}

#[test]
fn test_months_are_contiguous_from_one() {
    let projection = CostEngine::with_defaults().project(volume(1000), 24);
    for (index, entry) in projection.months().iter().enumerate() {
        assert_eq!(entry.month, index + 1);
    }
}

#[test]
fn test_first_month_volume_gets_january_seasonality() {
    let projection = CostEngine::with_defaults().project(volume(1000), 12);
    // month 1: growth multiplier 1.0, January factor 1.1
    assert_eq!(projection.months()[0].call_volume, 1100);
    // month 2: 1000 * 1.02 * 0.9 = 918
    assert_eq!(projection.months()[1].call_volume, 918);
}

#[test]
fn test_growth_compounds_across_years() {
    let projection = CostEngine::with_defaults().project(volume(1000), 25);
    let months = projection.months();

    // months 1, 13, and 25 share the January factor, so the ratio between
    // them is pure growth: 1.02^12 apart
    // month 13: 1000 * 1.02^12 * 1.1 = 1395.07 -> 1395
    assert_eq!(months[0].call_volume, 1100);
    assert_eq!(months[12].call_volume, 1395);
    assert!(months[12].call_volume > months[0].call_volume);
    assert!(months[24].call_volume > months[12].call_volume);
}

#[test]
fn test_zero_growth_repeats_seasonal_volumes() {
    let config = EngineConfig {
        assumptions: BusinessAssumptions {
            monthly_growth_rate: 0.0,
            ..Default::default()
        },
        ..Default::default()
    };
    let engine = CostEngine::new(config).unwrap();
    let projection = engine.project(volume(1000), 24);
    let months = projection.months();

    for m in 0..12 {
        assert_eq!(months[m].call_volume, months[m + 12].call_volume);
    }
    // January 1100, February 900 at zero growth
    assert_eq!(months[12].call_volume, 1100);
    assert_eq!(months[13].call_volume, 900);
}

#[test]
fn test_cumulative_accumulates_rounded_monthly_totals() {
    let projection = CostEngine::with_defaults().project(volume(1000), 60);

    let mut running = 0.0_f64;
    for entry in projection.months() {
        running += entry.costs.total_monthly_cost;
        assert_eq!(entry.cumulative_cost, round_to_cents(running));
    }
}

#[test]
fn test_cumulative_is_non_decreasing() {
    let projection = CostEngine::with_defaults().project(volume(1000), 60);
    let months = projection.months();

    assert_eq!(
        months[0].cumulative_cost,
        months[0].costs.total_monthly_cost
    );
    for pair in months.windows(2) {
        assert!(pair[1].cumulative_cost >= pair[0].cumulative_cost);
    }
}

#[test]
fn test_flat_projection_months_match_single_month_costing() {
    let engine = flat_engine();
    let projection = engine.project(volume(1000), 6);
    let expected = engine.monthly_costs(volume(1000));

    for entry in projection.months() {
        assert_eq!(entry.call_volume, 1000);
        assert_eq!(entry.costs, expected);
    }
    assert_eq!(
        projection.final_cumulative_cost(),
        round_to_cents(expected.total_monthly_cost * 6.0)
    );
}

#[test]
fn test_projection_month_matches_monthly_costs_at_adjusted_volume() {
    let engine = CostEngine::with_defaults();
    let projection = engine.project(volume(1000), 3);
    // month 1 runs at 1100, which is itself a valid baseline
    let entry = &projection.months()[0];
    assert_eq!(entry.call_volume, 1100);
    assert_eq!(entry.costs, engine.monthly_costs(volume(1100)));
}

#[test]
fn test_growth_carries_volumes_past_the_input_maximum() {
    let projection = CostEngine::with_defaults().project(volume(MAX_CALL_VOLUME), 60);
    // month 1 already breaches the slider maximum via January seasonality
    assert!(projection.months()[0].call_volume > MAX_CALL_VOLUME);
    assert!(projection
        .months()
        .iter()
        .any(|entry| entry.call_volume > MAX_CALL_VOLUME));
    // and every month still produced a well-formed breakdown
    for entry in projection.months() {
        assert!(entry.costs.total_monthly_cost > 0.0);
    }
}

#[test]
fn test_single_month_horizon() {
    let projection = CostEngine::with_defaults().project(volume(1000), 1);
    assert_eq!(projection.horizon_months(), 1);
    let entry = &projection.months()[0];
    assert_eq!(entry.month, 1);
    assert_eq!(entry.cumulative_cost, entry.costs.total_monthly_cost);
}

#[test]
fn test_baseline_volume_recorded() {
    let projection = CostEngine::with_defaults().project(volume(2500), 12);
    assert_eq!(projection.baseline_volume(), 2500);
}
