//! Integration tests for monthly cost calculation
//!
//! Tests cover:
//! - The worked 1000-interaction example across all three services
//! - Lex free-tier boundaries and flooring
//! - Count rounding at the output boundary
//! - Total rounded from unrounded parts, not from rounded parts
//! - Pricing table injection

use cost_projection_core_rs::{CallVolume, CostEngine, EngineConfig, PricingTable};

fn engine() -> CostEngine {
    CostEngine::with_defaults()
}

fn volume(calls: u32) -> CallVolume {
    CallVolume::new(calls).unwrap()
}

#[test]
fn test_breakdown_at_1000_interactions() {
    let costs = engine().monthly_costs(volume(1000));

    // 70% voice: 1000 * 0.7 * 3.5 min = 2450 minutes
    // 30% chat:  1000 * 0.3 * 5 msgs = 1500 messages
    assert_eq!(costs.connect.voice_minutes, 2450);
    assert_eq!(costs.connect.chat_messages, 1500);
    // 2450 * $0.018 + 1500 * $0.004 = $44.10 + $6.00
    assert_eq!(costs.connect.monthly_cost, 50.10);

    // 700 voice requests < 1000 free, 900 text requests < 10000 free
    assert_eq!(costs.lex.voice_requests, 700);
    assert_eq!(costs.lex.text_requests, 900);
    assert_eq!(costs.lex.monthly_cost, 0.0);

    // 600 KB queries, 800 agent invocations, 1400 * (500 in + 300 out) tokens
    // tokens: 700 * $0.0008 + 420 * $0.0016 = $0.56 + $0.672
    // services: 600 * $0.0004 + 800 * $0.002 = $0.24 + $1.60
    // total: $3.072 -> $3.07
    assert_eq!(costs.bedrock.knowledge_base_queries, 600);
    assert_eq!(costs.bedrock.agent_invocations, 800);
    assert_eq!(costs.bedrock.monthly_cost, 3.07);

    // 50.1 + 0 + 3.072 = 53.172 -> 53.17
    assert_eq!(costs.total_monthly_cost, 53.17);
}

#[test]
fn test_lex_free_tier_exceeded_at_2000_interactions() {
    let costs = engine().monthly_costs(volume(2000));

    // 1400 voice requests - 1000 free = 400 billable * $0.004 = $1.60
    // 1800 text requests stay inside the 10000 free tier
    assert_eq!(costs.lex.voice_requests, 1400);
    assert_eq!(costs.lex.text_requests, 1800);
    assert_eq!(costs.lex.monthly_cost, 1.60);

    // 4900 minutes * $0.018 + 3000 messages * $0.004 = $88.20 + $12.00
    assert_eq!(costs.connect.monthly_cost, 100.20);
    // 2x the 1000-interaction bedrock cost: $6.144 -> $6.14
    assert_eq!(costs.bedrock.monthly_cost, 6.14);
    // 100.2 + 1.6 + 6.144 = 107.944 -> 107.94
    assert_eq!(costs.total_monthly_cost, 107.94);
}

#[test]
fn test_lex_free_tier_boundary() {
    // 1428 * 0.7 = 999.6 voice requests, still under the 1000 free tier
    let under = engine().monthly_costs(volume(1428));
    assert_eq!(under.lex.monthly_cost, 0.0);

    // 1500 * 0.7 = 1050 requests, 50 billable * $0.004 = $0.20
    let over = engine().monthly_costs(volume(1500));
    assert_eq!(over.lex.monthly_cost, 0.20);
}

#[test]
fn test_counts_rounded_to_whole_units() {
    // 1429 interactions produce fractional usage everywhere
    let costs = engine().monthly_costs(volume(1429));

    // 1429 * 0.7 * 3.5 = 3501.05 -> 3501
    assert_eq!(costs.connect.voice_minutes, 3501);
    // 1429 * 0.7 = 1000.3 -> 1000
    assert_eq!(costs.lex.voice_requests, 1000);
    // 1429 * 0.3 * 3 = 1286.1 -> 1286
    assert_eq!(costs.lex.text_requests, 1286);
    // 1429 * 0.6 = 857.4 -> 857 and 1429 * 0.8 = 1143.2 -> 1143
    assert_eq!(costs.bedrock.knowledge_base_queries, 857);
    assert_eq!(costs.bedrock.agent_invocations, 1143);
}

#[test]
fn test_total_rounds_the_unrounded_sum() {
    // At 2857 interactions the rounded parts disagree with the rounded sum:
    //   connect: 143.1357   -> 143.14
    //   lex:       3.9996   ->   4.00
    //   bedrock:   8.7767   ->   8.78
    // parts sum to 155.92, but the unrounded sum 155.9120 rounds to 155.91
    let costs = engine().monthly_costs(volume(2857));

    assert_eq!(costs.connect.monthly_cost, 143.14);
    assert_eq!(costs.lex.monthly_cost, 4.00);
    assert_eq!(costs.bedrock.monthly_cost, 8.78);
    assert_eq!(costs.total_monthly_cost, 155.91);

    let parts_sum = costs.connect.monthly_cost + costs.lex.monthly_cost + costs.bedrock.monthly_cost;
    assert!((parts_sum - 155.92).abs() < 1e-9);
    assert!(costs.total_monthly_cost < parts_sum);
}

#[test]
fn test_injected_pricing_table_is_used() {
    // Zero out everything except the Connect voice rate
    let mut config = EngineConfig::default();
    config.pricing = PricingTable::default();
    config.pricing.connect.voice_per_minute = 0.02;
    config.pricing.connect.chat_per_message = 0.0;
    config.pricing.lex.voice_request_price = 0.0;
    config.pricing.lex.text_request_price = 0.0;
    config.pricing.bedrock.knowledge_base_query_price = 0.0;
    config.pricing.bedrock.agent_invocation_price = 0.0;
    config.pricing.bedrock.input_token_price_per_1k = 0.0;
    config.pricing.bedrock.output_token_price_per_1k = 0.0;

    let engine = CostEngine::new(config).unwrap();
    let costs = engine.monthly_costs(volume(1000));

    // 2450 minutes * $0.02 = $49.00, everything else free
    assert_eq!(costs.connect.monthly_cost, 49.0);
    assert_eq!(costs.lex.monthly_cost, 0.0);
    assert_eq!(costs.bedrock.monthly_cost, 0.0);
    assert_eq!(costs.total_monthly_cost, 49.0);
}

#[test]
fn test_costs_non_negative_at_range_bounds() {
    for calls in [100, 10_000] {
        let costs = engine().monthly_costs(volume(calls));
        assert!(costs.connect.monthly_cost >= 0.0);
        assert!(costs.lex.monthly_cost >= 0.0);
        assert!(costs.bedrock.monthly_cost >= 0.0);
        assert!(costs.total_monthly_cost >= 0.0);
    }
}
