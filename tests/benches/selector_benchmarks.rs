//! # Derived-State Selector Benchmarks
//!
//! | Derivation | Path | Expectation |
//! |------------|------|-------------|
//! | ds-01 Confirmation Resolution | cache hit | pointer comparisons only |
//! | ds-02 Account Ordering | recompute | O(n log n) in permitted accounts |
//! | ds-03 Bridge Eligibility | cache hit | pointer comparisons only |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ds_01_confirmation_resolution::{ConfirmationResolutionApi, ConfirmationResolver};
use ds_02_account_ordering::{AccountOrderingApi, AccountOrderingService};
use ds_03_bridge_eligibility::{BridgeEligibilityApi, BridgeEligibilityService};
use ds_tests::fixtures::{full_snapshot, REMIX};
use serde_json::json;
use shared_types::{KeyringGroup, WalletState};

// ============================================================================
// Cache hit vs recompute on the fixture snapshot
// ============================================================================

fn bench_memo_hit_vs_recompute(c: &mut Criterion) {
    let mut group = c.benchmark_group("selector-memoization");
    let Ok(state) = full_snapshot() else {
        return;
    };

    let resolver = ConfirmationResolver::new();
    resolver.explain(&state, None);
    group.bench_function("ds-01_hit", |b| {
        b.iter(|| black_box(resolver.explain(black_box(&state), None)))
    });
    group.bench_function("ds-01_recompute", |b| {
        b.iter(|| black_box(ConfirmationResolver::new().explain(black_box(&state), None)))
    });

    let ordering = AccountOrderingService::new();
    ordering.get_ordered_connected_accounts(&state, REMIX);
    group.bench_function("ds-02_hit", |b| {
        b.iter(|| black_box(ordering.get_ordered_connected_accounts(black_box(&state), REMIX)))
    });
    group.bench_function("ds-02_recompute", |b| {
        b.iter(|| {
            black_box(
                AccountOrderingService::new().get_ordered_connected_accounts(black_box(&state), REMIX),
            )
        })
    });

    let bridge = BridgeEligibilityService::new();
    bridge.explain(&state);
    group.bench_function("ds-03_hit", |b| {
        b.iter(|| black_box(bridge.is_bridge_transaction(black_box(&state))))
    });

    group.finish();
}

// ============================================================================
// Ordering cost by allow-list size
// ============================================================================

fn wide_state(size: usize) -> Option<WalletState> {
    let addresses: Vec<String> = (0..size).map(|i| format!("0x{i:040x}")).collect();
    let accounts: serde_json::Map<String, serde_json::Value> = addresses
        .iter()
        .enumerate()
        .map(|(i, address)| {
            let id = format!("account-{i}");
            let record = json!({
                "id": id,
                "address": address,
                "metadata": {
                    "name": format!("Account {}", i + 1),
                    "lastSelected": (i % 7) as u64,
                }
            });
            (id, record)
        })
        .collect();

    let state = WalletState::from_json_str(
        &json!({
            "subjects": {REMIX: {"permissions": {"eth_accounts": {
                "caveats": [{"type": "restrictReturnedAccounts", "value": addresses}]
            }}}},
            "internalAccounts": {"accounts": accounts, "selectedAccount": "account-0"},
        })
        .to_string(),
    )
    .ok()?;

    Some(state.with_keyrings(vec![KeyringGroup {
        keyring_type: Some("HD Key Tree".into()),
        accounts: addresses.into_iter().rev().collect(),
    }]))
}

fn bench_ordering_by_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("ds-02-account-ordering");

    for size in [10, 100, 1_000] {
        let Some(state) = wide_state(size) else {
            continue;
        };

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("order_recompute", size), &state, |b, state| {
            b.iter(|| {
                black_box(
                    AccountOrderingService::new().get_ordered_connected_accounts(state, REMIX),
                )
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_memo_hit_vs_recompute, bench_ordering_by_size);
criterion_main!(benches);
