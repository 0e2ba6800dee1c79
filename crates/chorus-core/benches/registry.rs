//! Registry benchmarks for chorus-core.

use chorus_core::SubscriptionRegistry;
use chorus_protocol::{StateRequest, SubscribeRequest};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use serde_json::json;

fn populated_registry(entries: usize, presence: bool) -> SubscriptionRegistry {
    let registry = SubscriptionRegistry::new();
    let channels: Vec<String> = (0..entries).map(|i| format!("channel-{}", i)).collect();

    let mut request = SubscribeRequest::new().channels(channels.iter().cloned());
    if presence {
        request = request.with_presence();
    }
    registry.subscribe(request);
    registry.set_state(StateRequest::new(json!({ "seq": 1 })).channels(channels));
    registry
}

fn bench_subscribe(c: &mut Criterion) {
    let channels: Vec<String> = (0..64).map(|i| format!("channel-{}", i)).collect();

    let mut group = c.benchmark_group("subscribe");
    group.throughput(Throughput::Elements(64));
    group.bench_function("64_channels_presence", |b| {
        b.iter(|| {
            let registry = SubscriptionRegistry::new();
            registry.subscribe(black_box(
                SubscribeRequest::new()
                    .channels(channels.iter().cloned())
                    .with_presence(),
            ));
        })
    });
    group.finish();
}

fn bench_channel_list(c: &mut Criterion) {
    let registry = populated_registry(256, true);

    let mut group = c.benchmark_group("channel_list");
    group.throughput(Throughput::Elements(256));
    group.bench_function("with_presence_256", |b| {
        b.iter(|| registry.channels(black_box(true)))
    });
    group.bench_function("without_presence_256", |b| {
        b.iter(|| registry.channels(black_box(false)))
    });
    group.finish();
}

fn bench_state_payload(c: &mut Criterion) {
    let registry = populated_registry(256, false);

    c.bench_function("state_payload_256", |b| b.iter(|| registry.state_payload()));
}

fn bench_snapshot(c: &mut Criterion) {
    let registry = populated_registry(256, true);

    c.bench_function("snapshot_256", |b| {
        b.iter(|| registry.snapshot(black_box(true)))
    });
}

criterion_group!(
    benches,
    bench_subscribe,
    bench_channel_list,
    bench_state_payload,
    bench_snapshot
);
criterion_main!(benches);
