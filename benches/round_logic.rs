use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fast_kitchen::core::{GameConfig, GameSnapshot, GameState, Order, OrderGenerator};
use fast_kitchen::term::{FrameBuffer, GameView, Viewport};
use fast_kitchen::types::GameAction;

fn playing() -> GameState {
    let mut state = GameState::with_config(GameConfig::instant(), 12345).unwrap();
    state.apply_action(GameAction::Start);
    state
}

fn bench_tick(c: &mut Criterion) {
    let mut state = playing();

    c.bench_function("game_tick_16ms", |b| {
        b.iter(|| {
            if !state.tick(black_box(16)) {
                return;
            }
            // A timeout fired; keep the run alive.
            if state.game_over() {
                state.restart();
            }
            state.drain_events().for_each(drop);
        })
    });
}

fn bench_complete_order(c: &mut Criterion) {
    let mut state = playing();

    c.bench_function("complete_order", |b| {
        b.iter(|| {
            for i in 0..state.order().len() {
                let step = state.order()[i];
                state.submit(black_box(step));
            }
            state.drain_events().for_each(drop);
        })
    });
}

fn bench_generate_order(c: &mut Criterion) {
    let config = GameConfig::default();
    let mut orders = OrderGenerator::new(12345);
    let mut out = Order::new();

    c.bench_function("generate_order_level_5", |b| {
        b.iter(|| {
            orders.generate_into(&config, black_box(5), &mut out);
        })
    });
}

fn bench_snapshot_and_view(c: &mut Criterion) {
    let state = playing();
    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(80, 24);

    c.bench_function("snapshot_and_render_80x24", |b| {
        b.iter(|| {
            state.snapshot_into(&mut snap);
            view.render_into(black_box(&snap), Viewport::new(80, 24), &mut fb);
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_complete_order,
    bench_generate_order,
    bench_snapshot_and_view
);
criterion_main!(benches);
