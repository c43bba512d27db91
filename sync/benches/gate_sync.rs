use bench_matrix::{
  criterion_runner::sync_suite::SyncBenchmarkSuite, AbstractCombination, MatrixCellValue,
};
use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use std::thread;
use std::time::{Duration, Instant};

use fibre_sync::CyclicGate;

#[derive(Debug, Clone)]
struct GateBenchConfig {
  rounds: usize,
  cross_thread: bool,
}

#[derive(Default, Debug)]
struct BenchContext {
  rounds_total: usize,
}

struct GateSyncState {
  ping: CyclicGate,
  pong: CyclicGate,
}

fn extract_gate_config(combo: &AbstractCombination) -> Result<GateBenchConfig, String> {
  Ok(GateBenchConfig {
    rounds: (combo.get_u64(0)? as usize).max(1),
    cross_thread: combo.get_u64(1)? != 0,
  })
}

fn setup_fn_gate_sync(_cfg: &GateBenchConfig) -> Result<(BenchContext, GateSyncState), String> {
  Ok((
    BenchContext::default(),
    GateSyncState {
      ping: CyclicGate::new(false),
      pong: CyclicGate::new(false),
    },
  ))
}

// Same thread: notify then wait on one gate. Cross thread: ping-pong between two threads.
fn benchmark_logic_gate_sync(
  mut ctx: BenchContext,
  state: GateSyncState,
  cfg: &GateBenchConfig,
) -> (BenchContext, GateSyncState, Duration) {
  let rounds = cfg.rounds;
  let start_time = Instant::now();
  if cfg.cross_thread {
    thread::scope(|s| {
      s.spawn(|| {
        for _ in 0..rounds {
          state.ping.wait();
          state.pong.notify();
        }
      });
      for _ in 0..rounds {
        state.ping.notify();
        state.pong.wait();
      }
    });
  } else {
    for _ in 0..rounds {
      state.ping.notify();
      state.ping.wait();
    }
  }
  let duration = start_time.elapsed();
  ctx.rounds_total += rounds;
  (ctx, state, duration)
}

fn teardown_gate_sync(_ctx: BenchContext, _state: GateSyncState, _cfg: &GateBenchConfig) {}

fn gate_sync_benches(c: &mut Criterion) {
  let parameter_axes = vec![
    vec![
      MatrixCellValue::Unsigned(1_000),
      MatrixCellValue::Unsigned(100_000),
    ], // Rounds
    vec![MatrixCellValue::Unsigned(0), MatrixCellValue::Unsigned(1)], // CrossThread
  ];
  let parameter_names = vec!["Rounds".to_string(), "CrossThread".to_string()];

  SyncBenchmarkSuite::new(
    c,
    "CyclicGateSync".to_string(),
    Some(parameter_names),
    parameter_axes,
    Box::new(extract_gate_config),
    setup_fn_gate_sync,
    benchmark_logic_gate_sync,
    teardown_gate_sync,
  )
  .throughput(|cfg: &GateBenchConfig| Throughput::Elements(cfg.rounds as u64))
  .run();
}

criterion_group!(benches, gate_sync_benches);
criterion_main!(benches);
