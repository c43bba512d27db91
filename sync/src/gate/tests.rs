use super::*;
use std::sync::Arc;
use std::thread;

const SHORT: Duration = Duration::from_millis(50);

#[test]
fn starts_unset_by_default() {
  let gate = CyclicGate::default();
  assert!(!gate.is_notified());
  assert!(!gate.try_wait());
}

#[test]
fn pre_set_gate_releases_one_wait() {
  let gate = CyclicGate::new(true);
  assert!(gate.is_notified());
  gate.wait();
  assert!(!gate.is_notified());
}

#[test]
fn notify_before_wait_persists() {
  let gate = CyclicGate::new(false);
  gate.notify();
  assert!(gate.is_notified());
  gate.wait();
  assert!(!gate.is_notified());
}

#[test]
fn redundant_notifies_coalesce() {
  let gate = CyclicGate::new(false);
  gate.notify();
  gate.notify();
  gate.notify();
  assert!(gate.try_wait());
  assert!(!gate.try_wait());
  assert!(!gate.wait_for(SHORT));
}

#[test]
fn wait_for_times_out_without_notify() {
  let gate = CyclicGate::new(false);
  let start = Instant::now();
  assert!(!gate.wait_for(SHORT));
  assert!(start.elapsed() >= SHORT);
  assert!(!gate.is_notified());
}

#[test]
fn wait_for_consumes_existing_notification() {
  let gate = CyclicGate::new(true);
  assert!(gate.wait_for(Duration::ZERO));
  assert!(!gate.is_notified());
}

#[test]
fn wait_until_past_deadline() {
  let gate = CyclicGate::new(false);
  let past = Instant::now();
  assert!(!gate.wait_until(past));

  gate.notify();
  assert!(gate.wait_until(past));
  assert!(!gate.is_notified());
}

#[test]
fn wait_blocks_until_notified() {
  let gate = Arc::new(CyclicGate::new(false));
  let waiter = Arc::clone(&gate);
  let handle = thread::spawn(move || waiter.wait());

  thread::sleep(Duration::from_millis(100));
  assert!(!handle.is_finished(), "Wait should have blocked");

  gate.notify();
  handle.join().expect("Waiter thread panicked");
  assert!(!gate.is_notified());
}

#[test]
fn huge_timeout_falls_back_to_plain_wait() {
  let gate = CyclicGate::new(true);
  assert!(gate.wait_for(Duration::MAX));
}

#[test]
fn debug_shows_flag() {
  let gate = CyclicGate::new(true);
  assert_eq!(format!("{:?}", gate), "CyclicGate { notified: true }");
}
