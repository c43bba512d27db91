// examples/relay.rs
//
// Three threads take turns printing 1, 2, 3 by handing a notification around a
// ring of gates. Afterwards, bounded waits show both outcomes: notified in
// time, and timed out.

use fibre_sync::CyclicGate;
use std::io::Write;
use std::thread;
use std::time::{Duration, Instant};

const ROUNDS: usize = 5;
const STEP: Duration = Duration::from_millis(100);

fn main() {
  println!("--- Relay: three threads, three gates ---");
  {
    // The first gate starts set so thread 1 goes first.
    let gates = [CyclicGate::new(true), CyclicGate::new(false), CyclicGate::new(false)];

    thread::scope(|s| {
      for id in 0..gates.len() {
        let gates = &gates;
        s.spawn(move || {
          for _ in 0..ROUNDS {
            gates[id].wait();
            if id + 1 == gates.len() {
              println!("{}", id + 1);
            } else {
              print!("{}", id + 1);
              let _ = std::io::stdout().flush();
            }
            thread::sleep(STEP);
            gates[(id + 1) % gates.len()].notify();
          }
        });
      }
    });
  }

  println!("\n--- Bounded waits ---");
  {
    let gate = CyclicGate::default();
    thread::scope(|s| {
      let waiter = s.spawn(|| gate.wait_for(Duration::from_secs(2)));
      thread::sleep(Duration::from_millis(300));
      gate.notify();
      println!("wait_for notified in time: {}", waiter.join().unwrap());
    });

    let deadline = Instant::now() + Duration::from_secs(2);
    thread::scope(|s| {
      let waiter = s.spawn(|| gate.wait_until(deadline));
      thread::sleep(Duration::from_millis(700));
      gate.notify();
      println!("wait_until notified in time: {}", waiter.join().unwrap());
    });

    println!("wait_for without notify: {}", gate.wait_for(Duration::from_millis(500)));
    println!(
      "wait_until without notify: {}",
      gate.wait_until(Instant::now() + Duration::from_millis(500))
    );
  }
}
