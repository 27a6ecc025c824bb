//! Cyclic custom router
//!
//! Routers only compute a proposed index; they never clamp. A closure is
//! already a router, so a cycle over five states is one line of arithmetic.
//!
//! Run with: cargo run --example cyclic_router

use flowstep::StateMachine;

fn main() {
    let mut machine =
        StateMachine::new(["First", "Second", "Third", "Fourth", "Fifth"]).unwrap();

    let cycle_len = machine.len();
    let cyclic = move |current: usize| ((current + 1) % cycle_len) as f64;

    println!("Cycling twice around {} states:", machine.len());
    for _ in 0..(2 * machine.len()) {
        machine.next_with(&cyclic).unwrap();
        println!(
            "  now at {} ({})",
            machine.state(),
            machine.name_of(machine.state()).unwrap()
        );
    }

    // Back at the start after a whole number of cycles.
    assert_eq!(machine.state(), 0);
}
