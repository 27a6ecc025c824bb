//! Email-verification wizard
//!
//! This demo drives the flow the machine was built for: a multi-step
//! signup wizard that collects an email, waits for a verification code,
//! gathers details, and confirms.
//!
//! Key concepts:
//! - Typed vocabulary via the `flow_states!` macro
//! - Listeners observing every effective step change
//! - Saturating navigation (backing out of step one stays at step one)
//! - `match_state` dispatch for rendering the current step
//!
//! Run with: cargo run --example signup_flow

use flowstep::{flow_states, Case, LinearDecrease};

flow_states! {
    enum SignupStep {
        Email,
        Code,
        Details,
        Done,
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut machine = SignupStep::machine();

    machine.subscribe(|previous, new| {
        println!("  [listener] step {previous} -> {new}");
    });

    println!("=== Signup Wizard ===\n");

    loop {
        let screen = machine.match_state([
            Case::on(SignupStep::Email.index(), || "Enter your email address"),
            Case::on(SignupStep::Code.index(), || "Enter the code we sent you"),
            Case::on(SignupStep::Details.index(), || "Fill in certificate details"),
            Case::on(SignupStep::Done.index(), || "All set!"),
            Case::fallback(|| "Unknown step"),
        ]);
        println!("{}", screen.unwrap());

        if machine.state() == SignupStep::Done.index() {
            break;
        }
        machine.next().unwrap();
    }

    // Over-advancing saturates: nobody is notified.
    machine.next().unwrap();

    // Stepping back from Done works the same way in reverse.
    machine.next_with(&LinearDecrease).unwrap();
    println!(
        "\nBacked up to: {}",
        machine.name_of(machine.state()).unwrap()
    );

    println!("\n=== Wizard Complete ===");
}
