//! Collapse Panel With Mid-Flight Reversal
//!
//! A height-collapse panel whose driving flag flips back off while the
//! expand transition is still running. The machine crosses directly into
//! the exit transition: the browser keeps animating from the current
//! computed height, so no extra reflow frame is needed.
//!
//! Run with: cargo run --example collapse

use std::rc::Rc;

use segue::core::{ComponentProps, TransitionTiming};
use segue::machine::TransitionMachine;
use segue::observer::{TransitionEvent, TransitionObserver};
use segue::schedule::ManualFrameClock;
use segue::style;

fn props(active: bool) -> ComponentProps {
    ComponentProps::new()
        .with_active(active)
        .with_style(style! { "height" => "0px", "overflow" => "hidden" })
        .with_enter_init_style(style! { "height" => "0px" })
        .with_enter_style(style! {
            "height" => "240px",
            "transition" => "height 250ms ease-out",
        })
        .with_exit_style(style! {
            "height" => "0px",
            "transition" => "height 250ms ease-in",
        })
        .with_active_style(style! { "height" => "240px" })
        .with_timings(vec![TransitionTiming::new("height", 250)])
}

fn main() {
    println!("=== Collapse Panel: Reversal Mid-Flight ===\n");

    let clock = Rc::new(ManualFrameClock::new());
    let machine = TransitionMachine::new(props(false), Rc::clone(&clock));

    machine.set_render(|presentation| {
        println!(
            "  render: height = {}, in transition: {}",
            presentation.style.get("height").unwrap_or("?"),
            presentation.in_transition,
        );
    });
    machine.set_on_transition_complete(|| println!("  -> settled"));

    let mut observer = TransitionObserver::new("panel");
    let complete = machine.clone();
    observer.set_on_transition_complete(move || complete.transition_complete());

    machine.on_mount();
    println!("Mounted collapsed: {}\n", machine.state_id().name());

    println!("Expanding:");
    machine.on_props_changed(props(true));
    clock.tick();
    println!("  state: {}\n", machine.state_id().name());

    println!("User collapses again before the expand finished:");
    machine.on_props_changed(props(false));
    println!("  state: {} (no pending frame)\n", machine.state_id().name());

    println!("The exit transition runs to its end:");
    observer.set_info(props(false).transition_info(machine.transition_state().in_transition));
    observer.transition_end(&TransitionEvent::new("panel", "height"));
    println!("  state: {}\n", machine.state_id().name());

    println!(
        "Lifecycle path: {}",
        machine
            .log()
            .path()
            .iter()
            .map(|state| state.name())
            .collect::<Vec<_>>()
            .join(" -> ")
    );

    println!("\n=== Demo Complete ===");
}
