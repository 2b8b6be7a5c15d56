//! Fade Transition Walkthrough
//!
//! This demo drives a fade-in/fade-out through the whole lifecycle using a
//! hand-ticked frame clock, printing each presentation the machine applies.
//!
//! Key concepts:
//! - Initial state computed from props (no flash on mount)
//! - The one-frame forced-reflow kickoff
//! - Completion driven by a filtered native transition-end event
//!
//! Run with: cargo run --example fade

use std::rc::Rc;

use segue::core::{ComponentProps, Style, TransitionTiming};
use segue::machine::TransitionMachine;
use segue::observer::{TransitionEvent, TransitionObserver};
use segue::schedule::ManualFrameClock;
use segue::style;

fn props(active: bool) -> ComponentProps {
    ComponentProps::new()
        .with_active(active)
        .with_style(style! { "opacity" => "0" })
        .with_enter_init_style(style! { "opacity" => "0" })
        .with_enter_style(style! {
            "opacity" => "1",
            "transition" => "opacity 300ms ease",
        })
        .with_exit_style(style! {
            "opacity" => "0",
            "transition" => "opacity 300ms ease",
        })
        .with_active_style(style! { "opacity" => "1" })
        .with_timings(vec![TransitionTiming::new("opacity", 300)])
}

fn show(label: &str, style: &Style) {
    let rendered: Vec<String> = style
        .properties()
        .map(|(property, value)| format!("{property}: {value}"))
        .collect();
    println!("  [{label}] {{ {} }}", rendered.join("; "));
}

fn main() {
    println!("=== Fade Transition Walkthrough ===\n");

    let clock = Rc::new(ManualFrameClock::new());
    let machine = TransitionMachine::new(props(false), Rc::clone(&clock));

    machine.set_render(|presentation| show("render", &presentation.style));
    machine.set_on_transition_complete(|| println!("  -> transition complete"));

    let mut observer = TransitionObserver::new("faded-box");
    let begin = machine.clone();
    observer.set_on_transition_begin(move || begin.transition_begin());
    let complete = machine.clone();
    observer.set_on_transition_complete(move || complete.transition_complete());

    println!("Mounting inactive:");
    show("initial", &machine.transition_state().style);
    machine.on_mount();
    println!("  state: {}\n", machine.state_id().name());

    println!("Toggling active on:");
    machine.on_props_changed(props(true));
    println!("  state: {}", machine.state_id().name());

    println!("One frame later the target style lands:");
    clock.tick();
    println!("  state: {}\n", machine.state_id().name());

    println!("The browser reports the transition ending:");
    observer.set_info(props(true).transition_info(machine.transition_state().in_transition));
    observer.transition_end(&TransitionEvent::new("faded-box", "opacity"));
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

    println!("\n=== Walkthrough Complete ===");
}
