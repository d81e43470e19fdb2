use rdiettracker::catalog;
use rdiettracker::models::ProgressState;
use rdiettracker::ui::views::{render_tips, render_weights};

#[test]
fn weights_view_lines() {
    let mut state = ProgressState::fresh();
    assert_eq!(
        render_weights(&state),
        "Initial weight: --\nCurrent weight: --\nWeight loss:    unavailable\n"
    );

    state.set_initial_weight("80");
    state.set_current_weight("75");
    let out = render_weights(&state);
    assert!(out.starts_with("Initial weight: 80 kg\nCurrent weight: 75 kg\n"));
    assert!(out.contains("5.0 kg"));
}

#[test]
fn tips_view_lists_every_item() {
    let out = render_tips('-');
    let bullets = out.lines().filter(|l| l.starts_with("  • ")).count();
    assert_eq!(
        bullets,
        catalog::seasonings().len() + catalog::preparation_methods().len() + catalog::tips().len()
    );
}
