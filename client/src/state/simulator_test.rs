use super::*;

#[test]
fn defaults_match_slider_defaults() {
    let state = SimulatorState::default();
    assert_eq!(state.revenue, 25_000.0);
    assert_eq!(state.ad_spend, 5_000.0);
    assert_eq!(state.protocol, ProtocolId::B);
    assert!(!state.processing);
}

#[test]
fn setters_clamp_to_slider_ranges() {
    let mut state = SimulatorState::default();
    state.set_revenue(500.0);
    state.set_ad_spend(90_000.0);
    assert_eq!(state.revenue, 1_000.0);
    assert_eq!(state.ad_spend, 50_000.0);

    state.set_revenue(f64::NAN);
    assert_eq!(state.revenue, 25_000.0);
}

#[test]
fn projection_follows_selected_protocol() {
    let mut state = SimulatorState::default();
    // B: 25000 + 5000 * 7.5 + 25000 * 0.2
    assert_eq!(state.projection().monthly, 67_500.0);

    state.select(ProtocolId::A);
    assert_eq!(state.projection().monthly, 44_000.0);
    assert_eq!(state.projection().annual, 528_000.0);
}

#[test]
fn deploy_runs_once_until_finished() {
    let mut state = SimulatorState::default();
    assert!(state.begin_deploy());
    assert!(!state.begin_deploy());

    state.finish_deploy();
    assert!(!state.processing);
    assert!(state.deployed);
}

#[test]
fn finish_without_begin_is_ignored() {
    let mut state = SimulatorState::default();
    state.finish_deploy();
    assert!(!state.deployed);
}

#[test]
fn changing_protocol_hides_confirmation() {
    let mut state = SimulatorState::default();
    state.begin_deploy();
    state.finish_deploy();
    state.select(ProtocolId::C);
    assert!(!state.deployed);
}
