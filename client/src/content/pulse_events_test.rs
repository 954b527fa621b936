use super::*;

#[test]
fn index_wraps_around_event_list() {
    assert_eq!(pulse_event(0), &PULSE_EVENTS[0]);
    assert_eq!(pulse_event(30), &PULSE_EVENTS[0]);
    assert_eq!(pulse_event(31).industry, "SaaS B2B");
}

#[test]
fn last_event_is_agrotech() {
    assert_eq!(pulse_event(29).location, "Córdoba");
}
