//! Live-update channel state machine tests

use reservas_app::live::{ChannelAction, ChannelCore, ChannelState, UPDATE_SIGNAL};

#[test]
fn new_channel_starts_connected() {
    let core = ChannelCore::new();
    assert_eq!(core.state(), ChannelState::Connected);
    assert_eq!(core.reconnect_attempts(), 0);
}

#[test]
fn update_signal_refreshes_while_connected() {
    let core = ChannelCore::new();
    assert_eq!(core.on_message(UPDATE_SIGNAL), ChannelAction::Refresh);
}

#[test]
fn foreign_payloads_never_refresh() {
    let core = ChannelCore::new();
    for payload in ["", "ping", "actualiza", "actualizar\n", " actualizar"] {
        assert_eq!(core.on_message(payload), ChannelAction::Ignore);
    }
}

#[test]
fn n_errors_produce_n_reconnect_attempts() {
    let mut core = ChannelCore::new();
    for n in 1..=5 {
        assert_eq!(core.on_transport_error(), ChannelAction::ScheduleReconnect);
        assert_eq!(core.state(), ChannelState::Reconnecting);
        assert_eq!(core.on_reconnect_timer(), ChannelAction::Reopen);
        assert_eq!(core.state(), ChannelState::Connected);
        assert_eq!(core.reconnect_attempts(), n);
    }
}

#[test]
fn repeated_errors_while_reconnecting_schedule_nothing() {
    let mut core = ChannelCore::new();
    assert_eq!(core.on_transport_error(), ChannelAction::ScheduleReconnect);
    assert_eq!(core.on_transport_error(), ChannelAction::Ignore);
    assert_eq!(core.on_transport_error(), ChannelAction::Ignore);
    // the single pending timer still fires exactly one reopen
    assert_eq!(core.on_reconnect_timer(), ChannelAction::Reopen);
    assert_eq!(core.reconnect_attempts(), 1);
}

#[test]
fn messages_while_reconnecting_are_ignored() {
    let mut core = ChannelCore::new();
    core.on_transport_error();
    assert_eq!(core.on_message(UPDATE_SIGNAL), ChannelAction::Ignore);
}

#[test]
fn spurious_timer_while_connected_is_a_noop() {
    let mut core = ChannelCore::new();
    assert_eq!(core.on_reconnect_timer(), ChannelAction::Ignore);
    assert_eq!(core.reconnect_attempts(), 0);
}

#[test]
fn closed_channel_ignores_every_event() {
    let mut core = ChannelCore::new();
    core.close();
    assert_eq!(core.state(), ChannelState::Closed);
    assert_eq!(core.on_message(UPDATE_SIGNAL), ChannelAction::Ignore);
    assert_eq!(core.on_transport_error(), ChannelAction::Ignore);
    assert_eq!(core.on_reconnect_timer(), ChannelAction::Ignore);
    assert_eq!(core.reconnect_attempts(), 0);
}

#[test]
fn timer_racing_teardown_does_not_reopen() {
    // error arms the timer, the view unmounts, then the timer fires
    let mut core = ChannelCore::new();
    assert_eq!(core.on_transport_error(), ChannelAction::ScheduleReconnect);
    core.close();
    assert_eq!(core.on_reconnect_timer(), ChannelAction::Ignore);
    assert_eq!(core.state(), ChannelState::Closed);
}

#[test]
fn close_is_idempotent() {
    let mut core = ChannelCore::new();
    core.close();
    core.close();
    assert_eq!(core.state(), ChannelState::Closed);
}
