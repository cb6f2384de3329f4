//! Live-update channel
//!
//! One-way server-push stream: the backend emits the literal payload
//! `"actualizar"` whenever something changed, and the owning view re-fetches.
//! The channel reconnects with a fixed delay on transport errors, forever,
//! until the view tears it down.
//!
//! The protocol logic lives in [`ChannelCore`], a plain state machine with no
//! browser types, so it can be tested on the host. The WASM driver wires it
//! to an `EventSource` and owns the single cancellable reconnect timer.

/// The only payload the channel reacts to
pub const UPDATE_SIGNAL: &str = "actualizar";

/// Fixed delay between a transport error and the next connection attempt
pub const RECONNECT_DELAY_MS: u32 = 2_000;

/// Connection state of the channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelState {
    Connected,
    Reconnecting,
    Closed,
}

/// What the driver must do after feeding an event into the core
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelAction {
    /// Nothing to do
    Ignore,
    /// Invoke the refresh callback
    Refresh,
    /// Close the current source and arm the reconnect timer
    ScheduleReconnect,
    /// Open a fresh connection
    Reopen,
}

/// Reconnect/refresh state machine
#[derive(Debug)]
pub struct ChannelCore {
    state: ChannelState,
    reconnect_attempts: u32,
}

impl ChannelCore {
    /// A new core starts connected; the driver opens the source immediately
    pub fn new() -> Self {
        Self {
            state: ChannelState::Connected,
            reconnect_attempts: 0,
        }
    }

    pub fn state(&self) -> ChannelState {
        self.state
    }

    /// Connection attempts made after the initial open
    pub fn reconnect_attempts(&self) -> u32 {
        self.reconnect_attempts
    }

    /// A message arrived on the stream. Only the exact update signal,
    /// received while connected, triggers a refresh; state never changes.
    pub fn on_message(&self, payload: &str) -> ChannelAction {
        if self.state == ChannelState::Connected && payload == UPDATE_SIGNAL {
            ChannelAction::Refresh
        } else {
            ChannelAction::Ignore
        }
    }

    /// The transport reported an error. While reconnecting a timer is
    /// already armed, so repeated errors schedule nothing new.
    pub fn on_transport_error(&mut self) -> ChannelAction {
        match self.state {
            ChannelState::Connected => {
                self.state = ChannelState::Reconnecting;
                ChannelAction::ScheduleReconnect
            }
            ChannelState::Reconnecting | ChannelState::Closed => ChannelAction::Ignore,
        }
    }

    /// The reconnect timer fired
    pub fn on_reconnect_timer(&mut self) -> ChannelAction {
        match self.state {
            ChannelState::Reconnecting => {
                self.state = ChannelState::Connected;
                self.reconnect_attempts += 1;
                ChannelAction::Reopen
            }
            ChannelState::Connected | ChannelState::Closed => ChannelAction::Ignore,
        }
    }

    /// Tear the channel down. Every later event is a no-op.
    pub fn close(&mut self) {
        self.state = ChannelState::Closed;
    }
}

impl Default for ChannelCore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(target_arch = "wasm32")]
mod driver {
    use std::cell::RefCell;
    use std::rc::{Rc, Weak};

    use gloo_timers::callback::Timeout;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;
    use web_sys::{EventSource, MessageEvent};

    use super::{ChannelAction, ChannelCore, RECONNECT_DELAY_MS};

    struct Inner {
        url: String,
        core: ChannelCore,
        source: Option<EventSource>,
        // Exactly one pending timer at any time; dropping it cancels it.
        timer: Option<Timeout>,
        on_refresh: Rc<dyn Fn()>,
        on_message: Option<Closure<dyn FnMut(MessageEvent)>>,
        on_error: Option<Closure<dyn FnMut()>>,
    }

    /// Handle owned by the view. Closing it cancels the pending timer and
    /// silences any callback that was already in flight.
    pub struct LiveChannel {
        inner: Rc<RefCell<Inner>>,
    }

    impl LiveChannel {
        /// Open the push stream at `url` and call `on_refresh` for every
        /// update signal received
        pub fn open(url: String, on_refresh: impl Fn() + 'static) -> Self {
            let inner = Rc::new(RefCell::new(Inner {
                url,
                core: ChannelCore::new(),
                source: None,
                timer: None,
                on_refresh: Rc::new(on_refresh),
                on_message: None,
                on_error: None,
            }));
            connect(&inner);
            Self { inner }
        }

        /// Close the channel. Idempotent; no reconnect fires afterwards.
        pub fn close(&self) {
            let mut inner = self.inner.borrow_mut();
            inner.core.close();
            inner.timer = None;
            if let Some(source) = inner.source.take() {
                source.close();
            }
            inner.on_message = None;
            inner.on_error = None;
        }
    }

    fn connect(inner: &Rc<RefCell<Inner>>) {
        let url = inner.borrow().url.clone();
        let source = match EventSource::new(&url) {
            Ok(source) => source,
            Err(err) => {
                log::warn!("no se pudo abrir el stream {url}: {err:?}");
                handle_error(inner);
                return;
            }
        };

        let weak = Rc::downgrade(inner);
        let on_message = Closure::<dyn FnMut(MessageEvent)>::new(move |event: MessageEvent| {
            let Some(inner) = weak.upgrade() else { return };
            let payload = event.data().as_string().unwrap_or_default();
            let action = inner.borrow().core.on_message(&payload);
            if action == ChannelAction::Refresh {
                log::info!("señal de actualización recibida");
                let refresh = Rc::clone(&inner.borrow().on_refresh);
                refresh();
            }
        });
        source.set_onmessage(Some(on_message.as_ref().unchecked_ref()));

        let weak = Rc::downgrade(inner);
        let on_error = Closure::<dyn FnMut()>::new(move || {
            let Some(inner) = weak.upgrade() else { return };
            handle_error(&inner);
        });
        source.set_onerror(Some(on_error.as_ref().unchecked_ref()));

        let mut guard = inner.borrow_mut();
        guard.source = Some(source);
        guard.on_message = Some(on_message);
        guard.on_error = Some(on_error);
    }

    fn handle_error(inner: &Rc<RefCell<Inner>>) {
        let action = {
            let mut guard = inner.borrow_mut();
            let action = guard.core.on_transport_error();
            if action == ChannelAction::ScheduleReconnect {
                if let Some(source) = guard.source.take() {
                    source.close();
                }
            }
            action
        };
        if action == ChannelAction::ScheduleReconnect {
            log::warn!("stream desconectado, reintentando en {RECONNECT_DELAY_MS} ms");
            schedule_reconnect(inner);
        }
    }

    fn schedule_reconnect(inner: &Rc<RefCell<Inner>>) {
        let weak = Rc::downgrade(inner);
        let timer = Timeout::new(RECONNECT_DELAY_MS, move || {
            let Some(inner) = weak.upgrade() else { return };
            let action = {
                let mut guard = inner.borrow_mut();
                guard.timer = None;
                guard.core.on_reconnect_timer()
            };
            if action == ChannelAction::Reopen {
                connect(&inner);
            }
        });
        inner.borrow_mut().timer = Some(timer);
    }
}

#[cfg(target_arch = "wasm32")]
pub use driver::LiveChannel;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_signal_triggers_one_refresh_per_message() {
        let core = ChannelCore::new();
        assert_eq!(core.on_message(UPDATE_SIGNAL), ChannelAction::Refresh);
        assert_eq!(core.on_message(UPDATE_SIGNAL), ChannelAction::Refresh);
    }

    #[test]
    fn other_payloads_are_ignored() {
        let core = ChannelCore::new();
        assert_eq!(core.on_message("hola"), ChannelAction::Ignore);
        assert_eq!(core.on_message(""), ChannelAction::Ignore);
        // exact match, no trimming
        assert_eq!(core.on_message("actualizar "), ChannelAction::Ignore);
        assert_eq!(core.on_message("ACTUALIZAR"), ChannelAction::Ignore);
    }

    #[test]
    fn error_schedules_exactly_one_reconnect() {
        let mut core = ChannelCore::new();
        assert_eq!(core.on_transport_error(), ChannelAction::ScheduleReconnect);
        assert_eq!(core.state(), ChannelState::Reconnecting);
        // a second error while waiting must not arm a second timer
        assert_eq!(core.on_transport_error(), ChannelAction::Ignore);
    }
}
