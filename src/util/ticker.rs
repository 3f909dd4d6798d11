//! Owned timer handles.
//!
//! Both handles cancel their timer when dropped, so storing one in a slot
//! that is cleared on unmount guarantees no callback fires after teardown.
//! Outside the browser the callbacks are never scheduled.

/// Repeating timer firing every `interval_ms`.
#[must_use = "dropping a Ticker cancels it"]
pub struct Ticker {
    #[cfg(feature = "csr")]
    _interval: gloo_timers::callback::Interval,
}

impl Ticker {
    pub fn every(interval_ms: u32, tick: impl FnMut() + 'static) -> Self {
        #[cfg(feature = "csr")]
        {
            Self { _interval: gloo_timers::callback::Interval::new(interval_ms, tick) }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (interval_ms, tick);
            Self {}
        }
    }
}

/// One-shot timer firing once after `delay_ms`.
#[must_use = "dropping a Delay cancels it"]
pub struct Delay {
    #[cfg(feature = "csr")]
    _timeout: gloo_timers::callback::Timeout,
}

impl Delay {
    pub fn after(delay_ms: u32, fire: impl FnOnce() + 'static) -> Self {
        #[cfg(feature = "csr")]
        {
            Self { _timeout: gloo_timers::callback::Timeout::new(delay_ms, fire) }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (delay_ms, fire);
            Self {}
        }
    }
}
