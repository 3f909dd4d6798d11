//! Best-effort visitor location.
//!
//! TRADE-OFFS
//! ==========
//! Location only enriches the answer request. Denied permission, a missing
//! API, or a lookup slower than the configured bound all resolve to `None`
//! and the question is sent without coordinates.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "geolocation_test.rs"]
mod geolocation_test;

use super::types::Coordinates;

/// Source of the visitor's coordinates. Never fails; absence is `None`.
#[async_trait::async_trait(?Send)]
pub trait LocationSource {
    async fn locate(&self) -> Option<Coordinates>;
}

/// Location source that never knows where the visitor is.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoLocation;

#[async_trait::async_trait(?Send)]
impl LocationSource for NoLocation {
    async fn locate(&self) -> Option<Coordinates> {
        None
    }
}

/// `navigator.geolocation` wrapper bounded by `timeout_ms`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BrowserLocation {
    timeout_ms: u32,
}

impl BrowserLocation {
    pub fn new(timeout_ms: u32) -> Self {
        Self { timeout_ms }
    }
}

#[async_trait::async_trait(?Send)]
impl LocationSource for BrowserLocation {
    async fn locate(&self) -> Option<Coordinates> {
        #[cfg(feature = "csr")]
        {
            browser_position(self.timeout_ms).await
        }
        #[cfg(not(feature = "csr"))]
        {
            log::debug!("no geolocation outside the browser (bound {} ms)", self.timeout_ms);
            None
        }
    }
}

/// Extra wait past the platform timeout before giving up on a callback that
/// never fires (e.g. an unanswered permission prompt).
#[cfg(any(test, feature = "csr"))]
const CALLBACK_GRACE_MS: u32 = 500;

#[cfg(any(test, feature = "csr"))]
fn overall_deadline_ms(timeout_ms: u32) -> u32 {
    timeout_ms.saturating_add(CALLBACK_GRACE_MS)
}

#[cfg(feature = "csr")]
async fn browser_position(timeout_ms: u32) -> Option<Coordinates> {
    use std::cell::RefCell;
    use std::rc::Rc;

    use futures::channel::oneshot;
    use futures::future::{Either, select};
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let geolocation = web_sys::window()?.navigator().geolocation().ok()?;

    let (tx, rx) = oneshot::channel::<Option<Coordinates>>();
    let tx = Rc::new(RefCell::new(Some(tx)));

    // One-shot callbacks owned by the JS side: the browser may answer after
    // the deadline below has already given up, so they must outlive this
    // future. The one that never runs stays allocated.
    let on_success = {
        let tx = Rc::clone(&tx);
        Closure::once_into_js(move |position: web_sys::GeolocationPosition| {
            let coords = position.coords();
            if let Some(tx) = tx.borrow_mut().take() {
                let _ = tx.send(Some(Coordinates { lat: coords.latitude(), lng: coords.longitude() }));
            }
        })
    };
    let on_error = {
        let tx = Rc::clone(&tx);
        Closure::once_into_js(move |err: web_sys::GeolocationPositionError| {
            log::warn!("location access failed: {}", err.message());
            if let Some(tx) = tx.borrow_mut().take() {
                let _ = tx.send(None);
            }
        })
    };

    let options = web_sys::PositionOptions::new();
    options.set_timeout(timeout_ms);
    if let Err(e) = geolocation.get_current_position_with_error_callback_and_options(
        on_success.unchecked_ref(),
        Some(on_error.unchecked_ref()),
        &options,
    ) {
        log::warn!("location lookup not started: {e:?}");
        return None;
    }

    let deadline = gloo_timers::future::TimeoutFuture::new(overall_deadline_ms(timeout_ms));
    match select(rx, Box::pin(deadline)).await {
        Either::Left((Ok(coords), _)) => coords,
        Either::Left((Err(_), _)) => None,
        Either::Right(_) => {
            log::warn!("location lookup exceeded {} ms", overall_deadline_ms(timeout_ms));
            None
        }
    }
}
