//! Browser speech-to-text capture.
//!
//! The Web Speech API is not stable in `web-sys`, so the recognizer is driven
//! through `js_sys::Reflect`, looking up `SpeechRecognition` and falling back
//! to the prefixed `webkitSpeechRecognition`.
//!
//! TRADE-OFFS
//! ==========
//! A [`SpeechCapture`] owns its recognizer and the JS callbacks. Dropping it
//! detaches every handler before aborting, so no event reaches widget state
//! after teardown.

#[cfg(test)]
#[path = "speech_test.rs"]
mod speech_test;

use crate::state::voice::SpeechConfig;

/// Constructor names probed on `window`, in order.
pub const RECOGNIZER_CONSTRUCTORS: [&str; 2] = ["SpeechRecognition", "webkitSpeechRecognition"];

/// Message shown when the browser has no speech recognition.
pub const UNSUPPORTED_NOTICE: &str = "Your browser does not support speech recognition";

/// Recognizer callback translated into Rust.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SpeechEvent {
    /// Best transcript of the first result.
    Result(String),
    /// Recognition failed (`no-speech`, `not-allowed`, ...).
    Error(String),
    /// Capture ended.
    End,
}

/// Errors raised while starting capture.
#[derive(Debug, thiserror::Error)]
pub enum SpeechError {
    /// No recognizer constructor on `window`.
    #[error("speech recognition is not supported")]
    Unsupported,

    /// The recognizer exists but refused to start.
    #[error("speech recognition failed to start: {0}")]
    Start(String),
}

/// Whether this browser exposes a speech recognizer.
pub fn is_supported() -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window().is_some_and(|w| browser::constructor(&w).is_some())
    }
    #[cfg(not(feature = "csr"))]
    {
        false
    }
}

/// Show the blocking "not supported" notice.
pub fn alert_unsupported() {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(UNSUPPORTED_NOTICE);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        log::warn!("{UNSUPPORTED_NOTICE}");
    }
}

/// One active recognition session.
pub struct SpeechCapture {
    #[cfg(feature = "csr")]
    recognizer: wasm_bindgen::JsValue,
    #[cfg(feature = "csr")]
    _handlers: Vec<wasm_bindgen::closure::Closure<dyn FnMut(wasm_bindgen::JsValue)>>,
}

impl SpeechCapture {
    /// Create a recognizer with `config` and start listening.
    ///
    /// # Errors
    ///
    /// [`SpeechError::Unsupported`] without a recognizer,
    /// [`SpeechError::Start`] when construction or `start()` throws.
    pub fn start(config: &SpeechConfig, on_event: impl Fn(SpeechEvent) + 'static) -> Result<Self, SpeechError> {
        #[cfg(feature = "csr")]
        {
            browser::start(config, on_event)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (config, on_event);
            Err(SpeechError::Unsupported)
        }
    }

    /// Ask the recognizer to stop; a final result may still arrive.
    pub fn stop(&self) {
        #[cfg(feature = "csr")]
        browser::call(&self.recognizer, "stop");
    }
}

impl Drop for SpeechCapture {
    fn drop(&mut self) {
        #[cfg(feature = "csr")]
        {
            for name in ["onresult", "onerror", "onend"] {
                browser::set(&self.recognizer, name, &wasm_bindgen::JsValue::NULL);
            }
            browser::call(&self.recognizer, "abort");
        }
    }
}

#[cfg(feature = "csr")]
mod browser {
    use std::rc::Rc;

    use js_sys::{Array, Function, Reflect};
    use wasm_bindgen::JsCast;
    use wasm_bindgen::JsValue;
    use wasm_bindgen::closure::Closure;

    use super::{RECOGNIZER_CONSTRUCTORS, SpeechCapture, SpeechError, SpeechEvent};
    use crate::state::voice::SpeechConfig;

    pub(super) fn constructor(window: &web_sys::Window) -> Option<Function> {
        RECOGNIZER_CONSTRUCTORS.iter().find_map(|name| {
            Reflect::get(window, &JsValue::from_str(name))
                .ok()
                .and_then(|ctor| ctor.dyn_into::<Function>().ok())
        })
    }

    pub(super) fn set(target: &JsValue, key: &str, value: &JsValue) {
        let _ = Reflect::set(target, &JsValue::from_str(key), value);
    }

    pub(super) fn call(target: &JsValue, method: &str) {
        if let Some(f) = Reflect::get(target, &JsValue::from_str(method))
            .ok()
            .and_then(|f| f.dyn_into::<Function>().ok())
        {
            if let Err(e) = f.call0(target) {
                log::warn!("speech recognizer {method}() failed: {e:?}");
            }
        }
    }

    fn first_transcript(event: &JsValue) -> Option<String> {
        let results = Reflect::get(event, &JsValue::from_str("results")).ok()?;
        let first = Reflect::get_u32(&results, 0).ok()?;
        let best = Reflect::get_u32(&first, 0).ok()?;
        Reflect::get(&best, &JsValue::from_str("transcript")).ok()?.as_string()
    }

    fn error_reason(event: &JsValue) -> String {
        Reflect::get(event, &JsValue::from_str("error"))
            .ok()
            .and_then(|v| v.as_string())
            .unwrap_or_else(|| "unknown".to_owned())
    }

    pub(super) fn start(
        config: &SpeechConfig,
        on_event: impl Fn(SpeechEvent) + 'static,
    ) -> Result<SpeechCapture, SpeechError> {
        let window = web_sys::window().ok_or(SpeechError::Unsupported)?;
        let ctor = constructor(&window).ok_or(SpeechError::Unsupported)?;
        let recognizer =
            Reflect::construct(&ctor, &Array::new()).map_err(|e| SpeechError::Start(format!("{e:?}")))?;

        set(&recognizer, "lang", &JsValue::from_str(&config.lang));
        set(&recognizer, "interimResults", &JsValue::from_bool(config.interim_results));
        set(&recognizer, "maxAlternatives", &JsValue::from_f64(f64::from(config.max_alternatives)));

        let on_event: Rc<dyn Fn(SpeechEvent)> = Rc::new(on_event);
        let on_result = {
            let on_event = Rc::clone(&on_event);
            Closure::<dyn FnMut(JsValue)>::new(move |event: JsValue| {
                if let Some(transcript) = first_transcript(&event) {
                    on_event(SpeechEvent::Result(transcript));
                }
            })
        };
        let on_error = {
            let on_event = Rc::clone(&on_event);
            Closure::<dyn FnMut(JsValue)>::new(move |event: JsValue| {
                on_event(SpeechEvent::Error(error_reason(&event)));
            })
        };
        let on_end = {
            let on_event = Rc::clone(&on_event);
            Closure::<dyn FnMut(JsValue)>::new(move |_event: JsValue| on_event(SpeechEvent::End))
        };
        set(&recognizer, "onresult", on_result.as_ref());
        set(&recognizer, "onerror", on_error.as_ref());
        set(&recognizer, "onend", on_end.as_ref());

        // Owned from here on, so a failed start still detaches the handlers.
        let capture = SpeechCapture { recognizer, _handlers: vec![on_result, on_error, on_end] };
        let start = Reflect::get(&capture.recognizer, &JsValue::from_str("start"))
            .ok()
            .and_then(|f| f.dyn_into::<Function>().ok())
            .ok_or(SpeechError::Unsupported)?;
        start
            .call0(&capture.recognizer)
            .map_err(|e| SpeechError::Start(format!("{e:?}")))?;

        Ok(capture)
    }
}
