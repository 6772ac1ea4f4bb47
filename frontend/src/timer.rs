use gloo_timers::callback::Timeout;
use shared::SpinTimer;

/// `setTimeout` backed timer. Spins are never cancelled, so the handle is forgotten.
pub struct BrowserTimer;

impl SpinTimer for BrowserTimer {
    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) {
        Timeout::new(delay_ms, callback).forget();
    }
}
