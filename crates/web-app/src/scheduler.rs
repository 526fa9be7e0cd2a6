use futures_util::{StreamExt, future::abortable};
use gloo_timers::future::IntervalStream;

/// Runs a callback periodically until the returned [`Ticker`] is dropped.
pub trait Scheduler {
    fn every(&self, millis: u32, callback: Box<dyn FnMut()>) -> Ticker;
}

/// Handle of a periodic callback. Dropping it cancels the callback.
pub struct Ticker {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Ticker {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl std::fmt::Debug for Ticker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ticker").finish_non_exhaustive()
    }
}

/// Browser scheduler based on `setInterval`.
#[derive(Debug, Default, Clone, Copy)]
pub struct IntervalScheduler;

impl Scheduler for IntervalScheduler {
    fn every(&self, millis: u32, mut callback: Box<dyn FnMut()>) -> Ticker {
        let (task, handle) = abortable(async move {
            let mut interval = IntervalStream::new(millis);
            while interval.next().await.is_some() {
                callback();
            }
        });
        wasm_bindgen_futures::spawn_local(async move {
            let _ = task.await;
        });
        Ticker::new(move || handle.abort())
    }
}
