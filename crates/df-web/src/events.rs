//! Scoped DOM event subscriptions
//!
//! A [`ListenerGuard`] registers its listener when created and removes it
//! when dropped. Components keep their guards in a [`StoredValue`] and clear
//! it from `on_cleanup`, so no listener outlives the component.

use leptos::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::EventTarget;

pub struct ListenerGuard {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(web_sys::Event)>,
}

impl ListenerGuard {
    pub fn new<E, F>(target: &EventTarget, event: &'static str, mut handler: F) -> Result<Self, JsValue>
    where
        E: JsCast,
        F: FnMut(E) + 'static,
    {
        let callback = Closure::<dyn FnMut(web_sys::Event)>::new(move |ev: web_sys::Event| {
            handler(ev.unchecked_into::<E>())
        });
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;

        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
        tracing::debug!("Removed {} listener", self.event);
    }
}

/// Guards owned by one component, released when it is torn down
pub fn scoped_guards() -> StoredValue<Vec<ListenerGuard>> {
    let guards = store_value(Vec::<ListenerGuard>::new());
    on_cleanup(move || {
        guards.try_update_value(|guards| guards.clear());
    });
    guards
}

/// Register a listener and keep its guard; failures are logged
pub fn listen<E, F>(guards: StoredValue<Vec<ListenerGuard>>, target: &EventTarget, event: &'static str, handler: F)
where
    E: JsCast,
    F: FnMut(E) + 'static,
{
    match ListenerGuard::new(target, event, handler) {
        Ok(guard) => {
            guards.try_update_value(|guards| guards.push(guard));
        }
        Err(err) => tracing::error!("Could not listen for {}: {:?}", event, err),
    }
}
