//! One-shot entrance-visibility hook.
//!
//! Sections fade in the first time they reach the viewport and then stay in
//! their entered state for the rest of the session, even when scrolled back
//! out of view. That is entrance-animation semantics, not visibility
//! tracking, so the flag flips false -> true exactly once and never resets.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

/// Reports whether the node behind `node` has ever been on screen.
///
/// `threshold` is the fraction of the region that must be visible before the
/// flag flips; `delay_ms` postpones the flip, which the sections use to
/// stagger their entrance animations. The observer disconnects after the
/// first hit and on unmount.
#[hook]
pub fn use_visible(node: NodeRef, threshold: f64, delay_ms: u32) -> bool {
    let visible = use_state(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |node| {
                let observer_slot: Rc<RefCell<Option<IntersectionObserver>>> =
                    Rc::new(RefCell::new(None));
                let timer_slot: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
                let mut callback_slot: Option<Closure<dyn FnMut(js_sys::Array)>> = None;

                if let Some(element) = node.cast::<Element>() {
                    let slot = observer_slot.clone();
                    let timer = timer_slot.clone();
                    let callback = Closure::wrap(Box::new(move |entries: js_sys::Array| {
                        let entered = entries
                            .get(0)
                            .dyn_into::<IntersectionObserverEntry>()
                            .map(|entry| entry.is_intersecting())
                            .unwrap_or(false);
                        if !entered {
                            return;
                        }
                        // One shot: stop observing before the flip so a later
                        // scroll-out can never reset the entrance state.
                        if let Some(observer) = slot.borrow_mut().take() {
                            observer.disconnect();
                        }
                        if delay_ms > 0 {
                            let visible = visible.clone();
                            // Held in the slot so unmount cancels a pending flip.
                            *timer.borrow_mut() =
                                Some(Timeout::new(delay_ms, move || visible.set(true)));
                        } else {
                            visible.set(true);
                        }
                    })
                        as Box<dyn FnMut(js_sys::Array)>);

                    let options = IntersectionObserverInit::new();
                    options.set_threshold(&JsValue::from_f64(threshold));
                    match IntersectionObserver::new_with_options(
                        callback.as_ref().unchecked_ref(),
                        &options,
                    ) {
                        Ok(observer) => {
                            observer.observe(&element);
                            *observer_slot.borrow_mut() = Some(observer);
                            callback_slot = Some(callback);
                        }
                        Err(err) => {
                            gloo_console::error!("failed to create intersection observer", err)
                        }
                    }
                }

                move || {
                    if let Some(observer) = observer_slot.borrow_mut().take() {
                        observer.disconnect();
                    }
                    timer_slot.borrow_mut().take();
                    drop(callback_slot);
                }
            },
            node,
        );
    }

    *visible
}
