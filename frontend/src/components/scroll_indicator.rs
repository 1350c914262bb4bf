use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

/// Thin progress bar under the fixed header showing how far down the page
/// the viewport is.
#[function_component(ScrollIndicator)]
pub fn scroll_indicator() -> Html {
    let progress = use_state(|| 0.0f64);

    {
        let progress = progress.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().expect("no window");
                let document = window.document().expect("no document");

                let update = {
                    let window = window.clone();
                    move || {
                        let scroll_top = window.scroll_y().unwrap_or(0.0);
                        let viewport = window
                            .inner_height()
                            .ok()
                            .and_then(|h| h.as_f64())
                            .unwrap_or(0.0);
                        let full = document
                            .document_element()
                            .map(|el| el.scroll_height() as f64)
                            .unwrap_or(0.0);
                        let track = full - viewport;
                        if track > 0.0 {
                            progress.set((scroll_top / track * 100.0).clamp(0.0, 100.0));
                        }
                    }
                };
                update();

                let scroll_callback =
                    Closure::wrap(Box::new(update) as Box<dyn FnMut()>);
                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .expect("failed to attach scroll listener");

                move || {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                }
            },
            (),
        );
    }

    html! {
        <div class="scroll-indicator">
            <div
                class="scroll-indicator-bar"
                style={format!("width: {:.2}%;", *progress)}
            />
        </div>
    }
}
