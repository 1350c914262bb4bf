use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

mod carousel;
mod config;
mod hooks;

mod components {
    pub mod scroll_indicator;
}
mod pages {
    pub mod home;
}
mod sections {
    pub mod contact;
    pub mod demo;
    pub mod features;
    pub mod hero;
    pub mod showcase;
    pub mod tools;
    pub mod workflow;
}

use components::scroll_indicator::ScrollIndicator;
use pages::home::Home;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! {
                <div class="not-found">
                    <h1>{"404"}</h1>
                    <p>{"This page does not exist."}</p>
                    <Link<Route> to={Route::Home} classes="forward-link">
                        {"Back to the homepage"}
                    </Link<Route>>
                </div>
            }
        }
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().expect("no window");
                let document = window.document().expect("no document");

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = document
                        .document_element()
                        .map(|el| el.scroll_top())
                        .unwrap_or(0);
                    is_scrolled.set(scroll_top > 80);
                }) as Box<dyn FnMut()>);

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

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <header class={classes!("top-nav", (*is_scrolled).then_some("scrolled"))}>
            <div class="nav-content">
                <a href="#hero" class="nav-logo">
                    {"Cine"}<span class="accent">{"Forge"}</span>
                </a>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <nav class={menu_class} onclick={close_menu}>
                    <a href="#hero" class="nav-link">{"Home"}</a>
                    <a href="#features" class="nav-link">{"Features"}</a>
                    <a href="#tools" class="nav-link">{"Tools"}</a>
                    <a href="#workflow" class="nav-link">{"Workflow"}</a>
                    <a href="#contact" class="nav-link">{"Contact"}</a>
                    <a href="#contact" class="nav-cta">{"Get Started"}</a>
                </nav>
            </div>
            <ScrollIndicator />
        </header>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="footer-columns">
                <div class="footer-column">
                    <h4>{"CineForge"}</h4>
                    <ul>
                        <li><a href="#hero">{"About"}</a></li>
                        <li><a href="#workflow">{"Workflow"}</a></li>
                        <li><a href="#contact">{"Careers"}</a></li>
                    </ul>
                </div>
                <div class="footer-column">
                    <h4>{"Resources"}</h4>
                    <ul>
                        <li><a href="#features">{"Features"}</a></li>
                        <li><a href="#tools">{"Tool Catalog"}</a></li>
                        <li><a href="#showcase">{"Case Studies"}</a></li>
                    </ul>
                </div>
                <div class="footer-column">
                    <h4>{"Connect"}</h4>
                    <ul>
                        <li><a href="mailto:hello@cineforge.example">{"hello@cineforge.example"}</a></li>
                        <li><a href="mailto:support@cineforge.example">{"support@cineforge.example"}</a></li>
                    </ul>
                </div>
            </div>
            <div class="footer-bottom">
                <span class="footer-logo">{"Cine"}<span class="accent">{"Forge"}</span></span>
                <span class="footer-copyright">{"© 2026 CineForge. All rights reserved."}</span>
            </div>
        </footer>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <main class="page-main">
                <Switch<Route> render={switch} />
            </main>
            <Footer />
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
