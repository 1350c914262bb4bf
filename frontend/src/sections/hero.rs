use yew::prelude::*;

use crate::hooks::use_visible;

#[function_component(HeroSection)]
pub fn hero_section() -> Html {
    let section = use_node_ref();
    let visible = use_visible(section.clone(), 0.1, 0);

    html! {
        <section id="hero" ref={section} class={classes!("hero", visible.then_some("entered"))}>
            <div class="hero-backdrop" />
            <div class="hero-content">
                <div class="hero-copy fade-up">
                    <h1>
                        {"Reimagine"}
                        <br />
                        <span class="accent">{"Filmmaking"}</span>
                    </h1>
                    <p class="hero-subtitle">
                        {"Augment every stage of your production with AI-powered tools built for the modern filmmaker."}
                    </p>
                    <div class="hero-actions">
                        <a href="#features" class="button primary">{"Discover Tools"}</a>
                        <a href="#demo" class="button outline">{"Watch Demo"}</a>
                    </div>
                </div>
                <div class="hero-media fade-up delayed">
                    <div class="video-frame">
                        <div class="play-badge" />
                    </div>
                </div>
            </div>
            <a href="#features" class="hero-scroll-hint" aria-label="Scroll to features">
                <span class="chevron-down" />
            </a>
        </section>
    }
}
