use yew::prelude::*;

use crate::hooks::use_visible;

struct Testimonial {
    title: &'static str,
    quote: &'static str,
    name: &'static str,
    role: &'static str,
}

const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        title: "Revolutionary for Indie Filmmakers",
        quote: "We finished pre-production in half the usual time with twice the detail.",
        name: "Alex Rodriguez",
        role: "Independent Director",
    },
    Testimonial {
        title: "Game-Changing for VFX Planning",
        quote: "Previewing the heavy VFX shots before filming saved us thousands in reshoots.",
        name: "Sarah Chen",
        role: "VFX Supervisor",
    },
    Testimonial {
        title: "Built for Remote Collaboration",
        quote: "A team split across three continents worked as if we shared one stage.",
        name: "James Palmer",
        role: "Production Manager",
    },
];

#[function_component(ShowcaseSection)]
pub fn showcase_section() -> Html {
    let section = use_node_ref();
    let visible = use_visible(section.clone(), 0.1, 0);

    html! {
        <section
            id="showcase"
            ref={section}
            class={classes!("showcase", visible.then_some("entered"))}
        >
            <div class="section-heading fade-up">
                <h2>{"Filmmaker Showcase"}</h2>
                <p>{"How CineForge is changing productions around the world."}</p>
            </div>

            <div class="showcase-grid">
                { for TESTIMONIALS.iter().enumerate().map(|(index, item)| html! {
                    <div
                        class="showcase-card fade-up"
                        style={format!("transition-delay: {}ms;", index * 100)}
                    >
                        <div class="showcase-thumb" />
                        <h4>{ format!("\u{201c}{}\u{201d}", item.title) }</h4>
                        <p class="showcase-quote">{ item.quote }</p>
                        <div class="showcase-byline">
                            <span class="showcase-name">{ item.name }</span>
                            <span class="showcase-role">{ item.role }</span>
                        </div>
                    </div>
                })}
            </div>

            <div class="section-cta fade-up">
                <a href="#contact" class="button primary">{"Join the Filmmaker Community"}</a>
            </div>
        </section>
    }
}
