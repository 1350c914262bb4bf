use yew::prelude::*;

use crate::hooks::use_visible;

const BENEFITS: [&str; 4] = [
    "Cut pre-production time by up to 70%",
    "Fifty look iterations in a single afternoon",
    "Every department working from the same previz",
    "Tighter budgets through precise planning",
];

#[function_component(DemoSection)]
pub fn demo_section() -> Html {
    let section = use_node_ref();
    let visible = use_visible(section.clone(), 0.1, 0);

    html! {
        <section id="demo" ref={section} class={classes!("demo", visible.then_some("entered"))}>
            <div class="demo-columns">
                <div class="demo-media fade-up">
                    <div class="video-frame">
                        <div class="play-badge" />
                    </div>
                </div>
                <div class="demo-copy fade-up delayed">
                    <h2>{"See Cine"}<span class="accent">{"Forge"}</span>{" in Action"}</h2>
                    <p>
                        {"Watch the full suite carry a project from first treatment to final cut, \
                          letting directors land their vision faster and with more precision than \
                          a traditional pipeline allows."}
                    </p>
                    <ul class="check-list">
                        { for BENEFITS.iter().map(|benefit| html! {
                            <li><span class="check-mark" />{ benefit }</li>
                        })}
                    </ul>
                    <a href="#workflow" class="button primary">{"Explore Workflow"}</a>
                </div>
            </div>
        </section>
    }
}
