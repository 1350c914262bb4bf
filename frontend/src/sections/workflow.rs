use yew::prelude::*;

use crate::hooks::use_visible;

struct WorkflowStep {
    title: &'static str,
    description: &'static str,
    features: [&'static str; 3],
}

const STEPS: [WorkflowStep; 4] = [
    WorkflowStep {
        title: "Conceptualization",
        description: "Turn written ideas into visual concepts. Build mood boards, explore \
            visual styles, and develop character designs before pre-production begins.",
        features: [
            "Script to visual concepts",
            "Character look development",
            "Visual style exploration",
        ],
    },
    WorkflowStep {
        title: "Pre-Production",
        description: "Streamline planning with generated storyboards, virtual location scouts, \
            and a shot breakdown everyone can align on before the first setup.",
        features: [
            "Automated storyboarding",
            "Virtual location scouting",
            "Detailed shot planning",
        ],
    },
    WorkflowStep {
        title: "Production",
        description: "Sharpen on-set decisions with real-time previz, camera and lighting \
            simulation, and performance capture that heads off costly reshoots.",
        features: [
            "Real-time VFX preview",
            "Camera and lighting simulation",
            "One-shot performance testing",
        ],
    },
    WorkflowStep {
        title: "Post-Production",
        description: "Finish the picture with relighting, dialogue repair, and physics-based \
            effects layered onto the footage you already have.",
        features: [
            "Scene relighting",
            "Audio enhancement",
            "Physics-based VFX",
        ],
    },
];

#[function_component(WorkflowSection)]
pub fn workflow_section() -> Html {
    let section = use_node_ref();
    let visible = use_visible(section.clone(), 0.1, 0);

    html! {
        <section
            id="workflow"
            ref={section}
            class={classes!("workflow", visible.then_some("entered"))}
        >
            <div class="section-heading fade-up">
                <h2>{"Seamless Workflow"}</h2>
                <p>{"How CineForge fits into every stage of your production pipeline."}</p>
            </div>

            <div class="workflow-timeline">
                { for STEPS.iter().enumerate().map(|(index, step)| {
                    let aligned = if index % 2 == 0 { "left" } else { "right" };
                    html! {
                        <div
                            class={classes!("workflow-step", aligned, "fade-up")}
                            style={format!("transition-delay: {}ms;", index * 200)}
                        >
                            <div class="workflow-card">
                                <h3>{ step.title }</h3>
                                <p>{ step.description }</p>
                                <ul class="check-list">
                                    { for step.features.iter().map(|feature| html! {
                                        <li><span class="check-mark" />{ feature }</li>
                                    })}
                                </ul>
                            </div>
                            <div class="workflow-marker">{ index + 1 }</div>
                        </div>
                    }
                })}
            </div>
        </section>
    }
}
