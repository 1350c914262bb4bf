use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MouseEvent};
use yew::prelude::*;

use crate::carousel::{use_carousel, InputMode};
use crate::hooks::use_visible;

struct Tool {
    category: &'static str,
    title: &'static str,
    description: &'static str,
    long_description: &'static str,
    icon: &'static str,
    highlights: [&'static str; 4],
}

const TAB_ROW_SPLIT: usize = 8;

const TOOLS: [Tool; 15] = [
    Tool {
        category: "Pre-Production",
        title: "Script Development",
        description: "Rework arcs and plot points and see the effect on your structure at once.",
        long_description: "Reads the screenplay for weak character development, plot holes, and \
            pacing issues, and lets you test alternative scenarios against the narrative flow \
            before the table read.",
        icon: "icon-script",
        highlights: [
            "Character arc suggestions",
            "Plot hole detection",
            "Dialogue enhancement",
            "Pacing optimization",
        ],
    },
    Tool {
        category: "Pre-Production",
        title: "Storyboarding",
        description: "Generate detailed boards straight from the script in selectable styles.",
        long_description: "Turns script pages into visual boards in seconds. Pick an artistic \
            style or match your own aesthetic, then iterate on camera angles and composition \
            frame by frame.",
        icon: "icon-board",
        highlights: [
            "Script-to-board automation",
            "Multiple artistic styles",
            "Framing suggestions",
            "Direct frame edits",
        ],
    },
    Tool {
        category: "Pre-Production",
        title: "Location Scouting",
        description: "Walk candidate locations remotely in 3D before booking travel.",
        long_description: "Explore potential filming locations from anywhere, simulate their \
            light through the day, and preview modifications that would bring a real place in \
            line with the vision.",
        icon: "icon-map",
        highlights: [
            "Global location database",
            "Virtual tours",
            "Lighting simulation",
            "Permit insights",
        ],
    },
    Tool {
        category: "Pre-Production",
        title: "Concept Art",
        description: "Produce concept frames of the director's vision in minutes.",
        long_description: "Describe the shot and iterate through variations until the style is \
            right, with consistency maintained across scenes and an asset library to keep \
            references organized.",
        icon: "icon-sparkle",
        highlights: [
            "Text-to-image generation",
            "Cross-scene consistency",
            "Rapid iteration",
            "Reference management",
        ],
    },
    Tool {
        category: "Pre-Production",
        title: "Costume Design",
        description: "Audition hundreds of wardrobe variations per character and scene.",
        long_description: "Dress characters before production decisions are made, with period \
            accuracy, personality, and scene context taken into account alongside the budget.",
        icon: "icon-shirt",
        highlights: [
            "Character-specific looks",
            "Period accuracy",
            "Fabric visualization",
            "Budget-conscious options",
        ],
    },
    Tool {
        category: "Production",
        title: "Camera Lensing",
        description: "Pick lenses and picture profiles and preview the finished look.",
        long_description: "Swap lenses, filters, and profiles to see how each choice lands on \
            depth of field, distortion, and overall texture before the camera truck arrives.",
        icon: "icon-camera",
        highlights: [
            "Virtual lens simulation",
            "Profile previews",
            "Custom LUT application",
            "Sensor comparison",
        ],
    },
    Tool {
        category: "Production",
        title: "Blocking Visualization",
        description: "Plan actor movement and camera positions for complex scenes.",
        long_description: "Choreograph scenes in 3D, position actors and cameras, and run the \
            blocking to confirm coverage and emotional impact before anyone steps on set.",
        icon: "icon-users",
        highlights: [
            "3D scene blocking",
            "Camera move planning",
            "Positioning optimization",
            "Coverage verification",
        ],
    },
    Tool {
        category: "Production",
        title: "Set Design",
        description: "Modify real locations or build entire virtual sets from scratch.",
        long_description: "Transform an existing location or raise a complete virtual set, then \
            adjust lighting, furniture, color, and architecture until the environment serves the \
            story.",
        icon: "icon-grid",
        highlights: [
            "Location modification",
            "Virtual set creation",
            "Prop placement",
            "Set extension preview",
        ],
    },
    Tool {
        category: "Production",
        title: "Lighting Simulation",
        description: "Preview lighting setups before committing gear and crew time.",
        long_description: "Test natural, artificial, and mixed setups virtually, from time of \
            day through technique presets, down to the power the rig will actually draw.",
        icon: "icon-bulb",
        highlights: [
            "Time-of-day simulation",
            "Technique presets",
            "Equipment selection",
            "Power calculations",
        ],
    },
    Tool {
        category: "Production",
        title: "Motion Capture",
        description: "One-shot video mocap for performance testing and previz.",
        long_description: "Capture performance from a single camera feed without suits or \
            volumes, and retarget the movement onto digital characters for previsualization.",
        icon: "icon-clapper",
        highlights: [
            "Single-camera capture",
            "Real-time performance",
            "Animation retargeting",
            "Motion library building",
        ],
    },
    Tool {
        category: "Post-Production",
        title: "Relighting",
        description: "Relight footage after the shoot to fix problems or shift the mood.",
        long_description: "Change intensity, color, direction, and quality of light in \
            post without a reshoot, including adding or removing practical sources entirely.",
        icon: "icon-wand",
        highlights: [
            "Full scene relighting",
            "Source addition and removal",
            "Time-of-day transformation",
            "Continuity correction",
        ],
    },
    Tool {
        category: "Post-Production",
        title: "Sound Reformer",
        description: "Repair and enhance production audio to a finished mix.",
        long_description: "Strip background noise, lift dialogue clarity, and build immersive \
            beds, with synthesis available for elements that were never recorded.",
        icon: "icon-volume",
        highlights: [
            "Noise reduction",
            "Dialogue enhancement",
            "Automated mixing",
            "Foley generation",
        ],
    },
    Tool {
        category: "Post-Production",
        title: "Dialogue Change",
        description: "Rewrite lines in post with lip sync and voice match preserved.",
        long_description: "Change what an actor says after the shoot; lip movement is adjusted \
            to the new line while the original performance quality is preserved.",
        icon: "icon-film",
        highlights: [
            "Voice cloning",
            "Lip sync adjustment",
            "Script revision in post",
            "Performance preservation",
        ],
    },
    Tool {
        category: "Post-Production",
        title: "Dubbing & Localization",
        description: "Dub international releases with matched lips and performance.",
        long_description: "Localize for any market with dubbing that tracks lip movement and \
            keeps the performance nuance of the original take across languages.",
        icon: "icon-globe",
        highlights: [
            "Multi-language support",
            "Cultural adaptation",
            "Performance matching",
            "Subtitle generation",
        ],
    },
    Tool {
        category: "Post-Production",
        title: "Physics Engine",
        description: "Produce physics-based VFX elements without simulation expertise.",
        long_description: "Generate believable fire, water, destruction, and particle work \
            while the engine handles the physics and you direct the result.",
        icon: "icon-flip",
        highlights: [
            "Elemental effects",
            "Destruction simulation",
            "Particle generation",
            "Low-resource rendering",
        ],
    },
];

#[function_component(ToolsSection)]
pub fn tools_section() -> Html {
    let section = use_node_ref();
    let visible = use_visible(section.clone(), 0.1, 0);
    let carousel = use_carousel(TOOLS.len(), InputMode::ScrollMapped);
    let active = carousel.index();

    // The section is laid out at one viewport height per tool; page scroll
    // position inside it decides which tool is showing. The subscription is
    // scoped to this component: attached on mount, removed on unmount.
    {
        let carousel = carousel.clone();
        let section = section.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().expect("no window");

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let Some(element) = section.cast::<HtmlElement>() else {
                        return;
                    };
                    let scroll_top = web_sys::window()
                        .and_then(|w| w.scroll_y().ok())
                        .unwrap_or(0.0);
                    let offset = scroll_top - element.offset_top() as f64;
                    carousel.scroll_sync(offset, element.offset_height() as f64);
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

    let select_tab = |index: usize| {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.select(index))
    };

    let on_previous = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| {
            let len = carousel.item_count();
            carousel.select((carousel.index() + len - 1) % len);
        })
    };

    let on_next = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| {
            carousel.select((carousel.index() + 1) % carousel.item_count());
        })
    };

    let tab = |index: usize, tool: &Tool| {
        html! {
            <button
                class={classes!("tool-tab", (index == active).then_some("active"))}
                onclick={select_tab(index)}
            >
                <span class={classes!("tool-tab-icon", tool.icon)} />
                <span class="tool-tab-category">{ tool.category }</span>
                <span class="tool-tab-title">{ tool.title }</span>
            </button>
        }
    };

    let current = &TOOLS[active];

    html! {
        <section
            id="tools"
            ref={section}
            class={classes!("tools", visible.then_some("entered"))}
            style={format!("height: {}vh;", TOOLS.len() * 100)}
        >
            <div class="sticky-viewport">
                <div class="section-heading fade-up">
                    <h2>{"A Tool for Every Stage"}</h2>
                    <p>{"AI-powered tools for every step of your filmmaking journey."}</p>
                </div>

                <div class="tool-tabbar fade-up">
                    <div class="tool-tab-row">
                        { for TOOLS.iter().take(TAB_ROW_SPLIT).enumerate()
                            .map(|(index, tool)| tab(index, tool)) }
                    </div>
                    <div class="tool-tab-row">
                        { for TOOLS.iter().enumerate().skip(TAB_ROW_SPLIT)
                            .map(|(index, tool)| tab(index, tool)) }
                    </div>
                </div>

                <div class="tool-panel fade-up" key={active}>
                    <div class="tool-panel-header">
                        <span class={classes!("tool-icon", current.icon)} />
                        <div>
                            <h3>{ current.title }</h3>
                            <p class="tool-category">{ current.category }</p>
                        </div>
                    </div>
                    <p class="tool-description">{ current.long_description }</p>
                    <h4>{"Key Capabilities"}</h4>
                    <ul class="check-list two-column">
                        { for current.highlights.iter().map(|highlight| html! {
                            <li><span class="check-mark" />{ highlight }</li>
                        })}
                    </ul>
                    <div class="tool-panel-footer">
                        <p>{ format!("Tool {} of {}", active + 1, TOOLS.len()) }</p>
                        <div class="tool-arrows">
                            <button onclick={on_previous} aria-label="Previous tool">{"←"}</button>
                            <button onclick={on_next} aria-label="Next tool">{"→"}</button>
                        </div>
                    </div>
                </div>

                <p class="scroll-hint">{"Scroll to explore more tools"}</p>
            </div>
        </section>
    }
}
