use web_sys::{KeyboardEvent, TouchEvent, WheelEvent};
use yew::prelude::*;

use crate::carousel::{use_carousel, Direction, InputMode};
use crate::hooks::use_visible;

struct Feature {
    icon: &'static str,
    title: &'static str,
    tagline: &'static str,
    long_description: &'static str,
    accent: &'static str,
    highlights: [&'static str; 4],
}

const FEATURES: [Feature; 6] = [
    Feature {
        icon: "icon-script",
        title: "Script Development",
        tagline: "Rework character arcs or plot points and watch the ripple through your story.",
        long_description: "The script tool reads your screenplay for plot holes, inconsistent \
            characters, and pacing dead spots, then proposes alternative developments that hit \
            the emotional beats you are aiming for. Dialogue and motivation feedback arrives as \
            you type.",
        accent: "accent-blue",
        highlights: [
            "Live plot analysis and suggestions",
            "Character consistency tracking",
            "Dialogue authenticity scoring",
            "Emotional arc visualization",
        ],
    },
    Feature {
        icon: "icon-palette",
        title: "Concept Art",
        tagline: "Generate concept art in minutes, then tweak until every detail matches the vision.",
        long_description: "Turn a text description or rough sketch into finished concept frames. \
            Adjust style, lighting, perspective, and mood in place, and branch several variations \
            at once to find the direction worth committing to.",
        accent: "accent-purple",
        highlights: [
            "Text-to-image generation",
            "Style transfer and adaptation",
            "Parallel variation exploration",
            "Iterative refinement in place",
        ],
    },
    Feature {
        icon: "icon-film",
        title: "Look Development",
        tagline: "Audition film stocks, aspect ratios, and color profiles before a single frame is shot.",
        long_description: "Preview your film's aesthetic ahead of the shoot. Swap film stocks, \
            grades, and lighting approaches against reference stills, and compare candidate looks \
            side by side before locking anything in.",
        accent: "accent-amber",
        highlights: [
            "Film stock simulation",
            "Color grading experiments",
            "Lighting scenario testing",
            "Reference-based style matching",
        ],
    },
    Feature {
        icon: "icon-user",
        title: "Character Design",
        tagline: "Try endless looks for characters and map actors' faces onto the roles.",
        long_description: "Experiment with features, builds, wardrobe, and expression, and \
            preview how a given actor would read in the role by mapping their face onto the \
            concept. Consistency checks keep the look stable across scenes and lighting setups.",
        accent: "accent-emerald",
        highlights: [
            "Actor face mapping",
            "Costume visualization",
            "Expression library building",
            "Cross-scene consistency checks",
        ],
    },
    Feature {
        icon: "icon-map",
        title: "Location Scouting",
        tagline: "Scout locations remotely in 3D, from any angle, before visiting in person.",
        long_description: "Fly through thousands of captured real-world locations or block out a \
            custom environment from scratch. Inspect every angle at any time of day and in any \
            weather, and plan camera positions before anyone books a flight.",
        accent: "accent-cyan",
        highlights: [
            "Virtual location walkthroughs",
            "Time-of-day simulation",
            "Weather visualization",
            "Camera setup planning",
        ],
    },
    Feature {
        icon: "icon-camera",
        title: "Camera Lensing",
        tagline: "Test looks from ARRI to BMPCC before the rental house opens.",
        long_description: "Simulate the character of popular camera systems and glass. Run focal \
            lengths, apertures, and picture profiles against your own previz frames, and compare \
            options side by side to settle technical decisions with confidence.",
        accent: "accent-red",
        highlights: [
            "Camera system comparison",
            "Lens characteristic simulation",
            "Depth of field preview",
            "Side-by-side shot comparison",
        ],
    },
];

/// Inline style for one card in the stack: cards fan out left and right of
/// the active one, shrinking and fading with distance; past two cards away
/// they are hidden and removed from hit testing.
fn card_style(index: usize, active: usize, total: usize) -> String {
    let distance = index.abs_diff(active);
    let z_index = total.saturating_sub(distance);

    if distance == 0 {
        return format!(
            "transform: translateX(0%) scale(1); opacity: 1; z-index: {z_index}; \
             pointer-events: auto;"
        );
    }

    let side = if index < active { -1.0 } else { 1.0 };
    let x = side * (15.0 + (distance as f64 - 1.0) * 5.0);
    let scale = 1.0 - 0.07 * distance as f64;
    let (opacity, pointer_events) = if distance > 2 {
        (0.0, "none")
    } else {
        (1.0 - 0.2 * distance as f64, "auto")
    };

    format!(
        "transform: translateX({x:.0}%) scale({scale:.2}); opacity: {opacity:.1}; \
         z-index: {z_index}; pointer-events: {pointer_events};"
    )
}

#[function_component(FeaturesSection)]
pub fn features_section() -> Html {
    let section = use_node_ref();
    let visible = use_visible(section.clone(), 0.1, 0);
    let carousel = use_carousel(FEATURES.len(), InputMode::Stepped);
    let active = carousel.index();

    let on_wheel = {
        let carousel = carousel.clone();
        Callback::from(move |e: WheelEvent| {
            e.prevent_default();
            let direction = if e.delta_y() > 0.0 {
                Direction::Next
            } else {
                Direction::Previous
            };
            carousel.step(direction);
        })
    };

    let on_key_down = {
        let carousel = carousel.clone();
        Callback::from(move |e: KeyboardEvent| match e.key().as_str() {
            "ArrowRight" | "ArrowDown" => {
                e.prevent_default();
                carousel.step(Direction::Next);
            }
            "ArrowLeft" | "ArrowUp" => {
                e.prevent_default();
                carousel.step(Direction::Previous);
            }
            _ => {}
        })
    };

    let on_touch_start = {
        let carousel = carousel.clone();
        Callback::from(move |e: TouchEvent| {
            if let Some(touch) = e.touches().get(0) {
                carousel.on_touch_start(touch.client_x() as f64);
            }
        })
    };

    let on_touch_end = {
        let carousel = carousel.clone();
        Callback::from(move |e: TouchEvent| {
            if let Some(touch) = e.changed_touches().get(0) {
                carousel.on_touch_end(touch.client_x() as f64);
            }
        })
    };

    html! {
        <section
            id="features"
            ref={section}
            class={classes!("features", visible.then_some("entered"))}
        >
            <div class="section-heading fade-up">
                <h2>{"Revolutionize Your Production"}</h2>
                <p>{"Comprehensive AI tools to enhance every stage of your filmmaking process."}</p>
            </div>

            <div
                class="card-stack"
                tabindex="0"
                role="group"
                aria-label="Feature carousel"
                onwheel={on_wheel}
                onkeydown={on_key_down}
                ontouchstart={on_touch_start}
                ontouchend={on_touch_end}
            >
                { for FEATURES.iter().enumerate().map(|(index, feature)| {
                    let onclick = {
                        let carousel = carousel.clone();
                        Callback::from(move |_: web_sys::MouseEvent| {
                            if index != active {
                                carousel.select(index);
                            }
                        })
                    };
                    html! {
                        <article
                            class={classes!("feature-card", feature.accent)}
                            style={card_style(index, active, FEATURES.len())}
                            {onclick}
                            aria-label={format!("View {} feature details", feature.title)}
                        >
                            <div class="feature-card-body">
                                <span class={classes!("feature-icon", feature.icon)} />
                                <h3>{ feature.title }</h3>
                                <p class="feature-tagline">{ feature.tagline }</p>
                                if index == active {
                                    <p class="feature-detail">{ feature.long_description }</p>
                                    <ul class="check-list">
                                        { for feature.highlights.iter().map(|highlight| html! {
                                            <li><span class="check-mark" />{ highlight }</li>
                                        })}
                                    </ul>
                                }
                            </div>
                        </article>
                    }
                })}
            </div>

            <div class="dot-row" role="tablist" aria-label="Select feature">
                { for FEATURES.iter().enumerate().map(|(index, feature)| {
                    let onclick = {
                        let carousel = carousel.clone();
                        Callback::from(move |_: web_sys::MouseEvent| carousel.select(index))
                    };
                    html! {
                        <button
                            class={classes!("dot", (index == active).then_some("active"))}
                            aria-label={format!("View {}", feature.title)}
                            {onclick}
                        />
                    }
                })}
            </div>

            <div class="section-cta fade-up">
                <a href="#tools" class="button outline">{"View Advanced Tools"}</a>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_card_sits_centered_on_top() {
        let style = card_style(2, 2, 6);
        assert!(style.contains("translateX(0%)"));
        assert!(style.contains("z-index: 6"));
        assert!(style.contains("pointer-events: auto"));
    }

    #[test]
    fn cards_fan_out_to_either_side() {
        assert!(card_style(1, 2, 6).contains("translateX(-15%)"));
        assert!(card_style(3, 2, 6).contains("translateX(15%)"));
        assert!(card_style(4, 2, 6).contains("translateX(20%)"));
    }

    #[test]
    fn distant_cards_are_hidden_and_unclickable() {
        let style = card_style(5, 1, 6);
        assert!(style.contains("opacity: 0.0"));
        assert!(style.contains("pointer-events: none"));
    }
}
