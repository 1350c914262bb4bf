use yew::prelude::*;

use crate::sections::contact::ContactSection;
use crate::sections::demo::DemoSection;
use crate::sections::features::FeaturesSection;
use crate::sections::hero::HeroSection;
use crate::sections::showcase::ShowcaseSection;
use crate::sections::tools::ToolsSection;
use crate::sections::workflow::WorkflowSection;

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="landing-page">
            <HeroSection />
            <FeaturesSection />
            <DemoSection />
            <ToolsSection />
            <WorkflowSection />
            <ShowcaseSection />
            <ContactSection />
        </div>
    }
}
