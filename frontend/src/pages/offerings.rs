use yew::prelude::*;

use crate::components::ui::{Badge, CheckList, Container, FeatureCard, IconGlyph, StatCard};
use crate::content::{
    Icon, CERTIFICATIONS, LATENCY_FOOTNOTE, SOLUTIONS, SOLUTIONS_INTRO, SOLUTION_BADGES,
    SPECS_INTRO, SPEC_GROUPS, STATS, SUPPORTED_DENSITIES, SUSTAINABILITY, SUSTAINABILITY_INTRO,
    TRUST_INTRO,
};
use crate::sections::SectionId;

#[function_component(Solutions)]
pub fn solutions() -> Html {
    html! {
        <section id={SectionId::Solutions.as_str()} class="page-section">
            <Container>
                <div class="section-heading split">
                    <div>
                        <h2>{"Solutions"}</h2>
                        <p>{SOLUTIONS_INTRO}</p>
                    </div>
                    <div class="badge-row">
                        { for SOLUTION_BADGES.iter().map(|b| html! { <Badge key={*b} text={*b} secondary=true /> }) }
                    </div>
                </div>
                <div class="grid grid-3">
                    { for SOLUTIONS.iter().map(|f| html! { <FeatureCard key={f.title} feature={*f} /> }) }
                </div>
            </Container>
        </section>
    }
}

#[function_component(Specs)]
pub fn specs() -> Html {
    html! {
        <section id={SectionId::Specs.as_str()} class="page-section">
            <Container>
                <div class="grid grid-2">
                    <div>
                        <div class="section-heading">
                            <h2>{"Facility Specs"}</h2>
                            <p>{SPECS_INTRO}</p>
                        </div>
                        <div class="grid grid-2">
                            { for SPEC_GROUPS.iter().map(|group| html! {
                                <div key={group.label} class="card">
                                    <div class="card-header">
                                        <IconGlyph icon={group.icon} />
                                        <h3 class="card-title">{group.label}</h3>
                                    </div>
                                    <CheckList items={group.items} />
                                </div>
                            }) }
                        </div>
                    </div>
                    <div>
                        <h3>{"Certifications & Compliance"}</h3>
                        <div class="grid grid-2">
                            { for CERTIFICATIONS.iter().map(|tag| html! {
                                <div key={*tag} class="tag-tile">
                                    <IconGlyph icon={Icon::Shield} />
                                    <span>{*tag}</span>
                                </div>
                            }) }
                        </div>
                        <div class="card">
                            <h4>{"Supported Densities"}</h4>
                            <p class="muted">{SUPPORTED_DENSITIES}</p>
                        </div>
                    </div>
                </div>
            </Container>
        </section>
    }
}

#[function_component(Trust)]
pub fn trust() -> Html {
    html! {
        <section id={SectionId::Trust.as_str()} class="page-section">
            <Container>
                <div class="grid grid-2">
                    <div>
                        <div class="section-heading">
                            <h2>{"Why DataLink"}</h2>
                            <p>{TRUST_INTRO}</p>
                        </div>
                        <div class="grid grid-2">
                            { for STATS.iter().map(|s| html! { <StatCard key={s.label} stat={*s} /> }) }
                        </div>
                        <p class="footnote">{LATENCY_FOOTNOTE}</p>
                    </div>
                    <div class="card card-large">
                        <h3>{"Sustainability"}</h3>
                        <p class="muted">{SUSTAINABILITY_INTRO}</p>
                        <CheckList items={SUSTAINABILITY} icon={Icon::Leaf} />
                    </div>
                </div>
            </Container>
        </section>
    }
}
