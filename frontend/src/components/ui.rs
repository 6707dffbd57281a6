use yew::prelude::*;
use yew::{Children, Properties};
use crate::content::{Feature, Icon, Stat};

#[derive(Properties, PartialEq)]
pub struct ContainerProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Container)]
pub fn container(props: &ContainerProps) -> Html {
    html! {
        <div class="container">
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct BadgeProps {
    pub text: &'static str,
    #[prop_or(false)]
    pub secondary: bool,
}

#[function_component(Badge)]
pub fn badge(props: &BadgeProps) -> Html {
    html! {
        <span class={classes!("badge", props.secondary.then(|| "badge-secondary"))}>
            {props.text}
        </span>
    }
}

#[derive(Properties, PartialEq)]
pub struct IconGlyphProps {
    pub icon: Icon,
}

#[function_component(IconGlyph)]
pub fn icon_glyph(props: &IconGlyphProps) -> Html {
    html! {
        <span class="icon" aria-hidden="true">{props.icon.glyph()}</span>
    }
}

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub stat: Stat,
}

#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    html! {
        <div class="stat-card">
            <div class="stat-value">{props.stat.value}</div>
            <div class="stat-label">{props.stat.label}</div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FeatureCardProps {
    pub feature: Feature,
}

#[function_component(FeatureCard)]
pub fn feature_card(props: &FeatureCardProps) -> Html {
    let feature = props.feature;
    html! {
        <div class="card feature-card">
            <div class="card-header">
                <div class="icon-tile"><IconGlyph icon={feature.icon} /></div>
                <h3 class="card-title">{feature.title}</h3>
            </div>
            <p class="card-content">{feature.desc}</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct CheckListProps {
    pub items: &'static [&'static str],
    #[prop_or(Icon::Check)]
    pub icon: Icon,
}

/// Bulleted list where every bullet is the same icon.
#[function_component(CheckList)]
pub fn check_list(props: &CheckListProps) -> Html {
    html! {
        <ul class="check-list">
            { for props.items.iter().map(|item| html! {
                <li key={*item}>
                    <IconGlyph icon={props.icon} />
                    <span>{*item}</span>
                </li>
            }) }
        </ul>
    }
}
