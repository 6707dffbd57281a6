use yew::prelude::*;
use web_sys::MouseEvent;
use yew::{Children, Properties};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Open/closed state of a single disclosure. Every `DisclosureItem` owns
/// its own copy; nothing coordinates between items, so any number of them
/// can be open at once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Disclosure {
    expanded: bool,
}

impl Disclosure {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn opened() -> Self {
        Self { expanded: true }
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    pub fn open(&mut self) {
        self.expanded = true;
    }
}

/// True when a `location.hash` value (`"#densities"`) names this item.
pub fn hash_targets(hash: &str, id: &str) -> bool {
    !id.is_empty() && hash.strip_prefix('#') == Some(id)
}

fn current_hash_targets(id: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .map_or(false, |hash| hash_targets(&hash, id))
}

#[derive(Properties, PartialEq)]
pub struct DisclosureItemProps {
    pub label: String,
    /// Anchor for the item. The item opens whenever the page hash points
    /// at it, on mount and on later `hashchange`s.
    #[prop_or_default]
    pub id: Option<String>,
    #[prop_or_default]
    pub initially_open: bool,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(DisclosureItem)]
pub fn disclosure_item(props: &DisclosureItemProps) -> Html {
    let initially_open = props.initially_open;
    let state = use_state(move || if initially_open { Disclosure::opened() } else { Disclosure::new() });

    {
        let state = state.clone();
        use_effect_with_deps(
            move |id: &Option<String>| {
                let listener = id.clone().and_then(|id| {
                    if current_hash_targets(&id) {
                        state.set(Disclosure::opened());
                    }

                    let window = web_sys::window()?;
                    let on_hash_change = Closure::wrap(Box::new(move || {
                        if current_hash_targets(&id) {
                            state.set(Disclosure::opened());
                        }
                    }) as Box<dyn FnMut()>);
                    window
                        .add_event_listener_with_callback("hashchange", on_hash_change.as_ref().unchecked_ref())
                        .ok()?;
                    Some((window, on_hash_change))
                });

                move || {
                    if let Some((window, on_hash_change)) = listener {
                        let _ = window.remove_event_listener_with_callback("hashchange", on_hash_change.as_ref().unchecked_ref());
                    }
                }
            },
            props.id.clone(),
        );
    }

    let toggle = {
        let state = state.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let mut next = *state;
            next.toggle();
            state.set(next);
        })
    };

    let expanded = state.is_expanded();
    let body_id = props.id.as_ref().map(|id| format!("{}-answer", id));

    html! {
        <div id={props.id.clone()} class={classes!("disclosure-item", expanded.then(|| "open"))}>
            <button
                class="disclosure-trigger"
                onclick={toggle}
                aria-expanded={if expanded { "true" } else { "false" }}
                aria-controls={body_id.clone()}
            >
                <span class="disclosure-label">{&props.label}</span>
                <span class="toggle-icon">{if expanded { "−" } else { "+" }}</span>
            </button>
            <div id={body_id} class="disclosure-body" hidden={!expanded}>
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::ServerRenderer;

    #[test]
    fn starts_hidden() {
        assert!(!Disclosure::new().is_expanded());
        assert!(!Disclosure::default().is_expanded());
    }

    #[test]
    fn state_follows_toggle_parity() {
        for n in 0..7 {
            let mut d = Disclosure::new();
            for _ in 0..n {
                d.toggle();
            }
            assert_eq!(d.is_expanded(), n % 2 == 1, "after {} toggles", n);
        }
    }

    #[test]
    fn instances_are_independent() {
        let mut a = Disclosure::new();
        let mut b = Disclosure::new();
        a.toggle();
        assert!(a.is_expanded());
        assert!(!b.is_expanded());

        b.toggle();
        a.toggle();
        assert!(!a.is_expanded());
        assert!(b.is_expanded());
    }

    #[test]
    fn open_is_idempotent() {
        let mut d = Disclosure::new();
        d.open();
        d.open();
        assert!(d.is_expanded());
        d.toggle();
        assert!(!d.is_expanded());
    }

    #[test]
    fn hash_must_name_the_item_exactly() {
        assert!(hash_targets("#densities", "densities"));
        assert!(!hash_targets("densities", "densities"));
        assert!(!hash_targets("#densities-answer", "densities"));
        assert!(!hash_targets("#", ""));
        assert!(!hash_targets("", "densities"));
    }

    #[function_component]
    fn ClosedItem() -> Html {
        html! {
            <DisclosureItem label="Power?" id={Some("power".to_string())}>
                <p>{"Dual feeds."}</p>
            </DisclosureItem>
        }
    }

    #[function_component]
    fn OpenItem() -> Html {
        html! {
            <DisclosureItem label="Power?" id={Some("power".to_string())} initially_open=true>
                <p>{"Dual feeds."}</p>
            </DisclosureItem>
        }
    }

    #[tokio::test]
    async fn collapsed_item_hides_its_body() {
        let rendered = ServerRenderer::<ClosedItem>::new().render().await;
        assert!(rendered.contains(r#"aria-expanded="false""#));
        assert!(rendered.contains(r#"aria-controls="power-answer""#));
        assert!(rendered.contains(" hidden"));
        assert!(!rendered.contains("disclosure-item open"));
        assert!(rendered.contains("Dual feeds."));
    }

    #[tokio::test]
    async fn expanded_item_shows_its_body() {
        let rendered = ServerRenderer::<OpenItem>::new().render().await;
        assert!(rendered.contains(r#"aria-expanded="true""#));
        assert!(!rendered.contains(" hidden"));
        assert!(rendered.contains("disclosure-item open"));
        assert!(rendered.contains("Dual feeds."));
    }
}
