use yew::prelude::*;

use crate::components::disclosure::DisclosureItem;
use crate::components::ui::Container;
use crate::content::{FAQ_ENTRIES, FAQ_INTRO};
use crate::sections::SectionId;

#[function_component(Faq)]
pub fn faq() -> Html {
    html! {
        <section id={SectionId::Faq.as_str()} class="faq-section">
            <Container>
                <div class="section-heading">
                    <h2>{"FAQ"}</h2>
                    <p>{FAQ_INTRO}</p>
                </div>
                <div class="faq-list">
                    { for FAQ_ENTRIES.iter().map(|entry| html! {
                        <DisclosureItem key={entry.id} id={Some(entry.id.to_string())} label={entry.question}>
                            <p>{entry.answer}</p>
                        </DisclosureItem>
                    }) }
                </div>
            </Container>

            <style>
                {r#"
                .faq-list {
                    border: 1px solid rgba(30, 144, 255, 0.1);
                    border-radius: 16px;
                    padding: 0.5rem;
                }

                .disclosure-item {
                    border-bottom: 1px solid rgba(30, 144, 255, 0.1);
                    transition: all 0.3s ease;
                }

                .disclosure-item:last-child {
                    border-bottom: none;
                }

                .disclosure-trigger {
                    width: 100%;
                    padding: 1.25rem;
                    background: none;
                    border: none;
                    color: #fff;
                    font-size: 1.1rem;
                    text-align: left;
                    cursor: pointer;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }

                .disclosure-trigger:hover {
                    color: #7EB2FF;
                }

                .toggle-icon {
                    font-size: 1.5rem;
                    color: #7EB2FF;
                    transition: transform 0.3s ease;
                }

                .disclosure-item.open .toggle-icon {
                    transform: rotate(180deg);
                }

                .disclosure-body {
                    padding: 0 1.25rem 1.25rem;
                }

                .disclosure-body p {
                    color: #999;
                    line-height: 1.6;
                    margin: 0;
                }

                @media (max-width: 768px) {
                    .disclosure-trigger {
                        font-size: 1rem;
                        padding: 1rem;
                    }

                    .disclosure-body {
                        padding: 0 1rem 1rem;
                    }
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::disclosure::Disclosure;
    use pretty_assertions::assert_eq;
    use yew::ServerRenderer;

    #[tokio::test]
    async fn answers_render_hidden_by_default() {
        let rendered = ServerRenderer::<Faq>::new().render().await;

        for entry in FAQ_ENTRIES.iter() {
            assert!(rendered.contains(entry.question));
            assert!(rendered.contains(entry.answer));
        }
        assert_eq!(rendered.matches(r#"aria-expanded="false""#).count(), FAQ_ENTRIES.len());
        assert_eq!(rendered.matches(r#"aria-expanded="true""#).count(), 0);
        assert!(!rendered.contains("disclosure-item open"));
    }

    // One disclosure per entry, the same way the rendered list gives each
    // DisclosureItem its own state.
    fn fresh_items() -> Vec<Disclosure> {
        FAQ_ENTRIES.iter().map(|_| Disclosure::new()).collect()
    }

    #[test]
    fn toggling_one_entry_state_leaves_the_others_closed() {
        let mut items = fresh_items();
        items[1].toggle();

        let open: Vec<bool> = items.iter().map(Disclosure::is_expanded).collect();
        assert_eq!(open, vec![false, true, false]);
    }

    #[test]
    fn toggling_an_entry_state_twice_closes_it() {
        let mut items = fresh_items();
        items[0].toggle();
        items[0].toggle();
        assert!(items.iter().all(|d| !d.is_expanded()));
    }

    #[test]
    fn several_entry_states_may_be_open() {
        let mut items = fresh_items();
        items[0].toggle();
        items[2].toggle();
        let open: Vec<bool> = items.iter().map(Disclosure::is_expanded).collect();
        assert_eq!(open, vec![true, false, true]);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use crate::test_dom::{mount_root, settle};
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::{Element, Event, HtmlElement};

    wasm_bindgen_test_configure!(run_in_browser);

    fn expanded_flags(root: &Element) -> Vec<bool> {
        FAQ_ENTRIES
            .iter()
            .map(|entry| {
                let body = root.query_selector(&format!("#{}-answer", entry.id)).unwrap().unwrap();
                !body.has_attribute("hidden")
            })
            .collect()
    }

    fn trigger(root: &Element, id: &str) -> HtmlElement {
        root.query_selector(&format!("#{} .disclosure-trigger", id))
            .unwrap()
            .unwrap()
            .dyn_into::<HtmlElement>()
            .unwrap()
    }

    #[wasm_bindgen_test]
    async fn clicking_one_question_opens_only_that_answer() {
        let root = mount_root();
        yew::Renderer::<Faq>::with_root(root.clone()).render();
        settle().await;
        assert_eq!(expanded_flags(&root), vec![false, false, false]);

        trigger(&root, FAQ_ENTRIES[1].id).click();
        settle().await;
        assert_eq!(expanded_flags(&root), vec![false, true, false]);

        trigger(&root, FAQ_ENTRIES[1].id).click();
        settle().await;
        assert_eq!(expanded_flags(&root), vec![false, false, false]);
    }

    #[wasm_bindgen_test]
    async fn changing_the_hash_opens_the_named_answer() {
        let root = mount_root();
        yew::Renderer::<Faq>::with_root(root.clone()).render();
        settle().await;

        let window = web_sys::window().unwrap();
        window.location().set_hash(FAQ_ENTRIES[2].id).unwrap();
        window.dispatch_event(&Event::new("hashchange").unwrap()).unwrap();
        settle().await;
        assert_eq!(expanded_flags(&root), vec![false, false, true]);

        window.location().set_hash("").unwrap();
    }
}
