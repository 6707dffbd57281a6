use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod api;
mod config;
mod content;
mod sections;
mod components {
    pub mod disclosure;
    pub mod quote_form;
    pub mod ui;
}
mod pages {
    pub mod faq;
    pub mod landing;
    pub mod offerings;
    pub mod quote;
}
#[cfg(all(test, target_arch = "wasm32"))]
mod test_dom;

use content::COMPANY_NAME;
use pages::landing::Landing;
use sections::{SectionId, GET_A_QUOTE, NAV_LINKS, TALK_TO_SALES};

const SCROLLED_THRESHOLD_PX: f64 = 64.0;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering landing page");
            html! { <Landing /> }
        },
        Route::NotFound => {
            info!("Unknown path, redirecting to landing page");
            html! { <Redirect<Route> to={Route::Home} /> }
        },
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();
            let listener = window.as_ref().map(|window| {
                let window_clone = window.clone();
                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_y = window_clone.scroll_y().unwrap_or(0.0);
                    is_scrolled.set(scroll_y > SCROLLED_THRESHOLD_PX);
                }) as Box<dyn FnMut()>);
                let _ = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                scroll_callback
            });

            move || {
                if let (Some(window), Some(scroll_callback)) = (window, listener) {
                    let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    // Anchor links still navigate; this only folds the mobile menu away.
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <a href={SectionId::Home.href()} class="brand">
                    <div class="brand-mark"></div>
                    <span>{COMPANY_NAME}</span>
                </a>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Menu" aria-expanded={if *menu_open { "true" } else { "false" }}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for NAV_LINKS.iter().map(|link| html! {
                        <a key={link.label} href={link.target.href()} class="nav-link" onclick={close_menu.clone()}>
                            {link.label}
                        </a>
                    }) }
                    <a href={TALK_TO_SALES.target.href()} class="button button-ghost" onclick={close_menu.clone()}>
                        {TALK_TO_SALES.label}
                    </a>
                    <a href={GET_A_QUOTE.target.href()} class="button button-primary" onclick={close_menu.clone()}>
                        {GET_A_QUOTE.label}
                    </a>
                </div>
            </div>

            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    height: 64px;
                    background: rgba(26, 26, 26, 0.6);
                    backdrop-filter: blur(10px);
                    border-bottom: 1px solid transparent;
                    transition: all 0.3s ease;
                }

                .top-nav.scrolled {
                    background: rgba(26, 26, 26, 0.95);
                    border-bottom-color: rgba(30, 144, 255, 0.1);
                }

                .nav-content {
                    max-width: 1200px;
                    height: 100%;
                    margin: 0 auto;
                    padding: 0 2rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }

                .nav-right {
                    display: flex;
                    align-items: center;
                    gap: 1.5rem;
                }

                .nav-link {
                    color: #999;
                    text-decoration: none;
                    font-size: 0.9rem;
                }

                .nav-link:hover {
                    color: #fff;
                }

                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 4px;
                    background: none;
                    border: none;
                    cursor: pointer;
                }

                .burger-menu span {
                    width: 22px;
                    height: 2px;
                    background: #fff;
                }

                @media (max-width: 768px) {
                    .burger-menu {
                        display: flex;
                    }

                    .nav-right {
                        display: none;
                        position: absolute;
                        top: 64px;
                        left: 0;
                        right: 0;
                        flex-direction: column;
                        padding: 1.5rem;
                        background: rgba(26, 26, 26, 0.98);
                    }

                    .nav-right.mobile-menu-open {
                        display: flex;
                    }
                }
                "#}
            </style>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;
    use yew::ServerRenderer;

    #[function_component]
    fn WholePage() -> Html {
        html! {
            <>
                <Nav />
                <Landing />
            </>
        }
    }

    /// Values of every `attr="..."` occurrence in rendered markup.
    fn attribute_values<'a>(markup: &'a str, attr: &str) -> Vec<&'a str> {
        let needle = format!(" {}=\"", attr);
        markup
            .match_indices(&needle)
            .filter_map(|(start, _)| {
                let rest = &markup[start + needle.len()..];
                rest.find('"').map(|end| &rest[..end])
            })
            .collect()
    }

    #[tokio::test]
    async fn every_in_page_link_lands_on_a_section() {
        let rendered = ServerRenderer::<WholePage>::new().render().await;

        let ids: HashSet<&str> = attribute_values(&rendered, "id").into_iter().collect();
        let targets: Vec<&str> = attribute_values(&rendered, "href")
            .into_iter()
            .filter_map(|href| href.strip_prefix('#'))
            .filter(|target| !target.is_empty())
            .collect();

        assert!(!targets.is_empty());
        for target in targets {
            assert!(ids.contains(target), "#{} has no matching section", target);
        }
    }

    #[tokio::test]
    async fn every_section_id_is_rendered_once() {
        let rendered = ServerRenderer::<WholePage>::new().render().await;
        let ids = attribute_values(&rendered, "id");
        for section in SectionId::ALL {
            let count = ids.iter().filter(|id| **id == section.as_str()).count();
            assert_eq!(count, 1, "section {}", section.as_str());
        }
    }

    #[tokio::test]
    async fn nav_lists_every_link_collapsed() {
        let rendered = ServerRenderer::<Nav>::new().render().await;
        for link in NAV_LINKS.iter().chain([TALK_TO_SALES, GET_A_QUOTE].iter()) {
            assert!(rendered.contains(link.label));
            assert!(rendered.contains(&format!("href=\"{}\"", link.target.href())));
        }
        assert!(rendered.contains(r#"class="nav-right""#));
        assert!(!rendered.contains("nav-right mobile-menu-open"));
    }

    #[test]
    fn attribute_values_reads_quoted_values() {
        let markup = r##"<a href="#faq" id="x"></a><div id="faq"></div>"##;
        assert_eq!(attribute_values(markup, "id"), vec!["x", "faq"]);
        assert_eq!(attribute_values(markup, "href"), vec!["#faq"]);
    }
}
