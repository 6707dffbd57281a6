use yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use gloo_timers::callback::Timeout;
use log::{error, info};

use crate::api;
use crate::components::quote_form::{QuoteFields, QuoteForm};
use crate::components::ui::{CheckList, Container};
use crate::content::{QUOTE_INTRO, QUOTE_PERKS};
use crate::sections::SectionId;

const SENT_NOTICE_MS: u32 = 6_000;

#[derive(Clone, Debug, PartialEq)]
pub enum SubmissionStatus {
    Idle,
    Sending,
    Sent,
    Failed(String),
}

impl SubmissionStatus {
    fn notice(&self) -> Option<(&'static str, String)> {
        match self {
            SubmissionStatus::Idle => None,
            SubmissionStatus::Sending => Some(("notice", "Sending your request...".to_string())),
            SubmissionStatus::Sent => Some((
                "notice notice-success",
                "Thanks! We'll follow up with pricing and availability.".to_string(),
            )),
            SubmissionStatus::Failed(msg) => Some(("notice notice-error", msg.clone())),
        }
    }
}

/// Which submission is the latest one, plus the timer that will clear its
/// "sent" notice. Dropping a `Timeout` cancels it.
#[derive(Default)]
struct SubmissionTracker {
    generation: u32,
    notice_timer: Option<Timeout>,
}

impl SubmissionTracker {
    fn begin(&mut self) -> u32 {
        self.notice_timer = None;
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }

    fn is_current(&self, generation: u32) -> bool {
        self.generation == generation
    }

    fn hold_notice_timer(&mut self, timer: Timeout) {
        self.notice_timer = Some(timer);
    }
}

#[function_component(Quote)]
pub fn quote() -> Html {
    let status = use_state(|| SubmissionStatus::Idle);
    // Bumped after a successful send so the form remounts with empty fields.
    let form_generation = use_state(|| 0u32);
    let tracker = use_mut_ref(SubmissionTracker::default);

    let on_submit = {
        let status = status.clone();
        let form_generation = form_generation.clone();
        let tracker = tracker.clone();
        Callback::from(move |fields: QuoteFields| {
            let status = status.clone();
            let form_generation = form_generation.clone();
            let tracker = tracker.clone();
            let generation = tracker.borrow_mut().begin();
            status.set(SubmissionStatus::Sending);
            spawn_local(async move {
                let result = api::submit_quote(fields).await;
                if !tracker.borrow().is_current(generation) {
                    info!("Dropping result of superseded quote request");
                    return;
                }
                match result {
                    Ok(()) => {
                        info!("Quote request sent");
                        status.set(SubmissionStatus::Sent);
                        form_generation.set(*form_generation + 1);
                        let timer = {
                            let status = status.clone();
                            let tracker = tracker.clone();
                            Timeout::new(SENT_NOTICE_MS, move || {
                                if tracker.borrow().is_current(generation) {
                                    status.set(SubmissionStatus::Idle);
                                }
                            })
                        };
                        tracker.borrow_mut().hold_notice_timer(timer);
                    }
                    Err(e) => {
                        error!("Quote request failed: {}", e);
                        status.set(SubmissionStatus::Failed(e.to_string()));
                    }
                }
            });
        })
    };

    html! {
        <section id={SectionId::Quote.as_str()} class="page-section">
            <Container>
                <div class="grid grid-2">
                    <div>
                        <div class="section-heading">
                            <h2>{"Get a tailored quote"}</h2>
                            <p>{QUOTE_INTRO}</p>
                        </div>
                        <CheckList items={QUOTE_PERKS} />
                    </div>
                    <div class="card">
                        <h3 class="card-title">{"Request a Quote"}</h3>
                        {
                            if let Some((class, text)) = status.notice() {
                                html! { <div class={class} role="status">{text}</div> }
                            } else {
                                html! {}
                            }
                        }
                        <QuoteForm
                            key={*form_generation}
                            on_submit={on_submit}
                            disabled={*status == SubmissionStatus::Sending}
                        />
                    </div>
                </div>
            </Container>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use yew::ServerRenderer;

    #[test]
    fn idle_shows_no_notice() {
        assert_eq!(SubmissionStatus::Idle.notice(), None);
    }

    #[test]
    fn failure_notice_carries_the_error_text() {
        let status = SubmissionStatus::Failed("Please fill in your work email.".to_string());
        let (class, text) = status.notice().unwrap();
        assert!(class.contains("notice-error"));
        assert_eq!(text, "Please fill in your work email.");
    }

    #[test]
    fn a_new_submission_retires_the_previous_one() {
        let mut tracker = SubmissionTracker::default();
        let first = tracker.begin();
        assert!(tracker.is_current(first));

        let second = tracker.begin();
        assert!(!tracker.is_current(first));
        assert!(tracker.is_current(second));
        assert!(tracker.notice_timer.is_none());
    }

    #[tokio::test]
    async fn renders_every_quote_field_empty() {
        let rendered = ServerRenderer::<Quote>::new().render().await;
        for field in crate::components::quote_form::QuoteField::ALL {
            assert!(rendered.contains(&format!(r#"name="{}""#, field.name())), "missing {}", field.name());
        }
        assert!(rendered.contains(r#"id="quote""#));
        assert!(!rendered.contains("notice"));
    }
}
