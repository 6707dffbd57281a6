use std::collections::BTreeMap;
use std::rc::Rc;

use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlTextAreaElement, SubmitEvent};

/// Field name to value mapping handed to whoever handles a submitted quote.
pub type QuoteFields = BTreeMap<&'static str, String>;

pub const NDA_FIELD: &str = "nda";

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum QuoteField {
    FirstName,
    LastName,
    Company,
    Email,
    City,
    EstimatedKw,
    Notes,
}

impl QuoteField {
    pub const ALL: [QuoteField; 7] = [
        QuoteField::FirstName,
        QuoteField::LastName,
        QuoteField::Company,
        QuoteField::Email,
        QuoteField::City,
        QuoteField::EstimatedKw,
        QuoteField::Notes,
    ];

    pub fn name(self) -> &'static str {
        match self {
            QuoteField::FirstName => "first_name",
            QuoteField::LastName => "last_name",
            QuoteField::Company => "company",
            QuoteField::Email => "email",
            QuoteField::City => "city",
            QuoteField::EstimatedKw => "estimated_kw",
            QuoteField::Notes => "notes",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            QuoteField::FirstName => "First name",
            QuoteField::LastName => "Last name",
            QuoteField::Company => "Company",
            QuoteField::Email => "Work email",
            QuoteField::City => "City / Market",
            QuoteField::EstimatedKw => "Estimated kW",
            QuoteField::Notes => "Tell us about racks, power, carriers, and timeline.",
        }
    }

    fn input_type(self) -> &'static str {
        match self {
            QuoteField::Email => "email",
            _ => "text",
        }
    }
}

/// What the visitor has typed so far. Values are kept exactly as entered.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QuoteDraft {
    values: BTreeMap<QuoteField, String>,
    nda_requested: bool,
}

impl QuoteDraft {
    pub fn value(&self, field: QuoteField) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, field: QuoteField, value: String) {
        self.values.insert(field, value);
    }

    pub fn nda_requested(&self) -> bool {
        self.nda_requested
    }

    pub fn set_nda_requested(&mut self, requested: bool) {
        self.nda_requested = requested;
    }

    /// Every field is present in the result, empty ones included.
    pub fn to_fields(&self) -> QuoteFields {
        let mut fields: QuoteFields = QuoteField::ALL
            .iter()
            .map(|f| (f.name(), self.value(*f).to_string()))
            .collect();
        fields.insert(NDA_FIELD, self.nda_requested.to_string());
        fields
    }
}

pub enum DraftAction {
    SetField(QuoteField, String),
    SetNda(bool),
}

// Each event is applied to the latest draft rather than to the snapshot
// the callback was rendered with, so events landing in the same tick
// (browser autofill) all survive.
impl Reducible for QuoteDraft {
    type Action = DraftAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            DraftAction::SetField(field, value) => next.set(field, value),
            DraftAction::SetNda(requested) => next.set_nda_requested(requested),
        }
        Rc::new(next)
    }
}

#[derive(Properties, PartialEq)]
pub struct QuoteFormProps {
    pub on_submit: Callback<QuoteFields>,
    #[prop_or(false)]
    pub disabled: bool,
}

#[function_component(QuoteForm)]
pub fn quote_form(props: &QuoteFormProps) -> Html {
    let draft = use_reducer(QuoteDraft::default);

    let text_input = |field: QuoteField| {
        let oninput = {
            let draft = draft.clone();
            Callback::from(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                draft.dispatch(DraftAction::SetField(field, input.value()));
            })
        };
        html! {
            <input
                type={field.input_type()}
                name={field.name()}
                class="form-input"
                placeholder={field.placeholder()}
                value={draft.value(field).to_string()}
                oninput={oninput}
            />
        }
    };

    let on_notes = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            draft.dispatch(DraftAction::SetField(QuoteField::Notes, input.value()));
        })
    };

    let on_nda = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            draft.dispatch(DraftAction::SetNda(input.checked()));
        })
    };

    let onsubmit = {
        let draft = draft.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(draft.to_fields());
        })
    };

    html! {
        <form class="quote-form" onsubmit={onsubmit}>
            <div class="form-row">
                { text_input(QuoteField::FirstName) }
                { text_input(QuoteField::LastName) }
            </div>
            { text_input(QuoteField::Company) }
            { text_input(QuoteField::Email) }
            <div class="form-row">
                { text_input(QuoteField::City) }
                { text_input(QuoteField::EstimatedKw) }
            </div>
            <textarea
                name={QuoteField::Notes.name()}
                class="form-input"
                rows="4"
                placeholder={QuoteField::Notes.placeholder()}
                value={draft.value(QuoteField::Notes).to_string()}
                oninput={on_notes}
            />
            <div class="form-check">
                <input id="nda" type="checkbox" checked={draft.nda_requested()} onchange={on_nda} />
                <label for="nda">{"Request NDA"}</label>
            </div>
            <button type="submit" class="button button-primary button-block" disabled={props.disabled}>
                {"Submit"}
            </button>
        </form>
    }
}
