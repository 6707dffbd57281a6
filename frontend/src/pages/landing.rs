use yew::prelude::*;
use chrono::Datelike;

use crate::components::ui::{Badge, Container, IconGlyph};
use crate::content::{
    Icon, COMPANY_NAME, CONTACT_LINES, FOOTER_LEGAL_LINKS, FOOTER_TAGLINE, HERO_BADGE,
    HERO_HIGHLIGHTS, HERO_SUBTITLE, HERO_TITLE, HERO_TITLE_ACCENT, LOCATIONS, RACK_BUILD,
};
use crate::pages::faq::Faq;
use crate::pages::offerings::{Solutions, Specs, Trust};
use crate::pages::quote::Quote;
use crate::sections::SectionId;

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <section id={SectionId::Home.as_str()} class="hero">
            <div class="hero-glow"></div>
            <Container>
                <div class="grid grid-2 hero-grid">
                    <div class="hero-copy">
                        <Badge text={HERO_BADGE} />
                        <h1>
                            {HERO_TITLE}{" "}
                            <span class="accent">{HERO_TITLE_ACCENT}</span>
                        </h1>
                        <p class="hero-subtitle">{HERO_SUBTITLE}</p>
                        <div class="hero-cta-group">
                            <a href={SectionId::Quote.href()} class="button button-primary button-lg">
                                {"Get a custom quote"}
                            </a>
                            <a href={SectionId::Solutions.href()} class="button button-outline button-lg">
                                {"Explore solutions"}
                            </a>
                        </div>
                        <div class="hero-highlights">
                            { for HERO_HIGHLIGHTS.iter().map(|h| html! {
                                <div key={h.text} class="highlight">
                                    <IconGlyph icon={h.icon} />{" "}{h.text}
                                </div>
                            }) }
                        </div>
                    </div>
                    <div class="card rack-card">
                        <h3 class="card-title muted">
                            <IconGlyph icon={Icon::Server} />{" Typical Rack Build (Example)"}
                        </h3>
                        <div class="grid grid-2">
                            { for RACK_BUILD.iter().map(|kv| html! {
                                <div key={kv.key} class="kv-tile">
                                    <div class="kv-key">{kv.key}</div>
                                    <div class="kv-value">{kv.value}</div>
                                </div>
                            }) }
                        </div>
                    </div>
                </div>
            </Container>
        </section>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <Container>
                <div class="grid grid-3">
                    <div>
                        <div class="brand">
                            <div class="brand-mark"></div>
                            <span>{COMPANY_NAME}</span>
                        </div>
                        <p class="muted">{FOOTER_TAGLINE}</p>
                        <div class="footer-links">
                            { for FOOTER_LEGAL_LINKS.iter().map(|l| html! { <a key={*l} href="#">{*l}</a> }) }
                        </div>
                    </div>
                    <div id={SectionId::Contact.as_str()}>
                        <h4>{"Contact"}</h4>
                        { for CONTACT_LINES.iter().map(|c| html! {
                            <div key={c.text} class="contact-line">
                                <IconGlyph icon={c.icon} />{" "}{c.text}
                            </div>
                        }) }
                    </div>
                    <div>
                        <h4>{"Locations"}</h4>
                        <div class="grid grid-2 muted">
                            { for LOCATIONS.iter().map(|l| html! { <span key={*l}>{*l}</span> }) }
                        </div>
                    </div>
                </div>
                <div class="copyright">
                    {format!("© {} {}. All rights reserved.", year, COMPANY_NAME)}
                </div>
            </Container>
        </footer>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    html! {
        <main class="landing-page">
            <Hero />
            <Solutions />
            <Specs />
            <Trust />
            <Quote />
            <Faq />
            <Footer />

            <style>
                {r#"
                .landing-page {
                    min-height: 100vh;
                    background: #1a1a1a;
                    color: #ffffff;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                }

                .container {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 2rem;
                }

                .page-section, .faq-section {
                    border-top: 1px solid rgba(30, 144, 255, 0.1);
                    padding: 5rem 0;
                    scroll-margin-top: 74px;
                }

                .section-heading {
                    margin-bottom: 2rem;
                }

                .section-heading.split {
                    display: flex;
                    justify-content: space-between;
                    align-items: flex-end;
                    gap: 1rem;
                }

                .section-heading h2 {
                    font-size: 2.5rem;
                    margin: 0 0 0.5rem;
                    background: linear-gradient(45deg, #fff, #7EB2FF);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                .section-heading p, .muted {
                    color: #999;
                    max-width: 640px;
                }

                .grid {
                    display: grid;
                    gap: 1.5rem;
                }

                .grid-2 {
                    grid-template-columns: repeat(2, minmax(0, 1fr));
                }

                .grid-3 {
                    grid-template-columns: repeat(3, minmax(0, 1fr));
                }

                .card {
                    background: rgba(26, 26, 26, 0.85);
                    border: 1px solid rgba(30, 144, 255, 0.1);
                    border-radius: 16px;
                    padding: 1.5rem;
                    transition: border-color 0.3s ease;
                }

                .card:hover {
                    border-color: rgba(30, 144, 255, 0.3);
                }

                .card-header {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    margin-bottom: 0.75rem;
                }

                .card-title {
                    font-size: 1.1rem;
                    margin: 0;
                }

                .card-content {
                    color: #999;
                    line-height: 1.6;
                }

                .icon-tile {
                    border: 1px solid rgba(30, 144, 255, 0.2);
                    border-radius: 12px;
                    background: rgba(30, 144, 255, 0.1);
                    padding: 0.5rem;
                }

                .badge {
                    display: inline-block;
                    border-radius: 999px;
                    padding: 0.25rem 0.75rem;
                    font-size: 0.8rem;
                    background: #1E90FF;
                    color: #fff;
                }

                .badge-secondary {
                    background: rgba(30, 144, 255, 0.15);
                    color: #7EB2FF;
                }

                .badge-row {
                    display: flex;
                    gap: 0.5rem;
                }

                .button {
                    display: inline-block;
                    padding: 0.6rem 1.2rem;
                    border-radius: 10px;
                    font-weight: 500;
                    text-decoration: none;
                    cursor: pointer;
                    border: none;
                    transition: all 0.3s ease;
                }

                .button-primary {
                    background: #1E90FF;
                    color: #fff;
                }

                .button-primary:hover {
                    background: #1873CC;
                }

                .button-primary:disabled {
                    opacity: 0.6;
                    cursor: wait;
                }

                .button-outline {
                    border: 1px solid rgba(255, 255, 255, 0.3);
                    color: #fff;
                }

                .button-ghost {
                    color: #ccc;
                }

                .button-lg {
                    padding: 0.9rem 1.6rem;
                    font-size: 1.05rem;
                }

                .button-block {
                    width: 100%;
                }

                .hero {
                    position: relative;
                    overflow: hidden;
                    padding: 8rem 0 5rem;
                }

                .hero-glow {
                    position: absolute;
                    top: -10rem;
                    left: 50%;
                    width: 900px;
                    height: 600px;
                    transform: translateX(-50%);
                    border-radius: 50%;
                    background: radial-gradient(rgba(30, 144, 255, 0.25), transparent 70%);
                    pointer-events: none;
                }

                .hero-grid {
                    align-items: center;
                }

                .hero h1 {
                    font-size: 3.2rem;
                    line-height: 1.15;
                    margin: 1.5rem 0;
                }

                .hero h1 .accent {
                    background: linear-gradient(45deg, #1E90FF, #7EB2FF);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                .hero-subtitle {
                    color: #999;
                    font-size: 1.15rem;
                    line-height: 1.6;
                }

                .hero-cta-group, .hero-highlights {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1rem;
                    margin-top: 1.5rem;
                }

                .hero-highlights {
                    color: #999;
                    font-size: 0.9rem;
                }

                .kv-tile, .tag-tile {
                    border: 1px solid rgba(30, 144, 255, 0.1);
                    border-radius: 12px;
                    padding: 1rem;
                }

                .kv-key {
                    font-size: 0.75rem;
                    text-transform: uppercase;
                    color: #999;
                }

                .kv-value {
                    margin-top: 0.25rem;
                    font-weight: 500;
                }

                .check-list {
                    list-style: none;
                    padding: 0;
                    margin: 1rem 0 0;
                }

                .check-list li {
                    display: flex;
                    gap: 0.5rem;
                    padding: 0.3rem 0;
                    color: #ccc;
                }

                .check-list .icon {
                    color: #1E90FF;
                }

                .stat-card {
                    border: 1px solid rgba(30, 144, 255, 0.1);
                    border-radius: 16px;
                    padding: 1.5rem;
                    text-align: center;
                }

                .stat-value {
                    font-size: 2rem;
                    font-weight: 600;
                }

                .stat-label, .footnote {
                    color: #999;
                    font-size: 0.85rem;
                }

                .quote-form {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    margin-top: 1rem;
                }

                .form-row {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1rem;
                }

                .form-input {
                    width: 100%;
                    box-sizing: border-box;
                    padding: 0.7rem 0.9rem;
                    border-radius: 10px;
                    border: 1px solid rgba(255, 255, 255, 0.15);
                    background: rgba(0, 0, 0, 0.3);
                    color: #fff;
                    font-size: 0.95rem;
                }

                .form-input:focus {
                    outline: none;
                    border-color: #1E90FF;
                }

                .form-check {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    color: #999;
                    font-size: 0.9rem;
                }

                .notice {
                    margin-top: 1rem;
                    padding: 0.75rem 1rem;
                    border-radius: 10px;
                    background: rgba(30, 144, 255, 0.1);
                    color: #7EB2FF;
                }

                .notice-success {
                    background: rgba(0, 200, 83, 0.1);
                    color: #69F0AE;
                }

                .notice-error {
                    background: rgba(255, 82, 82, 0.1);
                    color: #FF8A80;
                }

                .site-footer {
                    border-top: 1px solid rgba(30, 144, 255, 0.1);
                    padding: 3rem 0;
                    scroll-margin-top: 74px;
                }

                .brand {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    font-weight: 600;
                    color: #fff;
                    text-decoration: none;
                }

                .brand-mark {
                    width: 24px;
                    height: 24px;
                    border-radius: 8px;
                    background: linear-gradient(135deg, #1E90FF, #7EB2FF);
                }

                .footer-links {
                    display: flex;
                    gap: 1rem;
                }

                .footer-links a {
                    color: #999;
                    text-decoration: none;
                }

                .contact-line {
                    color: #999;
                    padding: 0.25rem 0;
                }

                .copyright {
                    margin-top: 2rem;
                    text-align: center;
                    font-size: 0.8rem;
                    color: #777;
                }

                @media (max-width: 768px) {
                    .grid-2, .grid-3, .form-row {
                        grid-template-columns: 1fr;
                    }

                    .section-heading.split {
                        flex-direction: column;
                        align-items: flex-start;
                    }

                    .hero h1 {
                        font-size: 2.3rem;
                    }

                    .section-heading h2 {
                        font-size: 2rem;
                    }

                    .container {
                        padding: 0 1rem;
                    }
                }
                "#}
            </style>
        </main>
    }
}
