use yew::prelude::*;

use crate::content::{LegalDocument, LegalSection, PRIVACY, TERMS};

fn legal_section(section: &LegalSection) -> Html {
    html! {
        <section class="card slide-up">
            <h2>{section.heading}</h2>
            { for section.paragraphs.iter().map(|p| html! { <p>{*p}</p> }) }
            if !section.bullets.is_empty() {
                <ul>
                    { for section.bullets.iter().map(|b| html! { <li>{*b}</li> }) }
                </ul>
            }
            if let Some((title, lines)) = section.callout {
                <div class="callout">
                    <p class="callout-title">{title}</p>
                    { for lines.iter().map(|l| html! { <p class="muted small">{*l}</p> }) }
                </div>
            }
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct LegalPageProps {
    document: &'static LegalDocument,
}

#[function_component(LegalPage)]
fn legal_page(props: &LegalPageProps) -> Html {
    let document = props.document;
    html! {
        <main class="legal-content">
            <div class="container narrow">
                <div class="page-title fade-in">
                    <h1>
                        {document.title_lead}{" "}
                        <span class="gradient-text">{document.title_highlight}</span>
                    </h1>
                    <p class="muted">{document.last_updated}</p>
                </div>
                { for document.sections.iter().map(legal_section) }
            </div>
        </main>
    }
}

#[function_component(TermsAndConditions)]
pub fn terms_and_conditions() -> Html {
    html! { <LegalPage document={&TERMS} /> }
}

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    html! { <LegalPage document={&PRIVACY} /> }
}
