use chrono::Datelike;
use yew::prelude::*;

use crate::components::contact_form::mailto_link;
use crate::components::nav::BrandMark;
use crate::content;
use crate::state::{NavAction, NavContext, Page};

#[function_component(Footer)]
pub fn footer() -> Html {
    let nav = use_context::<NavContext>();
    let Some(nav) = nav else {
        return html! {};
    };
    let copy = content::copy(nav.language);
    let year = chrono::Local::now().year();

    let link = |page: Page| {
        let nav = nav.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            nav.dispatch(NavAction::Navigate(page));
        })
    };

    html! {
        <footer class="site-footer">
            <div class="footer-content">
                <BrandMark language={nav.language} />
                <p class="footer-tagline">{copy.footer_tagline}</p>
                <div class="footer-social">
                    <a href="https://instagram.com" target="_blank" rel="noopener noreferrer" aria-label="Instagram">{"📸"}</a>
                    <a href="https://facebook.com" target="_blank" rel="noopener noreferrer" aria-label="Facebook">{"👍"}</a>
                    <a href={mailto_link("Hello Social Riser")} aria-label="Email">{"✉"}</a>
                </div>
                <hr />
                <div class="legal-links">
                    <a href="/terms" onclick={link(Page::Terms)}>{copy.terms_link}</a>
                    {" | "}
                    <a href="/privacy" onclick={link(Page::Privacy)}>{copy.privacy_link}</a>
                </div>
                <p class="footer-rights">{format!("© {} {}", year, copy.footer_rights)}</p>
            </div>
        </footer>
    }
}
