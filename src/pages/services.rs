use yew::prelude::*;

use crate::content::{self, ServicesTabCopy};
use crate::state::{NavAction, NavContext, ServicesTab};

#[derive(Properties, PartialEq)]
pub struct ImageCarouselProps {
    pub images: &'static [&'static str],
}

/// The image list is rendered twice so the CSS scroll animation can loop without a jump.
#[function_component(ImageCarousel)]
pub fn image_carousel(props: &ImageCarouselProps) -> Html {
    html! {
        <div class="carousel">
            <div class="carousel-track">
                { for props.images.iter().chain(props.images.iter()).enumerate().map(|(index, image)| html! {
                    <div class="carousel-item" key={index}>
                        <img src={*image} alt={format!("Service {}", index + 1)} loading="lazy" />
                    </div>
                }) }
            </div>
        </div>
    }
}

fn tab_body(tab: &ServicesTabCopy, on_cta: Callback<MouseEvent>) -> Html {
    let copy_block = html! {
        <div class="tab-copy">
            <div class="tab-heading">
                <div class="icon-circle">{tab.icon}</div>
                <h2>{tab.heading}</h2>
            </div>
            <p class="lead muted">{tab.lead}</p>
            <p class="muted">{tab.body}</p>
            if !tab.points.is_empty() {
                <ul class="points">
                    { for tab.points.iter().map(|point| html! { <li>{*point}</li> }) }
                </ul>
            }
            if let Some((quote, sub)) = tab.quote {
                <div class="callout">
                    <p class="callout-title">{quote}</p>
                    <p class="muted small">{sub}</p>
                </div>
            }
            <button class="primary-button large" onclick={on_cta}>{tab.cta}</button>
        </div>
    };
    let carousel = html! { <ImageCarousel images={tab.images} /> };

    html! {
        <div class="tab-grid slide-left">
            if tab.images_first {
                {carousel}
                {copy_block}
            } else {
                {copy_block}
                {carousel}
            }
        </div>
    }
}

#[function_component(Services)]
pub fn services() -> Html {
    let nav = use_context::<NavContext>();
    let Some(nav) = nav else {
        return html! {};
    };
    let copy = content::copy(nav.language);

    let select = |tab: ServicesTab| {
        let nav = nav.clone();
        Callback::from(move |_: MouseEvent| nav.dispatch(NavAction::SelectServicesTab(tab)))
    };
    let open_contact = {
        let nav = nav.clone();
        Callback::from(move |_: MouseEvent| nav.dispatch(NavAction::OpenContactDialog))
    };

    html! {
        <main class="services-page">
            <div class="container">
                <div class="page-title fade-in">
                    <h1>
                        {copy.services_page_title_lead}{" "}
                        <span class="gradient-text">{copy.services_page_title_highlight}</span>
                    </h1>
                    <p class="muted">{copy.services_subtitle}</p>
                </div>

                <div class="tabs" role="tablist">
                    { for copy.services_tabs.iter().map(|tab| html! {
                        <button
                            role="tab"
                            class={classes!("tab-trigger", (tab.tab == nav.services_tab).then(|| "active"))}
                            aria-selected={(tab.tab == nav.services_tab).to_string()}
                            onclick={select(tab.tab)}
                        >
                            <span>{tab.icon}</span>
                            <span>{tab.label}</span>
                        </button>
                    }) }
                </div>

                { tab_body(copy.services_tab(nav.services_tab), open_contact) }
            </div>
        </main>
    }
}
