use yew::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::contact::ContactOrigin;
use crate::content::{self, Language, ServiceOverview, BRAND_SLOTS, PRODUCTS};
use crate::favorites::{FavoriteSet, FavoriteStore, LocalFavoriteStore};
use crate::state::{NavAction, NavContext, Page};

#[derive(Properties, PartialEq)]
struct ProductsProps {
    language: Language,
}

/// Product strip with heart toggles persisted in localStorage.
#[function_component(Products)]
fn products(props: &ProductsProps) -> Html {
    let favorites = use_state(|| LocalFavoriteStore::default().load());
    let copy = content::copy(props.language);

    let toggle = |id: &'static str| {
        let favorites = favorites.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next: FavoriteSet = (*favorites).clone();
            LocalFavoriteStore::default().toggle(&mut next, id);
            favorites.set(next);
        })
    };

    html! {
        <section class="products-section">
            <div class="container">
                <div class="section-header">
                    <h2>{copy.products_title}</h2>
                    <p class="muted">{copy.products_subtitle}</p>
                </div>
                <div class="products-grid">
                    { for PRODUCTS.iter().map(|product| {
                        let liked = favorites.contains(product.id);
                        html! {
                            <div class="product-card" key={product.id}>
                                <img src={product.image} alt={product.name} loading="lazy" />
                                <div class="product-info">
                                    <div>
                                        <h3>{product.name}</h3>
                                        <p class="muted">{product.brand}</p>
                                    </div>
                                    <button
                                        class={classes!("favorite-button", liked.then(|| "liked"))}
                                        onclick={toggle(product.id)}
                                        aria-pressed={liked.to_string()}
                                        title={if liked { copy.favorite_remove } else { copy.favorite_add }}
                                    >
                                        { if liked { "♥" } else { "♡" } }
                                    </button>
                                </div>
                            </div>
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}

fn service_card(service: &ServiceOverview) -> Html {
    html! {
        <div class="card service-card">
            <div class="card-header">
                <div class="icon-circle large">{service.icon}</div>
                <h3>{service.title}</h3>
                <p class="card-description">{service.tagline}</p>
            </div>
            <div class="card-content">
                { for service.body.iter().map(|p| html! { <p class="muted">{*p}</p> }) }
                if !service.highlights.is_empty() {
                    <div class="highlights">
                        { for service.highlights.iter().map(|h| html! {
                            <div class="highlight">
                                <span class="badge">{h.title}</span>
                                <p class="muted small">{h.description}</p>
                            </div>
                        }) }
                    </div>
                }
                if let Some((quote, sub)) = service.quote {
                    <div class="callout">
                        <p class="callout-title">{quote}</p>
                        <p class="muted small">{sub}</p>
                    </div>
                }
            </div>
        </div>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let nav = use_context::<NavContext>();
    let Some(nav) = nav else {
        return html! {};
    };
    let copy = content::copy(nav.language);

    let explore = {
        let nav = nav.clone();
        Callback::from(move |_: MouseEvent| nav.dispatch(NavAction::Navigate(Page::Services)))
    };
    let get_started = {
        let nav = nav.clone();
        Callback::from(move |_: MouseEvent| {
            nav.dispatch(NavAction::ScrollToSection("contact".to_string()))
        })
    };

    html! {
        <main class="home">
            <section id="home" class="hero">
                <div class="container center fade-in">
                    <h1>
                        {copy.hero_title_lead}{" "}
                        <span class="gradient-text">{copy.hero_title_highlight}</span>
                    </h1>
                    <p class="hero-subtitle">{copy.hero_subtitle}</p>
                    <div class="hero-actions">
                        <button class="primary-button large" onclick={explore}>
                            {copy.hero_explore}<span class="button-icon">{"→"}</span>
                        </button>
                        <button class="outline-button large" onclick={get_started}>
                            {copy.hero_get_started}
                        </button>
                    </div>
                </div>
            </section>

            <section class="brands-section muted-bg">
                <div class="container">
                    <div class="section-header">
                        <h2>{copy.brands_title}</h2>
                        <p class="muted">{copy.brands_subtitle}</p>
                    </div>
                    <div class="brands-grid">
                        { for (1..=BRAND_SLOTS).map(|i| html! {
                            <div class="brand-slot" key={i}>
                                <span>{format!("{} {}", copy.brand_placeholder, i)}</span>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <Products language={nav.language} />

            <section class="what-we-do">
                <div class="container">
                    <div class="section-header">
                        <h2>{copy.what_we_do_title}</h2>
                        <p class="muted">{copy.what_we_do_subtitle}</p>
                    </div>
                    <div class="cards-3">
                        { for copy.what_we_do.iter().map(|card| html! {
                            <div class="card center slide-up">
                                <div class="icon-circle">{card.icon}</div>
                                <h3>{card.title}</h3>
                                <p class="muted">{card.description}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section id="about" class="about muted-bg">
                <div class="container narrow">
                    <h2 class="center">{copy.about_title}</h2>
                    { for copy.about_paragraphs.iter().map(|p| html! { <p class="muted">{*p}</p> }) }
                    <blockquote class="gradient-text">{copy.about_quote}</blockquote>
                    <p class="muted">{copy.about_closing}</p>
                </div>
            </section>

            <section id="services" class="services-overview">
                <div class="container">
                    <div class="section-header">
                        <h2>{copy.services_title}</h2>
                        <p class="muted">{copy.services_subtitle}</p>
                    </div>
                    <div class="stack">
                        { for copy.services.iter().map(service_card) }
                    </div>
                </div>
            </section>

            <section id="contact" class="contact muted-bg">
                <div class="container narrow">
                    <div class="section-header">
                        <h2>{copy.contact_title}</h2>
                        <p class="muted">{copy.contact_subtitle}</p>
                    </div>
                    <div class="card">
                        <ContactForm origin={ContactOrigin::Section} />
                    </div>
                </div>
            </section>
        </main>
    }
}
