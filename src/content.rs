//! All user-visible copy of the site, kept out of the components.
//!
//! Every string the pages render comes from a [`SiteCopy`] dictionary picked by
//! [`Language`], so adding a language means adding one more table here.

use crate::state::ServicesTab;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Language {
    #[default]
    En,
    Es,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Es];

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "EN",
            Language::Es => "ES",
        }
    }

    pub fn other(self) -> Language {
        match self {
            Language::En => Language::Es,
            Language::Es => Language::En,
        }
    }
}

pub struct Card {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub struct Highlight {
    pub title: &'static str,
    pub description: &'static str,
}

pub struct ServiceOverview {
    pub icon: &'static str,
    pub title: &'static str,
    pub tagline: &'static str,
    pub body: &'static [&'static str],
    pub highlights: &'static [Highlight],
    pub quote: Option<(&'static str, &'static str)>,
}

pub struct ServicesTabCopy {
    pub tab: ServicesTab,
    pub icon: &'static str,
    pub label: &'static str,
    pub heading: &'static str,
    pub lead: &'static str,
    pub body: &'static str,
    pub points: &'static [&'static str],
    pub quote: Option<(&'static str, &'static str)>,
    pub cta: &'static str,
    pub images: &'static [&'static str],
    /// Carousel goes on the left of the copy instead of the right.
    pub images_first: bool,
}

pub struct Product {
    pub id: &'static str,
    pub name: &'static str,
    pub brand: &'static str,
    pub image: &'static str,
}

pub struct SiteCopy {
    pub brand_name: &'static str,
    pub nav_home: &'static str,
    pub nav_about: &'static str,
    pub nav_services: &'static str,
    pub nav_contact: &'static str,
    pub nav_collaborate: &'static str,
    pub back_home: &'static str,

    pub hero_title_lead: &'static str,
    pub hero_title_highlight: &'static str,
    pub hero_subtitle: &'static str,
    pub hero_explore: &'static str,
    pub hero_get_started: &'static str,

    pub brands_title: &'static str,
    pub brands_subtitle: &'static str,
    pub brand_placeholder: &'static str,

    pub products_title: &'static str,
    pub products_subtitle: &'static str,
    pub favorite_add: &'static str,
    pub favorite_remove: &'static str,

    pub what_we_do_title: &'static str,
    pub what_we_do_subtitle: &'static str,
    pub what_we_do: [Card; 3],

    pub about_title: &'static str,
    pub about_paragraphs: &'static [&'static str],
    pub about_quote: &'static str,
    pub about_closing: &'static str,

    pub services_title: &'static str,
    pub services_subtitle: &'static str,
    pub services: [ServiceOverview; 3],
    pub services_page_title_lead: &'static str,
    pub services_page_title_highlight: &'static str,
    pub services_tabs: [ServicesTabCopy; 3],

    pub contact_title: &'static str,
    pub contact_subtitle: &'static str,
    pub dialog_title_lead: &'static str,
    pub dialog_title_highlight: &'static str,
    pub label_name: &'static str,
    pub label_email: &'static str,
    pub label_instagram: &'static str,
    pub label_facebook: &'static str,
    pub label_message: &'static str,
    pub placeholder_instagram: &'static str,
    pub placeholder_facebook: &'static str,
    pub placeholder_message: &'static str,
    pub send: &'static str,
    pub sending: &'static str,
    pub reach_directly: &'static str,
    pub toast_sent: &'static str,
    pub toast_missing: &'static str,
    pub toast_failed: &'static str,
    pub toast_cancelled: &'static str,

    pub footer_tagline: &'static str,
    pub footer_rights: &'static str,
    pub terms_link: &'static str,
    pub privacy_link: &'static str,
}

impl SiteCopy {
    pub fn services_tab(&self, tab: ServicesTab) -> &ServicesTabCopy {
        match tab {
            ServicesTab::Influencers => &self.services_tabs[0],
            ServicesTab::Talent => &self.services_tabs[1],
            ServicesTab::Brands => &self.services_tabs[2],
        }
    }
}

pub fn copy(language: Language) -> &'static SiteCopy {
    match language {
        Language::En => &EN,
        Language::Es => &ES,
    }
}

pub const BRAND_SLOTS: usize = 6;

const INFLUENCER_IMAGES: &[&str] = &[
    "https://images.unsplash.com/photo-1494790108755-2616b612b786?w=400&h=400&fit=crop&crop=face",
    "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=400&h=400&fit=crop&crop=face",
    "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=400&h=400&fit=crop&crop=face",
    "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=400&h=400&fit=crop&crop=face",
    "https://images.unsplash.com/photo-1544005313-94ddf0286df2?w=400&h=400&fit=crop&crop=face",
];

const TALENT_IMAGES: &[&str] = &[
    "https://images.unsplash.com/photo-1560250097-0b93528c311a?w=400&h=400&fit=crop",
    "https://images.unsplash.com/photo-1542744173-8e7e53415bb0?w=400&h=400&fit=crop",
    "https://images.unsplash.com/photo-1553484771-371a605b060b?w=400&h=400&fit=crop",
    "https://images.unsplash.com/photo-1557804506-669a67965ba0?w=400&h=400&fit=crop",
];

const BRAND_IMAGES: &[&str] = &[
    "https://images.unsplash.com/photo-1559136555-9303baea8ebd?w=400&h=400&fit=crop",
    "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=400&h=400&fit=crop",
    "https://images.unsplash.com/photo-1551434678-e076c223a692?w=400&h=400&fit=crop",
    "https://images.unsplash.com/photo-1486312338219-ce68d2c6f44d?w=400&h=400&fit=crop",
];

pub const PRODUCTS: &[Product] = &[
    Product {
        id: "glow-serum",
        name: "Glow Serum",
        brand: "Luma Skin",
        image: "https://images.unsplash.com/photo-1620916566398-39f1143ab7be?w=400&h=400&fit=crop",
    },
    Product {
        id: "trail-runner",
        name: "Trail Runner",
        brand: "Stride Co.",
        image: "https://images.unsplash.com/photo-1542291026-7eec264c27ff?w=400&h=400&fit=crop",
    },
    Product {
        id: "cold-brew-kit",
        name: "Cold Brew Kit",
        brand: "Bean Theory",
        image: "https://images.unsplash.com/photo-1517701604599-bb29b565090c?w=400&h=400&fit=crop",
    },
    Product {
        id: "studio-headphones",
        name: "Studio Headphones",
        brand: "Wavecraft",
        image: "https://images.unsplash.com/photo-1505740420928-5e560c06d30e?w=400&h=400&fit=crop",
    },
];

pub static EN: SiteCopy = SiteCopy {
    brand_name: "Social Riser",
    nav_home: "Home",
    nav_about: "About",
    nav_services: "Services",
    nav_contact: "Contact",
    nav_collaborate: "Collaborate",
    back_home: "Back to Home",

    hero_title_lead: "Crafting the Future of",
    hero_title_highlight: "Influence",
    hero_subtitle: "Connecting brands with creators to design unforgettable campaigns that inspire, engage, and transform digital influence into real-world impact.",
    hero_explore: "Explore Services",
    hero_get_started: "Get Started",

    brands_title: "Trusted by Leading Brands",
    brands_subtitle: "We collaborate with innovative brands to create authentic connections",
    brand_placeholder: "Brand",

    products_title: "Campaign Favorites",
    products_subtitle: "Products our creators love. Tap the heart to keep track of the ones you like.",
    favorite_add: "Add to favorites",
    favorite_remove: "Remove from favorites",

    what_we_do_title: "What We Do",
    what_we_do_subtitle: "We collaborate with influencers and authentic brands to create meaningful partnerships that drive real results and build lasting relationships.",
    what_we_do: [
        Card {
            icon: "🤝",
            title: "Brand Partnerships",
            description: "Connecting the right creators with brands that align with their values and audience.",
        },
        Card {
            icon: "🎯",
            title: "Strategic Campaigns",
            description: "Data-driven marketing strategies that deliver measurable results and authentic engagement.",
        },
        Card {
            icon: "👑",
            title: "Creator Growth",
            description: "Empowering creators to build sustainable careers through professional management and guidance.",
        },
    ],

    about_title: "About Social Riser",
    about_paragraphs: &[
        "In today's fast-paced digital era, social media has become the heartbeat of marketing, entertainment, and storytelling. Every day, countless influencers and creators are rising with unique ideas, creativity, and passion. Some are striving for name and fame, while others are looking to turn their passion into a sustainable career.",
        "But in this highly competitive space, growth isn't just about creativity. It's about opportunity, strategy, and the right connections. This is where Social Riser comes in.",
        "We are not just another influencer marketing agency; we are a growth ecosystem built to connect talented creators with forward-thinking brands, creating powerful collaborations that drive success for both. Our mission is simple yet impactful:",
    ],
    about_quote: "\"Empowering creators to rise, connect, and thrive while helping brands grow through authentic storytelling.\"",
    about_closing: "At Social Riser, we believe that when the right creator and right brand come together, it's more than just a campaign. It's the beginning of a movement.",

    services_title: "Our Services",
    services_subtitle: "Comprehensive solutions for creators and brands to thrive in the digital landscape",
    services: [
        ServiceOverview {
            icon: "👥",
            title: "For Influencers: Rise Above the Noise",
            tagline: "Your content is your voice, and at Social Riser, we believe your voice deserves to be heard.",
            body: &[
                "Whether you are just starting your journey or already established, we work closely with you to unlock high-value brand collaborations that resonate with your audience and boost your earning potential.",
            ],
            highlights: &[
                Highlight {
                    title: "Long-term Partnerships",
                    description: "Building lasting relationships instead of one-off deals",
                },
                Highlight {
                    title: "Brand Alignment",
                    description: "Connecting you with brands that match your values",
                },
                Highlight {
                    title: "Financial Growth",
                    description: "Increasing earning potential and stability",
                },
            ],
            quote: None,
        },
        ServiceOverview {
            icon: "👑",
            title: "Talent Management: Nurturing the Stars of Tomorrow",
            tagline: "True talent deserves more than just recognition. It deserves direction, opportunity, and growth.",
            body: &[
                "Our Talent Management service is designed to help creators and influencers unlock their full potential, while giving brands access to the right voices to represent their vision authentically.",
                "We work closely with influencers to build their personal brand, refine their content strategy, and connect them with the right opportunities. From negotiation and brand partnerships to audience growth and reputation management, our team provides end-to-end support.",
            ],
            highlights: &[],
            quote: Some((
                "\"We manage the business, so you can focus on creating magic.\"",
                "✨ Join Social Riser today - Your Influence, Our Mission.",
            )),
        },
        ServiceOverview {
            icon: "📣",
            title: "Influencer Marketing for Brands",
            tagline: "Traditional advertising is losing its charm in today's digital-first world.",
            body: &[
                "Consumers now demand authentic connections and real experiences. Social Riser bridges the gap between brands and influencers, ensuring your message reaches the right audience through voices they trust and relate to.",
                "Our data-driven strategies, combined with deep insights into creator ecosystems, allow us to design campaigns that not only increase reach but also deliver tangible business results.",
            ],
            highlights: &[],
            quote: None,
        },
    ],
    services_page_title_lead: "Our",
    services_page_title_highlight: "Services",
    services_tabs: [
        ServicesTabCopy {
            tab: ServicesTab::Influencers,
            icon: "👥",
            label: "Influencers",
            heading: "Rise Above the Noise",
            lead: "Your content is your voice, and at Social Riser, we believe your voice deserves to be heard.",
            body: "Whether you are just starting your journey or already established, we work closely with you to unlock high-value brand collaborations that resonate with your audience and boost your earning potential.",
            points: &[
                "🤝 Long-term partnerships instead of one-off deals",
                "🎯 Connecting you with brands that align with your values",
                "📈 Building sustainable revenue streams",
            ],
            quote: None,
            cta: "Join as Influencer",
            images: INFLUENCER_IMAGES,
            images_first: false,
        },
        ServicesTabCopy {
            tab: ServicesTab::Talent,
            icon: "👑",
            label: "Talent Management",
            heading: "Nurturing Tomorrow's Stars",
            lead: "True talent deserves more than just recognition. It deserves direction, opportunity, and growth.",
            body: "Our Talent Management service is designed to help creators and influencers unlock their full potential, while giving brands access to the right voices to represent their vision authentically.",
            points: &[],
            quote: Some((
                "\"We manage the business, so you can focus on creating magic.\"",
                "✨ Join Social Riser today - Your Influence, Our Mission.",
            )),
            cta: "Start Your Journey",
            images: TALENT_IMAGES,
            images_first: true,
        },
        ServicesTabCopy {
            tab: ServicesTab::Brands,
            icon: "📣",
            label: "Brand Associations",
            heading: "Brand Associations",
            lead: "Traditional advertising is losing its charm in today's digital-first world.",
            body: "Consumers now demand authentic connections and real experiences. Social Riser bridges the gap between brands and influencers, ensuring your message reaches the right audience through voices they trust and relate to.",
            points: &[
                "Data-Driven Strategies",
                "Authentic Storytelling",
                "Measurable Results",
            ],
            quote: None,
            cta: "Partner with Us",
            images: BRAND_IMAGES,
            images_first: false,
        },
    ],

    contact_title: "Get In Touch",
    contact_subtitle: "Ready to elevate your influence or find the perfect creator for your brand? Let's start the conversation.",
    dialog_title_lead: "Let's",
    dialog_title_highlight: "Collaborate",
    label_name: "Name *",
    label_email: "Email *",
    label_instagram: "Instagram Handle",
    label_facebook: "Facebook Profile",
    label_message: "Tell us about your project or goals *",
    placeholder_instagram: "@username",
    placeholder_facebook: "Profile URL or name",
    placeholder_message: "Describe what you're looking for - whether you're a creator seeking opportunities or a brand looking for collaborations...",
    send: "Send Message",
    sending: "Sending...",
    reach_directly: "Or reach us directly at:",
    toast_sent: "Message sent successfully! We'll get back to you soon.",
    toast_missing: "Please fill in the required fields:",
    toast_failed: "We couldn't send your message. Your draft is kept, please try again.",
    toast_cancelled: "Your message was not sent because you left the form before it finished.",

    footer_tagline: "Crafting the Future of Influence",
    footer_rights: "Social Riser. All rights reserved. Empowering creators to rise, connect, and thrive.",
    terms_link: "Terms & Conditions",
    privacy_link: "Privacy Policy",
};

pub static ES: SiteCopy = SiteCopy {
    brand_name: "Social Riser",
    nav_home: "Inicio",
    nav_about: "Nosotros",
    nav_services: "Servicios",
    nav_contact: "Contacto",
    nav_collaborate: "Colaborar",
    back_home: "Volver al inicio",

    hero_title_lead: "Creando el futuro de la",
    hero_title_highlight: "Influencia",
    hero_subtitle: "Conectamos marcas con creadores para diseñar campañas inolvidables que inspiran, conectan y convierten la influencia digital en impacto real.",
    hero_explore: "Ver servicios",
    hero_get_started: "Empezar",

    brands_title: "Marcas que confían en nosotros",
    brands_subtitle: "Colaboramos con marcas innovadoras para crear conexiones auténticas",
    brand_placeholder: "Marca",

    products_title: "Favoritos de campaña",
    products_subtitle: "Productos que nuestros creadores adoran. Toca el corazón para guardar los que te gustan.",
    favorite_add: "Añadir a favoritos",
    favorite_remove: "Quitar de favoritos",

    what_we_do_title: "Qué hacemos",
    what_we_do_subtitle: "Colaboramos con influencers y marcas auténticas para crear alianzas con sentido que generan resultados reales y relaciones duraderas.",
    what_we_do: [
        Card {
            icon: "🤝",
            title: "Alianzas de marca",
            description: "Conectamos a los creadores adecuados con marcas que comparten sus valores y su audiencia.",
        },
        Card {
            icon: "🎯",
            title: "Campañas estratégicas",
            description: "Estrategias basadas en datos que logran resultados medibles y una interacción auténtica.",
        },
        Card {
            icon: "👑",
            title: "Crecimiento de creadores",
            description: "Ayudamos a los creadores a construir carreras sostenibles con gestión y acompañamiento profesional.",
        },
    ],

    about_title: "Sobre Social Riser",
    about_paragraphs: &[
        "En la era digital, las redes sociales se han convertido en el corazón del marketing, el entretenimiento y las historias. Cada día surgen influencers y creadores con ideas únicas, creatividad y pasión. Algunos buscan reconocimiento; otros quieren convertir su pasión en una carrera sostenible.",
        "Pero en un espacio tan competitivo, crecer no depende solo de la creatividad. Depende de las oportunidades, la estrategia y las conexiones adecuadas. Ahí es donde entra Social Riser.",
        "No somos solo otra agencia de marketing de influencers; somos un ecosistema de crecimiento que conecta a creadores con talento y marcas visionarias, creando colaboraciones que impulsan el éxito de ambos. Nuestra misión es sencilla y poderosa:",
    ],
    about_quote: "\"Impulsar a los creadores para que crezcan, conecten y prosperen, mientras ayudamos a las marcas a crecer con historias auténticas.\"",
    about_closing: "En Social Riser creemos que cuando el creador y la marca adecuados se unen, es más que una campaña. Es el comienzo de un movimiento.",

    services_title: "Nuestros servicios",
    services_subtitle: "Soluciones completas para que creadores y marcas prosperen en el entorno digital",
    services: [
        ServiceOverview {
            icon: "👥",
            title: "Para influencers: destaca entre el ruido",
            tagline: "Tu contenido es tu voz, y en Social Riser creemos que tu voz merece ser escuchada.",
            body: &[
                "Tanto si estás empezando como si ya tienes trayectoria, trabajamos contigo para conseguir colaboraciones de alto valor que conecten con tu audiencia y aumenten tus ingresos.",
            ],
            highlights: &[
                Highlight {
                    title: "Alianzas a largo plazo",
                    description: "Relaciones duraderas en lugar de acuerdos puntuales",
                },
                Highlight {
                    title: "Afinidad de marca",
                    description: "Te conectamos con marcas que comparten tus valores",
                },
                Highlight {
                    title: "Crecimiento financiero",
                    description: "Más potencial de ingresos y más estabilidad",
                },
            ],
            quote: None,
        },
        ServiceOverview {
            icon: "👑",
            title: "Gestión de talento: las estrellas del mañana",
            tagline: "El talento merece más que reconocimiento. Merece dirección, oportunidades y crecimiento.",
            body: &[
                "Nuestro servicio de gestión de talento ayuda a creadores e influencers a desarrollar todo su potencial, y da a las marcas acceso a las voces adecuadas para representar su visión con autenticidad.",
                "Trabajamos con cada influencer para construir su marca personal, afinar su estrategia de contenido y conectarlo con las oportunidades correctas. Desde la negociación hasta la gestión de reputación, te acompañamos de principio a fin.",
            ],
            highlights: &[],
            quote: Some((
                "\"Nosotros gestionamos el negocio, tú te centras en crear magia.\"",
                "✨ Únete hoy a Social Riser - Tu influencia, nuestra misión.",
            )),
        },
        ServiceOverview {
            icon: "📣",
            title: "Marketing de influencers para marcas",
            tagline: "La publicidad tradicional pierde fuerza en un mundo digital.",
            body: &[
                "Los consumidores exigen conexiones auténticas y experiencias reales. Social Riser une marcas e influencers para que tu mensaje llegue a la audiencia adecuada a través de voces en las que confía.",
                "Nuestras estrategias basadas en datos y nuestro conocimiento del ecosistema de creadores nos permiten diseñar campañas que amplían el alcance y generan resultados de negocio tangibles.",
            ],
            highlights: &[],
            quote: None,
        },
    ],
    services_page_title_lead: "Nuestros",
    services_page_title_highlight: "Servicios",
    services_tabs: [
        ServicesTabCopy {
            tab: ServicesTab::Influencers,
            icon: "👥",
            label: "Influencers",
            heading: "Destaca entre el ruido",
            lead: "Tu contenido es tu voz, y en Social Riser creemos que tu voz merece ser escuchada.",
            body: "Tanto si estás empezando como si ya tienes trayectoria, trabajamos contigo para conseguir colaboraciones de alto valor que conecten con tu audiencia y aumenten tus ingresos.",
            points: &[
                "🤝 Alianzas a largo plazo en lugar de acuerdos puntuales",
                "🎯 Marcas que comparten tus valores",
                "📈 Ingresos sostenibles",
            ],
            quote: None,
            cta: "Únete como influencer",
            images: INFLUENCER_IMAGES,
            images_first: false,
        },
        ServicesTabCopy {
            tab: ServicesTab::Talent,
            icon: "👑",
            label: "Gestión de talento",
            heading: "Las estrellas del mañana",
            lead: "El talento merece más que reconocimiento. Merece dirección, oportunidades y crecimiento.",
            body: "Nuestro servicio de gestión de talento ayuda a creadores e influencers a desarrollar todo su potencial, y da a las marcas acceso a las voces adecuadas.",
            points: &[],
            quote: Some((
                "\"Nosotros gestionamos el negocio, tú te centras en crear magia.\"",
                "✨ Únete hoy a Social Riser - Tu influencia, nuestra misión.",
            )),
            cta: "Empieza tu camino",
            images: TALENT_IMAGES,
            images_first: true,
        },
        ServicesTabCopy {
            tab: ServicesTab::Brands,
            icon: "📣",
            label: "Alianzas de marca",
            heading: "Alianzas de marca",
            lead: "La publicidad tradicional pierde fuerza en un mundo digital.",
            body: "Los consumidores exigen conexiones auténticas y experiencias reales. Social Riser une marcas e influencers para que tu mensaje llegue a la audiencia adecuada.",
            points: &[
                "Estrategias basadas en datos",
                "Historias auténticas",
                "Resultados medibles",
            ],
            quote: None,
            cta: "Colabora con nosotros",
            images: BRAND_IMAGES,
            images_first: false,
        },
    ],

    contact_title: "Contáctanos",
    contact_subtitle: "¿Quieres impulsar tu influencia o encontrar al creador perfecto para tu marca? Empecemos la conversación.",
    dialog_title_lead: "¡Vamos a",
    dialog_title_highlight: "colaborar!",
    label_name: "Nombre *",
    label_email: "Correo *",
    label_instagram: "Usuario de Instagram",
    label_facebook: "Perfil de Facebook",
    label_message: "Cuéntanos sobre tu proyecto u objetivos *",
    placeholder_instagram: "@usuario",
    placeholder_facebook: "URL del perfil o nombre",
    placeholder_message: "Describe lo que buscas, ya seas un creador en busca de oportunidades o una marca que quiere colaborar...",
    send: "Enviar mensaje",
    sending: "Enviando...",
    reach_directly: "O escríbenos directamente a:",
    toast_sent: "¡Mensaje enviado! Te responderemos pronto.",
    toast_missing: "Completa los campos obligatorios:",
    toast_failed: "No pudimos enviar tu mensaje. Conservamos tu borrador, inténtalo de nuevo.",
    toast_cancelled: "Tu mensaje no se envió porque saliste del formulario antes de terminar.",

    footer_tagline: "Creando el futuro de la influencia",
    footer_rights: "Social Riser. Todos los derechos reservados. Impulsamos a los creadores a crecer, conectar y prosperar.",
    terms_link: "Términos y condiciones",
    privacy_link: "Política de privacidad",
};

#[derive(PartialEq)]
pub struct LegalSection {
    pub heading: &'static str,
    pub paragraphs: &'static [&'static str],
    pub bullets: &'static [&'static str],
    /// Boxed callout rendered after the bullets, e.g. the contact address.
    pub callout: Option<(&'static str, &'static [&'static str])>,
}

#[derive(PartialEq)]
pub struct LegalDocument {
    pub title_lead: &'static str,
    pub title_highlight: &'static str,
    pub last_updated: &'static str,
    pub sections: &'static [LegalSection],
}

pub static TERMS: LegalDocument = LegalDocument {
    title_lead: "Terms &",
    title_highlight: "Conditions",
    last_updated: "Last updated: December 2024",
    sections: &[
        LegalSection {
            heading: "1. Agreement to Terms",
            paragraphs: &["By accessing and using Social Riser's services, you accept and agree to be bound by the terms and provision of this agreement. If you do not agree to abide by the above, please do not use this service."],
            bullets: &[],
            callout: None,
        },
        LegalSection {
            heading: "2. Services Description",
            paragraphs: &["Social Riser provides influencer marketing services, talent management, and brand association services. We connect creators with brands to create authentic partnerships and campaigns."],
            bullets: &[
                "Influencer partnership facilitation",
                "Talent management and career development",
                "Brand collaboration strategies",
                "Content creation guidance",
            ],
            callout: None,
        },
        LegalSection {
            heading: "3. User Responsibilities",
            paragraphs: &["Users are responsible for:"],
            bullets: &[
                "Providing accurate and truthful information",
                "Maintaining the confidentiality of account information",
                "Complying with all applicable laws and regulations",
                "Respecting intellectual property rights",
                "Creating authentic and original content",
            ],
            callout: None,
        },
        LegalSection {
            heading: "4. Payment Terms",
            paragraphs: &["Payment terms vary based on the specific service agreement. All fees are non-refundable unless otherwise specified in writing. We reserve the right to modify our pricing structure with 30 days notice."],
            bullets: &[],
            callout: None,
        },
        LegalSection {
            heading: "5. Intellectual Property",
            paragraphs: &["All content created through our platform remains the property of the respective creators. Social Riser retains the right to use case studies and anonymized performance data for marketing purposes."],
            bullets: &[],
            callout: None,
        },
        LegalSection {
            heading: "6. Limitation of Liability",
            paragraphs: &["Social Riser shall not be liable for any indirect, incidental, special, consequential, or punitive damages, including without limitation, loss of profits, data, use, goodwill, or other intangible losses."],
            bullets: &[],
            callout: None,
        },
        LegalSection {
            heading: "7. Contact Information",
            paragraphs: &["For questions about these Terms & Conditions, please contact us at:"],
            bullets: &[],
            callout: Some((
                "Email: contact@socialriser.com",
                &["We typically respond within 24 hours during business days."],
            )),
        },
    ],
};

pub static PRIVACY: LegalDocument = LegalDocument {
    title_lead: "Privacy",
    title_highlight: "Policy",
    last_updated: "Last updated: December 2024",
    sections: &[
        LegalSection {
            heading: "1. Information We Collect",
            paragraphs: &["We collect information you provide directly to us, such as when you create an account, fill out a form, or communicate with us."],
            bullets: &[
                "Personal information (name, email address, phone number)",
                "Social media profiles and handles",
                "Professional information and portfolio data",
                "Communication preferences",
                "Usage data and analytics",
            ],
            callout: None,
        },
        LegalSection {
            heading: "2. How We Use Your Information",
            paragraphs: &["We use the information we collect to:"],
            bullets: &[
                "Provide, maintain, and improve our services",
                "Match influencers with relevant brand opportunities",
                "Communicate with you about our services",
                "Send you technical notices and support messages",
                "Analyze usage patterns to enhance user experience",
                "Comply with legal obligations",
            ],
            callout: None,
        },
        LegalSection {
            heading: "3. Information Sharing",
            paragraphs: &["We do not sell, trade, or otherwise transfer your personal information to third parties without your consent, except as described in this policy:"],
            bullets: &[
                "With potential brand partners (with your explicit consent)",
                "With service providers who assist in our operations",
                "When required by law or to protect our rights",
                "In connection with a business transfer or acquisition",
            ],
            callout: None,
        },
        LegalSection {
            heading: "4. Data Security",
            paragraphs: &["We implement appropriate technical and organizational security measures to protect your personal information against unauthorized access, alteration, disclosure, or destruction."],
            bullets: &[],
            callout: Some((
                "Security Measures Include:",
                &[
                    "Encryption of data in transit and at rest",
                    "Regular security audits and updates",
                    "Access controls and authentication",
                    "Employee training on data protection",
                ],
            )),
        },
        LegalSection {
            heading: "5. Your Rights",
            paragraphs: &["You have the right to:"],
            bullets: &[
                "Access and update your personal information",
                "Request deletion of your data",
                "Opt-out of marketing communications",
                "Request a copy of your data",
                "Object to processing of your data",
                "Data portability",
            ],
            callout: None,
        },
        LegalSection {
            heading: "6. Cookies and Tracking",
            paragraphs: &["We use cookies and similar tracking technologies to track activity on our service and hold certain information to improve user experience and analyze usage patterns."],
            bullets: &[],
            callout: None,
        },
        LegalSection {
            heading: "7. Changes to This Policy",
            paragraphs: &["We may update our Privacy Policy from time to time. We will notify you of any changes by posting the new Privacy Policy on this page and updating the \"Last updated\" date."],
            bullets: &[],
            callout: None,
        },
        LegalSection {
            heading: "8. Contact Us",
            paragraphs: &["If you have any questions about this Privacy Policy, please contact us:"],
            bullets: &[],
            callout: Some((
                "Email: contact@socialriser.com",
                &["Subject: Privacy Policy Inquiry"],
            )),
        },
    ],
};

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn services_tab_lookup_matches_tab() {
        for language in Language::ALL {
            let copy = copy(language);
            for tab in ServicesTab::ALL {
                assert_eq!(copy.services_tab(tab).tab, tab);
            }
        }
    }

    #[test]
    fn every_tab_has_images() {
        for language in Language::ALL {
            for tab in &copy(language).services_tabs {
                assert!(!tab.images.is_empty(), "{} has no images", tab.label);
            }
        }
    }

    #[test]
    fn dictionaries_are_translated() {
        assert_ne!(EN.nav_home, ES.nav_home);
        assert_ne!(EN.send, ES.send);
        assert_eq!(EN.brand_name, ES.brand_name);
        assert_eq!(EN.about_paragraphs.len(), ES.about_paragraphs.len());
    }

    #[test]
    fn product_ids_are_unique() {
        let ids: HashSet<_> = PRODUCTS.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), PRODUCTS.len());
    }

    #[test]
    fn other_language_flips() {
        for language in Language::ALL {
            assert_ne!(language.other(), language);
            assert_eq!(language.other().other(), language);
        }
    }

    #[test]
    fn legal_documents_have_sections() {
        assert_eq!(TERMS.sections.len(), 7);
        assert_eq!(PRIVACY.sections.len(), 8);
    }
}
