//! The page shell and the full HTML document around it.

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::content::meta;
use crate::sections::{CallToAction, Features, Footer, Hero, Membership, Nav};

/// Everything inside `<body>`.
///
/// `scrolled` comes from [`crate::scroll::use_scroll_flag`] in the caller so
/// the listener belongs to whoever mounts the page.
#[component]
pub fn LandingPage(#[prop(into)] scrolled: Signal<bool>, year: i32) -> impl IntoView {
    let menu_open = RwSignal::new(false);

    view! {
        <div class="min-h-screen font-sans text-foreground selection:bg-primary/20 relative z-0">
            <Nav scrolled=scrolled menu_open=menu_open />

            <main class="pt-0">
                <Hero />
                <Features />
                <Membership />
                <CallToAction />
                <Footer year=year />
            </main>
        </div>
    }
}

/// Title, description, social preview tags and the shortcut icon.
///
/// `Title` and `Meta` go through `leptos_meta`; on the server they are
/// collected while rendering and injected before `</head>` by
/// [`crate::render_page`].
#[component]
pub fn DocumentHead(
    /// Stylesheet linked after the metadata, if any
    stylesheet: Option<String>,
) -> impl IntoView {
    view! {
        <meta charset="UTF-8" />
        <meta name="viewport" content="width=device-width, initial-scale=1" />
        <Title text=meta::TITLE />
        <Meta name="description" content=meta::DESCRIPTION />
        <Meta property="og:title" content=meta::OG_TITLE />
        <Meta property="og:description" content=meta::DESCRIPTION />
        <Meta property="og:type" content=meta::OG_TYPE />
        <Meta property="og:url" content=meta::OG_URL />
        <Meta property="og:image" content=meta::OG_IMAGE />
        <link rel="shortcut icon" href=meta::ICON_HREF type=meta::ICON_TYPE />
        {stylesheet.map(|href| view! { <link rel="stylesheet" href=href /> })}
    }
}

/// The complete HTML document.
#[component]
pub fn PageDocument(
    #[prop(into)] scrolled: Signal<bool>,
    year: i32,
    stylesheet: Option<String>,
) -> impl IntoView {
    view! {
        <html lang="en">
            <head>
                <DocumentHead stylesheet=stylesheet />
            </head>
            <body>
                <LandingPage scrolled=scrolled year=year />
            </body>
        </html>
    }
}

