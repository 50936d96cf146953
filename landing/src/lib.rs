//! # laswg-landing
//!
//! The landing page of the Lightweight Agent Standards Working Group, as a
//! [Leptos](https://leptos.dev/) component tree.
//!
//! The same components run in two places:
//!
//! - **Browser** (`csr` feature): `src/main.rs` mounts [`LandingPage`] and
//!   binds the header to the window's scroll position.
//! - **Static HTML** (`ssr` feature, default): [`render_page`] produces the
//!   complete document, used by the `laswg-site` prerender tool.
//!
//! ```rust
//! use laswg_landing::{render_page, RenderOptions};
//!
//! let html = render_page(&RenderOptions { year: 2025, ..Default::default() });
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("Working Group"));
//! ```
//!
//! ## Modules
//!
//! - [`content`] - literal page content (features, members, links, metadata)
//! - [`scroll`] - the scroll flag and its listener lifecycle
//! - [`sections`] - one component per page section
//! - [`ui`] - buttons, cards and the class merge helper
//! - [`theme`] - Tailwind configuration

pub mod content;
pub mod icons;
pub mod page;
pub mod scroll;
pub mod sections;
pub mod theme;
pub mod ui;

pub use page::{DocumentHead, LandingPage, PageDocument};

/// Current calendar year, from the browser clock when running in WASM.
pub fn current_year() -> i32 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::new_0().get_full_year() as i32
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        use chrono::Datelike;
        chrono::Utc::now().year()
    }
}

/// Options for [`render_page`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    /// Year in the footer copyright line
    pub year: i32,
    /// Stylesheet href added to `<head>`
    pub stylesheet: Option<String>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            year: current_year(),
            stylesheet: None,
        }
    }
}

/// Render the whole page as a static HTML document.
///
/// There is no viewport on the server, so the header renders in its
/// not-scrolled style. `leptos_meta` tags are collected during the render
/// and injected before `</head>`.
#[cfg(feature = "ssr")]
pub fn render_page(options: &RenderOptions) -> String {
    use futures::{StreamExt, executor::block_on, stream};
    use leptos::prelude::*;
    use leptos::tachys::view::RenderHtml;
    use leptos_meta::{ServerMetaContext, provide_meta_context};
    use scroll::{ManualScroll, use_scroll_flag};

    // injection yields to the executor once; a host app may already own one
    let _ = any_spawner::Executor::init_futures_executor();

    let owner = Owner::new();
    let (html, meta_output) = owner.with(|| {
        provide_meta_context();
        let (meta_context, meta_output) = ServerMetaContext::new();
        provide_context(meta_context);

        let scrolled = use_scroll_flag(&ManualScroll::default());
        let html = view! {
            <PageDocument
                scrolled=scrolled
                year=options.year
                stylesheet=options.stylesheet.clone()
            />
        }
        .to_html();
        (html, meta_output)
    });
    owner.cleanup();

    let html = block_on(async move {
        meta_output.inject_meta_context(stream::iter([html]))
            .await
            .collect::<String>()
            .await
    });

    tracing::debug!(bytes = html.len(), year = options.year, "rendered landing page");

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{html}")
}
