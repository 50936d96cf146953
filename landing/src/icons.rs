//! Inline SVG icons from the [Lucide](https://lucide.dev/) set.
//!
//! Each constant holds the inner markup of a 24x24 stroke icon.

use leptos::prelude::*;

use crate::content::{FeatureIcon, NavIcon};

/// Renders a stroke icon from its inner SVG markup.
///
/// ```rust,ignore
/// view! { <Icon markup=ICON_MENU class="h-6 w-6" /> }
/// ```
#[component]
pub fn Icon(
    /// Inner SVG markup (paths, lines, circles)
    markup: &'static str,
    /// Additional CSS class names
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width="24"
            height="24"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            class=class
            inner_html=markup
        ></svg>
    }
}

pub const ICON_MENU: &str = r#"<line x1="4" x2="20" y1="12" y2="12"></line><line x1="4" x2="20" y1="6" y2="6"></line><line x1="4" x2="20" y1="18" y2="18"></line>"#;

pub const ICON_X: &str = r#"<path d="M18 6 6 18"></path><path d="m6 6 12 12"></path>"#;

pub const ICON_ARROW_RIGHT: &str = r#"<path d="M5 12h14"></path><path d="m12 5 7 7-7 7"></path>"#;

pub const ICON_GITHUB: &str = r#"<path d="M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4"></path><path d="M9 18c-4.51 2-5-2-7-2"></path>"#;

pub const ICON_DISC: &str = r#"<circle cx="12" cy="12" r="10"></circle><circle cx="12" cy="12" r="2"></circle>"#;

pub const ICON_ZAP: &str = r#"<path d="M4 14a1 1 0 0 1-.78-1.63l9.9-10.2a.5.5 0 0 1 .86.46l-1.92 6.02A1 1 0 0 0 13 10h7a1 1 0 0 1 .78 1.63l-9.9 10.2a.5.5 0 0 1-.86-.46l1.92-6.02A1 1 0 0 0 11 14z"></path>"#;

pub const ICON_AWARD: &str = r#"<path d="m15.477 12.89 1.515 8.526a.5.5 0 0 1-.81.47l-3.58-2.687a1 1 0 0 0-1.197 0l-3.586 2.686a.5.5 0 0 1-.81-.469l1.514-8.526"></path><circle cx="12" cy="8" r="6"></circle>"#;

pub const ICON_BOOK_OPEN: &str = r#"<path d="M12 7v14"></path><path d="M3 18a1 1 0 0 1-1-1V4a1 1 0 0 1 1-1h5a4 4 0 0 1 4 4 4 4 0 0 1 4-4h5a1 1 0 0 1 1 1v13a1 1 0 0 1-1 1h-6a3 3 0 0 0-3 3 3 3 0 0 0-3-3z"></path>"#;

impl FeatureIcon {
    pub fn markup(self) -> &'static str {
        match self {
            Self::Zap => ICON_ZAP,
            Self::Award => ICON_AWARD,
            Self::BookOpen => ICON_BOOK_OPEN,
        }
    }
}

impl NavIcon {
    pub fn markup(self) -> &'static str {
        match self {
            Self::Github => ICON_GITHUB,
            Self::Discord => ICON_DISC,
        }
    }
}
