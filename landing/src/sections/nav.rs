use leptos::prelude::*;

use super::{MenuToggle, MobileMenu};
use crate::content::{ABOUT_ANCHOR, LOGO_ALT, LOGO_PATH, NAV_LINKS, NavLink};
use crate::icons::{ICON_ARROW_RIGHT, Icon};
use crate::ui::{ButtonLink, NAV_TRIGGER_CLASS, merge_classes};

const HEADER_BASE: &str = "fixed top-0 z-50 w-full transition-all duration-300";
const HEADER_SCROLLED: &str =
    "border-b bg-white/80 backdrop-blur-md supports-[backdrop-filter]:bg-white/60";
const HEADER_AT_TOP: &str = "bg-transparent";

/// Header classes for the given scroll flag.
pub fn header_class(scrolled: bool) -> String {
    let state = if scrolled { HEADER_SCROLLED } else { HEADER_AT_TOP };
    merge_classes(&[HEADER_BASE, state])
}

/// Fixed page header (logo, desktop navigation, menu trigger) followed by
/// the mobile sheet.
///
/// The sheet is a sibling of `<header>`: once scrolled, the header's
/// backdrop filter becomes the containing block of fixed descendants.
#[component]
pub fn Nav(#[prop(into)] scrolled: Signal<bool>, menu_open: RwSignal<bool>) -> impl IntoView {
    view! {
        <header class=move || header_class(scrolled.get())>
            <div class="container mx-auto flex h-16 items-center justify-between px-4">
                <a href="/" class="flex items-center gap-2">
                    <img src=LOGO_PATH alt=LOGO_ALT class="h-8 w-auto" />
                </a>

                <DesktopNav />
                <MenuToggle open=menu_open />
            </div>
        </header>
        <MobileMenu open=menu_open />
    }
}

/// Shown from the `md` breakpoint up; hidden by CSS below it.
#[component]
fn DesktopNav() -> impl IntoView {
    view! {
        <div data-nav="desktop" class="hidden md:flex md:items-center md:gap-6">
            <nav aria-label="Main" class="relative z-10 flex max-w-max flex-1 items-center justify-center">
                <ul class="group flex flex-1 list-none items-center justify-center space-x-1">
                    {NAV_LINKS
                        .into_iter()
                        .map(|link| view! { <li><DesktopLink link=link /></li> })
                        .collect::<Vec<_>>()}
                </ul>
            </nav>

            <ButtonLink href=ABOUT_ANCHOR class="rounded-full bg-primary hover:bg-primary/90">
                "Get Started "
                <Icon markup=ICON_ARROW_RIGHT class="ml-2 h-4 w-4" />
            </ButtonLink>
        </div>
    }
}

#[component]
fn DesktopLink(link: NavLink) -> impl IntoView {
    view! {
        <a href=link.href class=NAV_TRIGGER_CLASS target=link.target() rel=link.rel()>
            {link.icon.map(|icon| view! { <Icon markup=icon.markup() class="mr-2 h-4 w-4" /> })}
            {link.label}
        </a>
    }
}
