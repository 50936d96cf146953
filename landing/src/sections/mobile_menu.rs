//! Slide-out navigation panel for narrow viewports.

use leptos::prelude::*;

use crate::content::{ABOUT_ANCHOR, NAV_LINKS, NavLink};
use crate::icons::{ICON_MENU, ICON_X, Icon};
use crate::ui::{
    ButtonSize, ButtonVariant, SHEET_CLOSE_CLASS, SHEET_OVERLAY_CLASS, SHEET_PANEL_CLASS,
    button_class,
};

/// Hamburger button shown below the `md` breakpoint.
#[component]
pub fn MenuToggle(open: RwSignal<bool>) -> impl IntoView {
    view! {
        <button
            data-nav="mobile-toggle"
            type="button"
            class=button_class(ButtonVariant::Ghost, ButtonSize::Icon, "md:hidden")
            aria-controls="mobile-menu"
            aria-expanded=move || open.get().to_string()
            on:click=move |_| open.update(|o| *o = !*o)
        >
            <Icon markup=ICON_MENU class="h-6 w-6" />
            <span class="sr-only">"Toggle menu"</span>
        </button>
    }
}

/// Overlay and slide-out panel. `open` is owned by the page so the panel
/// state stays independent from the scroll flag.
#[component]
pub fn MobileMenu(open: RwSignal<bool>) -> impl IntoView {
    let close = move |_| open.set(false);

    view! {
        <Show when=move || open.get()>
            <div data-nav="mobile-overlay" class=SHEET_OVERLAY_CLASS on:click=close></div>
            <div
                data-nav="mobile-panel"
                id="mobile-menu"
                role="dialog"
                aria-modal="true"
                aria-labelledby="mobile-menu-title"
                class=SHEET_PANEL_CLASS
            >
                <div class="flex flex-col space-y-2 text-center sm:text-left">
                    <h2 id="mobile-menu-title" class="text-lg font-semibold text-foreground">
                        "Menu"
                    </h2>
                </div>

                <div class="mt-8 flex flex-col gap-4">
                    {NAV_LINKS
                        .into_iter()
                        .map(|link| view! { <MobileLink link=link open=open /> })
                        .collect::<Vec<_>>()}
                    <a
                        href=ABOUT_ANCHOR
                        class=button_class(ButtonVariant::Default, ButtonSize::Default, "mt-4 w-full")
                        on:click=close
                    >
                        "Get Started"
                    </a>
                </div>

                <button type="button" class=SHEET_CLOSE_CLASS on:click=close>
                    <Icon markup=ICON_X class="h-4 w-4" />
                    <span class="sr-only">"Close"</span>
                </button>
            </div>
        </Show>
    }
}

#[component]
fn MobileLink(link: NavLink, open: RwSignal<bool>) -> impl IntoView {
    let class = if link.icon.is_some() {
        "flex items-center text-lg font-medium hover:text-primary"
    } else {
        "text-lg font-medium hover:text-primary"
    };

    view! {
        <a
            href=link.href
            class=class
            target=link.target()
            rel=link.rel()
            on:click=move |_| open.set(false)
        >
            {link.icon.map(|icon| view! { <Icon markup=icon.markup() class="mr-2 h-5 w-5" /> })}
            {link.label}
        </a>
    }
}
