//! Small UI kit: buttons, cards, sheet and navigation trigger classes.
//!
//! Class lists are combined with [`merge_classes`], where a later utility
//! replaces an earlier one from the same group (`h-9` then `h-12` keeps
//! `h-12`), so call sites can override the defaults.

use leptos::prelude::*;

/// Conflict group of a utility class, including its variant prefix.
/// Utilities outside the known groups never conflict.
fn conflict_key(class: &str) -> Option<String> {
    let (variants, utility) = match class.rfind(':') {
        Some(idx) => class.split_at(idx + 1),
        None => ("", class),
    };

    const TEXT_SIZES: &[&str] = &[
        "xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl", "8xl", "9xl",
    ];
    const TEXT_ALIGN: &[&str] = &["left", "center", "right", "justify", "start", "end"];

    let group = if let Some(rest) = utility.strip_prefix("text-") {
        if TEXT_SIZES.contains(&rest) {
            "text-size"
        } else if TEXT_ALIGN.contains(&rest) {
            "text-align"
        } else {
            "text-color"
        }
    } else if utility == "rounded" || utility.starts_with("rounded-") {
        "rounded"
    } else if utility == "shadow" || utility.starts_with("shadow-") {
        "shadow"
    } else if matches!(utility, "border" | "border-0" | "border-2" | "border-none") {
        "border-width"
    } else {
        ["h-", "w-", "px-", "py-", "bg-"]
            .into_iter()
            .find(|prefix| utility.starts_with(prefix))?
    };

    Some(format!("{variants}{group}"))
}

/// Join class lists; later conflicting utilities win.
pub fn merge_classes(parts: &[&str]) -> String {
    let classes: Vec<&str> = parts.iter().flat_map(|p| p.split_whitespace()).collect();

    let mut kept: Vec<&str> = Vec::with_capacity(classes.len());
    for (idx, class) in classes.iter().enumerate() {
        let key = conflict_key(class);
        let overridden = classes[idx + 1..].iter().any(|later| {
            later == class || (key.is_some() && conflict_key(later) == key)
        });
        if !overridden {
            kept.push(*class);
        }
    }
    kept.join(" ")
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Default,
    Outline,
    Secondary,
    Ghost,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonSize {
    #[default]
    Default,
    Lg,
    Icon,
}

const BUTTON_BASE: &str = "inline-flex items-center justify-center gap-2 whitespace-nowrap rounded-md text-sm font-medium transition-colors focus-visible:outline-none focus-visible:ring-1 focus-visible:ring-ring disabled:pointer-events-none disabled:opacity-50";

/// Full class list for a button of the given variant and size.
pub fn button_class(variant: ButtonVariant, size: ButtonSize, extra: &str) -> String {
    let variant = match variant {
        ButtonVariant::Default => "bg-primary text-primary-foreground shadow hover:bg-primary/90",
        ButtonVariant::Outline => {
            "border border-input bg-background shadow-sm hover:bg-accent hover:text-accent-foreground"
        }
        ButtonVariant::Secondary => {
            "bg-secondary text-secondary-foreground shadow-sm hover:bg-secondary/80"
        }
        ButtonVariant::Ghost => "hover:bg-accent hover:text-accent-foreground",
    };
    let size = match size {
        ButtonSize::Default => "h-9 px-4 py-2",
        ButtonSize::Lg => "h-10 rounded-md px-8",
        ButtonSize::Icon => "h-9 w-9",
    };
    merge_classes(&[BUTTON_BASE, variant, size, extra])
}

/// Style shared by the desktop navigation links.
pub const NAV_TRIGGER_CLASS: &str = "group inline-flex h-9 w-max items-center justify-center rounded-md bg-background px-4 py-2 text-sm font-medium transition-colors hover:bg-accent hover:text-accent-foreground focus:bg-accent focus:text-accent-foreground focus:outline-none disabled:pointer-events-none disabled:opacity-50 data-[active]:bg-accent/50 data-[state=open]:bg-accent/50";

/// An anchor rendered as a button.
#[component]
pub fn ButtonLink(
    href: &'static str,
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    #[prop(optional)] class: &'static str,
    /// Open in a new browsing context.
    #[prop(optional)]
    external: bool,
    children: Children,
) -> impl IntoView {
    view! {
        <a
            href=href
            class=button_class(variant, size, class)
            target=external.then_some("_blank")
            rel=external.then_some("noopener noreferrer")
        >
            {children()}
        </a>
    }
}

#[component]
pub fn Card(#[prop(optional)] class: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class=merge_classes(&["rounded-xl border bg-card text-card-foreground shadow", class])>
            {children()}
        </div>
    }
}

#[component]
pub fn CardHeader(children: Children) -> impl IntoView {
    view! { <div class="flex flex-col space-y-1.5 p-6">{children()}</div> }
}

#[component]
pub fn CardTitle(children: Children) -> impl IntoView {
    view! { <h3 class="font-semibold leading-none tracking-tight">{children()}</h3> }
}

#[component]
pub fn CardDescription(#[prop(optional)] class: &'static str, children: Children) -> impl IntoView {
    view! {
        <p class=merge_classes(&["text-sm text-muted-foreground", class])>{children()}</p>
    }
}

#[component]
pub fn CardContent(children: Children) -> impl IntoView {
    view! { <div class="p-6 pt-0">{children()}</div> }
}

pub const SHEET_OVERLAY_CLASS: &str = "fixed inset-0 z-50 bg-black/80";
pub const SHEET_PANEL_CLASS: &str = "sheet-panel fixed inset-y-0 right-0 z-50 flex h-full w-3/4 flex-col gap-4 border-l bg-background p-6 shadow-lg sm:max-w-sm";
pub const SHEET_CLOSE_CLASS: &str = "absolute right-4 top-4 rounded-sm opacity-70 transition-opacity hover:opacity-100 focus:outline-none focus:ring-2 focus:ring-ring focus:ring-offset-2";

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn later_utilities_override_earlier() {
        assert_eq!(merge_classes(&["h-9 px-4", "h-12 px-8"]), "h-12 px-8");
        assert_eq!(
            merge_classes(&["text-sm text-muted-foreground", "text-base"]),
            "text-muted-foreground text-base"
        );
        assert_eq!(
            merge_classes(&["rounded-xl border shadow", "border-none shadow-md"]),
            "rounded-xl border-none shadow-md"
        );
    }

    #[test]
    fn variants_only_conflict_within_same_variant() {
        assert_eq!(
            merge_classes(&["bg-primary hover:bg-primary/90", "hover:bg-white"]),
            "bg-primary hover:bg-white"
        );
    }

    #[test]
    fn unrelated_utilities_survive() {
        assert_eq!(
            merge_classes(&["border-b bg-white/80", "backdrop-blur-md"]),
            "border-b bg-white/80 backdrop-blur-md"
        );
        assert_eq!(merge_classes(&["flex flex", "", "  items-center "]), "flex items-center");
    }

    #[test]
    fn large_pill_button_keeps_call_site_sizes() {
        let class = button_class(
            ButtonVariant::Default,
            ButtonSize::Lg,
            "h-12 rounded-full px-8 text-lg",
        );
        assert!(class.contains("h-12"));
        assert!(!class.contains("h-10"));
        assert!(class.contains("rounded-full"));
        assert!(!class.contains("rounded-md"));
        assert!(class.contains("text-lg"));
        assert!(!class.contains("text-sm"));
        assert!(class.contains("bg-primary"));
    }

    #[test]
    fn ghost_icon_button() {
        let class = button_class(ButtonVariant::Ghost, ButtonSize::Icon, "md:hidden");
        assert!(class.ends_with("h-9 w-9 md:hidden"));
        assert!(!class.contains("bg-primary"));
    }
}
