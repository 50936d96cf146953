use leptos::prelude::*;

use crate::content::{LOGO_ALT, LOGO_PATH, NAV_LINKS};

#[component]
pub fn Footer(
    /// Year shown in the copyright line
    year: i32,
) -> impl IntoView {
    view! {
        <footer class="bg-muted/50 py-12 border-t mt-12">
            <div class="container mx-auto grid gap-12 px-4 md:grid-cols-2">
                <div class="flex flex-col items-center md:items-start text-center md:text-left">
                    <a href="/" class="mb-6 flex items-center gap-2">
                        <img src=LOGO_PATH alt=LOGO_ALT class="h-10 w-auto" />
                    </a>
                    <p class="max-w-xs text-base text-muted-foreground leading-relaxed">
                        "Lightweight Agent Standard Working Group. Developing interoperable "
                        "standards for the future of AI agents."
                    </p>
                </div>
                <div class="flex flex-col items-center md:items-end text-center md:text-right">
                    <h3 class="mb-6 font-semibold uppercase tracking-widest text-sm text-primary">
                        "Resources"
                    </h3>
                    <ul class="space-y-3 text-sm font-medium text-muted-foreground">
                        {NAV_LINKS
                            .into_iter()
                            .map(|link| {
                                view! {
                                    <li>
                                        <a
                                            href=link.href
                                            class="transition-colors hover:text-primary"
                                            target=link.target()
                                            rel=link.rel()
                                        >
                                            {link.label}
                                        </a>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </ul>
                </div>
            </div>
            <div class="container mx-auto mt-12 border-t px-4 pt-8 text-center text-xs text-muted-foreground/60">
                {format!("© {year} LAS-WG. All rights reserved.")}
            </div>
        </footer>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn copyright_uses_given_year() {
        let owner = Owner::new();
        let html = owner.with(|| view! { <Footer year=2031 /> }.to_html());
        assert!(html.contains("© 2031 LAS-WG. All rights reserved."));
    }

    #[test]
    fn resource_links_match_navigation() {
        let owner = Owner::new();
        let html = owner.with(|| view! { <Footer year=2025 /> }.to_html());

        assert!(html.contains("Resources"));
        assert!(html.contains(r##"href="#about-us" class="transition-colors hover:text-primary""##));
        assert_eq!(html.matches(r#"target="_blank""#).count(), 2);
        assert_eq!(html.matches(r#"src="/logo.svg""#).count(), 1);
    }
}
