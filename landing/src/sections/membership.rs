use leptos::prelude::*;

use crate::content::{MEMBERS, MemberOrg};

#[component]
pub fn Membership() -> impl IntoView {
    view! {
        <section class="py-20">
            <div class="container mx-auto px-4">
                <div class="mb-16 text-center">
                    <h3 class="text-primary font-semibold uppercase tracking-wider text-xl">
                        "Membership"
                    </h3>
                    <p class="mx-auto mt-4 max-w-2xl text-muted-foreground">
                        "Members join individually. We have members from several organizations, "
                        "including:"
                    </p>
                </div>

                <div class="grid grid-cols-2 gap-8 sm:grid-cols-3 md:grid-cols-4">
                    {MEMBERS
                        .into_iter()
                        .map(|org| view! { <MemberLogo org=org /> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn MemberLogo(org: MemberOrg) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center gap-4 rounded-xl border bg-card p-6 shadow-sm transition-all hover:shadow-md">
            <div class="relative h-32 w-full">
                <img src=org.logo_path() alt=org.name class="h-full w-full object-contain" />
            </div>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn renders_twelve_logos_in_order() {
        let owner = Owner::new();
        let html = owner.with(|| view! { <Membership /> }.to_html());

        assert_eq!(html.matches(r#"src="/orgs/"#).count(), 12);

        let mut last = 0;
        for org in MEMBERS {
            let src = format!(r#"src="{}""#, org.logo_path());
            let at = html.find(&src).unwrap_or_else(|| panic!("missing {src}"));
            assert!(at >= last, "{} out of order", org.name);
            assert!(html.contains(&format!(r#"alt="{}""#, org.name)));
            last = at;
        }
    }
}
