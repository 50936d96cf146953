use leptos::prelude::*;

use crate::content::{FEATURES, Feature};
use crate::icons::Icon;
use crate::ui::{Card, CardContent, CardDescription, CardHeader, CardTitle};

/// The "about us" section: heading plus one card per entry in [`FEATURES`].
#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section id="about-us" class="bg-muted/30 py-20">
            <div class="container mx-auto px-4">
                <div class="mb-16 text-center">
                    <h2 class="text-3xl font-bold tracking-tight sm:text-4xl">
                        "Small, " <span class="text-primary">"Specific"</span> " Standards"
                    </h2>
                    <p class="mx-auto mt-4 max-w-2xl text-muted-foreground">
                        "LAS-WG develops interoperable standards for agent communication avoiding "
                        "bloated protocols in favor of quick, iterative testing."
                    </p>
                </div>

                <div class="grid gap-8 md:grid-cols-3">
                    {FEATURES
                        .into_iter()
                        .map(|feature| view! { <FeatureCard feature=feature /> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

const FEATURE_ICON_CLASS: &str =
    "mb-4 inline-flex h-12 w-12 items-center justify-center rounded-lg bg-primary/10 text-primary";

#[component]
fn FeatureCard(feature: Feature) -> impl IntoView {
    view! {
        <Card class="border-none shadow-md transition-all hover:shadow-lg">
            <CardHeader>
                <div class=FEATURE_ICON_CLASS>
                    <Icon markup=feature.icon.markup() class="h-6 w-6" />
                </div>
                <CardTitle>{feature.title}</CardTitle>
            </CardHeader>
            <CardContent>
                <CardDescription class="text-base">{feature.description}</CardDescription>
            </CardContent>
        </Card>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::icons::{ICON_AWARD, ICON_BOOK_OPEN, ICON_ZAP};
    use leptos::tachys::view::RenderHtml;

    fn render() -> String {
        let owner = Owner::new();
        owner.with(|| view! { <Features /> }.to_html())
    }

    #[test]
    fn renders_three_cards_in_order() {
        let html = render();
        assert_eq!(html.matches(FEATURE_ICON_CLASS).count(), 3);

        let build = html.find("Build Small").expect("first card");
        let app = html.find("Application-Driven").expect("second card");
        let quick = html.find("Quick ").expect("third card");
        assert!(build < app && app < quick);
        assert!(html.contains("Iterative"));
    }

    #[test]
    fn each_card_carries_its_description_and_icon() {
        let html = render();
        for feature in FEATURES {
            assert!(html.contains(feature.description), "{}", feature.title);
        }
        let zap = html.find(ICON_ZAP).expect("zap icon");
        let award = html.find(ICON_AWARD).expect("award icon");
        let book = html.find(ICON_BOOK_OPEN).expect("book icon");
        assert!(zap < award && award < book);
    }

    #[test]
    fn section_is_the_about_anchor() {
        let html = render();
        assert!(html.contains(r#"id="about-us""#));
        assert!(html.contains("Specific"));
    }

    #[test]
    fn card_overrides_default_border_and_text_size() {
        let html = render();
        assert!(html.contains("border-none shadow-md"));
        assert!(html.contains("text-muted-foreground text-base"));
        assert!(!html.contains("text-sm text-muted-foreground"));
    }
}
