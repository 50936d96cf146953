use leptos::prelude::*;

use crate::content::DISCORD_URL;
use crate::ui::{ButtonLink, ButtonSize, ButtonVariant};

#[component]
pub fn CallToAction() -> impl IntoView {
    view! {
        <section class="bg-primary py-20 text-primary-foreground">
            <div class="container mx-auto flex flex-col items-center gap-6 px-4 text-center">
                <h2 class="text-3xl font-bold tracking-tight sm:text-4xl">"Stay updated"</h2>
                <p class="max-w-xl text-primary-foreground/90">
                    "Weekly meetings on AI agent standards. Join the conversation and help shape "
                    "the future."
                </p>
                <ButtonLink
                    href=DISCORD_URL
                    external=true
                    variant=ButtonVariant::Secondary
                    size=ButtonSize::Lg
                    class="mt-4 rounded-full px-8 text-primary hover:bg-white"
                >
                    "Join our Discord"
                </ButtonLink>
            </div>
        </section>
    }
}
