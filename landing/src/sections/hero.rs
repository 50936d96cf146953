use leptos::prelude::*;

use crate::content::{ABOUT_ANCHOR, BACKGROUND_PATH, DISCORD_URL};
use crate::ui::{ButtonLink, ButtonSize, ButtonVariant};

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="flex flex-col items-center gap-8 py-20 text-center md:py-32 relative overflow-hidden mx-0">
            // Decorative artwork, recolored by `.black-to-primary`
            <div class="absolute inset-0 -z-10 w-full h-full pointer-events-none opacity-25">
                <img
                    src=BACKGROUND_PATH
                    class="w-full h-full object-cover object-center black-to-primary block"
                    alt=""
                />
            </div>
            <div class="pt-24 relative z-10 mx-auto max-w-4xl space-y-8 px-12">
                <h1 class="text-4xl font-extrabold tracking-tight sm:text-6xl md:text-7xl">
                    "Lightweight Agent Standards"
                    <span class="block text-primary">"Working Group"</span>
                </h1>
                <p class="mx-auto max-w-2xl text-lg text-muted-foreground sm:text-xl">
                    "Creating the agent standards we need today. We address concrete, immediate "
                    "challenges by defining clear, focused guidelines."
                </p>
                <div class="flex flex-wrap items-center justify-center gap-4">
                    <ButtonLink
                        href=DISCORD_URL
                        external=true
                        size=ButtonSize::Lg
                        class="h-12 rounded-full px-8 text-lg"
                    >
                        "Join Community"
                    </ButtonLink>
                    <ButtonLink
                        href=ABOUT_ANCHOR
                        variant=ButtonVariant::Outline
                        size=ButtonSize::Lg
                        class="h-12 rounded-full px-8 text-lg hover:bg-primary/5"
                    >
                        "Learn More"
                    </ButtonLink>
                </div>
            </div>
        </section>
    }
}
