//! 404 page

use leptos::*;
use leptos_router::use_location;

use crate::components::SeoHead;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let location = use_location();

    create_effect(move |_| {
        tracing::error!(
            "404: attempted to access non-existent route: {}",
            location.pathname.get()
        );
    });

    view! {
        <SeoHead
            title="Page Not Found – DisposableCheck"
            description="The page you're looking for doesn't exist or has been moved."
            robots="noindex,nofollow"
        />

        <div class="flex min-h-[60vh] items-center justify-center px-4">
            <div class="text-center max-w-md mx-auto">
                <div class="text-7xl md:text-8xl font-bold text-primary/20 mb-4">"404"</div>
                <h1 class="text-3xl font-bold mb-3">"Page Not Found"</h1>
                <p class="text-muted-foreground mb-6">
                    "Oops! The page you're looking for doesn't exist or has been moved."
                </p>
                <a
                    href="/"
                    class="inline-flex items-center gap-2 px-4 py-2 rounded-lg bg-primary text-primary-foreground font-medium"
                >
                    "🏠 Return to Home"
                </a>
            </div>
        </div>
    }
}
