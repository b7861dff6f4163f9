//! Site header and footer

use leptos::*;
use leptos_router::use_location;

use super::{AttributionPopup, ThemeToggle};

const NAV_ITEMS: [(&str, &str); 5] = [
    ("/", "Check Email"),
    ("/bulk", "Bulk Check"),
    ("/report", "Report Domain"),
    ("/docs", "API Docs"),
    ("/get-api-key", "Get API Key"),
];

#[component]
pub fn SiteHeader() -> impl IntoView {
    let location = use_location();
    let (mobile_open, set_mobile_open) = create_signal(false);

    let nav_class = move |path: &'static str| {
        if location.pathname.get() == path {
            "px-3 py-2 text-sm font-medium rounded-md bg-primary text-primary-foreground"
        } else {
            "px-3 py-2 text-sm font-medium rounded-md text-muted-foreground hover:text-foreground hover:bg-muted transition-colors"
        }
    };

    view! {
        <header class="sticky top-0 z-50 border-b bg-background/95 backdrop-blur">
            <div class="container mx-auto flex h-16 items-center justify-between px-4">
                <a href="/" class="flex items-center gap-2">
                    <span class="text-2xl">"🛡️"</span>
                    <span class="text-lg font-semibold">"DisposableCheck"</span>
                </a>

                // Desktop Navigation
                <nav class="hidden md:flex items-center gap-1">
                    {NAV_ITEMS
                        .into_iter()
                        .map(|(path, label)| {
                            view! {
                                <a href=path class=move || nav_class(path)>{label}</a>
                            }
                        })
                        .collect::<Vec<_>>()}
                </nav>

                // Theme Toggle & Mobile Menu
                <div class="flex items-center gap-2">
                    <ThemeToggle/>
                    <button
                        class="md:hidden p-2 rounded-md text-muted-foreground hover:text-foreground hover:bg-muted"
                        aria-label="Toggle menu"
                        on:click=move |_| set_mobile_open.update(|v| *v = !*v)
                    >
                        <Show
                            when=move || mobile_open.get()
                            fallback=|| view! {
                                <svg class="h-5 w-5" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16M4 18h16"/>
                                </svg>
                            }
                        >
                            <svg class="h-5 w-5" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12"/>
                            </svg>
                        </Show>
                    </button>
                </div>
            </div>

            // Mobile Navigation
            <Show when=move || mobile_open.get()>
                <nav class="md:hidden border-t bg-background px-4 py-2">
                    {NAV_ITEMS
                        .into_iter()
                        .map(|(path, label)| {
                            view! {
                                <a
                                    href=path
                                    class=move || format!("block {}", nav_class(path))
                                    on:click=move |_| set_mobile_open.set(false)
                                >
                                    {label}
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()}
                </nav>
            </Show>
        </header>
    }
}

#[component]
pub fn SiteFooter() -> impl IntoView {
    view! {
        <footer class="border-t bg-muted/30 py-8 mt-16">
            <div class="container mx-auto px-4">
                <div class="flex flex-col md:flex-row items-center justify-between gap-4 text-sm text-muted-foreground">
                    <p>"© 2026 DisposableCheck. Free disposable email detection tool & API."</p>
                    <div class="flex items-center gap-4">
                        <AttributionPopup/>
                        <a href="/terms" class="hover:text-foreground transition-colors hover:underline">
                            "Terms of Service"
                        </a>
                    </div>
                </div>
            </div>
        </footer>
    }
}
