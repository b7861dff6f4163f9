//! Theme selection

use leptos::*;

const THEMES: [(&str, &str); 3] = [
    ("light", "☀️ Light"),
    ("dark", "🌙 Dark"),
    ("system", "💻 System"),
];

fn apply_theme(theme: &str) {
    if let Some(root) = document().document_element() {
        if theme == "system" {
            let _ = root.remove_attribute("data-theme");
        } else {
            let _ = root.set_attribute("data-theme", theme);
        }
    }
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let (open, set_open) = create_signal(false);
    let (theme, set_theme) = create_signal("system");

    view! {
        <div class="relative">
            <button
                class="p-2 rounded-md text-muted-foreground hover:text-foreground hover:bg-muted"
                aria-label="Toggle theme"
                on:click=move |_| set_open.update(|v| *v = !*v)
            >
                <Show when=move || theme.get() == "dark" fallback=|| "☀️">"🌙"</Show>
            </button>

            <Show when=move || open.get()>
                <div class="absolute right-0 mt-2 w-36 rounded-md border bg-background shadow-lg py-1">
                    {THEMES
                        .into_iter()
                        .map(|(value, label)| {
                            view! {
                                <button
                                    class=move || {
                                        if theme.get() == value {
                                            "block w-full text-left px-3 py-2 text-sm bg-muted"
                                        } else {
                                            "block w-full text-left px-3 py-2 text-sm hover:bg-muted"
                                        }
                                    }
                                    on:click=move |_| {
                                        set_theme.set(value);
                                        apply_theme(value);
                                        set_open.set(false);
                                    }
                                >
                                    {label}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </Show>
        </div>
    }
}
