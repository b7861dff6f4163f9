//! Statistic cards

use leptos::*;

#[component]
pub fn StatsCard(
    icon: &'static str,
    label: &'static str,
    #[prop(into)] value: Signal<Option<u64>>,
) -> impl IntoView {
    view! {
        <div class="rounded-xl border bg-card shadow-sm">
            <div class="flex items-center gap-4 p-6">
                <div class="rounded-full bg-primary/10 p-3">
                    <span class="text-2xl">{icon}</span>
                </div>
                <div>
                    <Show
                        when=move || value.get().is_some()
                        fallback=|| view! { <div class="h-8 w-24 bg-muted animate-pulse rounded"></div> }
                    >
                        <p class="text-2xl font-bold">
                            {move || value.get().map(format_count).unwrap_or_default()}
                        </p>
                    </Show>
                    <p class="text-sm text-muted-foreground">{label}</p>
                </div>
            </div>
        </div>
    }
}

/// Group digits with thousands separators.
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut formatted = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(ch);
    }
    formatted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(4521), "4,521");
        assert_eq!(format_count(1_247_893), "1,247,893");
    }
}
