//! Value proposition page

use leptos::*;

use crate::components::*;

#[component]
fn ValuePoint(icon: &'static str, title: &'static str, description: &'static str) -> impl IntoView {
    view! {
        <li class="flex items-start">
            <span class="text-xl mr-3 shrink-0">{icon}</span>
            <div>
                <strong>{title}</strong>
                <p class="text-sm text-muted-foreground">{description}</p>
            </div>
        </li>
    }
}

#[component]
fn HandshakeStep(label: &'static str, detail: &'static str) -> impl IntoView {
    view! {
        <div class="w-full max-w-sm bg-primary/5 border-2 border-primary/40 rounded-lg p-3 text-center shadow-sm">
            <div class="font-medium text-sm">{label}</div>
            <div class="text-xs text-muted-foreground">{detail}</div>
        </div>
    }
}

#[component]
pub fn ValuePropositionPage() -> impl IntoView {
    view! {
        <SeoHead
            title="Disposable Email Checker Value Proposition – DisposableCheck"
            description="Elevating email security and ROI through deep MX and SMTP verification and real-time fraud prevention."
        />

        // Hero
        <header class="bg-gradient-to-br from-amber-600 to-orange-600 text-white py-16 lg:py-20 px-4">
            <div class="max-w-6xl mx-auto text-center">
                <div class="inline-block bg-white/20 backdrop-blur-sm px-4 py-1.5 rounded-full text-sm font-semibold mb-4">
                    "Value Proposition"
                </div>
                <h1 class="text-3xl sm:text-4xl md:text-5xl font-extrabold mb-6 tracking-tight">
                    "The Disposable Email Checker Advantage"
                </h1>
                <p class="text-lg md:text-xl max-w-2xl mx-auto opacity-90 leading-relaxed">
                    "Elevating email security and ROI through Deep Verification (MX & SMTP) "
                    "and real-time fraud prevention."
                </p>
            </div>
        </header>

        <div class="max-w-6xl mx-auto px-4 py-12 lg:py-16 grid grid-cols-1 gap-12">
            // Cost impact
            <section class="bg-card rounded-xl shadow-md p-8 border-l-8 border-pink-500">
                <h2 class="text-2xl font-bold mb-4">"The Real Cost of a Polluted List"</h2>
                <p class="text-muted-foreground text-lg mb-6">
                    "Disposable emails are the primary tool for freemium abuse, credit card "
                    "fraud, and marketing database inflation. A robust Disposable Email Checker "
                    "identifies these temporary inboxes instantly, protecting your bottom line."
                </p>

                <div class="grid grid-cols-1 lg:grid-cols-2 gap-8 items-center">
                    <DonutChart slices=vec![
                        ChartSlice { label: "Valid Contacts (Value)", value: 60.0, color: "#4F46E5" },
                        ChartSlice { label: "Disposable (Wasted Spend)", value: 20.0, color: "#DB2777" },
                        ChartSlice { label: "Hard Bounces (Risk)", value: 15.0, color: "#FCD34D" },
                        ChartSlice { label: "Spam Traps (Danger)", value: 5.0, color: "#EF4444" },
                    ]/>
                    <ul class="space-y-4">
                        <ValuePoint
                            icon="💰"
                            title="Marketing Waste:"
                            description="You pay your ESP (Email Service Provider) per contact. Storing 20% disposable emails means 20% wasted budget."
                        />
                        <ValuePoint
                            icon="🛡️"
                            title="Platform Abuse:"
                            description="Users creating multiple accounts with temp mails to exploit free trials or bypass bans."
                        />
                        <ValuePoint
                            icon="📉"
                            title="Sender Score:"
                            description="High bounce rates from expired temp emails trigger spam filters for your valid users."
                        />
                    </ul>
                </div>
            </section>

            // Deep verification comparison
            <section class="bg-card rounded-xl shadow-md p-6 border-t-4 border-indigo-500">
                <h2 class="text-2xl font-bold mb-4">"Beyond the @ Symbol"</h2>
                <p class="text-muted-foreground mb-6">
                    "Standard regex checks only look for \"@\" symbols. Deep Verification goes "
                    "layers deeper, validating the domain's ability to receive mail and the "
                    "specific user's existence."
                </p>
                <BarCompareChart
                    categories=vec!["Syntax", "Domain (MX)", "Mailbox (SMTP)"]
                    series=vec![
                        ChartSeries { label: "Basic Syntax Check", color: "#71717A", values: vec![100.0, 0.0, 0.0] },
                        ChartSeries { label: "Deep Verification", color: "#4F46E5", values: vec![100.0, 100.0, 95.0] },
                    ]
                    max_value=100.0
                    unit="% coverage"
                />
                <p class="text-sm text-muted-foreground mt-4 italic text-center">
                    "Comparison: Basic Syntax Check vs. Deep Verification."
                </p>
            </section>

            // SMTP handshake
            <section class="bg-card rounded-xl shadow-md p-6 border-t-4 border-cyan-500">
                <h2 class="text-2xl font-bold mb-4">"The Silent Handshake"</h2>
                <p class="text-muted-foreground mb-6">
                    "It initiates a real-time negotiation with the target mail server. This "
                    "\"Handshake\" confirms validity without ever sending a nuisance email to the user."
                </p>

                <div class="flex flex-col space-y-4 items-center justify-center p-4 bg-muted/30 rounded-lg">
                    <HandshakeStep label="RFC Compliance Check" detail="Syntax and formatting rules"/>
                    <span class="text-muted-foreground/50">"↓"</span>
                    <HandshakeStep label="MX Record Lookup" detail="Does the domain accept mail at all?"/>
                    <span class="text-muted-foreground/50">"↓"</span>
                    <HandshakeStep label="SMTP Negotiation" detail="Server confirms the mailbox exists"/>
                    <span class="text-muted-foreground/50">"↓"</span>
                    <HandshakeStep label="Verdict" detail="Deliverable, disposable, or risky"/>
                </div>
            </section>

            // CTA
            <section class="text-center">
                <h2 class="text-2xl font-bold mb-4">"Ready to Protect Your List?"</h2>
                <p class="text-muted-foreground mb-6 max-w-xl mx-auto">
                    "Start with a single free check, or grab an API key and wire deep "
                    "verification into your signup flow in minutes."
                </p>
                <div class="flex flex-col sm:flex-row gap-3 justify-center">
                    <a
                        href="/"
                        class="px-6 py-3 rounded-lg bg-primary text-primary-foreground font-medium hover:bg-primary/90 transition"
                    >
                        "Check an Email"
                    </a>
                    <a
                        href="/get-api-key"
                        class="px-6 py-3 rounded-lg border font-medium hover:bg-muted transition"
                    >
                        "Get a Free API Key"
                    </a>
                </div>
            </section>
        </div>
    }
}
