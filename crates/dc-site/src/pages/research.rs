//! Research article: the disposable email epidemic

use leptos::*;
use serde_json::json;

use dc_seo::OgType;

use crate::components::*;

fn article_schema() -> serde_json::Value {
    json!({
        "@context": "https://schema.org",
        "@type": "Article",
        "headline": "What Is a Disposable Email and How Do You Detect It?",
        "description": "A research-backed guide to disposable email abuse, sender reputation damage, and practical detection strategies.",
        "mainEntityOfPage": "https://disposablecheck.com/the-disposable-email-epidemic",
        "author": {
            "@type": "Organization",
            "name": "DisposableCheck",
        },
        "publisher": {
            "@type": "Organization",
            "name": "DisposableCheck",
            "logo": {
                "@type": "ImageObject",
                "url": "https://disposablecheck.com/logo.png",
            },
        },
        "image": "https://disposablecheck.com/og-image.png",
    })
}

fn faq_schema() -> serde_json::Value {
    json!({
        "@context": "https://schema.org",
        "@type": "FAQPage",
        "mainEntity": [
            {
                "@type": "Question",
                "name": "How accurate is a disposable email checker?",
                "acceptedAnswer": {
                    "@type": "Answer",
                    "text": "Real-time MX and SMTP verification significantly improves accuracy compared with static blocklists.",
                },
            },
            {
                "@type": "Question",
                "name": "Can I clean my existing list?",
                "acceptedAnswer": {
                    "@type": "Answer",
                    "text": "Yes. Bulk email checks can process historical CSV lists and identify disposable or invalid addresses.",
                },
            },
            {
                "@type": "Question",
                "name": "Why isn't regex enough?",
                "acceptedAnswer": {
                    "@type": "Answer",
                    "text": "Regex validates format only. It cannot confirm mailbox reachability or whether a domain is temporary.",
                },
            },
            {
                "@type": "Question",
                "name": "Does this help with sender reputation?",
                "acceptedAnswer": {
                    "@type": "Answer",
                    "text": "Yes. Blocking disposable and unreachable addresses lowers bounce rates and protects domain reputation.",
                },
            },
        ],
    })
}

#[component]
fn LifecycleStep(icon: &'static str, title: &'static str, caption: &'static str) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center">
            <div class="w-12 h-12 rounded-full bg-primary/10 flex items-center justify-center text-2xl mb-2">
                {icon}
            </div>
            <span class="font-semibold text-sm">{title}</span>
            <span class="text-xs text-muted-foreground">{caption}</span>
        </div>
    }
}

#[component]
fn RiskCard(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    accent: &'static str,
) -> impl IntoView {
    view! {
        <div class=format!(
            "bg-card p-6 rounded-xl shadow-sm hover:shadow-md transition-shadow border-l-4 {accent}"
        )>
            <div class="text-4xl mb-4">{icon}</div>
            <h3 class="font-bold text-lg mb-2">{title}</h3>
            <p class="text-sm text-muted-foreground">{description}</p>
        </div>
    }
}

#[component]
pub fn ResearchPage() -> impl IntoView {
    view! {
        <SeoHead
            title="What Is a Disposable Email and How Do You Detect It? | DisposableCheck"
            description="Learn what disposable emails are, why they hurt sender reputation, and how to detect temporary addresses before signup."
            og_type=OgType::Article
            schemas=vec![article_schema(), faq_schema()]
        />

        // Hero
        <header class="bg-gradient-to-br from-amber-600 to-orange-600 text-white py-16 lg:py-20 px-4">
            <div class="max-w-6xl mx-auto text-center">
                <div class="inline-block bg-white/20 backdrop-blur-sm px-4 py-1.5 rounded-full text-sm font-semibold mb-4">
                    "Research Report: Email Security"
                </div>
                <h1 class="text-3xl sm:text-4xl md:text-5xl font-extrabold mb-6 tracking-tight">
                    "What Is a Disposable Email and How Do You Detect It?"
                </h1>
                <p class="text-lg md:text-xl max-w-2xl mx-auto opacity-90 leading-relaxed">
                    "Why \"burn\" addresses are silently draining marketing budgets, "
                    "skewing analytics, and damaging sender reputation."
                </p>
            </div>
        </header>

        <div class="max-w-6xl mx-auto px-4 py-12 lg:py-16 grid grid-cols-1 gap-12">
            // Definition & lifecycle
            <section class="grid grid-cols-1 md:grid-cols-2 gap-8 items-center">
                <div>
                    <h2 class="text-3xl font-bold mb-4 border-l-4 border-primary pl-4">
                        "What is a Disposable Email?"
                    </h2>
                    <p class="text-muted-foreground mb-4 leading-relaxed">
                        "A Disposable Email Address (DEA) is a temporary mailbox created "
                        "instantly for a single purpose, usually to bypass registration "
                        "requirements without revealing a real identity."
                    </p>
                    <p class="text-muted-foreground leading-relaxed">
                        "While useful for user privacy, they are catastrophic for businesses. "
                        "A temporary email detector is crucial because these emails "
                        "self-destruct after a short period (10 minutes to a few days), "
                        "leaving your database filled with \"ghost\" users who never engage, "
                        "never buy, and bounce your future emails."
                    </p>
                </div>

                <div class="bg-card p-6 rounded-xl shadow-sm border">
                    <h3 class="text-center font-bold text-muted-foreground mb-6 uppercase text-xs tracking-wider">
                        "The Lifecycle of a Fake User"
                    </h3>
                    <div class="flex flex-col sm:flex-row items-center justify-between text-center gap-4">
                        <LifecycleStep icon="⚡" title="Created" caption="Instantly generated"/>
                        <span class="text-muted-foreground/50">"→"</span>
                        <LifecycleStep icon="🔓" title="Used" caption="Access content/trial"/>
                        <span class="text-muted-foreground/50">"→"</span>
                        <LifecycleStep icon="💣" title="Destroyed" caption="Bounces permanently"/>
                    </div>
                </div>
            </section>

            // List composition
            <section class="bg-card rounded-2xl shadow-sm p-6 lg:p-8 border-t-4 border-primary">
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-8 lg:gap-12">
                    <div>
                        <h2 class="text-2xl font-bold mb-4">"The Invisible Clutter"</h2>
                        <p class="text-muted-foreground mb-6">
                            "Research suggests that in unverified B2C signup lists, a significant "
                            "portion of users employ DEAs. This distorts your understanding of your "
                            "customer base. If 20% of your list is fake, your calculated conversion "
                            "rates are artificially depressed, leading to incorrect strategic decisions."
                        </p>
                        <div class="grid grid-cols-2 gap-4">
                            <div class="bg-muted p-4 rounded-lg text-center">
                                <span class="block text-3xl font-bold text-primary">"~28%"</span>
                                <span class="text-xs text-muted-foreground uppercase font-semibold">"B2C Abuse Rate"</span>
                            </div>
                            <div class="bg-muted p-4 rounded-lg text-center">
                                <span class="block text-3xl font-bold text-destructive">"0%"</span>
                                <span class="text-xs text-muted-foreground uppercase font-semibold">"LTV of DEA User"</span>
                            </div>
                        </div>
                    </div>

                    <div class="flex flex-col justify-center items-center w-full">
                        <h3 class="text-center font-semibold mb-4">"Typical Unverified List Composition"</h3>
                        <DonutChart slices=vec![
                            ChartSlice { label: "Valid Corporate/Personal", value: 70.0, color: "#D97706" },
                            ChartSlice { label: "Disposable (Temporary)", value: 25.0, color: "#DC2626" },
                            ChartSlice { label: "Spam Traps / Invalid", value: 5.0, color: "#71717A" },
                        ]/>
                        <p class="text-center text-xs text-muted-foreground mt-4">
                            "Source: Aggregated Industry Data Simulations"
                        </p>
                    </div>
                </div>
            </section>

            // Consequences
            <section>
                <div class="mb-8 text-center max-w-3xl mx-auto">
                    <h2 class="text-3xl font-bold mb-3">"The Cost of Inaction"</h2>
                    <p class="text-muted-foreground">
                        "Accepting disposable emails isn't just about \"dead leads.\" It actively "
                        "harms your infrastructure. Failing to detect disposable emails leads to "
                        "high bounce rates, signaling to Email Service Providers (Gmail, Outlook) "
                        "that you are a spammer."
                    </p>
                </div>

                <div class="grid grid-cols-1 lg:grid-cols-2 gap-6 lg:gap-8">
                    <div class="bg-card p-6 rounded-xl shadow-sm border">
                        <div class="mb-4">
                            <h3 class="text-xl font-bold">"Impact on Campaign Metrics"</h3>
                            <p class="text-sm text-muted-foreground">
                                "Comparing clean lists vs. lists polluted with DEAs."
                            </p>
                        </div>
                        <BarCompareChart
                            categories=vec!["Hard Bounce Rate", "Open Rate", "Click Through Rate"]
                            series=vec![
                                ChartSeries { label: "Clean List", color: "#D97706", values: vec![1.2, 28.0, 4.5] },
                                ChartSeries { label: "List with DEAs", color: "#DC2626", values: vec![12.5, 14.0, 1.8] },
                            ]
                            max_value=30.0
                            unit="%"
                        />
                    </div>

                    <div class="bg-card p-6 rounded-xl shadow-sm border">
                        <div class="mb-4">
                            <h3 class="text-xl font-bold">"Sender Reputation Decay"</h3>
                            <p class="text-sm text-muted-foreground">
                                "Sender score drops rapidly as hard bounce rates increase."
                            </p>
                        </div>
                        <LineChart
                            labels=vec!["Week 1", "Week 2", "Week 3", "Week 4", "Week 5", "Week 6"]
                            values=vec![98.0, 92.0, 85.0, 72.0, 60.0, 45.0]
                            min=40.0
                            max=100.0
                            color="#D97706"
                            threshold=80.0
                        />
                    </div>
                </div>
            </section>

            // Key risks
            <section class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6">
                <RiskCard
                    icon="💸"
                    title="Free Trial Abuse"
                    description="Users create infinite accounts to exploit \"New User\" coupons or free SaaS trials, driving up server costs with zero revenue."
                    accent="border-destructive"
                />
                <RiskCard
                    icon="📊"
                    title="Skewed Analytics"
                    description="Marketing teams optimize for \"signups\" rather than \"customers.\" DEAs inflate signup numbers, hiding the true acquisition cost."
                    accent="border-primary"
                />
                <RiskCard
                    icon="🛡️"
                    title="Security Vulnerabilities"
                    description="Malicious actors use DEAs to hide their tracks while testing credit cards, injecting scripts, or spamming your forums."
                    accent="border-accent"
                />
            </section>

            // Solution
            <section class="bg-card rounded-3xl p-8 lg:p-12 relative overflow-hidden border">
                <div class="relative z-10 grid grid-cols-1 lg:grid-cols-2 gap-12 items-center">
                    <div>
                        <h2 class="text-3xl font-bold mb-6">"Stop Them at the Gate"</h2>
                        <p class="text-muted-foreground mb-6 leading-relaxed">
                            "The only effective defense is real-time detection. You must identify if "
                            "an email domain belongs to a disposable provider before the user "
                            "completes registration."
                        </p>
                        <p class="text-muted-foreground mb-8">
                            "Manual blacklists fail because hundreds of new disposable domains are "
                            "created daily. You need an automated API that tracks these changes instantly."
                        </p>

                        <div class="bg-muted p-6 rounded-lg border">
                            <h4 class="font-semibold text-primary mb-2 text-sm uppercase">"Recommended Solution"</h4>
                            <p class="text-lg font-medium mb-4">"DisposableCheck API"</p>
                            <p class="text-sm text-muted-foreground mb-6">
                                "A robust, real-time API specifically designed to distinguish "
                                "legitimate users from temporary bots."
                            </p>
                            <a
                                href="/"
                                class="inline-flex items-center justify-center px-6 py-3 text-base font-medium rounded-md bg-primary text-primary-foreground hover:bg-primary/90 transition-colors"
                            >
                                "Try the Solution →"
                            </a>
                        </div>
                    </div>

                    <div class="bg-muted/50 p-6 rounded-xl border">
                        <h3 class="text-center font-semibold mb-4">"Effectiveness: Static Lists vs. API"</h3>
                        <BarCompareChart
                            categories=vec!["Detection Accuracy", "Update Speed", "Integration Ease"]
                            series=vec![
                                ChartSeries { label: "Static Blacklists", color: "#71717A", values: vec![60.0, 20.0, 50.0] },
                                ChartSeries { label: "Real-time API", color: "#D97706", values: vec![99.0, 95.0, 90.0] },
                            ]
                            max_value=100.0
                        />
                    </div>
                </div>
            </section>

            // FAQ
            <section class="bg-card rounded-2xl shadow-sm p-8 lg:p-12 border-t-4 border-secondary">
                <h2 class="text-3xl font-bold mb-8 text-center">"Common Questions About Email Security"</h2>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                    <div>
                        <h3 class="font-bold text-lg mb-2">"How accurate is a disposable email checker?"</h3>
                        <p class="text-muted-foreground text-sm mb-4">
                            "Modern APIs like DisposableCheck use real-time MX and SMTP verification "
                            "to prevent false positives. This is far more accurate than static lists "
                            "when you need to check disposable email address validity."
                        </p>
                        <h3 class="font-bold text-lg mb-2">"Can I clean my existing list?"</h3>
                        <p class="text-muted-foreground text-sm mb-4">
                            "Yes. The "
                            <a href="/bulk" class="text-primary hover:underline font-medium">"bulk check"</a>
                            " feature allows you to upload large CSV files and identify temporary "
                            "addresses in your historical data."
                        </p>
                    </div>
                    <div>
                        <h3 class="font-bold text-lg mb-2">"Why isn't regex enough?"</h3>
                        <p class="text-muted-foreground text-sm mb-4">
                            "Regex only checks formatting. It cannot detect disposable emails that "
                            "use custom domains or look legitimate. Only a dedicated temp mail "
                            "detector with deep network checks can catch these."
                        </p>
                        <h3 class="font-bold text-lg mb-2">"Does this help with sender reputation?"</h3>
                        <p class="text-muted-foreground text-sm mb-4">
                            "Absolutely. By blocking bounces before they happen, you protect your "
                            "domain's health. Learn more about the "
                            <a href="/value-proposition" class="text-primary hover:underline font-medium">"value proposition"</a>
                            " of deep verification."
                        </p>
                    </div>
                </div>
            </section>
        </div>
    }
}
