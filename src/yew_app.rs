use portfolio_core::content::{contact_link, LinkKind, CONTACT_SUBTITLE, PROFILE, RESUME_PATH, STATS};
use portfolio_core::{ScrollFrame, CONTACT_SECTION, HERO_SECTION, NAV_ITEMS};
use yew::prelude::*;

use crate::animated::{Counter, Typing};
use crate::app_router::{follow_location_hash, scroll_to_section, scroll_to_top};
use crate::contact_form::ContactSection;
use crate::persisted_store::load_page_theme;
use crate::scroll_runtime::use_scroll_progress;
use crate::sections::{
    About, Certifications, EducationSection, ExperienceSection, Footer, Projects, Section, Skills,
};

const NAV_BUTTON_CLASS: &str = "px-3 py-2 text-sm rounded-full hover:bg-slate-100 dark:hover:bg-slate-900 transition";
const GHOST_BUTTON_CLASS: &str = "inline-flex items-center gap-2 rounded-full px-4 py-2.5 text-sm font-medium border border-slate-300/60 dark:border-slate-700 hover:bg-slate-50 dark:hover:bg-slate-900 transition";

fn scroll_callback(id: &'static str) -> Callback<MouseEvent> {
    Callback::from(move |_event: MouseEvent| scroll_to_section(id))
}

#[derive(Properties, PartialEq)]
struct HeaderProps {
    dark: bool,
    progress: f64,
    on_toggle_theme: Callback<MouseEvent>,
}

#[function_component(Header)]
fn header(props: &HeaderProps) -> Html {
    let toggle_icon = if props.dark { "\u{1f31e}" } else { "\u{1f319}" };
    html! {
        <header class="fixed inset-x-0 top-0 z-50">
            <div class="backdrop-blur supports-[backdrop-filter]:bg-white/60 dark:supports-[backdrop-filter]:bg-slate-950/50 border-b border-slate-200/60 dark:border-slate-800">
                <nav class="mx-auto max-w-6xl px-4 sm:px-6 h-16 flex items-center justify-between">
                    <button
                        type="button"
                        class="font-semibold tracking-tight text-slate-900 dark:text-white"
                        onclick={scroll_callback(HERO_SECTION)}
                    >
                        { PROFILE.name }
                    </button>
                    <div class="hidden md:flex items-center gap-1">
                        { for NAV_ITEMS.iter().map(|item| html! {
                            <button
                                key={item.id}
                                type="button"
                                class={NAV_BUTTON_CLASS}
                                onclick={scroll_callback(item.id)}
                            >
                                { item.label }
                            </button>
                        }) }
                    </div>
                    <div class="flex items-center gap-2">
                        <a href={RESUME_PATH} class="hidden sm:inline-flex items-center gap-2 rounded-full px-4 py-2 text-sm font-medium bg-gradient-to-r from-sky-600 to-cyan-500 text-white shadow hover:shadow-md transition">
                            { "Resume" }
                        </a>
                        <button
                            type="button"
                            aria-label="Toggle theme"
                            class="rounded-full p-2 hover:bg-slate-100 dark:hover:bg-slate-900 transition"
                            onclick={props.on_toggle_theme.clone()}
                        >
                            { toggle_icon }
                        </button>
                    </div>
                </nav>
                <div
                    class="h-0.5 origin-left bg-gradient-to-r from-sky-500 via-indigo-500 to-cyan-400"
                    style={format!("transform: scaleX({:.4});", props.progress)}
                />
            </div>
        </header>
    }
}

#[function_component(GradientBackdrop)]
fn gradient_backdrop() -> Html {
    html! {
        <div aria-hidden="true" class="pointer-events-none fixed inset-0 -z-10">
            <div class="absolute inset-0 bg-[radial-gradient(1000px_800px_at_10%_-10%,rgba(56,189,248,0.15),transparent),radial-gradient(800px_600px_at_90%_10%,rgba(99,102,241,0.14),transparent),radial-gradient(600px_500px_at_50%_110%,rgba(59,130,246,0.12),transparent)]" />
            <div class="absolute inset-0 bg-gradient-to-b from-white to-white/60 dark:from-slate-950 dark:to-slate-950/60" />
        </div>
    }
}

#[function_component(Hero)]
fn hero() -> Html {
    let github = contact_link(LinkKind::Github).map(|link| link.href).unwrap_or("#");
    let linkedin = contact_link(LinkKind::Linkedin).map(|link| link.href).unwrap_or("#");
    html! {
        <section id={HERO_SECTION} class="relative pt-28 sm:pt-36 pb-16">
            <div class="mx-auto max-w-6xl px-4 sm:px-6">
                <h1 class="hero-rise text-4xl sm:text-6xl font-semibold tracking-tight text-slate-900 dark:text-white">
                    { PROFILE.name }
                </h1>
                <div class="mt-4 text-xl sm:text-2xl text-slate-700 dark:text-slate-300 min-h-[2.5rem]">
                    <Typing phrases={PROFILE.tagline_phrases} />
                </div>
                <p class="mt-6 max-w-2xl text-slate-600 dark:text-slate-300 leading-relaxed">
                    { PROFILE.blurb }
                </p>
                <div class="mt-8 flex flex-wrap gap-3">
                    <a href={RESUME_PATH} class="inline-flex items-center gap-2 rounded-full px-4 py-2.5 text-sm font-medium bg-gradient-to-r from-sky-600 to-cyan-500 text-white shadow hover:shadow-md transition">
                        { "Download Resume" }
                    </a>
                    <button type="button" class={GHOST_BUTTON_CLASS} onclick={scroll_callback(CONTACT_SECTION)}>
                        { "Let's Connect" }
                    </button>
                    <a href={github} target="_blank" rel="noreferrer" class={GHOST_BUTTON_CLASS}>
                        { "GitHub" }
                    </a>
                    <a href={linkedin} target="_blank" rel="noreferrer" class={GHOST_BUTTON_CLASS}>
                        { "LinkedIn" }
                    </a>
                </div>
                <div class="mt-12 grid grid-cols-2 sm:grid-cols-4 gap-4">
                    { for STATS.iter().map(|stat| html! {
                        <Counter key={stat.label} label={stat.label} value={stat.value} suffix={stat.suffix} />
                    }) }
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct BackToTopProps {
    frame: ScrollFrame,
}

#[function_component(BackToTop)]
fn back_to_top(props: &BackToTopProps) -> Html {
    let onclick = Callback::from(|_event: MouseEvent| scroll_to_top());
    let visibility = if props.frame.show_back_to_top {
        "opacity-100 translate-y-0"
    } else {
        "opacity-0 translate-y-4 pointer-events-none"
    };
    html! {
        <button
            type="button"
            aria-label="Back to top"
            class={classes!(
                "fixed", "bottom-6", "right-6", "z-40", "rounded-full", "p-3", "shadow-lg",
                "bg-gradient-to-r", "from-sky-600", "to-cyan-500", "text-white", "transition",
                visibility
            )}
            {onclick}
        >
            { "\u{2191}" }
        </button>
    }
}

#[function_component(App)]
pub(crate) fn app() -> Html {
    let theme = use_mut_ref(load_page_theme);
    let dark = use_state_eq(|| theme.borrow().current().is_dark());
    let scroll = use_scroll_progress();

    use_effect_with((), |_| {
        follow_location_hash();
        || ()
    });

    let on_toggle_theme = {
        let theme = theme.clone();
        let dark = dark.clone();
        Callback::from(move |_event: MouseEvent| {
            let mut store = theme.borrow_mut();
            match store.toggle() {
                Ok(next) => dark.set(next.is_dark()),
                Err(err) => {
                    gloo::console::warn!("theme toggle not persisted", err);
                    dark.set(store.current().is_dark());
                }
            }
        })
    };

    html! {
        <div class="relative min-h-screen text-slate-800 dark:text-slate-200">
            <GradientBackdrop />
            <Header dark={*dark} progress={scroll.bar_scale} {on_toggle_theme} />
            <main>
                <Hero />
                <About />
                <Skills />
                <Projects />
                <ExperienceSection />
                <EducationSection />
                <Certifications />
                <Section id={CONTACT_SECTION} title="Contact" subtitle={CONTACT_SUBTITLE}>
                    <ContactSection />
                </Section>
            </main>
            <Footer />
            <BackToTop frame={scroll} />
        </div>
    }
}
