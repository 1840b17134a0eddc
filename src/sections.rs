use std::rc::Rc;

use js_sys::Date;
use portfolio_core::content::{
    footer_line, Project, SkillGroup, SkillLevel, CERTIFICATIONS, DETAILS_PLACEHOLDER, EDUCATION,
    EXPERIENCE, PROFILE, PROJECTS, PROJECTS_SUBTITLE, SKILLS_SUBTITLE, SKILL_GROUPS,
};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry};
use yew::prelude::*;

const CARD_CLASS: &str = "rounded-2xl border border-slate-200 dark:border-slate-800 bg-white/70 dark:bg-slate-900/60 backdrop-blur p-6 shadow-sm";
const PILL_CLASS: &str = "inline-flex items-center gap-1 rounded-full px-3 py-1.5 text-xs font-medium border border-slate-300/60 dark:border-slate-700 hover:bg-slate-50 dark:hover:bg-slate-900 transition";

#[derive(Properties, PartialEq)]
pub(crate) struct SectionProps {
    pub(crate) id: AttrValue,
    #[prop_or_default]
    pub(crate) title: Option<AttrValue>,
    #[prop_or_default]
    pub(crate) subtitle: Option<AttrValue>,
    #[prop_or_default]
    pub(crate) children: Html,
}

#[function_component(Section)]
pub(crate) fn section(props: &SectionProps) -> Html {
    html! {
        <section id={props.id.clone()} class="scroll-mt-24 py-20 sm:py-28">
            <div class="mx-auto max-w-6xl px-4 sm:px-6">
                if let Some(title) = props.title.clone() {
                    <div class="mb-10">
                        <h2 class="text-2xl sm:text-3xl font-semibold tracking-tight text-slate-900 dark:text-white">
                            { title }
                        </h2>
                        if let Some(subtitle) = props.subtitle.clone() {
                            <p class="mt-2 text-slate-600 dark:text-slate-300">{ subtitle }</p>
                        }
                    </div>
                }
                { props.children.clone() }
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct ChipProps {
    pub(crate) label: AttrValue,
}

#[function_component(Chip)]
pub(crate) fn chip(props: &ChipProps) -> Html {
    html! {
        <span class="inline-flex items-center rounded-full border border-slate-200 dark:border-slate-700 bg-white/60 dark:bg-slate-900/60 backdrop-blur px-3 py-1 text-xs font-medium text-slate-700 dark:text-slate-200 shadow-sm">
            { props.label.clone() }
        </span>
    }
}

struct RevealWatcher {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl RevealWatcher {
    fn observe(element: &Element, on_visible: Rc<dyn Fn()>) -> Option<Self> {
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                let visible = entries.iter().any(|entry| {
                    entry
                        .dyn_into::<IntersectionObserverEntry>()
                        .map(|entry| entry.is_intersecting())
                        .unwrap_or(false)
                });
                if visible {
                    observer.disconnect();
                    on_visible();
                }
            },
        );
        let observer = IntersectionObserver::new(callback.as_ref().unchecked_ref()).ok()?;
        observer.observe(element);
        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for RevealWatcher {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

#[hook]
fn use_revealed_once(node: NodeRef) -> bool {
    let revealed = use_state_eq(|| false);
    {
        let revealed = revealed.clone();
        use_effect_with(node, move |node| {
            let on_visible: Rc<dyn Fn()> = Rc::new(move || revealed.set(true));
            let watcher = match node.cast::<Element>() {
                Some(element) => RevealWatcher::observe(&element, on_visible.clone()),
                None => None,
            };
            // No observer support: show the final state right away.
            if watcher.is_none() {
                on_visible();
            }
            move || drop(watcher)
        });
    }
    *revealed
}

#[derive(Properties, PartialEq)]
struct SkillBarProps {
    skill: SkillLevel,
}

#[function_component(SkillBar)]
fn skill_bar(props: &SkillBarProps) -> Html {
    let node = use_node_ref();
    let revealed = use_revealed_once(node.clone());
    let level = props.skill.level.min(100);
    let width = if revealed { level } else { 0 };
    html! {
        <div class="space-y-2">
            <div class="flex items-center justify-between text-sm">
                <span class="text-slate-700 dark:text-slate-200">{ props.skill.name }</span>
                <span class="text-slate-500 dark:text-slate-400">{ format!("{level}%") }</span>
            </div>
            <div ref={node} class="h-2 rounded-full bg-slate-200/70 dark:bg-slate-800 overflow-hidden">
                <div
                    class="h-full bg-gradient-to-r from-sky-500 via-indigo-500 to-cyan-400"
                    style={format!("width: {width}%; transition: width 0.8s ease-out;")}
                />
            </div>
        </div>
    }
}

fn skill_group_view(group: &SkillGroup) -> Html {
    html! {
        <div>
            <h3 class="text-sm font-semibold uppercase tracking-wider text-slate-500 dark:text-slate-400 mb-3">
                { group.title }
            </h3>
            <div class="flex flex-wrap gap-2 mb-4">
                { for group.chips.iter().map(|chip| html! { <Chip key={*chip} label={*chip} /> }) }
            </div>
            <div class="space-y-4">
                { for group.levels.iter().map(|skill| html! { <SkillBar key={skill.name} skill={*skill} /> }) }
            </div>
        </div>
    }
}

fn project_card(project: &Project) -> Html {
    let on_details = Callback::from(|_event: MouseEvent| {
        gloo::dialogs::alert(DETAILS_PLACEHOLDER);
    });
    html! {
        <div key={project.title} class="rounded-2xl border border-slate-200 dark:border-slate-800 bg-white/70 dark:bg-slate-900/60 backdrop-blur p-5 shadow-sm transition hover:-translate-y-1">
            <h3 class="text-lg font-semibold text-slate-900 dark:text-white">{ project.title }</h3>
            <p class="mt-1 text-sm text-slate-600 dark:text-slate-300">{ project.description }</p>
            <div class="mt-3 flex flex-wrap gap-2">
                { for project.stack.iter().map(|tech| html! { <Chip key={*tech} label={*tech} /> }) }
            </div>
            <div class="mt-4 flex gap-2">
                <a href={project.github} target="_blank" rel="noreferrer" class={PILL_CLASS}>
                    { "View on GitHub \u{2197}" }
                </a>
                <button type="button" class={PILL_CLASS} onclick={on_details}>{ "View Details" }</button>
            </div>
        </div>
    }
}

#[function_component(About)]
pub(crate) fn about() -> Html {
    html! {
        <Section id="about" title="About" subtitle={PROFILE.about_subtitle}>
            <div class="grid md:grid-cols-12 gap-8 items-start">
                <div class="md:col-span-8 space-y-4 text-slate-700 dark:text-slate-300 leading-relaxed">
                    { for PROFILE.about.iter().map(|paragraph| html! { <p>{ *paragraph }</p> }) }
                    <blockquote class="border-l-4 border-cyan-400 pl-4 italic text-slate-800 dark:text-slate-200">
                        { PROFILE.quote }
                    </blockquote>
                </div>
                <div class="md:col-span-4">
                    <div class="rounded-2xl border border-slate-200 dark:border-slate-800 bg-white/60 dark:bg-slate-900/60 backdrop-blur p-5 shadow-sm">
                        <div class="text-sm text-slate-600 dark:text-slate-300">{ "Quick Profile" }</div>
                        <div class="mt-3 grid grid-cols-2 gap-3 text-sm">
                            { for PROFILE.quick_profile.iter().map(|(key, value)| html! {
                                <>
                                    <div class="opacity-70">{ *key }</div>
                                    <div class="text-right">{ *value }</div>
                                </>
                            }) }
                        </div>
                    </div>
                </div>
            </div>
        </Section>
    }
}

#[function_component(Skills)]
pub(crate) fn skills() -> Html {
    let (left, right) = SKILL_GROUPS.split_at(SKILL_GROUPS.len().div_ceil(2));
    html! {
        <Section id="skills" title="Skills" subtitle={SKILLS_SUBTITLE}>
            <div class="grid md:grid-cols-2 gap-10">
                <div class="space-y-6">{ for left.iter().map(skill_group_view) }</div>
                <div class="space-y-6">{ for right.iter().map(skill_group_view) }</div>
            </div>
        </Section>
    }
}

#[function_component(Projects)]
pub(crate) fn projects() -> Html {
    html! {
        <Section id="projects" title="Projects" subtitle={PROJECTS_SUBTITLE}>
            <div class="grid sm:grid-cols-2 gap-6">
                { for PROJECTS.iter().map(project_card) }
            </div>
        </Section>
    }
}

#[function_component(ExperienceSection)]
pub(crate) fn experience_section() -> Html {
    html! {
        <Section id="experience" title="Experience">
            { for EXPERIENCE.iter().map(|entry| html! {
                <div class={CARD_CLASS}>
                    <div class="text-lg font-semibold text-slate-900 dark:text-white">{ entry.role }</div>
                    <div class="text-sm text-slate-500">{ entry.period }</div>
                    <ul class="mt-4 space-y-2 text-sm text-slate-700 dark:text-slate-300">
                        { for entry.highlights.iter().map(|item| html! { <li>{ format!("\u{2022} {item}") }</li> }) }
                    </ul>
                </div>
            }) }
        </Section>
    }
}

#[function_component(EducationSection)]
pub(crate) fn education_section() -> Html {
    html! {
        <Section id="education" title="Education">
            { for EDUCATION.iter().map(|entry| html! {
                <div class={CARD_CLASS}>
                    <div class="text-lg font-semibold text-slate-900 dark:text-white">{ entry.degree }</div>
                    <p class="mt-2 text-sm text-slate-700 dark:text-slate-300">{ entry.summary }</p>
                </div>
            }) }
        </Section>
    }
}

#[function_component(Certifications)]
pub(crate) fn certifications() -> Html {
    html! {
        <Section id="certifications" title="Certifications">
            <div class="grid sm:grid-cols-2 gap-6">
                { for CERTIFICATIONS.iter().map(|cert| html! {
                    <div class={CARD_CLASS}>
                        <div class="font-medium">{ cert.title }</div>
                        if let Some(note) = cert.note {
                            <div class="text-xs text-slate-500 mt-1">{ note }</div>
                        }
                    </div>
                }) }
            </div>
        </Section>
    }
}

#[function_component(Footer)]
pub(crate) fn footer() -> Html {
    let year = Date::new_0().get_full_year();
    html! {
        <footer class="py-10 text-center text-sm text-slate-500">{ footer_line(year) }</footer>
    }
}
