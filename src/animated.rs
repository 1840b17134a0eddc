use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo::render::{request_animation_frame, AnimationFrame};
use gloo::timers::callback::Timeout;
use portfolio_core::{CounterFrame, EasedCounter, Typewriter};
use yew::prelude::*;

fn schedule_typing_step(mut state: Typewriter, on_step: impl FnOnce(Typewriter) + 'static) -> Timeout {
    Timeout::new(state.delay_ms(), move || {
        state.tick();
        on_step(state);
    })
}

#[hook]
fn use_typewriter(phrases: &'static [&'static str]) -> Option<Typewriter> {
    let typewriter = use_state_eq(move || Typewriter::new(phrases.iter().copied()));
    {
        let typewriter = typewriter.clone();
        use_effect_with(phrases, move |phrases| {
            typewriter.set(Typewriter::new(phrases.iter().copied()));
            || ()
        });
    }
    {
        let handle = typewriter.clone();
        use_effect_with((*typewriter).clone(), move |state| {
            let timeout = state
                .clone()
                .map(|state| schedule_typing_step(state, move |next| handle.set(Some(next))));
            move || drop(timeout)
        });
    }
    (*typewriter).clone()
}

#[derive(Properties, PartialEq)]
pub(crate) struct TypingProps {
    pub(crate) phrases: &'static [&'static str],
}

/// One pending timeout at a time, cancelled when the state moves or the
/// component unmounts.
#[function_component(Typing)]
pub(crate) fn typing(props: &TypingProps) -> Html {
    let visible = use_typewriter(props.phrases)
        .map(|state| state.visible().to_string())
        .unwrap_or_default();
    html! {
        <span class="relative">
            <span class="bg-clip-text text-transparent bg-gradient-to-r from-sky-500 via-indigo-500 to-cyan-400">
                { visible }
            </span>
            <span class="ml-0.5 inline-block w-[2px] h-6 align-middle bg-cyan-400 animate-pulse rounded" />
        </span>
    }
}

fn frame_clock_now() -> f64 {
    web_sys::window()
        .and_then(|window| window.performance())
        .map(|performance| performance.now())
        .unwrap_or(0.0)
}

type FrameSlot = RefCell<Option<AnimationFrame>>;

/// Samples an `EasedCounter` on animation frames until it lands. Dropping
/// the run cancels the pending frame.
pub(crate) struct CounterRun {
    slot: Rc<FrameSlot>,
}

impl CounterRun {
    pub(crate) fn start(
        counter: Rc<RefCell<EasedCounter>>,
        on_frame: Rc<dyn Fn(CounterFrame)>,
    ) -> Self {
        let slot = Rc::new(RefCell::new(None));
        schedule_counter_frame(Rc::downgrade(&slot), counter, on_frame);
        Self { slot }
    }
}

impl Drop for CounterRun {
    fn drop(&mut self) {
        self.slot.borrow_mut().take();
    }
}

fn schedule_counter_frame(
    slot: Weak<FrameSlot>,
    counter: Rc<RefCell<EasedCounter>>,
    on_frame: Rc<dyn Fn(CounterFrame)>,
) {
    let Some(cell) = slot.upgrade() else {
        return;
    };
    let handle = request_animation_frame(move |timestamp| {
        let frame = counter.borrow_mut().sample(timestamp);
        on_frame(frame);
        if !frame.finished {
            schedule_counter_frame(slot, counter, on_frame);
        }
    });
    *cell.borrow_mut() = Some(handle);
}

#[hook]
fn use_eased_count(target: i64) -> i64 {
    let count = use_state_eq(|| 0i64);
    let counter = use_mut_ref(|| EasedCounter::new(target, frame_clock_now()));
    {
        let count = count.clone();
        use_effect_with(target, move |target| {
            counter.borrow_mut().retarget(*target, frame_clock_now());
            count.set(counter.borrow().current());
            let run = CounterRun::start(counter, Rc::new(move |frame: CounterFrame| count.set(frame.value)));
            move || drop(run)
        });
    }
    *count
}

#[derive(Properties, PartialEq)]
pub(crate) struct CounterProps {
    pub(crate) label: AttrValue,
    pub(crate) value: i64,
    #[prop_or_default]
    pub(crate) suffix: AttrValue,
}

#[function_component(Counter)]
pub(crate) fn counter(props: &CounterProps) -> Html {
    let count = use_eased_count(props.value);
    html! {
        <div class="rounded-2xl border border-slate-200 dark:border-slate-800 bg-white/60 dark:bg-slate-900/60 backdrop-blur p-5 shadow-sm">
            <div class="text-2xl font-semibold text-slate-900 dark:text-white">
                { format!("{count}{}", props.suffix) }
            </div>
            <div class="text-sm text-slate-600 dark:text-slate-300 mt-1">{ props.label.clone() }</div>
        </div>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use gloo::timers::future::TimeoutFuture;
    use std::cell::Cell;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn mount_root(id: &str) -> web_sys::Element {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .expect("document available");
        let root = document.create_element("div").expect("create test root");
        root.set_id(id);
        document
            .body()
            .expect("body available")
            .append_child(&root)
            .expect("append test root");
        root
    }

    fn leading_number(root: &web_sys::Element) -> i64 {
        let text = root.text_content().unwrap_or_default();
        let digits: String = text.chars().take_while(char::is_ascii_digit).collect();
        digits.parse().expect("counter renders a number first")
    }

    #[derive(Properties, PartialEq)]
    struct StatProps {
        value: i64,
    }

    #[function_component(Stat)]
    fn stat(props: &StatProps) -> Html {
        html! { <Counter label="Projects" value={props.value} /> }
    }

    #[wasm_bindgen_test(async)]
    async fn counter_lands_on_target() {
        console_error_panic_hook::set_once();
        let root = mount_root("counter-test-root");
        let _app = yew::Renderer::<Stat>::with_root_and_props(root.clone(), StatProps { value: 12 })
            .render();
        TimeoutFuture::new(1200).await;
        assert_eq!(leading_number(&root), 12);
    }

    #[wasm_bindgen_test(async)]
    async fn counter_restarts_when_value_changes() {
        console_error_panic_hook::set_once();
        let root = mount_root("counter-restart-root");
        let mut app =
            yew::Renderer::<Stat>::with_root_and_props(root.clone(), StatProps { value: 12 }).render();
        TimeoutFuture::new(1200).await;
        assert_eq!(leading_number(&root), 12);

        app.update(StatProps { value: 500 });
        TimeoutFuture::new(40).await;
        let early = leading_number(&root);
        assert!(early < 500, "expected a fresh run, saw {early}");

        TimeoutFuture::new(1200).await;
        assert_eq!(leading_number(&root), 500);
        app.destroy();
    }

    #[wasm_bindgen_test(async)]
    async fn counter_run_stops_after_drop() {
        console_error_panic_hook::set_once();
        let frames = Rc::new(Cell::new(0u32));
        let seen = frames.clone();
        let counter = Rc::new(RefCell::new(EasedCounter::new(1000, frame_clock_now())));
        let run = CounterRun::start(counter, Rc::new(move |_frame: CounterFrame| seen.set(seen.get() + 1)));
        TimeoutFuture::new(100).await;
        let before = frames.get();
        assert!(before >= 1, "expected at least one frame");

        drop(run);
        TimeoutFuture::new(100).await;
        assert_eq!(frames.get(), before);
    }

    #[wasm_bindgen_test(async)]
    async fn destroyed_counter_leaves_nothing_behind() {
        console_error_panic_hook::set_once();
        let root = mount_root("counter-destroy-root");
        let app =
            yew::Renderer::<Stat>::with_root_and_props(root.clone(), StatProps { value: 1000 }).render();
        TimeoutFuture::new(50).await;
        assert!(leading_number(&root) < 1000);

        app.destroy();
        TimeoutFuture::new(100).await;
        assert_eq!(root.child_element_count(), 0);
        assert_eq!(root.text_content().unwrap_or_default(), "");
    }

    #[wasm_bindgen_test(async)]
    async fn dropped_typing_step_never_fires() {
        console_error_panic_hook::set_once();
        let fired = Rc::new(Cell::new(false));
        let flag = fired.clone();
        let state = Typewriter::new(["Hi"]).expect("phrases");
        let step = schedule_typing_step(state, move |_next| flag.set(true));
        drop(step);
        TimeoutFuture::new(150).await;
        assert!(!fired.get());

        let kept = Rc::new(RefCell::new(None));
        let slot = kept.clone();
        let state = Typewriter::new(["Hi"]).expect("phrases");
        let _step = schedule_typing_step(state, move |next| *slot.borrow_mut() = Some(next));
        TimeoutFuture::new(150).await;
        let next = kept.borrow().clone().expect("step fired");
        assert_eq!(next.visible(), "H");
    }

    const PHRASES: &[&str] = &["Hi", "Yo"];

    #[function_component(HeroTyping)]
    fn hero_typing() -> Html {
        html! { <Typing phrases={PHRASES} /> }
    }

    #[wasm_bindgen_test(async)]
    async fn typing_reaches_full_phrase() {
        console_error_panic_hook::set_once();
        let root = mount_root("typing-test-root");
        let _app = yew::Renderer::<HeroTyping>::with_root(root.clone()).render();
        TimeoutFuture::new(200).await;
        let text = root.text_content().unwrap_or_default();
        assert!(["H", "Hi"].contains(&text.as_str()), "rendered {text:?}");
    }

    #[wasm_bindgen_test(async)]
    async fn destroyed_typing_stops_ticking() {
        console_error_panic_hook::set_once();
        let root = mount_root("typing-destroy-root");
        let app = yew::Renderer::<HeroTyping>::with_root(root.clone()).render();
        TimeoutFuture::new(100).await;
        let text = root.text_content().unwrap_or_default();
        assert!(["H", "Hi"].contains(&text.as_str()), "rendered {text:?}");

        app.destroy();
        TimeoutFuture::new(200).await;
        assert_eq!(root.child_element_count(), 0);
        assert_eq!(root.text_content().unwrap_or_default(), "");
    }
}
