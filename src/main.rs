mod animated;
mod app_router;
mod contact_form;
mod persisted_store;
mod scroll_runtime;
mod sections;
mod yew_app;

fn main() {
    yew::Renderer::<yew_app::App>::new().render();
}
