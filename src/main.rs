use yew::prelude::*;

use theme_switch::components::ThemeToggle;
use theme_switch::hooks::use_theme::use_theme_controller;

#[function_component(App)]
fn app() -> Html {
    // One controller for the page; it wires the toggle rendered below
    let _controller = use_theme_controller();

    html! {
        <div class="app-container">
            <header class="app-header">
                <h1>{"Theme Switch"}</h1>
                <ThemeToggle />
            </header>

            <main class="app-main">
                <p>
                    {"The toggle flips between light and dark. The choice is remembered \
                      across visits and follows your system setting when it changes."}
                </p>
            </main>

            <style>
                {include_str!("style.css")}
            </style>
        </div>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        gloo::console::warn!(&format!("Logger already initialised: {e}"));
    }
    yew::Renderer::<App>::new().render();
}
