use leptos::*;
use leptos_meta::*;
use platform_host_web::build_host_services;
use theme_runtime::{use_theme, ThemeMode, ThemeProvider, PALETTE};

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Theme preferences" />
        <Meta name="color-scheme" content="light dark" />

        <ThemeProvider host_services=build_host_services()>
            <main class="site-root">
                <ThemeControls />
                <PaletteSwatches />
            </main>
        </ThemeProvider>
    }
}

#[component]
pub fn ThemeControls() -> impl IntoView {
    let theme = use_theme();
    let toggle_label = move || format!("Switch to {} mode", theme.theme.get().toggled());

    view! {
        <section class="theme-controls">
            <button
                type="button"
                class="theme-toggle"
                aria-pressed=move || theme.is_dark.get().to_string()
                on:click=move |_| {
                    if let Err(err) = theme.toggle_theme() {
                        logging::warn!("theme toggle failed: {err}");
                    }
                }
            >
                {toggle_label}
            </button>
            {[ThemeMode::Light, ThemeMode::Dark]
                .into_iter()
                .map(|mode| {
                    view! {
                        <button
                            type="button"
                            class="theme-mode"
                            class:selected=move || theme.theme.get() == mode
                            on:click=move |_| {
                                if let Err(err) = theme.set_theme(mode) {
                                    logging::warn!("theme change to `{mode}` failed: {err}");
                                }
                            }
                        >
                            {mode.as_str()}
                        </button>
                    }
                })
                .collect_view()}
        </section>
    }
}

#[component]
pub fn PaletteSwatches() -> impl IntoView {
    view! {
        <ul class="palette">
            {PALETTE
                .iter()
                .map(|entry| {
                    view! {
                        <li
                            class="palette-swatch"
                            title=entry.hex
                            style=format!("background-color:{};", entry.hex)
                        >
                            {entry.token}
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}
