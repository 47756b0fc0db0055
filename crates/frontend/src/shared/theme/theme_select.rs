use super::{use_theme, Theme};
use leptos::prelude::*;

/// ThemeSelect component for switching visual variants
#[component]
pub fn ThemeSelect() -> impl IntoView {
    let ctx = use_theme();
    let is_open = RwSignal::new(false);

    let toggle_dropdown = move |_| {
        is_open.update(|v| *v = !*v);
    };

    view! {
        <div class="theme-select-wrapper">
            <button class="button button--ghost button--small" on:click=toggle_dropdown>
                "Theme"
            </button>

            <Show when=move || is_open.get()>
                <div class="theme-dropdown">
                    <For
                        each=|| Theme::all()
                        key=|theme| theme.as_str()
                        children=move |theme| {
                            let is_active = move || ctx.get_theme() == theme;

                            view! {
                                <button
                                    class=move || {
                                        if is_active() {
                                            "theme-dropdown__item theme-dropdown__item--active"
                                        } else {
                                            "theme-dropdown__item"
                                        }
                                    }
                                    on:click=move |_| {
                                        ctx.set_theme(theme);
                                        is_open.set(false);
                                    }
                                >
                                    {theme.display_name()}
                                </button>
                            }
                        }
                    />
                </div>
            </Show>
        </div>
    }
}
