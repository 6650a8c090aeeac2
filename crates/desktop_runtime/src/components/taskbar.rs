use super::*;
use crate::{reducer::DesktopAction, wallpaper};

#[component]
pub(super) fn Dock() -> impl IntoView {
    let runtime = use_desktop_runtime();

    view! {
        <nav class="dock" aria-label="Applications">
            {apps::dock_apps()
                .into_iter()
                .map(|app| {
                    let app_id = app.app_id;
                    view! {
                        <button
                            class="dock-item"
                            title=app.title
                            on:click=move |_| {
                                runtime.dispatch_action(DesktopAction::ActivateApp {
                                    app_id: app_id.to_string(),
                                })
                            }
                        >
                            <img class="dock-icon" src=app.icon alt=app.title />
                            <span class="dock-label">{app.title}</span>
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}

#[component]
pub(super) fn MinimizedTray() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let minimized = move || runtime.runtime.with(|rt| rt.manager().list_minimized());

    view! {
        <div class="minimized-tray" role="toolbar" aria-label="Minimized windows">
            <For
                each=minimized
                key=|win: &WindowDescriptor| win.id.clone()
                children=move |win: WindowDescriptor| {
                    let window_id = win.id.clone();
                    view! {
                        <button
                            class="tray-button"
                            on:click=move |_| {
                                runtime.dispatch_action(DesktopAction::ToggleMinimize {
                                    window_id: window_id.clone(),
                                })
                            }
                        >
                            {win.title}
                        </button>
                    }
                }
            />
        </div>
    }
}

#[component]
pub(super) fn WallpaperPicker() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let open = create_rw_signal(false);
    let current_id =
        move || runtime.runtime.with(|rt| rt.wallpaper().current().wallpaper_id);

    view! {
        <div class="wallpaper-picker">
            <button
                class="wallpaper-toggle"
                aria-expanded=move || open.get().to_string()
                on:click=move |_| open.update(|is_open| *is_open = !*is_open)
            >
                "Wallpapers"
            </button>
            <Show when=move || open.get()>
                <div class="wallpaper-panel" role="listbox" aria-label="Choose wallpaper">
                    {wallpaper::builtin_wallpapers()
                        .iter()
                        .map(|choice| {
                            let wallpaper_id = choice.wallpaper_id;
                            view! {
                                <button
                                    class="wall-thumb"
                                    role="option"
                                    aria-selected=move || (current_id() == wallpaper_id).to_string()
                                    on:click=move |_| {
                                        runtime.dispatch_action(DesktopAction::SetWallpaper {
                                            wallpaper_id: wallpaper_id.to_string(),
                                        });
                                        open.set(false);
                                    }
                                >
                                    <img src=choice.src alt=choice.title />
                                    <span class="wall-thumb-label">{choice.title}</span>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}
