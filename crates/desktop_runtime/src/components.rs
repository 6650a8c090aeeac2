//! Desktop shell UI composition: wallpaper, window layer, dock, and minimized tray.

mod taskbar;
mod window;

use leptos::*;

use self::{
    taskbar::{Dock, MinimizedTray, WallpaperPicker},
    window::DesktopWindow,
};
use crate::{
    apps,
    content::ContentRegistry,
    model::WindowDescriptor,
    runtime_context::use_desktop_runtime,
};

/// Content for every native registry entry. Each app's body is a plain panel; the mini
/// applications themselves live outside this crate.
pub(crate) fn builtin_content() -> ContentRegistry<View> {
    let mut content = ContentRegistry::default();
    for app_id in apps::native_app_ids() {
        content.register(app_id, move || {
            let title = apps::window_title_for(app_id);
            view! {
                <div class="app-panel" data-app-id=app_id>
                    <h2 class="app-panel-title">{title}</h2>
                </div>
            }
            .into_view()
        });
    }
    content
}

fn render_fallback(app_id: &str) -> View {
    view! {
        <div class="app-panel app-panel-fallback">
            <p>{format!("No content for this application ({app_id}).")}</p>
        </div>
    }
    .into_view()
}

#[component]
/// Full desktop surface. Must be mounted inside [`crate::DesktopProvider`].
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let visible = move || runtime.runtime.with(|rt| rt.manager().list_visible());
    let wallpaper_style = move || {
        runtime.runtime.with(|rt| {
            format!(
                "background-image: url('{}');",
                rt.wallpaper().current().src
            )
        })
    };

    view! {
        <div class="desktop-shell">
            <div class="desktop-wallpaper" style=wallpaper_style></div>
            <div class="desktop-window-layer">
                <For
                    each=visible
                    key=|win: &WindowDescriptor| win.id.clone()
                    children=move |win: WindowDescriptor| {
                        view! { <DesktopWindow window_id=win.id /> }
                    }
                />
            </div>
            <WallpaperPicker />
            <MinimizedTray />
            <Dock />
        </div>
    }
}
