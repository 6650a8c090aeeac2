use super::*;
use crate::{
    content::{ContentHost, WindowContent},
    model::WindowId,
    reducer::DesktopAction,
    runtime_context::pointer_from_pointer_event,
};

fn stop_pointer_event(ev: &web_sys::PointerEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

#[component]
pub(super) fn DesktopWindow(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();

    let Some(initial) = runtime
        .runtime
        .with_untracked(|rt| rt.manager().window(&window_id).cloned())
    else {
        return ().into_view();
    };

    let window = {
        let window_id = window_id.clone();
        Signal::derive(move || {
            runtime
                .runtime
                .with(|rt| rt.manager().window(&window_id).cloned())
        })
    };
    let is_focused = {
        let window_id = window_id.clone();
        move || {
            runtime
                .runtime
                .with(|rt| rt.manager().focused_window_id() == Some(&window_id))
        }
    };
    let style = move || {
        window
            .get()
            .map(|w| {
                format!(
                    "left:{}px;top:{}px;z-index:{};",
                    w.position.x, w.position.y, w.z_order
                )
            })
            .unwrap_or_default()
    };

    let focus = {
        let window_id = window_id.clone();
        move |_: web_sys::PointerEvent| {
            let already_focused = runtime
                .runtime
                .with_untracked(|rt| rt.manager().focused_window_id() == Some(&window_id));
            if !already_focused {
                runtime.dispatch_action(DesktopAction::FocusWindow {
                    window_id: window_id.clone(),
                });
            }
        }
    };
    let begin_move = {
        let window_id = window_id.clone();
        move |ev: web_sys::PointerEvent| {
            if ev.pointer_type() == "mouse" && ev.button() != 0 {
                return;
            }
            if !ev.is_primary() {
                return;
            }
            ev.prevent_default();
            runtime.dispatch_action(DesktopAction::BeginMove {
                window_id: window_id.clone(),
                pointer: pointer_from_pointer_event(&ev),
            });
        }
    };
    let minimize = {
        let window_id = window_id.clone();
        move |_| {
            runtime.dispatch_action(DesktopAction::ToggleMinimize {
                window_id: window_id.clone(),
            })
        }
    };
    let close = {
        let window_id = window_id.clone();
        move |_| {
            runtime.dispatch_action(DesktopAction::CloseWindow {
                window_id: window_id.clone(),
            })
        }
    };

    let contents = match runtime
        .content
        .with_value(|host| host.render(&initial.app_id))
    {
        WindowContent::App(view) => view,
        WindowContent::Fallback { app_id } => render_fallback(&app_id),
    };

    view! {
        <section
            class=move || {
                if is_focused() {
                    "desktop-window focused"
                } else {
                    "desktop-window"
                }
            }
            style=style
            on:pointerdown=focus
            role="dialog"
            aria-label=initial.title.clone()
        >
            <header class="titlebar" on:pointerdown=begin_move>
                <span class="titlebar-title">{initial.title.clone()}</span>
                <div class="titlebar-controls">
                    <button
                        aria-label="Minimize window"
                        on:pointerdown=move |ev: web_sys::PointerEvent| stop_pointer_event(&ev)
                        on:click=minimize
                    >
                        "—"
                    </button>
                    <button
                        aria-label="Close window"
                        on:pointerdown=move |ev: web_sys::PointerEvent| stop_pointer_event(&ev)
                        on:click=close
                    >
                        "✕"
                    </button>
                </div>
            </header>
            <div class="window-body">{contents}</div>
        </section>
    }
    .into_view()
}
