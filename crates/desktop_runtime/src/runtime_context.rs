//! Runtime provider and context wiring for the desktop shell.
//!
//! This module owns the long-lived [`DesktopRuntime`] signal and executes the
//! [`RuntimeEffect`]s it emits: external links and the global pointer listeners that exist only
//! while a drag gesture is active. UI composition stays in [`crate::components`].

use std::rc::Rc;

use leptos::leptos_dom::helpers::WindowListenerHandle;
use leptos::*;
use platform_host::{ExternalUrlService, PrefsStore};

use crate::{
    config::WindowManagerConfig,
    content::ContentRegistry,
    model::PointerPosition,
    reducer::{DesktopAction, DesktopRuntime, RuntimeEffect},
};

/// Global pointer listeners held for the duration of one drag gesture. Dropping removes them.
pub struct PointerListeners {
    handles: Vec<WindowListenerHandle>,
}

impl Drop for PointerListeners {
    fn drop(&mut self) {
        for handle in self.handles.drain(..) {
            handle.remove();
        }
    }
}

#[derive(Clone, Copy)]
/// Leptos context for reading runtime state and dispatching [`DesktopAction`] values.
pub struct DesktopRuntimeContext {
    /// Reactive window-manager runtime.
    pub runtime: RwSignal<DesktopRuntime>,
    /// Content rendered inside window bodies.
    pub content: StoredValue<Rc<ContentRegistry<View>>>,
    /// Host service used for external dock entries.
    pub external_urls: StoredValue<Rc<dyn ExternalUrlService>>,
    pointer_listeners: StoredValue<Option<PointerListeners>>,
}

impl DesktopRuntimeContext {
    /// Applies an action to the runtime and executes the effects it emits.
    pub fn dispatch_action(&self, action: DesktopAction) {
        let effects = self
            .runtime
            .try_update(|runtime| runtime.dispatch(action))
            .unwrap_or_default();
        for effect in effects {
            run_runtime_effect(*self, effect);
        }
    }
}

fn run_runtime_effect(runtime: DesktopRuntimeContext, effect: RuntimeEffect) {
    match effect {
        RuntimeEffect::OpenExternalUrl(url) => {
            open_external_url(runtime.external_urls.get_value().as_ref(), &url);
        }
        RuntimeEffect::AcquirePointerCapture(_) => {
            runtime
                .pointer_listeners
                .set_value(Some(install_pointer_listeners(runtime)));
        }
        RuntimeEffect::ReleasePointerCapture => runtime.pointer_listeners.set_value(None),
    }
}

/// Hands `url` to the host. Refusals (popup blockers, missing window) are logged and dropped.
fn open_external_url(service: &dyn ExternalUrlService, url: &str) -> bool {
    match service.open_url(url) {
        Ok(()) => true,
        Err(err) => {
            logging::warn!("open external url `{url}` failed: {err}");
            false
        }
    }
}

fn install_pointer_listeners(runtime: DesktopRuntimeContext) -> PointerListeners {
    let on_move = window_event_listener(ev::pointermove, move |ev: web_sys::PointerEvent| {
        runtime.dispatch_action(DesktopAction::UpdateMove {
            pointer: pointer_from_pointer_event(&ev),
        });
    });
    let on_up = window_event_listener(ev::pointerup, move |_| {
        runtime.dispatch_action(DesktopAction::EndMove);
    });
    let on_cancel = window_event_listener(ev::pointercancel, move |_| {
        runtime.dispatch_action(DesktopAction::EndMove);
    });
    PointerListeners {
        handles: vec![on_move, on_up, on_cancel],
    }
}

pub(crate) fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components and restores the persisted layout.
pub fn DesktopProvider(
    /// Overrides for stacking baseline, cascade placement, and storage keys.
    #[prop(optional)]
    config: Option<WindowManagerConfig>,
    children: Children,
) -> impl IntoView {
    let store: Rc<dyn PrefsStore> = Rc::new(platform_host_web::prefs_store());
    let external_urls: Rc<dyn ExternalUrlService> =
        Rc::new(platform_host_web::external_url_service());
    let desktop = DesktopRuntime::load(store, config.unwrap_or_default());

    let runtime = DesktopRuntimeContext {
        runtime: create_rw_signal(desktop),
        content: store_value(Rc::new(crate::components::builtin_content())),
        external_urls: store_value(external_urls),
        pointer_listeners: store_value(None),
    };

    provide_context(runtime);

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}

#[cfg(test)]
mod tests {
    use platform_host::{NoopExternalUrlService, RecordingExternalUrlService};
    use pretty_assertions::assert_eq;

    use super::*;

    struct BlockedPopups;

    impl ExternalUrlService for BlockedPopups {
        fn open_url(&self, _url: &str) -> Result<(), String> {
            Err("popup blocked".to_string())
        }
    }

    #[test]
    fn external_links_reach_the_host_service() {
        let service = RecordingExternalUrlService::default();
        let mut runtime = DesktopRuntime::load(
            Rc::new(platform_host::MemoryPrefsStore::default()),
            WindowManagerConfig::default(),
        );
        let effects = runtime.dispatch(DesktopAction::ActivateApp {
            app_id: "movie-night".to_string(),
        });
        for effect in effects {
            if let RuntimeEffect::OpenExternalUrl(url) = effect {
                assert!(open_external_url(&service, &url));
            }
        }
        assert_eq!(service.opened().len(), 1);
        assert!(service.opened()[0].starts_with("https://"));
    }

    #[test]
    fn refused_links_are_swallowed() {
        assert!(!open_external_url(&BlockedPopups, "https://example.com"));
        assert!(open_external_url(&NoopExternalUrlService, "https://example.com"));
    }
}
