use desktop_runtime::{DesktopProvider, DesktopShell};
use leptos::*;

#[component]
pub fn SiteApp() -> impl IntoView {
    view! {
        <main class="site-root">
            <DesktopProvider>
                <DesktopShell />
            </DesktopProvider>
        </main>
    }
}
