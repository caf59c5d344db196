//! Root application component with routing and the theme context.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::profile::ProfilePage;
use crate::state::theme_context::{SITE_FOLLOW, ThemeContext};
use crate::util::document_theme::pre_paint_script;

/// HTML shell rendered on the server for SSR + hydration.
///
/// The document starts light; an inline head script applies the stored or
/// followed theme before first paint, and the hydrated theme session keeps
/// the attribute current afterwards.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" data-theme="light">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <script inner_html=pre_paint_script(SITE_FOLLOW)></script>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    ThemeContext::install();

    view! {
        <Stylesheet id="leptos" href="/pkg/linkpage.css"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=ProfilePage/>
            </Routes>
        </Router>
    }
}
