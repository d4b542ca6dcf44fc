mod contact;
mod header;
mod homepage;
mod starfield;

use header::Header;
use homepage::HomePage;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};
use starfield::{Nebula, StarField};

use crate::portfolio::OWNER_NAME;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="scroll-smooth">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("{OWNER_NAME} - {title}") />
        <Meta name="description" content="Frontend developer portfolio" />

        <Router>
            <div class="relative min-h-screen overflow-hidden bg-[#020818] text-white">
                <StarField />
                <Nebula />
                <div class="relative z-10">
                    <Header />
                    <main>
                        <Routes fallback=|| "Page not found.".into_view()>
                            <Route path=path!("/") view=HomePage />
                        </Routes>
                    </main>
                </div>
            </div>
        </Router>
    }
}
