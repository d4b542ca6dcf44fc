use leptos::prelude::*;

use crate::portfolio::{NAV_ITEMS, OWNER_NAME};

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="fixed w-full bg-black/10 backdrop-blur-lg border-b border-white/10 z-50">
            <div class="container mx-auto px-6 py-4">
                <div class="flex items-center justify-between">
                    <a
                        href="#home"
                        class="text-2xl font-bold bg-gradient-to-r from-blue-400 to-green-400 bg-clip-text text-transparent animate-fade-in"
                    >
                        {OWNER_NAME}
                    </a>
                    <nav class="hidden md:flex space-x-8">
                        {NAV_ITEMS
                            .iter()
                            .map(|item| {
                                view! {
                                    <a
                                        href=format!("#{}", item.anchor)
                                        class="text-white/80 hover:text-green-400 cursor-pointer transition-colors duration-300"
                                    >
                                        {item.label}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </nav>
                </div>
            </div>
        </header>
    }
}
