use leptos::prelude::*;
use leptos_meta::Title;

use super::contact::ContactSection;
use crate::portfolio::{
    ABOUT_CARDS, ADDITIONAL_SKILLS, CV_PATH, HEADLINE, OWNER_NAME, PROJECTS, SKILL_GROUPS, TAGLINE,
    TECH_ICONS,
};

const BUILD_TIME: &str = env!("BUILD_TIME");

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <Hero />
        <About />
        <Skills />
        <Projects />
        <ContactSection />
        <Footer />
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section id="home" class="h-screen flex items-center justify-center px-4">
            <div class="text-center relative z-10 animate-fade-in">
                <h1 class="text-5xl md:text-7xl font-bold mb-6 bg-gradient-to-r from-blue-400 via-green-300 to-blue-500 bg-clip-text text-transparent">
                    {HEADLINE}
                </h1>
                <p class="text-xl text-blue-200 mb-8">{TAGLINE}</p>
                <div class="flex justify-center space-x-4">
                    <a
                        href="#projects"
                        class="px-8 py-3 bg-gradient-to-r from-blue-500 to-green-400 rounded-full text-white font-semibold hover:from-blue-600 hover:to-green-500 transition-all duration-200 shadow-lg hover:shadow-xl hover:scale-105"
                    >
                        "Explore My Work"
                    </a>
                    <a
                        href=CV_PATH
                        download=""
                        class="px-8 py-3 bg-gradient-to-r from-blue-400/10 to-green-400/10 rounded-full text-white font-semibold hover:from-blue-400/20 hover:to-green-400/20 transition-all duration-200 border border-blue-400/30 hover:border-green-400/30 flex items-center space-x-2 backdrop-blur-sm hover:scale-105"
                    >
                        <span aria-hidden="true">"⭳"</span>
                        <span>"Download CV"</span>
                    </a>
                </div>
            </div>
        </section>
    }
}

#[component]
fn About() -> impl IntoView {
    view! {
        <section id="about" class="min-h-screen py-20 relative">
            <div class="container mx-auto px-6">
                <div class="max-w-4xl mx-auto section-content">
                    <SectionTitle text="About Me" />
                    <div class="grid md:grid-cols-2 gap-8">
                        {ABOUT_CARDS
                            .iter()
                            .map(|card| {
                                view! {
                                    <div class="bg-black/30 p-8 rounded-2xl backdrop-blur-xl border border-white/10 shadow-xl hover:scale-[1.02] transition-transform">
                                        <h3 class=format!(
                                            "text-2xl font-semibold mb-4 {}",
                                            card.accent,
                                        )>{card.title}</h3>
                                        <p class="text-gray-300 leading-relaxed">{card.body}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div class="mt-12 flex flex-wrap justify-center gap-8">
                        {TECH_ICONS
                            .iter()
                            .map(|(icon, color)| {
                                view! {
                                    <div class=format!(
                                        "{color} text-4xl transition-all duration-300 hover:scale-125 hover:rotate-6",
                                    )>
                                        <i class=*icon></i>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Skills() -> impl IntoView {
    view! {
        <section id="skills" class="min-h-screen py-20 relative">
            <div class="container mx-auto px-6">
                <div class="max-w-4xl mx-auto section-content">
                    <SectionTitle text="Skills & Expertise" />
                    <div class="grid md:grid-cols-2 gap-8">
                        {SKILL_GROUPS
                            .iter()
                            .map(|group| {
                                view! {
                                    <div class="bg-black/30 p-8 rounded-2xl backdrop-blur-xl border border-white/10">
                                        <h3 class=format!(
                                            "text-2xl font-semibold mb-6 {}",
                                            group.accent,
                                        )>{group.title}</h3>
                                        <div class="space-y-4">
                                            {group
                                                .skills
                                                .iter()
                                                .map(|skill| {
                                                    view! {
                                                        <div>
                                                            <div class="flex justify-between mb-1">
                                                                <span class="text-gray-300">{skill.name}</span>
                                                                <span class="text-green-400">
                                                                    {format!("{}%", skill.level)}
                                                                </span>
                                                            </div>
                                                            <div class="h-2 bg-black/50 rounded-full overflow-hidden">
                                                                <div
                                                                    class="h-full bg-gradient-to-r from-blue-500 to-green-400 rounded-full"
                                                                    style=format!("width: {}%;", skill.level)
                                                                ></div>
                                                            </div>
                                                        </div>
                                                    }
                                                })
                                                .collect_view()}
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div class="mt-12">
                        <h3 class="text-2xl font-semibold text-center bg-gradient-to-r from-blue-400 to-green-400 bg-clip-text text-transparent mb-6">
                            "Additional Skills"
                        </h3>
                        <div class="flex flex-wrap justify-center gap-4">
                            {ADDITIONAL_SKILLS
                                .iter()
                                .map(|skill| {
                                    view! {
                                        <span class="px-4 py-2 rounded-full bg-black/30 border border-white/10 text-gray-300 hover:text-white transition-colors">
                                            {*skill}
                                        </span>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Projects() -> impl IntoView {
    view! {
        <section id="projects" class="min-h-screen py-20 relative">
            <div class="container mx-auto px-6">
                <SectionTitle text="My Projects" />
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8 section-content">
                    {PROJECTS
                        .iter()
                        .map(|project| {
                            view! {
                                <article class="bg-black/30 rounded-2xl overflow-hidden backdrop-blur-xl border border-white/10 hover:scale-[1.02] transition-transform">
                                    <div class="flex">
                                        {project
                                            .images
                                            .iter()
                                            .map(|img| {
                                                view! {
                                                    <img
                                                        src=img.src
                                                        alt=img.alt
                                                        loading="lazy"
                                                        class="w-full h-48 object-cover"
                                                    />
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                    <div class="p-6">
                                        <h3 class="text-xl font-semibold text-white mb-2">
                                            {project.title}
                                        </h3>
                                        <p class="text-gray-300 mb-4">{project.description}</p>
                                        <div class="flex flex-wrap gap-2">
                                            {project
                                                .tags
                                                .iter()
                                                .map(|tag| {
                                                    view! {
                                                        <span class="px-3 py-1 text-sm rounded-full bg-blue-500/20 text-blue-300">
                                                            {*tag}
                                                        </span>
                                                    }
                                                })
                                                .collect_view()}
                                        </div>
                                    </div>
                                </article>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn SectionTitle(text: &'static str) -> impl IntoView {
    view! {
        <h2 class="text-4xl font-bold text-center bg-gradient-to-r from-blue-400 to-green-400 bg-clip-text text-transparent mb-12">
            {text}
        </h2>
    }
}

#[component]
fn Footer() -> impl IntoView {
    // BUILD_TIME is RFC 3339, keep the date part
    let built = BUILD_TIME.get(..10).unwrap_or(BUILD_TIME);
    view! {
        <footer class="relative z-10 py-8 text-center text-sm text-gray-500 border-t border-white/10">
            {format!("© {OWNER_NAME} · built {built}")}
        </footer>
    }
}
