use leptos::prelude::*;

use super::reveal::Reveal;
use crate::content::{Project, PROJECTS};

#[component]
fn ProjectCard(project: &'static Project, index: usize) -> impl IntoView {
    let is_left = index % 2 == 0;
    let (row, connector, card) = if is_left {
        (
            "relative flex items-center justify-start",
            "absolute top-1/2 h-px w-[calc(50%-2rem)] bg-gradient-to-r left-1/2 ml-4 from-primary/50 to-transparent hidden md:block",
            "relative w-full md:w-[calc(50%-3rem)] md:mr-auto hover:-translate-y-2 transition-transform duration-300",
        )
    } else {
        (
            "relative flex items-center justify-end",
            "absolute top-1/2 h-px w-[calc(50%-2rem)] bg-gradient-to-r right-1/2 mr-4 from-transparent to-primary/50 hidden md:block",
            "relative w-full md:w-[calc(50%-3rem)] md:ml-auto hover:-translate-y-2 transition-transform duration-300",
        )
    };
    let delay = index as u32 * 200;

    view! {
        <Reveal delay class="mb-16 md:mb-24">
            <div class=row>
                <div class="absolute left-1/2 -translate-x-1/2 w-4 h-4 rounded-full bg-primary shadow-neon z-10 hidden md:block">
                    <div class="absolute inset-0 rounded-full bg-primary/50 animate-ping"></div>
                </div>
                <div class=connector></div>

                <div class=card>
                    <div class="absolute -inset-4 bg-gradient-to-br from-primary to-accent opacity-10 blur-2xl rounded-3xl animate-pulse"></div>
                    <div class="relative glass rounded-3xl overflow-hidden border border-primary/20 hover:border-primary/40 hover:shadow-neon-sm transition-all duration-300 group">
                        <div class="relative h-48 md:h-56 overflow-hidden">
                            <img
                                src=project.image
                                alt=project.title
                                class="w-full h-full object-cover transition-transform duration-500 group-hover:scale-110"
                            />
                            <div class="absolute inset-0 bg-gradient-to-t from-card via-transparent to-transparent"></div>
                            <div class="absolute inset-0 bg-primary/10 backdrop-blur-sm flex items-center justify-center opacity-0 group-hover:opacity-100 transition-opacity">
                                <a
                                    href=project.code_url
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="glass rounded-full px-4 py-2 text-sm flex items-center gap-2"
                                >
                                    <i class="devicon-github-plain"></i>
                                    "Code"
                                </a>
                            </div>
                        </div>

                        <div class="p-6">
                            <h3 class="text-xl font-display font-semibold mb-2 group-hover:text-primary transition-colors">
                                {project.title}
                            </h3>
                            <p class="text-muted-foreground text-sm mb-4 line-clamp-2">
                                {project.description}
                            </p>
                            <div class="flex flex-wrap gap-2 mb-4">
                                {project
                                    .technologies
                                    .iter()
                                    .map(|tech| {
                                        view! {
                                            <span class="px-3 py-1 text-xs rounded-full bg-primary/10 text-primary border border-primary/20">
                                                {*tech}
                                            </span>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                            <div class="flex gap-3">
                                <a
                                    href=project.code_url
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="flex-1 rounded-xl border border-border px-3 py-2 text-sm flex items-center justify-center gap-2 hover:bg-muted transition-colors"
                                >
                                    <i class="devicon-github-plain"></i>
                                    "Code"
                                </a>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </Reveal>
    }
}

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section id="projects" class="py-24 md:py-32 relative overflow-hidden">
            <div class="section-container">
                <Reveal class="text-center mb-16">
                    <h2 class="text-4xl md:text-5xl font-display font-bold mb-4">
                        "Key " <span class="gradient-text">"Projects"</span>
                    </h2>
                    <p class="text-muted-foreground max-w-2xl mx-auto">
                        "A journey through some of my most impactful work"
                    </p>
                </Reveal>

                <div class="relative">
                    <div class="absolute left-1/2 -translate-x-1/2 top-0 h-full w-px bg-gradient-to-b from-primary via-primary/50 to-transparent hidden md:block"></div>
                    {PROJECTS
                        .iter()
                        .enumerate()
                        .map(|(index, project)| view! { <ProjectCard project index /> })
                        .collect_view()}

                    <Reveal class="flex justify-center">
                        <div class="glass rounded-full px-6 py-3 text-muted-foreground text-sm">
                            "More coming soon..."
                        </div>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}
