use leptos::prelude::*;

use super::reveal::Reveal;
use crate::content::SKILL_GROUPS;

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id="skills" class="py-24 md:py-32 relative">
            <div class="absolute inset-0 overflow-hidden pointer-events-none">
                <div class="absolute -top-1/2 -right-1/4 w-[800px] h-[800px] border border-border/10 rounded-full animate-spin-slow"></div>
                <div class="absolute -bottom-1/4 -left-1/4 w-[600px] h-[600px] border border-border/10 rounded-full animate-spin-slower"></div>
            </div>

            <div class="section-container relative z-10">
                <Reveal class="text-center mb-16">
                    <h2 class="text-4xl md:text-5xl font-display font-bold mb-4 text-foreground">
                        "My " <span class="gradient-text">"Skills"</span>
                    </h2>
                    <p class="text-muted-foreground max-w-2xl mx-auto">
                        "Technologies and tools I've mastered over the years"
                    </p>
                </Reveal>

                <div class="grid md:grid-cols-2 gap-8">
                    {SKILL_GROUPS
                        .iter()
                        .enumerate()
                        .map(|(index, group)| {
                            let delay = index as u32 * 150;
                            view! {
                                <Reveal
                                    delay
                                    class="glass rounded-3xl p-6 md:p-8 hover:border-primary/30"
                                >
                                    <div class="flex items-center gap-3 mb-6">
                                        <div class="p-3 rounded-2xl bg-muted/50 text-xl">
                                            {group.icon}
                                        </div>
                                        <h3 class="text-xl font-display font-semibold text-foreground">
                                            {group.label}
                                        </h3>
                                    </div>
                                    <div class="flex flex-wrap gap-3">
                                        {group
                                            .skills
                                            .iter()
                                            .map(|skill| {
                                                view! {
                                                    <div class="px-4 py-3 rounded-xl glass border border-border/50 hover:border-primary/50 hover:-translate-y-0.5 hover:scale-105 transition-all duration-300 cursor-default">
                                                        <div class="flex items-center justify-between gap-4">
                                                            <span class="text-foreground font-medium">
                                                                {skill.name}
                                                            </span>
                                                            <span class="text-xs text-muted-foreground bg-muted/50 px-2 py-1 rounded-full">
                                                                {format!("{}%", skill.level)}
                                                            </span>
                                                        </div>
                                                    </div>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
