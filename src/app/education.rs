use leptos::prelude::*;

use super::reveal::Reveal;
use crate::content::{Status, ACHIEVEMENTS, EDUCATION};

#[component]
pub fn Education() -> impl IntoView {
    view! {
        <section id="education" class="relative py-24 md:py-32 overflow-hidden">
            <div class="absolute top-0 right-0 w-[600px] h-[600px] bg-neon-cyan/5 rounded-full blur-[150px]"></div>
            <div class="absolute bottom-0 left-0 w-[400px] h-[400px] bg-neon-magenta/5 rounded-full blur-[100px]"></div>

            <div class="container mx-auto px-6">
                <Reveal class="text-center mb-16">
                    <p class="text-neon-magenta text-sm font-medium tracking-widest uppercase mb-4">
                        "Learning Journey"
                    </p>
                    <h2 class="font-display text-4xl md:text-5xl font-bold">
                        "Education & " <span class="text-glow-magenta">"Achievements"</span>
                    </h2>
                </Reveal>

                <div class="grid lg:grid-cols-2 gap-12">
                    <div class="space-y-6">
                        <h3 class="text-xl font-semibold flex items-center gap-2 mb-8">
                            "🎓 Education"
                        </h3>
                        <div class="relative">
                            <div class="absolute left-6 top-0 bottom-0 w-px bg-gradient-to-b from-neon-cyan via-neon-magenta to-neon-violet"></div>
                            {EDUCATION
                                .iter()
                                .enumerate()
                                .map(|(index, item)| {
                                    let badge = match item.status {
                                        Status::Pursuing => {
                                            "inline-block px-2 py-0.5 text-xs font-medium rounded-full mb-2 bg-neon-cyan/20 text-neon-cyan"
                                        }
                                        Status::Completed => {
                                            "inline-block px-2 py-0.5 text-xs font-medium rounded-full mb-2 bg-muted text-muted-foreground"
                                        }
                                    };
                                    let delay = 300 + index as u32 * 150;
                                    view! {
                                        <Reveal
                                            delay
                                            class="relative pl-16 pb-8 last:pb-0"
                                        >
                                            <div class="absolute left-3 w-6 h-6 rounded-full glass border-2 border-neon-cyan shadow-neon-sm flex items-center justify-center hover:scale-125 transition-transform">
                                                <div class="w-2 h-2 rounded-full bg-neon-cyan"></div>
                                            </div>
                                            <div class="glass rounded-2xl p-6 border border-border/50 hover:border-neon-cyan/30 hover:-translate-y-0.5 transition-all">
                                                <div class="flex items-start gap-4">
                                                    <div class="p-3 rounded-xl bg-neon-cyan/10 text-xl">
                                                        {item.icon}
                                                    </div>
                                                    <div class="flex-1">
                                                        <span class=badge>{item.status.label()}</span>
                                                        <h4 class="font-semibold text-lg mb-1">{item.title}</h4>
                                                        <p class="text-muted-foreground text-sm">
                                                            {item.institution}
                                                        </p>
                                                    </div>
                                                </div>
                                            </div>
                                        </Reveal>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div class="space-y-6">
                        <h3 class="text-xl font-semibold flex items-center gap-3 mb-8">
                            "🏆 Events & Achievements"
                        </h3>
                        <div class="space-y-4">
                            {ACHIEVEMENTS
                                .iter()
                                .enumerate()
                                .map(|(index, title)| {
                                    let delay = 500 + index as u32 * 150;
                                    view! {
                                        <Reveal
                                            delay
                                            class="glass rounded-2xl p-6 border border-border/50 hover:border-neon-magenta/30 group"
                                        >
                                            <div class="flex items-center gap-4">
                                                <div class="p-3 rounded-xl bg-neon-magenta/10 group-hover:bg-neon-magenta/20 transition-colors animate-wiggle text-xl">
                                                    "🏅"
                                                </div>
                                                <p class="font-medium">{*title}</p>
                                            </div>
                                        </Reveal>
                                    }
                                })
                                .collect_view()}
                        </div>

                        <Reveal
                            delay=800
                            class="mt-8 p-6 rounded-2xl bg-gradient-to-r from-neon-cyan/10 via-neon-magenta/10 to-neon-violet/10 border border-border/30"
                        >
                            <p class="text-center text-muted-foreground italic">
                                "\"Continuous learning is the minimum requirement for success in any field.\""
                            </p>
                        </Reveal>
                    </div>
                </div>
            </div>
        </section>
    }
}
