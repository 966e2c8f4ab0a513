use leptos::prelude::*;

use super::reveal::Reveal;
use crate::content::{COMPETENCIES, PORTRAIT_PATH, STATS};

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="py-24 md:py-32 relative">
            <div class="section-container">
                <Reveal class="text-center mb-16">
                    <h2 class="text-4xl md:text-5xl font-display font-bold mb-4">
                        "About " <span class="gradient-text">"Me"</span>
                    </h2>
                    <p class="text-muted-foreground max-w-2xl mx-auto">
                        "Passionate about creating impactful digital solutions"
                    </p>
                </Reveal>

                <div class="grid lg:grid-cols-2 gap-12 lg:gap-20 items-center">
                    <Reveal delay=300 class="relative">
                        <div class="relative mx-auto w-72 h-72 md:w-96 md:h-96">
                            <div class="absolute inset-0 rounded-3xl border-2 border-dashed border-neon-cyan/30 animate-spin-slow"></div>
                            <div class="absolute inset-4 rounded-2xl glass border border-neon-cyan/20 overflow-hidden">
                                <img
                                    src=PORTRAIT_PATH
                                    alt="Portrait"
                                    class="w-full h-full object-cover"
                                />
                            </div>
                            <div class="absolute -top-4 -right-4 glass px-4 py-2 rounded-xl border border-neon-cyan/30 animate-float">
                                <span class="text-sm">"📍 Sri Lanka"</span>
                            </div>
                            <div class="absolute -bottom-4 -left-4 glass px-4 py-2 rounded-xl border border-neon-magenta/30 animate-float-slow">
                                <span class="text-sm">"🏆 Award Winner"</span>
                            </div>
                        </div>
                    </Reveal>

                    <Reveal delay=400>
                        <div class="space-y-6">
                            <p class="text-lg text-muted-foreground leading-relaxed">
                                "I am a dedicated Software Engineer with experience in developing full-stack web applications, solving real-world problems, and building clean, scalable systems. I enjoy turning ideas into functional products using modern tools, frameworks, and best practices."
                            </p>
                            <p class="text-lg text-muted-foreground leading-relaxed">
                                "Beyond coding, I focus on writing maintainable code, understanding user needs, and delivering reliable solutions. My goal is to create software that is efficient, intuitive, and impactful."
                            </p>

                            <div class="grid grid-cols-3 gap-4 pt-6">
                                {STATS
                                    .iter()
                                    .map(|stat| {
                                        view! {
                                            <div class="glass rounded-2xl p-4 text-center">
                                                <div class="text-xl mb-2">{stat.icon}</div>
                                                <div class="text-2xl md:text-3xl font-display font-bold text-foreground">
                                                    {format!("{}+", stat.value)}
                                                </div>
                                                <div class="text-xs text-muted-foreground mt-1">
                                                    {stat.label}
                                                </div>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>

                        <div class="pt-8">
                            <h3 class="text-lg font-semibold mb-4">"Core Competencies"</h3>
                            <div class="flex flex-wrap gap-2">
                                {COMPETENCIES
                                    .iter()
                                    .map(|skill| {
                                        view! {
                                            <span class="px-3 py-1.5 text-sm glass rounded-lg border border-neon-cyan/20 hover:border-neon-cyan/50 hover:scale-105 transition-all">
                                                {*skill}
                                            </span>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}
