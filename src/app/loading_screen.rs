use leptos::prelude::*;

use super::widgets::Icon;
use crate::glyph::Glyph;

#[component]
pub fn LoadingScreen() -> impl IntoView {
    view! {
        <div class="fixed inset-0 bg-dark z-50 flex items-center justify-center">
            <div class="text-center">
                <div class="relative mb-8">
                    <div class="animate-spin-slow">
                        <Icon glyph=Glyph::Gamepad class="w-16 h-16 text-accent mx-auto" />
                    </div>
                    <div class="absolute inset-0 rounded-full border-2 border-accent animate-ping opacity-50"></div>
                </div>

                <h2 class="text-2xl font-bold text-white mb-4 animate-pulse">"Loading Portfolio"</h2>

                <div class="flex items-center justify-center space-x-2">
                    {(0..3)
                        .map(|i| {
                            view! {
                                <div
                                    class="w-3 h-3 bg-accent rounded-full animate-bounce"
                                    style=format!("animation-delay: {}ms", i * 200)
                                ></div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
