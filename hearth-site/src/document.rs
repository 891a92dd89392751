use hearth_core::surface::MemorySurface;
use maud::{DOCTYPE, Markup, PreEscaped, html};

/// Standalone HTML document holding every mounted fragment of `surface`.
pub fn render(title: &str, surface: &MemorySurface) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) " | Hearth Homes" }
                link rel="stylesheet" href="css/styles.css";
            }
            body {
                main {
                    @for (role, content) in surface.mounts() {
                        section id=(role.element_id()) { (PreEscaped(content)) }
                    }
                }
            }
        }
    }
}
