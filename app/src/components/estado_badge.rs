//! Status badge component

use leptos::prelude::*;

/// Style key for a status label: lowercased, all whitespace removed.
/// Total over arbitrary input so unknown vocabulary still renders.
pub fn clave_estado(estado: &str) -> String {
    estado.to_lowercase().split_whitespace().collect()
}

/// A colored badge for a reservation or cabaña status
#[component]
pub fn EstadoBadge(estado: String) -> impl IntoView {
    let (color, bg) = match clave_estado(&estado).as_str() {
        "disponible" | "completada" => ("#155724", "#d4edda"),
        "pendiente" => ("#856404", "#fff3cd"),
        "ocupada" => ("#721c24", "#f8d7da"),
        "cancelada" => ("#383d41", "#e2e3e5"),
        _ => ("#383d41", "#e2e3e5"),
    };

    let style = format!(
        "display: inline-block; padding: 0.25em 0.6em; border-radius: 0.25rem; \
         font-size: 0.85em; font-weight: 600; color: {}; background-color: {};",
        color, bg
    );

    view! {
        <span style=style>{estado}</span>
    }
}
