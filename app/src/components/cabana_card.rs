//! Card for a single cabaña

use leptos::prelude::*;

use crate::api::Cabana;
use crate::components::estado_badge::{clave_estado, EstadoBadge};

/// Stateless card showing one rental unit
#[component]
pub fn CabanaCard(cabana: Cabana) -> impl IntoView {
    let disponible = clave_estado(&cabana.estado) == "disponible";
    let borde = if disponible { "#28a745" } else { "#dc3545" };
    let style = format!(
        "border: 2px solid {}; border-radius: 0.5rem; padding: 1rem; \
         box-shadow: 0 1px 3px rgba(0,0,0,0.15);{}",
        borde,
        if disponible { "" } else { " opacity: 0.75;" }
    );

    view! {
        <div style=style>
            <div style="display: flex; justify-content: space-between; align-items: center; margin-bottom: 0.5rem;">
                <h3 style="margin: 0;">{cabana.nombre}</h3>
                <span style="font-size: 0.85em; color: #6c757d;">{format!("#{}", cabana.id)}</span>
            </div>

            <p><b>"Capacidad: "</b>{cabana.capacidad}" personas"</p>

            {cabana.ubicacion.map(|ubicacion| view! {
                <p><b>"Ubicación: "</b>{ubicacion}</p>
            })}

            <p><b>"Estado: "</b><EstadoBadge estado=cabana.estado /></p>

            {cabana.precio_hora.map(|precio| view! {
                <p><b>"Precio/hora: "</b>{format!("{precio:.2} Bs")}</p>
            })}

            {cabana.descripcion.map(|descripcion| view! {
                <p style="font-size: 0.9em; color: #495057; margin-top: 0.5rem;">{descripcion}</p>
            })}
        </div>
    }
}
