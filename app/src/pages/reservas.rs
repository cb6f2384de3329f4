//! Reservation list + creation form, live-refreshed
//!
//! The list mirrors server order. Every mutation (create, delete, push
//! signal) resolves to a full re-fetch; there is no client-side patching.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{ApiClient, NuevaReserva, Reserva};
use crate::components::estado_badge::EstadoBadge;
use crate::components::notices::NoticeLevel;
use crate::config::ApiConfig;
use crate::error::ApiError;

/// Staff client id; there is no login, every booking is created as this client
pub const CLIENTE_ID: i32 = 1;

/// In-progress form values. String-typed: values come straight from inputs
/// and are only parsed on submit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReservaDraft {
    pub cabana_id: String,
    pub fecha_reserva: String,
    pub hora_inicio: String,
    pub hora_fin: String,
    pub observaciones: String,
}

impl ReservaDraft {
    /// Required-field validation. Nothing is sent to the server unless this
    /// returns a complete request body.
    pub fn validar(&self) -> Result<NuevaReserva, String> {
        if self.cabana_id.trim().is_empty()
            || self.fecha_reserva.trim().is_empty()
            || self.hora_inicio.trim().is_empty()
            || self.hora_fin.trim().is_empty()
        {
            return Err(
                "Completa cabaña, fecha, hora de inicio y hora de fin".to_string()
            );
        }

        let cabana_id: i32 = self
            .cabana_id
            .trim()
            .parse()
            .map_err(|_| "El ID de cabaña debe ser un número".to_string())?;

        let observaciones = match self.observaciones.trim() {
            "" => None,
            texto => Some(texto.to_string()),
        };

        Ok(NuevaReserva {
            cliente_id: CLIENTE_ID,
            cabana_id,
            fecha_reserva: self.fecha_reserva.trim().to_string(),
            hora_inicio: self.hora_inicio.trim().to_string(),
            hora_fin: self.hora_fin.trim().to_string(),
            observaciones,
        })
    }
}

/// Notice severity for a rejected create: scheduling conflicts surface as
/// warnings, everything else as errors
pub fn nivel_de_rechazo(err: &ApiError) -> NoticeLevel {
    if err.is_conflict() {
        NoticeLevel::Warning
    } else {
        NoticeLevel::Error
    }
}

#[cfg(target_arch = "wasm32")]
fn confirmar(mensaje: &str) -> bool {
    web_sys::window()
        .map(|w| w.confirm_with_message(mensaje).unwrap_or(false))
        .unwrap_or(false)
}

#[cfg(not(target_arch = "wasm32"))]
fn confirmar(_mensaje: &str) -> bool {
    false
}

/// Reservation table plus creation form
#[component]
pub fn ReservasPage() -> impl IntoView {
    let config = expect_context::<ApiConfig>();
    let notices = expect_context::<crate::components::notices::Notices>();
    let client = ApiClient::new(config.clone());

    let reservas = RwSignal::new(Vec::<Reserva>::new());
    let cargando = RwSignal::new(true);
    let version = RwSignal::new(0u32);
    let draft = RwSignal::new(ReservaDraft::default());

    let client_fetch = client.clone();
    Effect::new(move |_| {
        version.track();
        let client = client_fetch.clone();
        spawn_local(async move {
            match client.reservas().await {
                Ok(lista) => {
                    reservas.set(lista);
                    cargando.set(false);
                }
                Err(err) => log::error!("error al cargar reservas: {err}"),
            }
        });
    });

    #[cfg(target_arch = "wasm32")]
    {
        use crate::live::LiveChannel;
        use send_wrapper::SendWrapper;

        let channel = SendWrapper::new(LiveChannel::open(config.ws_url(), move || {
            version.update(|v| *v += 1);
        }));
        on_cleanup(move || channel.take().close());
    }

    let client_crear = client.clone();
    let crear = move |_| {
        let nueva = match draft.get_untracked().validar() {
            Ok(nueva) => nueva,
            Err(mensaje) => {
                notices.warning(mensaje);
                return;
            }
        };
        let client = client_crear.clone();
        spawn_local(async move {
            match client.crear_reserva(&nueva).await {
                Ok(reserva) => {
                    notices.success(format!("Reserva {} creada", reserva.id));
                    draft.set(ReservaDraft::default());
                    version.update(|v| *v += 1);
                }
                Err(err) => match nivel_de_rechazo(&err) {
                    NoticeLevel::Warning => {
                        log::warn!("conflicto al crear reserva: {err}");
                        notices.warning(err.to_string());
                    }
                    _ => {
                        log::error!("error al crear reserva: {err}");
                        notices.error(format!("No se pudo crear la reserva: {err}"));
                    }
                },
            }
        });
    };

    // Callback is Copy, so row closures and the Show children stay Fn
    let eliminar = Callback::new(move |id: i32| {
        if !confirmar(&format!("¿Seguro que deseas eliminar la reserva {id}?")) {
            return;
        }
        let client = client.clone();
        spawn_local(async move {
            match client.eliminar_reserva(id).await {
                Ok(()) => {
                    notices.success(format!("Reserva {id} eliminada"));
                    version.update(|v| *v += 1);
                }
                Err(err) => {
                    log::error!("error al eliminar reserva {id}: {err}");
                    notices.error(format!("No se pudo eliminar la reserva {id}: {err}"));
                }
            }
        });
    });

    view! {
        <section>
            <h2>"Reservas en tiempo real"</h2>

            <div style="border: 1px solid #dee2e6; border-radius: 0.5rem; padding: 1rem; margin-bottom: 1.5rem;">
                <h3>"Nueva reserva"</h3>
                <div style="display: grid; grid-template-columns: repeat(auto-fit, minmax(10rem, 1fr)); gap: 0.5rem;">
                    <input
                        type="number"
                        placeholder="ID Cabaña"
                        prop:value=move || draft.get().cabana_id
                        on:input=move |ev| draft.update(|d| d.cabana_id = event_target_value(&ev))
                    />
                    <input
                        type="date"
                        prop:value=move || draft.get().fecha_reserva
                        on:input=move |ev| draft.update(|d| d.fecha_reserva = event_target_value(&ev))
                    />
                    <input
                        type="time"
                        prop:value=move || draft.get().hora_inicio
                        on:input=move |ev| draft.update(|d| d.hora_inicio = event_target_value(&ev))
                    />
                    <input
                        type="time"
                        prop:value=move || draft.get().hora_fin
                        on:input=move |ev| draft.update(|d| d.hora_fin = event_target_value(&ev))
                    />
                    <input
                        type="text"
                        placeholder="Observaciones (opcional)"
                        prop:value=move || draft.get().observaciones
                        on:input=move |ev| draft.update(|d| d.observaciones = event_target_value(&ev))
                    />
                    <button on:click=crear>"Agregar reserva"</button>
                </div>
            </div>

            <h3>"Listado de reservas"</h3>
            <Show
                when=move || !cargando.get()
                fallback=|| view! { <p>"Cargando reservas..."</p> }
            >
                <table style="width: 100%; border-collapse: collapse;">
                    <thead>
                        <tr style="border-bottom: 2px solid #dee2e6;">
                            <th style="padding: 0.5rem; text-align: left;">"ID"</th>
                            <th style="padding: 0.5rem; text-align: left;">"Cliente"</th>
                            <th style="padding: 0.5rem; text-align: left;">"Cabaña"</th>
                            <th style="padding: 0.5rem; text-align: left;">"Fecha"</th>
                            <th style="padding: 0.5rem; text-align: left;">"Inicio"</th>
                            <th style="padding: 0.5rem; text-align: left;">"Fin"</th>
                            <th style="padding: 0.5rem; text-align: left;">"Estado"</th>
                            <th style="padding: 0.5rem; text-align: left;">"Acción"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let lista = reservas.get();
                            if lista.is_empty() {
                                view! {
                                    <tr>
                                        <td colspan="8" style="padding: 0.5rem;">"No hay reservas registradas."</td>
                                    </tr>
                                }.into_any()
                            } else {
                                lista.into_iter().map(|r| {
                                    view! {
                                        <tr style="border-bottom: 1px solid #dee2e6;">
                                            <td style="padding: 0.5rem;">{r.id}</td>
                                            <td style="padding: 0.5rem;">{r.cliente_id}</td>
                                            <td style="padding: 0.5rem;">{r.cabana_id}</td>
                                            <td style="padding: 0.5rem;">{r.fecha_reserva}</td>
                                            <td style="padding: 0.5rem;">{r.hora_inicio}</td>
                                            <td style="padding: 0.5rem;">{r.hora_fin}</td>
                                            <td style="padding: 0.5rem;">
                                                <EstadoBadge estado=r.estado />
                                            </td>
                                            <td style="padding: 0.5rem;">
                                                <button on:click=move |_| eliminar.run(r.id)>"Eliminar"</button>
                                            </td>
                                        </tr>
                                    }
                                }).collect::<Vec<_>>().into_any()
                            }
                        }}
                    </tbody>
                </table>
            </Show>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft_completo() -> ReservaDraft {
        ReservaDraft {
            cabana_id: "3".to_string(),
            fecha_reserva: "2026-09-01".to_string(),
            hora_inicio: "14:00".to_string(),
            hora_fin: "16:00".to_string(),
            observaciones: String::new(),
        }
    }

    #[test]
    fn draft_completo_se_valida() {
        let nueva = draft_completo().validar().unwrap();
        assert_eq!(nueva.cliente_id, CLIENTE_ID);
        assert_eq!(nueva.cabana_id, 3);
        assert_eq!(nueva.observaciones, None);
    }

    #[test]
    fn cada_campo_requerido_bloquea_el_envio() {
        for campo in ["cabana_id", "fecha_reserva", "hora_inicio", "hora_fin"] {
            let mut draft = draft_completo();
            match campo {
                "cabana_id" => draft.cabana_id.clear(),
                "fecha_reserva" => draft.fecha_reserva.clear(),
                "hora_inicio" => draft.hora_inicio.clear(),
                _ => draft.hora_fin.clear(),
            }
            assert!(draft.validar().is_err(), "campo {campo} vacío debe fallar");
        }
    }

    #[test]
    fn campos_con_solo_espacios_cuentan_como_vacios() {
        let mut draft = draft_completo();
        draft.hora_fin = "   ".to_string();
        assert!(draft.validar().is_err());
    }

    #[test]
    fn cabana_id_no_numerico_es_rechazado() {
        let mut draft = draft_completo();
        draft.cabana_id = "tres".to_string();
        let err = draft.validar().unwrap_err();
        assert!(err.contains("número"));
    }

    #[test]
    fn rechazo_por_conflicto_es_advertencia() {
        let err = ApiError::from_response(409, r#"{"error": "Conflicto de horario"}"#);
        assert_eq!(nivel_de_rechazo(&err), NoticeLevel::Warning);
    }

    #[test]
    fn rechazo_generico_es_error() {
        let err = ApiError::from_response(400, r#"{"error": "cabaña inexistente"}"#);
        assert_eq!(nivel_de_rechazo(&err), NoticeLevel::Error);
    }

    #[test]
    fn fallo_de_red_es_error() {
        let err = ApiError::Transport("desconectado".to_string());
        assert_eq!(nivel_de_rechazo(&err), NoticeLevel::Error);
    }

    #[test]
    fn observaciones_se_recortan_y_omiten() {
        let mut draft = draft_completo();
        draft.observaciones = "  llegada tarde  ".to_string();
        let nueva = draft.validar().unwrap();
        assert_eq!(nueva.observaciones, Some("llegada tarde".to_string()));
    }
}
