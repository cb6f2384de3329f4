//! Unit list view: all cabañas, sorted by id, live-refreshed

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{ordenar_por_id, ApiClient, Cabana};
use crate::components::cabana_card::CabanaCard;
use crate::config::ApiConfig;

/// Grid of cabaña cards. Read-only: units are never created or deleted here.
#[component]
pub fn CabanasPage() -> impl IntoView {
    let config = expect_context::<ApiConfig>();
    let client = ApiClient::new(config.clone());

    let cabanas = RwSignal::new(Vec::<Cabana>::new());
    let cargando = RwSignal::new(true);
    // Bumped by the push channel; every bump triggers a full re-fetch.
    let version = RwSignal::new(0u32);

    Effect::new(move |_| {
        version.track();
        let client = client.clone();
        spawn_local(async move {
            match client.cabanas().await {
                Ok(lista) => {
                    cabanas.set(ordenar_por_id(lista));
                    cargando.set(false);
                }
                Err(err) => log::error!("error al cargar cabañas: {err}"),
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
        // the channel is single-threaded; the wrapper only satisfies the
        // Send bound of the cleanup queue
        on_cleanup(move || channel.take().close());
    }

    view! {
        <section>
            <h2>"Cabañas disponibles"</h2>
            <Show
                when=move || !cargando.get()
                fallback=|| view! { <p>"Cargando cabañas..."</p> }
            >
                {move || {
                    let lista = cabanas.get();
                    if lista.is_empty() {
                        view! { <p>"No hay cabañas registradas."</p> }.into_any()
                    } else {
                        view! {
                            <div style="display: grid; grid-template-columns: repeat(auto-fill, minmax(16rem, 1fr)); gap: 1rem;">
                                {lista.into_iter().map(|cabana| {
                                    view! { <CabanaCard cabana=cabana /> }
                                }).collect::<Vec<_>>()}
                            </div>
                        }.into_any()
                    }
                }}
            </Show>
        </section>
    }
}
