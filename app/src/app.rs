//! Main App component

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::components::{Route, Router, Routes, A};
use leptos_router::path;

use crate::components::notices::{NoticeStack, Notices};
use crate::config::ApiConfig;
use crate::pages::cabanas::CabanasPage;
use crate::pages::reservas::ReservasPage;

/// Root application component: provides config and the notice store,
/// mounts routing and the notification stack
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(ApiConfig::from_env());
    provide_context(Notices::new());

    view! {
        <Title text="Reservas de Cabañas" />
        <Router>
            <nav style="display: flex; gap: 1rem; padding: 0.75rem 1rem; border-bottom: 1px solid #dee2e6;">
                <A href="/">"Inicio"</A>
                <A href="/cabanas">"Cabañas"</A>
                <A href="/reservas">"Reservas"</A>
            </nav>
            <main style="font-family: system-ui, sans-serif; max-width: 960px; margin: 0 auto; padding: 1rem;">
                <Routes fallback=|| view! { <p>"Página no encontrada."</p> }>
                    <Route path=path!("/") view=CabanasPage />
                    <Route path=path!("/cabanas") view=CabanasPage />
                    <Route path=path!("/reservas") view=ReservasPage />
                </Routes>
            </main>
            <NoticeStack />
        </Router>
    }
}
