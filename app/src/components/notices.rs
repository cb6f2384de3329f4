//! Transient user-facing notifications
//!
//! Success/warning/error notices, dismissible, never fatal. The store is
//! provided through context so any view can push without wiring props.

use leptos::prelude::*;

/// Severity of a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Warning,
    Error,
}

/// One user-facing message
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub level: NoticeLevel,
    pub message: String,
}

/// Reactive notice store; `Copy` so event handlers can capture it freely
#[derive(Clone, Copy)]
pub struct Notices {
    items: RwSignal<Vec<Notice>>,
    next_id: RwSignal<u64>,
}

impl Notices {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(0),
        }
    }

    pub fn push(&self, level: NoticeLevel, message: impl Into<String>) -> u64 {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        self.items.update(|items| {
            items.push(Notice {
                id,
                level,
                message: message.into(),
            });
        });
        id
    }

    pub fn success(&self, message: impl Into<String>) -> u64 {
        self.push(NoticeLevel::Success, message)
    }

    pub fn warning(&self, message: impl Into<String>) -> u64 {
        self.push(NoticeLevel::Warning, message)
    }

    pub fn error(&self, message: impl Into<String>) -> u64 {
        self.push(NoticeLevel::Error, message)
    }

    pub fn dismiss(&self, id: u64) {
        self.items.update(|items| items.retain(|n| n.id != id));
    }

    pub fn items(&self) -> Vec<Notice> {
        self.items.get()
    }
}

impl Default for Notices {
    fn default() -> Self {
        Self::new()
    }
}

fn estilo(level: NoticeLevel) -> &'static str {
    match level {
        NoticeLevel::Success => "color: #155724; background-color: #d4edda;",
        NoticeLevel::Warning => "color: #856404; background-color: #fff3cd;",
        NoticeLevel::Error => "color: #721c24; background-color: #f8d7da;",
    }
}

/// Fixed stack of dismissible notices, rendered above everything else
#[component]
pub fn NoticeStack() -> impl IntoView {
    let notices = expect_context::<Notices>();

    view! {
        <div style="position: fixed; top: 1rem; right: 1rem; width: 20rem; z-index: 10;">
            <For each=move || notices.items() key=|n| n.id children=move |n| {
                let style = format!(
                    "display: flex; justify-content: space-between; align-items: center; \
                     margin-bottom: 0.5rem; padding: 0.5rem 0.75rem; border-radius: 0.25rem; \
                     box-shadow: 0 1px 3px rgba(0,0,0,0.2); {}",
                    estilo(n.level)
                );
                view! {
                    <div style=style>
                        <span>{n.message.clone()}</span>
                        <button
                            style="border: none; background: none; cursor: pointer; font-weight: 700;"
                            on:click=move |_| notices.dismiss(n.id)
                        >
                            "×"
                        </button>
                    </div>
                }
            } />
        </div>
    }
}
