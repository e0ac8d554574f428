//! Stack of transient notices rendered above the routed page.

use leptos::prelude::*;

use crate::state::notice::NoticeState;

#[component]
pub fn NoticeBanner() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();

    view! {
        <div class="notice-stack" role="status">
            <For
                each=move || notices.get().items
                key=|notice| notice.id
                children=move |notice| {
                    let id = notice.id;
                    view! {
                        <div class=notice.kind.css_class() on:click=move |_| notices.update(|s| s.dismiss(id))>
                            {notice.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
