use crate::shared::icons::icon;
use leptos::prelude::*;

/// Номер страницы после шага `delta`, в пределах 1..=total_pages
pub fn step_page(current: usize, delta: isize, total_pages: usize) -> usize {
    let last = total_pages.max(1);
    let target = if delta.is_negative() {
        current.saturating_sub(delta.unsigned_abs())
    } else {
        current.saturating_add(delta.unsigned_abs())
    };
    target.clamp(1, last)
}

/// PaginationControls component - reusable pagination controls (1-indexed pages)
#[component]
pub fn PaginationControls(
    /// Current page (1-indexed)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages
    #[prop(into)]
    total_pages: Signal<usize>,

    /// Total count of items
    #[prop(into)]
    total_count: Signal<usize>,

    /// Callback when page changes
    on_page_change: Callback<usize>,
) -> impl IntoView {
    let is_first = move || current_page.get() <= 1;
    let is_last = move || current_page.get() >= total_pages.get().max(1);

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(1)
                disabled=is_first
                title="Первая страница"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    on_page_change.run(step_page(current_page.get(), -1, total_pages.get()));
                }
                disabled=is_first
                title="Предыдущая страница"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || {
                    format!(
                        "{} / {} ({})",
                        current_page.get(),
                        total_pages.get().max(1),
                        total_count.get()
                    )
                }}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    on_page_change.run(step_page(current_page.get(), 1, total_pages.get()));
                }
                disabled=is_last
                title="Следующая страница"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(total_pages.get().max(1))
                disabled=is_last
                title="Последняя страница"
            >
                {icon("chevrons-right")}
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_page_stays_in_range() {
        assert_eq!(step_page(1, -1, 5), 1);
        assert_eq!(step_page(2, -1, 5), 1);
        assert_eq!(step_page(4, 1, 5), 5);
        assert_eq!(step_page(5, 1, 5), 5);
        assert_eq!(step_page(1, 1, 0), 1);
    }
}
