use crate::domain::a025_vehicle::ui::inventory::VehicleInventory;
use crate::domain::a025_vehicle::ui::list::VehicleList;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Screen {
    Vehicles,
    Inventory,
}

fn tab_class(active: bool) -> &'static str {
    if active {
        "app-tab app-tab--active"
    } else {
        "app-tab"
    }
}

#[component]
pub fn App() -> impl IntoView {
    let (screen, set_screen) = signal(Screen::Vehicles);

    view! {
        <div class="app-shell">
            <nav class="app-tabs">
                <button
                    class=move || tab_class(screen.get() == Screen::Vehicles)
                    on:click=move |_| set_screen.set(Screen::Vehicles)
                >
                    {icon("car")}
                    <span>"Автомобили"</span>
                </button>
                <button
                    class=move || tab_class(screen.get() == Screen::Inventory)
                    on:click=move |_| set_screen.set(Screen::Inventory)
                >
                    {icon("inventory")}
                    <span>"Склад"</span>
                </button>
            </nav>
            // при переключении вкладки предыдущее представление размонтируется
            <main class="app-content">
                {move || match screen.get() {
                    Screen::Vehicles => view! { <VehicleList /> }.into_any(),
                    Screen::Inventory => view! { <VehicleInventory /> }.into_any(),
                }}
            </main>
        </div>
    }
}
