//! Главная страница: секции идут в фиксированном порядке, якоря секций
//! совпадают со ссылками домашнего навбара.

mod hero;
mod info;
mod popular_destinations;
mod popular_packages;

use leptos::prelude::*;

use self::hero::Hero;
use self::info::Info;
use self::popular_destinations::PopularDestinations;
use self::popular_packages::PopularPackages;
use crate::usecases::u001_search_tours::view::TripSearchBox;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <Hero />
            <TripSearchBox />
            <Info />
            <PopularDestinations />
            <PopularPackages />
            <div class="home-page__coming-soon">
                <p>"More sections coming soon..."</p>
            </div>
        </div>
    }
}
