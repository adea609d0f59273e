use contracts::domain::a002_tour_package::aggregate::MAX_RATING_STARS;
use contracts::domain::a002_tour_package::FeaturedPackage;
use leptos::prelude::*;

use crate::shared::components::ui::{Badge, CustomButton};
use crate::shared::components::{stagger_delay, CardAnimated};
use crate::shared::icons::icon_sized;
use crate::shared::number_format::format_price;

pub fn featured_packages() -> Vec<FeaturedPackage> {
    vec![
        FeaturedPackage {
            id: "mogadishu-3days".into(),
            title: "EXPLORE MOGADISHU 3 DAYS/2 NIGHTS".into(),
            location: "MOGADISHU".into(),
            duration: "3D/2N".into(),
            description: "Mogadishu, the \"White Pearl of the Indian Ocean,\" offers adventurous travelers vibrant markets, rich history, and scenic beaches, all in one unforgettable experience.".into(),
            original_price: 1200,
            current_price: 980,
            discount: 18,
            image: "https://images.unsplash.com/photo-1571771019784-3ff35f4f4277?q=80&w=2070&auto=format&fit=crop".into(),
            rating: 4.5,
            reviews: 25,
        },
        FeaturedPackage {
            id: "kooyame-bajuni".into(),
            title: "OFF THE BEATEN PATH: EXPLORE KOOYAME IN THE BAJUNI ISLANDS".into(),
            location: "KISMAYO, MOGADISHU".into(),
            duration: "5D/4N".into(),
            description: "Discover the unspoiled beauty of Kooyame, a hidden gem among Somalia's Bajuni Islands, recognized by NomadMania's DARE regions. Sahan Tourism's exclusive adventure awaits.".into(),
            original_price: 3000,
            current_price: 2300,
            discount: 23,
            image: "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?q=80&w=2070&auto=format&fit=crop".into(),
            rating: 4.8,
            reviews: 20,
        },
        FeaturedPackage {
            id: "mogadishu-garowe-eyl".into(),
            title: "EXPLORE MOGADISHU, GAROWE-EYL 5 DAYS, 4 NIGHTS".into(),
            location: "MOGADISHU, PUNTLAND".into(),
            duration: "5D/4N".into(),
            description: "Enjoy a comprehensive trip through Somalia and Puntland. Visit Mogadishu, Garowe, and Eyl, exploring rich history, vibrant culture, and unique landscapes.".into(),
            original_price: 2200,
            current_price: 2000,
            discount: 9,
            image: "https://images.unsplash.com/photo-1544735716-392fe2489ffa?q=80&w=2070&auto=format&fit=crop".into(),
            rating: 4.3,
            reviews: 18,
        },
    ]
}

/// Пять звёзд, первые `filled` закрашены
fn rating_stars(filled: u32) -> impl IntoView {
    (1..=MAX_RATING_STARS)
        .map(|star| {
            let class = if star <= filled {
                "rating__star rating__star--filled"
            } else {
                "rating__star"
            };
            view! { <span class=class>{icon_sized("star", 14)}</span> }
        })
        .collect_view()
}

#[component]
fn PackageCard(package: FeaturedPackage, index: usize) -> impl IntoView {
    let discount = package
        .has_discount()
        .then(|| view! { <Badge variant="error" class="package-card__discount">{format!("{}% Off", package.discount)}</Badge> });

    view! {
        <CardAnimated delay_ms=stagger_delay(index) class="package-card">
            <div class="package-card__media">
                <img src=package.image.clone() alt=package.title.clone() />
                {discount}
            </div>

            <div class="package-card__body">
                <h3 class="package-card__title">{package.title.clone()}</h3>
                <p class="package-card__description">{package.description.clone()}</p>
                <div class="package-card__facts">
                    <span>{icon_sized("clock", 14)}{package.duration.clone()}</span>
                    <span>{icon_sized("users", 14)}"pax: 10"</span>
                    <span>{icon_sized("map-pin", 14)}{package.location.clone()}</span>
                </div>
            </div>

            <div class="package-card__price">
                <div class="package-card__reviews">{format!("({} reviews)", package.reviews)}</div>
                <div class="rating">{rating_stars(package.filled_stars())}</div>
                <div class="package-card__original-price">{format_price(package.original_price)}</div>
                <div class="package-card__current-price">{format_price(package.current_price)}</div>
                <div class="package-card__per-person">"/ per person"</div>
                <CustomButton variant="outline" href=package.booking_href()>"Book Now"</CustomButton>
            </div>
        </CardAnimated>
    }
}

#[component]
pub fn PopularPackages() -> impl IntoView {
    view! {
        <section id="packages" class="home-section home-section--muted">
            <div class="container">
                <div class="section-heading">
                    <p class="section-heading__eyebrow">"Popular Packages"</p>
                    <h2 class="section-heading__title">"Checkout Our Packages"</h2>
                    <p class="section-heading__text">
                        "Explore Somalia and the Horn of Africa with expertly crafted tours, featuring top destinations, efficient routes, and affordable arrangements for a seamless travel experience."
                    </p>
                </div>

                <div class="package-list">
                    {featured_packages()
                        .into_iter()
                        .enumerate()
                        .map(|(index, package)| view! { <PackageCard package=package index=index /> })
                        .collect_view()}
                </div>

                <div class="section-footer">
                    <CustomButton size="lg" href="/packages">"View All Packages"</CustomButton>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_featured_packages_pricing() {
        let packages = featured_packages();
        assert_eq!(packages.len(), 3);
        assert!(packages.iter().all(|p| p.current_price < p.original_price));
        assert!(packages.iter().all(|p| p.has_discount()));
        assert_eq!(format_price(packages[1].original_price), "$3,000");
    }

    #[test]
    fn test_ratings_round_down() {
        let stars: Vec<u32> = featured_packages().iter().map(|p| p.filled_stars()).collect();
        assert_eq!(stars, vec![4, 4, 4]);
    }
}
