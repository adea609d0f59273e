use contracts::domain::a001_destination::FeaturedDestination;
use leptos::prelude::*;

use crate::shared::icons::icon_sized;

fn featured(id: &str, country: &str, title: &str, description: &str, image: &str) -> FeaturedDestination {
    FeaturedDestination {
        id: id.to_string(),
        country: country.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        image: format!(
            "https://images.unsplash.com/photo-{}?q=80&w=2070&auto=format&fit=crop",
            image
        ),
    }
}

/// Карточки карусели в порядке показа
pub fn featured_destinations() -> Vec<FeaturedDestination> {
    vec![
        featured(
            "djibouti",
            "East Africa",
            "Djibouti",
            "Discover the unique landscapes of the Horn of Africa, from salt lakes to volcanic formations and pristine coastlines.",
            "1578662996442-48f60103fc96",
        ),
        featured(
            "eritrea",
            "East Africa",
            "Eritrea",
            "Explore ancient architecture, beautiful highlands, and the stunning Red Sea coastline in this hidden gem.",
            "1578662996442-48f60103fc96",
        ),
        featured(
            "kismayo",
            "Somalia",
            "Kismayo",
            "Experience the coastal charm of southern Somalia with pristine beaches and rich maritime heritage.",
            "1506905925346-21bda4d32df4",
        ),
        featured(
            "mogadishu",
            "Somalia",
            "Mogadishu",
            "Discover the capital's resilient spirit, historic landmarks, and beautiful Indian Ocean beaches.",
            "1571771019784-3ff35f4f4277",
        ),
        featured(
            "puntland",
            "Somalia",
            "Puntland",
            "Journey through dramatic coastlines, ancient trade routes, and traditional Somali culture in the northeast.",
            "1544735716-392fe2489ffa",
        ),
        featured(
            "somaliland",
            "East Africa",
            "Somaliland",
            "Explore cave paintings, mountain ranges, and vibrant markets in this self-declared republic with rich heritage.",
            "1469474968028-56623f02e42e",
        ),
        featured(
            "south-sudan",
            "East Africa",
            "South Sudan",
            "Adventure through untouched wilderness, diverse wildlife, and the majestic White Nile in Africa's newest nation.",
            "1516026672322-bc52d61a55d5",
        ),
    ]
}

#[component]
fn DestinationCard(destination: FeaturedDestination) -> impl IntoView {
    view! {
        <a href=destination.href() class="destination-card">
            <img class="destination-card__image" src=destination.image.clone() alt=destination.title.clone() />
            <div class="destination-card__overlay"></div>
            <div class="destination-card__content">
                <p class="destination-card__country">
                    {icon_sized("map-pin", 16)}
                    {destination.country.clone()}
                </p>
                <h3 class="destination-card__title">{destination.title.clone()}</h3>
                <p class="destination-card__description">{destination.description.clone()}</p>
            </div>
        </a>
    }
}

#[component]
pub fn PopularDestinations() -> impl IntoView {
    view! {
        <section id="destination" class="home-section">
            <div class="container">
                <div class="section-heading">
                    <p class="section-heading__eyebrow">"Uncover Places"</p>
                    <h2 class="section-heading__title">"Popular Destinations"</h2>
                    <p class="section-heading__text">
                        "Discover Somalia's rich history, South Sudan's culture, Djibouti's landscapes, Eritrea's charm, and Kenya's wildlife. Adventure awaits!"
                    </p>
                </div>
            </div>
            // горизонтальная прокрутка, без автопрокрутки
            <div class="carousel">
                <div class="carousel__track">
                    {featured_destinations()
                        .into_iter()
                        .map(|destination| view! { <DestinationCard destination=destination /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_featured_destinations_order_and_links() {
        let items = featured_destinations();
        let ids: Vec<&str> = items.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["djibouti", "eritrea", "kismayo", "mogadishu", "puntland", "somaliland", "south-sudan"]
        );
        assert_eq!(items[6].href(), "/destinations/south-sudan");
    }
}
