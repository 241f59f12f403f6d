use contracts::domain::a003_airbnb_listing::aggregate::{AirbnbListing, PLACEHOLDER_IMAGE};
use leptos::prelude::*;

use crate::shared::icons::icon;
use crate::shared::number_format::format_usd;

fn plain_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

fn counted(value: Option<f64>, one: &str, many: &str) -> Option<String> {
    value.filter(|v| *v > 0.0).map(|v| {
        let noun = if v == 1.0 { one } else { many };
        format!("{} {}", plain_number(v), noun)
    })
}

/// "4 guests · 2 bedrooms · 1.5 baths"; empty when nothing is known
pub fn capacity_label(listing: &AirbnbListing) -> String {
    [
        counted(listing.accommodates, "guest", "guests"),
        counted(listing.bedrooms, "bedroom", "bedrooms"),
        counted(listing.bathrooms, "bath", "baths"),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>()
    .join(" · ")
}

pub fn price_label(listing: &AirbnbListing) -> String {
    match listing.price {
        Some(price) => format!("{} / night", format_usd(price)),
        None => "Price on request".to_string(),
    }
}

#[component]
pub fn ListingCard(listing: AirbnbListing) -> impl IntoView {
    // битая картинка заменяется заглушкой один раз
    let image_failed = RwSignal::new(false);
    let image_url = listing.image_url().to_string();
    let image_src = move || {
        if image_failed.get() {
            PLACEHOLDER_IMAGE.to_string()
        } else {
            image_url.clone()
        }
    };
    let capacity = capacity_label(&listing);

    view! {
        <div class="listing-card">
            <div class="listing-card__media">
                <img
                    src=image_src
                    alt=listing.name.clone()
                    loading="lazy"
                    on:error=move |_| {
                        if !image_failed.get_untracked() {
                            image_failed.set(true);
                        }
                    }
                />
                <span class="listing-card__price">{price_label(&listing)}</span>
            </div>
            <div class="listing-card__body">
                <div class="listing-card__title-row">
                    <h3 class="listing-card__title" title=listing.name.clone()>{listing.name.clone()}</h3>
                    <span class="listing-card__rating">
                        {icon("star")}
                        {listing.rating_label()}
                    </span>
                </div>
                <div class="listing-card__location">
                    {icon("map-pin")}
                    <span>{listing.location_label().to_string()}</span>
                </div>
                {(!capacity.is_empty()).then(|| view! {
                    <div class="listing-card__capacity">{capacity.clone()}</div>
                })}
                <div class="chip-list">
                    {listing.property_type.clone().map(|t| view! { <span class="chip">{t}</span> })}
                    {listing.room_type.clone().map(|t| view! { <span class="chip chip--outline">{t}</span> })}
                </div>
                <div class="listing-card__host text-secondary">
                    {format!("Hosted by {}", listing.host_label())}
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn listing(value: serde_json::Value) -> AirbnbListing {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_capacity_label() {
        let item = listing(json!({
            "_id": "1",
            "accommodates": 4,
            "bedrooms": 1,
            "bathrooms": {"$numberDecimal": "1.5"}
        }));
        assert_eq!(capacity_label(&item), "4 guests · 1 bedroom · 1.5 baths");

        let bare = listing(json!({"_id": "2", "bedrooms": 0}));
        assert_eq!(capacity_label(&bare), "");
    }

    #[test]
    fn test_price_label() {
        let item = listing(json!({"_id": "1", "price": {"$numberDecimal": "80.00"}}));
        assert_eq!(price_label(&item), "$80.00 / night");
        assert_eq!(price_label(&listing(json!({"_id": "2"}))), "Price on request");
    }
}
