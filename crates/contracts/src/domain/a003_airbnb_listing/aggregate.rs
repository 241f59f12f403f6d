use crate::domain::common::{de_flexible_f64, de_flexible_id, de_flexible_string};
use crate::shared::listing::ListingItem;
use serde::{Deserialize, Serialize};

/// Картинка-заглушка, если у объявления нет фото или оно не загрузилось
pub const PLACEHOLDER_IMAGE: &str = "/images/airbnbsample.jpg";

/// Объявление из `GET /airbnb/getAllListings`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirbnbListing {
    #[serde(rename = "_id", default, deserialize_with = "de_flexible_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Цена за ночь, USD
    #[serde(default, deserialize_with = "de_flexible_f64")]
    pub price: Option<f64>,
    #[serde(default)]
    pub images: Option<ListingImages>,
    #[serde(default)]
    pub review_scores: Option<ReviewScores>,
    #[serde(default)]
    pub address: Option<ListingAddress>,
    #[serde(default, deserialize_with = "de_flexible_f64")]
    pub accommodates: Option<f64>,
    #[serde(default, deserialize_with = "de_flexible_f64")]
    pub bedrooms: Option<f64>,
    #[serde(default, deserialize_with = "de_flexible_f64")]
    pub bathrooms: Option<f64>,
    #[serde(default)]
    pub property_type: Option<String>,
    #[serde(default)]
    pub room_type: Option<String>,
    #[serde(default)]
    pub host: Option<ListingHost>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ListingImages {
    #[serde(default)]
    pub picture_url: Option<String>,
    #[serde(default)]
    pub medium_url: Option<String>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReviewScores {
    /// Рейтинг по шкале 0..100
    #[serde(default, deserialize_with = "de_flexible_f64")]
    pub review_scores_rating: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ListingAddress {
    #[serde(default)]
    pub street: Option<String>,
    #[serde(default)]
    pub suburb: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ListingHost {
    #[serde(default, deserialize_with = "de_flexible_string")]
    pub host_name: Option<String>,
    #[serde(default)]
    pub host_thumbnail_url: Option<String>,
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

impl AirbnbListing {
    /// Рейтинг по пятибалльной шкале
    pub fn rating_out_of_five(&self) -> Option<f64> {
        self.review_scores
            .as_ref()
            .and_then(|scores| scores.review_scores_rating)
            .filter(|rating| *rating > 0.0)
            .map(|rating| rating / 20.0)
    }

    pub fn rating_label(&self) -> String {
        self.rating_out_of_five()
            .map(|rating| format!("{:.1}", rating))
            .unwrap_or_else(|| "N/A".to_string())
    }

    /// picture_url → medium_url → thumbnail_url → заглушка
    pub fn image_url(&self) -> &str {
        self.images
            .as_ref()
            .and_then(|images| {
                non_blank(&images.picture_url)
                    .or_else(|| non_blank(&images.medium_url))
                    .or_else(|| non_blank(&images.thumbnail_url))
            })
            .unwrap_or(PLACEHOLDER_IMAGE)
    }

    pub fn location_label(&self) -> &str {
        self.address
            .as_ref()
            .and_then(|address| non_blank(&address.suburb).or_else(|| non_blank(&address.street)))
            .unwrap_or("Location not specified")
    }

    pub fn host_label(&self) -> &str {
        self.host
            .as_ref()
            .and_then(|host| non_blank(&host.host_name))
            .unwrap_or("Host")
    }
}

impl ListingItem for AirbnbListing {
    fn key(&self) -> &str {
        &self.id
    }
}
