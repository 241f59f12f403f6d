use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Разделы административной панели
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DashboardSection {
    #[default]
    Customers,
    Products,
    Airbnb,
}

impl DashboardSection {
    pub const ALL: [DashboardSection; 3] = [
        DashboardSection::Customers,
        DashboardSection::Products,
        DashboardSection::Airbnb,
    ];

    /// Сегмент пути: `/dashboard/<slug>`
    pub fn slug(&self) -> &'static str {
        match self {
            DashboardSection::Customers => "customers",
            DashboardSection::Products => "products",
            DashboardSection::Airbnb => "airbnb",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            DashboardSection::Customers => "Customers",
            DashboardSection::Products => "Products",
            DashboardSection::Airbnb => "Airbnb",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            DashboardSection::Customers => "customers",
            DashboardSection::Products => "products",
            DashboardSection::Airbnb => "home",
        }
    }

    pub fn path(&self) -> String {
        format!("/dashboard/{}", self.slug())
    }

    /// Раздел из пути вида `/dashboard/airbnb`; неизвестный путь ведёт к клиентам
    pub fn from_path(path: &str) -> Self {
        path.trim_matches('/')
            .split('/')
            .nth(1)
            .and_then(|segment| segment.parse().ok())
            .unwrap_or_default()
    }
}

impl FromStr for DashboardSection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|section| section.slug().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown dashboard section: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_round_trip() {
        for section in DashboardSection::ALL {
            assert_eq!(section.slug().parse::<DashboardSection>(), Ok(section));
        }
        assert_eq!("Airbnb".parse::<DashboardSection>(), Ok(DashboardSection::Airbnb));
        assert!("movies".parse::<DashboardSection>().is_err());
    }

    #[test]
    fn test_from_path() {
        assert_eq!(DashboardSection::from_path("/Dashboard/Airbnb"), DashboardSection::Airbnb);
        assert_eq!(DashboardSection::from_path("/dashboard/products/"), DashboardSection::Products);
        assert_eq!(DashboardSection::from_path("/dashboard"), DashboardSection::Customers);
        assert_eq!(DashboardSection::from_path("/dashboard/unknown"), DashboardSection::Customers);
        assert_eq!(DashboardSection::Airbnb.path(), "/dashboard/airbnb");
    }
}
