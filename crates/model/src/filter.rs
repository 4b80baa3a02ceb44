use chrono::NaiveDateTime;
use itertools::Itertools;

use crate::{shop::Shop, WithDistance};

/// The two list/map toggles. Both default to enabled, matching the
/// consumer surface this library was built for.
#[derive(Debug, Clone, Copy)]
pub struct ShopFilter {
    pub open_now: bool,
    pub good_coffee: bool,
}

impl Default for ShopFilter {
    fn default() -> Self {
        Self {
            open_now: true,
            good_coffee: true,
        }
    }
}

impl ShopFilter {
    fn matches(&self, shop: &Shop, now: NaiveDateTime) -> bool {
        if self.open_now && !shop.is_open_at(now) {
            return false;
        }
        if self.good_coffee && !shop.is_good {
            return false;
        }
        true
    }
}

/// Applies the toggles at the given instant, keeping input order.
pub fn filter_shops(
    shops: Vec<Shop>,
    filter: &ShopFilter,
    now: NaiveDateTime,
) -> Vec<Shop> {
    shops
        .into_iter()
        .filter(|shop| filter.matches(shop, now))
        .collect()
}

/// Filters, attaches the distance from the observer to every shop, and
/// sorts nearest first. NaN distances compare equal so the sort stays
/// total.
pub fn nearest_shops(
    shops: Vec<Shop>,
    filter: &ShopFilter,
    now: NaiveDateTime,
    latitude: f64,
    longitude: f64,
) -> Vec<WithDistance<Shop>> {
    shops
        .into_iter()
        .filter(|shop| filter.matches(shop, now))
        .map(|shop| shop.with_distance_to(latitude, longitude))
        .sorted_by(|a, b| {
            a.distance_miles
                .partial_cmp(&b.distance_miles)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use utility::id::Id;

    use super::*;
    use crate::{hours::HoursEntry, ExampleData};

    // Wednesday noon
    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 7, 3)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn shop(id: i32, name: &str, latitude: f64, is_good: bool, open: bool) -> Shop {
        let mut shop = Shop::example_data();
        shop.id = Id::new(id);
        shop.name = name.to_owned();
        shop.latitude = latitude;
        shop.is_good = is_good;
        shop.hours = if open {
            vec![HoursEntry {
                day_of_week: 3,
                open_time: 360,
                close_time: 1080,
            }]
        } else {
            vec![]
        };
        shop
    }

    #[test]
    fn open_now_toggle_drops_closed_shops() {
        let shops = vec![
            shop(1, "Open Shop", 44.98, true, true),
            shop(2, "Closed Shop", 44.98, true, false),
        ];
        let filter = ShopFilter {
            open_now: true,
            good_coffee: false,
        };
        let filtered = filter_shops(shops, &filter, noon());
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Open Shop");
    }

    #[test]
    fn good_coffee_toggle_drops_uncurated_shops() {
        let shops = vec![
            shop(1, "Good", 44.98, true, true),
            shop(2, "Passable", 44.98, false, true),
        ];
        let filter = ShopFilter {
            open_now: false,
            good_coffee: true,
        };
        let filtered = filter_shops(shops, &filter, noon());
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Good");
    }

    #[test]
    fn disabled_toggles_keep_everything() {
        let shops = vec![
            shop(1, "Closed", 44.98, false, false),
            shop(2, "Open", 44.98, true, true),
        ];
        let filter = ShopFilter {
            open_now: false,
            good_coffee: false,
        };
        assert_eq!(filter_shops(shops, &filter, noon()).len(), 2);
    }

    #[test]
    fn nearest_shops_sorts_ascending_by_distance() {
        let shops = vec![
            shop(1, "Far", 45.2, true, true),
            shop(2, "Near", 44.99, true, true),
            shop(3, "Mid", 45.05, true, true),
        ];
        let nearest = nearest_shops(
            shops,
            &ShopFilter::default(),
            noon(),
            44.9778,
            -93.2767,
        );
        let names = nearest
            .iter()
            .map(|shop| shop.content.name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["Near", "Mid", "Far"]);
        assert!(nearest[0].distance_miles < nearest[1].distance_miles);
    }
}
