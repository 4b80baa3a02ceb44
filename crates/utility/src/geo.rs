pub const EARTH_RADIUS_MILES: f64 = 3959.0;

fn to_radians(degrees: f64) -> f64 {
    degrees * std::f64::consts::PI / 180.0
}

/// Great-circle distance between two coordinates in statute miles.
///
/// Inputs are degrees. Coordinates are not validated; NaN or
/// out-of-range degrees propagate into the result.
pub fn haversine_distance(
    latitude_1: f64,
    longitude_1: f64,
    latitude_2: f64,
    longitude_2: f64,
) -> f64 {
    let lat1_rad = to_radians(latitude_1);
    let lat2_rad = to_radians(latitude_2);

    let dlat = to_radians(latitude_2 - latitude_1);
    let dlon = to_radians(longitude_2 - longitude_1);

    let a = (dlat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_MILES * c
}

/// Display form of an optional distance, e.g. "0.37 mi" or "N/A".
/// Large values get thousands separators in the integer part.
pub fn format_distance_miles(distance: Option<f64>) -> String {
    let Some(distance) = distance else {
        return "N/A".to_owned();
    };
    let formatted = format!("{:.2}", distance);
    if distance < 1000.0 {
        return format!("{} mi", formatted);
    }
    let (integer, fraction) = formatted
        .split_once('.')
        .unwrap_or((formatted.as_str(), "00"));
    let mut grouped = String::new();
    for (i, digit) in integer.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    let integer = grouped.chars().rev().collect::<String>();
    format!("{}.{} mi", integer, fraction)
}
