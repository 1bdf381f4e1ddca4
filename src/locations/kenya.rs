//! Built-in county tables. Coordinates are approximate county headquarters.

/// The ten counties of the original dashboard. "West Pokot" keeps the coordinates the
/// dashboard has always used so cached comparisons stay comparable.
pub(crate) const KENYA_COUNTIES: &[(&str, f64, f64)] = &[
    ("West Pokot", -1.296, 35.12),
    ("Nairobi", -1.29, 36.82),
    ("Mombasa", -4.04, 39.67),
    ("Kisumu", -0.09, 34.75),
    ("Garissa", -0.45, 39.64),
    ("Turkana", 3.12, 35.6),
    ("Narok", -1.08, 35.87),
    ("Machakos", -1.51, 37.26),
    ("Meru", 0.05, 37.65),
    ("Eldoret", 0.52, 35.27),
];

/// Additional counties covered by the extended dashboard.
pub(crate) const KENYA_EXTRA_COUNTIES: &[(&str, f64, f64)] = &[
    ("Nakuru", -0.30, 36.07),
    ("Kiambu", -1.17, 36.83),
    ("Nyeri", -0.42, 36.95),
    ("Kakamega", 0.28, 34.75),
    ("Bungoma", 0.56, 34.56),
    ("Busia", 0.46, 34.11),
    ("Kisii", -0.68, 34.77),
    ("Homa Bay", -0.53, 34.46),
    ("Migori", -1.06, 34.47),
    ("Kericho", -0.37, 35.28),
    ("Baringo", 0.49, 35.74),
    ("Laikipia", 0.01, 37.07),
    ("Samburu", 1.10, 36.70),
    ("Isiolo", 0.35, 37.58),
    ("Marsabit", 2.33, 37.99),
    ("Wajir", 1.75, 40.06),
    ("Mandera", 3.94, 41.86),
    ("Embu", -0.53, 37.45),
    ("Kitui", -1.37, 38.01),
    ("Kajiado", -1.85, 36.78),
    ("Taita Taveta", -3.40, 38.56),
    ("Kwale", -4.17, 39.45),
    ("Kilifi", -3.63, 39.85),
    ("Tana River", -1.50, 40.03),
    ("Lamu", -2.27, 40.90),
];
