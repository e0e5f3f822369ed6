/// Sri Lankan landmarks with their coordinates
/// Format: (Place, "latitude,longitude")
pub const LANDMARKS: &[(&str, &str)] = &[
    ("Sigiriya", "7.9570,80.7603"),
    ("Temple of the Sacred Tooth Relic", "7.2906,80.6337"),
    ("Galle Fort", "6.0535,80.2210"),
    ("Dambulla Cave Temple", "7.8567,80.6492"),
    ("Ruwanwelisaya", "8.3500,80.3964"),
    ("Polonnaruwa Vatadage", "7.9474,81.0011"),
    ("Adam's Peak", "6.8096,80.4994"),
    ("Nine Arches Bridge", "6.8768,81.0608"),
    ("Yala National Park", "6.3728,81.5016"),
    ("Jaffna Fort", "9.6623,80.0086"),
    ("Trincomalee Koneswaram", "8.5826,81.2453"),
    ("Colombo Lotus Tower", "6.9271,79.8589"),
];
