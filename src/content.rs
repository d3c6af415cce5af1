//! Static site content for the Orchard Homestay.
//!
//! Everything here is copy: headlines, meal plans, pricing, albums and
//! contact details. Components render this data; none of it changes at
//! runtime.

pub const HOMESTAY_NAME: &str = "The Orchard Homestay";
pub const LOCATION: &str = "Villagam, Kupwara, Jammu and Kashmir, India";
pub const REGISTRATION: &str = "JKPG00002528";

pub const HERO_HEADLINE: &str = "Welcome to ORCHARD HOMESTAY";
pub const HERO_TAGLINE: &str = "Stay in the paradise of nature with a beautiful view and nearby \
     locations. Empower your travel experience with our 24/7 service.";

/// Captions standing in for the hero background photographs.
pub const HERO_SLIDES: &[&str] = &[
    "The homestay at dawn, framed by apple orchards",
    "The valley view from the outdoor seating area",
    "The house under fresh winter snow",
];

pub const WELCOME_HEADING: &str = "Welcome to ORCHARD HOMESTAY!";
pub const WELCOME_TEXT: &str = "Nestled in the breathtaking landscapes of Villagam, Kupwara, Jammu and Kashmir, \
     we offer an immersive experience into the tranquility and culture of Kashmir.";

pub const FEATURES_HEADING: &str = "Escape to the Heart of the Apple Valley";
pub const FEATURES_TAGLINE: &str = "Orchard Homestay offers more than just a room. It offers a timeless \
     experience. Wake up to the scent of pine and fresh apples, with the \
     majestic Himalayas at your doorstep.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub title: &'static str,
    pub text: &'static str,
}

pub const KEY_FEATURES: &[Feature] = &[
    Feature {
        title: "Travel Equipments",
        text: "We provide a range of high-quality travel equipment to enhance your \
               outdoor adventures. This includes comfortable travel tents, cozy \
               sleeping bags, sturdy hiking sticks, and much more. Whether you're \
               planning a hike or a camping trip, our gear ensures you have \
               everything you need for a safe and enjoyable experience.",
    },
    Feature {
        title: "Transportation",
        text: "Our transportation services ensure your journey is smooth and safe. \
               We provide reliable vehicles for all your travel needs, whether it's \
               a trip to nearby attractions or a scenic drive through the \
               countryside. Our professional drivers prioritize your safety and \
               comfort, allowing you to relax and enjoy the beautiful surroundings.",
    },
    Feature {
        title: "Focused Activities",
        text: "We offer a diverse range of activities designed to entertain and \
               challenge you. Enjoy wildlife tourism, savor wild and traditional \
               Kashmiri food, and experience seasonal fruits and organic \
               vegetables. Participate in agricultural and horticultural \
               activities, giving you a unique opportunity to immerse yourself in \
               the local culture and traditions.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocationDetail {
    pub label: &'static str,
    pub value: &'static str,
}

pub const LOCATION_DETAILS: &[LocationDetail] = &[
    LocationDetail {
        label: "Srinagar Airport",
        value: "100 km away",
    },
    LocationDetail {
        label: "Baramulla Rly. Station",
        value: "47 km away",
    },
    LocationDetail {
        label: "Pick-up/Drop-off",
        value: "Available (charges apply)",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attraction {
    pub name: &'static str,
    pub distance: &'static str,
}

pub const ATTRACTIONS: &[Attraction] = &[
    Attraction {
        name: "Bangus Valley",
        distance: "25 km",
    },
    Attraction {
        name: "Lolab Valley",
        distance: "20 km",
    },
    Attraction {
        name: "Karen",
        distance: "25 km",
    },
    Attraction {
        name: "Tangdar",
        distance: "45 km",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Meal {
    pub kind: &'static str,
    pub price: &'static str,
    pub details: &'static str,
}

pub const MEALS: &[Meal] = &[
    Meal {
        kind: "Breakfast",
        price: "Rs. 150",
        details: "Traditional Kashmiri Nanki tea, Bread toast, Eggs, tea and coffee.",
    },
    Meal {
        kind: "Lunch & Dinner",
        price: "Rs. 500",
        details: "Dal, Rice, Roti, Dahi, vegetables, veg Biryani.",
    },
];

pub const SPECIAL_MEALS: &str = "Special Kashmiri Dishes (Kehwa, Nun Chai, Wazwan dishes like Rista, \
     Yakhni, Rogan Josh, etc.) available on order at an additional cost.";

pub const RESEARCH_OWNER: &str = "Dr. Shiekh Marifatul Haq";
pub const RESEARCH_PITCH: &str = "A unique opportunity to advance your research endeavors.";

/// A research field offered at the homestay, optionally backed by a
/// publication. Fields with a publication render as links; the rest as
/// plain tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResearchTopic {
    Link {
        field: &'static str,
        url: &'static str,
    },
    Plain {
        field: &'static str,
    },
}

impl ResearchTopic {
    pub fn field(&self) -> &'static str {
        match self {
            ResearchTopic::Link { field, .. } => field,
            ResearchTopic::Plain { field } => field,
        }
    }
}

pub const RESEARCH_TOPICS: &[ResearchTopic] = &[
    ResearchTopic::Link {
        field: "Forest Ecology",
        url: "https://link.springer.com/article/10.1186/s13002-023-00606-3",
    },
    ResearchTopic::Link {
        field: "Ethnobiology",
        url: "https://www.mdpi.com/2079-7737/11/3/455",
    },
    ResearchTopic::Link {
        field: "Wildlife",
        url: "https://link.springer.com/article/10.1007/s10531-024-02778-0",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exploration {
    pub title: &'static str,
    pub text: &'static str,
}

pub const EXPLORATIONS: &[Exploration] = &[
    Exploration {
        title: "Lolab Valley",
        text: "Explore the serene landscapes of Lolab Valley.",
    },
    Exploration {
        title: "Manigah Meadows",
        text: "Trek through Manigah Meadows for stunning views.",
    },
    Exploration {
        title: "Villages",
        text: "Visit picturesque villages like Karen and Tangdar.",
    },
];

pub const FACILITIES: &[&str] = &[
    "Free WiFi",
    "Parking Facilities",
    "Delicious home-cooked meals featuring local cuisine",
    "Outdoor seating area to enjoy picturesque views",
    "Seasonal Fruits available",
    "Literature on Forest Biodiversity and Local Traditional Knowledge",
    "Laundry service",
    "Facilities for trekking (tents, sleeping bags, trekking sticks)",
    "Guided tours to nearby forests and mountain areas",
    "Assistance with pick-up and drop-off service (paid)",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceOption {
    pub kind: &'static str,
    pub subtitle: &'static str,
    pub price_inr: u32,
    pub price_usd: u32,
    pub occupancy: &'static str,
    pub description: &'static str,
    pub available_rooms: u32,
    pub is_featured: bool,
}

pub const PRICING_HEADING: &str = "Our Exclusive Stay Options";
pub const PRICING_TAGLINE: &str =
    "Experience the tranquility of Kupwara with tailored pricing plans.";

pub const PRICING_PLANS: &[PriceOption] = &[
    PriceOption {
        kind: "Single Room",
        subtitle: "Single Occupancy",
        price_inr: 1600,
        price_usd: 20,
        occupancy: "Solo Traveler (1 Person)",
        description: "Private comfort for the independent explorer.",
        available_rooms: 4,
        is_featured: false,
    },
    PriceOption {
        kind: "Double Room",
        subtitle: "Double Occupancy",
        price_inr: 2500,
        price_usd: 30,
        occupancy: "Shared Retreat (2 Persons)",
        description: "Perfect space for couples or shared accommodation.",
        available_rooms: 4,
        is_featured: true,
    },
    PriceOption {
        kind: "Family Suite",
        subtitle: "(2 double beds: occupy 4 persons)",
        price_inr: 4500,
        price_usd: 54,
        occupancy: "Family & Group (4 Persons)",
        description: "Two double beds ensuring comfort for the whole group.",
        available_rooms: 4,
        is_featured: false,
    },
];

pub const BREAKFAST_INCLUDED: &str = "Includes daily Breakfast (Rs. 150 value)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Album {
    pub title: &'static str,
    pub description: &'static str,
    /// Captions for the photographs in the album.
    pub photos: &'static [&'static str],
}

pub const GALLERY_HEADING: &str = "Our Photo Gallery";
pub const GALLERY_TAGLINE: &str = "Explore the beauty of the homestay and its serene surroundings in \
     Kashmir through our curated albums.";

pub const ALBUMS: &[Album] = &[
    Album {
        title: "The House",
        description: "Exterior views, architecture, and the beautiful facade.",
        photos: &[
            "The front facade from the orchard path",
            "The carved wooden balcony",
            "The house against the mountain backdrop",
        ],
    },
    Album {
        title: "Interiors",
        description: "Cozy rooms, traditional wooden accents, and common areas.",
        photos: &[
            "A guest room with traditional woodwork",
            "The shared sitting room",
            "The dining area",
        ],
    },
    Album {
        title: "Surroundings",
        description: "The apple orchard, nearby landscapes, and stunning Kashmir views.",
        photos: &[
            "Apple trees in bloom",
            "The stream below the orchard",
            "Morning mist over the valley",
            "The trail towards the forest",
            "Terraced fields in late summer",
            "Snow on the far ridgeline",
            "The orchard at harvest time",
            "Wildflowers along the boundary wall",
            "The village road at dusk",
            "Pine forest above the homestay",
            "The valley floor from the ridge",
        ],
    },
    Album {
        title: "Food & Dining",
        description: "Wazwan, local delicacies, and dining experiences at the homestay.",
        photos: &[
            "A Wazwan platter",
            "Nun Chai and fresh bread",
            "Breakfast on the veranda",
            "Rogan Josh served with rice",
            "Seasonal fruit from the orchard",
        ],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NearbyLocation {
    pub name: &'static str,
    pub description: &'static str,
    pub distance: &'static str,
    /// Captions for the location's gallery photographs.
    pub photos: &'static [&'static str],
}

pub const NEARBY_HEADING: &str = "Explore Nearby Attractions";
pub const NEARBY_TAGLINE: &str =
    "Discover the beauty and history just a short trip from our location.";

pub const NEARBY_LOCATIONS: &[NearbyLocation] = &[
    NearbyLocation {
        name: "Bungus Valley",
        description: "Bungus Valley is a serene, untouched meadow in Jammu & Kashmir known \
                      for its lush greenery and Himalayan beauty.",
        distance: "25km Away",
        photos: &[
            "The open meadow in midsummer",
            "Grazing herds below the treeline",
            "The stream crossing the valley floor",
            "Clouds breaking over the ridges",
        ],
    },
    NearbyLocation {
        name: "Tangadar",
        description: "Tangdhar is a scenic town in Jammu & Kashmir, famous for its mountain \
                      views, rivers, and peaceful border-area charm.",
        distance: "45km Away",
        photos: &[
            "The town from the approach road",
            "The river bend below the bridge",
            "Terraced slopes above the town",
            "Sunset over the western peaks",
        ],
    },
    NearbyLocation {
        name: "Karen",
        description: "Karen is a quiet border village in Jammu & Kashmir, known for its \
                      scenic riverside views and gateway to the Karnah Valley.",
        distance: "25km Away",
        photos: &[
            "The riverside path",
            "Wooden houses along the bank",
            "The valley narrowing upstream",
            "Fishing spots below the village",
        ],
    },
    NearbyLocation {
        name: "Lolab Valley",
        description: "Lolab Valley is a lush green valley in Jammu & Kashmir, famous for \
                      its forests, meadows, and peaceful natural beauty.",
        distance: "20km Away",
        photos: &[
            "The valley mouth from the pass",
            "Walnut groves along the road",
            "The meadow at Kalaroos",
            "Dense forest on the northern slopes",
        ],
    },
];

pub const BOOKING_HEADING: &str = "Send Your Booking Request";
pub const BOOKING_TAGLINE: &str =
    "Fill out the details below, and we will confirm availability shortly.";

pub const BOOKING_POLICIES: &[&str] = &[
    "Flexible check-in and check-out with 24-hour staff assistance.",
    "A 30% advance payment is required to confirm your booking.",
    "The remaining balance is payable upon arrival.",
    "Smoking is permitted only in designated outdoor areas.",
    "Kindly handle the property with care; guests are responsible for damages.",
];

pub const CONTACT_PHONE: &str = "+91 97971 52006";
pub const CONTACT_WHATSAPP: &str = "+91 70063 79928";
pub const CONTACT_EMAIL: &str = "orchardhomestay17@gmail.com";
pub const EMAIL_SUBJECT: &str = "Booking Inquiry for The Orchard Homestay";

pub const ADDRESS_LINE: &str = "Bhat Mohallah Villagam";
pub const CITY_STATE: &str = "Kupwara, Jammu & Kashmir";
pub const COUNTRY: &str = "India";
pub const POSTAL_CODE: &str = "193224";

pub const FOOTER_MISSION: &str = "Experience the tranquility of Kashmir. Your peaceful retreat amidst \
     orchards and mountains.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkGroup {
    pub title: &'static str,
    pub links: &'static [&'static str],
}

pub const FOOTER_LINKS: &[LinkGroup] = &[
    LinkGroup {
        title: "Quick Links",
        links: &["Home", "Rooms & Pricing", "Gallery", "Testimonials"],
    },
    LinkGroup {
        title: "Policies",
        links: &["Check-in/Out Rules", "Privacy Policy"],
    },
];

pub const FACEBOOK_URL: &str = "https://www.facebook.com/yourhomestayprofile";
pub const INSTAGRAM_URL: &str = "https://www.instagram.com/yourhomestayprofile";

pub const MAP_EMBED_URL: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d210447.01304136054!2d73.95175737182271!3d34.49693681996497!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x38e0e74d36693c7d%3A0x6152db97900e698d!2sBhat%20Mohalla!5e0!3m2!1sen!2sus!4v1767356489207!5m2!1sen!2sus";
