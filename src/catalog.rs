//! Static specimen catalog and the multiple-choice answer options per kind.
//!
//! Images are referenced by URL only; the crop / zoom numbers are CSS
//! parameters (background-position percentages and a transform scale).

/// The two specimen families. Each family has its own set of three answers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpecimenKind {
    Crust,
    Fruit,
}

impl SpecimenKind {
    pub fn as_str(self) -> &'static str {
        match self {
            SpecimenKind::Crust => "crust",
            SpecimenKind::Fruit => "fruit",
        }
    }

    /// Line shown under the reveal banner.
    pub fn confirmation(self) -> &'static str {
        match self {
            SpecimenKind::Crust => "CARBOHYDRATE SPECIMEN CONFIRMED",
            SpecimenKind::Fruit => "ORGANIC FRUIT MATTER DETECTED",
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct CatalogItem {
    pub id: &'static str,
    pub image_url: &'static str,
    pub kind: SpecimenKind,
    pub correct_answer: &'static str, // id of an AnswerOption of the same kind
    pub name: &'static str,
    pub crop_x: f64, // background-position x, percent
    pub crop_y: f64, // background-position y, percent
    pub scale: f64,
}

/// One multiple-choice button. `theme` is the (from, to, border) colour triple.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnswerOption {
    pub id: &'static str,
    pub label: &'static str,
    pub theme: (&'static str, &'static str, &'static str),
}

const BREAD_URL: &str =
    "https://images.pexels.com/photos/1775043/pexels-photo-1775043.jpeg?auto=compress&cs=tinysrgb&w=800";
const RUSK_URL: &str =
    "https://images.pexels.com/photos/4110256/pexels-photo-4110256.jpeg?auto=compress&cs=tinysrgb&w=800";
const BAGUETTE_URL: &str =
    "https://images.pexels.com/photos/4110039/pexels-photo-4110039.jpeg?auto=compress&cs=tinysrgb&w=800";
const PIZZA_URL: &str =
    "https://images.pexels.com/photos/315755/pexels-photo-315755.jpeg?auto=compress&cs=tinysrgb&w=800";
const CUCUMBER_URL: &str =
    "https://images.pexels.com/photos/128420/pexels-photo-128420.jpeg?auto=compress&cs=tinysrgb&w=800";
const KIWI_URL: &str =
    "https://images.pexels.com/photos/357573/pexels-photo-357573.jpeg?auto=compress&cs=tinysrgb&w=800";
const GRAPE_URL: &str =
    "https://images.pexels.com/photos/1132047/pexels-photo-1132047.jpeg?auto=compress&cs=tinysrgb&w=800";

const fn item(
    id: &'static str,
    image_url: &'static str,
    kind: SpecimenKind,
    correct_answer: &'static str,
    name: &'static str,
    crop: (f64, f64),
    scale: f64,
) -> CatalogItem {
    CatalogItem {
        id,
        image_url,
        kind,
        correct_answer,
        name,
        crop_x: crop.0,
        crop_y: crop.1,
        scale,
    }
}

pub const CATALOG: &[CatalogItem] = &[
    // Crusts: bread crust, rusk, pizza crust
    item("crust1", BREAD_URL, SpecimenKind::Crust, "bread-crust", "Artisan Bread Crust", (65.0, 40.0), 6.0),
    item("crust2", RUSK_URL, SpecimenKind::Crust, "rusk", "Rustic Rusk", (45.0, 55.0), 5.5),
    item("crust3", PIZZA_URL, SpecimenKind::Crust, "pizza-crust", "Pizza Crust Edge", (30.0, 70.0), 7.0),
    item("crust4", BREAD_URL, SpecimenKind::Crust, "bread-crust", "Sourdough Texture", (80.0, 25.0), 8.0),
    item("crust5", BAGUETTE_URL, SpecimenKind::Crust, "rusk", "Baguette Rusk", (55.0, 45.0), 6.5),
    item("crust6", PIZZA_URL, SpecimenKind::Crust, "pizza-crust", "Crispy Pizza Edge", (75.0, 35.0), 7.5),
    // Green fruit interiors: kiwi, cucumber, green grape
    item("fruit1", CUCUMBER_URL, SpecimenKind::Fruit, "cucumber", "Cucumber Interior", (50.0, 50.0), 8.0),
    item("fruit2", KIWI_URL, SpecimenKind::Fruit, "kiwi", "Kiwi Cross-Section", (45.0, 55.0), 7.0),
    item("fruit3", GRAPE_URL, SpecimenKind::Fruit, "green-grape", "Green Grape Interior", (60.0, 40.0), 9.0),
    item("fruit4", CUCUMBER_URL, SpecimenKind::Fruit, "cucumber", "Cucumber Seeds", (35.0, 65.0), 10.0),
    item("fruit5", KIWI_URL, SpecimenKind::Fruit, "kiwi", "Kiwi Flesh Texture", (70.0, 30.0), 8.5),
    item("fruit6", GRAPE_URL, SpecimenKind::Fruit, "green-grape", "Green Grape Flesh", (25.0, 75.0), 7.5),
];

pub const CRUST_OPTIONS: &[AnswerOption] = &[
    AnswerOption { id: "bread-crust", label: "🍞 BREAD CRUST", theme: ("#b45309", "#ea580c", "#fb923c") },
    AnswerOption { id: "rusk", label: "🥖 RUSK", theme: ("#a16207", "#d97706", "#fbbf24") },
    AnswerOption { id: "pizza-crust", label: "🍕 PIZZA CRUST", theme: ("#b91c1c", "#ea580c", "#f87171") },
];

pub const FRUIT_OPTIONS: &[AnswerOption] = &[
    AnswerOption { id: "kiwi", label: "🥝 KIWI", theme: ("#15803d", "#65a30d", "#a3e635") },
    AnswerOption { id: "cucumber", label: "🥒 CUCUMBER", theme: ("#047857", "#16a34a", "#4ade80") },
    AnswerOption { id: "green-grape", label: "🍇 GREEN GRAPE", theme: ("#0f766e", "#059669", "#34d399") },
];

pub fn options_for(kind: SpecimenKind) -> &'static [AnswerOption] {
    match kind {
        SpecimenKind::Crust => CRUST_OPTIONS,
        SpecimenKind::Fruit => FRUIT_OPTIONS,
    }
}

/// Display label for an answer id. Unknown ids are shown verbatim.
pub fn answer_label(id: &str) -> &str {
    CRUST_OPTIONS
        .iter()
        .chain(FRUIT_OPTIONS)
        .find(|opt| opt.id == id)
        .map(|opt| opt.label)
        .unwrap_or(id)
}

pub fn item_by_id(id: &str) -> Option<&'static CatalogItem> {
    let trimmed = id.trim();
    CATALOG.iter().find(|entry| entry.id == trimmed)
}
