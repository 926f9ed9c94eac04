//! Static pricing catalog.
//!
//! All rates and coefficients live here as closed enums with total lookup
//! functions. The only partial lookup is [`finishing_rate`]: a zone/service
//! pair outside the catalog yields `None` and blocks calculation, while
//! optional coefficients are total over their enums and can never miss.
//!
//! Rates are UAH per square meter (turnkey, finishing), per unit (electric,
//! plumbing fixtures) or per meter (pipe runs).

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

/// A min/max price pair drawn from the catalog or derived from it.
///
/// Invariant: `min <= max`. Ranges are only built from catalog constants or
/// by arithmetic on existing ranges, so the invariant holds by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateRange {
    pub min: Decimal,
    pub max: Decimal,
}

impl RateRange {
    pub fn new(min: Decimal, max: Decimal) -> Self {
        debug_assert!(min <= max, "rate range with min > max");
        Self { min, max }
    }

    pub fn zero() -> Self {
        Self {
            min: Decimal::ZERO,
            max: Decimal::ZERO,
        }
    }

    /// Scale both bounds by a non-negative multiplier (area or coefficient).
    pub fn scale(self, coef: Decimal) -> Self {
        Self::new(self.min * coef, self.max * coef)
    }

    /// Multiply both bounds by a unit count.
    pub fn times(self, count: u32) -> Self {
        self.scale(Decimal::from(count))
    }
}

impl std::ops::Add for RateRange {
    type Output = RateRange;

    fn add(self, rhs: RateRange) -> RateRange {
        RateRange::new(self.min + rhs.min, self.max + rhs.max)
    }
}

/// One of the four service categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Turnkey,
    Finishing,
    Electric,
    Plumbing,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Turnkey,
        Category::Finishing,
        Category::Electric,
        Category::Plumbing,
    ];

    /// Display title for the category menu.
    pub fn title(self) -> &'static str {
        match self {
            Category::Turnkey => "Turnkey renovation",
            Category::Finishing => "Finishing works",
            Category::Electric => "Electrical works",
            Category::Plumbing => "Plumbing works",
        }
    }

    /// Fixed number of wizard steps for the category.
    pub fn steps(self) -> u8 {
        match self {
            Category::Turnkey => 4,
            Category::Finishing => 3,
            Category::Electric => 1,
            Category::Plumbing => 1,
        }
    }
}

/// Property type for a turnkey renovation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectType {
    Apartment,
    House,
    Commercial,
}

impl ObjectType {
    pub const ALL: [ObjectType; 3] = [
        ObjectType::Apartment,
        ObjectType::House,
        ObjectType::Commercial,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ObjectType::Apartment => "Apartment",
            ObjectType::House => "House",
            ObjectType::Commercial => "Commercial space",
        }
    }
}

/// Current condition of the property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    Newbuild,
    Secondary,
    Demolished,
}

impl Condition {
    pub const ALL: [Condition; 3] = [
        Condition::Newbuild,
        Condition::Secondary,
        Condition::Demolished,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Condition::Newbuild => "New build",
            Condition::Secondary => "Secondary housing",
            Condition::Demolished => "After demolition",
        }
    }
}

/// Finish quality tier for a turnkey renovation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FinishLevel {
    Economy,
    Standard,
    Premium,
}

impl FinishLevel {
    pub const ALL: [FinishLevel; 3] = [
        FinishLevel::Economy,
        FinishLevel::Standard,
        FinishLevel::Premium,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FinishLevel::Economy => "Economy",
            FinishLevel::Standard => "Standard",
            FinishLevel::Premium => "Premium",
        }
    }
}

/// Work zone for finishing jobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FinishZone {
    Walls,
    Ceiling,
    Floor,
}

impl FinishZone {
    pub const ALL: [FinishZone; 3] = [FinishZone::Walls, FinishZone::Ceiling, FinishZone::Floor];

    pub fn label(self) -> &'static str {
        match self {
            FinishZone::Walls => "Walls",
            FinishZone::Ceiling => "Ceiling",
            FinishZone::Floor => "Floor",
        }
    }
}

/// Concrete finishing service. Which services are available depends on the
/// zone, see [`services_for`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FinishService {
    Putty,
    Paint,
    Wallpaper,
    Drywall,
    Stretch,
    Gkl,
    Screed,
    Laminate,
    Tile,
}

impl FinishService {
    pub fn label(self) -> &'static str {
        match self {
            FinishService::Putty => "Putty",
            FinishService::Paint => "Paint",
            FinishService::Wallpaper => "Wallpaper",
            FinishService::Drywall => "Drywall",
            FinishService::Stretch => "Stretch ceiling",
            FinishService::Gkl => "Plasterboard ceiling",
            FinishService::Screed => "Screed",
            FinishService::Laminate => "Laminate",
            FinishService::Tile => "Tile",
        }
    }
}

/// Counted electrical installation items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ElectricItem {
    Sockets,
    Switches,
    Lights,
    FloorHeating,
    Panel,
}

impl ElectricItem {
    pub const ALL: [ElectricItem; 5] = [
        ElectricItem::Sockets,
        ElectricItem::Switches,
        ElectricItem::Lights,
        ElectricItem::FloorHeating,
        ElectricItem::Panel,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ElectricItem::Sockets => "Sockets",
            ElectricItem::Switches => "Switches",
            ElectricItem::Lights => "Light fixtures",
            ElectricItem::FloorHeating => "Floor heating",
            ElectricItem::Panel => "Distribution panel",
        }
    }
}

/// How much of the wiring has to be replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WiringMode {
    #[default]
    None,
    Partial,
    Full,
}

impl WiringMode {
    pub const ALL: [WiringMode; 3] = [WiringMode::None, WiringMode::Partial, WiringMode::Full];

    pub fn label(self) -> &'static str {
        match self {
            WiringMode::None => "No rewiring",
            WiringMode::Partial => "Partial rewiring",
            WiringMode::Full => "Full rewiring",
        }
    }
}

/// Counted plumbing fixtures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlumbingItem {
    Toilet,
    Sink,
    Shower,
    Bathtub,
    Boiler,
    Washer,
}

impl PlumbingItem {
    pub const ALL: [PlumbingItem; 6] = [
        PlumbingItem::Toilet,
        PlumbingItem::Sink,
        PlumbingItem::Shower,
        PlumbingItem::Bathtub,
        PlumbingItem::Boiler,
        PlumbingItem::Washer,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PlumbingItem::Toilet => "Toilet",
            PlumbingItem::Sink => "Sink",
            PlumbingItem::Shower => "Shower",
            PlumbingItem::Bathtub => "Bathtub",
            PlumbingItem::Boiler => "Boiler",
            PlumbingItem::Washer => "Washing machine",
        }
    }
}

/// Base rate per m² for a turnkey finish level.
pub fn level_rate(level: FinishLevel) -> RateRange {
    match level {
        FinishLevel::Economy => RateRange::new(dec!(7500), dec!(9800)),
        FinishLevel::Standard => RateRange::new(dec!(9800), dec!(13200)),
        FinishLevel::Premium => RateRange::new(dec!(13200), dec!(18500)),
    }
}

/// Price multiplier for the property type.
pub fn object_type_coef(object_type: ObjectType) -> Decimal {
    match object_type {
        ObjectType::Apartment => dec!(1),
        ObjectType::House => dec!(1.12),
        ObjectType::Commercial => dec!(1.18),
    }
}

/// Price multiplier for the property condition.
pub fn condition_coef(condition: Condition) -> Decimal {
    match condition {
        Condition::Newbuild => dec!(1),
        Condition::Secondary => dec!(1.15),
        Condition::Demolished => dec!(1.28),
    }
}

/// Services offered for a finishing zone, in menu order.
pub fn services_for(zone: FinishZone) -> &'static [FinishService] {
    match zone {
        FinishZone::Walls => &[
            FinishService::Putty,
            FinishService::Paint,
            FinishService::Wallpaper,
            FinishService::Drywall,
        ],
        FinishZone::Ceiling => &[
            FinishService::Stretch,
            FinishService::Paint,
            FinishService::Gkl,
        ],
        FinishZone::Floor => &[
            FinishService::Screed,
            FinishService::Laminate,
            FinishService::Tile,
        ],
    }
}

/// Base rate per m² for a zone/service pair.
///
/// This is the one mandatory lookup that can miss: a service outside the
/// zone's catalog has no price and the caller must treat that as "no result".
pub fn finishing_rate(zone: FinishZone, service: FinishService) -> Option<RateRange> {
    let rate = match (zone, service) {
        (FinishZone::Walls, FinishService::Putty) => RateRange::new(dec!(180), dec!(260)),
        (FinishZone::Walls, FinishService::Paint) => RateRange::new(dec!(160), dec!(250)),
        (FinishZone::Walls, FinishService::Wallpaper) => RateRange::new(dec!(170), dec!(290)),
        (FinishZone::Walls, FinishService::Drywall) => RateRange::new(dec!(420), dec!(650)),
        (FinishZone::Ceiling, FinishService::Stretch) => RateRange::new(dec!(350), dec!(520)),
        (FinishZone::Ceiling, FinishService::Paint) => RateRange::new(dec!(180), dec!(280)),
        (FinishZone::Ceiling, FinishService::Gkl) => RateRange::new(dec!(420), dec!(640)),
        (FinishZone::Floor, FinishService::Screed) => RateRange::new(dec!(250), dec!(380)),
        (FinishZone::Floor, FinishService::Laminate) => RateRange::new(dec!(240), dec!(360)),
        (FinishZone::Floor, FinishService::Tile) => RateRange::new(dec!(420), dec!(680)),
        _ => return None,
    };
    Some(rate)
}

/// Urgency surcharge for finishing works.
pub fn urgency_coef() -> Decimal {
    dec!(1.2)
}

/// Complexity surcharge for finishing works.
pub fn complexity_coef() -> Decimal {
    dec!(1.18)
}

/// Per-unit installation rate for an electrical item.
pub fn electric_rate(item: ElectricItem) -> RateRange {
    match item {
        ElectricItem::Sockets => RateRange::new(dec!(380), dec!(580)),
        ElectricItem::Switches => RateRange::new(dec!(320), dec!(520)),
        ElectricItem::Lights => RateRange::new(dec!(420), dec!(700)),
        ElectricItem::FloorHeating => RateRange::new(dec!(1300), dec!(2100)),
        ElectricItem::Panel => RateRange::new(dec!(4200), dec!(7800)),
    }
}

/// Multiplier applied to the whole electrical estimate for the wiring mode.
pub fn wiring_coef(mode: WiringMode) -> Decimal {
    match mode {
        WiringMode::None => dec!(1),
        WiringMode::Partial => dec!(1.22),
        WiringMode::Full => dec!(1.55),
    }
}

/// Per-unit installation rate for a plumbing fixture.
pub fn plumbing_rate(item: PlumbingItem) -> RateRange {
    match item {
        PlumbingItem::Toilet => RateRange::new(dec!(1800), dec!(2800)),
        PlumbingItem::Sink => RateRange::new(dec!(1400), dec!(2400)),
        PlumbingItem::Shower => RateRange::new(dec!(3200), dec!(5200)),
        PlumbingItem::Bathtub => RateRange::new(dec!(3400), dec!(5600)),
        PlumbingItem::Boiler => RateRange::new(dec!(2200), dec!(3600)),
        PlumbingItem::Washer => RateRange::new(dec!(1200), dec!(2100)),
    }
}

/// Rate per meter of pipe run.
pub fn pipe_meter_rate() -> RateRange {
    RateRange::new(dec!(320), dec!(560))
}

/// Multiplier when wall grooving is required.
pub fn grooving_coef() -> Decimal {
    dec!(1.2)
}
