//! In-progress, uncommitted selections for each category.
//!
//! Each working state starts at its `Default` value and is only mutated
//! through validated setters. Leaving a category (or a global reset) throws
//! the whole record away and starts over from `Default`.

use rust_decimal::Decimal;

use super::catalog::{
    self, Condition, ElectricItem, FinishLevel, FinishService, FinishZone, ObjectType,
    PlumbingItem, WiringMode,
};
use super::validate::{clamp, parse_amount, NumericField};

/// Working state for a turnkey renovation quote.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TurnkeyState {
    pub object_type: Option<ObjectType>,
    pub area: NumericField,
    pub condition: Option<Condition>,
    pub level: Option<FinishLevel>,
}

impl TurnkeyState {
    pub fn set_object_type(&mut self, object_type: ObjectType) {
        self.object_type = Some(object_type);
    }

    pub fn set_area(&mut self, raw: &str) {
        self.area = parse_amount(raw);
    }

    pub fn set_condition(&mut self, condition: Condition) {
        self.condition = Some(condition);
    }

    pub fn set_level(&mut self, level: FinishLevel) {
        self.level = Some(level);
    }

    /// Whether the given wizard step's required field has been provided.
    pub fn step_complete(&self, step: u8) -> bool {
        match step {
            1 => self.object_type.is_some(),
            2 => clamp(self.area.amount()) > Decimal::ZERO,
            3 => self.condition.is_some(),
            _ => false,
        }
    }
}

/// Working state for a finishing-works quote.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FinishingState {
    pub zone: Option<FinishZone>,
    pub service: Option<FinishService>,
    pub area: NumericField,
    pub urgency: bool,
    pub complexity: bool,
}

impl FinishingState {
    /// Selecting a zone invalidates any previously chosen service, since the
    /// service sets differ per zone.
    pub fn set_zone(&mut self, zone: FinishZone) {
        self.zone = Some(zone);
        self.service = None;
    }

    /// Set the service; ignored unless it belongs to the current zone's
    /// catalog.
    pub fn set_service(&mut self, service: FinishService) -> bool {
        match self.zone {
            Some(zone) if catalog::services_for(zone).contains(&service) => {
                self.service = Some(service);
                true
            }
            _ => false,
        }
    }

    pub fn set_area(&mut self, raw: &str) {
        self.area = parse_amount(raw);
    }

    pub fn set_urgency(&mut self, urgency: bool) {
        self.urgency = urgency;
    }

    pub fn set_complexity(&mut self, complexity: bool) {
        self.complexity = complexity;
    }

    pub fn step_complete(&self, step: u8) -> bool {
        match step {
            1 => self.zone.is_some(),
            2 => self.service.is_some(),
            _ => false,
        }
    }
}

/// Working state for an electrical-works quote. All counters start at zero,
/// which is a valid (zero-priced) configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElectricState {
    sockets: u32,
    switches: u32,
    lights: u32,
    floor_heating: u32,
    panel: u32,
    pub wiring_mode: WiringMode,
}

impl ElectricState {
    pub fn count(&self, item: ElectricItem) -> u32 {
        match item {
            ElectricItem::Sockets => self.sockets,
            ElectricItem::Switches => self.switches,
            ElectricItem::Lights => self.lights,
            ElectricItem::FloorHeating => self.floor_heating,
            ElectricItem::Panel => self.panel,
        }
    }

    pub fn set_count(&mut self, item: ElectricItem, count: u32) {
        let slot = match item {
            ElectricItem::Sockets => &mut self.sockets,
            ElectricItem::Switches => &mut self.switches,
            ElectricItem::Lights => &mut self.lights,
            ElectricItem::FloorHeating => &mut self.floor_heating,
            ElectricItem::Panel => &mut self.panel,
        };
        *slot = count;
    }

    pub fn set_wiring_mode(&mut self, mode: WiringMode) {
        self.wiring_mode = mode;
    }
}

/// Working state for a plumbing-works quote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlumbingState {
    toilet: u32,
    sink: u32,
    shower: u32,
    bathtub: u32,
    boiler: u32,
    washer: u32,
    pub pipe_meters: NumericField,
    pub grooving: bool,
}

impl Default for PlumbingState {
    fn default() -> Self {
        Self {
            toilet: 0,
            sink: 0,
            shower: 0,
            bathtub: 0,
            boiler: 0,
            washer: 0,
            // The pipe-run field starts as an explicit zero, not "unset":
            // plumbing has no gating step, so a blank field and zero meters
            // price identically.
            pipe_meters: NumericField::Value(Decimal::ZERO),
            grooving: false,
        }
    }
}

impl PlumbingState {
    pub fn count(&self, item: PlumbingItem) -> u32 {
        match item {
            PlumbingItem::Toilet => self.toilet,
            PlumbingItem::Sink => self.sink,
            PlumbingItem::Shower => self.shower,
            PlumbingItem::Bathtub => self.bathtub,
            PlumbingItem::Boiler => self.boiler,
            PlumbingItem::Washer => self.washer,
        }
    }

    pub fn set_count(&mut self, item: PlumbingItem, count: u32) {
        let slot = match item {
            PlumbingItem::Toilet => &mut self.toilet,
            PlumbingItem::Sink => &mut self.sink,
            PlumbingItem::Shower => &mut self.shower,
            PlumbingItem::Bathtub => &mut self.bathtub,
            PlumbingItem::Boiler => &mut self.boiler,
            PlumbingItem::Washer => &mut self.washer,
        };
        *slot = count;
    }

    pub fn set_pipe_meters(&mut self, raw: &str) {
        self.pipe_meters = parse_amount(raw);
    }

    pub fn set_grooving(&mut self, grooving: bool) {
        self.grooving = grooving;
    }
}
