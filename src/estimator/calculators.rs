//! Category price calculators.
//!
//! Pure functions from a working state to a price range. Turnkey and
//! finishing are gated (missing required selections yield no result);
//! electric and plumbing always price, with zero counts giving a zero range.

use rust_decimal::Decimal;

use super::catalog::{self, ElectricItem, PlumbingItem, RateRange};
use super::state::{ElectricState, FinishingState, PlumbingState, TurnkeyState};
use super::validate::clamp;

/// Turnkey estimate: area x level base range x type coef x condition coef.
///
/// Requires all four inputs; the resulting range is a standalone package
/// quote and is never aggregated with the other categories.
pub fn turnkey(state: &TurnkeyState) -> Option<RateRange> {
    let object_type = state.object_type?;
    let condition = state.condition?;
    let level = state.level?;
    let area = clamp(state.area.amount());
    if area <= Decimal::ZERO {
        return None;
    }

    let coef = catalog::object_type_coef(object_type) * catalog::condition_coef(condition);
    Some(catalog::level_rate(level).scale(area).scale(coef))
}

/// Finishing estimate: area x zone/service base range x option coefficients.
///
/// The urgency and complexity surcharges are independent and multiply.
pub fn finishing(state: &FinishingState) -> Option<RateRange> {
    let zone = state.zone?;
    let service = state.service?;
    let base = catalog::finishing_rate(zone, service)?;
    let area = clamp(state.area.amount());
    if area <= Decimal::ZERO {
        return None;
    }

    let mut coef = Decimal::ONE;
    if state.urgency {
        coef *= catalog::urgency_coef();
    }
    if state.complexity {
        coef *= catalog::complexity_coef();
    }
    Some(base.scale(area).scale(coef))
}

/// Electrical estimate: linear sum of count x rate over all items, then the
/// wiring-mode coefficient applied to the whole sum.
pub fn electric(state: &ElectricState) -> RateRange {
    let mut sum = RateRange::zero();
    for item in ElectricItem::ALL {
        sum = sum + catalog::electric_rate(item).times(state.count(item));
    }
    sum.scale(catalog::wiring_coef(state.wiring_mode))
}

/// Plumbing estimate: linear sum over all fixtures plus the pipe run, then
/// the grooving coefficient if enabled.
pub fn plumbing(state: &PlumbingState) -> RateRange {
    let mut sum = RateRange::zero();
    for item in PlumbingItem::ALL {
        sum = sum + catalog::plumbing_rate(item).times(state.count(item));
    }
    sum = sum + catalog::pipe_meter_rate().scale(clamp(state.pipe_meters.amount()));

    if state.grooving {
        sum.scale(catalog::grooving_coef())
    } else {
        sum
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimator::catalog::{
        Condition, FinishLevel, FinishService, FinishZone, ObjectType, WiringMode,
    };
    use rust_decimal_macros::dec;

    fn full_turnkey() -> TurnkeyState {
        let mut state = TurnkeyState::default();
        state.set_object_type(ObjectType::Apartment);
        state.set_area("50");
        state.set_condition(Condition::Newbuild);
        state.set_level(FinishLevel::Economy);
        state
    }

    #[test]
    fn turnkey_economy_apartment_50m2() {
        let result = turnkey(&full_turnkey()).unwrap();
        assert_eq!(result.min, dec!(375000));
        assert_eq!(result.max, dec!(490000));
    }

    #[test]
    fn turnkey_applies_both_coefficients() {
        let mut state = full_turnkey();
        state.set_object_type(ObjectType::House);
        state.set_condition(Condition::Secondary);
        let result = turnkey(&state).unwrap();
        // 50 * 7500 * 1.12 * 1.15
        assert_eq!(result.min, dec!(483000));
        assert_eq!(result.max, dec!(631120)); // 50 * 9800 * 1.288
    }

    #[test]
    fn turnkey_requires_every_input() {
        let mut state = full_turnkey();
        state.level = None;
        assert!(turnkey(&state).is_none());

        let mut state = full_turnkey();
        state.object_type = None;
        assert!(turnkey(&state).is_none());

        let mut state = full_turnkey();
        state.condition = None;
        assert!(turnkey(&state).is_none());

        let mut state = full_turnkey();
        state.set_area("0");
        assert!(turnkey(&state).is_none());
        state.set_area("");
        assert!(turnkey(&state).is_none());
    }

    #[test]
    fn finishing_walls_putty_with_urgency() {
        let mut state = FinishingState::default();
        state.set_zone(FinishZone::Walls);
        assert!(state.set_service(FinishService::Putty));
        state.set_area("20");
        state.set_urgency(true);
        let result = finishing(&state).unwrap();
        // 20 * 180 * 1.2 / 20 * 260 * 1.2
        assert_eq!(result.min, dec!(4320));
        assert_eq!(result.max, dec!(6240));
    }

    #[test]
    fn finishing_coefficients_compose_multiplicatively() {
        let mut state = FinishingState::default();
        state.set_zone(FinishZone::Floor);
        assert!(state.set_service(FinishService::Tile));
        state.set_area("10");
        state.set_urgency(true);
        state.set_complexity(true);
        let result = finishing(&state).unwrap();
        // 10 * 420 * 1.2 * 1.18
        assert_eq!(result.min, dec!(5947.2));
        assert_eq!(result.max, dec!(9628.8));
    }

    #[test]
    fn finishing_needs_resolvable_service_and_area() {
        let mut state = FinishingState::default();
        state.set_zone(FinishZone::Walls);
        state.set_area("20");
        assert!(finishing(&state).is_none(), "no service chosen");

        assert!(state.set_service(FinishService::Paint));
        state.set_area("");
        assert!(finishing(&state).is_none(), "area unset");
    }

    #[test]
    fn electric_five_sockets_partial_rewiring() {
        let mut state = ElectricState::default();
        state.set_count(ElectricItem::Sockets, 5);
        state.set_wiring_mode(WiringMode::Partial);
        let result = electric(&state);
        assert_eq!(result.min, dec!(2318)); // 5 * 380 * 1.22
        assert_eq!(result.max, dec!(3538)); // 5 * 580 * 1.22
    }

    #[test]
    fn electric_empty_state_prices_to_zero() {
        let result = electric(&ElectricState::default());
        assert_eq!(result, RateRange::zero());
    }

    #[test]
    fn electric_coefficient_scales_the_sum_not_items() {
        let mut state = ElectricState::default();
        state.set_count(ElectricItem::Sockets, 2);
        state.set_count(ElectricItem::Panel, 1);
        state.set_wiring_mode(WiringMode::Full);
        let result = electric(&state);
        // (2*380 + 4200) * 1.55
        assert_eq!(result.min, dec!(7688.00));
        // (2*580 + 7800) * 1.55
        assert_eq!(result.max, dec!(13888.00));
    }

    #[test]
    fn plumbing_fixtures_pipes_and_grooving() {
        let mut state = PlumbingState::default();
        state.set_count(PlumbingItem::Toilet, 1);
        state.set_count(PlumbingItem::Sink, 1);
        state.set_pipe_meters("10");
        state.set_grooving(true);
        let result = plumbing(&state);
        // (1800 + 1400 + 10*320) * 1.2
        assert_eq!(result.min, dec!(7680.0));
        // (2800 + 2400 + 10*560) * 1.2
        assert_eq!(result.max, dec!(12960.0));
    }

    #[test]
    fn plumbing_empty_state_prices_to_zero() {
        let result = plumbing(&PlumbingState::default());
        assert_eq!(result, RateRange::zero());
    }

    #[test]
    fn turnkey_survives_extreme_area_input() {
        // A 29-digit area parses as a Decimal; the capped field must keep
        // the rate multiplication from overflowing.
        let mut state = full_turnkey();
        state.set_area("10000000000000000000000000000");
        let result = turnkey(&state).expect("capped area still prices");
        assert!(result.min <= result.max);
        // 1e9 m2 at the economy base rate.
        assert_eq!(result.min, dec!(7500000000000));
    }

    #[test]
    fn plumbing_survives_extreme_pipe_run() {
        let mut state = PlumbingState::default();
        state.set_pipe_meters("10000000000000000000000000000");
        state.set_grooving(true);
        let result = plumbing(&state);
        assert!(result.min <= result.max);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;
        use rust_decimal::Decimal;

        fn wiring_mode() -> impl Strategy<Value = WiringMode> {
            prop_oneof![
                Just(WiringMode::None),
                Just(WiringMode::Partial),
                Just(WiringMode::Full),
            ]
        }

        proptest! {
            #[test]
            fn electric_min_never_exceeds_max(
                counts in proptest::array::uniform5(0u32..500),
                mode in wiring_mode(),
            ) {
                let mut state = ElectricState::default();
                for (item, count) in ElectricItem::ALL.into_iter().zip(counts) {
                    state.set_count(item, count);
                }
                state.set_wiring_mode(mode);
                let result = electric(&state);
                prop_assert!(result.min <= result.max);
            }

            #[test]
            fn plumbing_min_never_exceeds_max(
                counts in proptest::array::uniform6(0u32..500),
                meters in 0u32..10_000,
                grooving in any::<bool>(),
            ) {
                let mut state = PlumbingState::default();
                for (item, count) in PlumbingItem::ALL.into_iter().zip(counts) {
                    state.set_count(item, count);
                }
                state.set_pipe_meters(&meters.to_string());
                state.set_grooving(grooving);
                let result = plumbing(&state);
                prop_assert!(result.min <= result.max);
            }

            #[test]
            fn turnkey_min_never_exceeds_max(
                object_idx in 0usize..3,
                condition_idx in 0usize..3,
                level_idx in 0usize..3,
                area in 1u32..100_000,
            ) {
                let mut state = TurnkeyState::default();
                state.set_object_type(ObjectType::ALL[object_idx]);
                state.set_condition(Condition::ALL[condition_idx]);
                state.set_level(FinishLevel::ALL[level_idx]);
                state.set_area(&area.to_string());

                let result = turnkey(&state).expect("all inputs set");
                prop_assert!(result.min <= result.max);
                prop_assert!(result.min > Decimal::ZERO);
            }

            #[test]
            fn finishing_min_never_exceeds_max(
                zone_idx in 0usize..3,
                service_idx in 0usize..4,
                area in 1u32..100_000,
                urgency in any::<bool>(),
                complexity in any::<bool>(),
            ) {
                let zone = FinishZone::ALL[zone_idx];
                let services = crate::estimator::catalog::services_for(zone);
                let service = services[service_idx % services.len()];

                let mut state = FinishingState::default();
                state.set_zone(zone);
                prop_assert!(state.set_service(service));
                state.set_area(&area.to_string());
                state.set_urgency(urgency);
                state.set_complexity(complexity);

                let result = finishing(&state).expect("all inputs set");
                prop_assert!(result.min <= result.max);
                prop_assert!(result.min >= Decimal::ZERO);
            }
        }
    }
}
