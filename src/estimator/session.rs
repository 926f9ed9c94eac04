//! Session state and user-action transitions.
//!
//! The whole estimator is one explicit value, [`EstimatorState`]: wizard
//! position, the four working states, the standalone turnkey result, and the
//! committed per-category estimates. Every user action goes through
//! [`EstimatorState::apply`], which returns a new state; accepted actions
//! bump the version, rejected ones leave the state untouched.

use tracing::{debug, info};

use super::calculators;
use super::catalog::{
    Category, Condition, ElectricItem, FinishLevel, FinishService, FinishZone, ObjectType,
    PlumbingItem, RateRange, WiringMode,
};
use super::state::{ElectricState, FinishingState, PlumbingState, TurnkeyState};
use super::wizard::WizardPosition;

/// Categories whose committed estimates are summed into the running total.
/// Turnkey is deliberately absent: its result is a standalone package quote.
pub const AGGREGATED: [Category; 3] = [Category::Finishing, Category::Electric, Category::Plumbing];

/// Committed estimate slots, one per aggregatable category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Committed {
    pub finishing: Option<RateRange>,
    pub electric: Option<RateRange>,
    pub plumbing: Option<RateRange>,
}

impl Committed {
    pub fn get(&self, category: Category) -> Option<RateRange> {
        match category {
            Category::Turnkey => None,
            Category::Finishing => self.finishing,
            Category::Electric => self.electric,
            Category::Plumbing => self.plumbing,
        }
    }

    fn slot(&mut self, category: Category) -> Option<&mut Option<RateRange>> {
        match category {
            Category::Turnkey => None,
            Category::Finishing => Some(&mut self.finishing),
            Category::Electric => Some(&mut self.electric),
            Category::Plumbing => Some(&mut self.plumbing),
        }
    }
}

/// A discrete user action. One variant per UI interaction.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    OpenCategory(Category),
    Advance,
    Retreat,
    SetObjectType(ObjectType),
    SetCondition(Condition),
    SetLevel(FinishLevel),
    SetTurnkeyArea(String),
    SetZone(FinishZone),
    SetService(FinishService),
    SetFinishingArea(String),
    SetUrgency(bool),
    SetComplexity(bool),
    SetElectricCount(ElectricItem, u32),
    SetWiringMode(WiringMode),
    SetPlumbingCount(PlumbingItem, u32),
    SetPipeMeters(String),
    SetGrooving(bool),
    Calculate,
    Remove(Category),
    ResetAll,
}

/// The complete, versioned application state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EstimatorState {
    pub version: u64,
    pub wizard: WizardPosition,
    pub turnkey: TurnkeyState,
    pub finishing: FinishingState,
    pub electric: ElectricState,
    pub plumbing: PlumbingState,
    /// Terminal turnkey result; shown to the user but never aggregated.
    pub turnkey_result: Option<RateRange>,
    pub committed: Committed,
}

impl EstimatorState {
    /// Apply a user action, returning the next state. Rejected actions
    /// (blocked advance, setter for an inactive category, calculate without
    /// the required inputs) return the state unchanged.
    pub fn apply(&self, action: Action) -> EstimatorState {
        let mut next = self.clone();
        if next.transition(action) {
            next.version += 1;
        }
        next
    }

    fn transition(&mut self, action: Action) -> bool {
        match action {
            Action::OpenCategory(category) => {
                self.reset_working();
                self.wizard = WizardPosition::open(category);
                debug!(?category, "category opened");
                true
            }
            Action::Advance => self.advance(),
            Action::Retreat => self.retreat(),
            Action::SetObjectType(v) => self.in_category(Category::Turnkey, |s| {
                s.turnkey.set_object_type(v);
                true
            }),
            Action::SetCondition(v) => self.in_category(Category::Turnkey, |s| {
                s.turnkey.set_condition(v);
                true
            }),
            Action::SetLevel(v) => self.in_category(Category::Turnkey, |s| {
                s.turnkey.set_level(v);
                true
            }),
            Action::SetTurnkeyArea(raw) => self.in_category(Category::Turnkey, |s| {
                s.turnkey.set_area(&raw);
                true
            }),
            Action::SetZone(v) => self.in_category(Category::Finishing, |s| {
                s.finishing.set_zone(v);
                true
            }),
            Action::SetService(v) => {
                self.in_category(Category::Finishing, |s| s.finishing.set_service(v))
            }
            Action::SetFinishingArea(raw) => self.in_category(Category::Finishing, |s| {
                s.finishing.set_area(&raw);
                true
            }),
            Action::SetUrgency(v) => self.in_category(Category::Finishing, |s| {
                s.finishing.set_urgency(v);
                true
            }),
            Action::SetComplexity(v) => self.in_category(Category::Finishing, |s| {
                s.finishing.set_complexity(v);
                true
            }),
            Action::SetElectricCount(item, count) => self.in_category(Category::Electric, |s| {
                s.electric.set_count(item, count);
                true
            }),
            Action::SetWiringMode(mode) => self.in_category(Category::Electric, |s| {
                s.electric.set_wiring_mode(mode);
                true
            }),
            Action::SetPlumbingCount(item, count) => self.in_category(Category::Plumbing, |s| {
                s.plumbing.set_count(item, count);
                true
            }),
            Action::SetPipeMeters(raw) => self.in_category(Category::Plumbing, |s| {
                s.plumbing.set_pipe_meters(&raw);
                true
            }),
            Action::SetGrooving(v) => self.in_category(Category::Plumbing, |s| {
                s.plumbing.set_grooving(v);
                true
            }),
            Action::Calculate => self.calculate(),
            Action::Remove(category) => self.remove(category),
            Action::ResetAll => {
                self.committed = Committed::default();
                self.reset_working();
                self.wizard = WizardPosition::Menu;
                info!("session reset");
                true
            }
        }
    }

    /// Run a mutation only while its category is active; inputs outside the
    /// open category are not collectible.
    fn in_category(&mut self, category: Category, f: impl FnOnce(&mut Self) -> bool) -> bool {
        if self.wizard.active_category() == Some(category) {
            f(self)
        } else {
            false
        }
    }

    fn advance(&mut self) -> bool {
        let WizardPosition::InCategory { category, step } = self.wizard else {
            return false;
        };
        if step >= category.steps() {
            return false;
        }
        let gate_met = match category {
            Category::Turnkey => self.turnkey.step_complete(step),
            Category::Finishing => self.finishing.step_complete(step),
            // Single-step categories have nothing to advance to.
            Category::Electric | Category::Plumbing => false,
        };
        if !gate_met {
            return false;
        }
        self.wizard = self.wizard.advanced();
        true
    }

    fn retreat(&mut self) -> bool {
        match self.wizard {
            WizardPosition::Menu => false,
            WizardPosition::InCategory { step: 1, .. } => {
                // Backing out of the first step abandons the category.
                self.reset_working();
                self.wizard = WizardPosition::Menu;
                true
            }
            WizardPosition::InCategory { .. } => {
                self.wizard = self.wizard.retreated();
                true
            }
        }
    }

    fn calculate(&mut self) -> bool {
        let Some(category) = self.wizard.active_category() else {
            return false;
        };
        match category {
            Category::Turnkey => match calculators::turnkey(&self.turnkey) {
                Some(result) => {
                    self.turnkey_result = Some(result);
                    info!(min = %result.min, max = %result.max, "turnkey quote produced");
                    true
                }
                None => false,
            },
            Category::Finishing => match calculators::finishing(&self.finishing) {
                Some(result) => self.commit(category, result),
                None => false,
            },
            Category::Electric => {
                let result = calculators::electric(&self.electric);
                self.commit(category, result)
            }
            Category::Plumbing => {
                let result = calculators::plumbing(&self.plumbing);
                self.commit(category, result)
            }
        }
    }

    fn commit(&mut self, category: Category, result: RateRange) -> bool {
        let Some(slot) = self.committed.slot(category) else {
            return false;
        };
        *slot = Some(result);
        info!(?category, min = %result.min, max = %result.max, "estimate committed");
        true
    }

    fn remove(&mut self, category: Category) -> bool {
        let Some(slot) = self.committed.slot(category) else {
            return false;
        };
        if slot.is_none() {
            return false;
        }
        *slot = None;
        match category {
            Category::Turnkey => {}
            Category::Finishing => self.finishing = FinishingState::default(),
            Category::Electric => self.electric = ElectricState::default(),
            Category::Plumbing => self.plumbing = PlumbingState::default(),
        }
        self.wizard = WizardPosition::open(category);
        info!(?category, "estimate removed, category reopened");
        true
    }

    fn reset_working(&mut self) {
        self.turnkey = TurnkeyState::default();
        self.finishing = FinishingState::default();
        self.electric = ElectricState::default();
        self.plumbing = PlumbingState::default();
        self.turnkey_result = None;
    }

    /// Live, uncommitted price range for the open category.
    pub fn preview(&self) -> Option<RateRange> {
        match self.wizard.active_category()? {
            Category::Turnkey => calculators::turnkey(&self.turnkey),
            Category::Finishing => calculators::finishing(&self.finishing),
            Category::Electric => Some(calculators::electric(&self.electric)),
            Category::Plumbing => Some(calculators::plumbing(&self.plumbing)),
        }
    }

    /// Elementwise sum over all present committed estimates, or `None` when
    /// nothing has been committed. Absent categories contribute nothing.
    pub fn total(&self) -> Option<RateRange> {
        let mut total: Option<RateRange> = None;
        for category in AGGREGATED {
            if let Some(range) = self.committed.get(category) {
                total = Some(match total {
                    Some(sum) => sum + range,
                    None => range,
                });
            }
        }
        total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn range(min: rust_decimal::Decimal, max: rust_decimal::Decimal) -> RateRange {
        RateRange::new(min, max)
    }

    /// Drive a fresh state through a sequence of actions.
    fn run(actions: impl IntoIterator<Item = Action>) -> EstimatorState {
        actions
            .into_iter()
            .fold(EstimatorState::default(), |s, a| s.apply(a))
    }

    fn committed_finishing() -> Vec<Action> {
        vec![
            Action::OpenCategory(Category::Finishing),
            Action::SetZone(FinishZone::Walls),
            Action::Advance,
            Action::SetService(FinishService::Putty),
            Action::Advance,
            Action::SetFinishingArea("20".into()),
            Action::SetUrgency(true),
            Action::Calculate,
        ]
    }

    fn committed_electric() -> Vec<Action> {
        vec![
            Action::OpenCategory(Category::Electric),
            Action::SetElectricCount(ElectricItem::Sockets, 5),
            Action::SetWiringMode(WiringMode::Partial),
            Action::Calculate,
        ]
    }

    #[test]
    fn blocked_advance_is_a_true_noop() {
        let state = run([Action::OpenCategory(Category::Turnkey)]);
        let after = state.apply(Action::Advance);
        assert_eq!(after, state, "advance without object type must not move");
        assert_eq!(
            after.wizard,
            WizardPosition::InCategory {
                category: Category::Turnkey,
                step: 1
            }
        );
    }

    #[test]
    fn advance_walks_all_turnkey_steps_once_gated() {
        let state = run([
            Action::OpenCategory(Category::Turnkey),
            Action::SetObjectType(ObjectType::Apartment),
            Action::Advance,
            Action::SetTurnkeyArea("50".into()),
            Action::Advance,
            Action::SetCondition(Condition::Newbuild),
            Action::Advance,
        ]);
        assert_eq!(state.wizard.step(), Some(4));
        // Final step: no further advance regardless of inputs.
        let state = state.apply(Action::SetLevel(FinishLevel::Economy));
        assert_eq!(state.apply(Action::Advance).wizard.step(), Some(4));
    }

    #[test]
    fn retreat_from_step_one_clears_working_state() {
        let state = run([
            Action::OpenCategory(Category::Finishing),
            Action::SetZone(FinishZone::Walls),
            Action::Retreat,
        ]);
        assert_eq!(state.wizard, WizardPosition::Menu);
        assert_eq!(state.finishing, FinishingState::default());
    }

    #[test]
    fn opening_a_category_resets_every_working_state() {
        let mut actions = committed_electric();
        // Leave stale partial electric input behind by jumping straight to
        // another category.
        actions.pop(); // drop Calculate, keep the counters
        actions.push(Action::OpenCategory(Category::Finishing));
        let state = run(actions);
        assert_eq!(state.electric, ElectricState::default());
        assert_eq!(state.wizard, WizardPosition::open(Category::Finishing));
    }

    #[test]
    fn setters_outside_active_category_are_rejected() {
        let state = run([Action::OpenCategory(Category::Finishing)]);
        let after = state.apply(Action::SetElectricCount(ElectricItem::Sockets, 5));
        assert_eq!(after, state);
        let after = state.apply(Action::SetObjectType(ObjectType::House));
        assert_eq!(after, state);
    }

    #[test]
    fn calculate_commits_finishing_estimate() {
        let state = run(committed_finishing());
        assert_eq!(
            state.committed.finishing,
            Some(range(dec!(4320), dec!(6240)))
        );
    }

    #[test]
    fn calculate_without_result_is_a_noop() {
        let state = run([
            Action::OpenCategory(Category::Finishing),
            Action::SetZone(FinishZone::Walls),
        ]);
        let after = state.apply(Action::Calculate);
        assert_eq!(after, state);
        assert_eq!(after.committed.finishing, None);
    }

    #[test]
    fn calculate_is_idempotent() {
        let state = run(committed_finishing());
        let again = state.apply(Action::Calculate);
        assert_eq!(again.committed, state.committed);
    }

    #[test]
    fn turnkey_result_is_terminal_and_never_aggregated() {
        let state = run([
            Action::OpenCategory(Category::Turnkey),
            Action::SetObjectType(ObjectType::Apartment),
            Action::Advance,
            Action::SetTurnkeyArea("50".into()),
            Action::Advance,
            Action::SetCondition(Condition::Newbuild),
            Action::Advance,
            Action::SetLevel(FinishLevel::Economy),
            Action::Calculate,
        ]);
        assert_eq!(
            state.turnkey_result,
            Some(range(dec!(375000), dec!(490000)))
        );
        assert_eq!(state.committed, Committed::default());
        assert_eq!(state.total(), None);
        // Calculating does not move the wizard.
        assert_eq!(state.wizard.step(), Some(4));
    }

    #[test]
    fn total_sums_committed_categories_elementwise() {
        let mut actions = committed_finishing();
        actions.extend(committed_electric());
        let state = run(actions);
        assert_eq!(state.total(), Some(range(dec!(6638), dec!(9778))));
    }

    #[test]
    fn remove_clears_slot_and_reopens_category() {
        let mut actions = committed_finishing();
        actions.extend(committed_electric());
        let state = run(actions).apply(Action::Remove(Category::Electric));

        assert_eq!(state.committed.electric, None);
        assert_eq!(state.total(), Some(range(dec!(4320), dec!(6240))));
        assert_eq!(state.wizard, WizardPosition::open(Category::Electric));
        assert_eq!(state.electric, ElectricState::default());
    }

    #[test]
    fn remove_of_empty_slot_or_turnkey_is_rejected() {
        let state = run(committed_finishing());
        assert_eq!(state.apply(Action::Remove(Category::Electric)), state);
        assert_eq!(state.apply(Action::Remove(Category::Turnkey)), state);
    }

    #[test]
    fn reset_all_returns_to_pristine_menu() {
        let mut actions = committed_finishing();
        actions.extend(committed_electric());
        let state = run(actions).apply(Action::ResetAll);

        assert_eq!(state.wizard, WizardPosition::Menu);
        assert_eq!(state.committed, Committed::default());
        assert_eq!(state.finishing, FinishingState::default());
        assert_eq!(state.total(), None);
    }

    #[test]
    fn version_counts_accepted_actions_only() {
        let state = EstimatorState::default();
        let state = state.apply(Action::Advance); // rejected at menu
        assert_eq!(state.version, 0);
        let state = state.apply(Action::OpenCategory(Category::Electric));
        assert_eq!(state.version, 1);
        let state = state.apply(Action::SetElectricCount(ElectricItem::Panel, 1));
        assert_eq!(state.version, 2);
    }

    #[test]
    fn preview_tracks_the_open_category() {
        let state = EstimatorState::default();
        assert_eq!(state.preview(), None);

        let state = state.apply(Action::OpenCategory(Category::Electric));
        assert_eq!(state.preview(), Some(RateRange::zero()));

        let state = state.apply(Action::SetElectricCount(ElectricItem::Sockets, 5));
        let state = state.apply(Action::SetWiringMode(WiringMode::Partial));
        assert_eq!(state.preview(), Some(range(dec!(2318), dec!(3538))));
    }
}
