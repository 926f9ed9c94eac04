//! Wizard position: which category is open and which step is showing.
//!
//! The position only carries the mechanics of moving between steps; whether
//! an advance is actually allowed is decided by the session against the
//! current working state.

use serde::Serialize;

use super::catalog::Category;

/// Active category and step, or the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardPosition {
    #[default]
    Menu,
    InCategory {
        category: Category,
        step: u8,
    },
}

impl WizardPosition {
    /// Entry position for a category: its first step.
    pub fn open(category: Category) -> Self {
        WizardPosition::InCategory { category, step: 1 }
    }

    pub fn active_category(self) -> Option<Category> {
        match self {
            WizardPosition::Menu => None,
            WizardPosition::InCategory { category, .. } => Some(category),
        }
    }

    pub fn step(self) -> Option<u8> {
        match self {
            WizardPosition::Menu => None,
            WizardPosition::InCategory { step, .. } => Some(step),
        }
    }

    /// Move one step forward, never past the category's final step.
    /// The caller is responsible for checking the step's prerequisite.
    pub fn advanced(self) -> Self {
        match self {
            WizardPosition::InCategory { category, step } if step < category.steps() => {
                WizardPosition::InCategory {
                    category,
                    step: step + 1,
                }
            }
            other => other,
        }
    }

    /// Move one step back; backing out of step 1 abandons the category and
    /// returns to the menu.
    pub fn retreated(self) -> Self {
        match self {
            WizardPosition::Menu => WizardPosition::Menu,
            WizardPosition::InCategory { step: 1, .. } => WizardPosition::Menu,
            WizardPosition::InCategory { category, step } => WizardPosition::InCategory {
                category,
                step: step - 1,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opens_at_step_one() {
        let pos = WizardPosition::open(Category::Finishing);
        assert_eq!(pos.active_category(), Some(Category::Finishing));
        assert_eq!(pos.step(), Some(1));
    }

    #[test]
    fn advance_stops_at_final_step() {
        let mut pos = WizardPosition::open(Category::Turnkey);
        for expected in 2..=4 {
            pos = pos.advanced();
            assert_eq!(pos.step(), Some(expected));
        }
        assert_eq!(pos.advanced(), pos, "no step past the last");
    }

    #[test]
    fn single_step_categories_never_advance() {
        let pos = WizardPosition::open(Category::Electric);
        assert_eq!(pos.advanced(), pos);
        let pos = WizardPosition::open(Category::Plumbing);
        assert_eq!(pos.advanced(), pos);
    }

    #[test]
    fn retreat_from_step_one_returns_to_menu() {
        let pos = WizardPosition::open(Category::Finishing).advanced();
        assert_eq!(pos.step(), Some(2));
        assert_eq!(pos.retreated().step(), Some(1));
        assert_eq!(pos.retreated().retreated(), WizardPosition::Menu);
        assert_eq!(WizardPosition::Menu.retreated(), WizardPosition::Menu);
    }
}
