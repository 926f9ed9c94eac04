//! Interactive terminal wizard.
//!
//! This is the whole presentation layer: it renders the menu or the current
//! wizard step from the engine's read views, translates typed commands into
//! [`Action`]s, and prints formatted price ranges. No pricing logic lives
//! here.

use std::io::{self, BufRead, Write};

use crate::config::AppConfig;
use crate::error::Result;
use crate::estimator::catalog::{
    Condition, ElectricItem, FinishLevel, FinishZone, ObjectType, PlumbingItem, WiringMode,
};
use crate::estimator::{self, views, Action, Category, EstimatorState, WizardPosition};
use crate::format;

/// What a parsed command asks the loop to do.
enum Command {
    Act(Action),
    Export,
    Quit,
    Ignore,
}

/// Run the wizard until the user quits or stdin closes.
pub fn run(config: &AppConfig) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut state = EstimatorState::default();

    loop {
        render(&state, config);
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break; // stdin closed
        };
        let line = line?;
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match parse_command(&state, input) {
            Command::Quit => break,
            Command::Export => export(&state)?,
            Command::Act(action) => {
                let next = state.apply(action);
                if next == state {
                    println!("(nothing to do: check the current step's input)");
                }
                state = next;
            }
            Command::Ignore => println!("Unrecognized command: {input}"),
        }
        println!();
    }

    Ok(())
}

/// Print the committed summary as JSON.
fn export(state: &EstimatorState) -> Result<()> {
    match views::summary(state) {
        Some(summary) => println!("{}", serde_json::to_string_pretty(&summary)?),
        None => println!("Nothing committed yet."),
    }
    Ok(())
}

fn render(state: &EstimatorState, config: &AppConfig) {
    match state.wizard {
        WizardPosition::Menu => render_menu(state, config),
        WizardPosition::InCategory { category, step } => {
            render_category(state, config, category, step)
        }
    }
}

fn render_menu(state: &EstimatorState, config: &AppConfig) {
    println!("=== Renovation cost estimator ===");
    for (idx, entry) in views::menu().iter().enumerate() {
        let steps = if entry.steps == 1 { "step" } else { "steps" };
        println!(
            "{:>3}) {:<22} ({} {})",
            idx + 1,
            entry.title,
            entry.steps,
            steps
        );
    }

    if let Some(summary) = views::summary(state) {
        println!();
        println!("Your estimate:");
        for line in &summary.lines {
            let range = estimator::RateRange::new(line.min, line.max);
            println!("  {} \u{2014} {}", line.title, format::range_compact(range, &config.currency));
        }
        if let Some(total) = state.total() {
            println!("  Total: {}", format::range_phrase(total, &config.currency));
        }
        println!("Commands: 1-4 open, d <n> redo a committed category, e export JSON, r reset, q quit");
    } else {
        println!("Commands: 1-4 open a category, q quit");
    }
}

fn render_category(state: &EstimatorState, config: &AppConfig, category: Category, step: u8) {
    println!("=== {} ===", category.title());
    if category.steps() > 1 {
        println!("Step {} of {}", step, category.steps());
    }

    match (category, step) {
        (Category::Turnkey, 1) => {
            print_options("Property type", &ObjectType::ALL, state.turnkey.object_type, ObjectType::label);
        }
        (Category::Turnkey, 2) => {
            print_area_prompt("Area in m2", state.turnkey.area);
        }
        (Category::Turnkey, 3) => {
            print_options("Property condition", &Condition::ALL, state.turnkey.condition, Condition::label);
        }
        (Category::Turnkey, _) => {
            print_options("Finish level", &FinishLevel::ALL, state.turnkey.level, FinishLevel::label);
            println!("  c) calculate");
        }
        (Category::Finishing, 1) => {
            print_options("Work zone", &FinishZone::ALL, state.finishing.zone, FinishZone::label);
        }
        (Category::Finishing, 2) => {
            if let Some(zone) = state.finishing.zone {
                print_options(
                    "Service",
                    estimator::catalog::services_for(zone),
                    state.finishing.service,
                    estimator::catalog::FinishService::label,
                );
            }
        }
        (Category::Finishing, _) => {
            print_area_prompt("Area in m2", state.finishing.area);
            println!(
                "  u) urgency surcharge {}   k) complexity surcharge {}",
                checkbox(state.finishing.urgency),
                checkbox(state.finishing.complexity)
            );
            println!("  c) calculate");
        }
        (Category::Electric, _) => {
            println!("Set a counter with `<item> <count>`:");
            for (idx, item) in ElectricItem::ALL.iter().enumerate() {
                println!("{:>3}) {:<20} {}", idx + 1, item.label(), state.electric.count(*item));
            }
            println!("Wiring replacement (`w <option>`):");
            for (idx, mode) in WiringMode::ALL.iter().enumerate() {
                let marker = if state.electric.wiring_mode == *mode { "*" } else { " " };
                println!("  {marker}{}) {}", idx + 1, mode.label());
            }
            println!("  c) calculate and add to the estimate");
        }
        (Category::Plumbing, _) => {
            println!("Set a counter with `<item> <count>`:");
            for (idx, item) in PlumbingItem::ALL.iter().enumerate() {
                println!("{:>3}) {:<20} {}", idx + 1, item.label(), state.plumbing.count(*item));
            }
            println!(
                "  p <meters>) pipe run, currently {} m",
                state.plumbing.pipe_meters.amount()
            );
            println!("  g) wall grooving {}", checkbox(state.plumbing.grooving));
            println!("  c) calculate and add to the estimate");
        }
    }

    if let Some(preview) = state.preview() {
        println!("Current preview: {}", format::range_compact(preview, &config.currency));
    }

    if category == Category::Turnkey {
        if let Some(result) = state.turnkey_result {
            println!();
            println!("Estimated package: {}", format::range_phrase(result, &config.currency));
            println!("This is a rough range, not a quote. For an exact estimate contact us:");
            println!("  {}", config.contact_url);
        }
    }

    let back = if step > 1 { "b back" } else { "b main menu" };
    if step < category.steps() {
        println!("Commands: pick by number, n next, {back}, q quit");
    } else {
        println!("Commands: {back}, q quit");
    }
}

fn print_options<T: Copy + PartialEq>(
    title: &str,
    options: &[T],
    current: Option<T>,
    label: impl Fn(T) -> &'static str,
) {
    println!("{title}:");
    for (idx, option) in options.iter().enumerate() {
        let marker = if current == Some(*option) { "*" } else { " " };
        println!("  {marker}{}) {}", idx + 1, label(*option));
    }
}

fn print_area_prompt(title: &str, field: estimator::NumericField) {
    match field {
        estimator::NumericField::Unset => println!("{title}: (type a number)"),
        estimator::NumericField::Value(v) => println!("{title}: {v}"),
    }
}

fn checkbox(on: bool) -> &'static str {
    if on {
        "[x]"
    } else {
        "[ ]"
    }
}

fn parse_command(state: &EstimatorState, input: &str) -> Command {
    if input.eq_ignore_ascii_case("q") {
        return Command::Quit;
    }
    match state.wizard {
        WizardPosition::Menu => parse_menu_command(input),
        WizardPosition::InCategory { category, step } => {
            parse_category_command(state, input, category, step)
        }
    }
}

fn parse_menu_command(input: &str) -> Command {
    match input {
        "e" => return Command::Export,
        "r" => return Command::Act(Action::ResetAll),
        _ => {}
    }
    if let Some(category) = pick(&Category::ALL, input) {
        return Command::Act(Action::OpenCategory(category));
    }
    if let Some(rest) = input.strip_prefix("d ") {
        if let Some(category) = pick(&Category::ALL, rest.trim()) {
            return Command::Act(Action::Remove(category));
        }
    }
    Command::Ignore
}

fn parse_category_command(
    state: &EstimatorState,
    input: &str,
    category: Category,
    step: u8,
) -> Command {
    match input {
        "n" => return Command::Act(Action::Advance),
        "b" => return Command::Act(Action::Retreat),
        "c" => return Command::Act(Action::Calculate),
        _ => {}
    }

    let action = match (category, step) {
        (Category::Turnkey, 1) => pick(&ObjectType::ALL, input).map(Action::SetObjectType),
        (Category::Turnkey, 2) => Some(Action::SetTurnkeyArea(input.to_string())),
        (Category::Turnkey, 3) => pick(&Condition::ALL, input).map(Action::SetCondition),
        (Category::Turnkey, _) => pick(&FinishLevel::ALL, input).map(Action::SetLevel),
        (Category::Finishing, 1) => pick(&FinishZone::ALL, input).map(Action::SetZone),
        (Category::Finishing, 2) => state
            .finishing
            .zone
            .and_then(|zone| pick(estimator::catalog::services_for(zone), input))
            .map(Action::SetService),
        (Category::Finishing, _) => match input {
            "u" => Some(Action::SetUrgency(!state.finishing.urgency)),
            "k" => Some(Action::SetComplexity(!state.finishing.complexity)),
            _ => Some(Action::SetFinishingArea(input.to_string())),
        },
        (Category::Electric, _) => parse_electric_command(input),
        (Category::Plumbing, _) => parse_plumbing_command(state, input),
    };

    match action {
        Some(action) => Command::Act(action),
        None => Command::Ignore,
    }
}

fn parse_electric_command(input: &str) -> Option<Action> {
    if let Some(rest) = input.strip_prefix("w ") {
        return pick(&WiringMode::ALL, rest.trim()).map(Action::SetWiringMode);
    }
    let (item_token, count_token) = input.split_once(' ')?;
    let item = pick(&ElectricItem::ALL, item_token)?;
    let count: u32 = count_token.trim().parse().ok()?;
    Some(Action::SetElectricCount(item, count))
}

fn parse_plumbing_command(state: &EstimatorState, input: &str) -> Option<Action> {
    if input == "g" {
        return Some(Action::SetGrooving(!state.plumbing.grooving));
    }
    if let Some(rest) = input.strip_prefix("p ") {
        return Some(Action::SetPipeMeters(rest.trim().to_string()));
    }
    let (item_token, count_token) = input.split_once(' ')?;
    let item = pick(&PlumbingItem::ALL, item_token)?;
    let count: u32 = count_token.trim().parse().ok()?;
    Some(Action::SetPlumbingCount(item, count))
}

/// Resolve a 1-based menu index typed by the user.
fn pick<T: Copy>(options: &[T], token: &str) -> Option<T> {
    let choice: usize = token.parse().ok()?;
    if (1..=options.len()).contains(&choice) {
        Some(options[choice - 1])
    } else {
        None
    }
}
