pub mod player;
pub mod reports;
pub mod scenarios;
pub mod tester;

pub use reports::{generate_console_report, generate_json_report, generate_markdown_report};
pub use scenarios::{get_scenario, list_scenarios, scenario_keys};
pub use tester::{LogicTester, ScenarioResult};
