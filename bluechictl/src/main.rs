mod cli;
mod methods;

use std::time::Duration;

use anyhow::{Context, Result};
use bluechi::Client;
use clap::Parser;

use crate::cli::{Cli, Command, MetricsAction};
use crate::methods::lifecycle::LifecycleOp;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if let Command::Version = cli.command {
        println!("bluechictl version {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let mut client = if cli.session {
        Client::new_session().context("connecting to the session bus failed")?
    } else {
        Client::new_system().context("connecting to the system bus failed")?
    };
    client.set_timeout(Duration::from_secs(cli.timeout));

    match cli.command {
        Command::ListNodes => methods::nodes::list_nodes(&client),
        Command::ListUnits { node } => methods::units::list_units(&client, node.as_deref()),
        Command::ListUnitFiles { node } => methods::units::list_unit_files(&client, &node),
        Command::IsEnabled { node, unit } => methods::units::is_enabled(&client, &node, &unit),
        Command::Start { node, unit } => {
            methods::lifecycle::lifecycle(&client, &node, &unit, LifecycleOp::Start)
        }
        Command::Stop { node, unit } => {
            methods::lifecycle::lifecycle(&client, &node, &unit, LifecycleOp::Stop)
        }
        Command::Restart { node, unit } => {
            methods::lifecycle::lifecycle(&client, &node, &unit, LifecycleOp::Restart)
        }
        Command::Reload { node, unit } => {
            methods::lifecycle::lifecycle(&client, &node, &unit, LifecycleOp::Reload)
        }
        Command::Freeze { node, unit } => methods::lifecycle::freeze(&client, &node, &unit),
        Command::Thaw { node, unit } => methods::lifecycle::thaw(&client, &node, &unit),
        Command::Kill { node, unit, whom, signal } => {
            methods::lifecycle::kill(&client, &node, &unit, &whom, signal)
        }
        Command::ResetFailed { node, units } => {
            methods::lifecycle::reset_failed(&client, &node, &units)
        }
        Command::Enable { node, units, runtime, force } => {
            methods::enablement::enable(&client, &node, &units, runtime, force)
        }
        Command::Disable { node, units, runtime } => {
            methods::enablement::disable(&client, &node, &units, runtime)
        }
        Command::DaemonReload { node } => methods::lifecycle::daemon_reload(&client, &node),
        Command::Status { node, units } => methods::status::status(&client, &node, &units),
        Command::GetDefault { node } => methods::target::get_default(&client, &node),
        Command::SetDefault { node, target, force } => {
            methods::target::set_default(&client, &node, &target, force)
        }
        Command::SetLoglevel { level, node } => {
            methods::loglevel::set_loglevel(&client, node.as_deref(), &level)
        }
        Command::Metrics { action } => match action {
            MetricsAction::Enable => methods::metrics::enable(&client),
            MetricsAction::Disable => methods::metrics::disable(&client),
            MetricsAction::Listen => methods::metrics::listen(&client),
        },
        Command::Monitor { node, unit } => {
            methods::monitor::monitor(&client, node.as_deref(), unit.as_deref())
        }
        Command::Version => unreachable!("handled before connecting"),
    }
}
