use clap::{Parser, Subcommand};

/// Command line client for the BlueChi manager.
#[derive(Parser)]
#[command(name = "bluechictl", version, about = "Manage systemd units across BlueChi nodes")]
pub struct Cli {
    /// Timeout for remote calls, in seconds
    #[arg(long, global = true, default_value_t = 30)]
    pub timeout: u64,

    /// Connect to the session bus instead of the system bus
    #[arg(long, global = true)]
    pub session: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// List all nodes known to the manager
    ListNodes,

    /// List loaded units on all nodes, or on one node
    ListUnits {
        /// Node to list units for; all nodes when omitted
        node: Option<String>,
    },

    /// List installed unit files on a node
    ListUnitFiles { node: String },

    /// Show the enablement state of a unit file on a node
    IsEnabled { node: String, unit: String },

    /// Start a unit on a node and wait for the job to finish
    Start { node: String, unit: String },

    /// Stop a unit on a node and wait for the job to finish
    Stop { node: String, unit: String },

    /// Restart a unit on a node and wait for the job to finish
    Restart { node: String, unit: String },

    /// Reload a unit on a node and wait for the job to finish
    Reload { node: String, unit: String },

    /// Freeze a unit on a node
    Freeze { node: String, unit: String },

    /// Thaw a previously frozen unit on a node
    Thaw { node: String, unit: String },

    /// Send a signal to the processes of a unit on a node
    Kill {
        node: String,
        unit: String,
        /// Which processes to kill: all, main or control
        #[arg(long, default_value = "all")]
        whom: String,
        /// Signal number to send
        #[arg(long, default_value_t = 15)]
        signal: i32,
    },

    /// Reset the failed state of units on a node, or of the whole node
    ResetFailed {
        node: String,
        /// Units to reset; the whole node when omitted
        units: Vec<String>,
    },

    /// Enable unit files on a node
    Enable {
        node: String,
        #[arg(required = true)]
        units: Vec<String>,
        /// Enable only for this boot
        #[arg(long)]
        runtime: bool,
        /// Override existing symlinks
        #[arg(long)]
        force: bool,
    },

    /// Disable unit files on a node
    Disable {
        node: String,
        #[arg(required = true)]
        units: Vec<String>,
        /// Disable only for this boot
        #[arg(long)]
        runtime: bool,
    },

    /// Reload the systemd configuration on a node
    DaemonReload { node: String },

    /// Show the status of units on a node, or of the node itself
    Status {
        node: String,
        /// Units to show; node status when omitted
        units: Vec<String>,
    },

    /// Get the default target of a node
    GetDefault { node: String },

    /// Set the default target of a node
    SetDefault {
        node: String,
        target: String,
        /// Override existing symlinks
        #[arg(long)]
        force: bool,
    },

    /// Change the log level of the manager, or of one node's agent
    SetLoglevel {
        /// One of debug, info, warn, error
        level: String,
        /// Change the agent on this node instead of the manager
        #[arg(long)]
        node: Option<String>,
    },

    /// Control collection of unit lifecycle metrics
    Metrics {
        #[command(subcommand)]
        action: MetricsAction,
    },

    /// Watch unit lifecycle events on the cluster
    Monitor {
        /// Node to watch, all nodes when omitted
        node: Option<String>,
        /// Unit to watch, all units when omitted
        unit: Option<String>,
    },

    /// Print the version of this client
    Version,
}

#[derive(Subcommand)]
pub enum MetricsAction {
    /// Enable metrics collection on the manager
    Enable,
    /// Disable metrics collection on the manager
    Disable,
    /// Subscribe to metrics signals and print them as they arrive
    Listen,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parses_list_nodes() {
        let cli = Cli::try_parse_from(["bluechictl", "list-nodes"]).unwrap();
        assert!(matches!(cli.command, Command::ListNodes));
        assert_eq!(cli.timeout, 30);
        assert!(!cli.session);
    }

    #[test]
    fn parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["bluechictl", "list-nodes", "--session", "--timeout", "5"])
            .unwrap();
        assert!(cli.session);
        assert_eq!(cli.timeout, 5);
    }

    #[test]
    fn parses_lifecycle() {
        let cli = Cli::try_parse_from(["bluechictl", "start", "worker1", "nginx.service"]).unwrap();
        match cli.command {
            Command::Start { node, unit } => {
                assert_eq!(node, "worker1");
                assert_eq!(unit, "nginx.service");
            }
            _ => panic!("wrong command"),
        }
    }

    #[test]
    fn kill_defaults() {
        let cli = Cli::try_parse_from(["bluechictl", "kill", "worker1", "nginx.service"]).unwrap();
        match cli.command {
            Command::Kill { whom, signal, .. } => {
                assert_eq!(whom, "all");
                assert_eq!(signal, 15);
            }
            _ => panic!("wrong command"),
        }

        let cli = Cli::try_parse_from([
            "bluechictl", "kill", "worker1", "nginx.service", "--whom", "main", "--signal", "9",
        ])
        .unwrap();
        match cli.command {
            Command::Kill { whom, signal, .. } => {
                assert_eq!(whom, "main");
                assert_eq!(signal, 9);
            }
            _ => panic!("wrong command"),
        }
    }

    #[test]
    fn enable_requires_units() {
        assert!(Cli::try_parse_from(["bluechictl", "enable", "worker1"]).is_err());
        let cli = Cli::try_parse_from([
            "bluechictl", "enable", "worker1", "a.service", "b.service", "--force",
        ])
        .unwrap();
        match cli.command {
            Command::Enable { units, force, runtime, .. } => {
                assert_eq!(units, ["a.service", "b.service"]);
                assert!(force);
                assert!(!runtime);
            }
            _ => panic!("wrong command"),
        }
    }

    #[test]
    fn monitor_wildcards_are_optional() {
        let cli = Cli::try_parse_from(["bluechictl", "monitor"]).unwrap();
        match cli.command {
            Command::Monitor { node, unit } => {
                assert!(node.is_none());
                assert!(unit.is_none());
            }
            _ => panic!("wrong command"),
        }
    }

    #[test]
    fn metrics_subactions() {
        let cli = Cli::try_parse_from(["bluechictl", "metrics", "listen"]).unwrap();
        match cli.command {
            Command::Metrics { action } => assert!(matches!(action, MetricsAction::Listen)),
            _ => panic!("wrong command"),
        }
        assert!(Cli::try_parse_from(["bluechictl", "metrics"]).is_err());
    }

    #[test]
    fn set_loglevel_node_flag() {
        let cli =
            Cli::try_parse_from(["bluechictl", "set-loglevel", "debug", "--node", "worker1"])
                .unwrap();
        match cli.command {
            Command::SetLoglevel { level, node } => {
                assert_eq!(level, "debug");
                assert_eq!(node.as_deref(), Some("worker1"));
            }
            _ => panic!("wrong command"),
        }
    }
}
