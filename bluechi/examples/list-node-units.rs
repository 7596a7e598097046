use bluechi::api::OrgEclipseBluechiNode;
use bluechi::{Client, NodeName};
use clap::Parser;

#[derive(Parser)]
struct Cli {
    /// The node name to list the units for
    #[clap(short, long)]
    node_name: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Cli::parse();

    let client = Client::new_system()?;
    let node = client.resolve_node(&NodeName::new(args.node_name)?)?;

    // we are only interested in the unit name and its description
    for unit in node.list_units()? {
        println!("{} - {}", unit.0, unit.1);
    }

    Ok(())
}
