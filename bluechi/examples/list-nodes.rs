use dbus::blocking::Connection;
use std::time::Duration;

// Connect to the system bus, ask the BlueChi manager for all known nodes and
// print name, object path and status for each of them.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let conn = Connection::new_system()?;

    let bluechi = conn.with_proxy(
        "org.eclipse.bluechi",
        "/org/eclipse/bluechi",
        Duration::from_millis(5000),
    );

    let (nodes,): (Vec<(String, dbus::Path, String)>,) =
        bluechi.method_call("org.eclipse.bluechi.Manager", "ListNodes", ())?;

    println!("BlueChi nodes:");
    println!("================");
    for (name, path, status) in nodes {
        println!("Name: {}", name);
        println!("Path: {}", path);
        println!("Status: {}", status);
        println!();
    }

    Ok(())
}
