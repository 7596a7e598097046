use std::time::Duration;

use bluechi::Client;
use dbus::arg;
use dbus::blocking::stdintf::org_freedesktop_dbus::PropertiesPropertiesChanged;
use dbus::message::SignalArgs;

// Watch the Status property of all node objects and report connection state
// changes as they happen.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = Client::new_system()?;

    let rule = PropertiesPropertiesChanged::match_rule(None, None).static_clone();
    client.connection().add_match(rule, |changed: PropertiesPropertiesChanged, _, msg| {
        if changed.interface_name == bluechi::NODE_INTERFACE {
            if let Some(status) = arg::prop_cast::<String>(&changed.changed_properties, "Status") {
                let path = msg.path().map(|p| p.to_string()).unwrap_or_default();
                println!("{}: {}", path, status);
            }
        }
        true
    })?;

    loop {
        client.process(Duration::from_millis(1000))?;
    }
}
