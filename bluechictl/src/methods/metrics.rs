use std::time::Duration;

use anyhow::{Context, Result};
use bluechi::api::{AgentJobMetrics, OrgEclipseBluechiManager, StartUnitJobMetrics};
use bluechi::Client;
use dbus::message::SignalArgs;

pub fn enable(client: &Client) -> Result<()> {
    client
        .manager()
        .enable_metrics()
        .context("enabling metrics failed")?;
    println!("Done");
    Ok(())
}

pub fn disable(client: &Client) -> Result<()> {
    client
        .manager()
        .disable_metrics()
        .context("disabling metrics failed")?;
    println!("Done");
    Ok(())
}

pub fn listen(client: &Client) -> Result<()> {
    let conn = client.connection();
    conn.add_match(
        StartUnitJobMetrics::match_rule(None, None).static_clone(),
        |sig: StartUnitJobMetrics, _, _| {
            println!(
                "[{}] Job {} to start unit {}:\n\
                 \tBlueChi job gross measured time: {:.1}ms\n\
                 \tUnit net start time (from properties): {:.1}ms",
                sig.node,
                sig.job_id,
                sig.unit,
                micros_to_millis(sig.job_measured_time_micros),
                micros_to_millis(sig.unit_start_prop_time_micros),
            );
            true
        },
    )?;
    conn.add_match(
        AgentJobMetrics::match_rule(None, None).static_clone(),
        |sig: AgentJobMetrics, _, _| {
            println!(
                "[{}] Agent systemd {} job on {} net measured time: {:.1}ms",
                sig.node,
                sig.method,
                sig.unit,
                micros_to_millis(sig.systemd_job_time_micros),
            );
            true
        },
    )?;

    println!("Waiting for metrics signals...");
    loop {
        client.process(Duration::from_millis(1000))?;
    }
}

fn micros_to_millis(micros: u64) -> f64 {
    micros as f64 / 1000.0
}

#[cfg(test)]
mod test {
    use super::micros_to_millis;

    #[test]
    fn conversion() {
        assert_eq!(micros_to_millis(0), 0.0);
        assert_eq!(micros_to_millis(2500), 2.5);
        assert_eq!(format!("{:.1}ms", micros_to_millis(1234)), "1.2ms");
    }
}
