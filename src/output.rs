//! Rendering layer: takes a Snapshot (or one record) and renders text or json

use crate::inventory::{ContainerRecord, ContainerState, Snapshot};
use crate::utils::{InventoryError, Result};
use std::fmt::Write;

pub fn display(snapshot: &Snapshot, format: &str, verbose: bool) -> Result<()> {
    println!("{}", render(snapshot, format, verbose)?);
    Ok(())
}

pub fn display_record(record: &ContainerRecord, format: &str) -> Result<()> {
    println!("{}", render_record(record, format)?);
    Ok(())
}

pub fn render(snapshot: &Snapshot, format: &str, verbose: bool) -> Result<String> {
    match format {
        "json" => Ok(serde_json::to_string_pretty(snapshot)?),
        "text" => {
            let mut out = String::new();
            write_snapshot(&mut out, snapshot, verbose)?;
            Ok(out)
        }
        other => Err(InventoryError::Format(other.to_string())),
    }
}

pub fn render_record(record: &ContainerRecord, format: &str) -> Result<String> {
    match format {
        "json" => Ok(serde_json::to_string_pretty(record)?),
        "text" => {
            let mut out = String::new();
            write_record(&mut out, record, true)?;
            Ok(out)
        }
        other => Err(InventoryError::Format(other.to_string())),
    }
}

// ── Text ────────────────────────────────────────────────────────────────────

fn write_snapshot(out: &mut String, snapshot: &Snapshot, verbose: bool) -> std::fmt::Result {
    write_section(out, "SNAPSHOT")?;
    writeln!(out, "  Collected at : {}", snapshot.collected_at)?;
    writeln!(out, "  Host         : {}", or_none(&snapshot.host_name))?;
    writeln!(
        out,
        "  Containers   : {} total  {} running  {} paused  {} stopped  {} failed",
        snapshot.containers.len(),
        snapshot.count(ContainerState::Running),
        snapshot.count(ContainerState::Paused),
        snapshot.count(ContainerState::Stopped),
        snapshot.count(ContainerState::Failed),
    )?;

    write_section(out, &format!("CONTAINERS ({})", snapshot.containers.len()))?;
    for (i, c) in snapshot.containers.iter().enumerate() {
        writeln!(out, "  [{}/{}]", i + 1, snapshot.containers.len())?;
        write_record(out, c, verbose)?;
    }
    Ok(())
}

fn write_record(out: &mut String, c: &ContainerRecord, verbose: bool) -> std::fmt::Result {
    let icon = match c.state {
        ContainerState::Running => "●",
        ContainerState::Paused => "⏸",
        ContainerState::Stopped => "○",
        ContainerState::Failed => "✗",
    };
    let exit_info = if c.state == ContainerState::Failed {
        format!("  exit={}", c.exit_code)
    } else {
        String::new()
    };

    writeln!(out, "  {} {} [{}]{}", icon, short_id(&c.instance_id), c.state, exit_info)?;
    writeln!(out, "      ID         : {}", c.instance_id)?;
    writeln!(out, "      Image      : {}", or_none(&c.image_id))?;
    writeln!(out, "      Host       : {}", or_none(&c.host_name))?;
    writeln!(out, "      Hostname   : {}", or_none(&c.container_hostname))?;
    if let Some(group) = &c.compose_group {
        writeln!(out, "      Compose    : {}", group)?;
    }
    writeln!(out, "      Created    : {}", or_none(&c.created_time))?;
    writeln!(out, "      Started    : {}", or_none(&c.started_at))?;
    if c.state != ContainerState::Running {
        writeln!(out, "      Finished   : {}", or_none(&c.finished_at))?;
    }
    writeln!(out, "      Cmd        : {}", or_none(&c.command))?;
    writeln!(out, "      Ports      : {}", or_none(&c.ports))?;
    writeln!(out, "      Links      : {}", or_none(&c.links))?;
    if verbose {
        writeln!(out, "      Env        : {}", or_none(&c.environment_var))?;
    }
    Ok(())
}

// ── Formatting helpers ──────────────────────────────────────────────────────

fn write_section(out: &mut String, title: &str) -> std::fmt::Result {
    writeln!(out, "\n{}", "─".repeat(60))?;
    writeln!(out, "  {}", title)?;
    writeln!(out, "{}", "─".repeat(60))
}

/// Blank and JSON-null fields both read as "(none)".
fn or_none(s: &str) -> &str {
    if s.is_empty() || s == "null" {
        "(none)"
    } else {
        s
    }
}

fn short_id(id: &str) -> &str {
    match id.char_indices().nth(12) {
        Some((i, _)) => &id[..i],
        None => id,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Snapshot {
        let mut running = ContainerRecord::new("0123456789abcdef0123");
        running.state = ContainerState::Running;
        running.host_name = "node-1".to_string();
        running.compose_group = Some("shop".to_string());
        running.environment_var = r#"["SECRET=1"]"#.to_string();

        let mut failed = ContainerRecord::new("feedface");
        failed.state = ContainerState::Failed;
        failed.exit_code = 137;
        failed.links = "null".to_string();

        Snapshot::new("node-1".to_string(), vec![running, failed])
    }

    #[test]
    fn text_lists_every_container() {
        let text = render(&sample(), "text", false).unwrap();
        assert!(text.contains("CONTAINERS (2)"));
        assert!(text.contains("1 running"));
        assert!(text.contains("1 failed"));
        assert!(text.contains("● 0123456789ab [Running]"));
        assert!(text.contains("✗ feedface [Failed]  exit=137"));
        assert!(text.contains("Compose    : shop"));
        assert!(text.contains("Links      : (none)"));
        assert!(!text.contains("SECRET"), "env only shown when verbose");
    }

    #[test]
    fn verbose_text_shows_environment() {
        let text = render(&sample(), "text", true).unwrap();
        assert!(text.contains(r#"Env        : ["SECRET=1"]"#));
    }

    #[test]
    fn json_round_trips() {
        let json = render(&sample(), "json", false).unwrap();
        let back: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.containers, sample().containers);
        assert_eq!(back.host_name, "node-1");
    }

    #[test]
    fn unknown_format_is_rejected() {
        assert!(matches!(
            render(&sample(), "yaml", false),
            Err(InventoryError::Format(f)) if f == "yaml"
        ));
        assert!(render_record(&ContainerRecord::new("x"), "xml").is_err());
    }
}
