//! Snapshot printers.
use std::fmt::Write as _;

use game_core::{Mode, RenderSnapshot, ResourceMeter};

/// How snapshots are written to stdout.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, strum::Display, strum::EnumString,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum OutputFormat {
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

impl OutputFormat {
    pub fn render(self, snapshot: &RenderSnapshot) -> anyhow::Result<String> {
        match self {
            OutputFormat::Text => Ok(render_text(snapshot)),
            OutputFormat::Json => Ok(serde_json::to_string(snapshot)?),
        }
    }
}

fn meter(meter: &ResourceMeter) -> String {
    format!("{}/{}", meter.current, meter.maximum)
}

/// Human-readable frame; `writeln!` into a `String` cannot fail.
pub fn render_text(snapshot: &RenderSnapshot) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "[{}] t={}ms  HP {}  Shield {}  Money {}  at {}",
        snapshot.mode,
        snapshot.clock.0,
        meter(&snapshot.player.health),
        meter(&snapshot.player.shield),
        snapshot.money,
        snapshot.position,
    );

    if snapshot.mode == Mode::Menu {
        let _ = writeln!(out, "Type `start` to begin.");
    }

    if let Some(hostile) = &snapshot.hostile {
        let _ = writeln!(
            out,
            "Fighting {}  HP {}  ({})",
            hostile.name,
            meter(&hostile.stats.health),
            snapshot.phase
        );
    }

    if !snapshot.inventory.is_empty() {
        let bag: Vec<_> = snapshot
            .inventory
            .iter()
            .enumerate()
            .map(|(index, name)| format!("{index}:{name}"))
            .collect();
        let _ = writeln!(out, "Bag: {}", bag.join(", "));
    }

    if snapshot.shop_open {
        let _ = writeln!(out, "Shop:");
        for line in &snapshot.shop {
            let marker = if line.affordable { "" } else { " (too expensive)" };
            let _ = writeln!(out, "  {} - {} coins{}", line.name, line.price, marker);
        }
    }

    if let Some(message) = &snapshot.message {
        let _ = writeln!(out, "> {message}");
    }

    out
}
