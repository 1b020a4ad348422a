//! @acp:module "Stages Command"
//! @acp:summary "List funnel stages in progression order"
//! @acp:domain cli
//! @acp:layer handler

use anyhow::Result;
use console::style;
use serde::Serialize;

use crate::stage::StageId;

/// Options for the stages command
#[derive(Debug, Clone, Default)]
pub struct StagesOptions {
    /// Output as JSON
    pub json: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct StageEntry {
    pub position: usize,
    pub id: StageId,
    pub label: &'static str,
}

/// All stages with their 1-based funnel position
pub fn stage_entries() -> Vec<StageEntry> {
    StageId::ALL
        .iter()
        .map(|&stage| StageEntry {
            position: stage.index() + 1,
            id: stage,
            label: stage.label(),
        })
        .collect()
}

/// Execute the stages command
pub fn execute_stages(options: StagesOptions) -> Result<()> {
    let entries = stage_entries();

    if options.json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    println!("Funnel stages ({}):\n", entries.len());
    for entry in entries {
        println!(
            "  {:>2}. {:14} {}",
            entry.position,
            style(entry.id.as_str()).cyan(),
            entry.label
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_entries() {
        let entries = stage_entries();
        assert_eq!(entries.len(), 11);
        assert_eq!(entries[0].position, 1);
        assert_eq!(entries[0].id, StageId::Awareness);
        assert_eq!(entries[10].label, "Full Funnel Campaign");

        let json = serde_json::to_value(&entries[4]).unwrap();
        assert_eq!(json["id"], "follow-up");
        assert_eq!(json["position"], 5);
    }
}
