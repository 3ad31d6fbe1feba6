use std::collections::HashSet;

use futstats_core::{
    decompress_and_deserialize, export_file_name, serialize_and_compress, ActionDraft, HeatBand,
    MatchSession, Player, Team, TeamColors, Zone, POSSESSION_LABEL,
};

fn make_team(id: &str, name: &str, primary: &str) -> Team {
    Team {
        id: id.to_string(),
        name: name.to_string(),
        colors: TeamColors { primary: primary.to_string(), secondary: "#ffffff".to_string() },
        players: (1..=11)
            .map(|n| Player {
                id: format!("{id}-{n}"),
                number: n,
                name: format!("Jogador {n}"),
                is_starter: true,
            })
            .collect(),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🔧 Testing Match Session Flow Integration...");

    // Test 1: Session lifecycle and clock
    println!("\n🧪 Test 1: Session clock and play state");

    let team_a = make_team("santos", "Santos", "#ffffff");
    let team_b = make_team("gremio", "Grêmio", "#0d80bf");
    let mut session = MatchSession::new(team_a, team_b)?;

    session.toggle_play_pause();
    for _ in 0..90 {
        session.tick();
    }
    println!("✅ Clock after 90 ticks: {}", session.clock_display());
    if session.clock_display() != "01:30" {
        return Err("Clock should read 01:30".into());
    }

    // Test 2: Possession and discrete actions
    println!("\n🧪 Test 2: Recording possession and actions");

    session.claim_possession("santos", Zone::new(2, 2))?;
    session.record_action(ActionDraft::discrete("Shot", "santos", Zone::new(2, 2)))?;
    session.record_action(
        ActionDraft::discrete("Shot", "santos", Zone::new(2, 2)).with_player("santos-9"),
    )?;
    session.record_action(ActionDraft::discrete("Falta", "gremio", Zone::new(0, 0)))?;
    println!("✅ Recorded {} ledger entries", session.ledger().len());

    // Test 3: Heat map aggregation and banding
    println!("\n🧪 Test 3: Heat map");

    let grid = session.heat_map();
    println!("✅ max_total = {}", grid.max_total());
    for row in 0..5 {
        let line: String = (0..5)
            .map(|col| match grid.band(row, col) {
                Some(HeatBand::Idle) | None => '·',
                Some(HeatBand::Low) => '░',
                Some(HeatBand::Moderate) => '▒',
                Some(HeatBand::High) => '▓',
                Some(HeatBand::Peak) => '█',
            })
            .collect();
        println!("   {line}");
    }
    if grid.cell(2, 2).map(|c| c.total) != Some(3) {
        return Err("Center cell should hold 3 actions".into());
    }

    // Test 4: Export projection
    println!("\n🧪 Test 4: Export projection");

    let selected: HashSet<String> =
        ["Shot".to_string(), POSSESSION_LABEL.to_string()].into();
    let export = session.export_heat_map(&selected);
    println!(
        "✅ Export kept {} of {} actions ({} / {})",
        export.actions.len(),
        session.ledger().len(),
        export.team_a_actions,
        export.team_b_actions
    );
    if export.actions.len() != 3 {
        return Err("Export should keep possession + 2 shots".into());
    }
    println!(
        "✅ Suggested file name: {}",
        export_file_name(&session.team_a().name, &session.team_b().name)
    );
    println!("   Snapshot payload:\n{}", serde_json::to_string_pretty(&export)?);

    // Test 5: Archive round-trip
    println!("\n🧪 Test 5: Archive round-trip");

    let ledger_size = session.ledger().len();
    let archive = session.into_archive();
    let bytes = serialize_and_compress(&archive)?;
    println!("✅ Archive serialized to {} bytes", bytes.len());

    let restored = decompress_and_deserialize(&bytes)?;
    if restored.actions.len() != ledger_size || restored.duration_seconds != 90 {
        return Err("Restored archive should match the session".into());
    }
    let restored_grid = restored.heat_map();
    if restored_grid.max_total() != grid.max_total() {
        return Err("Restored heat map should match the live one".into());
    }
    println!("✅ Restored archive renders the same heat map");

    println!("\n🎉 ALL MATCH FLOW TESTS PASSED SUCCESSFULLY!");
    println!("✅ Clock / play-pause state machine working");
    println!("✅ Possession + ledger recording working");
    println!("✅ Aggregation and banding working");
    println!("✅ Name-keyed export projection working");
    println!("✅ MessagePack + LZ4 + SHA256 archive working");

    Ok(())
}
