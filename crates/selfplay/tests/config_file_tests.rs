//! Running a match from settings on disk, the way the binary does.

use chess_rules::Variant;
use selfplay::{GameEnd, MatchConfig, MatchRunner, MatchSummary};

#[test]
fn match_from_toml_file_round_trips_through_json() {
    let dir = std::env::temp_dir().join(format!("selfplay_cfg_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let cfg_path = dir.join("selfplay.toml");
    std::fs::write(
        &cfg_path,
        "games = 2\nmax_plies = 40\nseed = 21\nverbose = false\n\n[game]\nrows = 9\nvariant = \"custom\"\n",
    )
    .unwrap();

    let config = MatchConfig::load(&cfg_path).unwrap();
    assert_eq!(config.game.variant, Variant::Custom);
    assert_eq!(config.game.rows, 9);

    let summary = MatchRunner::new(config).run().unwrap();
    assert_eq!(summary.total_games(), 2);
    assert!(summary.games.iter().all(|g| g.plies <= 40));
    assert!(
        summary
            .games
            .iter()
            .all(|g| g.end != GameEnd::PlyLimit || g.plies == 40)
    );

    let out = dir.join("summary.json");
    summary.save(&out).unwrap();
    assert_eq!(MatchSummary::load(&out).unwrap(), summary);

    std::fs::remove_dir_all(&dir).ok();
}
