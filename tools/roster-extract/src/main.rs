//! Roster Extract
//!
//! Pulls practice-squad and active-roster players out of division
//! spreadsheet exports, and splits a rankings table into taken and
//! available players.

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser, Subcommand};
use rostergrid_core::names::{RANKINGS_PLAYER_COLUMN, build_availability};
use rostergrid_core::report::{write_grid_csv, write_players_csv, write_records_csv};
use rostergrid_core::{ExtractorConfig, GridCache, Record, RosterExtractor, records_for_team};
use std::path::{Path, PathBuf};
use tracing::{Level, debug, info};

/// A division export and where its reports go in `--both` mode.
struct Dataset {
    input: &'static str,
    practice_out: &'static str,
    roster_out: &'static str,
}

const DATASETS: [Dataset; 2] = [
    Dataset {
        input: "BeamenDivision.csv",
        practice_out: "practice_squad_players.csv",
        roster_out: "roster_players.csv",
    },
    Dataset {
        input: "Falco.csv",
        practice_out: "practice_squad_players_falco.csv",
        roster_out: "roster_players_falco.csv",
    },
];

/// Default extractor settings file
fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("rostergrid").join("config.toml"))
}

/// CLI arguments
#[derive(Parser)]
#[command(name = "roster-extract")]
#[command(about = "Extract roster and practice-squad players from division spreadsheets")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Extractor settings file (TOML)
    #[arg(short, long, env = "ROSTERGRID_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract and validate practice-squad players
    PracticeSquad {
        /// Division export to read
        #[arg(short, long, default_value = "BeamenDivision.csv")]
        input: PathBuf,

        /// Team,Position,Player report to write
        #[arg(short, long, default_value = "practice_squad_players.csv")]
        output: PathBuf,

        /// Process BeamenDivision.csv and Falco.csv; ignores --input/--output
        #[arg(long)]
        both: bool,
    },
    /// Extract regularly rostered players
    Roster {
        /// Division export to read
        #[arg(short, long, default_value = "BeamenDivision.csv")]
        input: PathBuf,

        /// Team,Position,Player report to write
        #[arg(short, long, default_value = "roster_players.csv")]
        output: PathBuf,

        /// Players-only report to write
        #[arg(long, default_value = "extracted_roster.csv")]
        players_out: PathBuf,

        /// Process BeamenDivision.csv and Falco.csv; ignores --input/--output
        #[arg(long)]
        both: bool,
    },
    /// List one team's players
    Team {
        /// Team name (case and spacing are ignored)
        name: String,

        /// Division export to read
        #[arg(short, long, default_value = "BeamenDivision.csv")]
        input: PathBuf,

        /// List the practice squad instead of the roster
        #[arg(long)]
        practice_squad: bool,
    },
    /// Split a rankings table into taken and available players
    Available {
        /// Players-only roster report
        #[arg(short, long, default_value = "extracted_roster.csv")]
        roster: PathBuf,

        /// Practice-squad report
        #[arg(short, long, default_value = "practice_squad_players.csv")]
        practice: PathBuf,

        /// Rankings export
        #[arg(short = 'k', long, default_value = "FantasyPros_2025_Dynasty_ALL_Rankings.csv")]
        rankings: PathBuf,

        /// Rankings column holding player names
        #[arg(long, default_value = RANKINGS_PLAYER_COLUMN)]
        column: String,

        /// Taken players report to write
        #[arg(short = 't', long, default_value = "all_taken_players.csv")]
        out_taken: PathBuf,

        /// Available rankings rows to write
        #[arg(short = 'a', long, default_value = "available_players.csv")]
        out_available: PathBuf,
    },
}

fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    }
}

/// Explicit path first, then the per-user file if it exists.
fn resolve_config_path(explicit: Option<PathBuf>, fallback: Option<PathBuf>) -> Option<PathBuf> {
    explicit.or_else(|| fallback.filter(|path| path.is_file()))
}

/// Applies the settings file, if any, on top of a preset.
fn load_config(preset: ExtractorConfig, path: Option<&Path>) -> Result<ExtractorConfig> {
    match path {
        Some(path) => {
            debug!(path = %path.display(), "applying extractor settings");
            preset
                .merge_toml_file(path)
                .with_context(|| format!("Failed to load settings from {}", path.display()))
        }
        None => Ok(preset),
    }
}

fn print_players(records: &[Record]) {
    for record in records {
        println!("{}", record.player);
    }
}

/// Runs the extractors over division exports, sharing loaded grids.
struct App {
    config_path: Option<PathBuf>,
    grids: GridCache,
}

impl App {
    fn new(config_path: Option<PathBuf>) -> Self {
        Self {
            config_path,
            grids: GridCache::new(),
        }
    }

    fn extractor(&self, preset: ExtractorConfig) -> Result<RosterExtractor> {
        let config = load_config(preset, self.config_path.as_deref())?;
        RosterExtractor::new(config).context("Invalid extractor settings")
    }

    /// Read, extract, validate, write, print. Any failure aborts the run.
    fn practice_squad(&self, input: &Path, output: &Path) -> Result<Vec<Record>> {
        let extractor = self.extractor(ExtractorConfig::practice_squad())?;
        let grid = self
            .grids
            .get_or_load(input)
            .with_context(|| format!("Failed to read {}", input.display()))?;

        let (result, summary) = extractor
            .extract_validated(&grid)
            .with_context(|| format!("Practice squad validation failed for {}", input.display()))?;
        info!(input = %input.display(), "{summary}");

        write_records_csv(output, &result.records)
            .with_context(|| format!("Failed to write {}", output.display()))?;
        print_players(&result.records);
        Ok(result.into_records())
    }

    fn roster(&self, input: &Path, output: &Path) -> Result<Vec<Record>> {
        let extractor = self.extractor(ExtractorConfig::roster())?;
        let grid = self
            .grids
            .get_or_load(input)
            .with_context(|| format!("Failed to read {}", input.display()))?;

        let result = extractor.extract(&grid);
        info!(input = %input.display(), players = result.total(), "roster extracted");

        write_records_csv(output, &result.records)
            .with_context(|| format!("Failed to write {}", output.display()))?;
        print_players(&result.records);
        Ok(result.into_records())
    }

    fn team(&self, name: &str, input: &Path, practice_squad: bool) -> Result<Vec<String>> {
        let preset = if practice_squad {
            ExtractorConfig::practice_squad()
        } else {
            ExtractorConfig::roster()
        };
        let extractor = self.extractor(preset)?;
        let grid = self
            .grids
            .get_or_load(input)
            .with_context(|| format!("Failed to read {}", input.display()))?;

        let result = extractor.extract(&grid);
        Ok(records_for_team(&result.records, name)
            .into_iter()
            .map(str::to_string)
            .collect())
    }

    fn available(
        &self,
        roster: &Path,
        practice: &Path,
        rankings: &Path,
        column: &str,
        out_taken: &Path,
        out_available: &Path,
    ) -> Result<()> {
        let load = |path: &Path| {
            self.grids
                .get_or_load(path)
                .with_context(|| format!("Failed to read {}", path.display()))
        };
        let roster_grid = load(roster)?;
        let practice_grid = load(practice)?;
        let rankings_grid = load(rankings)?;

        let availability = build_availability(&roster_grid, &practice_grid, &rankings_grid, column)
            .with_context(|| format!("Cannot filter rankings file {}", rankings.display()))?;

        write_players_csv(out_taken, &availability.taken)
            .with_context(|| format!("Failed to write {}", out_taken.display()))?;
        write_grid_csv(out_available, &availability.available)
            .with_context(|| format!("Failed to write {}", out_available.display()))?;

        println!("Roster players: {}", availability.roster_count);
        println!("Practice squad players: {}", availability.practice_count);
        println!("Combined unique taken: {}", availability.taken.len());
        println!("Total rankings rows: {}", availability.rankings_total);
        println!("Available players rows: {}", availability.available_total());
        println!("Wrote taken CSV: {}", out_taken.display());
        println!("Wrote available CSV: {}", out_available.display());
        Ok(())
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(log_level(cli.verbose))
        .with_writer(std::io::stderr)
        .init();

    let app = App::new(resolve_config_path(cli.config, default_config_path()));

    match cli.command {
        Commands::PracticeSquad {
            input,
            output,
            both,
        } => {
            if both {
                for dataset in &DATASETS {
                    app.practice_squad(Path::new(dataset.input), Path::new(dataset.practice_out))?;
                }
            } else {
                app.practice_squad(&input, &output)?;
            }
        }
        Commands::Roster {
            input,
            output,
            players_out,
            both,
        } => {
            let mut records = Vec::new();
            if both {
                for dataset in &DATASETS {
                    records.extend(app.roster(Path::new(dataset.input), Path::new(dataset.roster_out))?);
                }
            } else {
                records = app.roster(&input, &output)?;
            }
            write_players_csv(&players_out, records.iter().map(|r| r.player.as_str()))
                .with_context(|| format!("Failed to write {}", players_out.display()))?;
        }
        Commands::Team {
            name,
            input,
            practice_squad,
        } => {
            let players = app.team(&name, &input, practice_squad)?;
            if players.is_empty() {
                bail!("No players found for team '{name}' in {}", input.display());
            }
            for player in players {
                println!("{player}");
            }
        }
        Commands::Available {
            roster,
            practice,
            rankings,
            column,
            out_taken,
            out_available,
        } => {
            app.available(&roster, &practice, &rankings, &column, &out_taken, &out_available)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "roster_extract_{}_{:?}_{name}",
            std::process::id(),
            std::thread::current().id(),
        ));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    struct Cleanup(PathBuf);
    impl Drop for Cleanup {
        fn drop(&mut self) {
            let _ = std::fs::remove_dir_all(&self.0);
        }
    }

    const DIVISION: &str = "\
JP BREAKS,,,,,Keenan and Kelce,,
Count,Pos,Player,Contract,,Count,Pos,Player
1,QB,JJ McCarthy,2027,,1,QB,Caleb Williams
,,,,,,,
Practice Squad Stash,,,,,Practice Squad Stash,,
1,WR,Jermaine Burton,,,1,RB,Cam Skattebo
2,RB,Malachi Corley,,,2,WR,Jack Bech
,,,,,,,
";

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn verbosity_levels() {
        assert_eq!(log_level(0), Level::WARN);
        assert_eq!(log_level(1), Level::INFO);
        assert_eq!(log_level(5), Level::DEBUG);
    }

    #[test]
    fn explicit_config_wins() {
        let explicit = PathBuf::from("custom.toml");
        assert_eq!(
            resolve_config_path(Some(explicit.clone()), Some(PathBuf::from("/nonexistent/config.toml"))),
            Some(explicit)
        );
        assert_eq!(
            resolve_config_path(None, Some(PathBuf::from("/nonexistent/config.toml"))),
            None
        );
    }

    #[test]
    fn settings_file_overrides_preset() {
        let dir = temp_dir("settings");
        let _cleanup = Cleanup(dir.clone());
        let path = dir.join("config.toml");
        std::fs::write(&path, "max_per_team = 1\n").unwrap();

        let config = load_config(ExtractorConfig::practice_squad(), Some(&path)).unwrap();
        assert_eq!(config.limits.per_team, Some(1));

        std::fs::write(&path, "bogus = true\n").unwrap();
        assert!(load_config(ExtractorConfig::practice_squad(), Some(&path)).is_err());
    }

    #[test]
    fn practice_squad_writes_report() {
        let dir = temp_dir("practice");
        let _cleanup = Cleanup(dir.clone());
        let input = dir.join("division.csv");
        let output = dir.join("ps.csv");
        std::fs::write(&input, DIVISION).unwrap();

        let app = App::new(None);
        let records = app.practice_squad(&input, &output).unwrap();
        assert_eq!(records.len(), 4);

        let report = std::fs::read_to_string(&output).unwrap();
        assert_eq!(
            report,
            "Team,Position,Player\n\
             JP BREAKS,WR,Jermaine Burton\n\
             Keenan and Kelce,RB,Cam Skattebo\n\
             JP BREAKS,RB,Malachi Corley\n\
             Keenan and Kelce,WR,Jack Bech\n"
        );
    }

    #[test]
    fn failed_validation_writes_nothing() {
        let dir = temp_dir("invalid");
        let _cleanup = Cleanup(dir.clone());
        let input = dir.join("division.csv");
        let output = dir.join("ps.csv");
        let settings = dir.join("config.toml");
        std::fs::write(&input, DIVISION).unwrap();
        std::fs::write(&settings, "max_total = 3\n").unwrap();

        let app = App::new(Some(settings));
        assert!(app.practice_squad(&input, &output).is_err());
        assert!(!output.exists());
    }

    #[test]
    fn team_lookup_uses_roster_or_practice_squad() {
        let dir = temp_dir("team");
        let _cleanup = Cleanup(dir.clone());
        let input = dir.join("division.csv");
        std::fs::write(&input, DIVISION).unwrap();

        let app = App::new(None);
        assert_eq!(app.team("jp breaks", &input, false).unwrap(), vec!["JJ McCarthy"]);
        assert_eq!(
            app.team("KEENAN AND KELCE", &input, true).unwrap(),
            vec!["Cam Skattebo", "Jack Bech"]
        );
    }

    #[test]
    fn available_filters_rankings() {
        let dir = temp_dir("available");
        let _cleanup = Cleanup(dir.clone());
        let roster = dir.join("roster.csv");
        let practice = dir.join("practice.csv");
        let rankings = dir.join("rankings.csv");
        let taken = dir.join("taken.csv");
        let available = dir.join("available.csv");

        std::fs::write(&roster, "Player\nJJ McCarthy\n").unwrap();
        std::fs::write(&practice, "Team,Position,Player\nJP BREAKS,WR,Jermaine Burton\n").unwrap();
        std::fs::write(
            &rankings,
            "RK,PLAYER NAME,POS\n1,J.J. McCarthy,QB1\n2,Jermaine Burton,WR1\n3,Travis Hunter,WR2\n",
        )
        .unwrap();

        let app = App::new(None);
        app.available(&roster, &practice, &rankings, RANKINGS_PLAYER_COLUMN, &taken, &available)
            .unwrap();

        assert_eq!(
            std::fs::read_to_string(&taken).unwrap(),
            "Player\nJermaine Burton\nJJ McCarthy\n"
        );
        assert_eq!(
            std::fs::read_to_string(&available).unwrap(),
            "RK,PLAYER NAME,POS\n1,J.J. McCarthy,QB1\n3,Travis Hunter,WR2\n"
        );
    }
}
