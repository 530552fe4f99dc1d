use std::{fs::File, io, path::Path};

use color_eyre::{eyre::WrapErr, Result};
use log::info;
use serde::Serialize;

use super::{contest::Standing, Tournament};

/// One flat CSV row per round.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct RoundRow<'a> {
    pub round:             u32,
    pub winner:            &'a str,
    pub snake1_score:      u32,
    pub snake2_score:      u32,
    pub snake1_traps_hit:  u32,
    pub snake2_traps_hit:  u32,
    pub snake1_collisions: u32,
    pub snake2_collisions: u32,
    pub time_remaining:    f64,
    pub is_draw:           bool,
    pub is_crash:          bool,
    pub total_snake1:      u32,
    pub total_snake2:      u32,
}

/// Flattens a tournament's rounds, carrying the running score totals.
#[must_use]
pub fn round_rows(tournament: &Tournament) -> Vec<RoundRow<'_>> {
    let names = tournament.names();
    let mut totals = [0, 0];
    tournament
        .records()
        .iter()
        .map(|record| {
            totals[0] += record.scores[0];
            totals[1] += record.scores[1];
            RoundRow {
                round:             record.round,
                winner:            record
                    .winner
                    .map_or("", |seat| names[seat].as_str()),
                snake1_score:      record.scores[0],
                snake2_score:      record.scores[1],
                snake1_traps_hit:  record.traps_hit[0],
                snake2_traps_hit:  record.traps_hit[1],
                snake1_collisions: record.collisions[0],
                snake2_collisions: record.collisions[1],
                time_remaining:    record.time_remaining,
                is_draw:           record.is_draw(),
                is_crash:          record.is_crash(),
                total_snake1:      totals[0],
                total_snake2:      totals[1],
            }
        })
        .collect()
}

fn write_csv<T: Serialize>(
    writer: impl io::Write,
    rows: impl IntoIterator<Item = T>,
) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    for row in rows {
        csv.serialize(row)?;
    }
    csv.flush()?;
    Ok(())
}

/// # Errors
///
/// Fails if the writer does.
pub fn write_rounds(
    tournament: &Tournament,
    writer: impl io::Write,
) -> Result<()> {
    write_csv(writer, round_rows(tournament))
}

/// # Errors
///
/// Fails if the file can't be created or written.
pub fn save_rounds(
    tournament: &Tournament,
    path: impl AsRef<Path>,
) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)
        .wrap_err_with(|| format!("creating {}", path.display()))?;
    write_rounds(tournament, file)?;
    info!("tournament results saved to {}", path.display());
    Ok(())
}

/// # Errors
///
/// Fails if the writer does.
pub fn write_leaderboard(
    standings: &[Standing],
    writer: impl io::Write,
) -> Result<()> {
    write_csv(writer, standings)
}

/// # Errors
///
/// Fails if the file can't be created or written.
pub fn save_leaderboard(
    standings: &[Standing],
    path: impl AsRef<Path>,
) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)
        .wrap_err_with(|| format!("creating {}", path.display()))?;
    write_leaderboard(standings, file)?;
    info!("contest results saved to {}", path.display());
    Ok(())
}
