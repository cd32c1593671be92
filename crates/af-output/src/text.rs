//! lem-in text rendering: input echo, move lines, path listings.

use std::io::Write;

use af_core::RoomId;
use af_flow::RoomPath;
use af_graph::{Colony, RoomGraph};

use crate::writer::OutputWriter;
use crate::{MoveRow, OutputResult, RoundRow};

/// Echo `colony` in input format: ant count, rooms in declaration order
/// (with `##start`/`##end` ahead of the marked rooms), then each corridor
/// once as `a-b`.
///
/// Corridors list the earlier-declared room first and are ordered by that
/// room, then by link order.
pub fn write_colony<W: Write>(out: &mut W, colony: &Colony) -> std::io::Result<()> {
    let g = &colony.graph;
    writeln!(out, "{}", colony.ant_count)?;
    for room in g.rooms() {
        if room == g.start() {
            writeln!(out, "##start")?;
        } else if room == g.end() {
            writeln!(out, "##end")?;
        }
        writeln!(out, "{} {}", g.name(room), g.pos(room))?;
    }
    for (a, b) in echo_links(g) {
        writeln!(out, "{}-{}", g.name(a), g.name(b))?;
    }
    Ok(())
}

fn echo_links(g: &RoomGraph) -> Vec<(RoomId, RoomId)> {
    let mut links: Vec<(RoomId, RoomId)> = g
        .corridors()
        .iter()
        .map(|&(a, b)| if a < b { (a, b) } else { (b, a) })
        .collect();
    links.sort_by_key(|&(first, _)| first);
    links
}

/// `L<ant>-<room>` entries joined by single spaces.
pub fn format_moves(rows: &[MoveRow<'_>]) -> String {
    let mut line = String::new();
    for (i, row) in rows.iter().enumerate() {
        if i > 0 {
            line.push(' ');
        }
        line.push_str(&format!("L{}-{}", row.ant, row.room));
    }
    line
}

/// `# path <index>: <room> <room> …`, a comment line in input syntax.
pub fn format_path(index: usize, path: &RoomPath, graph: &RoomGraph) -> String {
    format!("# path {index}: {}", path.names(graph).join(" "))
}

/// Writes one move line per round to any `Write`.
pub struct TextWriter<W: Write> {
    out:      W,
    finished: bool,
}

impl<W: Write> TextWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out, finished: false }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> OutputWriter for TextWriter<W> {
    fn write_moves(&mut self, rows: &[MoveRow<'_>]) -> OutputResult<()> {
        if !rows.is_empty() {
            writeln!(self.out, "{}", format_moves(rows))?;
        }
        Ok(())
    }

    fn write_round_summary(&mut self, _row: &RoundRow) -> OutputResult<()> {
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if !self.finished {
            self.finished = true;
            self.out.flush()?;
        }
        Ok(())
    }
}
