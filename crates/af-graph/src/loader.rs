//! lem-in text loader.
//!
//! # Format
//!
//! ```text
//! 3            ← ant count (first non-comment line, positive integer)
//! ##start      ← the next room line is the start room
//! start 0 0    ← room: name x y
//! a 1 0
//! ##end
//! end 2 0
//! start-a      ← first "a-b" line opens the link section
//! a-end
//! ```
//!
//! Lines starting with a single `#` are comments.  `##start` and `##end`
//! are the only commands; any other `##…` line is ignored with a warning.
//! After the first link, room lines are rejected.
//!
//! Errors carry the 1-based line number of the offending line.

use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use af_core::Coord;

use crate::{GraphError, GraphResult, RoomGraph, RoomGraphBuilder};

/// A parsed input: the colony size and its room graph.
#[derive(Debug, Clone)]
pub struct Colony {
    pub ant_count: u32,
    pub graph:     RoomGraph,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a colony from a file.
pub fn load_colony(path: &Path) -> GraphResult<Colony> {
    let file = std::fs::File::open(path)?;
    load_colony_reader(file)
}

/// Like [`load_colony`] but accepts any `Read` source.
pub fn load_colony_reader<R: Read>(reader: R) -> GraphResult<Colony> {
    let mut parser = Parser::default();
    for (i, line) in BufReader::new(reader).lines().enumerate() {
        parser.feed(i + 1, &line?)?;
    }
    parser.finish()
}

/// Parse a colony held in memory.
pub fn parse_colony(text: &str) -> GraphResult<Colony> {
    let mut parser = Parser::default();
    for (i, line) in text.lines().enumerate() {
        parser.feed(i + 1, line)?;
    }
    parser.finish()
}

// ── Line parser ───────────────────────────────────────────────────────────────

#[derive(Copy, Clone, PartialEq, Eq, Default)]
enum Section {
    #[default]
    Ants,
    Rooms,
    Links,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
enum Marker {
    Start,
    End,
}

#[derive(Default)]
struct Parser {
    section:   Section,
    ant_count: u32,
    pending:   Option<(Marker, usize)>,
    builder:   RoomGraphBuilder,
    last_line: usize,
}

impl Parser {
    fn feed(&mut self, line_no: usize, raw: &str) -> GraphResult<()> {
        self.last_line = line_no;
        let line = raw.trim_end_matches('\r');

        if line.starts_with('#') {
            return self.command(line_no, line);
        }

        match self.section {
            Section::Ants => {
                self.ant_count = match line.trim().parse::<u32>() {
                    Ok(n) if n > 0 => n,
                    _ => return Err(parse_err(line_no, format!("invalid ant count {line:?}"))),
                };
                self.section = Section::Rooms;
                Ok(())
            }
            Section::Rooms if !looks_like_link(line) => self.room(line_no, line),
            Section::Rooms | Section::Links => {
                if let Some((_, cmd_line)) = self.pending {
                    return Err(parse_err(
                        cmd_line,
                        "start/end command is not followed by a room".into(),
                    ));
                }
                self.section = Section::Links;
                self.link(line_no, line)
            }
        }
    }

    fn command(&mut self, line_no: usize, line: &str) -> GraphResult<()> {
        let marker = match line {
            "##start" => Marker::Start,
            "##end"   => Marker::End,
            _ => {
                if line.starts_with("##") {
                    log::warn!("line {line_no}: ignoring unknown command {line:?}");
                }
                return Ok(());
            }
        };
        if self.section == Section::Ants {
            return Err(parse_err(line_no, "command appears before the ant count".into()));
        }
        if self.section == Section::Links {
            return Err(parse_err(line_no, "command appears after the link section began".into()));
        }
        if self.pending.is_some() {
            return Err(parse_err(line_no, "consecutive start/end commands".into()));
        }
        self.pending = Some((marker, line_no));
        Ok(())
    }

    fn room(&mut self, line_no: usize, line: &str) -> GraphResult<()> {
        let fields: Vec<&str> = line.split_whitespace().collect();
        let [name, x, y] = fields.as_slice() else {
            return Err(parse_err(line_no, format!("expected \"name x y\", got {line:?}")));
        };
        let (Ok(x), Ok(y)) = (x.parse::<i64>(), y.parse::<i64>()) else {
            return Err(parse_err(line_no, format!("invalid coordinates in {line:?}")));
        };

        let id = self
            .builder
            .add_room(*name, Coord::new(x, y))
            .map_err(|e| e.at_line(line_no))?;

        let marked = match self.pending.take() {
            Some((Marker::Start, _)) => self.builder.set_start(id),
            Some((Marker::End, _))   => self.builder.set_end(id),
            None                     => Ok(()),
        };
        marked.map_err(|e| e.at_line(line_no))
    }

    fn link(&mut self, line_no: usize, line: &str) -> GraphResult<()> {
        let parts: Vec<&str> = line.split('-').collect();
        let [a, b] = parts.as_slice() else {
            return Err(parse_err(line_no, format!("expected \"room-room\", got {line:?}")));
        };
        if !self.builder.link(a, b).map_err(|e| e.at_line(line_no))? {
            log::debug!("line {line_no}: duplicate corridor {a}-{b} collapsed");
        }
        Ok(())
    }

    fn finish(self) -> GraphResult<Colony> {
        if self.section == Section::Ants {
            return Err(parse_err(self.last_line.max(1), "missing ant count".into()));
        }
        if let Some((_, cmd_line)) = self.pending {
            return Err(parse_err(cmd_line, "start/end command is not followed by a room".into()));
        }
        let graph = self.builder.build()?;
        Ok(Colony { ant_count: self.ant_count, graph })
    }
}

/// A link line is a single token containing `-`; room lines have spaces, so
/// negative coordinates do not end the room section.
fn looks_like_link(line: &str) -> bool {
    line.contains('-') && !line.contains(char::is_whitespace)
}

fn parse_err(line: usize, reason: String) -> GraphError {
    GraphError::Parse { line, reason }
}
