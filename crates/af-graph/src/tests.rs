//! Unit tests for af-graph.
//!
//! All tests use hand-written graphs and inline text, no files.

#[cfg(test)]
mod helpers {
    use af_core::{Coord, RoomId};
    use crate::{RoomGraph, RoomGraphBuilder};

    /// Diamond: start → {a, b} → end.
    ///
    /// ```text
    ///        a
    ///      /   \
    /// start     end
    ///      \   /
    ///        b
    /// ```
    pub fn diamond() -> (RoomGraph, [RoomId; 4]) {
        let mut b = RoomGraphBuilder::new();
        let s = b.add_room("start", Coord::new(0, 0)).unwrap();
        let a = b.add_room("a", Coord::new(1, 0)).unwrap();
        let bb = b.add_room("b", Coord::new(1, 1)).unwrap();
        let e = b.add_room("end", Coord::new(2, 0)).unwrap();
        b.set_start(s).unwrap();
        b.set_end(e).unwrap();
        b.add_corridor(s, a).unwrap();
        b.add_corridor(s, bb).unwrap();
        b.add_corridor(a, e).unwrap();
        b.add_corridor(bb, e).unwrap();
        (b.build().unwrap(), [s, a, bb, e])
    }

    pub const DIAMOND_TEXT: &str = "\
3
##start
start 0 0
a 1 0
b 1 1
##end
end 2 0
start-a
start-b
a-end
b-end
";
}

// ── Builder & graph structure ─────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use af_core::{Coord, ErrorKind, RoomId};
    use crate::{GraphError, RoomGraphBuilder};

    fn two_rooms() -> (RoomGraphBuilder, RoomId, RoomId) {
        let mut b = RoomGraphBuilder::new();
        let s = b.add_room("s", Coord::new(0, 0)).unwrap();
        let e = b.add_room("e", Coord::new(0, 1)).unwrap();
        (b, s, e)
    }

    #[test]
    fn diamond_structure() {
        let (g, [s, a, b, e]) = super::helpers::diamond();
        assert_eq!(g.room_count(), 4);
        assert_eq!(g.corridor_count(), 4);
        assert_eq!(g.start(), s);
        assert_eq!(g.end(), e);
        assert_eq!(g.neighbors(s), &[a, b]);
        assert_eq!(g.neighbors(e), &[a, b]);
        assert_eq!(g.neighbors(a).len(), 2);
        assert!(g.has_corridor(a, s));
        assert!(!g.has_corridor(a, b));
        assert_eq!(g.room_id("b"), Some(b));
        assert_eq!(g.name(a), "a");
        assert_eq!(g.pos(b), Coord::new(1, 1));
    }

    #[test]
    fn neighbours_keep_corridor_order() {
        let mut b = RoomGraphBuilder::new();
        let hub = b.add_room("hub", Coord::default()).unwrap();
        let ids: Vec<_> = ["x", "y", "z"]
            .iter()
            .map(|n| b.add_room(*n, Coord::default()).unwrap())
            .collect();
        b.set_start(hub).unwrap();
        b.set_end(ids[0]).unwrap();
        b.add_corridor(ids[2], hub).unwrap();
        b.add_corridor(hub, ids[0]).unwrap();
        b.add_corridor(ids[1], hub).unwrap();
        let g = b.build().unwrap();
        assert_eq!(g.neighbors(hub), &[ids[2], ids[0], ids[1]]);
    }

    #[test]
    fn duplicate_corridor_collapsed() {
        let (mut b, s, e) = two_rooms();
        assert!(b.add_corridor(s, e).unwrap());
        assert!(!b.add_corridor(e, s).unwrap());
        assert!(!b.link("s", "e").unwrap());
        b.set_start(s).unwrap();
        b.set_end(e).unwrap();
        let g = b.build().unwrap();
        assert_eq!(g.corridor_count(), 1);
        assert_eq!(g.neighbors(s), &[e]);
        assert_eq!(g.neighbors(e), &[s]);
    }

    #[test]
    fn self_loop_rejected() {
        let (mut b, s, _) = two_rooms();
        let err = b.add_corridor(s, s).unwrap_err();
        assert!(matches!(err, GraphError::SelfLoop(ref n) if n == "s"));
        assert_eq!(err.kind(), ErrorKind::InvalidTopology);
    }

    #[test]
    fn duplicate_room_rejected() {
        let (mut b, _, _) = two_rooms();
        let err = b.add_room("s", Coord::new(5, 5)).unwrap_err();
        assert!(matches!(err, GraphError::DuplicateRoom(_)));
        assert_eq!(err.kind(), ErrorKind::InvalidTopology);
    }

    #[test]
    fn unknown_room_rejected() {
        let (mut b, s, _) = two_rooms();
        assert!(matches!(b.link("s", "nowhere"), Err(GraphError::UnknownRoom(_))));
        assert!(matches!(
            b.add_corridor(s, RoomId(99)),
            Err(GraphError::UnknownRoomId(RoomId(99)))
        ));
    }

    #[test]
    fn invalid_names_rejected() {
        let mut b = RoomGraphBuilder::new();
        for bad in ["", "L1", "#x", "a-b", "two words"] {
            let err = b.add_room(bad, Coord::default()).unwrap_err();
            assert!(matches!(err, GraphError::InvalidRoomName(_)), "{bad:?}");
            assert_eq!(err.kind(), ErrorKind::Input);
        }
    }

    #[test]
    fn missing_endpoints() {
        let (b, _, _) = two_rooms();
        assert!(matches!(b.build(), Err(GraphError::MissingStart)));

        let (mut b, s, _) = two_rooms();
        b.set_start(s).unwrap();
        assert!(matches!(b.build(), Err(GraphError::MissingEnd)));
    }

    #[test]
    fn endpoints_designated_twice() {
        let (mut b, s, e) = two_rooms();
        b.set_start(s).unwrap();
        assert!(matches!(b.set_start(e), Err(GraphError::DuplicateStart)));
        b.set_end(e).unwrap();
        assert!(matches!(b.set_end(s), Err(GraphError::DuplicateEnd)));
    }

    #[test]
    fn start_equal_to_end_rejected() {
        let (mut b, s, _) = two_rooms();
        b.set_start(s).unwrap();
        b.set_end(s).unwrap();
        let err = b.build().unwrap_err();
        assert!(matches!(err, GraphError::StartIsEnd(_)));
        assert_eq!(err.kind(), ErrorKind::InvalidTopology);
    }

    #[test]
    fn isolated_rooms_allowed() {
        let (mut b, s, e) = two_rooms();
        b.set_start(s).unwrap();
        b.set_end(e).unwrap();
        let g = b.build().unwrap();
        assert_eq!(g.corridor_count(), 0);
        assert!(g.neighbors(s).is_empty());
    }
}

// ── Text loader ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use af_core::{Coord, ErrorKind};
    use crate::{GraphError, load_colony_reader, parse_colony};

    fn line_of(err: &GraphError) -> Option<usize> {
        match err {
            GraphError::Parse { line, .. } | GraphError::AtLine { line, .. } => Some(*line),
            _ => None,
        }
    }

    #[test]
    fn parses_diamond() {
        let colony = parse_colony(super::helpers::DIAMOND_TEXT).unwrap();
        assert_eq!(colony.ant_count, 3);
        let g = &colony.graph;
        assert_eq!(g.room_count(), 4);
        assert_eq!(g.corridor_count(), 4);
        assert_eq!(g.name(g.start()), "start");
        assert_eq!(g.name(g.end()), "end");
        assert_eq!(g.pos(g.room_id("b").unwrap()), Coord::new(1, 1));
    }

    #[test]
    fn reader_matches_str() {
        let a = parse_colony(super::helpers::DIAMOND_TEXT).unwrap();
        let b = load_colony_reader(Cursor::new(super::helpers::DIAMOND_TEXT)).unwrap();
        assert_eq!(a.ant_count, b.ant_count);
        assert_eq!(a.graph.corridors(), b.graph.corridors());
    }

    #[test]
    fn comments_and_unknown_commands_skipped() {
        let text = "# header\n2\n#comment\n##start\ns 0 0\n##colour red\n##end\ne 1 1\n# links\ns-e\r\n";
        let colony = parse_colony(text).unwrap();
        assert_eq!(colony.ant_count, 2);
        assert_eq!(colony.graph.corridor_count(), 1);
    }

    #[test]
    fn invalid_ant_count() {
        for text in ["0\n", "-3\n", "many\n", "##start\n"] {
            let err = parse_colony(text).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Input, "{text:?}");
            assert_eq!(line_of(&err), Some(1));
        }
    }

    #[test]
    fn empty_input() {
        let err = parse_colony("").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Input);
    }

    #[test]
    fn malformed_room_line() {
        let err = parse_colony("1\n##start\ns 0\n").unwrap_err();
        assert_eq!(line_of(&err), Some(3));
        let err = parse_colony("1\n##start\ns x 0\n").unwrap_err();
        assert_eq!(line_of(&err), Some(3));
    }

    #[test]
    fn l_prefixed_room_name() {
        let err = parse_colony("1\nLobby 0 0\n").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Input);
        assert_eq!(line_of(&err), Some(2));
    }

    #[test]
    fn duplicate_room_reports_line() {
        let err = parse_colony("1\n##start\ns 0 0\n##end\ne 1 1\ns 2 2\n").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidTopology);
        assert_eq!(line_of(&err), Some(6));
    }

    #[test]
    fn unknown_room_in_link() {
        let err = parse_colony("1\n##start\ns 0 0\n##end\ne 1 1\ns-x\n").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidTopology);
        assert_eq!(line_of(&err), Some(6));
    }

    #[test]
    fn self_loop_link() {
        let err = parse_colony("1\n##start\ns 0 0\n##end\ne 1 1\ns-s\n").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidTopology);
    }

    #[test]
    fn malformed_link() {
        let err = parse_colony("1\n##start\ns 0 0\n##end\ne 1 1\ns-e-s\n").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Input);
        assert_eq!(line_of(&err), Some(6));
    }

    #[test]
    fn room_after_links_rejected() {
        let err = parse_colony("1\n##start\ns 0 0\n##end\ne 1 1\ns-e\nx 3 3\n").unwrap_err();
        assert_eq!(line_of(&err), Some(7));
    }

    #[test]
    fn missing_end() {
        let err = parse_colony("1\n##start\ns 0 0\ne 1 1\ns-e\n").unwrap_err();
        assert!(matches!(err, GraphError::MissingEnd));
        assert_eq!(err.kind(), ErrorKind::InvalidTopology);
    }

    #[test]
    fn dangling_command() {
        let err = parse_colony("1\n##start\ns 0 0\ne 1 1\n##end\n").unwrap_err();
        assert_eq!(line_of(&err), Some(5));
        let err = parse_colony("1\n##start\ns 0 0\n##end\ns-e\n").unwrap_err();
        assert_eq!(line_of(&err), Some(4));
    }

    #[test]
    fn consecutive_commands_rejected() {
        let err = parse_colony("1\n##start\n##end\ns 0 0\n").unwrap_err();
        assert_eq!(line_of(&err), Some(3));
    }

    #[test]
    fn start_designated_twice() {
        let err = parse_colony("1\n##start\ns 0 0\n##start\nt 1 1\n").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidTopology);
        assert_eq!(line_of(&err), Some(5));
    }
}
