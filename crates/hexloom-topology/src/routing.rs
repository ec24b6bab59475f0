//! Wire-following and packet-routing traversals.
//!
//! A wiring loop is the cycle obtained by repeatedly leaving every board on
//! the same side: the single-direction graph is a disjoint union of simple
//! cycles, so the walk always returns to its start within the board count.
//!
//! A packet loop is the path of through-routed traffic. The router inside a
//! board re-emits a packet on a side determined only by the side it came in
//! through and the packet's heading, per a fixed substitution table over the
//! six directions ([`packet_exit_side`]). The table is a property of the
//! board hardware and is reproduced here verbatim rather than derived.

use crate::{BoardId, Direction, Torus};

/// Chips traversed per board crossed by a through-routed packet.
///
/// Hardware conversion constant, supplied by the platform description: it is
/// not derivable from the board graph.
pub const CHIPS_PER_BOARD_CROSSED: usize = 4;

/// The side a through-going packet is re-emitted on.
///
/// Entries exist only for the side/heading combinations the router can
/// actually see; a packet heading North, for instance, only ever arrives
/// through the East or South sides. The table is closed: every exit side's
/// opposite is a valid entry side for the same heading.
pub fn packet_exit_side(entry: Direction, heading: Direction) -> Option<Direction> {
    use Direction::*;
    Some(match (entry, heading) {
        (SouthWest, East) => East,
        (West, East) => NorthEast,

        (East, North) => North,
        (South, North) => West,

        (North, SouthWest) => SouthWest,
        (NorthEast, SouthWest) => South,

        // Mirror images of the three principal headings.
        (NorthEast, West) => West,
        (East, West) => SouthWest,

        (West, South) => South,
        (North, South) => East,

        (South, NorthEast) => NorthEast,
        (SouthWest, NorthEast) => North,

        _ => return None,
    })
}

/// Boards visited by following wires in one fixed direction until the start
/// board recurs. The start board is the first element and is not repeated.
pub fn wiring_loop(torus: &Torus, start: BoardId, direction: Direction) -> Vec<BoardId> {
    let mut loop_boards = vec![start];
    let mut current = torus.follow_wire(start, direction);
    while current != start {
        loop_boards.push(current);
        current = torus.follow_wire(current, direction);
    }
    loop_boards
}

/// `(entry side, board)` pairs visited by a packet that entered `start`
/// through `entry` while travelling in `heading`, until the start board
/// recurs.
///
/// Returns `None` when `entry` is not a side the router accepts for this
/// heading; after a valid first hop the table's closure keeps every
/// subsequent hop valid.
pub fn packet_loop(
    torus: &Torus,
    start: BoardId,
    entry: Direction,
    heading: Direction,
) -> Option<Vec<(Direction, BoardId)>> {
    let mut hops = vec![(entry, start)];
    let (mut side, mut current) = torus.follow_packet(start, entry, heading)?;
    while current != start {
        hops.push((side, current));
        (side, current) = torus.follow_packet(current, side, heading)?;
    }
    Some(hops)
}

/// Chips crossed by a packet loop with the given number of hops.
///
/// Each pair of loop hops crosses three boards of a triad, and each board
/// crossed contributes [`CHIPS_PER_BOARD_CROSSED`] chips to the path.
pub fn packet_loop_chips(hops: usize) -> usize {
    ((hops * 3) / 2) * CHIPS_PER_BOARD_CROSSED
}
