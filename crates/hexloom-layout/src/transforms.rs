//! The ordered chain of coordinate relabellings.
//!
//! Stages appear in pipeline order. Each is a pure function from one
//! [`Placement`] to the next; none of them consults or modifies the wire
//! graph, so adjacency is invariant across the whole chain.

use hexloom_topology::{HexCoord, Torus};

use crate::cabinet::CabinetSystem;
use crate::config::CompressAxis;
use crate::coordinates::{CabinetCoord, GridCoord, Vec3};
use crate::error::{Error, Result};
use crate::placement::Placement;

/// The canonical axial coordinates, the pipeline's starting placement.
pub fn hex_placement(torus: &Torus) -> Placement<HexCoord> {
    Placement::new(torus.boards().map(|b| torus.hex_coord(b)).collect())
}

/// Axial to skewed Cartesian: `(q, r) -> (q, 2r - q)`.
///
/// A linear map, so every wire direction keeps one constant grid vector:
/// East `(1, -1)`, North `(0, 2)`, NorthEast `(1, 1)`. The doubled y axis
/// carries the wobble: `x + y` is even for every board.
pub fn hex_to_cartesian(hex: &Placement<HexCoord>) -> Placement<GridCoord> {
    hex.map(|_, c| GridCoord::new(c.q, 2 * c.r - c.q))
}

/// Exact inverse of [`hex_to_cartesian`].
pub fn cartesian_to_hex(coord: GridCoord) -> HexCoord {
    HexCoord::new(coord.x, (coord.x + coord.y) / 2)
}

/// Slide the overhanging edge of the rhombus back across the seam.
///
/// `(2 * width, 0)` is a torus lattice vector in Cartesian space, so
/// reducing x modulo the full grid width is a relabelling of the same torus:
/// the result is a bijection onto the even-parity cells of
/// `[0, 2*width) x [0, 3*height)`.
pub fn rhombus_to_rect(cart: &Placement<GridCoord>, torus: &Torus) -> Placement<GridCoord> {
    let grid_width = 2 * torus.width() as i64;
    cart.map(|_, c| GridCoord::new(c.x.rem_euclid(grid_width), c.y))
}

/// Remove the wobble by halving one axis.
///
/// Injective for any input because the halved coordinate's parity is pinned
/// to the other axis; the result only fills a rectangle when the relevant
/// extent is even, which pipeline validation checks up front.
pub fn compress(rect: &Placement<GridCoord>, axis: CompressAxis) -> Placement<GridCoord> {
    match axis {
        CompressAxis::Rows => rect.map(|_, c| GridCoord::new(c.x, c.y.div_euclid(2))),
        CompressAxis::Columns => rect.map(|_, c| GridCoord::new(c.x.div_euclid(2), c.y)),
    }
}

/// Extent of a grid placement: `(max x + 1, max y + 1)`.
pub fn grid_extent(placement: &Placement<GridCoord>) -> (i64, i64) {
    let mut width = 0;
    let mut height = 0;
    for (_, c) in placement.iter() {
        width = width.max(c.x + 1);
        height = height.max(c.y + 1);
    }
    (width, height)
}

/// Open up a one-cell gap at every fold boundary.
///
/// Diagram-only: shows where [`fold`] will crease the sheet. The result is
/// never fed into later stages.
pub fn space_folds(
    comp: &Placement<GridCoord>,
    folds: (u32, u32),
) -> Result<Placement<GridCoord>> {
    let (width, height) = grid_extent(comp);
    let piece_x = piece_extent("x", width, folds.0)?;
    let piece_y = piece_extent("y", height, folds.1)?;
    Ok(comp.map(|_, c| GridCoord::new(c.x + c.x / piece_x, c.y + c.y / piece_y)))
}

/// Accordion-fold the sheet and interleave the layers.
///
/// Each axis is cut into `folds` equal pieces; odd-numbered pieces are
/// reversed (the accordion) and the pieces are interleaved onto the reduced
/// range. Boards adjacent before folding end up at most `2 * folds` cells
/// apart afterwards, which is what keeps the final cabling short.
pub fn fold(comp: &Placement<GridCoord>, folds: (u32, u32)) -> Result<Placement<GridCoord>> {
    let (width, height) = grid_extent(comp);
    let piece_x = piece_extent("x", width, folds.0)?;
    let piece_y = piece_extent("y", height, folds.1)?;
    Ok(comp.map(|_, c| {
        GridCoord::new(
            fold_interleave(c.x, piece_x, folds.0 as i64),
            fold_interleave(c.y, piece_y, folds.1 as i64),
        )
    }))
}

/// Cut the folded grid into cabinets of racks of slots.
///
/// Cabinets split the x axis, racks split the y axis, and the rows of each
/// rack's block are interleaved into slot numbers. Fails unless the grid
/// divides exactly and the machine fills the cabinets completely.
pub fn cabinetise(
    folded: &Placement<GridCoord>,
    system: &CabinetSystem,
) -> Result<Placement<CabinetCoord>> {
    let (width, height) = grid_extent(folded);
    let num_cabinets = system.num_cabinets;
    let num_racks = system.cabinet.num_racks;
    let num_slots = system.cabinet.rack.num_slots;

    if num_cabinets == 0 || width % num_cabinets as i64 != 0 {
        return Err(Error::UnevenCabinetCut {
            what: "cabinets",
            parts: num_cabinets,
            extent: width,
        });
    }
    if num_racks == 0 || height % num_racks as i64 != 0 {
        return Err(Error::UnevenCabinetCut {
            what: "racks",
            parts: num_racks,
            extent: height,
        });
    }
    let cols_per_cabinet = width / num_cabinets as i64;
    let rows_per_rack = height / num_racks as i64;
    if folded.len() != system.capacity()
        || cols_per_cabinet * rows_per_rack != num_slots as i64
    {
        return Err(Error::CabinetCapacityMismatch {
            boards: folded.len(),
            cabinets: num_cabinets,
            racks: num_racks,
            slots: num_slots,
        });
    }

    Ok(folded.map(|_, c| {
        CabinetCoord::new(
            (c.x / cols_per_cabinet) as u32,
            (c.y / rows_per_rack) as u32,
            ((c.y % rows_per_rack) * cols_per_cabinet + c.x % cols_per_cabinet) as u32,
        )
    }))
}

/// Place every slot in physical space.
pub fn cabinet_to_physical(
    cabinet: &Placement<CabinetCoord>,
    system: &CabinetSystem,
) -> Placement<Vec3> {
    cabinet.map(|_, &c| system.position(c))
}

/// Length of one fold piece, or the divisibility error.
fn piece_extent(axis: &'static str, extent: i64, folds: u32) -> Result<i64> {
    if folds == 0 || extent % folds as i64 != 0 {
        return Err(Error::UnevenFold {
            axis,
            folds,
            extent,
        });
    }
    Ok(extent / folds as i64)
}

/// Fold one coordinate into `piece`-sized layers and interleave the layers.
fn fold_interleave(v: i64, piece: i64, folds: i64) -> i64 {
    let layer = v / piece;
    let pos = v % piece;
    let pos = if layer % 2 == 1 { piece - pos - 1 } else { pos };
    pos * folds + layer
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cabinet::tests::test_system;
    use hexloom_topology::Direction;
    use proptest::prelude::*;

    fn compressed_2x2() -> Placement<GridCoord> {
        let torus = Torus::new(2, 2).unwrap();
        let cart = hex_to_cartesian(&hex_placement(&torus));
        let rect = rhombus_to_rect(&cart, &torus);
        compress(&rect, CompressAxis::Rows)
    }

    #[test]
    fn cartesian_round_trip_on_2x2() {
        let torus = Torus::new(2, 2).unwrap();
        let hex = hex_placement(&torus);
        let cart = hex_to_cartesian(&hex);
        assert_eq!(hex.len(), 12);
        for (board, &coord) in cart.iter() {
            assert_eq!(cartesian_to_hex(coord), *hex.coord(board));
        }
    }

    #[test]
    fn cartesian_direction_vectors_are_constant() {
        let torus = Torus::new(3, 3).unwrap();
        let hex = hex_placement(&torus);
        let cart = hex_to_cartesian(&hex);
        let expected = |d: Direction| match d {
            Direction::East => (1, -1),
            Direction::NorthEast => (1, 1),
            Direction::North => (0, 2),
            Direction::West => (-1, 1),
            Direction::SouthWest => (-1, -1),
            Direction::South => (0, -2),
        };
        for (board, &coord) in hex.iter() {
            let here = cart.coord(board);
            for d in Direction::ALL {
                let stepped = coord.step(d);
                let next = GridCoord::new(stepped.q, 2 * stepped.r - stepped.q);
                assert_eq!((next.x - here.x, next.y - here.y), expected(d));
            }
        }
    }

    #[test]
    fn rectangle_is_bijective_with_even_parity() {
        let torus = Torus::new(2, 2).unwrap();
        let cart = hex_to_cartesian(&hex_placement(&torus));
        let rect = rhombus_to_rect(&cart, &torus);
        assert!(rect.is_bijective());
        for (_, c) in rect.iter() {
            assert!((0..4).contains(&c.x));
            assert!((0..6).contains(&c.y));
            assert_eq!((c.x + c.y) % 2, 0);
        }
    }

    #[test]
    fn compression_fills_the_rectangle() {
        let comp = compressed_2x2();
        assert!(comp.is_bijective());
        assert_eq!(grid_extent(&comp), (4, 3));
        // Every cell of the 4x3 rectangle is used.
        for x in 0..4 {
            for y in 0..3 {
                assert!(comp.board_at(&GridCoord::new(x, y)).is_some());
            }
        }
    }

    #[test]
    fn column_compression_fills_the_rectangle() {
        let torus = Torus::new(2, 2).unwrap();
        let cart = hex_to_cartesian(&hex_placement(&torus));
        let rect = rhombus_to_rect(&cart, &torus);
        let comp = compress(&rect, CompressAxis::Columns);
        assert!(comp.is_bijective());
        assert_eq!(grid_extent(&comp), (2, 6));
    }

    #[test]
    fn fold_preserves_count_and_bijectivity() {
        let comp = compressed_2x2();
        let folded = fold(&comp, (2, 1)).unwrap();
        assert_eq!(folded.len(), 12);
        assert!(folded.is_bijective());
        assert_eq!(grid_extent(&folded), (4, 3));
    }

    #[test]
    fn fold_keeps_neighbours_close() {
        let comp = compressed_2x2();
        let folded = fold(&comp, (2, 1)).unwrap();
        for (board, c) in comp.iter() {
            if let Some(right) = comp.board_at(&GridCoord::new(c.x + 1, c.y)) {
                let a = folded.coord(board);
                let b = folded.coord(right);
                assert!((a.x - b.x).abs() <= 4, "{a} vs {b}");
            }
        }
    }

    #[test]
    fn fold_rejects_uneven_counts() {
        let comp = compressed_2x2();
        let err = fold(&comp, (3, 1)).unwrap_err();
        assert_eq!(
            err,
            Error::UnevenFold {
                axis: "x",
                folds: 3,
                extent: 4
            }
        );
    }

    #[test]
    fn spaced_folds_open_gaps() {
        let comp = compressed_2x2();
        let spaced = space_folds(&comp, (2, 1)).unwrap();
        // Columns 0,1 stay put; columns 2,3 move right by one.
        let xs: Vec<i64> = (0..4)
            .map(|x| {
                let board = comp.board_at(&GridCoord::new(x, 0)).unwrap();
                spaced.coord(board).x
            })
            .collect();
        assert_eq!(xs, vec![0, 1, 3, 4]);
    }

    #[test]
    fn cabinetise_single_rack_covers_all_slots() {
        let comp = compressed_2x2();
        let system = test_system(1, 1, 12);
        let cabinets = cabinetise(&comp, &system).unwrap();
        assert!(cabinets.is_bijective());
        let mut slots: Vec<u32> = cabinets.iter().map(|(_, c)| c.slot).collect();
        slots.sort_unstable();
        assert_eq!(slots, (0..12).collect::<Vec<_>>());
        for (_, c) in cabinets.iter() {
            assert_eq!(c.cabinet, 0);
            assert_eq!(c.rack, 0);
        }
    }

    #[test]
    fn cabinetise_rejects_capacity_mismatch() {
        let comp = compressed_2x2();
        let system = test_system(1, 1, 24);
        // 4 columns / 1 cabinet, 3 rows / 1 rack => 12 slots, not 24.
        assert!(matches!(
            cabinetise(&comp, &system),
            Err(Error::CabinetCapacityMismatch { .. })
        ));
    }

    #[test]
    fn cabinetise_rejects_uneven_cut() {
        let comp = compressed_2x2();
        let system = test_system(3, 1, 4);
        assert!(matches!(
            cabinetise(&comp, &system),
            Err(Error::UnevenCabinetCut { what: "cabinets", .. })
        ));
    }

    #[test]
    fn physical_positions_are_bijective_for_distinct_slots() {
        let comp = compressed_2x2();
        let system = test_system(1, 1, 12);
        let cabinets = cabinetise(&comp, &system).unwrap();
        let physical = cabinet_to_physical(&cabinets, &system);
        let mut xs: Vec<f64> = physical.iter().map(|(_, p)| p.x).collect();
        xs.sort_by(f64::total_cmp);
        xs.dedup();
        assert_eq!(xs.len(), 12);
    }

    proptest! {
        #[test]
        fn folding_is_a_bijection_whenever_counts_divide(
            width in 1u32..5,
            height in 1u32..5,
            folds_x in 1u32..5,
            folds_y in 1u32..5,
        ) {
            let torus = Torus::new(width, height).unwrap();
            let cart = hex_to_cartesian(&hex_placement(&torus));
            let rect = rhombus_to_rect(&cart, &torus);
            let comp = compress(&rect, CompressAxis::Columns);
            let (w, h) = grid_extent(&comp);
            prop_assume!(w % folds_x as i64 == 0 && h % folds_y as i64 == 0);
            let folded = fold(&comp, (folds_x, folds_y)).unwrap();
            prop_assert_eq!(folded.len(), 3 * (width * height) as usize);
            prop_assert!(folded.is_bijective());
            prop_assert_eq!(grid_extent(&folded), (w, h));
        }
    }
}
